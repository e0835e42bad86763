//! Central place for all layout and configuration defaults.
//! Update these and the whole app picks them up.

pub struct Defaults;

impl Defaults {
    pub const TITLE: &'static str = "📦 Select 3Lens Examples";

    /* Screen chrome: title + margin (2) and scroll info + help + selection count (3) */
    pub const RESERVED_ROWS: u16 = 5;
    /// Blank line between the last item and the footer; only the renderer draws it.
    pub const FOOTER_GAP_ROWS: u16 = 1;

    /* "> [ ] 99. " */
    pub const PREFIX_WIDTH: usize = 10;
    pub const MIN_CONTENT_WIDTH: usize = 40;
    pub const FALLBACK_WIDTH: usize = 80;
    /// Descriptions are only shown inline when more than this many columns remain.
    pub const MIN_DESCRIPTION_WIDTH: usize = 20;

    /* Viewport heuristic: roughly two item rows for every three screen rows */
    pub const ROWS_PER_SCREEN_NUM: usize = 2;
    pub const ROWS_PER_SCREEN_DEN: usize = 3;
    pub const VIEWPORT_MIN_ROWS: usize = 3;
    pub const RENDER_MIN_ROWS: usize = 5;
    pub const TOP_MARGIN: usize = 2;
    pub const BOTTOM_CUSHION: usize = 2;
}
