use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod defaults;
mod keys;
mod logging;
mod output;
mod screens;
mod session;
mod source;
mod terminal;
mod types;
mod ui;
mod viewport;
mod wrap;

use crate::app::Outcome;
use crate::cli::Cli;
use crate::output::FileSink;
use crate::session::Session;
use crate::ui::style::Theme;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_file.as_deref())?;

    let items = source::load_items(&cli)?;
    tracing::info!(count = items.len(), "loaded examples");

    let theme = if cli.no_color { Theme::monochrome() } else { Theme::default() };
    let mut session = Session::new(items, cli.title.clone());
    let mut sink = FileSink::new(cli.result_file.clone());

    match app::run_interactive(&mut session, &mut sink, &theme)? {
        Outcome::Quit => tracing::info!("exited without confirming"),
        Outcome::Confirmed(ordinals) => {
            tracing::info!(count = ordinals.len(), "exited with selection")
        }
    }
    tracing::debug!(phase = ?session.phase(), "session closed");
    Ok(())
}
