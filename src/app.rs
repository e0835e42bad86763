use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

use crate::keys::{action_for, Action};
use crate::output::ResultSink;
use crate::screens::picker;
use crate::session::{Session, Transition};
use crate::terminal::TerminalGuard;
use crate::ui::style::Theme;

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Confirmed(Vec<u32>),
}

/// Drive `session` from `events` until it terminates or the events run out.
///
/// The first frame is laid out from the terminal's current size, as if a
/// resize had just been reported.
pub fn run<B, I>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    events: I,
    sink: &mut dyn ResultSink,
    theme: &Theme,
) -> Result<Outcome>
where
    B: Backend,
    I: IntoIterator<Item = io::Result<Event>>,
{
    let size = terminal.size()?;
    session.handle(Action::Resize { width: size.width, height: size.height });
    terminal.draw(|f| picker::draw(f, session, theme))?;

    for event in events {
        let action = action_for(&event?);
        match session.handle(action) {
            Transition::Stay => {}
            Transition::Quit => {
                tracing::info!("quit without selection");
                return Ok(Outcome::Quit);
            }
            Transition::Confirm(ordinals) => {
                tracing::info!(?ordinals, "selection confirmed");
                sink.write_ordinals(&ordinals)?;
                return Ok(Outcome::Confirmed(ordinals));
            }
        }
        terminal.draw(|f| picker::draw(f, session, theme))?;
    }
    Ok(Outcome::Quit)
}

/// Take over the real terminal and block on crossterm events.
pub fn run_interactive(
    session: &mut Session,
    sink: &mut dyn ResultSink,
    theme: &Theme,
) -> Result<Outcome> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    let events = std::iter::from_fn(|| Some(event::read()));
    run(&mut terminal, session, events, sink, theme)
}
