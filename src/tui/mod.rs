// Module declarations
pub mod widgets;

pub mod action;
pub mod effects;
pub mod keys;
pub mod picker;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod view;

#[cfg(test)]
pub mod testing;


pub use action::{Action, PickerMove};
pub use effects::Effect;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::clock::SharedClock;
use crate::config::Config;

/// Main entry point for TUI mode
pub async fn run(
    config: Config,
    clock: SharedClock,
    initial_date: Option<NaiveDate>,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let initial_state = AppState::new(config, clock, initial_date);
    let mut runtime = Runtime::new(initial_state);
    runtime.start_greeting_refresh();

    let result = event_loop(&mut terminal, &mut runtime);

    runtime.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Drain queued actions first so notifications and greetings show up
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            view::render(runtime.state(), area, f.buffer_mut());
        })?;

        if actions_processed > 0 {
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let Some(action) = key_to_action(key, runtime.state()) else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    tracing::debug!("ACTION: Quitting application");
                    return Ok(());
                }

                runtime.dispatch(action);
            }
        }
    }
}
