//! flagtap - a guess-the-flag quiz for the terminal
//!
//! Three flags, one country name, eight guesses per session.

mod app;
mod game;
mod stats;
mod storage;
mod tui;

use app::App;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use storage::Storage;
use tui::Tui;

fn main() -> io::Result<()> {
    // Stats are optional; the game runs even when the data dir is unusable
    let storage = Storage::open().ok();

    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let mut app = App::new(storage);

    // Main event loop: synchronous, driven entirely by key input
    loop {
        terminal.draw(|frame| tui::render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Esc => {
                        app.quit();
                    }
                    KeyCode::Char(c @ '1'..='3') => {
                        app.on_flag_key(c as usize - '1' as usize);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        app.on_continue();
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
