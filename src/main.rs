use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use coffre::app::{persistence, r#loop::run_loop, state::AppState};
use coffre::domain::vault::VaultClient;
use coffre::infrastructure::http::HttpVaultClient;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Resolve the session and build the client BEFORE terminal setup so a
    // failure doesn't leave the terminal in raw mode.
    let config = persistence::load();
    let mut app_state = AppState::new(&config);

    let client: Arc<dyn VaultClient> = match config.session() {
        Some(session) => Arc::new(HttpVaultClient::new(session.server_url, session.cookies)?),
        None => {
            app_state.mode = coffre::app::state::AppMode::NoSession;
            Arc::new(HttpVaultClient::new(String::new(), String::new())?)
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}
