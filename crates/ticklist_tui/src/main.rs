//! ticklist terminal front end.
//!
//! An entry field, the checklist itself, a clear-all control and a live
//! region for announcements. All list logic lives in `ticklist_core`.

mod app;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ticklist_core::db::open_db;
use ticklist_core::{default_log_level, init_logging, ListSession, ListStore, SqliteListStore};

use app::App;

const DB_FILE_NAME: &str = "ticklist.sqlite3";
/// Poll granularity while no checked-row deadline is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir()?;
    if let Err(err) = init_logging(default_log_level(), &data_dir.to_string_lossy()) {
        // Run without file logs rather than refusing to start.
        eprintln!("ticklist: file logging disabled: {err}");
    }

    let conn = open_db(data_dir.join(DB_FILE_NAME))?;
    let session = ListSession::load(SqliteListStore::new(&conn))?;
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: ListStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        app.expire_checked(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app.time_until_next_deadline(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns the directory holding the database and log files, creating it
/// when missing. `TICKLIST_DATA_DIR` overrides the platform default.
fn resolve_data_dir() -> io::Result<PathBuf> {
    let dir = match std::env::var_os("TICKLIST_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("ticklist"),
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
