use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use tracing::{debug, warn};
use zellij_worldclock::{logging, Board, Config, FileStorage, Persistence, Scheduler, WorldClocks};

const DEFAULT_COLUMNS: usize = 120;

/// Blocks the thread until the next tick.
#[derive(Default)]
struct Sleep {
    next: Option<Duration>,
}

impl Scheduler for Sleep {
    fn schedule(&mut self, after: Duration) {
        self.next = Some(after);
    }
}

/// Redraw the status line in place once per tick, forever.
pub fn run() {
    let config = Config::from_env();
    logging::init(config.log_level);
    debug!(?config, "Starting");

    let cols = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse().ok())
        .unwrap_or(DEFAULT_COLUMNS);

    let storage = FileStorage::new(&config.data_dir);
    let mut clocks = WorldClocks::new(Persistence::new(storage));
    let mut board = Board::default();
    let mut timer = Sleep::default();
    clocks.initialize(&mut board, &mut timer);

    let mut stdout = io::stdout();
    while let Some(after) = timer.next.take() {
        redraw(&mut stdout, &board.draw(cols));

        thread::sleep(after);
        clocks.on_timer(&mut board, &mut timer);
    }
}

/// Overwrite the current line. A failed write is logged and the next tick
/// tries again.
fn redraw(out: &mut impl Write, line: &str) -> bool {
    match write!(out, "\r{line}").and_then(|_| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Failed to draw status line");
            false
        }
    }
}
