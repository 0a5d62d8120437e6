use std::{collections::BTreeMap, time::Duration};

use zellij_tile::prelude::*;
use zellij_worldclock::{
    logging, Board, Config, FileStorage, Input, Persistence, Scheduler, WorldClocks,
};

/// Zellij's one-shot timer; it comes back as `Event::Timer`.
struct HostTimer;

impl Scheduler for HostTimer {
    fn schedule(&mut self, after: Duration) {
        set_timeout(after.as_secs_f64());
    }
}

#[derive(Default)]
pub struct PluginState {
    pub config: Config,

    pub clocks: Option<WorldClocks>,
    pub board: Board,
}

impl ZellijPlugin for PluginState {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        self.config = Config::from_map(&configuration);
        logging::init(self.config.log_level);

        set_selectable(self.config.selectable);
        subscribe(&[EventType::Timer, EventType::Key]);

        let storage = FileStorage::new(&self.config.data_dir);
        let mut clocks = WorldClocks::new(Persistence::new(storage));
        clocks.initialize(&mut self.board, &mut HostTimer);
        self.clocks = Some(clocks);
    }

    fn update(&mut self, event: Event) -> bool {
        let Some(clocks) = self.clocks.as_mut() else {
            return false;
        };

        match event {
            Event::Timer(_) => clocks.on_timer(&mut self.board, &mut HostTimer),
            Event::Key(key) => match input(key) {
                Some(input) => self.board.handle(input, clocks),
                None => false,
            },
            _ => false,
        }
    }

    fn render(&mut self, _: usize, cols: usize) {
        print!("{}", self.board.draw(cols));
    }
}

fn input(key: Key) -> Option<Input> {
    match key {
        Key::Right | Key::Char('\t') | Key::Char('l') => Some(Input::FocusNext),
        Key::Left | Key::BackTab | Key::Char('h') => Some(Input::FocusPrevious),
        Key::Char('x') | Key::Delete | Key::Backspace => Some(Input::RemoveFocused),
        Key::Char('a') | Key::Char('+') => Some(Input::PickNext),
        Key::Char('\n') => Some(Input::Confirm),
        Key::Esc => Some(Input::Cancel),
        _ => None,
    }
}
