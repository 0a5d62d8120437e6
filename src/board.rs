//! Status-line presenter shared by the zellij plugin and the terminal runner.

use anstyle::Style as AnsiStyle;
use tracing::warn;

use crate::{
    row::ClockRow,
    segment::{DisplayExt, BG, GRAY},
    City, HandAngles, Presenter, Segment, WorldClocks,
};

const PLACEHOLDER: &str = "--:--:--";

/// One mounted clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: char,
    pub digital: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    FocusNext,
    FocusPrevious,
    RemoveFocused,
    /// Open the add picker, or move it to the next available city.
    PickNext,
    Confirm,
    Cancel,
}

#[derive(Default)]
pub struct Board {
    cards: Vec<Card>,
    focus: usize,

    available: Vec<&'static City>,
    can_add: bool,
    picker: Option<usize>,
}

impl Presenter for Board {
    fn mount(&mut self, city: &'static City) {
        self.cards.push(Card {
            id: city.id,
            name: city.name,
            glyph: '◷',
            digital: PLACEHOLDER.to_string(),
        });
    }

    fn unmount(&mut self, city_id: &str) {
        self.cards.retain(|card| card.id != city_id);
        self.focus = self.focus.min(self.cards.len().saturating_sub(1));
    }

    fn render(&mut self, city_id: &str, angles: HandAngles, digital: &str) {
        if let Some(card) = self.cards.iter_mut().find(|card| card.id == city_id) {
            card.glyph = angles.glyph();
            card.digital = digital.to_string();
        }
    }

    fn offer(&mut self, available: &[&'static City], can_add: bool) {
        self.available = available.to_vec();
        self.can_add = can_add;
        if !can_add || self.picker.is_some_and(|i| i >= self.available.len()) {
            self.picker = None;
        }
    }
}

impl Board {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn focused(&self) -> Option<&Card> {
        self.cards.get(self.focus)
    }

    pub fn picked(&self) -> Option<&'static City> {
        self.picker.and_then(|i| self.available.get(i).copied())
    }

    /// Apply a key press. Returns whether the board needs a redraw.
    pub fn handle(&mut self, input: Input, clocks: &mut WorldClocks) -> bool {
        match input {
            Input::FocusNext | Input::FocusPrevious if self.cards.is_empty() => false,
            Input::FocusNext => {
                self.focus = (self.focus + 1) % self.cards.len();
                true
            }
            Input::FocusPrevious => {
                self.focus = (self.focus + self.cards.len() - 1) % self.cards.len();
                true
            }
            Input::RemoveFocused => {
                let Some(id) = self.focused().map(|card| card.id) else {
                    return false;
                };
                if let Err(e) = clocks.remove(id, self) {
                    warn!(error = %e, "Could not remove clock");
                    return false;
                }
                true
            }
            Input::PickNext => {
                if !self.can_add || self.available.is_empty() {
                    return false;
                }
                let len = self.available.len();
                self.picker = Some(self.picker.map_or(0, |i| (i + 1) % len));
                true
            }
            Input::Confirm => {
                let Some(city) = self.picked() else {
                    return false;
                };
                self.picker = None;
                if let Err(e) = clocks.add(city.id, self) {
                    warn!(error = %e, "Could not add clock");
                }
                true
            }
            Input::Cancel => self.picker.take().is_some(),
        }
    }

    /// One status line exactly `cols` wide when it fits: clocks on the left,
    /// the add affordance on the right.
    pub fn draw(&self, cols: usize) -> String {
        let picker = self.picker_segment().map(|s| s.to_string()).unwrap_or_default();
        let mut chars = picker.display_len();

        let mut row = ClockRow::new(&self.cards, self.focus);
        row.max_width = cols.saturating_sub(chars);
        let mut line = row.to_string();
        chars += line.display_len();

        if chars < cols {
            let fill = "-".repeat(cols - chars);
            line.push_str(&format!(
                "{}{}",
                AnsiStyle::new().fg_color(*GRAY).bg_color(*BG).render(),
                fill
            ));
        }

        line.push_str(&picker);
        line
    }

    fn picker_segment(&self) -> Option<Segment> {
        match self.picker {
            Some(_) => Some(Segment::picker(self.picked())),
            None if self.can_add => Some(Segment::picker(None)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::{Persistence, Scheduler, DEFAULT_CITIES, MAX_CLOCKS};

    struct Idle;

    impl Scheduler for Idle {
        fn schedule(&mut self, _: std::time::Duration) {}
    }

    fn ready() -> (WorldClocks, Board) {
        let mut clocks = WorldClocks::new(Persistence::default());
        let mut board = Board::default();
        clocks.initialize(&mut board, &mut Idle);
        (clocks, board)
    }

    fn ids(board: &Board) -> Vec<&'static str> {
        board.cards().iter().map(|card| card.id).collect()
    }

    #[test]
    fn mirrors_active_set() {
        let (clocks, board) = ready();
        assert_eq!(ids(&board), DEFAULT_CITIES);
        assert_eq!(ids(&board), clocks.list_active());
        assert!(board.cards().iter().all(|card| card.digital != PLACEHOLDER));
    }

    #[test]
    fn renders_fixed_instant() {
        let (clocks, mut board) = ready();
        let instant: DateTime<Utc> = "2024-01-15T00:00:00Z".parse().unwrap();
        clocks.refresh_at(instant, &mut board);
        let london = &board.cards()[1];
        assert_eq!(london.digital, "00:00:00");
        assert_eq!(london.glyph, '🕛');
    }

    #[test]
    fn remove_focused_then_pick_and_add() {
        let (mut clocks, mut board) = ready();
        assert!(!board.handle(Input::PickNext, &mut clocks));

        assert!(board.handle(Input::RemoveFocused, &mut clocks));
        assert_eq!(clocks.list_active(), ["london", "tokyo", "sydney", "paris"]);
        assert_eq!(board.focused().map(|c| c.id), Some("london"));

        assert!(board.handle(Input::PickNext, &mut clocks));
        assert_eq!(board.picked().map(|c| c.id), Some("new-york"));
        assert!(board.handle(Input::PickNext, &mut clocks));
        assert_eq!(board.picked().map(|c| c.id), Some("dubai"));

        assert!(board.handle(Input::Confirm, &mut clocks));
        assert_eq!(board.picked(), None);
        assert_eq!(ids(&board), ["london", "tokyo", "sydney", "paris", "dubai"]);
        assert_eq!(clocks.list_active().len(), MAX_CLOCKS);
        assert!(!board.handle(Input::Confirm, &mut clocks));
    }

    #[test]
    fn focus_wraps() {
        let (mut clocks, mut board) = ready();
        assert!(board.handle(Input::FocusPrevious, &mut clocks));
        assert_eq!(board.focused().map(|c| c.id), Some("paris"));
        assert!(board.handle(Input::FocusNext, &mut clocks));
        assert_eq!(board.focused().map(|c| c.id), Some("new-york"));

        assert!(board.handle(Input::FocusPrevious, &mut clocks));
        assert!(board.handle(Input::RemoveFocused, &mut clocks));
        assert_eq!(board.focused().map(|c| c.id), Some("sydney"));
    }

    #[test]
    fn cancel_closes_picker() {
        let (mut clocks, mut board) = ready();
        board.handle(Input::RemoveFocused, &mut clocks);
        board.handle(Input::PickNext, &mut clocks);
        assert!(board.handle(Input::Cancel, &mut clocks));
        assert!(!board.handle(Input::Cancel, &mut clocks));
        assert_eq!(clocks.list_active().len(), MAX_CLOCKS - 1);
    }

    #[test]
    fn draw_fills_width() {
        let (mut clocks, mut board) = ready();
        let line = board.draw(400);
        assert_eq!(line.display_len(), 400);
        assert!(!strip_ansi_escapes::strip_str(&line).contains('+'));

        board.handle(Input::RemoveFocused, &mut clocks);
        board.handle(Input::PickNext, &mut clocks);
        let line = strip_ansi_escapes::strip_str(board.draw(400));
        assert!(line.ends_with(" + New York "));
        assert!(line.contains("London"));
    }

    #[test]
    fn draw_fits_terminal_columns() {
        use unicode_width::UnicodeWidthStr;

        let (mut clocks, mut board) = ready();
        board.handle(Input::RemoveFocused, &mut clocks);
        let columns = |line: String| strip_ansi_escapes::strip_str(line).width();

        for cols in [60, 80, 120, 200] {
            assert_eq!(columns(board.draw(cols)), cols, "cols = {cols}");
        }
        assert!(strip_ansi_escapes::strip_str(board.draw(120)).ends_with(" + "));

        board.handle(Input::PickNext, &mut clocks);
        assert_eq!(columns(board.draw(120)), 120);
    }

    #[test]
    fn draw_folds_when_narrow() {
        let (_, board) = ready();
        let line = strip_ansi_escapes::strip_str(board.draw(30));
        assert!(line.contains("New York"));
        assert!(!line.contains("Tokyo"));
    }
}
