use std::fmt::Display;

use crate::{board::Card, segment::DisplayExt, Segment};

/// The clocks laid out three ways; the widest one that fits is shown.
#[derive(Default)]
pub struct ClockRow {
    pub max_width: usize,

    full: (usize, String),
    compact: (usize, String),
    fold: (usize, String),
}

impl Display for ClockRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let content = if self.max_width > self.full.0 {
            &self.full.1
        } else if self.max_width > self.compact.0 {
            &self.compact.1
        } else {
            &self.fold.1
        };
        write!(f, "{content}")
    }
}

impl ClockRow {
    pub fn new(cards: &[Card], focus: usize) -> Self {
        let full: String = cards
            .iter()
            .enumerate()
            .map(|(i, card)| Segment::card(card, i == focus))
            .map(|x| x.to_string())
            .collect();

        let compact: String = cards
            .iter()
            .enumerate()
            .map(|(i, card)| Segment::compact_card(card, i == focus))
            .map(|x| x.to_string())
            .collect();

        let fold = match cards.len() {
            0 => String::new(),
            len => {
                let last = len - 1;
                let focus = focus.min(last);
                let mut segment = Segment::card(&cards[focus], true).to_string();
                if focus != 0 {
                    segment = format!("{}{segment}", Segment::hidden(0..focus - 1));
                }
                if focus != last {
                    segment = format!("{segment}{}", Segment::hidden(focus + 1..last));
                }
                segment
            }
        };

        Self {
            max_width: usize::MAX,

            full: (full.display_len(), full),
            compact: (compact.display_len(), compact),
            fold: (fold.display_len(), fold),
        }
    }
}
