use std::{fmt::Display, ops::Range};

use anstyle::{AnsiColor, Color, RgbColor, Style as AnsiStyle};
use lazy_static::lazy_static;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{board::Card, City};

lazy_static! {
    pub static ref BG: Option<Color> = Some(AnsiColor::Black.into());
    pub static ref GREEN: Option<Color> = Some(AnsiColor::Green.into());
    pub static ref YELLOW: Option<Color> = Some(AnsiColor::Yellow.into());
    pub static ref GRAY: Option<Color> = Some(AnsiColor::White.into());
    pub static ref BLACK: Option<Color> = Some(RgbColor(0u8, 0u8, 0u8).into());
}

pub trait DisplayExt {
    /// Terminal columns taken: ANSI escapes stripped, each grapheme measured
    /// by its East Asian width, so emoji clock faces count as two.
    fn display_len(&self) -> usize;
}

impl<T: Display> DisplayExt for T {
    fn display_len(&self) -> usize {
        strip_ansi_escapes::strip_str(self.to_string())
            .graphemes(true)
            .map(UnicodeWidthStr::width)
            .sum()
    }
}

/// Padded, coloured run of text in the status line.
pub struct Segment {
    content: String,
    style: AnsiStyle,
}

impl Segment {
    fn styled(content: String, style: AnsiStyle) -> Self {
        Segment { content, style }
    }

    pub fn card(card: &Card, focused: bool) -> Self {
        let content = format!("{} {} {}", card.glyph, card.name, card.digital);
        Self::styled(content, Self::card_style(focused))
    }

    /// Glyph and `HH:MM` only, unless focused.
    pub fn compact_card(card: &Card, focused: bool) -> Self {
        if focused {
            return Self::card(card, focused);
        }

        let short = card.digital.get(..5).unwrap_or(&card.digital);
        let content = format!("{} {}", card.glyph, short);
        Self::styled(content, Self::card_style(focused))
    }

    /// Placeholder for the folded cards at positions `range.start..=range.end`.
    pub fn hidden(range: Range<usize>) -> Self {
        let content = if range.is_empty() {
            format!("{}", range.start + 1)
        } else {
            format!("{}  󰜴  {}", range.start + 1, range.end + 1)
        };
        Self::styled(content, AnsiStyle::new().fg_color(*BLACK).bg_color(*GRAY))
    }

    /// The add affordance, showing the city currently picked if any.
    pub fn picker(city: Option<&City>) -> Self {
        let content = match city {
            Some(city) => format!("+ {}", city.name),
            None => "+".to_string(),
        };
        Self::styled(content, AnsiStyle::new().fg_color(*BLACK).bg_color(*GREEN))
    }

    fn card_style(focused: bool) -> AnsiStyle {
        let color = if focused { *YELLOW } else { *GRAY };
        AnsiStyle::new().fg_color(*BLACK).bg_color(color)
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{style} {content} {reset}",
            style = self.style.render(),
            content = self.content,
            reset = self.style.render_reset(),
        )
    }
}
