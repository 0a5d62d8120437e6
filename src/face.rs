//! Analog and digital faces of a wall-clock reading.

/// Hand rotations in degrees, clockwise from 12 o'clock.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Hands creep with the next smaller unit: the hour hand moves half a degree
/// per minute and the minute hand a tenth of a degree per second.
pub fn hand_angles(hours: u32, minutes: u32, seconds: u32) -> HandAngles {
    HandAngles {
        hour: f64::from(hours % 12) * 30.0 + f64::from(minutes) * 0.5,
        minute: f64::from(minutes) * 6.0 + f64::from(seconds) * 0.1,
        second: f64::from(seconds) * 6.0,
    }
}

/// `HH:MM:SS`, zero padded.
pub fn format_digital(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

// U+1F550 CLOCK FACE ONE OCLOCK .. U+1F55B TWELVE OCLOCK,
// U+1F55C CLOCK FACE ONE-THIRTY .. U+1F567 TWELVE-THIRTY
const FULL_HOUR_FACES: u32 = 0x1F550;
const HALF_HOUR_FACES: u32 = 0x1F55C;

impl HandAngles {
    /// Clock face emoji closest to the hour hand, in half-hour steps.
    pub fn glyph(&self) -> char {
        let slot = (self.hour / 15.0).round() as u32 % 24;
        let hour = match slot / 2 {
            0 => 12,
            h => h,
        };
        let base = if slot % 2 == 0 {
            FULL_HOUR_FACES
        } else {
            HALF_HOUR_FACES
        };
        char::from_u32(base + hour - 1).unwrap_or('◷')
    }
}
