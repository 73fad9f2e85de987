//! Key map for the stock 17-key remote.
//!
//! Decoded codes are 32-bit values; the application usually wants buttons.
//!
//! ```text
//!   [ 1 ] [ 2 ] [ 3 ]
//!   [ 4 ] [ 5 ] [ 6 ]
//!   [ 7 ] [ 8 ] [ 9 ]
//!   [ * ] [ 0 ] [ # ]
//!         [ ▲ ]
//!   [ ◀ ] [OK ] [ ▶ ]
//!         [ ▼ ]
//! ```

use core::fmt;

use crate::decoder::REPEAT_CODE;

/// A button on the stock remote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Asterisk,
    Pound,
    Up,
    Down,
    Left,
    Right,
    Ok,
    /// Repeat sentinel: some key is held, identity suppressed.
    Held,
    /// Code not on this remote.
    Unknown(u32),
}

impl Button {
    /// Map a decoded command code to a button.
    pub fn from_code(code: u32) -> Self {
        match code {
            0x00FF_9867 => Button::Zero,
            0x00FF_A25D => Button::One,
            0x00FF_629D => Button::Two,
            0x00FF_E21D => Button::Three,
            0x00FF_22DD => Button::Four,
            0x00FF_02FD => Button::Five,
            0x00FF_C23D => Button::Six,
            0x00FF_E01F => Button::Seven,
            0x00FF_A857 => Button::Eight,
            0x00FF_906F => Button::Nine,
            0x00FF_6897 => Button::Asterisk,
            0x00FF_B04F => Button::Pound,
            0x00FF_18E7 => Button::Up,
            0x00FF_4AB5 => Button::Down,
            0x00FF_10EF => Button::Left,
            0x00FF_5AA5 => Button::Right,
            0x00FF_38C7 => Button::Ok,
            REPEAT_CODE => Button::Held,
            other => Button::Unknown(other),
        }
    }

    /// Reverse mapping to the command code, where one exists.
    pub fn code(&self) -> Option<u32> {
        match self {
            Button::Zero => Some(0x00FF_9867),
            Button::One => Some(0x00FF_A25D),
            Button::Two => Some(0x00FF_629D),
            Button::Three => Some(0x00FF_E21D),
            Button::Four => Some(0x00FF_22DD),
            Button::Five => Some(0x00FF_02FD),
            Button::Six => Some(0x00FF_C23D),
            Button::Seven => Some(0x00FF_E01F),
            Button::Eight => Some(0x00FF_A857),
            Button::Nine => Some(0x00FF_906F),
            Button::Asterisk => Some(0x00FF_6897),
            Button::Pound => Some(0x00FF_B04F),
            Button::Up => Some(0x00FF_18E7),
            Button::Down => Some(0x00FF_4AB5),
            Button::Left => Some(0x00FF_10EF),
            Button::Right => Some(0x00FF_5AA5),
            Button::Ok => Some(0x00FF_38C7),
            Button::Held => Some(REPEAT_CODE),
            Button::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_codes() {
        assert_eq!(Button::from_code(0x00FF_9867), Button::Zero);
        assert_eq!(Button::from_code(0x00FF_A25D), Button::One);
        assert_eq!(Button::from_code(0x00FF_906F), Button::Nine);
    }

    #[test]
    fn test_navigation_codes() {
        assert_eq!(Button::from_code(0x00FF_18E7), Button::Up);
        assert_eq!(Button::from_code(0x00FF_4AB5), Button::Down);
        assert_eq!(Button::from_code(0x00FF_10EF), Button::Left);
        assert_eq!(Button::from_code(0x00FF_5AA5), Button::Right);
        assert_eq!(Button::from_code(0x00FF_38C7), Button::Ok);
    }

    #[test]
    fn test_repeat_sentinel_is_held() {
        assert_eq!(Button::from_code(0xFFFF_FFFF), Button::Held);
    }

    #[test]
    fn test_unknown_carries_code() {
        assert_eq!(Button::from_code(0x1234_5678), Button::Unknown(0x1234_5678));
        assert_eq!(Button::Unknown(0x1234_5678).code(), None);
    }

    #[test]
    fn test_known_buttons_round_trip() {
        for button in [
            Button::Zero,
            Button::Five,
            Button::Asterisk,
            Button::Pound,
            Button::Up,
            Button::Ok,
            Button::Held,
        ] {
            let code = button.code().unwrap();
            assert_eq!(Button::from_code(code), button);
        }
    }
}
