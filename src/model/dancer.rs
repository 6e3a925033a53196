//! A single dancer's recorded state at one instant of the transcript.

use serde::{Deserialize, Serialize};

/// A dancer's half of a couple, decoded from the token letter.
///
/// sd prints `B` ("guy") and `G` ("gal"); diagram styling keys off the
/// traditional words, so both spellings are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Leader,
    Follower,
}

impl Role {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'B' => Some(Role::Leader),
            'G' => Some(Role::Follower),
            _ => None,
        }
    }

    /// The token letter as printed by sd.
    pub fn letter(self) -> char {
        match self {
            Role::Leader => 'B',
            Role::Follower => 'G',
        }
    }

    /// Traditional word, used as a CSS class on rendered dancers.
    pub fn word(self) -> &'static str {
        match self {
            Role::Leader => "guy",
            Role::Follower => "gal",
        }
    }
}

/// Facing direction as a quarter-turn count.
///
/// In a squared set couple 1 faces `Up` (count 0); the count increases by
/// one per quarter turn counterclockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Left,
    Down,
    Right,
}

impl Facing {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '^' => Some(Facing::Up),
            '<' => Some(Facing::Left),
            'V' => Some(Facing::Down),
            '>' => Some(Facing::Right),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Facing::Up => '^',
            Facing::Left => '<',
            Facing::Down => 'V',
            Facing::Right => '>',
        }
    }

    /// Counterclockwise quarter turns from `Up`.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Facing::Up => 0,
            Facing::Left => 1,
            Facing::Down => 2,
            Facing::Right => 3,
        }
    }
}

/// One dancer: grid position, couple number, role, and facing direction.
///
/// Equality covers all four attributes — position included — so dancer
/// equality is grid-position-sensitive, not purely shape-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dancer {
    pub x: i64,
    pub y: i64,
    /// Couple number, 1–4.
    pub couple: u8,
    pub role: Role,
    pub facing: Facing,
}

impl Dancer {
    pub fn new(x: i64, y: i64, couple: u8, role: Role, facing: Facing) -> Self {
        Self { x, y, couple, role, facing }
    }

    /// Decode a 3-character dancer token — digit, role letter, facing
    /// glyph — placing the dancer at the given raw text coordinates.
    /// Returns `None` unless all three characters are in the token
    /// alphabet (`[1-4][BG][^<V>]`).
    pub fn decode(digit: char, letter: char, glyph: char, x: i64, y: i64) -> Option<Self> {
        let couple = match digit {
            '1'..='4' => digit as u8 - b'0',
            _ => return None,
        };
        let role = Role::from_letter(letter)?;
        let facing = Facing::from_glyph(glyph)?;
        Some(Self::new(x, y, couple, role, facing))
    }

    /// The token as it appears in a transcript, e.g. `3GV`.
    pub fn token(&self) -> String {
        format!("{}{}{}", self.couple, self.role.letter(), self.facing.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_tokens() {
        let d = Dancer::decode('1', 'B', '^', 5, 2).unwrap();
        assert_eq!(d.couple, 1);
        assert_eq!(d.role, Role::Leader);
        assert_eq!(d.facing, Facing::Up);
        assert_eq!((d.x, d.y), (5, 2));

        let d = Dancer::decode('4', 'G', '>', 0, 0).unwrap();
        assert_eq!(d.couple, 4);
        assert_eq!(d.role, Role::Follower);
        assert_eq!(d.facing, Facing::Right);
    }

    #[test]
    fn test_decode_rejects_out_of_alphabet() {
        assert!(Dancer::decode('5', 'B', '^', 0, 0).is_none());
        assert!(Dancer::decode('0', 'B', '^', 0, 0).is_none());
        assert!(Dancer::decode('1', 'X', '^', 0, 0).is_none());
        // Lowercase v is not a facing glyph; sd prints uppercase V.
        assert!(Dancer::decode('1', 'B', 'v', 0, 0).is_none());
    }

    #[test]
    fn test_token_round_trip() {
        let d = Dancer::decode('2', 'G', 'V', 7, 3).unwrap();
        assert_eq!(d.token(), "2GV");
    }

    #[test]
    fn test_equality_is_position_sensitive() {
        let a = Dancer::new(0, 0, 1, Role::Leader, Facing::Up);
        let b = Dancer::new(1, 0, 1, Role::Leader, Facing::Up);
        assert_ne!(a, b);
        assert_eq!(a, a);
    }
}
