use std::fmt;

use serde::{Serialize, Serializer};

/// Text shown for the "no symbol" vote. Never committed.
pub const NO_SIGN: &str = "_";

/// A committable output symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    A,
    B,
    D,
    I,
    L,
    S,
    V,
    W,
    Y,
    /// The "I love you" handshape.
    ILoveYou,
}

impl Sign {
    pub const ALL: &[Sign] = &[
        Sign::A,
        Sign::B,
        Sign::D,
        Sign::I,
        Sign::L,
        Sign::S,
        Sign::V,
        Sign::W,
        Sign::Y,
        Sign::ILoveYou,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::A => "A",
            Sign::B => "B",
            Sign::D => "D",
            Sign::I => "I",
            Sign::L => "L",
            Sign::S => "S",
            Sign::V => "V",
            Sign::W => "W",
            Sign::Y => "Y",
            Sign::ILoveYou => "\u{1F91F}",
        }
    }

    /// Label for an optional vote, using `NO_SIGN` for the sentinel.
    pub fn label(sign: Option<Sign>) -> &'static str {
        sign.map_or(NO_SIGN, |s| s.as_str())
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
