use crate::Error;
use std::fmt;

/// 32-bit seed folded out of a beacon value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed(i32);

impl Seed {
    /// Derives the seed for a draw. Blank beacon values are refused so that a
    /// draw never starts from a default state.
    pub fn from_beacon(beacon: &str) -> Result<Self, Error> {
        if beacon.trim().is_empty() {
            return Err(Error::MissingBeacon);
        }
        Ok(Self(string_hash(beacon)))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Two's complement bits, as loaded into the stream state.
    pub fn to_bits(self) -> u32 {
        self.0 as u32
    }
}

impl From<i32> for Seed {
    fn from(seed: i32) -> Self {
        Self(seed)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `acc * 31 + unit` over the UTF-16 code units of `input`, wrapping at 32 bits.
pub fn string_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit))
    })
}
