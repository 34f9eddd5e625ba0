//! Reproducible generation seeds.

use std::{
    error::Error,
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed from which all of a puzzle's randomness is derived.
///
/// Seeds print as 64 lowercase hex digits and parse back from the same form,
/// so a puzzle can be regenerated from the seed it reports.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("lucky");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed from a UTF-8 phrase by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same seed, which makes
    /// human-memorable reproducible puzzles possible.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        let count = s.chars().count();
        if count != 64 {
            return Err(ParseSeedError::WrongLength(count));
        }
        let mut bytes = [0; 32];
        for (i, c) in s.chars().enumerate() {
            // hex digits are ASCII, so 64 chars fill exactly 32 bytes
            let Some(nibble) = c.to_digit(16) else {
                return Err(ParseSeedError::InvalidDigit(c));
            };
            bytes[i / 2] = bytes[i / 2] << 4 | nibble as u8;
        }
        Ok(Self(bytes))
    }
}

/// A malformed textual seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSeedError {
    /// The text was not exactly 64 characters long.
    WrongLength(usize),
    /// A character that is not a hex digit.
    InvalidDigit(char),
}

impl Display for ParseSeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(n) => write!(f, "expected 64 hex digits, found {n} characters"),
            Self::InvalidDigit(c) => write!(f, "invalid hex digit in seed: {c:?}"),
        }
    }
}

impl Error for ParseSeedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let text = seed.to_string();
        assert_eq!(text, "ab".repeat(32));
        assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_from_phrase_is_deterministic() {
        assert_eq!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("a"));
        assert_ne!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("b"));
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(ParseSeedError::WrongLength(4))
        );
    }

    #[test]
    fn test_parse_rejects_bad_digit() {
        let s = "g".repeat(64);
        assert_eq!(
            s.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidDigit('g'))
        );
    }

    #[test]
    fn test_parse_known_hex() {
        let s = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
        let seed: PuzzleSeed = s.parse().unwrap();
        let mut expected = [0; 32];
        for (i, byte) in expected.iter_mut().enumerate() {
            *byte = u8::try_from(i).unwrap();
        }
        assert_eq!(seed, PuzzleSeed::from_bytes(expected));
        assert_eq!(seed.to_string(), s);
    }
}
