use rand::{Rng, RngExt};

use crate::*;
pub use random::*;

mod random;

/// Random placement attempts per word before the whole grid is discarded.
pub const MAX_WORD_ATTEMPTS: u32 = 500;

/// Whole-grid rebuilds before generation gives up.
pub const MAX_GRID_RETRIES: u32 = 100;

/// Filler refill passes before a stray target occurrence is accepted.
pub const MAX_FILL_PASSES: u32 = 16;

pub trait PuzzleGenerator {
    fn generate(self, config: PuzzleConfig, pool: &[String]) -> Result<Puzzle>;
}

/// Glyph range the filler characters are drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FillAlphabet {
    /// Complete Hangul syllables; syllables with no final consonant are skipped.
    Hangul,
    /// Lowercase ASCII letters.
    BasicLatin,
}

impl FillAlphabet {
    pub(crate) fn sample(self, rng: &mut impl Rng) -> char {
        match self {
            Self::Hangul => {
                const START: u32 = 0xAC00;
                const END: u32 = 0xD7A3;
                loop {
                    let code = rng.random_range(START..=END);
                    if (code - START) % 28 != 0 {
                        break char::from_u32(code).expect("codepoint is a Hangul syllable");
                    }
                }
            }
            Self::BasicLatin => rng.random_range(b'a'..=b'z') as char,
        }
    }

    /// Whether `ch` could have been produced by `sample`.
    pub fn contains(self, ch: char) -> bool {
        match self {
            Self::Hangul => {
                let code = ch as u32;
                (0xAC00..=0xD7A3).contains(&code) && (code - 0xAC00) % 28 != 0
            }
            Self::BasicLatin => ch.is_ascii_lowercase(),
        }
    }
}

impl Default for FillAlphabet {
    fn default() -> Self {
        Self::Hangul
    }
}
