//! Door word generation: pick a base word, maybe lengthen it, then apply one of
//! the scramble transforms.

use rand::Rng;
use rand::seq::SliceRandom;

/// How the base word is disguised on the door.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    Identity,
    /// Fisher-Yates shuffle of the characters.
    Shuffle,
    /// Contiguous groups of 1..=3 characters joined by single spaces.
    Chunk,
}

impl Transform {
    // Upper bounds of the cumulative draw; the remainder (0.34) is Identity.
    const SHUFFLE_BELOW: f64 = 0.33;
    const CHUNK_BELOW: f64 = 0.66;

    pub fn from_draw(r: f64) -> Self {
        if r < Self::SHUFFLE_BELOW {
            Transform::Shuffle
        } else if r < Self::CHUNK_BELOW {
            Transform::Chunk
        } else {
            Transform::Identity
        }
    }

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_draw(rng.r#gen::<f64>())
    }

    pub fn apply<R: Rng + ?Sized>(self, word: &str, rng: &mut R) -> String {
        match self {
            Transform::Identity => word.to_string(),
            Transform::Shuffle => {
                let mut chars: Vec<char> = word.chars().collect();
                chars.shuffle(rng);
                chars.into_iter().collect()
            }
            Transform::Chunk => {
                let chars: Vec<char> = word.chars().collect();
                let mut chunks: Vec<String> = Vec::new();
                let mut i = 0;
                while i < chars.len() {
                    let len = (chars.len() - i).min(rng.gen_range(1..=3));
                    chunks.push(chars[i..i + len].iter().collect());
                    i += len;
                }
                chunks.join(" ")
            }
        }
    }
}

/// Base word for a level before any transform: uniform pick from the word
/// list, with a 50% chance of repeating the first letter at the end once the
/// level reaches `lengthen_from_level`.
pub fn base_word<R: Rng + ?Sized>(level: u32, lengthen_from_level: u32, rng: &mut R) -> String {
    let base = crate::WORDS[rng.gen_range(0..crate::WORDS.len())];
    let mut word = base.to_string();
    if level >= lengthen_from_level && rng.gen_bool(0.5) {
        if let Some(first) = base.chars().next() {
            word.push(first);
        }
    }
    word
}

/// Target string the player must type to open the door.
pub fn generate_target<R: Rng + ?Sized>(level: u32, lengthen_from_level: u32, rng: &mut R) -> String {
    let word = base_word(level, lengthen_from_level, rng);
    Transform::pick(rng).apply(&word, rng)
}
