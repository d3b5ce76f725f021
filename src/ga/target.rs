//! The target string chromosomes are evolved toward.

use super::chromosome::GENE_ALPHABET;
use super::error::{GaError, Result};
use std::fmt;
use std::sync::Arc;

/// An immutable, non-empty target string over [`GENE_ALPHABET`].
///
/// Genes are drawn from the same alphabet, so any admitted target is
/// reachable by evolution.
///
/// Cloning is cheap: every chromosome evolved against the same target
/// shares one allocation.
///
/// # Examples
///
/// ```
/// use hello_ga::ga::Target;
///
/// let target = Target::new("Hello, world!").unwrap();
/// assert_eq!(target.len(), 13);
/// assert_eq!(target.distance(b"Hello, world!"), 0);
/// assert_eq!(target.distance(b"Hello, world\""), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Target {
    bytes: Arc<[u8]>,
}

impl Target {
    /// Creates a target from a string.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] if the string is empty or
    /// contains a character outside [`GENE_ALPHABET`] (space through `y`).
    pub fn new(target: &str) -> Result<Self> {
        if target.is_empty() {
            return Err(GaError::InvalidConfiguration(
                "target must not be empty".into(),
            ));
        }
        if let Some(c) = target.chars().find(|&c| !in_alphabet(c)) {
            return Err(GaError::InvalidConfiguration(format!(
                "target character {c:?} is outside the gene alphabet (' '..='y')"
            )));
        }
        Ok(Self {
            bytes: target.as_bytes().into(),
        })
    }

    /// Number of characters in the target.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; construction rejects empty targets.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The target characters as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The target as a string slice.
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII, which is always valid UTF-8.
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    /// Sum of absolute character-code differences between `gene` and the
    /// target, position by position.
    ///
    /// Positions beyond the shorter of the two are ignored; callers
    /// guarantee equal lengths.
    pub fn distance(&self, gene: &[u8]) -> u32 {
        gene.iter()
            .zip(self.bytes.iter())
            .map(|(&g, &t)| u32::from(g.abs_diff(t)))
            .sum()
    }
}

fn in_alphabet(c: char) -> bool {
    u8::try_from(c).is_ok_and(|b| GENE_ALPHABET.contains(&b))
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Target").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
