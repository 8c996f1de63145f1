//! anchored pattern matching
//!
//! A reference like `res.name.block[0].nested.attr` and a schema pattern like
//! `res.name.block.nested.attr` describe the same attribute. The reference carries an index
//! where the schema describes a list, set or map hop.
//!
//! Matching walks both paths from the start:
//! - an index in the reference is skipped when the pattern does not expect an index at that point
//! - every other step must be equal (same kind, same value)
//!
//! Only indices on the reference side are ever skipped. Matching always begins at the first step
//! of the reference; there is no search for the pattern at other offsets.
use crate::address::{AddressPath, Step};
use crate::parse::parse;
use crate::Error;

/// Walk `concrete` and `pattern` side by side
///
/// Returns the number of consumed `concrete` steps when the pattern was fully consumed.
fn walk(concrete: &[Step], pattern: &[Step]) -> Option<usize> {
    let (mut i, mut j) = (0, 0);

    loop {
        if j == pattern.len() {
            return Some(i);
        }

        let current = concrete.get(i)?;
        if current.is_index() && !pattern[j].is_index() {
            // collection hop without a counterpart in the pattern
            i += 1;
            continue;
        }

        if current != &pattern[j] {
            return None;
        }

        i += 1;
        j += 1;
    }
}

impl AddressPath {
    /// `true` when this reference is the same address as `pattern`, modulo skipped indices
    ///
    /// All steps of the reference must be consumed, trailing indices included.
    pub fn matches_path(&self, pattern: &AddressPath) -> bool {
        walk(self, pattern) == Some(self.len())
    }

    /// Position of the reference step that matched the last step of `pattern`
    ///
    /// Steps following that position are ignored. `None` when the pattern does not occur at the
    /// start of the reference (or when the pattern is empty).
    pub fn find_end_path(&self, pattern: &AddressPath) -> Option<usize> {
        walk(self, pattern).and_then(|consumed| consumed.checked_sub(1))
    }

    /// Text version of [AddressPath::matches_path]
    ///
    /// An empty reference never matches. An unparsable `pattern` (including the empty string) is
    /// an error.
    pub fn matches(&self, pattern: &str) -> Result<bool, Error> {
        let pattern = parse(pattern)?;
        if self.is_empty() {
            return Ok(false);
        }

        Ok(self.matches_path(&pattern))
    }

    /// Text version of [AddressPath::find_end_path]
    ///
    /// Same error rules as [AddressPath::matches].
    pub fn find_end(&self, pattern: &str) -> Result<Option<usize>, Error> {
        let pattern = parse(pattern)?;
        if self.is_empty() {
            return Ok(None);
        }

        Ok(self.find_end_path(&pattern))
    }
}
