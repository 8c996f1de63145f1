//! replace a matched step with a sub-path
use crate::address::AddressPath;
use crate::parse::parse;
use crate::Error;

impl AddressPath {
    /// Replace the step where `prefix` ends with all steps of `replacement`
    ///
    /// The prefix is located with [AddressPath::find_end_path]. Exactly one step of `self` is
    /// removed, everything before and after it is kept. Returns an unchanged copy when the prefix
    /// is not found.
    ///
    /// ```
    /// # use terrafix::AddressPath;
    /// let reference: AddressPath = "res.name.block[0].old".parse().unwrap();
    /// let prefix: AddressPath = "res.name.block.old".parse().unwrap();
    /// let replacement: AddressPath = "nested[0].new".parse().unwrap();
    ///
    /// let replaced = reference.replace(&prefix, &replacement);
    /// assert_eq!(replaced.to_string(), "res.name.block[0].nested[0].new");
    /// ```
    #[tracing::instrument(level = "trace", skip_all, fields(reference = %self, prefix = %prefix, replacement = %replacement))]
    pub fn replace(&self, prefix: &AddressPath, replacement: &AddressPath) -> AddressPath {
        let Some(end) = self.find_end_path(prefix) else {
            tracing::trace!("prefix not found");
            return self.clone();
        };

        let replaced: AddressPath = self[..end]
            .iter()
            .chain(replacement.iter())
            .chain(self[end + 1..].iter())
            .cloned()
            .collect();

        tracing::trace!(%replaced, "after replacement");
        replaced
    }

    /// Text version of [AddressPath::replace]
    ///
    /// Fails only when `prefix` or `replacement` are not valid addresses.
    pub fn replace_str(&self, prefix: &str, replacement: &str) -> Result<AddressPath, Error> {
        Ok(self.replace(&parse(prefix)?, &parse(replacement)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn replace(reference: &str, prefix: &str, replacement: &str) -> String {
        parse(reference)
            .unwrap()
            .replace_str(prefix, replacement)
            .unwrap()
            .to_string()
    }

    #[test]
    fn not_found() {
        assert_eq!(replace("a.b.c", "foo", "bar"), "a.b.c");
    }

    #[test]
    fn replace_at_the_head() {
        assert_eq!(replace("a.b.c", "a", "z"), "z.b.c");
    }

    #[test]
    fn replace_at_the_middle() {
        assert_eq!(replace("a.b.c", "a.b", "z"), "a.z.c");
    }

    #[test]
    fn replace_at_the_rear() {
        assert_eq!(replace("a.b.c", "a.b.c", "z"), "a.b.z");
    }

    #[test]
    fn skipped_indices_are_kept() {
        assert_eq!(replace("a[0].b[1].c", "a.b", "x.y"), "a[0].x.y[1].c");
    }

    #[test]
    fn replace_matched_index() {
        assert_eq!(replace("a[0].b", "a[0]", "first"), "a.first.b");
    }

    #[test]
    fn length_after_replacement() {
        let reference = parse("a[0].b.c").unwrap();
        let replacement = parse("x.y.z").unwrap();

        let replaced = reference.replace(&parse("a.b").unwrap(), &replacement);
        assert_eq!(replaced.len(), reference.len() - 1 + replacement.len());
    }

    #[test]
    fn empty_prefix_keeps_reference() {
        let reference = parse("a.b").unwrap();
        assert_eq!(
            reference.replace(&AddressPath::new(), &parse("z").unwrap()),
            reference
        );
    }

    #[test]
    fn empty_replacement_removes_step() {
        let reference = parse("a.b.c").unwrap();
        let replaced = reference.replace(&parse("a.b").unwrap(), &AddressPath::new());
        assert_eq!(replaced.to_string(), "a.c");
    }

    #[test]
    fn malformed_replacement_text() {
        let reference = parse("a.b.c").unwrap();
        assert!(reference
            .replace_str("a.b", "")
            .unwrap_err()
            .is_malformed_address());
    }
}
