//! address representation
//!
//! An [AddressPath] is an ordered list of [Step]s. It is used for two things:
//! - a *concrete reference* as found in a document, e.g. `azurerm_foo.bar.block[0].name`
//! - an *abstract pattern* describing a schema attribute, e.g. `azurerm_foo.bar.block.name`
//!
//! Patterns usually contain no indices. When matching, an index in the reference that has no
//! counterpart in the pattern is skipped (see [crate::matcher]).
//!
//! The textual form produced by [std::fmt::Display] is canonical:
//! - names are joined with `.`
//! - indices are always written in brackets: `[0]`, `[key]`, `[*]`
//!
//! Note that `a.0` is accepted by the parser but is written as `a[0]`.
use hcl::Identifier;
use serde::Serializer;
use std::fmt::{self, Write};

/// One hop in an [AddressPath]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Attribute access (`.name`)
    Name(Identifier),
    /// Collection access (`[0]`, `[key]`, `[*]`)
    Index(IndexKey),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndexKey {
    /// List/set element position
    Ordinal(u64),
    /// Map key
    Key(String),
    /// Splat, all elements
    All,
}

impl Step {
    pub fn is_index(&self) -> bool {
        matches!(self, Step::Index(_))
    }
}

impl From<Identifier> for Step {
    fn from(value: Identifier) -> Self {
        Step::Name(value)
    }
}

impl From<IndexKey> for Step {
    fn from(value: IndexKey) -> Self {
        Step::Index(value)
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKey::Ordinal(ordinal) => write!(f, "{ordinal}"),
            IndexKey::Key(key) => f.write_str(key),
            IndexKey::All => f.write_char('*'),
        }
    }
}

/// Ordered sequence of [Step]s
///
/// An empty path is valid and refers to nothing (or the root, depending on the caller).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AddressPath {
    steps: Vec<Step>,
}

impl AddressPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// New path with all steps of `other` appended
    pub fn concat(&self, other: &AddressPath) -> AddressPath {
        self.steps.iter().chain(other.steps.iter()).cloned().collect()
    }

    /// Append a [Step::Name]
    ///
    /// The name is not validated.
    pub fn attr(mut self, name: &str) -> Self {
        self.steps.push(Step::Name(Identifier::unchecked(name)));
        self
    }

    /// Append a [IndexKey::Ordinal]
    pub fn index(mut self, ordinal: u64) -> Self {
        self.steps.push(Step::Index(IndexKey::Ordinal(ordinal)));
        self
    }

    /// Append a [IndexKey::Key]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(Step::Index(IndexKey::Key(key.into())));
        self
    }

    /// Append a [IndexKey::All]
    pub fn splat(mut self) -> Self {
        self.steps.push(Step::Index(IndexKey::All));
        self
    }
}

impl std::ops::Deref for AddressPath {
    type Target = [Step];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl From<Vec<Step>> for AddressPath {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl From<&[Step]> for AddressPath {
    fn from(steps: &[Step]) -> Self {
        Self {
            steps: steps.to_vec(),
        }
    }
}

impl FromIterator<Step> for AddressPath {
    fn from_iter<T: IntoIterator<Item = Step>>(iter: T) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AddressPath {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressPath {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for AddressPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, step) in self.steps.iter().enumerate() {
            match step {
                Step::Name(name) if position == 0 => f.write_str(name.as_str())?,
                Step::Name(name) => write!(f, ".{name}")?,
                Step::Index(key) => write!(f, "[{key}]")?,
            }
        }

        Ok(())
    }
}

impl serde::ser::Serialize for AddressPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
