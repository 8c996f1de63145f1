//! # terrafix - attribute addressing for config upgrades
//!
//! When a provider changes the shape of a schema (an attribute is renamed, moved into a nested
//! block, a list becomes a single block, ...) existing configuration has to be rewritten. This
//! crate provides the address handling used for that.
//!
//! ## Introduction for developers
//!
//! ### Terms
//!
//! - an **address** ([AddressPath]) is a list of **steps** ([Step])
//! - a step is either a name (`.foo`) or an index ([IndexKey]: `[0]`, `[key]`, `[*]`)
//! - a **reference** is an address as written in a document: `foo_resource.name.block[0].attr`
//! - a **pattern** is an address as known from a schema: `foo_resource.name.block.attr`
//!
//! ### Parsing and formatting
//!
//! see [parse::parse] and [address]
//!
//! Address text is parsed with the hcl expression parser. The canonical text form writes all
//! indices in brackets, so `a.0.b` is formatted as `a[0].b`.
//!
//! ### Matching
//!
//! see [matcher]
//!
//! A pattern matches a reference when both describe the same attribute. Indices in the reference
//! that the pattern does not mention are skipped.
//!
//! | reference     | pattern   | [AddressPath::matches] | [AddressPath::find_end] |
//! |---------------|-----------|------------------------|-------------------------|
//! | `a.0.b`       | `a.b`     | `true`                 | `Some(2)`               |
//! | `a[0].b[1]`   | `a.b`     | `false`                | `Some(2)`               |
//! | `a[0].b[1]`   | `a.b[1]`  | `true`                 | `Some(3)`               |
//! | `a[0].b[1]`   | `b`       | `false`                | `None`                  |
//!
//! Matching is anchored at the first step of the reference.
//!
//! ### Replacing
//!
//! see [splice]
//!
//! [AddressPath::replace] finds where a pattern ends in a reference and swaps that single step for
//! a replacement path: replacing `a.b` with `z` in `a.b.c` results in `a.z.c`.
//!
//! ### Upgrading
//!
//! see [upgrade] and [registry]
//!
//! The host calls [upgrade::ReferenceUpgrade] or [upgrade::DefinitionUpgrade] with a block type,
//! block name and schema version. The matching upgrader is looked up in a [registry::Registry]
//! and does the actual rewriting, usually with [AddressPath::replace].
//!
pub mod address;
mod error;
pub mod matcher;
pub mod parse;
pub mod registry;
pub mod splice;
pub mod upgrade;

pub use address::{AddressPath, IndexKey, Step};
pub use error::Error;
pub use parse::parse;
