//! errors surfaced by address parsing and the upgrade boundary

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Text does not follow the address grammar
    #[error("malformed address {address:?}: {reason}")]
    MalformedAddress { address: String, reason: String },

    #[error("unknown block type {0:?} (expected provider, resource or datasource)")]
    UnknownBlockType(String),

    #[error("upgrading {block_type} {block_name:?} failed: {message}")]
    Upgrade {
        block_type: String,
        block_name: String,
        message: String,
    },

    #[error(
        "upgrading {block_type} {block_name:?} returned {actual} references, expected {expected}"
    )]
    CardinalityMismatch {
        block_type: String,
        block_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unable to parse block definition")]
    DefinitionParse(#[from] hcl_edit::parser::Error),

    #[error("block definition does not contain a block")]
    MissingBlock,
}

impl Error {
    pub(crate) fn malformed(address: &str, reason: impl ToString) -> Self {
        Error::MalformedAddress {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }

    /// `true` for [Error::MalformedAddress]
    pub fn is_malformed_address(&self) -> bool {
        matches!(self, Error::MalformedAddress { .. })
    }
}
