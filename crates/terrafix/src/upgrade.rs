//! upgrade entry points
//!
//! These are called by the host with a block type (`provider`, `resource`, `datasource`), the
//! block name, the schema version recorded in state and the raw content to upgrade.
//! Blocks without a registered upgrader pass through unchanged. Any failure aborts the whole
//! request.
use crate::address::AddressPath;
use crate::parse::parse;
use crate::registry::{DefinitionUpgraders, ReferenceUpgraders};
use crate::Error;

/// Upgrade reference origins pointing at a block
#[derive(derive_new::new, Debug)]
pub struct ReferenceUpgrade {
    upgraders: ReferenceUpgraders,
}

impl ReferenceUpgrade {
    /// Upgrade `raw_contents`, returning one canonical address per input reference
    #[tracing::instrument(level = "debug", skip(self, raw_contents))]
    pub fn run<S: AsRef<str>>(
        &self,
        block_type: &str,
        block_name: &str,
        version: i64,
        raw_contents: &[S],
    ) -> Result<Vec<String>, Error> {
        let references = raw_contents
            .iter()
            .map(|content| parse(content.as_ref()))
            .collect::<Result<Vec<AddressPath>, _>>()?;

        let references = match self.upgraders.lookup(block_type, block_name) {
            Some(upgrader) => {
                let expected = references.len();
                let upgraded = upgrader(version, references).map_err(|err| Error::Upgrade {
                    block_type: block_type.to_string(),
                    block_name: block_name.to_string(),
                    message: format!("{err:#}"),
                })?;

                if upgraded.len() != expected {
                    return Err(Error::CardinalityMismatch {
                        block_type: block_type.to_string(),
                        block_name: block_name.to_string(),
                        expected,
                        actual: upgraded.len(),
                    });
                }

                upgraded
            }
            None => {
                tracing::debug!("no reference upgrader registered");
                references
            }
        };

        Ok(references.iter().map(ToString::to_string).collect())
    }
}

/// Upgrade the definition of a block
#[derive(derive_new::new, Debug)]
pub struct DefinitionUpgrade {
    upgraders: DefinitionUpgraders,
}

impl DefinitionUpgrade {
    /// Upgrade the first block found in `raw_content`
    ///
    /// Returns the whole document, formatting and comments outside of changed parts are kept.
    #[tracing::instrument(level = "debug", skip(self, raw_content))]
    pub fn run(
        &self,
        block_type: &str,
        block_name: &str,
        version: i64,
        raw_content: &str,
    ) -> Result<String, Error> {
        let mut document = hcl_edit::parser::parse_body(raw_content)?;
        let block = document.blocks_mut().next().ok_or(Error::MissingBlock)?;

        match self.upgraders.lookup(block_type, block_name) {
            Some(upgrader) => {
                upgrader(version, &mut block.body).map_err(|err| Error::Upgrade {
                    block_type: block_type.to_string(),
                    block_name: block_name.to_string(),
                    message: format!("{err:#}"),
                })?;
            }
            None => tracing::debug!("no definition upgrader registered"),
        }

        Ok(document.to_string())
    }
}
