//! upgrader lookup by block type and block name
//!
//! A [Registry] is built by the embedding program and handed to the upgrade functions in
//! [crate::upgrade]. There is no global registration.
use crate::address::AddressPath;
use crate::Error;
use indexmap::IndexMap;

/// Upgrade reference origins (`version`, `references`) to the current schema
///
/// Must return as many references as it was given.
pub type ReferenceUpgradeFn =
    Box<dyn Fn(i64, Vec<AddressPath>) -> anyhow::Result<Vec<AddressPath>> + Send + Sync>;

/// Upgrade the body of a block definition (`version`, `body`) in place
pub type DefinitionUpgradeFn =
    Box<dyn Fn(i64, &mut hcl_edit::structure::Body) -> anyhow::Result<()> + Send + Sync>;

pub type ReferenceUpgraders = Registry<ReferenceUpgradeFn>;
pub type DefinitionUpgraders = Registry<DefinitionUpgradeFn>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Provider,
    Resource,
    DataSource,
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockType::Provider => f.write_str("provider"),
            BlockType::Resource => f.write_str("resource"),
            BlockType::DataSource => f.write_str("datasource"),
        }
    }
}

impl std::str::FromStr for BlockType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "provider" => Ok(BlockType::Provider),
            "resource" => Ok(BlockType::Resource),
            "datasource" => Ok(BlockType::DataSource),
            _ => Err(Error::UnknownBlockType(s.to_string())),
        }
    }
}

/// Upgraders keyed by [BlockType] and block name (provider name, resource type, ...)
pub struct Registry<F> {
    upgraders: IndexMap<BlockType, IndexMap<String, F>>,
}

impl<F> Registry<F> {
    pub fn new() -> Self {
        Self {
            upgraders: IndexMap::new(),
        }
    }

    /// Register an upgrader
    ///
    /// Returns the upgrader previously registered under the same key.
    pub fn register(
        &mut self,
        block_type: BlockType,
        block_name: impl Into<String>,
        upgrader: F,
    ) -> Option<F> {
        self.upgraders
            .entry(block_type)
            .or_default()
            .insert(block_name.into(), upgrader)
    }

    pub fn get(&self, block_type: BlockType, block_name: &str) -> Option<&F> {
        self.upgraders
            .get(&block_type)
            .and_then(|by_name| by_name.get(block_name))
    }

    /// Lookup by block type text
    ///
    /// An unknown block type has no upgrader.
    pub fn lookup(&self, block_type: &str, block_name: &str) -> Option<&F> {
        let block_type = match block_type.parse() {
            Ok(block_type) => block_type,
            Err(err) => {
                tracing::debug!(%err, "no upgrader");
                return None;
            }
        };

        self.get(block_type, block_name)
    }

    /// Number of registered upgraders
    pub fn len(&self) -> usize {
        self.upgraders.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F> Default for Registry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> std::fmt::Debug for Registry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (block_type, by_name) in &self.upgraders {
            map.entry(&block_type, &by_name.keys().collect::<Vec<_>>());
        }
        map.finish()
    }
}
