use anyhow::{Context, Result};
use bazaar_core::Order;
use bazaar_persistence::{LocalStateStore, RedbLocalStore};
use camino::Utf8PathBuf;
use directories::ProjectDirs;

use crate::ports::SelectionRepo;

const QUALIFIER: &str = "com";
const ORG: &str = "bazaar";
const APP: &str = "admin";

/// Platform data directory, created on first use.
pub fn data_dir() -> Result<Utf8PathBuf> {
    let proj_dirs = ProjectDirs::from(QUALIFIER, ORG, APP)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

    let dir = Utf8PathBuf::from_path_buf(proj_dirs.data_dir().to_path_buf())
        .map_err(|p| anyhow::anyhow!("Data directory is not UTF-8: {}", p.display()))?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {dir}"))?;
    Ok(dir)
}

/// Selection persisted in the local redb state file.
#[derive(Debug, Clone)]
pub struct RedbSelectionRepo {
    store: RedbLocalStore,
}

impl RedbSelectionRepo {
    pub fn new(store: RedbLocalStore) -> Self {
        Self { store }
    }

    pub fn in_dir(dir: &camino::Utf8Path) -> Self {
        Self::new(RedbLocalStore::in_dir(dir))
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::in_dir(&data_dir()?))
    }

    pub fn store(&self) -> &RedbLocalStore {
        &self.store
    }
}

impl SelectionRepo for RedbSelectionRepo {
    fn load(&self) -> Result<Option<Order>> {
        self.store
            .load_selected_order()
            .context("Failed to read persisted selection")
    }

    fn save(&self, order: &Order) -> Result<()> {
        self.store
            .save_selected_order(order)
            .with_context(|| format!("Failed to persist selected order #{}", order.id))
    }

    fn clear(&self) -> Result<()> {
        self.store
            .clear_selected_order()
            .context("Failed to delete persisted selection")
    }
}
