use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use redb::{Database, ReadableTable, TableDefinition};

use crate::api::{DbState, CURRENT_SCHEMA};
use crate::maintenance::quarantine_corrupt_file;
use crate::{LocalStateStore, StorageError};

const META: TableDefinition<&str, &str> = TableDefinition::new("meta");
const LOCAL_STATE: TableDefinition<&str, &[u8]> = TableDefinition::new("local_state");

const META_FORMAT_KEY: &str = "format";
const META_FORMAT_VALUE: &str = "bazaar-redb";
const META_SCHEMA_VERSION: &str = "schema_version";
const META_CREATED_AT: &str = "created_at";

/// Local state kept in a single redb file.
///
/// Databases are shared per path for the lifetime of the process, so several
/// handles pointing at the same file never trip over redb's exclusive lock.
#[derive(Debug, Clone)]
pub struct RedbLocalStore {
    path: Utf8PathBuf,
}

impl RedbLocalStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self::new(dir.join(bazaar_config::LOCAL_STATE_FILENAME))
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn is_corrupt_open_error(err: &redb::DatabaseError) -> bool {
        match err {
            redb::DatabaseError::Storage(storage) => match storage {
                redb::StorageError::Corrupted(_) => true,
                redb::StorageError::Io(ioe) => matches!(
                    ioe.kind(),
                    std::io::ErrorKind::InvalidData | std::io::ErrorKind::UnexpectedEof
                ),
                _ => false,
            },
            _ => false,
        }
    }

    fn db_cache() -> &'static Mutex<HashMap<Utf8PathBuf, Arc<Database>>> {
        static CACHE: OnceLock<Mutex<HashMap<Utf8PathBuf, Arc<Database>>>> = OnceLock::new();
        CACHE.get_or_init(|| Mutex::new(HashMap::new()))
    }

    fn cached(&self) -> Option<Arc<Database>> {
        let mut cache = Self::db_cache()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match cache.get(&self.path) {
            Some(_) if !self.path.exists() => {
                cache.remove(&self.path);
                None
            }
            Some(db) => Some(db.clone()),
            None => None,
        }
    }

    fn remember(&self, db: Database) -> Arc<Database> {
        let db = Arc::new(db);
        Self::db_cache()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(self.path.clone(), db.clone());
        db
    }

    fn open_or_create(&self) -> Result<Arc<Database>, StorageError> {
        if let Some(db) = self.cached() {
            return Ok(db);
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = if self.path.exists() {
            self.open_file()?
        } else {
            Database::create(self.path.as_std_path())?
        };
        self.checked(db)
    }

    /// `None` when no database file exists yet.
    fn open_existing(&self) -> Result<Option<Arc<Database>>, StorageError> {
        if let Some(db) = self.cached() {
            return Ok(Some(db));
        }
        if !self.path.exists() {
            return Ok(None);
        }
        let db = self.open_file()?;
        self.checked(db).map(Some)
    }

    fn open_file(&self) -> Result<Database, StorageError> {
        match Database::open(self.path.as_std_path()) {
            Ok(db) => Ok(db),
            Err(redb::DatabaseError::DatabaseAlreadyOpen) => Err(StorageError::DatabaseAlreadyOpen),
            Err(e) if Self::is_corrupt_open_error(&e) => {
                let _ = quarantine_corrupt_file(&self.path);
                Err(StorageError::Corrupt)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn checked(&self, db: Database) -> Result<Arc<Database>, StorageError> {
        if let Err(e) = Self::ensure_schema(&db) {
            drop(db);
            if matches!(e, StorageError::Corrupt) {
                let _ = quarantine_corrupt_file(&self.path);
            }
            return Err(e);
        }
        Ok(self.remember(db))
    }

    fn ensure_schema(db: &Database) -> Result<(), StorageError> {
        let write_tx = db.begin_write()?;
        {
            let mut meta = write_tx.open_table(META)?;
            let format: Option<String> = meta.get(META_FORMAT_KEY)?.map(|g| g.value().to_string());
            if format.is_none() {
                let schema_version = CURRENT_SCHEMA.to_string();
                let created_at = Utc::now().to_rfc3339();
                meta.insert(META_FORMAT_KEY, META_FORMAT_VALUE)?;
                meta.insert(META_SCHEMA_VERSION, schema_version.as_str())?;
                meta.insert(META_CREATED_AT, created_at.as_str())?;
            } else if format.as_deref() != Some(META_FORMAT_VALUE) {
                return Err(StorageError::Corrupt);
            }
        }
        let _ = write_tx.open_table(LOCAL_STATE)?;
        write_tx.commit()?;

        let read_tx = db.begin_read()?;
        let meta = read_tx.open_table(META)?;
        let schema_version = meta
            .get(META_SCHEMA_VERSION)?
            .and_then(|g| g.value().parse::<u32>().ok())
            .unwrap_or(0);
        if schema_version == 0 {
            return Err(StorageError::Corrupt);
        }
        if schema_version > CURRENT_SCHEMA {
            return Err(StorageError::NewerSchema {
                found: schema_version,
                supported: CURRENT_SCHEMA,
            });
        }
        Ok(())
    }
}

impl LocalStateStore for RedbLocalStore {
    fn validate(&self) -> Result<DbState, StorageError> {
        if !self.path.exists() {
            return Ok(DbState::Missing);
        }
        if self.cached().is_some() {
            return Ok(DbState::Valid);
        }

        match self.open_existing() {
            Ok(Some(_)) => Ok(DbState::Valid),
            Ok(None) => Ok(DbState::Missing),
            Err(StorageError::Corrupt) => Ok(DbState::Corrupt),
            Err(StorageError::DatabaseAlreadyOpen) => Ok(DbState::Busy),
            Err(StorageError::NewerSchema { found, supported }) => {
                Ok(DbState::NewerSchema { found, supported })
            }
            Err(e) => Err(e),
        }
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let Some(db) = self.open_existing()? else {
            return Ok(None);
        };
        let read_tx = db.begin_read()?;
        let table = read_tx.open_table(LOCAL_STATE)?;
        let value = table.get(key)?.map(|g| g.value().to_vec());
        Ok(value)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let db = self.open_or_create()?;
        let write_tx = db.begin_write()?;
        {
            let mut table = write_tx.open_table(LOCAL_STATE)?;
            table.insert(key, value)?;
        }
        write_tx.commit()?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let Some(db) = self.open_existing()? else {
            return Ok(());
        };
        let write_tx = db.begin_write()?;
        {
            let mut table = write_tx.open_table(LOCAL_STATE)?;
            table.remove(key)?;
        }
        write_tx.commit()?;
        Ok(())
    }
}
