//! Named-slot persistence.
//!
//! Persisted state is a handful of independent JSON values, each stored
//! under a fixed name.  [`SlotStore`] is the injection seam between the
//! record service and the backing storage: [`SqliteSlots`] keeps slots in a
//! single SQLite table on disk, [`MemorySlots`] backs tests and ephemeral
//! sessions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};

/// Byte-level access to named slots.
pub trait SlotStore {
    /// Read the raw bytes stored under `slot`, if any.
    fn get(&self, slot: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite the bytes stored under `slot`.
    fn set(&self, slot: &str, bytes: &[u8]) -> Result<()>;

    /// Drop the slot entirely.
    fn remove(&self, slot: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// SQLite-backed slots
// ---------------------------------------------------------------------------

/// Current schema version.  Bump this and extend [`migrate`] whenever the
/// schema changes.
const CURRENT_VERSION: u32 = 1;

/// Durable slot store backed by a single-table SQLite database.
pub struct SqliteSlots {
    conn: Connection,
}

impl SqliteSlots {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data
    /// directory:
    /// - Linux:   `~/.local/share/lumina/lumina.db`
    /// - macOS:   `~/Library/Application Support/com.lumina.lumina/lumina.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\lumina\lumina\data\lumina.db`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "lumina", "lumina").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("lumina.db");

        tracing::info!(path = %db_path.display(), "opening slot database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        migrate(&conn)?;

        Ok(Self { conn })
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }
}

impl SlotStore for SqliteSlots {
    fn get(&self, slot: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE name = ?1",
                params![slot],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, slot: &str, bytes: &[u8]) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO slots (name, value) VALUES (?1, ?2)",
            params![slot, bytes],
        )?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM slots WHERE name = ?1", params![slot])?;
        Ok(())
    }
}

/// Run pending schema migrations, guarded by `PRAGMA user_version` so each
/// step executes exactly once.
fn migrate(conn: &Connection) -> Result<()> {
    let current: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::debug!(
        current_version = current,
        target_version = CURRENT_VERSION,
        "checking slot schema"
    );

    if current < 1 {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS slots (
                 name  TEXT PRIMARY KEY,
                 value BLOB NOT NULL
             )",
            [],
        )?;
        conn.pragma_update(None, "user_version", 1)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// In-memory slots
// ---------------------------------------------------------------------------

/// Ephemeral slot store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlots {
    fn get(&self, slot: &str) -> Result<Option<Vec<u8>>> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(slot).cloned())
    }

    fn set(&self, slot: &str, bytes: &[u8]) -> Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(slot.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.remove(slot);
        Ok(())
    }
}
