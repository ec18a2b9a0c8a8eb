//! Flat-file client repository
//!
//! The persisted document - a single pretty-printed JSON array - is the sole
//! source of truth. Every mutating operation performs a full read of the
//! document, changes the in-memory collection, then writes the whole document
//! back. The cycle is not atomic across concurrent requests: two simultaneous
//! writes race and the last writer wins. That is an accepted characteristic
//! of this low-traffic tool, documented in the README.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::client::{ClientObject, ClientRecord};
use crate::error::{CoreResult, RepoError};

pub struct ClientRepository {
    path: PathBuf,
}

impl ClientRepository {
    /// Open the repository at `path`, creating parent directories and seeding
    /// an empty document when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        if !path.exists() {
            info!("Seeding empty client document: {}", path.display());
            fs::write(&path, "[]\n")?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> CoreResult<Vec<ClientObject>> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, clients: &[ClientObject]) -> CoreResult<()> {
        let document = serde_json::to_string_pretty(clients)?;
        fs::write(&self.path, document)?;
        Ok(())
    }

    /// The full collection, in persisted order.
    pub fn list(&self) -> CoreResult<Vec<ClientObject>> {
        self.read_all()
    }

    /// Fetch a single record. Not routed over HTTP, but used by tests and
    /// kept for callers that need it.
    pub fn get(&self, id: u64) -> CoreResult<ClientObject> {
        self.read_all()?
            .into_iter()
            .find(|client| object_id(client) == Some(id))
            .ok_or(RepoError::NotFound(id))
    }

    /// Create a record from caller-supplied fields.
    ///
    /// The new id is (max existing id, or 0) + 1 - monotonic, never reusing a
    /// deleted id. Defaults are merged first, caller fields win, and `id` is
    /// always server-assigned.
    pub fn create(&self, partial: ClientObject) -> CoreResult<ClientObject> {
        let mut clients = self.read_all()?;
        let id = clients.iter().filter_map(object_id).max().unwrap_or(0) + 1;

        let mut record = ClientRecord::with_defaults(id).to_object();
        for (key, value) in partial {
            record.insert(key, value);
        }
        record.insert("id".to_string(), Value::from(id));

        clients.push(record.clone());
        self.write_all(&clients)?;
        info!("Created client {}", id);
        Ok(record)
    }

    /// Shallow-merge `partial` into an existing record. The original `id` is
    /// forcibly restored; any attempt to change it is discarded.
    pub fn update(&self, id: u64, partial: ClientObject) -> CoreResult<ClientObject> {
        let mut clients = self.read_all()?;
        let index = clients
            .iter()
            .position(|client| object_id(client) == Some(id))
            .ok_or(RepoError::NotFound(id))?;

        let record = &mut clients[index];
        for (key, value) in partial {
            record.insert(key, value);
        }
        record.insert("id".to_string(), Value::from(id));
        let updated = record.clone();

        self.write_all(&clients)?;
        debug!("Updated client {}", id);
        Ok(updated)
    }

    /// Remove a record from the collection. Hard delete, id never reused.
    pub fn delete(&self, id: u64) -> CoreResult<()> {
        let mut clients = self.read_all()?;
        let index = clients
            .iter()
            .position(|client| object_id(client) == Some(id))
            .ok_or(RepoError::NotFound(id))?;

        clients.remove(index);
        self.write_all(&clients)?;
        info!("Deleted client {}", id);
        Ok(())
    }
}

fn object_id(client: &ClientObject) -> Option<u64> {
    client.get("id").and_then(Value::as_u64)
}
