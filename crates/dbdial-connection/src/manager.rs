//! Connection manager for named repositories

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use dbdial_core::{ConnectionRecord, DbDialError, Result};

use crate::{DatabaseOpener, Repository};

/// Manages the repositories opened from a configuration file
pub struct ConnectionManager {
    /// Client used to open handles
    opener: Arc<dyn DatabaseOpener>,

    /// Open repositories by record name
    active: RwLock<HashMap<String, Arc<Repository>>>,
}

impl ConnectionManager {
    /// Create a new connection manager
    pub fn new(opener: Arc<dyn DatabaseOpener>) -> Self {
        Self {
            opener,
            active: RwLock::new(HashMap::new()),
        }
    }

    /// Open a repository for a record under the record's name
    #[tracing::instrument(skip(self, record), fields(name = %record.name))]
    pub async fn open(&self, record: ConnectionRecord) -> Result<Arc<Repository>> {
        if self.is_open(&record.name) {
            return Err(DbDialError::Configuration(format!(
                "Connection [{}] is already open",
                record.name
            )));
        }

        let name = record.name.clone();
        let repo = Arc::new(Repository::new(record, self.opener.as_ref()).await?);

        // Another task may have opened the same name while we were connecting
        let duplicate = {
            let mut active = self.active.write();
            if active.contains_key(&name) {
                true
            } else {
                active.insert(name.clone(), repo.clone());
                false
            }
        };
        if duplicate {
            repo.close().await?;
            return Err(DbDialError::Configuration(format!(
                "Connection [{}] is already open",
                name
            )));
        }

        Ok(repo)
    }

    /// Open every record, stopping at the first failure.
    ///
    /// Repositories opened before the failure stay open.
    pub async fn open_all(&self, records: Vec<ConnectionRecord>) -> Result<()> {
        for record in records {
            self.open(record).await?;
        }
        Ok(())
    }

    /// Get an open repository
    pub fn get(&self, name: &str) -> Option<Arc<Repository>> {
        let repo = self.active.read().get(name).cloned();
        if repo.is_none() {
            tracing::debug!(name = %name, "repository not open");
        }
        repo
    }

    /// Check if a repository is open
    pub fn is_open(&self, name: &str) -> bool {
        self.active.read().contains_key(name)
    }

    /// Names of the open repositories, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.active.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Close and forget a repository
    #[tracing::instrument(skip(self))]
    pub async fn close(&self, name: &str) -> Result<()> {
        let repo = self.active.write().remove(name);
        if let Some(repo) = repo {
            repo.close().await?;
        }
        Ok(())
    }

    /// Close every repository. All are closed even if some fail; the first
    /// error is returned.
    pub async fn close_all(&self) -> Result<()> {
        let repos: Vec<_> = self.active.write().drain().collect();
        let mut first_error = None;
        for (name, repo) in repos {
            if let Err(e) = repo.close().await {
                tracing::error!(name = %name, error = %e, "failed to close repository");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
