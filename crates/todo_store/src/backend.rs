//! Backend selection

use std::fmt;
use std::sync::Arc;

use crate::{MemoryTodoStore, PostgresTodoStore, SqliteTodoStore, StoreResult, TodoStore};

/// Storage backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Process memory, lost on shutdown
    Memory,
    /// PostgreSQL database
    Postgres,
    /// SQLite database
    Sqlite,
}

impl Backend {
    /// Picks a backend from an optional connection string.
    ///
    /// A missing or blank URL selects the in-memory store; `sqlite:` URLs
    /// select SQLite and anything else is handed to PostgreSQL.
    pub fn from_database_url(database_url: Option<&str>) -> Self {
        match database_url.map(str::trim) {
            None | Some("") => Self::Memory,
            Some(url) if url.starts_with("sqlite:") => Self::Sqlite,
            Some(_) => Self::Postgres,
        }
    }

    /// Human-readable label shown on the page
    pub fn label(&self) -> &'static str {
        match self {
            Self::Memory => "In-Memory (ephemeral)",
            Self::Postgres => "PostgreSQL (persistent)",
            Self::Sqlite => "SQLite (persistent)",
        }
    }

    /// Whether items survive a restart
    pub fn is_persistent(&self) -> bool {
        !matches!(self, Self::Memory)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opens the store selected by `database_url`.
pub async fn open_store(database_url: Option<&str>) -> StoreResult<(Arc<dyn TodoStore>, Backend)> {
    let backend = Backend::from_database_url(database_url);
    let url = database_url.map(str::trim).unwrap_or_default();

    let store: Arc<dyn TodoStore> = match backend {
        Backend::Memory => Arc::new(MemoryTodoStore::new()),
        Backend::Postgres => Arc::new(PostgresTodoStore::connect(url).await?),
        Backend::Sqlite => Arc::new(SqliteTodoStore::connect(url).await?),
    };

    tracing::info!(backend = %backend, persistent = backend.is_persistent(), "Opened todo store");
    Ok((store, backend))
}
