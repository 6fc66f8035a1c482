use std::path::{Path, PathBuf};

/// Where persisted blobs go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// JSON files under `data_dir`.
    Durable,
    /// No durable storage: every load yields seed data and writes are discarded.
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
    pub persistence: Persistence,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            persistence: Persistence::Durable,
        }
    }

    /// A configuration that never touches the filesystem.
    pub fn ephemeral() -> Self {
        Self {
            persistence: Persistence::Unavailable,
            ..Self::default()
        }
    }

    pub fn with_persistence(mut self, persistence: Persistence) -> Self {
        self.persistence = persistence;
        self
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .map(|dir| dir.join("healthteen"))
            .unwrap_or_else(|| PathBuf::from("healthteen_data"));
        Self::new(data_dir)
    }
}
