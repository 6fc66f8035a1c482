pub mod app_data_store;
pub mod chat_store;
pub mod directory;
pub mod feed_store;
pub mod health_ledger;
pub mod storage;

pub use app_data_store::AppDataStore;
pub use chat_store::ChatStore;
pub use directory::Directory;
pub use feed_store::FeedStore;
pub use health_ledger::HealthLedger;
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, PersistentStore, StorageError, StorageKey,
    UnavailableStore,
};
