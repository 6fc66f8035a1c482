use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};

use crate::config::{CoreConfig, Persistence};
use crate::constants::CHAT_TIME_FORMAT;
use crate::error::CoreError;
use crate::models::{ChatMessage, Metric, Post};
use crate::seed;
use crate::store::{
    ChatStore, Directory, FeedStore, FileStore, HealthLedger, PersistentStore, StorageKey,
};

/// Domain state of the app: health history, feed, chats and the directories,
/// plus the storage the durable parts are written to.
///
/// Every successful ledger or feed mutation is persisted before the call
/// returns. Chat threads are never persisted.
#[derive(Debug)]
pub struct AppDataStore {
    storage: PersistentStore,
    ledger: HealthLedger,
    feed: FeedStore,
    chats: ChatStore,
    directory: Directory,
}

impl AppDataStore {
    /// Restore state from `storage`, seeding whatever is missing or unusable.
    pub fn new(storage: PersistentStore) -> Self {
        let today = Local::now().date_naive();
        let ledger = restore_ledger(&storage, today);
        let feed = FeedStore::new(storage.load_or(StorageKey::Posts, seed::posts));

        let directory = Directory::new(seed::groups(), seed::contacts());
        let chats = ChatStore::seeded(
            directory.contacts().iter().map(|c| c.name.clone()),
            &seed::chat_transcript(),
        );

        Self {
            storage,
            ledger,
            feed,
            chats,
            directory,
        }
    }

    /// The data directory is created on first write, so an unusable one only
    /// costs durability.
    pub fn from_config(config: &CoreConfig) -> Result<Self> {
        let storage = match config.persistence {
            Persistence::Durable => PersistentStore::new(Box::new(FileStore::new(&config.data_dir))),
            Persistence::Unavailable => PersistentStore::unavailable(),
        };
        Ok(Self::new(storage))
    }

    // ===== Getters =====

    pub fn ledger(&self) -> &HealthLedger {
        &self.ledger
    }

    pub fn feed(&self) -> &FeedStore {
        &self.feed
    }

    pub fn posts(&self) -> &[Post] {
        self.feed.posts()
    }

    pub fn chats(&self) -> &ChatStore {
        &self.chats
    }

    pub fn thread(&self, contact: &str) -> &[ChatMessage] {
        self.chats.thread(contact)
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn storage(&self) -> &PersistentStore {
        &self.storage
    }

    // ===== Mutations =====

    pub fn log_metric(&mut self, metric: Metric, value: f64) -> Result<(), CoreError> {
        self.log_metric_on(metric, value, Local::now().date_naive())
    }

    /// Log with an explicit "today", for callers that own the clock.
    pub fn log_metric_on(&mut self, metric: Metric, value: f64, today: NaiveDate) -> Result<(), CoreError> {
        self.ledger.log_metric(metric, value, today)?;
        tracing::debug!(%metric, value, "logged metric");
        self.persist_health();
        Ok(())
    }

    pub fn log_metric_text(&mut self, metric: Metric, text: &str) -> Result<(), CoreError> {
        self.ledger
            .log_metric_text(metric, text, Local::now().date_naive())?;
        tracing::debug!(%metric, text, "logged metric");
        self.persist_health();
        Ok(())
    }

    pub fn toggle_like(&mut self, post_id: &str) -> Result<(), CoreError> {
        let post = self.feed.toggle_like(post_id)?;
        tracing::debug!(post_id, liked = post.liked_by_viewer, likes = post.like_count, "toggled like");
        self.persist_posts();
        Ok(())
    }

    pub fn send_message(&mut self, contact: &str, text: &str) -> Result<(), CoreError> {
        self.send_message_at(contact, text, &Local::now())
    }

    pub fn send_message_at(
        &mut self,
        contact: &str,
        text: &str,
        now: &DateTime<Local>,
    ) -> Result<(), CoreError> {
        let sent_at = now.format(CHAT_TIME_FORMAT).to_string();
        self.chats.send_message(contact, text, sent_at)?;
        tracing::debug!(contact, "sent chat message");
        Ok(())
    }

    /// Drop everything sent to `contact` and restore the seed transcript.
    pub fn reset_thread(&mut self, contact: &str) {
        self.chats.reset_thread(contact, &seed::chat_transcript());
        tracing::debug!(contact, "reset chat thread");
    }

    // ===== Persistence =====

    fn persist_health(&mut self) {
        if let Err(e) = self.storage.save(StorageKey::HealthData, self.ledger.record()) {
            tracing::warn!(error = %e, "failed to persist health data");
        }
    }

    fn persist_posts(&mut self) {
        if let Err(e) = self.storage.save(StorageKey::Posts, &self.feed.posts()) {
            tracing::warn!(error = %e, "failed to persist posts");
        }
    }
}

fn restore_ledger(storage: &PersistentStore, today: NaiveDate) -> HealthLedger {
    let record = storage.load_or(StorageKey::HealthData, || seed::health_record(today));
    HealthLedger::new(record).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "stored health data is inconsistent, using seed data");
        HealthLedger::seeded(today)
    })
}
