pub mod chat;
pub mod group;
pub mod health;
pub mod metric;
pub mod post;

pub use chat::{ChatMessage, Contact, Sender};
pub use group::{Group, GroupPost};
pub use health::HealthRecord;
pub use metric::{display_progress, Metric};
pub use post::Post;
