pub mod chat;
pub mod community;
pub mod dashboard;
pub mod group_detail;
pub mod home;
pub mod log_modal;
pub mod metric_detail;
pub mod profile;
pub mod settings;

pub use chat::{render_chat_detail, render_chat_list};
pub use community::render_community;
pub use dashboard::render_dashboard;
pub use group_detail::render_group_detail;
pub use home::render_home;
pub use log_modal::render_log_modal;
pub use metric_detail::render_metric_detail;
pub use profile::render_profile;
pub use settings::render_settings;
