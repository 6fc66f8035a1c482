pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod models;
pub mod navigation;
pub mod seed;
pub mod store;
pub mod tracing_setup;

pub use config::{CoreConfig, Persistence};
pub use controller::{AppController, Intent};
pub use error::{CoreError, LookupKind};
pub use navigation::{LogModalState, NavigationState, Tab, View, ViewKind};
