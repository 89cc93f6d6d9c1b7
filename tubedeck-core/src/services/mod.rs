//! Collaborator seams of the settings view model
//!
//! The real persistence layer and account backend live outside this crate;
//! they are reached through the traits defined here. Two reference settings
//! stores ship with the crate.

pub mod account;
pub mod file_store;
pub mod settings_store;

pub use account::AccountService;
pub use file_store::FileSettingsStore;
pub use settings_store::{InMemorySettingsStore, SettingsStore};
