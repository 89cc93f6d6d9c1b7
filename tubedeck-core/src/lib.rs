//! # Tubedeck Core
//!
//! View-model layer of the tubedeck settings and navigation screens.
//!
//! ## Overview
//!
//! - **Preference resolution**: Maps the boolean flags of a settings record to
//!   exactly one option per domain (language, player engine, playback
//!   transport, tracking) and maps an option back to the patch selecting it
//! - **Design tokens**: Compact and expanded layout constants chosen by the
//!   injected device class
//! - **Settings domain**: Overview rows, selector lists and the update handler
//!   that forwards selections to the settings store
//! - **Drawer domain**: Navigation entries gated by login state, drawer
//!   geometry and TV focus styling
//! - **Services**: Settings store and account service seams, with in-memory
//!   and JSON file stores
//!
//! ## Architecture
//!
//! - [`preferences`]: The [`Preference`](preferences::Preference) trait and
//!   its domains
//! - [`design_tokens`]: Token sets and the [`StyleContext`](design_tokens::StyleContext)
//! - [`domains`]: Settings and drawer view models
//! - [`services`]: Collaborator traits and reference stores
//! - [`app`]: Composition root
//!
//! ## Examples
//!
//! ```
//! use tubedeck_core::preferences::{PlayerEngine, Preference};
//! use tubedeck_model::AppSettings;
//!
//! let settings = AppSettings::default().patched(&PlayerEngine::Vlc.patch());
//! assert_eq!(PlayerEngine::resolve(&settings), PlayerEngine::Vlc);
//! ```
#![allow(missing_docs)]

pub mod app;
pub mod design_tokens;
pub mod domains;
pub mod error;
pub mod preferences;
pub mod services;

pub use error::{Result, SettingsError, StoreError};
