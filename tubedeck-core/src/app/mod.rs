//! Composition root
//!
//! Everything process-wide (device class, language table, style context,
//! settings store) is decided here once and injected into the domains.

pub mod bootstrap;

pub use bootstrap::{BootstrapError, ClientComposition};
