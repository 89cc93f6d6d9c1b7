//! UI domains: each owns its state, messages and update handlers

pub mod drawer;
pub mod settings;
