//! Services used by the application state.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence, profile and settings concerns so the
//! application state can stay focused on applying mutations and issuing
//! saves.

pub mod persistence;
pub mod profile;
pub mod settings;
