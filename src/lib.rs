//! Local-first shopping lists.
//!
//! Named lists of items that can be checked off, kept in memory by a
//! [`lists::ListStore`] and written through to on-device storage after every
//! change. [`state::AppState`] is the entry point for a presentation layer.

pub mod config;
pub mod db;
pub mod ids;
pub mod lists;
pub mod model;
pub mod services;
pub mod state;
pub mod storage;
pub mod view;
