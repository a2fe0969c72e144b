//! Application layer for chatmock.
//!
//! This crate provides the use-case implementation that coordinates the
//! domain and infrastructure layers: the editing workbench the UI drives.

pub mod workbench;

pub use workbench::Workbench;
