//! mindcare-core
//!
//! Pure domain types shared by every MindCare crate: subscales and their
//! scores, severity labels, and the analysis result a session produces.
//! No I/O here.

pub mod error;
pub mod models;
