//! Command handlers split by domain
//!
//! - `project`: create
//! - `dev`: serve, build
//! - `ui`: ui
//! - `info`: environment report

pub mod dev;
pub mod info;
pub mod project;
pub mod ui;
