//! SPARS: a Dioxus front end for the Surveillance-Powered Antimicrobial
//! Recommendation System backend.
//!
//! - `form` - query form state and transitions
//! - `format` - answer text to HTML
//! - `api` - HTTP client for `/get_recommendation` and `/health`
//! - `ui` / `views` - components observing the form state

pub mod api;
pub mod config;
pub mod form;
pub mod format;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
