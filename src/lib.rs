//! QR Baghdad — offline-first QR code generator with bounded history.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod cache;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
