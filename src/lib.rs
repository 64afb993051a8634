//! Shift attendance engine
//!
//! This crate classifies employee check-ins and check-outs against
//! per-shift time windows, persists the administrator's time and access
//! settings, and exposes both through an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod config;
pub mod error;
pub mod models;
