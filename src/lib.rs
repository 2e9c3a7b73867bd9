//! Crosswalk signal firmware library.
//!
//! Exposes the pure-logic modules for integration testing and host-side
//! runs.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod fsm;
pub mod pins;

pub mod adapters;
pub mod drivers;
