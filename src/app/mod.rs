//! Application core — pure signal logic, zero I/O.
//!
//! The phase sequence, the button-interruptible wait and the timing policy
//! live here.  All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable without
//! real peripherals.

pub mod events;
pub mod input;
pub mod ports;
pub mod service;
