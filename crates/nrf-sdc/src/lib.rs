//! nrf-sdc - Safe Rust interface to the nRF SoftDevice Controller and MPSL
//!
//! This library wraps the prebuilt Bluetooth LE controller (SDC) and the Multiprotocol Service
//! Layer (MPSL) from Nordic's nrfxlib. It provides typed configuration for both libraries, a
//! host-facing HCI transport with command encoding and event parsing, and the MPSL services
//! (clocks, timeslots, coexistence, temperature and TX power limits).
//!
//! The raw declarations are re-exported as [`raw`] for anything not covered here.
//!
//! Bring-up order is: [`mpsl::init`], [`sdc::init`], [`sdc::enable`], after which HCI traffic
//! flows through [`hci::transport`]. The integrating firmware routes the radio, timer, RTC and
//! clock interrupts to the handlers in [`mpsl`] and drives [`mpsl::run`] from an executor.

#![cfg_attr(not(test), no_std)]

// Must be first so the logging macros are visible everywhere
mod fmt;

pub use nrf_sdc_sys as raw;

pub mod error;
pub mod hci;
pub mod mpsl;
pub mod sdc;

// Re-export common types for convenience
pub use error::Error;
pub use hci::{HciCommand, HciEvent, LeAdvertisingReport, Packet};
pub use mpsl::{ClockConfig, LfClock};
pub use sdc::{BufferConfig, Features};
