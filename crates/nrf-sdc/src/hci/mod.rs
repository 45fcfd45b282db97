//! Bluetooth HCI (Host Controller Interface) implementation
//!
//! This module provides the host side of the HCI link to the SoftDevice Controller: command
//! encoding, event parsing, the packet transport and the controller's direct command API.

pub mod cmd;
pub mod constants;
pub mod packet;
pub mod transport;
pub mod vs;

#[cfg(test)]
mod tests;

pub use packet::{AclHeader, BoundaryFlag, HciCommand, HciEvent, LeAdvertisingReport, Opcode};
pub use transport::Packet;
