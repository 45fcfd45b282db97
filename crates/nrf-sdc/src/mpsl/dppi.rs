//! DPPI channels reserved by MPSL on nRF53 and nRF91 devices
//!
//! MPSL publishes RADIO events on these channels while it owns the radio. Applications must not
//! allocate them.

use crate::raw;

pub const RADIO_READY: u8 = raw::MPSL_DPPI_RADIO_PUBLISH_READY_CHANNEL_IDX as u8;
pub const RADIO_ADDRESS: u8 = raw::MPSL_DPPI_RADIO_PUBLISH_ADDRESS_CHANNEL_IDX as u8;
pub const RADIO_END: u8 = raw::MPSL_DPPI_RADIO_PUBLISH_END_CHANNEL_IDX as u8;
pub const RADIO_DISABLED: u8 = raw::MPSL_DPPI_RADIO_PUBLISH_DISABLED_CH_IDX as u8;

pub const RESERVED: [u8; 4] = [RADIO_READY, RADIO_ADDRESS, RADIO_END, RADIO_DISABLED];

/// Bitmask of the reserved channels, for masking a DPPI channel allocator
pub const RESERVED_MASK: u32 = {
    let mut mask = 0;
    let mut i = 0;
    while i < RESERVED.len() {
        mask |= 1 << RESERVED[i];
        i += 1;
    }
    mask
};

pub fn is_reserved(channel: u8) -> bool {
    RESERVED.contains(&channel)
}
