//! Direct HCI commands
//!
//! The controller can execute commands synchronously instead of going through the transport.
//! No Command Complete event is generated for these; results are returned directly.

use crate::error::{Error, RetVal};
use crate::raw;
use byteorder::{ByteOrder, LittleEndian};

/// Local version information reported by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalVersion {
    pub hci_version: u8,
    pub hci_subversion: u16,
    pub lmp_version: u8,
    pub company_identifier: u16,
    pub lmp_subversion: u16,
}

/// LE ACL buffer information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LeBufferSize {
    pub acl_data_packet_length: u16,
    pub total_num_acl_data_packets: u8,
}

pub fn reset() -> Result<(), Error> {
    unsafe { raw::sdc_hci_cmd_cb_reset() }.check()
}

pub fn set_event_mask(event_mask: u64) -> Result<(), Error> {
    let mut params = raw::sdc_hci_cmd_cb_set_event_mask_t::default();
    LittleEndian::write_u64(&mut params.event_mask, event_mask);
    unsafe { raw::sdc_hci_cmd_cb_set_event_mask(&params) }.check()
}

pub fn le_set_event_mask(event_mask: u64) -> Result<(), Error> {
    let mut params = raw::sdc_hci_cmd_le_set_event_mask_t::default();
    LittleEndian::write_u64(&mut params.le_event_mask, event_mask);
    unsafe { raw::sdc_hci_cmd_le_set_event_mask(&params) }.check()
}

/// Reads the public device address
pub fn read_bd_addr() -> Result<[u8; 6], Error> {
    let mut ret = raw::sdc_hci_cmd_ip_read_bd_addr_return_t::default();
    unsafe { raw::sdc_hci_cmd_ip_read_bd_addr(&mut ret) }.check()?;
    Ok(ret.bd_addr)
}

pub fn read_local_version() -> Result<LocalVersion, Error> {
    let mut ret = raw::sdc_hci_cmd_ip_read_local_version_information_return_t::default();
    unsafe { raw::sdc_hci_cmd_ip_read_local_version_information(&mut ret) }.check()?;
    Ok(LocalVersion::from(ret))
}

impl From<raw::sdc_hci_cmd_ip_read_local_version_information_return_t> for LocalVersion {
    fn from(ret: raw::sdc_hci_cmd_ip_read_local_version_information_return_t) -> Self {
        LocalVersion {
            hci_version: ret.hci_version,
            hci_subversion: ret.hci_subversion,
            lmp_version: ret.lmp_version,
            company_identifier: ret.company_identifier,
            lmp_subversion: ret.lmp_subversion,
        }
    }
}

/// Draws 64 random bits from the controller
pub fn le_rand() -> Result<u64, Error> {
    let mut ret = raw::sdc_hci_cmd_le_rand_return_t::default();
    unsafe { raw::sdc_hci_cmd_le_rand(&mut ret) }.check()?;
    Ok(ret.random_number)
}

pub fn le_read_buffer_size() -> Result<LeBufferSize, Error> {
    let mut ret = raw::sdc_hci_cmd_le_read_buffer_size_return_t::default();
    unsafe { raw::sdc_hci_cmd_le_read_buffer_size(&mut ret) }.check()?;
    Ok(LeBufferSize {
        acl_data_packet_length: ret.le_acl_data_packet_length,
        total_num_acl_data_packets: ret.total_num_le_acl_data_packets,
    })
}

/// Reads the RSSI of a connection in dBm
pub fn read_rssi(handle: u16) -> Result<i8, Error> {
    let params = raw::sdc_hci_cmd_sp_read_rssi_t { handle };
    let mut ret = raw::sdc_hci_cmd_sp_read_rssi_return_t::default();
    unsafe { raw::sdc_hci_cmd_sp_read_rssi(&params, &mut ret) }.check()?;
    Ok(ret.rssi)
}

pub fn disconnect(conn_handle: u16, reason: u8) -> Result<(), Error> {
    let params = raw::sdc_hci_cmd_lc_disconnect_t { conn_handle, reason };
    unsafe { raw::sdc_hci_cmd_lc_disconnect(&params) }.check()
}
