//! Raw bindings to the nRF SoftDevice Controller (SDC) and the Multiprotocol Service Layer
//! (MPSL).
//!
//! Every item mirrors a declaration from the vendor headers listed in `wrapper.h` and must stay
//! ABI compatible with the prebuilt `libsoftdevice_controller` and `libmpsl` archives. Use the
//! `nrf-sdc` crate for a safe interface.
//!
//! # Coverage
//!
//! The bindings are a curated subset of the headers in `wrapper.h`, kept in bindgen naming so
//! that `nrf-sdc-gen` output can replace them wholesale. Complete: `sdc.h`, `sdc_soc.h`,
//! `sdc_hci.h` and all of MPSL. Partial: the HCI command headers cover the Bluetooth 4.x command
//! set plus data length and PHY updates, and a handful of vendor specific commands. Not bound yet:
//!
//! - LE extended advertising and extended scanning / create connection
//! - periodic advertising, periodic sync and PAwR
//! - isochronous channels (CIG, CIS, BIG, BIS, ISO data path)
//! - LE power control, subrating, connection CTE and channel sounding
//! - vendor specific commands beyond the Zephyr set (version, commands, BD address, chip
//!   temperature, TX power), LLPM, connection update and event extension, event length and QoS
//!   reporting
//! - controller baseband commands beyond reset, event masks, flow control, TX power level and
//!   authenticated payload timeout
//! - link control commands other than disconnect and remote version, status parameters other
//!   than RSSI
//!
//! The raw HCI transport (`sdc_hci_cmd_put`, `sdc_hci_get`, ...) accepts any packet, so unbound
//! commands can still be issued as serialized HCI.

#![no_std]
#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

mod bindings;

pub use bindings::*;

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    #[test]
    fn test_packed_hci_layouts() {
        assert_eq!(size_of::<sdc_hci_cmd_cb_set_event_mask_t>(), 8);
        assert_eq!(size_of::<sdc_hci_cmd_cb_host_buffer_size_t>(), 7);
        assert_eq!(size_of::<sdc_hci_cmd_ip_read_local_version_information_return_t>(), 8);
        assert_eq!(size_of::<sdc_hci_cmd_ip_read_local_supported_commands_return_t>(), 64);
        assert_eq!(size_of::<sdc_hci_cmd_ip_read_bd_addr_return_t>(), 6);
        assert_eq!(size_of::<sdc_hci_cmd_lc_disconnect_t>(), 3);
        assert_eq!(size_of::<sdc_hci_cmd_sp_read_rssi_return_t>(), 3);
        assert_eq!(size_of::<sdc_hci_cmd_le_read_buffer_size_return_t>(), 3);
        assert_eq!(size_of::<sdc_hci_cmd_le_set_adv_params_t>(), 15);
        assert_eq!(size_of::<sdc_hci_cmd_le_set_adv_data_t>(), 32);
        assert_eq!(size_of::<sdc_hci_cmd_le_set_scan_params_t>(), 7);
        assert_eq!(size_of::<sdc_hci_cmd_le_create_conn_t>(), 25);
        assert_eq!(size_of::<sdc_hci_cmd_le_conn_update_t>(), 14);
        assert_eq!(size_of::<sdc_hci_cmd_le_read_channel_map_return_t>(), 7);
        assert_eq!(size_of::<sdc_hci_cmd_le_encrypt_t>(), 32);
        assert_eq!(size_of::<sdc_hci_cmd_le_enable_encryption_t>(), 28);
        assert_eq!(size_of::<sdc_hci_cmd_le_read_max_data_length_return_t>(), 8);
        assert_eq!(size_of::<sdc_hci_cmd_le_set_phy_t>(), 7);
        assert_eq!(align_of::<sdc_hci_cmd_le_rand_return_t>(), 1);
    }

    #[test]
    fn test_vendor_specific_layouts() {
        assert_eq!(size_of::<sdc_hci_cmd_vs_zephyr_read_version_info_return_t>(), 12);
        assert_eq!(size_of::<sdc_hci_cmd_vs_zephyr_write_tx_power_t>(), 4);
        assert_eq!(size_of::<sdc_hci_cmd_vs_zephyr_read_tx_power_t>(), 3);
        assert_eq!(size_of::<sdc_hci_cmd_vs_conn_update_t>(), 10);
        assert_eq!(size_of::<sdc_hci_cmd_vs_event_length_set_t>(), 4);
        assert_eq!(size_of::<sdc_hci_subevent_vs_qos_conn_event_report_t>(), 12);
    }

    #[test]
    fn test_config_layouts() {
        assert_eq!(size_of::<sdc_cfg_role_count_t>(), 1);
        assert_eq!(size_of::<sdc_cfg_buffer_cfg_t>(), 6);
        assert_eq!(size_of::<sdc_cfg_event_length_t>(), 4);
        assert_eq!(size_of::<sdc_cfg_t>(), 8);
        assert_eq!(align_of::<sdc_cfg_t>(), 4);
    }

    #[test]
    fn test_mpsl_layouts() {
        assert_eq!(size_of::<mpsl_clock_lfclk_cfg_t>(), 8);
        assert_eq!(align_of::<mpsl_clock_lfclk_cfg_t>(), 2);
        assert_eq!(size_of::<mpsl_timeslot_request_earliest_t>(), 12);
        assert_eq!(size_of::<mpsl_timeslot_request_normal_t>(), 12);
        assert_eq!(size_of::<mpsl_timeslot_request_t>(), 16);
        assert_eq!(size_of::<mpsl_cx_request_t>(), 2);
        assert_eq!(size_of::<mpsl_coex_gpiote_cfg_t>(), 8);
        assert_eq!(size_of::<mpsl_coex_802152_3wire_gpiote_if_t>(), 36);
        assert_eq!(size_of::<mpsl_tx_power_envelope_t>(), 41);
    }

    #[test]
    fn test_callback_tables_are_pointer_sized() {
        let ptr = size_of::<usize>();
        assert_eq!(size_of::<sdc_rand_source_t>(), 3 * ptr);
        assert_eq!(size_of::<mpsl_cx_interface_t>(), 5 * ptr);
        assert_eq!(size_of::<sdc_callback_t>(), ptr);
    }

    #[test]
    fn test_opcodes_match_group_layout() {
        // OGF lives in the top six bits of the opcode.
        assert_eq!(sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_RESET >> 10, 0x03);
        assert_eq!(sdc_hci_opcode_ip_SDC_HCI_OPCODE_CMD_IP_READ_BD_ADDR >> 10, 0x04);
        assert_eq!(sdc_hci_opcode_lc_SDC_HCI_OPCODE_CMD_LC_DISCONNECT >> 10, 0x01);
        assert_eq!(sdc_hci_opcode_sp_SDC_HCI_OPCODE_CMD_SP_READ_RSSI >> 10, 0x05);
        assert_eq!(sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_SCAN_ENABLE >> 10, 0x08);
        assert_eq!(sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_LLPM_MODE_SET >> 10, 0x3f);
    }

    #[test]
    fn test_transport_buffers_fit_any_hci_packet() {
        // opcode + length + parameters
        assert_eq!(HCI_CMD_PACKET_MAX_SIZE, 2 + 1 + HCI_CMD_PARAMETER_MAX_SIZE);
        // event code + length + parameters
        assert_eq!(HCI_EVENT_PACKET_MAX_SIZE, 1 + 1 + HCI_EVENT_PARAMETER_MAX_SIZE);
        let largest = HCI_CMD_PACKET_MAX_SIZE
            .max(HCI_EVENT_PACKET_MAX_SIZE)
            .max(HCI_DATA_PACKET_MAX_SIZE);
        assert_eq!(HCI_MSG_BUFFER_MAX_SIZE, largest);
    }

    #[test]
    fn test_errno_values() {
        assert_eq!(NRF_EPERM, 1);
        assert_eq!(NRF_EINVAL, 22);
        assert_eq!(NRF_EAGAIN, 35);
        assert_eq!(NRF_EOPNOTSUPP, 45);
    }
}
