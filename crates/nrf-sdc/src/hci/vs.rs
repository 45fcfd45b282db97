//! Nordic vendor specific HCI commands and events

use crate::error::{Error, RetVal};
use crate::hci::constants::*;
use crate::hci::packet::HciEvent;
use crate::raw;
use byteorder::{ByteOrder, LittleEndian};

/// Firmware and hardware identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VersionInfo {
    pub hw_platform: u16,
    pub hw_variant: u16,
    pub fw_variant: u8,
    pub fw_version: u8,
    pub fw_revision: u16,
    pub fw_build: u32,
}

/// What a TX power handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxPowerHandle {
    Advertiser(u16),
    Scanner,
    Connection(u16),
}

impl TxPowerHandle {
    fn raw_parts(self) -> (u8, u16) {
        match self {
            Self::Advertiser(handle) => (
                raw::sdc_hci_vs_tx_power_handle_type_SDC_HCI_VS_TX_POWER_HANDLE_TYPE_ADV as u8,
                handle,
            ),
            Self::Scanner => (
                raw::sdc_hci_vs_tx_power_handle_type_SDC_HCI_VS_TX_POWER_HANDLE_TYPE_SCAN as u8,
                0,
            ),
            Self::Connection(handle) => (
                raw::sdc_hci_vs_tx_power_handle_type_SDC_HCI_VS_TX_POWER_HANDLE_TYPE_CONN as u8,
                handle,
            ),
        }
    }
}

pub fn read_version_info() -> Result<VersionInfo, Error> {
    let mut ret = raw::sdc_hci_cmd_vs_zephyr_read_version_info_return_t::default();
    unsafe { raw::sdc_hci_cmd_vs_zephyr_read_version_info(&mut ret) }.check()?;
    Ok(VersionInfo {
        hw_platform: ret.hw_platform,
        hw_variant: ret.hw_variant,
        fw_variant: ret.fw_variant,
        fw_version: ret.fw_version,
        fw_revision: ret.fw_revision,
        fw_build: ret.fw_build,
    })
}

/// Overrides the public device address
pub fn write_bd_addr(bd_addr: [u8; 6]) -> Result<(), Error> {
    let params = raw::sdc_hci_cmd_vs_zephyr_write_bd_addr_t { bd_addr };
    unsafe { raw::sdc_hci_cmd_vs_zephyr_write_bd_addr(&params) }.check()
}

/// Chip temperature in whole degrees Celsius
pub fn read_chip_temp() -> Result<i8, Error> {
    let mut ret = raw::sdc_hci_cmd_vs_zephyr_read_chip_temp_return_t::default();
    unsafe { raw::sdc_hci_cmd_vs_zephyr_read_chip_temp(&mut ret) }.check()?;
    Ok(ret.temp)
}

/// Requests a TX power level and returns the level the controller selected
pub fn write_tx_power(handle: TxPowerHandle, dbm: i8) -> Result<i8, Error> {
    let (handle_type, handle) = handle.raw_parts();
    let params = raw::sdc_hci_cmd_vs_zephyr_write_tx_power_t {
        handle_type,
        handle,
        tx_power_level: dbm,
    };
    let mut ret = raw::sdc_hci_cmd_vs_zephyr_write_tx_power_return_t::default();
    unsafe { raw::sdc_hci_cmd_vs_zephyr_write_tx_power(&params, &mut ret) }.check()?;
    let selected = ret.selected_tx_power;
    debug!("TX power requested {} dBm, selected {} dBm", dbm, selected);
    Ok(selected)
}

pub fn read_tx_power(handle: TxPowerHandle) -> Result<i8, Error> {
    let (handle_type, handle) = handle.raw_parts();
    let params = raw::sdc_hci_cmd_vs_zephyr_read_tx_power_t { handle_type, handle };
    let mut ret = raw::sdc_hci_cmd_vs_zephyr_read_tx_power_return_t::default();
    unsafe { raw::sdc_hci_cmd_vs_zephyr_read_tx_power(&params, &mut ret) }.check()?;
    Ok(ret.selected_tx_power)
}

/// Enables Low Latency Packet Mode
pub fn set_llpm_mode(enable: bool) -> Result<(), Error> {
    let params = raw::sdc_hci_cmd_vs_llpm_mode_set_t { enable: enable as u8 };
    unsafe { raw::sdc_hci_cmd_vs_llpm_mode_set(&params) }.check()
}

/// Connection update with the interval given in microseconds
pub fn conn_update(
    conn_handle: u16,
    conn_interval_us: u32,
    conn_latency: u16,
    supervision_timeout: u16,
) -> Result<(), Error> {
    let params = raw::sdc_hci_cmd_vs_conn_update_t {
        conn_handle,
        conn_interval_us,
        conn_latency,
        supervision_timeout,
    };
    unsafe { raw::sdc_hci_cmd_vs_conn_update(&params) }.check()
}

pub fn set_conn_event_extend(enable: bool) -> Result<(), Error> {
    let params = raw::sdc_hci_cmd_vs_conn_event_extend_t { enable: enable as u8 };
    unsafe { raw::sdc_hci_cmd_vs_conn_event_extend(&params) }.check()
}

pub fn set_qos_conn_event_report(enable: bool) -> Result<(), Error> {
    let params = raw::sdc_hci_cmd_vs_qos_conn_event_report_enable_t { enable: enable as u8 };
    unsafe { raw::sdc_hci_cmd_vs_qos_conn_event_report_enable(&params) }.check()
}

/// Sets the maximum connection event length
pub fn set_event_length(event_length_us: u32) -> Result<(), Error> {
    let params = raw::sdc_hci_cmd_vs_event_length_set_t { event_length_us };
    unsafe { raw::sdc_hci_cmd_vs_event_length_set(&params) }.check()
}

pub fn set_periodic_adv_event_length(event_length_us: u32) -> Result<(), Error> {
    let params = raw::sdc_hci_cmd_vs_periodic_adv_event_length_set_t { event_length_us };
    unsafe { raw::sdc_hci_cmd_vs_periodic_adv_event_length_set(&params) }.check()
}

/// QoS connection event report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QosConnEventReport {
    pub conn_handle: u16,
    pub event_counter: u16,
    pub channel_index: u8,
    pub tx_packet_count: u8,
    pub tx_ack_count: u8,
    pub tx_new_packet_count: u8,
    pub rx_packet_count: u8,
    pub rx_crc_error_count: u8,
    pub rx_rssi: i8,
    pub rx_new_packet_count: u8,
}

impl QosConnEventReport {
    const LEN: usize = 12;

    /// Parse the report from a vendor specific event
    pub fn parse(event: &HciEvent<'_>) -> Result<Self, Error> {
        if event.event_code != EVT_VENDOR {
            return Err(Error::InvalidPacket);
        }
        let (&subevent, p) = event.parameters.split_first().ok_or(Error::InvalidPacket)?;
        if subevent != EVT_VS_QOS_CONN_EVENT_REPORT || p.len() < Self::LEN {
            return Err(Error::InvalidPacket);
        }

        Ok(QosConnEventReport {
            conn_handle: LittleEndian::read_u16(&p[0..2]),
            event_counter: LittleEndian::read_u16(&p[2..4]),
            channel_index: p[4],
            tx_packet_count: p[5],
            tx_ack_count: p[6],
            tx_new_packet_count: p[7],
            rx_packet_count: p[8],
            rx_crc_error_count: p[9],
            rx_rssi: p[10] as i8,
            rx_new_packet_count: p[11],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qos_report_parse() {
        let raw_event = [
            0xFF, 13, 0x80, // vendor event, QoS subevent
            0x01, 0x00, // conn handle
            0x10, 0x02, // event counter
            17,   // channel
            3, 2, 1, // tx counts
            4, 1, // rx packets, crc errors
            0xC4, // rssi -60
            2,
        ];
        let event = HciEvent::parse(&raw_event).unwrap();
        let report = QosConnEventReport::parse(&event).unwrap();

        assert_eq!(report.conn_handle, 1);
        assert_eq!(report.event_counter, 0x0210);
        assert_eq!(report.channel_index, 17);
        assert_eq!(report.tx_packet_count, 3);
        assert_eq!(report.tx_ack_count, 2);
        assert_eq!(report.rx_crc_error_count, 1);
        assert_eq!(report.rx_rssi, -60);
        assert_eq!(report.rx_new_packet_count, 2);
    }

    #[test]
    fn test_qos_report_rejects_other_events() {
        let truncated = [0xFF, 3, 0x80, 0x01, 0x00];
        let event = HciEvent::parse(&truncated).unwrap();
        assert_eq!(QosConnEventReport::parse(&event), Err(Error::InvalidPacket));

        let other = [0xFF, 1, 0x81];
        let event = HciEvent::parse(&other).unwrap();
        assert_eq!(QosConnEventReport::parse(&event), Err(Error::InvalidPacket));
    }

    #[test]
    fn test_tx_power_handle_parts() {
        assert_eq!(TxPowerHandle::Advertiser(2).raw_parts(), (0, 2));
        assert_eq!(TxPowerHandle::Scanner.raw_parts(), (1, 0));
        assert_eq!(TxPowerHandle::Connection(0x40).raw_parts(), (2, 0x40));
    }
}
