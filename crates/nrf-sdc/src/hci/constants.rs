//! HCI protocol constants
//!
//! This module contains constants used in the Bluetooth HCI protocol and the framing used by the
//! SoftDevice Controller.

use crate::raw;

// H4 packet indicators
pub const HCI_COMMAND_PKT: u8 = 0x01;
pub const HCI_ACL_PKT: u8 = 0x02;
pub const HCI_SCO_PKT: u8 = 0x03;
pub const HCI_EVENT_PKT: u8 = 0x04;
pub const HCI_ISO_PKT: u8 = 0x05;

// Header sizes, excluding the H4 indicator
pub const HCI_COMMAND_HEADER_LEN: usize = 3;
pub const HCI_EVENT_HEADER_LEN: usize = 2;
pub const HCI_ACL_HEADER_LEN: usize = 4;
pub const HCI_ISO_HEADER_LEN: usize = 4;

// Maximum size of HCI command parameters
pub const HCI_MAX_PARAM_LEN: usize = raw::HCI_CMD_PARAMETER_MAX_SIZE as usize;

/// Largest message the controller hands out through `sdc_hci_get`
pub const HCI_MSG_BUFFER_LEN: usize = raw::HCI_MSG_BUFFER_MAX_SIZE as usize;

// Message types reported by the controller
pub const SDC_MSG_TYPE_NONE: u32 = raw::sdc_hci_msg_type_t_SDC_HCI_MSG_TYPE_NONE;
pub const SDC_MSG_TYPE_EVT: u32 = raw::sdc_hci_msg_type_t_SDC_HCI_MSG_TYPE_EVT;
pub const SDC_MSG_TYPE_DATA: u32 = raw::sdc_hci_msg_type_t_SDC_HCI_MSG_TYPE_DATA;
pub const SDC_MSG_TYPE_ISO: u32 = raw::sdc_hci_msg_type_t_SDC_HCI_MSG_TYPE_ISO;

// OGF (Opcode Group Field) values
pub const OGF_LINK_CTL: u8 = 0x01;
pub const OGF_LINK_POLICY: u8 = 0x02;
pub const OGF_HOST_CTL: u8 = 0x03;
pub const OGF_INFO_PARAM: u8 = 0x04;
pub const OGF_STATUS_PARAM: u8 = 0x05;
pub const OGF_LE: u8 = 0x08;
pub const OGF_VENDOR: u8 = 0x3F;

// Link Control Commands (OGF: 0x01)
pub const OCF_DISCONNECT: u16 = 0x0006;
pub const OCF_READ_REMOTE_VERSION_INFORMATION: u16 = 0x001D;

// Host Controller Commands (OGF: 0x03)
pub const OCF_SET_EVENT_MASK: u16 = 0x0001;
pub const OCF_RESET: u16 = 0x0003;

// Informational Parameters (OGF: 0x04)
pub const OCF_READ_LOCAL_VERSION_INFORMATION: u16 = 0x0001;
pub const OCF_READ_LOCAL_SUPPORTED_COMMANDS: u16 = 0x0002;
pub const OCF_READ_BD_ADDR: u16 = 0x0009;

// Status Parameters (OGF: 0x05)
pub const OCF_READ_RSSI: u16 = 0x0005;

// LE Command OCF values (OGF: 0x08)
pub const OCF_LE_SET_EVENT_MASK: u16 = 0x0001;
pub const OCF_LE_READ_BUFFER_SIZE: u16 = 0x0002;
pub const OCF_LE_READ_LOCAL_SUPPORTED_FEATURES: u16 = 0x0003;
pub const OCF_LE_SET_RANDOM_ADDRESS: u16 = 0x0005;
pub const OCF_LE_SET_ADVERTISING_PARAMETERS: u16 = 0x0006;
pub const OCF_LE_READ_ADVERTISING_PHYSICAL_CHANNEL_TX_POWER: u16 = 0x0007;
pub const OCF_LE_SET_ADVERTISING_DATA: u16 = 0x0008;
pub const OCF_LE_SET_SCAN_RESPONSE_DATA: u16 = 0x0009;
pub const OCF_LE_SET_ADVERTISING_ENABLE: u16 = 0x000A;
pub const OCF_LE_SET_SCAN_PARAMETERS: u16 = 0x000B;
pub const OCF_LE_SET_SCAN_ENABLE: u16 = 0x000C;
pub const OCF_LE_CREATE_CONNECTION: u16 = 0x000D;
pub const OCF_LE_CREATE_CONNECTION_CANCEL: u16 = 0x000E;
pub const OCF_LE_RAND: u16 = 0x0018;

// Vendor specific OCF values (OGF: 0x3F)
pub const OCF_VS_ZEPHYR_READ_VERSION_INFO: u16 = 0x0001;
pub const OCF_VS_ZEPHYR_WRITE_BD_ADDR: u16 = 0x0006;
pub const OCF_VS_ZEPHYR_READ_CHIP_TEMP: u16 = 0x000B;
pub const OCF_VS_ZEPHYR_WRITE_TX_POWER: u16 = 0x000E;

// HCI Events
pub const EVT_DISCONN_COMPLETE: u8 = 0x05;
pub const EVT_ENCRYPTION_CHANGE: u8 = 0x08;
pub const EVT_CMD_COMPLETE: u8 = 0x0E;
pub const EVT_CMD_STATUS: u8 = 0x0F;
pub const EVT_NUM_COMPLETED_PACKETS: u8 = 0x13;
pub const EVT_LE_META_EVENT: u8 = 0x3E;
pub const EVT_VENDOR: u8 = 0xFF;

// LE Meta Events
pub const EVT_LE_CONN_COMPLETE: u8 = 0x01;
pub const EVT_LE_ADVERTISING_REPORT: u8 = 0x02;
pub const EVT_LE_CONN_UPDATE_COMPLETE: u8 = 0x03;

// Vendor specific subevents
pub const EVT_VS_QOS_CONN_EVENT_REPORT: u8 =
    raw::sdc_hci_subevent_vs_SDC_HCI_SUBEVENT_VS_QOS_CONN_EVENT_REPORT as u8;
