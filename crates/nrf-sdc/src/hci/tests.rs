//! Unit tests for HCI packet parsing and serialization

use super::constants::*;
use super::packet::*;
use super::transport::*;
use crate::error::Error;

#[test]
fn test_opcode_parts() {
    let opcode = Opcode::new(OGF_LE, OCF_LE_SET_SCAN_PARAMETERS);
    assert_eq!(u16::from(opcode), 0x200B);
    assert_eq!(opcode.ogf(), OGF_LE);
    assert_eq!(opcode.ocf(), OCF_LE_SET_SCAN_PARAMETERS);

    let vendor = Opcode::from(0xFD01);
    assert!(vendor.is_vendor_specific());
    assert_eq!(vendor.ocf(), 0x101);
    assert!(!opcode.is_vendor_specific());
}

#[test]
fn test_opcodes_agree_with_controller() {
    use crate::raw;

    assert_eq!(
        u16::from(HciCommand::Reset.opcode()) as u32,
        raw::sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_RESET
    );
    assert_eq!(
        u16::from(HciCommand::ReadBdAddr.opcode()) as u32,
        raw::sdc_hci_opcode_ip_SDC_HCI_OPCODE_CMD_IP_READ_BD_ADDR
    );
    assert_eq!(
        u16::from(HciCommand::LeRand.opcode()) as u32,
        raw::sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_RAND
    );
    assert_eq!(
        u16::from(Opcode::new(OGF_VENDOR, OCF_VS_ZEPHYR_READ_CHIP_TEMP)) as u32,
        raw::sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_ZEPHYR_READ_CHIP_TEMP
    );
}

#[test]
fn test_hci_command_serialization() {
    let mut buf = [0u8; 64];

    // Test Reset command
    let len = HciCommand::Reset.encode(&mut buf).unwrap();
    assert_eq!(len, 3);

    // Opcode: Reset (0x0003)
    let opcode = u16::from_le_bytes([buf[0], buf[1]]);
    assert_eq!(opcode, 0x0C03); // OGF_HOST_CTL << 10 | OCF_RESET

    // Param length: 0
    assert_eq!(buf[2], 0);

    // Test LE Set Scan Parameters command
    let command = HciCommand::LeSetScanParameters {
        scan_type: 0x01,
        scan_interval: 0x0010,
        scan_window: 0x0010,
        own_address_type: 0x00,
        filter_policy: 0x00,
    };

    let len = command.encode(&mut buf).unwrap();
    assert_eq!(len, 10);
    assert_eq!(&buf[..len], &[0x0B, 0x20, 7, 0x01, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00]);

    // Test Disconnect command
    let command = HciCommand::Disconnect {
        handle: 0x0040,
        reason: 0x13,
    };

    let len = command.encode(&mut buf).unwrap();
    assert_eq!(&buf[..len], &[0x06, 0x04, 3, 0x40, 0x00, 0x13]);

    // Test Raw command
    let command = HciCommand::new(OGF_LE, OCF_LE_CREATE_CONNECTION, &[0x01, 0x02, 0x03]);

    let len = command.encode(&mut buf).unwrap();
    assert_eq!(&buf[..len], &[0x0D, 0x20, 3, 0x01, 0x02, 0x03]);
}

#[test]
fn test_event_mask_serialization() {
    let mut buf = [0u8; 16];
    let command = HciCommand::SetEventMask {
        event_mask: 0x2000_8000_0000_9010,
    };
    let len = command.encode(&mut buf).unwrap();
    assert_eq!(
        &buf[..len],
        &[0x01, 0x0C, 8, 0x10, 0x90, 0x00, 0x00, 0x00, 0x80, 0x00, 0x20]
    );
}

#[test]
fn test_adv_data_is_padded() {
    let mut buf = [0xAAu8; 64];
    let command = HciCommand::LeSetAdvData {
        data: &[0x02, 0x01, 0x06],
    };
    let len = command.encode(&mut buf).unwrap();
    assert_eq!(len, 35);
    assert_eq!(&buf[..7], &[0x08, 0x20, 32, 3, 0x02, 0x01, 0x06]);
    assert!(buf[7..35].iter().all(|&b| b == 0));

    let too_long = [0u8; 32];
    let command = HciCommand::LeSetScanResponseData { data: &too_long };
    assert_eq!(command.encode(&mut buf), Err(Error::InvalidArg));
}

#[test]
fn test_adv_params_serialization() {
    let mut buf = [0u8; 32];
    let command = HciCommand::LeSetAdvParams {
        interval_min: 0x0020,
        interval_max: 0x0040,
        adv_type: 0x00,
        own_address_type: 0x01,
        peer_address_type: 0x00,
        peer_address: [0; 6],
        channel_map: 0x07,
        filter_policy: 0x00,
    };
    let len = command.encode(&mut buf).unwrap();
    assert_eq!(len, 18);
    assert_eq!(&buf[..5], &[0x06, 0x20, 15, 0x20, 0x00]);
    assert_eq!(buf[8], 0x01);
    assert_eq!(buf[16], 0x07);
}

#[test]
fn test_create_connection_serialization() {
    let mut buf = [0u8; 32];
    let command = HciCommand::LeCreateConnection {
        scan_interval: 0x0060,
        scan_window: 0x0030,
        peer_addr_type: 0x01,
        peer_addr: [1, 2, 3, 4, 5, 6],
        own_address_type: 0x00,
        conn_interval_min: 0x0018,
        conn_interval_max: 0x0028,
        max_latency: 0,
        supervision_timeout: 0x01F4,
    };
    let len = command.encode(&mut buf).unwrap();
    assert_eq!(len, 28);
    assert_eq!(buf[2], 25);
    assert_eq!(&buf[9..15], &[1, 2, 3, 4, 5, 6]);
    assert_eq!(u16::from_le_bytes([buf[22], buf[23]]), 0x01F4);
}

#[test]
fn test_encode_rejects_small_buffer() {
    let mut buf = [0u8; 5];
    let command = HciCommand::Disconnect {
        handle: 1,
        reason: 0x13,
    };
    assert_eq!(command.encode(&mut buf), Err(Error::BufferTooSmall));
}

#[test]
fn test_hci_event_parsing() {
    // Command Complete event for Reset
    let raw_event = [EVT_CMD_COMPLETE, 4, 0x01, 0x03, 0x0C, 0x00];

    let event = HciEvent::parse(&raw_event).unwrap();

    assert_eq!(event.event_code, EVT_CMD_COMPLETE);
    assert_eq!(event.parameters.len(), 4);
    assert!(event.is_command_complete(HciCommand::Reset.opcode()));
    assert!(!event.is_command_complete(HciCommand::ReadBdAddr.opcode()));
    assert_eq!(event.status(), Some(0));
    assert_eq!(event.return_parameters(), Some(&[][..]));
    assert_eq!(event.le_subevent(), None);

    // Command Status event
    let raw_event = [EVT_CMD_STATUS, 4, 0x0C, 0x01, 0x0D, 0x20];
    let event = HciEvent::parse(&raw_event).unwrap();
    assert_eq!(event.status(), Some(0x0C));
    assert_eq!(event.command_opcode(), Some(Opcode::from(0x200D)));
    assert_eq!(event.return_parameters(), None);

    // Invalid event (too short)
    assert_eq!(HciEvent::parse(&[EVT_CMD_COMPLETE]), Err(Error::InvalidPacket));

    // Invalid event (length mismatch)
    let raw_event = [EVT_CMD_COMPLETE, 10, 0x01, 0x03, 0x0C];
    assert_eq!(HciEvent::parse(&raw_event), Err(Error::InvalidPacket));
}

#[test]
fn test_return_parameters() {
    // Command Complete for Read BD_ADDR
    let raw_event = [EVT_CMD_COMPLETE, 10, 0x01, 0x09, 0x10, 0x00, 1, 2, 3, 4, 5, 6];
    let event = HciEvent::parse(&raw_event).unwrap();
    assert!(event.is_command_complete(HciCommand::ReadBdAddr.opcode()));
    assert_eq!(event.return_parameters(), Some(&[1, 2, 3, 4, 5, 6][..]));
}

#[test]
fn test_le_advertising_report_parsing() {
    let raw_event = [
        EVT_LE_META_EVENT,
        20,
        EVT_LE_ADVERTISING_REPORT,
        0x01, // Num reports
        0x00, // Event type
        0x01, // Address type
        0x11, 0x22, 0x33, 0x44, 0x55, 0x66, // Address
        0x08, // Data length
        0x02, 0x01, 0x06, 0x04, 0x09, 0x54, 0x65, 0x73, // Data
        0xC8, // RSSI (-56)
    ];

    let event = HciEvent::parse(&raw_event).unwrap();
    assert_eq!(event.le_subevent(), Some(EVT_LE_ADVERTISING_REPORT));

    let report = LeAdvertisingReport::parse_from_meta_event(&event).unwrap();

    assert_eq!(report.event_type, 0x00);
    assert_eq!(report.address_type, 0x01);
    assert_eq!(report.address, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
    assert_eq!(report.data, &[0x02, 0x01, 0x06, 0x04, 0x09, 0x54, 0x65, 0x73]);
    assert_eq!(report.rssi, -56);
}

#[test]
fn test_multiple_advertising_reports() {
    let raw_event = [
        EVT_LE_META_EVENT,
        26,
        EVT_LE_ADVERTISING_REPORT,
        0x02,
        // First report
        0x00, 0x00, 1, 1, 1, 1, 1, 1, 0x02, 0xAA, 0xBB, 0xD0,
        // Second report
        0x04, 0x01, 2, 2, 2, 2, 2, 2, 0x00, 0xE0,
        // Trailing bytes are ignored
        0xFF, 0xFF,
    ];

    let event = HciEvent::parse(&raw_event).unwrap();
    let reports: Vec<_> = event.advertising_reports().unwrap().collect();

    assert_eq!(reports.len(), 2);
    let first = reports[0].unwrap();
    assert_eq!(first.address, [1; 6]);
    assert_eq!(first.data, &[0xAA, 0xBB]);
    assert_eq!(first.rssi, -48);

    let second = reports[1].unwrap();
    assert_eq!(second.event_type, 0x04);
    assert!(second.data.is_empty());
    assert_eq!(second.rssi, -32);
}

#[test]
fn test_truncated_advertising_report() {
    let raw_event = [
        EVT_LE_META_EVENT,
        12,
        EVT_LE_ADVERTISING_REPORT,
        0x02,
        0x00, 0x00, 1, 1, 1, 1, 1, 1, 0x05, 0xAA,
    ];

    let event = HciEvent::parse(&raw_event).unwrap();
    let mut reports = event.advertising_reports().unwrap();
    assert_eq!(reports.next(), Some(Err(Error::InvalidPacket)));
    assert_eq!(reports.next(), None);

    // Not an advertising report
    let raw_event = [EVT_LE_META_EVENT, 1, EVT_LE_CONN_COMPLETE];
    let event = HciEvent::parse(&raw_event).unwrap();
    assert!(event.advertising_reports().is_none());
    assert!(LeAdvertisingReport::parse_from_meta_event(&event).is_none());
}

#[test]
fn test_acl_header() {
    let header = AclHeader::parse(&[0x40, 0x20, 0x05, 0x00, 1, 2, 3, 4, 5]).unwrap();
    assert_eq!(header.handle, 0x040);
    assert_eq!(header.boundary, BoundaryFlag::FirstFlushable);
    assert_eq!(header.broadcast, 0);
    assert_eq!(header.data_len, 5);
    assert_eq!(header.packet_len(), 9);

    assert_eq!(AclHeader::parse(&[0x40, 0x20]), Err(Error::InvalidPacket));
}

#[test]
fn test_h4_indicators() {
    assert_eq!(h4_indicator(SDC_MSG_TYPE_EVT), Some(HCI_EVENT_PKT));
    assert_eq!(h4_indicator(SDC_MSG_TYPE_DATA), Some(HCI_ACL_PKT));
    assert_eq!(h4_indicator(SDC_MSG_TYPE_ISO), Some(HCI_ISO_PKT));
    assert_eq!(h4_indicator(SDC_MSG_TYPE_NONE), None);
}

#[test]
fn test_packet_from_message() {
    let buf = [EVT_CMD_COMPLETE, 4, 0x01, 0x03, 0x0C, 0x00, 0xEE, 0xEE];
    let packet = Packet::from_message(SDC_MSG_TYPE_EVT, &buf).unwrap();
    assert_eq!(packet.h4_indicator(), HCI_EVENT_PKT);
    assert_eq!(packet.len(), 6);

    let buf = [0x01, 0x00, 0x02, 0x00, 0xAB, 0xCD, 0xEE];
    let packet = Packet::from_message(SDC_MSG_TYPE_DATA, &buf).unwrap();
    assert_eq!(packet, Packet::Acl(&buf[..6]));
    assert_eq!(packet.h4_indicator(), HCI_ACL_PKT);

    let buf = [0x01, 0x00, 0x01, 0x00, 0x99];
    let packet = Packet::from_message(SDC_MSG_TYPE_ISO, &buf).unwrap();
    assert_eq!(packet, Packet::Iso(&buf[..]));

    // Declared ACL length runs past the buffer
    let buf = [0x01, 0x00, 0x10, 0x00, 0xAB];
    assert_eq!(Packet::from_message(SDC_MSG_TYPE_DATA, &buf), Err(Error::InvalidPacket));

    assert_eq!(Packet::from_message(SDC_MSG_TYPE_NONE, &buf), Err(Error::InvalidPacket));
}

#[test]
fn test_outgoing_packet_checks() {
    assert!(check_command(&[0x03, 0x0C, 0x00]).is_ok());
    assert_eq!(check_command(&[0x03, 0x0C]), Err(Error::InvalidPacket));
    assert_eq!(check_command(&[0x03, 0x0C, 0x02, 0x00]), Err(Error::InvalidPacket));

    assert!(check_acl(&[0x01, 0x00, 0x02, 0x00, 0xAA, 0xBB]).is_ok());
    assert_eq!(check_acl(&[0x01, 0x00, 0x03, 0x00, 0xAA, 0xBB]), Err(Error::InvalidPacket));

    // ISO length is 14 bits; the upper bits are reserved
    assert!(check_iso(&[0x01, 0x00, 0x01, 0xC0, 0xAA]).is_ok());
    assert_eq!(check_iso(&[0x01, 0x00, 0x02, 0x00, 0xAA]), Err(Error::InvalidPacket));
}

// Controller stand-in for the transport tests. Tests touching it hold `controller()`.

use crate::raw;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Sent {
    Command(Vec<u8>),
    Acl(Vec<u8>),
    Iso(Vec<u8>),
}

static CONTROLLER: Mutex<()> = Mutex::new(());
static SENT: Mutex<Vec<Sent>> = Mutex::new(Vec::new());
static PENDING: Mutex<VecDeque<(u32, Vec<u8>)>> = Mutex::new(VecDeque::new());

fn controller() -> MutexGuard<'static, ()> {
    let guard = CONTROLLER.lock().unwrap_or_else(|e| e.into_inner());
    SENT.lock().unwrap().clear();
    PENDING.lock().unwrap().clear();
    guard
}

unsafe fn copy_packet(packet: *const u8, header_len: usize, data_len: usize) -> Vec<u8> {
    std::slice::from_raw_parts(packet, header_len + data_len).to_vec()
}

#[no_mangle]
unsafe extern "C" fn sdc_hci_cmd_put(cmd: *const u8) -> i32 {
    let packet = copy_packet(cmd, HCI_COMMAND_HEADER_LEN, *cmd.add(2) as usize);
    SENT.lock().unwrap().push(Sent::Command(packet));
    0
}

#[no_mangle]
unsafe extern "C" fn sdc_hci_data_put(data: *const u8) -> i32 {
    let data_len = u16::from_le_bytes([*data.add(2), *data.add(3)]) as usize;
    let packet = copy_packet(data, HCI_ACL_HEADER_LEN, data_len);
    SENT.lock().unwrap().push(Sent::Acl(packet));
    0
}

#[no_mangle]
unsafe extern "C" fn sdc_hci_iso_data_put(data: *const u8) -> i32 {
    let data_len = u16::from_le_bytes([*data.add(2), *data.add(3)]) & 0x3fff;
    let packet = copy_packet(data, HCI_ISO_HEADER_LEN, data_len as usize);
    SENT.lock().unwrap().push(Sent::Iso(packet));
    0
}

#[no_mangle]
unsafe extern "C" fn sdc_hci_get(packet: *mut u8, msg_type: *mut raw::sdc_hci_msg_type_t) -> i32 {
    match PENDING.lock().unwrap().pop_front() {
        Some((kind, bytes)) => {
            core::ptr::copy_nonoverlapping(bytes.as_ptr(), packet, bytes.len());
            *msg_type = kind;
            0
        }
        None => -(raw::NRF_EAGAIN as i32),
    }
}

#[test]
fn test_write_h4_dispatch() {
    let _controller = controller();

    write_h4(&[HCI_COMMAND_PKT, 0x03, 0x0C, 0x00]).unwrap();
    write_h4(&[HCI_ACL_PKT, 0x01, 0x00, 0x02, 0x00, 0xAA, 0xBB]).unwrap();
    write_h4(&[HCI_ISO_PKT, 0x01, 0x00, 0x01, 0x00, 0x99]).unwrap();

    assert_eq!(
        *SENT.lock().unwrap(),
        [
            Sent::Command(vec![0x03, 0x0C, 0x00]),
            Sent::Acl(vec![0x01, 0x00, 0x02, 0x00, 0xAA, 0xBB]),
            Sent::Iso(vec![0x01, 0x00, 0x01, 0x00, 0x99]),
        ]
    );
}

#[test]
fn test_write_h4_rejects_malformed() {
    let _controller = controller();

    assert_eq!(write_h4(&[]), Err(Error::InvalidPacket));
    // SCO is not supported by the controller
    assert_eq!(write_h4(&[HCI_SCO_PKT, 0x01, 0x00, 0x00]), Err(Error::InvalidPacket));
    // Events only flow towards the host
    assert_eq!(write_h4(&[HCI_EVENT_PKT, EVT_CMD_COMPLETE, 0x00]), Err(Error::InvalidPacket));
    assert_eq!(write_h4(&[HCI_COMMAND_PKT]), Err(Error::InvalidPacket));
    assert_eq!(write_h4(&[HCI_COMMAND_PKT, 0x03, 0x0C, 0x01]), Err(Error::InvalidPacket));
    assert_eq!(write_h4(&[HCI_ACL_PKT, 0x01, 0x00, 0x05, 0x00, 0xAA]), Err(Error::InvalidPacket));

    assert!(SENT.lock().unwrap().is_empty());
}

#[test]
fn test_send_encodes_command() {
    let _controller = controller();

    send(&HciCommand::Reset).unwrap();
    assert_eq!(*SENT.lock().unwrap(), [Sent::Command(vec![0x03, 0x0C, 0x00])]);
}

#[test]
fn test_try_read() {
    let _controller = controller();

    assert_eq!(try_read(&mut [0u8; 16]), Err(Error::BufferTooSmall));

    let mut buf = [0u8; HCI_MSG_BUFFER_LEN];
    assert_eq!(try_read(&mut buf), Err(Error::Again));

    PENDING
        .lock()
        .unwrap()
        .push_back((SDC_MSG_TYPE_EVT, vec![EVT_CMD_COMPLETE, 4, 0x01, 0x03, 0x0C, 0x00]));
    let packet = try_read(&mut buf).unwrap();
    assert_eq!(
        packet,
        Packet::Event(HciEvent {
            event_code: EVT_CMD_COMPLETE,
            parameters: &[0x01, 0x03, 0x0C, 0x00],
        })
    );

    assert_eq!(try_read(&mut buf), Err(Error::Again));
}

#[test]
fn test_read_h4_frames_packet() {
    let _controller = controller();
    let mut buf = [0u8; 1 + HCI_MSG_BUFFER_LEN];

    PENDING
        .lock()
        .unwrap()
        .push_back((SDC_MSG_TYPE_DATA, vec![0x01, 0x00, 0x02, 0x00, 0xAA, 0xBB]));
    let len = embassy_futures::block_on(read_h4(&mut buf)).unwrap();
    assert_eq!(len, 7);
    assert_eq!(buf[..len], [HCI_ACL_PKT, 0x01, 0x00, 0x02, 0x00, 0xAA, 0xBB]);

    PENDING
        .lock()
        .unwrap()
        .push_back((SDC_MSG_TYPE_EVT, vec![EVT_CMD_COMPLETE, 4, 0x01, 0x03, 0x0C, 0x00]));
    let len = embassy_futures::block_on(read_h4(&mut buf)).unwrap();
    assert_eq!(len, 1 + HCI_EVENT_HEADER_LEN + 4);
    assert_eq!(buf[..len], [HCI_EVENT_PKT, EVT_CMD_COMPLETE, 4, 0x01, 0x03, 0x0C, 0x00]);

    // Room for the indicator but not for a full controller message
    let mut short = [0u8; HCI_MSG_BUFFER_LEN];
    assert_eq!(embassy_futures::block_on(read_h4(&mut short)), Err(Error::BufferTooSmall));
    assert_eq!(embassy_futures::block_on(read_h4(&mut [])), Err(Error::BufferTooSmall));
}
