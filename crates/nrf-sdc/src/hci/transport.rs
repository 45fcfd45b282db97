//! HCI transport between the host and the SoftDevice Controller
//!
//! Packets are exchanged with the controller through `sdc_hci_*_put` and `sdc_hci_get`. The
//! controller signals pending host-bound traffic through the callback registered by
//! [`crate::sdc::enable`], which wakes any task blocked in [`read`].

use crate::error::{Error, RetVal};
use crate::hci::constants::*;
use crate::hci::packet::{iso_packet_len, AclHeader, HciCommand, HciEvent};
use crate::raw;
use core::future::poll_fn;
use core::task::Poll;
use embassy_sync::waitqueue::AtomicWaker;

static HCI_WAKER: AtomicWaker = AtomicWaker::new();

/// Controller callback: host-bound data is available
pub(crate) unsafe extern "C" fn on_controller_data() {
    HCI_WAKER.wake();
}

/// A packet received from the controller, borrowed from the receive buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packet<'a> {
    Event(HciEvent<'a>),
    Acl(&'a [u8]),
    Iso(&'a [u8]),
}

impl<'a> Packet<'a> {
    /// Interprets a message of controller type `msg_type` at the start of `buf`
    pub fn from_message(msg_type: u32, buf: &'a [u8]) -> Result<Self, Error> {
        match msg_type {
            SDC_MSG_TYPE_EVT => HciEvent::parse(buf).map(Packet::Event),
            SDC_MSG_TYPE_DATA => {
                let len = AclHeader::parse(buf)?.packet_len();
                buf.get(..len).map(Packet::Acl).ok_or(Error::InvalidPacket)
            }
            SDC_MSG_TYPE_ISO => {
                let len = iso_packet_len(buf)?;
                buf.get(..len).map(Packet::Iso).ok_or(Error::InvalidPacket)
            }
            _ => Err(Error::InvalidPacket),
        }
    }

    /// H4 packet indicator for this packet
    pub fn h4_indicator(&self) -> u8 {
        match self {
            Packet::Event(_) => HCI_EVENT_PKT,
            Packet::Acl(_) => HCI_ACL_PKT,
            Packet::Iso(_) => HCI_ISO_PKT,
        }
    }

    /// Length of the packet on the wire, excluding the H4 indicator
    pub fn len(&self) -> usize {
        match self {
            Packet::Event(event) => HCI_EVENT_HEADER_LEN + event.parameters.len(),
            Packet::Acl(data) | Packet::Iso(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps a controller message type to its H4 packet indicator
pub fn h4_indicator(msg_type: u32) -> Option<u8> {
    match msg_type {
        SDC_MSG_TYPE_EVT => Some(HCI_EVENT_PKT),
        SDC_MSG_TYPE_DATA => Some(HCI_ACL_PKT),
        SDC_MSG_TYPE_ISO => Some(HCI_ISO_PKT),
        _ => None,
    }
}

/// Checks that `buf` holds exactly one command: header plus the declared parameter length
pub fn check_command(buf: &[u8]) -> Result<(), Error> {
    if buf.len() < HCI_COMMAND_HEADER_LEN {
        return Err(Error::InvalidPacket);
    }
    if buf.len() != HCI_COMMAND_HEADER_LEN + buf[2] as usize {
        return Err(Error::InvalidPacket);
    }
    Ok(())
}

/// Checks that `buf` holds exactly one ACL packet
pub fn check_acl(buf: &[u8]) -> Result<(), Error> {
    let header = AclHeader::parse(buf)?;
    if buf.len() != header.packet_len() {
        return Err(Error::InvalidPacket);
    }
    Ok(())
}

/// Checks that `buf` holds exactly one ISO packet
pub fn check_iso(buf: &[u8]) -> Result<(), Error> {
    if buf.len() != iso_packet_len(buf)? {
        return Err(Error::InvalidPacket);
    }
    Ok(())
}

/// Sends an encoded command (opcode, length, parameters) to the controller
pub fn write_command(buf: &[u8]) -> Result<(), Error> {
    check_command(buf)?;
    trace!("HCI command {:?}", buf);
    // The controller copies the command before returning
    unsafe { raw::sdc_hci_cmd_put(buf.as_ptr()) }.check()?;
    Ok(())
}

/// Sends an ACL data packet to the controller
pub fn write_acl(buf: &[u8]) -> Result<(), Error> {
    check_acl(buf)?;
    unsafe { raw::sdc_hci_data_put(buf.as_ptr()) }.check()?;
    Ok(())
}

/// Sends an ISO data packet to the controller
pub fn write_iso(buf: &[u8]) -> Result<(), Error> {
    check_iso(buf)?;
    unsafe { raw::sdc_hci_iso_data_put(buf.as_ptr()) }.check()?;
    Ok(())
}

/// Sends an H4-framed packet, dispatching on the leading packet indicator
pub fn write_h4(packet: &[u8]) -> Result<(), Error> {
    let (&indicator, body) = packet.split_first().ok_or(Error::InvalidPacket)?;
    match indicator {
        HCI_COMMAND_PKT => write_command(body),
        HCI_ACL_PKT => write_acl(body),
        HCI_ISO_PKT => write_iso(body),
        _ => Err(Error::InvalidPacket),
    }
}

/// Encodes and sends a command
pub fn send(command: &HciCommand<'_>) -> Result<(), Error> {
    let mut buf = [0u8; raw::HCI_CMD_PACKET_MAX_SIZE as usize];
    let len = command.encode(&mut buf)?;
    write_command(&buf[..len])
}

/// Pulls one pending message into `buf`, returning its controller message type
fn get_message(buf: &mut [u8]) -> Result<u32, Error> {
    if buf.len() < HCI_MSG_BUFFER_LEN {
        return Err(Error::BufferTooSmall);
    }
    let mut msg_type: raw::sdc_hci_msg_type_t = SDC_MSG_TYPE_NONE;
    // `buf` is at least HCI_MSG_BUFFER_MAX_SIZE bytes, the most the controller writes
    unsafe { raw::sdc_hci_get(buf.as_mut_ptr(), &mut msg_type) }.check()?;
    Ok(msg_type)
}

/// Reads a pending packet without blocking. Returns [`Error::Again`] if there is none.
pub fn try_read(buf: &mut [u8]) -> Result<Packet<'_>, Error> {
    let msg_type = get_message(buf)?;
    Packet::from_message(msg_type, buf)
}

/// Waits for the next packet from the controller
pub async fn read(buf: &mut [u8]) -> Result<Packet<'_>, Error> {
    let msg_type = poll_fn(|cx| {
        HCI_WAKER.register(cx.waker());
        match get_message(buf) {
            Err(Error::Again) => Poll::Pending,
            result => Poll::Ready(result),
        }
    })
    .await?;
    Packet::from_message(msg_type, buf)
}

/// Waits for the next packet and writes it H4-framed into `buf`, returning the framed length
pub async fn read_h4(buf: &mut [u8]) -> Result<usize, Error> {
    let (indicator, body) = buf.split_first_mut().ok_or(Error::BufferTooSmall)?;
    let packet = read(body).await?;
    *indicator = packet.h4_indicator();
    Ok(1 + packet.len())
}
