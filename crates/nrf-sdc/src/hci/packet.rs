//! HCI packet structures and parsing
//!
//! Commands are encoded into caller-provided buffers in the framing the controller expects
//! (opcode, parameter length, parameters, no H4 indicator). Events and ACL headers are parsed
//! in place from the buffers filled by [`crate::hci::transport`].

use crate::error::Error;
use crate::hci::constants::*;
use byteorder::{ByteOrder, LittleEndian};

/// HCI command opcode: OGF in the upper 6 bits, OCF in the lower 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Opcode(u16);

impl Opcode {
    pub const fn new(ogf: u8, ocf: u16) -> Self {
        Self(((ogf as u16) << 10) | (ocf & 0x3ff))
    }

    pub const fn ogf(self) -> u8 {
        (self.0 >> 10) as u8
    }

    pub const fn ocf(self) -> u16 {
        self.0 & 0x3ff
    }

    pub const fn is_vendor_specific(self) -> bool {
        self.ogf() == OGF_VENDOR
    }
}

impl From<u16> for Opcode {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Opcode> for u16 {
    fn from(opcode: Opcode) -> Self {
        opcode.0
    }
}

/// Common HCI Commands
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum HciCommand<'a> {
    // Link Control Commands (OGF: 0x01)
    Disconnect { handle: u16, reason: u8 },

    // Host Controller Commands (OGF: 0x03)
    Reset,
    SetEventMask { event_mask: u64 },

    // Informational Parameters (OGF: 0x04)
    ReadLocalVersion,
    ReadBdAddr,

    // LE Commands (OGF: 0x08)
    LeSetEventMask { event_mask: u64 },
    LeSetRandomAddress { addr: [u8; 6] },
    LeSetAdvParams {
        interval_min: u16,
        interval_max: u16,
        adv_type: u8,
        own_address_type: u8,
        peer_address_type: u8,
        peer_address: [u8; 6],
        channel_map: u8,
        filter_policy: u8,
    },
    LeSetAdvData { data: &'a [u8] },
    LeSetScanResponseData { data: &'a [u8] },
    LeSetAdvEnable { enable: bool },
    LeSetScanParameters {
        scan_type: u8,
        scan_interval: u16,
        scan_window: u16,
        own_address_type: u8,
        filter_policy: u8,
    },
    LeSetScanEnable { enable: bool, filter_duplicates: bool },
    LeCreateConnection {
        scan_interval: u16,
        scan_window: u16,
        peer_addr_type: u8,
        peer_addr: [u8; 6],
        own_address_type: u8,
        conn_interval_min: u16,
        conn_interval_max: u16,
        max_latency: u16,
        supervision_timeout: u16,
    },
    LeCreateConnectionCancel,
    LeRand,

    /// Any other command, including vendor specific ones
    Raw { opcode: Opcode, params: &'a [u8] },
}

impl<'a> HciCommand<'a> {
    /// Creates a command from an opcode group, command field and raw parameters
    pub fn new(ogf: u8, ocf: u16, params: &'a [u8]) -> Self {
        Self::Raw {
            opcode: Opcode::new(ogf, ocf),
            params,
        }
    }

    /// Get the OGF and OCF for this command
    pub fn opcode_parts(&self) -> (u8, u16) {
        match self {
            Self::Disconnect { .. } => (OGF_LINK_CTL, OCF_DISCONNECT),
            Self::Reset => (OGF_HOST_CTL, OCF_RESET),
            Self::SetEventMask { .. } => (OGF_HOST_CTL, OCF_SET_EVENT_MASK),
            Self::ReadLocalVersion => (OGF_INFO_PARAM, OCF_READ_LOCAL_VERSION_INFORMATION),
            Self::ReadBdAddr => (OGF_INFO_PARAM, OCF_READ_BD_ADDR),
            Self::LeSetEventMask { .. } => (OGF_LE, OCF_LE_SET_EVENT_MASK),
            Self::LeSetRandomAddress { .. } => (OGF_LE, OCF_LE_SET_RANDOM_ADDRESS),
            Self::LeSetAdvParams { .. } => (OGF_LE, OCF_LE_SET_ADVERTISING_PARAMETERS),
            Self::LeSetAdvData { .. } => (OGF_LE, OCF_LE_SET_ADVERTISING_DATA),
            Self::LeSetScanResponseData { .. } => (OGF_LE, OCF_LE_SET_SCAN_RESPONSE_DATA),
            Self::LeSetAdvEnable { .. } => (OGF_LE, OCF_LE_SET_ADVERTISING_ENABLE),
            Self::LeSetScanParameters { .. } => (OGF_LE, OCF_LE_SET_SCAN_PARAMETERS),
            Self::LeSetScanEnable { .. } => (OGF_LE, OCF_LE_SET_SCAN_ENABLE),
            Self::LeCreateConnection { .. } => (OGF_LE, OCF_LE_CREATE_CONNECTION),
            Self::LeCreateConnectionCancel => (OGF_LE, OCF_LE_CREATE_CONNECTION_CANCEL),
            Self::LeRand => (OGF_LE, OCF_LE_RAND),
            Self::Raw { opcode, .. } => (opcode.ogf(), opcode.ocf()),
        }
    }

    pub fn opcode(&self) -> Opcode {
        let (ogf, ocf) = self.opcode_parts();
        Opcode::new(ogf, ocf)
    }

    /// Length of the parameter block
    pub fn parameters_len(&self) -> usize {
        match self {
            Self::Reset
            | Self::ReadLocalVersion
            | Self::ReadBdAddr
            | Self::LeCreateConnectionCancel
            | Self::LeRand => 0,
            Self::Disconnect { .. } => 3,
            Self::SetEventMask { .. } | Self::LeSetEventMask { .. } => 8,
            Self::LeSetRandomAddress { .. } => 6,
            Self::LeSetAdvParams { .. } => 15,
            // Advertising and scan response data are always sent as a full 31-byte block
            Self::LeSetAdvData { .. } | Self::LeSetScanResponseData { .. } => 32,
            Self::LeSetAdvEnable { .. } => 1,
            Self::LeSetScanParameters { .. } => 7,
            Self::LeSetScanEnable { .. } => 2,
            Self::LeCreateConnection { .. } => 25,
            Self::Raw { params, .. } => params.len(),
        }
    }

    /// Writes the parameter block into `buf`, which must be exactly `parameters_len()` bytes
    fn write_parameters(&self, buf: &mut [u8]) -> Result<(), Error> {
        match *self {
            Self::Reset
            | Self::ReadLocalVersion
            | Self::ReadBdAddr
            | Self::LeCreateConnectionCancel
            | Self::LeRand => {}

            Self::Disconnect { handle, reason } => {
                LittleEndian::write_u16(&mut buf[0..2], handle);
                buf[2] = reason;
            }

            Self::SetEventMask { event_mask } | Self::LeSetEventMask { event_mask } => {
                LittleEndian::write_u64(buf, event_mask);
            }

            Self::LeSetRandomAddress { addr } => buf.copy_from_slice(&addr),

            Self::LeSetAdvParams {
                interval_min,
                interval_max,
                adv_type,
                own_address_type,
                peer_address_type,
                peer_address,
                channel_map,
                filter_policy,
            } => {
                LittleEndian::write_u16(&mut buf[0..2], interval_min);
                LittleEndian::write_u16(&mut buf[2..4], interval_max);
                buf[4] = adv_type;
                buf[5] = own_address_type;
                buf[6] = peer_address_type;
                buf[7..13].copy_from_slice(&peer_address);
                buf[13] = channel_map;
                buf[14] = filter_policy;
            }

            Self::LeSetAdvData { data } | Self::LeSetScanResponseData { data } => {
                if data.len() > 31 {
                    return Err(Error::InvalidArg);
                }
                buf.fill(0);
                buf[0] = data.len() as u8;
                buf[1..1 + data.len()].copy_from_slice(data);
            }

            Self::LeSetAdvEnable { enable } => buf[0] = enable as u8,

            Self::LeSetScanParameters {
                scan_type,
                scan_interval,
                scan_window,
                own_address_type,
                filter_policy,
            } => {
                buf[0] = scan_type;
                LittleEndian::write_u16(&mut buf[1..3], scan_interval);
                LittleEndian::write_u16(&mut buf[3..5], scan_window);
                buf[5] = own_address_type;
                buf[6] = filter_policy;
            }

            Self::LeSetScanEnable {
                enable,
                filter_duplicates,
            } => {
                buf[0] = enable as u8;
                buf[1] = filter_duplicates as u8;
            }

            Self::LeCreateConnection {
                scan_interval,
                scan_window,
                peer_addr_type,
                peer_addr,
                own_address_type,
                conn_interval_min,
                conn_interval_max,
                max_latency,
                supervision_timeout,
            } => {
                LittleEndian::write_u16(&mut buf[0..2], scan_interval);
                LittleEndian::write_u16(&mut buf[2..4], scan_window);
                // Initiator filter policy: use the peer address
                buf[4] = 0x00;
                buf[5] = peer_addr_type;
                buf[6..12].copy_from_slice(&peer_addr);
                buf[12] = own_address_type;
                LittleEndian::write_u16(&mut buf[13..15], conn_interval_min);
                LittleEndian::write_u16(&mut buf[15..17], conn_interval_max);
                LittleEndian::write_u16(&mut buf[17..19], max_latency);
                LittleEndian::write_u16(&mut buf[19..21], supervision_timeout);
                // Minimum and maximum connection event length
                LittleEndian::write_u16(&mut buf[21..23], 0);
                LittleEndian::write_u16(&mut buf[23..25], 0);
            }

            Self::Raw { params, .. } => buf.copy_from_slice(params),
        }
        Ok(())
    }

    /// Encodes the command into `buf` and returns the number of bytes written
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let param_len = self.parameters_len();
        if param_len > HCI_MAX_PARAM_LEN {
            return Err(Error::InvalidArg);
        }

        let total = HCI_COMMAND_HEADER_LEN + param_len;
        if buf.len() < total {
            return Err(Error::BufferTooSmall);
        }

        LittleEndian::write_u16(&mut buf[0..2], self.opcode().into());
        buf[2] = param_len as u8;
        self.write_parameters(&mut buf[HCI_COMMAND_HEADER_LEN..total])?;
        Ok(total)
    }
}

/// HCI Event packet, borrowed from the receive buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HciEvent<'a> {
    pub event_code: u8,
    pub parameters: &'a [u8],
}

impl<'a> HciEvent<'a> {
    /// Parse an HCI event from raw bytes (event code, length, parameters)
    pub fn parse(data: &'a [u8]) -> Result<Self, Error> {
        if data.len() < HCI_EVENT_HEADER_LEN {
            return Err(Error::InvalidPacket);
        }

        let event_code = data[0];
        let parameter_total_length = data[1] as usize;

        let end = HCI_EVENT_HEADER_LEN + parameter_total_length;
        if data.len() < end {
            return Err(Error::InvalidPacket);
        }

        Ok(HciEvent {
            event_code,
            parameters: &data[HCI_EVENT_HEADER_LEN..end],
        })
    }

    /// Opcode carried by a Command Complete or Command Status event
    pub fn command_opcode(&self) -> Option<Opcode> {
        let offset = match self.event_code {
            EVT_CMD_COMPLETE => 1,
            EVT_CMD_STATUS => 2,
            _ => return None,
        };
        self.parameters
            .get(offset..offset + 2)
            .map(|b| Opcode::from(LittleEndian::read_u16(b)))
    }

    /// Whether this event completes the command with `opcode`
    pub fn is_command_complete(&self, opcode: Opcode) -> bool {
        self.event_code == EVT_CMD_COMPLETE && self.command_opcode() == Some(opcode)
    }

    /// Status byte of a Command Complete or Command Status event
    pub fn status(&self) -> Option<u8> {
        match self.event_code {
            EVT_CMD_COMPLETE => self.parameters.get(3).copied(),
            EVT_CMD_STATUS => self.parameters.first().copied(),
            _ => None,
        }
    }

    /// Return parameters of a Command Complete event, after the status byte
    pub fn return_parameters(&self) -> Option<&'a [u8]> {
        if self.event_code != EVT_CMD_COMPLETE {
            return None;
        }
        self.parameters.get(4..)
    }

    /// Subevent code of an LE Meta event
    pub fn le_subevent(&self) -> Option<u8> {
        if self.event_code != EVT_LE_META_EVENT {
            return None;
        }
        self.parameters.first().copied()
    }

    /// Iterates over the reports in an LE Advertising Report event
    pub fn advertising_reports(&self) -> Option<LeAdvertisingReports<'a>> {
        if self.le_subevent() != Some(EVT_LE_ADVERTISING_REPORT) {
            return None;
        }
        let remaining = *self.parameters.get(1)?;
        Some(LeAdvertisingReports {
            data: &self.parameters[2..],
            remaining,
        })
    }
}

/// LE Advertising Report Event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeAdvertisingReport<'a> {
    pub event_type: u8,
    pub address_type: u8,
    pub address: [u8; 6],
    pub data: &'a [u8],
    pub rssi: i8,
}

impl<'a> LeAdvertisingReport<'a> {
    /// Parse the first report from an HCI LE Meta Event
    pub fn parse_from_meta_event(event: &HciEvent<'a>) -> Option<Self> {
        event.advertising_reports()?.next()?.ok()
    }

    fn parse(data: &'a [u8]) -> Result<(Self, usize), Error> {
        // event type, address type, address, data length
        if data.len() < 9 {
            return Err(Error::InvalidPacket);
        }

        let event_type = data[0];
        let address_type = data[1];

        let mut address = [0u8; 6];
        address.copy_from_slice(&data[2..8]);

        let data_length = data[8] as usize;
        if data.len() < 9 + data_length + 1 {
            return Err(Error::InvalidPacket);
        }

        let report = LeAdvertisingReport {
            event_type,
            address_type,
            address,
            data: &data[9..9 + data_length],
            rssi: data[9 + data_length] as i8,
        };
        Ok((report, 9 + data_length + 1))
    }
}

/// Iterator over the reports of one LE Advertising Report event
#[derive(Debug, Clone)]
pub struct LeAdvertisingReports<'a> {
    data: &'a [u8],
    remaining: u8,
}

impl<'a> Iterator for LeAdvertisingReports<'a> {
    type Item = Result<LeAdvertisingReport<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match LeAdvertisingReport::parse(self.data) {
            Ok((report, used)) => {
                self.data = &self.data[used..];
                Some(Ok(report))
            }
            Err(e) => {
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }
}

/// Packet boundary flag of an ACL data packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoundaryFlag {
    FirstNonFlushable,
    Continuing,
    FirstFlushable,
    Complete,
}

impl From<u16> for BoundaryFlag {
    fn from(bits: u16) -> Self {
        match bits & 0b11 {
            0b00 => Self::FirstNonFlushable,
            0b01 => Self::Continuing,
            0b10 => Self::FirstFlushable,
            _ => Self::Complete,
        }
    }
}

/// ACL data packet header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AclHeader {
    pub handle: u16,
    pub boundary: BoundaryFlag,
    pub broadcast: u8,
    pub data_len: u16,
}

impl AclHeader {
    /// Parse an ACL header from the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self, Error> {
        if data.len() < HCI_ACL_HEADER_LEN {
            return Err(Error::InvalidPacket);
        }

        let handle_flags = LittleEndian::read_u16(&data[0..2]);
        Ok(AclHeader {
            handle: handle_flags & 0x0fff,
            boundary: BoundaryFlag::from(handle_flags >> 12),
            broadcast: ((handle_flags >> 14) & 0b11) as u8,
            data_len: LittleEndian::read_u16(&data[2..4]),
        })
    }

    /// Header plus payload length
    pub fn packet_len(&self) -> usize {
        HCI_ACL_HEADER_LEN + self.data_len as usize
    }
}

/// Total length of the ISO packet whose header starts `data`
pub(crate) fn iso_packet_len(data: &[u8]) -> Result<usize, Error> {
    if data.len() < HCI_ISO_HEADER_LEN {
        return Err(Error::InvalidPacket);
    }
    // 14-bit data load length
    let data_len = LittleEndian::read_u16(&data[2..4]) & 0x3fff;
    Ok(HCI_ISO_HEADER_LEN + data_len as usize)
}
