//! Radio coexistence
//!
//! Two layers are exposed. The protocol API (`request`, `release`, ...) lets a radio protocol ask
//! the installed coexistence interface for permission to use the air. The GPIOTE interfaces
//! signal radio activity to an external packet traffic arbiter over one or three wires.

use crate::error::{Error, RetVal};
use crate::raw;
use bitflags::bitflags;
use core::cell::Cell;
use critical_section::Mutex;

bitflags! {
    /// Radio operations a coexistence request covers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CxOps: u8 {
        const IDLE_LISTEN = raw::mpsl_cx_op_t_MPSL_CX_OP_IDLE_LISTEN as u8;
        const RX = raw::mpsl_cx_op_t_MPSL_CX_OP_RX as u8;
        const TX = raw::mpsl_cx_op_t_MPSL_CX_OP_TX as u8;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CxOps {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "CxOps({=u8:#x})", self.bits())
    }
}

/// A request for radio operations at a given priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CxRequest {
    pub ops: CxOps,
    pub priority: u8,
}

impl From<&CxRequest> for raw::mpsl_cx_request_t {
    fn from(request: &CxRequest) -> Self {
        raw::mpsl_cx_request_t {
            ops: request.ops.bits(),
            prio: request.priority,
        }
    }
}

/// Asks the coexistence interface to grant `request`. A new request replaces the previous one.
pub fn request(request: &CxRequest) -> Result<(), Error> {
    let raw_request = raw::mpsl_cx_request_t::from(request);
    unsafe { raw::mpsl_cx_request(&raw_request) }.check()?;
    trace!("CX request {:?} prio {}", request.ops, request.priority);
    Ok(())
}

/// Withdraws the outstanding request
pub fn release() -> Result<(), Error> {
    unsafe { raw::mpsl_cx_release() }.check()?;
    Ok(())
}

/// Operations currently granted
pub fn granted_ops() -> Result<CxOps, Error> {
    let mut ops = 0;
    unsafe { raw::mpsl_cx_granted_ops_get(&mut ops) }.check()?;
    Ok(CxOps::from_bits_truncate(ops))
}

/// Worst case delay between a request and its grant
pub fn request_grant_delay_us() -> u32 {
    unsafe { raw::mpsl_cx_req_grant_delay_get() }
}

/// Called from interrupt context whenever the granted operations change
pub type GrantCallback = fn(CxOps);

static GRANT_CALLBACK: Mutex<Cell<Option<GrantCallback>>> = Mutex::new(Cell::new(None));

unsafe extern "C" fn on_granted_ops(granted: raw::mpsl_cx_op_map_t) {
    let callback = critical_section::with(|cs| GRANT_CALLBACK.borrow(cs).get());
    if let Some(callback) = callback {
        callback(CxOps::from_bits_truncate(granted));
    }
}

/// Registers the grant change callback, replacing any previous one
pub fn register_callback(callback: GrantCallback) -> Result<(), Error> {
    critical_section::with(|cs| GRANT_CALLBACK.borrow(cs).set(Some(callback)));
    unsafe { raw::mpsl_cx_register_callback(Some(on_granted_ops)) }.check()?;
    Ok(())
}

/// One GPIO line of a coexistence interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioConfig {
    /// Absolute pin number, `port * 32 + pin`
    pub pin: u32,
    pub active_high: bool,
}

impl From<GpioConfig> for raw::mpsl_coex_gpiote_cfg_t {
    fn from(cfg: GpioConfig) -> Self {
        raw::mpsl_coex_gpiote_cfg_t {
            gpio_pin: cfg.pin,
            active_high: cfg.active_high,
        }
    }
}

/// IEEE 802.15.2 three-wire PTA interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThreeWireConfig {
    pub request: GpioConfig,
    pub priority: GpioConfig,
    pub grant: GpioConfig,
    /// Time from asserting REQUEST until PRIORITY carries the transaction type
    pub type_delay_us: u32,
    /// Time from asserting REQUEST until the radio starts
    pub radio_delay_us: u32,
    /// PRIORITY level signalling a receive operation
    pub is_rx_active_level: bool,
}

impl ThreeWireConfig {
    pub fn validate(&self) -> Result<(), Error> {
        let pins = [self.request.pin, self.priority.pin, self.grant.pin];
        if pins[0] == pins[1] || pins[0] == pins[2] || pins[1] == pins[2] {
            return Err(Error::InvalidArg);
        }
        if self.type_delay_us > self.radio_delay_us {
            return Err(Error::InvalidArg);
        }
        Ok(())
    }

    fn to_raw(&self) -> raw::mpsl_coex_if_t {
        raw::mpsl_coex_if_t {
            if_id: raw::mpsl_coex_if_id_t_MPSL_COEX_802152_3WIRE_GPIOTE_ID,
            interfaces: raw::mpsl_coex_if_t__bindgen_ty_1 {
                coex_3wire_gpiote: raw::mpsl_coex_802152_3wire_gpiote_if_t {
                    request_cfg: self.request.into(),
                    priority_cfg: self.priority.into(),
                    grant_cfg: self.grant.into(),
                    type_delay_us: self.type_delay_us,
                    radio_delay_us: self.radio_delay_us,
                    is_rx_active_level: self.is_rx_active_level,
                },
            },
        }
    }
}

fn one_wire_raw(bt_active: GpioConfig) -> raw::mpsl_coex_if_t {
    raw::mpsl_coex_if_t {
        if_id: raw::mpsl_coex_if_id_t_MPSL_COEX_1WIRE_GPIOTE_ID,
        interfaces: raw::mpsl_coex_if_t__bindgen_ty_1 {
            coex_1wire_gpiote: raw::mpsl_coex_1wire_gpiote_if_t {
                bt_active_cfg: bt_active.into(),
            },
        },
    }
}

/// Enables the three-wire interface. The configuration is copied.
pub fn enable_three_wire(config: &ThreeWireConfig) -> Result<(), Error> {
    config.validate()?;
    let interface = config.to_raw();
    unsafe { raw::mpsl_coex_support_802152_3wire_gpiote_if() }.check()?;
    unsafe { raw::mpsl_coex_enable(&interface, None) }.check()?;
    debug!(
        "3-wire coex enabled (REQUEST {}, PRIORITY {}, GRANT {})",
        config.request.pin, config.priority.pin, config.grant.pin
    );
    Ok(())
}

/// Enables the single-wire interface, asserting `bt_active` while the radio is in use
pub fn enable_one_wire(bt_active: GpioConfig) -> Result<(), Error> {
    let interface = one_wire_raw(bt_active);
    unsafe { raw::mpsl_coex_support_1wire_gpiote_if() }.check()?;
    unsafe { raw::mpsl_coex_enable(&interface, None) }.check()?;
    debug!("1-wire coex enabled (BT_ACTIVE {})", bt_active.pin);
    Ok(())
}

pub fn disable() -> Result<(), Error> {
    unsafe { raw::mpsl_coex_disable() }.check()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpio(pin: u32) -> GpioConfig {
        GpioConfig {
            pin,
            active_high: true,
        }
    }

    fn three_wire() -> ThreeWireConfig {
        ThreeWireConfig {
            request: gpio(2),
            priority: gpio(3),
            grant: gpio(4),
            type_delay_us: 5,
            radio_delay_us: 40,
            is_rx_active_level: false,
        }
    }

    #[test]
    fn test_cx_ops_bits() {
        assert_eq!(CxOps::IDLE_LISTEN.bits(), 1);
        assert_eq!(CxOps::RX.bits(), 2);
        assert_eq!(CxOps::TX.bits(), 4);
        assert_eq!(CxOps::from_bits_truncate(0xFE), CxOps::RX | CxOps::TX);
    }

    #[test]
    fn test_raw_request() {
        let request = CxRequest {
            ops: CxOps::RX | CxOps::TX,
            priority: 7,
        };
        let raw_request = raw::mpsl_cx_request_t::from(&request);
        assert_eq!(raw_request.ops, 6);
        assert_eq!(raw_request.prio, 7);
    }

    #[test]
    fn test_three_wire_validation() {
        assert!(three_wire().validate().is_ok());

        let config = ThreeWireConfig {
            grant: gpio(2),
            ..three_wire()
        };
        assert_eq!(config.validate(), Err(Error::InvalidArg));

        let config = ThreeWireConfig {
            type_delay_us: 41,
            ..three_wire()
        };
        assert_eq!(config.validate(), Err(Error::InvalidArg));
    }

    #[test]
    fn test_raw_interfaces() {
        let interface = three_wire().to_raw();
        assert_eq!(interface.if_id, 0);
        let wires = unsafe { interface.interfaces.coex_3wire_gpiote };
        assert_eq!(wires.request_cfg.gpio_pin, 2);
        assert_eq!(wires.grant_cfg.gpio_pin, 4);
        assert_eq!(wires.radio_delay_us, 40);

        let interface = one_wire_raw(GpioConfig {
            pin: 33,
            active_high: false,
        });
        assert_eq!(interface.if_id, 1);
        let wire = unsafe { interface.interfaces.coex_1wire_gpiote };
        assert_eq!(wire.bt_active_cfg.gpio_pin, 33);
        assert!(!wire.bt_active_cfg.active_high);
    }

    #[test]
    fn test_grant_callback_dispatch() {
        use core::sync::atomic::{AtomicU8, Ordering};
        static GRANTED: AtomicU8 = AtomicU8::new(0);

        fn on_grant(ops: CxOps) {
            GRANTED.store(ops.bits(), Ordering::SeqCst);
        }

        critical_section::with(|cs| GRANT_CALLBACK.borrow(cs).set(Some(on_grant)));
        unsafe { on_granted_ops(0x0A) };
        assert_eq!(GRANTED.load(Ordering::SeqCst), CxOps::RX.bits());
    }
}
