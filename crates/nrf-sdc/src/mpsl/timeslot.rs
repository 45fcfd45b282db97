//! Radio timeslots
//!
//! A timeslot session gives an application exclusive access to the radio and TIMER0 for
//! scheduled periods, interleaved with the Bluetooth LE controller. Signals from MPSL are
//! delivered at the highest interrupt priority to the [`Handler`] registered when the session
//! was opened. The handler answers each signal with an [`Action`].

use crate::error::{Error, RetVal};
use crate::raw;
use core::cell::{Cell, UnsafeCell};
use critical_section::Mutex;

pub const LENGTH_MIN_US: u32 = raw::MPSL_TIMESLOT_LENGTH_MIN_US;
pub const LENGTH_MAX_US: u32 = raw::MPSL_TIMESLOT_LENGTH_MAX_US;
pub const DISTANCE_MAX_US: u32 = raw::MPSL_TIMESLOT_DISTANCE_MAX_US;
pub const EARLIEST_TIMEOUT_MAX_US: u32 = raw::MPSL_TIMESLOT_EARLIEST_TIMEOUT_MAX_US;
pub const EXTENSION_TIME_MIN_US: u32 = raw::MPSL_TIMESLOT_EXTENSION_TIME_MIN_US;

/// Bytes of session context memory MPSL needs per session
pub const CONTEXT_SIZE: usize = raw::MPSL_TIMESLOT_CONTEXT_SIZE as usize;
/// Maximum number of concurrent sessions
pub const SESSION_COUNT_MAX: usize = raw::MPSL_TIMESLOT_CONTEXT_COUNT_MAX as usize;

/// High frequency clock requirement for a timeslot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HfclkConfig {
    /// The crystal oscillator is running for the whole slot
    XtalGuaranteed,
    /// The slot may start before the crystal oscillator is stable
    NoGuarantee,
}

impl From<HfclkConfig> for u8 {
    fn from(cfg: HfclkConfig) -> u8 {
        let raw = match cfg {
            HfclkConfig::XtalGuaranteed => raw::MPSL_TIMESLOT_HFCLK_CFG_MPSL_TIMESLOT_HFCLK_CFG_XTAL_GUARANTEED,
            HfclkConfig::NoGuarantee => raw::MPSL_TIMESLOT_HFCLK_CFG_MPSL_TIMESLOT_HFCLK_CFG_NO_GUARANTEE,
        };
        raw as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Priority {
    High,
    Normal,
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        let raw = match priority {
            Priority::High => raw::MPSL_TIMESLOT_PRIORITY_MPSL_TIMESLOT_PRIORITY_HIGH,
            Priority::Normal => raw::MPSL_TIMESLOT_PRIORITY_MPSL_TIMESLOT_PRIORITY_NORMAL,
        };
        raw as u8
    }
}

/// A timeslot request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    /// A slot as early as possible, given up if not granted within `timeout_us`
    Earliest {
        hfclk: HfclkConfig,
        priority: Priority,
        length_us: u32,
        timeout_us: u32,
    },
    /// A slot starting `distance_us` after the start of the previous one
    Normal {
        hfclk: HfclkConfig,
        priority: Priority,
        distance_us: u32,
        length_us: u32,
    },
}

impl Request {
    pub fn validate(&self) -> Result<(), Error> {
        let length_us = match *self {
            Request::Earliest {
                length_us,
                timeout_us,
                ..
            } => {
                if timeout_us == 0 || timeout_us > EARLIEST_TIMEOUT_MAX_US {
                    return Err(Error::InvalidArg);
                }
                length_us
            }
            Request::Normal {
                distance_us,
                length_us,
                ..
            } => {
                if distance_us > DISTANCE_MAX_US {
                    return Err(Error::InvalidArg);
                }
                length_us
            }
        };
        if !(LENGTH_MIN_US..=LENGTH_MAX_US).contains(&length_us) {
            return Err(Error::InvalidArg);
        }
        Ok(())
    }

    pub fn to_raw(&self) -> raw::mpsl_timeslot_request_t {
        match *self {
            Request::Earliest {
                hfclk,
                priority,
                length_us,
                timeout_us,
            } => raw::mpsl_timeslot_request_t {
                request_type: raw::MPSL_TIMESLOT_REQUEST_TYPE_MPSL_TIMESLOT_REQ_TYPE_EARLIEST as u8,
                params: raw::mpsl_timeslot_request_t__bindgen_ty_1 {
                    earliest: raw::mpsl_timeslot_request_earliest_t {
                        hfclk: hfclk.into(),
                        priority: priority.into(),
                        length_us,
                        timeout_us,
                    },
                },
            },
            Request::Normal {
                hfclk,
                priority,
                distance_us,
                length_us,
            } => raw::mpsl_timeslot_request_t {
                request_type: raw::MPSL_TIMESLOT_REQUEST_TYPE_MPSL_TIMESLOT_REQ_TYPE_NORMAL as u8,
                params: raw::mpsl_timeslot_request_t__bindgen_ty_1 {
                    normal: raw::mpsl_timeslot_request_normal_t {
                        hfclk: hfclk.into(),
                        priority: priority.into(),
                        distance_us,
                        length_us,
                    },
                },
            },
        }
    }
}

/// Signals delivered to a session handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// The slot has started
    Start,
    Timer0,
    Radio,
    ExtendFailed,
    ExtendSucceeded,
    /// The request was blocked by other radio activity
    Blocked,
    /// The request was cancelled in favour of higher priority activity
    Cancelled,
    /// No more slots are scheduled for the session
    SessionIdle,
    /// The handler returned an action not valid for the signal
    InvalidReturn,
    SessionClosed,
    /// The slot ran past its end
    Overstayed,
}

impl TryFrom<u32> for Signal {
    type Error = Error;

    fn try_from(signal: u32) -> Result<Self, Error> {
        Ok(match signal {
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_START => Signal::Start,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_TIMER0 => Signal::Timer0,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_RADIO => Signal::Radio,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_EXTEND_FAILED => Signal::ExtendFailed,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_EXTEND_SUCCEEDED => Signal::ExtendSucceeded,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_BLOCKED => Signal::Blocked,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_CANCELLED => Signal::Cancelled,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_SESSION_IDLE => Signal::SessionIdle,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_INVALID_RETURN => Signal::InvalidReturn,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_SESSION_CLOSED => Signal::SessionClosed,
            raw::MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_OVERSTAYED => Signal::Overstayed,
            _ => return Err(Error::InvalidArg),
        })
    }
}

/// What MPSL should do after a signal has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    None,
    /// Extend the current slot by this many microseconds
    Extend(u32),
    /// End the current slot
    End,
    /// End the current slot and request another
    Request(Request),
}

impl Action {
    /// Writes the action into the return parameter block. `next` backs the request pointer and
    /// must stay valid until MPSL has processed the return value.
    fn encode(
        &self,
        ret: &mut raw::mpsl_timeslot_signal_return_param_t,
        next: &mut raw::mpsl_timeslot_request_t,
    ) {
        match *self {
            Action::None => {
                ret.callback_action = raw::MPSL_TIMESLOT_SIGNAL_ACTION_MPSL_TIMESLOT_SIGNAL_ACTION_NONE as u8;
            }
            Action::Extend(length_us) => {
                ret.callback_action =
                    raw::MPSL_TIMESLOT_SIGNAL_ACTION_MPSL_TIMESLOT_SIGNAL_ACTION_EXTEND as u8;
                ret.params.extend =
                    raw::mpsl_timeslot_signal_return_param_t__bindgen_ty_1__bindgen_ty_2 { length_us };
            }
            Action::End => {
                ret.callback_action = raw::MPSL_TIMESLOT_SIGNAL_ACTION_MPSL_TIMESLOT_SIGNAL_ACTION_END as u8;
            }
            Action::Request(request) => {
                *next = request.to_raw();
                ret.callback_action =
                    raw::MPSL_TIMESLOT_SIGNAL_ACTION_MPSL_TIMESLOT_SIGNAL_ACTION_REQUEST as u8;
                ret.params.request = raw::mpsl_timeslot_signal_return_param_t__bindgen_ty_1__bindgen_ty_1 {
                    p_next: next as *mut _,
                };
            }
        }
    }

    fn validate(&self) -> Result<(), Error> {
        match self {
            Action::Extend(length_us) if *length_us < EXTENSION_TIME_MIN_US => Err(Error::InvalidArg),
            Action::Request(request) => request.validate(),
            _ => Ok(()),
        }
    }
}

/// Signal handler for a session. Runs in the highest priority interrupt.
pub type Handler = fn(session: u8, signal: Signal) -> Action;

static HANDLERS: Mutex<Cell<[Option<Handler>; SESSION_COUNT_MAX]>> =
    Mutex::new(Cell::new([None; SESSION_COUNT_MAX]));

fn set_handler(session: u8, handler: Option<Handler>) {
    critical_section::with(|cs| {
        let cell = HANDLERS.borrow(cs);
        let mut handlers = cell.get();
        handlers[session as usize] = handler;
        cell.set(handlers);
    });
}

fn handler(session: u8) -> Option<Handler> {
    critical_section::with(|cs| HANDLERS.borrow(cs).get().get(session as usize).copied().flatten())
}

struct ReturnSlot {
    ret: raw::mpsl_timeslot_signal_return_param_t,
    next: raw::mpsl_timeslot_request_t,
}

impl ReturnSlot {
    const fn new() -> Self {
        Self {
            ret: raw::mpsl_timeslot_signal_return_param_t {
                callback_action: 0,
                params: raw::mpsl_timeslot_signal_return_param_t__bindgen_ty_1 {
                    extend: raw::mpsl_timeslot_signal_return_param_t__bindgen_ty_1__bindgen_ty_2 { length_us: 0 },
                },
            },
            next: raw::mpsl_timeslot_request_t {
                request_type: 0,
                params: raw::mpsl_timeslot_request_t__bindgen_ty_1 {
                    earliest: raw::mpsl_timeslot_request_earliest_t {
                        hfclk: 0,
                        priority: 0,
                        length_us: 0,
                        timeout_us: 0,
                    },
                },
            },
        }
    }
}

/// Per-session return parameters. MPSL reads them after the signal callback returns, so they
/// live in static memory. Only the signal callback touches them, and MPSL never runs it
/// reentrantly.
struct ReturnSlots(UnsafeCell<[ReturnSlot; SESSION_COUNT_MAX]>);

unsafe impl Sync for ReturnSlots {}

static RETURN_SLOTS: ReturnSlots = ReturnSlots(UnsafeCell::new([const { ReturnSlot::new() }; SESSION_COUNT_MAX]));

unsafe extern "C" fn on_signal(session: u8, signal: u32) -> *mut raw::mpsl_timeslot_signal_return_param_t {
    let index = (session as usize).min(SESSION_COUNT_MAX - 1);
    let slot = &mut (*RETURN_SLOTS.0.get())[index];

    let action = match (Signal::try_from(signal), handler(session)) {
        (Ok(signal), Some(handler)) => {
            let action = handler(session, signal);
            if signal == Signal::SessionClosed {
                set_handler(session, None);
            }
            action
        }
        _ => Action::None,
    };

    let action = match action.validate() {
        Ok(()) => action,
        Err(_) => {
            warn!("Timeslot session {}: invalid action {:?}", session, action);
            Action::End
        }
    };

    action.encode(&mut slot.ret, &mut slot.next);
    &mut slot.ret
}

/// Number of sessions that fit in `len` bytes of context memory
pub fn session_capacity(len: usize) -> usize {
    (len / CONTEXT_SIZE).min(SESSION_COUNT_MAX)
}

/// Hands MPSL the context memory for timeslot sessions and returns the session count.
///
/// Must be called before any session is opened; the memory stays with MPSL from then on.
pub fn configure_sessions(mem: &'static mut [u8]) -> Result<u8, Error> {
    let count = session_capacity(mem.len());
    if count == 0 || mem.as_ptr() as usize % 4 != 0 {
        return Err(Error::InvalidArg);
    }
    unsafe { raw::mpsl_timeslot_session_count_set(mem.as_mut_ptr().cast(), count as u8) }.check()?;
    debug!("Configured {} timeslot sessions", count);
    Ok(count as u8)
}

/// An open timeslot session
///
/// The session is closed when dropped. Use [`Session::close`] to observe the result.
#[derive(Debug)]
pub struct Session {
    id: u8,
}

impl Session {
    /// Opens a session whose signals are delivered to `handler`
    pub fn open(handler: Handler) -> Result<Self, Error> {
        let mut id = 0;
        unsafe { raw::mpsl_timeslot_session_open(Some(on_signal), &mut id) }.check()?;
        if id as usize >= SESSION_COUNT_MAX {
            close_session(id)?;
            return Err(Error::NoMemory);
        }
        set_handler(id, Some(handler));
        debug!("Timeslot session {} opened", id);
        Ok(Self { id })
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Requests the first slot of the session. Later slots are requested through
    /// [`Action::Request`].
    pub fn request(&self, request: &Request) -> Result<(), Error> {
        request.validate()?;
        let raw_request = request.to_raw();
        // MPSL copies the request
        unsafe { raw::mpsl_timeslot_request(self.id, &raw_request) }.check()?;
        Ok(())
    }

    /// Closes the session. The handler still receives [`Signal::SessionClosed`].
    pub fn close(self) -> Result<(), Error> {
        let id = self.id;
        core::mem::forget(self);
        close_session(id)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = close_session(self.id) {
            warn!("Timeslot session {} close failed: {}", self.id, e);
        }
    }
}

fn close_session(id: u8) -> Result<(), Error> {
    unsafe { raw::mpsl_timeslot_session_close(id) }.check()?;
    Ok(())
}
