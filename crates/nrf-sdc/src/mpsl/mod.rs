//! Multiprotocol Service Layer
//!
//! MPSL owns the radio, TIMER0, RTC0 and the clock peripheral, and arbitrates radio time between
//! protocol stacks. It must be initialized before the controller.
//!
//! Interrupt routing is left to the integrating firmware: forward RADIO, TIMER0 and RTC0 to the
//! high priority handlers, POWER_CLOCK to [`on_clock_irq`], and the interrupt passed to [`init`]
//! to [`on_low_priority_irq`]. Low priority work then runs in [`run`].

use crate::error::{Error, RetVal};
use crate::raw;
use core::ffi::{c_char, CStr};
use cortex_m::interrupt::InterruptNumber;
use cortex_m::peripheral::NVIC;
use core::future::poll_fn;
use core::task::Poll;
use embassy_sync::waitqueue::AtomicWaker;

pub mod clock;
pub mod coex;
pub mod dppi;
pub mod temp;
pub mod timeslot;
pub mod tx_power;

pub use clock::{hfclk_is_running, HfClock};
pub use temp::{temperature, Temperature};

/// Low frequency clock source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LfClock {
    Rc,
    Xtal,
    Synth,
    ExtLowSwing,
    ExtFullSwing,
}

impl From<LfClock> for u8 {
    fn from(source: LfClock) -> u8 {
        let raw = match source {
            LfClock::Rc => raw::MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_RC,
            LfClock::Xtal => raw::MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_XTAL,
            LfClock::Synth => raw::MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_SYNTH,
            LfClock::ExtLowSwing => raw::MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_EXT_LOW_SWING,
            LfClock::ExtFullSwing => raw::MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_EXT_FULL_SWING,
        };
        raw as u8
    }
}

/// Low frequency clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub source: LfClock,
    /// Calibration timer interval in 1/4 second units. RC source only.
    pub rc_ctiv: u8,
    /// Calibrate on every `rc_temp_ctiv`th timer expiry if the temperature changed. RC source only.
    pub rc_temp_ctiv: u8,
    pub accuracy_ppm: u16,
    /// Return from [`init`] without waiting for the LF clock to start
    pub skip_wait_lfclk_started: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            source: LfClock::Rc,
            rc_ctiv: raw::MPSL_RECOMMENDED_RC_CTIV as u8,
            rc_temp_ctiv: raw::MPSL_RECOMMENDED_RC_TEMP_CTIV as u8,
            accuracy_ppm: raw::MPSL_DEFAULT_CLOCK_ACCURACY_PPM as u16,
            skip_wait_lfclk_started: raw::MPSL_DEFAULT_SKIP_WAIT_LFCLK_STARTED != 0,
        }
    }
}

impl ClockConfig {
    /// Configuration for a 32.768 kHz crystal with the given accuracy
    pub fn xtal(accuracy_ppm: u16) -> Self {
        Self {
            source: LfClock::Xtal,
            rc_ctiv: 0,
            rc_temp_ctiv: 0,
            accuracy_ppm,
            skip_wait_lfclk_started: false,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        let calibrated = self.rc_ctiv != 0 || self.rc_temp_ctiv != 0;
        match self.source {
            LfClock::Rc if self.rc_ctiv == 0 || self.rc_temp_ctiv == 0 => return Err(Error::InvalidArg),
            LfClock::Rc => {}
            _ if calibrated => return Err(Error::InvalidArg),
            _ => {}
        }
        if self.accuracy_ppm == 0 || self.accuracy_ppm as u32 > raw::MPSL_WORST_CLOCK_ACCURACY_PPM {
            return Err(Error::InvalidArg);
        }
        Ok(())
    }
}

impl From<&ClockConfig> for raw::mpsl_clock_lfclk_cfg_t {
    fn from(config: &ClockConfig) -> Self {
        raw::mpsl_clock_lfclk_cfg_t {
            source: config.source.into(),
            rc_ctiv: config.rc_ctiv,
            rc_temp_ctiv: config.rc_temp_ctiv,
            accuracy_ppm: config.accuracy_ppm,
            skip_wait_lfclk_started: config.skip_wait_lfclk_started,
        }
    }
}

/// MPSL configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub clock: ClockConfig,
}

fn irq_number<I: InterruptNumber>(irq: I) -> raw::IRQn_Type {
    irq.number() as raw::IRQn_Type
}

/// Initialize MPSL. Should only be called once!
///
/// `low_prio_irq` is pended by MPSL whenever low priority work is due and must be otherwise
/// unused. It is unpended here; enabling it and setting its priority is up to the caller.
pub fn init<I: InterruptNumber>(config: &Config, low_prio_irq: I) -> Result<(), Error> {
    config.clock.validate()?;

    NVIC::unpend(low_prio_irq);
    let clock_config = raw::mpsl_clock_lfclk_cfg_t::from(&config.clock);
    let irq = irq_number(low_prio_irq);
    unsafe { raw::mpsl_init(&clock_config, irq, Some(assert_handler)) }.check()?;

    info!(
        "MPSL initialized (LF clock {:?}, {} ppm)",
        config.clock.source, config.clock.accuracy_ppm
    );
    Ok(())
}

/// Stops MPSL and releases the peripherals it owns
pub fn uninit() {
    unsafe { raw::mpsl_uninit() };
    debug!("MPSL uninitialized");
}

pub fn is_initialized() -> bool {
    unsafe { raw::mpsl_is_initialized() }
}

/// MPSL library build revision
pub fn build_revision() -> Result<[u8; raw::MPSL_BUILD_REVISION_SIZE as usize], Error> {
    let mut revision = [0u8; raw::MPSL_BUILD_REVISION_SIZE as usize];
    unsafe { raw::mpsl_build_revision_get(revision.as_mut_ptr()) }.check()?;
    Ok(revision)
}

/// Best-effort conversion of a C file name passed to a fault handler
pub(crate) unsafe fn file_name<'a>(file: *const c_char) -> &'a str {
    if file.is_null() {
        return "<unknown>";
    }
    CStr::from_ptr(file).to_str().unwrap_or("<invalid>")
}

unsafe extern "C" fn assert_handler(file: *const c_char, line: u32) {
    panic!("MPSL assertion failed at {}:{}", file_name(file), line);
}

// High priority interrupts

/// # Safety
/// Must only be called from the RADIO interrupt handler.
pub unsafe fn on_radio_irq() {
    raw::MPSL_IRQ_RADIO_Handler();
}

/// # Safety
/// Must only be called from the TIMER0 interrupt handler.
pub unsafe fn on_timer0_irq() {
    raw::MPSL_IRQ_TIMER0_Handler();
}

/// # Safety
/// Must only be called from the RTC0 interrupt handler.
pub unsafe fn on_rtc0_irq() {
    raw::MPSL_IRQ_RTC0_Handler();
}

/// # Safety
/// Must only be called from the POWER_CLOCK interrupt handler.
pub unsafe fn on_clock_irq() {
    raw::MPSL_IRQ_CLOCK_Handler();
}

// Low priority interrupt

static MPSL_WAKER: AtomicWaker = AtomicWaker::new();

/// Handler for the low priority interrupt; wakes [`run`]
pub fn on_low_priority_irq() {
    MPSL_WAKER.wake();
}

/// Runs MPSL low priority processing each time the low priority interrupt fires. Never returns.
pub async fn run() {
    poll_fn(|cx| {
        MPSL_WAKER.register(cx.waker());
        unsafe { raw::mpsl_low_priority_process() };
        Poll::<()>::Pending
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clock_config() {
        let config = ClockConfig::default();
        assert_eq!(config.source, LfClock::Rc);
        assert_eq!(config.rc_ctiv, 16);
        assert_eq!(config.rc_temp_ctiv, 2);
        assert_eq!(config.accuracy_ppm, 250);
        assert!(!config.skip_wait_lfclk_started);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clock_config_validation() {
        assert!(ClockConfig::xtal(20).validate().is_ok());

        // Calibration settings only apply to the RC oscillator
        let config = ClockConfig {
            rc_ctiv: 16,
            ..ClockConfig::xtal(20)
        };
        assert_eq!(config.validate(), Err(Error::InvalidArg));

        let config = ClockConfig {
            rc_ctiv: 0,
            ..ClockConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidArg));

        assert_eq!(ClockConfig::xtal(501).validate(), Err(Error::InvalidArg));
        assert!(ClockConfig::xtal(500).validate().is_ok());
        assert_eq!(ClockConfig::xtal(0).validate(), Err(Error::InvalidArg));
    }

    #[test]
    fn test_raw_clock_config() {
        let raw_config = raw::mpsl_clock_lfclk_cfg_t::from(&ClockConfig::xtal(50));
        assert_eq!(raw_config.source, 1);
        assert_eq!(raw_config.rc_ctiv, 0);
        assert_eq!(raw_config.accuracy_ppm, 50);

        assert_eq!(u8::from(LfClock::Synth), 2);
        assert_eq!(u8::from(LfClock::ExtFullSwing), 4);
    }

    #[derive(Clone, Copy)]
    #[repr(u16)]
    enum Interrupt {
        Swi0 = 20,
        Egu5 = 43,
    }

    unsafe impl InterruptNumber for Interrupt {
        fn number(self) -> u16 {
            self as u16
        }
    }

    #[test]
    fn test_irq_number() {
        assert_eq!(irq_number(Interrupt::Swi0), 20);
        assert_eq!(irq_number(Interrupt::Egu5), 43);
    }

    #[test]
    fn test_file_name() {
        let name = c"mpsl_init.c";
        assert_eq!(unsafe { file_name(name.as_ptr()) }, "mpsl_init.c");
        assert_eq!(unsafe { file_name(core::ptr::null()) }, "<unknown>");
    }
}
