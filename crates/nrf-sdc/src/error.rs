//! Error types for the nrf-sdc library
//!
//! The controller and MPSL report failures as negated `NRF_E*` values; direct HCI command
//! functions report a non-zero HCI status byte. Both are surfaced through [`Error`] without
//! losing the vendor value.

use crate::raw;
use thiserror::Error;

/// Errors returned by the controller, MPSL, or this wrapper
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("Operation not permitted")]
    NotPermitted,

    #[error("No such entry")]
    NoEntry,

    #[error("Out of memory")]
    NoMemory,

    #[error("Resource busy")]
    Busy,

    #[error("Invalid argument")]
    InvalidArg,

    #[error("Resource temporarily unavailable")]
    Again,

    #[error("Operation not supported")]
    OpNotSupported,

    #[error("HCI command failed with status {0:#04x}")]
    Hci(u8),

    #[error("Buffer too small")]
    BufferTooSmall,

    #[error("Invalid HCI packet format")]
    InvalidPacket,

    #[error("Vendor error code {0}")]
    Other(i32),
}

impl Error {
    /// Maps a vendor errno to an error. Accepts both `NRF_EINVAL` and `-NRF_EINVAL`.
    pub fn from_errno(code: i32) -> Self {
        match code.unsigned_abs() {
            raw::NRF_EPERM => Self::NotPermitted,
            raw::NRF_ENOENT => Self::NoEntry,
            raw::NRF_ENOMEM => Self::NoMemory,
            raw::NRF_EBUSY => Self::Busy,
            raw::NRF_EINVAL => Self::InvalidArg,
            raw::NRF_EAGAIN => Self::Again,
            raw::NRF_EOPNOTSUPP => Self::OpNotSupported,
            _ => Self::Other(code),
        }
    }

    /// The negative vendor errno this error corresponds to, if any.
    pub fn errno(&self) -> Option<i32> {
        let code = match self {
            Self::NotPermitted => raw::NRF_EPERM,
            Self::NoEntry => raw::NRF_ENOENT,
            Self::NoMemory => raw::NRF_ENOMEM,
            Self::Busy => raw::NRF_EBUSY,
            Self::InvalidArg => raw::NRF_EINVAL,
            Self::Again => raw::NRF_EAGAIN,
            Self::OpNotSupported => raw::NRF_EOPNOTSUPP,
            Self::Other(code) => return Some(code.checked_abs().map_or(i32::MIN, |c| -c)),
            Self::Hci(_) | Self::BufferTooSmall | Self::InvalidPacket => return None,
        };
        Some(-(code as i32))
    }
}

impl From<i32> for Error {
    fn from(code: i32) -> Self {
        Self::from_errno(code)
    }
}

/// Converts raw vendor return values into results.
pub(crate) trait RetVal {
    type Output;

    fn check(self) -> Result<Self::Output, Error>;
}

/// `int32_t` returns: negative is an errno, anything else is a value (often zero).
impl RetVal for i32 {
    type Output = u32;

    fn check(self) -> Result<u32, Error> {
        if self < 0 {
            Err(Error::from_errno(self))
        } else {
            Ok(self as u32)
        }
    }
}

/// `uint8_t` returns from the direct HCI command functions: an HCI status code.
impl RetVal for u8 {
    type Output = ();

    fn check(self) -> Result<(), Error> {
        match self {
            0 => Ok(()),
            status => Err(Error::Hci(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_mapping() {
        assert_eq!(Error::from_errno(-1), Error::NotPermitted);
        assert_eq!(Error::from_errno(-22), Error::InvalidArg);
        assert_eq!(Error::from_errno(22), Error::InvalidArg);
        assert_eq!(Error::from_errno(-35), Error::Again);
        assert_eq!(Error::from_errno(-45), Error::OpNotSupported);
        assert_eq!(Error::from_errno(-12), Error::NoMemory);
        assert_eq!(Error::from(-16), Error::Busy);
    }

    #[test]
    fn test_unknown_codes_are_preserved() {
        assert_eq!(Error::from_errno(-60), Error::Other(-60));
        assert_eq!(Error::Other(-60).errno(), Some(-60));
        assert_eq!(Error::Other(60).errno(), Some(-60));
    }

    #[test]
    fn test_most_negative_code() {
        let err = Error::from_errno(i32::MIN);
        assert_eq!(err, Error::Other(i32::MIN));
        assert_eq!(err.errno(), Some(i32::MIN));
        assert_eq!(Error::Other(i32::MAX).errno(), Some(-i32::MAX));
    }

    #[test]
    fn test_errno_round_trip() {
        for err in [
            Error::NotPermitted,
            Error::NoEntry,
            Error::NoMemory,
            Error::Busy,
            Error::InvalidArg,
            Error::Again,
            Error::OpNotSupported,
        ] {
            let code = err.errno().unwrap();
            assert!(code < 0);
            assert_eq!(Error::from_errno(code), err);
        }
        assert_eq!(Error::Hci(0x0c).errno(), None);
    }

    #[test]
    fn test_retval() {
        assert_eq!(0i32.check(), Ok(0));
        assert_eq!(4096i32.check(), Ok(4096));
        assert_eq!((-22i32).check(), Err(Error::InvalidArg));
        assert_eq!(0u8.check(), Ok(()));
        assert_eq!(0x12u8.check(), Err(Error::Hci(0x12)));
    }
}
