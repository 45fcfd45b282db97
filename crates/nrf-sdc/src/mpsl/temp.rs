//! On-die temperature

use crate::raw;

/// A temperature reading in units of 0.25 °C
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature(i32);

impl Temperature {
    pub const fn from_quarter_degrees(quarters: i32) -> Self {
        Self(quarters)
    }

    pub const fn quarter_degrees(self) -> i32 {
        self.0
    }

    pub const fn millidegrees(self) -> i32 {
        self.0 * 250
    }

    /// Whole degrees Celsius, truncated toward zero
    pub const fn degrees(self) -> i32 {
        self.0 / 4
    }
}

/// Reads the chip temperature. Safe to call while the radio is active.
pub fn temperature() -> Temperature {
    Temperature(unsafe { raw::mpsl_temperature_get() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_conversions() {
        let t = Temperature::from_quarter_degrees(99);
        assert_eq!(t.quarter_degrees(), 99);
        assert_eq!(t.millidegrees(), 24_750);
        assert_eq!(t.degrees(), 24);

        let t = Temperature::from_quarter_degrees(-10);
        assert_eq!(t.millidegrees(), -2_500);
        assert_eq!(t.degrees(), -2);

        assert!(Temperature::from_quarter_degrees(4) > Temperature::from_quarter_degrees(3));
    }
}
