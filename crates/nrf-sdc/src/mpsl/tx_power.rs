//! Per-channel TX power limits

use crate::error::{Error, RetVal};
use crate::raw;

pub const BLE_CHANNELS: usize = raw::MPSL_TOTAL_NUM_OF_BLE_CHANNELS as usize;
pub const IEEE802154_CHANNELS: usize = raw::MPSL_TOTAL_NUM_OF_802154_CHANNELS as usize;

/// Radio PHY a power envelope applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phy {
    Ble1M,
    Ble2M,
    BleCoded125k,
    BleCoded500k,
    Ieee802154,
}

impl Phy {
    pub fn is_ble(self) -> bool {
        !matches!(self, Phy::Ieee802154)
    }
}

impl From<Phy> for raw::mpsl_phy_t {
    fn from(phy: Phy) -> Self {
        match phy {
            Phy::Ble1M => raw::MPSL_PHY_BLE_1M,
            Phy::Ble2M => raw::MPSL_PHY_BLE_2M,
            Phy::BleCoded125k => raw::MPSL_PHY_BLE_LR125Kbit,
            Phy::BleCoded500k => raw::MPSL_PHY_BLE_LR500Kbit,
            Phy::Ieee802154 => raw::MPSL_PHY_Ieee802154_250Kbit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Limits {
    Ble([i8; BLE_CHANNELS]),
    Ieee802154([i8; IEEE802154_CHANNELS]),
}

/// Maximum TX power in dBm for each channel of one PHY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxPowerEnvelope {
    phy: Phy,
    limits: Limits,
}

impl TxPowerEnvelope {
    /// Envelope for a Bluetooth LE PHY, indexed by channel number 0..=39
    pub fn ble(phy: Phy, limits: [i8; BLE_CHANNELS]) -> Result<Self, Error> {
        if !phy.is_ble() {
            return Err(Error::InvalidArg);
        }
        Ok(Self {
            phy,
            limits: Limits::Ble(limits),
        })
    }

    /// Envelope for IEEE 802.15.4, indexed from channel 11
    pub fn ieee802154(limits: [i8; IEEE802154_CHANNELS]) -> Self {
        Self {
            phy: Phy::Ieee802154,
            limits: Limits::Ieee802154(limits),
        }
    }

    /// The same limit on every channel of `phy`
    pub fn uniform(phy: Phy, dbm: i8) -> Self {
        let limits = if phy.is_ble() {
            Limits::Ble([dbm; BLE_CHANNELS])
        } else {
            Limits::Ieee802154([dbm; IEEE802154_CHANNELS])
        };
        Self { phy, limits }
    }

    pub fn phy(&self) -> Phy {
        self.phy
    }

    pub fn limits(&self) -> &[i8] {
        match &self.limits {
            Limits::Ble(limits) => limits,
            Limits::Ieee802154(limits) => limits,
        }
    }

    pub fn to_raw(&self) -> raw::mpsl_tx_power_envelope_t {
        let envelope = match self.limits {
            Limits::Ble(tx_power_ble) => raw::mpsl_tx_power_envelope_t__bindgen_ty_1 { tx_power_ble },
            Limits::Ieee802154(tx_power_802154) => {
                raw::mpsl_tx_power_envelope_t__bindgen_ty_1 { tx_power_802154 }
            }
        };
        raw::mpsl_tx_power_envelope_t {
            phy: self.phy.into(),
            envelope,
        }
    }

    /// Installs the envelope. MPSL copies it, so the envelope need not outlive the call.
    pub fn apply(&self) -> Result<(), Error> {
        let envelope = self.to_raw();
        unsafe { raw::mpsl_tx_power_channel_map_set(&envelope) }.check()?;
        debug!("TX power envelope applied for {:?}", self.phy);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ble_envelope_requires_ble_phy() {
        assert_eq!(
            TxPowerEnvelope::ble(Phy::Ieee802154, [0; BLE_CHANNELS]),
            Err(Error::InvalidArg)
        );

        let mut limits = [8i8; BLE_CHANNELS];
        limits[39] = -4;
        let envelope = TxPowerEnvelope::ble(Phy::Ble2M, limits).unwrap();
        assert_eq!(envelope.phy(), Phy::Ble2M);
        assert_eq!(envelope.limits().len(), 40);
        assert_eq!(envelope.limits()[39], -4);
    }

    #[test]
    fn test_raw_envelope() {
        let envelope = TxPowerEnvelope::ble(Phy::BleCoded125k, [3; BLE_CHANNELS]).unwrap().to_raw();
        assert_eq!(envelope.phy, raw::MPSL_PHY_BLE_LR125Kbit);
        assert_eq!(unsafe { envelope.envelope.tx_power_ble }, [3; BLE_CHANNELS]);

        let envelope = TxPowerEnvelope::uniform(Phy::Ieee802154, -8).to_raw();
        assert_eq!(envelope.phy, raw::MPSL_PHY_Ieee802154_250Kbit);
        assert_eq!(unsafe { envelope.envelope.tx_power_802154 }, [-8; IEEE802154_CHANNELS]);
    }

    #[test]
    fn test_uniform_envelope_size() {
        assert_eq!(TxPowerEnvelope::uniform(Phy::Ble1M, 0).limits().len(), BLE_CHANNELS);
        assert_eq!(
            TxPowerEnvelope::uniform(Phy::Ieee802154, 0).limits().len(),
            IEEE802154_CHANNELS
        );
    }
}
