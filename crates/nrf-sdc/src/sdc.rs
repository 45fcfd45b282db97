//! SoftDevice Controller configuration and lifecycle
//!
//! The controller is brought up in two steps. [`init`] registers the fault handler and the
//! random source, selects the feature set and applies the resource configuration, returning
//! how much memory the configuration needs. [`enable`] then hands the controller that memory
//! and starts it. MPSL must be initialized first.

use crate::error::{Error, RetVal};
use crate::hci::transport;
use crate::raw;
use bitflags::bitflags;
use core::cell::RefCell;
use core::ffi::c_char;
use embassy_sync::blocking_mutex::CriticalSectionMutex;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

const CFG_TAG: u8 = raw::SDC_DEFAULT_RESOURCE_CFG_TAG as u8;

/// Required alignment of the controller memory
pub const MEM_ALIGN: usize = 8;

bitflags! {
    /// Controller features, each linked in by the matching `sdc_support_*` call.
    ///
    /// Only selected features end up in the final image.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u32 {
        const ADV = 1 << 0;
        const EXT_ADV = 1 << 1;
        const PERIPHERAL = 1 << 2;
        const CENTRAL = 1 << 3;
        const SCAN = 1 << 4;
        const EXT_SCAN = 1 << 5;
        const EXT_CENTRAL = 1 << 6;
        const DLE_PERIPHERAL = 1 << 7;
        const DLE_CENTRAL = 1 << 8;
        const LE_2M_PHY = 1 << 9;
        const LE_CODED_PHY = 1 << 10;
        const PHY_UPDATE_PERIPHERAL = 1 << 11;
        const PHY_UPDATE_CENTRAL = 1 << 12;
        const LE_PERIODIC_ADV = 1 << 13;
        const LE_PERIODIC_SYNC = 1 << 14;
        const LE_POWER_CONTROL = 1 << 15;
        const SCA_PERIPHERAL = 1 << 16;
        const SCA_CENTRAL = 1 << 17;
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::ADV | Features::PERIPHERAL | Features::SCAN | Features::CENTRAL
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Features {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Features({=u32:#x})", self.bits())
    }
}

type SupportFn = unsafe extern "C" fn() -> i32;

/// Links in the code for one feature
fn enable_feature(feature: Features) -> Result<(), Error> {
    let support: SupportFn = match feature {
        Features::ADV => raw::sdc_support_adv,
        Features::EXT_ADV => raw::sdc_support_ext_adv,
        Features::PERIPHERAL => raw::sdc_support_peripheral,
        Features::CENTRAL => raw::sdc_support_central,
        Features::SCAN => raw::sdc_support_scan,
        Features::EXT_SCAN => raw::sdc_support_ext_scan,
        Features::EXT_CENTRAL => raw::sdc_support_ext_central,
        Features::DLE_PERIPHERAL => raw::sdc_support_dle_peripheral,
        Features::DLE_CENTRAL => raw::sdc_support_dle_central,
        Features::LE_2M_PHY => raw::sdc_support_le_2m_phy,
        Features::LE_CODED_PHY => raw::sdc_support_le_coded_phy,
        Features::PHY_UPDATE_PERIPHERAL => raw::sdc_support_phy_update_peripheral,
        Features::PHY_UPDATE_CENTRAL => raw::sdc_support_phy_update_central,
        Features::LE_PERIODIC_ADV => raw::sdc_support_le_periodic_adv,
        Features::LE_PERIODIC_SYNC => raw::sdc_support_le_periodic_sync,
        Features::LE_POWER_CONTROL => raw::sdc_support_le_power_control,
        Features::SCA_PERIPHERAL => raw::sdc_support_sca_peripheral,
        Features::SCA_CENTRAL => raw::sdc_support_sca_central,
        _ => return Err(Error::InvalidArg),
    };
    unsafe { support() }.check()?;
    Ok(())
}

/// Per-link ACL buffer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BufferConfig {
    pub tx_packet_size: u16,
    pub rx_packet_size: u16,
    pub tx_packet_count: u8,
    pub rx_packet_count: u8,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            tx_packet_size: raw::SDC_DEFAULT_TX_PACKET_SIZE as u16,
            rx_packet_size: raw::SDC_DEFAULT_RX_PACKET_SIZE as u16,
            tx_packet_count: raw::SDC_DEFAULT_TX_PACKET_COUNT as u8,
            rx_packet_count: raw::SDC_DEFAULT_RX_PACKET_COUNT as u8,
        }
    }
}

impl BufferConfig {
    pub fn validate(&self) -> Result<(), Error> {
        let sizes = raw::SDC_DEFAULT_TX_PACKET_SIZE as u16..=raw::SDC_MAX_PACKET_SIZE as u16;
        if !sizes.contains(&self.tx_packet_size) || !sizes.contains(&self.rx_packet_size) {
            return Err(Error::InvalidArg);
        }
        if self.tx_packet_count == 0 || self.rx_packet_count == 0 {
            return Err(Error::InvalidArg);
        }
        Ok(())
    }
}

impl From<&BufferConfig> for raw::sdc_cfg_buffer_cfg_t {
    fn from(cfg: &BufferConfig) -> Self {
        raw::sdc_cfg_buffer_cfg_t {
            tx_packet_size: cfg.tx_packet_size,
            rx_packet_size: cfg.rx_packet_size,
            tx_packet_count: cfg.tx_packet_count,
            rx_packet_count: cfg.rx_packet_count,
        }
    }
}

/// Controller resource configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub features: Features,
    pub adv_count: u8,
    pub peripheral_count: u8,
    pub central_count: u8,
    pub periodic_adv_count: u8,
    pub periodic_sync_count: u8,
    pub buffer: BufferConfig,
    /// Maximum connection event length
    pub event_length_us: u32,
    /// Advertising report buffers, at least 2
    pub scan_buffer_count: u8,
    pub max_adv_data: u16,
    /// Report buffers per periodic sync. Ignored without periodic sync.
    pub periodic_sync_buffer_count: u8,
    /// Filter accept list size
    pub fal_size: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            features: Features::default(),
            adv_count: raw::SDC_DEFAULT_ADV_COUNT as u8,
            peripheral_count: raw::SDC_DEFAULT_PERIPHERAL_COUNT as u8,
            central_count: raw::SDC_DEFAULT_CENTRAL_COUNT as u8,
            periodic_adv_count: raw::SDC_DEFAULT_PERIODIC_ADV_COUNT as u8,
            periodic_sync_count: raw::SDC_DEFAULT_PERIODIC_SYNC_COUNT as u8,
            buffer: BufferConfig::default(),
            event_length_us: raw::SDC_DEFAULT_EVENT_LENGTH_US,
            scan_buffer_count: raw::SDC_DEFAULT_SCAN_BUFFER_COUNT as u8,
            max_adv_data: raw::SDC_DEFAULT_ADV_BUF_SIZE as u16,
            periodic_sync_buffer_count: raw::SDC_DEFAULT_PERIODIC_SYNC_BUFFER_COUNT as u8,
            fal_size: raw::SDC_DEFAULT_FAL_SIZE as u8,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        let roles = [
            (self.adv_count, Features::ADV | Features::EXT_ADV),
            (self.peripheral_count, Features::PERIPHERAL),
            (self.central_count, Features::CENTRAL | Features::EXT_CENTRAL),
            (self.periodic_adv_count, Features::LE_PERIODIC_ADV),
            (self.periodic_sync_count, Features::LE_PERIODIC_SYNC),
        ];
        for (count, required) in roles {
            if count > 0 && !self.features.intersects(required) {
                return Err(Error::InvalidArg);
            }
        }

        self.buffer.validate()?;
        if self.scan_buffer_count < 2 {
            return Err(Error::InvalidArg);
        }
        if self.periodic_sync_count > 0 && self.periodic_sync_buffer_count == 0 {
            return Err(Error::InvalidArg);
        }
        Ok(())
    }

    /// `sdc_cfg_set` arguments for this configuration, in configuration type order
    pub fn entries(&self) -> impl Iterator<Item = (u8, raw::sdc_cfg_t)> {
        let role = |count| raw::sdc_cfg_role_count_t { count };
        let periodic_sync_buffer = (self.periodic_sync_count > 0).then_some(raw::sdc_cfg_t {
            periodic_sync_buffer_cfg: raw::sdc_cfg_periodic_sync_buffer_cfg_t {
                count: self.periodic_sync_buffer_count,
            },
        });

        let entries = [
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_CENTRAL_COUNT,
                Some(raw::sdc_cfg_t {
                    central_count: role(self.central_count),
                }),
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_PERIPHERAL_COUNT,
                Some(raw::sdc_cfg_t {
                    peripheral_count: role(self.peripheral_count),
                }),
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_BUFFER_CFG,
                Some(raw::sdc_cfg_t {
                    buffer_cfg: (&self.buffer).into(),
                }),
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_EVENT_LENGTH,
                Some(raw::sdc_cfg_t {
                    event_length: raw::sdc_cfg_event_length_t {
                        event_length_us: self.event_length_us,
                    },
                }),
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_ADV_COUNT,
                Some(raw::sdc_cfg_t {
                    adv_count: role(self.adv_count),
                }),
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_SCAN_BUFFER_CFG,
                Some(raw::sdc_cfg_t {
                    scan_buffer_cfg: raw::sdc_cfg_scan_buffer_cfg_t {
                        count: self.scan_buffer_count,
                    },
                }),
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_ADV_BUFFER_CFG,
                Some(raw::sdc_cfg_t {
                    adv_buffer_cfg: raw::sdc_cfg_adv_buffer_cfg_t {
                        max_adv_data: self.max_adv_data,
                    },
                }),
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_PERIODIC_ADV_COUNT,
                Some(raw::sdc_cfg_t {
                    periodic_adv_count: role(self.periodic_adv_count),
                }),
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_PERIODIC_SYNC_COUNT,
                Some(raw::sdc_cfg_t {
                    periodic_sync_count: role(self.periodic_sync_count),
                }),
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_PERIODIC_SYNC_BUFFER_CFG,
                periodic_sync_buffer,
            ),
            (
                raw::sdc_cfg_type_SDC_CFG_TYPE_FAL_SIZE,
                Some(raw::sdc_cfg_t { fal_size: self.fal_size }),
            ),
        ];

        entries
            .into_iter()
            .filter_map(|(cfg_type, cfg)| cfg.map(|cfg| (cfg_type as u8, cfg)))
    }
}

// Random source

static RNG: CriticalSectionMutex<RefCell<Option<ChaCha12Rng>>> = CriticalSectionMutex::new(RefCell::new(None));

fn seed_rng(seed: [u8; 32]) {
    RNG.lock(|rng| *rng.borrow_mut() = Some(ChaCha12Rng::from_seed(seed)));
}

/// Fills `buf` from the controller RNG. Returns false if it has not been seeded.
fn fill_random(buf: &mut [u8]) -> bool {
    RNG.lock(|rng| match rng.borrow_mut().as_mut() {
        Some(rng) => {
            rng.fill_bytes(buf);
            true
        }
        None => false,
    })
}

// The controller may ask for zero bytes, possibly with a null buffer.

unsafe extern "C" fn rng_poll(buf: *mut u8, len: u8) {
    if buf.is_null() || len == 0 {
        return;
    }
    let buf = core::slice::from_raw_parts_mut(buf, len as usize);
    if !fill_random(buf) {
        warn!("Controller RNG polled before seeding");
    }
}

unsafe extern "C" fn rng_get(buf: *mut u8, len: u8) -> u8 {
    if buf.is_null() || len == 0 {
        return 0;
    }
    let buf = core::slice::from_raw_parts_mut(buf, len as usize);
    if fill_random(buf) {
        len
    } else {
        0
    }
}

unsafe extern "C" fn fault_handler(file: *const c_char, line: u32) {
    panic!("SDC fault at {}:{}", crate::mpsl::file_name(file), line);
}

/// Initialize the controller. Should only be called once, after [`crate::mpsl::init`]!
///
/// `seed` seeds the ChaCha12 generator the controller draws its randomness from. It should
/// come from a hardware RNG. Returns the number of bytes [`enable`] needs.
pub fn init(config: &Config, seed: [u8; 32]) -> Result<usize, Error> {
    config.validate()?;
    seed_rng(seed);

    unsafe { raw::sdc_init(Some(fault_handler)) }.check()?;

    let rand_source = raw::sdc_rand_source_t {
        rand_prio_low_get: Some(rng_get),
        rand_prio_high_get: Some(rng_get),
        rand_poll: Some(rng_poll),
    };
    unsafe { raw::sdc_rand_source_register(&rand_source) }.check()?;

    for feature in config.features.iter() {
        enable_feature(feature)?;
    }

    for (cfg_type, cfg) in config.entries() {
        unsafe { raw::sdc_cfg_set(CFG_TAG, cfg_type, &cfg) }.check()?;
    }

    let required = required_memory()?;
    info!(
        "SDC initialized ({:?}, {} bytes required)",
        config.features, required
    );
    Ok(required)
}

/// Memory the current configuration needs
pub fn required_memory() -> Result<usize, Error> {
    let required = unsafe {
        raw::sdc_cfg_set(
            CFG_TAG,
            raw::sdc_cfg_type_SDC_CFG_TYPE_NONE as u8,
            core::ptr::null(),
        )
    }
    .check()?;
    Ok(required as usize)
}

fn check_memory(mem: &[u8], required: usize) -> Result<(), Error> {
    if mem.len() < required {
        return Err(Error::BufferTooSmall);
    }
    if mem.as_ptr() as usize % MEM_ALIGN != 0 {
        return Err(Error::InvalidArg);
    }
    Ok(())
}

/// Start the controller. `mem` must be 8-byte aligned and at least [`required_memory`] long;
/// the controller owns it from here on.
pub fn enable(mem: &'static mut [u8]) -> Result<(), Error> {
    check_memory(mem, required_memory()?)?;
    unsafe { raw::sdc_enable(Some(transport::on_controller_data), mem.as_mut_ptr()) }.check()?;
    info!("SDC enabled ({} bytes)", mem.len());
    Ok(())
}

/// Stop the controller. It must be initialized and configured again before the next [`enable`].
pub fn disable() -> Result<(), Error> {
    unsafe { raw::sdc_disable() }.check()?;
    debug!("SDC disabled");
    Ok(())
}

/// Controller library build revision
pub fn build_revision() -> Result<[u8; raw::SDC_BUILD_REVISION_SIZE as usize], Error> {
    let mut revision = [0u8; raw::SDC_BUILD_REVISION_SIZE as usize];
    unsafe { raw::sdc_build_revision_get(revision.as_mut_ptr()) }.check()?;
    Ok(revision)
}

/// TX power for new advertisers, scanners and connections. The controller picks the closest
/// supported level not above `dbm`.
pub fn set_default_tx_power(dbm: i8) -> Result<(), Error> {
    unsafe { raw::sdc_default_tx_power_set(dbm) }.check()?;
    Ok(())
}

/// SoC peripherals shared with the controller
pub mod soc {
    use crate::error::{Error, RetVal};
    use crate::raw;

    /// AES-128 encryption of one block on the ECB peripheral
    pub fn ecb_encrypt(key: &[u8; 16], cleartext: &[u8; 16]) -> Result<[u8; 16], Error> {
        let mut ciphertext = [0u8; 16];
        unsafe { raw::sdc_soc_ecb_block_encrypt(key.as_ptr(), cleartext.as_ptr(), ciphertext.as_mut_ptr()) }
            .check()?;
        Ok(ciphertext)
    }

    /// Fills `buf` from the controller's random pool. Fails with [`Error::Again`] if the pool
    /// holds fewer bytes than requested.
    pub fn random_vector(buf: &mut [u8]) -> Result<(), Error> {
        let len = u16::try_from(buf.len()).map_err(|_| Error::InvalidArg)?;
        unsafe { raw::sdc_soc_rand_vector_get(buf.as_mut_ptr(), len) }.check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.features, Features::ADV | Features::PERIPHERAL | Features::SCAN | Features::CENTRAL);
        assert_eq!(config.adv_count, 1);
        assert_eq!(config.periodic_sync_count, 0);
        assert_eq!(config.buffer.tx_packet_size, 27);
        assert_eq!(config.buffer.tx_packet_count, 3);
        assert_eq!(config.buffer.rx_packet_count, 2);
        assert_eq!(config.event_length_us, 7500);
        assert_eq!(config.scan_buffer_count, 3);
        assert_eq!(config.max_adv_data, 31);
        assert_eq!(config.fal_size, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_role_requires_feature() {
        let config = Config {
            features: Features::ADV | Features::SCAN,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidArg));

        // Extended central covers the central role
        let config = Config {
            features: Features::EXT_ADV | Features::PERIPHERAL | Features::EXT_CENTRAL,
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let config = Config {
            periodic_adv_count: 1,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidArg));

        let config = Config {
            features: Features::PERIPHERAL,
            adv_count: 0,
            central_count: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_buffer_validation() {
        assert!(BufferConfig::default().validate().is_ok());

        let max = BufferConfig {
            tx_packet_size: 251,
            rx_packet_size: 251,
            ..BufferConfig::default()
        };
        assert!(max.validate().is_ok());

        let too_big = BufferConfig {
            rx_packet_size: 252,
            ..BufferConfig::default()
        };
        assert_eq!(too_big.validate(), Err(Error::InvalidArg));

        let too_small = BufferConfig {
            tx_packet_size: 26,
            ..BufferConfig::default()
        };
        assert_eq!(too_small.validate(), Err(Error::InvalidArg));

        let no_buffers = BufferConfig {
            tx_packet_count: 0,
            ..BufferConfig::default()
        };
        assert_eq!(no_buffers.validate(), Err(Error::InvalidArg));

        let config = Config {
            scan_buffer_count: 1,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidArg));
    }

    #[test]
    fn test_entries() {
        let config = Config {
            central_count: 2,
            fal_size: 4,
            ..Config::default()
        };
        let mut entries = [(0u8, raw::sdc_cfg_t { fal_size: 0 }); 11];
        let mut n = 0;
        for entry in config.entries() {
            entries[n] = entry;
            n += 1;
        }

        // No periodic sync, so no periodic sync buffers
        assert_eq!(n, 10);
        let types: Vec<u8> = entries[..n].iter().map(|(t, _)| *t).collect();
        assert_eq!(types, [1, 2, 3, 4, 5, 6, 7, 8, 9, 11]);

        assert_eq!(unsafe { entries[0].1.central_count.count }, 2);
        let buffer = unsafe { entries[2].1.buffer_cfg };
        assert_eq!(buffer.tx_packet_size, 27);
        assert_eq!(buffer.rx_packet_count, 2);
        assert_eq!(unsafe { entries[3].1.event_length.event_length_us }, 7500);
        assert_eq!(unsafe { entries[6].1.adv_buffer_cfg.max_adv_data }, 31);
        assert_eq!(unsafe { entries[9].1.fal_size }, 4);
    }

    #[test]
    fn test_entries_with_periodic_sync() {
        let config = Config {
            features: Features::default() | Features::LE_PERIODIC_SYNC,
            periodic_sync_count: 1,
            periodic_sync_buffer_count: 4,
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let entries: Vec<(u8, raw::sdc_cfg_t)> = config.entries().collect();
        assert_eq!(entries.len(), 11);
        assert_eq!(entries[9].0, 10);
        assert_eq!(unsafe { entries[9].1.periodic_sync_buffer_cfg.count }, 4);
    }

    #[test]
    fn test_seeded_rng() {
        seed_rng([7; 32]);
        let mut a = [0u8; 16];
        assert!(fill_random(&mut a));

        seed_rng([7; 32]);
        let mut b = [0u8; 16];
        let len = unsafe { rng_get(b.as_mut_ptr(), b.len() as u8) };
        assert_eq!(len, 16);
        assert_eq!(a, b);
        assert_ne!(a, [0; 16]);
    }

    #[test]
    fn test_empty_rng_requests() {
        unsafe {
            rng_poll(core::ptr::null_mut(), 0);
            rng_poll(core::ptr::null_mut(), 8);
            assert_eq!(rng_get(core::ptr::null_mut(), 0), 0);
            assert_eq!(rng_get(core::ptr::null_mut(), 8), 0);

            let mut buf = [0xAAu8; 4];
            assert_eq!(rng_get(buf.as_mut_ptr(), 0), 0);
            assert_eq!(buf, [0xAA; 4]);
        }
    }

    #[test]
    fn test_memory_check() {
        #[repr(align(8))]
        struct Aligned([u8; 64]);
        let mem = Aligned([0; 64]);

        assert!(check_memory(&mem.0, 64).is_ok());
        assert_eq!(check_memory(&mem.0, 65), Err(Error::BufferTooSmall));
        assert_eq!(check_memory(&mem.0[1..], 32), Err(Error::InvalidArg));
    }

    #[test]
    fn test_features_bits() {
        assert_eq!(Features::all().iter().count(), 18);
        assert_eq!(Features::default().bits(), 0b1_1101);
    }
}
