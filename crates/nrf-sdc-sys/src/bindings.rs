// Declarations for the headers aggregated by `wrapper.h`.
// Regenerate with `cargo run -p nrf-sdc-gen -- --nrfxlib <path to sdk-nrfxlib>`.

// ---------------------------------------------------------------------------------------------
// nrf_errno.h
// ---------------------------------------------------------------------------------------------

pub const NRF_EPERM: u32 = 1;
pub const NRF_ENOENT: u32 = 2;
pub const NRF_ESRCH: u32 = 3;
pub const NRF_EINTR: u32 = 4;
pub const NRF_EIO: u32 = 5;
pub const NRF_ENXIO: u32 = 6;
pub const NRF_E2BIG: u32 = 7;
pub const NRF_ENOEXEC: u32 = 8;
pub const NRF_EBADF: u32 = 9;
pub const NRF_ECHILD: u32 = 10;
pub const NRF_EDEADLK: u32 = 11;
pub const NRF_ENOMEM: u32 = 12;
pub const NRF_EACCES: u32 = 13;
pub const NRF_EFAULT: u32 = 14;
pub const NRF_EBUSY: u32 = 16;
pub const NRF_EEXIST: u32 = 17;
pub const NRF_EXDEV: u32 = 18;
pub const NRF_ENODEV: u32 = 19;
pub const NRF_ENOTDIR: u32 = 20;
pub const NRF_EISDIR: u32 = 21;
pub const NRF_EINVAL: u32 = 22;
pub const NRF_ENFILE: u32 = 23;
pub const NRF_EMFILE: u32 = 24;
pub const NRF_ENOTTY: u32 = 25;
pub const NRF_ETXTBSY: u32 = 26;
pub const NRF_EFBIG: u32 = 27;
pub const NRF_ENOSPC: u32 = 28;
pub const NRF_ESPIPE: u32 = 29;
pub const NRF_EROFS: u32 = 30;
pub const NRF_EMLINK: u32 = 31;
pub const NRF_EPIPE: u32 = 32;
pub const NRF_EDOM: u32 = 33;
pub const NRF_ERANGE: u32 = 34;
pub const NRF_EAGAIN: u32 = 35;
pub const NRF_EINPROGRESS: u32 = 36;
pub const NRF_EALREADY: u32 = 37;
pub const NRF_ENOTSOCK: u32 = 38;
pub const NRF_EDESTADDRREQ: u32 = 39;
pub const NRF_EMSGSIZE: u32 = 40;
pub const NRF_EPROTOTYPE: u32 = 41;
pub const NRF_ENOPROTOOPT: u32 = 42;
pub const NRF_EPROTONOSUPPORT: u32 = 43;
pub const NRF_ESOCKTNOSUPPORT: u32 = 44;
pub const NRF_EOPNOTSUPP: u32 = 45;
pub const NRF_EPFNOSUPPORT: u32 = 46;
pub const NRF_EAFNOSUPPORT: u32 = 47;
pub const NRF_EADDRINUSE: u32 = 48;
pub const NRF_EADDRNOTAVAIL: u32 = 49;
pub const NRF_ENETDOWN: u32 = 50;
pub const NRF_ENETUNREACH: u32 = 51;
pub const NRF_ENETRESET: u32 = 52;
pub const NRF_ECONNABORTED: u32 = 53;
pub const NRF_ECONNRESET: u32 = 54;
pub const NRF_ENOBUFS: u32 = 55;
pub const NRF_EISCONN: u32 = 56;
pub const NRF_ENOTCONN: u32 = 57;
pub const NRF_ESHUTDOWN: u32 = 58;
pub const NRF_ETIMEDOUT: u32 = 60;
pub const NRF_ECONNREFUSED: u32 = 61;
pub const NRF_ELOOP: u32 = 62;
pub const NRF_ENAMETOOLONG: u32 = 63;
pub const NRF_EHOSTDOWN: u32 = 64;
pub const NRF_EHOSTUNREACH: u32 = 65;
pub const NRF_ENOTEMPTY: u32 = 66;
pub const NRF_ENOSYS: u32 = 78;
pub const NRF_ECANCELED: u32 = 85;

// ---------------------------------------------------------------------------------------------
// sdc.h
// ---------------------------------------------------------------------------------------------

pub const SDC_DEFAULT_RESOURCE_CFG_TAG: u32 = 0;
pub const SDC_BUILD_REVISION_SIZE: u32 = 20;
pub const SDC_DEFAULT_ADV_COUNT: u32 = 1;
pub const SDC_DEFAULT_PERIPHERAL_COUNT: u32 = 1;
pub const SDC_DEFAULT_CENTRAL_COUNT: u32 = 1;
pub const SDC_DEFAULT_PERIODIC_ADV_COUNT: u32 = 0;
pub const SDC_DEFAULT_PERIODIC_SYNC_COUNT: u32 = 0;
pub const SDC_DEFAULT_TX_PACKET_SIZE: u32 = 27;
pub const SDC_DEFAULT_RX_PACKET_SIZE: u32 = 27;
pub const SDC_DEFAULT_TX_PACKET_COUNT: u32 = 3;
pub const SDC_DEFAULT_RX_PACKET_COUNT: u32 = 2;
pub const SDC_DEFAULT_EVENT_LENGTH_US: u32 = 7500;
pub const SDC_DEFAULT_SCAN_BUFFER_COUNT: u32 = 3;
pub const SDC_DEFAULT_ADV_BUF_SIZE: u32 = 31;
pub const SDC_DEFAULT_PERIODIC_SYNC_BUFFER_COUNT: u32 = 2;
pub const SDC_DEFAULT_FAL_SIZE: u32 = 8;
pub const SDC_MAX_PACKET_SIZE: u32 = 251;

#[doc = " Function prototype for the fault handler.\n\n NB:  The SoftDevice Controller will disable all interrupts prior to calling the\n       fault handler. The SoftDevice Controller will reset the chip if the\n       application returns from this function."]
pub type sdc_fault_handler_t =
    ::core::option::Option<unsafe extern "C" fn(file: *const ::core::ffi::c_char, line: u32)>;
#[doc = " Function prototype for the SoftDevice Controller callback.\n\n The callback is invoked when there is data available for the host to fetch."]
pub type sdc_callback_t = ::core::option::Option<unsafe extern "C" fn()>;
pub type sdc_rand_prio_low_get_t =
    ::core::option::Option<unsafe extern "C" fn(p_buff: *mut u8, length: u8) -> u8>;
pub type sdc_rand_prio_high_get_t =
    ::core::option::Option<unsafe extern "C" fn(p_buff: *mut u8, length: u8) -> u8>;
pub type sdc_rand_poll_t = ::core::option::Option<unsafe extern "C" fn(p_buff: *mut u8, length: u8)>;

#[doc = " Random number source used by the controller."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_rand_source_t {
    pub rand_prio_low_get: sdc_rand_prio_low_get_t,
    pub rand_prio_high_get: sdc_rand_prio_high_get_t,
    pub rand_poll: sdc_rand_poll_t,
}

pub type sdc_cfg_type = ::core::ffi::c_uint;
pub const sdc_cfg_type_SDC_CFG_TYPE_NONE: sdc_cfg_type = 0;
pub const sdc_cfg_type_SDC_CFG_TYPE_CENTRAL_COUNT: sdc_cfg_type = 1;
pub const sdc_cfg_type_SDC_CFG_TYPE_PERIPHERAL_COUNT: sdc_cfg_type = 2;
pub const sdc_cfg_type_SDC_CFG_TYPE_BUFFER_CFG: sdc_cfg_type = 3;
pub const sdc_cfg_type_SDC_CFG_TYPE_EVENT_LENGTH: sdc_cfg_type = 4;
pub const sdc_cfg_type_SDC_CFG_TYPE_ADV_COUNT: sdc_cfg_type = 5;
pub const sdc_cfg_type_SDC_CFG_TYPE_SCAN_BUFFER_CFG: sdc_cfg_type = 6;
pub const sdc_cfg_type_SDC_CFG_TYPE_ADV_BUFFER_CFG: sdc_cfg_type = 7;
pub const sdc_cfg_type_SDC_CFG_TYPE_PERIODIC_ADV_COUNT: sdc_cfg_type = 8;
pub const sdc_cfg_type_SDC_CFG_TYPE_PERIODIC_SYNC_COUNT: sdc_cfg_type = 9;
pub const sdc_cfg_type_SDC_CFG_TYPE_PERIODIC_SYNC_BUFFER_CFG: sdc_cfg_type = 10;
pub const sdc_cfg_type_SDC_CFG_TYPE_FAL_SIZE: sdc_cfg_type = 11;

#[doc = " Role count."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_cfg_role_count_t {
    #[doc = " Max number of concurrent roles."]
    pub count: u8,
}

#[doc = " Buffer configuration."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_cfg_buffer_cfg_t {
    #[doc = " Maximum TX packet size. Valid range: 27-251."]
    pub tx_packet_size: u16,
    #[doc = " Maximum RX packet size. Valid range: 27-251."]
    pub rx_packet_size: u16,
    #[doc = " Number of TX packet buffers per link. Minimum: 1."]
    pub tx_packet_count: u8,
    #[doc = " Number of RX packet buffers per link. Minimum: 1."]
    pub rx_packet_count: u8,
}

#[doc = " Event length configuration."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_cfg_event_length_t {
    #[doc = " Maximum connection event length in microseconds."]
    pub event_length_us: u32,
}

#[doc = " Scan buffer configuration."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_cfg_scan_buffer_cfg_t {
    #[doc = " Number of buffers available for advertising reports. Minimum: 2."]
    pub count: u8,
}

#[doc = " Advertising buffer configuration."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_cfg_adv_buffer_cfg_t {
    #[doc = " Maximum advertising data length."]
    pub max_adv_data: u16,
}

#[doc = " Periodic sync buffer configuration."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_cfg_periodic_sync_buffer_cfg_t {
    pub count: u8,
}

#[doc = " Configuration passed to `sdc_cfg_set`."]
#[repr(C)]
#[derive(Copy, Clone)]
pub union sdc_cfg_t {
    pub central_count: sdc_cfg_role_count_t,
    pub peripheral_count: sdc_cfg_role_count_t,
    pub buffer_cfg: sdc_cfg_buffer_cfg_t,
    pub event_length: sdc_cfg_event_length_t,
    pub adv_count: sdc_cfg_role_count_t,
    pub scan_buffer_cfg: sdc_cfg_scan_buffer_cfg_t,
    pub adv_buffer_cfg: sdc_cfg_adv_buffer_cfg_t,
    pub periodic_adv_count: sdc_cfg_role_count_t,
    pub periodic_sync_count: sdc_cfg_role_count_t,
    pub periodic_sync_buffer_cfg: sdc_cfg_periodic_sync_buffer_cfg_t,
    pub fal_size: u8,
}

extern "C" {
    #[doc = " Initialize the SoftDevice Controller.\n\n * `fault_handler` - The fault handler.\n\n Returns  0 on success, -NRF_EINVAL if the fault handler is NULL."]
    pub fn sdc_init(fault_handler: sdc_fault_handler_t) -> i32;

    #[doc = " Change or add a SoftDevice Controller configuration.\n\n Returns the required memory size in bytes on success, a negative errno otherwise.\n Passing `SDC_CFG_TYPE_NONE` only queries the memory requirement."]
    pub fn sdc_cfg_set(config_tag: u8, config_type: u8, p_resource_cfg: *const sdc_cfg_t) -> i32;

    #[doc = " Enable the SoftDevice Controller.\n\n * `callback` - Invoked when data is available for the host.\n * `p_mem` - Memory for the controller, at least the size returned by `sdc_cfg_set`."]
    pub fn sdc_enable(callback: sdc_callback_t, p_mem: *mut u8) -> i32;

    #[doc = " Disable the SoftDevice Controller."]
    pub fn sdc_disable() -> i32;

    #[doc = " Obtain the build revision. `p_build_revision` must hold `SDC_BUILD_REVISION_SIZE` bytes."]
    pub fn sdc_build_revision_get(p_build_revision: *mut u8) -> i32;

    #[doc = " Register a random number source. Must be called before `sdc_enable`."]
    pub fn sdc_rand_source_register(p_rand_source: *const sdc_rand_source_t) -> i32;

    pub fn sdc_support_adv() -> i32;
    pub fn sdc_support_ext_adv() -> i32;
    pub fn sdc_support_peripheral() -> i32;
    pub fn sdc_support_central() -> i32;
    pub fn sdc_support_scan() -> i32;
    pub fn sdc_support_ext_scan() -> i32;
    pub fn sdc_support_ext_central() -> i32;
    pub fn sdc_support_dle_peripheral() -> i32;
    pub fn sdc_support_dle_central() -> i32;
    pub fn sdc_support_le_2m_phy() -> i32;
    pub fn sdc_support_le_coded_phy() -> i32;
    pub fn sdc_support_phy_update_peripheral() -> i32;
    pub fn sdc_support_phy_update_central() -> i32;
    pub fn sdc_support_le_periodic_adv() -> i32;
    pub fn sdc_support_le_periodic_sync() -> i32;
    pub fn sdc_support_le_power_control() -> i32;
    pub fn sdc_support_sca_peripheral() -> i32;
    pub fn sdc_support_sca_central() -> i32;

    #[doc = " Set the default TX power in dBm. Applies to roles created afterwards."]
    pub fn sdc_default_tx_power_set(requested_power_level: i8) -> i32;
}

// ---------------------------------------------------------------------------------------------
// sdc_hci.h
// ---------------------------------------------------------------------------------------------

pub const HCI_CMD_HEADER_SIZE: u32 = 3;
pub const HCI_DATA_HEADER_SIZE: u32 = 4;
pub const HCI_EVENT_HEADER_SIZE: u32 = 2;
pub const HCI_CMD_PARAMETER_MAX_SIZE: u32 = 255;
pub const HCI_EVENT_PARAMETER_MAX_SIZE: u32 = 255;
pub const HCI_CMD_PACKET_MAX_SIZE: u32 = 258;
pub const HCI_EVENT_PACKET_MAX_SIZE: u32 = 257;
pub const HCI_DATA_PACKET_MAX_SIZE: u32 = 255;
pub const HCI_MSG_BUFFER_MAX_SIZE: u32 = 258;

pub type sdc_hci_msg_type_t = ::core::ffi::c_uint;
pub const sdc_hci_msg_type_t_SDC_HCI_MSG_TYPE_NONE: sdc_hci_msg_type_t = 0;
pub const sdc_hci_msg_type_t_SDC_HCI_MSG_TYPE_EVT: sdc_hci_msg_type_t = 1;
pub const sdc_hci_msg_type_t_SDC_HCI_MSG_TYPE_DATA: sdc_hci_msg_type_t = 2;
pub const sdc_hci_msg_type_t_SDC_HCI_MSG_TYPE_ISO: sdc_hci_msg_type_t = 4;

extern "C" {
    #[doc = " Send an HCI command packet to the controller.\n\n The packet starts with the opcode; there is no packet indicator."]
    pub fn sdc_hci_cmd_put(p_cmd_in: *const u8) -> i32;

    #[doc = " Send an HCI ACL data packet to the controller."]
    pub fn sdc_hci_data_put(p_data_in: *const u8) -> i32;

    #[doc = " Send an HCI ISO data packet to the controller."]
    pub fn sdc_hci_iso_data_put(p_data_in: *const u8) -> i32;

    #[doc = " Retrieve an HCI packet from the controller.\n\n Returns -NRF_EAGAIN when nothing is pending."]
    pub fn sdc_hci_get(p_packet_out: *mut u8, p_msg_type_out: *mut sdc_hci_msg_type_t) -> i32;
}

// ---------------------------------------------------------------------------------------------
// sdc_hci_cmd_controller_baseband.h
// ---------------------------------------------------------------------------------------------

pub type sdc_hci_opcode_cb = ::core::ffi::c_uint;
pub const sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_SET_EVENT_MASK: sdc_hci_opcode_cb = 0x0c01;
pub const sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_RESET: sdc_hci_opcode_cb = 0x0c03;
pub const sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_READ_TRANSMIT_POWER_LEVEL: sdc_hci_opcode_cb = 0x0c2d;
pub const sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_SET_CONTROLLER_TO_HOST_FLOW_CONTROL: sdc_hci_opcode_cb = 0x0c31;
pub const sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_HOST_BUFFER_SIZE: sdc_hci_opcode_cb = 0x0c33;
pub const sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_HOST_NUMBER_OF_COMPLETED_PACKETS: sdc_hci_opcode_cb = 0x0c35;
pub const sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_SET_EVENT_MASK_PAGE_2: sdc_hci_opcode_cb = 0x0c63;
pub const sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_READ_AUTHENTICATED_PAYLOAD_TIMEOUT: sdc_hci_opcode_cb = 0x0c7b;
pub const sdc_hci_opcode_cb_SDC_HCI_OPCODE_CMD_CB_WRITE_AUTHENTICATED_PAYLOAD_TIMEOUT: sdc_hci_opcode_cb = 0x0c7c;

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_set_event_mask_t {
    pub event_mask: [u8; 8usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_read_transmit_power_level_t {
    pub conn_handle: u16,
    pub type_: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_read_transmit_power_level_return_t {
    pub conn_handle: u16,
    pub tx_power_level: i8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_set_controller_to_host_flow_control_t {
    pub flow_control_enable: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_host_buffer_size_t {
    pub host_acl_data_packet_length: u16,
    pub host_synchronous_data_packet_length: u8,
    pub host_total_num_acl_data_packets: u16,
    pub host_total_num_synchronous_data_packets: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_set_event_mask_page_2_t {
    pub event_mask_page_2: [u8; 8usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_read_authenticated_payload_timeout_t {
    pub conn_handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_read_authenticated_payload_timeout_return_t {
    pub conn_handle: u16,
    pub authenticated_payload_timeout: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_write_authenticated_payload_timeout_t {
    pub conn_handle: u16,
    pub authenticated_payload_timeout: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_cb_write_authenticated_payload_timeout_return_t {
    pub conn_handle: u16,
}

extern "C" {
    #[doc = " Set Event Mask. Returns an HCI status code."]
    pub fn sdc_hci_cmd_cb_set_event_mask(p_params: *const sdc_hci_cmd_cb_set_event_mask_t) -> u8;
    #[doc = " Reset. Returns an HCI status code."]
    pub fn sdc_hci_cmd_cb_reset() -> u8;
    pub fn sdc_hci_cmd_cb_read_transmit_power_level(
        p_params: *const sdc_hci_cmd_cb_read_transmit_power_level_t,
        p_return: *mut sdc_hci_cmd_cb_read_transmit_power_level_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_cb_set_controller_to_host_flow_control(
        p_params: *const sdc_hci_cmd_cb_set_controller_to_host_flow_control_t,
    ) -> u8;
    pub fn sdc_hci_cmd_cb_host_buffer_size(p_params: *const sdc_hci_cmd_cb_host_buffer_size_t) -> u8;
    pub fn sdc_hci_cmd_cb_set_event_mask_page_2(p_params: *const sdc_hci_cmd_cb_set_event_mask_page_2_t) -> u8;
    pub fn sdc_hci_cmd_cb_read_authenticated_payload_timeout(
        p_params: *const sdc_hci_cmd_cb_read_authenticated_payload_timeout_t,
        p_return: *mut sdc_hci_cmd_cb_read_authenticated_payload_timeout_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_cb_write_authenticated_payload_timeout(
        p_params: *const sdc_hci_cmd_cb_write_authenticated_payload_timeout_t,
        p_return: *mut sdc_hci_cmd_cb_write_authenticated_payload_timeout_return_t,
    ) -> u8;
}

// ---------------------------------------------------------------------------------------------
// sdc_hci_cmd_info_params.h
// ---------------------------------------------------------------------------------------------

pub type sdc_hci_opcode_ip = ::core::ffi::c_uint;
pub const sdc_hci_opcode_ip_SDC_HCI_OPCODE_CMD_IP_READ_LOCAL_VERSION_INFORMATION: sdc_hci_opcode_ip = 0x1001;
pub const sdc_hci_opcode_ip_SDC_HCI_OPCODE_CMD_IP_READ_LOCAL_SUPPORTED_COMMANDS: sdc_hci_opcode_ip = 0x1002;
pub const sdc_hci_opcode_ip_SDC_HCI_OPCODE_CMD_IP_READ_LOCAL_SUPPORTED_FEATURES: sdc_hci_opcode_ip = 0x1003;
pub const sdc_hci_opcode_ip_SDC_HCI_OPCODE_CMD_IP_READ_BD_ADDR: sdc_hci_opcode_ip = 0x1009;

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_ip_read_local_version_information_return_t {
    pub hci_version: u8,
    pub hci_subversion: u16,
    pub lmp_version: u8,
    pub company_identifier: u16,
    pub lmp_subversion: u16,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone)]
pub struct sdc_hci_cmd_ip_read_local_supported_commands_return_t {
    pub supported_commands: [u8; 64usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_ip_read_local_supported_features_return_t {
    pub lmp_features: [u8; 8usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_ip_read_bd_addr_return_t {
    pub bd_addr: [u8; 6usize],
}

extern "C" {
    pub fn sdc_hci_cmd_ip_read_local_version_information(
        p_return: *mut sdc_hci_cmd_ip_read_local_version_information_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_ip_read_local_supported_commands(
        p_return: *mut sdc_hci_cmd_ip_read_local_supported_commands_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_ip_read_local_supported_features(
        p_return: *mut sdc_hci_cmd_ip_read_local_supported_features_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_ip_read_bd_addr(p_return: *mut sdc_hci_cmd_ip_read_bd_addr_return_t) -> u8;
}

// ---------------------------------------------------------------------------------------------
// sdc_hci_cmd_le.h
// ---------------------------------------------------------------------------------------------

pub type sdc_hci_opcode_le = ::core::ffi::c_uint;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_EVENT_MASK: sdc_hci_opcode_le = 0x2001;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_BUFFER_SIZE: sdc_hci_opcode_le = 0x2002;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_LOCAL_SUPPORTED_FEATURES: sdc_hci_opcode_le = 0x2003;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_RANDOM_ADDRESS: sdc_hci_opcode_le = 0x2005;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_ADV_PARAMS: sdc_hci_opcode_le = 0x2006;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_ADV_PHYSICAL_CHANNEL_TX_POWER: sdc_hci_opcode_le = 0x2007;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_ADV_DATA: sdc_hci_opcode_le = 0x2008;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_SCAN_RESPONSE_DATA: sdc_hci_opcode_le = 0x2009;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_ADV_ENABLE: sdc_hci_opcode_le = 0x200a;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_SCAN_PARAMS: sdc_hci_opcode_le = 0x200b;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_SCAN_ENABLE: sdc_hci_opcode_le = 0x200c;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_CREATE_CONN: sdc_hci_opcode_le = 0x200d;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_CREATE_CONN_CANCEL: sdc_hci_opcode_le = 0x200e;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_FILTER_ACCEPT_LIST_SIZE: sdc_hci_opcode_le = 0x200f;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_CLEAR_FILTER_ACCEPT_LIST: sdc_hci_opcode_le = 0x2010;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_ADD_DEVICE_TO_FILTER_ACCEPT_LIST: sdc_hci_opcode_le = 0x2011;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_REMOVE_DEVICE_FROM_FILTER_ACCEPT_LIST: sdc_hci_opcode_le = 0x2012;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_CONN_UPDATE: sdc_hci_opcode_le = 0x2013;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_HOST_CHANNEL_CLASSIFICATION: sdc_hci_opcode_le = 0x2014;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_CHANNEL_MAP: sdc_hci_opcode_le = 0x2015;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_REMOTE_FEATURES: sdc_hci_opcode_le = 0x2016;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_ENCRYPT: sdc_hci_opcode_le = 0x2017;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_RAND: sdc_hci_opcode_le = 0x2018;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_ENABLE_ENCRYPTION: sdc_hci_opcode_le = 0x2019;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_LONG_TERM_KEY_REQUEST_REPLY: sdc_hci_opcode_le = 0x201a;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_LONG_TERM_KEY_REQUEST_NEGATIVE_REPLY: sdc_hci_opcode_le = 0x201b;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_SUPPORTED_STATES: sdc_hci_opcode_le = 0x201c;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_DATA_LENGTH: sdc_hci_opcode_le = 0x2022;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_SUGGESTED_DEFAULT_DATA_LENGTH: sdc_hci_opcode_le = 0x2023;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_WRITE_SUGGESTED_DEFAULT_DATA_LENGTH: sdc_hci_opcode_le = 0x2024;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_MAX_DATA_LENGTH: sdc_hci_opcode_le = 0x202f;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_READ_PHY: sdc_hci_opcode_le = 0x2030;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_DEFAULT_PHY: sdc_hci_opcode_le = 0x2031;
pub const sdc_hci_opcode_le_SDC_HCI_OPCODE_CMD_LE_SET_PHY: sdc_hci_opcode_le = 0x2032;

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_event_mask_t {
    pub le_event_mask: [u8; 8usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_buffer_size_return_t {
    pub le_acl_data_packet_length: u16,
    pub total_num_le_acl_data_packets: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_local_supported_features_return_t {
    pub le_features: [u8; 8usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_random_address_t {
    pub random_address: [u8; 6usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_adv_params_t {
    pub adv_interval_min: u16,
    pub adv_interval_max: u16,
    pub adv_type: u8,
    pub own_address_type: u8,
    pub peer_address_type: u8,
    pub peer_address: [u8; 6usize],
    pub adv_channel_map: u8,
    pub adv_filter_policy: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_adv_physical_channel_tx_power_return_t {
    pub tx_power_level: i8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_adv_data_t {
    pub adv_data_length: u8,
    pub adv_data: [u8; 31usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_scan_response_data_t {
    pub scan_response_data_length: u8,
    pub scan_response_data: [u8; 31usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_adv_enable_t {
    pub adv_enable: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_scan_params_t {
    pub le_scan_type: u8,
    pub le_scan_interval: u16,
    pub le_scan_window: u16,
    pub own_address_type: u8,
    pub scanning_filter_policy: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_scan_enable_t {
    pub le_scan_enable: u8,
    pub filter_duplicates: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_create_conn_t {
    pub le_scan_interval: u16,
    pub le_scan_window: u16,
    pub initiator_filter_policy: u8,
    pub peer_address_type: u8,
    pub peer_address: [u8; 6usize],
    pub own_address_type: u8,
    pub conn_interval_min: u16,
    pub conn_interval_max: u16,
    pub max_latency: u16,
    pub supervision_timeout: u16,
    pub min_ce_length: u16,
    pub max_ce_length: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_filter_accept_list_size_return_t {
    pub filter_accept_list_size: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_add_device_to_filter_accept_list_t {
    pub address_type: u8,
    pub address: [u8; 6usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_remove_device_from_filter_accept_list_t {
    pub address_type: u8,
    pub address: [u8; 6usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_conn_update_t {
    pub conn_handle: u16,
    pub conn_interval_min: u16,
    pub conn_interval_max: u16,
    pub max_latency: u16,
    pub supervision_timeout: u16,
    pub min_ce_length: u16,
    pub max_ce_length: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_host_channel_classification_t {
    pub channel_map: [u8; 5usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_channel_map_t {
    pub conn_handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_channel_map_return_t {
    pub conn_handle: u16,
    pub channel_map: [u8; 5usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_remote_features_t {
    pub conn_handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_encrypt_t {
    pub key: [u8; 16usize],
    pub plaintext_data: [u8; 16usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_encrypt_return_t {
    pub encrypted_data: [u8; 16usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_rand_return_t {
    pub random_number: u64,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_enable_encryption_t {
    pub conn_handle: u16,
    pub random_number: [u8; 8usize],
    pub encrypted_diversifier: u16,
    pub long_term_key: [u8; 16usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_long_term_key_request_reply_t {
    pub conn_handle: u16,
    pub long_term_key: [u8; 16usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_long_term_key_request_reply_return_t {
    pub conn_handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_long_term_key_request_negative_reply_t {
    pub conn_handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_long_term_key_request_negative_reply_return_t {
    pub conn_handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_supported_states_return_t {
    pub le_states: [u8; 8usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_data_length_t {
    pub conn_handle: u16,
    pub tx_octets: u16,
    pub tx_time: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_data_length_return_t {
    pub conn_handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_suggested_default_data_length_return_t {
    pub suggested_max_tx_octets: u16,
    pub suggested_max_tx_time: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_write_suggested_default_data_length_t {
    pub suggested_max_tx_octets: u16,
    pub suggested_max_tx_time: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_max_data_length_return_t {
    pub supported_max_tx_octets: u16,
    pub supported_max_tx_time: u16,
    pub supported_max_rx_octets: u16,
    pub supported_max_rx_time: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_phy_t {
    pub conn_handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_read_phy_return_t {
    pub conn_handle: u16,
    pub tx_phy: u8,
    pub rx_phy: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_default_phy_t {
    pub all_phys: u8,
    pub tx_phys: u8,
    pub rx_phys: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_le_set_phy_t {
    pub conn_handle: u16,
    pub all_phys: u8,
    pub tx_phys: u8,
    pub rx_phys: u8,
    pub phy_options: u16,
}

extern "C" {
    pub fn sdc_hci_cmd_le_set_event_mask(p_params: *const sdc_hci_cmd_le_set_event_mask_t) -> u8;
    pub fn sdc_hci_cmd_le_read_buffer_size(p_return: *mut sdc_hci_cmd_le_read_buffer_size_return_t) -> u8;
    pub fn sdc_hci_cmd_le_read_local_supported_features(
        p_return: *mut sdc_hci_cmd_le_read_local_supported_features_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_set_random_address(p_params: *const sdc_hci_cmd_le_set_random_address_t) -> u8;
    pub fn sdc_hci_cmd_le_set_adv_params(p_params: *const sdc_hci_cmd_le_set_adv_params_t) -> u8;
    pub fn sdc_hci_cmd_le_read_adv_physical_channel_tx_power(
        p_return: *mut sdc_hci_cmd_le_read_adv_physical_channel_tx_power_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_set_adv_data(p_params: *const sdc_hci_cmd_le_set_adv_data_t) -> u8;
    pub fn sdc_hci_cmd_le_set_scan_response_data(p_params: *const sdc_hci_cmd_le_set_scan_response_data_t) -> u8;
    pub fn sdc_hci_cmd_le_set_adv_enable(p_params: *const sdc_hci_cmd_le_set_adv_enable_t) -> u8;
    pub fn sdc_hci_cmd_le_set_scan_params(p_params: *const sdc_hci_cmd_le_set_scan_params_t) -> u8;
    pub fn sdc_hci_cmd_le_set_scan_enable(p_params: *const sdc_hci_cmd_le_set_scan_enable_t) -> u8;
    pub fn sdc_hci_cmd_le_create_conn(p_params: *const sdc_hci_cmd_le_create_conn_t) -> u8;
    pub fn sdc_hci_cmd_le_create_conn_cancel() -> u8;
    pub fn sdc_hci_cmd_le_read_filter_accept_list_size(
        p_return: *mut sdc_hci_cmd_le_read_filter_accept_list_size_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_clear_filter_accept_list() -> u8;
    pub fn sdc_hci_cmd_le_add_device_to_filter_accept_list(
        p_params: *const sdc_hci_cmd_le_add_device_to_filter_accept_list_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_remove_device_from_filter_accept_list(
        p_params: *const sdc_hci_cmd_le_remove_device_from_filter_accept_list_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_conn_update(p_params: *const sdc_hci_cmd_le_conn_update_t) -> u8;
    pub fn sdc_hci_cmd_le_set_host_channel_classification(
        p_params: *const sdc_hci_cmd_le_set_host_channel_classification_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_read_channel_map(
        p_params: *const sdc_hci_cmd_le_read_channel_map_t,
        p_return: *mut sdc_hci_cmd_le_read_channel_map_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_read_remote_features(p_params: *const sdc_hci_cmd_le_read_remote_features_t) -> u8;
    pub fn sdc_hci_cmd_le_encrypt(
        p_params: *const sdc_hci_cmd_le_encrypt_t,
        p_return: *mut sdc_hci_cmd_le_encrypt_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_rand(p_return: *mut sdc_hci_cmd_le_rand_return_t) -> u8;
    pub fn sdc_hci_cmd_le_enable_encryption(p_params: *const sdc_hci_cmd_le_enable_encryption_t) -> u8;
    pub fn sdc_hci_cmd_le_long_term_key_request_reply(
        p_params: *const sdc_hci_cmd_le_long_term_key_request_reply_t,
        p_return: *mut sdc_hci_cmd_le_long_term_key_request_reply_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_long_term_key_request_negative_reply(
        p_params: *const sdc_hci_cmd_le_long_term_key_request_negative_reply_t,
        p_return: *mut sdc_hci_cmd_le_long_term_key_request_negative_reply_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_read_supported_states(p_return: *mut sdc_hci_cmd_le_read_supported_states_return_t) -> u8;
    pub fn sdc_hci_cmd_le_set_data_length(
        p_params: *const sdc_hci_cmd_le_set_data_length_t,
        p_return: *mut sdc_hci_cmd_le_set_data_length_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_read_suggested_default_data_length(
        p_return: *mut sdc_hci_cmd_le_read_suggested_default_data_length_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_write_suggested_default_data_length(
        p_params: *const sdc_hci_cmd_le_write_suggested_default_data_length_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_read_max_data_length(p_return: *mut sdc_hci_cmd_le_read_max_data_length_return_t) -> u8;
    pub fn sdc_hci_cmd_le_read_phy(
        p_params: *const sdc_hci_cmd_le_read_phy_t,
        p_return: *mut sdc_hci_cmd_le_read_phy_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_le_set_default_phy(p_params: *const sdc_hci_cmd_le_set_default_phy_t) -> u8;
    pub fn sdc_hci_cmd_le_set_phy(p_params: *const sdc_hci_cmd_le_set_phy_t) -> u8;
}

// ---------------------------------------------------------------------------------------------
// sdc_hci_cmd_link_control.h
// ---------------------------------------------------------------------------------------------

pub type sdc_hci_opcode_lc = ::core::ffi::c_uint;
pub const sdc_hci_opcode_lc_SDC_HCI_OPCODE_CMD_LC_DISCONNECT: sdc_hci_opcode_lc = 0x0406;
pub const sdc_hci_opcode_lc_SDC_HCI_OPCODE_CMD_LC_READ_REMOTE_VERSION_INFORMATION: sdc_hci_opcode_lc = 0x041d;

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_lc_disconnect_t {
    pub conn_handle: u16,
    pub reason: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_lc_read_remote_version_information_t {
    pub conn_handle: u16,
}

extern "C" {
    pub fn sdc_hci_cmd_lc_disconnect(p_params: *const sdc_hci_cmd_lc_disconnect_t) -> u8;
    pub fn sdc_hci_cmd_lc_read_remote_version_information(
        p_params: *const sdc_hci_cmd_lc_read_remote_version_information_t,
    ) -> u8;
}

// ---------------------------------------------------------------------------------------------
// sdc_hci_cmd_status_params.h
// ---------------------------------------------------------------------------------------------

pub type sdc_hci_opcode_sp = ::core::ffi::c_uint;
pub const sdc_hci_opcode_sp_SDC_HCI_OPCODE_CMD_SP_READ_RSSI: sdc_hci_opcode_sp = 0x1405;

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_sp_read_rssi_t {
    pub handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_sp_read_rssi_return_t {
    pub handle: u16,
    pub rssi: i8,
}

extern "C" {
    pub fn sdc_hci_cmd_sp_read_rssi(
        p_params: *const sdc_hci_cmd_sp_read_rssi_t,
        p_return: *mut sdc_hci_cmd_sp_read_rssi_return_t,
    ) -> u8;
}

// ---------------------------------------------------------------------------------------------
// sdc_hci_vs.h
// ---------------------------------------------------------------------------------------------

pub type sdc_hci_opcode_vs = ::core::ffi::c_uint;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_ZEPHYR_READ_VERSION_INFO: sdc_hci_opcode_vs = 0xfc01;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_ZEPHYR_READ_SUPPORTED_COMMANDS: sdc_hci_opcode_vs = 0xfc02;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_ZEPHYR_WRITE_BD_ADDR: sdc_hci_opcode_vs = 0xfc06;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_ZEPHYR_READ_STATIC_ADDRESSES: sdc_hci_opcode_vs = 0xfc09;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_ZEPHYR_READ_CHIP_TEMP: sdc_hci_opcode_vs = 0xfc0b;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_ZEPHYR_WRITE_TX_POWER: sdc_hci_opcode_vs = 0xfc0e;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_ZEPHYR_READ_TX_POWER: sdc_hci_opcode_vs = 0xfc0f;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_LLPM_MODE_SET: sdc_hci_opcode_vs = 0xfd01;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_CONN_UPDATE: sdc_hci_opcode_vs = 0xfd02;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_CONN_EVENT_EXTEND: sdc_hci_opcode_vs = 0xfd03;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_QOS_CONN_EVENT_REPORT_ENABLE: sdc_hci_opcode_vs = 0xfd04;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_EVENT_LENGTH_SET: sdc_hci_opcode_vs = 0xfd05;
pub const sdc_hci_opcode_vs_SDC_HCI_OPCODE_CMD_VS_PERIODIC_ADV_EVENT_LENGTH_SET: sdc_hci_opcode_vs = 0xfd06;

pub type sdc_hci_subevent_vs = ::core::ffi::c_uint;
pub const sdc_hci_subevent_vs_SDC_HCI_SUBEVENT_VS_QOS_CONN_EVENT_REPORT: sdc_hci_subevent_vs = 0x80;

pub type sdc_hci_vs_tx_power_handle_type = ::core::ffi::c_uint;
pub const sdc_hci_vs_tx_power_handle_type_SDC_HCI_VS_TX_POWER_HANDLE_TYPE_ADV: sdc_hci_vs_tx_power_handle_type = 0;
pub const sdc_hci_vs_tx_power_handle_type_SDC_HCI_VS_TX_POWER_HANDLE_TYPE_SCAN: sdc_hci_vs_tx_power_handle_type = 1;
pub const sdc_hci_vs_tx_power_handle_type_SDC_HCI_VS_TX_POWER_HANDLE_TYPE_CONN: sdc_hci_vs_tx_power_handle_type = 2;

#[doc = " QoS Connection Event Report. Generated after every connection event once enabled."]
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_subevent_vs_qos_conn_event_report_t {
    pub conn_handle: u16,
    pub event_counter: u16,
    pub channel_index: u8,
    pub tx_packet_count: u8,
    pub tx_ack_count: u8,
    pub tx_new_packet_count: u8,
    pub rx_packet_count: u8,
    pub rx_crc_error_count: u8,
    pub rx_rssi: i8,
    pub rx_new_packet_count: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_zephyr_read_version_info_return_t {
    pub hw_platform: u16,
    pub hw_variant: u16,
    pub fw_variant: u8,
    pub fw_version: u8,
    pub fw_revision: u16,
    pub fw_build: u32,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone)]
pub struct sdc_hci_cmd_vs_zephyr_read_supported_commands_return_t {
    pub supported_commands: [u8; 64usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_zephyr_write_bd_addr_t {
    pub bd_addr: [u8; 6usize],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_zephyr_read_chip_temp_return_t {
    pub temp: i8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_zephyr_write_tx_power_t {
    pub handle_type: u8,
    pub handle: u16,
    pub tx_power_level: i8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_zephyr_write_tx_power_return_t {
    pub handle_type: u8,
    pub handle: u16,
    pub selected_tx_power: i8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_zephyr_read_tx_power_t {
    pub handle_type: u8,
    pub handle: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_zephyr_read_tx_power_return_t {
    pub handle_type: u8,
    pub handle: u16,
    pub selected_tx_power: i8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_llpm_mode_set_t {
    pub enable: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_conn_update_t {
    pub conn_handle: u16,
    pub conn_interval_us: u32,
    pub conn_latency: u16,
    pub supervision_timeout: u16,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_conn_event_extend_t {
    pub enable: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_qos_conn_event_report_enable_t {
    pub enable: u8,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_event_length_set_t {
    pub event_length_us: u32,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct sdc_hci_cmd_vs_periodic_adv_event_length_set_t {
    pub event_length_us: u32,
}

extern "C" {
    pub fn sdc_hci_cmd_vs_zephyr_read_version_info(
        p_return: *mut sdc_hci_cmd_vs_zephyr_read_version_info_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_vs_zephyr_read_supported_commands(
        p_return: *mut sdc_hci_cmd_vs_zephyr_read_supported_commands_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_vs_zephyr_write_bd_addr(p_params: *const sdc_hci_cmd_vs_zephyr_write_bd_addr_t) -> u8;
    pub fn sdc_hci_cmd_vs_zephyr_read_chip_temp(p_return: *mut sdc_hci_cmd_vs_zephyr_read_chip_temp_return_t) -> u8;
    pub fn sdc_hci_cmd_vs_zephyr_write_tx_power(
        p_params: *const sdc_hci_cmd_vs_zephyr_write_tx_power_t,
        p_return: *mut sdc_hci_cmd_vs_zephyr_write_tx_power_return_t,
    ) -> u8;
    pub fn sdc_hci_cmd_vs_zephyr_read_tx_power(
        p_params: *const sdc_hci_cmd_vs_zephyr_read_tx_power_t,
        p_return: *mut sdc_hci_cmd_vs_zephyr_read_tx_power_return_t,
    ) -> u8;
    #[doc = " Enable or disable Low Latency Packet Mode (1 ms connection intervals)."]
    pub fn sdc_hci_cmd_vs_llpm_mode_set(p_params: *const sdc_hci_cmd_vs_llpm_mode_set_t) -> u8;
    #[doc = " Update a connection with an interval given in microseconds."]
    pub fn sdc_hci_cmd_vs_conn_update(p_params: *const sdc_hci_cmd_vs_conn_update_t) -> u8;
    pub fn sdc_hci_cmd_vs_conn_event_extend(p_params: *const sdc_hci_cmd_vs_conn_event_extend_t) -> u8;
    pub fn sdc_hci_cmd_vs_qos_conn_event_report_enable(
        p_params: *const sdc_hci_cmd_vs_qos_conn_event_report_enable_t,
    ) -> u8;
    pub fn sdc_hci_cmd_vs_event_length_set(p_params: *const sdc_hci_cmd_vs_event_length_set_t) -> u8;
    pub fn sdc_hci_cmd_vs_periodic_adv_event_length_set(
        p_params: *const sdc_hci_cmd_vs_periodic_adv_event_length_set_t,
    ) -> u8;
}

// ---------------------------------------------------------------------------------------------
// sdc_soc.h
// ---------------------------------------------------------------------------------------------

#[doc = " Flash operation completion callback. `success` is false if the operation timed out."]
pub type sdc_soc_flash_callback_t = ::core::option::Option<unsafe extern "C" fn(success: bool)>;

extern "C" {
    #[doc = " Write words to flash without blocking the radio schedule."]
    pub fn sdc_soc_flash_write_async(
        addr: u32,
        p_src: *const ::core::ffi::c_void,
        num_bytes: u32,
        on_complete: sdc_soc_flash_callback_t,
    ) -> i32;
    #[doc = " Erase a flash page without blocking the radio schedule."]
    pub fn sdc_soc_flash_page_erase_async(addr: u32, on_complete: sdc_soc_flash_callback_t) -> i32;
    #[doc = " Obtain random bytes from the controller's entropy pool."]
    pub fn sdc_soc_rand_vector_get(p_dst: *mut u8, length: u16) -> i32;
    #[doc = " Encrypt one 16-byte block with AES-128 ECB using the radio's ECB peripheral."]
    pub fn sdc_soc_ecb_block_encrypt(key: *const u8, cleartext: *const u8, ciphertext: *mut u8) -> i32;
}

// ---------------------------------------------------------------------------------------------
// mpsl.h
// ---------------------------------------------------------------------------------------------

pub const MPSL_HIGH_IRQ_PRIORITY: u32 = 0;
pub const MPSL_BUILD_REVISION_SIZE: u32 = 20;

pub type IRQn_Type = i16;

#[doc = " Function prototype for the assert handler."]
pub type mpsl_assert_handler_t =
    ::core::option::Option<unsafe extern "C" fn(file: *const ::core::ffi::c_char, line: u32)>;

extern "C" {
    #[doc = " MPSL initialization.\n\n * `p_clock_config` - Low frequency clock configuration. NULL selects the defaults.\n * `low_prio_irq` - IRQ to pend when low priority processing is required.\n * `p_assert_handler` - Called on an internal error; must not return.\n\n Returns 0 on success, -NRF_EPERM if already initialized, -NRF_EINVAL on invalid parameters."]
    pub fn mpsl_init(
        p_clock_config: *const mpsl_clock_lfclk_cfg_t,
        low_prio_irq: IRQn_Type,
        p_assert_handler: mpsl_assert_handler_t,
    ) -> i32;
    #[doc = " Uninitialize MPSL and stop the clocks."]
    pub fn mpsl_uninit();
    pub fn mpsl_is_initialized() -> bool;
    pub fn mpsl_build_revision_get(p_build_revision: *mut u8) -> i32;
    #[doc = " Process low priority work. Call after `low_prio_irq` has been pended."]
    pub fn mpsl_low_priority_process();
    pub fn MPSL_IRQ_RTC0_Handler();
    pub fn MPSL_IRQ_TIMER0_Handler();
    pub fn MPSL_IRQ_RADIO_Handler();
    pub fn MPSL_IRQ_CLOCK_Handler();
}

// ---------------------------------------------------------------------------------------------
// mpsl_clock.h
// ---------------------------------------------------------------------------------------------

pub const MPSL_RECOMMENDED_RC_CTIV: u32 = 16;
pub const MPSL_RECOMMENDED_RC_TEMP_CTIV: u32 = 2;
pub const MPSL_DEFAULT_CLOCK_ACCURACY_PPM: u32 = 250;
pub const MPSL_WORST_CLOCK_ACCURACY_PPM: u32 = 500;
pub const MPSL_DEFAULT_SKIP_WAIT_LFCLK_STARTED: u32 = 0;

pub type MPSL_CLOCK_LF_SRC = ::core::ffi::c_uint;
pub const MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_RC: MPSL_CLOCK_LF_SRC = 0;
pub const MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_XTAL: MPSL_CLOCK_LF_SRC = 1;
pub const MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_SYNTH: MPSL_CLOCK_LF_SRC = 2;
pub const MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_EXT_LOW_SWING: MPSL_CLOCK_LF_SRC = 3;
pub const MPSL_CLOCK_LF_SRC_MPSL_CLOCK_LF_SRC_EXT_FULL_SWING: MPSL_CLOCK_LF_SRC = 4;

#[doc = " Low frequency clock configuration."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct mpsl_clock_lfclk_cfg_t {
    #[doc = " LF clock source, one of `MPSL_CLOCK_LF_SRC`."]
    pub source: u8,
    #[doc = " Calibration timer interval in 1/4 second units (RC source only)."]
    pub rc_ctiv: u8,
    #[doc = " Calibrate every `rc_temp_ctiv` timer expiry if the temperature changed (RC source only)."]
    pub rc_temp_ctiv: u8,
    #[doc = " Clock accuracy in parts per million."]
    pub accuracy_ppm: u16,
    #[doc = " Return from `mpsl_init` before the LF clock has started."]
    pub skip_wait_lfclk_started: bool,
}

pub type mpsl_clock_hfclk_callback_t = ::core::option::Option<unsafe extern "C" fn()>;

extern "C" {
    #[doc = " Request the high frequency crystal oscillator. The callback fires once it is running."]
    pub fn mpsl_clock_hfclk_request(hfclk_started_callback: mpsl_clock_hfclk_callback_t) -> i32;
    #[doc = " Release a previous high frequency clock request."]
    pub fn mpsl_clock_hfclk_release() -> i32;
    #[doc = " Check whether the high frequency crystal oscillator is running."]
    pub fn mpsl_clock_hfclk_is_running(p_is_running: *mut u32) -> i32;
}

// ---------------------------------------------------------------------------------------------
// mpsl_coex.h
// ---------------------------------------------------------------------------------------------

pub type mpsl_coex_if_id_t = ::core::ffi::c_uint;
pub const mpsl_coex_if_id_t_MPSL_COEX_802152_3WIRE_GPIOTE_ID: mpsl_coex_if_id_t = 0;
pub const mpsl_coex_if_id_t_MPSL_COEX_1WIRE_GPIOTE_ID: mpsl_coex_if_id_t = 1;

#[doc = " GPIO line used by a coexistence interface."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct mpsl_coex_gpiote_cfg_t {
    pub gpio_pin: u32,
    pub active_high: bool,
}

#[doc = " IEEE 802.15.2 three-wire coexistence interface."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct mpsl_coex_802152_3wire_gpiote_if_t {
    pub request_cfg: mpsl_coex_gpiote_cfg_t,
    pub priority_cfg: mpsl_coex_gpiote_cfg_t,
    pub grant_cfg: mpsl_coex_gpiote_cfg_t,
    #[doc = " Time between asserting REQUEST and PRIORITY signalling the transaction type."]
    pub type_delay_us: u32,
    #[doc = " Time between asserting REQUEST and the radio starting."]
    pub radio_delay_us: u32,
    #[doc = " Level of PRIORITY while the radio is receiving."]
    pub is_rx_active_level: bool,
}

#[doc = " Single-wire coexistence interface."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct mpsl_coex_1wire_gpiote_if_t {
    pub bt_active_cfg: mpsl_coex_gpiote_cfg_t,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union mpsl_coex_if_t__bindgen_ty_1 {
    pub coex_3wire_gpiote: mpsl_coex_802152_3wire_gpiote_if_t,
    pub coex_1wire_gpiote: mpsl_coex_1wire_gpiote_if_t,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct mpsl_coex_if_t {
    pub if_id: mpsl_coex_if_id_t,
    pub interfaces: mpsl_coex_if_t__bindgen_ty_1,
}

pub type mpsl_coex_enable_cb_t = ::core::option::Option<unsafe extern "C" fn()>;

extern "C" {
    pub fn mpsl_coex_enable(if_p: *const mpsl_coex_if_t, cb: mpsl_coex_enable_cb_t) -> i32;
    pub fn mpsl_coex_disable() -> i32;
    pub fn mpsl_coex_support_802152_3wire_gpiote_if() -> i32;
    pub fn mpsl_coex_support_1wire_gpiote_if() -> i32;
}

// ---------------------------------------------------------------------------------------------
// mpsl_cx_abstract_interface.h
// ---------------------------------------------------------------------------------------------

pub type mpsl_cx_op_t = ::core::ffi::c_uint;
pub const mpsl_cx_op_t_MPSL_CX_OP_IDLE_LISTEN: mpsl_cx_op_t = 1;
pub const mpsl_cx_op_t_MPSL_CX_OP_RX: mpsl_cx_op_t = 2;
pub const mpsl_cx_op_t_MPSL_CX_OP_TX: mpsl_cx_op_t = 4;

#[doc = " Bitmap of `mpsl_cx_op_t` values."]
pub type mpsl_cx_op_map_t = u8;
pub type mpsl_cx_priority_t = u8;

#[doc = " Coexistence request issued by a radio protocol."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct mpsl_cx_request_t {
    pub ops: mpsl_cx_op_map_t,
    pub prio: mpsl_cx_priority_t,
}

#[doc = " Called when the set of granted operations changes."]
pub type mpsl_cx_cb_t = ::core::option::Option<unsafe extern "C" fn(granted_ops: mpsl_cx_op_map_t)>;
pub type mpsl_cx_request_fn_t = ::core::option::Option<unsafe extern "C" fn(p_req: *const mpsl_cx_request_t) -> i32>;
pub type mpsl_cx_release_fn_t = ::core::option::Option<unsafe extern "C" fn() -> i32>;
pub type mpsl_cx_granted_ops_get_fn_t =
    ::core::option::Option<unsafe extern "C" fn(p_granted_ops: *mut mpsl_cx_op_map_t) -> i32>;
pub type mpsl_cx_req_grant_delay_get_fn_t = ::core::option::Option<unsafe extern "C" fn() -> u32>;
pub type mpsl_cx_register_callback_fn_t = ::core::option::Option<unsafe extern "C" fn(cb: mpsl_cx_cb_t) -> i32>;

#[doc = " Function table implemented by a coexistence interface driver."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct mpsl_cx_interface_t {
    pub p_request: mpsl_cx_request_fn_t,
    pub p_release: mpsl_cx_release_fn_t,
    pub p_granted_ops_get: mpsl_cx_granted_ops_get_fn_t,
    pub p_req_grant_delay_get: mpsl_cx_req_grant_delay_get_fn_t,
    pub p_register_callback: mpsl_cx_register_callback_fn_t,
}

extern "C" {
    #[doc = " Install a coexistence interface implementation."]
    pub fn mpsl_cx_interface_set(p_interface: *const mpsl_cx_interface_t) -> i32;
}

// ---------------------------------------------------------------------------------------------
// protocol/mpsl_cx_protocol_api.h
// ---------------------------------------------------------------------------------------------

extern "C" {
    pub fn mpsl_cx_request(p_req: *const mpsl_cx_request_t) -> i32;
    pub fn mpsl_cx_release() -> i32;
    pub fn mpsl_cx_granted_ops_get(p_granted_ops: *mut mpsl_cx_op_map_t) -> i32;
    pub fn mpsl_cx_req_grant_delay_get() -> u32;
    pub fn mpsl_cx_register_callback(cb: mpsl_cx_cb_t) -> i32;
}

// ---------------------------------------------------------------------------------------------
// protocol/mpsl_dppi_protocol_api.h
// ---------------------------------------------------------------------------------------------

pub const MPSL_DPPI_RADIO_PUBLISH_READY_CHANNEL_IDX: u32 = 2;
pub const MPSL_DPPI_RADIO_PUBLISH_ADDRESS_CHANNEL_IDX: u32 = 3;
pub const MPSL_DPPI_RADIO_PUBLISH_END_CHANNEL_IDX: u32 = 4;
pub const MPSL_DPPI_RADIO_PUBLISH_DISABLED_CH_IDX: u32 = 5;

// ---------------------------------------------------------------------------------------------
// mpsl_temp.h
// ---------------------------------------------------------------------------------------------

extern "C" {
    #[doc = " Read the chip temperature in units of 0.25 degrees Celsius."]
    pub fn mpsl_temperature_get() -> i32;
}

// ---------------------------------------------------------------------------------------------
// mpsl_timeslot.h
// ---------------------------------------------------------------------------------------------

pub const MPSL_TIMESLOT_LENGTH_MIN_US: u32 = 100;
pub const MPSL_TIMESLOT_LENGTH_MAX_US: u32 = 100000;
pub const MPSL_TIMESLOT_DISTANCE_MAX_US: u32 = 127999999;
pub const MPSL_TIMESLOT_EARLIEST_TIMEOUT_MAX_US: u32 = 127999999;
pub const MPSL_TIMESLOT_START_JITTER_US: u32 = 1;
pub const MPSL_TIMESLOT_EXTENSION_TIME_MIN_US: u32 = 200;
pub const MPSL_TIMESLOT_EXTENSION_MARGIN_MIN_US: u32 = 87;
pub const MPSL_TIMESLOT_CONTEXT_SIZE: u32 = 48;
pub const MPSL_TIMESLOT_CONTEXT_COUNT_MAX: u32 = 8;

pub type MPSL_TIMESLOT_HFCLK_CFG = ::core::ffi::c_uint;
pub const MPSL_TIMESLOT_HFCLK_CFG_MPSL_TIMESLOT_HFCLK_CFG_XTAL_GUARANTEED: MPSL_TIMESLOT_HFCLK_CFG = 0;
pub const MPSL_TIMESLOT_HFCLK_CFG_MPSL_TIMESLOT_HFCLK_CFG_NO_GUARANTEE: MPSL_TIMESLOT_HFCLK_CFG = 1;

pub type MPSL_TIMESLOT_PRIORITY = ::core::ffi::c_uint;
pub const MPSL_TIMESLOT_PRIORITY_MPSL_TIMESLOT_PRIORITY_HIGH: MPSL_TIMESLOT_PRIORITY = 0;
pub const MPSL_TIMESLOT_PRIORITY_MPSL_TIMESLOT_PRIORITY_NORMAL: MPSL_TIMESLOT_PRIORITY = 1;

pub type MPSL_TIMESLOT_REQUEST_TYPE = ::core::ffi::c_uint;
pub const MPSL_TIMESLOT_REQUEST_TYPE_MPSL_TIMESLOT_REQ_TYPE_EARLIEST: MPSL_TIMESLOT_REQUEST_TYPE = 0;
pub const MPSL_TIMESLOT_REQUEST_TYPE_MPSL_TIMESLOT_REQ_TYPE_NORMAL: MPSL_TIMESLOT_REQUEST_TYPE = 1;

pub type MPSL_TIMESLOT_SIGNAL = ::core::ffi::c_uint;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_START: MPSL_TIMESLOT_SIGNAL = 0;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_TIMER0: MPSL_TIMESLOT_SIGNAL = 1;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_RADIO: MPSL_TIMESLOT_SIGNAL = 2;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_EXTEND_FAILED: MPSL_TIMESLOT_SIGNAL = 3;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_EXTEND_SUCCEEDED: MPSL_TIMESLOT_SIGNAL = 4;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_BLOCKED: MPSL_TIMESLOT_SIGNAL = 5;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_CANCELLED: MPSL_TIMESLOT_SIGNAL = 6;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_SESSION_IDLE: MPSL_TIMESLOT_SIGNAL = 7;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_INVALID_RETURN: MPSL_TIMESLOT_SIGNAL = 8;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_SESSION_CLOSED: MPSL_TIMESLOT_SIGNAL = 9;
pub const MPSL_TIMESLOT_SIGNAL_MPSL_TIMESLOT_SIGNAL_OVERSTAYED: MPSL_TIMESLOT_SIGNAL = 10;

pub type MPSL_TIMESLOT_SIGNAL_ACTION = ::core::ffi::c_uint;
pub const MPSL_TIMESLOT_SIGNAL_ACTION_MPSL_TIMESLOT_SIGNAL_ACTION_NONE: MPSL_TIMESLOT_SIGNAL_ACTION = 0;
pub const MPSL_TIMESLOT_SIGNAL_ACTION_MPSL_TIMESLOT_SIGNAL_ACTION_EXTEND: MPSL_TIMESLOT_SIGNAL_ACTION = 1;
pub const MPSL_TIMESLOT_SIGNAL_ACTION_MPSL_TIMESLOT_SIGNAL_ACTION_END: MPSL_TIMESLOT_SIGNAL_ACTION = 2;
pub const MPSL_TIMESLOT_SIGNAL_ACTION_MPSL_TIMESLOT_SIGNAL_ACTION_REQUEST: MPSL_TIMESLOT_SIGNAL_ACTION = 3;

pub type mpsl_timeslot_session_id_t = u8;

#[doc = " Parameters for a request for a timeslot as early as possible."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct mpsl_timeslot_request_earliest_t {
    pub hfclk: u8,
    pub priority: u8,
    pub length_us: u32,
    pub timeout_us: u32,
}

#[doc = " Parameters for a normal timeslot request, relative to the previous slot."]
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct mpsl_timeslot_request_normal_t {
    pub hfclk: u8,
    pub priority: u8,
    pub distance_us: u32,
    pub length_us: u32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union mpsl_timeslot_request_t__bindgen_ty_1 {
    pub earliest: mpsl_timeslot_request_earliest_t,
    pub normal: mpsl_timeslot_request_normal_t,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct mpsl_timeslot_request_t {
    pub request_type: u8,
    pub params: mpsl_timeslot_request_t__bindgen_ty_1,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct mpsl_timeslot_signal_return_param_t__bindgen_ty_1__bindgen_ty_1 {
    pub p_next: *mut mpsl_timeslot_request_t,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct mpsl_timeslot_signal_return_param_t__bindgen_ty_1__bindgen_ty_2 {
    pub length_us: u32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union mpsl_timeslot_signal_return_param_t__bindgen_ty_1 {
    pub request: mpsl_timeslot_signal_return_param_t__bindgen_ty_1__bindgen_ty_1,
    pub extend: mpsl_timeslot_signal_return_param_t__bindgen_ty_1__bindgen_ty_2,
}

#[doc = " Returned from the session callback to tell MPSL what to do next."]
#[repr(C)]
#[derive(Copy, Clone)]
pub struct mpsl_timeslot_signal_return_param_t {
    pub callback_action: u8,
    pub params: mpsl_timeslot_signal_return_param_t__bindgen_ty_1,
}

pub type mpsl_timeslot_callback_t = ::core::option::Option<
    unsafe extern "C" fn(
        session_id: mpsl_timeslot_session_id_t,
        signal: u32,
    ) -> *mut mpsl_timeslot_signal_return_param_t,
>;

extern "C" {
    #[doc = " Provide memory for `n` timeslot sessions. `p_mem` must be `n * MPSL_TIMESLOT_CONTEXT_SIZE` bytes."]
    pub fn mpsl_timeslot_session_count_set(p_mem: *mut ::core::ffi::c_void, n: u8) -> i32;
    pub fn mpsl_timeslot_session_open(
        mpsl_timeslot_signal_callback: mpsl_timeslot_callback_t,
        p_session_id: *mut mpsl_timeslot_session_id_t,
    ) -> i32;
    pub fn mpsl_timeslot_session_close(session_id: mpsl_timeslot_session_id_t) -> i32;
    pub fn mpsl_timeslot_request(
        session_id: mpsl_timeslot_session_id_t,
        p_request: *const mpsl_timeslot_request_t,
    ) -> i32;
}

// ---------------------------------------------------------------------------------------------
// mpsl_tx_power.h
// ---------------------------------------------------------------------------------------------

pub const MPSL_TOTAL_NUM_OF_BLE_CHANNELS: u32 = 40;
pub const MPSL_TOTAL_NUM_OF_802154_CHANNELS: u32 = 16;

pub type mpsl_tx_power_t = i8;
pub type mpsl_phy_t = u8;
pub const MPSL_PHY_BLE_1M: mpsl_phy_t = 0;
pub const MPSL_PHY_BLE_2M: mpsl_phy_t = 1;
pub const MPSL_PHY_BLE_LR125Kbit: mpsl_phy_t = 2;
pub const MPSL_PHY_BLE_LR500Kbit: mpsl_phy_t = 3;
pub const MPSL_PHY_Ieee802154_250Kbit: mpsl_phy_t = 4;

#[repr(C)]
#[derive(Copy, Clone)]
pub union mpsl_tx_power_envelope_t__bindgen_ty_1 {
    pub tx_power_ble: [mpsl_tx_power_t; 40usize],
    pub tx_power_802154: [mpsl_tx_power_t; 16usize],
}

#[doc = " Maximum TX power per channel for one PHY."]
#[repr(C)]
#[derive(Copy, Clone)]
pub struct mpsl_tx_power_envelope_t {
    pub phy: mpsl_phy_t,
    pub envelope: mpsl_tx_power_envelope_t__bindgen_ty_1,
}

extern "C" {
    #[doc = " Set the maximum TX power per channel for a PHY. The envelope is copied."]
    pub fn mpsl_tx_power_channel_map_set(p_envelope: *const mpsl_tx_power_envelope_t) -> i32;
}
