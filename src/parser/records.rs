use serde::Serialize;

use super::blocks::RecordType;
use super::fields::{FieldSlot, Record, Schema};

/// BIOS Information (`dmidecode -t bios`).
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BiosInfo {
    pub vendor: String,
    pub version: String,
    pub release_date: String,
    pub address: String,
    pub runtime_size: String,
    pub rom_size: String,
    pub bios_revision: String,
    pub characteristics: Vec<String>,
}

impl Record for BiosInfo {
    const KIND: RecordType = RecordType::Bios;
    const SCHEMA: Schema<Self> = &[
        ("Vendor", FieldSlot::Scalar(|r| &mut r.vendor)),
        ("Version", FieldSlot::Scalar(|r| &mut r.version)),
        ("Release Date", FieldSlot::Scalar(|r| &mut r.release_date)),
        ("Address", FieldSlot::Scalar(|r| &mut r.address)),
        ("Runtime Size", FieldSlot::Scalar(|r| &mut r.runtime_size)),
        ("ROM Size", FieldSlot::Scalar(|r| &mut r.rom_size)),
        ("BIOS Revision", FieldSlot::Scalar(|r| &mut r.bios_revision)),
        ("Characteristics", FieldSlot::List(|r| &mut r.characteristics)),
    ];
}

/// BIOS Language Information, emitted in the same `-t bios` capture.
/// The installable-language count dmidecode prints on the label line is
/// dropped with the echo cell; it is just the list length.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BiosLanguageInfo {
    pub language_description_format: String,
    pub installable_languages: Vec<String>,
    pub currently_installed_language: String,
}

impl Record for BiosLanguageInfo {
    const KIND: RecordType = RecordType::BiosLanguage;
    const SCHEMA: Schema<Self> = &[
        ("Language Description Format", FieldSlot::Scalar(|r| &mut r.language_description_format)),
        ("Installable Languages", FieldSlot::List(|r| &mut r.installable_languages)),
        ("Currently Installed Language", FieldSlot::Scalar(|r| &mut r.currently_installed_language)),
    ];
}

/// System Information (`dmidecode -t system`).
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SystemInfo {
    pub manufacturer: String,
    pub product_name: String,
    pub version: String,
    pub serial_number: String,
    pub uuid: String,
    pub wake_up_type: String,
    pub sku_number: String,
    pub family: String,
}

impl Record for SystemInfo {
    const KIND: RecordType = RecordType::System;
    const SCHEMA: Schema<Self> = &[
        ("Manufacturer", FieldSlot::Scalar(|r| &mut r.manufacturer)),
        ("Product Name", FieldSlot::Scalar(|r| &mut r.product_name)),
        ("Version", FieldSlot::Scalar(|r| &mut r.version)),
        ("Serial Number", FieldSlot::Scalar(|r| &mut r.serial_number)),
        ("UUID", FieldSlot::Scalar(|r| &mut r.uuid)),
        ("Wake-up Type", FieldSlot::Scalar(|r| &mut r.wake_up_type)),
        ("SKU Number", FieldSlot::Scalar(|r| &mut r.sku_number)),
        ("Family", FieldSlot::Scalar(|r| &mut r.family)),
    ];
}

/// Base Board Information (`dmidecode -t baseboard`).
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BaseBoardInfo {
    pub manufacturer: String,
    pub product_name: String,
    pub version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub features: Vec<String>,
    pub location_in_chassis: String,
    pub chassis_handle: String,
    pub board_type: String,
    pub contained_object_handles: String,
}

impl Record for BaseBoardInfo {
    const KIND: RecordType = RecordType::BaseBoard;
    const SCHEMA: Schema<Self> = &[
        ("Manufacturer", FieldSlot::Scalar(|r| &mut r.manufacturer)),
        ("Product Name", FieldSlot::Scalar(|r| &mut r.product_name)),
        ("Version", FieldSlot::Scalar(|r| &mut r.version)),
        ("Serial Number", FieldSlot::Scalar(|r| &mut r.serial_number)),
        ("Asset Tag", FieldSlot::Scalar(|r| &mut r.asset_tag)),
        ("Features", FieldSlot::List(|r| &mut r.features)),
        ("Location In Chassis", FieldSlot::Scalar(|r| &mut r.location_in_chassis)),
        ("Chassis Handle", FieldSlot::Scalar(|r| &mut r.chassis_handle)),
        ("Type", FieldSlot::Scalar(|r| &mut r.board_type)),
        ("Contained Object Handles", FieldSlot::Scalar(|r| &mut r.contained_object_handles)),
    ];
}

/// Chassis Information (`dmidecode -t chassis`). Every key maps to its own
/// field; height, power cords and the rest are not collapsed together.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ChassisInfo {
    pub manufacturer: String,
    pub chassis_type: String,
    pub lock: String,
    pub version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub boot_up_state: String,
    pub power_supply_state: String,
    pub thermal_state: String,
    pub security_status: String,
    pub oem_information: String,
    pub height: String,
    pub number_of_power_cords: String,
    pub contained_elements: String,
    pub sku_number: String,
}

impl Record for ChassisInfo {
    const KIND: RecordType = RecordType::Chassis;
    const SCHEMA: Schema<Self> = &[
        ("Manufacturer", FieldSlot::Scalar(|r| &mut r.manufacturer)),
        ("Type", FieldSlot::Scalar(|r| &mut r.chassis_type)),
        ("Lock", FieldSlot::Scalar(|r| &mut r.lock)),
        ("Version", FieldSlot::Scalar(|r| &mut r.version)),
        ("Serial Number", FieldSlot::Scalar(|r| &mut r.serial_number)),
        ("Asset Tag", FieldSlot::Scalar(|r| &mut r.asset_tag)),
        ("Boot-up State", FieldSlot::Scalar(|r| &mut r.boot_up_state)),
        ("Power Supply State", FieldSlot::Scalar(|r| &mut r.power_supply_state)),
        ("Thermal State", FieldSlot::Scalar(|r| &mut r.thermal_state)),
        ("Security Status", FieldSlot::Scalar(|r| &mut r.security_status)),
        ("OEM Information", FieldSlot::Scalar(|r| &mut r.oem_information)),
        ("Height", FieldSlot::Scalar(|r| &mut r.height)),
        ("Number Of Power Cords", FieldSlot::Scalar(|r| &mut r.number_of_power_cords)),
        ("Contained Elements", FieldSlot::Scalar(|r| &mut r.contained_elements)),
        ("SKU Number", FieldSlot::Scalar(|r| &mut r.sku_number)),
    ];
}

/// Processor Information (`dmidecode -t processor`). Flags and
/// Characteristics are distinct lists: CPU feature flags on one side,
/// socket capabilities (64-bit capable, Multi-Core, ...) on the other.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ProcessorInfo {
    pub socket_designation: String,
    pub processor_type: String,
    pub family: String,
    pub manufacturer: String,
    pub id: String,
    pub signature: String,
    pub flags: Vec<String>,
    pub version: String,
    pub voltage: String,
    pub external_clock: String,
    pub max_speed: String,
    pub current_speed: String,
    pub status: String,
    pub upgrade: String,
    pub l1_cache_handle: String,
    pub l2_cache_handle: String,
    pub l3_cache_handle: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    pub core_count: String,
    pub core_enabled: String,
    pub thread_count: String,
    pub characteristics: Vec<String>,
}

impl Record for ProcessorInfo {
    const KIND: RecordType = RecordType::Processor;
    const SCHEMA: Schema<Self> = &[
        ("Socket Designation", FieldSlot::Scalar(|r| &mut r.socket_designation)),
        ("Type", FieldSlot::Scalar(|r| &mut r.processor_type)),
        ("Family", FieldSlot::Scalar(|r| &mut r.family)),
        ("Manufacturer", FieldSlot::Scalar(|r| &mut r.manufacturer)),
        ("ID", FieldSlot::Scalar(|r| &mut r.id)),
        ("Signature", FieldSlot::Scalar(|r| &mut r.signature)),
        ("Flags", FieldSlot::List(|r| &mut r.flags)),
        ("Version", FieldSlot::Scalar(|r| &mut r.version)),
        ("Voltage", FieldSlot::Scalar(|r| &mut r.voltage)),
        ("External Clock", FieldSlot::Scalar(|r| &mut r.external_clock)),
        ("Max Speed", FieldSlot::Scalar(|r| &mut r.max_speed)),
        ("Current Speed", FieldSlot::Scalar(|r| &mut r.current_speed)),
        ("Status", FieldSlot::Scalar(|r| &mut r.status)),
        ("Upgrade", FieldSlot::Scalar(|r| &mut r.upgrade)),
        ("L1 Cache Handle", FieldSlot::Scalar(|r| &mut r.l1_cache_handle)),
        ("L2 Cache Handle", FieldSlot::Scalar(|r| &mut r.l2_cache_handle)),
        ("L3 Cache Handle", FieldSlot::Scalar(|r| &mut r.l3_cache_handle)),
        ("Serial Number", FieldSlot::Scalar(|r| &mut r.serial_number)),
        ("Asset Tag", FieldSlot::Scalar(|r| &mut r.asset_tag)),
        ("Part Number", FieldSlot::Scalar(|r| &mut r.part_number)),
        ("Core Count", FieldSlot::Scalar(|r| &mut r.core_count)),
        ("Core Enabled", FieldSlot::Scalar(|r| &mut r.core_enabled)),
        ("Thread Count", FieldSlot::Scalar(|r| &mut r.thread_count)),
        ("Characteristics", FieldSlot::List(|r| &mut r.characteristics)),
    ];
}

/// Physical Memory Array: the board-level summary that owns the memory
/// device blocks in the same `-t memory` capture.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MemoryArrayInfo {
    pub location: String,
    pub array_use: String,
    pub error_correction_type: String,
    pub maximum_capacity: String,
    pub error_information_handle: String,
    pub number_of_devices: String,
}

impl Record for MemoryArrayInfo {
    const KIND: RecordType = RecordType::MemoryArray;
    const SCHEMA: Schema<Self> = &[
        ("Location", FieldSlot::Scalar(|r| &mut r.location)),
        ("Use", FieldSlot::Scalar(|r| &mut r.array_use)),
        ("Error Correction Type", FieldSlot::Scalar(|r| &mut r.error_correction_type)),
        ("Maximum Capacity", FieldSlot::Scalar(|r| &mut r.maximum_capacity)),
        ("Error Information Handle", FieldSlot::Scalar(|r| &mut r.error_information_handle)),
        ("Number Of Devices", FieldSlot::Scalar(|r| &mut r.number_of_devices)),
    ];
}

/// One Memory Device block: a DIMM slot, populated or not.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MemoryDeviceInfo {
    pub array_handle: String,
    pub error_information_handle: String,
    pub total_width: String,
    pub data_width: String,
    pub size: String,
    pub form_factor: String,
    pub set: String,
    pub locator: String,
    pub bank_locator: String,
    pub memory_type: String,
    pub type_detail: String,
    pub speed: String,
    pub manufacturer: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    pub rank: String,
    pub configured_clock_speed: String,
}

impl Record for MemoryDeviceInfo {
    const KIND: RecordType = RecordType::MemoryDevice;
    const SCHEMA: Schema<Self> = &[
        ("Array Handle", FieldSlot::Scalar(|r| &mut r.array_handle)),
        ("Error Information Handle", FieldSlot::Scalar(|r| &mut r.error_information_handle)),
        ("Total Width", FieldSlot::Scalar(|r| &mut r.total_width)),
        ("Data Width", FieldSlot::Scalar(|r| &mut r.data_width)),
        ("Size", FieldSlot::Scalar(|r| &mut r.size)),
        ("Form Factor", FieldSlot::Scalar(|r| &mut r.form_factor)),
        ("Set", FieldSlot::Scalar(|r| &mut r.set)),
        ("Locator", FieldSlot::Scalar(|r| &mut r.locator)),
        ("Bank Locator", FieldSlot::Scalar(|r| &mut r.bank_locator)),
        ("Type", FieldSlot::Scalar(|r| &mut r.memory_type)),
        ("Type Detail", FieldSlot::Scalar(|r| &mut r.type_detail)),
        ("Speed", FieldSlot::Scalar(|r| &mut r.speed)),
        ("Manufacturer", FieldSlot::Scalar(|r| &mut r.manufacturer)),
        ("Serial Number", FieldSlot::Scalar(|r| &mut r.serial_number)),
        ("Asset Tag", FieldSlot::Scalar(|r| &mut r.asset_tag)),
        ("Part Number", FieldSlot::Scalar(|r| &mut r.part_number)),
        ("Rank", FieldSlot::Scalar(|r| &mut r.rank)),
        ("Configured Clock Speed", FieldSlot::Scalar(|r| &mut r.configured_clock_speed)),
    ];
}

/// Cache Information (`dmidecode -t cache`), one block per cache level.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CacheInfo {
    pub socket_designation: String,
    pub configuration: String,
    pub operational_mode: String,
    pub location: String,
    pub installed_size: String,
    pub maximum_size: String,
    pub supported_sram_types: Vec<String>,
    pub installed_sram_type: String,
    pub speed: String,
    pub error_correction_type: String,
    pub system_type: String,
    pub associativity: String,
}

impl Record for CacheInfo {
    const KIND: RecordType = RecordType::Cache;
    const SCHEMA: Schema<Self> = &[
        ("Socket Designation", FieldSlot::Scalar(|r| &mut r.socket_designation)),
        ("Configuration", FieldSlot::Scalar(|r| &mut r.configuration)),
        ("Operational Mode", FieldSlot::Scalar(|r| &mut r.operational_mode)),
        ("Location", FieldSlot::Scalar(|r| &mut r.location)),
        ("Installed Size", FieldSlot::Scalar(|r| &mut r.installed_size)),
        ("Maximum Size", FieldSlot::Scalar(|r| &mut r.maximum_size)),
        ("Supported SRAM Types", FieldSlot::List(|r| &mut r.supported_sram_types)),
        ("Installed SRAM Type", FieldSlot::Scalar(|r| &mut r.installed_sram_type)),
        ("Speed", FieldSlot::Scalar(|r| &mut r.speed)),
        ("Error Correction Type", FieldSlot::Scalar(|r| &mut r.error_correction_type)),
        ("System Type", FieldSlot::Scalar(|r| &mut r.system_type)),
        ("Associativity", FieldSlot::Scalar(|r| &mut r.associativity)),
    ];
}

/// Port Connector Information (`dmidecode -t connector`).
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PortConnectorInfo {
    pub internal_reference_designator: String,
    pub internal_connector_type: String,
    pub external_reference_designator: String,
    pub external_connector_type: String,
    pub port_type: String,
}

impl Record for PortConnectorInfo {
    const KIND: RecordType = RecordType::Connector;
    const SCHEMA: Schema<Self> = &[
        ("Internal Reference Designator", FieldSlot::Scalar(|r| &mut r.internal_reference_designator)),
        ("Internal Connector Type", FieldSlot::Scalar(|r| &mut r.internal_connector_type)),
        ("External Reference Designator", FieldSlot::Scalar(|r| &mut r.external_reference_designator)),
        ("External Connector Type", FieldSlot::Scalar(|r| &mut r.external_connector_type)),
        ("Port Type", FieldSlot::Scalar(|r| &mut r.port_type)),
    ];
}

/// System Slot Information (`dmidecode -t slot`).
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SystemSlotInfo {
    pub designation: String,
    pub slot_type: String,
    pub current_usage: String,
    pub length: String,
    pub slot_id: String,
    pub characteristics: Vec<String>,
    pub bus_address: String,
}

impl Record for SystemSlotInfo {
    const KIND: RecordType = RecordType::Slot;
    const SCHEMA: Schema<Self> = &[
        ("Designation", FieldSlot::Scalar(|r| &mut r.designation)),
        ("Type", FieldSlot::Scalar(|r| &mut r.slot_type)),
        ("Current Usage", FieldSlot::Scalar(|r| &mut r.current_usage)),
        ("Length", FieldSlot::Scalar(|r| &mut r.length)),
        ("ID", FieldSlot::Scalar(|r| &mut r.slot_id)),
        ("Characteristics", FieldSlot::List(|r| &mut r.characteristics)),
        ("Bus Address", FieldSlot::Scalar(|r| &mut r.bus_address)),
    ];
}

// ── Tests ──
