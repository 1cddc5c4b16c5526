//! dmidecode report parser: blank-line blocks → title-classified sections →
//! normalized `key: value` lines → schema-mapped records.
//!
//! Total over any input string. Malformed blocks degrade to default records;
//! unknown sections and unknown keys are silently skipped. "Could not obtain
//! a report" is the runner's error, never this module's.

pub mod blocks;
pub mod fields;
pub mod records;

use serde::Serialize;

use blocks::{classify, split_blocks};
use fields::{map_record, Record};
pub use records::{
    BaseBoardInfo, BiosInfo, BiosLanguageInfo, CacheInfo, ChassisInfo, MemoryArrayInfo,
    MemoryDeviceInfo, PortConnectorInfo, ProcessorInfo, SystemInfo, SystemSlotInfo,
};

/// Both sections of one `-t bios` capture.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BiosReport {
    pub bios: BiosInfo,
    pub language: BiosLanguageInfo,
}

/// Array summary plus per-module devices from one `-t memory` capture. Two
/// related but distinct record sets; no field merging across them.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MemoryReport {
    pub array: MemoryArrayInfo,
    pub devices: Vec<MemoryDeviceInfo>,
}

/// Singleton aggregation: when a report carries more than one qualifying
/// block, the last one observed wins. A report with none yields defaults.
fn collect_one<R: Record>(report: &str) -> R {
    split_blocks(report)
        .filter(|block| classify(block) == Some(R::KIND))
        .map(map_record::<R>)
        .last()
        .unwrap_or_default()
}

/// Repeatable aggregation: one record per qualifying block, encounter order.
fn collect_many<R: Record>(report: &str) -> Vec<R> {
    split_blocks(report)
        .filter(|block| classify(block) == Some(R::KIND))
        .map(map_record::<R>)
        .collect()
}

pub fn parse_bios(report: &str) -> BiosReport {
    BiosReport {
        bios: collect_one(report),
        language: collect_one(report),
    }
}

pub fn parse_system(report: &str) -> SystemInfo {
    collect_one(report)
}

pub fn parse_baseboard(report: &str) -> BaseBoardInfo {
    collect_one(report)
}

pub fn parse_chassis(report: &str) -> ChassisInfo {
    collect_one(report)
}

pub fn parse_processor(report: &str) -> ProcessorInfo {
    collect_one(report)
}

pub fn parse_memory(report: &str) -> MemoryReport {
    MemoryReport {
        array: collect_one(report),
        devices: collect_many(report),
    }
}

pub fn parse_caches(report: &str) -> Vec<CacheInfo> {
    collect_many(report)
}

pub fn parse_connectors(report: &str) -> Vec<PortConnectorInfo> {
    collect_many(report)
}

pub fn parse_slots(report: &str) -> Vec<SystemSlotInfo> {
    collect_many(report)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.txt", name)).unwrap()
    }

    #[test]
    fn bios_minimal_block() {
        let report = "\nBIOS Information\n\tVendor: Acme\n\tVersion: 1.0\n\n";
        let parsed = parse_bios(report);
        assert_eq!(parsed.bios.vendor, "Acme");
        assert_eq!(parsed.bios.version, "1.0");
        assert!(parsed.bios.release_date.is_empty());
        assert!(parsed.bios.characteristics.is_empty());
        assert_eq!(parsed.language, BiosLanguageInfo::default());
    }

    #[test]
    fn two_memory_devices_in_encounter_order() {
        let report = "\nMemory Device\n\tSize: 4096 MB\n\tLocator: ChannelA-DIMM0\n\n\nMemory Device\n\tSize: 4096 MB\n\tLocator: ChannelB-DIMM0\n\n";
        let parsed = parse_memory(report);
        assert_eq!(parsed.devices.len(), 2);
        assert_eq!(parsed.devices[0].size, "4096 MB");
        assert_eq!(parsed.devices[1].size, "4096 MB");
        assert_eq!(parsed.devices[0].locator, "ChannelA-DIMM0");
        assert_eq!(parsed.devices[1].locator, "ChannelB-DIMM0");
    }

    #[test]
    fn cache_sram_types_without_label_echo() {
        let report = "\nCache Information\n\tSupported SRAM Types:\n\t\tSynchronous\n\t\tAsynchronous\n\n";
        let caches = parse_caches(report);
        assert_eq!(caches.len(), 1);
        assert_eq!(caches[0].supported_sram_types, vec!["Synchronous", "Asynchronous"]);
    }

    #[test]
    fn unrecognized_section_only() {
        let report = "\nOEM Strings\n\tString 1: ABCDEFG\n\n";
        assert_eq!(parse_system(report), SystemInfo::default());
        assert!(parse_memory(report).devices.is_empty());
        assert!(parse_slots(report).is_empty());
    }

    #[test]
    fn empty_report() {
        assert_eq!(parse_bios(""), BiosReport::default());
        assert_eq!(parse_chassis(""), ChassisInfo::default());
        assert!(parse_caches("").is_empty());
        assert!(parse_connectors("").is_empty());
    }

    #[test]
    fn parsing_is_idempotent() {
        let report = fixture("memory");
        assert_eq!(parse_memory(&report), parse_memory(&report));
    }

    #[test]
    fn duplicate_singleton_last_wins() {
        let report = "\nSystem Information\n\tManufacturer: First\n\n\nSystem Information\n\tManufacturer: Second\n\n";
        assert_eq!(parse_system(report).manufacturer, "Second");
    }

    // ── Fixture round-trips ──

    #[test]
    fn bios_fixture() {
        let parsed = parse_bios(&fixture("bios"));
        assert_eq!(parsed.bios.vendor, "LENOVO");
        assert_eq!(parsed.bios.version, "J4ET76WW(1.76)");
        assert_eq!(parsed.bios.release_date, "03/03/2015");
        assert_eq!(parsed.bios.address, "0xE0000");
        assert_eq!(parsed.bios.runtime_size, "128 kB");
        assert_eq!(parsed.bios.rom_size, "8192 kB");
        assert_eq!(parsed.bios.bios_revision, "1.76");
        assert!(parsed.bios.characteristics.contains(&"PCI is supported".to_string()));
        assert!(parsed.bios.characteristics.contains(&"ACPI is supported".to_string()));
        assert_eq!(parsed.language.language_description_format, "Abbreviated");
        assert_eq!(parsed.language.currently_installed_language, "en-US");
        assert_eq!(parsed.language.installable_languages.len(), 7);
        assert!(!parsed.language.installable_languages.contains(&"7".to_string()));
    }

    #[test]
    fn system_fixture() {
        let system = parse_system(&fixture("system"));
        assert_eq!(system.manufacturer, "LENOVO");
        assert_eq!(system.product_name, "20ASEB3");
        assert_eq!(system.serial_number, "ZZ0R958AGF4");
        assert_eq!(system.uuid, "A03804C2-D1F0-11E3-9A2B-28D24457AB51");
        assert_eq!(system.wake_up_type, "Power Switch");
        assert_eq!(system.family, "ThinkPad T440p");
    }

    #[test]
    fn baseboard_fixture() {
        let board = parse_baseboard(&fixture("baseboard"));
        assert_eq!(board.manufacturer, "LENOVO");
        assert_eq!(board.product_name, "20ASEB3");
        assert_eq!(board.board_type, "Motherboard");
        assert_eq!(board.features, vec!["Board is a hosting board", "Board is replaceable"]);
        assert_eq!(board.chassis_handle, "0x0000");
    }

    #[test]
    fn chassis_fixture() {
        let chassis = parse_chassis(&fixture("chassis"));
        assert_eq!(chassis.manufacturer, "LENOVO");
        assert_eq!(chassis.chassis_type, "Notebook");
        assert_eq!(chassis.lock, "Not Present");
        assert_eq!(chassis.boot_up_state, "Unknown");
        assert_eq!(chassis.oem_information, "0x00000000");
        assert_eq!(chassis.height, "Unspecified");
        assert_eq!(chassis.number_of_power_cords, "Unspecified");
        assert_eq!(chassis.contained_elements, "0");
        assert_eq!(chassis.sku_number, "Not Specified");
    }

    #[test]
    fn processor_fixture() {
        let cpu = parse_processor(&fixture("processor"));
        assert_eq!(cpu.socket_designation, "CPU Socket - U3E1");
        assert_eq!(cpu.version, "Intel(R) Core(TM) i7-4712MQ CPU @ 2.30GHz");
        assert_eq!(cpu.core_count, "4");
        assert_eq!(cpu.thread_count, "8");
        assert!(cpu.flags.contains(&"FPU (Floating-point unit on-chip)".to_string()));
        assert_eq!(cpu.characteristics, vec!["64-bit capable", "Multi-Core", "Hardware Thread"]);
        assert_eq!(cpu.l1_cache_handle, "0x0002");
        assert_eq!(cpu.l3_cache_handle, "0x0004");
    }

    #[test]
    fn memory_fixture() {
        let memory = parse_memory(&fixture("memory"));
        assert_eq!(memory.array.location, "System Board Or Motherboard");
        assert_eq!(memory.array.array_use, "System Memory");
        assert_eq!(memory.array.maximum_capacity, "16 GB");
        assert_eq!(memory.array.number_of_devices, "2");
        assert_eq!(memory.devices.len(), 2);
        assert_eq!(memory.devices[0].size, "4096 MB");
        assert_eq!(memory.devices[0].locator, "ChannelA-DIMM0");
        assert_eq!(memory.devices[0].manufacturer, "Samsung");
        assert_eq!(memory.devices[1].locator, "ChannelB-DIMM0");
        assert_eq!(memory.devices[1].manufacturer, "Hynix/Hyundai");
        assert_eq!(memory.devices[1].part_number, "HMT451S6AFR8A-PB");
    }

    #[test]
    fn cache_fixture() {
        let caches = parse_caches(&fixture("cache"));
        assert_eq!(caches.len(), 3);
        assert_eq!(caches[0].socket_designation, "L1-Cache");
        assert_eq!(caches[1].socket_designation, "L2-Cache");
        assert_eq!(caches[2].socket_designation, "L3-Cache");
        assert_eq!(caches[1].operational_mode, "Write Back");
        assert_eq!(caches[2].installed_size, "6144 kB");
        assert!(caches[0].supported_sram_types.contains(&"Synchronous".to_string()));
    }

    #[test]
    fn connector_fixture() {
        let connectors = parse_connectors(&fixture("connector"));
        assert_eq!(connectors.len(), 3);
        assert_eq!(connectors[0].external_reference_designator, "External Monitor");
        assert_eq!(connectors[0].external_connector_type, "DB-15 female");
        assert_eq!(connectors[0].port_type, "Video Port");
    }

    #[test]
    fn slot_fixture() {
        let slots = parse_slots(&fixture("slot"));
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].designation, "ExpressCard Slot");
        assert_eq!(slots[0].slot_type, "x1 PCI Express");
        assert_eq!(slots[0].slot_id, "1");
        assert!(slots[0].characteristics.contains(&"Hot-plug devices are supported".to_string()));
        assert_eq!(slots[1].bus_address, "0000:00:1c.4");
    }
}
