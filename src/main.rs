mod parser;
mod runner;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use parser::{
    BaseBoardInfo, BiosReport, CacheInfo, ChassisInfo, MemoryReport, PortConnectorInfo,
    ProcessorInfo, SystemInfo, SystemSlotInfo,
};
use runner::{Category, Runner};

#[derive(Parser)]
#[command(name = "dmi_inventory", about = "Hardware inventory via dmidecode")]
struct Cli {
    /// Emit pretty JSON instead of the text rendering
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// BIOS and BIOS language information
    Bios,
    /// System product information
    System,
    /// Base board information
    Baseboard,
    /// Chassis information
    Chassis,
    /// Processor information
    Processor,
    /// Physical memory array and per-module devices
    Memory,
    /// Cache levels
    Cache,
    /// Port connectors
    Connector,
    /// Expansion slots
    Slot,
    /// Query every category concurrently and print one aggregated inventory
    Scan,
    /// Report where dmidecode was found and how queries will be elevated
    Check,
}

/// One full hardware scan.
#[derive(Debug, Serialize)]
struct Inventory {
    collected_at: DateTime<Utc>,
    bios: BiosReport,
    system: SystemInfo,
    baseboard: BaseBoardInfo,
    chassis: ChassisInfo,
    processor: ProcessorInfo,
    memory: MemoryReport,
    caches: Vec<CacheInfo>,
    connectors: Vec<PortConnectorInfo>,
    slots: Vec<SystemSlotInfo>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Check = cli.command {
        let runner = Runner::locate()?;
        println!("dmidecode:  {}", runner.path().display());
        println!("elevation:  {}", runner.elevation());
        println!("categories: {}", Category::ALL.map(|c| c.arg()).join(", "));
        return Ok(());
    }

    let runner = Runner::locate()?;
    match cli.command {
        Commands::Bios => {
            let raw = runner.query(Category::Bios).await?;
            emit(cli.json, &parser::parse_bios(&raw), render_bios)?;
        }
        Commands::System => {
            let raw = runner.query(Category::System).await?;
            emit(cli.json, &parser::parse_system(&raw), render_system)?;
        }
        Commands::Baseboard => {
            let raw = runner.query(Category::Baseboard).await?;
            emit(cli.json, &parser::parse_baseboard(&raw), render_baseboard)?;
        }
        Commands::Chassis => {
            let raw = runner.query(Category::Chassis).await?;
            emit(cli.json, &parser::parse_chassis(&raw), render_chassis)?;
        }
        Commands::Processor => {
            let raw = runner.query(Category::Processor).await?;
            emit(cli.json, &parser::parse_processor(&raw), render_processor)?;
        }
        Commands::Memory => {
            let raw = runner.query(Category::Memory).await?;
            emit(cli.json, &parser::parse_memory(&raw), render_memory)?;
        }
        Commands::Cache => {
            let raw = runner.query(Category::Cache).await?;
            emit(cli.json, &parser::parse_caches(&raw), render_caches)?;
        }
        Commands::Connector => {
            let raw = runner.query(Category::Connector).await?;
            emit(cli.json, &parser::parse_connectors(&raw), render_connectors)?;
        }
        Commands::Slot => {
            let raw = runner.query(Category::Slot).await?;
            emit(cli.json, &parser::parse_slots(&raw), render_slots)?;
        }
        Commands::Scan => {
            let inventory = scan(&runner).await?;
            emit(cli.json, &inventory, render_inventory)?;
        }
        Commands::Check => unreachable!(),
    }

    Ok(())
}

/// Queries are independent and the parser shares no mutable state, so the
/// full scan runs all categories at once.
async fn scan(runner: &Runner) -> Result<Inventory> {
    let (bios, system, baseboard, chassis, processor, memory, cache, connector, slot) = tokio::try_join!(
        runner.query(Category::Bios),
        runner.query(Category::System),
        runner.query(Category::Baseboard),
        runner.query(Category::Chassis),
        runner.query(Category::Processor),
        runner.query(Category::Memory),
        runner.query(Category::Cache),
        runner.query(Category::Connector),
        runner.query(Category::Slot),
    )?;

    Ok(Inventory {
        collected_at: Utc::now(),
        bios: parser::parse_bios(&bios),
        system: parser::parse_system(&system),
        baseboard: parser::parse_baseboard(&baseboard),
        chassis: parser::parse_chassis(&chassis),
        processor: parser::parse_processor(&processor),
        memory: parser::parse_memory(&memory),
        caches: parser::parse_caches(&cache),
        connectors: parser::parse_connectors(&connector),
        slots: parser::parse_slots(&slot),
    })
}

fn emit<T: Serialize>(json: bool, value: &T, render: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        render(value);
    }
    Ok(())
}

fn field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("  {:<28} {}", label, value);
    }
}

fn list_field(label: &str, items: &[String]) {
    if !items.is_empty() {
        println!("  {:<28} {}", label, items.join(", "));
    }
}

fn render_bios(report: &BiosReport) {
    println!("BIOS");
    field("Vendor", &report.bios.vendor);
    field("Version", &report.bios.version);
    field("Release Date", &report.bios.release_date);
    field("Address", &report.bios.address);
    field("Runtime Size", &report.bios.runtime_size);
    field("ROM Size", &report.bios.rom_size);
    field("BIOS Revision", &report.bios.bios_revision);
    list_field("Characteristics", &report.bios.characteristics);
    println!("BIOS Language");
    field("Description Format", &report.language.language_description_format);
    list_field("Installable Languages", &report.language.installable_languages);
    field("Installed Language", &report.language.currently_installed_language);
}

fn render_system(system: &SystemInfo) {
    println!("System");
    field("Manufacturer", &system.manufacturer);
    field("Product Name", &system.product_name);
    field("Version", &system.version);
    field("Serial Number", &system.serial_number);
    field("UUID", &system.uuid);
    field("Wake-up Type", &system.wake_up_type);
    field("SKU Number", &system.sku_number);
    field("Family", &system.family);
}

fn render_baseboard(board: &BaseBoardInfo) {
    println!("Base Board");
    field("Manufacturer", &board.manufacturer);
    field("Product Name", &board.product_name);
    field("Version", &board.version);
    field("Serial Number", &board.serial_number);
    field("Asset Tag", &board.asset_tag);
    list_field("Features", &board.features);
    field("Location In Chassis", &board.location_in_chassis);
    field("Chassis Handle", &board.chassis_handle);
    field("Type", &board.board_type);
    field("Contained Object Handles", &board.contained_object_handles);
}

fn render_chassis(chassis: &ChassisInfo) {
    println!("Chassis");
    field("Manufacturer", &chassis.manufacturer);
    field("Type", &chassis.chassis_type);
    field("Lock", &chassis.lock);
    field("Version", &chassis.version);
    field("Serial Number", &chassis.serial_number);
    field("Asset Tag", &chassis.asset_tag);
    field("Boot-up State", &chassis.boot_up_state);
    field("Power Supply State", &chassis.power_supply_state);
    field("Thermal State", &chassis.thermal_state);
    field("Security Status", &chassis.security_status);
    field("OEM Information", &chassis.oem_information);
    field("Height", &chassis.height);
    field("Number Of Power Cords", &chassis.number_of_power_cords);
    field("Contained Elements", &chassis.contained_elements);
    field("SKU Number", &chassis.sku_number);
}

fn render_processor(cpu: &ProcessorInfo) {
    println!("Processor");
    field("Socket Designation", &cpu.socket_designation);
    field("Type", &cpu.processor_type);
    field("Family", &cpu.family);
    field("Manufacturer", &cpu.manufacturer);
    field("Version", &cpu.version);
    field("Signature", &cpu.signature);
    field("Voltage", &cpu.voltage);
    field("External Clock", &cpu.external_clock);
    field("Max Speed", &cpu.max_speed);
    field("Current Speed", &cpu.current_speed);
    field("Status", &cpu.status);
    field("Upgrade", &cpu.upgrade);
    field("Core Count", &cpu.core_count);
    field("Core Enabled", &cpu.core_enabled);
    field("Thread Count", &cpu.thread_count);
    list_field("Flags", &cpu.flags);
    list_field("Characteristics", &cpu.characteristics);
}

fn render_memory(memory: &MemoryReport) {
    println!("Physical Memory Array");
    field("Location", &memory.array.location);
    field("Use", &memory.array.array_use);
    field("Error Correction Type", &memory.array.error_correction_type);
    field("Maximum Capacity", &memory.array.maximum_capacity);
    field("Number Of Devices", &memory.array.number_of_devices);
    for (i, device) in memory.devices.iter().enumerate() {
        println!("Memory Device #{}", i + 1);
        field("Locator", &device.locator);
        field("Bank Locator", &device.bank_locator);
        field("Size", &device.size);
        field("Form Factor", &device.form_factor);
        field("Type", &device.memory_type);
        field("Type Detail", &device.type_detail);
        field("Speed", &device.speed);
        field("Configured Clock Speed", &device.configured_clock_speed);
        field("Manufacturer", &device.manufacturer);
        field("Serial Number", &device.serial_number);
        field("Part Number", &device.part_number);
        field("Rank", &device.rank);
    }
}

fn render_caches(caches: &Vec<CacheInfo>) {
    for cache in caches {
        println!("Cache ({})", cache.socket_designation);
        field("Configuration", &cache.configuration);
        field("Operational Mode", &cache.operational_mode);
        field("Installed Size", &cache.installed_size);
        field("Maximum Size", &cache.maximum_size);
        list_field("Supported SRAM Types", &cache.supported_sram_types);
        field("Installed SRAM Type", &cache.installed_sram_type);
        field("System Type", &cache.system_type);
        field("Associativity", &cache.associativity);
    }
    if caches.is_empty() {
        println!("No cache information reported.");
    }
}

fn render_connectors(connectors: &Vec<PortConnectorInfo>) {
    for connector in connectors {
        println!("Port Connector");
        field("Internal Designator", &connector.internal_reference_designator);
        field("Internal Connector Type", &connector.internal_connector_type);
        field("External Designator", &connector.external_reference_designator);
        field("External Connector Type", &connector.external_connector_type);
        field("Port Type", &connector.port_type);
    }
    if connectors.is_empty() {
        println!("No port connectors reported.");
    }
}

fn render_slots(slots: &Vec<SystemSlotInfo>) {
    for slot in slots {
        println!("System Slot ({})", slot.designation);
        field("Type", &slot.slot_type);
        field("Current Usage", &slot.current_usage);
        field("Length", &slot.length);
        field("ID", &slot.slot_id);
        list_field("Characteristics", &slot.characteristics);
        field("Bus Address", &slot.bus_address);
    }
    if slots.is_empty() {
        println!("No system slots reported.");
    }
}

fn render_inventory(inventory: &Inventory) {
    println!("Collected at {}", inventory.collected_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();
    render_bios(&inventory.bios);
    println!();
    render_system(&inventory.system);
    println!();
    render_baseboard(&inventory.baseboard);
    println!();
    render_chassis(&inventory.chassis);
    println!();
    render_processor(&inventory.processor);
    println!();
    render_memory(&inventory.memory);
    println!();
    render_caches(&inventory.caches);
    println!();
    render_connectors(&inventory.connectors);
    println!();
    render_slots(&inventory.slots);
}
