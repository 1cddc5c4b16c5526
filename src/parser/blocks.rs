/// Record-bearing section kinds of a dmidecode report, identified by the
/// title line printed under each handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Bios,
    BiosLanguage,
    System,
    BaseBoard,
    Chassis,
    Processor,
    MemoryArray,
    MemoryDevice,
    Cache,
    Connector,
    Slot,
}

impl RecordType {
    pub const ALL: [RecordType; 11] = [
        RecordType::Bios,
        RecordType::BiosLanguage,
        RecordType::System,
        RecordType::BaseBoard,
        RecordType::Chassis,
        RecordType::Processor,
        RecordType::MemoryArray,
        RecordType::MemoryDevice,
        RecordType::Cache,
        RecordType::Connector,
        RecordType::Slot,
    ];

    /// Fixed English section title as dmidecode prints it.
    pub fn title(self) -> &'static str {
        match self {
            RecordType::Bios => "BIOS Information",
            RecordType::BiosLanguage => "BIOS Language Information",
            RecordType::System => "System Information",
            RecordType::BaseBoard => "Base Board Information",
            RecordType::Chassis => "Chassis Information",
            RecordType::Processor => "Processor Information",
            RecordType::MemoryArray => "Physical Memory Array",
            RecordType::MemoryDevice => "Memory Device",
            RecordType::Cache => "Cache Information",
            RecordType::Connector => "Port Connector Information",
            RecordType::Slot => "System Slot Information",
        }
    }
}

/// Split a raw report into candidate record blocks on the blank-line
/// separator. Whitespace-only segments are dropped; a report without any
/// separator comes back as a single block.
pub fn split_blocks(report: &str) -> impl Iterator<Item = &str> {
    report.split("\n\n").filter(|segment| !segment.trim().is_empty())
}

/// Identify a block by its section title. Titles match as whole unindented
/// lines so "System Information" never claims a "System Slot Information"
/// block, and indented field values never claim anything. Blocks with no
/// known title (OEM Strings and friends) return None and are skipped.
pub fn classify(block: &str) -> Option<RecordType> {
    block.lines().find_map(|line| {
        let line = line.trim_end();
        RecordType::ALL.iter().copied().find(|kind| kind.title() == line)
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_separator_yields_single_block() {
        let blocks: Vec<&str> = split_blocks("BIOS Information\n\tVendor: Acme").collect();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn empty_report_yields_no_blocks() {
        assert_eq!(split_blocks("").count(), 0);
    }

    #[test]
    fn whitespace_segments_dropped() {
        let report = "\nBIOS Information\n\tVendor: Acme\n\n   \n\n\nSystem Information\n\tFamily: X\n\n";
        let blocks: Vec<&str> = split_blocks(report).collect();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn blocks_keep_encounter_order() {
        let report = "\nMemory Device\n\tSize: 4096 MB\n\n\nMemory Device\n\tSize: 8192 MB\n\n";
        let blocks: Vec<&str> = split_blocks(report).collect();
        assert!(blocks[0].contains("4096"));
        assert!(blocks[1].contains("8192"));
    }

    #[test]
    fn classify_known_titles() {
        for kind in RecordType::ALL {
            let block = format!("Handle 0x0001, DMI type 0, 24 bytes\n{}\n\tKey: Value", kind.title());
            assert_eq!(classify(&block), Some(kind));
        }
    }

    #[test]
    fn classify_unknown_section() {
        let block = "Handle 0x0020, DMI type 11, 5 bytes\nOEM Strings\n\tString 1: ABCDEFG";
        assert_eq!(classify(block), None);
    }

    #[test]
    fn title_matches_whole_line_only() {
        let block = "Handle 0x0011, DMI type 9, 17 bytes\nSystem Slot Information\n\tDesignation: ExpressCard Slot";
        assert_eq!(classify(block), Some(RecordType::Slot));
    }

    #[test]
    fn indented_value_is_not_a_title() {
        let block = "Handle 0x0020, DMI type 11, 5 bytes\nOEM Strings\n\tString 1: Memory Device";
        assert_eq!(classify(block), None);
    }
}
