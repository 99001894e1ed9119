//! The assembled analysis result for one ROM image.

use serde::Serialize;

use crate::header::{Bank, HEADER_SIZE};
use crate::hexdump;
use crate::metadata::RomMetadata;

/// Struct to hold the analysis results for a SNES ROM.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct RomReport {
    /// The name of the source file.
    pub source_name: String,
    /// Whether a copier (SMC) header precedes the image.
    pub smc_header: bool,
    /// Size of the copier header in bytes (0 when absent).
    pub smc_offset: u64,
    /// Which bank layout the accepted header was found at.
    pub bank: Bank,
    /// Absolute file address of the accepted header.
    pub header_address: u64,
    /// Decoded header fields.
    #[serde(flatten)]
    pub metadata: RomMetadata,
    /// Checksum computed over the whole image, hex.
    pub calculated_checksum: String,
    /// The raw 64-byte header window, kept for the hex dump.
    #[serde(skip)]
    pub header_bytes: [u8; HEADER_SIZE],
}

impl RomReport {
    /// Returns a printable String of the analysis results, ending with a
    /// canonical dump of the raw header at its absolute file address.
    pub fn print(&self) -> String {
        format!(
            "Game Title: {}\n\
             SMC Header: {}\n\
             Rom Mapping: {}\n\
             Rom Type: {}\n\
             Rom Size: {} MegaBits\n\
             SRAM Size: {} Kilobits\n\
             Country: {}\n\
             Licensee: {}\n\
             Game Version: {}\n\
             Checksum Complement: {}\n\
             Specified Checksum: {}\n\
             Calculated checksum: {}\n\n\
             {}",
            self.metadata.game_title,
            if self.smc_header { "Yes" } else { "No" },
            self.metadata.rom_mapping,
            self.metadata.rom_type,
            self.metadata.rom_size,
            self.metadata.sram_size,
            self.metadata.country,
            self.metadata.licensee,
            self.metadata.version,
            self.metadata.checksum_complement,
            self.metadata.header_checksum,
            self.calculated_checksum,
            hexdump::render_canonical(&self.header_bytes, self.header_address),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::RomMetadata;

    fn sample_report() -> RomReport {
        RomReport {
            source_name: "game.sfc".to_string(),
            smc_header: false,
            smc_offset: 0,
            bank: Bank::LoRom,
            header_address: 0x7FC0,
            metadata: RomMetadata {
                game_title: "TEST GAME".to_string(),
                rom_mapping: "LoROM".to_string(),
                rom_type: "ROM".to_string(),
                rom_size: 8,
                sram_size: 64,
                country: "USA".to_string(),
                licensee: "Nintendo".to_string(),
                version: 0,
                checksum_complement: "5555".to_string(),
                header_checksum: "aaaa".to_string(),
            },
            calculated_checksum: "aaaa".to_string(),
            header_bytes: [0u8; HEADER_SIZE],
        }
    }

    #[test]
    fn test_print_field_order() {
        let output = sample_report().print();
        let labels = [
            "Game Title:",
            "SMC Header:",
            "Rom Mapping:",
            "Rom Type:",
            "Rom Size:",
            "SRAM Size:",
            "Country:",
            "Licensee:",
            "Game Version:",
            "Checksum Complement:",
            "Specified Checksum:",
            "Calculated checksum:",
        ];
        let mut last = 0;
        for label in labels {
            let pos = output.find(label).unwrap_or_else(|| panic!("missing {}", label));
            assert!(pos >= last, "{} out of order", label);
            last = pos;
        }
        assert!(output.contains("Rom Size: 8 MegaBits"));
        assert!(output.contains("SRAM Size: 64 Kilobits"));
        assert!(output.contains("SMC Header: No"));
    }

    #[test]
    fn test_print_includes_header_dump_at_address() {
        let output = sample_report().print();
        assert!(output.contains("0007fc0  "));
        // 64 header bytes make exactly four dump rows.
        assert_eq!(output.lines().filter(|l| l.contains('|')).count(), 4);
    }

    #[test]
    fn test_json_serialization_flattens_metadata() {
        let json = serde_json::to_string_pretty(&sample_report()).unwrap();
        assert!(json.contains("\"game_title\": \"TEST GAME\""));
        assert!(json.contains("\"calculated_checksum\": \"aaaa\""));
        // Raw header bytes are not part of the JSON surface.
        assert!(!json.contains("header_bytes"));
    }
}
