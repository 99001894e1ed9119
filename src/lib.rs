//! Analyzer for SNES cartridge ROM images.
//!
//! Locates the embedded 64-byte cartridge header, validates it against the
//! LoROM and HiROM bank layouts, decodes its metadata fields, and computes an
//! independent whole-file checksum for comparison with the declared one.
//!
//! My two main sources for the header format are:
//! <https://en.wikibooks.org/wiki/Super_NES_Programming/SNES_memory_map>
//! <http://www.emulatronia.com/doctec/consolas/snes/sneskart.html#embededcartridge>

pub mod checksum;
pub mod error;
pub mod header;
pub mod hexdump;
pub mod metadata;
pub mod reader;
pub mod report;
pub mod smc;

use std::fs::File;

use log::debug;

use crate::error::RomInfoError;
use crate::report::RomReport;

/// Analyzes the ROM image at `path` and returns the assembled report.
///
/// The only failure modes are I/O errors and the absence of a valid header at
/// either bank location. Unknown categorical bytes decode to sentinel values
/// and do not fail the analysis.
pub fn analyze_rom_file(path: &str) -> Result<RomReport, RomInfoError> {
    let mut file = File::open(path)?;
    let file_len = file.metadata()?.len();

    let smc_offset = smc::smc_offset(file_len);
    if smc_offset > 0 {
        debug!("[*] Copier header detected ({} bytes). Offsetting reads...", smc_offset);
    }

    let header =
        header::locate_header(&mut file, smc_offset)?.ok_or(RomInfoError::NoValidHeader)?;
    let calculated = checksum::calculate(&mut file, smc_offset)?;
    let metadata = metadata::decode(&header);

    Ok(RomReport {
        source_name: path.to_string(),
        smc_header: smc_offset > 0,
        smc_offset,
        bank: header.bank,
        header_address: header.address,
        metadata,
        calculated_checksum: format!("{:04x}", calculated),
        header_bytes: header.bytes,
    })
}
