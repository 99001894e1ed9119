//! Locating and validating the embedded cartridge header.
//!
//! The 64-byte header lives at the end of the first LoROM bank (0x7FC0) or the
//! first HiROM bank (0xFFC0), shifted by the copier header size when one is
//! present. A candidate window is accepted when its declared checksum and
//! complement OR together to 0xFFFF and its mapping mode byte belongs to the
//! candidate bank's known set of modes.
//!
//! Header layout referenced here:
//! <https://en.wikibooks.org/wiki/Super_NES_Programming/SNES_memory_map>

use std::io::{self, Read, Seek};

use log::debug;
use serde::Serialize;

use crate::reader;

/// Size of the embedded cartridge header in bytes.
pub const HEADER_SIZE: usize = 64;

/// Window offset of the mapping mode byte.
pub const MAPPING_MODE_OFFSET: usize = 21;

const LOROM_BASE: u64 = 0x7FC0;
const HIROM_BASE: u64 = 0xFFC0;

/// The two candidate memory-mapping layouts a header may be located for.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Bank {
    LoRom,
    HiRom,
}

impl Bank {
    /// Fixed evaluation order. HiROM is probed second, so when both windows
    /// independently validate the HiROM header wins.
    pub const PROBE_ORDER: [Bank; 2] = [Bank::LoRom, Bank::HiRom];

    /// Byte offset of the header in a file with no copier header.
    pub fn base(self) -> u64 {
        match self {
            Bank::LoRom => LOROM_BASE,
            Bank::HiRom => HIROM_BASE,
        }
    }

    /// Mapping mode bytes considered valid for this bank layout, covering the
    /// plain, FastROM, and Ex/SA-1 sub-variants.
    pub fn mapping_whitelist(self) -> &'static [u8] {
        match self {
            Bank::LoRom => &[32, 48, 50],
            Bank::HiRom => &[33, 35, 49, 53],
        }
    }
}

/// A header window that passed validation, with its absolute file address.
#[derive(Debug, PartialEq, Clone)]
pub struct AcceptedHeader {
    pub bytes: [u8; HEADER_SIZE],
    pub address: u64,
    pub bank: Bank,
}

/// Extracts the declared (complement, checksum) pair from a header window.
/// Both are little-endian: complement at window bytes 28-29, checksum at 30-31.
pub fn checksum_pair(window: &[u8; HEADER_SIZE]) -> (u16, u16) {
    let complement = u16::from_le_bytes([window[28], window[29]]);
    let checksum = u16::from_le_bytes([window[30], window[31]]);
    (complement, checksum)
}

/// The header validity test: complement OR checksum must be 0xFFFF.
///
/// Note this is a bitwise OR, not the arithmetic identity
/// `checksum + complement == 0xFFFF`, so it also accepts pairs whose set bits
/// merely cover each other. Kept as-is; real carts pass either test.
pub fn pair_is_consistent(complement: u16, checksum: u16) -> bool {
    complement | checksum == 0xFFFF
}

/// Probes both bank candidates and returns the accepted header, or `None` when
/// neither window validates. A window that would extend past the end of the
/// file is a failed candidate, not an error.
pub fn locate_header<R: Read + Seek>(
    reader: &mut R,
    smc_offset: u64,
) -> io::Result<Option<AcceptedHeader>> {
    let mut accepted = None;

    for bank in Bank::PROBE_ORDER {
        let address = bank.base() + smc_offset;
        let mut window = [0u8; HEADER_SIZE];
        if !reader::read_exact_at(reader, address, &mut window)? {
            debug!("[-] {:?} window at 0x{:06x} is past EOF", bank, address);
            continue;
        }

        let (complement, checksum) = checksum_pair(&window);
        if !pair_is_consistent(complement, checksum) {
            debug!(
                "[-] {:?} checksum pair {:04x}/{:04x} is inconsistent",
                bank, complement, checksum
            );
            continue;
        }

        let mapping_mode = window[MAPPING_MODE_OFFSET];
        if !bank.mapping_whitelist().contains(&mapping_mode) {
            debug!("[-] {:?} mapping mode 0x{:02x} not valid for bank", bank, mapping_mode);
            continue;
        }

        debug!("[+] Accepted {:?} header at 0x{:06x}", bank, address);
        // A later candidate overwrites an earlier one.
        accepted = Some(AcceptedHeader {
            bytes: window,
            address,
            bank,
        });
    }

    Ok(accepted)
}
