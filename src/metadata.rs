//! Decoding the accepted 64-byte header into cartridge metadata.
//!
//! Every field lives at a fixed offset within the window. Categorical bytes
//! (mapping mode, rom type, country, licensee) go through immutable lookup
//! tables built once at first use; a byte with no table entry decodes to an
//! explicit unknown sentinel rather than an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::header::{AcceptedHeader, MAPPING_MODE_OFFSET};

/// Mapping mode byte to layout description. The mode byte is close to a
/// bitmask (bit 0 hi/lo, bit 4 FastROM) but some chip variants such as SA-1
/// do not resolve cleanly from the bits, so a table is used instead.
static MAPPING_MODES: LazyLock<HashMap<u8, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (32, "LoROM"),
        (33, "HiRom"),
        (35, "SA-1 ROM"),
        (48, "LoROM + FastROM"),
        (49, "HiRom + FastROM"),
        (50, "ExLoROM"),
        (53, "ExHiRom"),
    ])
});

static ROM_TYPES: LazyLock<HashMap<u8, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "ROM"),
        (1, "ROM and RAM"),
        (2, "ROM and Save RAM"),
        (3, "ROM and DSP1 chip"),
        (4, "ROM, RAM, and DSP1 Chip"),
        (5, "ROM, Save RAM and DSP1 Chip"),
        (19, "ROM and Super FX chip"),
        (227, "ROM, RAM and GameBoy data"),
        (246, "ROM and DSP2 chip"),
    ])
});

static COUNTRIES: LazyLock<HashMap<u8, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "Japan"),
        (1, "USA"),
        (2, "Australia, Europe, Oceania, and Asia"),
        (3, "Sweden"),
        (4, "Finland"),
        (5, "Denmark"),
        (6, "France"),
        (7, "Holland"),
        (8, "Spain"),
        (9, "Germany, Austria, and Switzerland"),
        (10, "Italy"),
        (11, "Hong Kong and China"),
        (12, "Indonesia"),
        (13, "Korea"),
    ])
});

static LICENSEES: LazyLock<HashMap<u8, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (1, "Nintendo"),
        (3, "Imagineer-Zoom"),
        (5, "Zamuse"),
        (6, "Falcom"),
        (8, "Capcom"),
        (9, "HOT-B"),
        (10, "Jaleco"),
        (11, "Coconuts"),
        (12, "Rage Software"),
        (14, "Technos"),
        (15, "Mebio Software"),
        (18, "Gremlin Graphics"),
        (19, "Electronic Arts"),
        (21, "COBRA Team"),
        (22, "Human/Field"),
        (23, "KOEI"),
        (24, "Hudson Soft"),
        (26, "Yanoman"),
        (28, "Tecmo"),
        (30, "Open System"),
        (31, "Virgin Games"),
        (32, "KSS"),
        (33, "Sunsoft"),
        (34, "POW"),
        (35, "Micro World"),
        (38, "Enix"),
        (39, "Loriciel/Electro Brain"),
        (40, "Kemco"),
        (41, "Seta Co.,Ltd."),
        (45, "Visit Co.,Ltd."),
        (49, "Carrozzeria"),
        (50, "Dynamic"),
        (51, "Nintendo"),
        (52, "Magifact"),
        (53, "Hect"),
        (60, "Empire Software"),
        (61, "Loriciel"),
        (64, "Seika Corp."),
        (65, "UBI Soft"),
        (70, "System 3"),
        (71, "Spectrum Holobyte"),
        (73, "Irem"),
        (75, "Raya Systems/Sculptured Software"),
        (76, "Renovation Products"),
        (77, "Malibu Games/Black Pearl"),
        (79, "U.S. Gold"),
        (80, "Absolute Entertainment"),
        (81, "Acclaim"),
        (82, "Activision"),
        (83, "American Sammy"),
        (84, "GameTek"),
        (85, "Hi Tech Expressions"),
        (86, "LJN Toys"),
        (90, "Mindscape"),
        (93, "Tradewest"),
        (95, "American Softworks Corp."),
        (96, "Titus"),
        (97, "Virgin Interactive Entertainment"),
        (98, "Maxis"),
        (103, "Ocean"),
        (105, "Electronic Arts"),
        (107, "Laser Beam"),
        (110, "Elite"),
        (111, "Electro Brain"),
        (112, "Infogrames"),
        (113, "Interplay"),
        (114, "LucasArts"),
        (115, "Parker Brothers"),
        (117, "STORM"),
        (120, "THQ Software"),
        (121, "Accolade Inc."),
        (122, "Triffix Entertainment"),
        (124, "Microprose"),
        (127, "Kemco"),
        (128, "Misawa"),
        (129, "Teichio"),
        (130, "Namco Ltd."),
        (131, "Lozc"),
        (132, "Koei"),
        (134, "Tokuma Shoten Intermedia"),
        (136, "DATAM-Polystar"),
        (139, "Bullet-Proof Software"),
        (140, "Vic Tokai"),
        (142, "Character Soft"),
        (143, "I'Max"),
        (144, "Takara"),
        (145, "CHUN Soft"),
        (146, "Video System Co., Ltd."),
        (147, "BEC"),
        (149, "Varie"),
        (151, "Kaneco"),
        (153, "Pack in Video"),
        (154, "Nichibutsu"),
        (155, "TECMO"),
        (156, "Imagineer Co."),
        (160, "Telenet"),
        (164, "Konami"),
        (165, "K.Amusement Leasing Co."),
        (167, "Takara"),
        (169, "Technos Jap."),
        (170, "JVC"),
        (172, "Toei Animation"),
        (173, "Toho"),
        (175, "Namco Ltd."),
        (177, "ASCII Co. Activison"),
        (178, "BanDai America"),
        (180, "Enix"),
        (182, "Halken"),
        (186, "Culture Brain"),
        (187, "Sunsoft"),
        (188, "Toshiba EMI"),
        (189, "Sony Imagesoft"),
        (191, "Sammy"),
        (192, "Taito"),
        (194, "Kemco"),
        (195, "Square"),
        (196, "Tokuma Soft"),
        (197, "Data East"),
        (198, "Tonkin House"),
        (200, "KOEI"),
        (202, "Konami USA"),
        (203, "NTVIC"),
        (205, "Meldac"),
        (206, "Pony Canyon"),
        (207, "Sotsu Agency/Sunrise"),
        (208, "Disco/Taito"),
        (209, "Sofel"),
        (210, "Quest Corp."),
        (211, "Sigma"),
        (214, "Naxat"),
        (216, "Capcom Co., Ltd."),
        (217, "Banpresto"),
        (218, "Tomy"),
        (219, "Acclaim"),
        (221, "NCS"),
        (222, "Human Entertainment"),
        (223, "Altron"),
        (224, "Jaleco"),
        (226, "Yutaka"),
        (228, "T&ESoft"),
        (229, "EPOCH Co.,Ltd."),
        (231, "Athena"),
        (232, "Asmik"),
        (233, "Natsume"),
        (234, "King Records"),
        (235, "Atlus"),
        (236, "Sony Music Entertainment"),
        (238, "IGS"),
        (241, "Motown Software"),
        (242, "Left Field Entertainment"),
        (243, "Beam Software"),
        (244, "Tec Magik"),
        (249, "Cybersoft"),
        (255, "Hudson Soft"),
    ])
});

/// Decoded header fields.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct RomMetadata {
    /// The game title extracted from the header (bytes 0-19, padding trimmed).
    pub game_title: String,
    /// Human-readable memory mapping layout.
    pub rom_mapping: String,
    /// Cartridge hardware description (RAM, save RAM, enhancement chips).
    pub rom_type: String,
    /// ROM size in megabits.
    pub rom_size: u64,
    /// Save RAM size in kilobits.
    pub sram_size: u64,
    /// Country / region of release.
    pub country: String,
    /// Publisher name.
    pub licensee: String,
    /// Raw version byte.
    pub version: u8,
    /// Declared checksum complement, hex, high byte first.
    pub checksum_complement: String,
    /// Declared header checksum, hex, high byte first.
    pub header_checksum: String,
}

fn lookup(table: &HashMap<u8, &'static str>, code: u8) -> String {
    match table.get(&code) {
        Some(name) => name.to_string(),
        None => format!("Unknown (0x{:02X})", code),
    }
}

/// ROM size in megabits from the size byte: `1 << (byte - 7)`.
/// No bounds check; out-of-range bytes yield a degenerate shifted value.
pub fn rom_size_megabits(byte: u8) -> u64 {
    1u64.wrapping_shl(u32::from(byte).wrapping_sub(7))
}

/// SRAM size in kilobits from the size byte: `1 << (byte + 3)`.
/// A zero byte yields 8, not 0.
pub fn sram_size_kilobits(byte: u8) -> u64 {
    1u64.wrapping_shl(u32::from(byte) + 3)
}

/// Decodes the fixed-offset fields of an accepted header window.
pub fn decode(header: &AcceptedHeader) -> RomMetadata {
    let b = &header.bytes;

    // Title bytes pass through as-is; they are not guaranteed to be ASCII.
    let game_title: String = b[0..20]
        .iter()
        .map(|&c| c as char)
        .collect::<String>()
        .trim_end_matches([' ', '\0'])
        .to_string();

    RomMetadata {
        game_title,
        rom_mapping: lookup(&MAPPING_MODES, b[MAPPING_MODE_OFFSET]),
        rom_type: lookup(&ROM_TYPES, b[22]),
        rom_size: rom_size_megabits(b[23]),
        sram_size: sram_size_kilobits(b[24]),
        country: lookup(&COUNTRIES, b[25]),
        licensee: lookup(&LICENSEES, b[26]),
        version: b[27],
        // Hex strings render the high byte first, i.e. reversed relative to
        // the little-endian header order.
        checksum_complement: format!("{:02x}{:02x}", b[29], b[28]),
        header_checksum: format!("{:02x}{:02x}", b[31], b[30]),
    }
}
