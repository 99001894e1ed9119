//! Canonical hex+ASCII rendering of a byte range.
//!
//! Rows of sixteen bytes: a 7-digit hex address, the byte values in hex with a
//! visual gap after the eighth, and an ASCII sidebar between pipes. The final
//! partial row is padded so the sidebar stays at the same column.

/// Sidebar character for a byte: printable ASCII as itself, everything else `.`.
pub fn ascii_char(byte: u8) -> char {
    if (32..=126).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

/// Renders `bytes` as canonical hex rows, labelling the first byte with
/// `address` and counting up from there. Produces one `\n`-terminated row per
/// sixteen bytes (or part thereof); an empty input renders as an empty string.
pub fn render_canonical(bytes: &[u8], address: u64) -> String {
    let mut out = String::new();
    let mut ascii_line = String::new();
    let mut row = 0;
    let mut addr = address;

    for &byte in bytes {
        if row == 0 {
            out.push_str(&format!("{:07x}  ", addr));
        }
        out.push_str(&format!("{:02x} ", byte));
        ascii_line.push(ascii_char(byte));
        row += 1;
        if row == 8 {
            out.push(' ');
        }
        if row == 16 {
            out.push_str(&format!(" |{}|\n", ascii_line));
            ascii_line.clear();
            row = 0;
        }
        addr += 1;
    }

    // Pad a trailing partial row so the sidebar column still aligns.
    if row != 0 {
        for _ in row..16 {
            out.push_str("   ");
        }
        if row < 8 {
            out.push(' ');
        }
        out.push_str(&format!(" |{}|\n", ascii_line));
    }

    out
}
