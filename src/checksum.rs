//! Whole-file checksum over the cartridge image.
//!
//! Every byte from the copier header boundary to end-of-file is summed and the
//! total reduced modulo 65536. The file is streamed in chunks to bound peak
//! memory; the chunk size has no effect on the result and exists only so the
//! chunk-size-invariance property can be tested directly.

use std::io::{self, Read, Seek, SeekFrom};

const CHUNK_SIZE: usize = 500_000;

/// Computes the 16-bit byte sum of the image from `smc_offset` to EOF.
pub fn calculate<R: Read + Seek>(reader: &mut R, smc_offset: u64) -> io::Result<u16> {
    calculate_with_chunk_size(reader, smc_offset, CHUNK_SIZE)
}

/// Same as [`calculate`] with an explicit chunk size. For any `chunk_size >= 1`
/// the result is identical to summing the range in a single pass.
pub fn calculate_with_chunk_size<R: Read + Seek>(
    reader: &mut R,
    smc_offset: u64,
    chunk_size: usize,
) -> io::Result<u16> {
    reader.seek(SeekFrom::Start(smc_offset))?;
    let mut chunk = vec![0u8; chunk_size];
    let mut total: u64 = 0;
    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        total += chunk[..n].iter().map(|&b| u64::from(b)).sum::<u64>();
    }
    Ok((total & 0xFFFF) as u16)
}
