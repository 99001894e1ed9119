//! Offset-seeking binary reads over an open file handle.
//!
//! Two access patterns are needed: a bounded read of a byte range (hex dumps,
//! header probes) and EOF-tolerant exact reads used during header candidate
//! evaluation. Whole-file streaming lives in the checksum module.

use std::io::{self, Read, Seek, SeekFrom};

/// Reads up to `limit` bytes starting at `offset`, or everything to EOF when
/// `limit` is `None`. A short read past the end of the file is not an error;
/// the returned buffer is simply shorter than requested.
pub fn read_range<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    limit: Option<u64>,
) -> io::Result<Vec<u8>> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut data = Vec::new();
    match limit {
        Some(n) => {
            reader.by_ref().take(n).read_to_end(&mut data)?;
        }
        None => {
            reader.read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

/// Fills `buf` with bytes starting at `offset`. Returns `false` when EOF is
/// reached before the buffer is full (the contents of `buf` are then
/// unspecified), `true` when the read completed.
pub fn read_exact_at<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    buf: &mut [u8],
) -> io::Result<bool> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            return Ok(false);
        }
        filled += n;
    }
    Ok(true)
}
