//! SMC copier header detection.
//!
//! Some third-party copier hardware prepends an extra header to ROM dumps.
//! There is no magic signature; the header size is the file length modulo 1024.
//! A result of 0 means no copier header. Any other value is used verbatim as a
//! byte offset, even when it is not the conventional 512.

/// Returns the size in bytes of the copier header for a file of `file_len` bytes.
pub fn smc_offset(file_len: u64) -> u64 {
    file_len % 1024
}
