/// Bytes that end a plain (non-bracketed) host: `:` `/` `?` `#`
const HOST_END_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b':' as usize] = true;
    table[b'/' as usize] = true;
    table[b'?' as usize] = true;
    table[b'#' as usize] = true;
    table
};

/// Check if a byte ends a plain host
pub fn is_host_end(b: u8) -> bool {
    HOST_END_TABLE[b as usize]
}

/// Check if a byte is allowed in a scheme
///
/// Only ASCII letters are accepted; digits, `+`, `-` and `.` are rejected.
pub fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphabetic()
}
