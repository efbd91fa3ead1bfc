use crate::error::{ParseError, Result};
use crate::limits::Limits;
use crate::types::Component;

/// Check if the input is empty or ASCII whitespace only
pub fn is_blank(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_whitespace())
}

/// Reject a component longer than its limit
pub fn check_length<'a>(component: Component, text: &'a str, limits: &Limits) -> Result<&'a str> {
    if text.len() > limits.get(component) {
        return Err(ParseError::CapacityExceeded(component));
    }
    Ok(text)
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}
