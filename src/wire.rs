#![deny(missing_docs)]

use crate::digit::{decode_hex, nibble_to_hex_digit, HexResult};

/// Parse two hex digits (high then low) as an unsigned byte.
pub fn parse_byte(digits: &[u8; 2]) -> HexResult<u8> {
    Ok(decode_hex(digits)? as u8)
}

/// Parse four hex digits as a big-endian unsigned 16-bit value.
pub fn parse_u16(digits: &[u8; 4]) -> HexResult<u16> {
    Ok(decode_hex(digits)? as u16)
}

/// Parse eight hex digits as a big-endian unsigned 32-bit value.
pub fn parse_u32(digits: &[u8; 8]) -> HexResult<u32> {
    Ok(decode_hex(digits)? as u32)
}

/// Parse eight hex digits as a signed 32-bit value.  The digits give
/// the two's-complement bit pattern, so `"FFFFFFFF"` is -1; there is
/// no separate sign syntax.
pub fn parse_i32(digits: &[u8; 8]) -> HexResult<i32> {
    Ok(parse_u32(digits)? as i32)
}

/// Render an unsigned byte as two uppercase hex digits, high nibble
/// first.
pub fn render_byte(val: u8) -> [u8; 2] {
    [nibble_to_hex_digit(val >> 4), nibble_to_hex_digit(val)]
}

/// Render an unsigned 16-bit value as four uppercase hex digits, high
/// byte first.
pub fn render_u16(val: u16) -> [u8; 4] {
    let hi = render_byte((val >> 8) as u8);
    let lo = render_byte(val as u8);
    [hi[0], hi[1], lo[0], lo[1]]
}

/// Render an unsigned 32-bit value as eight uppercase hex digits, high
/// 16 bits first.
pub fn render_u32(val: u32) -> [u8; 8] {
    let hi = render_u16((val >> 16) as u16);
    let lo = render_u16(val as u16);
    [hi[0], hi[1], hi[2], hi[3], lo[0], lo[1], lo[2], lo[3]]
}
