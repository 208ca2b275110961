use nom::bytes::complete::take;
use nom::combinator::{map, map_res};
use nom::multi::{fold_many1, many1};
use nom::sequence::pair;
use nom::IResult;

use crate::digit::decode_hex;

/// Accept two hex digits and convert them to a `u8`.
pub fn hex_byte(input: &[u8]) -> IResult<&[u8], u8> {
    map_res(take(2usize), |digits: &[u8]| {
        decode_hex(digits).map(|v| v as u8)
    })(input)
}

/// Accept four hex digits and convert them to a big-endian `u16`.
pub fn hex_u16(input: &[u8]) -> IResult<&[u8], u16> {
    map(pair(hex_byte, hex_byte), |(hi, lo)| {
        (u16::from(hi) << 8) | u16::from(lo)
    })(input)
}

/// Accept eight hex digits and convert them to a big-endian `u32`.
pub fn hex_u32(input: &[u8]) -> IResult<&[u8], u32> {
    map(pair(hex_u16, hex_u16), |(hi, lo)| {
        (u32::from(hi) << 16) | u32::from(lo)
    })(input)
}

/// Accept eight hex digits and convert them to a big-endian `i32`.
/// The digits give the two's-complement bit pattern.
pub fn hex_i32(input: &[u8]) -> IResult<&[u8], i32> {
    map(hex_u32, |v| v as i32)(input)
}

/// Parse a big-endian hex sequence as a number.
pub fn hex_number(input: &[u8]) -> IResult<&[u8], u64> {
    fold_many1(hex_byte, || 0u64, |acc, item| {
        acc * 256 + u64::from(item)
    })(input)
}

/// Parse a sequence of paired hex digits into a vector.
pub fn hex_data(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    many1(hex_byte)(input)
}
