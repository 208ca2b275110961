#![deny(missing_docs)]

use std::fmt;

/// An error raised while decoding ASCII hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// A byte that is not an ASCII hex digit was encountered.  The
    /// offending byte is carried so callers can report it.
    InvalidDigit(u8),
}

/// The result of a hex conversion.
pub type HexResult<T> = Result<T, HexError>;

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::InvalidDigit(b) => {
                write!(f, "invalid hex digit 0x{:02X}", b)
            }
        }
    }
}

impl std::error::Error for HexError {}

/// Convert one ASCII hex digit to its nibble value.  Both uppercase
/// and lowercase digits are accepted; any other byte is an
/// `InvalidDigit` error.
pub fn hex_digit_to_nibble(digit: u8) -> HexResult<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        _ => Err(HexError::InvalidDigit(digit)),
    }
}

/// Convert a nibble value to its uppercase ASCII hex digit.  Only the
/// low four bits of `val` are consulted.
pub fn nibble_to_hex_digit(val: u8) -> u8 {
    let val = val & 0x0F;
    if val <= 9 {
        b'0' + val
    } else {
        b'A' + val - 10
    }
}

/// Decode a big-endian hex sequence.
pub fn decode_hex(seq: &[u8]) -> HexResult<u64> {
    let mut result = 0;
    for &c in seq {
        result = (result << 4) | u64::from(hex_digit_to_nibble(c)?);
    }
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digit_to_nibble() {
        assert_eq!(hex_digit_to_nibble(b'0').unwrap(), 0);
        assert_eq!(hex_digit_to_nibble(b'9').unwrap(), 9);
        assert_eq!(hex_digit_to_nibble(b'A').unwrap(), 10);
        assert_eq!(hex_digit_to_nibble(b'F').unwrap(), 15);
        assert_eq!(hex_digit_to_nibble(b'a').unwrap(), 10);
        assert_eq!(hex_digit_to_nibble(b'f').unwrap(), 15);
        assert_eq!(hex_digit_to_nibble(b'G'),
                   Err(HexError::InvalidDigit(b'G')));
        assert_eq!(hex_digit_to_nibble(b' '),
                   Err(HexError::InvalidDigit(b' ')));
    }

    #[test]
    fn nibble_to_digit() {
        assert_eq!(nibble_to_hex_digit(0), b'0');
        assert_eq!(nibble_to_hex_digit(9), b'9');
        assert_eq!(nibble_to_hex_digit(10), b'A');
        assert_eq!(nibble_to_hex_digit(15), b'F');
        // Only the low nibble counts.
        assert_eq!(nibble_to_hex_digit(0xAF), b'F');
    }

    #[test]
    fn nibble_round_trip() {
        for val in 0..16 {
            assert_eq!(hex_digit_to_nibble(nibble_to_hex_digit(val)).unwrap(),
                       val);
        }
    }

    #[test]
    fn decode_hex() {
        assert_eq!(super::decode_hex(b"000a").unwrap(), 10);
        assert_eq!(super::decode_hex(b"f01").unwrap(), 3841);
        assert_eq!(super::decode_hex(b"hi"),
                   Err(HexError::InvalidDigit(b'h')));
    }
}
