//! String forms of addresses and byte buffers.
//!
//! These helpers are not used by the decoder itself. They accept plain byte slices, for example
//! the bytes of a [`View`], and fail when the slice does not have the exact length of the address
//! kind requested. The address types of the `wire` module print in the same formats.
//!
//! ```
//! use framedecode::format;
//!
//! assert_eq!(format::mac(&[0x02, 0, 0, 0, 0, 0x01]).unwrap(), "02:00:00:00:00:01");
//! assert_eq!(format::ipv4(&[192, 168, 0, 1]).unwrap(), "192.168.0.1");
//! assert!(format::ipv4(&[192, 168, 0]).is_err());
//! assert_eq!(format::from_hex("0a0b0").unwrap(), [0x0a, 0x0b, 0x00]);
//! ```
//!
//! [`View`]: ../wire/struct.View.html
use core::fmt;

use crate::wire::{EthernetAddress, Ipv4Address, Ipv6Address};

/// The error type of the formatting helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// The byte slice does not have the length of the requested address.
    Length {
        /// The length of the address kind.
        expected: usize,
        /// The length of the slice that was passed.
        found: usize,
    },
    /// The string contains a character that is not a hexadecimal digit.
    InvalidHex {
        /// The offending character.
        c: char,
        /// Its position in the trimmed input.
        index: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormatError::Length { expected, found } =>
                write!(f, "expected {} bytes, found {}", expected, found),
            FormatError::InvalidHex { c, index } =>
                write!(f, "invalid hex character {:?} at position {}", c, index),
        }
    }
}

impl std::error::Error for FormatError {}

fn exact(bytes: &[u8], expected: usize) -> Result<(), FormatError> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(FormatError::Length { expected, found: bytes.len() })
    }
}

/// Format six bytes as a hardware address, `aa:bb:cc:dd:ee:ff`.
pub fn mac(bytes: &[u8]) -> Result<String, FormatError> {
    exact(bytes, 6)?;
    Ok(EthernetAddress::from_bytes(bytes).to_string())
}

/// Format four bytes as a dotted decimal IPv4 address.
pub fn ipv4(bytes: &[u8]) -> Result<String, FormatError> {
    exact(bytes, 4)?;
    Ok(Ipv4Address::from_bytes(bytes).to_string())
}

/// Format sixteen bytes as eight groups of four lowercase hex digits.
///
/// Runs of zero groups are not compressed, every group is printed with its leading zeros.
pub fn ipv6(bytes: &[u8]) -> Result<String, FormatError> {
    exact(bytes, 16)?;
    Ok(Ipv6Address::from_bytes(bytes).to_string())
}

/// Lowercase hex digits of all bytes, without separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse a string of hex digits into bytes.
///
/// Surrounding whitespace is ignored. The digits are consumed in pairs from the start, an odd
/// trailing digit forms a byte of its own, so `"abc"` parses to `[0xab, 0x0c]`.
pub fn from_hex(src: &str) -> Result<Vec<u8>, FormatError> {
    let src = src.trim();
    let paired = src.len() - src.len() % 2;
    // Only ASCII digits are valid, so any split position inside a multibyte char is an error.
    if !src.is_char_boundary(paired) {
        return Err(first_invalid(src));
    }

    let (pairs, rest) = src.split_at(paired);
    let mut bytes = hex::decode(pairs).map_err(|err| convert(err, src))?;
    if let Some(c) = rest.chars().next() {
        let nibble = c.to_digit(16)
            .ok_or(FormatError::InvalidHex { c, index: paired })?;
        bytes.push(nibble as u8);
    }
    Ok(bytes)
}

fn convert(err: hex::FromHexError, src: &str) -> FormatError {
    match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => FormatError::InvalidHex { c, index },
        _ => first_invalid(src),
    }
}

fn first_invalid(src: &str) -> FormatError {
    src.char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .map(|(index, c)| FormatError::InvalidHex { c, index })
        .unwrap_or(FormatError::InvalidHex { c: '\0', index: src.len() })
}
