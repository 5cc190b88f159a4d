use std::str::FromStr;

use crate::object::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("invalid UUID")]
    InvalidFormat,
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

impl Uuid {
    /// Decodes a UUID from its raw 16 byte form. Any other length is
    /// rejected; the bytes themselves are taken as-is, version and variant
    /// included.
    pub fn from_slice(bytes: &[u8]) -> Result<Uuid, ParseError> {
        let bytes: [u8; 16] = bytes.try_into().map_err(|_| ParseError::InvalidFormat)?;
        Ok(Uuid::from_bytes(bytes))
    }

    /// Decodes a UUID from the hyphenated 36 character form, in either
    /// case. The length and the four hyphen positions must match exactly;
    /// a non-hex digit anywhere else surfaces the hex decoder's error.
    pub fn parse_str(text: &str) -> Result<Uuid, ParseError> {
        let text = text.as_bytes();
        if text.len() != 36 {
            return Err(ParseError::InvalidFormat);
        }
        if text[8] != b'-' || text[13] != b'-' || text[18] != b'-' || text[23] != b'-' {
            return Err(ParseError::InvalidFormat);
        }

        let mut hexed = [0; 32];
        hexed[..8].copy_from_slice(&text[..8]);
        hexed[8..12].copy_from_slice(&text[9..13]);
        hexed[12..16].copy_from_slice(&text[14..18]);
        hexed[16..20].copy_from_slice(&text[19..23]);
        hexed[20..].copy_from_slice(&text[24..]);

        let mut bytes = [0; 16];
        hex::decode_to_slice(hexed, &mut bytes)?;
        Ok(Uuid::from_bytes(bytes))
    }
}

impl FromStr for Uuid {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Uuid, ParseError> {
        Uuid::parse_str(text)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = ParseError;

    fn try_from(bytes: &[u8]) -> Result<Uuid, ParseError> {
        Uuid::from_slice(bytes)
    }
}
