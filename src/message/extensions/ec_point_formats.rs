use nom::bytes::complete::take;
use nom::number::complete::{be_u16, be_u8};
use nom::{Err, IResult};
use tinyvec::ArrayVec;

use crate::message::ExtensionType;
use crate::util::many0;
use crate::Error;

/// EC point format identifiers, RFC 4492 Section 5.1.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcPointFormat {
    #[default]
    Uncompressed, // 0x00
    AnsiX962CompressedPrime, // 0x01
    AnsiX962CompressedChar2, // 0x02
    Unknown(u8),
}

impl EcPointFormat {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x00 => EcPointFormat::Uncompressed,
            0x01 => EcPointFormat::AnsiX962CompressedPrime,
            0x02 => EcPointFormat::AnsiX962CompressedChar2,
            _ => EcPointFormat::Unknown(value),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            EcPointFormat::Uncompressed => 0x00,
            EcPointFormat::AnsiX962CompressedPrime => 0x01,
            EcPointFormat::AnsiX962CompressedChar2 => 0x02,
            EcPointFormat::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], EcPointFormat, Error> {
        let (input, value) = be_u8(input)?;
        Ok((input, EcPointFormat::from_u8(value)))
    }
}

/// ec_point_formats extension, RFC 4492.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPointFormatsExtension {
    // The u8 list length bounds the count, so 256 slots always suffice.
    pub formats: ArrayVec<[EcPointFormat; 256]>,
}

impl EcPointFormatsExtension {
    pub fn new(formats: ArrayVec<[EcPointFormat; 256]>) -> Self {
        EcPointFormatsExtension { formats }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], EcPointFormatsExtension, Error> {
        let (input, extension_type) = ExtensionType::parse(input)?;
        if extension_type != ExtensionType::EcPointFormats {
            return Err(Err::Failure(Error::InvalidExtensionType));
        }
        let (input, ext_len) = be_u16(input)?;
        let (input, ext_data) = take(ext_len)(input)?;

        let (list_input, list_len) = be_u8(ext_data)?;
        let (_, list_data) = take(list_len)(list_input)?;
        let (_, formats) = many0(EcPointFormat::parse)(list_data)?;

        Ok((input, EcPointFormatsExtension { formats }))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(&ExtensionType::EcPointFormats.as_u16().to_be_bytes());
        output.extend_from_slice(&((self.formats.len() + 1) as u16).to_be_bytes());
        output.push(self.formats.len() as u8);
        for format in &self.formats {
            output.push(format.as_u8());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyvec::array_vec;

    const MESSAGE: &[u8] = &[
        0x00, 0x0B, // ExtensionType::EcPointFormats
        0x00, 0x03, // extension length
        0x02, // format list length
        0x00, // uncompressed
        0x01, // ansiX962_compressed_prime
    ];

    #[test]
    fn roundtrip() {
        let formats = array_vec![
            [EcPointFormat; 256] => EcPointFormat::Uncompressed,
            EcPointFormat::AnsiX962CompressedPrime
        ];
        let extension = EcPointFormatsExtension::new(formats);

        let mut serialized = Vec::new();
        extension.serialize(&mut serialized);
        assert_eq!(serialized, MESSAGE);

        let (rest, parsed) = EcPointFormatsExtension::parse(&serialized).unwrap();
        assert_eq!(parsed, extension);

        assert!(rest.is_empty());
    }

    #[test]
    fn list_longer_than_extension_rejected() {
        let mut message = MESSAGE.to_vec();
        message[4] = 0x09; // claims 9 formats inside a 3-byte payload
        assert!(EcPointFormatsExtension::parse(&message).is_err());
    }
}
