use nom::bytes::complete::take;
use nom::number::complete::be_u16;
use nom::{Err, IResult};

use crate::message::ExtensionType;
use crate::Error;

/// extended_master_secret extension, RFC 7627. Presence is the whole
/// message; the payload is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtendedMasterSecretExtension;

impl ExtendedMasterSecretExtension {
    pub fn parse(input: &[u8]) -> IResult<&[u8], ExtendedMasterSecretExtension, Error> {
        let (input, extension_type) = ExtensionType::parse(input)?;
        if extension_type != ExtensionType::ExtendedMasterSecret {
            return Err(Err::Failure(Error::InvalidExtensionType));
        }
        let (input, ext_len) = be_u16(input)?;
        let (input, _) = take(ext_len)(input)?;

        Ok((input, ExtendedMasterSecretExtension))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(&ExtensionType::ExtendedMasterSecret.as_u16().to_be_bytes());
        output.extend_from_slice(&0u16.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let mut serialized = Vec::new();
        ExtendedMasterSecretExtension.serialize(&mut serialized);
        assert_eq!(serialized, &[0x00, 0x17, 0x00, 0x00]);

        let (rest, _) = ExtendedMasterSecretExtension::parse(&serialized).unwrap();
        assert!(rest.is_empty());
    }
}
