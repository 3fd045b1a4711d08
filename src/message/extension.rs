use log::trace;
use nom::number::complete::be_u16;
use nom::{Err, IResult};

use super::extensions::ec_point_formats::EcPointFormatsExtension;
use super::extensions::extended_master_secret::ExtendedMasterSecretExtension;
use super::extensions::server_name::ServerNameExtension;
use super::extensions::signature_algorithms::SignatureAlgorithmsExtension;
use super::extensions::supported_groups::SupportedGroupsExtension;
use super::extensions::use_srtp::UseSrtpExtension;
use crate::Error;

/// The extension type tags this crate knows how to decode.
///
/// The mapping is fixed at compile time. Anything else is carried as
/// `Unknown` and skipped, never decoded, by [`parse_extension_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionType {
    ServerName,
    SupportedGroups,
    EcPointFormats,
    SignatureAlgorithms,
    UseSrtp,
    ExtendedMasterSecret,
    Unknown(u16),
}

impl ExtensionType {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x0000 => ExtensionType::ServerName,
            0x000A => ExtensionType::SupportedGroups,
            0x000B => ExtensionType::EcPointFormats,
            0x000D => ExtensionType::SignatureAlgorithms,
            0x000E => ExtensionType::UseSrtp,
            0x0017 => ExtensionType::ExtendedMasterSecret,
            _ => ExtensionType::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            ExtensionType::ServerName => 0x0000,
            ExtensionType::SupportedGroups => 0x000A,
            ExtensionType::EcPointFormats => 0x000B,
            ExtensionType::SignatureAlgorithms => 0x000D,
            ExtensionType::UseSrtp => 0x000E,
            ExtensionType::ExtendedMasterSecret => 0x0017,
            ExtensionType::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], ExtensionType, Error> {
        let (input, value) = be_u16(input)?;
        Ok((input, ExtensionType::from_u16(value)))
    }
}

/// A decoded hello extension. One variant per known tag; unrecognized
/// tags are dropped during decode and never re-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extension<'a> {
    ServerName(ServerNameExtension<'a>),
    SupportedGroups(SupportedGroupsExtension),
    EcPointFormats(EcPointFormatsExtension),
    SignatureAlgorithms(SignatureAlgorithmsExtension),
    UseSrtp(UseSrtpExtension<'a>),
    ExtendedMasterSecret(ExtendedMasterSecretExtension),
}

impl<'a> Extension<'a> {
    pub fn extension_type(&self) -> ExtensionType {
        match self {
            Extension::ServerName(_) => ExtensionType::ServerName,
            Extension::SupportedGroups(_) => ExtensionType::SupportedGroups,
            Extension::EcPointFormats(_) => ExtensionType::EcPointFormats,
            Extension::SignatureAlgorithms(_) => ExtensionType::SignatureAlgorithms,
            Extension::UseSrtp(_) => ExtensionType::UseSrtp,
            Extension::ExtendedMasterSecret(_) => ExtensionType::ExtendedMasterSecret,
        }
    }

    /// Writes the full record: tag, u16 payload length, payload.
    pub fn serialize(&self, output: &mut Vec<u8>) {
        match self {
            Extension::ServerName(e) => e.serialize(output),
            Extension::SupportedGroups(e) => e.serialize(output),
            Extension::EcPointFormats(e) => e.serialize(output),
            Extension::SignatureAlgorithms(e) => e.serialize(output),
            Extension::UseSrtp(e) => e.serialize(output),
            Extension::ExtendedMasterSecret(e) => e.serialize(output),
        }
    }
}

/// Parses the extension-list block that ends the hello messages.
///
/// The first two bytes declare the length of everything that follows and
/// must match the remaining input exactly. Records with a known tag are
/// handed (from the tag onwards) to the matching typed decoder; records
/// with an unknown tag are skipped by their own declared length. The
/// cursor always advances by the record's declared length, regardless of
/// how many bytes the typed decoder consumed.
pub fn parse_extension_list(buf: &[u8]) -> IResult<&[u8], Vec<Extension>, Error> {
    if buf.len() < 2 {
        return Err(Err::Failure(Error::BufferTooSmall));
    }
    let (rest, declared) = be_u16(buf)?;
    if rest.len() != declared as usize {
        return Err(Err::Failure(Error::LengthMismatch));
    }

    let mut extensions = Vec::new();
    let mut rest = rest;

    while !rest.is_empty() {
        if rest.len() < 2 {
            return Err(Err::Failure(Error::BufferTooSmall));
        }
        let tag = ExtensionType::from_u16(u16::from_be_bytes([rest[0], rest[1]]));

        match tag {
            ExtensionType::ServerName => {
                let (_, e) = ServerNameExtension::parse(rest)?;
                extensions.push(Extension::ServerName(e));
            }
            ExtensionType::SupportedGroups => {
                let (_, e) = SupportedGroupsExtension::parse(rest)?;
                extensions.push(Extension::SupportedGroups(e));
            }
            ExtensionType::EcPointFormats => {
                let (_, e) = EcPointFormatsExtension::parse(rest)?;
                extensions.push(Extension::EcPointFormats(e));
            }
            ExtensionType::SignatureAlgorithms => {
                let (_, e) = SignatureAlgorithmsExtension::parse(rest)?;
                extensions.push(Extension::SignatureAlgorithms(e));
            }
            ExtensionType::UseSrtp => {
                let (_, e) = UseSrtpExtension::parse(rest)?;
                extensions.push(Extension::UseSrtp(e));
            }
            ExtensionType::ExtendedMasterSecret => {
                let (_, e) = ExtendedMasterSecretExtension::parse(rest)?;
                extensions.push(Extension::ExtendedMasterSecret(e));
            }
            ExtensionType::Unknown(value) => {
                trace!("Skipping unknown extension type {}", value);
            }
        }

        if rest.len() < 4 {
            return Err(Err::Failure(Error::BufferTooSmall));
        }
        let record_len = 4 + u16::from_be_bytes([rest[2], rest[3]]) as usize;
        rest = &rest[record_len.min(rest.len())..];
    }

    Ok((rest, extensions))
}

/// Writes the u16 total length followed by each extension's own record.
pub fn serialize_extension_list(extensions: &[Extension], output: &mut Vec<u8>) {
    let mut body = Vec::new();
    for extension in extensions {
        extension.serialize(&mut body);
    }
    output.extend_from_slice(&(body.len() as u16).to_be_bytes());
    output.extend_from_slice(&body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::NamedGroup;

    #[test]
    fn empty_list() {
        let (rest, extensions) = parse_extension_list(&[0x00, 0x00]).unwrap();
        assert!(rest.is_empty());
        assert!(extensions.is_empty());
    }

    #[test]
    fn input_shorter_than_length_field() {
        let err = parse_extension_list(&[0x00]).unwrap_err();
        assert_eq!(Error::from(err), Error::BufferTooSmall);
    }

    #[test]
    fn declared_length_mismatch() {
        // Declares 10 bytes, only 8 follow.
        let mut buf = vec![0x00, 0x0A];
        buf.extend_from_slice(&[0; 8]);
        let err = parse_extension_list(&buf).unwrap_err();
        assert_eq!(Error::from(err), Error::LengthMismatch);
    }

    #[test]
    fn unknown_tag_is_skipped() {
        const MESSAGE: &[u8] = &[
            0x00, 0x11, // total length (17)
            0x27, 0x0F, // unknown tag 9999
            0x00, 0x03, // unknown record length
            0xDE, 0xAD, 0xBE, // unknown record body, never interpreted
            0x00, 0x0A, // ExtensionType::SupportedGroups
            0x00, 0x06, // record length
            0x00, 0x04, // group list length
            0x00, 0x17, 0x00, 0x1D, // secp256r1, x25519
        ];

        let (rest, extensions) = parse_extension_list(MESSAGE).unwrap();
        assert!(rest.is_empty());
        assert_eq!(extensions.len(), 1);

        let Extension::SupportedGroups(e) = &extensions[0] else {
            panic!("Expected SupportedGroups");
        };
        assert_eq!(e.groups, vec![NamedGroup::Secp256r1, NamedGroup::X25519]);
    }

    #[test]
    fn truncated_record_header() {
        // Valid outer length, but the record stops after the tag.
        let buf = &[0x00, 0x02, 0x27, 0x0F];
        let err = parse_extension_list(buf).unwrap_err();
        assert_eq!(Error::from(err), Error::BufferTooSmall);
    }

    #[test]
    fn roundtrip() {
        const MESSAGE: &[u8] = &[
            0x00, 0x0E, // total length
            0x00, 0x0A, // supported_groups
            0x00, 0x06, //
            0x00, 0x04, 0x00, 0x17, 0x00, 0x18, //
            0x00, 0x17, // extended_master_secret
            0x00, 0x00, //
        ];

        let (_, extensions) = parse_extension_list(MESSAGE).unwrap();
        assert_eq!(extensions.len(), 2);

        let mut serialized = Vec::new();
        serialize_extension_list(&extensions, &mut serialized);
        assert_eq!(serialized, MESSAGE);
    }
}
