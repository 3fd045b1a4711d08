use nom::bytes::complete::take;
use nom::number::complete::be_u16;
use nom::{Err, IResult};

use crate::message::ExtensionType;
use crate::Error;

/// Named group (elliptic curve) identifiers, RFC 8422 Section 5.1.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedGroup {
    Secp256r1, // 0x0017
    Secp384r1, // 0x0018
    Secp521r1, // 0x0019
    X25519,    // 0x001D
    X448,      // 0x001E
    Unknown(u16),
}

impl Default for NamedGroup {
    fn default() -> Self {
        Self::Unknown(0)
    }
}

impl NamedGroup {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x0017 => NamedGroup::Secp256r1,
            0x0018 => NamedGroup::Secp384r1,
            0x0019 => NamedGroup::Secp521r1,
            0x001D => NamedGroup::X25519,
            0x001E => NamedGroup::X448,
            _ => NamedGroup::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            NamedGroup::Secp256r1 => 0x0017,
            NamedGroup::Secp384r1 => 0x0018,
            NamedGroup::Secp521r1 => 0x0019,
            NamedGroup::X25519 => 0x001D,
            NamedGroup::X448 => 0x001E,
            NamedGroup::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], NamedGroup, Error> {
        let (input, value) = be_u16(input)?;
        Ok((input, NamedGroup::from_u16(value)))
    }
}

/// supported_groups (formerly elliptic_curves) extension, RFC 8422.
///
/// Unrecognized group ids are kept as `Unknown` so a decoded list
/// re-encodes to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedGroupsExtension {
    pub groups: Vec<NamedGroup>,
}

impl SupportedGroupsExtension {
    pub fn new(groups: Vec<NamedGroup>) -> Self {
        SupportedGroupsExtension { groups }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], SupportedGroupsExtension, Error> {
        let (input, extension_type) = ExtensionType::parse(input)?;
        if extension_type != ExtensionType::SupportedGroups {
            return Err(Err::Failure(Error::InvalidExtensionType));
        }
        let (input, ext_len) = be_u16(input)?;
        let (input, ext_data) = take(ext_len)(input)?;

        let (list_input, list_len) = be_u16(ext_data)?;
        let (_, mut list_data) = take(list_len)(list_input)?;

        let mut groups = Vec::new();
        while !list_data.is_empty() {
            let (rest, group) = NamedGroup::parse(list_data)?;
            groups.push(group);
            list_data = rest;
        }

        Ok((input, SupportedGroupsExtension { groups }))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        let list_len = (self.groups.len() * 2) as u16;

        output.extend_from_slice(&ExtensionType::SupportedGroups.as_u16().to_be_bytes());
        output.extend_from_slice(&(list_len + 2).to_be_bytes());
        output.extend_from_slice(&list_len.to_be_bytes());
        for group in &self.groups {
            output.extend_from_slice(&group.as_u16().to_be_bytes());
        }
    }
}
