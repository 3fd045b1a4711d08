use nom::bytes::complete::take;
use nom::number::complete::{be_u16, be_u8};
use nom::{Err, IResult};

use crate::message::ExtensionType;
use crate::Error;

/// DTLS-SRTP protection profile identifiers, RFC 5764 Section 4.1.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrtpProfileId {
    SrtpAes128CmSha1_80, // 0x0001
    SrtpAeadAes128Gcm,   // 0x0007
    Unknown(u16),
}

impl Default for SrtpProfileId {
    fn default() -> Self {
        Self::Unknown(0)
    }
}

impl SrtpProfileId {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x0001 => SrtpProfileId::SrtpAes128CmSha1_80,
            0x0007 => SrtpProfileId::SrtpAeadAes128Gcm,
            _ => SrtpProfileId::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            SrtpProfileId::SrtpAes128CmSha1_80 => 0x0001,
            SrtpProfileId::SrtpAeadAes128Gcm => 0x0007,
            SrtpProfileId::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], SrtpProfileId, Error> {
        let (input, value) = be_u16(input)?;
        Ok((input, SrtpProfileId::from_u16(value)))
    }
}

/// use_srtp extension, RFC 5764.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseSrtpExtension<'a> {
    pub profiles: Vec<SrtpProfileId>,
    /// MKI value, usually empty.
    pub mki: &'a [u8],
}

impl<'a> UseSrtpExtension<'a> {
    pub fn new(profiles: Vec<SrtpProfileId>, mki: &'a [u8]) -> Self {
        UseSrtpExtension { profiles, mki }
    }

    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], UseSrtpExtension<'a>, Error> {
        let (input, extension_type) = ExtensionType::parse(input)?;
        if extension_type != ExtensionType::UseSrtp {
            return Err(Err::Failure(Error::InvalidExtensionType));
        }
        let (input, ext_len) = be_u16(input)?;
        let (input, ext_data) = take(ext_len)(input)?;

        let (profiles_input, profiles_len) = be_u16(ext_data)?;
        let (mki_input, mut profiles_data) = take(profiles_len)(profiles_input)?;

        let mut profiles = Vec::new();
        while !profiles_data.is_empty() {
            let (rest, profile) = SrtpProfileId::parse(profiles_data)?;
            profiles.push(profile);
            profiles_data = rest;
        }

        let (mki_input, mki_len) = be_u8(mki_input)?;
        let (_, mki) = take(mki_len)(mki_input)?;

        Ok((input, UseSrtpExtension { profiles, mki }))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        let profiles_len = (self.profiles.len() * 2) as u16;
        let ext_len = 2 + profiles_len as usize + 1 + self.mki.len();

        output.extend_from_slice(&ExtensionType::UseSrtp.as_u16().to_be_bytes());
        output.extend_from_slice(&(ext_len as u16).to_be_bytes());
        output.extend_from_slice(&profiles_len.to_be_bytes());
        for profile in &self.profiles {
            output.extend_from_slice(&profile.as_u16().to_be_bytes());
        }
        output.push(self.mki.len() as u8);
        output.extend_from_slice(self.mki);
    }
}
