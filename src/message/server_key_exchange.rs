use nom::bytes::complete::take;
use nom::number::complete::be_u8;
use nom::IResult;

use crate::message::{DigitallySigned, NamedGroup};
use crate::Error;

/// ECCurveType, RFC 8422 Section 5.4. Only named_curve is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    NamedCurve, // 0x03
    Unknown(u8),
}

impl Default for CurveType {
    fn default() -> Self {
        Self::Unknown(0)
    }
}

impl CurveType {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x03 => CurveType::NamedCurve,
            _ => CurveType::Unknown(value),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            CurveType::NamedCurve => 0x03,
            CurveType::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], CurveType, Error> {
        let (input, value) = be_u8(input)?;
        Ok((input, CurveType::from_u8(value)))
    }
}

/// ServerKeyExchange in the ECDHE shape: curve parameters, the server's
/// ephemeral public key, and a signature over them. The signature is
/// absent for anonymous suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerKeyExchange<'a> {
    pub curve_type: CurveType,
    pub named_group: NamedGroup,
    pub public_key: &'a [u8],
    pub signature: Option<DigitallySigned<'a>>,
}

impl<'a> ServerKeyExchange<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], ServerKeyExchange<'a>, Error> {
        let (input, curve_type) = CurveType::parse(input)?;
        let (input, named_group) = NamedGroup::parse(input)?;
        let (input, key_len) = be_u8(input)?;
        let (input, public_key) = take(key_len)(input)?;

        let (input, signature) = if input.is_empty() {
            (input, None)
        } else {
            let (input, signed) = DigitallySigned::parse(input)?;
            (input, Some(signed))
        };

        Ok((
            input,
            ServerKeyExchange {
                curve_type,
                named_group,
                public_key,
                signature,
            },
        ))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.push(self.curve_type.as_u8());
        output.extend_from_slice(&self.named_group.as_u16().to_be_bytes());
        output.push(self.public_key.len() as u8);
        output.extend_from_slice(self.public_key);
        if let Some(signature) = &self.signature {
            signature.serialize(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{HashAlgorithm, SignatureAlgorithm, SignatureAndHashAlgorithm};

    const MESSAGE: &[u8] = &[
        0x03, // named_curve
        0x00, 0x1d, // x25519
        0x03, 0x09, 0x08, 0x07, // public key
        0x04, 0x03, // sha256 / ecdsa
        0x00, 0x02, 0xaa, 0xbb, // signature
    ];

    #[test]
    fn roundtrip() {
        let (rest, exchange) = ServerKeyExchange::parse(MESSAGE).unwrap();
        assert!(rest.is_empty());
        assert_eq!(exchange.curve_type, CurveType::NamedCurve);
        assert_eq!(exchange.named_group, NamedGroup::X25519);
        assert_eq!(exchange.public_key, &[0x09, 0x08, 0x07]);
        assert_eq!(
            exchange.signature,
            Some(DigitallySigned {
                algorithm: SignatureAndHashAlgorithm::new(
                    HashAlgorithm::SHA256,
                    SignatureAlgorithm::ECDSA
                ),
                signature: &[0xaa, 0xbb],
            })
        );

        let mut serialized = Vec::new();
        exchange.serialize(&mut serialized);
        assert_eq!(serialized, MESSAGE);
    }

    #[test]
    fn unsigned_roundtrip() {
        let unsigned = &MESSAGE[..7];
        let (rest, exchange) = ServerKeyExchange::parse(unsigned).unwrap();
        assert!(rest.is_empty());
        assert!(exchange.signature.is_none());

        let mut serialized = Vec::new();
        exchange.serialize(&mut serialized);
        assert_eq!(serialized, unsigned);
    }

    #[test]
    fn truncated_key() {
        assert!(ServerKeyExchange::parse(&MESSAGE[..5]).is_err());
    }
}
