use nom::bytes::complete::take;
use nom::number::complete::be_u16;
use nom::IResult;

use crate::message::SignatureAndHashAlgorithm;
use crate::Error;

/// DigitallySigned, RFC 5246 Section 4.7: the algorithm pair followed by
/// the u16-length signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitallySigned<'a> {
    pub algorithm: SignatureAndHashAlgorithm,
    pub signature: &'a [u8],
}

impl<'a> DigitallySigned<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], DigitallySigned<'a>, Error> {
        let (input, algorithm) = SignatureAndHashAlgorithm::parse(input)?;
        let (input, sig_len) = be_u16(input)?;
        let (input, signature) = take(sig_len)(input)?;

        Ok((
            input,
            DigitallySigned {
                algorithm,
                signature,
            },
        ))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(&self.algorithm.as_u16().to_be_bytes());
        output.extend_from_slice(&(self.signature.len() as u16).to_be_bytes());
        output.extend_from_slice(self.signature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{HashAlgorithm, SignatureAlgorithm};

    const MESSAGE: &[u8] = &[
        0x04, 0x03, // sha256 / ecdsa
        0x00, 0x03, // signature length
        0x01, 0x02, 0x03, // signature
    ];

    #[test]
    fn roundtrip() {
        let (rest, signed) = DigitallySigned::parse(MESSAGE).unwrap();
        assert!(rest.is_empty());
        assert_eq!(signed.algorithm.hash, HashAlgorithm::SHA256);
        assert_eq!(signed.algorithm.signature, SignatureAlgorithm::ECDSA);
        assert_eq!(signed.signature, &[0x01, 0x02, 0x03]);

        let mut serialized = Vec::new();
        signed.serialize(&mut serialized);
        assert_eq!(serialized, MESSAGE);
    }

    #[test]
    fn truncated_signature() {
        assert!(DigitallySigned::parse(&MESSAGE[..5]).is_err());
    }
}
