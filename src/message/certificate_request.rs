use nom::bytes::complete::take;
use nom::number::complete::{be_u16, be_u8};
use nom::IResult;
use tinyvec::ArrayVec;

use crate::message::{ClientCertificateType, DistinguishedName, SignatureAndHashAlgorithm};
use crate::util::many1;
use crate::Error;

/// CertificateRequest: the certificate types, signature algorithms and
/// CA names the server will accept from the client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateRequest<'a> {
    // u8 length over 1-byte entries, so 256 slots always suffice.
    pub certificate_types: ArrayVec<[ClientCertificateType; 256]>,
    pub supported_signature_algorithms: Vec<SignatureAndHashAlgorithm>,
    pub certificate_authorities: Vec<DistinguishedName<'a>>,
}

impl<'a> CertificateRequest<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], CertificateRequest<'a>, Error> {
        let (input, types_len) = be_u8(input)?;
        let (input, types_data) = take(types_len)(input)?;
        let (_, certificate_types) = many1(ClientCertificateType::parse)(types_data)?;

        let (input, algs_len) = be_u16(input)?;
        let (input, mut algs_data) = take(algs_len)(input)?;
        let mut supported_signature_algorithms = Vec::new();
        while !algs_data.is_empty() {
            let (rest, algorithm) = SignatureAndHashAlgorithm::parse(algs_data)?;
            supported_signature_algorithms.push(algorithm);
            algs_data = rest;
        }

        let (input, cas_len) = be_u16(input)?;
        let (input, mut cas_data) = take(cas_len)(input)?;
        let mut certificate_authorities = Vec::new();
        while !cas_data.is_empty() {
            let (rest, name) = DistinguishedName::parse(cas_data)?;
            certificate_authorities.push(name);
            cas_data = rest;
        }

        Ok((
            input,
            CertificateRequest {
                certificate_types,
                supported_signature_algorithms,
                certificate_authorities,
            },
        ))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.push(self.certificate_types.len() as u8);
        for cert_type in &self.certificate_types {
            output.push(cert_type.as_u8());
        }

        let algs_len = (self.supported_signature_algorithms.len() * 2) as u16;
        output.extend_from_slice(&algs_len.to_be_bytes());
        for algorithm in &self.supported_signature_algorithms {
            output.extend_from_slice(&algorithm.as_u16().to_be_bytes());
        }

        let cas_len: usize = self
            .certificate_authorities
            .iter()
            .map(|n| 2 + n.len())
            .sum();
        output.extend_from_slice(&(cas_len as u16).to_be_bytes());
        for name in &self.certificate_authorities {
            name.serialize(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{HashAlgorithm, SignatureAlgorithm};
    use tinyvec::array_vec;

    const MESSAGE: &[u8] = &[
        0x02, 0x01, 0x40, // certificate_types: rsa_sign, ecdsa_sign
        0x00, 0x04, // signature algorithms length
        0x04, 0x03, 0x04, 0x01, // sha256/ecdsa, sha256/rsa
        0x00, 0x05, // certificate_authorities length
        0x00, 0x03, 0x30, 0x01, 0x00, // one DER name
    ];

    #[test]
    fn roundtrip() {
        let (rest, request) = CertificateRequest::parse(MESSAGE).unwrap();
        assert!(rest.is_empty());
        assert_eq!(
            request.certificate_types,
            array_vec![
                [ClientCertificateType; 256] => ClientCertificateType::RSA_SIGN,
                ClientCertificateType::ECDSA_SIGN
            ]
        );
        assert_eq!(
            request.supported_signature_algorithms,
            vec![
                SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA),
                SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::RSA),
            ]
        );
        assert_eq!(
            request.certificate_authorities,
            vec![DistinguishedName(&[0x30, 0x01, 0x00])]
        );

        let mut serialized = Vec::new();
        request.serialize(&mut serialized);
        assert_eq!(serialized, MESSAGE);
    }

    #[test]
    fn no_authorities() {
        const SHORT: &[u8] = &[0x01, 0x40, 0x00, 0x02, 0x04, 0x03, 0x00, 0x00];
        let (rest, request) = CertificateRequest::parse(SHORT).unwrap();
        assert!(rest.is_empty());
        assert!(request.certificate_authorities.is_empty());
    }

    #[test]
    fn empty_certificate_types_rejected() {
        const EMPTY: &[u8] = &[0x00, 0x00, 0x00, 0x00, 0x00];
        assert!(CertificateRequest::parse(EMPTY).is_err());
    }

    #[test]
    fn truncated_algorithms() {
        assert!(CertificateRequest::parse(&MESSAGE[..7]).is_err());
    }
}
