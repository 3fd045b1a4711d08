use nom::bytes::complete::take;
use nom::number::complete::be_u24;
use nom::IResult;

use crate::message::Asn1Cert;
use crate::Error;

/// Certificate message: the sender's chain, leaf first, each entry DER
/// encoded with its own u24 length inside a u24-length list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Certificate<'a> {
    pub certificate_list: Vec<Asn1Cert<'a>>,
}

impl<'a> Certificate<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], Certificate<'a>, Error> {
        let (input, total_len) = be_u24(input)?;
        let (input, mut list_data) = take(total_len as usize)(input)?;

        let mut certificate_list = Vec::new();
        while !list_data.is_empty() {
            let (rest, cert) = Asn1Cert::parse(list_data)?;
            certificate_list.push(cert);
            list_data = rest;
        }

        Ok((input, Certificate { certificate_list }))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        let total_len: usize = self.certificate_list.iter().map(|c| 3 + c.len()).sum();
        output.extend_from_slice(&(total_len as u32).to_be_bytes()[1..]);
        for cert in &self.certificate_list {
            cert.serialize(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &[u8] = &[
        0x00, 0x00, 0x09, // certificate_list length
        0x00, 0x00, 0x02, 0x30, 0x82, // first (truncated DER for the test)
        0x00, 0x00, 0x01, 0x30, // second
    ];

    #[test]
    fn roundtrip() {
        let (rest, certificate) = Certificate::parse(MESSAGE).unwrap();
        assert!(rest.is_empty());
        assert_eq!(
            certificate.certificate_list,
            vec![Asn1Cert(&[0x30, 0x82]), Asn1Cert(&[0x30])]
        );

        let mut serialized = Vec::new();
        certificate.serialize(&mut serialized);
        assert_eq!(serialized, MESSAGE);
    }

    #[test]
    fn empty_list_roundtrip() {
        let (rest, certificate) = Certificate::parse(&[0x00, 0x00, 0x00]).unwrap();
        assert!(rest.is_empty());
        assert!(certificate.certificate_list.is_empty());

        let mut serialized = Vec::new();
        certificate.serialize(&mut serialized);
        assert_eq!(serialized, &[0x00, 0x00, 0x00]);
    }

    #[test]
    fn entry_longer_than_list() {
        // Entry claims 5 bytes but the list ends after 2.
        const BAD: &[u8] = &[0x00, 0x00, 0x05, 0x00, 0x00, 0x05, 0x30, 0x82];
        assert!(Certificate::parse(BAD).is_err());
    }
}
