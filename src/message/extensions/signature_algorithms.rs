use nom::bytes::complete::take;
use nom::number::complete::be_u16;
use nom::{Err, IResult};

use crate::message::{ExtensionType, SignatureAndHashAlgorithm};
use crate::Error;

/// signature_algorithms extension, RFC 5246 Section 7.4.1.4.1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureAlgorithmsExtension {
    pub algorithms: Vec<SignatureAndHashAlgorithm>,
}

impl SignatureAlgorithmsExtension {
    pub fn new(algorithms: Vec<SignatureAndHashAlgorithm>) -> Self {
        SignatureAlgorithmsExtension { algorithms }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], SignatureAlgorithmsExtension, Error> {
        let (input, extension_type) = ExtensionType::parse(input)?;
        if extension_type != ExtensionType::SignatureAlgorithms {
            return Err(Err::Failure(Error::InvalidExtensionType));
        }
        let (input, ext_len) = be_u16(input)?;
        let (input, ext_data) = take(ext_len)(input)?;

        let (list_input, list_len) = be_u16(ext_data)?;
        let (_, mut list_data) = take(list_len)(list_input)?;

        let mut algorithms = Vec::new();
        while !list_data.is_empty() {
            let (rest, algorithm) = SignatureAndHashAlgorithm::parse(list_data)?;
            algorithms.push(algorithm);
            list_data = rest;
        }

        Ok((input, SignatureAlgorithmsExtension { algorithms }))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        let list_len = (self.algorithms.len() * 2) as u16;

        output.extend_from_slice(&ExtensionType::SignatureAlgorithms.as_u16().to_be_bytes());
        output.extend_from_slice(&(list_len + 2).to_be_bytes());
        output.extend_from_slice(&list_len.to_be_bytes());
        for algorithm in &self.algorithms {
            output.extend_from_slice(&algorithm.as_u16().to_be_bytes());
        }
    }
}
