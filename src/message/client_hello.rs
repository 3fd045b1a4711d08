use nom::bytes::complete::take;
use nom::number::complete::{be_u16, be_u8};
use nom::IResult;
use tinyvec::ArrayVec;

use crate::message::{
    parse_extension_list, serialize_extension_list, CipherSuite, CompressionMethod, Cookie,
    Extension, ProtocolVersion, Random, SessionId,
};
use crate::util::many1;
use crate::Error;

/// ClientHello, the first flight of the handshake. In DTLS it carries a
/// cookie echoed from a preceding HelloVerifyRequest (empty on the first
/// attempt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHello<'a> {
    pub client_version: ProtocolVersion,
    pub random: Random,
    pub session_id: SessionId,
    pub cookie: Cookie,
    pub cipher_suites: Vec<CipherSuite>,
    // u8 length over 1-byte entries, so 256 slots always suffice.
    pub compression_methods: ArrayVec<[CompressionMethod; 256]>,
    pub extensions: Vec<Extension<'a>>,
}

impl<'a> ClientHello<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], ClientHello<'a>, Error> {
        let (input, client_version) = ProtocolVersion::parse(input)?;
        let (input, random) = Random::parse(input)?;
        let (input, session_id) = SessionId::parse(input)?;
        let (input, cookie) = Cookie::parse(input)?;

        let (input, suites_len) = be_u16(input)?;
        let (input, mut suites_data) = take(suites_len)(input)?;
        let mut cipher_suites = Vec::new();
        while !suites_data.is_empty() {
            let (rest, suite) = CipherSuite::parse(suites_data)?;
            cipher_suites.push(suite);
            suites_data = rest;
        }

        let (input, methods_len) = be_u8(input)?;
        let (input, methods_data) = take(methods_len)(input)?;
        let (_, compression_methods) = many1(CompressionMethod::parse)(methods_data)?;

        let (input, extensions) = parse_extension_list(input)?;

        Ok((
            input,
            ClientHello {
                client_version,
                random,
                session_id,
                cookie,
                cipher_suites,
                compression_methods,
                extensions,
            },
        ))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        self.client_version.serialize(output);
        self.random.serialize(output);
        self.session_id.serialize(output);
        self.cookie.serialize(output);

        output.extend_from_slice(&((self.cipher_suites.len() * 2) as u16).to_be_bytes());
        for suite in &self.cipher_suites {
            output.extend_from_slice(&suite.as_u16().to_be_bytes());
        }

        output.push(self.compression_methods.len() as u8);
        for method in &self.compression_methods {
            output.push(method.as_u8());
        }

        serialize_extension_list(&self.extensions, output);
    }
}
