use nom::IResult;

use crate::message::{
    parse_extension_list, serialize_extension_list, CipherSuite, CompressionMethod, Extension,
    ProtocolVersion, Random, SessionId,
};
use crate::Error;

/// ServerHello. The selected suite and compression method, followed by a
/// mandatory extension block (two zero bytes when no extensions are sent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerHello<'a> {
    pub server_version: ProtocolVersion,
    pub random: Random,
    pub session_id: SessionId,
    pub cipher_suite: CipherSuite,
    pub compression_method: CompressionMethod,
    pub extensions: Vec<Extension<'a>>,
}

impl<'a> ServerHello<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], ServerHello<'a>, Error> {
        let (input, server_version) = ProtocolVersion::parse(input)?;
        let (input, random) = Random::parse(input)?;
        let (input, session_id) = SessionId::parse(input)?;
        let (input, cipher_suite) = CipherSuite::parse(input)?;
        let (input, compression_method) = CompressionMethod::parse(input)?;
        let (input, extensions) = parse_extension_list(input)?;

        Ok((
            input,
            ServerHello {
                server_version,
                random,
                session_id,
                cipher_suite,
                compression_method,
                extensions,
            },
        ))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        self.server_version.serialize(output);
        self.random.serialize(output);
        self.session_id.serialize(output);
        output.extend_from_slice(&self.cipher_suite.as_u16().to_be_bytes());
        output.push(self.compression_method.as_u8());
        serialize_extension_list(&self.extensions, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{NamedGroup, SupportedGroupsExtension};

    const MESSAGE: &[u8] = &[
        0xfe, 0xfd, // DTLS 1.2
        0x00, 0x00, 0x00, 0x01, // gmt_unix_time
        0x19, 0x19, 0x19, 0x19, 0x19, 0x19, 0x19, 0x19, // random_bytes
        0x19, 0x19, 0x19, 0x19, 0x19, 0x19, 0x19, 0x19, //
        0x19, 0x19, 0x19, 0x19, 0x19, 0x19, 0x19, 0x19, //
        0x19, 0x19, 0x19, 0x19, //
        0x00, // session_id
        0xc0, 0x2b, // cipher_suite
        0x00, // compression_method
        0x00, 0x08, // extensions
        0x00, 0x0a, 0x00, 0x04, 0x00, 0x02, 0x00, 0x1d, //
    ];

    #[test]
    fn roundtrip() {
        let (rest, hello) = ServerHello::parse(MESSAGE).unwrap();
        assert!(rest.is_empty());
        assert_eq!(hello.server_version, ProtocolVersion::DTLS1_2);
        assert!(hello.session_id.is_empty());
        assert_eq!(
            hello.cipher_suite,
            CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256
        );
        assert_eq!(hello.compression_method, CompressionMethod::Null);
        assert_eq!(
            hello.extensions,
            vec![Extension::SupportedGroups(SupportedGroupsExtension::new(
                vec![NamedGroup::X25519]
            ))]
        );

        let mut serialized = Vec::new();
        hello.serialize(&mut serialized);
        assert_eq!(serialized, MESSAGE);
    }

    #[test]
    fn empty_extension_block_roundtrip() {
        let hello = ServerHello {
            server_version: ProtocolVersion::DTLS1_2,
            random: Random::default(),
            session_id: SessionId::empty(),
            cipher_suite: CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
            compression_method: CompressionMethod::Null,
            extensions: Vec::new(),
        };

        let mut serialized = Vec::new();
        hello.serialize(&mut serialized);
        // No extensions still serializes the two length bytes.
        assert_eq!(&serialized[serialized.len() - 2..], &[0x00, 0x00]);

        let (rest, parsed) = ServerHello::parse(&serialized).unwrap();
        assert!(rest.is_empty());
        assert_eq!(parsed, hello);
    }

    #[test]
    fn missing_extension_block() {
        let truncated = &MESSAGE[..38];
        let err = ServerHello::parse(truncated).unwrap_err();
        assert_eq!(Error::from(err), Error::BufferTooSmall);
    }
}
