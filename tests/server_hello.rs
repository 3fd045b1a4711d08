//! Decodes a ServerHello captured from a real handshake and checks the
//! crate reproduces it byte for byte, bare and inside the envelope.

use dtls_wire::message::{
    Body, CipherSuite, CompressionMethod, Handshake, MessageType, ProtocolVersion, ServerHello,
    HEADER_LENGTH,
};

const SERVER_HELLO: &[u8] = &[
    0xfe, 0xfd, // DTLS 1.2
    0x21, 0x63, 0x32, 0x21, // gmt_unix_time
    0x81, 0x0e, 0x98, 0x6c, 0x85, 0x3d, 0xa4, 0x39, // random_bytes
    0xaf, 0x5f, 0xd6, 0x5c, 0xcc, 0x20, 0x7f, 0x7c, //
    0x78, 0xf1, 0x5f, 0x7e, 0x1c, 0xb7, 0xa1, 0x1e, //
    0xcf, 0x63, 0x84, 0x28, //
    0x00, // session_id
    0xc0, 0x2b, // cipher_suite
    0x00, // compression_method
    0x00, 0x00, // extensions
];

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn captured_server_hello() {
    init();

    let (rest, hello) = ServerHello::parse(SERVER_HELLO).unwrap();
    assert!(rest.is_empty());

    assert_eq!(hello.server_version, ProtocolVersion::DTLS1_2);
    assert_eq!(hello.random.gmt_unix_time, 0x2163_3221);
    assert_eq!(hello.random.random_bytes, SERVER_HELLO[6..34]);
    assert!(hello.session_id.is_empty());
    assert_eq!(
        hello.cipher_suite,
        CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256
    );
    assert_eq!(hello.compression_method, CompressionMethod::Null);
    assert!(hello.extensions.is_empty());

    let mut serialized = Vec::new();
    hello.serialize(&mut serialized);
    assert_eq!(serialized, SERVER_HELLO);
}

#[test]
fn captured_server_hello_in_envelope() {
    init();

    let mut message = vec![
        0x02, // ServerHello
        0x00, 0x00, 0x28, // length
        0x00, 0x01, // message_seq
        0x00, 0x00, 0x00, // fragment_offset
        0x00, 0x00, 0x28, // fragment_length
    ];
    message.extend_from_slice(SERVER_HELLO);

    let handshake = Handshake::decode(&message).unwrap();
    assert_eq!(handshake.header().msg_type, MessageType::ServerHello);
    assert_eq!(handshake.header().message_seq, 1);
    assert_eq!(handshake.header().length as usize, SERVER_HELLO.len());

    let Some(Body::ServerHello(hello)) = handshake.body() else {
        panic!("Expected ServerHello body");
    };
    assert_eq!(hello.random.gmt_unix_time, 0x2163_3221);

    let mut encoded = Vec::new();
    handshake.encode(&mut encoded).unwrap();
    assert_eq!(encoded.len(), HEADER_LENGTH + SERVER_HELLO.len());
    assert_eq!(encoded, message);
}

#[test]
fn rebuilt_server_hello_encodes_identically() {
    init();

    let (_, hello) = ServerHello::parse(SERVER_HELLO).unwrap();
    let handshake = Handshake::new(1, Body::ServerHello(hello));

    let mut encoded = Vec::new();
    handshake.encode(&mut encoded).unwrap();

    let reparsed = Handshake::decode(&encoded).unwrap();
    assert_eq!(reparsed.header().length as usize, SERVER_HELLO.len());
    assert_eq!(reparsed.body(), handshake.body());
}
