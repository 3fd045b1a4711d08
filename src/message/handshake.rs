use log::debug;
use nom::number::complete::{be_u16, be_u24, be_u8};
use nom::{Err, IResult};

use crate::message::{
    Certificate, CertificateRequest, CertificateVerify, ClientHello, ClientKeyExchange, Finished,
    HelloVerifyRequest, ServerHello, ServerKeyExchange,
};
use crate::Error;

/// Size of the DTLS handshake header. Unlike TLS, the header carries
/// message_seq, fragment_offset and fragment_length.
pub const HEADER_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    HelloRequest,       // 0
    ClientHello,        // 1
    ServerHello,        // 2
    HelloVerifyRequest, // 3
    Certificate,        // 11
    ServerKeyExchange,  // 12
    CertificateRequest, // 13
    ServerHelloDone,    // 14
    CertificateVerify,  // 15
    ClientKeyExchange,  // 16
    Finished,           // 20
    Unknown(u8),
}

impl Default for MessageType {
    fn default() -> Self {
        Self::Unknown(0)
    }
}

impl MessageType {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => MessageType::HelloRequest,
            1 => MessageType::ClientHello,
            2 => MessageType::ServerHello,
            3 => MessageType::HelloVerifyRequest,
            11 => MessageType::Certificate,
            12 => MessageType::ServerKeyExchange,
            13 => MessageType::CertificateRequest,
            14 => MessageType::ServerHelloDone,
            15 => MessageType::CertificateVerify,
            16 => MessageType::ClientKeyExchange,
            20 => MessageType::Finished,
            _ => MessageType::Unknown(value),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            MessageType::HelloRequest => 0,
            MessageType::ClientHello => 1,
            MessageType::ServerHello => 2,
            MessageType::HelloVerifyRequest => 3,
            MessageType::Certificate => 11,
            MessageType::ServerKeyExchange => 12,
            MessageType::CertificateRequest => 13,
            MessageType::ServerHelloDone => 14,
            MessageType::CertificateVerify => 15,
            MessageType::ClientKeyExchange => 16,
            MessageType::Finished => 20,
            MessageType::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], MessageType, Error> {
        let (input, value) = be_u8(input)?;
        Ok((input, MessageType::from_u8(value)))
    }
}

/// The 12-byte header in front of every handshake body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub msg_type: MessageType,
    pub length: u32,
    pub message_seq: u16,
    pub fragment_offset: u32,
    pub fragment_length: u32,
}

impl Header {
    pub fn parse(input: &[u8]) -> IResult<&[u8], Header, Error> {
        let (input, msg_type) = MessageType::parse(input)?;
        let (input, length) = be_u24(input)?;
        let (input, message_seq) = be_u16(input)?;
        let (input, fragment_offset) = be_u24(input)?;
        let (input, fragment_length) = be_u24(input)?;

        Ok((
            input,
            Header {
                msg_type,
                length,
                message_seq,
                fragment_offset,
                fragment_length,
            },
        ))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.push(self.msg_type.as_u8());
        output.extend_from_slice(&self.length.to_be_bytes()[1..]);
        output.extend_from_slice(&self.message_seq.to_be_bytes());
        output.extend_from_slice(&self.fragment_offset.to_be_bytes()[1..]);
        output.extend_from_slice(&self.fragment_length.to_be_bytes()[1..]);
    }
}

/// A fully parsed handshake body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body<'a> {
    ClientHello(ClientHello<'a>),
    ServerHello(ServerHello<'a>),
    HelloVerifyRequest(HelloVerifyRequest),
    Certificate(Certificate<'a>),
    ServerKeyExchange(ServerKeyExchange<'a>),
    CertificateRequest(CertificateRequest<'a>),
    ServerHelloDone,
    CertificateVerify(CertificateVerify<'a>),
    ClientKeyExchange(ClientKeyExchange<'a>),
    Finished(Finished<'a>),
}

impl<'a> Body<'a> {
    pub fn parse(
        input: &'a [u8],
        msg_type: MessageType,
    ) -> IResult<&'a [u8], Body<'a>, Error> {
        match msg_type {
            MessageType::ClientHello => {
                let (input, body) = ClientHello::parse(input)?;
                Ok((input, Body::ClientHello(body)))
            }
            MessageType::ServerHello => {
                let (input, body) = ServerHello::parse(input)?;
                Ok((input, Body::ServerHello(body)))
            }
            MessageType::HelloVerifyRequest => {
                let (input, body) = HelloVerifyRequest::parse(input)?;
                Ok((input, Body::HelloVerifyRequest(body)))
            }
            MessageType::Certificate => {
                let (input, body) = Certificate::parse(input)?;
                Ok((input, Body::Certificate(body)))
            }
            MessageType::ServerKeyExchange => {
                let (input, body) = ServerKeyExchange::parse(input)?;
                Ok((input, Body::ServerKeyExchange(body)))
            }
            MessageType::CertificateRequest => {
                let (input, body) = CertificateRequest::parse(input)?;
                Ok((input, Body::CertificateRequest(body)))
            }
            MessageType::ServerHelloDone => Ok((input, Body::ServerHelloDone)),
            MessageType::CertificateVerify => {
                let (input, body) = CertificateVerify::parse(input)?;
                Ok((input, Body::CertificateVerify(body)))
            }
            MessageType::ClientKeyExchange => {
                let (input, body) = ClientKeyExchange::parse(input)?;
                Ok((input, Body::ClientKeyExchange(body)))
            }
            MessageType::HelloRequest | MessageType::Unknown(_) => {
                Err(Err::Failure(Error::NotImplemented(msg_type.as_u8())))
            }
            MessageType::Finished => {
                let (input, body) = Finished::parse(input)?;
                Ok((input, Body::Finished(body)))
            }
        }
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        match self {
            Body::ClientHello(body) => body.serialize(output),
            Body::ServerHello(body) => body.serialize(output),
            Body::HelloVerifyRequest(body) => body.serialize(output),
            Body::Certificate(body) => body.serialize(output),
            Body::ServerKeyExchange(body) => body.serialize(output),
            Body::CertificateRequest(body) => body.serialize(output),
            Body::ServerHelloDone => {}
            Body::CertificateVerify(body) => body.serialize(output),
            Body::ClientKeyExchange(body) => body.serialize(output),
            Body::Finished(body) => body.serialize(output),
        }
    }

    pub fn message_type(&self) -> MessageType {
        match self {
            Body::ClientHello(_) => MessageType::ClientHello,
            Body::ServerHello(_) => MessageType::ServerHello,
            Body::HelloVerifyRequest(_) => MessageType::HelloVerifyRequest,
            Body::Certificate(_) => MessageType::Certificate,
            Body::ServerKeyExchange(_) => MessageType::ServerKeyExchange,
            Body::CertificateRequest(_) => MessageType::CertificateRequest,
            Body::ServerHelloDone => MessageType::ServerHelloDone,
            Body::CertificateVerify(_) => MessageType::CertificateVerify,
            Body::ClientKeyExchange(_) => MessageType::ClientKeyExchange,
            Body::Finished(_) => MessageType::Finished,
        }
    }
}

/// One unfragmented handshake message: header plus typed body.
///
/// `decode` expects the complete message. Fragmented messages must be
/// reassembled by the caller before they get here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Handshake<'a> {
    header: Header,
    body: Option<Body<'a>>,
}

impl<'a> Handshake<'a> {
    pub fn new(message_seq: u16, body: Body<'a>) -> Self {
        Handshake {
            header: Header {
                message_seq,
                ..Default::default()
            },
            body: Some(body),
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn body(&self) -> Option<&Body<'a>> {
        self.body.as_ref()
    }

    pub fn decode(input: &'a [u8]) -> Result<Handshake<'a>, Error> {
        let (body_input, header) = Header::parse(input)?;

        let body_len = body_input.len() as u32;
        if header.length != body_len || header.fragment_length != body_len {
            debug!(
                "handshake length mismatch: header {}/{} actual {}",
                header.length, header.fragment_length, body_len
            );
            return Err(Error::LengthMismatch);
        }

        let (_, body) = Body::parse(body_input, header.msg_type)?;

        Ok(Handshake {
            header,
            body: Some(body),
        })
    }

    pub fn encode(&self, output: &mut Vec<u8>) -> Result<(), Error> {
        let body = self.body.as_ref().ok_or(Error::HandshakeMessageUnset)?;
        if self.header.fragment_offset != 0 {
            return Err(Error::UnableToMarshalFragmented);
        }

        let mut serialized = Vec::new();
        body.serialize(&mut serialized);

        let header = Header {
            msg_type: body.message_type(),
            length: serialized.len() as u32,
            message_seq: self.header.message_seq,
            fragment_offset: 0,
            fragment_length: serialized.len() as u32,
        };
        header.serialize(output);
        output.extend_from_slice(&serialized);

        Ok(())
    }
}
