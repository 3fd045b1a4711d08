use nom::error::ErrorKind;
use thiserror::Error as ThisError;

/// Errors surfaced by the wire-format codecs.
///
/// Every error is terminal for the current decode or encode: no partial
/// value is produced and nothing is retried at this layer. Retransmission
/// policy belongs to the handshake state machine driving the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Fewer bytes available than a fixed or declared-length field requires.
    #[error("Buffer too small")]
    BufferTooSmall,

    /// A declared length field disagrees with the actual number of bytes.
    #[error("Declared length does not match buffer")]
    LengthMismatch,

    /// A typed extension decoder was handed a record carrying another
    /// extension type's tag.
    #[error("Extension type does not match decoder")]
    InvalidExtensionType,

    /// Structural violation inside a server_name extension.
    #[error("Malformed server name extension")]
    InvalidSniFormat,

    /// `Handshake::encode()` was called with no message body attached.
    #[error("Handshake has no message body")]
    HandshakeMessageUnset,

    /// `Handshake::encode()` was called on a header with a non-zero
    /// fragment offset. Only whole messages are encoded here.
    #[error("Cannot encode a fragmented handshake message")]
    UnableToMarshalFragmented,

    /// A handshake message type we recognize but deliberately do not
    /// handle (HelloRequest), or one outside the protocol's type space.
    #[error("Handshake message type {0} not implemented")]
    NotImplemented(u8),
}

impl<'a> nom::error::ParseError<&'a [u8]> for Error {
    // The complete-input combinators only fail when they run out of
    // bytes, so every built-in parser error means the buffer was short.
    fn from_error_kind(_input: &'a [u8], _kind: ErrorKind) -> Self {
        Error::BufferTooSmall
    }

    fn append(_input: &'a [u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<nom::Err<Error>> for Error {
    fn from(err: nom::Err<Error>) -> Self {
        match err {
            nom::Err::Incomplete(_) => Error::BufferTooSmall,
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
        }
    }
}
