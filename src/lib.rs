#![forbid(unsafe_code)]
#![warn(clippy::all)]

//! Wire format for the DTLS 1.2 handshake: the 12-byte message envelope,
//! the typed handshake message bodies and the extension-list block found
//! inside the hello messages. Parsing is zero-copy over the input buffer
//! and encoding never fragments.

mod error;
pub mod message;
mod util;

pub use error::Error;
