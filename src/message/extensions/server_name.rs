use std::str;

use nom::bytes::complete::take;
use nom::number::complete::{be_u16, be_u8};
use nom::{Err, IResult};

use crate::message::ExtensionType;
use crate::Error;

/// The only server_name entry type defined by RFC 6066.
const NAME_TYPE_DNS_HOSTNAME: u8 = 0;

/// Server Name Indication, RFC 6066 Section 3.
///
/// The wire format allows a list of names but prohibits more than one
/// entry per name type, so a single hostname is all that is ever
/// representable here. Entries with an unknown name type are validated
/// structurally and otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerNameExtension<'a> {
    pub server_name: &'a str,
}

impl<'a> ServerNameExtension<'a> {
    pub fn new(server_name: &'a str) -> Self {
        ServerNameExtension { server_name }
    }

    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], ServerNameExtension<'a>, Error> {
        let (input, extension_type) = ExtensionType::parse(input)?;
        if extension_type != ExtensionType::ServerName {
            return Err(Err::Failure(Error::InvalidExtensionType));
        }
        let (input, ext_len) = be_u16(input)?;
        let (input, ext_data) = take(ext_len)(input)?;

        let server_name = parse_name_list(ext_data).map_err(Err::Failure)?;

        Ok((input, ServerNameExtension { server_name }))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        let name = self.server_name.as_bytes();
        // name_type + u16 name length + name bytes
        let entry_len = 3 + name.len();

        output.extend_from_slice(&ExtensionType::ServerName.as_u16().to_be_bytes());
        output.extend_from_slice(&((2 + entry_len) as u16).to_be_bytes());
        output.extend_from_slice(&(entry_len as u16).to_be_bytes());
        output.push(NAME_TYPE_DNS_HOSTNAME);
        output.extend_from_slice(&(name.len() as u16).to_be_bytes());
        output.extend_from_slice(name);
    }
}

/// Walks the server_name_list. Any structural violation is
/// `InvalidSniFormat`; there is no partial result.
fn parse_name_list(input: &[u8]) -> Result<&str, Error> {
    let malformed = |_: Err<Error>| Error::InvalidSniFormat;

    let (rest, list_len) = be_u16::<_, Error>(input).map_err(malformed)?;
    let (_, mut names) = take::<_, _, Error>(list_len)(rest).map_err(malformed)?;

    if names.is_empty() {
        return Err(Error::InvalidSniFormat);
    }

    let mut server_name: Option<&str> = None;

    while !names.is_empty() {
        let (rest, name_type) = be_u8::<_, Error>(names).map_err(malformed)?;
        let (rest, name_len) = be_u16::<_, Error>(rest).map_err(malformed)?;
        let (rest, name) = take::<_, _, Error>(name_len)(rest).map_err(malformed)?;
        names = rest;

        if name.is_empty() {
            return Err(Error::InvalidSniFormat);
        }
        if name_type != NAME_TYPE_DNS_HOSTNAME {
            continue;
        }

        // Multiple names of the same name_type are prohibited.
        if server_name.is_some() {
            return Err(Error::InvalidSniFormat);
        }

        let name = str::from_utf8(name).map_err(|_| Error::InvalidSniFormat)?;

        // An SNI value may not include a trailing dot.
        if name.ends_with('.') {
            return Err(Error::InvalidSniFormat);
        }

        server_name = Some(name);
    }

    Ok(server_name.unwrap_or(""))
}
