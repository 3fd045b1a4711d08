use nom::bytes::complete::take;
use nom::number::complete::be_u8;
use nom::IResult;

use crate::Error;

/// ClientKeyExchange in the ECDHE shape: the client's ephemeral public
/// key behind a u8 length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientKeyExchange<'a> {
    pub public_key: &'a [u8],
}

impl<'a> ClientKeyExchange<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], ClientKeyExchange<'a>, Error> {
        let (input, key_len) = be_u8(input)?;
        let (input, public_key) = take(key_len)(input)?;

        Ok((input, ClientKeyExchange { public_key }))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.push(self.public_key.len() as u8);
        output.extend_from_slice(self.public_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &[u8] = &[
        0x04, // public key length
        0x04, 0x01, 0x02, 0x03, // public key
    ];

    #[test]
    fn roundtrip() {
        let (rest, exchange) = ClientKeyExchange::parse(MESSAGE).unwrap();
        assert!(rest.is_empty());
        assert_eq!(exchange.public_key, &[0x04, 0x01, 0x02, 0x03]);

        let mut serialized = Vec::new();
        exchange.serialize(&mut serialized);
        assert_eq!(serialized, MESSAGE);
    }

    #[test]
    fn truncated_key() {
        assert!(ClientKeyExchange::parse(&MESSAGE[..3]).is_err());
    }
}
