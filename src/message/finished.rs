use nom::combinator::rest;
use nom::IResult;

use crate::Error;

/// Finished: the verify_data PRF output. Its length is fixed by the
/// negotiated parameters, so on the wire it is simply the whole body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Finished<'a> {
    pub verify_data: &'a [u8],
}

impl<'a> Finished<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], Finished<'a>, Error> {
        let (input, verify_data) = rest(input)?;
        Ok((input, Finished { verify_data }))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(self.verify_data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        const MESSAGE: &[u8] = &[
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, //
            0x09, 0x0a, 0x0b, 0x0c, //
        ];

        let (rest, finished) = Finished::parse(MESSAGE).unwrap();
        assert!(rest.is_empty());
        assert_eq!(finished.verify_data, MESSAGE);

        let mut serialized = Vec::new();
        finished.serialize(&mut serialized);
        assert_eq!(serialized, MESSAGE);
    }

    #[test]
    fn empty_body() {
        let (rest, finished) = Finished::parse(&[]).unwrap();
        assert!(rest.is_empty());
        assert!(finished.verify_data.is_empty());
    }
}
