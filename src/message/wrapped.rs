use std::ops::Deref;

use nom::bytes::complete::take;
use nom::number::complete::{be_u16, be_u24};
use nom::IResult;

use crate::Error;

macro_rules! wrapped_slice {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name<'a>(pub &'a [u8]);

        impl<'a> Deref for $name<'a> {
            type Target = [u8];

            fn deref(&self) -> &Self::Target {
                self.0
            }
        }
    };
}

wrapped_slice!(Asn1Cert);
wrapped_slice!(DistinguishedName);

impl<'a> Asn1Cert<'a> {
    /// One entry of a certificate_list: u24 length + DER bytes.
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], Self, Error> {
        let (input, len) = be_u24(input)?;
        let (input, data) = take(len as usize)(input)?;
        Ok((input, Asn1Cert(data)))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(&(self.len() as u32).to_be_bytes()[1..]);
        output.extend_from_slice(self);
    }
}

impl<'a> DistinguishedName<'a> {
    /// One entry of certificate_authorities: u16 length + DER name.
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], Self, Error> {
        let (input, len) = be_u16(input)?;
        let (input, data) = take(len)(input)?;
        Ok((input, DistinguishedName(data)))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(&(self.len() as u16).to_be_bytes());
        output.extend_from_slice(self);
    }
}
