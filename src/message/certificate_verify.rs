use nom::IResult;

use crate::message::DigitallySigned;
use crate::Error;

/// CertificateVerify: proof of possession of the client certificate's
/// private key, a signature over the handshake transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CertificateVerify<'a> {
    pub digitally_signed: DigitallySigned<'a>,
}

impl<'a> CertificateVerify<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], CertificateVerify<'a>, Error> {
        let (input, digitally_signed) = DigitallySigned::parse(input)?;
        Ok((input, CertificateVerify { digitally_signed }))
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        self.digitally_signed.serialize(output);
    }
}
