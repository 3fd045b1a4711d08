use nom::bytes::complete::take;
use nom::number::complete::be_u8;
use nom::{Err, IResult};
use rand::Rng;
use std::fmt;
use std::ops::Deref;

use crate::Error;

/// Constructor error for the fixed-capacity id types below.
pub struct InvalidLength(&'static str, usize, usize);

impl fmt::Debug for InvalidLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for InvalidLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Incorrect {} length: {} > {}",
            self.0, self.1, self.2
        )
    }
}

impl std::error::Error for InvalidLength {}

macro_rules! var_array {
    ($name:ident, $max:expr) => {
        /// Variable length opaque id, stored inline up to its wire maximum.
        #[derive(Clone, Copy)]
        pub struct $name([u8; $max], usize);

        impl $name {
            pub fn empty() -> Self {
                $name([0; $max], 0)
            }

            pub fn try_new(data: &[u8]) -> Result<Self, InvalidLength> {
                if data.len() > $max {
                    return Err(InvalidLength(stringify!($name), data.len(), $max));
                }
                let mut array = [0; $max];
                array[..data.len()].copy_from_slice(data);
                Ok($name(array, data.len()))
            }

            pub fn random(len: usize) -> $name {
                assert!(len <= $max);
                let mut t = rand::thread_rng();
                let mut arr = [0; $max];
                for a in &mut arr[..len] {
                    *a = t.gen();
                }
                Self(arr, len)
            }

            pub fn parse(input: &[u8]) -> IResult<&[u8], Self, Error> {
                let (input, len) = be_u8(input)?;
                if len as usize > $max {
                    return Err(Err::Failure(Error::LengthMismatch));
                }
                let (input, data) = take(len as usize)(input)?;
                // unwrap() is ok because we check the size above.
                let instance = Self::try_new(data).unwrap();
                Ok((input, instance))
            }

            /// Writes the u8 length prefix followed by the id bytes.
            pub fn serialize(&self, output: &mut Vec<u8>) {
                output.push(self.1 as u8);
                output.extend_from_slice(self);
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:02x?})", stringify!($name), &self.0[..self.1])
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.deref() == other.deref()
            }
        }

        impl Eq for $name {}

        impl Deref for $name {
            type Target = [u8];

            fn deref(&self) -> &Self::Target {
                &self.0[..self.1]
            }
        }

        impl<'a> TryFrom<&'a [u8]> for $name {
            type Error = InvalidLength;

            fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
                Self::try_new(value)
            }
        }
    };
}

var_array!(SessionId, 32);
var_array!(Cookie, 255);
