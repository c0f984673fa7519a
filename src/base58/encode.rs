use super::{
    digits::{BufferTooSmall, Digits, SliceDigits},
    max_encoded_len, Alphabet, ALPHABET,
};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire encoding.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

impl From<BufferTooSmall> for Error {
    fn from(_: BufferTooSmall) -> Self {
        Error::BufferTooSmall
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    fn write<D: Digits>(&self, input: &[u8], output: &mut D) -> Result<(), D::Error> {
        for &value in input {
            let mut carry = value as usize;
            for digit in output.digits_mut() {
                carry += (*digit as usize) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                output.push((carry % 58) as u8)?;
                carry /= 58;
            }
        }
        for _ in input.iter().take_while(|&&value| value == 0) {
            output.push(0)?;
        }
        let digits = output.digits_mut();
        digits.reverse();
        for digit in digits {
            *digit = self.alphabet.encode(*digit as usize);
        }
        Ok(())
    }

    /// Writes the encoding of `input` to the start of `output` and returns its length.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let mut digits = SliceDigits::new(output.as_mut());
        self.write(input.as_ref(), &mut digits)?;
        Ok(digits.len())
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = Vec::with_capacity(max_encoded_len(input.len()));
        match self.write(input, &mut output) {
            Ok(()) => output.into_iter().map(char::from).collect(),
            Err(never) => match never {},
        }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}
