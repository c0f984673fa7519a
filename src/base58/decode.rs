use super::{
    digits::{BufferTooSmall, Digits, SliceDigits},
    max_decoded_len, Alphabet, ALPHABET,
};
use crate::base_common::alphabet;
use std::{convert::Infallible, error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
}

impl Error {
    /// The offending character, if the input was rejected.
    pub fn character(&self) -> Option<char> {
        match self {
            Error::InvalidCharacter { character, .. } => Some(*character),
            Error::BufferTooSmall => None,
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

impl From<BufferTooSmall> for Error {
    fn from(_: BufferTooSmall) -> Self {
        Error::BufferTooSmall
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// How leading zero symbols of the input turn back into leading zero bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Padding {
    /// Count leading zero symbols among all but the last character. An input made only of zero symbols therefore
    /// decodes to one byte less than its length (`"111"` gives two zero bytes).
    SkipLast,
    /// Count every leading zero symbol, the exact inverse of the encoder.
    Symmetric,
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
    padding: Padding,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self {
            alphabet,
            padding: Padding::SkipLast,
        }
    }

    pub const fn with_padding(self, padding: Padding) -> Self {
        Self {
            alphabet: self.alphabet,
            padding,
        }
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    fn leading_zeros(&self, input: &str) -> usize {
        let zero = self.alphabet.zero();
        let scanned = match self.padding {
            Padding::SkipLast => {
                let mut characters = input.chars();
                characters.next_back();
                characters.as_str()
            }
            Padding::Symmetric => input,
        };
        scanned.chars().take_while(|&character| character == zero).count()
    }

    fn write<D: Digits>(&self, input: &str, output: &mut D) -> Result<(), Error>
    where
        Error: From<D::Error>,
    {
        for (index, character) in input.chars().enumerate() {
            let mut carry = self.alphabet.decode(character, index)? as usize;
            for value in output.digits_mut() {
                carry += (*value as usize) * 58;
                *value = (carry & 0xFF) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                output.push((carry & 0xFF) as u8)?;
                carry >>= 8;
            }
        }
        for _ in 0..self.leading_zeros(input) {
            output.push(0)?;
        }
        output.digits_mut().reverse();
        Ok(())
    }

    /// Writes the decoding of `input` to the start of `output` and returns its length.
    pub fn decode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let mut digits = SliceDigits::new(output.as_mut());
        self.write(input.as_ref(), &mut digits)?;
        Ok(digits.len())
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let mut output = Vec::with_capacity(max_decoded_len(input.len()));
        self.write(input, &mut output)?;
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }

    pub fn symmetric() -> &'static Self {
        &SYMMETRIC_DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

const SYMMETRIC_DECODER: Decoder = Decoder::new(&ALPHABET).with_padding(Padding::Symmetric);

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode_symmetric(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::symmetric().decode(input)
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("2g"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("12g"), Ok(vec![0x00, 0x61]));
        assert_eq!(super::decode("a3gV"), Ok(b"bbb".to_vec()));
        assert_eq!(super::decode("aPEr"), Ok(b"ccc".to_vec()));
        assert_eq!(super::decode("2cFupjhnEsSn59qHXstmK2ffpLv2"), Ok(b"simply a long string".to_vec()));
        assert_eq!(
            super::decode("1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            Ok(vec![
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ])
        );
        assert_eq!(super::decode("ABnLTmg"), Ok(vec![0x51, 0x6b, 0x6f, 0xcd, 0x0f]));
        assert_eq!(
            super::decode("3SEo3LWLoPntC"),
            Ok(vec![0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
        );
        assert_eq!(super::decode("3EFU7m"), Ok(vec![0x57, 0x2e, 0x47, 0x94]));
        assert_eq!(
            super::decode("EJDM8drfXA6uyA"),
            Ok(vec![0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
        );
        assert_eq!(super::decode("Rt5zm"), Ok(vec![0x10, 0xc8, 0x51, 0x1e]));
        assert_eq!(super::decode("1121"), Ok(vec![0x00, 0x00, 0x3a]));
    }

    #[test]
    fn decode_zero_symbols() {
        assert_eq!(super::decode("1"), Ok(vec![]));
        assert_eq!(super::decode("111"), Ok(vec![0x00, 0x00]));
        assert_eq!(super::decode("1111111111"), Ok(vec![0x00; 9]));
        assert_eq!(super::decode("112"), Ok(vec![0x00, 0x00, 0x01]));
    }

    #[test]
    fn decode_symmetric() {
        assert_eq!(super::decode_symmetric(""), Ok(vec![]));
        assert_eq!(super::decode_symmetric("1"), Ok(vec![0x00]));
        assert_eq!(super::decode_symmetric("111"), Ok(vec![0x00, 0x00, 0x00]));
        assert_eq!(super::decode_symmetric("112"), Ok(vec![0x00, 0x00, 0x01]));
        for len in 0..16 {
            let input = vec![0x00; len];
            assert_eq!(super::decode_symmetric(crate::base58::encode(&input)), Ok(input));
        }
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(super::decode("0"), Err(Error::InvalidCharacter { character: '0', index: 0 }));
        assert_eq!(super::decode("l"), Err(Error::InvalidCharacter { character: 'l', index: 0 }));
        assert_eq!(super::decode("2gO"), Err(Error::InvalidCharacter { character: 'O', index: 2 }));
        assert_eq!(super::decode("2I0"), Err(Error::InvalidCharacter { character: 'I', index: 1 }));
        assert_eq!(super::decode("1 2"), Err(Error::InvalidCharacter { character: ' ', index: 1 }));
        assert_eq!(super::decode("2gé"), Err(Error::InvalidCharacter { character: 'é', index: 2 }));
        assert_eq!(super::decode("0").unwrap_err().character(), Some('0'));
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 8];
        assert_eq!(super::decode_into("a3gV", &mut output), Ok(3));
        assert_eq!(&output[..3], b"bbb");

        let mut output = [0u8; 2];
        assert_eq!(super::decode_into("a3gV", &mut output), Err(Error::BufferTooSmall));

        let mut output = [0u8; 4];
        assert_eq!(super::decode_into("111", &mut output), Ok(2));
        assert_eq!(&output[..2], [0x00, 0x00]);
    }
}
