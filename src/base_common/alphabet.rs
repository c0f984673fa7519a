use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
        }
    }
}

/// Digit table for a positional encoding with `N` ASCII symbols.
///
/// Both directions are precomputed so that building one in a `const` item costs nothing at runtime.
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Panics if `value >= N`.
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        let value = if character.is_ascii() { self.decode[character as usize] } else { None };
        value.ok_or(DecodeError::InvalidCharacter { character, index })
    }

    pub fn contains(&self, character: char) -> bool {
        character.is_ascii() && self.decode[character as usize].is_some()
    }

    pub fn zero(&self) -> char {
        self.encode[0] as char
    }

    pub fn symbols(&self) -> &str {
        // Every symbol was checked to be ASCII in `new`.
        std::str::from_utf8(&self.encode).unwrap_or_default()
    }

    pub const fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    #[test]
    fn new() {
        let alphabet = Alphabet::new(b"abc").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.symbols(), "abc");
        assert_eq!(alphabet.zero(), 'a');
        assert_eq!(alphabet.encode(2), b'c');
        assert_eq!(alphabet.decode('b', 0), Ok(1));
    }

    #[test]
    fn new_duplicate() {
        assert_eq!(
            Alphabet::new(b"abca").err(),
            Some(Error::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 3
            })
        );
    }

    #[test]
    fn new_non_ascii() {
        assert_eq!(
            Alphabet::new(&[b'a', 0xc3]).err(),
            Some(Error::NonAsciiCharacter { character: 0xc3, index: 1 })
        );
    }

    #[test]
    fn decode_invalid() {
        let alphabet = Alphabet::new(b"abc").unwrap();
        assert_eq!(alphabet.decode('d', 4), Err(DecodeError::InvalidCharacter { character: 'd', index: 4 }));
        assert_eq!(alphabet.decode('é', 1), Err(DecodeError::InvalidCharacter { character: 'é', index: 1 }));
        assert!(!alphabet.contains('é'));
        assert!(alphabet.contains('c'));
    }
}
