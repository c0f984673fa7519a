//! Base58 encoding over the Bitcoin alphabet, without checksum.
//!
//! Bytes are read as one big-endian unsigned integer and rewritten in base 58. Leading zero bytes have no numeric
//! weight, so each one is carried as a leading `'1'` instead.

mod digits;

pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_into, decode_symmetric, Decoder, Padding};
pub use encode::{encode, encode_into, Encoder};

pub const ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// Upper bound on the length of the encoding of `len` bytes (log(256) / log(58) < 1.38).
pub const fn max_encoded_len(len: usize) -> usize {
    len * 138 / 100 + 1
}

/// Upper bound on the length of the decoding of an input of `len` bytes.
pub const fn max_decoded_len(len: usize) -> usize {
    len
}
