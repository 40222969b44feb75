use crate::{
    encoding::{
        bignum::BigNum,
        version_prefix::VersionPrefix
    },
    hash::{self, CHECKSUM_LEN},
    util
};
use thiserror::Error;
use tracing::trace;

pub const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const MAP_BASE58: [i8; 128] = [
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1, 0, 1, 2, 3, 4, 5, 6,  7, 8,-1,-1,-1,-1,-1,-1,
        -1, 9,10,11,12,13,14,15, 16,-1,17,18,19,20,21,-1,
        22,23,24,25,26,27,28,29, 30,31,32,-1,-1,-1,-1,-1,
        -1,33,34,35,36,37,38,39, 40,41,42,43,-1,44,45,46,
        47,48,49,50,51,52,53,54, 55,56,57,-1,-1,-1,-1,-1,
];


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("decoded data is {len} bytes, too short to hold a checksum")]
    TooShort { len: usize },

    #[error("bad checksum: expected {expected:02x?}, found {found:02x?}")]
    ChecksumMismatch { expected: [u8; CHECKSUM_LEN], found: [u8; CHECKSUM_LEN] }
}

/// Versioned payload waiting to be base58 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58 {
    prefix: Option<VersionPrefix>,
    payload: Vec<u8>
}

impl Base58 {
    pub fn new(prefix: Option<VersionPrefix>, payload: &[u8]) -> Base58 {
        Base58 {
            prefix,
            payload: payload.to_vec()
        }
    }

    /// prefix | payload
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.prefix {
            Some(prefix) => util::prepend(&self.payload, prefix.to_byte()),
            None => self.payload.clone()
        }
    }

    /// Encode prefix and payload in base58 format.
    pub fn encode(&self) -> String {
        encode(&self.to_bytes())
    }

    /// Check encode prefix and payload by appending the checksum and then encoding it.
    pub fn check_encode(&self) -> String {
        check_encode(&self.to_bytes())
    }
}

/**
    Encodes bytes in base58.

    The bytes are read as one big-endian integer which is repeatedly divided by 58.
    Each leading zero byte becomes one leading '1' since it adds nothing to the magnitude.
*/
pub fn encode(bytes: &[u8]) -> String {
    let zcount = bytes.iter().take_while(|b| **b == 0).count();
    let mut magnitude = BigNum::from_be_bytes(&bytes[zcount..]);

    //Remainders come out least significant first
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 138 / 100 + 1);
    while !magnitude.is_zero() {
        digits.push(magnitude.divmod_small(58));
    }
    digits.extend(std::iter::repeat(0).take(zcount));

    digits.iter().rev().map(|d| BASE58_ALPHABET[*d as usize] as char).collect()
}

/**
    Decodes a base58 string into a byte vector.
    DOES NOT remove the checksum or version prefix if present.

    An empty string decodes to an empty vector. Whitespace is not skipped.
*/
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
    let mut zeroes = 0;
    let mut leading = true;
    let mut magnitude = BigNum::zero();

    for (index, character) in encoded.chars().enumerate() {
        let digit = match digit_of(character) {
            Some(d) => d,
            None => return Err(Base58Error::InvalidCharacter { character, index })
        };

        //Leading '1's are leading zero bytes
        if leading && digit == 0 {
            zeroes += 1;
            continue;
        }
        leading = false;
        magnitude.mul_add_small(58, digit);
    }

    let mut result = vec![0u8; zeroes];
    result.extend(magnitude.to_be_bytes());
    Ok(result)
}

/// Appends the 4 byte double SHA256 checksum to the payload and encodes the result.
pub fn check_encode(payload: &[u8]) -> String {
    let checksum = hash::checksum(payload);
    encode(&util::concat(payload, &checksum))
}

/// Returns the decoded payload with the checksum removed.
/// Version prefix is NOT removed.
pub fn check_decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
    let full = decode(encoded)?;
    if full.len() < CHECKSUM_LEN {
        return Err(Base58Error::TooShort { len: full.len() })
    }

    let (payload, found) = full.split_at(full.len() - CHECKSUM_LEN);
    let expected = hash::checksum(payload);
    if found != expected {
        let mut found_arr = [0u8; CHECKSUM_LEN];
        found_arr.copy_from_slice(found);
        trace!(encoded, "base58check checksum mismatch");
        return Err(Base58Error::ChecksumMismatch { expected, found: found_arr })
    }

    Ok(payload.to_vec())
}

/// Checks that every character is base58 and that the embedded checksum matches.
pub fn is_valid(encoded: &str) -> bool {
    encoded.chars().all(|c| digit_of(c).is_some()) && check_decode(encoded).is_ok()
}

fn digit_of(character: char) -> Option<u8> {
    if !character.is_ascii() { return None }

    match MAP_BASE58[character as usize] {
        -1 => None,
        d => Some(d as u8)
    }
}
