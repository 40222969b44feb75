/*
    Byte array helpers shared by the codec and the address conversion.
    Every helper returns a new vector and leaves the input untouched.
*/

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UtilError {
    #[error("index {index} is out of range for a slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot take {count} bytes from index {index} of a slice of length {len}")]
    CountOutOfRange { index: usize, count: usize, len: usize },

    #[error("expected {expected} bytes, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError)
}

/*
    Decodes hex strings into a byte vector
*/
pub fn decode_02x(s: &str) -> Result<Vec<u8>, UtilError> {
    Ok(hex::decode(s)?)
}

/*
    Encodes byte slices into hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Returns a copy of `bytes` with `item` placed in front.
pub fn prepend(bytes: &[u8], item: u8) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + 1);
    result.push(item);
    result.extend_from_slice(bytes);
    result
}

/// Returns a copy of `bytes` with `item` placed at the end.
pub fn append(bytes: &[u8], item: u8) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + 1);
    result.extend_from_slice(bytes);
    result.push(item);
    result
}

/// Concatenates two slices into a new vector.
pub fn concat(first: &[u8], second: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(first.len() + second.len());
    result.extend_from_slice(first);
    result.extend_from_slice(second);
    result
}

/**
    Copies `count` bytes starting at `index`.

    `index` has to point at an existing byte, so any index into an
    empty slice is out of range.
*/
pub fn sub_array(bytes: &[u8], index: usize, count: usize) -> Result<Vec<u8>, UtilError> {
    if index >= bytes.len() {
        return Err(UtilError::IndexOutOfRange { index, len: bytes.len() })
    }
    if count > bytes.len() - index {
        return Err(UtilError::CountOutOfRange { index, count, len: bytes.len() })
    }

    Ok(bytes[index..index + count].to_vec())
}

/// Copies everything from `index` to the end of the slice.
pub fn sub_array_from(bytes: &[u8], index: usize) -> Result<Vec<u8>, UtilError> {
    sub_array(bytes, index, bytes.len().saturating_sub(index))
}

/// Copies the last `count` bytes of the slice.
pub fn sub_array_from_end(bytes: &[u8], count: usize) -> Result<Vec<u8>, UtilError> {
    if count > bytes.len() {
        return Err(UtilError::CountOutOfRange { index: 0, count, len: bytes.len() })
    }

    Ok(bytes[bytes.len() - count..].to_vec())
}

/**
    Converts a slice into a fixed size array
*/
pub fn try_into<const N: usize>(bytes: &[u8]) -> Result<[u8; N], UtilError> {
    bytes.try_into()
        .map_err(|_| UtilError::LengthMismatch { expected: N, found: bytes.len() })
}
