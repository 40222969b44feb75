/*
    Hash module includes the hash compositions needed to
    checksum Base58Check payloads and hash public keys and scripts.
*/

use crate::{
    Ripemd160, Sha256, Digest, Hash160
};

/// Length of the Base58Check checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/*
    Takes in a byte array and returns the ripemd160 hash of it
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input);
    let mut out = [0u8; 20];
    out.copy_from_slice(&r.finalize());
    out
}

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    let mut out = [0u8; 32];
    out.copy_from_slice(&r.finalize());
    out
}

/// SHA256(SHA256(x)), used for Base58Check checksums.
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/// RIPEMD160(SHA256(x)), used for public key and script hashes.
pub fn hash160<T>(input: T) -> Hash160
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}

/// First four bytes of the double SHA256 of the input.
pub fn checksum<T>(input: T) -> [u8; CHECKSUM_LEN]
where T: AsRef<[u8]>
{
    let digest = sha256d(input);
    [digest[0], digest[1], digest[2], digest[3]]
}
