/*
    Library to convert legacy Bitcoin P2PKH addresses into their
    nested segwit (P2SH-P2WPKH) equivalent.

    The P2PKH address is Base58Check decoded to recover the public key hash,
    which is wrapped in a version 0 witness program:
        0x00 0x14 <20 byte pubkey hash>
    The Hash160 of that script is then Base58Check encoded with the
    P2SH version byte (0x05).

    Only mainnet P2PKH (version 0x00) and P2SH (version 0x05) are supported.

    References:
        - BIP-13 / BIP-16 for P2SH addresses
        - BIP-141 / BIP-49 for P2WPKH nested in P2SH
        - The Bitcoin Core base58 test vectors
*/

//Outward facing modules
pub mod address;
pub mod encoding;
pub mod script;
pub mod hash;
pub mod util;
pub mod prelude;

//Ambient modules
pub mod error;
pub mod config;
pub mod logging;
pub mod cli;

//Modules for internal use
mod impls;

pub use error::{Error, Result};

//Dependencies
use sha2::{Sha256, Digest};
use ripemd::Ripemd160;

/// 20 byte RIPEMD-160(SHA-256(x)) digest.
pub type Hash160 = [u8; 20];
