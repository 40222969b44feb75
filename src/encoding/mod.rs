/*
    Module that bundles together the encoding schemes used for legacy addresses
*/

pub mod version_prefix;
pub mod base58;
mod bignum;

pub use version_prefix::VersionPrefix;
pub use base58::{Base58, Base58Error};
