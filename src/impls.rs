/**
    This module combines all the boilerplate
    implementations of fmt::Display and more.
*/

use crate::{
    address::InvalidReason,
    encoding::VersionPrefix,
    script::RedeemScript,
    util::encode_02x
};
use std::fmt;

/*
    address module impls
*/
impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "address is empty"),
            Self::BadPrefix(c) => write!(f, "address starts with {:?} instead of '1'", c),
            Self::FailedValidation => write!(f, "address is not valid base58check")
        }
    }
}

/*
    script module impls
*/
impl fmt::Display for RedeemScript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", encode_02x(self.as_bytes()))
    }
}

/*
    encoding module impls
*/
impl fmt::Display for VersionPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::BTCAddress => "p2pkh",
            Self::P2ScriptAddress => "p2sh"
        };

        write!(f, "{} (0x{:02x})", val, self.to_byte())
    }
}
