/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_addrconv::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    address::{
        Address,
        AddressError,
        InvalidReason
    },

    encoding::{
        base58,
        Base58,
        Base58Error,
        VersionPrefix
    },

    hash::{
        hash160,
        sha256d
    },

    script::RedeemScript,

    util::{
        encode_02x,
        decode_02x,
        UtilError
    },

    Hash160

};
