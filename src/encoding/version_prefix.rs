/*
    Version bytes prepended to Base58Check payloads.
    Only the two mainnet address prefixes are supported.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
    //Legacy pay to public key hash, encodes with a leading '1'
    BTCAddress = 0x00,
    //Pay to script hash, encodes with a leading '3'
    P2ScriptAddress = 0x05
}

impl VersionPrefix {
    pub fn to_byte(&self) -> u8 {
        *self as u8
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        vec![self.to_byte()]
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::BTCAddress),
            0x05 => Some(Self::P2ScriptAddress),
            _ => None
        }
    }
}
