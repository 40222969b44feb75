use crate::{
    hash,
    Hash160,
    script::{
        ScriptBuilder,
        opcodes
    }
};

/// Raw script bytes. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemScript {
    code: Vec<u8>
}

impl RedeemScript {
    /**
        Create a new instance of self
    */
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            code
        }
    }

    /**
        Hash the script with Hash160
    */
    pub fn hash(&self) -> Hash160 {
        hash::hash160(&self.code)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// P2WPKH witness program for an already hashed public key
    /// 0x0014 <20-byte-pubkey-hash>
    pub fn p2wpkh_from_hash(pubkey_hash: &Hash160) -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_0)
            .push_opcode(opcodes::OP_PUSHBYTES_20)
            .push_slice(pubkey_hash)
            .into_script()
    }
}

impl AsRef<[u8]> for RedeemScript {
    fn as_ref(&self) -> &[u8] {
        &self.code
    }
}
