/*
    Minimal script support: just enough to build the
    version 0 witness program that nests a P2WPKH output in P2SH.
*/

pub mod builder;
pub mod redeem_script;

pub use builder::{
    Builder as ScriptBuilder,
    Opcode,
    opcodes
};
pub use redeem_script::RedeemScript;
