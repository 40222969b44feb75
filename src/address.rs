use crate::{
    Hash160,
    encoding::{
        base58::{self, Base58, Base58Error},
        version_prefix::VersionPrefix
    },
    script::RedeemScript,
    util::{self, UtilError}
};
use thiserror::Error;
use tracing::debug;

/// Version byte followed by a 20 byte public key hash.
pub const P2PKH_PAYLOAD_LEN: usize = 21;

/// Mainnet P2PKH addresses start with this character.
pub const P2PKH_LEADING_CHAR: char = '1';

/// Why an address was turned away before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    BadPrefix(char),
    FailedValidation
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressError {
    #[error("invalid P2PKH address: {0}")]
    InvalidAddress(InvalidReason),

    #[error("decoded P2PKH payload is {0} bytes, expected 21")]
    UnexpectedLength(usize),

    #[error(transparent)]
    Base58(#[from] Base58Error),

    #[error(transparent)]
    Util(#[from] UtilError)
}

pub struct Address;

impl Address {
    /**
        Creates a P2PKH address from a public key hash.
        * Base58Check( 0x00 | Hash160 )
    */
    pub fn from_pub_key_hash(hash: &Hash160) -> String {
        Base58::new(Some(VersionPrefix::BTCAddress), hash).check_encode()
    }

    /**
        Creates a P2SH address from a redeem script
        * Base58Check( 0x05 | Hash160( script ) )
    */
    pub fn from_script(script: &RedeemScript) -> String {
        Base58::new(Some(VersionPrefix::P2ScriptAddress), &script.hash()).check_encode()
    }

    /**
        Checks that an address is non empty, starts with '1' and carries a valid checksum.
        The payload length is not checked.
    */
    pub fn is_p2pkh(address: &str) -> bool {
        precheck(address).is_ok()
    }

    /**
        Converts a legacy P2PKH address into the P2SH-P2WPKH address
        paying to the same public key hash.

        The public key hash is wrapped in a witness program (0x0014 <hash>)
        and the Hash160 of that program becomes the P2SH script hash.
    */
    pub fn p2sh_p2wpkh_from_p2pkh(address: &str) -> Result<String, AddressError> {
        if let Err(reason) = precheck(address) {
            debug!(address, ?reason, "rejected address");
            return Err(AddressError::InvalidAddress(reason))
        }

        let decoded = base58::check_decode(address)?;
        if decoded.len() != P2PKH_PAYLOAD_LEN {
            debug!(address, len = decoded.len(), "unexpected payload length");
            return Err(AddressError::UnexpectedLength(decoded.len()))
        }

        //Drop the version byte
        let pubkey_hash: Hash160 = util::try_into(&util::sub_array(&decoded, 1, 20)?)?;
        let witness_script = RedeemScript::p2wpkh_from_hash(&pubkey_hash);
        debug!(
            pubkey_hash = %util::encode_02x(&pubkey_hash),
            witness_script = %witness_script,
            "built witness script"
        );

        let result = Self::from_script(&witness_script);
        debug!(address, %result, "converted address");
        Ok(result)
    }
}

fn precheck(address: &str) -> Result<(), InvalidReason> {
    match address.chars().next() {
        None => Err(InvalidReason::Empty),
        Some(c) if c != P2PKH_LEADING_CHAR => Err(InvalidReason::BadPrefix(c)),
        Some(_) if !base58::is_valid(address) => Err(InvalidReason::FailedValidation),
        Some(_) => Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hash,
        util::decode_02x
    };
    use rand::RngCore;

    const TEST_PUB_KEY_HEX: &str = "0204664c60ceabd82967055ccbd0f56a1585dfbd42032656efa501c463b16fbdfe";

    #[test]
    fn p2pkh_address_from_hash() {
        let hash = hash::hash160(decode_02x(TEST_PUB_KEY_HEX).unwrap());
        assert_eq!(Address::from_pub_key_hash(&hash), "124ERAK4SqHMNWXycHPautn5zDYRKr3b2E");
        assert_eq!(Address::from_pub_key_hash(&[0u8; 20]), "1111111111111111111114oLvT2");
    }

    #[test]
    fn p2sh_address_from_script() {
        let script = RedeemScript::p2wpkh_from_hash(&[0u8; 20]);
        assert_eq!(Address::from_script(&script), "3B9cnnd9j7n1fri8jzNkZZgjquA3ANQFeJ");
    }

    #[test]
    fn known_conversions() {
        let vectors = [
            ("124ERAK4SqHMNWXycHPautn5zDYRKr3b2E", "3ApZFKcHTU1KbspcUBwMjmh1W2z9WAEe5d"),
            ("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "33XqwwEZdYUj5bjyncxSWybiQTSjF66r2t"),
            ("1111111111111111111114oLvT2", "3B9cnnd9j7n1fri8jzNkZZgjquA3ANQFeJ")
        ];

        for (p2pkh, expected) in vectors {
            assert_eq!(Address::p2sh_p2wpkh_from_p2pkh(p2pkh).unwrap(), expected);
        }
    }

    #[test]
    /// Walks the zero hash through every step of the conversion
    fn zero_hash_end_to_end() {
        let payload = util::prepend(&[0u8; 20], 0x00);
        let p2pkh = base58::check_encode(&payload);
        assert_eq!(base58::check_decode(&p2pkh).unwrap(), payload);

        let witness_script = util::concat(&[0x00, 0x14], &[0u8; 20]);
        let expected = base58::check_encode(&util::prepend(&hash::hash160(&witness_script), 0x05));

        let converted = Address::p2sh_p2wpkh_from_p2pkh(&p2pkh).unwrap();
        assert_eq!(converted, expected);
        assert!(base58::is_valid(&converted));
        assert_eq!(base58::check_decode(&converted).unwrap()[0], 0x05);
    }

    #[test]
    fn random_hashes_convert_to_p2sh() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let mut hash = [0u8; 20];
            rng.fill_bytes(&mut hash);

            let p2pkh = Address::from_pub_key_hash(&hash);
            assert!(Address::is_p2pkh(&p2pkh));

            let converted = Address::p2sh_p2wpkh_from_p2pkh(&p2pkh).unwrap();
            match converted.chars().next() {
                Some('3') => assert!(true),
                _ => assert!(false)
            }

            let decoded = base58::check_decode(&converted).unwrap();
            assert_eq!(decoded.len(), P2PKH_PAYLOAD_LEN);
            assert_eq!(decoded[0], 0x05);
            assert_eq!(decoded[1..], RedeemScript::p2wpkh_from_hash(&hash).hash());
        }
    }

    #[test]
    fn conversion_is_deterministic() {
        let first = Address::p2sh_p2wpkh_from_p2pkh("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
        let second = Address::p2sh_p2wpkh_from_p2pkh("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
        assert_eq!(first, second);

        let bad = Address::p2sh_p2wpkh_from_p2pkh("31h1vYVSYuKP6AhS86fbRdMw9XHieotbST");
        assert_eq!(bad, Address::p2sh_p2wpkh_from_p2pkh("31h1vYVSYuKP6AhS86fbRdMw9XHieotbST"));
    }

    #[test]
    fn prefix_rejection() {
        //Checksum valid P2SH address
        let p2sh = "31h1vYVSYuKP6AhS86fbRdMw9XHieotbST";
        assert!(base58::is_valid(p2sh));
        assert_eq!(
            Address::p2sh_p2wpkh_from_p2pkh(p2sh),
            Err(AddressError::InvalidAddress(InvalidReason::BadPrefix('3')))
        );

        assert_eq!(
            Address::p2sh_p2wpkh_from_p2pkh(""),
            Err(AddressError::InvalidAddress(InvalidReason::Empty))
        );
        assert_eq!(
            Address::p2sh_p2wpkh_from_p2pkh(" 124ERAK4SqHMNWXycHPautn5zDYRKr3b2E"),
            Err(AddressError::InvalidAddress(InvalidReason::BadPrefix(' ')))
        );
        assert!(!Address::is_p2pkh(p2sh));
    }

    #[test]
    fn validation_rejection() {
        for bad in ["124ERAK4SqHMNWXycHPautn5zDYRKr3b2F", "124ERAK4SqHMNWXycHPautn5zDYRKr3b20", "1", "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"] {
            assert_eq!(
                Address::p2sh_p2wpkh_from_p2pkh(bad),
                Err(AddressError::InvalidAddress(InvalidReason::FailedValidation))
            );
            assert!(!Address::is_p2pkh(bad));
        }
    }

    #[test]
    fn length_rejection() {
        //Checksum valid, leading '1', wrong payload size
        let vectors = [
            ("12CkiRdwdSrw2j8kQpP4FcZQ3FSbXNvN", 20),
            ("1QRus492mJL2Cum4E2TSqUmjdCBE5m33yG", 22),
            ("1Wh4bh", 1)
        ];

        for (address, len) in vectors {
            assert!(Address::is_p2pkh(address));
            assert_eq!(Address::p2sh_p2wpkh_from_p2pkh(address), Err(AddressError::UnexpectedLength(len)));
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            AddressError::UnexpectedLength(20).to_string(),
            "decoded P2PKH payload is 20 bytes, expected 21"
        );
        assert_eq!(
            AddressError::InvalidAddress(InvalidReason::BadPrefix('3')).to_string(),
            "invalid P2PKH address: address starts with '3' instead of '1'"
        );
    }
}
