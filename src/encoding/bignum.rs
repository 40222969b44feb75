/*
    Minimal arbitrary width unsigned integer used by the base58 codec.

    Only the operations needed to move between base 256 and base 58 are
    implemented: multiply-add and divide by a single byte, and byte
    import/export in big-endian order.
*/

/// Unsigned integer stored as little-endian base 256 limbs.
/// The most significant limb is never zero, so zero has no limbs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigNum {
    limbs: Vec<u8>
}

impl BigNum {
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Reads a big-endian byte string. Leading zero bytes carry no magnitude and are dropped.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs: Vec<u8> = bytes.iter().rev().copied().collect();
        trim(&mut limbs);
        Self { limbs }
    }

    /// Minimal big-endian byte string. Zero exports as an empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.limbs.iter().rev().copied().collect()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// self = self * mul + add
    pub fn mul_add_small(&mut self, mul: u8, add: u8) {
        let mut carry = add as u32;
        for limb in self.limbs.iter_mut() {
            let value = *limb as u32 * mul as u32 + carry;
            *limb = (value & 0xff) as u8;
            carry = value >> 8;
        }
        while carry > 0 {
            self.limbs.push((carry & 0xff) as u8);
            carry >>= 8;
        }
        trim(&mut self.limbs);
    }

    /// self = self / divisor, returning the remainder.
    ///
    /// Panics if `divisor` is zero.
    pub fn divmod_small(&mut self, divisor: u8) -> u8 {
        let divisor = divisor as u32;
        let mut remainder = 0u32;
        for limb in self.limbs.iter_mut().rev() {
            let value = (remainder << 8) | *limb as u32;
            *limb = (value / divisor) as u8;
            remainder = value % divisor;
        }
        trim(&mut self.limbs);
        remainder as u8
    }
}

fn trim(limbs: &mut Vec<u8>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}


#[cfg(test)]
mod tests {
    use super::BigNum;

    #[test]
    fn zero_has_no_bytes() {
        assert!(BigNum::zero().is_zero());
        assert!(BigNum::from_be_bytes(&[0, 0, 0]).is_zero());
        assert!(BigNum::from_be_bytes(&[]).is_zero());
        assert_eq!(BigNum::from_be_bytes(&[0, 0]).to_be_bytes(), Vec::<u8>::new());
    }

    #[test]
    fn import_export_strips_leading_zeroes() {
        let n = BigNum::from_be_bytes(&[0x00, 0x01, 0x00, 0xff]);
        assert_eq!(n.to_be_bytes(), vec![0x01, 0x00, 0xff]);
    }

    #[test]
    fn mul_add_carries_into_new_limbs() {
        let mut n = BigNum::zero();
        n.mul_add_small(58, 57);
        assert_eq!(n.to_be_bytes(), vec![57]);

        //57 * 58 + 57 = 3363 = 0x0d23
        n.mul_add_small(58, 57);
        assert_eq!(n.to_be_bytes(), vec![0x0d, 0x23]);

        //Multiplying zero by anything and adding zero stays zero
        let mut z = BigNum::zero();
        z.mul_add_small(58, 0);
        assert!(z.is_zero());
    }

    #[test]
    fn divmod_matches_native_arithmetic() {
        let value: u64 = 0x0123_4567_89ab_cdef;
        let mut n = BigNum::from_be_bytes(&value.to_be_bytes());
        let r = n.divmod_small(58);

        assert_eq!(r as u64, value % 58);
        assert_eq!(n, BigNum::from_be_bytes(&(value / 58).to_be_bytes()));
    }

    #[test]
    fn divmod_down_to_zero() {
        let mut n = BigNum::from_be_bytes(&[0x01, 0x00]);
        assert_eq!(n.divmod_small(58), (256 % 58) as u8);
        assert_eq!(n.to_be_bytes(), vec![(256 / 58) as u8]);
        assert_eq!(n.divmod_small(58), 4);
        assert!(n.is_zero());
    }
}
