//! Arbitrary-width binary polynomials used as field elements

use alloc::vec::Vec;
use core::fmt;

/// A polynomial over GF(2) of arbitrary degree.
///
/// Bit `i` of the value is the coefficient of `x^i`. The limbs are
/// stored little-endian as 64-bit words with the invariant that the
/// top limb is nonzero, so equality is structural and the zero
/// polynomial is the empty limb vector.
///
/// Unreduced intermediates (for example a carry-less product of two
/// degree-490 operands) simply grow past the field width; reduction
/// back below the field degree is the job of
/// [`BinaryField::reduce`](crate::BinaryField::reduce).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldElement {
    limbs: Vec<u64>,
}

impl FieldElement {
    /// The additive identity: the zero polynomial.
    pub fn zero() -> Self {
        FieldElement { limbs: Vec::new() }
    }

    /// The multiplicative identity: the constant polynomial 1.
    pub fn one() -> Self {
        FieldElement::from_u64(1)
    }

    /// Create an element from a `u64` bit pattern.
    pub fn from_u64(value: u64) -> Self {
        let mut element = FieldElement {
            limbs: alloc::vec![value],
        };
        element.normalize();
        element
    }

    /// Create an element from little-endian 64-bit limbs.
    ///
    /// Trailing zero limbs are stripped, so any limb slice is accepted.
    pub fn from_limbs(limbs: &[u64]) -> Self {
        let mut element = FieldElement {
            limbs: limbs.to_vec(),
        };
        element.normalize();
        element
    }

    /// Create an element from big-endian bytes.
    ///
    /// Every bit pattern is a valid polynomial, so this never fails;
    /// range checking against a field degree is done by
    /// [`BinaryField::element_from_bytes`](crate::BinaryField::element_from_bytes).
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity(bytes.len() / 8 + 1);
        for chunk in bytes.rchunks(8) {
            let mut buf = [0u8; 8];
            buf[8 - chunk.len()..].copy_from_slice(chunk);
            limbs.push(u64::from_be_bytes(buf));
        }
        let mut element = FieldElement { limbs };
        element.normalize();
        element
    }

    /// Convert to minimal big-endian bytes (no leading zero bytes).
    ///
    /// The zero polynomial encodes as a single `0x00` byte.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.is_zero() {
            return alloc::vec![0];
        }
        let mut bytes = Vec::with_capacity(self.limbs.len() * 8);
        for &limb in self.limbs.iter().rev() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        let skip = bytes.iter().position(|&b| b != 0).unwrap_or(0);
        bytes.drain(..skip);
        bytes
    }

    /// Check whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Check whether this is the constant polynomial 1.
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    /// Number of significant bits: one past the position of the highest
    /// set bit, or 0 for the zero polynomial.
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            Some(&top) => 64 * (self.limbs.len() - 1) + (64 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Degree of the polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        match self.bit_len() {
            0 => None,
            n => Some(n - 1),
        }
    }

    /// Get the coefficient of `x^i`.
    pub fn bit(&self, i: usize) -> bool {
        let limb_idx = i / 64;
        let bit_idx = i % 64;
        match self.limbs.get(limb_idx) {
            Some(&limb) => (limb >> bit_idx) & 1 == 1,
            None => false,
        }
    }

    /// Coefficient-wise addition over GF(2): bitwise XOR.
    pub fn xor(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.xor_shifted_assign(other, 0);
        result
    }

    /// XOR `other * x^shift` into `self` in place.
    ///
    /// This is the single primitive behind addition, carry-less
    /// multiplication, and long-division reduction.
    pub(crate) fn xor_shifted_assign(&mut self, other: &Self, shift: usize) {
        let limb_shift = shift / 64;
        let bit_shift = shift % 64;
        let needed = other.limbs.len() + limb_shift + 1;
        if self.limbs.len() < needed {
            self.limbs.resize(needed, 0);
        }
        if bit_shift == 0 {
            for (i, &limb) in other.limbs.iter().enumerate() {
                self.limbs[i + limb_shift] ^= limb;
            }
        } else {
            let mut carry = 0u64;
            for (i, &limb) in other.limbs.iter().enumerate() {
                self.limbs[i + limb_shift] ^= (limb << bit_shift) | carry;
                carry = limb >> (64 - bit_shift);
            }
            self.limbs[other.limbs.len() + limb_shift] ^= carry;
        }
        self.normalize();
    }

    /// Strip trailing zero limbs to restore the representation invariant.
    fn normalize(&mut self) {
        while let Some(&0) = self.limbs.last() {
            self.limbs.pop();
        }
    }
}

/// Carry-less product of two binary polynomials, without reduction.
///
/// Shift-and-add over GF(2): for every set bit `i` of `b`, XOR
/// `a * x^i` into the accumulator. The result has degree up to
/// `deg(a) + deg(b)`.
pub(crate) fn carryless_mul(a: &FieldElement, b: &FieldElement) -> FieldElement {
    let mut product = FieldElement::zero();
    for i in 0..b.bit_len() {
        if b.bit(i) {
            product.xor_shifted_assign(a, i);
        }
    }
    product
}

/// Remainder of `value` modulo `modulus` in GF(2)[x], by long division.
///
/// Each round XORs in the modulus shifted so its leading term cancels
/// the current leading term, strictly decreasing the bit-length, so
/// the loop runs at most `bit_len(value) - bit_len(modulus) + 1` times.
pub(crate) fn reduce_mod(value: &FieldElement, modulus: &FieldElement) -> FieldElement {
    debug_assert!(!modulus.is_zero());
    let modulus_len = modulus.bit_len();
    let mut t = value.clone();
    while t.bit_len() >= modulus_len {
        let shift = t.bit_len() - modulus_len;
        t.xor_shifted_assign(modulus, shift);
    }
    t
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limbs.split_last() {
            None => write!(f, "0"),
            Some((top, rest)) => {
                write!(f, "{:x}", top)?;
                for limb in rest.iter().rev() {
                    write!(f, "{:016x}", limb)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representation_invariant() {
        assert!(FieldElement::zero().is_zero());
        assert_eq!(FieldElement::from_u64(0), FieldElement::zero());
        assert_eq!(FieldElement::from_limbs(&[5, 0, 0]), FieldElement::from_u64(5));
        assert_eq!(FieldElement::from_limbs(&[]), FieldElement::zero());
    }

    #[test]
    fn test_bit_len() {
        assert_eq!(FieldElement::zero().bit_len(), 0);
        assert_eq!(FieldElement::one().bit_len(), 1);
        assert_eq!(FieldElement::from_u64(0x11B).bit_len(), 9);
        assert_eq!(FieldElement::from_limbs(&[0, 1]).bit_len(), 65);
        assert_eq!(FieldElement::zero().degree(), None);
        assert_eq!(FieldElement::from_u64(0x11B).degree(), Some(8));
    }

    #[test]
    fn test_xor_shifted_carry_across_limbs() {
        // x^63 * x = x^64: the shifted bit crosses into the next limb
        let mut acc = FieldElement::zero();
        acc.xor_shifted_assign(&FieldElement::from_u64(1 << 63), 1);
        assert_eq!(acc, FieldElement::from_limbs(&[0, 1]));

        // XOR of equal values cancels back to zero
        acc.xor_shifted_assign(&FieldElement::from_u64(1 << 63), 1);
        assert!(acc.is_zero());
    }

    #[test]
    fn test_carryless_mul_small() {
        // (x + 1)(x + 1) = x^2 + 1 over GF(2)
        let a = FieldElement::from_u64(0b11);
        assert_eq!(carryless_mul(&a, &a), FieldElement::from_u64(0b101));

        // (x + 1)(x^2 + 1) = x^3 + x^2 + x + 1
        let b = FieldElement::from_u64(0b101);
        assert_eq!(carryless_mul(&a, &b), FieldElement::from_u64(0b1111));

        assert!(carryless_mul(&a, &FieldElement::zero()).is_zero());
        assert_eq!(carryless_mul(&a, &FieldElement::one()), a);
    }

    #[test]
    fn test_reduce_mod_small() {
        // x^4 mod (x^4 + x + 1) = x + 1
        let modulus = FieldElement::from_u64(0b10011);
        let value = FieldElement::from_u64(0b10000);
        assert_eq!(reduce_mod(&value, &modulus), FieldElement::from_u64(0b11));

        // The modulus reduces to zero
        assert!(reduce_mod(&modulus, &modulus).is_zero());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let element = FieldElement::from_bytes_be(&[0x01, 0x1B]);
        assert_eq!(element, FieldElement::from_u64(0x11B));
        assert_eq!(element.to_bytes_be(), alloc::vec![0x01, 0x1B]);

        // Leading zero bytes are not significant
        assert_eq!(
            FieldElement::from_bytes_be(&[0x00, 0x00, 0x01, 0x1B]),
            element
        );

        assert_eq!(FieldElement::zero().to_bytes_be(), alloc::vec![0x00]);
        assert!(FieldElement::from_bytes_be(&[]).is_zero());
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(FieldElement::from_u64(0x11B).to_string(), "0x11b");
        assert_eq!(FieldElement::zero().to_string(), "0x0");
        assert_eq!(
            FieldElement::from_limbs(&[0xF, 1]).to_string(),
            "0x1000000000000000f"
        );
    }
}
