//! Arithmetic over binary extension fields GF(2^m)
//!
//! A [`BinaryField`] pairs a field degree `m` with an irreducible
//! reduction polynomial of degree exactly `m` and exposes the field
//! operations over [`FieldElement`] bit-polynomials: addition,
//! polynomial reduction, multiplication, squaring, exponentiation, and
//! multiplicative inversion. Elements are arbitrary-width, so degrees
//! well past native word sizes (for example m = 491) work unchanged.
//!
//! The field is immutable after construction and holds no interior
//! state, so one instance can be shared freely across threads.
//!
//! # Examples
//! ```
//! use gf2m::{BinaryField, FieldElement};
//!
//! // GF(2^8) with the AES reduction polynomial x^8 + x^4 + x^3 + x + 1
//! let field = BinaryField::new(8, FieldElement::from_u64(0x11B)).unwrap();
//!
//! let a = FieldElement::from_u64(0x53);
//! let b = FieldElement::from_u64(0xCA);
//! assert!(field.mul(&a, &b).is_one());
//! assert_eq!(field.invert(&a).unwrap(), b);
//! ```

mod element;
mod irreducible;

pub mod constants;

pub use element::FieldElement;

use crate::error::{validate, Error, Result};
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};

/// A binary extension field GF(2^m).
///
/// Holds the field degree `m` and the degree-m reduction polynomial.
/// Construction via [`BinaryField::new`] checks only the degree; the
/// caller is responsible for supplying an irreducible polynomial, and
/// a reducible one silently breaks [`invert`](BinaryField::invert).
/// Use [`BinaryField::new_verified`] to have irreducibility checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryField {
    m: usize,
    irreducible: FieldElement,
}

impl BinaryField {
    /// Create a field of degree `m` over the given reduction polynomial.
    ///
    /// Validates that `m > 0` and that the polynomial has degree
    /// exactly `m` (bit-length `m + 1`). Irreducibility is NOT tested;
    /// see [`BinaryField::new_verified`].
    pub fn new(m: usize, irreducible: FieldElement) -> Result<Self> {
        validate::parameter(m > 0, "BinaryField", "Field degree must be positive")?;
        validate::parameter(
            irreducible.bit_len() == m + 1,
            "BinaryField",
            "Reduction polynomial must have degree exactly m",
        )?;
        Ok(BinaryField { m, irreducible })
    }

    /// Create a field after verifying that the reduction polynomial is
    /// irreducible over GF(2).
    ///
    /// Runs the deterministic Rabin test on top of the degree checks of
    /// [`BinaryField::new`]. The test squares modulo the candidate
    /// polynomial `m` times, so for large degrees this costs about as
    /// much as one field inversion.
    pub fn new_verified(m: usize, irreducible: FieldElement) -> Result<Self> {
        let field = Self::new(m, irreducible)?;
        validate::parameter(
            irreducible::is_irreducible(&field.irreducible),
            "BinaryField",
            "Reduction polynomial is reducible",
        )?;
        Ok(field)
    }

    /// Create a field over the trinomial x^m + x^k + 1.
    pub fn trinomial(m: usize, k: usize) -> Result<Self> {
        validate::parameter(
            k > 0 && k < m,
            "BinaryField",
            "Trinomial middle term must satisfy 0 < k < m",
        )?;
        Self::new(m, poly_from_exponents(&[m, k, 0]))
    }

    /// Create a field over the pentanomial x^m + x^k3 + x^k2 + x^k1 + 1.
    pub fn pentanomial(m: usize, k3: usize, k2: usize, k1: usize) -> Result<Self> {
        validate::parameter(
            k1 > 0 && k1 < k2 && k2 < k3 && k3 < m,
            "BinaryField",
            "Pentanomial terms must satisfy 0 < k1 < k2 < k3 < m",
        )?;
        Self::new(m, poly_from_exponents(&[m, k3, k2, k1, 0]))
    }

    /// The field degree m.
    pub fn degree(&self) -> usize {
        self.m
    }

    /// The reduction polynomial.
    pub fn irreducible(&self) -> &FieldElement {
        &self.irreducible
    }

    /// Check whether an element lies in the field, i.e. has degree < m.
    pub fn contains(&self, a: &FieldElement) -> bool {
        a.bit_len() <= self.m
    }

    /// Field addition: coefficient-wise XOR.
    ///
    /// Characteristic-2 addition doubles as subtraction; every element
    /// is its own additive inverse. Inputs of degree < m produce a
    /// result of degree < m, so no reduction is performed. Inputs of
    /// larger degree are accepted and likewise left unreduced.
    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        a.xor(b)
    }

    /// Reduce a polynomial of any degree modulo the reduction
    /// polynomial, returning the canonical degree-< m representative.
    ///
    /// Long division over GF(2): while the value's bit-length reaches
    /// that of the reduction polynomial, XOR in the polynomial shifted
    /// so the leading terms cancel.
    pub fn reduce(&self, c: &FieldElement) -> FieldElement {
        element::reduce_mod(c, &self.irreducible)
    }

    /// Field multiplication: carry-less product followed by reduction.
    ///
    /// The unreduced product of two degree-< m operands reaches degree
    /// 2(m - 1), which the arbitrary-width element absorbs before the
    /// single reduction at the end.
    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        self.reduce(&element::carryless_mul(a, b))
    }

    /// Field squaring, defined as `mul(a, a)`.
    pub fn square(&self, a: &FieldElement) -> FieldElement {
        self.mul(a, a)
    }

    /// Raise `a` to a non-negative integer power by right-to-left
    /// square-and-multiply.
    ///
    /// The exponent is read as an integer bit pattern, least
    /// significant bit first. `pow(a, 0)` is 1 for every `a`, the zero
    /// element included; `pow(a, 1)` equals `reduce(a)`.
    pub fn pow(&self, a: &FieldElement, n: &FieldElement) -> FieldElement {
        let mut result = FieldElement::one();
        let mut base = a.clone();
        for i in 0..n.bit_len() {
            if n.bit(i) {
                result = self.mul(&result, &base);
            }
            base = self.square(&base);
        }
        result
    }

    /// Compute the multiplicative inverse of a nonzero element.
    ///
    /// Uses Fermat's little theorem for finite fields: every nonzero
    /// `a` satisfies `a^(2^m - 1) = 1`, so `a^(2^m - 2)` is the
    /// inverse. Returns an error for the zero element, which has no
    /// inverse.
    ///
    /// Correctness relies on the reduction polynomial actually being
    /// irreducible; see [`BinaryField::new_verified`].
    pub fn invert(&self, a: &FieldElement) -> Result<FieldElement> {
        if a.is_zero() {
            return Err(Error::param(
                "FieldElement",
                "Inversion of zero is undefined",
            ));
        }
        Ok(self.pow(a, &inversion_exponent(self.m)))
    }

    /// Generate a uniformly random field element in [0, 2^m).
    pub fn random_element<R: CryptoRng + RngCore>(&self, rng: &mut R) -> FieldElement {
        let limb_count = (self.m + 63) / 64;
        let mut limbs = alloc::vec![0u64; limb_count];
        for limb in limbs.iter_mut() {
            *limb = rng.next_u64();
        }
        let rem = self.m % 64;
        if rem != 0 {
            if let Some(top) = limbs.last_mut() {
                *top &= (1u64 << rem) - 1;
            }
        }
        FieldElement::from_limbs(&limbs)
    }

    /// Generate a uniformly random nonzero field element in [1, 2^m).
    pub fn random_nonzero_element<R: CryptoRng + RngCore>(&self, rng: &mut R) -> FieldElement {
        loop {
            let element = self.random_element(rng);
            if !element.is_zero() {
                return element;
            }
        }
    }

    /// Deserialize a field member from big-endian bytes.
    ///
    /// Returns an error if the encoded polynomial has degree >= m.
    pub fn element_from_bytes(&self, bytes: &[u8]) -> Result<FieldElement> {
        let element = FieldElement::from_bytes_be(bytes);
        if let Some(degree) = element.degree() {
            validate::degree("FieldElement", degree, self.m)?;
        }
        Ok(element)
    }

    /// Serialize a field member as ceil(m/8) big-endian bytes.
    ///
    /// Elements of degree >= m (unreduced values) fall back to their
    /// minimal encoding.
    pub fn element_to_bytes(&self, a: &FieldElement) -> Vec<u8> {
        let width = (self.m + 7) / 8;
        let minimal = a.to_bytes_be();
        if minimal.len() >= width {
            return minimal;
        }
        let mut bytes = alloc::vec![0u8; width];
        bytes[width - minimal.len()..].copy_from_slice(&minimal);
        bytes
    }
}

/// Build a polynomial from the exponents of its nonzero terms.
fn poly_from_exponents(exponents: &[usize]) -> FieldElement {
    let one = FieldElement::one();
    let mut poly = FieldElement::zero();
    for &e in exponents {
        poly.xor_shifted_assign(&one, e);
    }
    poly
}

/// The inversion exponent 2^m - 2, i.e. m bits with bit 0 cleared.
fn inversion_exponent(m: usize) -> FieldElement {
    let mut limbs = alloc::vec![u64::MAX; m / 64];
    let rem = m % 64;
    if rem != 0 {
        limbs.push((1u64 << rem) - 1);
    }
    if let Some(first) = limbs.first_mut() {
        *first &= !1;
    }
    FieldElement::from_limbs(&limbs)
}
