//! Parameters of widely used binary fields
//!
//! Every deployed GF(2^m) picks its reduction polynomial from a short
//! list of standard trinomials and pentanomials; the constructors here
//! build fields over the ones exercised throughout this crate.

use super::BinaryField;

/// Degree of the AES byte field.
pub const AES_FIELD_DEGREE: usize = 8;

/// Degree of the NIST K-163 field.
pub const K163_FIELD_DEGREE: usize = 163;

/// Degree of the sect283k1 field.
pub const SECT283K1_FIELD_DEGREE: usize = 283;

/// GF(2^8) with the AES polynomial x^8 + x^4 + x^3 + x + 1 (FIPS 197).
pub fn aes_field() -> BinaryField {
    BinaryField::pentanomial(AES_FIELD_DEGREE, 4, 3, 1)
        .expect("Standard AES field parameters must be valid")
}

/// GF(2^163) with the NIST K-163 pentanomial x^163 + x^7 + x^6 + x^3 + 1.
pub fn nist_k163_field() -> BinaryField {
    BinaryField::pentanomial(K163_FIELD_DEGREE, 7, 6, 3)
        .expect("Standard K-163 field parameters must be valid")
}

/// GF(2^283) with the sect283k1 pentanomial x^283 + x^12 + x^7 + x^5 + 1
/// (SEC 2).
pub fn sect283k1_field() -> BinaryField {
    BinaryField::pentanomial(SECT283K1_FIELD_DEGREE, 12, 7, 5)
        .expect("Standard sect283k1 field parameters must be valid")
}
