//! Portable arithmetic over binary extension fields GF(2^m)
//!
//! This crate implements the five field operations over GF(2^m) for a
//! caller-supplied irreducible reduction polynomial of degree m:
//! addition, multiplication, squaring, exponentiation, and
//! multiplicative inversion, plus the underlying polynomial reduction.
//! Elements are arbitrary-width bit-polynomials, so degrees far past
//! native word sizes (m = 491 and beyond) are supported.
//!
//! This is a straightforward reference implementation: no operation is
//! constant-time, no multiplication tables are precomputed, and no
//! hardware carry-less-multiply intrinsics are used.
//!
//! # Example
//!
//! ```
//! use gf2m::{BinaryField, FieldElement};
//!
//! // GF(2^8) with the AES reduction polynomial x^8 + x^4 + x^3 + x + 1
//! let field = BinaryField::new_verified(8, FieldElement::from_u64(0x11B))?;
//!
//! let a = FieldElement::from_u64(0x53);
//! let inv = field.invert(&a)?;
//! assert!(field.mul(&a, &inv).is_one());
//! # Ok::<(), gf2m::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Field arithmetic
pub mod field;
pub use field::{constants, BinaryField, FieldElement};
