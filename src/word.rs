use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingMul};

use crate::digits::Alphabet;
use crate::error::DecodeError;

/// Assemble lhex digits into an unsigned value, most significant digit first.
///
/// The empty string is zero. Width is not enforced: accumulation wraps at the
/// width of `T`, so callers pass 4 digits for a `u16` and 8 for a `u32`.
pub fn parse_word<T>(alphabet: &Alphabet, digits: &str) -> Result<T, DecodeError>
where
    T: PrimInt + Unsigned + WrappingAdd + WrappingMul + From<u8>,
{
    let radix = <T as From<u8>>::from(16);
    digits.chars().enumerate().try_fold(T::zero(), |acc, (i, c)| {
        let d = alphabet.require(c, i)?;
        Ok(acc.wrapping_mul(&radix).wrapping_add(&<T as From<u8>>::from(d)))
    })
}
