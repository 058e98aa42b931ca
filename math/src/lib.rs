//! Big-integer helpers for proof-of-work targets.
//!
//! Targets are 256-bit unsigned integers. Block headers carry them in the
//! 32-bit "compact" form: the top byte is a base-256 exponent (the byte
//! length of the value) and the low 23 bits a mantissa, with bit 23 reserved
//! as a sign flag.

pub use primitive_types::U256;
use thiserror::Error;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactError {
    #[error("compact target {0:#010x} is negative")]
    Negative(u32),

    #[error("compact target {0:#010x} overflows 256 bits")]
    Overflow(u32),
}

/// The all-ones 256-bit value shifted right by `shift` bits, which is how
/// proof-of-work ceilings are declared.
pub fn pow_limit_from_shift(shift: u32) -> U256 {
    U256::MAX >> (shift as usize)
}

/// Encodes a target into its compact 32-bit representation.
///
/// Precision below the top three significant bytes is dropped.
pub fn target_to_compact(target: &U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (*target >> (8 * (size - 3))).low_u32()
    };

    // The mantissa is signed, so keep bit 23 clear by moving into the exponent.
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | ((size as u32) << 24)
}

/// Decodes a compact target, rejecting negative and overflowing encodings.
pub fn compact_to_target(bits: u32) -> Result<U256, CompactError> {
    let size = bits >> 24;
    let word = bits & MANTISSA_MASK;

    if word != 0 && bits & SIGN_BIT != 0 {
        return Err(CompactError::Negative(bits));
    }
    if word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32)) {
        return Err(CompactError::Overflow(bits));
    }

    let target = if size <= 3 { U256::from(word >> (8 * (3 - size))) } else { U256::from(word) << ((8 * (size - 3)) as usize) };
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceilings_encode_to_known_compact_values() {
        assert_eq!(target_to_compact(&pow_limit_from_shift(20)), 0x1e0f_ffff);
        assert_eq!(target_to_compact(&pow_limit_from_shift(16)), 0x1f00_ffff);
        assert_eq!(target_to_compact(&pow_limit_from_shift(1)), 0x207f_ffff);
        assert_eq!(target_to_compact(&pow_limit_from_shift(32)), 0x1d00_ffff);
    }

    #[test]
    fn small_values() {
        assert_eq!(target_to_compact(&U256::zero()), 0);
        assert_eq!(target_to_compact(&U256::from(0x12u64)), 0x0112_0000);
        assert_eq!(target_to_compact(&U256::from(0x80u64)), 0x0200_8000);
        assert_eq!(compact_to_target(0x0112_0000), Ok(U256::from(0x12u64)));
        assert_eq!(compact_to_target(0x0200_8000), Ok(U256::from(0x80u64)));
    }

    #[test]
    fn decode_truncates_to_mantissa_precision() {
        let limit = pow_limit_from_shift(20);
        let decoded = compact_to_target(target_to_compact(&limit)).unwrap();
        assert!(decoded <= limit);
        assert_eq!(decoded, U256::from(0x0f_ffffu64) << (8 * 27));
    }

    #[test]
    fn rejects_negative_and_overflow() {
        assert_eq!(compact_to_target(0x0180_0001), Err(CompactError::Negative(0x0180_0001)));
        assert_eq!(compact_to_target(0x2301_0000), Err(CompactError::Overflow(0x2301_0000)));
        // A zero mantissa is never negative or overflowing.
        assert_eq!(compact_to_target(0x0080_0000), Ok(U256::zero()));
    }

    #[test]
    fn shift_ordering() {
        assert!(pow_limit_from_shift(20) < pow_limit_from_shift(16));
        assert!(pow_limit_from_shift(16) < pow_limit_from_shift(1));
    }
}
