//! Constant-time operations to prevent timing attacks

use subtle::ConstantTimeEq;

/// Constant-time comparison of two slices
///
/// Returns true if the slices are equal, false otherwise. Runs in time that
/// depends only on the slice lengths, never on their contents.
pub fn ct_eq<T: ConstantTimeEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// All-ones word if the lowest bit of `bit` is set, zero otherwise
#[inline(always)]
pub fn ct_mask_u64(bit: u64) -> u64 {
    0u64.wrapping_sub(bit & 1)
}

/// All-ones mask if `value` is zero, zero otherwise
#[inline(always)]
pub fn ct_is_zero_u16(value: u16) -> u16 {
    ((value as u32).wrapping_sub(1) >> 16) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq() {
        assert!(ct_eq(&[1u64, 2, 3], &[1u64, 2, 3]));
        assert!(!ct_eq(&[1u64, 2, 3], &[1u64, 2, 4]));
        assert!(!ct_eq(&[1u64, 2], &[1u64, 2, 3]));
        assert!(ct_eq::<u8>(&[], &[]));
    }

    #[test]
    fn test_masks() {
        assert_eq!(ct_mask_u64(1), u64::MAX);
        assert_eq!(ct_mask_u64(0), 0);
        assert_eq!(ct_mask_u64(2), 0);
        assert_eq!(ct_is_zero_u16(0), 0xFFFF);
        assert_eq!(ct_is_zero_u16(1), 0);
        assert_eq!(ct_is_zero_u16(0xFFFF), 0);
    }
}
