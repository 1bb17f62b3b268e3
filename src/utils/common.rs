use num::{BigUint, One};

/// Index reported by a lookup that found nothing.
pub const NOT_FOUND_INDEX: usize = usize::MAX;

/// `2^256 - 1`, the not-found index as seen by callers working with 256-bit words.
pub fn max_uint_256() -> BigUint {
    (BigUint::one() << 256u32) - BigUint::one()
}

// widen an index to a 256-bit word, mapping the sentinel to `2^256 - 1`
pub fn index_to_word(index: usize) -> BigUint {
    if index == NOT_FOUND_INDEX {
        return max_uint_256();
    }

    BigUint::from(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_uint_256() {
        let value = max_uint_256();
        assert_eq!(value.bits(), 256);
        assert_eq!(value.to_bytes_be(), vec![0xff; 32]);
    }

    #[test]
    fn test_index_to_word() {
        assert_eq!(index_to_word(0), BigUint::from(0u32));
        assert_eq!(index_to_word(7), BigUint::from(7u32));
        assert_eq!(index_to_word(NOT_FOUND_INDEX), max_uint_256());
    }
}
