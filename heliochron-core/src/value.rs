//! Decimal decomposition for the 3-digit display

/// A value prepared for the 3-digit display
///
/// Carries the three least-significant decimal digits plus an overflow
/// flag for values that would need a fourth digit. The display signals
/// overflow with the decimal point on the most-significant digit rather
/// than through any error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValue {
    digits: [u8; 3],
    overflow: bool,
}

impl DisplayValue {
    /// Decompose an integer for display
    pub fn new(value: u16) -> Self {
        let mut rest = value;
        let units = (rest % 10) as u8;
        rest /= 10;
        let tens = (rest % 10) as u8;
        rest /= 10;
        let overflow = rest >= 10;
        let hundreds = (rest % 10) as u8;
        Self {
            digits: [units, tens, hundreds],
            overflow,
        }
    }

    /// Digits least-significant first: units, tens, hundreds
    pub fn digits(&self) -> [u8; 3] {
        self.digits
    }

    /// True when the value did not fit in three digits
    pub fn overflow(&self) -> bool {
        self.overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_value() {
        let v = DisplayValue::new(42);
        assert_eq!(v.digits(), [2, 4, 0]);
        assert!(!v.overflow());
    }

    #[test]
    fn test_three_digit_value() {
        let v = DisplayValue::new(907);
        assert_eq!(v.digits(), [7, 0, 9]);
        assert!(!v.overflow());
    }

    #[test]
    fn test_overflow_keeps_low_three_digits() {
        let v = DisplayValue::new(1023);
        assert_eq!(v.digits(), [3, 2, 0]);
        assert!(v.overflow());
    }

    #[test]
    fn test_overflow_boundary() {
        assert!(!DisplayValue::new(999).overflow());
        assert!(DisplayValue::new(1000).overflow());
    }

    proptest! {
        #[test]
        fn prop_digits_reconstruct_value_mod_1000(value in 0u16..=u16::MAX) {
            let v = DisplayValue::new(value);
            let [units, tens, hundreds] = v.digits();
            let rebuilt = u16::from(units) + 10 * u16::from(tens) + 100 * u16::from(hundreds);
            prop_assert_eq!(rebuilt, value % 1000);
            prop_assert_eq!(v.overflow(), value >= 1000);
        }

        #[test]
        fn prop_digits_stay_decimal(value in 0u16..=u16::MAX) {
            for d in DisplayValue::new(value).digits() {
                prop_assert!(d <= 9);
            }
        }
    }
}
