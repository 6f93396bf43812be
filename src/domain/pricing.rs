use crate::error::{Result, SalesError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Computes the discounted line total: `quantity * unit_price * (1 - discount/100)`.
///
/// Exact decimal arithmetic, no rounding — currency formatting is the
/// caller's concern. Discounts outside [0, 100] are rejected.
pub fn compute_total(quantity: u32, unit_price: Decimal, discount_percent: Decimal) -> Result<Decimal> {
    if discount_percent < Decimal::ZERO || discount_percent > dec!(100) {
        return Err(SalesError::Validation(format!(
            "discount percent out of range: {discount_percent}"
        )));
    }
    let quantity = Decimal::from(quantity);
    Ok(quantity * unit_price * (Decimal::ONE - discount_percent / dec!(100)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_discount_is_full_price() {
        assert_eq!(compute_total(2, dec!(100.0), dec!(0)).unwrap(), dec!(200.0));
    }

    #[test]
    fn test_full_discount_is_free() {
        assert_eq!(compute_total(3, dec!(50.0), dec!(100)).unwrap(), dec!(0.0));
    }

    #[test]
    fn test_partial_discount() {
        // 2 * 100 * 0.9 = 180
        assert_eq!(compute_total(2, dec!(100), dec!(10)).unwrap(), dec!(180.0));
    }

    #[test]
    fn test_monotonically_non_increasing_in_discount() {
        let mut prev = compute_total(5, dec!(33.3), dec!(0)).unwrap();
        for d in 1..=100 {
            let next = compute_total(5, dec!(33.3), Decimal::from(d)).unwrap();
            assert!(next <= prev, "total increased at discount {d}");
            prev = next;
        }
    }

    #[test]
    fn test_out_of_range_discount_rejected() {
        assert!(matches!(
            compute_total(1, dec!(10), dec!(100.01)),
            Err(SalesError::Validation(_))
        ));
        assert!(matches!(
            compute_total(1, dec!(10), dec!(-0.5)),
            Err(SalesError::Validation(_))
        ));
    }
}
