//! Monetary types for price and stake representation.

use rust_decimal::Decimal;

/// Decimal odds price (e.g. 1.70) represented as a Decimal for precision.
pub type Price = Decimal;

/// Stake amount represented as a Decimal for precision.
///
/// Deliberately unvalidated: a zero or negative stake is carried through the
/// totalizer arithmetic unchanged, matching the boundary contract.
pub type Stake = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_math_is_exact() {
        let price: Price = dec!(1.70);
        let stake: Stake = dec!(10);

        assert_eq!(price * stake, dec!(17.00));
    }
}
