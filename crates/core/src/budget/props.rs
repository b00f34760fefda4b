//! Property-based tests for budget aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use cotiza_shared::types::{line_total, round2};

use super::totals::{compute_totals, iva_rate, verify_totals};
use super::types::CostInputs;

/// Strategy to generate non-negative amounts with two decimals
/// (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any non-negative inputs, iva equals round2(0.19 * subtotal)
    /// and grand total equals subtotal + iva.
    #[test]
    fn prop_tax_formula_holds(
        materials in amount(),
        operational in amount(),
        administrative in amount(),
    ) {
        let inputs = CostInputs {
            materials_total: materials,
            operational_total: operational,
            administrative_cost: administrative,
        };
        let totals = compute_totals(&inputs).unwrap();

        prop_assert_eq!(totals.subtotal, materials + operational + administrative);
        prop_assert_eq!(totals.iva, round2(totals.subtotal * iva_rate()));
        prop_assert_eq!(totals.grand_total, totals.subtotal + totals.iva);
    }

    /// Recomputation from stored inputs reproduces stored outputs exactly.
    #[test]
    fn prop_aggregation_is_idempotent(
        materials in amount(),
        operational in amount(),
        administrative in amount(),
    ) {
        let inputs = CostInputs {
            materials_total: materials,
            operational_total: operational,
            administrative_cost: administrative,
        };
        let stored = compute_totals(&inputs).unwrap();
        prop_assert!(verify_totals(&inputs, &stored));
    }

    /// Line totals always carry at most two fractional digits.
    #[test]
    fn prop_line_total_has_two_decimals(
        quantity in 0i64..10_000,
        unit_price in amount(),
    ) {
        let total = line_total(quantity, unit_price).unwrap();
        prop_assert!(total.scale() <= 2);
        prop_assert_eq!(total, round2(Decimal::from(quantity) * unit_price));
    }
}
