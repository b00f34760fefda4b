//! Unit tests for budget aggregation.

use rust_decimal_macros::dec;

use super::error::BudgetError;
use super::totals::{compute_totals, iva_rate, verify_totals};
use super::types::{CostInputs, LineItem};
use cotiza_shared::types::MoneyError;

fn inputs(materials: &str, operational: &str, administrative: &str) -> CostInputs {
    CostInputs {
        materials_total: materials.parse().unwrap(),
        operational_total: operational.parse().unwrap(),
        administrative_cost: administrative.parse().unwrap(),
    }
}

#[test]
fn test_reference_vector() {
    // 100.00 / 50.00 / 10.00 -> 160.00 / 30.40 / 190.40
    let totals = compute_totals(&inputs("100.00", "50.00", "10.00")).unwrap();
    assert_eq!(totals.subtotal, dec!(160.00));
    assert_eq!(totals.iva, dec!(30.40));
    assert_eq!(totals.grand_total, dec!(190.40));
}

#[test]
fn test_iva_rate_is_19_percent() {
    assert_eq!(iva_rate(), dec!(0.19));
}

#[test]
fn test_zero_inputs() {
    let totals = compute_totals(&inputs("0", "0", "0")).unwrap();
    assert_eq!(totals.subtotal, dec!(0));
    assert_eq!(totals.iva, dec!(0.00));
    assert_eq!(totals.grand_total, dec!(0.00));
}

#[test]
fn test_iva_rounds_to_two_decimals() {
    // subtotal 10.01 -> iva 1.9019 -> 1.90
    let totals = compute_totals(&inputs("10.01", "0", "0")).unwrap();
    assert_eq!(totals.iva, dec!(1.90));
    assert_eq!(totals.grand_total, dec!(11.91));
}

#[test]
fn test_negative_materials_rejected() {
    let err = compute_totals(&inputs("-1.00", "0", "0")).unwrap_err();
    assert_eq!(err, BudgetError::NegativeAmount("materials total"));
}

#[test]
fn test_negative_administrative_rejected() {
    let err = compute_totals(&inputs("0", "0", "-0.01")).unwrap_err();
    assert_eq!(err, BudgetError::NegativeAmount("administrative cost"));
}

#[test]
fn test_idempotence() {
    let base = inputs("123.45", "67.89", "10.11");
    let first = compute_totals(&base).unwrap();
    let second = compute_totals(&base).unwrap();
    assert_eq!(first, second);
    assert!(verify_totals(&base, &first));
}

#[test]
fn test_verify_detects_divergence() {
    let base = inputs("100.00", "50.00", "10.00");
    let mut totals = compute_totals(&base).unwrap();
    totals.iva = dec!(30.41);
    assert!(!verify_totals(&base, &totals));
}

#[test]
fn test_line_item_cable_example() {
    let item = LineItem::new("Cable", 3, dec!(2.50)).unwrap();
    assert_eq!(item.total, dec!(7.50));
}

#[test]
fn test_line_item_negative_quantity_rejected() {
    let err = LineItem::new("Cable", -1, dec!(2.50)).unwrap_err();
    assert_eq!(err, BudgetError::Money(MoneyError::NegativeQuantity));
}
