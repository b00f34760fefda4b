//! Unit tests for document assembly.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::budget::{CostInputs, LineItem, compute_totals};

use super::assemble::{COMPANY_NAME_PLACEHOLDER, TITLE_LABEL, assemble};
use super::error::DocumentError;
use super::types::{Block, CompanyProfile, PrintableBudget};

fn sample_budget() -> PrintableBudget {
    let costs = CostInputs {
        materials_total: dec!(100.00),
        operational_total: dec!(50.00),
        administrative_cost: dec!(10.00),
    };
    PrintableBudget {
        client_name: "Acme Ltda".to_string(),
        totals: compute_totals(&costs).unwrap(),
        costs,
    }
}

fn sample_items() -> Vec<LineItem> {
    vec![
        LineItem::new("Cable", 3, dec!(2.50)).unwrap(),
        LineItem::new("Enchufe doble", 2, dec!(4.00)).unwrap(),
    ]
}

fn full_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: Some("Electricidad Danino".to_string()),
        slogan: Some("Instalaciones seguras".to_string()),
        phone: Some("+56 9 1234 5678".to_string()),
        email: Some("contacto@danino.cl".to_string()),
        address: Some("Av. Siempre Viva 742".to_string()),
        logo_key: Some("logos/owner.png".to_string()),
        thank_you_message: Some("Gracias por su preferencia".to_string()),
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

#[test]
fn test_block_order_is_fixed() {
    let tree = assemble(&sample_budget(), &sample_items(), None, date()).unwrap();

    assert_eq!(tree.blocks.len(), 5);
    assert!(matches!(tree.blocks[0], Block::Header(_)));
    assert!(matches!(tree.blocks[1], Block::Title(_)));
    assert!(matches!(tree.blocks[2], Block::Items(_)));
    assert!(matches!(tree.blocks[3], Block::Totals(_)));
    assert!(matches!(tree.blocks[4], Block::Footer(_)));
}

#[test]
fn test_missing_client_name_rejected() {
    let mut budget = sample_budget();
    budget.client_name = "   ".to_string();

    let err = assemble(&budget, &[], None, date()).unwrap_err();
    assert_eq!(err, DocumentError::MissingClientName);
}

#[test]
fn test_header_with_full_profile() {
    let profile = full_profile();
    let tree = assemble(&sample_budget(), &[], Some(&profile), date()).unwrap();

    let Block::Header(header) = &tree.blocks[0] else {
        panic!("expected header block");
    };
    assert_eq!(header.logo.as_deref(), Some("logos/owner.png"));
    assert_eq!(header.company_name, "Electricidad Danino");
    assert_eq!(header.slogan.as_deref(), Some("Instalaciones seguras"));
    assert_eq!(
        header.contact_lines,
        vec![
            "Tel: +56 9 1234 5678",
            "Email: contacto@danino.cl",
            "Dirección: Av. Siempre Viva 742",
        ]
    );
}

#[test]
fn test_header_without_profile_uses_placeholder() {
    let tree = assemble(&sample_budget(), &[], None, date()).unwrap();

    let Block::Header(header) = &tree.blocks[0] else {
        panic!("expected header block");
    };
    assert_eq!(header.logo, None);
    assert_eq!(header.company_name, COMPANY_NAME_PLACEHOLDER);
    assert_eq!(header.slogan, None);
    assert!(header.contact_lines.is_empty());
}

#[test]
fn test_logo_omitted_when_absent() {
    let profile = CompanyProfile {
        logo_key: None,
        ..full_profile()
    };
    let tree = assemble(&sample_budget(), &[], Some(&profile), date()).unwrap();

    let Block::Header(header) = &tree.blocks[0] else {
        panic!("expected header block");
    };
    assert_eq!(header.logo, None);
}

#[test]
fn test_empty_contact_segments_omitted() {
    let profile = CompanyProfile {
        phone: Some(String::new()),
        email: Some("contacto@danino.cl".to_string()),
        address: None,
        ..full_profile()
    };
    let tree = assemble(&sample_budget(), &[], Some(&profile), date()).unwrap();

    let Block::Header(header) = &tree.blocks[0] else {
        panic!("expected header block");
    };
    assert_eq!(header.contact_lines, vec!["Email: contacto@danino.cl"]);
}

#[test]
fn test_title_block() {
    let tree = assemble(&sample_budget(), &[], None, date()).unwrap();

    let Block::Title(title) = &tree.blocks[1] else {
        panic!("expected title block");
    };
    assert_eq!(title.label, TITLE_LABEL);
    assert_eq!(title.client_line, "Cliente: Acme Ltda");
}

#[test]
fn test_items_table_preserves_order_and_formatting() {
    let tree = assemble(&sample_budget(), &sample_items(), None, date()).unwrap();

    let Block::Items(items) = &tree.blocks[2] else {
        panic!("expected items block");
    };
    assert_eq!(items.columns, vec!["Descripción", "Cantidad", "Total"]);
    assert_eq!(items.rows.len(), 2);
    assert_eq!(items.rows[0].description, "Cable");
    assert_eq!(items.rows[0].quantity, "3");
    assert_eq!(items.rows[0].total, "$7.50");
    assert_eq!(items.rows[1].description, "Enchufe doble");
    assert_eq!(items.rows[1].total, "$8.00");
}

#[test]
fn test_totals_block_five_fixed_rows() {
    let tree = assemble(&sample_budget(), &sample_items(), None, date()).unwrap();

    let Block::Totals(totals) = &tree.blocks[3] else {
        panic!("expected totals block");
    };
    let labels: Vec<&str> = totals.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Subtotal Materiales:",
            "Mano de Obra:",
            "Subtotal:",
            "IVA (19%):",
            "Total Final:",
        ]
    );

    let amounts: Vec<&str> = totals.rows.iter().map(|r| r.amount.as_str()).collect();
    // Mano de Obra = 50.00 + 10.00 merged into one line
    assert_eq!(
        amounts,
        vec!["$100.00", "$60.00", "$160.00", "$30.40", "$190.40"]
    );
}

#[test]
fn test_footer_date_and_thank_you() {
    let profile = full_profile();
    let tree = assemble(&sample_budget(), &[], Some(&profile), date()).unwrap();

    let Block::Footer(footer) = &tree.blocks[4] else {
        panic!("expected footer block");
    };
    assert_eq!(footer.date, "Fecha: 14/03/2026");
    assert_eq!(footer.thank_you.as_deref(), Some("Gracias por su preferencia"));
}

#[test]
fn test_footer_thank_you_omitted_when_absent() {
    let profile = CompanyProfile {
        thank_you_message: None,
        ..full_profile()
    };
    let tree = assemble(&sample_budget(), &[], Some(&profile), date()).unwrap();

    let Block::Footer(footer) = &tree.blocks[4] else {
        panic!("expected footer block");
    };
    assert_eq!(footer.thank_you, None);
}

#[test]
fn test_assembly_is_deterministic() {
    let budget = sample_budget();
    let items = sample_items();
    let profile = full_profile();

    let first = assemble(&budget, &items, Some(&profile), date()).unwrap();
    let second = assemble(&budget, &items, Some(&profile), date()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_omitted_optionals_skipped_in_json() {
    let tree = assemble(&sample_budget(), &[], None, date()).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    assert!(!json.contains("\"logo\""));
    assert!(!json.contains("\"thank_you\""));
}
