//! Pure budget-to-document-tree transform.

use chrono::NaiveDate;

use cotiza_shared::types::format_currency;

use crate::budget::{IVA_RATE_PERCENT, LineItem};

use super::error::DocumentError;
use super::types::{
    Block, CompanyProfile, DocumentTree, FooterBlock, HeaderBlock, ItemRow, ItemsBlock,
    PrintableBudget, TitleBlock, TotalsBlock, TotalsRow,
};

/// Fixed document title.
pub const TITLE_LABEL: &str = "PRESUPUESTO";

/// Placeholder shown when no company name is configured.
pub const COMPANY_NAME_PLACEHOLDER: &str = "Company Name";

/// Assembles the document tree for one printable budget.
///
/// A pure, side-effect-free transform: identical inputs always produce a
/// structurally identical tree. The issue date is an input so the assembler
/// never reads the clock.
///
/// # Errors
///
/// Returns `DocumentError::MissingClientName` when the client name is blank.
/// An absent company profile is not an error; it renders as placeholders.
pub fn assemble(
    budget: &PrintableBudget,
    items: &[LineItem],
    profile: Option<&CompanyProfile>,
    issue_date: NaiveDate,
) -> Result<DocumentTree, DocumentError> {
    if budget.client_name.trim().is_empty() {
        return Err(DocumentError::MissingClientName);
    }

    let blocks = vec![
        Block::Header(header_block(profile)),
        Block::Title(title_block(&budget.client_name)),
        Block::Items(items_block(items)),
        Block::Totals(totals_block(budget)),
        Block::Footer(footer_block(profile, issue_date)),
    ];

    Ok(DocumentTree { blocks })
}

/// Returns the value if it holds non-blank text.
fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn header_block(profile: Option<&CompanyProfile>) -> HeaderBlock {
    let mut contact_lines = Vec::new();
    if let Some(p) = profile {
        if let Some(phone) = non_blank(p.phone.as_ref()) {
            contact_lines.push(format!("Tel: {phone}"));
        }
        if let Some(email) = non_blank(p.email.as_ref()) {
            contact_lines.push(format!("Email: {email}"));
        }
        if let Some(address) = non_blank(p.address.as_ref()) {
            contact_lines.push(format!("Dirección: {address}"));
        }
    }

    HeaderBlock {
        logo: profile.and_then(|p| non_blank(p.logo_key.as_ref())),
        company_name: profile
            .and_then(|p| non_blank(p.company_name.as_ref()))
            .unwrap_or_else(|| COMPANY_NAME_PLACEHOLDER.to_string()),
        slogan: profile.and_then(|p| non_blank(p.slogan.as_ref())),
        contact_lines,
    }
}

fn title_block(client_name: &str) -> TitleBlock {
    TitleBlock {
        label: TITLE_LABEL.to_string(),
        client_line: format!("Cliente: {}", client_name.trim()),
    }
}

fn items_block(items: &[LineItem]) -> ItemsBlock {
    ItemsBlock {
        columns: vec![
            "Descripción".to_string(),
            "Cantidad".to_string(),
            "Total".to_string(),
        ],
        rows: items
            .iter()
            .map(|item| ItemRow {
                description: item.description.clone(),
                quantity: item.quantity.to_string(),
                total: format_currency(item.total),
            })
            .collect(),
    }
}

fn totals_block(budget: &PrintableBudget) -> TotalsBlock {
    // Labor is operational + administrative merged into one display line.
    let labor = budget.costs.operational_total + budget.costs.administrative_cost;

    TotalsBlock {
        rows: vec![
            TotalsRow {
                label: "Subtotal Materiales:".to_string(),
                amount: format_currency(budget.costs.materials_total),
            },
            TotalsRow {
                label: "Mano de Obra:".to_string(),
                amount: format_currency(labor),
            },
            TotalsRow {
                label: "Subtotal:".to_string(),
                amount: format_currency(budget.totals.subtotal),
            },
            TotalsRow {
                label: format!("IVA ({IVA_RATE_PERCENT}%):"),
                amount: format_currency(budget.totals.iva),
            },
            TotalsRow {
                label: "Total Final:".to_string(),
                amount: format_currency(budget.totals.grand_total),
            },
        ],
    }
}

fn footer_block(profile: Option<&CompanyProfile>, issue_date: NaiveDate) -> FooterBlock {
    FooterBlock {
        date: format!("Fecha: {}", issue_date.format("%d/%m/%Y")),
        thank_you: profile.and_then(|p| non_blank(p.thank_you_message.as_ref())),
    }
}
