//! Document tree types.
//!
//! The tree is serialized as tagged JSON for the rendering backend. Optional
//! content (logo, thank-you message) is omitted from the tree entirely,
//! never emitted as an empty placeholder.

use serde::{Deserialize, Serialize};

use crate::budget::{BudgetTotals, CostInputs};

/// Company branding/contact block printed on documents.
///
/// Every field is optional; absent fields become placeholders or are
/// omitted, never errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company display name.
    pub company_name: Option<String>,
    /// Company slogan.
    pub slogan: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Storage key of the uploaded logo asset.
    pub logo_key: Option<String>,
    /// Message shown in the document footer.
    pub thank_you_message: Option<String>,
}

/// A budget as needed for printing.
#[derive(Debug, Clone)]
pub struct PrintableBudget {
    /// Client the budget was prepared for.
    pub client_name: String,
    /// The three base cost fields.
    pub costs: CostInputs,
    /// Stored derived totals.
    pub totals: BudgetTotals,
}

/// An assembled, order-preserving document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTree {
    /// Top-level blocks in render order.
    pub blocks: Vec<Block>,
}

/// One top-level document block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Company branding header.
    Header(HeaderBlock),
    /// Document title and client line.
    Title(TitleBlock),
    /// Line item table.
    Items(ItemsBlock),
    /// Totals table.
    Totals(TotalsBlock),
    /// Date / thank-you footer.
    Footer(FooterBlock),
}

/// Company header: logo, name, slogan, contact lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
    /// Logo asset reference. Omitted when no logo was uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Company name, placeholder when absent.
    pub company_name: String,
    /// Slogan. Omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    /// Labeled contact lines (phone/email/address); empty segments omitted.
    pub contact_lines: Vec<String>,
}

/// Fixed title label plus the client line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleBlock {
    /// Fixed document title.
    pub label: String,
    /// Labeled client line.
    pub client_line: String,
}

/// Line item table with a fixed three-column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsBlock {
    /// Column headers.
    pub columns: Vec<String>,
    /// One row per line item, insertion order preserved.
    pub rows: Vec<ItemRow>,
}

/// One rendered line item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    /// Item description, verbatim.
    pub description: String,
    /// Quantity as an integer string.
    pub quantity: String,
    /// Total as a currency string.
    pub total: String,
}

/// Totals table: five fixed rows in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsBlock {
    /// Labeled amount rows.
    pub rows: Vec<TotalsRow>,
}

/// One labeled totals row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsRow {
    /// Row label.
    pub label: String,
    /// Amount as a currency string.
    pub amount: String,
}

/// Footer: issue date and optional thank-you message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterBlock {
    /// Labeled issue date, short format.
    pub date: String,
    /// Thank-you message. Omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thank_you: Option<String>,
}
