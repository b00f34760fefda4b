//! Printable document tree assembly.
//!
//! Maps a persisted budget plus the owner's company profile into an
//! abstract, renderer-agnostic document tree. The rendering backend (PDF)
//! consumes the tree; nothing here knows about pages, fonts, or margins.

pub mod assemble;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use assemble::assemble;
pub use error::DocumentError;
pub use types::{
    Block, CompanyProfile, DocumentTree, FooterBlock, HeaderBlock, ItemRow, ItemsBlock,
    PrintableBudget, TitleBlock, TotalsBlock, TotalsRow,
};
