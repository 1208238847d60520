//! Page definitions
//!
//! A [`PageDefinition`] describes one generated file: where it goes, the
//! title shown on the page, the data source it queries and the filter
//! applied to that data source's records.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// One generated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDefinition {
    /// Output path, relative to the base directory
    pub path: PathBuf,
    /// Human-readable page title
    pub title: String,
    /// Data source the page reads records from
    pub table: String,
    /// Filter predicate applied to each record, copied verbatim
    pub condition: String,
}

impl PageDefinition {
    /// Create a page definition
    pub fn new(
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        table: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            table: table.into(),
            condition: condition.into(),
        }
    }
}

/// Built-in purchasing, supplier and payroll pages
const BUILTIN_PAGES: &[(&str, &str, &str, &str)] = &[
    ("src/app/purchasing/requests/page.tsx", "Purchase Requests", "purchases", "type === 'Request'"),
    ("src/app/purchasing/rfq/page.tsx", "Request for Quotations", "purchases", "type === 'RFQ'"),
    ("src/app/purchasing/quotations/page.tsx", "Purchase Quotations", "purchases", "type === 'Quotation'"),
    ("src/app/purchasing/orders/page.tsx", "Purchase Orders", "purchases", "type === 'Order'"),
    ("src/app/purchasing/invoices/page.tsx", "Purchase Invoices", "purchases", "type === 'Invoice'"),
    ("src/app/purchasing/returns/page.tsx", "Purchase Returns", "purchases", "type === 'Return'"),
    ("src/app/suppliers/payments/page.tsx", "Supplier Payments", "cheques", "direction === 'Outgoing'"),
    ("src/app/suppliers/debit-notes/page.tsx", "Debit Notes", "purchases", "type === 'Debit Note'"),
    ("src/app/payroll/contracts/page.tsx", "Contracts", "payroll_contracts", "true"),
    ("src/app/payroll/register/page.tsx", "Salary Register", "salary_registers", "true"),
    ("src/app/payroll/slips/page.tsx", "Salary Slips", "salary_registers", "true"),
    ("src/app/payroll/advances/page.tsx", "Salary Advances", "advances", "true"),
    ("src/app/payroll/items/page.tsx", "Salary Items", "salary_items", "true"),
    ("src/app/payroll/templates/page.tsx", "Salary Templates", "salary_templates", "true"),
    ("src/app/payroll/review/page.tsx", "Review Requests", "requests", "true"),
];

/// Return the built-in page table in generation order
#[must_use]
pub fn builtin_pages() -> Vec<PageDefinition> {
    BUILTIN_PAGES
        .iter()
        .map(|&(path, title, table, condition)| PageDefinition::new(path, title, table, condition))
        .collect()
}

/// Output paths that appear more than once, in order of their second occurrence
///
/// Duplicates are not rejected: the later definition overwrites the file
/// written by the earlier one.
#[must_use]
pub fn duplicate_paths(pages: &[PageDefinition]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for page in pages {
        if !seen.insert(&page.path) && reported.insert(&page.path) {
            duplicates.push(page.path.clone());
        }
    }

    duplicates
}

/// For each page, whether a later page writes to the same path
#[must_use]
pub fn superseded(pages: &[PageDefinition]) -> Vec<bool> {
    pages
        .iter()
        .enumerate()
        .map(|(i, page)| pages[i + 1..].iter().any(|later| later.path == page.path))
        .collect()
}
