//! Page template rendering
//!
//! Templates use single-brace markers for page values and doubled braces
//! for literal braces:
//!
//! | Text             | Renders as                        |
//! |------------------|-----------------------------------|
//! | `{title}`        | the page title                    |
//! | `{title:lower}`  | the page title, lower-cased       |
//! | `{table}`        | the data source name              |
//! | `{condition}`    | the filter expression             |
//! | `{{` / `}}`      | a literal `{` / `}`               |
//!
//! Any other brace is copied unchanged. Escapes and markers are resolved in
//! one left-to-right pass, so text inserted for a marker is never scanned
//! again and an escaped `{{title}}` stays the literal text `{title}`.
//!
//! # Example
//!
//! ```rust
//! use pagegen::pages::PageDefinition;
//! use pagegen::template::PageTemplate;
//!
//! let template = PageTemplate::new("<h1>{title}</h1> {{x}}");
//! let page = PageDefinition::new("out/a.txt", "Contracts", "payroll_contracts", "true");
//! assert_eq!(template.render(&page), "<h1>Contracts</h1> {x}");
//! ```

use std::borrow::Cow;
use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::pages::PageDefinition;

pub mod files;
pub use files::PAGE_TSX;

/// A named placeholder in a page template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `{title}`
    Title,
    /// `{title:lower}`
    TitleLower,
    /// `{table}`
    Table,
    /// `{condition}`
    Condition,
}

impl Marker {
    /// All markers, in the order they are documented
    pub const ALL: [Self; 4] = [Self::Title, Self::TitleLower, Self::Table, Self::Condition];

    /// Marker name as written between the braces
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::TitleLower => "title:lower",
            Self::Table => "table",
            Self::Condition => "condition",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|marker| marker.name() == name)
    }

    /// Match a marker token at the start of `text`
    ///
    /// Returns the marker and the byte length of its token.
    fn match_at(text: &str) -> Option<(Self, usize)> {
        let inner = text.strip_prefix('{')?;
        let close = inner.find('}')?;
        Self::from_name(&inner[..close]).map(|marker| (marker, close + 2))
    }

    fn resolve(self, page: &PageDefinition) -> Cow<'_, str> {
        match self {
            Self::Title => Cow::Borrowed(&page.title),
            Self::TitleLower => Cow::Owned(page.title.to_lowercase()),
            Self::Table => Cow::Borrowed(&page.table),
            Self::Condition => Cow::Borrowed(&page.condition),
        }
    }
}

/// Template text for generated pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    source: Cow<'static, str>,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PageTemplate {
    /// The built-in ERP module page
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            source: Cow::Borrowed(PAGE_TSX),
        }
    }

    /// Create a template from arbitrary text
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Load template text from a file
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ReadFile`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ScaffoldError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(source))
    }

    /// Raw template text
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Markers that never occur in this template
    #[must_use]
    pub fn missing_markers(&self) -> Vec<Marker> {
        let mut used = Vec::new();
        scan(&self.source, |token| {
            if let Token::Marker(marker) = token {
                used.push(marker);
            }
        });
        Marker::ALL
            .into_iter()
            .filter(|marker| !used.contains(marker))
            .collect()
    }

    /// Render the template for one page
    #[must_use]
    pub fn render(&self, page: &PageDefinition) -> String {
        let mut out = String::with_capacity(self.source.len() + 128);
        scan(&self.source, |token| match token {
            Token::Text(text) => out.push_str(text),
            Token::Marker(marker) => out.push_str(&marker.resolve(page)),
        });
        out
    }
}

enum Token<'a> {
    Text(&'a str),
    Marker(Marker),
}

fn scan<'a>(source: &'a str, mut emit: impl FnMut(Token<'a>)) {
    let mut rest = source;

    while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
        if pos > 0 {
            emit(Token::Text(&rest[..pos]));
        }
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            emit(Token::Text(&tail[..1]));
            rest = &tail[2..];
        } else if let Some((marker, len)) = Marker::match_at(tail) {
            emit(Token::Marker(marker));
            rest = &tail[len..];
        } else {
            emit(Token::Text(&tail[..1]));
            rest = &tail[1..];
        }
    }

    if !rest.is_empty() {
        emit(Token::Text(rest));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Double every brace so the text renders back unchanged
    fn escape_literal(text: &str) -> String {
        text.replace('{', "{{").replace('}', "}}")
    }

    fn contracts() -> PageDefinition {
        PageDefinition::new("out/a.txt", "Contracts", "payroll_contracts", "true")
    }

    #[test]
    fn test_markers_and_escapes() {
        let template = PageTemplate::new("T={title} D={table} C={condition} L={{x}}");
        assert_eq!(
            template.render(&contracts()),
            "T=Contracts D=payroll_contracts C=true L={x}"
        );
    }

    #[test]
    fn test_title_lower() {
        let template = PageTemplate::new("Manage all your {title:lower} here.");
        let page = PageDefinition::new("p", "Salary Slips", "salary_registers", "true");
        assert_eq!(template.render(&page), "Manage all your salary slips here.");
    }

    #[test]
    fn test_lone_braces_and_unknown_names_pass_through() {
        let template = PageTemplate::new("fn() { const { t } = x; size={20} {other} }");
        assert_eq!(
            template.render(&contracts()),
            "fn() { const { t } = x; size={20} {other} }"
        );
    }

    #[test]
    fn test_escaped_marker_is_literal() {
        let template = PageTemplate::new("{{title}}");
        assert_eq!(template.render(&contracts()), "{title}");
    }

    #[test]
    fn test_inserted_values_are_not_rescanned() {
        let template = PageTemplate::new("({condition})");
        let page = PageDefinition::new("p", "T", "t", "{{title}} && {table}");
        assert_eq!(template.render(&page), "({{title}} && {table})");
    }

    #[test]
    fn test_triple_braces() {
        let template = PageTemplate::new("`ID-${{1000+i}}`}}");
        assert_eq!(template.render(&contracts()), "`ID-${1000+i}`}");
    }

    #[test]
    fn test_missing_markers() {
        let template = PageTemplate::new("{title} {table}");
        assert_eq!(
            template.missing_markers(),
            vec![Marker::TitleLower, Marker::Condition]
        );
        assert!(PageTemplate::builtin().missing_markers().is_empty());
    }

    #[test]
    fn test_builtin_render() {
        let rendered = PageTemplate::builtin().render(&contracts());
        assert!(rendered.starts_with("\"use client\";\n"));
        assert!(rendered.contains("useERPData<any>('payroll_contracts')"));
        assert!(rendered.contains("data.filter((item: any) => true);"));
        assert!(rendered.contains("gradient-text\">Contracts</h2>"));
        assert!(rendered.contains("Manage all your contracts here."));
        assert!(rendered.contains("Found {filteredData.length} records"));
        assert!(rendered.contains("key={i}"));
        assert!(rendered.contains("`ID-${1000+i}`}"));
        assert!(rendered.contains("{new Date(item.created_at || Date.now()).toLocaleDateString()}"));
        assert!(!rendered.contains("{{"));
        assert!(!rendered.contains("{title"));
    }

    proptest! {
        #[test]
        fn escaped_text_round_trips(text in "[a-z{}:() ]{0,40}") {
            let template = PageTemplate::new(escape_literal(&text));
            prop_assert_eq!(template.render(&contracts()), text);
        }

        #[test]
        fn brace_free_text_is_unchanged(text in "[^{}]{0,60}") {
            let template = PageTemplate::new(text.clone());
            prop_assert_eq!(template.render(&contracts()), text);
        }
    }
}
