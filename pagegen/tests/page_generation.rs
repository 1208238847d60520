//! Integration tests for page generation

use std::fs;
use std::path::Path;

use pagegen::pages::{builtin_pages, PageDefinition};
use pagegen::scaffold::{PageScaffolder, PageStatus, ScaffoldMode};
use pagegen::template::{PageTemplate, PAGE_TSX};
use tempfile::TempDir;

const SCENARIO_TEMPLATE: &str = "<h1>{title}</h1>\nsource={table}\nwhere ({condition})\nliteral {{x}}\nagain {title}\n";

fn write_all(base: &Path, template: PageTemplate, pages: Vec<PageDefinition>) {
    PageScaffolder::new(base, template, pages)
        .unwrap()
        .run(ScaffoldMode::Write)
        .unwrap();
}

/// Substitute-then-unescape, applied naively
fn naive_render(page: &PageDefinition) -> String {
    PAGE_TSX
        .replace("{title}", &page.title)
        .replace("{title:lower}", &page.title.to_lowercase())
        .replace("{table}", &page.table)
        .replace("{condition}", &page.condition)
        .replace("{{", "{")
        .replace("}}", "}")
}

/// Test the concrete contracts scenario
#[test]
fn test_contracts_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let page = PageDefinition::new("out/a.txt", "Contracts", "payroll_contracts", "true");

    write_all(temp_dir.path(), PageTemplate::new(SCENARIO_TEMPLATE), vec![page]);

    let content = fs::read_to_string(temp_dir.path().join("out/a.txt")).unwrap();
    assert_eq!(
        content,
        "<h1>Contracts</h1>\nsource=payroll_contracts\nwhere (true)\nliteral {x}\nagain Contracts\n"
    );
}

/// Test that every built-in page is written with its own values
#[test]
fn test_builtin_pages_written() {
    let temp_dir = TempDir::new().unwrap();
    write_all(temp_dir.path(), PageTemplate::builtin(), builtin_pages());

    for page in builtin_pages() {
        let path = temp_dir.path().join(&page.path);
        assert!(path.is_file(), "Page should exist: {}", path.display());

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, naive_render(&page), "Unexpected content: {}", path.display());
        assert!(content.contains(&format!("useERPData<any>('{}')", page.table)));
        assert!(content.contains(&format!("data.filter((item: any) => {});", page.condition)));
        assert!(content.contains(&format!("Manage all your {} here.", page.title.to_lowercase())));
    }
}

/// Test that running twice produces byte-identical output
#[test]
fn test_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = |base: &Path| -> Vec<Vec<u8>> {
        builtin_pages()
            .iter()
            .map(|page| fs::read(base.join(&page.path)).unwrap())
            .collect()
    };

    write_all(temp_dir.path(), PageTemplate::builtin(), builtin_pages());
    let first = snapshot(temp_dir.path());

    write_all(temp_dir.path(), PageTemplate::builtin(), builtin_pages());
    let second = snapshot(temp_dir.path());

    assert_eq!(first, second);
}

/// Test that changing one definition leaves the others untouched
#[test]
fn test_no_cross_contamination() {
    let original = TempDir::new().unwrap();
    let modified = TempDir::new().unwrap();

    let pages = builtin_pages();
    let mut changed = pages.clone();
    changed[0].title = "Something Else".to_string();
    changed[0].table = "other_table".to_string();
    changed[0].condition = "false".to_string();

    write_all(original.path(), PageTemplate::builtin(), pages.clone());
    write_all(modified.path(), PageTemplate::builtin(), changed);

    let read = |base: &Path, page: &PageDefinition| fs::read_to_string(base.join(&page.path)).unwrap();

    assert_ne!(read(original.path(), &pages[0]), read(modified.path(), &pages[0]));
    for page in &pages[1..] {
        assert_eq!(read(original.path(), page), read(modified.path(), page));
    }
}

/// Test that duplicate output paths resolve to the last definition
#[test]
fn test_duplicate_paths_last_write_wins() {
    let temp_dir = TempDir::new().unwrap();
    let pages = vec![
        PageDefinition::new("out/a.txt", "First", "first_table", "true"),
        PageDefinition::new("out/a.txt", "Second", "second_table", "false"),
    ];

    write_all(temp_dir.path(), PageTemplate::new("{title}:{table}:{condition}"), pages);

    let content = fs::read_to_string(temp_dir.path().join("out/a.txt")).unwrap();
    assert_eq!(content, "Second:second_table:false");
}

/// Test that check passes right after writing pages that share a path
#[test]
fn test_duplicate_paths_check_clean_after_write() {
    let temp_dir = TempDir::new().unwrap();
    let pages = vec![
        PageDefinition::new("out/a.txt", "First", "first_table", "true"),
        PageDefinition::new("out/a.txt", "Second", "second_table", "false"),
    ];
    let scaffolder =
        PageScaffolder::new(temp_dir.path(), PageTemplate::new("{title}:{table}:{condition}"), pages).unwrap();

    scaffolder.run(ScaffoldMode::Write).unwrap();
    let report = scaffolder.run(ScaffoldMode::Check).unwrap();

    assert!(report.is_clean(), "check should pass after a write run");
    assert_eq!(report.outcomes[0].status, PageStatus::Superseded);
    assert_eq!(report.outcomes[1].status, PageStatus::UpToDate);
}

/// Test that the contracts page matches the expected bytes exactly
#[test]
fn test_contracts_page_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let page = PageDefinition::new("src/app/payroll/contracts/page.tsx", "Contracts", "payroll_contracts", "true");

    write_all(temp_dir.path(), PageTemplate::builtin(), vec![page.clone()]);

    let written = fs::read(temp_dir.path().join(&page.path)).unwrap();
    let expected = include_bytes!("fixtures/payroll_contracts_page.tsx");
    assert_eq!(written.len(), expected.len());
    assert_eq!(written, expected.to_vec());
}

/// Test that existing files are overwritten
#[test]
fn test_existing_file_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("src/app/payroll/contracts/page.tsx");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "hand written").unwrap();

    write_all(
        temp_dir.path(),
        PageTemplate::builtin(),
        vec![PageDefinition::new("src/app/payroll/contracts/page.tsx", "Contracts", "payroll_contracts", "true")],
    );

    let content = fs::read_to_string(&target).unwrap();
    assert!(content.starts_with("\"use client\";"));
}

/// Test that check mode follows the files on disk
#[test]
fn test_check_after_write() {
    let temp_dir = TempDir::new().unwrap();
    let scaffolder = PageScaffolder::new(temp_dir.path(), PageTemplate::builtin(), builtin_pages()).unwrap();

    let before = scaffolder.run(ScaffoldMode::Check).unwrap();
    assert!(before.outcomes.iter().all(|o| o.status == PageStatus::Missing));

    scaffolder.run(ScaffoldMode::Write).unwrap();

    let after = scaffolder.run(ScaffoldMode::Check).unwrap();
    assert!(after.is_clean());
    assert_eq!(after.outcomes.len(), builtin_pages().len());
}
