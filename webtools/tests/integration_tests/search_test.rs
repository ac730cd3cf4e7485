// tests/integration_tests/search_test.rs
use super::common::setup_catalog_directory;
use anyhow::Result;
use webtools::{load_catalog, search};

#[test]
fn test_search_loaded_catalog() -> Result<()> {
    let temp_dir = setup_catalog_directory()?;
    let cards = load_catalog(&temp_dir.path().join("catalog/tools.yaml"))?;
    assert_eq!(cards.len(), 3);

    let names: Vec<&str> = search(&cards, "calculator")
        .iter()
        .map(|card| card.name.as_str())
        .collect();
    assert_eq!(names, vec!["Loan Calculator", "Percentage Calculator"]);

    let words = search(&cards, "WORDS");
    assert_eq!(words.len(), 1);
    Ok(())
}

#[test]
fn test_card_without_link_defaults_to_empty() -> Result<()> {
    let temp_dir = setup_catalog_directory()?;
    let cards = load_catalog(&temp_dir.path().join("catalog/tools.yaml"))?;
    let percentage = search(&cards, "percentage");
    assert_eq!(percentage.first().map(|card| card.link.as_str()), Some(""));
    Ok(())
}

#[test]
fn test_broken_catalog_reports_path() -> Result<()> {
    let temp_dir = setup_catalog_directory()?;
    let err = load_catalog(&temp_dir.path().join("catalog/broken.yaml")).unwrap_err();
    assert!(format!("{err:#}").contains("broken.yaml"));
    Ok(())
}

#[test]
fn test_missing_catalog_reports_path() -> Result<()> {
    let temp_dir = setup_catalog_directory()?;
    let err = load_catalog(&temp_dir.path().join("catalog/missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("missing.yaml"));
    Ok(())
}
