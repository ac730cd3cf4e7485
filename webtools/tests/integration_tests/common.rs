// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_config_file(dir: &Path, content: &str) -> Result<()> {
    create_test_file(dir, "webtools.toml", content)
}

pub fn setup_catalog_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "catalog/tools.yaml",
        "- name: Word Counter\n  \
         description: Count words and characters in any text.\n  \
         category: Text Tools\n  \
         link: /tools/word-counter.html\n\
         - name: Loan Calculator\n  \
         description: Estimate monthly repayments for a loan.\n  \
         category: Calculators\n  \
         link: /tools/loan-calculator.html\n\
         - name: Percentage Calculator\n  \
         description: Percentages, change and difference.\n  \
         category: Calculators\n",
    )?;

    create_test_file(temp_dir.path(), "catalog/broken.yaml", "- name: [unterminated\n")?;

    Ok(temp_dir)
}
