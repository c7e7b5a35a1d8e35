//! Fixtures
//!
//! Loads run inputs from YAML files in the `fixtures/carts/` directory. Fixture
//! files use the same field names as the host's JSON input document.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::input::RunInput;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a new fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Path of the cart fixture with the given name
    pub fn cart_path(&self, name: &str) -> PathBuf {
        self.base_path.join("carts").join(format!("{name}.yml"))
    }

    /// Load a run input from a YAML cart fixture
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cart(&self, name: &str) -> Result<RunInput, FixtureError> {
        let contents = fs::read_to_string(self.cart_path(name))?;

        Ok(serde_norway::from_str(&contents)?)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::input::Merchandise;

    use super::*;

    fn write_cart(base: &Path, name: &str, contents: &str) -> TestResult {
        let dir = base.join("carts");

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_loads_bundled_cart() -> TestResult {
        let input = Fixture::new().load_cart("gift-wrap")?;

        assert_eq!(input.cart.lines.len(), 1);
        assert_eq!(input.presentment_currency_rate, Decimal::TWO);

        Ok(())
    }

    #[test]
    fn fixture_loads_cart_from_custom_base_path() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_cart(
            dir.path(),
            "custom",
            concat!(
                "presentmentCurrencyRate: \"1.0\"\n",
                "cart:\n",
                "  lines:\n",
                "    - id: line-1\n",
                "      cost:\n",
                "        amountPerQuantity:\n",
                "          amount: \"3.00\"\n",
                "      merchandise:\n",
                "        __typename: CustomProduct\n",
            ),
        )?;

        let input = Fixture::with_base_path(dir.path()).load_cart("custom")?;
        let line = input.cart.lines.first().ok_or("expected a line")?;

        assert_eq!(line.id, "line-1");
        assert_eq!(line.merchandise, Merchandise::Other);

        Ok(())
    }

    #[test]
    fn fixture_missing_file_returns_io_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let result = Fixture::with_base_path(dir.path()).load_cart("nonexistent");

        assert!(matches!(result, Err(FixtureError::Io(_))));

        Ok(())
    }

    #[test]
    fn fixture_invalid_yaml_returns_yaml_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_cart(dir.path(), "broken", "cart: [unclosed\n")?;

        let result = Fixture::with_base_path(dir.path()).load_cart("broken");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));

        Ok(())
    }
}
