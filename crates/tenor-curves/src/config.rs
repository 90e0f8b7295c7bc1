//! Curve construction configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tenor_core::daycounts::{ActualFixed, DEFAULT_BASIS};

use crate::error::{CurveError, CurveResult};

/// Settings applied when bootstrapping a curve.
///
/// Loadable from TOML; every field has a default.
///
/// ```toml
/// day_count_basis = 365
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Days per year for curve year fractions
    #[serde(default = "default_basis")]
    pub day_count_basis: u32,
}

fn default_basis() -> u32 {
    DEFAULT_BASIS
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            day_count_basis: default_basis(),
        }
    }
}

impl CurveConfig {
    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> CurveResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CurveError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CurveResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CurveError::invalid_config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Rejects settings no curve can use.
    pub fn validate(&self) -> CurveResult<()> {
        if self.day_count_basis == 0 {
            return Err(CurveError::invalid_config("day_count_basis must be positive"));
        }
        Ok(())
    }

    /// Day count implied by the basis.
    #[must_use]
    pub fn day_count(&self) -> ActualFixed {
        ActualFixed::new(self.day_count_basis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_basis_is_360() {
        assert_eq!(CurveConfig::default().day_count_basis, 360);
        assert_eq!(CurveConfig::from_toml_str("").unwrap(), CurveConfig::default());
    }

    #[test]
    fn test_from_toml_str() {
        let config = CurveConfig::from_toml_str("day_count_basis = 365").unwrap();
        assert_eq!(config.day_count_basis, 365);
        assert_eq!(config.day_count().basis(), 365);
    }

    #[test]
    fn test_zero_basis_rejected() {
        let err = CurveConfig::from_toml_str("day_count_basis = 0").unwrap_err();
        assert!(matches!(err, CurveError::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = CurveConfig::from_toml_str("day_count_basis = \"act\"").unwrap_err();
        assert!(matches!(err, CurveError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "day_count_basis = 365").unwrap();

        let config = CurveConfig::from_file(file.path()).unwrap();
        assert_eq!(config.day_count_basis, 365);
    }

    #[test]
    fn test_from_missing_file() {
        let err = CurveConfig::from_file("/nonexistent/tenor.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tenor.toml"));
    }
}
