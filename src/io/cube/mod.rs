//! Gaussian cube files.
//!
//! A cube file holds a comment line, a fixed second line, the atom count and
//! grid origin, one line per grid axis (sample count and voxel step vector),
//! one line per atom, and finally the volumetric samples. Every length is in
//! bohr and every numeric header field has a fixed column width.

mod writer;

pub use writer::write;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub(crate) const DEFAULT_COMMENT_PREFIX: &str = "Cube file from ASE, written on ";

/// Optional header settings for [`write`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeConfig {
    /// Grid origin in Angstrom. `None` places it at the coordinate origin.
    #[serde(default)]
    pub origin: Option<[f64; 3]>,
    /// First line of the file. `None` writes a timestamped default;
    /// a supplied comment has surrounding whitespace stripped, where the
    /// ASCII separators `\x1c`..=`\x1f` also count as whitespace.
    #[serde(default)]
    pub comment: Option<String>,
}

impl CubeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, origin: [f64; 3]) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub(crate) fn comment_line(&self) -> Cow<'_, str> {
        match &self.comment {
            Some(comment) => Cow::Borrowed(comment.trim_matches(is_comment_space)),
            None => Cow::Owned(default_comment(Local::now().naive_local())),
        }
    }
}

/// Default first line, stamped with `at` in the C-locale `%c` layout.
pub(crate) fn default_comment(at: NaiveDateTime) -> String {
    format!("{}{}", DEFAULT_COMMENT_PREFIX, at.format("%c"))
}

fn is_comment_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn supplied_comment_is_trimmed() {
        let config = CubeConfig::new().with_comment("  density of H2O \t");
        assert_eq!(config.comment_line(), "density of H2O");
    }

    #[test]
    fn missing_comment_gets_timestamp() {
        let line = CubeConfig::default().comment_line().into_owned();
        assert!(line.starts_with(DEFAULT_COMMENT_PREFIX));
        assert!(line.len() > DEFAULT_COMMENT_PREFIX.len());
        assert!(!line.contains('\n'));
    }

    #[test]
    fn trims_ascii_separators_like_whitespace() {
        let config = CubeConfig::new().with_comment("\x1c\x1f spin density\u{a0}\x1e\n");
        assert_eq!(config.comment_line(), "spin density");

        let config = CubeConfig::new().with_comment("a\x1fb");
        assert_eq!(config.comment_line(), "a\x1fb");
    }

    #[test]
    fn default_comment_uses_c_locale_layout() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(22, 24, 0))
            .expect("valid timestamp");
        assert_eq!(
            default_comment(at),
            "Cube file from ASE, written on Sun Oct 18 22:24:00 2026"
        );

        let at = NaiveDate::from_ymd_opt(2025, 3, 4)
            .and_then(|d| d.and_hms_opt(7, 5, 9))
            .expect("valid timestamp");
        assert_eq!(
            default_comment(at),
            "Cube file from ASE, written on Tue Mar  4 07:05:09 2025"
        );
    }

    #[test]
    fn empty_toml_table_is_default_config() {
        let config: CubeConfig = toml::from_str("").expect("parse empty config");
        assert_eq!(config, CubeConfig::default());

        let config: CubeConfig =
            toml::from_str("origin = [1.0, 0.0, -0.5]\ncomment = \"  rho  \"").expect("parse");
        assert_eq!(config.origin, Some([1.0, 0.0, -0.5]));
        assert_eq!(config.comment_line(), "rho");
    }

    #[test]
    fn builder_sets_origin() {
        let config = CubeConfig::new().with_origin([1.0, -2.0, 0.5]);
        assert_eq!(config.origin, Some([1.0, -2.0, 0.5]));
        assert_eq!(config.comment, None);
    }
}
