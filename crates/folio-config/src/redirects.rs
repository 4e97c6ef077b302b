//! Redirect table.
//!
//! One rule per line, `from to [code]`, fields separated by whitespace:
//!
//! ```text
//! # Moved guides
//! /docs/en/main/guides/routing  /docs/start/routing  301
//! /docs/api                     /docs/reference
//! ```
//!
//! Blank lines and `#` comments are skipped. A missing, non-integer or
//! out-of-range code means 302.

use std::path::Path;

use crate::ConfigError;

/// Status used when a rule doesn't give a valid redirect code.
pub const DEFAULT_REDIRECT_STATUS: u16 = 302;

/// A single redirect rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Request pathname the rule matches exactly.
    pub from: String,
    /// Redirect target.
    pub to: String,
    /// Redirect status code (300-399).
    pub status: u16,
}

/// Ordered redirect rules. The first matching rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redirects {
    rules: Vec<Redirect>,
}

impl Redirects {
    /// Parse a redirect table.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_config::Redirects;
    ///
    /// let redirects = Redirects::parse("/old /new 301\n/tmp /there");
    /// assert_eq!(redirects.lookup("/old").unwrap().status, 301);
    /// assert_eq!(redirects.lookup("/tmp").unwrap().status, 302);
    /// assert!(redirects.lookup("/other").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut rules = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(from), Some(to)) = (fields.next(), fields.next()) else {
                tracing::warn!(line = index + 1, rule = line, "Skipping redirect without target");
                continue;
            };

            rules.push(Redirect {
                from: from.to_owned(),
                to: to.to_owned(),
                status: redirect_status(fields.next()),
            });
        }

        Self { rules }
    }

    /// Load a redirect table from a file.
    ///
    /// A missing file yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file exists but can't be read.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let redirects = Self::parse(&text);
                tracing::debug!(path = %path.display(), rule_count = redirects.len(), "Loaded redirects");
                Ok(redirects)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No redirects file");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Find the first rule whose `from` equals `pathname`.
    #[must_use]
    pub fn lookup(&self, pathname: &str) -> Option<&Redirect> {
        self.rules.iter().find(|rule| rule.from == pathname)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Redirect> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a Redirects {
    type Item = &'a Redirect;
    type IntoIter = std::slice::Iter<'a, Redirect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Redirect status from the optional code field.
fn redirect_status(code: Option<&str>) -> u16 {
    code.and_then(|c| c.parse::<u16>().ok())
        .filter(|status| (300..400).contains(status))
        .unwrap_or(DEFAULT_REDIRECT_STATUS)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rule(from: &str, to: &str, status: u16) -> Redirect {
        Redirect {
            from: from.to_owned(),
            to: to.to_owned(),
            status,
        }
    }

    #[test]
    fn test_parse_rules() {
        let redirects = Redirects::parse(
            "# comment\n\n/a /b 301\n  /c\t/d  \n/e /f 308 trailing words\n",
        );

        assert_eq!(
            redirects.iter().cloned().collect::<Vec<_>>(),
            vec![rule("/a", "/b", 301), rule("/c", "/d", 302), rule("/e", "/f", 308)]
        );
    }

    #[test]
    fn test_invalid_codes_default_to_302() {
        let redirects = Redirects::parse("/a /x abc\n/b /x 200\n/c /x 400\n/d /x 3.5\n/e /x -301");

        assert!(redirects.iter().all(|r| r.status == DEFAULT_REDIRECT_STATUS));
        assert_eq!(redirects.len(), 5);
    }

    #[test]
    fn test_boundary_codes() {
        let redirects = Redirects::parse("/a /x 300\n/b /x 399");

        assert_eq!(redirects.lookup("/a").unwrap().status, 300);
        assert_eq!(redirects.lookup("/b").unwrap().status, 399);
    }

    #[test]
    fn test_line_without_target_skipped() {
        let redirects = Redirects::parse("/lonely\n/a /b");

        assert_eq!(redirects.len(), 1);
        assert!(redirects.lookup("/lonely").is_none());
    }

    #[test]
    fn test_lookup_exact_first_match() {
        let redirects = Redirects::parse("/a /first\n/a /second\n/a/ /slash");

        assert_eq!(redirects.lookup("/a").unwrap().to, "/first");
        assert_eq!(redirects.lookup("/a/").unwrap().to, "/slash");
        assert!(redirects.lookup("/A").is_none());
        assert!(redirects.lookup("/a/b").is_none());
    }

    #[test]
    fn test_load_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("_redirects");
        std::fs::write(&path, "/old /new 301\n").unwrap();

        let redirects = Redirects::load(&path).unwrap();

        assert_eq!(redirects.lookup("/old"), Some(&rule("/old", "/new", 301)));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();

        let redirects = Redirects::load(&temp_dir.path().join("_redirects")).unwrap();

        assert!(redirects.is_empty());
    }

    #[test]
    fn test_load_directory_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();

        assert!(Redirects::load(temp_dir.path()).is_err());
    }
}
