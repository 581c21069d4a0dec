//! Column width declarations.

/// A bounded text column (`VARCHAR(max_len)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name as declared in the migration.
    pub name: &'static str,
    /// Maximum width in characters.
    pub max_len: usize,
}

impl Column {
    /// Declares a column.
    #[must_use]
    pub const fn new(name: &'static str, max_len: usize) -> Self {
        Self { name, max_len }
    }

    /// Returns whether `value` fits the column. Widths count characters, not bytes.
    #[must_use]
    pub fn fits(&self, value: &str) -> bool {
        value.chars().count() <= self.max_len
    }
}

/// Returns the first column whose value is wider than declared.
///
/// `values` must be ordered like `columns`.
#[must_use]
pub fn first_overflow<'a>(columns: &'a [Column], values: &[&str]) -> Option<&'a Column> {
    columns
        .iter()
        .zip(values)
        .find(|(column, value)| !column.fits(value))
        .map(|(column, _)| column)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[Column] = &[Column::new("NAME", 3), Column::new("EMAIL", 5)];

    #[test]
    fn test_fits_counts_characters() {
        let column = Column::new("NAME", 3);
        assert!(column.fits("abc"));
        assert!(column.fits("äöü"));
        assert!(!column.fits("abcd"));
        assert!(column.fits(""));
    }

    #[test]
    fn test_first_overflow() {
        assert_eq!(first_overflow(COLUMNS, &["abc", "12345"]), None);
        assert_eq!(
            first_overflow(COLUMNS, &["abc", "123456"]).map(|c| c.name),
            Some("EMAIL")
        );
        assert_eq!(
            first_overflow(COLUMNS, &["abcd", "123456"]).map(|c| c.name),
            Some("NAME")
        );
    }
}
