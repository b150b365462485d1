use chrono::NaiveDate;

/// Default number of snapshots kept for undo.
///
/// Each snapshot holds four short strings, so 100 entries stay well under
/// a few kilobytes per session while covering several complete form fills.
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// Configuration for a [`FormSession`](crate::FormSession).
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Maximum number of previous snapshots kept for undo
    pub history_size: usize,

    /// Date expiration dates are compared against; `None` uses the local clock
    pub reference_date: Option<NaiveDate>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            reference_date: None,
        }
    }
}

impl FormConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of snapshots kept for undo
    pub fn history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Fix the reference date used for expiration checks
    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_config_defaults() {
        let config = FormConfig::default();

        assert_eq!(config.history_size, 100);
        assert!(config.reference_date.is_none());
    }

    #[test]
    fn test_form_config_builder() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let config = FormConfig::new().history_size(5).reference_date(date);

        assert_eq!(config.history_size, 5);
        assert_eq!(config.reference_date, Some(date));
    }
}
