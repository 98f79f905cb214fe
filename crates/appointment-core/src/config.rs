//! Book Configuration

/// Storage key the list is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "appointments";

/// Rows shown per page
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

/// Settings fixed for the lifetime of a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    pub storage_key: String,
    pub items_per_page: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl BookConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Zero falls back to the default page size
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = if items_per_page == 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            items_per_page
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BookConfig::default();
        assert_eq!(config.storage_key, "appointments");
        assert_eq!(config.items_per_page, 9);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let config = BookConfig::default().with_items_per_page(0);
        assert_eq!(config.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(BookConfig::default().with_items_per_page(4).items_per_page, 4);
    }
}
