use anyhow::Result;

/// Fetch state for one remote resource as the owning page sees it:
/// data, loading, error. At most one of data/error is set at a time.
///
/// `start` puts the slot back to a clean loading state (a page entering
/// the screen starts from nothing, it does not show the previous visit's
/// list), and `settle` applies the outcome of the fetch that most
/// recently started. Stale outcomes are filtered out before they reach
/// this type.
#[derive(Debug)]
pub struct Resource<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fetch: clears any previous outcome.
    pub fn start(&mut self) {
        self.data = None;
        self.error = None;
        self.loading = true;
    }

    /// Apply a fetch outcome. Errors keep their full context chain so the
    /// page can show the underlying reason.
    pub fn settle(&mut self, result: Result<T>) {
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(e) => self.error = Some(format!("{:#}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_starts_idle() {
        let resource: Resource<Vec<i64>> = Resource::new();
        assert!(!resource.loading);
        assert!(resource.data.is_none());
        assert!(resource.error.is_none());
    }

    #[test]
    fn test_start_clears_previous_outcome() {
        let mut resource = Resource::new();
        resource.settle(Ok(vec![1, 2, 3]));
        assert_eq!(resource.data.as_deref(), Some([1, 2, 3].as_slice()));

        resource.start();
        assert!(resource.loading);
        assert!(resource.data.is_none());
        assert!(resource.error.is_none());
    }

    #[test]
    fn test_settle_ok_exposes_data_only() {
        let mut resource = Resource::new();
        resource.start();
        resource.settle(Ok(vec![7]));

        assert!(!resource.loading);
        assert_eq!(resource.data.as_deref(), Some([7].as_slice()));
        assert!(resource.error.is_none());
    }

    #[test]
    fn test_settle_err_exposes_error_only() {
        let mut resource: Resource<Vec<i64>> = Resource::new();
        resource.start();
        resource.settle(Err(anyhow!("connection refused").context("GET /clients/ failed")));

        assert!(!resource.loading);
        assert!(resource.data.is_none());
        let error = resource.error.expect("expected an error");
        assert!(error.contains("GET /clients/ failed"));
        assert!(error.contains("connection refused"));
    }
}
