//! Table configuration.

/// Configuration for a [`DenseSymmetricTable`](crate::DenseSymmetricTable).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Initial side length of the table.
    pub capacity_hint: usize,
    /// Minimum old capacity for which growth copies rows in parallel.
    pub parallel_copy_threshold: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity_hint: 0,
            parallel_copy_threshold: 512,
        }
    }
}

impl TableConfig {
    /// Sets the initial side length.
    #[must_use]
    pub fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    /// Sets the parallel copy threshold.
    #[must_use]
    pub fn with_parallel_copy_threshold(mut self, threshold: usize) -> Self {
        self.parallel_copy_threshold = threshold;
        self
    }
}
