//! Transform configuration

/// Options controlling how a transform call is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Number of partitions the outer output index is split into
    pub parallelism: usize,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            parallelism: num_cpus::get().max(1),
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single partition, computed on the calling thread
    pub fn serial() -> Self {
        Self { parallelism: 1 }
    }

    pub fn parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }

    pub fn is_serial(&self) -> bool {
        self.parallelism <= 1
    }
}
