//! Configuration for unique-along-axis calls

/// Slice count at which key computation moves to the thread pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Environment variable overriding [`UniqueConfig::parallel_threshold`]
pub const PARALLEL_THRESHOLD_ENV: &str = "TENUNIQ_PARALLEL_THRESHOLD";

/// Options for a unique-along-axis call
///
/// The configuration only affects how keys are computed, never the result:
/// ordinals are assigned in axis order on a single thread.
///
/// # Examples
///
/// ```
/// use tenuniq_kernels::UniqueConfig;
///
/// let config = UniqueConfig::new().with_axis(1).with_parallel_threshold(128);
/// assert_eq!(config.axis(), 1);
/// assert_eq!(config.use_parallel(128), cfg!(feature = "parallel"));
/// assert!(!UniqueConfig::new().sequential().use_parallel(1 << 20));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniqueConfig {
    /// Axis to deduplicate along (`None` means axis 0)
    pub axis: Option<usize>,
    /// Minimum slice count before keys are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for UniqueConfig {
    fn default() -> Self {
        Self {
            axis: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl UniqueConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the parallel threshold taken from
    /// `TENUNIQ_PARALLEL_THRESHOLD` when it parses as an integer
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(PARALLEL_THRESHOLD_ENV).ok().as_deref())
    }

    fn from_var(threshold: Option<&str>) -> Self {
        let config = Self::default();
        let Some(raw) = threshold else {
            return config;
        };
        match raw.trim().parse::<usize>() {
            Ok(threshold) => config.with_parallel_threshold(threshold),
            Err(_) => {
                tracing::warn!(
                    value = %raw,
                    "ignoring unparsable {}",
                    PARALLEL_THRESHOLD_ENV
                );
                config
            }
        }
    }

    /// Set the axis
    pub fn with_axis(mut self, axis: usize) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Never compute keys in parallel
    pub fn sequential(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }

    /// Effective axis
    pub fn axis(&self) -> usize {
        self.axis.unwrap_or(0)
    }

    /// Whether an axis of `extent` slices gets parallel key computation
    ///
    /// Always false without the `parallel` feature.
    pub fn use_parallel(&self, extent: usize) -> bool {
        cfg!(feature = "parallel")
            && self.parallel_threshold != usize::MAX
            && extent >= self.parallel_threshold
    }
}
