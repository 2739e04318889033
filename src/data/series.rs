//! Ordered numeric sample series.

/// An ordered sequence of non-negative samples.
///
/// The series is immutable once built; index order is its only identity.
/// Normalization bounds are derived fresh for every render pass rather
/// than cached, so a series value can never go stale relative to its
/// gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    values: Vec<f64>,
}

impl SampleSeries {
    /// Build a series from raw values.
    ///
    /// Negative or non-finite inputs are clamped to zero so the invariant
    /// "non-negative numeric values" holds for any caller.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        for v in &mut values {
            if !v.is_finite() || *v < 0.0 {
                *v = 0.0;
            }
        }
        Self { values }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The samples in index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Normalization bounds `(min, max)` over the current samples.
    ///
    /// Returns `None` for an empty series. `min == max` is the flat
    /// degenerate case and is left to the gradient mapper to resolve.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        let (min, max) = self
            .values
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));
        Some((min, max))
    }
}

impl From<Vec<f64>> for SampleSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}
