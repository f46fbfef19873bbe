//! Test random sources — deterministic `RandomSource` implementations.

use keepsake_core::rng::RandomSource;

/// A random source that always returns the same values. Suitable for tests
/// that do not depend on specific draws.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRandom {
    /// The value returned by `unit`.
    pub unit: f64,
    /// The value returned by `pick_index`.
    pub index: usize,
}

impl Default for ConstantRandom {
    fn default() -> Self {
        Self {
            unit: 0.5,
            index: 0,
        }
    }
}

impl RandomSource for ConstantRandom {
    fn unit(&mut self) -> f64 {
        self.unit
    }

    fn pick_index(&mut self, _len: usize) -> usize {
        self.index
    }
}

/// A random source that returns values from predetermined sequences.
/// Panics when a sequence is exhausted — a test asking for more randomness
/// than it scripted is a test defect.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    units: Vec<f64>,
    indexes: Vec<usize>,
    unit_cursor: usize,
    index_cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source with scripted `unit` draws.
    #[must_use]
    pub fn with_units(units: Vec<f64>) -> Self {
        Self {
            units,
            ..Self::default()
        }
    }

    /// Creates a source with scripted `pick_index` draws.
    #[must_use]
    pub fn with_indexes(indexes: Vec<usize>) -> Self {
        Self {
            indexes,
            ..Self::default()
        }
    }

    /// Creates a source with both sequences scripted.
    #[must_use]
    pub fn new(units: Vec<f64>, indexes: Vec<usize>) -> Self {
        Self {
            units,
            indexes,
            unit_cursor: 0,
            index_cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        let value = self.units[self.unit_cursor];
        self.unit_cursor += 1;
        value
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let value = self.indexes[self.index_cursor];
        self.index_cursor += 1;
        assert!(value < len, "scripted index {value} out of range for pool of {len}");
        value
    }
}
