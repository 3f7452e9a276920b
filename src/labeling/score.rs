//! ERI Score Module
//! Bounded integer score domain used by the labeling form.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Score {value} is outside the range {min}-{max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
    #[error("Invalid score range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}

/// A score that has been checked against a [`ScoreRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EriScore(i64);

impl EriScore {
    pub fn value(self) -> i64 {
        self.0
    }
}

/// Inclusive range of valid ERI scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    min: i64,
    max: i64,
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self { min: 1, max: 7 }
    }
}

impl ScoreRange {
    pub fn new(min: i64, max: i64) -> Result<Self, ScoreError> {
        if min > max {
            return Err(ScoreError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Validate a raw value into an [`EriScore`].
    pub fn score(&self, value: i64) -> Result<EriScore, ScoreError> {
        if !self.contains(value) {
            return Err(ScoreError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(EriScore(value))
    }

    /// Slider starting value: `preferred` if it fits, otherwise the midpoint.
    pub fn initial_value(&self, preferred: i64) -> i64 {
        if self.contains(preferred) {
            preferred
        } else {
            self.min + (self.max - self.min) / 2
        }
    }

    /// Label shown next to the slider, e.g. "ERI Score (1-7)".
    pub fn label(&self) -> String {
        format!("ERI Score ({}-{})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_bounds() {
        let range = ScoreRange::default();
        assert_eq!(range.score(1).unwrap().value(), 1);
        assert_eq!(range.score(7).unwrap().value(), 7);
        assert_eq!(
            range.score(0),
            Err(ScoreError::OutOfRange {
                value: 0,
                min: 1,
                max: 7
            })
        );
        assert!(range.score(8).is_err());
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            ScoreRange::new(5, 2),
            Err(ScoreError::InvalidRange { min: 5, max: 2 })
        );
        assert!(ScoreRange::new(3, 3).is_ok());
    }

    #[test]
    fn test_initial_value_falls_back_to_midpoint() {
        let range = ScoreRange::default();
        assert_eq!(range.initial_value(4), 4);
        assert_eq!(range.initial_value(12), 4);

        let range = ScoreRange::new(0, 10).unwrap();
        assert_eq!(range.initial_value(-1), 5);
    }

    #[test]
    fn test_label() {
        assert_eq!(ScoreRange::default().label(), "ERI Score (1-7)");
    }
}
