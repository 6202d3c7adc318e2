//! Non-negative path costs with a total order.
//!
//! Problems report action costs as raw `f64`. Anything that accumulates
//! them (uniform-cost search, A*, replay) goes through [`Cost::new`] so
//! that negative and non-finite values are rejected at the boundary
//! instead of silently corrupting frontier order.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

/// Why a raw cost value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CostError {
    /// The value was below zero.
    #[error("cost must be non-negative, got {value}")]
    Negative { value: f64 },
    /// The value was NaN or infinite.
    #[error("cost must be finite, got {value}")]
    NonFinite { value: f64 },
}

/// A validated, non-negative cost.
///
/// Always finite when constructed through [`Cost::new`]. Addition of two
/// costs may overflow to `+inf` for absurdly large inputs but never yields
/// NaN, so the total order below stays meaningful.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cost(f64);

impl Cost {
    /// The cost of the empty path.
    pub const ZERO: Self = Self(0.0);

    /// Validate a raw cost.
    ///
    /// `-0.0` is normalized to `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::NonFinite`] for NaN or infinities and
    /// [`CostError::Negative`] for values below zero.
    pub fn new(value: f64) -> Result<Self, CostError> {
        if !value.is_finite() {
            return Err(CostError::NonFinite { value });
        }
        if value < 0.0 {
            return Err(CostError::Negative { value });
        }
        Ok(Self(value + 0.0))
    }

    /// The raw value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
