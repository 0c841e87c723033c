//! Configuration types for a dealing.
//!
//! The crate does not pick a threshold policy; callers decide `t` and `n`
//! and this module only checks that they fit the one-byte index domain.
//!
//! # Example
//!
//! ```rust
//! use feldman_vss::VssParameters;
//!
//! // 3-of-5 sharing
//! let params = VssParameters::new(5, 3).expect("valid params");
//! assert_eq!(params.degree(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::vss::{MAX_INDEX, MAX_THRESHOLD};

/// Parameters of a single Feldman dealing.
///
/// # Fields
///
/// - `parties`: Number of participants receiving a share (n), indexed `1..=n`.
/// - `threshold`: Number of shares needed to reconstruct (t), the polynomial
///   has `t` coefficients.
///
/// # Constraints
///
/// - `1 <= threshold <= parties`
/// - `parties <= 255`, the largest one-byte share index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VssParameters {
    /// Total number of participants
    pub parties: usize,
    /// Number of shares needed to reconstruct the secret
    pub threshold: usize,
}

impl VssParameters {
    /// Creates and validates dealing parameters.
    pub fn new(parties: usize, threshold: usize) -> Result<Self, Error> {
        let params = Self { parties, threshold };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use feldman_vss::VssParameters;
    ///
    /// let params = VssParameters { parties: 3, threshold: 4 };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        if self.threshold == 0 || self.threshold > MAX_THRESHOLD {
            return Err(Error::ThresholdOutOfRange(self.threshold));
        }
        // Party `n` receives index `n`.
        if self.parties > MAX_INDEX as usize {
            return Err(Error::IndexOutOfRange(
                u32::try_from(self.parties).unwrap_or(u32::MAX),
            ));
        }
        if self.threshold > self.parties {
            return Err(Error::InvalidConfig(
                "threshold must be within [1, parties]".into(),
            ));
        }
        Ok(())
    }

    /// Degree of the sharing polynomial, `threshold - 1`.
    pub fn degree(&self) -> usize {
        self.threshold.saturating_sub(1)
    }
}
