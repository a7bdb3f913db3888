//! Stereogram configuration.

use serde::{Deserialize, Serialize};

/// Construction parameters for [`super::Stereogram`].
///
/// `resolution` is the sample count per radius along an axis; the shared
/// coordinate grid gets `resolution + 1` base samples in [0, radius].
/// `rounding_decimals` fixes the precision every sampled coordinate is
/// rounded to, so curves derived from different closed forms meet on
/// exactly comparable values.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StereogramCfg {
    pub radius: f64,
    pub resolution: usize,
    pub rounding_decimals: i32,
}

impl Default for StereogramCfg {
    fn default() -> Self {
        Self {
            radius: 1.0,
            resolution: 1000,
            rounding_decimals: 6,
        }
    }
}

impl StereogramCfg {
    /// Default configuration at a custom disk radius.
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }
}
