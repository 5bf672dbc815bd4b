use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

use super::LayoutTunables;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Display, EnumString, ValueEnum, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Sizing
pub enum Sizing {
    /// Increase
    Increase,
    /// Decrease
    Decrease,
}

impl Sizing {
    /// Move `ratio` one step in this direction, staying within the tunable bounds.
    #[must_use]
    pub fn adjust_ratio(&self, ratio: f64, tunables: &LayoutTunables) -> f64 {
        let adjusted = match self {
            Self::Increase => ratio + tunables.step,
            Self::Decrease => ratio - tunables.step,
        };

        tunables.clamp(adjusted)
    }
}
