use serde::Deserialize;
use serde::Serialize;

use super::LayoutTunables;
use super::WindowId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Fully populated layout state
///
/// Only produced by [`crate::Layout`], which guarantees `main_ratio` sits
/// within the layout's bounds.
pub struct LayoutState {
    /// Fraction of the screen width given to the primary region(s)
    #[serde(rename = "mainRatio")]
    pub main_ratio: f64,
    /// Window kept in the primary slot by identity-sticky layouts
    ///
    /// May refer to a window that has since closed; it is repaired on the next
    /// window set change rather than validated on read.
    #[serde(rename = "mainWindowID")]
    pub main_window_id: Option<WindowId>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Layout state as persisted by the host, where any field may be missing
pub struct PersistedState {
    #[serde(
        default,
        rename = "mainRatio",
        deserialize_with = "crate::lenient::ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub main_ratio: Option<f64>,
    #[serde(
        default,
        rename = "mainWindowID",
        deserialize_with = "crate::lenient::window_id"
    )]
    pub main_window_id: Option<WindowId>,
}

impl PersistedState {
    /// Fill in missing fields from `tunables` and clamp the ratio into bounds.
    #[must_use]
    pub fn normalize(self, tunables: &LayoutTunables) -> LayoutState {
        LayoutState {
            main_ratio: tunables.clamp(self.main_ratio.unwrap_or(tunables.start)),
            main_window_id: self.main_window_id,
        }
    }
}

impl From<LayoutState> for PersistedState {
    fn from(value: LayoutState) -> Self {
        Self {
            main_ratio: Some(value.main_ratio),
            main_window_id: value.main_window_id,
        }
    }
}
