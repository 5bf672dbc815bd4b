use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;

use super::DefaultLayout;
use super::LayoutState;
use super::LayoutTunables;
use super::Sizing;
use super::WindowId;

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Hash, Display, EnumString, EnumIter, ValueEnum,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
#[value(rename_all = "camelCase")]
/// A named state transform exposed to the host
pub enum LayoutCommand {
    /// Widen the primary region by one step
    ExpandMain,
    /// Narrow the primary region by one step
    ShrinkMain,
    /// Widen the primary region by one step where the layout allows it
    IncreaseMain,
    /// Narrow the primary region by one step where the layout allows it
    DecreaseMain,
    /// Make the focused window the primary
    SetFocusedAsMain,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// A command table entry
pub struct CommandDescriptor {
    pub command: LayoutCommand,
    pub description: &'static str,
}

impl LayoutCommand {
    /// Whether `layout` offers this command at all
    #[must_use]
    pub const fn is_supported_by(&self, layout: DefaultLayout) -> bool {
        match self {
            Self::ExpandMain | Self::ShrinkMain | Self::IncreaseMain | Self::DecreaseMain => true,
            Self::SetFocusedAsMain => layout.slot_policy().tracks_primary(),
        }
    }

    #[must_use]
    pub const fn description(&self, layout: DefaultLayout) -> &'static str {
        match (self, layout) {
            (Self::ExpandMain, DefaultLayout::CenteredTwinColumns) => {
                "Widen the two centered panes (outward from midpoint)"
            }
            (Self::ShrinkMain, DefaultLayout::CenteredTwinColumns) => {
                "Narrow the two centered panes (inward toward midpoint)"
            }
            (Self::ExpandMain, _) => "Widen the centered primary",
            (Self::ShrinkMain, _) => "Narrow the centered primary",
            (Self::IncreaseMain | Self::DecreaseMain, _)
                if !layout.sizes_with_increase_decrease() =>
            {
                "No-op"
            }
            (Self::IncreaseMain, _) => "Alias of expandMain",
            (Self::DecreaseMain, _) => "Alias of shrinkMain",
            (Self::SetFocusedAsMain, _) => "Make focused window the primary",
        }
    }

    /// Apply this command to `state`.
    ///
    /// Commands a layout doesn't offer, and `setFocusedAsMain` without a
    /// focused window, leave the state untouched.
    #[must_use]
    pub fn update_state(
        &self,
        layout: DefaultLayout,
        tunables: &LayoutTunables,
        state: &LayoutState,
        focused: Option<&WindowId>,
    ) -> LayoutState {
        if !self.is_supported_by(layout) {
            tracing::debug!("{} does not support {}", layout, self);
            return state.clone();
        }

        let sizing = match self {
            Self::ExpandMain => Some(Sizing::Increase),
            Self::ShrinkMain => Some(Sizing::Decrease),
            Self::IncreaseMain if layout.sizes_with_increase_decrease() => Some(Sizing::Increase),
            Self::DecreaseMain if layout.sizes_with_increase_decrease() => Some(Sizing::Decrease),
            Self::IncreaseMain | Self::DecreaseMain | Self::SetFocusedAsMain => None,
        };

        if let Some(sizing) = sizing {
            return LayoutState {
                main_ratio: sizing.adjust_ratio(state.main_ratio, tunables),
                ..state.clone()
            };
        }

        match (self, focused) {
            (Self::SetFocusedAsMain, Some(focused)) => LayoutState {
                main_window_id: Some(focused.clone()),
                ..state.clone()
            },
            _ => state.clone(),
        }
    }
}
