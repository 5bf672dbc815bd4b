use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;

use super::PrimarySlots;
use super::SlotPolicy;

/// Minimum allowed ratio value shared by every centered layout
pub const MIN_RATIO: f64 = 0.2;

/// Step applied by the expand and shrink commands
pub const STEP: f64 = 0.05;

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Ratio bounds and step owned by a single layout instance
pub struct LayoutTunables {
    /// Smallest fraction of the screen width the primary region may occupy
    pub min_ratio: f64,
    /// Largest fraction of the screen width the primary region may occupy
    pub max_ratio: f64,
    /// Amount the primary ratio moves per expand/shrink
    pub step: f64,
    /// Ratio used by the initial state and whenever a persisted ratio is missing
    pub start: f64,
}

impl LayoutTunables {
    #[must_use]
    pub const fn new(min_ratio: f64, max_ratio: f64, step: f64, start: f64) -> Self {
        Self {
            min_ratio,
            max_ratio,
            step,
            start,
        }
    }

    #[must_use]
    pub fn clamp(&self, ratio: f64) -> f64 {
        if ratio.is_nan() {
            return self.start.clamp(self.min_ratio, self.max_ratio);
        }

        ratio.clamp(self.min_ratio, self.max_ratio)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Serialize,
    Deserialize,
    Eq,
    PartialEq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    ValueEnum,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// A predefined centered layout
pub enum DefaultLayout {
    /// Centered Primary Columns Layout
    ///
    /// The primary window sticks to the centre until another window is
    /// explicitly made primary; the rest alternate left and right.
    ///
    /// ```text
    /// +--+--+-----------+--+--+
    /// |  |  |           |  |  |
    /// |  |  |           |  |  |
    /// |  |  |           |  |  |
    /// +--+--+-----------+--+--+
    /// ```
    #[default]
    CenteredPrimaryColumns,
    /// Centered Twin Columns Layout
    ///
    /// Two primary panes meet at the screen midline. Slots are bound to
    /// positions in the window order.
    ///
    /// ```text
    /// +--+------+------+--+--+
    /// |  |      |      |  |  |
    /// |  |      |      |  |  |
    /// |  |      |      |  |  |
    /// +--+------+------+--+--+
    /// ```
    CenteredTwinColumns,
    /// Centered Indexed Columns Layout
    ///
    /// A single centered primary bound to the middle position in the window
    /// order, so reordering windows moves them between slots.
    ///
    /// ```text
    /// +--+--+-----------+--+
    /// |  |  |           |  |
    /// |  |  |           |  |
    /// |  |  |           |  |
    /// +--+--+-----------+--+
    /// ```
    CenteredIndexedColumns,
    // NOTE: If any new layout is added, please make sure to give it tunables and a policy below
}

impl DefaultLayout {
    /// Name presented to the host
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CenteredPrimaryColumns => "Centered Primary Columns",
            Self::CenteredTwinColumns => "Centered Twin Columns",
            Self::CenteredIndexedColumns => "Centered Indexed Columns",
        }
    }

    #[must_use]
    pub const fn tunables(&self) -> LayoutTunables {
        match self {
            Self::CenteredPrimaryColumns | Self::CenteredIndexedColumns => {
                LayoutTunables::new(MIN_RATIO, 0.8, STEP, 0.4)
            }
            Self::CenteredTwinColumns => LayoutTunables::new(MIN_RATIO, 0.9, STEP, 0.5),
        }
    }

    #[must_use]
    pub const fn primary_slots(&self) -> PrimarySlots {
        match self {
            Self::CenteredPrimaryColumns | Self::CenteredIndexedColumns => PrimarySlots::One,
            Self::CenteredTwinColumns => PrimarySlots::Two,
        }
    }

    #[must_use]
    pub const fn slot_policy(&self) -> SlotPolicy {
        match self {
            Self::CenteredPrimaryColumns => SlotPolicy::IdentitySticky,
            Self::CenteredTwinColumns | Self::CenteredIndexedColumns => SlotPolicy::IndexBound,
        }
    }

    /// Whether `increaseMain` and `decreaseMain` resize the primary region.
    ///
    /// The sticky layout always keeps exactly one primary and only resizes
    /// through expand/shrink, so for it these commands do nothing.
    #[must_use]
    pub const fn sizes_with_increase_decrease(&self) -> bool {
        match self {
            Self::CenteredPrimaryColumns => false,
            Self::CenteredTwinColumns | Self::CenteredIndexedColumns => true,
        }
    }
}
