use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

use super::LayoutState;
use super::Window;
use super::WindowId;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Display, EnumString, ValueEnum, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Number of centered primary slots
pub enum PrimarySlots {
    /// A single centered primary
    One,
    /// Two centered primaries meeting at the screen midline
    Two,
}

impl PrimarySlots {
    #[must_use]
    pub const fn count(&self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Display, EnumString, ValueEnum, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// How windows are chosen for the primary and side slots
pub enum SlotPolicy {
    /// The primary is the window whose id is persisted in the layout state,
    /// falling back to the first window; the rest alternate left and right
    IdentitySticky,
    /// The primary slot(s) sit at a fixed position in the window order;
    /// windows before go left, windows after go right
    IndexBound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Primary {
    Single(WindowId),
    Twin(WindowId, WindowId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The inputs the partitioner works from
pub struct SlotAssignment {
    pub primary: Primary,
    /// Left side, ordered left to right
    pub left: Vec<WindowId>,
    /// Right side, ordered left to right
    pub right: Vec<WindowId>,
}

impl SlotPolicy {
    /// Whether this policy reads the persisted primary window id
    #[must_use]
    pub const fn tracks_primary(&self) -> bool {
        matches!(self, Self::IdentitySticky)
    }

    /// Resolve primary and side slots for `windows`.
    ///
    /// Returns `None` when there are fewer windows than primary slots.
    #[must_use]
    pub fn assign(
        &self,
        windows: &[Window],
        state: &LayoutState,
        slots: PrimarySlots,
    ) -> Option<SlotAssignment> {
        if windows.len() < slots.count() {
            return None;
        }

        let assignment = match self {
            Self::IdentitySticky => identity_sticky(windows, state, slots),
            Self::IndexBound => index_bound(windows, slots),
        };

        tracing::debug!(
            "{} assigned primary={:?} left={:?} right={:?}",
            self,
            assignment.primary,
            assignment.left,
            assignment.right
        );

        Some(assignment)
    }
}

fn identity_sticky(windows: &[Window], state: &LayoutState, slots: PrimarySlots) -> SlotAssignment {
    let sticky_idx = state
        .main_window_id
        .as_ref()
        .and_then(|id| windows.iter().position(|w| &w.id == id))
        .unwrap_or(0);

    let mut secondaries = windows
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != sticky_idx)
        .map(|(_, w)| w.id.clone());

    let sticky = windows[sticky_idx].id.clone();
    let primary = match slots {
        PrimarySlots::One => Primary::Single(sticky),
        // the first remaining window joins the sticky one in the centre
        PrimarySlots::Two => match secondaries.next() {
            Some(partner) => Primary::Twin(sticky, partner),
            None => Primary::Single(sticky),
        },
    };

    let mut left = vec![];
    let mut right = vec![];
    for (idx, id) in secondaries.enumerate() {
        if idx % 2 == 0 {
            left.push(id);
        } else {
            right.push(id);
        }
    }

    SlotAssignment {
        primary,
        left,
        right,
    }
}

fn index_bound(windows: &[Window], slots: PrimarySlots) -> SlotAssignment {
    let len = windows.len();
    let secondaries = len - slots.count();
    let left_count = secondaries.div_ceil(2);

    let ids = |range: &[Window]| range.iter().map(|w| w.id.clone()).collect::<Vec<_>>();

    match slots {
        PrimarySlots::One => {
            let primary_idx = left_count.min(len - 1);
            SlotAssignment {
                primary: Primary::Single(windows[primary_idx].id.clone()),
                left: ids(&windows[..primary_idx]),
                right: ids(&windows[primary_idx + 1..]),
            }
        }
        PrimarySlots::Two => {
            let centre_left = left_count.min(len - 2);
            let centre_right = centre_left + 1;
            SlotAssignment {
                primary: Primary::Twin(
                    windows[centre_left].id.clone(),
                    windows[centre_right].id.clone(),
                ),
                left: ids(&windows[..centre_left]),
                right: ids(&windows[centre_right + 1..]),
            }
        }
    }
}
