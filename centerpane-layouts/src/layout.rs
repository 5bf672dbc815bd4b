use serde::Serialize;
use strum::IntoEnumIterator;

use super::Arrangement;
use super::CommandDescriptor;
use super::DefaultLayout;
use super::FrameMap;
use super::LayoutChange;
use super::LayoutCommand;
use super::LayoutState;
use super::LayoutTunables;
use super::PersistedState;
use super::Rect;
use super::Window;
use super::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// A layout instance as presented to the host
///
/// Every entry point is pure: inputs are borrowed, results are new values, and
/// identical inputs always give identical outputs.
pub struct Layout {
    kind: DefaultLayout,
    tunables: LayoutTunables,
}

impl From<DefaultLayout> for Layout {
    fn from(kind: DefaultLayout) -> Self {
        Self {
            kind,
            tunables: kind.tunables(),
        }
    }
}

impl Layout {
    #[must_use]
    pub const fn kind(&self) -> DefaultLayout {
        self.kind
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub const fn tunables(&self) -> &LayoutTunables {
        &self.tunables
    }

    #[must_use]
    pub const fn initial_state(&self) -> LayoutState {
        LayoutState {
            main_ratio: self.tunables.start,
            main_window_id: None,
        }
    }

    /// The single place where host-persisted state gets its defaults filled in.
    #[must_use]
    pub fn normalize(&self, persisted: PersistedState) -> LayoutState {
        persisted.normalize(&self.tunables)
    }

    /// Frames for `windows` within `screen`, in clockwise order.
    #[must_use]
    pub fn frame_assignments(
        &self,
        windows: &[Window],
        screen: &Rect,
        state: &LayoutState,
    ) -> FrameMap {
        let Some(first) = windows.first() else {
            return FrameMap::default();
        };

        let slots = self.kind.primary_slots();

        // a lone window has no partner for the second centre pane
        if windows.len() == 1 && slots.count() > 1 {
            let mut frames = FrameMap::with_capacity(1);
            frames.push(first.id.clone(), *screen);
            return frames;
        }

        let ratio = self.tunables.clamp(state.main_ratio);
        match self.kind.slot_policy().assign(windows, state, slots) {
            Some(assignment) => assignment.calculate(screen, ratio),
            None => FrameMap::default(),
        }
    }

    /// Reduce a host change into the next state.
    #[must_use]
    pub fn update_with_change(&self, change: &LayoutChange, state: &LayoutState) -> LayoutState {
        let tracks_primary = self.kind.slot_policy().tracks_primary();

        let next = match change {
            // the primary never follows focus
            LayoutChange::FocusedWindowChanged { .. } => state.clone(),
            LayoutChange::WindowsChanged {
                windows: Some(windows),
            } if tracks_primary => {
                let present = state
                    .main_window_id
                    .as_ref()
                    .is_some_and(|id| windows.iter().any(|w| &w.id == id));

                if present {
                    state.clone()
                } else {
                    LayoutState {
                        main_window_id: windows.first().map(|w| w.id.clone()),
                        ..state.clone()
                    }
                }
            }
            LayoutChange::SwappedFocusedWithMain {
                focused_window_id: Some(focused),
            } if tracks_primary => LayoutState {
                main_window_id: Some(focused.clone()),
                ..state.clone()
            },
            LayoutChange::ResizedMain {
                delta,
                screen_width,
            } => {
                let divisor = screen_width.unwrap_or(1.0).max(1.0);
                let ratio_delta = delta.unwrap_or(0.0) / divisor;

                LayoutState {
                    main_ratio: self.tunables.clamp(state.main_ratio + ratio_delta),
                    ..state.clone()
                }
            }
            LayoutChange::Command {
                command: Some(command),
            } => match command.parse::<LayoutCommand>() {
                Ok(command) => self.run_command(command, state, None),
                Err(_) => {
                    tracing::debug!("ignoring unknown command: {}", command);
                    state.clone()
                }
            },
            LayoutChange::HardReset => self.initial_state(),
            LayoutChange::WindowsChanged { .. }
            | LayoutChange::SwappedFocusedWithMain { .. }
            | LayoutChange::Command { .. }
            | LayoutChange::Unknown => state.clone(),
        };

        tracing::debug!("{}: {} -> {:?}", self.kind, change, next);

        next
    }

    /// Apply a command directly, as the host does for a key binding.
    #[must_use]
    pub fn run_command(
        &self,
        command: LayoutCommand,
        state: &LayoutState,
        focused: Option<&WindowId>,
    ) -> LayoutState {
        command.update_state(self.kind, &self.tunables, state, focused)
    }

    /// The command table offered by this layout
    #[must_use]
    pub fn commands(&self) -> Vec<CommandDescriptor> {
        LayoutCommand::iter()
            .filter(|command| command.is_supported_by(self.kind))
            .map(|command| CommandDescriptor {
                command,
                description: command.description(self.kind),
            })
            .collect()
    }
}
