use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use super::Window;
use super::WindowId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
/// A change reported by the host
///
/// Payload fields are optional and decoded leniently; what a missing or
/// malformed field means is decided by [`crate::Layout::update_with_change`].
pub enum LayoutChange {
    FocusedWindowChanged {
        #[serde(default, rename = "windowId", deserialize_with = "crate::lenient::window_id")]
        window_id: Option<WindowId>,
    },
    WindowsChanged {
        #[serde(default, deserialize_with = "crate::lenient::windows")]
        windows: Option<Vec<Window>>,
    },
    SwappedFocusedWithMain {
        #[serde(
            default,
            rename = "focusedWindowId",
            deserialize_with = "crate::lenient::window_id"
        )]
        focused_window_id: Option<WindowId>,
    },
    ResizedMain {
        #[serde(default, deserialize_with = "crate::lenient::number")]
        delta: Option<f64>,
        #[serde(default, rename = "screenWidth", deserialize_with = "crate::lenient::number")]
        screen_width: Option<f64>,
    },
    Command {
        #[serde(default, deserialize_with = "crate::lenient::string")]
        command: Option<String>,
    },
    HardReset,
    #[serde(other)]
    Unknown,
}

impl LayoutChange {
    /// Decode a host change object, treating anything unrecognisable as [`LayoutChange::Unknown`].
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(change) => change,
            Err(error) => {
                tracing::debug!("treating undecodable change as unknown: {}", error);
                Self::Unknown
            }
        }
    }
}

impl Display for LayoutChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FocusedWindowChanged { window_id } => match window_id {
                Some(id) => write!(f, "FocusedWindowChanged (Window: {id})"),
                None => write!(f, "FocusedWindowChanged"),
            },
            Self::WindowsChanged { windows } => match windows {
                Some(windows) => write!(f, "WindowsChanged (Count: {})", windows.len()),
                None => write!(f, "WindowsChanged (Malformed)"),
            },
            Self::SwappedFocusedWithMain { focused_window_id } => match focused_window_id {
                Some(id) => write!(f, "SwappedFocusedWithMain (Window: {id})"),
                None => write!(f, "SwappedFocusedWithMain"),
            },
            Self::ResizedMain {
                delta,
                screen_width,
            } => write!(
                f,
                "ResizedMain (Delta: {delta:?}, ScreenWidth: {screen_width:?})"
            ),
            Self::Command { command } => match command {
                Some(command) => write!(f, "Command ({command})"),
                None => write!(f, "Command"),
            },
            Self::HardReset => write!(f, "HardReset"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_every_known_change() {
        assert_eq!(
            LayoutChange::from_value(json!({"type": "focusedWindowChanged", "windowId": "A"})),
            LayoutChange::FocusedWindowChanged {
                window_id: Some(WindowId::from("A"))
            }
        );
        assert_eq!(
            LayoutChange::from_value(json!({"type": "swappedFocusedWithMain", "focusedWindowId": 3})),
            LayoutChange::SwappedFocusedWithMain {
                focused_window_id: Some(WindowId::from(3))
            }
        );
        assert_eq!(
            LayoutChange::from_value(json!({"type": "resizedMain", "delta": 50, "screenWidth": 1000})),
            LayoutChange::ResizedMain {
                delta: Some(50.0),
                screen_width: Some(1000.0)
            }
        );
        assert_eq!(
            LayoutChange::from_value(json!({"type": "command", "command": "expandMain"})),
            LayoutChange::Command {
                command: Some(String::from("expandMain"))
            }
        );
        assert_eq!(
            LayoutChange::from_value(json!({"type": "hardReset"})),
            LayoutChange::HardReset
        );

        match LayoutChange::from_value(
            json!({"type": "windowsChanged", "windows": [{"id": "A", "isFocused": true}]}),
        ) {
            LayoutChange::WindowsChanged {
                windows: Some(windows),
            } => {
                assert_eq!(windows.len(), 1);
                assert_eq!(windows[0].id, WindowId::from("A"));
            }
            other => panic!("unexpected change: {other}"),
        }
    }

    #[test]
    fn test_unknown_or_missing_type_is_unknown() {
        assert_eq!(
            LayoutChange::from_value(json!({"type": "spacesChanged"})),
            LayoutChange::Unknown
        );
        assert_eq!(
            LayoutChange::from_value(json!({"windowId": "A"})),
            LayoutChange::Unknown
        );
        assert_eq!(LayoutChange::from_value(json!(null)), LayoutChange::Unknown);
        assert_eq!(LayoutChange::from_value(json!("hardReset")), LayoutChange::Unknown);
    }

    #[test]
    fn test_malformed_payloads_degrade_to_missing_fields() {
        assert_eq!(
            LayoutChange::from_value(json!({"type": "resizedMain", "delta": "lots", "screenWidth": null})),
            LayoutChange::ResizedMain {
                delta: None,
                screen_width: None
            }
        );
        assert_eq!(
            LayoutChange::from_value(json!({"type": "windowsChanged", "windows": "A,B"})),
            LayoutChange::WindowsChanged { windows: None }
        );
        assert_eq!(
            LayoutChange::from_value(json!({"type": "command", "command": 12})),
            LayoutChange::Command { command: None }
        );
        assert_eq!(
            LayoutChange::from_value(json!({"type": "swappedFocusedWithMain"})),
            LayoutChange::SwappedFocusedWithMain {
                focused_window_id: None
            }
        );
    }
}
