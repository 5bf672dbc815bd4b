use std::io::BufRead;
use std::io::Write;
use std::str::FromStr;

use color_eyre::Result;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use centerpane_layouts::CommandDescriptor;
use centerpane_layouts::DefaultLayout;
use centerpane_layouts::FrameMap;
use centerpane_layouts::Layout;
use centerpane_layouts::LayoutChange;
use centerpane_layouts::LayoutCommand;
use centerpane_layouts::LayoutState;
use centerpane_layouts::LayoutTunables;
use centerpane_layouts::PersistedState;
use centerpane_layouts::Rect;
use centerpane_layouts::Window;
use centerpane_layouts::WindowId;

#[derive(Debug, Clone, Default, Deserialize)]
/// Everything needed for one layout pass
pub struct FramesInput {
    /// A list that does not decode is treated as no windows at all
    #[serde(default, deserialize_with = "centerpane_layouts::lenient::windows")]
    pub windows: Option<Vec<Window>>,
    #[serde(default, rename = "screenFrame")]
    pub screen_frame: Rect,
    #[serde(default)]
    pub state: PersistedState,
}

impl FramesInput {
    #[must_use]
    pub fn frames(self, layout: &Layout) -> FrameMap {
        let state = layout.normalize(self.state);
        let windows = self.windows.unwrap_or_default();
        layout.frame_assignments(&windows, &self.screen_frame, &state)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInput {
    /// Decoded leniently, an unrecognised change leaves the state as it is
    #[serde(default)]
    pub change: serde_json::Value,
    #[serde(default)]
    pub state: PersistedState,
}

impl UpdateInput {
    #[must_use]
    pub fn update(self, layout: &Layout) -> LayoutState {
        let state = layout.normalize(self.state);
        layout.update_with_change(&LayoutChange::from_value(self.change), &state)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandInput {
    pub command: LayoutCommand,
    #[serde(default)]
    pub state: PersistedState,
    #[serde(default, rename = "focusedId")]
    pub focused_id: Option<WindowId>,
}

impl CommandInput {
    #[must_use]
    pub fn run(self, layout: &Layout) -> LayoutState {
        let state = layout.normalize(self.state);
        layout.run_command(self.command, &state, self.focused_id.as_ref())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// What a host needs to register a layout
pub struct Description {
    pub name: &'static str,
    pub layout: DefaultLayout,
    pub tunables: LayoutTunables,
    pub initial_state: LayoutState,
    pub commands: Vec<CommandDescriptor>,
}

impl From<&Layout> for Description {
    fn from(layout: &Layout) -> Self {
        Self {
            name: layout.name(),
            layout: layout.kind(),
            tunables: *layout.tunables(),
            initial_state: layout.initial_state(),
            commands: layout.commands(),
        }
    }
}

/// The command table as `name -> description`
#[must_use]
pub fn command_table(layout: &Layout) -> serde_json::Map<String, serde_json::Value> {
    layout
        .commands()
        .into_iter()
        .map(|descriptor| {
            (
                descriptor.command.to_string(),
                serde_json::Value::from(descriptor.description),
            )
        })
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "content")]
/// One line of the `serve` protocol
pub enum Request {
    FrameAssignments(FramesInput),
    UpdateWithChange(UpdateInput),
    RunCommand(CommandInput),
    InitialState,
    Commands,
    Describe,
}

impl FromStr for Request {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl Request {
    /// Handle this request, returning the response as a JSON string.
    pub fn handle(self, layout: &Layout) -> Result<String> {
        let response = match self {
            Self::FrameAssignments(input) => serde_json::to_string(&input.frames(layout))?,
            Self::UpdateWithChange(input) => serde_json::to_string(&input.update(layout))?,
            Self::RunCommand(input) => serde_json::to_string(&input.run(layout))?,
            Self::InitialState => serde_json::to_string(&layout.initial_state())?,
            Self::Commands => serde_json::to_string(&command_table(layout))?,
            Self::Describe => serde_json::to_string(&Description::from(layout))?,
        };

        Ok(response)
    }
}

fn error_response(error: impl ToString) -> String {
    json!({ "error": error.to_string() }).to_string()
}

/// Answer one request per line until `reader` is exhausted.
///
/// Lines that fail to decode get an `{"error": ...}` response and the loop
/// carries on.
pub fn serve<R: BufRead, W: Write>(layout: &Layout, reader: R, mut writer: W) -> Result<()> {
    tracing::info!("serving {} requests", layout.name());

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match Request::from_str(&line) {
            Ok(request) => {
                tracing::debug!("handling request: {:?}", request);
                request.handle(layout).unwrap_or_else(error_response)
            }
            Err(error) => {
                tracing::warn!("could not decode request: {}", error);
                error_response(error)
            }
        };

        writeln!(writer, "{response}")?;
        writer.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(request: &str, layout: &Layout) -> serde_json::Value {
        let response = Request::from_str(request).unwrap().handle(layout).unwrap();
        serde_json::from_str(&response).unwrap()
    }

    fn serve_lines(layout: &Layout, input: &str) -> Vec<serde_json::Value> {
        let mut output = vec![];
        serve(layout, input.as_bytes(), &mut output).unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_frame_assignments_request() {
        let layout = Layout::from(DefaultLayout::CenteredPrimaryColumns);
        let response = handle(
            r#"{"type": "FrameAssignments", "content": {
                "windows": [{"id": "A"}, {"id": "B"}, {"id": "C"}],
                "screenFrame": {"x": 0, "y": 0, "width": 1000, "height": 600},
                "state": {"mainRatio": 0.4, "mainWindowID": "A"}
            }}"#,
            &layout,
        );
        assert_eq!(
            response,
            json!({
                "B": {"x": 0, "y": 0, "width": 300, "height": 600},
                "A": {"x": 300, "y": 0, "width": 400, "height": 600},
                "C": {"x": 700, "y": 0, "width": 300, "height": 600},
            })
        );
    }

    #[test]
    fn test_frame_assignments_keep_clockwise_key_order() {
        let layout = Layout::from(DefaultLayout::CenteredPrimaryColumns);
        let input = FramesInput {
            windows: Some(vec![Window::new("A"), Window::new("B"), Window::new("C")]),
            screen_frame: Rect::new(0, 0, 1000, 600),
            state: PersistedState::default(),
        };

        let rendered = serde_json::to_string(&input.frames(&layout)).unwrap();
        let b = rendered.find("\"B\"").unwrap();
        let a = rendered.find("\"A\"").unwrap();
        let c = rendered.find("\"C\"").unwrap();
        assert!(b < a && a < c, "{rendered}");
    }

    #[test]
    fn test_undecodable_window_list_places_nothing() {
        let layout = Layout::from(DefaultLayout::CenteredPrimaryColumns);
        let response = handle(
            r#"{"type": "FrameAssignments", "content": {
                "windows": [{"id": "A"}, {"title": "no id"}],
                "screenFrame": {"x": 0, "y": 0, "width": 1000, "height": 600},
                "state": {"mainRatio": 0.4}
            }}"#,
            &layout,
        );
        assert_eq!(response, json!({}));

        let input: FramesInput = serde_json::from_str(r#"{"windows": "A,B"}"#).unwrap();
        assert!(input.frames(&layout).is_empty());
    }

    #[test]
    fn test_update_with_change_request() {
        let layout = Layout::from(DefaultLayout::CenteredPrimaryColumns);
        let response = handle(
            r#"{"type": "UpdateWithChange", "content": {
                "change": {"type": "resizedMain", "delta": 50, "screenWidth": 1000},
                "state": {"mainRatio": 0.4}
            }}"#,
            &layout,
        );
        let ratio = response.get("mainRatio").and_then(serde_json::Value::as_f64).unwrap();
        assert!((ratio - 0.45).abs() < 1e-6);
        assert_eq!(response.get("mainWindowID"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_unknown_change_leaves_state_alone() {
        let layout = Layout::from(DefaultLayout::CenteredTwinColumns);
        let input: UpdateInput =
            serde_json::from_str(r#"{"change": {"type": "rotate"}, "state": {}}"#).unwrap();

        assert_eq!(input.update(&layout), layout.initial_state());
    }

    #[test]
    fn test_run_command_request() {
        let layout = Layout::from(DefaultLayout::CenteredPrimaryColumns);
        let response = handle(
            r#"{"type": "RunCommand", "content": {
                "command": "setFocusedAsMain",
                "state": {"mainRatio": 0.4, "mainWindowID": "A"},
                "focusedId": 7
            }}"#,
            &layout,
        );
        assert_eq!(response.get("mainWindowID"), Some(&json!(7)));
    }

    #[test]
    fn test_command_table() {
        let twin = command_table(&Layout::from(DefaultLayout::CenteredTwinColumns));
        assert_eq!(twin.len(), 4);
        assert_eq!(
            twin.get("increaseMain").and_then(serde_json::Value::as_str),
            Some("Alias of expandMain")
        );
        assert!(twin.get("setFocusedAsMain").is_none());

        let sticky = command_table(&Layout::from(DefaultLayout::CenteredPrimaryColumns));
        assert_eq!(sticky.len(), 5);
        assert_eq!(
            sticky.get("setFocusedAsMain").and_then(serde_json::Value::as_str),
            Some("Make focused window the primary")
        );
    }

    #[test]
    fn test_describe() {
        let layout = Layout::from(DefaultLayout::CenteredTwinColumns);
        let response = handle(r#"{"type": "Describe"}"#, &layout);

        assert_eq!(response.get("name"), Some(&json!("Centered Twin Columns")));
        assert_eq!(response.get("layout"), Some(&json!("CenteredTwinColumns")));
        assert_eq!(
            response.get("initialState"),
            Some(&json!({"mainRatio": 0.5, "mainWindowID": null}))
        );
    }

    #[test]
    fn test_serve_reports_bad_lines_and_continues() {
        let layout = Layout::from(DefaultLayout::CenteredPrimaryColumns);
        let responses = serve_lines(
            &layout,
            "{\"type\": \"InitialState\"}\nnot json\n\n{\"type\": \"Reticulate\"}\n{\"type\": \"Commands\"}\n",
        );

        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0], json!({"mainRatio": 0.4, "mainWindowID": null}));
        assert!(responses[1].get("error").is_some());
        assert!(responses[2].get("error").is_some());
        assert_eq!(
            responses[3].get("increaseMain").and_then(serde_json::Value::as_str),
            Some("No-op")
        );
    }
}
