use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use crag_core::photo::commons::Feature;
use crag_core::photo::PhotoKey;
use crag_core::route::{PathPoint, Route};
use crag_core::session::{ScrollEvent, Session, WindowEvent};
use crag_core::viewport::ViewportState;
use serde::Deserialize;

/// A recorded climbing view session: the starting data plus the user and
/// loader events to feed through it.
#[derive(Debug, Deserialize)]
pub struct Script {
    /// Photo to open; defaults to the feature's first crag photo.
    #[serde(default)]
    pub photo: Option<PhotoKey>,
    /// Row tops of the route list, parallel to `routes`.
    #[serde(default)]
    pub route_offsets: Vec<f32>,
    pub viewport: ViewportSpec,
    pub feature: Feature,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize)]
pub struct ViewportSpec {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub editor_y: f32,
}

impl ViewportSpec {
    pub fn to_viewport(&self) -> ViewportState {
        let mut viewport = ViewportState::new(self.width, self.height);
        viewport.set_editor_y(self.editor_y);
        viewport
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    SelectRoute {
        index: usize,
    },
    ClearSelection,
    EnterEdit,
    ExitEdit,
    /// External edit toggle.
    EditMode {
        on: bool,
    },
    Scroll {
        top: f32,
        #[serde(default)]
        client_height: f32,
        #[serde(default)]
        scroll_height: f32,
    },
    DragStart,
    DragFinish {
        height: f32,
    },
    ResetSplit,
    Resize {
        width: f32,
        height: f32,
    },
    Orientation {
        width: f32,
        height: f32,
    },
    Zoom {
        scale: f32,
    },
    EditorPosition {
        y: f32,
    },
    PhotoLoaded {
        photo: PhotoKey,
        resolution: u32,
    },
    RoutesLoading {
        loading: bool,
    },
    /// Append a vertex to the edited route on the active photo.
    AddPoint {
        x: f32,
        y: f32,
    },
    ToggleMap,
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectRoute { index } => write!(f, "select route {index}"),
            Self::ClearSelection => write!(f, "clear selection"),
            Self::EnterEdit => write!(f, "enter edit"),
            Self::ExitEdit => write!(f, "exit edit"),
            Self::EditMode { on } => write!(f, "edit toggle {}", if *on { "on" } else { "off" }),
            Self::Scroll { top, .. } => write!(f, "scroll to {top}"),
            Self::DragStart => write!(f, "drag start"),
            Self::DragFinish { height } => write!(f, "drag finish at {height}"),
            Self::ResetSplit => write!(f, "reset split"),
            Self::Resize { width, height } => write!(f, "resize {width}x{height}"),
            Self::Orientation { width, height } => write!(f, "orientation {width}x{height}"),
            Self::Zoom { scale } => write!(f, "zoom {scale}"),
            Self::EditorPosition { y } => write!(f, "editor at y={y}"),
            Self::PhotoLoaded { photo, resolution } => write!(f, "loaded {photo} @ {resolution}px"),
            Self::RoutesLoading { loading } => write!(f, "routes loading = {loading}"),
            Self::AddPoint { x, y } => write!(f, "add point ({x}, {y})"),
            Self::ToggleMap => write!(f, "toggle map"),
        }
    }
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid script {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let script: Script = toml::from_str(contents)?;
        if !script.route_offsets.is_empty() && script.route_offsets.len() != script.routes.len() {
            anyhow::bail!(
                "route_offsets has {} entries for {} routes",
                script.route_offsets.len(),
                script.routes.len()
            );
        }
        Ok(script)
    }
}

/// Feed one event into the session.
pub fn apply(session: &mut Session, event: &ScriptEvent) -> Result<()> {
    match *event {
        ScriptEvent::SelectRoute { index } => {
            session.select_route(index);
        }
        ScriptEvent::ClearSelection => {
            session.clear_selection();
        }
        ScriptEvent::EnterEdit => {
            session.enter_edit_mode();
        }
        ScriptEvent::ExitEdit => {
            session.exit_edit_mode();
        }
        ScriptEvent::EditMode { on } => {
            session.set_edit_mode(on);
        }
        ScriptEvent::Scroll {
            top,
            client_height,
            scroll_height,
        } => session.on_scroll(ScrollEvent {
            scroll_top: top,
            client_height,
            scroll_height,
        }),
        ScriptEvent::DragStart => session.on_drag_start(),
        ScriptEvent::DragFinish { height } => session.on_drag_finish(height),
        ScriptEvent::ResetSplit => session.reset_split_height(),
        ScriptEvent::Resize { width, height } => {
            session.handle_window_event(WindowEvent::Resize { width, height })
        }
        ScriptEvent::Orientation { width, height } => {
            session.handle_window_event(WindowEvent::OrientationChange { width, height })
        }
        ScriptEvent::Zoom { scale } => session.set_zoom(scale),
        ScriptEvent::EditorPosition { y } => session.set_editor_position(y),
        ScriptEvent::PhotoLoaded {
            ref photo,
            resolution,
        } => session.photo_loaded(photo, resolution),
        ScriptEvent::RoutesLoading { loading } => session.set_routes_loading(loading),
        ScriptEvent::AddPoint { x, y } => {
            session.edit_selected_route(|route, photo| {
                route.push_point(photo, PathPoint::new(x, y));
                Ok(())
            })?;
        }
        ScriptEvent::ToggleMap => session.toggle_map(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const SCRIPT: &str = r#"
route_offsets = [0.0, 60.0]

[viewport]
width = 1000.0
height = 800.0
editor_y = 100.0

[feature]
osm_type = "node"
osm_id = 42

[feature.tags]
wikimedia_commons = "File:p1.jpg"
"wikimedia_commons:2" = "File:p2.jpg"

[[routes]]
id = "A"
[[routes.paths]]
photo = "p1.jpg"
points = [{ x = 0.5, y = 0.9 }, { x = 0.5, y = 0.1 }]

[[routes]]
id = "B"
[[routes.paths]]
photo = "p2.jpg"

[[event]]
kind = "select_route"
index = 0

[[event]]
kind = "scroll"
top = 0.0

[[event]]
kind = "photo_loaded"
photo = "p2.jpg"
resolution = 1000
"#;

    #[test]
    fn test_parse_script() {
        let script = Script::parse(SCRIPT).unwrap();
        assert_eq!(script.routes.len(), 2);
        assert_eq!(script.feature.crag_photos().len(), 2);
        assert_eq!(
            script.events,
            vec![
                ScriptEvent::SelectRoute { index: 0 },
                ScriptEvent::Scroll {
                    top: 0.0,
                    client_height: 0.0,
                    scroll_height: 0.0
                },
                ScriptEvent::PhotoLoaded {
                    photo: PhotoKey::new("p2.jpg").unwrap(),
                    resolution: 1000
                },
            ]
        );
    }

    #[test]
    fn test_load_script_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SCRIPT.as_bytes()).unwrap();
        let script = Script::load(file.path()).unwrap();
        assert_eq!(script.viewport.to_viewport().container_height(), 700.0);
    }

    #[test]
    fn test_rejects_mismatched_offsets() {
        let bad = SCRIPT.replace("route_offsets = [0.0, 60.0]", "route_offsets = [0.0]");
        let err = Script::parse(&bad).unwrap_err();
        assert!(err.to_string().contains("route_offsets"), "got: {err}");
    }

    #[test]
    fn test_unknown_event_kind() {
        let bad = format!("{SCRIPT}\n[[event]]\nkind = \"teleport\"\n");
        assert!(Script::parse(&bad).is_err());
    }
}
