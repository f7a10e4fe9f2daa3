use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Schema version written by the migrator.
pub const WIRING_VERSION: &str = "2.0";

/// The kind of component an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Widget,
    Operator,
    NotSupported,
}

impl ComponentType {
    /// Maps a legacy component type. Unknown types never fail; they become `NotSupported`.
    pub fn from_legacy(legacy_type: &str) -> Self {
        match legacy_type {
            "iwidget" => ComponentType::Widget,
            "ioperator" => ComponentType::Operator,
            _ => ComponentType::NotSupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Widget => "widget",
            ComponentType::Operator => "operator",
            ComponentType::NotSupported => "not_supported",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a business connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub id: String,
    pub endpoint: String,
}

impl Endpoint {
    /// Canonical `type/id/endpoint` key used by the visual layer.
    pub fn name(&self) -> String {
        [self.kind.as_str(), self.id.as_str(), self.endpoint.as_str()].iter().join("/")
    }
}

/// A business-layer connection between two component endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub readonly: bool,
    pub source: Endpoint,
    pub target: Endpoint,
}

/// An operator preference. Keys other than `readonly` are carried as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A business-layer operator. Keys other than `preferences` are carried as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<BTreeMap<String, Preference>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A canvas coordinate. Integer and fractional values are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: Number,
    pub y: Number,
}

impl Position {
    pub fn new(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Display order of a component's endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EndpointOrder {
    pub source: Vec<String>,
    pub target: Vec<String>,
}

/// How an operator is drawn on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorVisual {
    pub collapsed: bool,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<EndpointOrder>,
}

/// How a widget is drawn on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetVisual {
    pub endpoints: EndpointOrder,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Per-component visuals, keyed by component id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentVisuals {
    pub operator: BTreeMap<String, OperatorVisual>,
    pub widget: BTreeMap<String, WidgetVisual>,
}

/// Control points of a drawn connection line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionVisual {
    #[serde(rename = "sourcename")]
    pub source_name: String,
    #[serde(rename = "sourcehandle")]
    pub source_handle: Position,
    #[serde(rename = "targetname")]
    pub target_name: String,
    #[serde(rename = "targethandle")]
    pub target_handle: Position,
}

/// A named subset of the wiring, drawn on its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Behaviour {
    pub title: Option<String>,
    pub description: Option<String>,
    pub components: ComponentVisuals,
    pub connections: Vec<ConnectionVisual>,
}

impl Behaviour {
    /// An untitled behaviour with no components or connections.
    pub fn skeleton() -> Self {
        Self::default()
    }
}

/// The visual layer of a 2.0 document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualDescription {
    pub behaviours: Vec<Behaviour>,
    pub components: ComponentVisuals,
    pub connections: Vec<ConnectionVisual>,
}

impl VisualDescription {
    /// True when nothing is drawn. Behaviours are not consulted.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
            && self.components.operator.is_empty()
            && self.components.widget.is_empty()
    }
}

/// A wiring document in the current (2.0) schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wiring {
    pub version: String,
    pub connections: Vec<Connection>,
    pub operators: BTreeMap<String, Operator>,
    #[serde(rename = "visualdescription")]
    pub visual_description: VisualDescription,
}

impl Wiring {
    /// An empty document tagged with the current schema version.
    pub fn skeleton() -> Self {
        Self {
            version: WIRING_VERSION.to_string(),
            connections: Vec::new(),
            operators: BTreeMap::new(),
            visual_description: VisualDescription::default(),
        }
    }

    /// Whether the visual layer is empty, regardless of business content.
    pub fn is_empty(&self) -> bool {
        self.visual_description.is_empty()
    }
}

impl Default for Wiring {
    fn default() -> Self {
        Self::skeleton()
    }
}
