use super::current::WIRING_VERSION;
use crate::error::WiringError;
use serde::de::{self, DeserializeOwned, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A wiring document in the pre-2.0 schema, as read from storage.
///
/// Only the first entry of the legacy `views` list is read; the remaining
/// views are counted in `discarded_views` but never inspected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegacyWiring {
    pub operators: BTreeMap<String, LegacyOperator>,
    pub connections: Vec<LegacyConnection>,
    pub view: Option<LegacyView>,
    pub discarded_views: usize,
}

/// A business-layer operator with its preferences.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LegacyOperator {
    #[serde(default)]
    pub preferences: Option<BTreeMap<String, LegacyPreference>>,
    /// Every key except `preferences`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An operator preference, possibly using the mixed-case `readOnly` key.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LegacyPreference {
    #[serde(default)]
    pub readonly: Option<bool>,
    /// The mixed-case `readOnly` key written by older clients.
    #[serde(default, rename = "readOnly")]
    pub read_only: Option<bool>,
    /// Every key except `readonly` and `readOnly`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One side of a legacy connection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LegacyEndpoint {
    /// `iwidget`, `ioperator`, or anything else.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "string_or_integer_id")]
    pub id: String,
    pub endpoint: String,
}

/// A business-layer connection. Either `readonly` spelling may be present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LegacyConnection {
    #[serde(default)]
    pub readonly: Option<bool>,
    #[serde(default, rename = "readOnly")]
    pub read_only: Option<bool>,
    pub source: LegacyEndpoint,
    pub target: LegacyEndpoint,
}

/// A canvas coordinate. Numbers are kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LegacyPosition {
    #[serde(rename = "posX")]
    pub pos_x: Number,
    #[serde(rename = "posY")]
    pub pos_y: Number,
}

/// Display order of a component's endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LegacyEndpointOrder {
    pub sources: Vec<String>,
    pub targets: Vec<String>,
}

/// The two control points of a drawn connection line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LegacyConnectionView {
    #[serde(rename = "pullerStart")]
    pub puller_start: LegacyPosition,
    #[serde(rename = "pullerEnd")]
    pub puller_end: LegacyPosition,
}

/// Placement of an operator on the legacy canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyOperatorView {
    #[serde(default)]
    pub minimized: Option<bool>,
    pub position: LegacyPosition,
    #[serde(default, rename = "endPointsInOuts")]
    pub endpoints: Option<LegacyEndpointOrder>,
}

/// Placement of a widget on the legacy canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyWidgetView {
    pub position: LegacyPosition,
    #[serde(rename = "endPointsInOuts")]
    pub endpoints: LegacyEndpointOrder,
    #[serde(default)]
    pub name: Option<String>,
}

/// The first legacy view.
///
/// `connections` holds only the connection views that pair with a business
/// connection; the rest are counted in `dropped_connection_views` and never
/// read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegacyView {
    pub connections: Vec<LegacyConnectionView>,
    pub dropped_connection_views: usize,
    pub operators: BTreeMap<String, LegacyOperatorView>,
    pub iwidgets: BTreeMap<String, LegacyWidgetView>,
}

/// Top-level layout of a legacy document.
#[derive(Deserialize)]
struct LegacyDocument {
    #[serde(default)]
    operators: BTreeMap<String, LegacyOperator>,
    #[serde(default)]
    connections: Vec<LegacyConnection>,
    #[serde(default)]
    views: FirstView,
}

/// A view whose connection views have not been read yet.
#[derive(Deserialize)]
struct UnpairedView {
    #[serde(default)]
    connections: Vec<Value>,
    operators: BTreeMap<String, LegacyOperatorView>,
    iwidgets: BTreeMap<String, LegacyWidgetView>,
}

/// Reads `views[0]` and skips over the remaining entries without inspecting them.
#[derive(Default)]
struct FirstView {
    view: Option<UnpairedView>,
    discarded: usize,
}

impl<'de> Deserialize<'de> for FirstView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FirstViewVisitor;

        impl<'de> Visitor<'de> for FirstViewVisitor {
            type Value = FirstView;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of views")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FirstView, A::Error> {
                let view = seq.next_element::<UnpairedView>()?;
                let mut discarded = 0;
                while seq.next_element::<IgnoredAny>()?.is_some() {
                    discarded += 1;
                }
                Ok(FirstView { view, discarded })
            }
        }

        deserializer.deserialize_seq(FirstViewVisitor)
    }
}

/// Older documents use integer component ids.
fn string_or_integer_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) if id.is_i64() || id.is_u64() => Ok(id.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or integer id, found {}",
            other
        ))),
    }
}

/// Deserializes `value`, reporting failures with the path below `prefix`.
fn deserialize_at<T: DeserializeOwned>(value: &Value, prefix: &str) -> Result<T, WiringError> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let inner = err.path().to_string();
        let path = match (prefix, inner.as_str()) {
            ("", ".") => "<root>".to_string(),
            ("", _) => inner.clone(),
            (_, ".") => prefix.to_string(),
            (_, tail) if tail.starts_with('[') => format!("{}{}", prefix, tail),
            (_, tail) => format!("{}.{}", prefix, tail),
        };
        WiringError::malformed(path, err.into_inner().to_string())
    })
}

impl LegacyWiring {
    /// Parses legacy wiring JSON text.
    pub fn from_json(text: &str) -> Result<Self, WiringError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| WiringError::JsonParseError(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Reads a legacy document, validating the shape of every field the
    /// migration consumes.
    pub fn from_value(value: &Value) -> Result<Self, WiringError> {
        let Some(root) = value.as_object() else {
            return Err(WiringError::malformed(
                "<root>",
                "expected a JSON object for the wiring document",
            ));
        };

        if root.get("version").and_then(Value::as_str) == Some(WIRING_VERSION) {
            return Err(WiringError::malformed(
                "version",
                format!("document is already in the {} schema", WIRING_VERSION),
            ));
        }

        let document: LegacyDocument = deserialize_at(value, "")?;
        let business_connections = document.connections.len();

        let view = document
            .views
            .view
            .map(|view| pair_connection_views(view, business_connections))
            .transpose()?;

        Ok(Self {
            operators: document.operators,
            connections: document.connections,
            view,
            discarded_views: document.views.discarded,
        })
    }
}

/// Reads only the connection views that have a business connection at the
/// same index. Unpaired entries are counted and left unread.
fn pair_connection_views(
    view: UnpairedView,
    business_connections: usize,
) -> Result<LegacyView, WiringError> {
    let paired = view.connections.len().min(business_connections);
    let connections = view.connections[..paired]
        .iter()
        .enumerate()
        .map(|(index, raw)| deserialize_at(raw, &format!("views[0].connections[{}]", index)))
        .collect::<Result<Vec<LegacyConnectionView>, WiringError>>()?;

    Ok(LegacyView {
        connections,
        dropped_connection_views: view.connections.len() - paired,
        operators: view.operators,
        iwidgets: view.iwidgets,
    })
}
