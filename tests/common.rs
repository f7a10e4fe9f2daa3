//! Common fixtures for building legacy wiring documents.
use serde_json::{Value, json};

/// A position as legacy views store it.
#[allow(dead_code)]
pub fn legacy_position(x: i64, y: i64) -> Value {
    json!({ "posX": x, "posY": y })
}

/// A legacy connection view with the given puller coordinates.
#[allow(dead_code)]
pub fn connection_view(start: (i64, i64), end: (i64, i64)) -> Value {
    json!({
        "pullerStart": legacy_position(start.0, start.1),
        "pullerEnd": legacy_position(end.0, end.1),
    })
}

/// A legacy business connection between two components.
#[allow(dead_code)]
pub fn legacy_connection(source: (&str, &str, &str), target: (&str, &str, &str)) -> Value {
    json!({
        "source": { "type": source.0, "id": source.1, "endpoint": source.2 },
        "target": { "type": target.0, "id": target.1, "endpoint": target.2 },
    })
}

/// A legacy widget view entry.
#[allow(dead_code)]
pub fn widget_view(x: i64, y: i64, name: Option<&str>) -> Value {
    let mut widget = json!({
        "position": legacy_position(x, y),
        "endPointsInOuts": { "sources": ["out"], "targets": ["in"] },
    });
    if let Some(name) = name {
        widget["name"] = json!(name);
    }
    widget
}

/// The reference legacy document: one operator whose preference uses the
/// mixed-case `readOnly` key, one widget-to-operator connection and one view
/// whose single connection view matches it.
#[allow(dead_code)]
pub fn simple_legacy_wiring() -> Value {
    json!({
        "operators": {
            "op-id": {
                "id": "op-id",
                "name": "CoNWeT/json-parser/1.0",
                "preferences": {
                    "separator": { "readOnly": true, "hidden": false, "value": "," }
                }
            }
        },
        "connections": [
            legacy_connection(("iwidget", "w1", "out"), ("ioperator", "o1", "in"))
        ],
        "views": [{
            "connections": [connection_view((10, 20), (30, 40))],
            "operators": {},
            "iwidgets": {}
        }]
    })
}

/// A document exercising every visual-layer branch of the migration.
#[allow(dead_code)]
pub fn full_legacy_wiring() -> Value {
    json!({
        "operators": {
            "1": { "id": "1", "name": "CoNWeT/ngsi-source/3.0" },
            "2": { "id": "2", "name": "CoNWeT/ngsi-updater/1.0" }
        },
        "connections": [
            legacy_connection(("iwidget", "5", "outputText"), ("ioperator", "1", "input")),
            legacy_connection(("ioperator", "1", "output"), ("iwidget", "6", "inputText")),
        ],
        "views": [{
            "label": "default",
            "connections": [
                connection_view((1, 2), (3, 4)),
                connection_view((5, 6), (7, 8)),
            ],
            "operators": {
                "1": {
                    "minimized": true,
                    "position": legacy_position(100, 50),
                    "endPointsInOuts": { "sources": ["output"], "targets": ["input"] }
                },
                "2": { "position": legacy_position(300, 50) },
                "99": { "position": legacy_position(0, 0) }
            },
            "iwidgets": {
                "5": widget_view(10, 10, Some("Text input")),
                "6": widget_view(500, 10, None),
                "7": widget_view(700, 10, None)
            }
        }]
    })
}
