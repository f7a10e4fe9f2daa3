use super::current::{
    ComponentType, Connection, ConnectionVisual, Endpoint, EndpointOrder, Operator,
    OperatorVisual, Position, Preference, WidgetVisual, Wiring,
};
use super::legacy::{
    LegacyConnection, LegacyConnectionView, LegacyEndpoint, LegacyEndpointOrder, LegacyOperator,
    LegacyPosition, LegacyView, LegacyWiring,
};
use tracing::debug;

impl LegacyWiring {
    /// Builds the equivalent 2.0 document. The legacy value is left untouched.
    pub fn migrate(&self) -> Wiring {
        let mut wiring = Wiring::skeleton();

        wiring.operators = self
            .operators
            .iter()
            .map(|(id, operator)| (id.clone(), migrate_operator(operator)))
            .collect();

        wiring.connections = self.connections.iter().map(migrate_connection).collect();

        if let Some(view) = &self.view {
            if self.discarded_views > 0 {
                debug!(
                    discarded = self.discarded_views,
                    "only the first legacy view is migrated"
                );
            }
            migrate_view(view, &mut wiring);
        }

        debug!(
            connections = wiring.connections.len(),
            operators = wiring.operators.len(),
            visual_connections = wiring.visual_description.connections.len(),
            visual_operators = wiring.visual_description.components.operator.len(),
            visual_widgets = wiring.visual_description.components.widget.len(),
            "migrated legacy wiring"
        );

        wiring
    }
}

fn migrate_operator(operator: &LegacyOperator) -> Operator {
    let preferences = operator.preferences.as_ref().map(|preferences| {
        preferences
            .iter()
            .map(|(id, preference)| {
                let migrated = Preference {
                    readonly: preference.readonly.or(preference.read_only),
                    extra: preference.extra.clone(),
                };
                (id.clone(), migrated)
            })
            .collect()
    });

    Operator {
        preferences,
        extra: operator.extra.clone(),
    }
}

fn migrate_endpoint(endpoint: &LegacyEndpoint) -> Endpoint {
    Endpoint {
        kind: ComponentType::from_legacy(&endpoint.kind),
        id: endpoint.id.clone(),
        endpoint: endpoint.endpoint.clone(),
    }
}

fn migrate_connection(connection: &LegacyConnection) -> Connection {
    Connection {
        readonly: connection
            .readonly
            .or(connection.read_only)
            .unwrap_or(false),
        source: migrate_endpoint(&connection.source),
        target: migrate_endpoint(&connection.target),
    }
}

fn migrate_position(position: &LegacyPosition) -> Position {
    Position {
        x: position.pos_x.clone(),
        y: position.pos_y.clone(),
    }
}

fn migrate_endpoint_order(order: &LegacyEndpointOrder) -> EndpointOrder {
    EndpointOrder {
        source: order.sources.clone(),
        target: order.targets.clone(),
    }
}

fn migrate_connection_visual(
    connection: &Connection,
    view: &LegacyConnectionView,
) -> ConnectionVisual {
    ConnectionVisual {
        source_name: connection.source.name(),
        source_handle: migrate_position(&view.puller_start),
        target_name: connection.target.name(),
        target_handle: migrate_position(&view.puller_end),
    }
}

fn migrate_view(view: &LegacyView, wiring: &mut Wiring) {
    // Legacy connection views carry no endpoint ids, so they are paired with
    // business connections by position. Reordering either list breaks the
    // pairing; an id-based correlation would need the views to record ids.
    let visual_connections: Vec<ConnectionVisual> = wiring
        .connections
        .iter()
        .zip(&view.connections)
        .map(|(connection, connection_view)| migrate_connection_visual(connection, connection_view))
        .collect();

    if view.dropped_connection_views > 0 {
        debug!(
            dropped = view.dropped_connection_views,
            "legacy view has more connection views than connections"
        );
    }

    let visual = &mut wiring.visual_description;
    visual.connections = visual_connections;

    for (id, operator_view) in &view.operators {
        if !wiring.operators.contains_key(id) {
            debug!(operator = %id, "skipping view operator missing from the business layer");
            continue;
        }
        visual.components.operator.insert(
            id.clone(),
            OperatorVisual {
                collapsed: operator_view.minimized.unwrap_or(false),
                position: migrate_position(&operator_view.position),
                endpoints: operator_view.endpoints.as_ref().map(migrate_endpoint_order),
            },
        );
    }

    for (id, widget_view) in &view.iwidgets {
        visual.components.widget.insert(
            id.clone(),
            WidgetVisual {
                endpoints: migrate_endpoint_order(&widget_view.endpoints),
                position: migrate_position(&widget_view.position),
                name: widget_view.name.clone(),
            },
        );
    }
}
