//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use figuras::api::CatalogClient;
use figuras::catalog::{Category, Figure, FigureId};
use figuras::config::ApiConfig;
use figuras::nav::Route;
use figuras::sync::{execute, Outcome};
use figuras::ui::app::{App, Dispatch};
use serde_json::{json, Value};

pub use mock_catalog::{CapturedRequest, MockCatalog, MockResponse};

pub const TEST_API_KEY: &str = "test-key";

/// Client pointed at a running mock catalog.
pub fn client_for(mock: &MockCatalog) -> CatalogClient {
    CatalogClient::new(ApiConfig::new(mock.base_url(), TEST_API_KEY))
}

/// A stored figure record in wire format.
pub fn record(id: &str, name: &str, category: &str, acquired: bool) -> Value {
    json!({
        "_id": id,
        "nombre": name,
        "descripcion": null,
        "precio": null,
        "categoria": category,
        "imagen": null,
        "adquirida": acquired,
    })
}

/// A figure as the client would decode it.
pub fn figure(id: &str, name: &str, category: Category) -> Figure {
    Figure {
        id: FigureId::new(id),
        name: name.to_string(),
        description: None,
        price: None,
        image: None,
        category,
        acquired: false,
    }
}

/// Fresh app with the root focus already drained.
pub fn make_app() -> App {
    let mut app = App::new();
    let _ = app.take_dispatches();
    app
}

/// App navigated to `route`, with the queued refresh discarded.
pub fn app_at(route: Route) -> App {
    let mut app = make_app();
    app.navigate(route);
    let _ = app.take_dispatches();
    app
}

/// Run every queued command against `client` and feed the outcomes back.
pub async fn pump(app: &mut App, client: &CatalogClient) {
    loop {
        let dispatches = app.take_dispatches();
        if dispatches.is_empty() {
            break;
        }
        for Dispatch { frame, command } in dispatches {
            let outcome: Outcome = execute(client, command).await;
            app.on_outcome(frame, outcome);
        }
    }
}
