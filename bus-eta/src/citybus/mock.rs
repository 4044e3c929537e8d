//! In-process stand-in for the Citybus API.
//!
//! Serves canned responses keyed by path and records the paths it was
//! asked for.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};

#[derive(Debug)]
struct Canned {
    routes: HashMap<String, (StatusCode, String)>,
    fallback: (StatusCode, String),
    requests: Mutex<Vec<String>>,
}

/// Local HTTP server answering requests from a fixed table.
pub(crate) struct MockServer {
    base_url: String,
    canned: Arc<Canned>,
}

impl MockServer {
    /// Serve the same response for every path.
    pub(crate) async fn start(status: StatusCode, body: &str) -> Self {
        Self::serve(HashMap::new(), (status, body.to_string())).await
    }

    /// Serve `routes` by exact path; anything else is a 404.
    pub(crate) async fn with_routes(routes: &[(&str, StatusCode, &str)]) -> Self {
        let routes = routes
            .iter()
            .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
            .collect();
        Self::serve(routes, (StatusCode::NOT_FOUND, String::new())).await
    }

    async fn serve(
        routes: HashMap<String, (StatusCode, String)>,
        fallback: (StatusCode, String),
    ) -> Self {
        let canned = Arc::new(Canned {
            routes,
            fallback,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(respond).with_state(canned.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            canned,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Paths requested so far, in order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.canned.requests.lock().unwrap().clone()
    }
}

async fn respond(State(canned): State<Arc<Canned>>, uri: Uri) -> (StatusCode, String) {
    let path = uri.path().to_string();
    let (status, body) = canned
        .routes
        .get(&path)
        .unwrap_or(&canned.fallback)
        .clone();
    canned.requests.lock().unwrap().push(path);
    (status, body)
}
