use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
};

use http::{Request, Response, StatusCode};
use kube::{Client, client::Body};
use serde_json::{Value, json};

/// Client answering GET requests from a fixed table of paths.
///
/// Unknown paths answer `404`. Paths of all requests are recorded in order.
pub(crate) fn mock_client(
    routes: Vec<(&'static str, Value)>,
) -> (Client, Arc<Mutex<Vec<String>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    let routes = Arc::new(routes);

    let service = tower::service_fn(move |request: Request<Body>| {
        let recorded = Arc::clone(&recorded);
        let routes = Arc::clone(&routes);
        async move {
            let path = request.uri().path().to_string();
            recorded.lock().unwrap().push(path.clone());

            let (status, body) = match routes.iter().find(|(route, _)| *route == path) {
                Some((_, body)) if body.get("kind") == Some(&json!("Status")) => {
                    let code = body["code"].as_u64().unwrap_or(500) as u16;
                    (StatusCode::from_u16(code).unwrap(), body.clone())
                }
                Some((_, body)) => (StatusCode::OK, body.clone()),
                None => (StatusCode::NOT_FOUND, status(404, "NotFound")),
            };
            let response = Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap();
            Ok::<_, Infallible>(response)
        }
    });

    (Client::new(service, "default"), requests)
}

pub(crate) fn status(code: u16, reason: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Status",
        "metadata": {},
        "status": "Failure",
        "message": format!("status={code}"),
        "reason": reason,
        "code": code,
    })
}

pub(crate) fn metadata_list(names: &[&str]) -> Value {
    let items: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "apiVersion": "meta.k8s.io/v1",
                "kind": "PartialObjectMetadata",
                "metadata": { "name": name },
            })
        })
        .collect();
    json!({
        "apiVersion": "meta.k8s.io/v1",
        "kind": "PartialObjectMetadataList",
        "metadata": { "resourceVersion": "1" },
        "items": items,
    })
}

pub(crate) fn resource_list(group_version: &str, resources: &[(&str, bool)]) -> Value {
    let resources: Vec<Value> = resources
        .iter()
        .map(|(name, namespaced)| {
            json!({
                "name": name,
                "singularName": "",
                "namespaced": namespaced,
                "kind": "Kind",
                "verbs": ["get", "list"],
            })
        })
        .collect();
    json!({
        "apiVersion": "v1",
        "kind": "APIResourceList",
        "groupVersion": group_version,
        "resources": resources,
    })
}
