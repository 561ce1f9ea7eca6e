use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct ListQuery {
    #[serde(default)]
    limit: Option<usize>,
}

fn forced(status: Option<u16>) -> Option<Response> {
    let code = StatusCode::from_u16(status?).ok()?;
    if code.is_success() {
        return None;
    }
    Some((code, Json(serde_json::json!({"error": "forced by fixture"}))).into_response())
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "not found"})),
    )
        .into_response()
}

pub(super) async fn list_entries(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListQuery>,
) -> Response {
    tokio::time::sleep(state.latency).await;
    if let Some(resp) = forced(state.fixture.list_status) {
        return resp;
    }
    let limit = q.limit.unwrap_or(20);
    let results: Vec<serde_json::Value> = state
        .fixture
        .entries
        .iter()
        .take(limit)
        .map(|e| {
            serde_json::json!({
                "name": e.name,
                "url": format!("{}/pokemon/{}/", state.public_base, e.id),
            })
        })
        .collect();
    Json(serde_json::json!({
        "count": state.fixture.entries.len(),
        "results": results,
    }))
    .into_response()
}

pub(super) async fn get_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    tokio::time::sleep(state.latency).await;
    let Some(entry) = parse_id(&id).and_then(|id| state.fixture.entry(id)) else {
        return not_found();
    };
    if let Some(resp) = forced(entry.detail_status) {
        return resp;
    }
    Json(entry.detail_json()).into_response()
}

pub(super) async fn get_species(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    tokio::time::sleep(state.latency).await;
    let Some(entry) = parse_id(&id).and_then(|id| state.fixture.entry(id)) else {
        return not_found();
    };
    if let Some(resp) = forced(entry.species_status) {
        if entry.species_status_keep_body {
            return (resp.status(), Json(entry.species_json())).into_response();
        }
        return resp;
    }
    Json(entry.species_json()).into_response()
}

fn parse_id(raw: &str) -> Option<u32> {
    raw.parse().ok()
}
