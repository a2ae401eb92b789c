//! Player API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::{JsonBody, PlayerPath, ValidatedQuery};
use crate::api::types::ApiError;
use crate::data::PlayerStore;
use crate::data::types::Player;
use crate::domain::PlayerService;

use types::{CountPlayersQuery, ListPlayersQuery, PlayerPayload};

/// Shared state for Player API endpoints
#[derive(Clone)]
pub struct PlayersApiState {
    pub service: PlayerService,
}

/// Build Player API routes
pub fn routes(store: Arc<PlayerStore>) -> Router<()> {
    let state = PlayersApiState {
        service: PlayerService::new(store),
    };

    Router::new()
        .route("/", get(list_players).post(create_player))
        .route("/count", get(count_players))
        .route(
            "/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
        .with_state(state)
}

/// List players matching the filters, one page at a time
#[utoipa::path(
    get,
    path = "/rest/players",
    tag = "players",
    params(
        ("name" = Option<String>, Query, description = "Name contains (case-insensitive)"),
        ("title" = Option<String>, Query, description = "Title contains (case-insensitive)"),
        ("race" = Option<String>, Query, description = "Exact race"),
        ("profession" = Option<String>, Query, description = "Exact profession"),
        ("after" = Option<i64>, Query, description = "Born on or after this day (epoch ms)"),
        ("before" = Option<i64>, Query, description = "Born on or before this day (epoch ms)"),
        ("banned" = Option<bool>, Query, description = "Banned flag"),
        ("minExperience" = Option<i64>, Query, description = "Minimum experience"),
        ("maxExperience" = Option<i64>, Query, description = "Maximum experience"),
        ("minLevel" = Option<i64>, Query, description = "Minimum level"),
        ("maxLevel" = Option<i64>, Query, description = "Maximum level"),
        ("order" = Option<String>, Query, description = "ID, NAME, EXPERIENCE, BIRTHDAY or LEVEL"),
        ("pageNumber" = Option<u32>, Query, description = "Zero-based page (default 0)"),
        ("pageSize" = Option<u32>, Query, description = "Items per page (default 3, max 500)")
    ),
    responses(
        (status = 200, description = "Players on the requested page", body = Vec<Player>),
        (status = 400, description = "Malformed filter or paging parameter")
    )
)]
pub async fn list_players(
    State(state): State<PlayersApiState>,
    ValidatedQuery(query): ValidatedQuery<ListPlayersQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let page = query.page_request()?;
    let players = state.service.list(&query.filters(), &page).await?;
    Ok(Json(players))
}

/// Count players matching the filters
#[utoipa::path(
    get,
    path = "/rest/players/count",
    tag = "players",
    params(
        ("name" = Option<String>, Query, description = "Name contains (case-insensitive)"),
        ("title" = Option<String>, Query, description = "Title contains (case-insensitive)"),
        ("race" = Option<String>, Query, description = "Exact race"),
        ("profession" = Option<String>, Query, description = "Exact profession"),
        ("after" = Option<i64>, Query, description = "Born on or after this day (epoch ms)"),
        ("before" = Option<i64>, Query, description = "Born on or before this day (epoch ms)"),
        ("banned" = Option<bool>, Query, description = "Banned flag"),
        ("minExperience" = Option<i64>, Query, description = "Minimum experience"),
        ("maxExperience" = Option<i64>, Query, description = "Maximum experience"),
        ("minLevel" = Option<i64>, Query, description = "Minimum level"),
        ("maxLevel" = Option<i64>, Query, description = "Maximum level")
    ),
    responses(
        (status = 200, description = "Number of matching players", body = u64),
        (status = 400, description = "Malformed filter parameter")
    )
)]
pub async fn count_players(
    State(state): State<PlayersApiState>,
    ValidatedQuery(query): ValidatedQuery<CountPlayersQuery>,
) -> Result<Json<u64>, ApiError> {
    let count = state.service.count(&query.filters()).await?;
    Ok(Json(count))
}

/// Create a player
#[utoipa::path(
    post,
    path = "/rest/players",
    tag = "players",
    request_body = PlayerPayload,
    responses(
        (status = 200, description = "Player created", body = Player),
        (status = 400, description = "Missing or invalid field")
    )
)]
pub async fn create_player(
    State(state): State<PlayersApiState>,
    JsonBody(body): JsonBody<PlayerPayload>,
) -> Result<Json<Player>, ApiError> {
    let player = state.service.create(body.into()).await?;
    Ok(Json(player))
}

/// Get a player by id
#[utoipa::path(
    get,
    path = "/rest/players/{id}",
    tag = "players",
    params(("id" = i64, Path, description = "Player id (positive)")),
    responses(
        (status = 200, description = "Player found", body = Player),
        (status = 400, description = "Id is not a positive integer"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn get_player(
    State(state): State<PlayersApiState>,
    path: PlayerPath,
) -> Result<Json<Player>, ApiError> {
    let player = state.service.get(path.id).await?;
    Ok(Json(player))
}

/// Update the fields present in the body; any invalid field rejects the whole update
#[utoipa::path(
    post,
    path = "/rest/players/{id}",
    tag = "players",
    params(("id" = i64, Path, description = "Player id (positive)")),
    request_body = PlayerPayload,
    responses(
        (status = 200, description = "Player updated", body = Player),
        (status = 400, description = "Invalid id or field"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn update_player(
    State(state): State<PlayersApiState>,
    path: PlayerPath,
    JsonBody(body): JsonBody<PlayerPayload>,
) -> Result<Json<Player>, ApiError> {
    let player = state.service.update(path.id, body.into()).await?;
    Ok(Json(player))
}

/// Delete a player
#[utoipa::path(
    delete,
    path = "/rest/players/{id}",
    tag = "players",
    params(("id" = i64, Path, description = "Player id (positive)")),
    responses(
        (status = 200, description = "Player deleted"),
        (status = 400, description = "Id is not a positive integer"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn delete_player(
    State(state): State<PlayersApiState>,
    path: PlayerPath,
) -> Result<StatusCode, ApiError> {
    state.service.delete(path.id).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, Response};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().nest("/rest/players", routes(Arc::new(PlayerStore::memory())))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn payload(name: &str, race: &str, experience: i64) -> Value {
        json!({
            "name": name,
            "title": "Wanderer",
            "race": race,
            "profession": "WARRIOR",
            "birthday": 1_000_000_000_000i64,
            "experience": experience
        })
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = app();
        let response = send(&app, "POST", "/rest/players", Some(payload("Anna", "ELF", 100))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["level"], 1);
        assert_eq!(created["untilNextLevel"], 200);
        assert_eq!(created["banned"], false);
        assert_eq!(created["race"], "ELF");

        let response = send(&app, "GET", "/rest/players/1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payloads() {
        let app = app();
        let response = send(
            &app,
            "POST",
            "/rest/players",
            Some(payload("ThirteenChars", "ELF", 0)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "bad_request");
        assert_eq!(body["code"], "INVALID_PARAMETERS");

        let response = send(&app, "POST", "/rest/players", Some(json!({"name": "Anna"}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "POST", "/rest/players", Some(payload("Anna", "ANGEL", 0))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "JSON_PARSE_ERROR");
    }

    #[tokio::test]
    async fn test_get_rejects_bad_ids() {
        let app = app();
        for uri in ["/rest/players/abc", "/rest/players/0", "/rest/players/-1"] {
            let response = send(&app, "GET", uri, None).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }

        let response = send(&app, "GET", "/rest/players/999999", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn test_list_filters_orders_and_counts() {
        let app = app();
        for (name, race, exp) in [
            ("Anna", "ELF", 100),
            ("Bob", "ORC", 0),
            ("Hannah", "ELF", 5000),
            ("Ivan", "HUMAN", 700),
        ] {
            let response = send(&app, "POST", "/rest/players", Some(payload(name, race, exp))).await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = send(&app, "GET", "/rest/players", None).await;
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 3);

        let response = send(&app, "GET", "/rest/players?name=AN&order=level&pageSize=2", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let names: Vec<Value> = body_json(response)
            .await
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("Anna"), json!("Ivan")]);

        let response = send(&app, "GET", "/rest/players?pageNumber=1&pageSize=3", None).await;
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

        let response = send(&app, "GET", "/rest/players/count?race=ELF", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(2));

        let response = send(&app, "GET", "/rest/players/count?minLevel=3&maxLevel=9", None).await;
        assert_eq!(body_json(response).await, json!(2));
    }

    #[tokio::test]
    async fn test_list_rejects_malformed_parameters() {
        let app = app();
        for uri in [
            "/rest/players?race=ANGEL",
            "/rest/players?pageSize=0",
            "/rest/players?pageSize=501",
            "/rest/players?order=HEIGHT",
            "/rest/players?minExperience=lots",
            "/rest/players/count?banned=maybe",
        ] {
            let response = send(&app, "GET", uri, None).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_count_ignores_paging_parameters() {
        let app = app();
        for name in ["Anna", "Bob", "Cleo", "Dain"] {
            send(&app, "POST", "/rest/players", Some(payload(name, "ELF", 0))).await;
        }

        for uri in [
            "/rest/players/count?pageSize=0",
            "/rest/players/count?pageSize=501&pageNumber=7",
            "/rest/players/count?order=HEIGHT",
        ] {
            let response = send(&app, "GET", uri, None).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            assert_eq!(body_json(response).await, json!(4), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_list_matches_non_ascii_names() {
        let app = app();
        for name in ["Ärger", "Arger"] {
            send(&app, "POST", "/rest/players", Some(payload(name, "DWARF", 0))).await;
        }

        let response = send(&app, "GET", "/rest/players/count?name=%C3%A4r", None).await;
        assert_eq!(body_json(response).await, json!(1));

        let response = send(&app, "GET", "/rest/players?name=%C3%84R", None).await;
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Ärger");
    }

    #[tokio::test]
    async fn test_update_is_partial_and_all_or_nothing() {
        let app = app();
        send(&app, "POST", "/rest/players", Some(payload("Anna", "ELF", 0))).await;

        let response = send(&app, "POST", "/rest/players/1", Some(json!({"experience": 300}))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["level"], 2);
        assert_eq!(updated["untilNextLevel"], 300);
        assert_eq!(updated["name"], "Anna");

        let response = send(
            &app,
            "POST",
            "/rest/players/1",
            Some(json!({"title": "Legend", "experience": -1})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "GET", "/rest/players/1", None).await;
        assert_eq!(body_json(response).await, updated);

        let response = send(&app, "POST", "/rest/players/42", Some(json!({"banned": true}))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let app = app();
        send(&app, "POST", "/rest/players", Some(payload("Anna", "ELF", 0))).await;

        let response = send(&app, "DELETE", "/rest/players/1", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, "GET", "/rest/players/1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, "DELETE", "/rest/players/1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
