//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{health, players};
use crate::data::types::{Player, Profession, Race};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Player Registry API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Player records with filtering, paging and level progression"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "players", description = "Player management")
    ),
    paths(
        health::health,
        players::list_players,
        players::count_players,
        players::create_player,
        players::get_player,
        players::update_player,
        players::delete_player,
    ),
    components(schemas(
        health::HealthResponse,
        Player,
        Race,
        Profession,
        players::types::PlayerPayload,
        players::types::ListPlayersQuery,
        players::types::CountPlayersQuery,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Player Registry API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;
