// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Config, Request, Response, Rocket, State};
use tracing::info;

use crate::config::AppConfig;
use crate::core::ResumeView;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[get("/templates")]
pub async fn get_templates(state: &State<ServerState>) -> Json<DataResponse<Vec<TemplateInfo>>> {
    handlers::get_templates_handler(state).await
}

#[post("/normalize", data = "<request>")]
pub async fn normalize(
    request: Json<NormalizeRequest>,
    state: &State<ServerState>,
) -> Json<DataResponse<NormalizedPayload>> {
    handlers::normalize_handler(request, state).await
}

#[post("/preview", data = "<request>")]
pub async fn preview(
    request: Json<PreviewRequest>,
    state: &State<ServerState>,
) -> Json<DataResponse<ResumeView>> {
    handlers::preview_handler(request, state).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Send the body with Content-Type: application/json".to_string(),
        ],
        None,
    ))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body does not match the expected shape".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
        vec![
            "Include the raw record under the \"resume\" field".to_string(),
            "Check that settings values have the right types".to_string(),
        ],
        None,
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
        None,
    ))
}

pub fn build_rocket(rocket: Rocket<Build>, state: ServerState) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(state)
        .register("/api", catchers![bad_request, unprocessable_entity, internal_error])
        .mount(
            "/api",
            routes![health, get_templates, normalize, preview, options],
        )
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let state = ServerState {
        registry: config.registry()?,
        catalogs: config.catalogs()?,
        default_locale: config.default_locale(),
    };

    info!("Starting CV templates API server");
    info!("Templates: {}", state.registry.list_templates().join(", "));
    info!("Locales: {}", state.catalogs.languages().join(", "));
    info!("Server: http://0.0.0.0:{}", config.port);

    let figment = Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", config.port));

    build_rocket(rocket::custom(figment), state)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
