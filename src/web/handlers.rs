// src/web/handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::core::{normalize_with, ResumeView, SectionVisibility};
use crate::types::RawResumeRecord;
use crate::web::types::*;

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success("OK".to_string(), None))
}

pub async fn get_templates_handler(state: &State<ServerState>) -> Json<DataResponse<Vec<TemplateInfo>>> {
    let templates: Vec<TemplateInfo> = state.registry.profiles().map(TemplateInfo::from).collect();

    Json(DataResponse::success(
        format!("{} templates available", templates.len()),
        templates,
        None,
    ))
}

pub async fn normalize_handler(
    request: Json<NormalizeRequest>,
    state: &State<ServerState>,
) -> Json<DataResponse<NormalizedPayload>> {
    let request = request.into_inner();
    let locale = state.locale(request.locale.as_deref());
    let profile = state.registry.default_profile();
    let raw = RawResumeRecord::new(request.resume);

    let data = normalize_with(&raw, state.catalogs.for_locale(&locale), &profile.normalize_options());
    let visibility = SectionVisibility::evaluate(&data);
    info!(
        "Normalized resume for locale '{}' ({} visible sections)",
        locale,
        visibility.visible_sections().len()
    );

    Json(DataResponse::success(
        "Resume normalized".to_string(),
        NormalizedPayload {
            photo: data.photolink.clone(),
            data,
            visibility,
        },
        request.conversation_id,
    ))
}

pub async fn preview_handler(
    request: Json<PreviewRequest>,
    state: &State<ServerState>,
) -> Json<DataResponse<ResumeView>> {
    let request = request.into_inner();
    let locale = state.locale(request.locale.as_deref());
    let profile = state.registry.resolve(request.template.as_deref());

    let view = ResumeView::build(
        &RawResumeRecord::new(request.resume),
        &request.settings,
        profile,
        state.catalogs.for_locale(&locale),
        &locale,
    );
    info!("Built '{}' preview for locale '{}'", view.template, locale);

    Json(DataResponse::success(
        format!("Preview for template '{}'", view.template),
        view,
        request.conversation_id,
    ))
}
