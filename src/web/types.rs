// src/web/types.rs
use rocket::serde::json::Value;
use rocket::serde::{Deserialize, Serialize};

use crate::core::SectionVisibility;
use crate::i18n::{Catalogs, LocaleTag};
use crate::template_system::{TemplateProfile, TemplateRegistry};
use crate::types::{DisplaySettings, NormalizedResume};

pub struct ServerState {
    pub registry: TemplateRegistry,
    pub catalogs: Catalogs,
    pub default_locale: LocaleTag,
}

impl ServerState {
    /// Requested locale, or the configured default. Translations fall back to
    /// English on their own; dates keep the requested locale.
    pub fn locale(&self, requested: Option<&str>) -> LocaleTag {
        requested
            .filter(|tag| !tag.trim().is_empty())
            .map(LocaleTag::parse)
            .unwrap_or_else(|| self.default_locale.clone())
    }
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NormalizeRequest {
    pub resume: Value,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct PreviewRequest {
    pub resume: Value,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub settings: DisplaySettings,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct NormalizedPayload {
    pub data: NormalizedResume,
    pub visibility: SectionVisibility,
    pub photo: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&TemplateProfile> for TemplateInfo {
    fn from(profile: &TemplateProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            description: profile.description.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Error,
}

impl TextResponse {
    pub fn success(message: String, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
            conversation_id,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
            conversation_id,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(
        error: String,
        error_code: String,
        suggestions: Vec<String>,
        conversation_id: Option<String>,
    ) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
            conversation_id,
        }
    }
}
