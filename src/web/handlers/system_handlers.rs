// src/web/handlers/system_handlers.rs

use crate::web::types::TextResponse;
use rocket::serde::json::Json;

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success(
        "Profile analyzer API is healthy".to_string(),
        None,
    ))
}
