use axum::{body::Body, extract::Path, http::StatusCode, response::{IntoResponse, Response}};
use common::department::DepartmentSection;
use tracing::info;

use crate::catalog::get_catalog;

async fn _download_section(section: DepartmentSection) -> anyhow::Result<Response> {
    let catalog = get_catalog().await?;
    let data = catalog.export_json(section).await?;
    let headers = [
        ("Content-Type".to_string(), "application/json; charset=utf-8".to_string()),
        (
            "Content-Disposition".to_string(),
            format!("attachment; filename=\"{}.json\"", section.slug()),
        ),
    ];
    Ok((headers, Body::from(data)).into_response())
}

/// `GET /_download_section/{section}`: the section's records as a JSON file.
pub async fn download_section(Path(section): Path<String>) -> Response {
    info!("Downloading section: {}", section);
    let section = match section.parse::<DepartmentSection>() {
        Ok(section) => section,
        Err(e) => return (StatusCode::NOT_FOUND, Body::from(e.to_string())).into_response(),
    };
    match _download_section(section).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("download_section: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}
