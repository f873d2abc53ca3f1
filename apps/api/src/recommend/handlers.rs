//! Axum route handlers for the recommendation form and JSON API.

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use tracing::info;

use crate::catalog::{DrumKit, PreferenceForm, PreferenceRequest, Preferences};
use crate::errors::AppError;
use crate::recommend::pages::{error_page, index_page, results_page};
use crate::recommend::service::{recommend, Recommendation};
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(index_page(state.catalog))
}

/// POST /recommend
///
/// Form-encoded preferences in, HTML out. Missing fields and invalid values
/// render an error page with status 400; a failed completion call still
/// renders the shortlist.
pub async fn handle_recommend_form(
    State(state): State<AppState>,
    form: Result<Form<PreferenceForm>, FormRejection>,
) -> Response {
    let parsed = form
        .map_err(|rejection| rejection.body_text())
        .and_then(|Form(form)| Preferences::try_from(form).map_err(|e| e.to_string()));
    let prefs = match parsed {
        Ok(prefs) => prefs,
        Err(message) => {
            info!("Rejected form submission: {message}");
            return (StatusCode::BAD_REQUEST, Html(error_page(&message))).into_response();
        }
    };

    let rec = recommend(
        state.llm.as_ref(),
        state.catalog,
        prefs,
        state.config.shortlist_size,
    )
    .await;

    Html(results_page(&rec)).into_response()
}

/// GET /api/v1/kits
pub async fn handle_list_kits(State(state): State<AppState>) -> Json<&'static [DrumKit]> {
    Json(state.catalog)
}

/// POST /api/v1/recommendations
///
/// JSON preferences in, the full recommendation (shortlist, scores, advice) out.
/// Malformed bodies and invalid values are 400 `VALIDATION_ERROR`s.
pub async fn handle_recommend_json(
    State(state): State<AppState>,
    payload: Result<Json<PreferenceRequest>, JsonRejection>,
) -> Result<Json<Recommendation<'static>>, AppError> {
    let Json(request) = payload?;
    let prefs = Preferences::try_from(request)?;

    let rec = recommend(
        state.llm.as_ref(),
        state.catalog,
        prefs,
        state.config.shortlist_size,
    )
    .await;

    Ok(Json(rec))
}
