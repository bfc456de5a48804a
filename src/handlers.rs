use crate::completion::CompletionError;
use crate::errors::AppError;
use crate::metrics::metrics_snapshot;
use crate::models::{InsightReply, InsightRequest, MetricsSnapshot};
use crate::prompt::build_prompt;
use crate::state::AppState;
use crate::ui::INDEX_HTML;
use axum::{extract::State, response::Html, Json};
use tokio::time::timeout;
use tracing::{error, info, warn};

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn get_data() -> Json<MetricsSnapshot> {
    Json(metrics_snapshot())
}

/// A missing or undecodable body counts as an empty question.
pub async fn insight(
    State(state): State<AppState>,
    payload: Option<Json<InsightRequest>>,
) -> Result<Json<InsightReply>, AppError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let prompt = build_prompt(&request.message);

    let outcome = match timeout(state.timeout, state.completion.complete(&prompt)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(CompletionError::TimedOut(state.timeout)),
    };

    match outcome {
        Ok(Some(reply)) if !reply.is_empty() => {
            info!(bytes = reply.len(), "insight generated");
            Ok(Json(InsightReply { reply }))
        }
        Ok(_) => {
            warn!("completion service returned no content");
            Err(AppError::bad_gateway())
        }
        Err(err) => {
            error!("error generating insight: {err}");
            Err(AppError::internal())
        }
    }
}

pub async fn insight_method_not_allowed() -> AppError {
    AppError::method_not_allowed("POST")
}
