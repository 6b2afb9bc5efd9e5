//! Request handlers for the gateway.

use aiplat_audit::AuditSnapshot;
use aiplat_policy::verdict::ALLOWED_REASON;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use uuid::Uuid;

use crate::error::ServerError;
use crate::models::{ChatRequest, ChatResponse, HealthResponse};
use crate::state::AppState;

/// Handler for `GET /health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Handler for `POST /ai/chat`.
///
/// Evaluates the prompt, records the decision, then answers. Exactly one audit
/// record is written for every request whose body parses.
#[tracing::instrument(name = "chat", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ServerError> {
    let Json(request) = payload?;
    let prompt = request.prompt;

    let evaluation = state.evaluator().evaluate(&prompt);
    // Recomputed for the audit record and response, independent of the checks
    let estimate = state.evaluator().estimate(&prompt);

    if !evaluation.allowed() {
        let reason = evaluation.verdict.audit_reason();
        state.audit().record(&prompt, true, &reason, estimate.usd)?;

        tracing::info!(
            verdict = %evaluation.verdict.kind(),
            reason = %reason,
            cost_usd = estimate.usd,
            "Prompt blocked"
        );

        return Ok(Json(ChatResponse::blocked(reason)));
    }

    state
        .audit()
        .record(&prompt, false, ALLOWED_REASON, estimate.usd)?;

    tracing::debug!(
        tokens = estimate.tokens,
        cost_usd = estimate.usd,
        "Prompt allowed"
    );

    let response = state.backend().complete(&prompt, &estimate).await?;

    Ok(Json(ChatResponse::allowed(response, estimate.usd)))
}

/// Handler for `GET /ai/audit-logs`.
pub async fn audit_logs(State(state): State<AppState>) -> Result<Json<AuditSnapshot>, ServerError> {
    Ok(Json(state.audit().query()?))
}
