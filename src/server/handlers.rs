use axum::extract::State;
use axum::Json;

use crate::models::Verdict;
use crate::server::requests::{CallRequest, EmailRequest, SmsRequest, UrlRequest};
use crate::server::AppState;

pub async fn scan_sms(
    State(state): State<AppState>,
    Json(body): Json<SmsRequest>,
) -> Json<Verdict> {
    Json(state.engine.scan_sms(&body.text, body.phone_number.as_deref()))
}

pub async fn scan_call(
    State(state): State<AppState>,
    Json(body): Json<CallRequest>,
) -> Json<Verdict> {
    Json(state.engine.scan_call(&body.phone_number))
}

pub async fn scan_email(
    State(state): State<AppState>,
    Json(body): Json<EmailRequest>,
) -> Json<Verdict> {
    Json(state.engine.scan_email(&body.subject, &body.body, body.sender.as_deref()))
}

/// URL scans get threat-intel enrichment when keys are configured.
/// The lookup is blocking HTTP and runs on the blocking pool.
pub async fn scan_url(
    State(state): State<AppState>,
    Json(body): Json<UrlRequest>,
) -> Json<Verdict> {
    let verdict = state.engine.scan_url(&body.url);

    if state.intel.enabled() {
        let intel = state.intel.clone();
        let url = body.url.clone();
        let summary = tokio::task::spawn_blocking(move || intel.enhanced_url_check(&url))
            .await
            .unwrap_or_default();
        return Json(summary.apply(verdict));
    }

    Json(verdict)
}
