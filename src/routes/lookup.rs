use axum::extract::{Path, State};
use axum::{Form, Json};
use serde::Deserialize;

use crate::lookup::{lookup, LookupResult};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LookupForm {
    #[serde(rename = "userId", default)]
    pub user_id: String,
}

pub async fn lookup_form(
    State(state): State<AppState>,
    Form(form): Form<LookupForm>,
) -> Json<LookupResult> {
    Json(lookup(&state.discord, &state.cdn_base, &form.user_id).await)
}

pub async fn lookup_path(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<LookupResult> {
    Json(lookup(&state.discord, &state.cdn_base, &user_id).await)
}
