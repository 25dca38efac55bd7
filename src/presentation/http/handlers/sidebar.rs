//! Sidebar Handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::application::services::{
    RedirectTarget, SidebarError, SidebarOutcome, SidebarService, SidebarServiceImpl,
};
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::CurrentUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Get the sidebar of a server for the current session.
///
/// Answers `200` with the sidebar view, or `303 See Other` towards the
/// sign-in page (no session) or the home page (unknown server).
pub async fn get_server_sidebar(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(server_id): Path<String>,
) -> Result<Response, AppError> {
    let sidebar_service = SidebarServiceImpl::new(state.profiles.clone(), state.servers.clone());

    let outcome = sidebar_service
        .render_sidebar(current_user.user_id(), &server_id)
        .await
        .map_err(|e| match e {
            SidebarError::Store(e) => e,
        })?;

    let response = match outcome {
        SidebarOutcome::Rendered(view) => {
            metrics::record_sidebar_outcome("rendered");
            Json(*view).into_response()
        }
        SidebarOutcome::Redirect(target) => {
            metrics::record_sidebar_outcome(target.as_str());
            let navigation = &state.settings.navigation;
            let location = match target {
                RedirectTarget::SignIn => navigation.sign_in_path.as_str(),
                RedirectTarget::Home => navigation.home_path.as_str(),
            };
            Redirect::to(location).into_response()
        }
    };

    Ok(response)
}
