/// Dashboard page
///
/// `GET /` shows recent projects and clients, newest first.

use crate::{
    app::AppState,
    error::AppResult,
    models::{client::Client, project::Project},
};
use askama::Template;
use axum::{extract::State, response::Html};

#[derive(Template)]
#[template(path = "index.html")]
struct DashboardTemplate {
    projs: Vec<Project>,
    clients: Vec<Client>,
}

/// Dashboard handler
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projs = Project::list_newest_first(&state.db).await?;
    let clients = Client::list_newest_first(&state.db).await?;

    Ok(Html(DashboardTemplate { projs, clients }.render()?))
}
