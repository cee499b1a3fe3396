/// Session-gated edit/delete pages for clients and projects
///
/// Both pages list every row newest-first with an inline form per row.
/// A submission carrying the `delete` marker removes the row
/// unconditionally; anything else performs a full-field update and
/// refreshes the `updated` timestamp. The session check lives in the
/// router layer (`app::session_auth_layer`), not here.

use crate::{
    app::AppState,
    error::AppResult,
    forms::{ClientEditForm, ProjectEditForm},
    models::{
        client::{Client, ClientChoice},
        project::Project,
    },
};
use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};

#[derive(Template)]
#[template(path = "edit_client.html")]
struct EditClientTemplate {
    clients: Vec<Client>,
}

/// One editable project row; `client_id` is `0` when the project has no
/// client so the template can mark the dropdown's sentinel as selected
struct EditProjectRow {
    id: i64,
    title: String,
    description: String,
    client_id: i64,
}

#[derive(Template)]
#[template(path = "edit_project.html")]
struct EditProjectTemplate {
    projs: Vec<EditProjectRow>,
    choices: Vec<ClientChoice>,
}

/// Client edit page
pub async fn edit_client_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let clients = Client::list_newest_first(&state.db).await?;

    Ok(Html(EditClientTemplate { clients }.render()?))
}

/// Client edit/delete handler
pub async fn edit_client(
    State(state): State<AppState>,
    Form(form): Form<ClientEditForm>,
) -> AppResult<Redirect> {
    if form.delete.is_some() {
        Client::delete(&state.db, form.id).await?;
        return Ok(Redirect::to("/"));
    }

    Client::update(&state.db, form.id, &form.name, &form.department).await?;

    Ok(Redirect::to("/edit_client"))
}

/// Project edit page
pub async fn edit_project_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projs = Project::list_newest_first(&state.db)
        .await?
        .into_iter()
        .map(|p| EditProjectRow {
            id: p.id,
            title: p.title,
            description: p.description,
            client_id: p.client_id.unwrap_or(0),
        })
        .collect();

    let choices = Client::list_choices(&state.db).await?;

    Ok(Html(EditProjectTemplate { projs, choices }.render()?))
}

/// Project edit/delete handler
pub async fn edit_project(
    State(state): State<AppState>,
    Form(form): Form<ProjectEditForm>,
) -> AppResult<Redirect> {
    if form.delete.is_some() {
        Project::delete(&state.db, form.id).await?;
        return Ok(Redirect::to("/"));
    }

    let client_id = (form.client_id != 0).then_some(form.client_id);

    Project::update(
        &state.db,
        form.id,
        &form.title,
        &form.description,
        client_id,
    )
    .await?;

    Ok(Redirect::to("/edit_project"))
}
