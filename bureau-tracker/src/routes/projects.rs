/// Project list and creation
///
/// The creation form carries both an existing-client dropdown and inline
/// new-client fields. If either inline field is filled in, a client row
/// is inserted first and the project links to it via the insert's
/// returned id. Otherwise the dropdown selection is used, with `0`
/// translated to "no client". There is no compensating delete if the
/// project insert fails after the client insert succeeded; the client
/// row stays.

use crate::{
    app::AppState,
    error::AppResult,
    filters,
    forms::ProjectCreateForm,
    models::{
        client::{Client, ClientChoice, CreateClient},
        project::{CreateProject, Project, ProjectWithClient},
    },
};
use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use bureau_shared::forms::{field_errors, FieldError};
use validator::Validate;

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsTemplate {
    projs: Vec<ProjectWithClient>,
    choices: Vec<ClientChoice>,
    errors: Vec<FieldError>,
    title: String,
    description: String,
    name: String,
    department: String,
}

/// Dropdown choices: the "no client" sentinel followed by all clients
/// ordered by name
async fn client_choices(state: &AppState) -> Result<Vec<ClientChoice>, sqlx::Error> {
    let mut choices = vec![ClientChoice {
        id: 0,
        name: "(choose/insert a client)".to_string(),
    }];
    choices.extend(Client::list_choices(&state.db).await?);
    Ok(choices)
}

/// Project list page
pub async fn projects_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projs = Project::list_with_clients(&state.db).await?;
    let choices = client_choices(&state).await?;

    let template = ProjectsTemplate {
        projs,
        choices,
        errors: Vec::new(),
        title: String::new(),
        description: String::new(),
        name: String::new(),
        department: String::new(),
    };

    Ok(Html(template.render()?))
}

/// Project creation handler
pub async fn create_project(
    State(state): State<AppState>,
    Form(form): Form<ProjectCreateForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let projs = Project::list_with_clients(&state.db).await?;
        let choices = client_choices(&state).await?;

        let template = ProjectsTemplate {
            projs,
            choices,
            errors: field_errors(&errors),
            title: form.title,
            description: form.description,
            name: form.name.unwrap_or_default(),
            department: form.department.unwrap_or_default(),
        };

        return Ok(Html(template.render()?).into_response());
    }

    let client_id = if form.wants_inline_client() {
        let client = Client::create(
            &state.db,
            CreateClient {
                name: form.name.clone().unwrap_or_default(),
                department: form.department.clone().unwrap_or_default(),
            },
        )
        .await?;
        Some(client.id)
    } else if form.client_id == 0 {
        None
    } else {
        Some(form.client_id)
    };

    Project::create(
        &state.db,
        CreateProject {
            title: form.title,
            description: form.description,
            client_id,
        },
    )
    .await?;

    Ok(Redirect::to("/projects").into_response())
}
