/// Client list and creation
///
/// `GET /clients` renders the list with an empty creation form;
/// `POST /clients` validates the form, inserts on success and redirects
/// back to the list, or redisplays the form with messages.

use crate::{
    app::AppState,
    error::AppResult,
    filters,
    forms::ClientCreateForm,
    models::client::{Client, CreateClient},
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
#[template(path = "clients.html")]
struct ClientsTemplate {
    clients: Vec<Client>,
    errors: Vec<FieldError>,
    name: String,
    department: String,
}

/// Client list page
pub async fn clients_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let clients = Client::list_newest_first(&state.db).await?;

    let template = ClientsTemplate {
        clients,
        errors: Vec::new(),
        name: String::new(),
        department: String::new(),
    };

    Ok(Html(template.render()?))
}

/// Client creation handler
pub async fn create_client(
    State(state): State<AppState>,
    Form(form): Form<ClientCreateForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let clients = Client::list_newest_first(&state.db).await?;

        let template = ClientsTemplate {
            clients,
            errors: field_errors(&errors),
            name: form.name,
            department: form.department,
        };

        return Ok(Html(template.render()?).into_response());
    }

    Client::create(
        &state.db,
        CreateClient {
            name: form.name,
            department: form.department,
        },
    )
    .await?;

    Ok(Redirect::to("/clients").into_response())
}
