/// Blog post handlers
///
/// One form template serves both create and edit; the handlers differ
/// only in where the save lands. Every successful save stamps the
/// current server time as the post's date, discarding anything older.

use crate::{
    app::AppState,
    error::{AppError, AppResult},
    filters,
    forms::SaveForm,
    models::post::Post,
};
use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use bureau_shared::forms::{field_errors, FieldError};
use chrono::Utc;
use validator::Validate;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "save_form.html")]
struct SaveFormTemplate {
    page_title: String,
    action_url: String,
    title: String,
    text: String,
    errors: Vec<FieldError>,
}

#[derive(Template)]
#[template(path = "view.html")]
struct ViewTemplate {
    post: Post,
}

/// Post list, newest first
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let posts = Post::all_newest_first(&state.db).await?;

    Ok(Html(IndexTemplate { posts }.render()?))
}

/// Empty creation form
pub async fn add_page() -> AppResult<Html<String>> {
    let template = SaveFormTemplate {
        page_title: "New post".to_string(),
        action_url: "/add".to_string(),
        title: String::new(),
        text: String::new(),
        errors: Vec::new(),
    };

    Ok(Html(template.render()?))
}

/// Post creation handler
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<SaveForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let template = SaveFormTemplate {
            page_title: "New post".to_string(),
            action_url: "/add".to_string(),
            title: form.title,
            text: form.text,
            errors: field_errors(&errors),
        };
        return Ok(Html(template.render()?).into_response());
    }

    Post::new(form.title, form.text).save(&state.db).await?;

    Ok(Redirect::to("/").into_response())
}

/// Edit form, prefilled from the stored post
pub async fn edit_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let post = Post::find(&state.db, &id).await?.ok_or(AppError::NotFound)?;

    let template = SaveFormTemplate {
        page_title: "Edit post".to_string(),
        action_url: format!("/edit/{}", post.id),
        title: post.title,
        text: post.text,
        errors: Vec::new(),
    };

    Ok(Html(template.render()?))
}

/// Post edit handler
///
/// The id stays what it was; title, text, and date are overwritten.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SaveForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let template = SaveFormTemplate {
            page_title: "Edit post".to_string(),
            action_url: format!("/edit/{}", id),
            title: form.title,
            text: form.text,
            errors: field_errors(&errors),
        };
        return Ok(Html(template.render()?).into_response());
    }

    let post = Post {
        id,
        title: form.title,
        text: form.text,
        date: Utc::now(),
    };
    post.save(&state.db).await?;

    Ok(Redirect::to("/").into_response())
}

/// Post deletion handler; deleting a missing id is a no-op
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    Post::remove(&state.db, &id).await?;

    Ok(Redirect::to("/"))
}

/// Post detail page
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let post = Post::find(&state.db, &id).await?.ok_or(AppError::NotFound)?;

    Ok(Html(ViewTemplate { post }.render()?))
}
