//! # Bureau Blog
//!
//! A small blog: posts CRUD against a schema-less document store with
//! server-rendered pages, Markdown rendering, and humanized timestamps.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTML error pages
//! - `filters`: askama template filters (markdown, humanize)
//! - `forms`: the post form and its validation rules
//! - `humanize`: relative-time formatting
//! - `models`: the `Post` document
//! - `routes`: route handlers
//! - `store`: the document store

pub mod app;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod humanize;
pub mod models;
pub mod routes;
pub mod store;

/// Embedded schema scripts, applied at startup
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
