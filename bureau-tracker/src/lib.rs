//! # Bureau Tracker
//!
//! A small project-tracking web application: clients and projects CRUD
//! over SQLite with server-rendered pages and username/password
//! authentication behind a signed session cookie.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTML error pages
//! - `filters`: askama template filters
//! - `forms`: form objects and their validation rules
//! - `models`: database models (clients, projects, users)
//! - `routes`: route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod models;
pub mod routes;

/// Embedded schema scripts, applied at startup
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
