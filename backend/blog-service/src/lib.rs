/// Blog Service Library
///
/// REST backend for the Quill blogging platform: account registration and
/// login, password changes, per-user profiles, and post CRUD.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for each flow
/// - `models`: Database row types
/// - `db`: Database access layer and repositories
/// - `validators`: Pure field-level input validators
/// - `security`: Password hashing and JWT issuance/validation
/// - `middleware`: Bearer-token authentication middleware
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod security;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
