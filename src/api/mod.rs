//! REST API client module for the FreelanceHQ backend.
//!
//! This module provides the `ApiClient` for authenticating and fetching
//! clients, projects, and invoices. Requests carry the session's bearer
//! token; the client itself never retries, caches, or reshapes responses.

pub mod client;
pub mod error;
pub mod resource;

pub use client::{ApiClient, LoginResponse};
pub use error::ApiError;
pub use resource::Resource;
