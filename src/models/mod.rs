//! Data models for FreelanceHQ entities.
//!
//! This module contains the data structures exchanged with the
//! FreelanceHQ REST API:
//!
//! - `User`, `Tenant`: account identity and workspace
//! - `Client`: a freelancer's customer
//! - `Project`, `Task`: engagements and their work items
//! - `Invoice`: billing documents

pub mod client;
pub mod invoice;
pub mod project;
pub mod user;

pub use client::Client;
pub use invoice::Invoice;
pub use project::{Project, Task};
pub use user::{Tenant, User};
