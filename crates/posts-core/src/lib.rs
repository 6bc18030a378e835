//! # Posts Core
//!
//! The domain layer of the posts API.
//! This crate holds the `Post` entity, request validation and the storage
//! port; it has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{DomainError, RepoError};
