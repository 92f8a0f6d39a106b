//! Medindex Server - REST API for the medicine catalog.
//!
//! This crate provides the HTTP frontend over the catalog query pipeline:
//!
//! - **Brand search**: by name, generic id, or company id, ranked and
//!   paginated
//! - **Symptom search**: indication matching joined back to brands
//! - **Directories**: full generics and companies listings
//! - **Access policy**: origin exemptions, API key, keyed rate limiting
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod policy;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use policy::{AccessPolicy, RateGate};
pub use router::create_router;
pub use state::AppState;
