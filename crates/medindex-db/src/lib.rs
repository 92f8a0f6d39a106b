//! Medindex DB - PostgreSQL repository layer for the medicine catalog.
//!
//! This crate provides the repository pattern over the three read-only
//! catalog collections (brands, generics, companies).
//!
//! # Overview
//!
//! The main component is [`CatalogRepository`], which implements
//! `medindex_core::CatalogStore` with server-side filtering, relevance
//! ordering, and pagination.

mod repository;

pub use repository::CatalogRepository;
