//! # Book Service Backend
//!
//! Minimal CRUD service for a single `Book` entity backed by a relational store.
//!
//! This crate exposes the book catalog as a REST API via Axum. Persistence goes
//! through a repository trait with two implementations: a Diesel/PostgreSQL
//! backend for production and an in-memory backend for tests and local
//! development.
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`api`]: Domain types shared across layers (`Book`, `BookId`)
//! - [`db`]: Repository pattern, backends, and the service layer
//! - [`http`]: Axum-based HTTP server, handlers, and OpenAPI docs

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
