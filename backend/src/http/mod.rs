//! HTTP server module for the book service.
//!
//! This module provides an axum-based HTTP server that exposes the book
//! catalog as a REST API. It reuses the service layer and repository pattern
//! from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Request parsing                                       │
//! │  - JSON serialization/deserialization                    │
//! │  - CORS, compression, error handling, Swagger UI         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (db::services)                            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db::repositories)                     │
//! │  - LocalRepository / PostgresRepository                  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
