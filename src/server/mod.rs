//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, collision checks and write orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, drafts, validated parameters and messages
//! - **Validation** (`validation/`) - Pure per-resource domain validators
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database connection, migrations and CORS
//! - **Router** (`router`) - Route registration and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and dispatches to a controller
//! 2. **Controller** extracts the body, checks required fields and builds a draft
//! 3. **Service** validates the draft, checks identity, existence and collisions
//! 4. **Data** writes through SeaORM and returns domain models
//! 5. **Controller** converts the result to a DTO; business rejections render as
//!    HTTP 200 bodies, infrastructure failures as 500

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod validation;
