//! Gateway backend and business logic.
//!
//! The gateway owns no data. Every HTTP operation is translated into one command sent to
//! either the data service or the authentication service, and the single reply is mapped
//! back to an HTTP response.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation, and DTO conversion
//! - **Service Layer** (`service/`) - Not-found mapping, password hashing, and the login flow
//! - **Data Layer** (`data/`) - One command per operation, record-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **RPC Layer** (`rpc/`) - Multiplexed, reconnectable channels to the backends
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (service clients, credential verifier)
//! - **Startup** (`startup`) - Tracing, backend connections, and the verifier
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** rejects malformed input, converts DTOs to params, calls service
//! 3. **Service** calls the repository and interprets absence as `NotFound`
//! 4. **Data** sends one command through a `ServiceClient` and converts the reply
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod rpc;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
