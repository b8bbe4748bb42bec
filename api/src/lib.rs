//! # API crate — REST client layer for Folio
//!
//! Everything the frontend knows about the backend lives here: the DTO
//! models mirrored from the REST API, the HTTP client that injects the
//! bearer token and enforces the global 401 policy, and one service module
//! per resource.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Shared [`ApiClient`]: base URL, bearer injection, JSON verbs, 401 redirect |
//! | [`error`] | [`ApiError`] taxonomy (network, status, unauthorized, decode) |
//! | [`models`] | Plain serde records mirrored from the backend wire format |
//! | [`token`] | Bearer token storage (localStorage on wasm, process cell elsewhere) |
//! | [`services`] | Typed CRUD calls, one submodule per resource |
//!
//! The client never derives a source of truth: every list is refetched after
//! a mutation, and nothing beyond the bearer token persists in the browser.

pub mod client;
pub mod error;
pub mod models;
pub mod services;
pub mod token;

pub use client::{client, ApiClient};
pub use error::ApiError;
pub use models::*;
