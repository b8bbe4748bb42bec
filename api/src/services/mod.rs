//! Typed calls to the REST API, one module per resource.
//!
//! Each function is a thin wrapper over [`crate::client`]; callers own all
//! state and refetch after mutations.

pub mod auth;
pub mod contact;
pub mod portfolio;
pub mod posts;
pub mod profile;
pub mod projects;
pub mod search;
pub mod skills;
pub mod tags;
pub mod technologies;
pub mod users;
