//! Bookmark service: in-memory article store, HTML routes, JSON API, and OpenAPI documentation.

pub mod config;
pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;
