//! Weekly report server library.
//!
//! This library provides the core functionality for the report server,
//! including database operations, the HTTP API, and configuration.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
