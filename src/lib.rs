#![doc = include_str!("../README.md")]

/// Handles all app configuration.
pub mod config;

/// Defines the handlers for all API routes.
pub mod routes;

/// Handles the server startup, such as route configuration and middleware.
pub mod startup;

/// Handles logs and tracing.
pub mod telemetry;
