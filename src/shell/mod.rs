// Composition root: configuration, wiring of in-memory adapters into the
// use case handlers, and the HTTP / GraphQL surfaces.

pub mod actor;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
