// Composition root for the catalog.
//
// Responsibilities
// - Read config from the environment.
// - Wire the in-memory repository into the use case handlers.
// - Expose the HTTP surface and its error boundary.

pub mod api_error;
pub mod config;
pub mod http;
pub mod seed;
pub mod state;
