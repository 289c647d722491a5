//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (HTTP transport, durable state storage). Each trait exposes strongly
//! typed errors so adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod api_transport;
mod state_storage;

#[cfg(test)]
pub use api_transport::{MockApiTransport, MockTokenSource};
pub use api_transport::{
    Anonymous, ApiTransport, HttpMethod, HttpRequest, HttpResponse, TokenSource,
};
#[cfg(test)]
pub use state_storage::MockStateStorage;
pub use state_storage::{StateStorage, StateStorageError};
