// Client module - SpaceTraders API client
pub mod api;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use api::{ClientConfig, SpaceTradersClient};
pub use transport::{ApiRequest, HttpMethod, RawResponse, ReqwestTransport, Transport};
