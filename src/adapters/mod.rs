// Adapters layer: concrete transports around the request handler (http server, lambda, http client).

pub mod client;
pub mod http;
pub mod lambda;
