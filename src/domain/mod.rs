// Domain layer: request model and ports (interfaces). No transport dependencies.

pub mod model;
pub mod ports;
