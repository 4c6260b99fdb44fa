// Domain layer: SWS request/response models and the client port.

pub mod model;
pub mod ports;
