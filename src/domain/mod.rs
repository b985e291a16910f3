// Domain layer: cart models, display messages and the ports the store talks to.

pub mod messages;
pub mod model;
pub mod ports;
