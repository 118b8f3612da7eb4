// Domain layer: ticket models, the ticket hierarchy and ports. Output devices live in adapters.

pub mod model;
pub mod ports;
pub mod tickets;
