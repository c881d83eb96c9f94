// Domain layer: money, transfer model and the ports the core and screen plug into.

pub mod model;
pub mod money;
pub mod ports;
