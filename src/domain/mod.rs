// Domain layer: core models and ports (interfaces). No external dependencies beyond chrono/serde.

pub mod generations;
pub mod model;
pub mod ports;
