// Domain layer: core models and ports (interfaces). No dependencies on adapters or binaries.

pub mod model;
pub mod ports;
