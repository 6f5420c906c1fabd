// Domain layer: cart model and ports (interfaces). No dependencies beyond serde/async-trait.

pub mod model;
pub mod ports;
