// Domain layer: migration models and the registry port. No filesystem access here.

pub mod model;
pub mod ports;
