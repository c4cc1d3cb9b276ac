// Domain layer: upload models and the ports the verifier talks through.

pub mod model;
pub mod ports;
