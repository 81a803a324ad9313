// Domain layer: generator inputs, the register-description tree and the ports around them.

pub mod model;
pub mod ports;
