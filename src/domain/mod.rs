// Domain layer: the SDL document tree and the compiled manifest types.

pub mod manifest;
pub mod model;
