// Domain layer: models and ports. Nothing here touches the file system or the console.

pub mod model;
pub mod ports;
