pub mod codec;
pub mod model;

pub use model::{Vehicle, VehicleKind};
