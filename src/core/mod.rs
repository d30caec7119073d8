pub mod collection;

pub use crate::domain::model::{Vehicle, VehicleKind};
pub use crate::utils::error::Result;
pub use collection::VehicleCollection;
