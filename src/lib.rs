pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::Menu;
pub use config::{settings::Settings, CliConfig};
pub use core::VehicleCollection;
pub use domain::{Vehicle, VehicleKind};
pub use utils::error::{LotError, Result};
