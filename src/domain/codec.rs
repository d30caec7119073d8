//! Text codec for the persisted inventory format.
//!
//! One record is a 3-line tagged block:
//!
//! ```text
//! <Type>
//! <model>
//! <price>
//! ```
//!
//! Fields are whitespace-delimited tokens, so model names containing
//! whitespace are not representable. That limitation is part of the format
//! and is kept for compatibility with existing data files.

use crate::domain::model::{Vehicle, VehicleKind};

pub fn encode(vehicle: &Vehicle) -> String {
    format!(
        "{}\n{}\n{}",
        vehicle.kind().tag(),
        vehicle.model(),
        vehicle.price()
    )
}

/// Decodes the next record from a whitespace token stream.
///
/// Returns `None` when the stream is exhausted or the next tag is not a
/// known vehicle type; the caller treats that as end-of-input and stops
/// loading. A missing or unparsable price token also ends the stream, which
/// silently truncates a malformed file rather than failing the load.
pub fn decode_next<'a, I>(tokens: &mut I) -> Option<Vehicle>
where
    I: Iterator<Item = &'a str>,
{
    let kind = VehicleKind::from_tag(tokens.next()?)?;
    let model = tokens.next()?;
    let price: f64 = tokens.next()?.parse().ok()?;
    Some(Vehicle::new(kind, model, price))
}
