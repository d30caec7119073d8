use crate::domain::codec;
use crate::domain::model::Vehicle;
use crate::utils::error::{LotError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};

/// Owning, ordered container of vehicle records.
///
/// Insertion order is preserved and duplicates are allowed. References
/// handed out by the add and lookup operations borrow from the collection,
/// so they cannot outlive a later `clear` or `load_from_file`.
#[derive(Debug, Default)]
pub struct VehicleCollection {
    vehicles: Vec<Vehicle>,
}

impl VehicleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_car(&mut self, model: &str, price: f64) -> Result<&Vehicle> {
        self.push(Vehicle::new_car(model, price))
    }

    pub fn add_motorcycle(&mut self, model: &str, price: f64) -> Result<&Vehicle> {
        self.push(Vehicle::new_motorcycle(model, price))
    }

    fn push(&mut self, vehicle: Vehicle) -> Result<&Vehicle> {
        self.vehicles.try_reserve(1)?;
        let index = self.vehicles.len();
        self.vehicles.push(vehicle);
        Ok(&self.vehicles[index])
    }

    /// Returns the record at `index`, or `None` when the index is negative
    /// or past the end.
    pub fn get_by_index(&self, index: isize) -> Option<&Vehicle> {
        if index < 0 {
            return None;
        }
        self.vehicles.get(index as usize)
    }

    pub fn display_all(&self) {
        for vehicle in &self.vehicles {
            println!("{}", vehicle);
        }
    }

    /// Same listing as `display_all`, written to an arbitrary stream.
    pub fn write_all<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for vehicle in &self.vehicles {
            writeln!(out, "{}", vehicle)?;
        }
        Ok(())
    }

    pub fn total_price(&self) -> f64 {
        self.vehicles.iter().map(Vehicle::price).sum()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }

    /// Writes every record to `path` in insertion order, one encoded block
    /// per record, creating or truncating the file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let file = File::create(path).map_err(|source| LotError::FileAccess {
            path: path.to_string(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        for vehicle in &self.vehicles {
            writeln!(writer, "{}", codec::encode(vehicle))?;
        }
        writer.flush()?;

        tracing::debug!("Saved {} vehicles to {}", self.vehicles.len(), path);
        Ok(())
    }

    /// Replaces the collection with the records decoded from `path`.
    ///
    /// The file is read in full before the current items are discarded, so a
    /// failure to open it leaves the collection unchanged. Decoding stops at
    /// the first unrecognized tag or truncated record; whatever was decoded
    /// up to that point is kept.
    pub fn load_from_file(&mut self, path: &str) -> Result<()> {
        let contents = fs::read_to_string(path).map_err(|source| LotError::FileAccess {
            path: path.to_string(),
            source,
        })?;

        self.clear();
        let mut tokens = contents.split_whitespace();
        while let Some(vehicle) = codec::decode_next(&mut tokens) {
            self.push(vehicle)?;
        }

        tracing::debug!("Loaded {} vehicles from {}", self.vehicles.len(), path);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.vehicles.clear();
    }
}
