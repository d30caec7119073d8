use crate::core::VehicleCollection;
use crate::domain::model::VehicleKind;
use crate::utils::error::{LotError, Result};
use std::io::{BufRead, Write};

/// Interactive 8-option menu over a vehicle collection.
///
/// Generic over its input and output streams; the binary wires it to stdin
/// and stdout, tests drive it with in-memory buffers. Collection errors are
/// reported on the output stream and the loop continues.
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
    collection: VehicleCollection,
    data_file: String,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, data_file: impl Into<String>) -> Self {
        Self {
            input,
            output,
            collection: VehicleCollection::new(),
            data_file: data_file.into(),
        }
    }

    pub fn collection(&self) -> &VehicleCollection {
        &self.collection
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            // End of input is treated like choosing Exit.
            let Some(choice) = self.read_token()? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_vehicle(VehicleKind::Car)?,
                "2" => self.add_vehicle(VehicleKind::Motorcycle)?,
                "3" => self.collection.write_all(&mut self.output)?,
                "4" => writeln!(
                    self.output,
                    "Total Price: ${}",
                    self.collection.total_price()
                )?,
                "5" => self.display_by_index()?,
                "6" => self.save()?,
                "7" => self.load()?,
                "8" => break,
                _ => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Add Car")?;
        writeln!(self.output, "2. Add Motorcycle")?;
        writeln!(self.output, "3. Display All Vehicles")?;
        writeln!(self.output, "4. Display Total Price")?;
        writeln!(self.output, "5. Display Vehicle by Index")?;
        writeln!(self.output, "6. Save to File")?;
        writeln!(self.output, "7. Load from File")?;
        writeln!(self.output, "8. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_vehicle(&mut self, kind: VehicleKind) -> Result<()> {
        write!(self.output, "Enter {} Model: ", kind.tag())?;
        self.output.flush()?;
        let Some(model) = self.read_token()? else {
            return Ok(());
        };

        write!(self.output, "Enter {} Price: ", kind.tag())?;
        self.output.flush()?;
        let Some(price_text) = self.read_token()? else {
            return Ok(());
        };
        let Ok(price) = price_text.parse::<f64>() else {
            writeln!(self.output, "Invalid price! Vehicle not added.")?;
            return Ok(());
        };

        let result = match kind {
            VehicleKind::Car => self.collection.add_car(&model, price),
            VehicleKind::Motorcycle => self.collection.add_motorcycle(&model, price),
        }
        .map(|_| ());
        if let Err(e) = result {
            self.report_error(&e)?;
        }
        Ok(())
    }

    fn display_by_index(&mut self) -> Result<()> {
        write!(self.output, "Enter Vehicle Index: ")?;
        self.output.flush()?;
        let Some(token) = self.read_token()? else {
            return Ok(());
        };

        match token.parse::<isize>().ok().and_then(|index| {
            self.collection.get_by_index(index)
        }) {
            Some(vehicle) => writeln!(self.output, "{}", vehicle)?,
            None => writeln!(self.output, "Invalid index!")?,
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let Some(path) = self.prompt_filename()? else {
            return Ok(());
        };
        match self.collection.save_to_file(&path) {
            Ok(()) => writeln!(
                self.output,
                "Saved {} vehicles to {}",
                self.collection.len(),
                path
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let Some(path) = self.prompt_filename()? else {
            return Ok(());
        };
        match self.collection.load_from_file(&path) {
            Ok(()) => writeln!(
                self.output,
                "Loaded {} vehicles from {}",
                self.collection.len(),
                path
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    fn prompt_filename(&mut self) -> Result<Option<String>> {
        write!(self.output, "Enter filename [{}]: ", self.data_file)?;
        self.output.flush()?;
        let Some(token) = self.read_token()? else {
            return Ok(None);
        };
        if token.is_empty() {
            Ok(Some(self.data_file.clone()))
        } else {
            Ok(Some(token))
        }
    }

    fn report_error(&mut self, error: &LotError) -> Result<()> {
        tracing::error!("{}", error);
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }

    /// Reads one line, returning its first whitespace-delimited token.
    /// `None` means end of input; a blank line yields an empty token.
    fn read_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(
            line.split_whitespace().next().unwrap_or("").to_string(),
        ))
    }
}
