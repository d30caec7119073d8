use std::fmt;

/// The two vehicle variants share the same fields; the kind drives the
/// display label and the serialization tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Motorcycle,
}

impl VehicleKind {
    pub fn tag(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle => "Motorcycle",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Car" => Some(VehicleKind::Car),
            "Motorcycle" => Some(VehicleKind::Motorcycle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    kind: VehicleKind,
    model: String,
    price: f64,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, model: impl Into<String>, price: f64) -> Self {
        Self {
            kind,
            model: model.into(),
            price,
        }
    }

    pub fn new_car(model: impl Into<String>, price: f64) -> Self {
        Self::new(VehicleKind::Car, model, price)
    }

    pub fn new_motorcycle(model: impl Into<String>, price: f64) -> Self {
        Self::new(VehicleKind::Motorcycle, model, price)
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Price: ${}",
            self.kind.tag(),
            self.model,
            self.price
        )
    }
}
