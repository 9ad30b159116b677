use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

/// One manufacturer and the models it sells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeModels {
    pub make: String,
    pub models: Vec<String>,
}

impl MakeModels {
    pub fn new(make: &str, models: &[&str]) -> Self {
        Self {
            make: make.to_string(),
            models: models.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Make -> model associations vehicles are drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<MakeModels>);

impl Default for Catalog {
    fn default() -> Self {
        Self(vec![
            MakeModels::new("Honda", &["Brio", "Jazz", "CR-V", "Civic"]),
            MakeModels::new("Toyota", &["Avanza", "Innova", "Fortuner", "Yaris"]),
            MakeModels::new("Suzuki", &["Ertiga", "XL7", "Ignis"]),
            MakeModels::new("Mitsubishi", &["Pajero Sport", "Xpander", "Triton"]),
        ])
    }
}

impl Catalog {
    pub fn new(entries: Vec<MakeModels>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[MakeModels] {
        &self.0
    }

    /// Picks a make uniformly, then one of its models uniformly.
    ///
    /// Returns `None` when the catalog, or the chosen make's model list, is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(&str, &str)> {
        let entry = self.0.choose(rng)?;
        let model = entry.models.choose(rng)?;
        Some((entry.make.as_str(), model.as_str()))
    }

    /// Whether `model` is listed under `make`.
    pub fn contains(&self, make: &str, model: &str) -> bool {
        self.0
            .iter()
            .any(|entry| entry.make == make && entry.models.iter().any(|m| m == model))
    }

    /// Name of the first make without models, if any.
    pub(crate) fn first_empty_make(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.models.is_empty())
            .map(|entry| entry.make.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
