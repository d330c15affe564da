// src/models/place.rs
// DOCUMENTATION: Output row model
// PURPOSE: One discovered place, as written to the assets table

/// Column names of the output table, in order
pub const CSV_HEADER: [&str; 4] = ["Name", "Category", "Address", "Description"];

/// Placeholder for fields the places API did not return
pub const NOT_AVAILABLE: &str = "N/A";

/// A single discovered place
/// DOCUMENTATION: Equality and hashing cover all four fields, so two
/// records are duplicates only when every column matches
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceRecord {
    /// Place name (or "N/A")
    pub name: String,
    /// Search keyword that produced this place
    pub category: String,
    /// Short address from the nearby search `vicinity` field (or "N/A")
    pub address: String,
    /// Comma-joined place types (or "N/A")
    pub description: String,
}

impl PlaceRecord {
    /// Build a record from optional API fields, filling in placeholders
    pub fn new(
        name: Option<&str>,
        category: &str,
        address: Option<&str>,
        types: &[String],
    ) -> Self {
        let description = if types.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            types.join(", ")
        };

        Self {
            name: name.unwrap_or(NOT_AVAILABLE).to_string(),
            category: category.to_string(),
            address: address.unwrap_or(NOT_AVAILABLE).to_string(),
            description,
        }
    }

    /// Fields in column order
    pub fn as_row(&self) -> [&str; 4] {
        [
            &self.name,
            &self.category,
            &self.address,
            &self.description,
        ]
    }
}
