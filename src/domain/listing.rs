use serde::{Deserialize, Serialize};

/// Placeholder for a field whose node was not present in the listing block.
pub const MISSING_FIELD: &str = "N/A";

/// Column headers, in the positional order of [`ListingRecord`].
pub const LISTING_HEADERS: [&str; 7] = [
    "Property Type",
    "Rooms",
    "Size",
    "Price",
    "Address",
    "Energy Mark",
    "Listing Date",
];

/// One listing block as scraped. All values are opaque strings; nothing is
/// parsed into numbers or dates.
///
/// On the wire (JSON, CSV) a record is a plain 7-element array so the field
/// order is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[String; 7]", from = "[String; 7]")]
pub struct ListingRecord {
    pub property_type: String,
    pub rooms: String,
    pub size: String,
    pub price: String,
    pub address: String,
    pub energy_mark: String,
    pub listing_date: String,
}

impl ListingRecord {
    /// Fields in column order, borrowed.
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.property_type,
            &self.rooms,
            &self.size,
            &self.price,
            &self.address,
            &self.energy_mark,
            &self.listing_date,
        ]
    }
}

impl From<[String; 7]> for ListingRecord {
    fn from(fields: [String; 7]) -> Self {
        let [property_type, rooms, size, price, address, energy_mark, listing_date] = fields;
        Self {
            property_type,
            rooms,
            size,
            price,
            address,
            energy_mark,
            listing_date,
        }
    }
}

impl From<ListingRecord> for [String; 7] {
    fn from(r: ListingRecord) -> Self {
        [
            r.property_type,
            r.rooms,
            r.size,
            r.price,
            r.address,
            r.energy_mark,
            r.listing_date,
        ]
    }
}

impl TryFrom<Vec<String>> for ListingRecord {
    type Error = usize;

    /// Fails with the actual column count when it isn't exactly seven.
    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        let len = fields.len();
        let fields: [String; 7] = fields.try_into().map_err(|_| len)?;
        Ok(fields.into())
    }
}
