pub mod folder;
pub mod listing;

pub use folder::OutputFolder;
pub use listing::{ListingRecord, LISTING_HEADERS, MISSING_FIELD};
