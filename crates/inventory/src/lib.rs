//! `assettrack-inventory` — inventory domain records.
//!
//! Plain entity records (products, status history, brands, locations) with
//! constructor validation. Persistence and analytics live elsewhere.

pub mod company;
pub mod history;
pub mod location;
pub mod product;

pub use company::Company;
pub use history::{History, StatusEntry};
pub use location::Location;
pub use product::Product;
