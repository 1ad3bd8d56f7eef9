pub mod carbon_score;
pub mod catalog_lookup;

pub use carbon_score::CarbonScorePage;
pub use catalog_lookup::CatalogLookupPage;
