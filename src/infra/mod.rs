pub mod carbon_api;
