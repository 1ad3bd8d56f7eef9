//! Product data, form state and the submit sequence live here.

pub mod form;
pub mod product;
pub mod submission;

pub use form::{FormField, ProductForm, SubmissionState};
pub use product::{
    format_score, Alternative, AlternativesRequest, AlternativesResult, CatalogProduct, Category,
    DeliveryMethod, Packaging, ProductInput, ScoreResult,
};
pub use submission::{lookup_catalog_alternatives, submit_product, ScoringService, SubmitOutcome};
