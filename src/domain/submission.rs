//! The submit sequence shared by the product form and the catalog lookup.
//!
//! Network access goes through [`ScoringService`] and state changes through
//! [`SubmissionStore`], so the same sequence drives a Dioxus signal in the app
//! and a plain `RefCell` in tests.

use std::{cell::RefCell, fmt::Display, rc::Rc};

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use super::form::{parse_product_id, ProductForm, SubmissionState};
use super::product::{AlternativesRequest, AlternativesResult, ProductInput, ScoreResult};

#[allow(async_fn_in_trait)]
pub trait ScoringService {
    type Error: Display;

    async fn predict_carbon_score(&self, input: &ProductInput) -> Result<ScoreResult, Self::Error>;

    async fn get_greener_alternatives(
        &self,
        request: &AlternativesRequest,
    ) -> Result<AlternativesResult, Self::Error>;
}

pub trait SubmissionStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut SubmissionState) -> R) -> R;
}

impl SubmissionStore for Signal<SubmissionState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SubmissionState) -> R) -> R {
        self.with_mut(f)
    }
}

impl SubmissionStore for Rc<RefCell<SubmissionState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SubmissionState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed,
    Failed,
    Invalid,
    Busy,
}

/// Scores the product, then asks for greener alternatives.
///
/// The alternatives call only starts after the score call succeeded. The
/// loading flag stays set for the whole sequence and is cleared on every path.
pub async fn submit_product<S, St>(service: &S, store: &mut St, form: &ProductForm) -> SubmitOutcome
where
    S: ScoringService,
    St: SubmissionStore,
{
    let input = match form.to_input() {
        Ok(input) => input,
        Err(err) => {
            debug!("Rejected product form: {err}");
            store.update(|state| {
                if !state.loading {
                    state.error = Some(err.to_string());
                }
            });
            return SubmitOutcome::Invalid;
        }
    };

    if !store.update(SubmissionState::begin) {
        debug!("Submission already in flight; ignoring submit");
        return SubmitOutcome::Busy;
    }

    let outcome = match score_and_compare(service, store, input).await {
        Ok(()) => SubmitOutcome::Completed,
        Err(message) => {
            warn!("Carbon score submission failed: {message}");
            store.update(|state| state.fail(message));
            SubmitOutcome::Failed
        }
    };

    store.update(SubmissionState::finish);
    outcome
}

async fn score_and_compare<S, St>(service: &S, store: &mut St, input: ProductInput) -> Result<(), String>
where
    S: ScoringService,
    St: SubmissionStore,
{
    let score = service
        .predict_carbon_score(&input)
        .await
        .map_err(|err| err.to_string())?;
    info!("Predicted carbon score {:.2}", score.carbon_score);
    store.update(|state| state.score = Some(score));

    let alternatives = service
        .get_greener_alternatives(&AlternativesRequest::for_product(input))
        .await
        .map_err(|err| err.to_string())?;
    info!("Received {} greener alternative(s)", alternatives.alternatives.len());
    store.update(|state| state.alternatives = Some(alternatives));
    Ok(())
}

/// Looks up greener alternatives for a product already in the service catalog.
pub async fn lookup_catalog_alternatives<S, St>(
    service: &S,
    store: &mut St,
    raw_product_id: &str,
) -> SubmitOutcome
where
    S: ScoringService,
    St: SubmissionStore,
{
    let product_id = match parse_product_id(raw_product_id) {
        Ok(id) => id,
        Err(err) => {
            store.update(|state| {
                if !state.loading {
                    state.error = Some(err.to_string());
                }
            });
            return SubmitOutcome::Invalid;
        }
    };

    if !store.update(SubmissionState::begin) {
        return SubmitOutcome::Busy;
    }

    let outcome = match service
        .get_greener_alternatives(&AlternativesRequest::for_catalog_id(product_id))
        .await
    {
        Ok(result) => {
            info!(
                "Catalog product {product_id} has {} greener alternative(s)",
                result.alternatives.len()
            );
            store.update(|state| {
                state.score = result
                    .original_product_carbon_score
                    .map(|carbon_score| ScoreResult { carbon_score });
                state.alternatives = Some(result);
            });
            SubmitOutcome::Completed
        }
        Err(err) => {
            warn!("Catalog lookup for product {product_id} failed: {err}");
            store.update(|state| state.fail(err.to_string()));
            SubmitOutcome::Failed
        }
    };

    store.update(SubmissionState::finish);
    outcome
}
