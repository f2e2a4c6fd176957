use std::sync::Arc;

use log::{debug, warn};

use crate::{
    error::{InferenceErr, Result},
    feature::{FeatureVector, RawInput, SmokerChoice},
    store::ModelStore,
};

/// Turns raw user input into a premium estimate.
///
/// The adapter holds no state of its own besides the shared [`ModelStore`], so one instance can
/// serve any number of overlapping requests.
#[derive(Clone)]
pub struct InferenceAdapter {
    store: Arc<ModelStore>,
}

impl InferenceAdapter {
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Estimates the premium for the given scalar inputs.
    ///
    /// The numeric bounds are the caller's business: out-of-range values are encoded unchanged
    /// and the model decides what they yield.
    ///
    /// # Arguments
    /// * `age` - Age in years, expected in `[0, 100]`.
    /// * `bmi` - Body-mass index, expected in `[0.0, 100.0]`.
    /// * `smoker` - `"Yes"` for a smoker. Any other literal reads as `"No"`.
    /// * `children` - Number of children, expected in `[0, 10]`.
    ///
    /// # Returns
    /// The premium, or why there isn't one.
    pub fn predict_premium(&self, age: i32, bmi: f64, smoker: &str, children: i32) -> Result<f64> {
        self.predict(&RawInput {
            age,
            bmi,
            smoker: SmokerChoice::from(smoker),
            children,
        })
    }

    /// Estimates the premium for an already typed input.
    pub fn predict(&self, input: &RawInput) -> Result<f64> {
        if !input.within_bounds() {
            warn!("input outside documented bounds, passing through: {input:?}");
        }

        let features = FeatureVector::encode(input);
        let model = self.store.get_model()?;
        debug!("predicting with {} model on {:?}", model.kind(), features.as_array());

        let batch = features.to_batch();
        let y = model.predict(batch.view()).map_err(|e| {
            warn!("prediction failed: {e}");
            InferenceErr::prediction_failed(e.to_string())
        })?;

        let premium = *y
            .first()
            .ok_or_else(|| InferenceErr::prediction_failed("the model returned no predictions"))?;

        if !premium.is_finite() {
            warn!("model produced a non-finite premium: {premium}");
            return Err(InferenceErr::prediction_failed(format!(
                "the model returned a non-finite premium ({premium})"
            )));
        }

        Ok(premium)
    }
}
