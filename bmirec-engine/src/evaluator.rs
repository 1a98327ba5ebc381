use log::debug;
use serde::{Deserialize, Serialize};

use bmirec_model::{
    bmi::BmiResult,
    profile::{InvalidProfile, UserProfile},
    recommendation::{FeatureVector, Recommendation},
};

use crate::{
    artifacts::Artifacts,
    bmi,
    predictor::{PredictionError, Predictor},
    vocabulary::{Vocabularies, VocabularyError},
};

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] InvalidProfile),
    #[error("cannot produce a recommendation for this input: {0}")]
    UnknownCategory(#[from] VocabularyError),
    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub bmi: BmiResult,
    pub recommendation: Recommendation,
}

/// Runs one full evaluation per call: validate, compute and categorize BMI,
/// encode the categorical inputs, invoke both classifiers and decode their
/// labels. Holds the predictors and vocabularies injected at construction and
/// never mutates them; there is no state shared between evaluations.
pub struct Evaluator {
    diet_model: Box<dyn Predictor>,
    activity_model: Box<dyn Predictor>,
    vocabularies: Vocabularies,
}

impl Evaluator {
    pub fn new(
        diet_model: Box<dyn Predictor>,
        activity_model: Box<dyn Predictor>,
        vocabularies: Vocabularies,
    ) -> Self {
        Self {
            diet_model,
            activity_model,
            vocabularies,
        }
    }

    pub fn from_artifacts(artifacts: Artifacts) -> Self {
        Self::new(
            Box::new(artifacts.diet_model),
            Box::new(artifacts.activity_model),
            artifacts.vocabularies,
        )
    }

    /// Either every step succeeds or the whole evaluation fails; there are no
    /// partial results and no retries.
    pub fn evaluate(&self, profile: &UserProfile) -> Result<Evaluation, EvaluationError> {
        profile.validate()?;

        let value = bmi::compute_bmi(profile.height_cm as f64, profile.weight_kg as f64);
        let (category, color) = bmi::categorize(value);
        debug!("Computed BMI {} ({})", value, category);

        let activity_code = self
            .vocabularies
            .activity_input
            .encode(&profile.activity_level.to_string())?;
        let diet_code = self
            .vocabularies
            .diet_input
            .encode(&profile.diet_type.to_string())?;

        let features = FeatureVector {
            age: profile.age,
            bmi: value,
            activity_code,
            sleep_hours: profile.sleep_hours,
            diet_code,
        };

        let diet_label = self.diet_model.predict(&features)?;
        let diet_plan = self.vocabularies.diet_plan.decode(diet_label)?.to_owned();

        let activity_label = self.activity_model.predict(&features)?;
        let activity_plan = self
            .vocabularies
            .activity_plan
            .decode(activity_label)?
            .to_owned();

        debug!(
            "Recommending \"{}\" / \"{}\" for BMI {}",
            diet_plan, activity_plan, value
        );
        Ok(Evaluation {
            bmi: BmiResult {
                value,
                category,
                color,
            },
            recommendation: Recommendation {
                diet_plan,
                activity_plan,
            },
        })
    }
}
