use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::de::DeserializeOwned;

use bmirec_model::recommendation::FEATURE_COUNT;

use crate::{
    predictor::DecisionTreePredictor,
    vocabulary::{LabelVocabulary, Vocabularies},
};

pub const DIET_MODEL_FILE: &str = "diet_model.json";
pub const ACTIVITY_MODEL_FILE: &str = "activity_model.json";
pub const ACTIVITY_INPUT_FILE: &str = "activity_input.json";
pub const DIET_INPUT_FILE: &str = "diet_input.json";
pub const DIET_PLAN_FILE: &str = "diet_plan.json";
pub const ACTIVITY_PLAN_FILE: &str = "activity_plan.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("artifact {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("model {path} was trained against {actual} features, expected {expected}")]
    FeatureCountMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

/// The six pre-trained artifacts the pipeline needs: two classifiers and four
/// label vocabularies. Loaded once at process start and read-only afterwards;
/// a failure here is fatal to the whole process.
pub struct Artifacts {
    pub diet_model: DecisionTreePredictor,
    pub activity_model: DecisionTreePredictor,
    pub vocabularies: Vocabularies,
}

impl Artifacts {
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        let artifacts = Self {
            diet_model: load_model(&dir.join(DIET_MODEL_FILE))?,
            activity_model: load_model(&dir.join(ACTIVITY_MODEL_FILE))?,
            vocabularies: Vocabularies {
                activity_input: load_json(&dir.join(ACTIVITY_INPUT_FILE))?,
                diet_input: load_json(&dir.join(DIET_INPUT_FILE))?,
                diet_plan: load_json(&dir.join(DIET_PLAN_FILE))?,
                activity_plan: load_json(&dir.join(ACTIVITY_PLAN_FILE))?,
            },
        };

        info!("Loaded model artifacts from {}", dir.display());
        debug!(
            "Vocabulary sizes: activity={}, diet={}, diet_plan={}, activity_plan={}",
            artifacts.vocabularies.activity_input.classes().len(),
            artifacts.vocabularies.diet_input.classes().len(),
            artifacts.vocabularies.diet_plan.classes().len(),
            artifacts.vocabularies.activity_plan.classes().len(),
        );
        Ok(artifacts)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Malformed {
        path: path.to_owned(),
        source,
    })
}

fn load_model(path: &Path) -> Result<DecisionTreePredictor, ArtifactError> {
    let model: DecisionTreePredictor = load_json(path)?;
    let actual = model.feature_names().len();
    if actual != FEATURE_COUNT {
        return Err(ArtifactError::FeatureCountMismatch {
            path: path.to_owned(),
            expected: FEATURE_COUNT,
            actual,
        });
    }
    Ok(model)
}
