use rustc_hash::FxHashMap;
use serde::Deserialize;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    #[error("label \"{0}\" is not part of the trained vocabulary")]
    UnknownLabel(String),
    #[error("code {0} is not part of the trained vocabulary")]
    UnknownCode(u32),
}

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    classes: Vec<String>,
}

/// Fixed bidirectional mapping between label strings and the integer codes a
/// classifier was trained on. Codes are positions in the fitted class list,
/// so the artifact's class order must never be rearranged after training.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "VocabularyFile")]
pub struct LabelVocabulary {
    classes: Vec<String>,
    codes: FxHashMap<String, u32>,
}

impl LabelVocabulary {
    pub fn new(classes: Vec<String>) -> Self {
        let codes = classes
            .iter()
            .enumerate()
            .map(|(code, label)| (label.clone(), code as u32))
            .collect();
        Self { classes, codes }
    }

    pub fn encode(&self, label: &str) -> Result<u32, VocabularyError> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| VocabularyError::UnknownLabel(label.to_owned()))
    }

    pub fn decode(&self, code: u32) -> Result<&str, VocabularyError> {
        self.classes
            .get(code as usize)
            .map(String::as_str)
            .ok_or(VocabularyError::UnknownCode(code))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl From<VocabularyFile> for LabelVocabulary {
    fn from(file: VocabularyFile) -> Self {
        Self::new(file.classes)
    }
}

/// The four fitted vocabularies the evaluation pipeline depends on: two for
/// encoding categorical inputs, two for decoding classifier outputs.
#[derive(Clone, Debug)]
pub struct Vocabularies {
    pub activity_input: LabelVocabulary,
    pub diet_input: LabelVocabulary,
    pub diet_plan: LabelVocabulary,
    pub activity_plan: LabelVocabulary,
}
