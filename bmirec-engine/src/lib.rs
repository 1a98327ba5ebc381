pub mod artifacts;
pub mod bmi;
pub mod evaluator;
pub mod predictor;
pub mod vocabulary;

pub use evaluator::{Evaluation, EvaluationError, Evaluator};
