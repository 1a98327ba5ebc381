use bmirec_engine::{
    evaluator::{EvaluationError, Evaluator},
    predictor::{MockPredictor, PredictionError},
    vocabulary::{LabelVocabulary, Vocabularies},
};
use bmirec_model::{
    bmi::{BmiCategory, SeverityColor},
    profile::{ActivityLevel, DietType, UserProfile},
    recommendation::FeatureVector,
};
use mockall::predicate::eq;

fn vocabularies() -> Vocabularies {
    Vocabularies {
        activity_input: LabelVocabulary::new(vec![
            "High".to_owned(),
            "Low".to_owned(),
            "Moderate".to_owned(),
        ]),
        diet_input: LabelVocabulary::new(vec![
            "Mixed".to_owned(),
            "Non-Vegetarian".to_owned(),
            "Vegan".to_owned(),
            "Vegetarian".to_owned(),
        ]),
        diet_plan: LabelVocabulary::new(vec![
            "Balanced diet with controlled portions".to_owned(),
            "High-calorie nutrient-rich diet".to_owned(),
            "High-fiber low-calorie diet".to_owned(),
            "Protein-rich balanced diet".to_owned(),
        ]),
        activity_plan: LabelVocabulary::new(vec![
            "Daily brisk walking and stretching".to_owned(),
            "Light yoga and mobility work".to_owned(),
            "Moderate cardio 3-4 times a week".to_owned(),
            "Strength training with regular cardio".to_owned(),
        ]),
    }
}

fn profile() -> UserProfile {
    UserProfile {
        age: 25,
        height_cm: 170,
        weight_kg: 65,
        activity_level: ActivityLevel::Moderate,
        diet_type: DietType::Vegetarian,
        sleep_hours: 7,
    }
}

// 65 kg at 170 cm rounds to 22.49; Moderate and Vegetarian are the last
// entries of their alphabetically fitted vocabularies.
fn expected_features() -> FeatureVector {
    FeatureVector {
        age: 25,
        bmi: 22.49,
        activity_code: 2,
        sleep_hours: 7,
        diet_code: 3,
    }
}

#[test]
fn evaluate_computes_bmi_and_decodes_both_recommendations() {
    let mut diet_model = MockPredictor::new();
    diet_model
        .expect_predict()
        .with(eq(expected_features()))
        .returning(|_| Ok(3));

    let mut activity_model = MockPredictor::new();
    activity_model
        .expect_predict()
        .with(eq(expected_features()))
        .returning(|_| Ok(2));

    let evaluator = Evaluator::new(
        Box::new(diet_model),
        Box::new(activity_model),
        vocabularies(),
    );
    let evaluation = evaluator.evaluate(&profile()).unwrap();

    assert_eq!(evaluation.bmi.value, 22.49);
    assert_eq!(evaluation.bmi.category, BmiCategory::NormalWeight);
    assert_eq!(evaluation.bmi.color, SeverityColor::Green);
    assert_eq!(
        evaluation.recommendation.diet_plan,
        "Protein-rich balanced diet"
    );
    assert_eq!(
        evaluation.recommendation.activity_plan,
        "Moderate cardio 3-4 times a week"
    );
}

#[test]
fn evaluate_is_deterministic_for_identical_profiles() {
    let mut diet_model = MockPredictor::new();
    diet_model.expect_predict().times(2).returning(|_| Ok(0));

    let mut activity_model = MockPredictor::new();
    activity_model.expect_predict().times(2).returning(|_| Ok(0));

    let evaluator = Evaluator::new(
        Box::new(diet_model),
        Box::new(activity_model),
        vocabularies(),
    );

    let first = evaluator.evaluate(&profile()).unwrap();
    let second = evaluator.evaluate(&profile()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_profile_fails_before_any_prediction() {
    let mut diet_model = MockPredictor::new();
    diet_model.expect_predict().never();

    let mut activity_model = MockPredictor::new();
    activity_model.expect_predict().never();

    let evaluator = Evaluator::new(
        Box::new(diet_model),
        Box::new(activity_model),
        vocabularies(),
    );

    let result = evaluator.evaluate(&UserProfile {
        height_cm: 0,
        ..profile()
    });
    assert!(matches!(result, Err(EvaluationError::InvalidProfile(_))));
}

#[test]
fn predictor_failure_fails_the_whole_evaluation() {
    let mut diet_model = MockPredictor::new();
    diet_model
        .expect_predict()
        .returning(|_| Err(PredictionError::EmptyModel));

    let activity_model = MockPredictor::new();

    let evaluator = Evaluator::new(
        Box::new(diet_model),
        Box::new(activity_model),
        vocabularies(),
    );

    let result = evaluator.evaluate(&profile());
    assert!(matches!(result, Err(EvaluationError::Prediction(_))));
}

#[test]
fn label_outside_output_vocabulary_fails_evaluation() {
    let mut diet_model = MockPredictor::new();
    diet_model.expect_predict().returning(|_| Ok(99));

    let activity_model = MockPredictor::new();

    let evaluator = Evaluator::new(
        Box::new(diet_model),
        Box::new(activity_model),
        vocabularies(),
    );

    let result = evaluator.evaluate(&profile());
    assert!(matches!(result, Err(EvaluationError::UnknownCategory(_))));
}
