// ABOUTME: Tests for the declarative condition evaluation engine
// ABOUTME: Factor-key lookup, dotted paths, comparison semantics, and rule-set AND
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_confidence::conditions::{
    evaluate_all, evaluate_rule, ConditionOperator, ConditionRule, EvaluationContext,
};
use pierre_confidence::models::{
    FactorKind, FactorScore, FactorScores, ScoreStatus, UserProfile, WorkoutSelections,
};
use serde_json::Value;

fn factor(score: f64) -> FactorScore {
    FactorScore {
        score,
        status: ScoreStatus::Good,
        reasoning: String::new(),
        impact: String::new(),
        details: Vec::new(),
        suggestions: Vec::new(),
    }
}

fn scores_with_goal(goal: f64) -> FactorScores {
    FactorScores {
        goal_alignment: factor(goal),
        intensity_match: factor(0.75),
        duration_fit: factor(0.75),
        recovery_respect: factor(0.75),
        equipment_optimization: factor(0.75),
    }
}

#[test]
fn test_factor_rule_lt_semantics() {
    let profile = UserProfile::default();
    let selections = WorkoutSelections::default();
    let rule = ConditionRule::factor(FactorKind::GoalAlignment, ConditionOperator::Lt, 0.5);

    let low = scores_with_goal(0.3);
    let ctx = EvaluationContext::new(&profile, &selections, &low, 0.6);
    assert!(evaluate_rule(&rule, &ctx));

    let high = scores_with_goal(0.6);
    let ctx = EvaluationContext::new(&profile, &selections, &high, 0.6);
    assert!(!evaluate_rule(&rule, &ctx));
}

#[test]
fn test_all_five_operators() {
    let profile = UserProfile::default();
    let selections = WorkoutSelections::default();
    let fs = scores_with_goal(0.5);
    let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.5);

    let cases = [
        (ConditionOperator::Lt, 0.6, true),
        (ConditionOperator::Lt, 0.5, false),
        (ConditionOperator::Lte, 0.5, true),
        (ConditionOperator::Gte, 0.5, true),
        (ConditionOperator::Gt, 0.5, false),
        (ConditionOperator::Gt, 0.4, true),
        (ConditionOperator::Eq, 0.5, true),
    ];

    for (operator, comparand, expected) in cases {
        let rule = ConditionRule::factor(FactorKind::GoalAlignment, operator, comparand);
        assert_eq!(
            evaluate_rule(&rule, &ctx),
            expected,
            "{operator:?} {comparand} should be {expected}"
        );
    }
}

#[test]
fn test_dotted_path_over_nested_profile_data() {
    let mut profile = UserProfile::default();
    profile.enhanced_limitations.time_constraints = Some(45);
    let selections = WorkoutSelections::default();
    let fs = scores_with_goal(0.8);
    let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.8);

    let rule = ConditionRule::path(
        "userProfile.enhancedLimitations.timeConstraints",
        ConditionOperator::Gte,
        Value::from(30),
    );
    assert!(evaluate_rule(&rule, &ctx));
}

#[test]
fn test_missing_path_segments_resolve_false_without_fault() {
    let profile = UserProfile::default();
    let selections = WorkoutSelections::default();
    let fs = scores_with_goal(0.8);
    let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.8);

    for path in [
        "userProfile.doesNotExist.atAll",
        "selections.energy.missing",
        "nowhere",
    ] {
        let rule = ConditionRule::path(path, ConditionOperator::Gte, Value::from(0));
        assert!(!evaluate_rule(&rule, &ctx), "{path} should be false");
    }
}

#[test]
fn test_numeric_operators_reject_non_numeric_operands() {
    let profile = UserProfile::default();
    let selections = WorkoutSelections::default();
    let fs = scores_with_goal(0.8);
    let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.8);

    // fitnessLevel serializes as a string
    let rule = ConditionRule::path(
        "userProfile.fitnessLevel",
        ConditionOperator::Gt,
        Value::from(1),
    );
    assert!(!evaluate_rule(&rule, &ctx));
}

#[test]
fn test_eq_compares_scalars_with_type_sensitivity() {
    let profile = UserProfile::default();
    let selections = WorkoutSelections::default();
    let fs = scores_with_goal(0.8);
    let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.8);

    let string_match = ConditionRule::path(
        "userProfile.fitnessLevel",
        ConditionOperator::Eq,
        Value::from("beginner"),
    );
    assert!(evaluate_rule(&string_match, &ctx));

    let wrong_type = ConditionRule::path(
        "selections.energy.rating",
        ConditionOperator::Eq,
        Value::from("5"),
    );
    assert!(!evaluate_rule(&wrong_type, &ctx));
}

#[test]
fn test_rule_sets_require_every_rule_to_hold() {
    let profile = UserProfile::default();
    let selections = WorkoutSelections::default();
    let fs = scores_with_goal(0.3);
    let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.55);

    let both_hold = vec![
        ConditionRule::factor(FactorKind::GoalAlignment, ConditionOperator::Lt, 0.5),
        ConditionRule::path("overallScore", ConditionOperator::Gt, Value::from(0.5)),
    ];
    assert!(evaluate_all(&both_hold, &ctx));

    let one_fails = vec![
        ConditionRule::factor(FactorKind::GoalAlignment, ConditionOperator::Lt, 0.5),
        ConditionRule::path("overallScore", ConditionOperator::Gt, Value::from(0.9)),
    ];
    assert!(!evaluate_all(&one_fails, &ctx));

    assert!(evaluate_all(&[], &ctx), "empty rule set matches");
}

#[test]
fn test_overall_score_is_addressable() {
    let profile = UserProfile::default();
    let selections = WorkoutSelections::default();
    let fs = scores_with_goal(0.8);
    let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.42);

    let rule = ConditionRule::path("overallScore", ConditionOperator::Lt, Value::from(0.5));
    assert!(evaluate_rule(&rule, &ctx));
}
