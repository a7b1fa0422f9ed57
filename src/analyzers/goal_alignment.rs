// ABOUTME: Goal alignment analyzer scoring how well the selected focus serves stated goals
// ABOUTME: Blends goal-focus affinity, experience fit, and energy-goal fit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{blend, finalize, CriterionScore, SelectionFactorAnalyzer};
use crate::classification::{classify_focus, classify_goal, goal_focus_affinity, TrainingCategory};
use crate::config::StatusThresholds;
use crate::models::{
    AnalysisContext, FactorKind, FactorScore, FitnessLevel, ScoreBand, UserProfile,
    WorkoutSelections,
};

const GOAL_FOCUS_WEIGHT: f64 = 0.40;
const EXPERIENCE_FIT_WEIGHT: f64 = 0.30;
const ENERGY_GOAL_WEIGHT: f64 = 0.30;

/// Scores how well the selected focus serves the user's stated goals
pub struct GoalAlignmentAnalyzer;

impl SelectionFactorAnalyzer for GoalAlignmentAnalyzer {
    fn kind(&self) -> FactorKind {
        FactorKind::GoalAlignment
    }

    fn description(&self) -> &'static str {
        "How directly the selected focus and energy serve your stated training goals"
    }

    fn weight(&self) -> f64 {
        0.25
    }

    fn analyze(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        _context: &AnalysisContext,
        thresholds: &StatusThresholds,
    ) -> FactorScore {
        if profile.goals.is_empty() {
            return finalize(
                0.5,
                thresholds,
                "No training goals on file, so goal alignment cannot be assessed.".to_string(),
                "Unknown effect on long-term progress until goals are recorded.".to_string(),
                vec!["Your profile has no training goals recorded.".to_string()],
                vec![
                    "Add your training goals to your profile to get goal-aligned workouts."
                        .to_string(),
                ],
            );
        }

        let focus_category = classify_focus(selections.focus.focus());
        let parts = vec![
            goal_focus_part(profile, selections, focus_category),
            experience_fit_part(profile.fitness_level, focus_category),
            energy_goal_part(profile, selections),
        ];

        let (score, details, suggestions) = blend(parts);
        let (reasoning, impact) = prose(score);
        finalize(score, thresholds, reasoning, impact, details, suggestions)
    }
}

/// Goal-focus affinity: the selection is credited for the best-served goal
fn goal_focus_part(
    profile: &UserProfile,
    selections: &WorkoutSelections,
    focus_category: TrainingCategory,
) -> CriterionScore {
    let focus_label = selections.focus.label().to_string();

    let best = profile
        .goals
        .iter()
        .map(|goal| {
            let category = classify_goal(goal);
            (goal.clone(), goal_focus_affinity(category, focus_category))
        })
        .max_by(|a, b| a.1.total_cmp(&b.1));

    // goals is non-empty here; guard anyway so the analyzer stays total
    let Some((best_goal, affinity)) = best else {
        return CriterionScore::neutral(GOAL_FOCUS_WEIGHT, "No goals available for matching.");
    };

    let part = CriterionScore::new(GOAL_FOCUS_WEIGHT, affinity);
    if affinity >= 0.75 {
        part.detail(format!(
            "'{focus_label}' directly supports your goal '{best_goal}'."
        ))
    } else if affinity >= 0.5 {
        part.detail(format!(
            "'{focus_label}' partially supports your goal '{best_goal}'."
        ))
    } else {
        part.detail(format!(
            "'{focus_label}' does little for your goal '{best_goal}'."
        ))
        .suggest(format!(
            "Pick a focus that serves '{best_goal}' more directly, or update your goals."
        ))
    }
}

/// Focus-experience fit: technical focuses demand more training maturity
fn experience_fit_part(level: FitnessLevel, focus_category: TrainingCategory) -> CriterionScore {
    use TrainingCategory as T;

    let score = match (focus_category, level) {
        (T::Flexibility | T::Recovery, _) => 0.9,
        (T::Strength, FitnessLevel::Beginner) => 0.6,
        (T::Strength, FitnessLevel::Novice) => 0.65,
        (T::Strength, FitnessLevel::Intermediate) => 0.85,
        (T::Strength, FitnessLevel::Advanced) => 0.95,
        (T::Strength, FitnessLevel::Adaptive) => 0.8,
        (T::Cardio, FitnessLevel::Beginner) => 0.75,
        (T::Cardio, FitnessLevel::Advanced) => 0.9,
        (T::Cardio, _) => 0.8,
        (T::WeightLoss, FitnessLevel::Beginner) => 0.75,
        (T::WeightLoss, _) => 0.8,
        (T::General, _) => 0.75,
    };

    let part = CriterionScore::new(EXPERIENCE_FIT_WEIGHT, score);
    if focus_category == T::Strength
        && matches!(level, FitnessLevel::Beginner | FitnessLevel::Novice)
    {
        part.detail(
            "Strength work at your level pays off fastest with light loads and strict form."
                .to_string(),
        )
    } else {
        part
    }
}

/// Energy-goal fit: each goal category has a productive energy range
fn energy_goal_part(profile: &UserProfile, selections: &WorkoutSelections) -> CriterionScore {
    let rating = selections.energy.rating_clamped();

    let best = profile
        .goals
        .iter()
        .map(|goal| energy_range_score(classify_goal(goal), rating))
        .max_by(f64::total_cmp)
        .unwrap_or(0.5);

    let part = CriterionScore::new(ENERGY_GOAL_WEIGHT, best);
    if best < 0.6 {
        part.detail(format!(
            "Energy level {rating} sits outside the productive range for your goals."
        ))
        .suggest("Adjust the energy level to better serve your goals.".to_string())
    } else {
        part
    }
}

fn energy_range_score(category: TrainingCategory, rating: u8) -> f64 {
    use TrainingCategory as T;

    let (low, high) = match category {
        T::Strength => (6, 9),
        T::Cardio => (5, 9),
        T::WeightLoss => (6, 8),
        T::Flexibility => (2, 5),
        T::Recovery => (1, 4),
        T::General => (4, 7),
    };

    let distance = if rating < low {
        low - rating
    } else if rating > high {
        rating - high
    } else {
        0
    };

    match distance {
        0 => 0.85,
        1 => 0.65,
        2 => 0.5,
        _ => 0.3,
    }
}

fn prose(score: f64) -> (String, String) {
    match ScoreBand::from_score(score) {
        ScoreBand::Good => (
            "Your selections line up well with your stated goals.".to_string(),
            "Strong positive effect on progress toward your goals.".to_string(),
        ),
        ScoreBand::Warning => (
            "Your selections only partially serve your stated goals.".to_string(),
            "Progress toward your goals will be slower than it could be.".to_string(),
        ),
        ScoreBand::Poor => (
            "Your selections work against your stated goals.".to_string(),
            "This session contributes little toward what you want to achieve.".to_string(),
        ),
    }
}
