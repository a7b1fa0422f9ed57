// ABOUTME: Duration fit analyzer scoring session length against level, constraints, and history
// ABOUTME: Blends fitness-level range, time constraints, focus fit, and progression pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{blend, finalize, CriterionScore, SelectionFactorAnalyzer};
use crate::classification::{classify_focus, TrainingCategory};
use crate::config::StatusThresholds;
use crate::models::{
    AnalysisContext, FactorKind, FactorScore, FitnessLevel, ScoreBand, UserProfile,
    WorkoutSelections,
};

const LEVEL_RANGE_WEIGHT: f64 = 0.35;
const TIME_CONSTRAINT_WEIGHT: f64 = 0.25;
const FOCUS_FIT_WEIGHT: f64 = 0.25;
const PROGRESSION_WEIGHT: f64 = 0.15;

/// Scores whether the selected duration fits the user's level and constraints
pub struct DurationFitAnalyzer;

impl SelectionFactorAnalyzer for DurationFitAnalyzer {
    fn kind(&self) -> FactorKind {
        FactorKind::DurationFit
    }

    fn description(&self) -> &'static str {
        "Whether the session length fits your level, schedule, and training history"
    }

    fn weight(&self) -> f64 {
        0.20
    }

    fn analyze(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        _context: &AnalysisContext,
        thresholds: &StatusThresholds,
    ) -> FactorScore {
        let minutes = selections.duration.minutes().max(0.0);

        let parts = vec![
            level_range_part(profile.fitness_level, minutes),
            time_constraint_part(profile, minutes),
            focus_fit_part(selections, minutes),
            progression_part(profile, minutes),
        ];

        let (score, details, suggestions) = blend(parts);
        let (reasoning, impact) = prose(score, minutes);
        finalize(score, thresholds, reasoning, impact, details, suggestions)
    }
}

/// Productive duration range in minutes per fitness level
const fn level_range(level: FitnessLevel) -> (f64, f64) {
    match level {
        FitnessLevel::Beginner => (15.0, 30.0),
        FitnessLevel::Novice => (20.0, 40.0),
        FitnessLevel::Intermediate | FitnessLevel::Adaptive => (20.0, 60.0),
        FitnessLevel::Advanced => (30.0, 90.0),
    }
}

fn level_range_part(level: FitnessLevel, minutes: f64) -> CriterionScore {
    let (low, high) = level_range(level);

    let overshoot = if minutes < low {
        low - minutes
    } else if minutes > high {
        minutes - high
    } else {
        0.0
    };

    let score = if overshoot <= 0.0 {
        0.9
    } else if overshoot <= 10.0 {
        0.65
    } else if overshoot <= 25.0 {
        0.45
    } else {
        0.25
    };

    let part = CriterionScore::new(LEVEL_RANGE_WEIGHT, score);
    if overshoot <= 0.0 {
        part
    } else if minutes > high {
        part.detail(format!(
            "{minutes:.0} minutes is longer than the productive range for your level."
        ))
        .suggest(format!(
            "Shorten the session toward {high:.0} minutes; quality beats length at your level."
        ))
    } else {
        part.detail(format!(
            "{minutes:.0} minutes is shorter than what your level can absorb."
        ))
    }
}

fn time_constraint_part(profile: &UserProfile, minutes: f64) -> CriterionScore {
    let Some(limit) = profile.enhanced_limitations.time_constraints else {
        return CriterionScore::neutral(
            TIME_CONSTRAINT_WEIGHT,
            "No time constraint on file; skipping schedule fit.",
        );
    };

    let limit = f64::from(limit);
    if limit <= 0.0 {
        return CriterionScore::neutral(TIME_CONSTRAINT_WEIGHT, "Time constraint on file is zero.");
    }

    let ratio = minutes / limit;
    if ratio <= 1.0 {
        CriterionScore::new(TIME_CONSTRAINT_WEIGHT, 0.9)
    } else if ratio <= 1.2 {
        CriterionScore::new(TIME_CONSTRAINT_WEIGHT, 0.6)
            .detail(format!(
                "The session slightly exceeds your {limit:.0}-minute availability."
            ))
            .suggest("Trim the session to fit the time you actually have.")
    } else {
        CriterionScore::new(TIME_CONSTRAINT_WEIGHT, 0.3)
            .detail(format!(
                "The session clearly exceeds your {limit:.0}-minute availability."
            ))
            .suggest(format!(
                "Pick a duration at or under {limit:.0} minutes so the workout is finishable."
            ))
    }
}

/// Sensible duration window per focus category
fn focus_window(category: TrainingCategory) -> (f64, f64) {
    use TrainingCategory as T;
    match category {
        T::Strength => (30.0, 75.0),
        T::Cardio => (20.0, 60.0),
        T::WeightLoss => (30.0, 60.0),
        T::Flexibility => (10.0, 40.0),
        T::Recovery => (10.0, 30.0),
        T::General => (20.0, 45.0),
    }
}

fn focus_fit_part(selections: &WorkoutSelections, minutes: f64) -> CriterionScore {
    let category = classify_focus(selections.focus.focus());
    let (low, high) = focus_window(category);

    let score = if (low..=high).contains(&minutes) {
        0.85
    } else if minutes >= low - 15.0 && minutes <= high + 15.0 {
        0.65
    } else {
        0.4
    };

    let part = CriterionScore::new(FOCUS_FIT_WEIGHT, score);
    if score < 0.7 && minutes < low {
        part.detail(format!(
            "{minutes:.0} minutes is tight for a {} session.",
            selections.focus.label()
        ))
    } else if score < 0.7 {
        part.detail(format!(
            "{minutes:.0} minutes is long for a {} session.",
            selections.focus.label()
        ))
    } else {
        part
    }
}

fn progression_part(profile: &UserProfile, minutes: f64) -> CriterionScore {
    let Some(average) = profile.workout_history.average_duration_minutes else {
        return CriterionScore::neutral(
            PROGRESSION_WEIGHT,
            "No workout history yet; progression pace unknown.",
        );
    };

    if average <= 0.0 {
        return CriterionScore::neutral(PROGRESSION_WEIGHT, "Workout history has no duration data.");
    }

    let ratio = minutes / average;
    if ratio <= 1.25 {
        CriterionScore::new(PROGRESSION_WEIGHT, 0.9)
    } else if ratio <= 1.5 {
        CriterionScore::new(PROGRESSION_WEIGHT, 0.7)
            .detail("This session is noticeably longer than your recent average.")
    } else if ratio <= 2.0 {
        CriterionScore::new(PROGRESSION_WEIGHT, 0.5)
            .detail("This session is a big jump from your recent average.")
            .suggest("Increase duration gradually, around 10-15% per week.")
    } else {
        CriterionScore::new(PROGRESSION_WEIGHT, 0.3)
            .detail("This session more than doubles your recent average duration.")
            .suggest("Work up to sessions this long over several weeks.")
    }
}

fn prose(score: f64, minutes: f64) -> (String, String) {
    match ScoreBand::from_score(score) {
        ScoreBand::Good => (
            format!("{minutes:.0} minutes is a sensible length for you right now."),
            "Keeps quality high through the whole session.".to_string(),
        ),
        ScoreBand::Warning => (
            format!("{minutes:.0} minutes stretches beyond your usual capacity or schedule."),
            "The final stretch of the workout may be low quality.".to_string(),
        ),
        ScoreBand::Poor => (
            format!("{minutes:.0} minutes does not fit your level or schedule."),
            "Risk of an unfinished or counterproductive session.".to_string(),
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::models::{DurationSelection, FocusSelection};

    fn selections_with_duration(minutes: f64) -> WorkoutSelections {
        WorkoutSelections {
            duration: DurationSelection::Minutes(minutes),
            ..WorkoutSelections::default()
        }
    }

    #[test]
    fn beginner_long_session_is_penalized() {
        let analyzer = DurationFitAnalyzer;
        let short = analyzer.analyze(
            &UserProfile::default(),
            &selections_with_duration(25.0),
            &AnalysisContext::default(),
            &StatusThresholds::default(),
        );
        let long = analyzer.analyze(
            &UserProfile::default(),
            &selections_with_duration(75.0),
            &AnalysisContext::default(),
            &StatusThresholds::default(),
        );

        assert!(long.score < short.score);
        assert!(long.suggestions.iter().any(|s| s.contains("Shorten")));
    }

    #[test]
    fn time_constraint_violation_suggests_trimming() {
        let analyzer = DurationFitAnalyzer;
        let mut profile = UserProfile::default();
        profile.fitness_level = FitnessLevel::Advanced;
        profile.enhanced_limitations.time_constraints = Some(30);

        let score = analyzer.analyze(
            &profile,
            &selections_with_duration(60.0),
            &AnalysisContext::default(),
            &StatusThresholds::default(),
        );

        assert!(score
            .details
            .iter()
            .any(|d| d.contains("exceeds")));
    }

    #[test]
    fn big_jump_over_history_is_flagged() {
        let analyzer = DurationFitAnalyzer;
        let mut profile = UserProfile::default();
        profile.fitness_level = FitnessLevel::Intermediate;
        profile.workout_history.average_duration_minutes = Some(25.0);

        let score = analyzer.analyze(
            &profile,
            &selections_with_duration(45.0),
            &AnalysisContext::default(),
            &StatusThresholds::default(),
        );

        assert!(score.suggestions.iter().any(|s| s.contains("gradually")));
    }

    #[test]
    fn recovery_focus_prefers_short_sessions() {
        let analyzer = DurationFitAnalyzer;
        let selections = WorkoutSelections {
            focus: FocusSelection::Label("recovery".to_string()),
            duration: DurationSelection::Minutes(20.0),
            ..WorkoutSelections::default()
        };

        let score = analyzer.analyze(
            &UserProfile::default(),
            &selections,
            &AnalysisContext::default(),
            &StatusThresholds::default(),
        );

        assert!((0.0..=1.0).contains(&score.score));
        assert!(score.score > 0.6, "got {}", score.score);
    }
}
