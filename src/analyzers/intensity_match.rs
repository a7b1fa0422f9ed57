// ABOUTME: Intensity match analyzer scoring selected energy against level and context
// ABOUTME: Blends fitness-level comfort, experience, time of day, recovery strain, and preference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{blend, finalize, CriterionScore, SelectionFactorAnalyzer};
use crate::config::StatusThresholds;
use crate::models::{
    AnalysisContext, FactorKind, FactorScore, FitnessLevel, IntensityPreference, ScoreBand,
    TimeOfDay, UserExperience, UserProfile, WorkoutSelections,
};

const FITNESS_LEVEL_WEIGHT: f64 = 0.30;
const EXPERIENCE_WEIGHT: f64 = 0.25;
const TIME_OF_DAY_WEIGHT: f64 = 0.20;
const RECOVERY_WEIGHT: f64 = 0.15;
const PREFERENCE_WEIGHT: f64 = 0.10;

/// Scores whether the selected energy level fits the user and the moment
pub struct IntensityMatchAnalyzer;

impl SelectionFactorAnalyzer for IntensityMatchAnalyzer {
    fn kind(&self) -> FactorKind {
        FactorKind::IntensityMatch
    }

    fn description(&self) -> &'static str {
        "Whether the selected energy level fits your fitness level, experience, and recovery state"
    }

    fn weight(&self) -> f64 {
        0.25
    }

    fn analyze(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        context: &AnalysisContext,
        thresholds: &StatusThresholds,
    ) -> FactorScore {
        let rating = selections.energy.rating_clamped();

        let parts = vec![
            fitness_level_part(profile.fitness_level, rating),
            experience_part(context.user_experience, rating),
            time_of_day_part(context.time_of_day, rating),
            recovery_part(profile, context, rating),
            preference_part(profile.preferences.intensity_preference, rating),
        ];

        let (score, details, suggestions) = blend(parts);
        let (reasoning, impact) = prose(score, rating);
        finalize(score, thresholds, reasoning, impact, details, suggestions)
    }
}

/// Comfortable energy range per fitness level
const fn comfort_range(level: FitnessLevel) -> (u8, u8) {
    match level {
        FitnessLevel::Beginner => (3, 6),
        FitnessLevel::Novice => (4, 7),
        FitnessLevel::Intermediate | FitnessLevel::Adaptive => (4, 8),
        FitnessLevel::Advanced => (5, 10),
    }
}

fn range_distance(rating: u8, low: u8, high: u8) -> u8 {
    if rating < low {
        low - rating
    } else if rating > high {
        rating - high
    } else {
        0
    }
}

fn fitness_level_part(level: FitnessLevel, rating: u8) -> CriterionScore {
    let (low, high) = comfort_range(level);
    let distance = range_distance(rating, low, high);

    let score = match distance {
        0 => 0.9,
        1 => 0.65,
        2 => 0.4,
        _ => 0.15,
    };

    let part = CriterionScore::new(FITNESS_LEVEL_WEIGHT, score);
    if distance == 0 {
        part
    } else if rating > high {
        part.detail(format!(
            "Energy level {rating} is above the productive range for your fitness level."
        ))
        .suggest(format!(
            "Dial the energy down toward {high} to keep quality high and injury risk low."
        ))
    } else {
        part.detail(format!(
            "Energy level {rating} is below what your fitness level can productively handle."
        ))
        .suggest(format!(
            "You can push a little harder; try energy {low} or above."
        ))
    }
}

fn experience_part(experience: UserExperience, rating: u8) -> CriterionScore {
    let cap = match experience {
        UserExperience::FirstTime => 5,
        UserExperience::Beginner => 6,
        UserExperience::Intermediate => 8,
        UserExperience::Advanced => 10,
    };

    let over = rating.saturating_sub(cap);
    let score = match over {
        0 => 0.85,
        1 => 0.6,
        2 => 0.4,
        _ => 0.2,
    };

    let part = CriterionScore::new(EXPERIENCE_WEIGHT, score);
    if over > 0 {
        part.detail(format!(
            "Energy level {rating} runs ahead of your experience with these workouts."
        ))
    } else {
        part
    }
}

fn time_of_day_part(time_of_day: Option<TimeOfDay>, rating: u8) -> CriterionScore {
    let Some(time) = time_of_day else {
        return CriterionScore::neutral(
            TIME_OF_DAY_WEIGHT,
            "Time of day not provided; skipping circadian fit.",
        );
    };

    match (time, rating) {
        (TimeOfDay::Evening, 8..) => CriterionScore::new(TIME_OF_DAY_WEIGHT, 0.5)
            .detail("Very high intensity in the evening can disrupt sleep.")
            .suggest("Consider a slightly easier session this late in the day."),
        (TimeOfDay::Morning, 0..=2) => CriterionScore::new(TIME_OF_DAY_WEIGHT, 0.65)
            .detail("A morning slot supports a bit more intensity than selected."),
        (TimeOfDay::Afternoon, _) => CriterionScore::new(TIME_OF_DAY_WEIGHT, 0.85),
        _ => CriterionScore::new(TIME_OF_DAY_WEIGHT, 0.8),
    }
}

fn recovery_part(profile: &UserProfile, context: &AnalysisContext, rating: u8) -> CriterionScore {
    let injuries = &profile.basic_limitations.injuries;

    if !injuries.is_empty() && rating >= 8 {
        return CriterionScore::new(RECOVERY_WEIGHT, 0.35)
            .detail("High intensity with an active injury on file.")
            .suggest("Keep intensity moderate while the injury heals.");
    }

    match context.previous_workouts {
        Some(count) if count >= 5 && rating >= 7 => CriterionScore::new(RECOVERY_WEIGHT, 0.3)
            .detail(format!(
                "{count} recent workouts plus a hard session leaves little room to recover."
            ))
            .suggest("Swap in an easier session or a rest day before the next hard effort."),
        Some(count) if count >= 5 => CriterionScore::new(RECOVERY_WEIGHT, 0.65)
            .detail(format!("{count} recent workouts; intensity is appropriately restrained.")),
        Some(_) => CriterionScore::new(RECOVERY_WEIGHT, 0.8),
        None => CriterionScore::new(RECOVERY_WEIGHT, 0.6)
            .detail("No recent workout count available; recovery strain unknown."),
    }
}

fn preference_part(preference: Option<IntensityPreference>, rating: u8) -> CriterionScore {
    let Some(preference) = preference else {
        return CriterionScore::neutral(
            PREFERENCE_WEIGHT,
            "No stated intensity preference on file.",
        );
    };

    let score = match (preference, rating) {
        (IntensityPreference::Low, 0..=4) => 0.9,
        (IntensityPreference::Low, 5..=6) => 0.6,
        (IntensityPreference::Low, _) => 0.3,
        (IntensityPreference::Moderate, 4..=7) => 0.9,
        (IntensityPreference::Moderate, _) => 0.6,
        (IntensityPreference::High, 7..) => 0.9,
        (IntensityPreference::High, 5..=6) => 0.7,
        (IntensityPreference::High, _) => 0.4,
    };

    let part = CriterionScore::new(PREFERENCE_WEIGHT, score);
    if score < 0.5 {
        part.detail("The selected energy level conflicts with your stated preference.")
    } else {
        part
    }
}

fn prose(score: f64, rating: u8) -> (String, String) {
    match ScoreBand::from_score(score) {
        ScoreBand::Good => (
            format!("Energy level {rating} suits your current level and context."),
            "Supports steady progress without undue strain.".to_string(),
        ),
        ScoreBand::Warning => (
            format!("Energy level {rating} is a stretch for your current level or context."),
            "Workout quality may suffer toward the end of the session.".to_string(),
        ),
        ScoreBand::Poor => (
            format!("Energy level {rating} is a poor match for your current level."),
            "High strain with elevated injury risk and little extra benefit.".to_string(),
        ),
    }
}
