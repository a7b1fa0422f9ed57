// ABOUTME: Recovery respect analyzer scoring selections against injuries and recovery needs
// ABOUTME: Blends injury safety, rest-day adherence, sleep adequacy, and hydration/mobility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{blend, finalize, CriterionScore, SelectionFactorAnalyzer};
use crate::classification::{classify_focus, TrainingCategory};
use crate::config::StatusThresholds;
use crate::models::{
    AnalysisContext, FactorKind, FactorScore, HydrationLevel, ScoreBand, UserProfile,
    WorkoutSelections,
};

const INJURY_WEIGHT: f64 = 0.35;
const REST_DAY_WEIGHT: f64 = 0.30;
const SLEEP_WEIGHT: f64 = 0.20;
const BODY_STATE_WEIGHT: f64 = 0.15;

/// Scores whether the selections respect injuries and recovery needs
pub struct RecoveryRespectAnalyzer;

impl SelectionFactorAnalyzer for RecoveryRespectAnalyzer {
    fn kind(&self) -> FactorKind {
        FactorKind::RecoveryRespect
    }

    fn description(&self) -> &'static str {
        "Whether the selections respect your injuries, rest needs, and recovery state"
    }

    fn weight(&self) -> f64 {
        0.15
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
            injury_part(profile, selections, rating),
            rest_day_part(profile, context),
            sleep_part(profile, rating),
            body_state_part(profile, rating),
        ];

        let (score, details, suggestions) = blend(parts);
        let (reasoning, impact) = prose(score);
        finalize(score, thresholds, reasoning, impact, details, suggestions)
    }
}

fn injury_part(profile: &UserProfile, selections: &WorkoutSelections, rating: u8) -> CriterionScore {
    let injuries = &profile.basic_limitations.injuries;

    if injuries.is_empty() {
        return CriterionScore::new(INJURY_WEIGHT, 0.9).detail("No active injuries on file.");
    }

    let focus_category = classify_focus(selections.focus.focus());
    let gentle_focus = matches!(
        focus_category,
        TrainingCategory::Flexibility | TrainingCategory::Recovery
    );

    if gentle_focus {
        CriterionScore::new(INJURY_WEIGHT, 0.85)
            .detail("A gentle focus is a good call with an injury on file.")
    } else if rating >= 8 {
        CriterionScore::new(INJURY_WEIGHT, 0.3)
            .detail(format!(
                "A hard session with '{}' on your injury list needs caution.",
                injuries.join(", ")
            ))
            .suggest("Lower the intensity or switch to a recovery-friendly focus.")
    } else if rating >= 5 {
        CriterionScore::new(INJURY_WEIGHT, 0.6)
            .detail("Moderate intensity with an active injury; keep an eye on pain signals.")
    } else {
        CriterionScore::new(INJURY_WEIGHT, 0.75)
    }
}

fn rest_day_part(profile: &UserProfile, context: &AnalysisContext) -> CriterionScore {
    let Some(needs) = &profile.enhanced_limitations.recovery_needs else {
        return CriterionScore::neutral(REST_DAY_WEIGHT, "No recovery preferences on file.")
            .suggest("Set your rest-day and sleep preferences for better recovery checks.");
    };

    let Some(recent) = context.previous_workouts else {
        return CriterionScore::new(REST_DAY_WEIGHT, 0.6)
            .detail("No recent workout count available; rest adherence unknown.");
    };

    let training_days_available = 7_u32.saturating_sub(needs.rest_days);
    if recent > training_days_available {
        CriterionScore::new(REST_DAY_WEIGHT, 0.35)
            .detail(format!(
                "{recent} workouts this week exceeds your own plan of {training_days_available} training days."
            ))
            .suggest("Take the rest day you planned before adding another session.")
    } else if recent == training_days_available {
        CriterionScore::new(REST_DAY_WEIGHT, 0.7)
            .detail("This session uses up the last planned training day of the week.")
    } else {
        CriterionScore::new(REST_DAY_WEIGHT, 0.9)
    }
}

fn sleep_part(profile: &UserProfile, rating: u8) -> CriterionScore {
    let Some(needs) = &profile.enhanced_limitations.recovery_needs else {
        return CriterionScore::neutral(SLEEP_WEIGHT, "Sleep data not available.");
    };

    let sleep = needs.sleep_hours;
    if sleep <= 0.0 {
        CriterionScore::neutral(SLEEP_WEIGHT, "Sleep data not recorded.")
    } else if sleep < 6.0 && rating >= 7 {
        CriterionScore::new(SLEEP_WEIGHT, 0.3)
            .detail(format!(
                "{sleep:.1} hours of sleep is thin support for a hard session."
            ))
            .suggest("On short sleep, trade intensity for technique work or easy movement.")
    } else if sleep < 6.0 {
        CriterionScore::new(SLEEP_WEIGHT, 0.55)
            .detail("Sleep is on the short side; recovery capacity is reduced.")
    } else if sleep < 7.0 {
        CriterionScore::new(SLEEP_WEIGHT, 0.75)
    } else {
        CriterionScore::new(SLEEP_WEIGHT, 0.9)
    }
}

fn body_state_part(profile: &UserProfile, rating: u8) -> CriterionScore {
    let hydration = profile
        .enhanced_limitations
        .recovery_needs
        .as_ref()
        .and_then(|needs| needs.hydration_level);
    let mobility = &profile.enhanced_limitations.mobility_limitations;

    match hydration {
        Some(HydrationLevel::Low) if rating >= 7 => CriterionScore::new(BODY_STATE_WEIGHT, 0.4)
            .detail("Low hydration plus high intensity degrades performance quickly.")
            .suggest("Hydrate before and during the session."),
        Some(HydrationLevel::Low) => CriterionScore::new(BODY_STATE_WEIGHT, 0.55)
            .suggest("Improve hydration ahead of your workouts."),
        _ if !mobility.is_empty() && rating >= 7 => CriterionScore::new(BODY_STATE_WEIGHT, 0.55)
            .detail("Mobility limitations and a hard session; warm up thoroughly."),
        _ => CriterionScore::new(BODY_STATE_WEIGHT, 0.85),
    }
}

fn prose(score: f64) -> (String, String) {
    match ScoreBand::from_score(score) {
        ScoreBand::Good => (
            "Your selections respect your recovery needs.".to_string(),
            "Sustainable training you can repeat through the week.".to_string(),
        ),
        ScoreBand::Warning => (
            "Your selections cut into your recovery margin.".to_string(),
            "Fatigue may accumulate if this becomes a pattern.".to_string(),
        ),
        ScoreBand::Poor => (
            "Your selections ignore your recovery needs.".to_string(),
            "Elevated risk of overtraining or aggravating an injury.".to_string(),
        ),
    }
}
