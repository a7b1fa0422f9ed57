// ABOUTME: Equipment optimization analyzer scoring selected gear against availability and focus
// ABOUTME: Blends availability coverage, focus fit, and location/variety checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use super::{blend, finalize, CriterionScore, SelectionFactorAnalyzer};
use crate::classification::{
    classify_equipment, classify_focus, equipment_focus_fit, EquipmentCategory,
};
use crate::config::StatusThresholds;
use crate::models::{
    AnalysisContext, FactorKind, FactorScore, ScoreBand, UserProfile, WorkoutSelections,
};

const AVAILABILITY_WEIGHT: f64 = 0.40;
const FOCUS_FIT_WEIGHT: f64 = 0.35;
const LOCATION_VARIETY_WEIGHT: f64 = 0.25;

/// Scores whether the selected equipment is available and well used
pub struct EquipmentOptimizationAnalyzer;

impl SelectionFactorAnalyzer for EquipmentOptimizationAnalyzer {
    fn kind(&self) -> FactorKind {
        FactorKind::EquipmentOptimization
    }

    fn description(&self) -> &'static str {
        "Whether the selected equipment is actually available and suits the chosen focus"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn analyze(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        _context: &AnalysisContext,
        thresholds: &StatusThresholds,
    ) -> FactorScore {
        if profile.basic_limitations.available_equipment.is_empty() {
            return finalize(
                0.5,
                thresholds,
                "No available equipment on file, so equipment use cannot be assessed."
                    .to_string(),
                "Unknown effect until your equipment list is recorded.".to_string(),
                vec!["Your profile has no available equipment recorded.".to_string()],
                vec![
                    "Add your available equipment to your profile for better-matched workouts."
                        .to_string(),
                ],
            );
        }

        let parts = vec![
            availability_part(profile, selections),
            focus_fit_part(selections),
            location_variety_part(profile, selections),
        ];

        let (score, details, suggestions) = blend(parts);
        let (reasoning, impact) = prose(score);
        finalize(score, thresholds, reasoning, impact, details, suggestions)
    }
}

/// Whether one selected item is covered by the availability list
///
/// A label matches when either string contains the other (case-insensitive)
/// or both classify into the same concrete equipment category.
fn is_available(selected: &str, available: &[String]) -> bool {
    let selected_lower = selected.to_lowercase();
    let selected_category = classify_equipment(selected);

    available.iter().any(|item| {
        let item_lower = item.to_lowercase();
        if item_lower.contains(&selected_lower) || selected_lower.contains(&item_lower) {
            return true;
        }
        let category = classify_equipment(item);
        category != EquipmentCategory::Other && category == selected_category
    })
}

fn availability_part(profile: &UserProfile, selections: &WorkoutSelections) -> CriterionScore {
    let available = &profile.basic_limitations.available_equipment;

    if selections.equipment.is_empty() {
        return CriterionScore::new(AVAILABILITY_WEIGHT, 0.75)
            .detail("No equipment selected; treating this as a bodyweight session.");
    }

    let missing: Vec<&String> = selections
        .equipment
        .iter()
        .filter(|item| !is_available(item, available))
        .collect();

    let covered = selections.equipment.len() - missing.len();
    let coverage = covered as f64 / selections.equipment.len() as f64;

    if missing.is_empty() {
        CriterionScore::new(AVAILABILITY_WEIGHT, 0.95)
    } else if coverage >= 0.5 {
        CriterionScore::new(AVAILABILITY_WEIGHT, 0.55)
            .detail(format!(
                "Some selected equipment is not in your list: {}.",
                missing
                    .into_iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
            .suggest("Swap unavailable items for gear you actually have.")
    } else {
        CriterionScore::new(AVAILABILITY_WEIGHT, 0.25)
            .detail("Most of the selected equipment is not in your availability list.")
            .suggest("Rebuild the selection around equipment you have access to.")
    }
}

fn focus_fit_part(selections: &WorkoutSelections) -> CriterionScore {
    let focus_category = classify_focus(selections.focus.focus());

    let fit = if selections.equipment.is_empty() {
        equipment_focus_fit(EquipmentCategory::Bodyweight, focus_category)
    } else {
        let total: f64 = selections
            .equipment
            .iter()
            .map(|item| equipment_focus_fit(classify_equipment(item), focus_category))
            .sum();
        total / selections.equipment.len() as f64
    };

    let part = CriterionScore::new(FOCUS_FIT_WEIGHT, fit);
    if fit < 0.5 {
        part.detail(format!(
            "The selected equipment is a weak match for a {} session.",
            selections.focus.label()
        ))
        .suggest("Choose equipment that serves the session focus.")
    } else {
        part
    }
}

fn location_variety_part(profile: &UserProfile, selections: &WorkoutSelections) -> CriterionScore {
    let locations = &profile.basic_limitations.available_locations;
    let has_gym_access = locations.is_empty()
        || locations
            .iter()
            .any(|location| location.to_lowercase().contains("gym"));

    let needs_gym = selections.equipment.iter().any(|item| {
        matches!(
            classify_equipment(item),
            EquipmentCategory::Machines | EquipmentCategory::CardioMachines
        )
    });

    if needs_gym && !has_gym_access {
        return CriterionScore::new(LOCATION_VARIETY_WEIGHT, 0.45)
            .detail("Machine-based equipment selected without gym access on file.")
            .suggest("Pick free-weight or bodyweight alternatives for your locations.");
    }

    let categories: HashSet<EquipmentCategory> = selections
        .equipment
        .iter()
        .map(|item| classify_equipment(item))
        .collect();

    match categories.len() {
        0 => CriterionScore::new(LOCATION_VARIETY_WEIGHT, 0.7),
        1 => CriterionScore::new(LOCATION_VARIETY_WEIGHT, 0.75),
        _ => CriterionScore::new(LOCATION_VARIETY_WEIGHT, 0.85)
            .detail("Good equipment variety for a well-rounded session."),
    }
}

fn prose(score: f64) -> (String, String) {
    match ScoreBand::from_score(score) {
        ScoreBand::Good => (
            "Your equipment choices make good use of what you have.".to_string(),
            "The session can run as planned with the gear on hand.".to_string(),
        ),
        ScoreBand::Warning => (
            "Your equipment choices only partly match what you have or need.".to_string(),
            "Some exercises may need on-the-fly substitutions.".to_string(),
        ),
        ScoreBand::Poor => (
            "Your equipment choices do not match your availability or focus.".to_string(),
            "The planned session is unlikely to work as selected.".to_string(),
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::models::{FocusSelection, ScoreStatus};

    fn profile_with_equipment(items: &[&str]) -> UserProfile {
        let mut profile = UserProfile::default();
        profile.basic_limitations.available_equipment =
            items.iter().map(ToString::to_string).collect();
        profile
    }

    fn selections(focus: &str, equipment: &[&str]) -> WorkoutSelections {
        WorkoutSelections {
            focus: FocusSelection::Label(focus.to_string()),
            equipment: equipment.iter().map(ToString::to_string).collect(),
            ..WorkoutSelections::default()
        }
    }

    #[test]
    fn empty_availability_defaults_to_neutral_with_profile_suggestion() {
        let analyzer = EquipmentOptimizationAnalyzer;
        let score = analyzer.analyze(
            &UserProfile::default(),
            &selections("strength", &["dumbbells"]),
            &AnalysisContext::default(),
            &StatusThresholds::default(),
        );

        assert!((score.score - 0.5).abs() < f64::EPSILON);
        assert_eq!(score.status, ScoreStatus::Warning);
        assert!(score.suggestions.iter().any(|s| s.contains("profile")));
    }

    #[test]
    fn available_and_fitting_equipment_scores_high() {
        let analyzer = EquipmentOptimizationAnalyzer;
        let score = analyzer.analyze(
            &profile_with_equipment(&["dumbbells", "barbell", "yoga mat"]),
            &selections("strength", &["dumbbells", "barbell"]),
            &AnalysisContext::default(),
            &StatusThresholds::default(),
        );

        assert!(score.score >= 0.85, "got {}", score.score);
    }

    #[test]
    fn unavailable_equipment_is_flagged() {
        let analyzer = EquipmentOptimizationAnalyzer;
        let score = analyzer.analyze(
            &profile_with_equipment(&["yoga mat"]),
            &selections("strength", &["barbell", "cable machine"]),
            &AnalysisContext::default(),
            &StatusThresholds::default(),
        );

        assert!(score.score < 0.7, "got {}", score.score);
        assert!(score
            .suggestions
            .iter()
            .any(|s| s.contains("equipment you have access to")));
    }

    #[test]
    fn cardio_machines_for_strength_focus_are_a_weak_fit() {
        let analyzer = EquipmentOptimizationAnalyzer;
        let score = analyzer.analyze(
            &profile_with_equipment(&["treadmill", "exercise bike", "gym"]),
            &selections("strength", &["treadmill", "exercise bike"]),
            &AnalysisContext::default(),
            &StatusThresholds::default(),
        );

        assert!(score
            .details
            .iter()
            .any(|d| d.contains("weak match")));
    }

    #[test]
    fn substring_matching_covers_label_variants() {
        assert!(is_available(
            "dumbbells",
            &["Adjustable Dumbbells".to_string()]
        ));
        assert!(is_available(
            "resistance band",
            &["bands".to_string()]
        ));
        assert!(!is_available("barbell", &["yoga mat".to_string()]));
    }
}
