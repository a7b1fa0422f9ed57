// ABOUTME: Property tests for weighted aggregation and score clamping
// ABOUTME: Overall score equals the weighted factor sum for any valid weight config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_confidence::config::{
    CacheSettingsUpdate, SelectionConfigUpdate, WeightsUpdate,
};
use pierre_confidence::models::{
    AnalysisContext, DurationSelection, EnergySelection, FactorKind, FitnessLevel,
    FocusSelection, UserProfile, WorkoutSelections,
};
use pierre_confidence::service::SelectionIntelligenceService;
use proptest::prelude::*;

const FOCUS_POOL: &[&str] = &[
    "strength",
    "cardio",
    "hiit",
    "yoga",
    "fat burn",
    "recovery",
    "full body",
];

const GOAL_POOL: &[&str] = &[
    "weight loss",
    "build muscle",
    "endurance",
    "flexibility",
    "general health",
];

fn normalized_weights(raw: [f64; 5]) -> WeightsUpdate {
    let sum: f64 = raw.iter().sum();
    let scaled: Vec<f64> = raw.iter().map(|value| value / sum).collect();
    // Pin the last weight so the five sum to exactly 1.0.
    let last = 1.0 - (scaled[0] + scaled[1] + scaled[2] + scaled[3]);

    WeightsUpdate {
        goal_alignment: Some(scaled[0]),
        intensity_match: Some(scaled[1]),
        duration_fit: Some(scaled[2]),
        recovery_respect: Some(scaled[3]),
        equipment_optimization: Some(last),
    }
}

proptest! {
    #[test]
    fn overall_score_equals_weighted_factor_sum(
        raw in prop::array::uniform5(0.05f64..1.0),
        focus_idx in 0..FOCUS_POOL.len(),
        goal_idx in 0..GOAL_POOL.len(),
        energy in 1u8..=10,
        minutes in 5.0f64..120.0,
    ) {
        let service = SelectionIntelligenceService::new_test_instance();
        service
            .update_config(&SelectionConfigUpdate {
                weights: Some(normalized_weights(raw)),
                ..SelectionConfigUpdate::default()
            })
            .unwrap();

        let profile = UserProfile {
            goals: vec![GOAL_POOL[goal_idx].to_string()],
            ..UserProfile::default()
        };
        let selections = WorkoutSelections {
            focus: FocusSelection::Label(FOCUS_POOL[focus_idx].to_string()),
            energy: EnergySelection { rating: energy, label: None },
            duration: DurationSelection::Minutes(minutes),
            equipment: vec![],
        };

        let result = service
            .analyze_selections(&profile, &selections, &AnalysisContext::default())
            .unwrap()
            .unwrap();

        let config = service.config();
        let expected: f64 = FactorKind::ALL
            .into_iter()
            .map(|kind| config.weights.get(kind) * result.factors.get(kind).score)
            .sum();

        prop_assert!((result.overall_score - expected).abs() < 1e-6);
    }

    #[test]
    fn every_score_stays_in_unit_range_for_arbitrary_input(
        energy in proptest::num::u8::ANY,
        minutes in -60.0f64..600.0,
        focus_idx in 0..FOCUS_POOL.len(),
        level_idx in 0..5usize,
        previous in proptest::option::of(0u32..30),
    ) {
        let service = SelectionIntelligenceService::new_test_instance();
        service
            .update_config(&SelectionConfigUpdate {
                cache: Some(CacheSettingsUpdate {
                    enabled: Some(false),
                    ..CacheSettingsUpdate::default()
                }),
                ..SelectionConfigUpdate::default()
            })
            .unwrap();

        let levels = [
            FitnessLevel::Beginner,
            FitnessLevel::Novice,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
            FitnessLevel::Adaptive,
        ];

        let profile = UserProfile {
            fitness_level: levels[level_idx],
            ..UserProfile::default()
        };
        let selections = WorkoutSelections {
            focus: FocusSelection::Label(FOCUS_POOL[focus_idx].to_string()),
            energy: EnergySelection { rating: energy, label: None },
            duration: DurationSelection::Minutes(minutes),
            equipment: vec![],
        };
        let context = AnalysisContext {
            previous_workouts: previous,
            ..AnalysisContext::default()
        };

        let result = service
            .analyze_selections(&profile, &selections, &context)
            .unwrap()
            .unwrap();

        prop_assert!((0.0..=1.0).contains(&result.overall_score));
        for (_, factor) in result.factors.iter() {
            prop_assert!((0.0..=1.0).contains(&factor.score));
        }
    }

    #[test]
    fn suggestion_lists_never_exceed_the_requested_limit(
        max_items in 1usize..8,
        energy in 1u8..=10,
    ) {
        let service = SelectionIntelligenceService::new_test_instance();
        let profile = UserProfile {
            goals: vec!["weight loss".to_string()],
            ..UserProfile::default()
        };
        let selections = WorkoutSelections {
            focus: FocusSelection::Label("strength".to_string()),
            energy: EnergySelection { rating: energy, label: None },
            ..WorkoutSelections::default()
        };

        let fixes = service
            .quick_fix_suggestions(&profile, &selections, &AnalysisContext::default(), max_items)
            .unwrap();
        prop_assert!(fixes.len() <= max_items);
    }
}
