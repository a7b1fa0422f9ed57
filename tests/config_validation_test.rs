// ABOUTME: Tests for configuration validation, merging, and environment loading
// ABOUTME: Weight-sum invariant accepted and rejected deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_confidence::config::{
    SelectionAnalysisConfig, SelectionConfigUpdate, ThresholdsUpdate, WeightsUpdate,
    WEIGHT_SUM_TOLERANCE,
};
use pierre_confidence::errors::{ConfigValidationError, SelectionAnalysisError};
use pierre_confidence::service::SelectionIntelligenceService;

#[test]
fn test_default_configuration_is_accepted() {
    let config = SelectionAnalysisConfig::default();
    assert!(config.validate().is_ok());
    assert!(SelectionIntelligenceService::new(config).is_ok());
}

#[test]
fn test_weights_summing_to_one_within_tolerance_are_accepted() {
    let mut config = SelectionAnalysisConfig::default();
    // Nudge one weight inside the documented tolerance.
    config.weights.goal_alignment += WEIGHT_SUM_TOLERANCE / 2.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_weights_not_summing_to_one_are_rejected() {
    let mut config = SelectionAnalysisConfig::default();
    config.weights.goal_alignment = 0.5; // sum is now 1.25

    match config.validate() {
        Err(ConfigValidationError::WeightSum(sum)) => {
            assert!((sum - 1.25).abs() < 1e-9);
        }
        other => panic!("expected WeightSum rejection, got {other:?}"),
    }

    assert!(SelectionIntelligenceService::new(config).is_err());
}

#[test]
fn test_update_with_bad_weight_sum_is_rejected_and_state_kept() {
    let service = SelectionIntelligenceService::new_test_instance();
    let before = service.config();

    let update = SelectionConfigUpdate {
        weights: Some(WeightsUpdate {
            intensity_match: Some(0.9),
            ..WeightsUpdate::default()
        }),
        ..SelectionConfigUpdate::default()
    };

    let error = service.update_config(&update).unwrap_err();
    assert!(matches!(
        error,
        SelectionAnalysisError::Config(ConfigValidationError::WeightSum(_))
    ));

    let after = service.config();
    assert!(
        (after.weights.intensity_match - before.weights.intensity_match).abs() < f64::EPSILON
    );
}

#[test]
fn test_valid_weight_rebalance_is_applied() {
    let service = SelectionIntelligenceService::new_test_instance();

    let update = SelectionConfigUpdate {
        weights: Some(WeightsUpdate {
            goal_alignment: Some(0.30),
            intensity_match: Some(0.30),
            duration_fit: Some(0.20),
            recovery_respect: Some(0.10),
            equipment_optimization: Some(0.10),
        }),
        ..SelectionConfigUpdate::default()
    };

    service.update_config(&update).unwrap();
    let config = service.config();
    assert!((config.weights.goal_alignment - 0.30).abs() < f64::EPSILON);
}

#[test]
fn test_weights_and_thresholds_merge_independently() {
    let service = SelectionIntelligenceService::new_test_instance();

    // Update thresholds only; weights must be untouched.
    service
        .update_config(&SelectionConfigUpdate {
            thresholds: Some(ThresholdsUpdate {
                warning: Some(0.45),
                ..ThresholdsUpdate::default()
            }),
            ..SelectionConfigUpdate::default()
        })
        .unwrap();

    let config = service.config();
    assert!((config.thresholds.warning - 0.45).abs() < f64::EPSILON);
    assert!((config.weights.goal_alignment - 0.25).abs() < f64::EPSILON);
    assert!((config.thresholds.excellent - 0.85).abs() < f64::EPSILON);
}

#[test]
fn test_non_monotonic_thresholds_are_rejected() {
    let service = SelectionIntelligenceService::new_test_instance();

    let error = service
        .update_config(&SelectionConfigUpdate {
            thresholds: Some(ThresholdsUpdate {
                warning: Some(0.95),
                ..ThresholdsUpdate::default()
            }),
            ..SelectionConfigUpdate::default()
        })
        .unwrap_err();

    assert!(matches!(
        error,
        SelectionAnalysisError::Config(ConfigValidationError::ThresholdOrdering)
    ));
}

#[test]
fn test_environment_overrides_are_parsed_and_validated() {
    std::env::set_var("CONFIDENCE_MAX_SUGGESTIONS", "7");
    let config = SelectionAnalysisConfig::from_environment().unwrap();
    assert_eq!(config.content.max_suggestions, 7);
    std::env::remove_var("CONFIDENCE_MAX_SUGGESTIONS");

    std::env::set_var("CONFIDENCE_CACHE_TTL_SECONDS", "not-a-number");
    let error = SelectionAnalysisConfig::from_environment().unwrap_err();
    assert!(matches!(
        error,
        ConfigValidationError::InvalidEnvOverride { .. }
    ));
    std::env::remove_var("CONFIDENCE_CACHE_TTL_SECONDS");
}
