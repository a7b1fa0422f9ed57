// ABOUTME: Aggregation engine running the five analyzers and assembling results
// ABOUTME: Weighted overall score, content selection, metadata, and result caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Selection analysis engine
//!
//! Orchestrates one analysis: cache lookup, the five factor analyzers, the
//! weighted overall score, content selection through the condition engine,
//! and metadata assembly. Analyzers are pure, so the engine fans them out
//! on worker threads and assembles the factor map in canonical order; the
//! sequential result is identical.

use std::sync::RwLock;
use std::time::Instant;

use chrono::{Duration, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::analyzers::{
    DurationFitAnalyzer, EquipmentOptimizationAnalyzer, GoalAlignmentAnalyzer,
    IntensityMatchAnalyzer, RecoveryRespectAnalyzer, SelectionFactorAnalyzer,
};
use crate::cache::{cache_key, AnalysisCache, CacheStats};
use crate::conditions::EvaluationContext;
use crate::config::{SelectionAnalysisConfig, SelectionConfigUpdate};
use crate::content::{applicable_education, applicable_suggestions, select_insight};
use crate::errors::SelectionAnalysisError;
use crate::models::{
    AnalysisContext, AnalysisMetadata, FactorKind, FactorScores, Insight,
    SelectionAnalysisResult, UserProfile, WorkoutSelections,
};
use crate::ENGINE_VERSION;

/// The aggregation engine; cheap to share behind an `Arc`
pub struct SelectionAnalysisEngine {
    config: RwLock<SelectionAnalysisConfig>,
    cache: AnalysisCache,
    goal_alignment: GoalAlignmentAnalyzer,
    intensity_match: IntensityMatchAnalyzer,
    duration_fit: DurationFitAnalyzer,
    recovery_respect: RecoveryRespectAnalyzer,
    equipment_optimization: EquipmentOptimizationAnalyzer,
}

impl SelectionAnalysisEngine {
    /// Create an engine with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation fails (for example,
    /// weights not summing to 1.0).
    pub fn new(config: SelectionAnalysisConfig) -> Result<Self, SelectionAnalysisError> {
        config.validate()?;
        Ok(Self {
            config: RwLock::new(config),
            cache: AnalysisCache::new(),
            goal_alignment: GoalAlignmentAnalyzer,
            intensity_match: IntensityMatchAnalyzer,
            duration_fit: DurationFitAnalyzer,
            recovery_respect: RecoveryRespectAnalyzer,
            equipment_optimization: EquipmentOptimizationAnalyzer,
        })
    }

    /// Create an engine with the default configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: RwLock::new(SelectionAnalysisConfig::default()),
            cache: AnalysisCache::new(),
            goal_alignment: GoalAlignmentAnalyzer,
            intensity_match: IntensityMatchAnalyzer,
            duration_fit: DurationFitAnalyzer,
            recovery_respect: RecoveryRespectAnalyzer,
            equipment_optimization: EquipmentOptimizationAnalyzer,
        }
    }

    /// Analyze one set of selections against a profile
    ///
    /// Identical inputs within the cache TTL return the stored result
    /// unmodified, original timestamp included.
    ///
    /// # Errors
    ///
    /// Returns an error only for programming defects (poisoned internal
    /// lock); incomplete input data is handled by the analyzers themselves.
    pub fn analyze_selections(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        context: &AnalysisContext,
    ) -> Result<SelectionAnalysisResult, SelectionAnalysisError> {
        let config = self.current_config()?;

        if !config.cache.enabled {
            return Ok(self.compute(profile, selections, context, &config));
        }

        let key = cache_key(profile, selections, context);
        let ttl = Duration::seconds(i64::try_from(config.cache.ttl_seconds).unwrap_or(i64::MAX));

        Ok(self.cache.get_or_compute(
            &key,
            ttl,
            config.cache.max_entries,
            || self.compute(profile, selections, context, &config),
        ))
    }

    /// Run one full computation, bypassing the cache
    fn compute(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        context: &AnalysisContext,
        config: &SelectionAnalysisConfig,
    ) -> SelectionAnalysisResult {
        let started = Instant::now();
        let thresholds = config.thresholds;

        // Pure analyzers, joined on worker threads; assembly order is the
        // canonical factor order regardless of completion order.
        let ((goal_alignment, intensity_match), (duration_fit, (recovery_respect, equipment))) =
            rayon::join(
                || {
                    rayon::join(
                        || self.goal_alignment.analyze(profile, selections, context, &thresholds),
                        || self.intensity_match.analyze(profile, selections, context, &thresholds),
                    )
                },
                || {
                    rayon::join(
                        || self.duration_fit.analyze(profile, selections, context, &thresholds),
                        || {
                            rayon::join(
                                || {
                                    self.recovery_respect
                                        .analyze(profile, selections, context, &thresholds)
                                },
                                || {
                                    self.equipment_optimization
                                        .analyze(profile, selections, context, &thresholds)
                                },
                            )
                        },
                    )
                },
            );

        let factors = FactorScores {
            goal_alignment,
            intensity_match,
            duration_fit,
            recovery_respect,
            equipment_optimization: equipment,
        };

        let overall_score = FactorKind::ALL
            .into_iter()
            .map(|kind| config.weights.get(kind) * factors.get(kind).score)
            .sum::<f64>()
            .clamp(0.0, 1.0);

        let insights: Vec<Insight> = FactorKind::ALL
            .into_iter()
            .filter_map(|kind| {
                select_insight(kind, factors.get(kind).score, profile, selections)
            })
            .collect();

        let ctx = EvaluationContext::new(profile, selections, &factors, overall_score);
        let suggestions = applicable_suggestions(&ctx, config.content.max_suggestions);
        let educational_content = applicable_education(
            &ctx,
            profile.fitness_level,
            config.content.max_educational_items,
        );

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(
            overall_score,
            elapsed_ms,
            insights = insights.len(),
            suggestions = suggestions.len(),
            "selection analysis complete"
        );

        SelectionAnalysisResult {
            overall_score,
            factors,
            insights,
            suggestions,
            educational_content,
            metadata: AnalysisMetadata {
                analysis_time_ms: elapsed_ms,
                factor_weights: config.weights,
                data_quality: data_quality(profile),
                version: ENGINE_VERSION.to_string(),
                timestamp: Utc::now(),
                analysis_id: Uuid::new_v4(),
            },
        }
    }

    /// Current configuration, by value
    #[must_use]
    pub fn config(&self) -> SelectionAnalysisConfig {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply a partial configuration update
    ///
    /// Sections merge independently; the merged configuration is validated
    /// before it replaces the live one, and a rejected update leaves the
    /// live configuration untouched.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the merged result fails validation.
    pub fn update_config(
        &self,
        update: &SelectionConfigUpdate,
    ) -> Result<(), SelectionAnalysisError> {
        let merged = self.current_config()?.merged_with(update);

        if let Err(error) = merged.validate() {
            warn!(%error, "rejected configuration update");
            return Err(error.into());
        }

        let mut guard = self.config.write().map_err(|_| {
            SelectionAnalysisError::AnalysisError("configuration lock poisoned".to_string())
        })?;
        *guard = merged;
        debug!("configuration update applied");
        Ok(())
    }

    /// Empty the result cache unconditionally
    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("analysis cache cleared");
    }

    /// Cache observability counters
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Sweep expired cache entries
    pub fn cleanup_expired_cache(&self) {
        self.cache.cleanup_expired();
    }

    fn current_config(&self) -> Result<SelectionAnalysisConfig, SelectionAnalysisError> {
        self.config
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| {
                SelectionAnalysisError::AnalysisError("configuration lock poisoned".to_string())
            })
    }
}

/// Estimated profile completeness in [0, 1]
///
/// A coarse fraction of populated profile sections; recorded in result
/// metadata so callers can judge how much signal the analysis had.
fn data_quality(profile: &UserProfile) -> f64 {
    let checks = [
        !profile.goals.is_empty(),
        !profile.basic_limitations.available_equipment.is_empty(),
        !profile.basic_limitations.available_locations.is_empty(),
        profile.enhanced_limitations.recovery_needs.is_some(),
        profile.enhanced_limitations.time_constraints.is_some(),
        profile.preferences.intensity_preference.is_some()
            || !profile.preferences.workout_style.is_empty(),
        profile.workout_history.total_workouts > 0
            || profile.workout_history.average_duration_minutes.is_some(),
        profile.age.is_some(),
    ];

    let populated = checks.iter().filter(|check| **check).count();
    populated as f64 / checks.len() as f64
}
