// ABOUTME: Configuration for the selection confidence engine
// ABOUTME: Factor weights, status thresholds, cache and content limits with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration
//!
//! The central config is the sole source of truth for aggregation math; the
//! per-analyzer `weight()` accessors are descriptive metadata populated from
//! the same defaults. Updates are partial and deep-merged: supplying only
//! `weights` leaves `thresholds` (and everything else) untouched. A merged
//! config is validated before it replaces the live one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigValidationError;
use crate::models::{FactorKind, ScoreStatus};

/// Tolerance for the weight-sum invariant
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the five factors in the overall score
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorWeights {
    /// Weight of goal alignment
    pub goal_alignment: f64,
    /// Weight of intensity match
    pub intensity_match: f64,
    /// Weight of duration fit
    pub duration_fit: f64,
    /// Weight of recovery respect
    pub recovery_respect: f64,
    /// Weight of equipment optimization
    pub equipment_optimization: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            goal_alignment: 0.25,
            intensity_match: 0.25,
            duration_fit: 0.20,
            recovery_respect: 0.15,
            equipment_optimization: 0.15,
        }
    }
}

impl FactorWeights {
    /// Weight of one factor
    #[must_use]
    pub const fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::GoalAlignment => self.goal_alignment,
            FactorKind::IntensityMatch => self.intensity_match,
            FactorKind::DurationFit => self.duration_fit,
            FactorKind::RecoveryRespect => self.recovery_respect,
            FactorKind::EquipmentOptimization => self.equipment_optimization,
        }
    }

    /// Sum of all five weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        FactorKind::ALL.into_iter().map(|kind| self.get(kind)).sum()
    }
}

/// Thresholds mapping a score to a qualitative status
///
/// Must be strictly decreasing; scores below `warning` are poor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusThresholds {
    /// Minimum score for excellent
    pub excellent: f64,
    /// Minimum score for good
    pub good: f64,
    /// Minimum score for warning
    pub warning: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            excellent: 0.85,
            good: 0.70,
            warning: 0.50,
        }
    }
}

impl StatusThresholds {
    /// Status of a score under these thresholds
    #[must_use]
    pub fn status_for(&self, score: f64) -> ScoreStatus {
        if score >= self.excellent {
            ScoreStatus::Excellent
        } else if score >= self.good {
            ScoreStatus::Good
        } else if score >= self.warning {
            ScoreStatus::Warning
        } else {
            ScoreStatus::Poor
        }
    }
}

/// Result cache settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSettings {
    /// Whether results are cached at all
    pub enabled: bool,
    /// Entry time-to-live in seconds
    pub ttl_seconds: u64,
    /// Maximum entries held before oldest are evicted
    pub max_entries: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: 300,
            max_entries: 256,
        }
    }
}

/// Limits on selected content
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLimits {
    /// Maximum suggestions returned per analysis
    pub max_suggestions: usize,
    /// Maximum educational items returned per analysis
    pub max_educational_items: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            max_educational_items: 3,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionAnalysisConfig {
    /// Factor weights used for aggregation
    pub weights: FactorWeights,
    /// Score-to-status thresholds
    pub thresholds: StatusThresholds,
    /// Result cache settings
    pub cache: CacheSettings,
    /// Content selection limits
    pub content: ContentLimits,
}

impl SelectionAnalysisConfig {
    /// Load defaults with environment overrides applied
    ///
    /// Recognized variables: `CONFIDENCE_CACHE_TTL_SECONDS`,
    /// `CONFIDENCE_CACHE_ENABLED`, `CONFIDENCE_MAX_SUGGESTIONS`,
    /// `CONFIDENCE_MAX_EDUCATIONAL_ITEMS`.
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or the resulting
    /// configuration fails validation.
    pub fn from_environment() -> Result<Self, ConfigValidationError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("CONFIDENCE_CACHE_TTL_SECONDS") {
            config.cache.ttl_seconds =
                val.parse()
                    .map_err(|_| ConfigValidationError::InvalidEnvOverride {
                        var: "CONFIDENCE_CACHE_TTL_SECONDS",
                        value: val,
                    })?;
        }

        if let Ok(val) = std::env::var("CONFIDENCE_CACHE_ENABLED") {
            config.cache.enabled =
                val.parse()
                    .map_err(|_| ConfigValidationError::InvalidEnvOverride {
                        var: "CONFIDENCE_CACHE_ENABLED",
                        value: val,
                    })?;
        }

        if let Ok(val) = std::env::var("CONFIDENCE_MAX_SUGGESTIONS") {
            config.content.max_suggestions =
                val.parse()
                    .map_err(|_| ConfigValidationError::InvalidEnvOverride {
                        var: "CONFIDENCE_MAX_SUGGESTIONS",
                        value: val,
                    })?;
        }

        if let Ok(val) = std::env::var("CONFIDENCE_MAX_EDUCATIONAL_ITEMS") {
            config.content.max_educational_items =
                val.parse()
                    .map_err(|_| ConfigValidationError::InvalidEnvOverride {
                        var: "CONFIDENCE_MAX_EDUCATIONAL_ITEMS",
                        value: val,
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate weights, thresholds, and limits
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for kind in FactorKind::ALL {
            let value = self.weights.get(kind);
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::WeightRange {
                    name: kind.as_key(),
                    value,
                });
            }
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigValidationError::WeightSum(sum));
        }

        let t = &self.thresholds;
        let ordered = t.excellent > t.good && t.good > t.warning && t.warning > 0.0;
        if !ordered || t.excellent > 1.0 {
            return Err(ConfigValidationError::ThresholdOrdering);
        }

        if self.cache.ttl_seconds == 0 {
            return Err(ConfigValidationError::InvalidLimit("cache.ttl_seconds"));
        }
        if self.cache.max_entries == 0 {
            return Err(ConfigValidationError::InvalidLimit("cache.max_entries"));
        }
        if self.content.max_suggestions == 0 {
            return Err(ConfigValidationError::InvalidLimit(
                "content.max_suggestions",
            ));
        }
        if self.content.max_educational_items == 0 {
            return Err(ConfigValidationError::InvalidLimit(
                "content.max_educational_items",
            ));
        }

        Ok(())
    }

    /// Apply a partial update, returning the merged configuration
    ///
    /// Sections merge independently: an update that carries only weights
    /// leaves thresholds, cache, and content untouched, and vice versa.
    /// The caller is expected to validate the merged result before adopting
    /// it.
    #[must_use]
    pub fn merged_with(&self, update: &SelectionConfigUpdate) -> Self {
        let mut merged = self.clone();

        if let Some(weights) = &update.weights {
            weights.apply_to(&mut merged.weights);
        }
        if let Some(thresholds) = &update.thresholds {
            thresholds.apply_to(&mut merged.thresholds);
        }
        if let Some(cache) = &update.cache {
            cache.apply_to(&mut merged.cache);
        }
        if let Some(content) = &update.content {
            content.apply_to(&mut merged.content);
        }

        debug!(?update, "merged configuration update");
        merged
    }
}

// ============================================================================
// Partial updates
// ============================================================================

/// Partial weight update; absent fields keep their current values
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightsUpdate {
    /// New goal alignment weight
    pub goal_alignment: Option<f64>,
    /// New intensity match weight
    pub intensity_match: Option<f64>,
    /// New duration fit weight
    pub duration_fit: Option<f64>,
    /// New recovery respect weight
    pub recovery_respect: Option<f64>,
    /// New equipment optimization weight
    pub equipment_optimization: Option<f64>,
}

impl WeightsUpdate {
    fn apply_to(&self, weights: &mut FactorWeights) {
        if let Some(v) = self.goal_alignment {
            weights.goal_alignment = v;
        }
        if let Some(v) = self.intensity_match {
            weights.intensity_match = v;
        }
        if let Some(v) = self.duration_fit {
            weights.duration_fit = v;
        }
        if let Some(v) = self.recovery_respect {
            weights.recovery_respect = v;
        }
        if let Some(v) = self.equipment_optimization {
            weights.equipment_optimization = v;
        }
    }
}

/// Partial threshold update
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdsUpdate {
    /// New excellent threshold
    pub excellent: Option<f64>,
    /// New good threshold
    pub good: Option<f64>,
    /// New warning threshold
    pub warning: Option<f64>,
}

impl ThresholdsUpdate {
    fn apply_to(&self, thresholds: &mut StatusThresholds) {
        if let Some(v) = self.excellent {
            thresholds.excellent = v;
        }
        if let Some(v) = self.good {
            thresholds.good = v;
        }
        if let Some(v) = self.warning {
            thresholds.warning = v;
        }
    }
}

/// Partial cache settings update
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSettingsUpdate {
    /// Enable or disable caching
    pub enabled: Option<bool>,
    /// New TTL in seconds
    pub ttl_seconds: Option<u64>,
    /// New entry cap
    pub max_entries: Option<usize>,
}

impl CacheSettingsUpdate {
    fn apply_to(&self, cache: &mut CacheSettings) {
        if let Some(v) = self.enabled {
            cache.enabled = v;
        }
        if let Some(v) = self.ttl_seconds {
            cache.ttl_seconds = v;
        }
        if let Some(v) = self.max_entries {
            cache.max_entries = v;
        }
    }
}

/// Partial content limits update
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLimitsUpdate {
    /// New suggestion cap
    pub max_suggestions: Option<usize>,
    /// New educational item cap
    pub max_educational_items: Option<usize>,
}

impl ContentLimitsUpdate {
    fn apply_to(&self, content: &mut ContentLimits) {
        if let Some(v) = self.max_suggestions {
            content.max_suggestions = v;
        }
        if let Some(v) = self.max_educational_items {
            content.max_educational_items = v;
        }
    }
}

/// Partial configuration update; sections merge independently
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfigUpdate {
    /// Weight changes, if any
    pub weights: Option<WeightsUpdate>,
    /// Threshold changes, if any
    pub thresholds: Option<ThresholdsUpdate>,
    /// Cache changes, if any
    pub cache: Option<CacheSettingsUpdate>,
    /// Content limit changes, if any
    pub content: Option<ContentLimitsUpdate>,
}
