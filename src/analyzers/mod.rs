// ABOUTME: Factor analyzer trait and sub-criterion blending shared by the five analyzers
// ABOUTME: Each analyzer is a pure function from inputs to one FactorScore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Factor analyzers
//!
//! Each of the five analysis dimensions is scored by one analyzer. An
//! analyzer decomposes its dimension into a handful of weighted
//! sub-criteria (internal weights sum to 1), blends them, clamps to [0, 1],
//! and derives status and prose from the result. Analyzers are pure and
//! self-defaulting: sparse profile data lowers confidence through neutral
//! sub-scores and explanatory details, never through errors.
//!
//! The `weight()` accessor is descriptive metadata for UI surfaces; the
//! aggregation math always uses the central engine configuration.

mod duration_fit;
mod equipment_optimization;
mod goal_alignment;
mod intensity_match;
mod recovery_respect;

pub use duration_fit::DurationFitAnalyzer;
pub use equipment_optimization::EquipmentOptimizationAnalyzer;
pub use goal_alignment::GoalAlignmentAnalyzer;
pub use intensity_match::IntensityMatchAnalyzer;
pub use recovery_respect::RecoveryRespectAnalyzer;

use serde::Serialize;

use crate::config::StatusThresholds;
use crate::models::{AnalysisContext, FactorKind, FactorScore, UserProfile, WorkoutSelections};

/// Contract shared by the five factor analyzers
pub trait SelectionFactorAnalyzer: Send + Sync {
    /// Which factor this analyzer scores
    fn kind(&self) -> FactorKind;

    /// Human-readable analyzer name
    fn name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// One-line description of what the analyzer measures
    fn description(&self) -> &'static str;

    /// Descriptive default weight; aggregation uses the engine config
    fn weight(&self) -> f64;

    /// Score the factor for one analysis; never fails
    fn analyze(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        context: &AnalysisContext,
        thresholds: &StatusThresholds,
    ) -> FactorScore;
}

/// Descriptive analyzer metadata for UI and documentation surfaces
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerInfo {
    /// Factor scored
    pub kind: FactorKind,
    /// Analyzer name
    pub name: &'static str,
    /// What the analyzer measures
    pub description: &'static str,
    /// Descriptive default weight
    pub weight: f64,
}

/// Metadata for all five analyzers in canonical order
#[must_use]
pub fn analyzer_catalog() -> Vec<AnalyzerInfo> {
    let analyzers: [&dyn SelectionFactorAnalyzer; 5] = [
        &GoalAlignmentAnalyzer,
        &IntensityMatchAnalyzer,
        &DurationFitAnalyzer,
        &RecoveryRespectAnalyzer,
        &EquipmentOptimizationAnalyzer,
    ];

    analyzers
        .into_iter()
        .map(|analyzer| AnalyzerInfo {
            kind: analyzer.kind(),
            name: analyzer.name(),
            description: analyzer.description(),
            weight: analyzer.weight(),
        })
        .collect()
}

// ============================================================================
// Sub-criterion blending
// ============================================================================

/// One weighted sub-criterion contribution
#[derive(Debug, Clone)]
pub(crate) struct CriterionScore {
    weight: f64,
    score: f64,
    details: Vec<String>,
    suggestions: Vec<String>,
}

impl CriterionScore {
    /// Sub-criterion with a computed score
    pub(crate) fn new(weight: f64, score: f64) -> Self {
        Self {
            weight,
            score: score.clamp(0.0, 1.0),
            details: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Neutral 0.5 sub-criterion for missing data, with an explanation
    pub(crate) fn neutral(weight: f64, detail: impl Into<String>) -> Self {
        Self::new(weight, 0.5).detail(detail)
    }

    /// Attach an observation
    pub(crate) fn detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Attach an improvement suggestion
    pub(crate) fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// Blend sub-criteria into a clamped weighted score plus collected prose
///
/// Details and suggestions keep sub-criterion order so the output reads in
/// the same sequence the dimension is documented in.
pub(crate) fn blend(parts: Vec<CriterionScore>) -> (f64, Vec<String>, Vec<String>) {
    let mut score = 0.0;
    let mut details = Vec::new();
    let mut suggestions = Vec::new();

    for part in parts {
        score += part.weight * part.score;
        details.extend(part.details);
        suggestions.extend(part.suggestions);
    }

    (score.clamp(0.0, 1.0), details, suggestions)
}

/// Assemble a [`FactorScore`] from blended parts and band prose
pub(crate) fn finalize(
    score: f64,
    thresholds: &StatusThresholds,
    reasoning: String,
    impact: String,
    details: Vec<String>,
    suggestions: Vec<String>,
) -> FactorScore {
    FactorScore {
        score,
        status: thresholds.status_for(score),
        reasoning,
        impact,
        details,
        suggestions,
    }
}
