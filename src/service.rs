// ABOUTME: Composition-root facade for selection analysis with feature gating
// ABOUTME: Explicit service object; no ambient singleton, test instances are isolated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Selection intelligence service
//!
//! The application's composition root constructs one
//! [`SelectionIntelligenceService`] and passes it by reference to consumers.
//! There is deliberately no process-wide singleton and no static reset:
//! tests build isolated instances with [`new_test_instance`] and throw them
//! away, so they stay independent and parallel-safe.
//!
//! The decision whether analysis runs at all belongs to an external
//! feature-flag collaborator, reached through the [`AnalysisGate`] trait.
//! When the gate declines, callers receive `Ok(None)` and degrade to "no
//! analysis" without blocking the surrounding workflow.
//!
//! [`new_test_instance`]: SelectionIntelligenceService::new_test_instance

use tracing::debug;

use crate::conditions::EvaluationContext;
use crate::config::{SelectionAnalysisConfig, SelectionConfigUpdate};
use crate::content::{low_score_education, quick_fix_suggestions, suggestions_by_category};
use crate::engine::SelectionAnalysisEngine;
use crate::errors::SelectionAnalysisError;
use crate::models::{
    AnalysisContext, EducationalContent, QuickAnalysis, ScoreStatus, SelectionAnalysisResult,
    Suggestion, UserProfile, WorkoutSelections,
};

/// Boundary to the external feature-flag collaborator
pub trait AnalysisGate: Send + Sync {
    /// Whether selection analysis should run for this request
    fn analysis_enabled(&self, profile: &UserProfile, context: &AnalysisContext) -> bool;
}

/// Default gate: analysis always runs
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysEnabled;

impl AnalysisGate for AlwaysEnabled {
    fn analysis_enabled(&self, _profile: &UserProfile, _context: &AnalysisContext) -> bool {
        true
    }
}

/// Facade over the analysis engine, composed once at application startup
pub struct SelectionIntelligenceService {
    engine: SelectionAnalysisEngine,
    gate: Box<dyn AnalysisGate>,
}

impl SelectionIntelligenceService {
    /// Build a service with a validated configuration and the default gate
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation fails.
    pub fn new(config: SelectionAnalysisConfig) -> Result<Self, SelectionAnalysisError> {
        Ok(Self {
            engine: SelectionAnalysisEngine::new(config)?,
            gate: Box::new(AlwaysEnabled),
        })
    }

    /// Build a service with an external feature gate
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation fails.
    pub fn with_gate(
        config: SelectionAnalysisConfig,
        gate: Box<dyn AnalysisGate>,
    ) -> Result<Self, SelectionAnalysisError> {
        Ok(Self {
            engine: SelectionAnalysisEngine::new(config)?,
            gate,
        })
    }

    /// Isolated instance for tests: default configuration, gate always open
    #[must_use]
    pub fn new_test_instance() -> Self {
        Self {
            engine: SelectionAnalysisEngine::with_defaults(),
            gate: Box::new(AlwaysEnabled),
        }
    }

    /// Analyze selections, or `None` when the feature gate declines
    ///
    /// # Errors
    ///
    /// Propagates engine errors; gate refusal is not an error.
    pub fn analyze_selections(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        context: &AnalysisContext,
    ) -> Result<Option<SelectionAnalysisResult>, SelectionAnalysisError> {
        if !self.gate.analysis_enabled(profile, context) {
            debug!("selection analysis disabled by feature gate");
            return Ok(None);
        }

        self.engine
            .analyze_selections(profile, selections, context)
            .map(Some)
    }

    /// Condensed projection of the same analysis
    ///
    /// # Errors
    ///
    /// Propagates engine errors; gate refusal is not an error.
    pub fn quick_analysis(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        context: &AnalysisContext,
    ) -> Result<Option<QuickAnalysis>, SelectionAnalysisError> {
        let Some(result) = self.analyze_selections(profile, selections, context)? else {
            return Ok(None);
        };

        let status = self.engine.config().thresholds.status_for(result.overall_score);
        Ok(Some(QuickAnalysis {
            score: result.overall_score,
            status,
            message: quick_message(status),
        }))
    }

    /// Quick-fix suggestions for the current selections
    ///
    /// # Errors
    ///
    /// Propagates engine errors; an empty list is returned when the gate
    /// declines.
    pub fn quick_fix_suggestions(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        context: &AnalysisContext,
        max_items: usize,
    ) -> Result<Vec<Suggestion>, SelectionAnalysisError> {
        let Some(result) = self.analyze_selections(profile, selections, context)? else {
            return Ok(Vec::new());
        };

        let ctx =
            EvaluationContext::new(profile, selections, &result.factors, result.overall_score);
        Ok(quick_fix_suggestions(&ctx, max_items))
    }

    /// Category-scoped suggestions for the current selections
    ///
    /// # Errors
    ///
    /// Propagates engine errors; an empty list is returned when the gate
    /// declines.
    pub fn suggestions_by_category(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        context: &AnalysisContext,
        category: &str,
        max_items: usize,
    ) -> Result<Vec<Suggestion>, SelectionAnalysisError> {
        let Some(result) = self.analyze_selections(profile, selections, context)? else {
            return Ok(Vec::new());
        };

        let ctx =
            EvaluationContext::new(profile, selections, &result.factors, result.overall_score);
        Ok(suggestions_by_category(&ctx, category, max_items))
    }

    /// Educational content addressing currently weak factors
    ///
    /// # Errors
    ///
    /// Propagates engine errors; an empty list is returned when the gate
    /// declines.
    pub fn remedial_education(
        &self,
        profile: &UserProfile,
        selections: &WorkoutSelections,
        context: &AnalysisContext,
        max_items: usize,
    ) -> Result<Vec<EducationalContent>, SelectionAnalysisError> {
        let Some(result) = self.analyze_selections(profile, selections, context)? else {
            return Ok(Vec::new());
        };

        let ctx =
            EvaluationContext::new(profile, selections, &result.factors, result.overall_score);
        Ok(low_score_education(&ctx, profile.fitness_level, max_items))
    }

    /// Current configuration, by value
    #[must_use]
    pub fn config(&self) -> SelectionAnalysisConfig {
        self.engine.config()
    }

    /// Apply a partial configuration update
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the merged result fails validation.
    pub fn update_config(
        &self,
        update: &SelectionConfigUpdate,
    ) -> Result<(), SelectionAnalysisError> {
        self.engine.update_config(update)
    }

    /// Empty the result cache unconditionally
    pub fn clear_cache(&self) {
        self.engine.clear_cache();
    }

    /// Direct access to the engine for advanced composition
    #[must_use]
    pub const fn engine(&self) -> &SelectionAnalysisEngine {
        &self.engine
    }
}

fn quick_message(status: ScoreStatus) -> String {
    match status {
        ScoreStatus::Excellent => "Great selections; this session fits you well.".to_string(),
        ScoreStatus::Good => "Solid selections with minor room to improve.".to_string(),
        ScoreStatus::Warning => {
            "Workable selections, but a couple of changes would help.".to_string()
        }
        ScoreStatus::Poor => {
            "These selections fight your profile; see the suggestions.".to_string()
        }
    }
}
