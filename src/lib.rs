// ABOUTME: Library entry point for the Pierre selection confidence engine
// ABOUTME: Scores workout selections against user profiles and selects explanatory content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Confidence Engine
//!
//! Analyzes how well a user's ad-hoc workout selections (focus, energy,
//! duration, equipment) fit their stored fitness profile. Five weighted
//! factor analyzers each score one dimension of the fit; the engine blends
//! them into an overall confidence score and selects pre-authored insights,
//! suggestions, and educational content through a declarative condition
//! engine.
//!
//! ## Architecture
//!
//! - **Analyzers**: pure per-factor scoring (`analyzers`)
//! - **Conditions**: declarative rule evaluation over analysis context
//!   (`conditions`)
//! - **Content**: rule-tagged insight/suggestion/education registries
//!   (`content`)
//! - **Engine**: weighted aggregation, metadata, and result caching
//!   (`engine`)
//! - **Service**: the composition-root facade with feature gating
//!   (`service`)
//!
//! ## Example
//!
//! ```rust
//! use pierre_confidence::models::{AnalysisContext, UserProfile, WorkoutSelections};
//! use pierre_confidence::service::SelectionIntelligenceService;
//!
//! let service = SelectionIntelligenceService::new_test_instance();
//! let profile = UserProfile::default();
//! let selections = WorkoutSelections::default();
//! let context = AnalysisContext::default();
//!
//! if let Some(result) = service
//!     .analyze_selections(&profile, &selections, &context)
//!     .unwrap()
//! {
//!     println!("confidence: {:.2}", result.overall_score);
//! }
//! ```

/// Five weighted factor analyzers scoring selection fit
pub mod analyzers;
/// In-memory TTL cache for analysis results
pub mod cache;
/// Keyword-to-category classification tables
pub mod classification;
/// Engine configuration: factor weights, thresholds, limits
pub mod config;
/// Declarative condition evaluation over analysis context
pub mod conditions;
/// Insight, suggestion, and educational content registries
pub mod content;
/// Aggregation engine combining analyzers, content, and cache
pub mod engine;
/// Unified error taxonomy
pub mod errors;
/// Data model: profiles, selections, scores, results
pub mod models;
/// Composition-root facade and feature gate boundary
pub mod service;

pub use config::{FactorWeights, SelectionAnalysisConfig, SelectionConfigUpdate};
pub use engine::SelectionAnalysisEngine;
pub use errors::{ConfigValidationError, SelectionAnalysisError};
pub use models::{
    AnalysisContext, FactorKind, FactorScore, FactorScores, QuickAnalysis, ScoreStatus,
    SelectionAnalysisResult, UserProfile, WorkoutSelections,
};
pub use service::{AnalysisGate, SelectionIntelligenceService};

/// Version tag recorded in analysis result metadata
pub const ENGINE_VERSION: &str = "0.1.0";
