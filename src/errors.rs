// ABOUTME: Unified error taxonomy for the selection confidence engine
// ABOUTME: Separates recoverable data-quality conditions from programming defects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error types for selection analysis
//!
//! The engine is deliberately hard to fault: incomplete-but-well-typed input
//! is locally defaulted and surfaced through factor details and suggestions,
//! and malformed condition rules evaluate to `false` instead of raising.
//! The variants here cover the remaining genuine failure modes, which are
//! programming or configuration defects rather than data-quality issues.

use thiserror::Error;

/// Errors surfaced by the selection analysis engine
#[derive(Debug, Error)]
pub enum SelectionAnalysisError {
    /// Profile input failed a structural check the caller should have made
    #[error("invalid user profile: {0}")]
    InvalidUserProfile(String),

    /// Workout selection input failed a structural check
    #[error("invalid workout options: {0}")]
    InvalidWorkoutOptions(String),

    /// Internal analysis failure (programming defect, not data quality)
    #[error("analysis failed: {0}")]
    AnalysisError(String),

    /// Reserved for a future async extension; never produced today
    #[error("analysis timed out: {0}")]
    TimeoutError(String),

    /// Input was usable but too sparse to produce a meaningful result
    #[error("insufficient data quality: {0}")]
    DataQualityError(String),

    /// Configuration rejected by validation
    #[error(transparent)]
    Config(#[from] ConfigValidationError),
}

/// Validation failures for engine configuration
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    /// The five factor weights must sum to 1.0 within 1e-6
    #[error("factor weights must sum to 1.0 (got {0})")]
    WeightSum(f64),

    /// A single weight fell outside [0, 1]
    #[error("factor weight out of range: {name} = {value}")]
    WeightRange {
        /// Canonical factor key
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Status thresholds must be strictly decreasing and within (0, 1)
    #[error("status thresholds must satisfy excellent > good > warning within (0, 1)")]
    ThresholdOrdering,

    /// A limit field must be non-zero
    #[error("invalid limit: {0} must be > 0")]
    InvalidLimit(&'static str),

    /// An environment override could not be parsed
    #[error("invalid environment override {var}: {value}")]
    InvalidEnvOverride {
        /// Environment variable name
        var: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}
