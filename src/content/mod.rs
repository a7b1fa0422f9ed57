// ABOUTME: Content registries for insights, suggestions, and educational material
// ABOUTME: Shared filter-sort-truncate pipeline over rule-tagged static templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Content selection
//!
//! All user-facing text is pre-authored. Three registries hold rule-tagged
//! templates: insights (direct lookup by score band and discriminator),
//! suggestions, and educational content (linear scans gated by condition
//! rule sets). The two scanned registries share one pipeline: filter by
//! predicate, stable-sort ascending by priority with impact
//! (high > medium > low) breaking ties, then registration order, truncate
//! to the caller's limit. Selection never returns null and never exceeds
//! the limit.

pub mod education;
pub mod insights;
pub mod suggestions;

pub use education::{applicable_education, education_by_category, low_score_education};
pub use insights::select_insight;
pub use suggestions::{applicable_suggestions, quick_fix_suggestions, suggestions_by_category};

use crate::conditions::{evaluate_all, ConditionRule, EvaluationContext};
use crate::models::{FactorKind, ImpactLevel};

/// Factor score below which a template counts as addressing a weak spot
pub const LOW_SCORE_THRESHOLD: f64 = 0.6;

/// A template that can run through the shared selection pipeline
pub(crate) trait RankedTemplate {
    fn priority(&self) -> u32;
    fn impact(&self) -> ImpactLevel;
    fn conditions(&self) -> &[ConditionRule];
}

/// Shared filter, sort, and truncate pipeline
///
/// The sort is stable, so templates tying on priority and impact keep their
/// registration order.
pub(crate) fn select_templates<'a, T: RankedTemplate>(
    templates: &'a [T],
    ctx: &EvaluationContext<'_>,
    max_items: usize,
    extra: impl Fn(&T) -> bool,
) -> Vec<&'a T> {
    let mut matched: Vec<&'a T> = templates
        .iter()
        .filter(|template| extra(template) && evaluate_all(template.conditions(), ctx))
        .collect();

    matched.sort_by(|a, b| {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| a.impact().rank().cmp(&b.impact().rank()))
    });
    matched.truncate(max_items);
    matched
}

/// Whether any factor referenced by the template's rules currently scores low
pub(crate) fn references_low_factor<T: RankedTemplate>(
    template: &T,
    ctx: &EvaluationContext<'_>,
) -> bool {
    template
        .conditions()
        .iter()
        .filter_map(|rule| FactorKind::from_key(&rule.source_field))
        .any(|kind| ctx.factor_score(kind) < LOW_SCORE_THRESHOLD)
}
