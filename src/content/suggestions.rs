// ABOUTME: Suggestion template registry with rule-gated, priority-ranked entries
// ABOUTME: Query shapes: applicable, category-scoped, and quick-fix-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Suggestion selection
//!
//! Suggestions are authored once, gated by condition rule sets, and selected
//! through the shared pipeline in the parent module. Results are sorted by
//! priority (ascending), then impact (high first), then registration order,
//! and truncated to the caller's limit.

use std::sync::OnceLock;

use crate::conditions::{ConditionOperator, ConditionRule, EvaluationContext};
use crate::models::{FactorKind, ImpactLevel, Suggestion};

use super::{select_templates, RankedTemplate};

/// One authored suggestion
#[derive(Debug, Clone)]
pub struct SuggestionTemplate {
    /// Stable id
    pub id: &'static str,
    /// Category the suggestion belongs to
    pub category: &'static str,
    /// Short title
    pub title: &'static str,
    /// What to change and why
    pub description: &'static str,
    /// Rank; lower surfaces first
    pub priority: u32,
    /// Relative impact of applying the change
    pub impact: ImpactLevel,
    /// Applicable without replanning the workout
    pub quick_fix: bool,
    /// Estimated confidence score increase if applied
    pub estimated_score_increase: f64,
    /// Gate: all rules must hold
    pub conditions: Vec<ConditionRule>,
}

impl RankedTemplate for SuggestionTemplate {
    fn priority(&self) -> u32 {
        self.priority
    }

    fn impact(&self) -> ImpactLevel {
        self.impact
    }

    fn conditions(&self) -> &[ConditionRule] {
        &self.conditions
    }
}

impl SuggestionTemplate {
    fn to_suggestion(&self) -> Suggestion {
        Suggestion {
            id: self.id.to_string(),
            category: self.category.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
            impact: self.impact,
            quick_fix: self.quick_fix,
            estimated_score_increase: self.estimated_score_increase,
        }
    }
}

/// The authored suggestion registry, built once
pub fn registry() -> &'static [SuggestionTemplate] {
    static REGISTRY: OnceLock<Vec<SuggestionTemplate>> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

fn build_registry() -> Vec<SuggestionTemplate> {
    use ConditionOperator as Op;
    use FactorKind as F;

    vec![
        SuggestionTemplate {
            id: "rebalance-selections",
            category: "general",
            title: "Rebalance your selections",
            description: "Several selections pull against your profile at once. Start from the suggested defaults and change one thing at a time.",
            priority: 0,
            impact: ImpactLevel::High,
            quick_fix: false,
            estimated_score_increase: 0.25,
            conditions: vec![ConditionRule::path(
                "overallScore",
                Op::Lt,
                serde_json::Value::from(0.5),
            )],
        },
        SuggestionTemplate {
            id: "lower-energy-level",
            category: "intensity",
            title: "Lower the energy level",
            description: "The selected intensity outruns your current level. Dropping it one or two notches keeps form intact and still drives progress.",
            priority: 1,
            impact: ImpactLevel::High,
            quick_fix: true,
            estimated_score_increase: 0.15,
            conditions: vec![ConditionRule::factor(F::IntensityMatch, Op::Lt, 0.5)],
        },
        SuggestionTemplate {
            id: "realign-focus-with-goals",
            category: "goals",
            title: "Pick a focus that serves your goals",
            description: "The selected focus and your stated goals point in different directions. Swap the focus, or update your goals if they've changed.",
            priority: 1,
            impact: ImpactLevel::High,
            quick_fix: false,
            estimated_score_increase: 0.2,
            conditions: vec![ConditionRule::factor(F::GoalAlignment, Op::Lt, 0.5)],
        },
        SuggestionTemplate {
            id: "plan-a-rest-day",
            category: "recovery",
            title: "Plan a rest day",
            description: "Your recent load and recovery needs point toward rest before the next hard session.",
            priority: 1,
            impact: ImpactLevel::High,
            quick_fix: false,
            estimated_score_increase: 0.18,
            conditions: vec![ConditionRule::factor(F::RecoveryRespect, Op::Lt, 0.5)],
        },
        SuggestionTemplate {
            id: "shorten-the-session",
            category: "duration",
            title: "Shorten the session",
            description: "A shorter session you finish strong beats a long one you limp through. Trim 10-15 minutes.",
            priority: 2,
            impact: ImpactLevel::High,
            quick_fix: true,
            estimated_score_increase: 0.12,
            conditions: vec![ConditionRule::factor(F::DurationFit, Op::Lt, 0.55)],
        },
        SuggestionTemplate {
            id: "swap-unavailable-equipment",
            category: "equipment",
            title: "Swap in equipment you have",
            description: "Part of the selection needs gear that isn't on your list. Substituting before you start keeps the session flowing.",
            priority: 3,
            impact: ImpactLevel::High,
            quick_fix: true,
            estimated_score_increase: 0.1,
            conditions: vec![ConditionRule::factor(F::EquipmentOptimization, Op::Lt, 0.55)],
        },
        SuggestionTemplate {
            id: "raise-energy-level",
            category: "intensity",
            title: "Push a little harder",
            description: "The selected energy is below what you can productively handle. One notch up gets more from the same time.",
            priority: 4,
            impact: ImpactLevel::Medium,
            quick_fix: true,
            estimated_score_increase: 0.05,
            conditions: vec![
                ConditionRule::factor(F::IntensityMatch, Op::Lt, 0.7),
                ConditionRule::path(
                    "selections.energy.rating",
                    ConditionOperator::Lte,
                    serde_json::Value::from(3),
                ),
            ],
        },
        SuggestionTemplate {
            id: "match-duration-to-schedule",
            category: "duration",
            title: "Fit the session to your schedule",
            description: "Pick a duration that fits the time you reliably have; consistency beats occasional long sessions.",
            priority: 5,
            impact: ImpactLevel::Medium,
            quick_fix: false,
            estimated_score_increase: 0.08,
            conditions: vec![ConditionRule::factor(F::DurationFit, Op::Lt, 0.7)],
        },
        SuggestionTemplate {
            id: "protect-sleep",
            category: "recovery",
            title: "Protect your sleep",
            description: "Recovery quality tracks sleep more than anything else. Guard the night after a hard session.",
            priority: 6,
            impact: ImpactLevel::Low,
            quick_fix: false,
            estimated_score_increase: 0.05,
            conditions: vec![ConditionRule::factor(F::RecoveryRespect, Op::Lt, 0.65)],
        },
        SuggestionTemplate {
            id: "add-equipment-variety",
            category: "equipment",
            title: "Add some equipment variety",
            description: "Rotating in a second equipment type widens the exercise pool and spreads joint stress.",
            priority: 7,
            impact: ImpactLevel::Low,
            quick_fix: false,
            estimated_score_increase: 0.04,
            conditions: vec![
                ConditionRule::factor(F::EquipmentOptimization, Op::Gte, 0.55),
                ConditionRule::factor(F::EquipmentOptimization, Op::Lt, 0.75),
            ],
        },
        SuggestionTemplate {
            id: "polish-the-details",
            category: "general",
            title: "Small tweaks available",
            description: "The selections are workable; the details panel shows where a small change would help.",
            priority: 8,
            impact: ImpactLevel::Low,
            quick_fix: false,
            estimated_score_increase: 0.05,
            conditions: vec![
                ConditionRule::path("overallScore", Op::Gte, serde_json::Value::from(0.5)),
                ConditionRule::path("overallScore", Op::Lt, serde_json::Value::from(0.75)),
            ],
        },
    ]
}

/// All applicable suggestions, ranked and truncated
#[must_use]
pub fn applicable_suggestions(ctx: &EvaluationContext<'_>, max_items: usize) -> Vec<Suggestion> {
    select_templates(registry(), ctx, max_items, |_| true)
        .into_iter()
        .map(SuggestionTemplate::to_suggestion)
        .collect()
}

/// Applicable suggestions within one category
#[must_use]
pub fn suggestions_by_category(
    ctx: &EvaluationContext<'_>,
    category: &str,
    max_items: usize,
) -> Vec<Suggestion> {
    select_templates(registry(), ctx, max_items, |template| {
        template.category == category
    })
    .into_iter()
    .map(SuggestionTemplate::to_suggestion)
    .collect()
}

/// Applicable quick-fix suggestions only
#[must_use]
pub fn quick_fix_suggestions(ctx: &EvaluationContext<'_>, max_items: usize) -> Vec<Suggestion> {
    select_templates(registry(), ctx, max_items, |template| template.quick_fix)
        .into_iter()
        .map(SuggestionTemplate::to_suggestion)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::models::{FactorScore, FactorScores, ScoreStatus, UserProfile, WorkoutSelections};

    fn factor(score: f64) -> FactorScore {
        FactorScore {
            score,
            status: ScoreStatus::Good,
            reasoning: String::new(),
            impact: String::new(),
            details: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    fn scores(goal: f64, intensity: f64) -> FactorScores {
        FactorScores {
            goal_alignment: factor(goal),
            intensity_match: factor(intensity),
            duration_fit: factor(0.8),
            recovery_respect: factor(0.8),
            equipment_optimization: factor(0.8),
        }
    }

    #[test]
    fn low_intensity_match_surfaces_quick_fix() {
        let profile = UserProfile::default();
        let selections = WorkoutSelections::default();
        let fs = scores(0.8, 0.3);
        let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.7);

        let fixes = quick_fix_suggestions(&ctx, 5);
        assert!(fixes
            .iter()
            .any(|s| s.category == "intensity" && s.quick_fix));
    }

    #[test]
    fn results_are_bounded_and_sorted() {
        let profile = UserProfile::default();
        let selections = WorkoutSelections::default();
        let fs = scores(0.3, 0.3);
        let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.45);

        let all = applicable_suggestions(&ctx, 3);
        assert!(all.len() <= 3);
        for pair in all.windows(2) {
            let ordered = pair[0].priority < pair[1].priority
                || (pair[0].priority == pair[1].priority
                    && pair[0].impact.rank() <= pair[1].impact.rank());
            assert!(ordered, "suggestions out of order");
        }
    }

    #[test]
    fn category_query_scopes_results() {
        let profile = UserProfile::default();
        let selections = WorkoutSelections::default();
        let fs = scores(0.3, 0.3);
        let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.45);

        let recovery = suggestions_by_category(&ctx, "recovery", 5);
        assert!(recovery.iter().all(|s| s.category == "recovery"));
    }

    #[test]
    fn healthy_scores_yield_few_or_no_suggestions() {
        let profile = UserProfile::default();
        let selections = WorkoutSelections::default();
        let fs = scores(0.9, 0.9);
        let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.9);

        let all = applicable_suggestions(&ctx, 5);
        assert!(all.is_empty());
    }
}
