// ABOUTME: Educational content registry with audience filtering and rule gating
// ABOUTME: Query shapes: applicable, category-scoped, and low-score-scoped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Educational content selection
//!
//! Longer-form material selected the same way suggestions are, with one
//! extra gate: the template's target audience must include the user's
//! fitness level. The low-score query additionally requires that at least
//! one factor referenced by the template's rules currently scores below the
//! low-score threshold, which keeps the material tied to an actual weak
//! spot.

use std::sync::OnceLock;

use crate::conditions::{ConditionOperator, ConditionRule, EvaluationContext};
use crate::models::{Audience, EducationalContent, FactorKind, FitnessLevel, ImpactLevel};

use super::{references_low_factor, select_templates, RankedTemplate};

/// One authored educational entry
#[derive(Debug, Clone)]
pub struct EducationalTemplate {
    /// Stable id
    pub id: &'static str,
    /// Category the material belongs to
    pub category: &'static str,
    /// Short title
    pub title: &'static str,
    /// Body text
    pub body: &'static str,
    /// Rank; lower surfaces first
    pub priority: u32,
    /// Relative value of reading this now
    pub impact: ImpactLevel,
    /// Audience the material is written for
    pub target_audience: Audience,
    /// Approximate reading time
    pub reading_time_minutes: u32,
    /// Gate: all rules must hold
    pub conditions: Vec<ConditionRule>,
}

impl RankedTemplate for EducationalTemplate {
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

impl EducationalTemplate {
    fn to_content(&self) -> EducationalContent {
        EducationalContent {
            id: self.id.to_string(),
            category: self.category.to_string(),
            title: self.title.to_string(),
            body: self.body.to_string(),
            priority: self.priority,
            impact: self.impact,
            target_audience: self.target_audience,
            reading_time_minutes: self.reading_time_minutes,
        }
    }
}

/// The authored educational registry, built once
pub fn registry() -> &'static [EducationalTemplate] {
    static REGISTRY: OnceLock<Vec<EducationalTemplate>> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

fn build_registry() -> Vec<EducationalTemplate> {
    use ConditionOperator as Op;
    use FactorKind as F;

    vec![
        EducationalTemplate {
            id: "matching-workouts-to-goals",
            category: "goals",
            title: "Matching workouts to goals",
            body: "Every goal has workouts that serve it directly and workouts that only feel productive. Weight loss responds to sustained elevated heart rate and weekly consistency; strength responds to progressive load on a handful of movement patterns; endurance responds to accumulated easy volume with occasional hard efforts. When a session doesn't match the goal, you still get general fitness, just not the thing you said you wanted. Check the focus against your top goal before you start, not after.",
            priority: 1,
            impact: ImpactLevel::High,
            target_audience: Audience::All,
            reading_time_minutes: 3,
            conditions: vec![ConditionRule::factor(F::GoalAlignment, Op::Lt, 0.6)],
        },
        EducationalTemplate {
            id: "why-moderate-intensity-wins-early",
            category: "training",
            title: "Why beginners progress fastest at moderate intensity",
            body: "In the first months of training, almost any stimulus produces adaptation, so maximal sessions buy little extra fitness while costing a lot of recovery and technique. Moderate sessions let you train again in a day or two, and training frequency is what actually separates beginners who progress from those who stall. Save the very hard days for when moderate days stop working.",
            priority: 2,
            impact: ImpactLevel::High,
            target_audience: Audience::Beginner,
            reading_time_minutes: 4,
            conditions: vec![ConditionRule::factor(F::IntensityMatch, Op::Lt, 0.6)],
        },
        EducationalTemplate {
            id: "how-rest-days-build-fitness",
            category: "recovery",
            title: "How rest days build fitness",
            body: "Training applies stress; rest converts it into adaptation. Skip the rest and you accumulate stress without banking the adaptation, which shows up as flat sessions, disturbed sleep, and nagging soreness. A planned rest day is not lost training time, it is where the gains from the week get locked in.",
            priority: 2,
            impact: ImpactLevel::High,
            target_audience: Audience::All,
            reading_time_minutes: 5,
            conditions: vec![ConditionRule::factor(F::RecoveryRespect, Op::Lt, 0.6)],
        },
        EducationalTemplate {
            id: "training-around-minor-injuries",
            category: "recovery",
            title: "Training around minor injuries",
            body: "An injury rarely means stopping entirely; it means routing effort around the affected area and keeping intensity where tissue can tolerate it. Pain that changes how you move is the line: below it, keep training; at it, modify; past it, stop. Sessions that avoid the injured pattern maintain fitness while healing runs its course.",
            priority: 1,
            impact: ImpactLevel::High,
            target_audience: Audience::All,
            reading_time_minutes: 6,
            conditions: vec![ConditionRule::factor(F::RecoveryRespect, Op::Lt, 0.5)],
        },
        EducationalTemplate {
            id: "the-case-for-shorter-sessions",
            category: "duration",
            title: "The case for shorter sessions",
            body: "Session quality decays from the back: the last fifteen minutes of an overlong workout are where form breaks and little fitness is gained. Early on, a tight half hour finished with intent beats an hour endured. Add length only when the short version stops feeling productive.",
            priority: 3,
            impact: ImpactLevel::Medium,
            target_audience: Audience::Beginner,
            reading_time_minutes: 3,
            conditions: vec![ConditionRule::factor(F::DurationFit, Op::Lt, 0.6)],
        },
        EducationalTemplate {
            id: "doing-more-with-less-equipment",
            category: "equipment",
            title: "Doing more with less equipment",
            body: "Most training effects come from effort and progression, not hardware. A pair of dumbbells and a band cover the majority of movement patterns; bodyweight covers the rest if you manipulate tempo and leverage. Build sessions around what is actually in the room and the plan survives contact with reality.",
            priority: 4,
            impact: ImpactLevel::Medium,
            target_audience: Audience::All,
            reading_time_minutes: 4,
            conditions: vec![ConditionRule::factor(F::EquipmentOptimization, Op::Lt, 0.6)],
        },
        EducationalTemplate {
            id: "progressive-overload-after-the-basics",
            category: "training",
            title: "Progressive overload after the basics",
            body: "Once linear progress slows, improvement comes from managing load across weeks instead of maximizing single sessions: small planned increases, occasional lighter weeks, and tracking so the trend stays visible. The selections screen is where that plan meets the day; keep most days repeatable and save reaches for scheduled peaks.",
            priority: 6,
            impact: ImpactLevel::Low,
            target_audience: Audience::Intermediate,
            reading_time_minutes: 5,
            conditions: vec![ConditionRule::factor(F::GoalAlignment, Op::Gte, 0.6)],
        },
        EducationalTemplate {
            id: "periodization-basics",
            category: "training",
            title: "Periodization basics",
            body: "Advanced progress is cyclical: blocks of accumulating load, a deliberate peak, then recovery before the next build. Day-to-day selections should reflect where you are in the cycle rather than how you feel in the moment. If every week looks identical, the cycle is flat and so is the progress curve.",
            priority: 7,
            impact: ImpactLevel::Low,
            target_audience: Audience::Advanced,
            reading_time_minutes: 7,
            conditions: vec![ConditionRule::path(
                "overallScore",
                Op::Gte,
                serde_json::Value::from(0.7),
            )],
        },
    ]
}

/// Applicable educational content for the user's level, ranked and truncated
#[must_use]
pub fn applicable_education(
    ctx: &EvaluationContext<'_>,
    level: FitnessLevel,
    max_items: usize,
) -> Vec<EducationalContent> {
    select_templates(registry(), ctx, max_items, |template| {
        template.target_audience.matches_level(level)
    })
    .into_iter()
    .map(EducationalTemplate::to_content)
    .collect()
}

/// Applicable educational content within one category
#[must_use]
pub fn education_by_category(
    ctx: &EvaluationContext<'_>,
    level: FitnessLevel,
    category: &str,
    max_items: usize,
) -> Vec<EducationalContent> {
    select_templates(registry(), ctx, max_items, |template| {
        template.category == category && template.target_audience.matches_level(level)
    })
    .into_iter()
    .map(EducationalTemplate::to_content)
    .collect()
}

/// Applicable content that addresses a currently weak factor
#[must_use]
pub fn low_score_education(
    ctx: &EvaluationContext<'_>,
    level: FitnessLevel,
    max_items: usize,
) -> Vec<EducationalContent> {
    select_templates(registry(), ctx, max_items, |template| {
        template.target_audience.matches_level(level) && references_low_factor(template, ctx)
    })
    .into_iter()
    .map(EducationalTemplate::to_content)
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

    fn all_scores(value: f64) -> FactorScores {
        FactorScores {
            goal_alignment: factor(value),
            intensity_match: factor(value),
            duration_fit: factor(value),
            recovery_respect: factor(value),
            equipment_optimization: factor(value),
        }
    }

    #[test]
    fn audience_filter_excludes_advanced_material_for_beginners() {
        let profile = UserProfile::default();
        let selections = WorkoutSelections::default();
        let fs = all_scores(0.9);
        let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.9);

        let content = applicable_education(&ctx, FitnessLevel::Beginner, 10);
        assert!(content
            .iter()
            .all(|c| c.target_audience.matches_level(FitnessLevel::Beginner)));
        assert!(!content.iter().any(|c| c.id == "periodization-basics"));
    }

    #[test]
    fn low_scores_surface_remedial_material() {
        let profile = UserProfile::default();
        let selections = WorkoutSelections::default();
        let fs = all_scores(0.4);
        let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.4);

        let content = low_score_education(&ctx, FitnessLevel::Beginner, 10);
        assert!(!content.is_empty());
        assert!(content.iter().any(|c| c.category == "recovery"));
    }

    #[test]
    fn category_query_scopes_results() {
        let profile = UserProfile::default();
        let selections = WorkoutSelections::default();
        let fs = all_scores(0.4);
        let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.4);

        let content = education_by_category(&ctx, FitnessLevel::Intermediate, "equipment", 10);
        assert!(content.iter().all(|c| c.category == "equipment"));
    }

    #[test]
    fn truncation_respects_max_items() {
        let profile = UserProfile::default();
        let selections = WorkoutSelections::default();
        let fs = all_scores(0.3);
        let ctx = EvaluationContext::new(&profile, &selections, &fs, 0.3);

        let content = applicable_education(&ctx, FitnessLevel::Beginner, 2);
        assert!(content.len() <= 2);
    }
}
