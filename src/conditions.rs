// ABOUTME: Declarative condition evaluation engine for content template gating
// ABOUTME: Resolves factor keys and dotted paths over analysis context, compares scalars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Condition evaluation
//!
//! Templates in the content registries are gated by small declarative rules:
//! a source field, a comparison operator, and a scalar comparand. The source
//! field is either one of the five canonical factor keys (or
//! `overallScore`), resolved from the score map, or a dotted path resolved
//! by sequential key lookup through the JSON view of the raw inputs
//! (e.g. `userProfile.basicLimitations.injuries`).
//!
//! The engine is total: a missing path, a non-numeric operand under a
//! numeric operator, or an unsupported comparand type makes the rule
//! `false` — evaluation never faults, so a malformed template can only
//! suppress its own content. Evaluation is pure and safe to call from any
//! number of consumers concurrently.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{FactorKind, FactorScores, UserProfile, WorkoutSelections};

/// Comparison operator of a condition rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionOperator {
    /// Strictly less than
    Lt,
    /// Less than or equal
    Lte,
    /// Scalar value identity
    Eq,
    /// Greater than or equal
    Gte,
    /// Strictly greater than
    Gt,
}

/// One declarative comparison over the evaluation context
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRule {
    /// Factor key, `overallScore`, or a dotted path into the raw inputs
    pub source_field: String,
    /// Comparison operator
    pub operator: ConditionOperator,
    /// Scalar comparand (number, string, or bool)
    pub comparand: Value,
}

impl ConditionRule {
    /// Rule over a factor score
    #[must_use]
    pub fn factor(kind: FactorKind, operator: ConditionOperator, comparand: f64) -> Self {
        Self {
            source_field: kind.as_key().to_string(),
            operator,
            comparand: Value::from(comparand),
        }
    }

    /// Rule over a dotted path into the raw inputs
    #[must_use]
    pub fn path(source_field: &str, operator: ConditionOperator, comparand: Value) -> Self {
        Self {
            source_field: source_field.to_string(),
            operator,
            comparand,
        }
    }
}

/// Context a rule set is evaluated against
///
/// Bundles the factor score map with a JSON view of the raw inputs so rules
/// can address either uniformly.
#[derive(Debug, Clone)]
pub struct EvaluationContext<'a> {
    factor_scores: &'a FactorScores,
    overall_score: f64,
    root: Value,
}

impl<'a> EvaluationContext<'a> {
    /// Assemble the context for one analysis
    ///
    /// Serialization of the inputs cannot fail for well-formed model types;
    /// if it ever did, the affected subtree resolves to nothing and rules
    /// over it evaluate to `false`.
    #[must_use]
    pub fn new(
        profile: &UserProfile,
        selections: &WorkoutSelections,
        factor_scores: &'a FactorScores,
        overall_score: f64,
    ) -> Self {
        let root = serde_json::json!({
            "userProfile": serde_json::to_value(profile).unwrap_or(Value::Null),
            "selections": serde_json::to_value(selections).unwrap_or(Value::Null),
            "overallScore": overall_score,
        });

        Self {
            factor_scores,
            overall_score,
            root,
        }
    }

    /// Factor scores this context was built with
    #[must_use]
    pub const fn factor_scores(&self) -> &FactorScores {
        self.factor_scores
    }

    /// Score of one factor
    #[must_use]
    pub fn factor_score(&self, kind: FactorKind) -> f64 {
        self.factor_scores.get(kind).score
    }

    /// Resolve a source field to a value, if present
    ///
    /// Factor keys and `overallScore` resolve from the score map; anything
    /// else is treated as a dotted path. Absence is data, not an error.
    #[must_use]
    pub fn resolve(&self, source_field: &str) -> Option<Value> {
        if let Some(kind) = FactorKind::from_key(source_field) {
            return Some(Value::from(self.factor_scores.get(kind).score));
        }
        if source_field == "overallScore" {
            return Some(Value::from(self.overall_score));
        }

        let mut current = &self.root;
        for segment in source_field.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current.clone())
    }
}

/// Evaluate one rule against the context
///
/// Numeric operators require both sides to be numbers; `Eq` compares scalar
/// identity (arrays and objects are unsupported comparands). Anything
/// unresolvable or mistyped is `false`.
#[must_use]
pub fn evaluate_rule(rule: &ConditionRule, ctx: &EvaluationContext<'_>) -> bool {
    let Some(value) = ctx.resolve(&rule.source_field) else {
        return false;
    };

    match rule.operator {
        ConditionOperator::Lt | ConditionOperator::Lte | ConditionOperator::Gte
        | ConditionOperator::Gt => {
            let (Some(lhs), Some(rhs)) = (value.as_f64(), rule.comparand.as_f64()) else {
                return false;
            };
            match rule.operator {
                ConditionOperator::Lt => lhs < rhs,
                ConditionOperator::Lte => lhs <= rhs,
                ConditionOperator::Gte => lhs >= rhs,
                ConditionOperator::Gt => lhs > rhs,
                ConditionOperator::Eq => false,
            }
        }
        ConditionOperator::Eq => scalar_eq(&value, &rule.comparand),
    }
}

/// Evaluate a rule set: logical AND, empty set matches
#[must_use]
pub fn evaluate_all(rules: &[ConditionRule], ctx: &EvaluationContext<'_>) -> bool {
    rules.iter().all(|rule| evaluate_rule(rule, ctx))
}

/// Scalar value identity; arrays and objects never compare equal
fn scalar_eq(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => (x - y).abs() < f64::EPSILON,
            _ => false,
        },
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}
