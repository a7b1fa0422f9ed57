// ABOUTME: Insight template registry keyed by factor, score band, and discriminator
// ABOUTME: Direct map lookup; a missing key means no insight, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight selection
//!
//! Each factor contributes at most one insight per analysis. The registry is
//! keyed by `(factor, score band, discriminator)` where the discriminator is
//! a composed context key: goal and focus categories for goal alignment,
//! fitness level and energy band for intensity, and so on. Lookup is a
//! single direct map access.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::classification::{classify_focus, classify_goal};
use crate::models::{
    FactorKind, Insight, ScoreBand, UserProfile, WorkoutSelections,
};

/// One authored insight text
#[derive(Debug, Clone)]
struct InsightTemplate {
    title: &'static str,
    message: &'static str,
}

type InsightKey = (FactorKind, ScoreBand, String);

fn registry() -> &'static HashMap<InsightKey, InsightTemplate> {
    static REGISTRY: OnceLock<HashMap<InsightKey, InsightTemplate>> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

#[allow(clippy::too_many_lines)]
fn build_registry() -> HashMap<InsightKey, InsightTemplate> {
    use FactorKind as F;
    use ScoreBand as B;

    let entries: &[(F, B, &'static str, &'static str, &'static str)] = &[
        // Goal alignment: goal category x focus category
        (
            F::GoalAlignment,
            B::Poor,
            "weight_loss_strength",
            "Selection-Goal Mismatch",
            "You picked a strength focus, but your primary goal is weight loss. Strength work helps long-term, yet sustained cardio or mixed sessions burn more during the workout itself.",
        ),
        (
            F::GoalAlignment,
            B::Poor,
            "strength_cardio",
            "Different Direction",
            "A cardio session does little for your strength goal. Keep it as recovery work, or switch the focus to lifting.",
        ),
        (
            F::GoalAlignment,
            B::Poor,
            "cardio_strength",
            "Endurance Takes a Back Seat",
            "Strength sessions build support muscle but won't move your endurance goal much this week.",
        ),
        (
            F::GoalAlignment,
            B::Warning,
            "weight_loss_general",
            "Close, Not Quite",
            "A general session touches your weight-loss goal without targeting it. A dedicated cardio or interval focus would work harder for you.",
        ),
        (
            F::GoalAlignment,
            B::Warning,
            "strength_general",
            "Spread Thin",
            "A general session spreads effort across everything; your strength goal advances faster with a dedicated lifting focus.",
        ),
        (
            F::GoalAlignment,
            B::Good,
            "strength_strength",
            "On Target",
            "Strength focus for a strength goal. This is exactly the session your plan wants.",
        ),
        (
            F::GoalAlignment,
            B::Good,
            "weight_loss_cardio",
            "Working the Plan",
            "Cardio is the most direct route to your weight-loss goal. Good pick.",
        ),
        (
            F::GoalAlignment,
            B::Good,
            "cardio_cardio",
            "Engine Building",
            "An endurance session squarely serving your endurance goal.",
        ),
        // Intensity match: fitness level x energy band
        (
            F::IntensityMatch,
            B::Poor,
            "beginner_very_high",
            "Intensity Overreach",
            "Energy 9-10 as a beginner usually means broken form and a rough week after. The gains you want live around energy 4-6 right now.",
        ),
        (
            F::IntensityMatch,
            B::Poor,
            "novice_very_high",
            "Too Hot",
            "Very high intensity outpaces your current base. Hard sessions work best layered on a few months of consistent moderate work.",
        ),
        (
            F::IntensityMatch,
            B::Poor,
            "beginner_high",
            "Running Before Walking",
            "High intensity this early tends to cost more in recovery than it returns in fitness.",
        ),
        (
            F::IntensityMatch,
            B::Warning,
            "intermediate_very_high",
            "Spicy Choice",
            "You can handle a very hard session, but make sure the surrounding days are genuinely easy.",
        ),
        (
            F::IntensityMatch,
            B::Good,
            "beginner_moderate",
            "Well Matched",
            "Moderate intensity is the sweet spot for building your base without overreaching.",
        ),
        (
            F::IntensityMatch,
            B::Good,
            "advanced_very_high",
            "Earned Intensity",
            "Your training history supports a maximal session. Bring the recovery to match.",
        ),
        (
            F::IntensityMatch,
            B::Good,
            "advanced_high",
            "Strong Session Ahead",
            "A hard session fits your level; this is where your progress comes from.",
        ),
        // Duration fit: fitness level x duration bucket
        (
            F::DurationFit,
            B::Poor,
            "beginner_long",
            "Too Long for Now",
            "Sessions past 45 minutes at your level mostly add junk volume. Shorter and sharper beats longer and sloppier.",
        ),
        (
            F::DurationFit,
            B::Warning,
            "beginner_standard",
            "Upper Edge",
            "This length is at the top of what your level absorbs well. Watch quality in the final stretch.",
        ),
        (
            F::DurationFit,
            B::Good,
            "beginner_short",
            "Right-Sized",
            "A compact session you can finish with quality, which is what drives progress at your level.",
        ),
        (
            F::DurationFit,
            B::Good,
            "intermediate_standard",
            "Solid Block",
            "A standard-length session that fits your base. Good foundation for the week.",
        ),
        (
            F::DurationFit,
            B::Good,
            "advanced_long",
            "Volume Day",
            "A long session your history supports. Fuel it properly.",
        ),
        // Recovery respect: injury state x energy band
        (
            F::RecoveryRespect,
            B::Poor,
            "injured_very_high",
            "Recovery at Risk",
            "Maximal intensity with an active injury is how small problems become long ones. Dial it back until you're cleared.",
        ),
        (
            F::RecoveryRespect,
            B::Poor,
            "injured_high",
            "Healing Needs Headroom",
            "Hard training competes with healing for the same recovery budget. The injury wins the tie only if you let it.",
        ),
        (
            F::RecoveryRespect,
            B::Warning,
            "healthy_very_high",
            "Mind the Margin",
            "Nothing is wrong, but back-to-back maximal days drain faster than they build. Plan the easy day now.",
        ),
        (
            F::RecoveryRespect,
            B::Good,
            "healthy_moderate",
            "Recovery Respected",
            "The intensity leaves room to recover and come back tomorrow. That consistency compounds.",
        ),
        (
            F::RecoveryRespect,
            B::Good,
            "injured_low",
            "Smart Restraint",
            "Keeping intensity low while injured is the fastest route back to full training.",
        ),
        // Equipment optimization: focus category x selection presence
        (
            F::EquipmentOptimization,
            B::Poor,
            "strength_selected",
            "Equipment Mismatch",
            "The gear you picked doesn't line up with what you have or what a strength session needs. The plan will fall apart at the first station.",
        ),
        (
            F::EquipmentOptimization,
            B::Poor,
            "cardio_selected",
            "Gear Gap",
            "The selected cardio equipment isn't in your available list. Substitutions mid-session break pacing.",
        ),
        (
            F::EquipmentOptimization,
            B::Warning,
            "strength_none",
            "Bodyweight Strength Has Limits",
            "Bodyweight-only strength work plateaus quickly past the basics. Even one pair of dumbbells changes the math.",
        ),
        (
            F::EquipmentOptimization,
            B::Warning,
            "general_none",
            "Traveling Light",
            "No equipment selected. That works, but a couple of accessories would widen the exercise pool.",
        ),
        (
            F::EquipmentOptimization,
            B::Good,
            "strength_selected",
            "Gear On Hand",
            "Your selected equipment is available and built for this focus. No substitutions needed.",
        ),
        (
            F::EquipmentOptimization,
            B::Good,
            "cardio_selected",
            "Ready to Roll",
            "The cardio equipment you picked is on your list and fits the session.",
        ),
        (
            F::EquipmentOptimization,
            B::Good,
            "flexibility_selected",
            "Simple and Sufficient",
            "Mat-and-accessories is exactly the right kit for this focus.",
        ),
    ];

    entries
        .iter()
        .map(|&(factor, band, discriminator, title, message)| {
            (
                (factor, band, discriminator.to_string()),
                InsightTemplate { title, message },
            )
        })
        .collect()
}

/// Duration bucket used in duration-fit discriminators
fn duration_bucket(minutes: f64) -> &'static str {
    if minutes < 20.0 {
        "short"
    } else if minutes <= 45.0 {
        "standard"
    } else {
        "long"
    }
}

/// Compose the contextual discriminator for one factor
fn discriminator(
    kind: FactorKind,
    profile: &UserProfile,
    selections: &WorkoutSelections,
) -> String {
    match kind {
        FactorKind::GoalAlignment => {
            let goal = profile
                .goals
                .first()
                .map_or("none", |g| classify_goal(g).as_key());
            let focus = classify_focus(selections.focus.focus()).as_key();
            format!("{goal}_{focus}")
        }
        FactorKind::IntensityMatch => format!(
            "{}_{}",
            profile.fitness_level.as_key(),
            selections.energy.band().as_key()
        ),
        FactorKind::DurationFit => format!(
            "{}_{}",
            profile.fitness_level.as_key(),
            duration_bucket(selections.duration.minutes())
        ),
        FactorKind::RecoveryRespect => {
            let state = if profile.basic_limitations.injuries.is_empty() {
                "healthy"
            } else {
                "injured"
            };
            format!("{state}_{}", selections.energy.band().as_key())
        }
        FactorKind::EquipmentOptimization => {
            let focus = classify_focus(selections.focus.focus()).as_key();
            let presence = if selections.equipment.is_empty() {
                "none"
            } else {
                "selected"
            };
            format!("{focus}_{presence}")
        }
    }
}

/// Select the insight for one factor, if any is authored for this context
#[must_use]
pub fn select_insight(
    kind: FactorKind,
    score: f64,
    profile: &UserProfile,
    selections: &WorkoutSelections,
) -> Option<Insight> {
    let band = ScoreBand::from_score(score);
    let key = discriminator(kind, profile, selections);

    registry()
        .get(&(kind, band, key))
        .map(|template| Insight {
            factor: kind,
            band,
            title: template.title.to_string(),
            message: template.message.to_string(),
        })
}
