// ABOUTME: Keyword-to-category classification tables for goals, focus, and equipment
// ABOUTME: Keeps substring matching in one data-driven place instead of scattered predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classification tables
//!
//! Free-form profile labels ("build muscle", "lose some weight") and
//! selection labels ("Strength Training", "HIIT") are mapped to coarse
//! categories by case-insensitive substring lookup against the tables below.
//! First matching keyword wins; unmatched labels classify as the general
//! category so downstream scoring stays total.

use serde::{Deserialize, Serialize};

/// Coarse training category shared by goal and focus classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingCategory {
    /// Strength and muscle building
    Strength,
    /// Cardiovascular and endurance work
    Cardio,
    /// Weight loss and body composition
    WeightLoss,
    /// Flexibility and mobility
    Flexibility,
    /// Recovery and low-stress movement
    Recovery,
    /// Unclassified or mixed
    General,
}

impl TrainingCategory {
    /// Key fragment used in insight discriminators
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::WeightLoss => "weight_loss",
            Self::Flexibility => "flexibility",
            Self::Recovery => "recovery",
            Self::General => "general",
        }
    }
}

/// Equipment category used for availability and focus-fit scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    /// Dumbbells, barbells, kettlebells
    FreeWeights,
    /// Cable stacks, selectorized machines
    Machines,
    /// Treadmills, bikes, rowers
    CardioMachines,
    /// Bands, mats, small accessories
    Accessories,
    /// No equipment at all
    Bodyweight,
    /// Unrecognized label
    Other,
}

/// Goal label keywords, first match wins
const GOAL_KEYWORDS: &[(&str, TrainingCategory)] = &[
    ("weight loss", TrainingCategory::WeightLoss),
    ("lose weight", TrainingCategory::WeightLoss),
    ("fat", TrainingCategory::WeightLoss),
    ("lean", TrainingCategory::WeightLoss),
    ("strength", TrainingCategory::Strength),
    ("strong", TrainingCategory::Strength),
    ("muscle", TrainingCategory::Strength),
    ("tone", TrainingCategory::Strength),
    ("build", TrainingCategory::Strength),
    ("cardio", TrainingCategory::Cardio),
    ("endurance", TrainingCategory::Cardio),
    ("stamina", TrainingCategory::Cardio),
    ("running", TrainingCategory::Cardio),
    ("marathon", TrainingCategory::Cardio),
    ("flexib", TrainingCategory::Flexibility),
    ("mobility", TrainingCategory::Flexibility),
    ("stretch", TrainingCategory::Flexibility),
    ("yoga", TrainingCategory::Flexibility),
    ("recover", TrainingCategory::Recovery),
    ("de-stress", TrainingCategory::Recovery),
    ("relax", TrainingCategory::Recovery),
];

/// Focus label keywords, first match wins
const FOCUS_KEYWORDS: &[(&str, TrainingCategory)] = &[
    ("strength", TrainingCategory::Strength),
    ("muscle", TrainingCategory::Strength),
    ("power", TrainingCategory::Strength),
    ("core", TrainingCategory::Strength),
    ("upper body", TrainingCategory::Strength),
    ("lower body", TrainingCategory::Strength),
    ("hiit", TrainingCategory::Cardio),
    ("cardio", TrainingCategory::Cardio),
    ("endurance", TrainingCategory::Cardio),
    ("conditioning", TrainingCategory::Cardio),
    ("fat burn", TrainingCategory::WeightLoss),
    ("calorie", TrainingCategory::WeightLoss),
    ("weight loss", TrainingCategory::WeightLoss),
    ("flexib", TrainingCategory::Flexibility),
    ("mobility", TrainingCategory::Flexibility),
    ("stretch", TrainingCategory::Flexibility),
    ("yoga", TrainingCategory::Flexibility),
    ("recovery", TrainingCategory::Recovery),
    ("restorative", TrainingCategory::Recovery),
];

/// Equipment label keywords, first match wins
const EQUIPMENT_KEYWORDS: &[(&str, EquipmentCategory)] = &[
    ("dumbbell", EquipmentCategory::FreeWeights),
    ("barbell", EquipmentCategory::FreeWeights),
    ("kettlebell", EquipmentCategory::FreeWeights),
    ("weight plate", EquipmentCategory::FreeWeights),
    ("free weight", EquipmentCategory::FreeWeights),
    ("cable", EquipmentCategory::Machines),
    ("machine", EquipmentCategory::Machines),
    ("smith", EquipmentCategory::Machines),
    ("leg press", EquipmentCategory::Machines),
    ("treadmill", EquipmentCategory::CardioMachines),
    ("bike", EquipmentCategory::CardioMachines),
    ("rower", EquipmentCategory::CardioMachines),
    ("rowing", EquipmentCategory::CardioMachines),
    ("elliptical", EquipmentCategory::CardioMachines),
    ("stair", EquipmentCategory::CardioMachines),
    ("jump rope", EquipmentCategory::CardioMachines),
    ("band", EquipmentCategory::Accessories),
    ("mat", EquipmentCategory::Accessories),
    ("foam roller", EquipmentCategory::Accessories),
    ("stability ball", EquipmentCategory::Accessories),
    ("medicine ball", EquipmentCategory::Accessories),
    ("trx", EquipmentCategory::Accessories),
    ("suspension", EquipmentCategory::Accessories),
    ("bodyweight", EquipmentCategory::Bodyweight),
    ("none", EquipmentCategory::Bodyweight),
];

fn lookup<T: Copy>(table: &[(&str, T)], label: &str, fallback: T) -> T {
    let normalized = label.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map_or(fallback, |(_, category)| *category)
}

/// Classify a free-form goal label
#[must_use]
pub fn classify_goal(label: &str) -> TrainingCategory {
    lookup(GOAL_KEYWORDS, label, TrainingCategory::General)
}

/// Classify a focus label
#[must_use]
pub fn classify_focus(label: &str) -> TrainingCategory {
    lookup(FOCUS_KEYWORDS, label, TrainingCategory::General)
}

/// Classify an equipment label
#[must_use]
pub fn classify_equipment(label: &str) -> EquipmentCategory {
    lookup(EQUIPMENT_KEYWORDS, label, EquipmentCategory::Other)
}

/// How well a focus category serves a goal category, in [0, 1]
///
/// The matrix is intentionally asymmetric: cardio work serves a weight-loss
/// goal well, but a weight-loss-branded session is a mediocre vehicle for a
/// pure endurance goal.
#[must_use]
pub fn goal_focus_affinity(goal: TrainingCategory, focus: TrainingCategory) -> f64 {
    use TrainingCategory as T;

    if goal == focus {
        return 1.0;
    }

    match (goal, focus) {
        (T::WeightLoss, T::Cardio) => 0.85,
        (T::Cardio, T::WeightLoss) => 0.75,
        (T::WeightLoss, T::Strength) => 0.2,
        (T::Strength, T::WeightLoss) => 0.35,
        (T::Strength, T::Cardio) | (T::Cardio, T::Strength) => 0.45,
        (T::Flexibility, T::Recovery) | (T::Recovery, T::Flexibility) => 0.9,
        (T::Flexibility | T::Recovery, _) | (_, T::Flexibility | T::Recovery) => 0.4,
        _ => 0.6,
    }
}

/// How well an equipment category supports a focus category, in [0, 1]
#[must_use]
pub fn equipment_focus_fit(equipment: EquipmentCategory, focus: TrainingCategory) -> f64 {
    use EquipmentCategory as E;
    use TrainingCategory as T;

    match (equipment, focus) {
        (E::FreeWeights | E::Machines, T::Strength) => 1.0,
        (E::FreeWeights, T::WeightLoss) => 0.8,
        (E::Machines, T::WeightLoss) => 0.7,
        (E::CardioMachines, T::Cardio | T::WeightLoss) => 1.0,
        (E::CardioMachines, T::Strength) => 0.3,
        (E::CardioMachines, T::Flexibility | T::Recovery) => 0.4,
        (E::Accessories, T::Flexibility | T::Recovery) => 1.0,
        (E::Accessories, _) => 0.7,
        (E::Bodyweight, T::Strength) => 0.6,
        (E::Bodyweight, _) => 0.8,
        (E::FreeWeights | E::Machines, T::Flexibility | T::Recovery) => 0.35,
        (E::FreeWeights | E::Machines, T::Cardio) => 0.5,
        _ => 0.6,
    }
}
