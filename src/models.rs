// ABOUTME: Data model for selection confidence analysis
// ABOUTME: Profiles, workout selections, factor scores, and assembled analysis results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data structures shared across the engine
//!
//! Wire names are camelCase so condition rules can address profile and
//! selection fields with the same dotted paths the templates are authored
//! with (e.g. `userProfile.basicLimitations.injuries`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::FactorWeights;

// ============================================================================
// Factors and scoring
// ============================================================================

/// The five fixed analysis dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorKind {
    /// Goal alignment: do the selections serve the user's stated goals
    GoalAlignment,
    /// Intensity match: does the selected energy fit level and context
    IntensityMatch,
    /// Duration fit: does the session length fit level and constraints
    DurationFit,
    /// Recovery respect: do the selections honor recovery needs
    RecoveryRespect,
    /// Equipment optimization: is the equipment available and well used
    EquipmentOptimization,
}

impl FactorKind {
    /// All factors in canonical analysis order
    pub const ALL: [Self; 5] = [
        Self::GoalAlignment,
        Self::IntensityMatch,
        Self::DurationFit,
        Self::RecoveryRespect,
        Self::EquipmentOptimization,
    ];

    /// Canonical key used in factor maps and condition rules
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::GoalAlignment => "goalAlignment",
            Self::IntensityMatch => "intensityMatch",
            Self::DurationFit => "durationFit",
            Self::RecoveryRespect => "recoveryRespect",
            Self::EquipmentOptimization => "equipmentOptimization",
        }
    }

    /// Human-readable factor name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GoalAlignment => "Goal Alignment",
            Self::IntensityMatch => "Intensity Match",
            Self::DurationFit => "Duration Fit",
            Self::RecoveryRespect => "Recovery Respect",
            Self::EquipmentOptimization => "Equipment Optimization",
        }
    }

    /// Parse a canonical key back into a factor
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_key() == key)
    }
}

/// Qualitative status derived from a factor score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    /// Score at or above the excellent threshold
    Excellent,
    /// Solid fit with minor friction
    Good,
    /// Fit concerns worth addressing
    Warning,
    /// Selections work against the profile
    Poor,
}

impl ScoreStatus {
    /// Short lowercase label for display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Poor => "poor",
        }
    }
}

/// Score band used for insight lookup (coarser than [`ScoreStatus`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Score below 0.5
    Poor,
    /// Score in [0.5, 0.7)
    Warning,
    /// Score at or above 0.7
    Good,
}

impl ScoreBand {
    /// Band boundaries are fixed; they are not part of the configurable
    /// status thresholds.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 0.5 {
            Self::Poor
        } else if score < 0.7 {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

/// Energy rating band on the 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyBand {
    /// Ratings 1-3
    Low,
    /// Ratings 4-6
    Moderate,
    /// Ratings 7-8
    High,
    /// Ratings 9-10
    VeryHigh,
}

impl EnergyBand {
    /// Categorize a 1-10 energy rating
    #[must_use]
    pub const fn from_rating(rating: u8) -> Self {
        match rating {
            0..=3 => Self::Low,
            4..=6 => Self::Moderate,
            7..=8 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    /// Key fragment used in insight discriminators
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

/// Result of one factor analyzer, immutable once returned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    /// Normalized score in [0, 1]
    pub score: f64,
    /// Qualitative status derived from the configured thresholds
    pub status: ScoreStatus,
    /// One-sentence explanation of the score
    pub reasoning: String,
    /// Expected effect of this factor on the workout outcome
    pub impact: String,
    /// Ordered sub-criterion observations
    pub details: Vec<String>,
    /// Factor-local improvement suggestions
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// The five factor scores of one analysis
///
/// A struct rather than a map so the "exactly five canonical keys" invariant
/// holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScores {
    /// Goal alignment factor
    pub goal_alignment: FactorScore,
    /// Intensity match factor
    pub intensity_match: FactorScore,
    /// Duration fit factor
    pub duration_fit: FactorScore,
    /// Recovery respect factor
    pub recovery_respect: FactorScore,
    /// Equipment optimization factor
    pub equipment_optimization: FactorScore,
}

impl FactorScores {
    /// Look up a factor score by kind
    #[must_use]
    pub const fn get(&self, kind: FactorKind) -> &FactorScore {
        match kind {
            FactorKind::GoalAlignment => &self.goal_alignment,
            FactorKind::IntensityMatch => &self.intensity_match,
            FactorKind::DurationFit => &self.duration_fit,
            FactorKind::RecoveryRespect => &self.recovery_respect,
            FactorKind::EquipmentOptimization => &self.equipment_optimization,
        }
    }

    /// Iterate factors in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (FactorKind, &FactorScore)> {
        FactorKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

// ============================================================================
// Selected content
// ============================================================================

/// Relative impact of applying a suggestion or reading content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    /// Largest expected improvement
    High,
    /// Moderate expected improvement
    Medium,
    /// Small expected improvement
    Low,
}

impl ImpactLevel {
    /// Sort rank: high before medium before low
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// A selected explanatory message tied to one factor and score band
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Factor this insight explains
    pub factor: FactorKind,
    /// Band the factor scored in
    pub band: ScoreBand,
    /// Short title
    pub title: String,
    /// Explanatory message
    pub message: String,
}

/// An actionable, categorized, priority-ranked recommended change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Stable template id
    pub id: String,
    /// Category ("intensity", "duration", "equipment", ...)
    pub category: String,
    /// Short title
    pub title: String,
    /// What to change and why
    pub description: String,
    /// Rank within the result (lower surfaces first)
    pub priority: u32,
    /// Relative impact of applying the change
    pub impact: ImpactLevel,
    /// Whether the change can be applied without replanning the workout
    pub quick_fix: bool,
    /// Estimated confidence score increase if applied
    pub estimated_score_increase: f64,
}

/// Longer-form contextual learning material
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContent {
    /// Stable template id
    pub id: String,
    /// Category ("training", "recovery", "equipment", ...)
    pub category: String,
    /// Short title
    pub title: String,
    /// Body text
    pub body: String,
    /// Rank within the result (lower surfaces first)
    pub priority: u32,
    /// Relative value of reading this now
    pub impact: ImpactLevel,
    /// Audience the material is written for
    pub target_audience: Audience,
    /// Approximate reading time
    pub reading_time_minutes: u32,
}

/// Audience filter for educational content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// Written for beginners (matches beginner and novice levels)
    Beginner,
    /// Written for intermediate users (matches intermediate and adaptive)
    Intermediate,
    /// Written for advanced users
    Advanced,
    /// Suitable for everyone
    All,
}

impl Audience {
    /// Whether content for this audience suits the given fitness level
    #[must_use]
    pub const fn matches_level(self, level: FitnessLevel) -> bool {
        match self {
            Self::All => true,
            Self::Beginner => matches!(level, FitnessLevel::Beginner | FitnessLevel::Novice),
            Self::Intermediate => {
                matches!(level, FitnessLevel::Intermediate | FitnessLevel::Adaptive)
            }
            Self::Advanced => matches!(level, FitnessLevel::Advanced),
        }
    }
}

// ============================================================================
// Analysis result
// ============================================================================

/// Metadata attached to every analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    /// Wall-clock analysis duration in milliseconds
    pub analysis_time_ms: u64,
    /// Factor weights the overall score was computed with
    pub factor_weights: FactorWeights,
    /// Estimated completeness of the profile data, in [0, 1]
    pub data_quality: f64,
    /// Engine version tag
    pub version: String,
    /// When the analysis was computed
    pub timestamp: DateTime<Utc>,
    /// Unique id of this analysis
    pub analysis_id: Uuid,
}

/// Complete output of one selection analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionAnalysisResult {
    /// Weighted blend of the five factor scores, in [0, 1]
    pub overall_score: f64,
    /// The five factor scores
    pub factors: FactorScores,
    /// At most one insight per factor
    pub insights: Vec<Insight>,
    /// Priority-ranked suggestions
    pub suggestions: Vec<Suggestion>,
    /// Audience-filtered educational content
    pub educational_content: Vec<EducationalContent>,
    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

/// Condensed projection of an analysis for lightweight surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAnalysis {
    /// Overall confidence score
    pub score: f64,
    /// Status of the overall score
    pub status: ScoreStatus,
    /// One-line summary message
    pub message: String,
}

// ============================================================================
// Analysis context
// ============================================================================

/// What kind of generation the caller is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationType {
    /// Fast path with default depth
    #[default]
    Quick,
    /// Full-depth generation
    Detailed,
}

/// Self-reported experience with the app's workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UserExperience {
    /// Never generated a workout before
    FirstTime,
    /// A handful of sessions
    #[default]
    Beginner,
    /// Regular use
    Intermediate,
    /// Long-term use
    Advanced,
}

/// Coarse time-of-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// Before noon
    Morning,
    /// Noon to early evening
    Afternoon,
    /// After work hours
    Evening,
}

/// Optional environmental context supplied by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalFactors {
    /// Ambient temperature in Celsius, if known
    pub temperature_celsius: Option<f64>,
    /// Whether the workout happens indoors
    pub indoor: Option<bool>,
}

/// Per-request context; supplied by the caller, never persisted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisContext {
    /// Generation mode
    pub generation_type: GenerationType,
    /// Self-reported experience level
    pub user_experience: UserExperience,
    /// Workouts completed in the recent window, if tracked
    pub previous_workouts: Option<u32>,
    /// Time-of-day bucket, if known
    pub time_of_day: Option<TimeOfDay>,
    /// Environmental context, if known
    pub environmental_factors: Option<EnvironmentalFactors>,
}

// ============================================================================
// User profile (validated and defaulted upstream)
// ============================================================================

/// Stored fitness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to training
    #[default]
    Beginner,
    /// Some exposure, limited consistency
    Novice,
    /// Consistent training history
    Intermediate,
    /// Years of structured training
    Advanced,
    /// Level adjusts dynamically from history
    Adaptive,
}

impl FitnessLevel {
    /// Lowercase key used in insight discriminators
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Novice => "novice",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Adaptive => "adaptive",
        }
    }
}

/// Stated intensity preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityPreference {
    /// Prefers easy sessions
    Low,
    /// Prefers moderate sessions
    Moderate,
    /// Prefers hard sessions
    High,
}

/// Stored workout preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Preferred workout styles (free-form labels)
    #[serde(default)]
    pub workout_style: Vec<String>,
    /// Preferred time of day label, if stated
    pub time_preference: Option<String>,
    /// Stated intensity preference, if any
    pub intensity_preference: Option<IntensityPreference>,
    /// Whether advanced features are enabled for this user
    #[serde(default)]
    pub advanced_features: bool,
    /// AI assistance level label, if configured
    pub ai_assistance_level: Option<String>,
}

/// First-class limitations every profile carries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicLimitations {
    /// Known injuries (free-form labels)
    #[serde(default)]
    pub injuries: Vec<String>,
    /// Equipment the user has access to
    #[serde(default)]
    pub available_equipment: Vec<String>,
    /// Locations the user can train in
    #[serde(default)]
    pub available_locations: Vec<String>,
}

/// Hydration self-assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationLevel {
    /// Chronically under-hydrated
    Low,
    /// Adequate
    Moderate,
    /// Well hydrated
    High,
}

/// Recovery-related profile data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryNeeds {
    /// Rest days per week the user aims for
    pub rest_days: u32,
    /// Typical nightly sleep in hours
    pub sleep_hours: f64,
    /// Hydration self-assessment, if recorded
    pub hydration_level: Option<HydrationLevel>,
}

/// Extended limitations captured during onboarding refinement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedLimitations {
    /// Minutes available per session, if constrained
    pub time_constraints: Option<u32>,
    /// Equipment the user explicitly cannot use
    #[serde(default)]
    pub equipment_constraints: Vec<String>,
    /// Locations the user explicitly cannot use
    #[serde(default)]
    pub location_constraints: Vec<String>,
    /// Recovery needs, if captured
    pub recovery_needs: Option<RecoveryNeeds>,
    /// Mobility limitations (free-form labels)
    #[serde(default)]
    pub mobility_limitations: Vec<String>,
    /// Desired progression rate multiplier, if set
    pub progression_rate: Option<f64>,
}

/// Aggregated workout history counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutHistory {
    /// Lifetime completed workouts
    pub total_workouts: u32,
    /// Average session duration, if any history exists
    pub average_duration_minutes: Option<f64>,
    /// Fraction of started workouts completed, in [0, 1]
    pub completion_rate: Option<f64>,
    /// Current consecutive-day streak
    pub current_streak: u32,
}

/// Adaptive learning profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProfile {
    /// Preferred exercise complexity label, if learned
    pub preferred_complexity: Option<String>,
}

/// Stored user profile, validated and defaulted by upstream collaborators
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stored fitness level
    pub fitness_level: FitnessLevel,
    /// Stated goals (free-form labels, classified by keyword)
    #[serde(default)]
    pub goals: Vec<String>,
    /// Workout preferences
    #[serde(default)]
    pub preferences: UserPreferences,
    /// First-class limitations
    #[serde(default)]
    pub basic_limitations: BasicLimitations,
    /// Extended limitations
    #[serde(default)]
    pub enhanced_limitations: EnhancedLimitations,
    /// History counters
    #[serde(default)]
    pub workout_history: WorkoutHistory,
    /// Adaptive learning profile
    #[serde(default)]
    pub learning_profile: LearningProfile,
    /// Age in years, if shared
    pub age: Option<u32>,
    /// Weight in kilograms, if shared
    pub weight_kg: Option<f64>,
    /// Height in centimeters, if shared
    pub height_cm: Option<f64>,
    /// Gender label, if shared
    pub gender: Option<String>,
}

// ============================================================================
// Workout selections
// ============================================================================

/// Focus selection: a bare label or a rich option object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FocusSelection {
    /// Bare focus label
    Label(String),
    /// Rich option object from the customization menu
    Detailed {
        /// Machine focus key
        focus: String,
        /// Display label, if different
        #[serde(rename = "focusLabel")]
        focus_label: Option<String>,
    },
}

impl FocusSelection {
    /// Machine focus key
    #[must_use]
    pub fn focus(&self) -> &str {
        match self {
            Self::Label(label) => label,
            Self::Detailed { focus, .. } => focus,
        }
    }

    /// Display label (falls back to the focus key)
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Label(label) => label,
            Self::Detailed { focus, focus_label } => focus_label.as_deref().unwrap_or(focus),
        }
    }
}

impl Default for FocusSelection {
    fn default() -> Self {
        Self::Label("general".to_string())
    }
}

/// Energy selection: a 1-10 rating inside a category object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySelection {
    /// Rating on the 1-10 scale
    pub rating: u8,
    /// Display label, if any
    pub label: Option<String>,
}

impl EnergySelection {
    /// Rating clamped to the documented 1-10 scale
    #[must_use]
    pub fn rating_clamped(&self) -> u8 {
        self.rating.clamp(1, 10)
    }

    /// Band of the clamped rating
    #[must_use]
    pub fn band(&self) -> EnergyBand {
        EnergyBand::from_rating(self.rating_clamped())
    }
}

impl Default for EnergySelection {
    fn default() -> Self {
        Self {
            rating: 5,
            label: None,
        }
    }
}

/// Duration selection: bare minutes or a structured option object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationSelection {
    /// Bare minutes value
    Minutes(f64),
    /// Structured option object
    Detailed {
        /// Minutes value
        minutes: f64,
        /// Display label, if any
        label: Option<String>,
    },
}

impl DurationSelection {
    /// Selected duration in minutes
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        match self {
            Self::Minutes(minutes) | Self::Detailed { minutes, .. } => *minutes,
        }
    }
}

impl Default for DurationSelection {
    fn default() -> Self {
        Self::Minutes(30.0)
    }
}

/// The user's ad-hoc workout selections for one generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSelections {
    /// Selected focus
    pub focus: FocusSelection,
    /// Selected energy level
    pub energy: EnergySelection,
    /// Selected duration
    pub duration: DurationSelection,
    /// Selected equipment labels
    #[serde(default)]
    pub equipment: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn score_band_boundaries() {
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0.49), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0.5), ScoreBand::Warning);
        assert_eq!(ScoreBand::from_score(0.69), ScoreBand::Warning);
        assert_eq!(ScoreBand::from_score(0.7), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(1.0), ScoreBand::Good);
    }

    #[test]
    fn energy_band_from_rating() {
        assert_eq!(EnergyBand::from_rating(1), EnergyBand::Low);
        assert_eq!(EnergyBand::from_rating(5), EnergyBand::Moderate);
        assert_eq!(EnergyBand::from_rating(7), EnergyBand::High);
        assert_eq!(EnergyBand::from_rating(9), EnergyBand::VeryHigh);
    }

    #[test]
    fn audience_matching() {
        assert!(Audience::All.matches_level(FitnessLevel::Advanced));
        assert!(Audience::Beginner.matches_level(FitnessLevel::Novice));
        assert!(!Audience::Beginner.matches_level(FitnessLevel::Advanced));
        assert!(Audience::Intermediate.matches_level(FitnessLevel::Adaptive));
    }

    #[test]
    fn focus_selection_accepts_string_or_object() {
        let bare: FocusSelection = serde_json::from_str("\"strength\"").unwrap();
        assert_eq!(bare.focus(), "strength");

        let rich: FocusSelection =
            serde_json::from_str(r#"{"focus":"strength","focusLabel":"Strength Training"}"#)
                .unwrap();
        assert_eq!(rich.focus(), "strength");
        assert_eq!(rich.label(), "Strength Training");
    }

    #[test]
    fn duration_selection_accepts_number_or_object() {
        let bare: DurationSelection = serde_json::from_str("45").unwrap();
        assert!((bare.minutes() - 45.0).abs() < f64::EPSILON);

        let rich: DurationSelection =
            serde_json::from_str(r#"{"minutes":20,"label":"Short"}"#).unwrap();
        assert!((rich.minutes() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn factor_key_round_trip() {
        for kind in FactorKind::ALL {
            assert_eq!(FactorKind::from_key(kind.as_key()), Some(kind));
        }
        assert_eq!(FactorKind::from_key("notAFactor"), None);
    }
}
