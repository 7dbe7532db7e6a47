//! Weighted team-fit judge for the team assignment exercise.
//!
//! Positions are targets, candidate members are items. Beyond the shared
//! fill-and-category completion rule, the score blends how well each
//! assigned member matches the position's requirements: skill keywords,
//! certifications, clearance level, and duty location.

use std::collections::HashMap;

use dropslot_core::{Catalog, ItemId, PercentScore, TargetId};

use crate::judge::{survey, CompletionJudge, PlacementView, Verdict};

/// What a candidate member brings to the team.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberProfile {
    /// Skill strings as authored (e.g. "Blockchain analysis").
    pub skills: Vec<String>,
    /// Held certifications.
    pub certifications: Vec<String>,
    /// Clearance level, compared for exact equality.
    pub clearance: String,
    /// Duty location, compared for exact equality.
    pub location: String,
}

impl MemberProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Adds a certification.
    pub fn with_certification(mut self, certification: impl Into<String>) -> Self {
        self.certifications.push(certification.into());
        self
    }

    /// Sets the clearance level.
    pub fn with_clearance(mut self, clearance: impl Into<String>) -> Self {
        self.clearance = clearance.into();
        self
    }

    /// Sets the duty location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// What a position asks of its members.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionRequirements {
    /// Required skill keywords. An empty list is vacuously satisfied.
    pub skills: Vec<String>,
    /// Required certifications. An empty list is vacuously satisfied.
    pub certifications: Vec<String>,
    /// Required clearance level.
    pub clearance: String,
    /// Required duty location.
    pub location: String,
}

impl PositionRequirements {
    /// Creates empty requirements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required skill keyword.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Adds a required certification.
    pub fn with_certification(mut self, certification: impl Into<String>) -> Self {
        self.certifications.push(certification.into());
        self
    }

    /// Sets the required clearance level.
    pub fn with_clearance(mut self, clearance: impl Into<String>) -> Self {
        self.clearance = clearance.into();
        self
    }

    /// Sets the required duty location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// Relative weight of each fit factor.
///
/// The blend is normalized by the weight total, so weights need not sum
/// to 1. The defaults are the authored 0.4 / 0.3 / 0.2 / 0.1 split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitWeights {
    /// Weight of the skill keyword match ratio.
    pub skills: f64,
    /// Weight of the certification match ratio.
    pub certifications: f64,
    /// Weight of the clearance equality term.
    pub clearance: f64,
    /// Weight of the location equality term.
    pub location: f64,
}

impl Default for FitWeights {
    fn default() -> Self {
        FitWeights {
            skills: 0.4,
            certifications: 0.3,
            clearance: 0.2,
            location: 0.1,
        }
    }
}

impl FitWeights {
    fn total(&self) -> f64 {
        self.skills + self.certifications + self.clearance + self.location
    }
}

/// Judge for the team assignment exercise.
///
/// Completion follows the shared rule (every position filled with the
/// expected member category). The score averages per-member fit over
/// each position's occupants, then across positions; an unfilled
/// position contributes zero.
#[derive(Debug, Clone)]
pub struct TeamFitJudge {
    profiles: HashMap<ItemId, MemberProfile>,
    requirements: HashMap<TargetId, PositionRequirements>,
    weights: FitWeights,
}

impl TeamFitJudge {
    /// Creates a judge from per-member profiles and per-position
    /// requirements, with the default weights.
    pub fn new(
        profiles: HashMap<ItemId, MemberProfile>,
        requirements: HashMap<TargetId, PositionRequirements>,
    ) -> Self {
        TeamFitJudge {
            profiles,
            requirements,
            weights: FitWeights::default(),
        }
    }

    /// Overrides the factor weights.
    pub fn with_weights(mut self, weights: FitWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Returns the active weights.
    pub fn weights(&self) -> &FitWeights {
        &self.weights
    }

    /// Fit of a single member against a position, in 0.0-1.0.
    pub fn member_fit(&self, requirements: &PositionRequirements, profile: &MemberProfile) -> f64 {
        let total = self.weights.total();
        if total <= 0.0 {
            return 0.0;
        }

        let skill_ratio = keyword_match_ratio(&requirements.skills, &profile.skills);
        let cert_ratio = keyword_match_ratio(&requirements.certifications, &profile.certifications);
        let clearance = if requirements.clearance == profile.clearance {
            1.0
        } else {
            0.0
        };
        let location = if requirements.location == profile.location {
            1.0
        } else {
            0.0
        };

        (self.weights.skills * skill_ratio
            + self.weights.certifications * cert_ratio
            + self.weights.clearance * clearance
            + self.weights.location * location)
            / total
    }

    fn position_fit(&self, target: &TargetId, occupants: &[ItemId]) -> f64 {
        if occupants.is_empty() {
            return 0.0;
        }
        // A position without authored requirements cannot be assessed.
        let Some(requirements) = self.requirements.get(target) else {
            return 0.0;
        };

        let sum: f64 = occupants
            .iter()
            .map(|item| {
                self.profiles
                    .get(item)
                    .map_or(0.0, |profile| self.member_fit(requirements, profile))
            })
            .sum();
        sum / occupants.len() as f64
    }
}

impl CompletionJudge for TeamFitJudge {
    fn judge(&self, catalog: &Catalog, placement: &dyn PlacementView) -> Verdict {
        let (is_complete, targets) = survey(catalog, placement);

        let score = if catalog.target_count() == 0 {
            PercentScore::ZERO
        } else {
            let sum: f64 = catalog
                .targets()
                .map(|target| self.position_fit(target.id(), placement.occupants(target.id())))
                .sum();
            PercentScore::from_ratio(sum / catalog.target_count() as f64)
        };

        Verdict {
            is_complete,
            score,
            targets,
        }
    }
}

/// Fraction of `required` keywords present in `held`.
///
/// A keyword counts as held when any held string contains it,
/// case-insensitively. Substring containment is the authored matching
/// semantics ("Advanced Transaction Tracing" satisfies "transaction
/// tracing") and is preserved as-is.
fn keyword_match_ratio(required: &[String], held: &[String]) -> f64 {
    if required.is_empty() {
        return 1.0;
    }

    let matched = required
        .iter()
        .filter(|keyword| {
            let keyword = keyword.to_lowercase();
            held.iter().any(|h| h.to_lowercase().contains(&keyword))
        })
        .count();
    matched as f64 / required.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    // The dropslot-test helpers link the externally built copy of this
    // crate, so the judge types must come from that copy to unify.
    use dropslot_scoring::{
        CompletionJudge, FitWeights, MemberProfile, PositionRequirements, TeamFitJudge,
    };
    use dropslot_test::placement::MapPlacement;
    use dropslot_test::team;

    #[test]
    fn test_perfect_assignment_scores_full() {
        let catalog = team::catalog();
        let judge = team::judge();

        let mut placement = MapPlacement::new();
        placement.put("pos-lead", ["m-rivera"]);
        placement.put("pos-analyst", ["m-chen", "m-okafor"]);

        let verdict = judge.judge(&catalog, &placement);
        assert!(verdict.is_complete);
        assert_eq!(verdict.score, PercentScore::FULL);
    }

    #[test]
    fn test_half_skill_match_loses_half_the_skill_weight() {
        let catalog = team::catalog();
        let judge = team::judge();

        // Silva has only one of the lead's two required skills; every
        // other factor matches. Position fit = 1 - 0.4 * 0.5 = 0.8.
        let mut placement = MapPlacement::new();
        placement.put("pos-lead", ["m-silva"]);
        placement.put("pos-analyst", ["m-chen", "m-okafor"]);

        let verdict = judge.judge(&catalog, &placement);
        assert_eq!(verdict.score, PercentScore::of(90)); // (0.8 + 1.0) / 2
    }

    #[test]
    fn test_unfilled_position_contributes_zero() {
        let catalog = team::catalog();
        let judge = team::judge();

        let mut placement = MapPlacement::new();
        placement.put("pos-lead", ["m-rivera"]);

        let verdict = judge.judge(&catalog, &placement);
        assert!(!verdict.is_complete);
        assert_eq!(verdict.score, PercentScore::of(50)); // (1.0 + 0.0) / 2
    }

    #[test]
    fn test_substring_skill_matching() {
        let judge = team::judge();
        // "Advanced Transaction Tracing" holds the "Transaction tracing"
        // keyword via case-insensitive containment.
        let requirements = PositionRequirements::new()
            .with_skill("Transaction tracing")
            .with_clearance("Secret")
            .with_location("Field");
        let profile = MemberProfile::new()
            .with_skill("Advanced Transaction Tracing")
            .with_clearance("Secret")
            .with_location("Field");

        assert!((judge.member_fit(&requirements, &profile) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_clearance_mismatch_is_binary() {
        let judge = team::judge();
        let requirements = PositionRequirements::new()
            .with_clearance("Top Secret")
            .with_location("HQ");
        let profile = MemberProfile::new()
            .with_clearance("Secret")
            .with_location("HQ");

        // Skills and certifications are vacuously satisfied (0.4 + 0.3),
        // location matches (0.1), clearance does not (0.0).
        assert!((judge.member_fit(&requirements, &profile) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_member_scores_zero() {
        let catalog = team::catalog();
        let judge = TeamFitJudge::new(HashMap::new(), team::requirements());

        let mut placement = MapPlacement::new();
        placement.put("pos-lead", ["m-rivera"]);
        placement.put("pos-analyst", ["m-chen", "m-okafor"]);

        let verdict = judge.judge(&catalog, &placement);
        // Completion only needs categories; fit needs profiles.
        assert!(verdict.is_complete);
        assert_eq!(verdict.score, PercentScore::ZERO);
    }

    #[test]
    fn test_custom_weights_are_normalized() {
        let judge = team::judge().with_weights(FitWeights {
            skills: 2.0,
            certifications: 0.0,
            clearance: 1.0,
            location: 1.0,
        });
        let requirements = PositionRequirements::new()
            .with_skill("Leadership")
            .with_clearance("Secret")
            .with_location("HQ");
        let profile = MemberProfile::new()
            .with_clearance("Secret")
            .with_location("HQ");

        // (2.0 * 0 + 1.0 + 1.0) / 4.0
        assert!((judge.member_fit(&requirements, &profile) - 0.5).abs() < 1e-9);
    }
}
