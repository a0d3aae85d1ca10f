//! Teams and Skill Models
//!
//! A team is an opaque name. Its strength comes from a caller-supplied
//! [`SkillModel`], queried once per team per match.

use std::collections::BTreeMap;
use std::fmt;

use rand_distr::{Distribution, StandardNormal};
use serde::{Serialize, Deserialize};

use crate::core::rng::DeterministicRng;

// =============================================================================
// TEAM ID
// =============================================================================

/// Unique team identifier.
///
/// Implements Ord for deterministic BTreeMap ordering.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub String);

impl TeamId {
    /// Create from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TeamId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// =============================================================================
// SKILL MODEL
// =============================================================================

/// Maps a team to a real-valued strength.
///
/// Implementations must return finite values. The match model does not
/// guard against NaN or infinity.
pub trait SkillModel {
    /// Strength of `team`. Higher is stronger; only differences matter.
    fn skill(&self, team: &TeamId) -> f64;
}

impl<F> SkillModel for F
where
    F: Fn(&TeamId) -> f64,
{
    fn skill(&self, team: &TeamId) -> f64 {
        self(team)
    }
}

/// Fixed per-team skill lookup.
///
/// Teams missing from the table get `default`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SkillTable {
    skills: BTreeMap<TeamId, f64>,
    default: f64,
}

impl SkillTable {
    /// Create an empty table where every team has `default` skill.
    pub fn new(default: f64) -> Self {
        Self {
            skills: BTreeMap::new(),
            default,
        }
    }

    /// Set a team's skill.
    pub fn insert(&mut self, team: impl Into<TeamId>, skill: f64) {
        self.skills.insert(team.into(), skill);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, team: impl Into<TeamId>, skill: f64) -> Self {
        self.insert(team, skill);
        self
    }

    /// Draw one standard-normal skill per team from `rng`.
    ///
    /// Teams are rated in iteration order, so the same teams and seed
    /// always give the same table.
    pub fn standard_normal<'a>(
        teams: impl IntoIterator<Item = &'a TeamId>,
        rng: &mut DeterministicRng,
    ) -> Self {
        teams
            .into_iter()
            .map(|team| {
                let skill: f64 = StandardNormal.sample(&mut *rng);
                (team.clone(), skill)
            })
            .collect()
    }

    /// Number of explicitly rated teams.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// True if no team is explicitly rated.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl SkillModel for SkillTable {
    fn skill(&self, team: &TeamId) -> f64 {
        self.skills.get(team).copied().unwrap_or(self.default)
    }
}

impl<T: Into<TeamId>> FromIterator<(T, f64)> for SkillTable {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let mut table = SkillTable::new(0.0);
        for (team, skill) in iter {
            table.insert(team, skill);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_display_and_order() {
        let a = TeamId::from("argentina");
        let b = TeamId::from("brazil");

        assert_eq!(a.to_string(), "argentina");
        assert!(a < b);
    }

    #[test]
    fn test_skill_table_default() {
        let table = SkillTable::new(0.5).with("spain", 2.0);

        assert_eq!(table.skill(&TeamId::from("spain")), 2.0);
        assert_eq!(table.skill(&TeamId::from("haiti")), 0.5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_closure_is_skill_model() {
        let model = |team: &TeamId| team.as_str().len() as f64;
        assert_eq!(model.skill(&TeamId::from("iran")), 4.0);
    }

    #[test]
    fn test_skill_table_from_iter() {
        let table: SkillTable = [("france", 1.5), ("iraq", -0.5)].into_iter().collect();
        assert_eq!(table.skill(&TeamId::from("iraq")), -0.5);
        assert_eq!(table.skill(&TeamId::from("qatar")), 0.0);
    }

    #[test]
    fn test_standard_normal_is_seeded() {
        let teams: Vec<TeamId> = (0..400).map(|i| TeamId::new(format!("t{i}"))).collect();

        let a = SkillTable::standard_normal(&teams, &mut DeterministicRng::new(8));
        let b = SkillTable::standard_normal(&teams, &mut DeterministicRng::new(8));
        let c = SkillTable::standard_normal(&teams, &mut DeterministicRng::new(9));

        let skills = |table: &SkillTable| teams.iter().map(|t| table.skill(t)).collect::<Vec<_>>();
        assert_eq!(skills(&a), skills(&b));
        assert_ne!(skills(&a), skills(&c));
        assert_eq!(a.len(), 400);

        let mean = skills(&a).iter().sum::<f64>() / 400.0;
        assert!(mean.abs() < 0.25, "mean = {mean}");
    }

    #[test]
    fn test_team_id_serializes_as_string() {
        let json = serde_json::to_string(&TeamId::from("dr congo")).unwrap();
        assert_eq!(json, "\"dr congo\"");
    }
}
