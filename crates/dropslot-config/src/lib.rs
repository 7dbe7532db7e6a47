//! Authored exercise definitions for Dropslot.
//!
//! Exercises are authored once as TOML or YAML and loaded into a
//! validated [`Catalog`] plus the judge matching the exercise kind.
//!
//! # Examples
//!
//! Load an exercise from a TOML string:
//!
//! ```
//! use dropslot_config::ExerciseConfig;
//!
//! let config = ExerciseConfig::from_toml_str(r#"
//!     module_id = "module-3"
//!     kind = "puzzle"
//!
//!     [[items]]
//!     id = "block-genesis"
//!     category = "genesis"
//!
//!     [[targets]]
//!     id = "slot-genesis"
//!     category = "genesis"
//! "#).unwrap();
//!
//! assert_eq!(config.module_id, "module-3");
//! let catalog = config.catalog().unwrap();
//! assert_eq!(catalog.item_count(), 1);
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dropslot_core::{Catalog, Item, Target};
use dropslot_scoring::{
    BinaryJudge, ExerciseJudge, FitWeights, MemberProfile, PositionRequirements, TeamFitJudge,
};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid exercise: {0}")]
    Invalid(String),
}

/// Which judge grades the exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// All-or-nothing grading (block puzzle, evidence classifier).
    #[default]
    Puzzle,
    /// Weighted team-fit grading.
    Team,
}

/// One authored exercise.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExerciseConfig {
    /// Course module this exercise reports progress under.
    pub module_id: String,

    /// Which judge grades the exercise.
    #[serde(default)]
    pub kind: ExerciseKind,

    /// Draggable items.
    #[serde(default)]
    pub items: Vec<ItemConfig>,

    /// Drop targets.
    #[serde(default)]
    pub targets: Vec<TargetConfig>,

    /// Member profiles, team exercises only.
    #[serde(default)]
    pub members: Vec<MemberConfig>,

    /// Position requirements, team exercises only.
    #[serde(default)]
    pub positions: Vec<PositionConfig>,

    /// Fit factor weights, team exercises only.
    #[serde(default)]
    pub weights: Option<WeightsConfig>,
}

/// An authored item.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ItemConfig {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// An authored target. Capacity defaults to a single slot.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TargetConfig {
    pub id: String,
    pub category: String,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub label: Option<String>,
}

fn default_capacity() -> usize {
    1
}

/// An authored member profile, keyed to an item id.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MemberConfig {
    /// The item this profile belongs to.
    pub item: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub clearance: String,
    #[serde(default)]
    pub location: String,
}

/// Authored position requirements, keyed to a target id.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PositionConfig {
    /// The target these requirements belong to.
    pub target: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub clearance: String,
    #[serde(default)]
    pub location: String,
}

/// Authored fit weights. Defaults to the 0.4 / 0.3 / 0.2 / 0.1 split.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_certifications_weight")]
    pub certifications: f64,
    #[serde(default = "default_clearance_weight")]
    pub clearance: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

fn default_skills_weight() -> f64 {
    0.4
}

fn default_certifications_weight() -> f64 {
    0.3
}

fn default_clearance_weight() -> f64 {
    0.2
}

fn default_location_weight() -> f64 {
    0.1
}

impl From<WeightsConfig> for FitWeights {
    fn from(config: WeightsConfig) -> Self {
        FitWeights {
            skills: config.skills,
            certifications: config.certifications,
            clearance: config.clearance,
            location: config.location,
        }
    }
}

impl ExerciseConfig {
    /// Loads an exercise from a file, picking the format by extension
    /// (`.toml`, `.yaml`/`.yml`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            other => Err(ConfigError::UnsupportedFormat(format!(
                "{} (extension {:?})",
                path.display(),
                other
            ))),
        }
    }

    /// Loads an exercise from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses an exercise from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads an exercise from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses an exercise from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Builds the validated catalog.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        let items = self
            .items
            .iter()
            .map(|config| {
                let mut item = Item::new(config.id.as_str(), config.category.as_str());
                if let Some(label) = &config.label {
                    item = item.with_label(label.as_str());
                }
                item
            })
            .collect();
        let targets = self
            .targets
            .iter()
            .map(|config| {
                let mut target = Target::new(config.id.as_str(), config.category.as_str())
                    .with_capacity(config.capacity);
                if let Some(label) = &config.label {
                    target = target.with_label(label.as_str());
                }
                target
            })
            .collect();

        Catalog::new(items, targets).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Builds the judge matching the exercise kind.
    ///
    /// Team exercises require every member and position entry to refer
    /// to an authored item or target.
    pub fn judge(&self) -> Result<ExerciseJudge, ConfigError> {
        match self.kind {
            ExerciseKind::Puzzle => Ok(BinaryJudge::new().into()),
            ExerciseKind::Team => self.team_judge().map(Into::into),
        }
    }

    fn team_judge(&self) -> Result<TeamFitJudge, ConfigError> {
        let mut profiles = HashMap::new();
        for member in &self.members {
            if !self.items.iter().any(|item| item.id == member.item) {
                return Err(ConfigError::Invalid(format!(
                    "member profile refers to unknown item '{}'",
                    member.item
                )));
            }
            profiles.insert(
                member.item.as_str().into(),
                MemberProfile {
                    skills: member.skills.clone(),
                    certifications: member.certifications.clone(),
                    clearance: member.clearance.clone(),
                    location: member.location.clone(),
                },
            );
        }

        let mut requirements = HashMap::new();
        for position in &self.positions {
            if !self.targets.iter().any(|target| target.id == position.target) {
                return Err(ConfigError::Invalid(format!(
                    "position requirements refer to unknown target '{}'",
                    position.target
                )));
            }
            requirements.insert(
                position.target.as_str().into(),
                PositionRequirements {
                    skills: position.skills.clone(),
                    certifications: position.certifications.clone(),
                    clearance: position.clearance.clone(),
                    location: position.location.clone(),
                },
            );
        }

        let mut judge = TeamFitJudge::new(profiles, requirements);
        if let Some(weights) = self.weights {
            judge = judge.with_weights(weights.into());
        }
        Ok(judge)
    }
}
