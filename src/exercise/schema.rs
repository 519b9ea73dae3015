//! Exercise Schema Types
//!
//! File types match the TOML layout; runtime types hold compiled patterns.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

/// Root exercise file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExerciseFile {
    pub exercise: ExerciseMeta,
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

/// Exercise metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExerciseMeta {
    pub name: String,
    pub description: Option<String>,
}

/// A rule as written in the exercise file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RuleDef {
    pub name: String,
    pub pattern: String,
    /// Match `pattern` verbatim instead of as a regular expression
    #[serde(default)]
    pub literal: bool,
    /// Reported when the pattern is absent from the solution
    pub message: String,
}

/// Runtime exercise: rules in evaluation order
#[derive(Debug, Clone)]
pub struct Exercise {
    pub name: String,
    pub description: Option<String>,
    pub rules: Vec<Rule>,
}

/// A compiled rule
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub pattern: Regex,
    pub message: String,
}

impl Rule {
    /// Does the raw solution text contain the pattern?
    ///
    /// Matches inside comments or unrelated strings count too.
    pub fn matches(&self, source: &str) -> bool {
        self.pattern.is_match(source)
    }
}

impl TryFrom<RuleDef> for Rule {
    type Error = anyhow::Error;

    fn try_from(def: RuleDef) -> Result<Self> {
        let pattern = if def.literal {
            regex::escape(&def.pattern)
        } else {
            def.pattern.clone()
        };
        let pattern = Regex::new(&pattern)
            .with_context(|| format!("Invalid pattern for rule '{}'", def.name))?;

        Ok(Self {
            name: def.name,
            pattern,
            message: def.message,
        })
    }
}

impl TryFrom<ExerciseFile> for Exercise {
    type Error = anyhow::Error;

    fn try_from(file: ExerciseFile) -> Result<Self> {
        let name = file.exercise.name;
        let rules = file
            .rules
            .into_iter()
            .map(Rule::try_from)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Failed to compile exercise '{name}'"))?;

        Ok(Self {
            name,
            description: file.exercise.description,
            rules,
        })
    }
}

impl Exercise {
    /// Parse and compile an exercise from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ExerciseFile = toml::from_str(content).context("Failed to parse exercise TOML")?;
        Self::try_from(file)
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }
}
