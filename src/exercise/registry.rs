//! Exercise Registry
//!
//! In-memory set of exercises keyed by name, with one active selection.
//! Loading priority: built-in < user config directory < `--exercise-dir`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::schema::Exercise;
use crate::config::Config;

/// File suffix for exercise definitions
pub const EXERCISE_FILE_SUFFIX: &str = ".exercise.toml";

/// Name of the exercise compiled into the binary
pub const BUILTIN_EXERCISE: &str = "hello_world";

/// In-memory exercise registry
#[derive(Debug, Clone, Default)]
pub struct ExerciseRegistry {
    exercises: HashMap<String, Exercise>,
    active_exercise: Option<String>,
}

impl ExerciseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry described by a configuration and activate its exercise
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::new();
        registry.add_embedded_hello_world()?;

        for dir in &config.exercise_dirs {
            let loaded = registry.load_directory(dir)?;
            log::debug!("loaded {} exercises from {}", loaded, dir.display());
        }

        if !registry.set_active_exercise(&config.exercise) {
            bail!(
                "Unknown exercise '{}' (available: {})",
                config.exercise,
                registry.list_exercises().join(", ")
            );
        }

        Ok(registry)
    }

    /// Add an exercise, replacing any existing one with the same name
    pub fn add_exercise(&mut self, exercise: Exercise) {
        if self.exercises.contains_key(&exercise.name) {
            log::debug!("exercise '{}' overridden", exercise.name);
        }
        self.exercises.insert(exercise.name.clone(), exercise);
    }

    /// Set the active exercise
    pub fn set_active_exercise(&mut self, name: &str) -> bool {
        if self.exercises.contains_key(name) {
            self.active_exercise = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// Get the currently active exercise
    pub fn get_active_exercise(&self) -> Option<&Exercise> {
        self.active_exercise
            .as_ref()
            .and_then(|name| self.exercises.get(name))
    }

    pub fn get_exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.get(name)
    }

    /// List exercise names, sorted
    pub fn list_exercises(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.exercises.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Add the built-in hello world exercise
    pub fn add_embedded_hello_world(&mut self) -> Result<()> {
        let embedded_toml = include_str!("../../resources/exercises/hello_world.exercise.toml");
        let exercise =
            Exercise::from_toml(embedded_toml).context("Failed to load built-in exercise")?;
        self.add_exercise(exercise);
        Ok(())
    }

    /// Load a single exercise file
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read exercise file: {}", path.display()))?;
        let exercise = Exercise::from_toml(&content)
            .with_context(|| format!("Failed to load exercise file: {}", path.display()))?;
        self.add_exercise(exercise);
        Ok(())
    }

    /// Load every `*.exercise.toml` file in a directory
    ///
    /// A missing directory loads nothing. Broken files are logged and skipped.
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Ok(0);
        }

        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read exercise directory: {}", dir.display()))?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_exercise_file(path))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match self.load_file(&path) {
                Ok(()) => loaded += 1,
                Err(e) => log::warn!("Skipping exercise file {}: {:#}", path.display(), e),
            }
        }

        Ok(loaded)
    }
}

fn is_exercise_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(EXERCISE_FILE_SUFFIX))
}
