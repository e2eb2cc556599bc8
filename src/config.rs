use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default output file name for generated start states
pub const DEFAULT_OUTPUT: &str = "0.xml";

/// Default radius shared by every generated agent
pub const DEFAULT_RADIUS: f64 = 2.0;

/// Output path that selects standard output instead of a file
pub const STDOUT_MARKER: &str = "-";

/// Where the generated document is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// Map a user-supplied path, treating `-` as standard output
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new(STDOUT_MARKER) {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Immutable configuration for a single generation run.
///
/// Built once from the command line (and an optional settings file) and
/// passed by reference to the generation and serialization steps.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of agents to place; zero and negative values produce no records
    pub agent_count: i64,
    /// Radius shared by every agent
    pub radius: f64,
    /// Output destination
    pub output: OutputTarget,
    /// (Optional) Seed for the random source; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Configuration with default output and radius for `agent_count` agents
    pub fn new(agent_count: i64) -> Self {
        Self {
            agent_count,
            radius: DEFAULT_RADIUS,
            output: OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT)),
            seed: None,
        }
    }

    /// Resolve a configuration from settings-file values and CLI overrides.
    ///
    /// CLI values win over the settings file, which wins over the built-in
    /// defaults. The merged result is validated before it is returned.
    pub fn resolve(
        agent_count: i64,
        settings: &GeneratorSettings,
        overrides: &GeneratorSettings,
    ) -> Result<Self, ValidationError> {
        let merged = settings.merged_with(overrides);
        merged.validate()?;

        let output = merged
            .output
            .as_deref()
            .map(OutputTarget::from_path)
            .unwrap_or_else(|| OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT)));

        Ok(Self {
            agent_count,
            radius: merged.radius.unwrap_or(DEFAULT_RADIUS),
            output,
            seed: merged.seed,
        })
    }
}

/// Generator settings as read from a YAML settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// (Optional) Output path (default: "0.xml", "-" for stdout)
    pub output: Option<PathBuf>,
    /// (Optional) Agent radius (default: 2.0)
    pub radius: Option<f64>,
    /// (Optional) Random seed (default: seeded from entropy)
    pub seed: Option<u64>,
}

impl GeneratorSettings {
    /// Overlay `overrides` onto these settings, field by field
    pub fn merged_with(&self, overrides: &GeneratorSettings) -> GeneratorSettings {
        GeneratorSettings {
            output: overrides.output.clone().or_else(|| self.output.clone()),
            radius: overrides.radius.or(self.radius),
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ValidationError::InvalidRadius(radius));
            }
        }

        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(ValidationError::EmptyOutput);
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid radius {0}: must be a finite number greater than zero")]
    InvalidRadius(f64),
    #[error("Output path cannot be empty")]
    EmptyOutput,
}
