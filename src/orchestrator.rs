//! High-level orchestration of start-state generation.
//!
//! Opens the output destination once, streams header, agent records and
//! footer through a buffered writer, then flushes and closes it.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use log::{info, warn};
use rand::Rng;

use crate::config::{GeneratorConfig, OutputTarget};
use crate::domain::Domain;
use crate::error::StartStateError;
use crate::generator::{seeded_rng, AgentPlacer};
use crate::states::{self, INITIAL_ITERATION};

/// Outcome of a successful generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Number of `<xagent>` records written
    pub agents_written: u64,
    /// Domain the agents were placed in
    pub domain: Domain,
    /// Where the document went
    pub destination: OutputTarget,
}

/// Stream a start-states document for `config` into `out`.
///
/// Returns the number of records written. The caller owns `out` and is
/// responsible for flushing it.
pub fn write_start_states<W, R>(config: &GeneratorConfig, out: &mut W, rng: &mut R) -> io::Result<(u64, Domain)>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let placer = AgentPlacer::new(config.agent_count, config.radius, rng);
    let domain = placer.domain();

    states::write_header(out, INITIAL_ITERATION)?;
    let mut written = 0u64;
    for agent in placer {
        states::write_agent(out, &agent)?;
        written += 1;
    }
    states::write_footer(out)?;

    Ok((written, domain))
}

/// Generate the start-states document described by `config`.
///
/// A destination that cannot be created is reported as
/// [`StartStateError::Open`] and leaves no file behind.
pub fn generate_start_states(config: &GeneratorConfig) -> Result<GenerationSummary, StartStateError> {
    if config.agent_count < 0 {
        warn!("Negative agent count {} requested; writing an empty document", config.agent_count);
    }

    let destination = config.output.to_string();
    let mut rng = seeded_rng(config.seed);

    let (agents_written, domain) = match &config.output {
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|source| StartStateError::Open {
                path: destination.clone(),
                source,
            })?;
            let mut out = BufWriter::new(file);
            write_start_states(config, &mut out, &mut rng)
                .and_then(|summary| out.flush().map(|_| summary))
        }
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_start_states(config, &mut out, &mut rng)
                .and_then(|summary| out.flush().map(|_| summary))
        }
    }
    .map_err(|source| StartStateError::Write {
        path: destination.clone(),
        source,
    })?;

    info!(
        "Wrote {} agents to {} (domain side {:.3}, radius {})",
        agents_written, destination, domain.side, config.radius
    );

    Ok(GenerationSummary {
        agents_written,
        domain,
        destination: config.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir, agent_count: i64) -> GeneratorConfig {
        GeneratorConfig {
            output: OutputTarget::File(dir.path().join("0.xml")),
            seed: Some(17),
            ..GeneratorConfig::new(agent_count)
        }
    }

    #[test]
    fn test_write_start_states_into_buffer() {
        let config = GeneratorConfig::new(3);
        let mut buf = Vec::new();
        let (written, domain) = write_start_states(&config, &mut buf, &mut seeded_rng(Some(1))).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(written, 3);
        assert_eq!(domain.side, (3f64.sqrt() + 1.0) * 4.0);
        assert_eq!(text.matches("<xagent>").count(), 3);
        assert!(text.starts_with("<states>\n    <itno>0</itno>\n"));
        assert!(text.ends_with("\n</states>\n"));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, 5);

        let summary = generate_start_states(&config).unwrap();
        assert_eq!(summary.agents_written, 5);
        assert_eq!(summary.destination, config.output);

        let text = std::fs::read_to_string(dir.path().join("0.xml")).unwrap();
        assert_eq!(text.matches("<xagent>").count(), 5);
        assert_eq!(text.matches("<radius>2.0</radius>").count(), 5);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, 8);

        generate_start_states(&config).unwrap();
        let first = std::fs::read_to_string(dir.path().join("0.xml")).unwrap();
        generate_start_states(&config).unwrap();
        let second = std::fs::read_to_string(dir.path().join("0.xml")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing").join("0.xml");
        let config = GeneratorConfig {
            output: OutputTarget::File(target.clone()),
            ..GeneratorConfig::new(2)
        };

        let err = generate_start_states(&config).unwrap_err();
        assert!(matches!(err, StartStateError::Open { .. }));
        assert_eq!(err.exit_code(), crate::error::EXIT_IO);
        assert!(!target.exists());
    }

    #[test]
    fn test_negative_count_writes_empty_document() {
        let dir = TempDir::new().unwrap();
        let summary = generate_start_states(&config_in(&dir, -3)).unwrap();
        assert_eq!(summary.agents_written, 0);

        let text = std::fs::read_to_string(dir.path().join("0.xml")).unwrap();
        assert_eq!(text, "<states>\n    <itno>0</itno>\n\n</states>\n");
    }
}
