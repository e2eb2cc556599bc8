//! # circles-states - Initial-state generator for the Circles model
//!
//! This library builds the iteration-zero state file consumed by the Circles
//! agent-based simulation: `N` circular agents placed uniformly at random in
//! a square domain, each with zero force accumulators and a shared radius.
//!
//! ## Architecture
//!
//! - `config`: Immutable run configuration and YAML generator settings
//! - `config_loader`: Settings file loading
//! - `domain`: Square domain sizing and random placement
//! - `generator`: Agent records and the injectable random source
//! - `states`: Document model and text serializer
//! - `orchestrator`: Opens the destination and streams the document
//! - `error`: Error classes and their exit statuses
//! - `utils`: Command-line input validation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use circles_states::config::GeneratorConfig;
//! use circles_states::orchestrator::generate_start_states;
//!
//! let mut config = GeneratorConfig::new(1000);
//! config.seed = Some(42);
//!
//! // Writes 0.xml in the current directory
//! let summary = generate_start_states(&config)?;
//! assert_eq!(summary.agents_written, 1000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Output Format
//!
//! ```text
//! <states>
//!     <itno>0</itno>
//!
//!     <xagent>
//!         <name>Circle</name>
//!         <id>0</id>
//!         <x>-3.1</x>
//!         <y>7.4</y>
//!         <fx>0.0</fx>
//!         <fy>0.0</fy>
//!         <radius>2.0</radius>
//!     </xagent>
//!
//! </states>
//! ```
//!
//! Placement does not check for overlap; coincident or overlapping circles
//! are valid output.
//!
//! ## Error Handling
//!
//! Generation returns [`error::StartStateError`], whose
//! [`exit_code`](error::StartStateError::exit_code) separates usage errors
//! (1) from I/O errors (2). Settings file loading uses `color_eyre` reports
//! with context.

pub mod config;
pub mod config_loader;
pub mod domain;
pub mod error;
pub mod generator;
pub mod orchestrator;
pub mod states;
pub mod utils;
