//! # Start-states document model and serializer
//!
//! Renders a [`StatesDocument`] into the tag-delimited text format read by the
//! Circles model at iteration zero:
//!
//! ```text
//! <states>
//!     <itno>0</itno>
//!
//!     <xagent>
//!         <name>Circle</name>
//!         <id>0</id>
//!         <x>1.5</x>
//!         <y>-0.25</y>
//!         <fx>0.0</fx>
//!         <fy>0.0</fy>
//!         <radius>2.0</radius>
//!     </xagent>
//!
//! </states>
//! ```
//!
//! Output is plain text substitution; nothing is escaped or validated. The
//! header, record and footer writers are exposed separately so callers can
//! stream records without holding the whole document in memory.

use std::io::{self, Write};

use crate::generator::{AgentState, AGENT_NAME};

/// Iteration number written into an initial-state document
pub const INITIAL_ITERATION: u32 = 0;

/// A complete start-states document held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct StatesDocument {
    /// Iteration marker
    pub itno: u32,
    /// Agent records in id order
    pub agents: Vec<AgentState>,
}

impl StatesDocument {
    /// Initial-state document wrapping `agents`
    pub fn initial(agents: Vec<AgentState>) -> Self {
        Self { itno: INITIAL_ITERATION, agents }
    }
}

/// Render a float the way the model reads it back: shortest round-trip
/// decimal form, always with a fractional part (`0.0`, `2.0`).
fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

pub fn write_header<W: Write + ?Sized>(out: &mut W, itno: u32) -> io::Result<()> {
    write!(out, "<states>\n    <itno>{}</itno>\n", itno)
}

/// Write one `<xagent>` block, preceded by a blank line.
pub fn write_agent<W: Write + ?Sized>(out: &mut W, agent: &AgentState) -> io::Result<()> {
    write!(
        out,
        "\n    <xagent>\n\
         \x20       <name>{}</name>\n\
         \x20       <id>{}</id>\n\
         \x20       <x>{}</x>\n\
         \x20       <y>{}</y>\n\
         \x20       <fx>{}</fx>\n\
         \x20       <fy>{}</fy>\n\
         \x20       <radius>{}</radius>\n\
         \x20   </xagent>\n",
        AGENT_NAME,
        agent.id,
        format_float(agent.x),
        format_float(agent.y),
        format_float(agent.fx),
        format_float(agent.fy),
        format_float(agent.radius),
    )
}

pub fn write_footer<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    write!(out, "\n</states>\n")
}

/// Serialize a whole document in a single pass
pub fn write_states<W: Write + ?Sized>(doc: &StatesDocument, out: &mut W) -> io::Result<()> {
    write_header(out, doc.itno)?;
    for agent in &doc.agents {
        write_agent(out, agent)?;
    }
    write_footer(out)
}

/// Serialize a document into a `String`
pub fn render_states(doc: &StatesDocument) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_states(doc, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
