//! Agent record generation.
//!
//! Records are produced lazily by [`AgentPlacer`] so the serializer can stream
//! them straight to the destination. The random source is always passed in,
//! which keeps generation deterministic under a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use log::debug;

use crate::domain::Domain;

/// Agent type name written into every record
pub const AGENT_NAME: &str = "Circle";

/// Initial state of one circular agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentState {
    /// Zero-based generation index
    pub id: u64,
    pub x: f64,
    pub y: f64,
    /// Force accumulators, always zero at generation
    pub fx: f64,
    pub fy: f64,
    pub radius: f64,
}

impl AgentState {
    /// Agent at rest at the given position
    pub fn at_rest(id: u64, x: f64, y: f64, radius: f64) -> Self {
        Self { id, x, y, fx: 0.0, fy: 0.0, radius }
    }
}

/// Iterator placing agents one at a time in id order
pub struct AgentPlacer<'a, R: Rng + ?Sized> {
    domain: Domain,
    rng: &'a mut R,
    next_id: u64,
    count: u64,
}

impl<'a, R: Rng + ?Sized> AgentPlacer<'a, R> {
    /// Place `agent_count` agents of `radius`; non-positive counts yield nothing
    pub fn new(agent_count: i64, radius: f64, rng: &'a mut R) -> Self {
        let domain = Domain::for_agents(agent_count, radius);
        debug!("Placing {} agents in a square domain of side {}", agent_count, domain.side);
        Self {
            domain,
            rng,
            next_id: 0,
            count: u64::try_from(agent_count).unwrap_or(0),
        }
    }

    /// Domain the agents are placed in
    pub fn domain(&self) -> Domain {
        self.domain
    }
}

impl<R: Rng + ?Sized> Iterator for AgentPlacer<'_, R> {
    type Item = AgentState;

    fn next(&mut self) -> Option<AgentState> {
        if self.next_id >= self.count {
            return None;
        }

        let (x, y) = self.domain.place(&mut *self.rng);
        let agent = AgentState::at_rest(self.next_id, x, y, self.domain.radius);
        self.next_id += 1;
        Some(agent)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next_id).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Generate all agent records into memory
pub fn generate_agents<R: Rng + ?Sized>(agent_count: i64, radius: f64, rng: &mut R) -> Vec<AgentState> {
    AgentPlacer::new(agent_count, radius, rng).collect()
}

/// Random source for a run: seeded when a seed is given, otherwise from entropy
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using random seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_ids() {
        let mut rng = seeded_rng(Some(1));
        let agents = generate_agents(25, 2.0, &mut rng);

        assert_eq!(agents.len(), 25);
        for (index, agent) in agents.iter().enumerate() {
            assert_eq!(agent.id, index as u64);
        }
    }

    #[test]
    fn test_forces_zero_and_radius_constant() {
        let mut rng = seeded_rng(Some(2));
        for agent in generate_agents(40, 3.5, &mut rng) {
            assert_eq!(agent.fx, 0.0);
            assert_eq!(agent.fy, 0.0);
            assert_eq!(agent.radius, 3.5);
        }
    }

    #[test]
    fn test_zero_and_negative_counts_are_empty() {
        let mut rng = seeded_rng(Some(3));
        assert!(generate_agents(0, 2.0, &mut rng).is_empty());
        assert!(generate_agents(-5, 2.0, &mut rng).is_empty());
    }

    #[test]
    fn test_positions_within_domain() {
        let count = 200;
        let radius = 2.0;
        let side = ((count as f64).sqrt() + 1.0) * 2.0 * radius;
        let lower = -side / 2.0 + radius * 0.5;
        let upper = side / 2.0 + radius * 0.5;

        let mut rng = seeded_rng(Some(4));
        for agent in generate_agents(count, radius, &mut rng) {
            assert!(agent.x >= lower && agent.x < upper, "x out of range: {}", agent.x);
            assert!(agent.y >= lower && agent.y < upper, "y out of range: {}", agent.y);
        }
    }

    #[test]
    fn test_same_seed_same_agents() {
        let first = generate_agents(10, 2.0, &mut seeded_rng(Some(99)));
        let second = generate_agents(10, 2.0, &mut seeded_rng(Some(99)));
        let other = generate_agents(10, 2.0, &mut seeded_rng(Some(100)));

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_placer_size_hint() {
        let mut rng = seeded_rng(Some(5));
        let mut placer = AgentPlacer::new(3, 2.0, &mut rng);
        assert_eq!(placer.size_hint(), (3, Some(3)));
        placer.next();
        assert_eq!(placer.size_hint(), (2, Some(2)));
        assert_eq!(placer.domain().side, (3f64.sqrt() + 1.0) * 4.0);
    }
}
