//! Square placement domain for generated agents.
//!
//! The domain side grows with the square root of the agent count so that
//! the area available per agent stays roughly constant. Placement is purely
//! random; circles may overlap.

use rand::Rng;

/// Square region in which agents are placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Side length of the square
    pub side: f64,
    /// Agent radius the domain was sized for
    pub radius: f64,
}

impl Domain {
    /// Size a domain for `agent_count` agents of the given radius.
    ///
    /// `side = (sqrt(agent_count) + 1) * 2 * radius`. A negative count yields
    /// a NaN side; no agents are placed in that case so it is never sampled.
    pub fn for_agents(agent_count: i64, radius: f64) -> Self {
        let side = ((agent_count as f64).sqrt() + 1.0) * 2.0 * radius;
        Self { side, radius }
    }

    /// Offset added to a scaled draw so the domain is centred near the origin
    fn offset(&self) -> f64 {
        self.radius * 0.5 - self.side * 0.5
    }

    /// Half-open coordinate range `[lower, upper)` valid on both axes
    pub fn bounds(&self) -> (f64, f64) {
        let lower = self.offset();
        (lower, lower + self.side)
    }

    /// Map a unit draw in `[0, 1)` onto one axis of the domain
    pub fn scale(&self, unit: f64) -> f64 {
        unit * self.side + self.radius * 0.5 - self.side * 0.5
    }

    /// Draw a random position, x first then y.
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let x = self.scale(rng.gen::<f64>());
        let y = self.scale(rng.gen::<f64>());
        (x, y)
    }
}
