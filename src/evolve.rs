use crate::{automaton::Automaton, generation::Generation};
use tracing::{debug, trace};

impl Automaton {
    /// Computes the generation after `generation`. Every cell reads its
    /// neighborhood from `generation` only, never from the row being built.
    pub fn step(&self, generation: &Generation) -> Generation {
        let cells = (0..generation.width())
            .map(|i| {
                let (left, center, right) = generation.neighborhood(i);
                self.rule.evaluate(left, center, right)
            })
            .collect();
        Generation::from_cells_unchecked(cells)
    }

    /// Appends `steps` new generations. Does nothing if `steps <= 0`.
    pub fn advance(&mut self, steps: i64) {
        if steps > 0 {
            self.advance_by(steps as usize);
        }
    }

    pub(crate) fn advance_by(&mut self, steps: usize) {
        debug!(
            rule = self.rule.number(),
            from = self.total_steps(),
            steps,
            "advancing"
        );
        for _ in 0..steps {
            let next = self.step(self.current());
            self.computed += 1;
            trace!(
                step = self.total_steps() + 1,
                population = next.population(),
                "computed generation"
            );
            self.push(next);
        }
    }
}
