use crate::{error::Error, generation::Generation, read::Symbols, rule::Rule};
use rustc_hash::FxHashMap;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs::File,
    io::{BufWriter, Write},
    ops::Index,
    path::Path,
};
use tracing::debug;

#[derive(Hash, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug)]
pub(crate) struct RowId(u32);

#[derive(Clone, Debug)]
pub(crate) struct RowData {
    pub(crate) generation: Generation,
    first_step: usize,
}

/// The generation at step `start` reappears at step `start + period`, and the
/// evolution repeats with that period from then on.
#[derive(Hash, Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cycle {
    pub start: usize,
    pub period: usize,
}

/// An elementary cellular automaton together with every generation it has
/// reached so far.
///
/// Generations are only ever appended. Each distinct row is stored once in
/// `rows` and looked up through `hash_table`; `timeline[t]` names the row of
/// step `t`.
#[derive(Clone, Debug)]
pub struct Automaton {
    pub(crate) rule: Rule,
    hash_table: FxHashMap<Generation, RowId>,
    rows: Vec<RowData>,
    timeline: Vec<RowId>,
    cycle: Option<Cycle>,
    pub(crate) computed: u64,
}

impl Index<RowId> for Automaton {
    type Output = RowData;

    fn index(&self, id: RowId) -> &Self::Output {
        &self.rows[id.0 as usize]
    }
}

impl Automaton {
    pub fn new(rule: Rule, initial: Generation) -> Self {
        let mut automaton = Automaton {
            rule,
            hash_table: FxHashMap::default(),
            rows: Vec::new(),
            timeline: Vec::new(),
            cycle: None,
            computed: 0,
        };
        automaton.push(initial);
        automaton
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn rule_number(&self) -> u8 {
        self.rule.number()
    }

    pub fn width(&self) -> usize {
        self.current().width()
    }

    /// The latest step reached so far.
    pub fn total_steps(&self) -> usize {
        self.timeline.len() - 1
    }

    /// How many generations have been computed by [`Automaton::step`] during
    /// the lifetime of this automaton.
    pub fn computed(&self) -> u64 {
        self.computed
    }

    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }

    pub fn current(&self) -> &Generation {
        &self[self.timeline[self.total_steps()]].generation
    }

    /// Returns the generation at `step` if it has already been reached.
    pub fn get(&self, step: usize) -> Option<&Generation> {
        self.timeline
            .get(step)
            .map(|&id| &self[id].generation)
    }

    /// Returns the generation at `step`, evolving the automaton first if
    /// that step has not been reached yet.
    pub fn generation_at(&mut self, step: i64) -> Result<&Generation, Error> {
        let step = usize::try_from(step).map_err(|_| Error::InvalidStep(step))?;
        if step > self.total_steps() {
            self.advance_by(step - self.total_steps());
        }
        let id = self.timeline[step];
        Ok(&self[id].generation)
    }

    pub fn generations(&self) -> impl Iterator<Item = &Generation> + '_ {
        self.timeline.iter().map(move |&id| &self[id].generation)
    }

    /// One line per stored generation, oldest first.
    pub fn render(&self, dead: char, alive: char) -> Vec<String> {
        self.generations()
            .map(|generation| generation.to_symbols(dead, alive))
            .collect()
    }

    pub fn to_text(&self, symbols: Symbols) -> String {
        self.render(symbols.dead, symbols.alive).join("\n")
    }

    pub fn write_evolution<W: Write>(&self, mut writer: W, symbols: Symbols) -> Result<(), Error> {
        writer.write_all(self.to_text(symbols).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn save_evolution<P: AsRef<Path>>(&self, path: P, symbols: Symbols) -> Result<(), Error> {
        let file = File::create(path)?;
        self.write_evolution(BufWriter::new(file), symbols)
    }

    pub(crate) fn push(&mut self, generation: Generation) {
        debug_assert!(
            self.timeline.is_empty() || generation.width() == self.width(),
            "All generations must have the same width."
        );
        let step = self.timeline.len();
        let id = match self.hash_table.get(&generation).copied() {
            Some(id) => {
                if self.cycle.is_none() {
                    let start = self[id].first_step;
                    let cycle = Cycle {
                        start,
                        period: step - start,
                    };
                    debug!(start, period = cycle.period, "generation repeated");
                    self.cycle = Some(cycle);
                }
                id
            }
            None => {
                let id = RowId(self.rows.len() as u32);
                self.hash_table.insert(generation.clone(), id);
                self.rows.push(RowData {
                    generation,
                    first_step: step,
                });
                id
            }
        };
        self.timeline.push(id);
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_text(Symbols::default()))
    }
}
