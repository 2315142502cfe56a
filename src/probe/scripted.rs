//! Scripted sample source.
//!
//! Plays back a fixed sequence of readings, then repeats a tail value
//! forever. Used by `--simulate` and throughout the tests.

use std::collections::VecDeque;

use crate::probe::SampleSource;

#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: VecDeque<bool>,
    tail: bool,
    draws: u64,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = bool>, tail: bool) -> Self {
        Self {
            script: script.into_iter().collect(),
            tail,
            draws: 0,
        }
    }

    /// A flapping host: brief outages absorbed by retries, then a long one.
    ///
    /// 4 up, one full retry sequence down, 5 up, ten retry sequences down,
    /// then up forever.
    pub fn simulation(retries: u32) -> Self {
        let burst = retries as usize + 1;
        let script = std::iter::repeat(true)
            .take(4)
            .chain(std::iter::repeat(false).take(burst))
            .chain(std::iter::repeat(true).take(5))
            .chain(std::iter::repeat(false).take(burst * 10));
        Self::new(script, true)
    }

    /// Number of readings drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Readings left before the tail value repeats.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next_reading(&mut self) -> bool {
        self.draws += 1;
        self.script.pop_front().unwrap_or(self.tail)
    }
}

impl SampleSource for ScriptedSource {
    async fn sample(&mut self) -> bool {
        self.next_reading()
    }
}
