//! Win/loss counters and the store that keeps them between sessions.

use serde::{Deserialize, Serialize};

use crate::core::{Side, StatsError};

/// Results counted from sente's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub wins: u32,
    pub loses: u32,
}

impl Stats {
    /// Counts one finished game.
    pub fn record(&mut self, winner: Side) {
        match winner {
            Side::Sente => self.wins += 1,
            Side::Gote => self.loses += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.loses
    }
}

/// Persistence of [`Stats`], supplied by the embedding application.
pub trait StatsStore {
    fn load(&mut self) -> Result<Stats, StatsError>;
    fn save(&mut self, stats: &Stats) -> Result<(), StatsError>;
}

/// Keeps the counters in memory for the lifetime of the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStats {
    stats: Stats,
    saves: usize,
}

impl MemoryStats {
    pub fn new() -> MemoryStats {
        Default::default()
    }

    pub fn with_stats(stats: Stats) -> MemoryStats {
        MemoryStats { stats, saves: 0 }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StatsStore for MemoryStats {
    fn load(&mut self) -> Result<Stats, StatsError> {
        Ok(self.stats)
    }

    fn save(&mut self, stats: &Stats) -> Result<(), StatsError> {
        self.stats = *stats;
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_winner() {
        let mut stats = Stats::default();
        let cases = [(Side::Sente, 1, 0), (Side::Gote, 1, 1), (Side::Sente, 2, 1)];

        for case in cases.iter() {
            stats.record(case.0);
            assert_eq!(case.1, stats.wins);
            assert_eq!(case.2, stats.loses);
        }
        assert_eq!(3, stats.games());
    }

    #[test]
    fn memory_store_keeps_last_save() {
        let mut store = MemoryStats::with_stats(Stats { wins: 2, loses: 5 });
        assert_eq!(Ok(Stats { wins: 2, loses: 5 }), store.load());

        store.save(&Stats { wins: 3, loses: 5 }).unwrap();
        assert_eq!(Ok(Stats { wins: 3, loses: 5 }), store.load());
        assert_eq!(1, store.saves());
    }
}
