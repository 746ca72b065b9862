use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{ScoringSettings, TailRule};

pub type Placement = i64;
pub type Points = u32;
/// Sum of many `Points`, wide enough that totals never overflow.
pub type TotalPoints = u64;

/// Placement → points lookup for one scoring season.
///
/// Explicit entries win; past the tail cutoff (and past the last explicit
/// entry) every placement earns the tail value; anything else earns nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringTable {
    entries: BTreeMap<u32, Points>,
    tail: Option<TailRule>,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::from_settings(&ScoringSettings::default())
    }
}

impl ScoringTable {
    pub fn new(entries: BTreeMap<u32, Points>, tail: Option<TailRule>) -> Self {
        Self { entries, tail }
    }

    /// Build a table from configuration. Ranges expand into explicit
    /// entries; an explicit `points` entry wins over an overlapping range.
    pub fn from_settings(settings: &ScoringSettings) -> Self {
        let mut entries = BTreeMap::new();

        for range in &settings.ranges {
            for placement in range.from.max(1)..=range.to {
                entries.insert(placement, range.points);
            }
        }

        for (&placement, &points) in &settings.points {
            if placement > 0 {
                entries.insert(placement, points);
            }
        }

        Self::new(entries, settings.tail)
    }

    pub fn points_for(&self, rank: Placement) -> Points {
        let Some(rank) = to_placement(rank) else {
            return 0;
        };

        if let Some(&points) = self.entries.get(&rank) {
            return points;
        }

        self.tail_points(rank).unwrap_or(0)
    }

    pub fn is_rank_eligible(&self, rank: Placement) -> bool {
        match to_placement(rank) {
            Some(rank) => self.entries.contains_key(&rank) || self.tail_points(rank).is_some(),
            None => false,
        }
    }

    /// Placements with an explicit entry, ascending.
    pub fn eligible_ranks(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }

    pub fn max_points_per_tournament(&self) -> Points {
        self.entries.get(&1).copied().unwrap_or(0)
    }

    pub fn tail(&self) -> Option<TailRule> {
        self.tail
    }

    pub fn entries(&self) -> &BTreeMap<u32, Points> {
        &self.entries
    }

    fn tail_points(&self, rank: u32) -> Option<Points> {
        let tail = self.tail?;
        let past_table = self.largest_explicit().is_none_or(|last| rank > last);

        (rank >= tail.cutoff && past_table).then_some(tail.points)
    }

    fn largest_explicit(&self) -> Option<u32> {
        self.entries.keys().next_back().copied()
    }
}

fn to_placement(rank: Placement) -> Option<u32> {
    if rank <= 0 {
        return None;
    }
    Some(u32::try_from(rank).unwrap_or(u32::MAX))
}
