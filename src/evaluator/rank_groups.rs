use crate::cards::Rank;

/// Rank multiset of a hand: how many cards of each rank it holds.
///
/// Indexed by rank value (2-14); slots 0 and 1 stay empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankCounts([u8; 15]);

impl RankCounts {
    pub fn from_ranks<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }
        Self(counts)
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.0[rank.value() as usize]
    }

    /// Present ranks in ascending order.
    pub fn distinct_ranks(&self) -> Vec<Rank> {
        Rank::ALL.iter().copied().filter(|&r| self.count(r) > 0).collect()
    }
}

/// Present ranks of a hand with their frequency, e.g. QQQ77 holds
/// (Seven, 2) and (Queen, 3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_counts(counts: &RankCounts) -> Self {
        let groups =
            counts.distinct_ranks().into_iter().map(|rank| (rank, counts.count(rank))).collect();
        Self { groups }
    }

    fn ranks_with(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == count).map(|(rank, _)| *rank)
    }

    pub fn has_four_of_a_kind(&self) -> bool {
        self.ranks_with(4).next().is_some()
    }

    /// True only for an exact triple; four of a kind does not count.
    pub fn has_three_of_a_kind(&self) -> bool {
        self.ranks_with(3).next().is_some()
    }

    pub fn pair_count(&self) -> usize {
        self.ranks_with(2).count()
    }

    pub fn has_pair(&self) -> bool {
        self.pair_count() > 0
    }

    pub fn has_two_pairs(&self) -> bool {
        self.pair_count() >= 2
    }
}
