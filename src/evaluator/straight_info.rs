use super::rank_groups::RankCounts;

/// Whether a hand's ranks form a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

impl StraightInfo {
    /// Five distinct ranks with a step of one between neighbours.
    /// Ace only ever sits above King, so A-2-3-4-5 is not a straight.
    pub fn detect(counts: &RankCounts) -> Self {
        let ranks = counts.distinct_ranks();
        let is_straight =
            ranks.len() == 5 && ranks.windows(2).all(|w| w[1].value() == w[0].value() + 1);
        StraightInfo { is_straight }
    }
}
