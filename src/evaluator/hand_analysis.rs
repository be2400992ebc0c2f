use super::rank_groups::{RankCounts, RankGroups};
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let counts = RankCounts::from_ranks(cards.iter().map(|c| c.rank()));

        let rank_groups = RankGroups::from_counts(&counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&counts);

        Self { rank_groups, suit_info, straight_info }
    }

    pub fn is_flush(&self) -> bool {
        self.suit_info.is_flush
    }

    pub fn is_straight(&self) -> bool {
        self.straight_info.is_straight
    }
}
