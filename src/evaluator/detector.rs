use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// Strategy pattern: each detector owns one category and the predicate for it.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.is_straight()
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_four_of_a_kind()
    }
}

/// Triple plus a pair. With five cards the pair is always a different rank.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_three_of_a_kind() && analysis.rank_groups.has_pair()
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush()
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight()
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_three_of_a_kind()
    }
}

pub struct TwoPairsDetector;

impl CategoryDetector for TwoPairsDetector {
    fn category(&self) -> Category {
        Category::TwoPairs
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_two_pairs()
    }
}

pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_pair()
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // fallback
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairsDetector,
    &PairDetector,
    &HighCardDetector,
];
