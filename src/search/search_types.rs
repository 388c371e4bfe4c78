//! Value types threaded through the recursive search.

use crate::board::board_types::Move;

/// Alpha/beta window edge. The derived ordering puts `NegativeExtreme` below
/// every finite value and `PositiveExtreme` above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bound {
    NegativeExtreme,
    Finite(i32),
    PositiveExtreme,
}

/// Remaining search depth in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthLimit {
    Limited(u32),
    /// Search until boards with no legal move for the side to move.
    Unlimited,
}

impl DepthLimit {
    /// Handshake convention: any negative value means no limit.
    pub fn from_signed(limit: i64) -> Self {
        if limit < 0 {
            DepthLimit::Unlimited
        } else {
            DepthLimit::Limited(u32::try_from(limit).unwrap_or(u32::MAX))
        }
    }

    #[inline]
    pub fn is_exhausted(self) -> bool {
        matches!(self, DepthLimit::Limited(0))
    }

    #[inline]
    pub fn decrement(self) -> Self {
        match self {
            DepthLimit::Limited(n) => DepthLimit::Limited(n.saturating_sub(1)),
            DepthLimit::Unlimited => DepthLimit::Unlimited,
        }
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        DepthLimit::Limited(4)
    }
}

/// Result of evaluating one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeOutcome {
    /// Terminal board or depth cutoff; only the value is meaningful.
    Leaf { value: i32 },
    /// Expanded node with the chosen move and its backed-up value.
    Best { mv: Move, value: i32 },
}

impl NodeOutcome {
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            NodeOutcome::Leaf { value } | NodeOutcome::Best { value, .. } => value,
        }
    }

    #[inline]
    pub fn best_move(self) -> Option<Move> {
        match self {
            NodeOutcome::Leaf { .. } => None,
            NodeOutcome::Best { mv, .. } => Some(mv),
        }
    }
}

/// Counters for a single `select_move_*` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes evaluated, leaves included. Cache hits are not counted.
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
    pub cache_hits: u64,
}

#[cfg(test)]
mod tests {
    use super::{Bound, DepthLimit, NodeOutcome};
    use crate::board::board_types::Move;

    #[test]
    fn bounds_order_extremes_around_finite_values() {
        assert!(Bound::NegativeExtreme < Bound::Finite(i32::MIN));
        assert!(Bound::Finite(-3) < Bound::Finite(2));
        assert!(Bound::Finite(i32::MAX) < Bound::PositiveExtreme);
        assert!(Bound::PositiveExtreme >= Bound::PositiveExtreme);
    }

    #[test]
    fn depth_limit_from_handshake_value() {
        assert_eq!(DepthLimit::from_signed(-1), DepthLimit::Unlimited);
        assert_eq!(DepthLimit::from_signed(3), DepthLimit::Limited(3));
        assert!(DepthLimit::from_signed(0).is_exhausted());
    }

    #[test]
    fn unlimited_never_exhausts() {
        let mut depth = DepthLimit::Unlimited;
        for _ in 0..10_000 {
            depth = depth.decrement();
        }
        assert!(!depth.is_exhausted());

        assert_eq!(DepthLimit::Limited(1).decrement(), DepthLimit::Limited(0));
        assert_eq!(DepthLimit::Limited(0).decrement(), DepthLimit::Limited(0));
    }

    #[test]
    fn outcome_exposes_move_only_when_expanded() {
        let leaf = NodeOutcome::Leaf { value: 4 };
        let best = NodeOutcome::Best {
            mv: Move::new(1, 2),
            value: -2,
        };
        assert_eq!(leaf.best_move(), None);
        assert_eq!(leaf.value(), 4);
        assert_eq!(best.best_move(), Some(Move::new(1, 2)));
        assert_eq!(best.value(), -2);
    }
}
