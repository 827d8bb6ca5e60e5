use super::{AggregateStatus, Decision};

/// Order in which tied leaders win: caution first.
const TIE_PRECEDENCE: [Decision; 3] = [
    Decision::Rejected,
    Decision::ChangesRequested,
    Decision::Approved,
];

/// Per-decision vote counts for one story
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    approved: usize,
    rejected: usize,
    changes_requested: usize,
}

impl Tally {
    pub fn from_decisions<I>(decisions: I) -> Self
    where
        I: IntoIterator<Item = Decision>,
    {
        let mut tally = Self::default();
        for decision in decisions {
            tally.record(decision);
        }
        tally
    }

    pub fn record(&mut self, decision: Decision) {
        match decision {
            Decision::Approved => self.approved += 1,
            Decision::Rejected => self.rejected += 1,
            Decision::ChangesRequested => self.changes_requested += 1,
        }
    }

    pub fn count(&self, decision: Decision) -> usize {
        match decision {
            Decision::Approved => self.approved,
            Decision::Rejected => self.rejected,
            Decision::ChangesRequested => self.changes_requested,
        }
    }

    pub fn total(&self) -> usize {
        self.approved + self.rejected + self.changes_requested
    }

    /// Plurality winner; ties go to Rejected, then ChangesRequested, then Approved.
    pub fn resolve(&self) -> AggregateStatus {
        if self.total() == 0 {
            return AggregateStatus::Pending;
        }

        let mut leader = TIE_PRECEDENCE[0];
        for decision in TIE_PRECEDENCE {
            if self.count(decision) > self.count(leader) {
                leader = decision;
            }
        }
        leader.into()
    }
}

/// Resolve the aggregate status of a vote set
pub fn resolve<I>(decisions: I) -> AggregateStatus
where
    I: IntoIterator<Item = Decision>,
{
    Tally::from_decisions(decisions).resolve()
}
