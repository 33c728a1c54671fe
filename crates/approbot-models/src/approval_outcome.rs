use crate::PullRequestHandle;

/// Result of an approval attempt for one (user, pull request) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// Approval was submitted.
    Approved,
    /// The user already approved this pull request, nothing was sent.
    AlreadyApproved,
    /// Approval failed.
    Failed { reason: String },
}

impl ApprovalOutcome {
    /// Approved or already approved.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Approved | Self::AlreadyApproved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRecord {
    pub slack_user_id: String,
    pub pr_handle: PullRequestHandle,
    pub outcome: ApprovalOutcome,
}

/// Every outcome of a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalSummary {
    records: Vec<ApprovalRecord>,
}

impl ApprovalSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        slack_user_id: &str,
        pr_handle: &PullRequestHandle,
        outcome: ApprovalOutcome,
    ) {
        self.records.push(ApprovalRecord {
            slack_user_id: slack_user_id.into(),
            pr_handle: pr_handle.clone(),
            outcome,
        });
    }

    pub fn extend(&mut self, other: ApprovalSummary) {
        self.records.extend(other.records);
    }

    pub fn records(&self) -> &[ApprovalRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// At least one pair ended approved or already approved.
    pub fn has_success(&self) -> bool {
        self.records.iter().any(|r| r.outcome.is_success())
    }

    pub fn count(&self, predicate: impl Fn(&ApprovalOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_aggregation() {
        let handle: PullRequestHandle = ("acme", "widgets", 1).into();
        let mut summary = ApprovalSummary::new();
        assert!(!summary.has_success());

        summary.push(
            "U1",
            &handle,
            ApprovalOutcome::Failed {
                reason: "closed".into(),
            },
        );
        assert!(!summary.has_success());

        summary.push("U2", &handle, ApprovalOutcome::AlreadyApproved);
        assert!(summary.has_success());
        assert_eq!(summary.records().len(), 2);
        assert_eq!(
            summary.count(|o| matches!(o, ApprovalOutcome::Failed { .. })),
            1
        );
    }
}
