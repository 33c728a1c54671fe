/// A pull request reference: owner, repository name and number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PullRequestHandle {
    owner: String,
    name: String,
    number: u64,
}

impl std::fmt::Display for PullRequestHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.name, self.number)
    }
}

impl PullRequestHandle {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl From<(&str, &str, u64)> for PullRequestHandle {
    fn from((owner, name, number): (&str, &str, u64)) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            number,
        }
    }
}
