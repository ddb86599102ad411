/// A file in a GitHub repository, plus the blob sha it currently has (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub owner: String,
    pub repo: String,
    pub path: String,
    pub sha: Option<String>,
}

impl RemoteFile {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, path: impl Into<String>) -> Self {
        RemoteFile {
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
            sha: None,
        }
    }

    pub fn with_sha(mut self, sha: Option<String>) -> Self {
        self.sha = sha;
        self
    }

    /// `owner/name`, unencoded.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Without a sha the next write creates the file.
    pub fn is_new(&self) -> bool {
        self.sha.is_none()
    }
}
