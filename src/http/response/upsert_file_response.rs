#[derive(Debug, serde::Deserialize)]
pub struct UpsertFileResponse {
    pub content: Content,
    pub commit: Commit,
}

#[derive(Debug, serde::Deserialize)]
pub struct Content {
    pub path: String,
    pub sha: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct Commit {
    pub sha: String,
}
