pub mod upsert_file_builder;

use super::ContentError;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output, ContentError>;
}
