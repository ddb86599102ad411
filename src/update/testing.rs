//! In-memory [`ContentStore`] that records every call.

use crate::github::{ContentError, ContentStore, RemoteFile};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Call {
    Lookup(RemoteFile),
    Write(Write),
}

impl Call {
    pub fn is_lookup(&self) -> bool {
        matches!(self, Call::Lookup(_))
    }
}

#[derive(Debug, Clone)]
pub struct Write {
    pub file: RemoteFile,
    pub message: String,
    pub content: String,
}

enum Lookup {
    Missing,
    Existing(String),
    Fails(u16, String),
}

pub struct FakeStore {
    lookup: Lookup,
    write_error: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeStore {
    fn new(lookup: Lookup, write_error: Option<String>) -> Self {
        FakeStore {
            lookup,
            write_error,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn missing() -> Self {
        FakeStore::new(Lookup::Missing, None)
    }

    pub fn existing(sha: &str) -> Self {
        FakeStore::new(Lookup::Existing(sha.to_owned()), None)
    }

    pub fn failing_lookup(status: u16, message: &str) -> Self {
        FakeStore::new(Lookup::Fails(status, message.to_owned()), None)
    }

    pub fn failing_write(message: &str) -> Self {
        FakeStore::new(Lookup::Missing, Some(message.to_owned()))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The only write made so far. Panics unless exactly one happened.
    pub fn single_write(&self) -> Write {
        let writes: Vec<Write> = self
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Write(write) => Some(write),
                Call::Lookup(_) => None,
            })
            .collect();

        assert_eq!(writes.len(), 1, "expected exactly one write");
        writes[0].clone()
    }
}

#[async_trait]
impl ContentStore for FakeStore {
    async fn file_sha(&self, file: &RemoteFile) -> Result<Option<String>, ContentError> {
        self.calls.lock().unwrap().push(Call::Lookup(file.clone()));

        match &self.lookup {
            Lookup::Missing => Ok(None),
            Lookup::Existing(sha) => Ok(Some(sha.clone())),
            Lookup::Fails(status, message) => Err(ContentError::Remote {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    async fn upsert_file(
        &self,
        file: &RemoteFile,
        message: &str,
        content: &str,
    ) -> Result<(), ContentError> {
        self.calls.lock().unwrap().push(Call::Write(Write {
            file: file.clone(),
            message: message.to_owned(),
            content: content.to_owned(),
        }));

        match &self.write_error {
            Some(message) => Err(ContentError::Unauthorized {
                status: 401,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
