//! File-based submission store.
//!
//! Stores each owner's submissions as one YAML file under a data
//! directory. Writes go to a temporary file that is renamed over the
//! target, so a failed write never leaves a half-written set behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use super::feed::ChangeFeedHub;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::submission::{Submission, SubmissionChange};
use crate::ports::{SubmissionFeed, SubmissionStore};

/// File-backed storage for submissions.
pub struct FileSubmissionStore {
    base_path: PathBuf,
    write_lock: Mutex<()>,
    feed: ChangeFeedHub,
}

impl FileSubmissionStore {
    /// Create a new file store rooted at `base_path`.
    ///
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
            feed: ChangeFeedHub::new(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file holding `owner`'s submissions.
    fn owner_file_path(&self, owner: &UserId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", file_stem(owner)))
    }

    async fn read_owner(&self, owner: &UserId) -> Result<Vec<Submission>, DomainError> {
        let path = self.owner_file_path(owner);
        let yaml = match fs::read_to_string(&path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("read", &path, e)),
        };

        serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationFailed,
                format!("failed to parse {}: {}", path.display(), e),
            )
        })
    }

    async fn write_owner(
        &self,
        owner: &UserId,
        submissions: &[Submission],
    ) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| io_error("create", &self.base_path, e))?;

        let yaml = serde_yaml::to_string(submissions).map_err(|e| {
            DomainError::new(ErrorCode::SerializationFailed, e.to_string())
        })?;

        let path = self.owner_file_path(owner);
        let tmp = path.with_extension("yaml.tmp");
        fs::write(&tmp, yaml)
            .await
            .map_err(|e| io_error("write", &tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error("rename", &path, e))
    }
}

/// Maps an owner id onto a safe, collision-free file stem.
///
/// ASCII alphanumerics and `-` pass through; every other byte becomes
/// `_xx` in lowercase hex.
fn file_stem(owner: &UserId) -> String {
    let mut stem = String::with_capacity(owner.as_str().len());
    for byte in owner.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("_{:02x}", byte));
        }
    }
    stem
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::persistence(format!("failed to {} {}: {}", action, path.display(), err))
        .with_detail("path", path.display().to_string())
}

#[async_trait]
impl SubmissionStore for FileSubmissionStore {
    async fn create(&self, owner: &UserId, submission: &Submission) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut submissions = self.read_owner(owner).await?;
        if submissions
            .iter()
            .any(|s| s.submission_id() == submission.submission_id())
        {
            return Err(DomainError::persistence(format!(
                "submission {} already exists",
                submission.submission_id()
            )));
        }
        submissions.push(submission.clone());
        self.write_owner(owner, &submissions).await?;

        // Published under the write lock so feed order matches file order.
        self.feed
            .publish(owner, SubmissionChange::Created(submission.clone()))
            .await;
        Ok(())
    }

    async fn list_all(&self, owner: &UserId) -> Result<Vec<Submission>, DomainError> {
        let _guard = self.write_lock.lock().await;
        self.read_owner(owner).await
    }

    async fn delete_all(&self, owner: &UserId) -> Result<usize, DomainError> {
        let _guard = self.write_lock.lock().await;
        let removed = self.read_owner(owner).await?.len();
        let path = self.owner_file_path(owner);
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(io_error("remove", &path, e)),
        }

        self.feed.publish(owner, SubmissionChange::Cleared).await;
        Ok(removed)
    }

    async fn watch(&self, owner: &UserId) -> Result<SubmissionFeed, DomainError> {
        Ok(self.feed.subscribe(owner).await)
    }
}
