//! Recording adapter for the `GitRepo` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::PortError;
use crate::ports::GitRepo;

/// Records git interactions while delegating to an inner implementation.
pub struct RecordingGitRepo {
    inner: Box<dyn GitRepo>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGitRepo {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn GitRepo>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct MessageInput<'a> {
    message: &'a str,
}

impl GitRepo for RecordingGitRepo {
    fn diff(&self) -> Result<String, PortError> {
        let result = self.inner.diff();
        record_result(&self.recorder, "git", "diff", &(), &result);
        result
    }

    fn add_all(&self) -> Result<(), PortError> {
        let result = self.inner.add_all();
        record_result(&self.recorder, "git", "add_all", &(), &result);
        result
    }

    fn commit(&self, message: &str) -> Result<(), PortError> {
        let result = self.inner.commit(message);
        record_result(&self.recorder, "git", "commit", &MessageInput { message }, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recording::test_support::finish;

    struct FakeGit;

    impl GitRepo for FakeGit {
        fn diff(&self) -> Result<String, PortError> {
            Ok("+added".into())
        }
        fn add_all(&self) -> Result<(), PortError> {
            Ok(())
        }
        fn commit(&self, _message: &str) -> Result<(), PortError> {
            Err("nothing to commit".into())
        }
    }

    #[test]
    fn records_each_git_call() {
        let path = std::env::temp_dir().join("pdt_rec_git.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "git", "abc")));
        {
            let git = RecordingGitRepo::new(Box::new(FakeGit), Arc::clone(&recorder));
            assert_eq!(git.diff().unwrap(), "+added");
            git.add_all().unwrap();
            assert!(git.commit("feat: x").is_err());
        }

        let interactions = finish(recorder, &path);
        let methods: Vec<&str> = interactions.iter().map(|i| i.method.as_str()).collect();
        assert_eq!(methods, vec!["diff", "add_all", "commit"]);
        assert_eq!(interactions[0].output["ok"], "+added");
        assert_eq!(interactions[2].input["message"], "feat: x");
        assert_eq!(interactions[2].output["err"], "nothing to commit");
    }
}
