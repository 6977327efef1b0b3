//! Mock GitHub client for testing
//!
//! Only labels carry state. The other operations answer with fixed values
//! and are recorded so tests can assert that nothing unexpected was called.

#![allow(dead_code)]

use async_trait::async_trait;
use merge_plugin::error::{Error, Result};
use merge_plugin::platform::GitHubClient;
use merge_plugin::types::{IssueComment, Label, PullRequest};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `add_label` / `remove_label`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCall {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub label: String,
}

/// Simple mock GitHub client for testing
///
/// Features:
/// - In-memory labels per issue number, updated by add/remove
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockGitHubClient {
    labels: Mutex<HashMap<u64, Vec<Label>>>,
    bot_login: String,
    // Call tracking
    get_labels_calls: Mutex<Vec<u64>>,
    add_label_calls: Mutex<Vec<LabelCall>>,
    remove_label_calls: Mutex<Vec<LabelCall>>,
    delete_comment_calls: Mutex<Vec<u64>>,
    other_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_get_labels: Mutex<Option<String>>,
    error_on_add_label: Mutex<Option<String>>,
    error_on_remove_label: Mutex<Option<String>>,
}

impl Default for MockGitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitHubClient {
    /// Create a mock with no labels anywhere
    pub fn new() -> Self {
        Self {
            labels: Mutex::new(HashMap::new()),
            bot_login: "merge-bot".to_string(),
            get_labels_calls: Mutex::new(Vec::new()),
            add_label_calls: Mutex::new(Vec::new()),
            remove_label_calls: Mutex::new(Vec::new()),
            delete_comment_calls: Mutex::new(Vec::new()),
            other_calls: Mutex::new(Vec::new()),
            error_on_get_labels: Mutex::new(None),
            error_on_add_label: Mutex::new(None),
            error_on_remove_label: Mutex::new(None),
        }
    }

    /// Create a mock whose issue `number` carries `labels`
    pub fn with_labels(number: u64, labels: &[&str]) -> Self {
        let mock = Self::new();
        mock.set_labels(number, labels);
        mock
    }

    // === Setup methods ===

    /// Replace the labels on an issue
    pub fn set_labels(&self, number: u64, labels: &[&str]) {
        self.labels
            .lock()
            .unwrap()
            .insert(number, labels.iter().map(|l| Label::named(*l)).collect());
    }

    // === Error injection methods ===

    /// Make `get_issue_labels` return an error
    pub fn fail_get_labels(&self, msg: &str) {
        *self.error_on_get_labels.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_label` return an error
    pub fn fail_add_label(&self, msg: &str) {
        *self.error_on_add_label.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `remove_label` return an error
    pub fn fail_remove_label(&self, msg: &str) {
        *self.error_on_remove_label.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Current label names on an issue
    pub fn label_names(&self, number: u64) -> Vec<String> {
        self.labels
            .lock()
            .unwrap()
            .get(&number)
            .map(|ls| ls.iter().map(|l| l.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Issue numbers `get_issue_labels` was called with
    pub fn get_labels_calls(&self) -> Vec<u64> {
        self.get_labels_calls.lock().unwrap().clone()
    }

    /// All `add_label` calls
    pub fn add_label_calls(&self) -> Vec<LabelCall> {
        self.add_label_calls.lock().unwrap().clone()
    }

    /// All `remove_label` calls
    pub fn remove_label_calls(&self) -> Vec<LabelCall> {
        self.remove_label_calls.lock().unwrap().clone()
    }

    /// Total number of calls of any kind
    pub fn total_calls(&self) -> usize {
        self.get_labels_calls.lock().unwrap().len()
            + self.add_label_calls.lock().unwrap().len()
            + self.remove_label_calls.lock().unwrap().len()
            + self.delete_comment_calls.lock().unwrap().len()
            + self.other_calls.lock().unwrap().len()
    }

    /// Number of add/remove calls
    pub fn mutation_count(&self) -> usize {
        self.add_label_calls.lock().unwrap().len() + self.remove_label_calls.lock().unwrap().len()
    }

    /// Assert that nothing at all was called
    pub fn assert_untouched(&self) {
        assert_eq!(
            self.total_calls(),
            0,
            "Expected no client calls but got labels={:?} add={:?} remove={:?} other={:?}",
            self.get_labels_calls(),
            self.add_label_calls(),
            self.remove_label_calls(),
            self.other_calls.lock().unwrap()
        );
    }

    /// Assert that `add_label` was called exactly once for `label` on `number`
    pub fn assert_added_once(&self, number: u64, label: &str) {
        let calls = self.add_label_calls();
        assert_eq!(calls.len(), 1, "Expected one add_label call but got: {calls:?}");
        assert_eq!(calls[0].number, number);
        assert_eq!(calls[0].label, label);
    }

    /// Assert that `remove_label` was called exactly once for `label` on `number`
    pub fn assert_removed_once(&self, number: u64, label: &str) {
        let calls = self.remove_label_calls();
        assert_eq!(calls.len(), 1, "Expected one remove_label call but got: {calls:?}");
        assert_eq!(calls[0].number, number);
        assert_eq!(calls[0].label, label);
    }

    fn record_other(&self, call: String) {
        self.other_calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn is_collaborator(&self, owner: &str, repo: &str, login: &str) -> Result<bool> {
        self.record_other(format!("is_collaborator({owner}/{repo}, {login})"));
        Ok(false)
    }

    async fn add_label(&self, owner: &str, repo: &str, number: u64, label: &str) -> Result<()> {
        self.add_label_calls.lock().unwrap().push(LabelCall {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            label: label.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_add_label.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        self.labels
            .lock()
            .unwrap()
            .entry(number)
            .or_default()
            .push(Label::named(label));
        Ok(())
    }

    async fn remove_label(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        label: &str,
    ) -> Result<()> {
        self.remove_label_calls.lock().unwrap().push(LabelCall {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            label: label.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_remove_label.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        if let Some(labels) = self.labels.lock().unwrap().get_mut(&number) {
            labels.retain(|l| !l.name.eq_ignore_ascii_case(label));
        }
        Ok(())
    }

    async fn get_issue_labels(&self, _org: &str, _repo: &str, number: u64) -> Result<Vec<Label>> {
        self.get_labels_calls.lock().unwrap().push(number);

        // Check for injected error
        if let Some(msg) = self.error_on_get_labels.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let labels = self.labels.lock().unwrap();
        Ok(labels.get(&number).cloned().unwrap_or_default())
    }

    async fn get_pull_request(&self, org: &str, repo: &str, number: u64) -> Result<PullRequest> {
        self.record_other(format!("get_pull_request({org}/{repo}#{number})"));
        Err(Error::Platform(format!(
            "get_pull_request: not supported by mock (PR #{number})"
        )))
    }

    async fn list_issue_comments(
        &self,
        org: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<IssueComment>> {
        self.record_other(format!("list_issue_comments({org}/{repo}#{number})"));
        Ok(Vec::new())
    }

    async fn delete_comment(&self, _org: &str, _repo: &str, id: u64) -> Result<()> {
        self.delete_comment_calls.lock().unwrap().push(id);
        Ok(())
    }

    async fn bot_name(&self) -> Result<String> {
        self.record_other("bot_name".to_string());
        Ok(self.bot_login.clone())
    }
}
