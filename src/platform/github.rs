//! GitHub client implementation

use crate::error::{Error, Result};
use crate::platform::GitHubClient;
use crate::types::{IssueComment, Label, PullRequest, User};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// Page size for list endpoints
const PER_PAGE: u8 = 100;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` selects a GitHub Enterprise instance (`https://{host}/api/v3`);
    /// `None` talks to github.com.
    pub fn new(token: &str, host: Option<&str>) -> Result<Self> {
        match host {
            Some(h) => Self::with_base_uri(token, &format!("https://{h}/api/v3")),
            None => {
                let client = Octocrab::builder()
                    .personal_token(token.to_string())
                    .build()
                    .map_err(|e| Error::GitHubApi(e.to_string()))?;
                Ok(Self { client })
            }
        }
    }

    /// Create a service against an explicit API root
    pub fn with_base_uri(token: &str, base_uri: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(base_uri)
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
        Ok(Self { client })
    }
}

/// Helper to convert an octocrab label to our `Label` type
fn label_from_octocrab(label: octocrab::models::Label) -> Label {
    Label {
        name: label.name,
        color: label.color,
        description: label.description,
    }
}

/// Helper to convert an octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    let state = match pr.state {
        Some(octocrab::models::IssueState::Open) => "open",
        // IssueState is non-exhaustive, so use wildcard for Closed and any future variants
        Some(_) | None => "closed",
    };

    PullRequest {
        number: pr.number,
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        title: pr.title.clone().unwrap_or_default(),
        user: pr
            .user
            .as_ref()
            .map(|u| User::new(u.login.clone()))
            .unwrap_or_default(),
        state: state.to_string(),
        base_ref: pr.base.ref_field.clone(),
        head_ref: pr.head.ref_field.clone(),
        merged: pr.merged_at.is_some() || pr.merged.unwrap_or(false),
        is_draft: pr.draft.unwrap_or(false),
    }
}

#[async_trait]
impl GitHubClient for GitHubService {
    async fn is_collaborator(&self, owner: &str, repo: &str, login: &str) -> Result<bool> {
        debug!(owner, repo, login, "checking collaborator status");
        let is_collaborator = self.client.repos(owner, repo).is_collaborator(login).await?;
        debug!(login, is_collaborator, "checked collaborator status");
        Ok(is_collaborator)
    }

    async fn add_label(&self, owner: &str, repo: &str, number: u64, label: &str) -> Result<()> {
        debug!(owner, repo, number, label, "adding label");
        self.client
            .issues(owner, repo)
            .add_labels(number, &[label.to_string()])
            .await?;
        debug!(number, label, "added label");
        Ok(())
    }

    async fn remove_label(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        label: &str,
    ) -> Result<()> {
        debug!(owner, repo, number, label, "removing label");
        self.client
            .issues(owner, repo)
            .remove_label(number, label)
            .await?;
        debug!(number, label, "removed label");
        Ok(())
    }

    async fn get_issue_labels(&self, org: &str, repo: &str, number: u64) -> Result<Vec<Label>> {
        debug!(org, repo, number, "listing issue labels");
        let page = self
            .client
            .issues(org, repo)
            .list_labels_for_issue(number)
            .per_page(PER_PAGE)
            .send()
            .await?;
        let labels = self.client.all_pages(page).await?;

        let result: Vec<Label> = labels.into_iter().map(label_from_octocrab).collect();
        debug!(number, count = result.len(), "listed issue labels");
        Ok(result)
    }

    async fn get_pull_request(&self, org: &str, repo: &str, number: u64) -> Result<PullRequest> {
        debug!(org, repo, number, "getting pull request");
        let pr = self.client.pulls(org, repo).get(number).await?;
        let result = pr_from_octocrab(&pr);
        debug!(number, state = %result.state, "got pull request");
        Ok(result)
    }

    async fn list_issue_comments(
        &self,
        org: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<IssueComment>> {
        debug!(org, repo, number, "listing issue comments");
        let page = self
            .client
            .issues(org, repo)
            .list_comments(number)
            .per_page(PER_PAGE)
            .send()
            .await?;
        let comments = self.client.all_pages(page).await?;

        let result: Vec<IssueComment> = comments
            .into_iter()
            .map(|c| IssueComment {
                id: c.id.0,
                body: c.body.unwrap_or_default(),
                user: User::new(c.user.login),
                html_url: c.html_url.to_string(),
                created_at: Some(c.created_at),
            })
            .collect();
        debug!(number, count = result.len(), "listed issue comments");
        Ok(result)
    }

    async fn delete_comment(&self, org: &str, repo: &str, id: u64) -> Result<()> {
        debug!(org, repo, id, "deleting comment");
        self.client
            .issues(org, repo)
            .delete_comment(octocrab::models::CommentId(id))
            .await?;
        debug!(id, "deleted comment");
        Ok(())
    }

    async fn bot_name(&self) -> Result<String> {
        debug!("resolving authenticated user");
        let user = self.client.current().user().await?;
        debug!(login = %user.login, "resolved authenticated user");
        Ok(user.login)
    }
}
