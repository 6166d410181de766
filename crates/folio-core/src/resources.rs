//! Remote resource URLs derived from the owner identifier.
//!
//! All of them follow the convention of a repository named after its owner
//! (`<owner>/<owner>`) on the raw-file host.

use crate::config::{FolioConfig, HostsConfig};

/// Resolves every URL the page needs from one owner identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerResources {
    owner: String,
    raw: String,
    profile: String,
}

impl OwnerResources {
    /// Build from an owner and host set.
    pub fn new(owner: impl Into<String>, hosts: &HostsConfig) -> Self {
        Self {
            owner: owner.into(),
            raw: trim_host(&hosts.raw),
            profile: trim_host(&hosts.profile),
        }
    }

    /// Build from a full config.
    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(config.owner.clone(), &config.hosts)
    }

    /// The owner identifier.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// `{raw}/{owner}/{owner}/main/projects.json`
    pub fn feed_url(&self) -> String {
        self.repo_file("projects.json")
    }

    /// `{raw}/{owner}/{owner}/main/assets/banner.png`
    pub fn banner_url(&self) -> String {
        self.repo_file("assets/banner.png")
    }

    /// `{raw}/{owner}/{owner}/main/assets/favicon.png`
    pub fn favicon_url(&self) -> String {
        self.repo_file("assets/favicon.png")
    }

    /// `{profile}/{owner}.png`
    pub fn avatar_url(&self) -> String {
        format!("{}/{}.png", self.profile, self.owner)
    }

    /// `{profile}/{owner}`
    pub fn profile_url(&self) -> String {
        format!("{}/{}", self.profile, self.owner)
    }

    fn repo_file(&self, file: &str) -> String {
        format!("{}/{}/{}/main/{file}", self.raw, self.owner, self.owner)
    }
}

/// Last-year contributions endpoint for `owner` under `activity_api`.
pub fn activity_url(activity_api: &str, owner: &str) -> String {
    format!("{}/{owner}?y=last", activity_api.trim_end_matches('/'))
}

fn trim_host(host: &str) -> String {
    host.trim_end_matches('/').to_string()
}
