//! Contact directory: the fixed set of ways to reach the page owner.

use serde::{Deserialize, Serialize};

use crate::config::ContactsConfig;

/// Kind of contact method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Public identity handle (also the owner identifier)
    Identity,
    /// Email address
    Email,
}

impl ContactKind {
    /// Every kind, in display order.
    pub const ALL: [ContactKind; 2] = [ContactKind::Identity, ContactKind::Email];
}

/// A single contact method and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    /// What kind of contact this is
    pub kind: ContactKind,
    /// Handle or address
    pub value: String,
}

/// Immutable lookup table built once from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDirectory {
    identity: ContactEntry,
    email: ContactEntry,
    profile_host: String,
}

impl ContactDirectory {
    /// Build the directory. `profile_host` is where identity links point.
    pub fn new(contacts: &ContactsConfig, profile_host: impl Into<String>) -> Self {
        Self {
            identity: ContactEntry {
                kind: ContactKind::Identity,
                value: contacts.identity.clone(),
            },
            email: ContactEntry {
                kind: ContactKind::Email,
                value: contacts.email.clone(),
            },
            profile_host: profile_host.into().trim_end_matches('/').to_string(),
        }
    }

    /// Look up a contact. Total: every kind is always present.
    pub fn lookup(&self, kind: ContactKind) -> &ContactEntry {
        match kind {
            ContactKind::Identity => &self.identity,
            ContactKind::Email => &self.email,
        }
    }

    /// All entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &ContactEntry> {
        ContactKind::ALL.into_iter().map(|kind| self.lookup(kind))
    }

    /// Link to the owner's public profile.
    pub fn profile_url(&self) -> String {
        format!("{}/{}", self.profile_host, self.identity.value)
    }

    /// `@handle`, used as the identity tooltip.
    pub fn identity_handle(&self) -> String {
        format!("@{}", self.identity.value)
    }

    /// `mailto:` link for the email contact.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email.value)
    }
}
