//! Page composition.
//!
//! [`PageRenderer`] holds everything that is fixed for the process lifetime
//! (config, contacts, derived URLs, clock) and combines it with the current
//! snapshots on each call to [`PageRenderer::render`]. It never fetches and
//! never waits: missing data renders as an empty section.

use std::sync::Arc;

use folio_calendar::{CalendarOptions, CalendarView};
use folio_core::{
    ActivityDay, ContactDirectory, ContactEntry, ContactKind, FolioConfig, LocalClock,
    OwnerResources, Project,
};

use crate::document::{ContactLink, Document, DocumentMeta, ProfileView, ProjectBlock};
use crate::Result;

/// Builds [`Document`]s from static config plus live snapshots.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    config: Arc<FolioConfig>,
    contacts: ContactDirectory,
    resources: OwnerResources,
    clock: LocalClock,
    calendar: CalendarOptions,
}

impl PageRenderer {
    /// Renderer backed by the host clock.
    pub fn new(config: Arc<FolioConfig>) -> Result<Self> {
        let clock = LocalClock::new(config.tz()?);
        Ok(Self::with_clock(config, clock))
    }

    /// Renderer with an explicit clock.
    pub fn with_clock(config: Arc<FolioConfig>, clock: LocalClock) -> Self {
        let resources = OwnerResources::from_config(&config);
        let contacts = ContactDirectory::new(&config.contacts, config.hosts.profile.clone());
        let calendar = CalendarOptions::new(resources.profile_url());
        Self {
            config,
            contacts,
            resources,
            clock,
            calendar,
        }
    }

    /// Compose the page.
    ///
    /// `activity` is `None` when no activity data has been fetched yet.
    pub fn render(&self, projects: &[Project], activity: Option<&[ActivityDay]>) -> Document {
        let projects: Vec<ProjectBlock> = projects
            .iter()
            .enumerate()
            .map(|(index, project)| ProjectBlock::new(index, project))
            .collect();
        let calendar = activity.map(|days| CalendarView::build(days, &self.calendar));

        tracing::debug!(
            projects = projects.len(),
            calendar = calendar.is_some(),
            "rendered document"
        );

        Document {
            meta: self.meta(),
            profile: self.profile(),
            calendar,
            projects,
        }
    }

    /// Compose and serialize in one step.
    pub fn render_html(
        &self,
        projects: &[Project],
        activity: Option<&[ActivityDay]>,
    ) -> Result<String> {
        self.render(projects, activity).to_html()
    }

    fn meta(&self) -> DocumentMeta {
        let page = &self.config.page;
        DocumentMeta {
            title: page.title.clone(),
            description: page.description.clone(),
            keywords: page.keywords.join(", "),
            image_url: self.resources.banner_url(),
            site_url: self.config.site_url.clone(),
            favicon_url: self.resources.favicon_url(),
        }
    }

    fn profile(&self) -> ProfileView {
        let contacts = self
            .contacts
            .entries()
            .map(|entry| self.contact_link(entry))
            .collect();

        ProfileView {
            name: self.config.display_name.clone(),
            bio: self.config.bio.clone(),
            avatar_url: self.resources.avatar_url(),
            contacts,
            clock: self.clock.now(),
            clock_label: self.config.clock_label.clone(),
        }
    }

    fn contact_link(&self, entry: &ContactEntry) -> ContactLink {
        let (href, tooltip) = match entry.kind {
            ContactKind::Identity => (self.contacts.profile_url(), self.contacts.identity_handle()),
            ContactKind::Email => (self.contacts.mailto(), entry.value.clone()),
        };
        ContactLink {
            kind: entry.kind,
            href,
            title: entry.value.clone(),
            tooltip,
        }
    }
}
