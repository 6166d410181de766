//! The composed page and its HTML form.

use askama::Template;
use folio_calendar::CalendarView;
use folio_core::{ClockSnapshot, ContactKind, Project, TrustedMarkup};

use crate::Result;

/// `<head>` metadata, derived from static configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    /// `<title>`, `og:title`, `twitter:title`
    pub title: String,
    /// `description`, `og:description`, `twitter:description`
    pub description: String,
    /// Comma-separated `keywords`
    pub keywords: String,
    /// Social preview image
    pub image_url: String,
    /// Canonical page URL
    pub site_url: String,
    /// Favicon
    pub favicon_url: String,
}

/// A contact icon with its link and tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    /// Contact kind
    pub kind: ContactKind,
    /// Link target
    pub href: String,
    /// Native `title` attribute
    pub title: String,
    /// Tooltip text
    pub tooltip: String,
}

impl ContactLink {
    /// CSS hook for the icon.
    pub fn icon_class(&self) -> &'static str {
        match self.kind {
            ContactKind::Identity => "icon-identity",
            ContactKind::Email => "icon-mail",
        }
    }
}

/// Header block: avatar, name, contacts and clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// Display name
    pub name: String,
    /// Short text under the name
    pub bio: String,
    /// Avatar image
    pub avatar_url: String,
    /// Contact icons, in display order
    pub contacts: Vec<ContactLink>,
    /// Clock reading taken for this render
    pub clock: ClockSnapshot,
    /// Clock tooltip
    pub clock_label: String,
}

/// Which side the project image sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSide {
    /// Image first, text to the right
    Left,
    /// Text first, image to the right
    Right,
}

impl ImageSide {
    /// Even positions put the image left, odd ones right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            ImageSide::Left
        } else {
            ImageSide::Right
        }
    }

    /// Row direction class.
    pub fn row_class(&self) -> &'static str {
        match self {
            ImageSide::Left => "md:flex-row",
            ImageSide::Right => "md:flex-row-reverse",
        }
    }

    /// Image margin class (space between image and text).
    pub fn margin_class(&self) -> &'static str {
        match self {
            ImageSide::Left => "md:mr-6",
            ImageSide::Right => "md:ml-6",
        }
    }
}

/// One project section of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBlock {
    /// Heading
    pub title: String,
    /// Body, emitted without escaping
    pub description: TrustedMarkup,
    /// Image
    pub picture_url: String,
    /// Link target
    pub url: String,
    /// Link text
    pub link_label: String,
    /// Image placement
    pub side: ImageSide,
}

impl ProjectBlock {
    /// Block for the project at `index` in feed order.
    pub fn new(index: usize, project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            picture_url: project.picture_url.clone(),
            url: project.url.clone(),
            link_label: project.link_label().to_string(),
            side: ImageSide::for_index(index),
        }
    }
}

/// The full page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `<head>` metadata
    pub meta: DocumentMeta,
    /// Header block
    pub profile: ProfileView,
    /// Heatmap, `None` when activity data is unavailable
    pub calendar: Option<CalendarView>,
    /// Project sections in feed order
    pub projects: Vec<ProjectBlock>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    doc: &'a Document,
}

impl Document {
    /// Render to an HTML string.
    pub fn to_html(&self) -> Result<String> {
        Ok(PageTemplate { doc: self }.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_side_alternates() {
        assert_eq!(ImageSide::for_index(0), ImageSide::Left);
        assert_eq!(ImageSide::for_index(1), ImageSide::Right);
        assert_eq!(ImageSide::for_index(2), ImageSide::Left);
    }

    #[test]
    fn test_image_side_classes() {
        assert_eq!(ImageSide::Left.row_class(), "md:flex-row");
        assert_eq!(ImageSide::Right.row_class(), "md:flex-row-reverse");
        assert_eq!(ImageSide::Left.margin_class(), "md:mr-6");
        assert_eq!(ImageSide::Right.margin_class(), "md:ml-6");
    }

    #[test]
    fn test_block_uses_default_label() {
        let project = Project {
            title: "X".to_string(),
            url: "https://x".to_string(),
            ..Project::default()
        };
        let block = ProjectBlock::new(3, &project);
        assert_eq!(block.link_label, "Link");
        assert_eq!(block.side, ImageSide::Right);
    }
}
