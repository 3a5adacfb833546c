//! Static page content: cards, footer link sections, copyright block.
//!
//! Content is plain data. The built-in default reproduces the Abstract help
//! center; a TOML file with the same shape can replace it.

use super::error::ContentError;
use serde::Deserialize;
use std::path::Path;

const ABSTRACT_URL: &str = "https://www.goabstract.com/";

/// Default visible text of a card link.
pub const DEFAULT_LINK_TEXT: &str = "Learn more";

// ===== CardContent =====

/// One informational card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardContent {
    /// Card heading.
    pub title: String,
    /// Body text under the heading.
    pub description: String,
    /// Target of the card's link.
    pub link: String,
    /// Decorative image reference. Hidden from assistive technology.
    #[serde(default)]
    pub image: Option<String>,
    /// Visible link text; defaults to [`DEFAULT_LINK_TEXT`].
    #[serde(default)]
    pub link_text: Option<String>,
    /// Accessible name of the link; defaults to "`<link text>` about `<title>`".
    #[serde(default)]
    pub aria_label: Option<String>,
}

impl CardContent {
    /// Card with the default link text and accessible label.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
            image: None,
            link_text: None,
            aria_label: None,
        }
    }

    /// Element id derived from the title: `card-` + lowercase title with
    /// whitespace runs replaced by `-`.
    pub fn card_id(&self) -> String {
        let slug = self
            .title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("card-{slug}")
    }

    /// Element id of the card heading.
    pub fn title_id(&self) -> String {
        format!("{}-title", self.card_id())
    }

    /// Element id of the card description.
    pub fn description_id(&self) -> String {
        format!("{}-description", self.card_id())
    }

    /// Element id of the card link.
    pub fn link_id(&self) -> String {
        format!("{}-link", self.card_id())
    }

    /// Visible link text, "Learn more" unless overridden.
    pub fn link_text(&self) -> &str {
        self.link_text.as_deref().unwrap_or(DEFAULT_LINK_TEXT)
    }

    /// Accessible name of the card link.
    pub fn link_label(&self) -> String {
        match &self.aria_label {
            Some(label) => label.clone(),
            None => format!("{} about {}", self.link_text(), self.title),
        }
    }

    /// Case-insensitive substring match over title and description.
    ///
    /// `query_lower` must already be lowercase.
    fn matches(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}

// ===== Footer =====

/// A footer link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    /// Visible text.
    pub label: String,
    /// Link target (URL, path, or `mailto:` address).
    pub href: String,
}

impl FooterLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Titled column of footer links.
///
/// `contact` links are listed under a "Contact Us" subtitle after the main links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterSection {
    /// Column heading.
    pub title: String,
    /// Links listed under the heading.
    #[serde(default)]
    pub links: Vec<FooterLink>,
    /// Links listed under the "Contact Us" subtitle.
    #[serde(default)]
    pub contact: Vec<FooterLink>,
}

// ===== PageContent =====

/// Everything the page shows apart from the search forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageContent {
    /// Help-topic cards, in display order.
    #[serde(default)]
    pub cards: Vec<CardContent>,
    /// Footer link columns, in display order.
    #[serde(default)]
    pub footer: Vec<FooterSection>,
    /// Lines of the copyright block.
    #[serde(default)]
    pub copyright: Vec<String>,
}

impl PageContent {
    /// Cards whose title or description contains `query`, ignoring case.
    pub fn search_cards(&self, query: &str) -> Vec<&CardContent> {
        let query_lower = query.to_lowercase();
        self.cards
            .iter()
            .filter(|card| card.matches(&query_lower))
            .collect()
    }
}

impl Default for PageContent {
    fn default() -> Self {
        let card = |title: &str, description: &str, image: &str| CardContent {
            image: Some(format!("/public/images/{image}")),
            ..CardContent::new(title, description, ABSTRACT_URL)
        };
        let links = |labels: &[&str]| -> Vec<FooterLink> {
            labels
                .iter()
                .map(|label| FooterLink::new(label, ABSTRACT_URL))
                .collect()
        };

        Self {
            cards: vec![
                card(
                    "Using Abstract",
                    "Abstract lets you manage, version, and document your designs in one place.",
                    "icon-version.png",
                ),
                card(
                    "Manage your account",
                    "Configure your account settings, such as your email, profile details, and password.",
                    "account-icon.png",
                ),
                card(
                    "Manage organizations, teams, and projects",
                    "Use Abstract organizations, teams, and projects to organize your people and your work.",
                    "icon-organizations.png",
                ),
                card(
                    "Manage billing",
                    "Change subscriptions and payment details.",
                    "billing-icon.png",
                ),
                card(
                    "Authenticate to Abstract",
                    "Set up and configure SSO, SCIM, and Just-in-Time provisioning.",
                    "icon-authenticate.png",
                ),
                card(
                    "Abstract support",
                    "Get in touch with a human.",
                    "icon-comment.png",
                ),
            ],
            footer: vec![
                FooterSection {
                    title: "Abstract".to_string(),
                    links: links(&["Start Trial", "Pricing", "Download"]),
                    contact: Vec::new(),
                },
                FooterSection {
                    title: "Resources".to_string(),
                    links: links(&["Blog", "Help Center", "Release Notes", "Status"]),
                    contact: Vec::new(),
                },
                FooterSection {
                    title: "Community".to_string(),
                    links: links(&["Twitter", "LinkedIn", "Facebook", "Dribbble", "Podcast"]),
                    contact: Vec::new(),
                },
                FooterSection {
                    title: "Company".to_string(),
                    links: links(&["About Us", "Careers", "Legal"]),
                    contact: vec![FooterLink::new(
                        "info@goabstract.com",
                        "mailto:info@goabstract.com",
                    )],
                },
            ],
            copyright: vec![
                "© Copyright 2025".to_string(),
                "Abstract Studio Design, Inc.".to_string(),
                "All rights reserved".to_string(),
            ],
        }
    }
}

/// Load page content from a TOML file.
///
/// # Errors
///
/// Returns [`ContentError::Read`] if the file cannot be read and
/// [`ContentError::Parse`] if it does not match the content schema.
pub fn load_content(path: &Path) -> Result<PageContent, ContentError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|e| ContentError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_has_six_cards() {
        let content = PageContent::default();
        assert_eq!(content.cards.len(), 6);
        assert_eq!(content.cards[0].title, "Using Abstract");
        assert_eq!(content.cards[5].title, "Abstract support");
    }

    #[test]
    fn default_footer_has_four_sections_in_order() {
        let titles: Vec<_> = PageContent::default()
            .footer
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, ["Abstract", "Resources", "Community", "Company"]);
    }

    #[test]
    fn company_section_has_contact_email() {
        let content = PageContent::default();
        let company = &content.footer[3];
        assert_eq!(company.contact.len(), 1);
        assert_eq!(company.contact[0].href, "mailto:info@goabstract.com");
    }

    #[test]
    fn card_id_slugs_whitespace_runs() {
        let card = CardContent::new("Manage   your\taccount", "d", "l");
        assert_eq!(card.card_id(), "card-manage-your-account");
        assert_eq!(card.title_id(), "card-manage-your-account-title");
        assert_eq!(card.description_id(), "card-manage-your-account-description");
        assert_eq!(card.link_id(), "card-manage-your-account-link");
    }

    #[test]
    fn card_id_keeps_punctuation() {
        let card = CardContent::new("Manage organizations, teams, and projects", "d", "l");
        assert_eq!(
            card.card_id(),
            "card-manage-organizations,-teams,-and-projects"
        );
    }

    #[test]
    fn link_label_defaults_to_learn_more_about_title() {
        let card = CardContent::new("Manage billing", "d", "l");
        assert_eq!(card.link_text(), "Learn more");
        assert_eq!(card.link_label(), "Learn more about Manage billing");
    }

    #[test]
    fn link_label_prefers_explicit_aria_label() {
        let card = CardContent {
            aria_label: Some("Billing help".to_string()),
            ..CardContent::new("Manage billing", "d", "l")
        };
        assert_eq!(card.link_label(), "Billing help");
    }

    #[test]
    fn search_cards_is_case_insensitive_over_title_and_description() {
        let content = PageContent::default();

        let by_title: Vec<_> = content
            .search_cards("BILLING")
            .into_iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(by_title, ["Manage billing"]);

        let by_description: Vec<_> = content
            .search_cards("sso")
            .into_iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(by_description, ["Authenticate to Abstract"]);
    }

    #[test]
    fn search_cards_returns_empty_for_no_match() {
        assert!(PageContent::default().search_cards("kubernetes").is_empty());
    }

    #[test]
    fn content_parses_from_toml() {
        let toml = r#"
            copyright = ["(c) Example"]

            [[cards]]
            title = "Getting started"
            description = "First steps."
            link = "https://example.com/start"

            [[footer]]
            title = "Company"
            links = [{ label = "About", href = "https://example.com/about" }]
        "#;

        let content: PageContent = toml::from_str(toml).expect("valid content");
        assert_eq!(content.cards.len(), 1);
        assert_eq!(content.cards[0].link_text(), DEFAULT_LINK_TEXT);
        assert_eq!(content.footer[0].links[0].label, "About");
        assert!(content.footer[0].contact.is_empty());
        assert_eq!(content.copyright, ["(c) Example"]);
    }

    #[test]
    fn content_rejects_unknown_fields() {
        let toml = r#"
            [[cards]]
            title = "t"
            description = "d"
            link = "l"
            colour = "red"
        "#;
        assert!(toml::from_str::<PageContent>(toml).is_err());
    }

    #[test]
    fn load_content_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("helpcenter_no_such_content.toml");
        let _ = std::fs::remove_file(&path);
        let err = load_content(&path).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn load_content_invalid_toml_is_parse_error() {
        let path = std::env::temp_dir().join("helpcenter_bad_content.toml");
        std::fs::write(&path, "cards = [[[").unwrap();
        let err = load_content(&path).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
        let _ = std::fs::remove_file(&path);
    }
}
