//! The portfolio configuration: one immutable object, embedded at build time
//! and parsed once on first access. Everything the site renders comes from
//! here — components never mutate it.

use std::sync::LazyLock;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

#[derive(Embed)]
#[folder = "config"]
struct ConfigAssets;

pub static CONFIG: LazyLock<PortfolioConfig> =
    LazyLock::new(|| PortfolioConfig::load().expect("Should be able to load portfolio config"));

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Portfolio config not found")]
    NotFound,
    #[error("Couldn't parse portfolio config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub site_metadata: SiteMetadata,
    pub personal_info: PersonalInfo,
    pub roles: Vec<String>,
    pub stats: Vec<Stat>,
    pub skills: Vec<SkillCategory>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
}

impl PortfolioConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let raw = ConfigAssets::get("portfolio.json").ok_or(ConfigError::NotFound)?;
        Ok(serde_json::from_slice(raw.data.as_ref())?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub locale: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub status: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub resume_url: String,
    pub booking_url: Option<String>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Medium,
    Youtube,
    Instagram,
    Facebook,
    Stackoverflow,
    Codepen,
    Dev,
}

impl SocialPlatform {
    /// Devicon class for the platform glyph.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Twitter => "devicon-twitter-original",
            Self::Medium => "devicon-medium-plain",
            Self::Youtube => "devicon-youtube-plain",
            Self::Instagram => "devicon-instagram-plain",
            Self::Facebook => "devicon-facebook-plain",
            Self::Stackoverflow => "devicon-stackoverflow-plain",
            Self::Codepen => "devicon-codepen-plain",
            Self::Dev => "devicon-devto-plain",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Medium => "Medium",
            Self::Youtube => "YouTube",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Stackoverflow => "Stack Overflow",
            Self::Codepen => "CodePen",
            Self::Dev => "DEV",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub level: u8,
}

/// A position at one company. A company entry with promotions carries several
/// of these; a single-role entry carries exactly one.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceRole {
    pub title: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawExperience")]
pub struct Experience {
    pub company: String,
    pub company_url: Option<String>,
    pub location: String,
    pub kind: ExperienceKind,
}

#[derive(Debug, Clone)]
pub enum ExperienceKind {
    Single(ExperienceRole),
    Promotions(Vec<ExperienceRole>),
}

impl Experience {
    pub fn roles(&self) -> &[ExperienceRole] {
        match &self.kind {
            ExperienceKind::Single(role) => std::slice::from_ref(role),
            ExperienceKind::Promotions(roles) => roles,
        }
    }
}

/// The on-disk experience shape: flat optional fields plus an optional roles
/// array. A non-empty roles array wins; the flat fields are ignored then.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExperience {
    company: String,
    company_url: Option<String>,
    location: String,
    title: Option<String>,
    period: Option<String>,
    description: Option<String>,
    #[serde(default)]
    achievements: Vec<String>,
    #[serde(default)]
    roles: Vec<ExperienceRole>,
}

impl From<RawExperience> for Experience {
    fn from(raw: RawExperience) -> Self {
        let kind = if raw.roles.is_empty() {
            ExperienceKind::Single(ExperienceRole {
                title: raw.title.unwrap_or_default(),
                period: raw.period.unwrap_or_default(),
                description: raw.description.unwrap_or_default(),
                achievements: raw.achievements,
            })
        } else {
            ExperienceKind::Promotions(raw.roles)
        };
        Self {
            company: raw.company,
            company_url: raw.company_url,
            location: raw.location,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_fit: ImageFit,
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    pub featured: bool,
    #[serde(default)]
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub link_type: ProjectLinkType,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectLinkType {
    Website,
    Github,
    Appstore,
    Playstore,
    CaseStudy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Live,
    InProgress,
    Private,
}

impl ProjectStatus {
    /// Sort tier for the "show all" ordering. Lower sorts first.
    fn tier(self) -> u8 {
        match self {
            Self::Live => 1,
            Self::InProgress => 2,
            Self::Private => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::InProgress => "In Progress",
            Self::Private => "Private",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub description: String,
}

/// Orders projects featured-first, then by status tier. The sort is stable, so
/// projects with equal keys keep their configured order.
pub fn sort_projects(projects: &[Project]) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    sorted.sort_by_key(|p| (!p.featured, p.status.tier()));
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Status(ProjectStatus),
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        Self::All,
        Self::Status(ProjectStatus::Live),
        Self::Status(ProjectStatus::InProgress),
        Self::Status(ProjectStatus::Private),
    ];

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => project.status == status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Status(status) => status.label(),
        }
    }
}

/// Narrows a (sorted) project list to one status, preserving order.
pub fn filter_projects(projects: &[Project], filter: StatusFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Private projects and projects without links render "available on request"
/// instead of link buttons.
pub fn hide_links(project: &Project) -> bool {
    project.status == ProjectStatus::Private || project.links.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, featured: bool, status: ProjectStatus) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            image: None,
            image_fit: ImageFit::Cover,
            tags: vec![],
            links: vec![ProjectLink {
                link_type: ProjectLinkType::Website,
                label: "Website".to_string(),
                url: "https://example.com".to_string(),
            }],
            featured,
            status,
        }
    }

    fn titles(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_sort_featured_first_then_status_tier() {
        let projects = vec![
            project("private", false, ProjectStatus::Private),
            project("wip", false, ProjectStatus::InProgress),
            project("live", false, ProjectStatus::Live),
            project("featured-wip", true, ProjectStatus::InProgress),
            project("featured-live", true, ProjectStatus::Live),
        ];
        let sorted = sort_projects(&projects);
        assert_eq!(
            titles(&sorted),
            vec!["featured-live", "featured-wip", "live", "wip", "private"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let projects = vec![
            project("first", true, ProjectStatus::Live),
            project("second", true, ProjectStatus::Live),
            project("third", false, ProjectStatus::Private),
            project("fourth", true, ProjectStatus::Live),
        ];
        let sorted = sort_projects(&projects);
        assert_eq!(titles(&sorted), vec!["first", "second", "fourth", "third"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let projects = vec![
            project("a", false, ProjectStatus::Private),
            project("b", true, ProjectStatus::Live),
            project("c", false, ProjectStatus::Live),
            project("d", true, ProjectStatus::InProgress),
        ];
        let once = sort_projects(&projects);
        let twice = sort_projects(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let projects = vec![
            project("z", false, ProjectStatus::Private),
            project("a", true, ProjectStatus::Live),
        ];
        let _ = sort_projects(&projects);
        assert_eq!(titles(&projects), vec!["z", "a"]);
    }

    #[test]
    fn test_filter_keeps_only_requested_status_in_sorted_order() {
        let projects = sort_projects(&[
            project("a", true, ProjectStatus::Live),
            project("b", false, ProjectStatus::InProgress),
            project("c", false, ProjectStatus::Live),
            project("d", true, ProjectStatus::InProgress),
        ]);
        let filtered = filter_projects(&projects, StatusFilter::Status(ProjectStatus::InProgress));
        assert_eq!(titles(&filtered), vec!["d", "b"]);
        assert!(filtered
            .iter()
            .all(|p| p.status == ProjectStatus::InProgress));
    }

    #[test]
    fn test_filter_all_is_identity() {
        let projects = sort_projects(&[
            project("a", true, ProjectStatus::Live),
            project("b", false, ProjectStatus::Private),
        ]);
        assert_eq!(filter_projects(&projects, StatusFilter::All), projects);
    }

    #[test]
    fn test_missing_status_defaults_to_live() {
        let parsed: Project = serde_json::from_str(
            r#"{
                "title": "No Status",
                "description": "",
                "tags": [],
                "links": [],
                "featured": false
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.status, ProjectStatus::Live);
        assert!(StatusFilter::Status(ProjectStatus::Live).matches(&parsed));
    }

    #[test]
    fn test_hide_links_for_private_or_linkless() {
        let mut public = project("public", false, ProjectStatus::Live);
        assert!(!hide_links(&public));

        let private = project("private", false, ProjectStatus::Private);
        assert!(hide_links(&private));

        public.links.clear();
        assert!(hide_links(&public));
    }

    #[test]
    fn test_experience_single_role_shape() {
        let parsed: Experience = serde_json::from_str(
            r#"{
                "company": "Acme",
                "location": "Berlin, Germany",
                "title": "Engineer",
                "period": "Jan 2020 - Dec 2020",
                "description": "Built things.",
                "achievements": ["Shipped"]
            }"#,
        )
        .unwrap();
        assert!(matches!(parsed.kind, ExperienceKind::Single(_)));
        let roles = parsed.roles();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].title, "Engineer");
        assert_eq!(roles[0].achievements, vec!["Shipped"]);
    }

    #[test]
    fn test_experience_promotions_shape_ignores_flat_fields() {
        let parsed: Experience = serde_json::from_str(
            r#"{
                "company": "Acme",
                "companyUrl": "https://acme.example",
                "location": "Remote",
                "title": "ignored",
                "roles": [
                    {"title": "Lead", "period": "Apr 2022 - Aug 2024", "description": "", "achievements": []},
                    {"title": "Engineer", "period": "Sep 2021 - Apr 2022", "description": "", "achievements": []}
                ]
            }"#,
        )
        .unwrap();
        assert!(matches!(parsed.kind, ExperienceKind::Promotions(_)));
        let roles = parsed.roles();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].title, "Lead");
        assert_eq!(parsed.company_url.as_deref(), Some("https://acme.example"));
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = PortfolioConfig::load().expect("embedded config should parse");
        assert!(!config.personal_info.name.is_empty());
        assert!(!config.roles.is_empty());
        assert!(!config.projects.is_empty());
        assert!(!config.experiences.is_empty());
    }
}
