use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr, sync::LazyLock};
use thiserror::Error;

pub static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(SiteContent::load);

const SITE_FILE: &str = "site.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Site content file {0} not found")]
    NotFound(&'static str),
    #[error("Couldn't parse site content: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Profile name must not be empty")]
    MissingName,
    #[error("Skill {name} has level {level}, expected 0-100")]
    SkillLevel { name: String, level: u8 },
    #[error("Project title {0} is used more than once")]
    DuplicateProject(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub page_title: String,
    pub description: String,
    pub about: Vec<String>,
    pub contact_heading: String,
    pub contact_blurb: String,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    /// Bar width in percent.
    pub fn width_percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub date: String,
    pub description: String,
}

impl Experience {
    pub fn key(&self) -> String {
        format!("{}{}", self.title, self.date)
    }
}

/// Timeline entries alternate sides, starting on the left.
pub fn is_left(index: usize) -> bool {
    index % 2 == 0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(Category),
}

impl ProjectFilter {
    pub const BUTTONS: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(Category::Web),
        ProjectFilter::Only(Category::Mobile),
        ProjectFilter::Only(Category::Ai),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(Category::Web) => "Web Design",
            ProjectFilter::Only(Category::Mobile) => "Mobile Apps",
            ProjectFilter::Only(Category::Ai) => "AI/ML",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(category) => project.category == *category,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            ProjectFilter::All => "all",
            ProjectFilter::Only(Category::Web) => "web",
            ProjectFilter::Only(Category::Mobile) => "mobile",
            ProjectFilter::Only(Category::Ai) => "ai",
        };
        write!(f, "{key}")
    }
}

impl FromStr for ProjectFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ProjectFilter::All),
            "web" => Ok(ProjectFilter::Only(Category::Web)),
            "mobile" => Ok(ProjectFilter::Only(Category::Mobile)),
            "ai" => Ok(ProjectFilter::Only(Category::Ai)),
            other => Err(format!("unknown project category: {other}")),
        }
    }
}

/// Projects matching `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(SITE_FILE).ok_or(ContentError::NotFound(SITE_FILE))?;
        let content = Self::from_json(&String::from_utf8_lossy(&file.data));
        if let Err(e) = &content {
            log::error!("failed to load {SITE_FILE}: {e}");
        }
        content
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.is_empty() {
            return Err(ContentError::MissingName);
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        // project titles double as list keys and reveal keys
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SiteContent {
        SiteContent::load().expect("embedded site content should load")
    }

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = sample();
        assert_eq!(content.profile.name, "John Doe");
        assert_eq!(content.profile.page_title, "John Doe - Portfolio");
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.experience.len(), 3);
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.socials.len(), 4);
        assert_eq!(content.skills[0].name, "UI/UX Design");
        assert_eq!(content.skills[0].level, 90);
    }

    #[test]
    fn test_filter_ai_sample() {
        let content = sample();
        let filtered = filter_projects(&content.projects, ProjectFilter::Only(Category::Ai));
        assert_eq!(
            titles(&filtered),
            vec!["AI Chat Assistant", "Image Recognition System"]
        );
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let content = sample();
        let filtered = filter_projects(&content.projects, ProjectFilter::All);
        let expected = content.projects.iter().collect::<Vec<_>>();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_filter_every_category() {
        let content = sample();
        for filter in ProjectFilter::BUTTONS {
            let filtered = filter_projects(&content.projects, filter);
            let expected = content
                .projects
                .iter()
                .filter(|p| match filter {
                    ProjectFilter::All => true,
                    ProjectFilter::Only(c) => p.category == c,
                })
                .collect::<Vec<_>>();
            assert_eq!(filtered, expected, "filter {filter}");
        }
        let web = filter_projects(&content.projects, ProjectFilter::Only(Category::Web));
        assert_eq!(titles(&web), vec!["E-Commerce Platform", "Analytics Dashboard"]);
        let mobile = filter_projects(&content.projects, ProjectFilter::Only(Category::Mobile));
        assert_eq!(titles(&mobile), vec!["Task Management App", "Fitness Tracker"]);
    }

    #[test]
    fn test_filter_parse_and_labels() {
        assert_eq!("all".parse::<ProjectFilter>(), Ok(ProjectFilter::All));
        assert_eq!(
            "ai".parse::<ProjectFilter>(),
            Ok(ProjectFilter::Only(Category::Ai))
        );
        assert!("games".parse::<ProjectFilter>().is_err());
        let labels = ProjectFilter::BUTTONS
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["All", "Web Design", "Mobile Apps", "AI/ML"]);
        for filter in ProjectFilter::BUTTONS {
            assert_eq!(filter.to_string().parse::<ProjectFilter>(), Ok(filter));
        }
    }

    #[test]
    fn test_rejects_invalid_skill_level() {
        let mut content = sample();
        content.skills[1].level = 140;
        let json = serde_json::to_string(&content).unwrap();
        match SiteContent::from_json(&json) {
            Err(ContentError::SkillLevel { name, level }) => {
                assert_eq!(name, "Frontend Development");
                assert_eq!(level, 140);
            }
            other => panic!("expected skill level error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_duplicate_project() {
        let mut content = sample();
        content.projects[3].title = "E-Commerce Platform".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateProject(t)) if t == "E-Commerce Platform"
        ));
    }

    #[test]
    fn test_rejects_empty_name_and_bad_json() {
        let mut content = sample();
        content.profile.name.clear();
        assert!(matches!(content.validate(), Err(ContentError::MissingName)));
        assert!(matches!(
            SiteContent::from_json("{ \"profile\": 3 }"),
            Err(ContentError::ParseError(_))
        ));
    }

    #[test]
    fn test_timeline_alternates_sides() {
        let sides = (0..4).map(is_left).collect::<Vec<_>>();
        assert_eq!(sides, vec![true, false, true, false]);
    }

    #[test]
    fn test_skill_width_is_clamped() {
        let skill = Skill {
            name: "Overconfidence".to_string(),
            level: 250,
        };
        assert_eq!(skill.width_percent(), 100);
    }
}
