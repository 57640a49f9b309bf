use std::collections::HashSet;

use anyhow::Context;
use anyhow::Result;
use anyhow::ensure;
use serde::Deserialize;
use serde::Serialize;

const PROFILE_JSON: &str = include_str!("../data/profile.json");

/// Shown when the profile picture fails to load.
pub const PROFILE_FALLBACK_IMAGE: &str = "/images/self.png";

/// Shown when a project screenshot fails to load.
pub const PROJECT_PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/400x250/E0E7FF/6366F1?text=Project+Image";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Instagram,
    GitHub,
    Twitter,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::Instagram => "Instagram",
            SocialKind::GitHub => "GitHub",
            SocialKind::Twitter => "Twitter",
        }
    }

    /// 24x24 outline for the contact section.
    pub fn svg_path(&self) -> &'static str {
        match self {
            SocialKind::Instagram => "M7.75 2h8.5A5.75 5.75 0 0 1 22 7.75v8.5A5.75 5.75 0 0 1 16.25 22h-8.5A5.75 5.75 0 0 1 2 16.25v-8.5A5.75 5.75 0 0 1 7.75 2zm0 1.5A4.25 4.25 0 0 0 3.5 7.75v8.5A4.25 4.25 0 0 0 7.75 20.5h8.5A4.25 4.25 0 0 0 20.5 16.25v-8.5A4.25 4.25 0 0 0 16.25 3.5zm4.25 3.25a5.25 5.25 0 1 1 0 10.5a5.25 5.25 0 0 1 0-10.5zm0 1.5a3.75 3.75 0 1 0 0 7.5a3.75 3.75 0 0 0 0-7.5zm6 1.25a1 1 0 1 1-2 0a1 1 0 0 1 2 0z",
            SocialKind::GitHub => "M12 2C6.477 2 2 6.484 2 12.021c0 4.428 2.865 8.184 6.839 9.504.5.092.682-.217.682-.483 0-.237-.009-.868-.014-1.703-2.782.605-3.369-1.342-3.369-1.342-.454-1.157-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.004.07 1.532 1.032 1.532 1.032.892 1.53 2.341 1.088 2.91.832.091-.647.35-1.088.636-1.339-2.221-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.025A9.564 9.564 0 0 1 12 6.844c.85.004 1.705.115 2.504.338 1.909-1.295 2.748-1.025 2.748-1.025.546 1.378.202 2.397.1 2.65.64.7 1.028 1.595 1.028 2.688 0 3.847-2.337 4.695-4.566 4.943.359.309.678.919.678 1.852 0 1.336-.012 2.415-.012 2.744 0 .268.18.579.688.481C19.138 20.2 22 16.448 22 12.021 22 6.484 17.523 2 12 2z",
            SocialKind::Twitter => "M22.46 6c-.77.35-1.6.58-2.47.69a4.3 4.3 0 0 0 1.88-2.37a8.59 8.59 0 0 1-2.72 1.04a4.28 4.28 0 0 0-7.29 3.9A12.13 12.13 0 0 1 3.11 4.9a4.28 4.28 0 0 0 1.32 5.71a4.22 4.22 0 0 1-1.94-.54v.05a4.28 4.28 0 0 0 3.43 4.19a4.3 4.3 0 0 1-1.93.07a4.28 4.28 0 0 0 4 2.98A8.6 8.6 0 0 1 2 19.54a12.13 12.13 0 0 0 6.56 1.92c7.88 0 12.2-6.53 12.2-12.2c0-.19-.01-.39-.02-.58A8.72 8.72 0 0 0 24 4.59a8.5 8.5 0 0 1-2.54.7z",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// devicon name, e.g. `rust-plain`
    pub icon: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub live_link: String,
    pub github_link: String,
}

/// Everything the page shows about its owner. Read-only once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentModel {
    pub name: String,
    pub brand: String,
    pub site_url: String,
    pub description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub author: String,
    pub job_title: String,
    pub image: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ContentModel {
    /// The profile bundled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(PROFILE_JSON).context("loading bundled data/profile.json")
    }

    pub fn from_json(src: &str) -> Result<Self> {
        let model: ContentModel = serde_json::from_str(src).context("parsing profile")?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.name.trim().is_empty(), "profile name is empty");

        for (i, p) in self.projects.iter().enumerate() {
            ensure!(!p.title.trim().is_empty(), "project #{i} has no title");
        }

        let mut seen = HashSet::new();
        for s in &self.skills {
            ensure!(seen.insert(s.name.as_str()), "skill {:?} listed twice", s.name);
        }

        for link in &self.social {
            ensure!(
                !link.url.trim().is_empty(),
                "{} link has an empty url",
                link.kind.label()
            );
        }

        Ok(())
    }

    pub fn social_urls(&self) -> Vec<String> {
        self.social.iter().map(|s| s.url.clone()).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample() -> ContentModel {
        ContentModel::from_json(
            r#"{
                "name": "Ada Example",
                "brand": "ada.dev",
                "site_url": "https://ada.dev/",
                "description": "Systems person.",
                "keywords": "rust, wasm",
                "author": "Ada Example",
                "job_title": "Engineer",
                "image": "/images/ada.png",
                "about": ["one", "two"],
                "social": [
                    { "kind": "github", "url": "https://github.com/ada" },
                    { "kind": "twitter", "url": "https://twitter.com/ada" }
                ],
                "skills": [{ "name": "Rust", "icon": "rust-plain" }],
                "projects": [
                    {
                        "title": "Engine",
                        "description": "A thing",
                        "image_url": "https://ada.dev/engine.png",
                        "live_link": "https://ada.dev/engine",
                        "github_link": "https://github.com/ada/engine"
                    },
                    {
                        "title": "Parser",
                        "description": "Another thing",
                        "live_link": "https://ada.dev/parser",
                        "github_link": "https://github.com/ada/parser"
                    }
                ]
            }"#,
        )
        .expect("sample profile")
    }

    #[test]
    fn bundled_profile_loads() {
        let model = ContentModel::builtin().expect("bundled profile");
        assert!(!model.name.is_empty());
        assert!(!model.projects.is_empty());
        assert_eq!(model.social.len(), 3);
    }

    #[test]
    fn optional_fields_default() {
        let m = sample();
        assert_eq!(m.skills[0].color, None);
        assert_eq!(m.projects[1].image_url, "");
        assert_eq!(
            m.social_urls(),
            vec!["https://github.com/ada", "https://twitter.com/ada"]
        );
    }

    #[test]
    fn projects_keep_list_order() {
        let titles: Vec<_> = sample().projects.iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, ["Engine", "Parser"]);
    }

    #[test]
    fn rejects_empty_name() {
        let mut m = sample();
        m.name = "  ".into();
        assert!(m.validate().is_err());
    }

    #[test]
    fn rejects_untitled_project() {
        let mut m = sample();
        m.projects[1].title.clear();
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("project #1"));
    }

    #[test]
    fn rejects_duplicate_skills() {
        let mut m = sample();
        m.skills.push(m.skills[0].clone());
        assert!(m.validate().is_err());
    }

    #[test]
    fn rejects_empty_social_url() {
        let mut m = sample();
        m.social[0].url = String::new();
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("GitHub"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ContentModel::from_json("{ \"name\": 1 }").unwrap_err();
        assert!(format!("{err:#}").contains("parsing profile"));
    }

    #[test]
    fn unknown_social_kind_is_an_error() {
        let src = PROFILE_JSON.replace("\"instagram\"", "\"myspace\"");
        assert!(ContentModel::from_json(&src).is_err());
    }
}
