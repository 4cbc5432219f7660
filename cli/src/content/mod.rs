//! # Portfolio Content Store
//!
//! File: cli/src/content/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! All text shown on the portfolio page lives here as static data: the profile,
//! skills, certifications and awards, projects, hobbies and social links. The
//! content is authored once and never changes at runtime. Rendering and the
//! assistant only ever read it.
//!
//! ## Architecture
//!
//! - `data`: the authored content (`PORTFOLIO`)
//! - `carousel`: paging for the achievements slider
//! - `contact`: contact form validation
//!
//! The types derive `Serialize` so they can be handed to Tera as-is.
//!
use serde::Serialize;

pub mod carousel;
pub mod contact;
mod data;

pub use carousel::Carousel;
pub use contact::{ContactForm, FieldErrors};

/// Order in which featured project domains are shown. Domains not listed
/// here are not rendered.
pub const DOMAIN_ORDER: [&str; 3] = ["Cloud & DevOps", "AI/ML & Data Science", "IoT & Automation"];

#[derive(Debug, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: &'static [SkillCategory],
    pub achievements: &'static [Achievement],
    pub projects: &'static [Project],
    pub minor_projects: &'static [ProjectGroup],
    pub hobbies: &'static [Hobby],
    pub social_links: &'static [SocialLink],
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub location: &'static str,
    /// Rotated through in the hero banner.
    pub roles: &'static [&'static str],
    pub open_to_work: bool,
    pub bio: &'static [&'static str],
    pub mission: &'static str,
    pub stats: &'static [Stat],
    pub highlights: &'static [&'static str],
    pub email: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Certification,
    Achievement,
}

#[derive(Debug, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: AchievementKind,
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub github_url: &'static str,
    pub domain: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProjectGroup {
    pub name: &'static str,
    pub projects: &'static [Project],
}

/// Featured projects of one domain, in authored order.
#[derive(Debug, Serialize)]
pub struct DomainProjects<'a> {
    pub domain: &'a str,
    pub projects: Vec<&'a Project>,
}

#[derive(Debug, Serialize)]
pub struct Hobby {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub fn portfolio() -> &'static Portfolio {
    &data::PORTFOLIO
}

impl Portfolio {
    pub fn certifications(&self) -> impl Iterator<Item = &Achievement> {
        self.by_kind(AchievementKind::Certification)
    }

    pub fn awards(&self) -> impl Iterator<Item = &Achievement> {
        self.by_kind(AchievementKind::Achievement)
    }

    fn by_kind(&self, kind: AchievementKind) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(move |a| a.kind == kind)
    }

    /// Featured projects grouped by `DOMAIN_ORDER`, skipping empty domains.
    pub fn projects_by_domain(&self) -> Vec<DomainProjects<'_>> {
        DOMAIN_ORDER
            .iter()
            .map(|&domain| DomainProjects {
                domain,
                projects: self
                    .projects
                    .iter()
                    .filter(|p| p.domain == domain)
                    .collect(),
            })
            .filter(|group| !group.projects.is_empty())
            .collect()
    }

    /// Achievements split into carousel slides of `per_slide` items.
    pub fn achievement_slides(&self, per_slide: usize) -> Vec<&[Achievement]> {
        let mut carousel = Carousel::new(self.achievements.len(), per_slide);
        (0..carousel.slide_count())
            .map(|slide| {
                carousel.go_to(slide);
                &self.achievements[carousel.visible_range()]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_filters_partition_achievements() {
        let p = portfolio();
        let certs = p.certifications().count();
        let awards = p.awards().count();
        assert_eq!(certs + awards, p.achievements.len());
        assert!(p
            .certifications()
            .all(|a| a.kind == AchievementKind::Certification));
        assert!(p.awards().any(|a| a.title == "Gold Medalist"));
    }

    #[test]
    fn test_projects_by_domain_follows_domain_order() {
        let groups = portfolio().projects_by_domain();
        let domains: Vec<&str> = groups.iter().map(|g| g.domain).collect();
        assert_eq!(domains, DOMAIN_ORDER.to_vec());
        for group in &groups {
            assert!(group.projects.iter().all(|p| p.domain == group.domain));
        }
        let grouped: usize = groups.iter().map(|g| g.projects.len()).sum();
        assert_eq!(grouped, portfolio().projects.len());
    }

    #[test]
    fn test_projects_by_domain_keeps_authored_order() {
        let groups = portfolio().projects_by_domain();
        assert_eq!(
            groups[0].projects[0].title,
            "Hand Gesture-Controlled AWS Instance Management"
        );
    }

    #[test]
    fn test_achievement_slides_cover_everything() {
        let p = portfolio();
        let slides = p.achievement_slides(4);
        assert_eq!(slides.len(), p.achievements.len().div_ceil(4));
        assert!(slides.iter().all(|s| !s.is_empty() && s.len() <= 4));
        let total: usize = slides.iter().map(|s| s.len()).sum();
        assert_eq!(total, p.achievements.len());
        assert_eq!(slides[0][0].title, p.achievements[0].title);
    }

    #[test]
    fn test_skill_percentages_in_range() {
        for category in portfolio().skills {
            assert!(!category.skills.is_empty());
            assert!(category.skills.iter().all(|s| s.percentage <= 100));
        }
    }
}
