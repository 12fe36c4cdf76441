//! Static project and skill records shown by the page.

use crate::i18n::Translations;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
}

impl Project {
    pub fn localized_description(&self, text: &Translations) -> &'static str {
        text.project_description(self.id)
            .unwrap_or(self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

static PROJECTS: [Project; 3] = [
    Project {
        id: "project-1",
        title: "Chess App",
        description: "Webowa gra w szachy online z nowoczesnym interfejsem i ciemnym motywem. Pozwala na rozgrywkę w przeglądarce.",
        tags: &["React", "JavaScript", "CSS"],
        live_url: Some("https://chess-app-adamnizialek.netlify.app/"),
        source_url: Some("https://github.com/adamnizialek/Chess-APP"),
    },
    Project {
        id: "project-2",
        title: "Projekt Drugi",
        description: "Opis drugiego projektu. Dodaj tutaj szczegóły dotyczące technologii i rozwiązań.",
        tags: &["Next.js", "Node.js", "PostgreSQL"],
        live_url: None,
        source_url: None,
    },
    Project {
        id: "project-3",
        title: "Projekt Trzeci",
        description: "Opis trzeciego projektu. Opisz wyzwania i jak je rozwiązałeś.",
        tags: &["Python", "Docker", "REST API"],
        live_url: None,
        source_url: None,
    },
];

static SKILLS: [Skill; 12] = [
    Skill { name: "React", category: SkillCategory::Frontend },
    Skill { name: "Next.js", category: SkillCategory::Frontend },
    Skill { name: "TypeScript", category: SkillCategory::Frontend },
    Skill { name: "Tailwind CSS", category: SkillCategory::Frontend },
    Skill { name: "Three.js", category: SkillCategory::Frontend },
    Skill { name: "Node.js", category: SkillCategory::Backend },
    Skill { name: "Python", category: SkillCategory::Backend },
    Skill { name: "PostgreSQL", category: SkillCategory::Backend },
    Skill { name: "Git", category: SkillCategory::Tools },
    Skill { name: "Docker", category: SkillCategory::Tools },
    Skill { name: "Figma", category: SkillCategory::Tools },
    Skill { name: "Linux", category: SkillCategory::Tools },
];

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn skills() -> &'static [Skill] {
    &SKILLS
}

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}
