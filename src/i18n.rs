//! Display strings for both supported locales.

use crate::locale::Locale;

#[derive(Debug, PartialEq, Eq)]
pub struct Nav {
    pub home: &'static str,
    pub about: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Hero {
    pub description: &'static str,
    pub cta_projects: &'static str,
    pub cta_contact: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct About {
    pub label: &'static str,
    pub title: &'static str,
    pub bio1_prefix: &'static str,
    pub bio1_name: &'static str,
    pub bio1_suffix: &'static str,
    pub bio2: &'static str,
    pub stat_experience: &'static str,
    pub stat_projects: &'static str,
    pub stat_technologies: &'static str,
    pub category_frontend: &'static str,
    pub category_backend: &'static str,
    pub category_tools: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Projects {
    pub label: &'static str,
    pub title: &'static str,
    /// `(project id, description)`.
    pub descriptions: &'static [(&'static str, &'static str)],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Contact {
    pub label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub email_button: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Footer {
    pub copyright: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    /// Label of the locale switch, naming the language it switches to.
    pub switch_to: &'static str,
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub projects: Projects,
    pub contact: Contact,
    pub footer: Footer,
}

impl Translations {
    /// Look up a `section.key` path as used by `data-i18n` attributes.
    pub fn get(&self, path: &str) -> Option<&'static str> {
        let (section, key) = path.split_once('.')?;
        let text = match (section, key) {
            ("locale", "switch") => self.switch_to,
            ("nav", "home") => self.nav.home,
            ("nav", "about") => self.nav.about,
            ("nav", "projects") => self.nav.projects,
            ("nav", "contact") => self.nav.contact,
            ("hero", "description") => self.hero.description,
            ("hero", "cta_projects") => self.hero.cta_projects,
            ("hero", "cta_contact") => self.hero.cta_contact,
            ("about", "label") => self.about.label,
            ("about", "title") => self.about.title,
            ("about", "bio1_prefix") => self.about.bio1_prefix,
            ("about", "bio1_name") => self.about.bio1_name,
            ("about", "bio1_suffix") => self.about.bio1_suffix,
            ("about", "bio2") => self.about.bio2,
            ("about", "stat_experience") => self.about.stat_experience,
            ("about", "stat_projects") => self.about.stat_projects,
            ("about", "stat_technologies") => self.about.stat_technologies,
            ("about", "category_frontend") => self.about.category_frontend,
            ("about", "category_backend") => self.about.category_backend,
            ("about", "category_tools") => self.about.category_tools,
            ("projects", "label") => self.projects.label,
            ("projects", "title") => self.projects.title,
            ("project_descriptions", id) => return self.project_description(id),
            ("contact", "label") => self.contact.label,
            ("contact", "title") => self.contact.title,
            ("contact", "body") => self.contact.body,
            ("contact", "email_button") => self.contact.email_button,
            ("footer", "copyright") => self.footer.copyright,
            _ => return None,
        };
        Some(text)
    }

    pub fn project_description(&self, id: &str) -> Option<&'static str> {
        self.projects
            .descriptions
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, text)| *text)
    }
}

pub fn translations(locale: Locale) -> &'static Translations {
    match locale {
        Locale::Pl => &PL,
        Locale::En => &EN,
    }
}

static PL: Translations = Translations {
    switch_to: "EN",
    nav: Nav {
        home: "Start",
        about: "O mnie",
        projects: "Projekty",
        contact: "Kontakt",
    },
    hero: Hero {
        description: "Tworzę nowoczesne aplikacje webowe z pasją do czystego kodu i kreatywnego designu.",
        cta_projects: "Zobacz projekty",
        cta_contact: "Kontakt",
    },
    about: About {
        label: "01 / O mnie",
        title: "Kim jestem",
        bio1_prefix: "Cześć! Jestem ",
        bio1_name: "Adam",
        bio1_suffix: " — programista z pasją do tworzenia nowoczesnych aplikacji webowych. Specjalizuję się w budowaniu interaktywnych interfejsów użytkownika i solidnych systemów backendowych.",
        bio2: "Wierzę, że najlepszy kod to taki, który jest jednocześnie wydajny i elegancki. Każdy projekt traktuję jako okazję do nauki i rozwiązywania realnych problemów. Kiedy nie koduję, rozwijam swoje umiejętności w nowych technologiach i frameworkach.",
        stat_experience: "Lata doświadczenia",
        stat_projects: "Projekty",
        stat_technologies: "Technologii",
        category_frontend: "Frontend",
        category_backend: "Backend",
        category_tools: "Narzędzia",
    },
    projects: Projects {
        label: "02 / Projekty",
        title: "Moje prace",
        descriptions: &[
            ("project-1", "Webowa gra w szachy z możliwością rozgrywki przeciwko AI oraz podpowiedziami najlepszego ruchu. Nowoczesny interfejs z ciemnym motywem."),
            ("project-2", "Sklep internetowy z modą premium. Fullstack aplikacja e-commerce z nowoczesnym designem, systemem zarządzania produktami i koszykiem zakupowym."),
            ("project-3", "Aplikacja pomagająca deweloperom dobrać technologie do projektu. Rekomendacje generowane przez AI, walidowane przez społeczność programistów."),
        ],
    },
    contact: Contact {
        label: "03 / Kontakt",
        title: "Porozmawiajmy",
        body: "Masz pomysł na projekt lub chcesz nawiązać współpracę? Chętnie porozmawiam o nowych możliwościach. Napisz do mnie!",
        email_button: "Napisz email",
    },
    footer: Footer {
        copyright: "Adam. Wszelkie prawa zastrzeżone.",
    },
};

static EN: Translations = Translations {
    switch_to: "PL",
    nav: Nav {
        home: "Home",
        about: "About",
        projects: "Projects",
        contact: "Contact",
    },
    hero: Hero {
        description: "I build modern web applications with a passion for clean code and creative design.",
        cta_projects: "View projects",
        cta_contact: "Contact",
    },
    about: About {
        label: "01 / About",
        title: "Who I am",
        bio1_prefix: "Hi! I'm ",
        bio1_name: "Adam",
        bio1_suffix: " — a developer with a passion for building modern web applications. I specialize in creating interactive user interfaces and robust backend systems.",
        bio2: "I believe the best code is both efficient and elegant. I treat every project as an opportunity to learn and solve real problems. When I'm not coding, I sharpen my skills with new technologies and frameworks.",
        stat_experience: "Years of experience",
        stat_projects: "Projects",
        stat_technologies: "Technologies",
        category_frontend: "Frontend",
        category_backend: "Backend",
        category_tools: "Tools",
    },
    projects: Projects {
        label: "02 / Projects",
        title: "My work",
        descriptions: &[
            ("project-1", "A web-based chess game with AI opponent and best-move hints. Modern interface with a dark theme."),
            ("project-2", "Premium fashion online store. Full-stack e-commerce app with modern design, product management, and shopping cart."),
            ("project-3", "An app that helps developers pick the right tech stack. AI-generated recommendations validated by the developer community."),
        ],
    },
    contact: Contact {
        label: "03 / Contact",
        title: "Let's talk",
        body: "Have a project idea or want to collaborate? I'd love to discuss new opportunities. Get in touch!",
        email_button: "Send email",
    },
    footer: Footer {
        copyright: "Adam. All rights reserved.",
    },
};
