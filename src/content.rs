//! Static portfolio content: profile, skills, projects, and outbound links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the page shows is compile-time data defined here. Components
//! only read these tables; nothing mutates them at runtime.
//!
//! ERROR HANDLING
//! ==============
//! `validate` checks the tables once at mount. A failure is reported through
//! `ContentError` and logged by the caller; rendering continues regardless.

use crate::components::icon::IconKind;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A named skill with a self-assessed proficiency percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage in `0..=100`.
    pub level: u8,
}

/// A showcased project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub features: &'static [&'static str],
}

/// An outbound profile or contact link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub handle: &'static str,
    /// `None` marks a placeholder with no destination yet.
    pub href: Option<&'static str>,
}

/// One row of the "Experience" list in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub icon: IconKind,
    pub title: &'static str,
    pub detail: &'static str,
}

/// Icon tint used by expertise cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Pink,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent--blue",
            Accent::Purple => "accent--purple",
            Accent::Pink => "accent--pink",
        }
    }
}

/// A summary card under the skill bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expertise {
    pub icon: IconKind,
    pub accent: Accent,
    pub title: &'static str,
    pub detail: &'static str,
}

/// Identity and copy for the hero, about, contact, and footer regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub contact_blurb: &'static str,
    pub email: &'static str,
    pub copyright_year: u16,
    pub footer_tagline: &'static str,
}

/// Content table failures found by [`validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("skill #{index} has an empty name")]
    EmptySkillName { index: usize },
    #[error("skill `{name}` has level {level}, expected 0..=100")]
    SkillLevelOutOfRange { name: &'static str, level: u8 },
    #[error("project `{title}` has no tags")]
    ProjectWithoutTags { title: &'static str },
    #[error("project `{title}` links to `{link}`, expected an https URL")]
    InvalidProjectLink {
        title: &'static str,
        link: &'static str,
    },
    #[error("{label} link `{href}` must use https or mailto")]
    InvalidSocialLink {
        label: &'static str,
        href: &'static str,
    },
}

pub const PROFILE: Profile = Profile {
    name: "Bilawal Rizvi",
    initials: "BR",
    role: "Full-Stack Developer",
    tagline: "Building modern web applications with passion and precision",
    about: &[
        "I'm a 16-year-old passionate full-stack developer currently in my 1st year of ICS. \
         I've been coding in JavaScript for 1.5 years and have specialized in React and \
         Express.js for the past 6 months.",
        "I love building modern, responsive web applications that solve real-world problems. \
         My journey in web development has been driven by curiosity and a constant desire to \
         learn and improve.",
    ],
    contact_blurb: "I'm always open to discussing new projects, creative ideas, or \
                    opportunities to be part of your vision.",
    email: "shahb7404@gmail.com",
    copyright_year: 2026,
    footer_tagline: "Passionate about creating amazing web experiences",
};

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML", level: 90 },
    Skill { name: "CSS", level: 85 },
    Skill { name: "Tailwind CSS", level: 88 },
    Skill { name: "JavaScript", level: 85 },
    Skill { name: "React", level: 80 },
    Skill { name: "Express.js", level: 75 },
    Skill { name: "MongoDB", level: 78 },
    Skill { name: "Mongoose", level: 75 },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Warehouse Management System",
        description: "A comprehensive full-stack inventory management application featuring \
                      shop stock management, packing records, embroidery details tracking, \
                      reports generation, and fabric detail management with CRUD operations.",
        tags: &["React", "Express.js", "MongoDB", "Tailwind CSS"],
        link: "https://ware-house-mangaement-frontend.vercel.app/",
        features: &[
            "User Authentication",
            "Inventory Tracking",
            "Export Functionality",
            "Real-time Updates",
        ],
    },
    Project {
        title: "Baroque E-Commerce Clone",
        description: "A full-stack e-commerce platform clone of Baroque, featuring product \
                      listings, shopping cart functionality, user authentication, and a \
                      responsive design matching the original brand aesthetic.",
        tags: &["React", "Node.js", "Express", "MongoDB"],
        link: "https://baroque-frontend-dcdxoi0vk-bilawal-rizvis-projects.vercel.app",
        features: &["Product Catalog", "Shopping Cart", "User Auth", "Responsive Design"],
    },
];

const GITHUB: SocialLink = SocialLink {
    icon: IconKind::Github,
    label: "GitHub",
    handle: "Bilawal-Rizvi",
    href: Some("https://github.com/Bilawal-Rizvi"),
};

const LINKEDIN: SocialLink = SocialLink {
    icon: IconKind::Linkedin,
    label: "LinkedIn",
    handle: "Bilawal Shah",
    href: Some("https://linkedin.com/in/bilawal-shah"),
};

// No Fiverr profile yet.
const FIVERR: SocialLink = SocialLink {
    icon: IconKind::Fiverr,
    label: "Fiverr",
    handle: "",
    href: None,
};

const EMAIL: SocialLink = SocialLink {
    icon: IconKind::Mail,
    label: "Email",
    handle: "shahb7404@gmail.com",
    href: Some("mailto:shahb7404@gmail.com"),
};

/// Round icon buttons under the hero headline.
pub const HERO_LINKS: &[SocialLink] = &[GITHUB, LINKEDIN, FIVERR, EMAIL];

/// Cards in the contact section.
pub const CONTACT_LINKS: &[SocialLink] = &[GITHUB, LINKEDIN, EMAIL];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        icon: IconKind::Code,
        title: "JavaScript Development",
        detail: "1.5 years of experience",
    },
    Experience {
        icon: IconKind::Layers,
        title: "React & Express.js",
        detail: "6 months of building projects",
    },
    Experience {
        icon: IconKind::Award,
        title: "Certification",
        detail: "Ideoversity (In Progress)",
    },
];

pub const EXPERTISE: &[Expertise] = &[
    Expertise {
        icon: IconKind::Code,
        accent: Accent::Blue,
        title: "Frontend",
        detail: "React, Tailwind CSS, Responsive Design",
    },
    Expertise {
        icon: IconKind::Database,
        accent: Accent::Purple,
        title: "Backend",
        detail: "Express.js, Node.js, RESTful APIs",
    },
    Expertise {
        icon: IconKind::Layers,
        accent: Accent::Pink,
        title: "Database",
        detail: "MongoDB, Mongoose ODM",
    },
];

/// Check every content table.
///
/// # Errors
///
/// Returns the first [`ContentError`] found.
pub fn validate() -> Result<(), ContentError> {
    validate_skills(SKILLS)?;
    validate_projects(PROJECTS)?;
    validate_links(HERO_LINKS)?;
    validate_links(CONTACT_LINKS)
}

/// # Errors
///
/// Fails on an empty name or a level above 100.
pub fn validate_skills(skills: &[Skill]) -> Result<(), ContentError> {
    for (index, skill) in skills.iter().enumerate() {
        if skill.name.trim().is_empty() {
            return Err(ContentError::EmptySkillName { index });
        }
        if skill.level > 100 {
            return Err(ContentError::SkillLevelOutOfRange {
                name: skill.name,
                level: skill.level,
            });
        }
    }
    Ok(())
}

/// # Errors
///
/// Fails when a project has no tags or a non-https link.
pub fn validate_projects(projects: &[Project]) -> Result<(), ContentError> {
    for project in projects {
        if project.tags.is_empty() {
            return Err(ContentError::ProjectWithoutTags {
                title: project.title,
            });
        }
        if !project.link.starts_with("https://") {
            return Err(ContentError::InvalidProjectLink {
                title: project.title,
                link: project.link,
            });
        }
    }
    Ok(())
}

/// # Errors
///
/// Fails when a link with a destination uses a scheme other than
/// `https:` or `mailto:`. Placeholders pass.
pub fn validate_links(links: &[SocialLink]) -> Result<(), ContentError> {
    for link in links {
        let Some(href) = link.href else {
            continue;
        };
        if !(href.starts_with("https://") || href.starts_with("mailto:")) {
            return Err(ContentError::InvalidSocialLink {
                label: link.label,
                href,
            });
        }
    }
    Ok(())
}
