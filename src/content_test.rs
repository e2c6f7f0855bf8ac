use super::*;

// =============================================================
// Shipped tables
// =============================================================

#[test]
fn shipped_content_is_valid() {
    assert_eq!(validate(), Ok(()));
}

#[test]
fn skill_levels_are_percentages() {
    assert!(!SKILLS.is_empty());
    assert!(SKILLS.iter().all(|s| s.level <= 100));
}

#[test]
fn skills_keep_listed_order() {
    let names: Vec<&str> = SKILLS.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        [
            "HTML",
            "CSS",
            "Tailwind CSS",
            "JavaScript",
            "React",
            "Express.js",
            "MongoDB",
            "Mongoose"
        ]
    );
}

#[test]
fn every_project_has_four_tags_and_four_features() {
    assert_eq!(PROJECTS.len(), 2);
    for project in PROJECTS {
        assert_eq!(project.tags.len(), 4, "{}", project.title);
        assert_eq!(project.features.len(), 4, "{}", project.title);
    }
}

#[test]
fn hero_links_include_placeholder_only_for_fiverr() {
    let placeholders: Vec<&str> = HERO_LINKS
        .iter()
        .filter(|l| l.href.is_none())
        .map(|l| l.label)
        .collect();
    assert_eq!(placeholders, ["Fiverr"]);
}

#[test]
fn contact_links_all_have_destinations() {
    assert!(CONTACT_LINKS.iter().all(|l| l.href.is_some()));
    assert_eq!(
        CONTACT_LINKS.last().and_then(|l| l.href),
        Some("mailto:shahb7404@gmail.com")
    );
}

#[test]
fn accent_classes_are_distinct() {
    assert_ne!(Accent::Blue.class(), Accent::Purple.class());
    assert_ne!(Accent::Purple.class(), Accent::Pink.class());
}

// =============================================================
// Validation failures
// =============================================================

#[test]
fn validate_skills_rejects_level_above_hundred() {
    let skills = [Skill { name: "Rust", level: 101 }];
    assert_eq!(
        validate_skills(&skills),
        Err(ContentError::SkillLevelOutOfRange {
            name: "Rust",
            level: 101
        })
    );
}

#[test]
fn validate_skills_accepts_bounds() {
    let skills = [Skill { name: "A", level: 0 }, Skill { name: "B", level: 100 }];
    assert_eq!(validate_skills(&skills), Ok(()));
}

#[test]
fn validate_skills_rejects_blank_name() {
    let skills = [Skill { name: "Go", level: 10 }, Skill { name: "  ", level: 10 }];
    assert_eq!(
        validate_skills(&skills),
        Err(ContentError::EmptySkillName { index: 1 })
    );
}

#[test]
fn validate_projects_rejects_missing_tags() {
    let projects = [Project {
        title: "Bare",
        description: "",
        tags: &[],
        link: "https://example.com",
        features: &[],
    }];
    assert_eq!(
        validate_projects(&projects),
        Err(ContentError::ProjectWithoutTags { title: "Bare" })
    );
}

#[test]
fn validate_projects_rejects_plain_http() {
    let projects = [Project {
        title: "Insecure",
        description: "",
        tags: &["x"],
        link: "http://example.com",
        features: &[],
    }];
    assert!(matches!(
        validate_projects(&projects),
        Err(ContentError::InvalidProjectLink { title: "Insecure", .. })
    ));
}

#[test]
fn validate_links_rejects_javascript_scheme() {
    let links = [SocialLink {
        icon: IconKind::Mail,
        label: "Bad",
        handle: "",
        href: Some("javascript:alert(1)"),
    }];
    let err = validate_links(&links).unwrap_err();
    assert_eq!(err.to_string(), "Bad link `javascript:alert(1)` must use https or mailto");
}

#[test]
fn validate_links_skips_placeholders() {
    let links = [SocialLink {
        icon: IconKind::Fiverr,
        label: "Soon",
        handle: "",
        href: None,
    }];
    assert_eq!(validate_links(&links), Ok(()));
}

#[test]
fn content_error_messages_name_the_record() {
    let err = ContentError::SkillLevelOutOfRange {
        name: "CSS",
        level: 120,
    };
    assert_eq!(err.to_string(), "skill `CSS` has level 120, expected 0..=100");
}
