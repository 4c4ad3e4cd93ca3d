//! Section assembler — canonical record + section list + layout → HTML body.
//!
//! Per-section rule: a section with no underlying data renders as an empty
//! string and is silently omitted — never an empty heading. The header is
//! the one exception and always renders, since a resume always has at least
//! a name placeholder. All user data is HTML-escaped here.

use std::fmt::Write as _;

use crate::render::template::{SectionKind, TemplateConfig};
use crate::schema::canonical::CanonicalResume;

/// Which column a section lands in under the two-column layout. The
/// assignment is fixed: narrow identity/overview content left, dated entry
/// lists right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Left,
    Right,
}

fn column_for(kind: SectionKind) -> Column {
    match kind {
        SectionKind::Header | SectionKind::Summary | SectionKind::Skills => Column::Left,
        SectionKind::Experience
        | SectionKind::Education
        | SectionKind::Projects
        | SectionKind::Custom => Column::Right,
    }
}

/// Assembles the body markup for the record under the given configuration.
///
/// Two-column: sections are partitioned by `column_for`, each column wrapped
/// in its container, left before right. Single-column: configured order,
/// no reassignment.
pub fn assemble_sections(record: &CanonicalResume, config: &TemplateConfig) -> String {
    let sections = config.resolved_sections();

    if config.is_two_column() {
        let render_column = |column: Column| -> String {
            sections
                .iter()
                .filter(|&&kind| column_for(kind) == column)
                .map(|&kind| render_section(record, kind))
                .collect()
        };
        format!(
            "<div class=\"resume-columns\">\
             <div class=\"column column-left\">{}</div>\
             <div class=\"column column-right\">{}</div>\
             </div>",
            render_column(Column::Left),
            render_column(Column::Right),
        )
    } else {
        sections
            .iter()
            .map(|&kind| render_section(record, kind))
            .collect()
    }
}

fn render_section(record: &CanonicalResume, kind: SectionKind) -> String {
    match kind {
        SectionKind::Header => render_header(record),
        SectionKind::Summary => render_summary(record),
        SectionKind::Experience => render_experience(record),
        SectionKind::Education => render_education(record),
        SectionKind::Skills => render_skills(record),
        SectionKind::Projects => render_projects(record),
        SectionKind::Custom => render_custom(record),
    }
}

/// Minimal HTML escaping for user-supplied text.
fn esc(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn render_header(record: &CanonicalResume) -> String {
    let profile = &record.profile;
    let contact: Vec<String> = [
        &profile.email,
        &profile.phone,
        &profile.location,
        &profile.portfolio,
        &profile.linkedin,
    ]
    .iter()
    .filter(|value| !value.is_empty())
    .map(|value| esc(value))
    .collect();

    let mut html = format!(
        "<header class=\"resume-header\"><h1>{}</h1>",
        esc(&profile.name)
    );
    if !contact.is_empty() {
        let _ = write!(
            html,
            "<div class=\"contact\">{}</div>",
            contact.join(" &middot; ")
        );
    }
    html.push_str("</header>");
    html
}

fn render_summary(record: &CanonicalResume) -> String {
    if record.profile.summary.is_empty() {
        return String::new();
    }
    format!(
        "<section class=\"summary\"><h2>Summary</h2><p>{}</p></section>",
        esc(&record.profile.summary)
    )
}

fn render_experience(record: &CanonicalResume) -> String {
    if record.work_experience.is_empty() {
        return String::new();
    }
    let mut html = String::from("<section class=\"experience\"><h2>Work Experience</h2>");
    for entry in &record.work_experience {
        let _ = write!(
            html,
            "<div class=\"entry\">\
             <div class=\"entry-heading\">\
             <span class=\"entry-title\">{}</span>\
             <span class=\"entry-duration\">{}</span>\
             </div>\
             <div class=\"entry-subtitle\">{}</div>",
            esc(&entry.position),
            esc(&entry.duration),
            esc(&entry.company),
        );
        if !entry.description.is_empty() {
            let _ = write!(html, "<p>{}</p>", esc(&entry.description));
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
    html
}

fn render_education(record: &CanonicalResume) -> String {
    if record.education.is_empty() {
        return String::new();
    }
    let mut html = String::from("<section class=\"education\"><h2>Education</h2>");
    for entry in &record.education {
        let degree_line = match (entry.degree.is_empty(), entry.major.is_empty()) {
            (false, false) => format!("{}, {}", esc(&entry.degree), esc(&entry.major)),
            (false, true) => esc(&entry.degree),
            (true, false) => esc(&entry.major),
            (true, true) => String::new(),
        };
        let _ = write!(
            html,
            "<div class=\"entry\">\
             <div class=\"entry-heading\">\
             <span class=\"entry-title\">{}</span>\
             <span class=\"entry-duration\">{}</span>\
             </div>",
            esc(&entry.school),
            esc(&entry.duration),
        );
        if !degree_line.is_empty() {
            let _ = write!(html, "<div class=\"entry-subtitle\">{degree_line}</div>");
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
    html
}

fn render_skills(record: &CanonicalResume) -> String {
    if record.skills.is_empty() {
        return String::new();
    }
    let mut html = String::from("<section class=\"skills\"><h2>Skills</h2>");
    for group in &record.skills {
        html.push_str("<div class=\"entry skill-group\">");
        if !group.category.is_empty() {
            let _ = write!(
                html,
                "<span class=\"skill-category\">{}</span>: ",
                esc(&group.category)
            );
        }
        let _ = write!(html, "{}</div>", esc(&group.details));
    }
    html.push_str("</section>");
    html
}

fn render_projects(record: &CanonicalResume) -> String {
    if record.project_experience.is_empty() {
        return String::new();
    }
    let mut html = String::from("<section class=\"projects\"><h2>Projects</h2>");
    for entry in &record.project_experience {
        let title = if entry.url.is_empty() {
            esc(&entry.name)
        } else {
            format!("<a href=\"{}\">{}</a>", esc(&entry.url), esc(&entry.name))
        };
        let _ = write!(
            html,
            "<div class=\"entry\">\
             <div class=\"entry-heading\">\
             <span class=\"entry-title\">{title}</span>\
             <span class=\"entry-duration\">{}</span>\
             </div>",
            esc(&entry.duration),
        );
        if !entry.role.is_empty() {
            let _ = write!(html, "<div class=\"entry-subtitle\">{}</div>", esc(&entry.role));
        }
        if !entry.description.is_empty() {
            let _ = write!(html, "<p>{}</p>", esc(&entry.description));
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
    html
}

fn render_custom(record: &CanonicalResume) -> String {
    if record.custom_sections.is_empty() {
        return String::new();
    }
    let mut html = String::new();
    for section in &record.custom_sections {
        let _ = write!(
            html,
            "<section class=\"custom\"><h2>{}</h2><p>{}</p></section>",
            esc(&section.title),
            esc(&section.content),
        );
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::normalizer::normalize;
    use serde_json::json;

    fn two_column_config(sections: &[&str]) -> TemplateConfig {
        TemplateConfig {
            layout: "two-column".to_string(),
            sections: Some(sections.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    fn single_column_config(sections: &[&str]) -> TemplateConfig {
        TemplateConfig {
            sections: Some(sections.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    fn full_record() -> CanonicalResume {
        normalize(&json!({
            "personalInfo": {"name": "Zhang", "email": "z@x.com", "summary": "Engineer."},
            "workExperience": [{"company": "Co", "position": "Eng", "duration": "2020-2023"}],
            "education": [{"school": "Fudan", "degree": "BSc"}],
            "skills": ["Rust"],
            "projects": [{"name": "Pipeline", "url": "https://p.dev"}]
        }))
    }

    #[test]
    fn test_empty_section_renders_nothing() {
        let record = normalize(&json!({"name": "Ada"}));
        let html = assemble_sections(&record, &single_column_config(&["experience"]));
        assert!(!html.contains("Work Experience"));
        assert!(!html.contains("class=\"experience\""));
        assert_eq!(html, "");
    }

    #[test]
    fn test_header_always_renders_even_without_data() {
        let record = CanonicalResume::empty();
        let html = assemble_sections(&record, &single_column_config(&["header"]));
        assert!(html.contains("resume-header"));
        assert!(html.contains("<h1>"));
    }

    #[test]
    fn test_single_column_preserves_configured_order() {
        let html = assemble_sections(
            &full_record(),
            &single_column_config(&["skills", "header", "experience"]),
        );
        let skills_at = html.find("class=\"skills\"").unwrap();
        let header_at = html.find("resume-header").unwrap();
        let experience_at = html.find("class=\"experience\"").unwrap();
        assert!(skills_at < header_at && header_at < experience_at);
        assert!(!html.contains("resume-columns"));
    }

    #[test]
    fn test_two_column_partition_is_exclusive_and_exhaustive() {
        let html = assemble_sections(
            &full_record(),
            &two_column_config(&[
                "header",
                "summary",
                "experience",
                "education",
                "skills",
                "projects",
            ]),
        );
        let left_start = html.find("column-left").unwrap();
        let right_start = html.find("column-right").unwrap();
        let left = &html[left_start..right_start];
        let right = &html[right_start..];

        for marker in ["resume-header", "class=\"summary\"", "class=\"skills\""] {
            assert!(left.contains(marker), "{marker} belongs in the left column");
            assert!(!right.contains(marker), "{marker} must not repeat on the right");
        }
        for marker in [
            "class=\"experience\"",
            "class=\"education\"",
            "class=\"projects\"",
        ] {
            assert!(right.contains(marker), "{marker} belongs in the right column");
            assert!(!left.contains(marker), "{marker} must not repeat on the left");
        }
    }

    #[test]
    fn test_two_column_emits_only_configured_sections() {
        let html = assemble_sections(&full_record(), &two_column_config(&["header", "experience"]));
        assert!(html.contains("resume-header"));
        assert!(html.contains("class=\"experience\""));
        assert!(!html.contains("class=\"skills\""));
        assert!(!html.contains("class=\"education\""));
    }

    #[test]
    fn test_unknown_tokens_are_skipped() {
        let html = assemble_sections(
            &full_record(),
            &single_column_config(&["header", "references"]),
        );
        assert!(html.contains("resume-header"));
        assert!(!html.contains("references"));
    }

    #[test]
    fn test_header_contact_joins_nonempty_fields_only() {
        let record = normalize(&json!({"name": "Ada", "email": "a@b.c", "phone": ""}));
        let html = render_header(&record);
        assert!(html.contains("a@b.c"));
        assert!(!html.contains("&middot; &middot;"));
    }

    #[test]
    fn test_user_data_is_escaped() {
        let record = normalize(&json!({
            "name": "<script>alert(1)</script>",
            "workExperience": [{"company": "A&B <Co>", "position": "Eng"}]
        }));
        let html = assemble_sections(&record, &single_column_config(&["header", "experience"]));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A&amp;B &lt;Co&gt;"));
    }

    #[test]
    fn test_project_name_links_when_url_present() {
        let html = render_projects(&full_record());
        assert!(html.contains("<a href=\"https://p.dev\">Pipeline</a>"));
    }

    #[test]
    fn test_education_degree_line_variants() {
        let record = normalize(&json!({
            "education": [
                {"school": "A", "degree": "BSc", "major": "CS"},
                {"school": "B", "degree": "MSc"},
                {"school": "C"}
            ]
        }));
        let html = render_education(&record);
        assert!(html.contains("BSc, CS"));
        assert!(html.contains("MSc"));
        // No empty subtitle for the degree-less entry.
        assert_eq!(html.matches("entry-subtitle").count(), 2);
    }

    #[test]
    fn test_custom_sections_render_title_and_content() {
        let record = normalize(&json!({"awards": ["Dean's List"]}));
        let html = assemble_sections(&record, &single_column_config(&["custom"]));
        assert!(html.contains("<h2>Awards</h2>"));
        assert!(html.contains("Dean&#39;s List"));
    }

    #[test]
    fn test_skill_group_without_category_has_no_colon_prefix() {
        let mut record = CanonicalResume::empty();
        record.skills.push(crate::schema::canonical::SkillGroup {
            category: String::new(),
            details: "Rust, SQL".to_string(),
        });
        let html = render_skills(&record);
        assert!(html.contains("Rust, SQL"));
        assert!(!html.contains("skill-category"));
    }
}
