//! Static Site Generator — projects a resume into one self-contained HTML
//! document for publishing.
//!
//! The output has a single inline `<style>` block and zero external
//! references (no stylesheets, scripts, fonts, or network fetches), so the
//! published artifact renders correctly decades after the builder app is
//! gone. Content selection reuses the Modern template's section tree, which
//! keeps the published site and the in-app preview from ever diverging in
//! content; only the fixed professional layout here differs.
//!
//! Every user-supplied string is escaped on insertion. The builder this
//! replaces interpolated raw field values into the document — that is an
//! injection defect, and it is closed here by construction.

use crate::models::resume::ResumeDocument;
use crate::render::escape::escape_html;
use crate::render::sections::{build_sections, MODERN};
use crate::render::{Section, SkillsBlock};

const SITE_STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            background: #f5f5f5;
            padding: 20px;
        }

        .container {
            max-width: 850px;
            margin: 0 auto;
            background: white;
            padding: 60px;
            box-shadow: 0 0 20px rgba(0,0,0,0.1);
        }

        header {
            border-bottom: 3px solid #2563eb;
            padding-bottom: 20px;
            margin-bottom: 30px;
        }

        h1 {
            font-size: 2.5em;
            color: #1e40af;
            margin-bottom: 10px;
        }

        .title {
            font-size: 1.3em;
            color: #6b7280;
            margin-bottom: 15px;
        }

        .contact-info {
            display: flex;
            flex-wrap: wrap;
            gap: 20px;
            font-size: 0.95em;
            color: #6b7280;
        }

        section {
            margin-bottom: 35px;
        }

        h2 {
            color: #1e40af;
            font-size: 1.5em;
            margin-bottom: 15px;
            border-bottom: 2px solid #e5e7eb;
            padding-bottom: 8px;
        }

        .summary {
            color: #4b5563;
            line-height: 1.8;
            white-space: pre-wrap;
        }

        .experience-item, .education-item {
            margin-bottom: 25px;
        }

        .experience-item h3, .education-item h3 {
            color: #1f2937;
            font-size: 1.2em;
            margin-bottom: 5px;
        }

        .experience-meta, .education-meta {
            color: #6b7280;
            font-size: 0.95em;
            margin-bottom: 10px;
        }

        .experience-description {
            color: #4b5563;
            white-space: pre-wrap;
            line-height: 1.7;
        }

        .skills-list {
            display: flex;
            flex-wrap: wrap;
            gap: 10px;
        }

        .skill-tag {
            background: #dbeafe;
            color: #1e40af;
            padding: 6px 15px;
            border-radius: 20px;
            font-size: 0.9em;
        }

        @media (max-width: 768px) {
            .container {
                padding: 30px 20px;
            }

            h1 {
                font-size: 2em;
            }

            .contact-info {
                flex-direction: column;
                gap: 10px;
            }
        }

        @media print {
            body {
                background: white;
                padding: 0;
            }

            .container {
                box-shadow: none;
                padding: 0;
            }
        }
"#;

/// Generates the complete published-site HTML document. Pure and
/// deterministic: equal input yields a byte-identical document.
pub fn generate(resume: &ResumeDocument) -> String {
    let sections = build_sections(resume, &MODERN);

    // The header section always exists and carries the display name.
    let display_name = sections
        .iter()
        .find_map(|s| match s {
            Section::Header { name, .. } => Some(name.clone()),
            _ => None,
        })
        .unwrap_or_default();

    let meta_description = {
        let title = resume.personal_info.title.trim();
        let title = if title.is_empty() {
            "Professional Resume"
        } else {
            title
        };
        format!("{} - {}", escape_html(title), escape_html(&display_name))
    };

    let mut body = String::new();
    for section in &sections {
        emit_section(&mut body, section);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{meta_description}">
    <title>{title} - Resume</title>
    <style>{SITE_STYLE}    </style>
</head>
<body>
    <div class="container">
{body}    </div>
</body>
</html>"#,
        title = escape_html(&display_name),
    )
}

fn emit_section(out: &mut String, section: &Section) {
    match section {
        Section::Header {
            name,
            title,
            contacts,
            ..
        } => {
            out.push_str("        <header>\n");
            out.push_str(&format!("            <h1>{}</h1>\n", escape_html(name)));
            if let Some(title) = title {
                out.push_str(&format!(
                    "            <div class=\"title\">{}</div>\n",
                    escape_html(title)
                ));
            }
            out.push_str("            <div class=\"contact-info\">\n");
            for contact in contacts {
                out.push_str(&format!(
                    "                <span>{}</span>\n",
                    escape_html(contact)
                ));
            }
            out.push_str("            </div>\n        </header>\n");
        }
        Section::Summary { heading, text } => {
            out.push_str("        <section>\n");
            out.push_str(&format!("            <h2>{}</h2>\n", escape_html(heading)));
            out.push_str(&format!(
                "            <div class=\"summary\">{}</div>\n",
                escape_html(text)
            ));
            out.push_str("        </section>\n");
        }
        Section::Experience { heading, entries } => {
            out.push_str("        <section>\n");
            out.push_str(&format!("            <h2>{}</h2>\n", escape_html(heading)));
            for entry in entries {
                out.push_str("            <div class=\"experience-item\">\n");
                out.push_str(&format!(
                    "                <h3>{}</h3>\n",
                    escape_html(&entry.position)
                ));
                out.push_str(&format!(
                    "                <div class=\"experience-meta\">{} &bull; {}</div>\n",
                    escape_html(&entry.company),
                    escape_html(&entry.date_range)
                ));
                if let Some(description) = &entry.description {
                    out.push_str(&format!(
                        "                <div class=\"experience-description\">{}</div>\n",
                        escape_html(description)
                    ));
                }
                out.push_str("            </div>\n");
            }
            out.push_str("        </section>\n");
        }
        Section::Education { heading, entries } => {
            out.push_str("        <section>\n");
            out.push_str(&format!("            <h2>{}</h2>\n", escape_html(heading)));
            for entry in entries {
                out.push_str("            <div class=\"education-item\">\n");
                out.push_str(&format!(
                    "                <h3>{}</h3>\n",
                    escape_html(&entry.degree)
                ));
                out.push_str(&format!(
                    "                <div class=\"education-meta\">{} &bull; {}</div>\n",
                    escape_html(&entry.institution),
                    escape_html(&entry.date_range)
                ));
                out.push_str("            </div>\n");
            }
            out.push_str("        </section>\n");
        }
        Section::Skills { heading, skills } => {
            out.push_str("        <section>\n");
            out.push_str(&format!("            <h2>{}</h2>\n", escape_html(heading)));
            match skills {
                SkillsBlock::Tags { items } => {
                    out.push_str("            <div class=\"skills-list\">\n");
                    for skill in items {
                        out.push_str(&format!(
                            "                <span class=\"skill-tag\">{}</span>\n",
                            escape_html(skill)
                        ));
                    }
                    out.push_str("            </div>\n");
                }
                SkillsBlock::Line { text } => {
                    out.push_str(&format!(
                        "            <div class=\"skills-line\">{}</div>\n",
                        escape_html(text)
                    ));
                }
            }
            out.push_str("        </section>\n");
        }
    }
}
