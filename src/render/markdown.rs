//! Markdown rendering for outlines.
//!
//! Headings become `#` headings, subheadings `##`, and each record's body
//! lines form one paragraph beneath them.

use crate::model::{Outline, RecordKind};

use super::RenderOptions;

/// Convert an outline to Markdown.
pub fn to_markdown(outline: &Outline, options: &RenderOptions) -> String {
    let mut output = String::new();

    for record in outline {
        let level = match record.kind {
            RecordKind::Heading => "#",
            RecordKind::Subheading => "##",
        };
        output.push_str(level);
        output.push(' ');
        output.push_str(&escape_markdown(&record.text));
        output.push_str("\n\n");

        if options.include_body && !record.body.is_empty() {
            let paragraph: Vec<String> = record.body.iter().map(|l| escape_markdown(l)).collect();
            output.push_str(&paragraph.join("\n"));
            output.push_str("\n\n");
        }
    }

    let trimmed_len = output.trim_end().len();
    output.truncate(trimmed_len);
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

/// Escape characters that would otherwise start Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            '#' | '-' | '+' | '|' if i == 0 => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OutlineRecord;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("plain text"), "plain text");
        assert_eq!(escape_markdown("*bold* and _it_"), "\\*bold\\* and \\_it\\_");
        assert_eq!(escape_markdown("# not a heading"), "\\# not a heading");
        assert_eq!(escape_markdown("a - b"), "a - b");
    }

    #[test]
    fn test_render_markdown() {
        let outline = Outline::from_records(vec![
            OutlineRecord::heading("INTRODUCTION").with_body(["first line", "second line"]),
            OutlineRecord::subheading("Background Notes"),
        ]);

        let md = to_markdown(&outline, &RenderOptions::default());
        assert_eq!(
            md,
            "# INTRODUCTION\n\nfirst line\nsecond line\n\n## Background Notes\n"
        );
    }

    #[test]
    fn test_render_markdown_headings_only() {
        let outline = Outline::from_records(vec![
            OutlineRecord::heading("INTRODUCTION").with_body(["first line"]),
        ]);
        let md = to_markdown(&outline, &RenderOptions::new().headings_only());
        assert_eq!(md, "# INTRODUCTION\n");
    }

    #[test]
    fn test_render_markdown_empty() {
        assert_eq!(to_markdown(&Outline::new(), &RenderOptions::default()), "");
    }
}
