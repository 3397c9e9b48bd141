use crossterm::style::Stylize;
use replymark_engine::{Block, Span, format_inline};

/// Maps parsed blocks to displayable lines, one terminal row per entry.
///
/// Fenced code is reproduced verbatim between its delimiter lines; every
/// other text-bearing block goes through the inline formatter. Empty text
/// spans left between adjacent inline matches are dropped here.
pub fn render_blocks(blocks: &[Block], color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let body = render_spans(&format_inline(text), color);
                lines.push(style_heading(&body, *level, color));
            }
            Block::ListItem { index, text, .. } => {
                let marker = match index {
                    Some(n) => format!("{n}. "),
                    None => "• ".to_string(),
                };
                let body = render_spans(&format_inline(text), color);
                lines.push(format!("{marker}{body}"));
            }
            Block::CodeBlock {
                language,
                lines: code,
            } => {
                lines.push(style_fence(&format!("```{language}"), color));
                for line in code {
                    lines.push(style_code(line, color));
                }
                lines.push(style_fence("```", color));
            }
            Block::Paragraph { text } => {
                lines.push(render_spans(&format_inline(text), color));
            }
            Block::Spacer => lines.push(String::new()),
        }
    }

    lines
}

fn render_spans(spans: &[Span], color: bool) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(value) => {
                if !value.is_empty() {
                    out.push_str(value);
                }
            }
            Span::InlineCode(value) => {
                if color {
                    out.push_str(&value.as_str().dark_cyan().to_string());
                } else {
                    out.push_str(value);
                }
            }
            Span::Bold(value) => {
                if color {
                    out.push_str(&value.as_str().bold().to_string());
                } else {
                    out.push_str(value);
                }
            }
        }
    }
    out
}

fn style_heading(text: &str, level: u8, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match level {
        1 => text.bold().underlined().to_string(),
        _ => text.bold().to_string(),
    }
}

fn style_fence(text: &str, color: bool) -> String {
    if color {
        text.dark_grey().to_string()
    } else {
        text.to_string()
    }
}

fn style_code(line: &str, color: bool) -> String {
    if color {
        line.dark_cyan().to_string()
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use replymark_engine::parse_blocks;

    #[test]
    fn renders_plain_reply_without_styling() {
        let blocks = parse_blocks("# Title\n\n- item\n\n```rs\nlet x = 1;\n```");
        assert_eq!(
            render_blocks(&blocks, false),
            vec![
                "Title".to_string(),
                String::new(),
                "• item".to_string(),
                String::new(),
                "```rs".to_string(),
                "let x = 1;".to_string(),
                "```".to_string(),
            ]
        );
    }

    #[test]
    fn numbered_items_keep_their_literal_label() {
        let blocks = parse_blocks("7. seventh\n7. also seventh");
        assert_eq!(
            render_blocks(&blocks, false),
            vec!["7. seventh".to_string(), "7. also seventh".to_string()]
        );
    }

    #[test]
    fn inline_markup_is_stripped_in_plain_output() {
        let blocks = parse_blocks("Use `f()` when **needed**");
        assert_eq!(
            render_blocks(&blocks, false),
            vec!["Use f() when needed".to_string()]
        );
    }

    #[test]
    fn code_block_markup_is_not_stripped() {
        let blocks = parse_blocks("```\nlet s = \"**bold**\";\n```");
        assert_eq!(
            render_blocks(&blocks, false),
            vec![
                "```".to_string(),
                "let s = \"**bold**\";".to_string(),
                "```".to_string(),
            ]
        );
    }

    #[test]
    fn colored_heading_carries_ansi_styling() {
        let blocks = parse_blocks("# Title");
        let lines = render_blocks(&blocks, true);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Title"));
        assert!(lines[0].contains('\u{1b}'));
    }
}
