use chrono::Local;
use lazy_static::lazy_static;
use regex::Regex;

use crate::toc::{render_toc, TocNode, TocTree};

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Assemble the full HTML page around a rendered table of contents
pub fn generate_toc_page(tree: &TocTree, article_url: &str, language: &str, rtl: bool) -> String {
    let title = tree.title.as_deref().unwrap_or("Table of contents");
    let body = match render_toc(&tree.root, article_url) {
        Some(list) => list.to_html(),
        None => "<p class=\"wiki-empty\">This article has no sections.</p>".to_string(),
    };

    let mut html = page_head(title, language, rtl);
    html.push_str(&format!(
        "    <h1><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h1>\n",
        html_escape::encode_double_quoted_attribute(article_url),
        html_escape::encode_text(title)
    ));
    html.push_str("    <div id=\"wiki-result\">\n");
    html.push_str(&body);
    html.push_str("\n    </div>\n");
    html.push_str(&page_foot());
    html
}

/// Assemble an error page with the failure message in a visible block
pub fn generate_error_page(message: &str, language: &str, rtl: bool) -> String {
    let mut html = page_head("Error", language, rtl);
    html.push_str("    <div id=\"wiki-result\">\n");
    html.push_str(&format!(
        "        <pre class=\"wiki-error\">{}</pre>\n",
        html_escape::encode_text(message)
    ));
    html.push_str("    </div>\n");
    html.push_str(&page_foot());
    html
}

fn page_head(title: &str, language: &str, rtl: bool) -> String {
    let direction = if rtl { "rtl" } else { "ltr" };
    format!(
        r#"<!DOCTYPE html>
<html lang="{}" dir="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 20px; }}
        h1 {{ color: #333; }}
        h1 a {{ color: inherit; text-decoration: none; }}
        ol {{ padding-inline-start: 1.5em; }}
        .wiki-error {{ background-color: #ffebee; border-left: 4px solid #f44336; padding: 10px; white-space: pre-wrap; }}
        .wiki-empty {{ color: #777; }}
        footer {{ margin-top: 30px; color: #999; font-size: 0.8em; }}
    </style>
</head>
<body>
"#,
        html_escape::encode_double_quoted_attribute(language),
        direction,
        html_escape::encode_text(title)
    )
}

fn page_foot() -> String {
    format!(
        "    <footer>Generated by wikitoc on {}</footer>\n</body>\n</html>\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Render the tree as an indented plain-text listing for the console
pub fn generate_console_listing(tree: &TocTree) -> String {
    let mut output = String::new();
    if let Some(title) = &tree.title {
        output.push_str(title);
        output.push('\n');
        output.push_str(&"=".repeat(title.chars().count()));
        output.push('\n');
    }
    if tree.root.children.is_empty() {
        output.push_str("(no sections)\n");
        return output;
    }
    for child in &tree.root.children {
        append_console_item(&mut output, child, 0);
    }
    output
}

fn append_console_item(output: &mut String, node: &TocNode, indent: usize) {
    let spaces = "  ".repeat(indent);
    let text = strip_html_tags(&node.html);
    match &node.number {
        Some(number) => output.push_str(&format!("{}{}. {} (#{})\n", spaces, number, text, node.anchor)),
        None => output.push_str(&format!("{}* {} (#{})\n", spaces, text, node.anchor)),
    }
    for child in &node.children {
        append_console_item(output, child, indent + 1);
    }
}

/// Strip HTML tags from fragment text
fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").trim().to_string()
}
