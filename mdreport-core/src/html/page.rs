//! Page shell: head, table of contents, footer and script around the body.

use super::options::PageOptions;
use super::transformer::Body;
use crate::markdown::{convert_inline, escape_attr, escape_text, plain_text};

const REPORT_CSS: &str = include_str!("../../css/report.css");
const REPORT_JS: &str = include_str!("../../js/report.js");

/// The stylesheet embedded in every generated page.
pub fn default_css() -> &'static str {
    REPORT_CSS
}

/// Wrap a rendered body into a complete HTML5 document.
pub fn wrap_in_page(body: &Body, options: &PageOptions) -> String {
    let lang = escape_attr(&options.lang);
    let title = escape_text(&plain_text(&body.title));
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    let mut links = String::new();
    if let Some(href) = &options.stylesheet {
        links.push_str(&format!(
            "    <link rel=\"stylesheet\" href=\"{}\">\n",
            escape_attr(href)
        ));
    }
    if let Some(href) = &options.font_url {
        links.push_str(&format!(
            "    <link href=\"{}\" rel=\"stylesheet\">\n",
            escape_attr(href)
        ));
    }

    let toc = table_of_contents(body, &options.toc_title);
    let footer = footer(body, options);
    let body_html = &body.html;

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="mdreport">
    <title>{title}</title>
{links}    <style>
{REPORT_CSS}
{custom_css}
    </style>
</head>
<body>

<div class="container">
{toc}
    <main class="content">
{body_html}
    </main>
</div>

{footer}
<script>
{REPORT_JS}
</script>

</body>
</html>
"#
    )
}

fn table_of_contents(body: &Body, toc_title: &str) -> String {
    let mut toc = String::from("    <nav id=\"toc\" class=\"sticky-toc\">\n");
    toc.push_str(&format!("        <h3>{}</h3>\n", escape_text(toc_title)));
    toc.push_str("        <ul>\n");
    for entry in &body.outline {
        toc.push_str(&format!(
            "            <li><a href=\"#{}\">{}</a></li>\n",
            escape_attr(&entry.slug),
            convert_inline(&entry.text)
        ));
    }
    toc.push_str("        </ul>\n    </nav>\n");
    toc
}

fn footer(body: &Body, options: &PageOptions) -> String {
    let mut footer = String::from("<footer class=\"main-footer\">\n");
    for line in &options.footer {
        footer.push_str(&format!("    <p>{}</p>\n", convert_inline(line)));
    }
    let count = body.figure_count();
    let noun = if count == 1 { "figure" } else { "figures" };
    footer.push_str(&format!(
        "    <p><strong>{count} {noun} included</strong></p>\n"
    ));
    footer.push_str("</footer>\n");
    footer
}
