//! Image gallery markup.

use crate::figures::Figure;
use crate::markdown::{escape_attr, escape_text};

/// Browser-side fallback: log the failing URL and outline the image in red.
const ONERROR: &str =
    "console.error('Failed to load:', this.src); this.style.border='2px solid red';";

/// One gallery block for a section. Returns an empty string for no figures.
pub fn render_gallery(section: &str, figures: &[Figure], with_title: bool) -> String {
    if figures.is_empty() {
        return String::new();
    }

    let mut html = String::from("\n<div class=\"figure-gallery\">\n");
    if with_title {
        html.push_str(&format!(
            "<h4 class=\"gallery-title\">Figures for Section {}</h4>\n",
            escape_text(section)
        ));
    }

    for figure in figures {
        let src = escape_attr(&figure.path);
        let alt = escape_attr(&figure.name);
        let caption = escape_text(&figure.name);
        html.push_str(&format!(
            "\n<figure class=\"gallery-item\">\n    \
             <img src=\"{src}\" alt=\"{alt}\" class=\"result-figure\" loading=\"lazy\" onerror=\"{ONERROR}\">\n    \
             <figcaption>{caption}</figcaption>\n\
             </figure>\n"
        ));
    }

    html.push_str("</div>\n\n");
    html
}
