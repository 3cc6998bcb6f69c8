use crate::models::Document;

/// Render a document for output. Formatters are pure: field values pass
/// through verbatim, dates included.
pub trait RssFormatter {
    fn format(&self, document: &Document) -> String;
}

/// The default stdout rendition.
pub struct TextFormatter;

/// The same shape the cache stores, 2-space indented.
pub struct JsonFormatter;

/// A minimal html page, written to the `--to-html` output files.
pub struct HtmlFormatter;

impl RssFormatter for TextFormatter {
    fn format(&self, document: &Document) -> String {
        let mut out = String::new();
        out.push_str(&format!("Feed: {}\n", document.title));
        out.push_str(&format!("Last update: {}\n", document.updated));
        for item in &document.items {
            out.push('\n');
            out.push_str(&format!("Title: {}\n", item.title));
            out.push_str(&format!("Published: {}\n", item.published_date));
            out.push_str(&format!("Link: {}", item.link));
        }
        out.push('\n');
        out
    }
}

impl RssFormatter for JsonFormatter {
    fn format(&self, document: &Document) -> String {
        // A document is plain strings all the way down; serialization can't
        // actually fail.
        serde_json::to_string_pretty(document).unwrap()
    }
}

impl RssFormatter for HtmlFormatter {
    fn format(&self, document: &Document) -> String {
        let mut out = String::new();
        out.push_str("<html>\n");
        out.push_str("  <head>\n");
        out.push_str(&format!("    <title>{}</title>\n", document.title));
        out.push_str(&format!("    <h1>{}</h1>\n", document.title));
        out.push_str("  </head>\n");
        out.push_str("  <body>\n");
        out.push_str(&format!("    <p>Last update: {}</p>\n", document.updated));
        out.push_str("    <h2>Feeds</h2>\n");
        for item in &document.items {
            out.push_str("    <p>");
            out.push_str(&format!("<a href=\"{}\">{}</a>", item.link, item.title));
            out.push_str(&format!(" (published {})", item.published_date));
            if let Some(image_link) = &item.image_link {
                out.push_str("<br/>");
                out.push_str(&format!(
                    "<img src=\"{}\" width=\"130\" height=\"86\"/>",
                    image_link
                ));
            }
            out.push_str("</p>\n");
        }
        out.push_str("  </body>\n");
        out.push_str("</html>\n");
        out
    }
}
