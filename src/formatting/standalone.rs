// src/formatting/standalone.rs
//! Wraps rendered HTML in a complete document using a Handlebars template.

use super::html::to_html;
use crate::error::AppError;
use crate::model::PageDocument;
use handlebars::Handlebars;
use serde_json::json;

const STANDALONE_TEMPLATE_NAME: &str = "standalone";

const STANDALONE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
</head>
<body>
<article>
<h1>{{title}}</h1>
{{{content}}}
</article>
</body>
</html>
"#;

/// Renders a page as a full HTML5 document.
///
/// The title goes through Handlebars' escaping; the body is the output of
/// [`to_html`] inserted as-is.
pub fn render_standalone_html(document: &PageDocument) -> Result<String, AppError> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string(STANDALONE_TEMPLATE_NAME, STANDALONE_TEMPLATE)
        .map_err(|e| AppError::TemplateRenderError {
            name: STANDALONE_TEMPLATE_NAME.to_string(),
            message: e.to_string(),
        })?;

    let data = json!({
        "title": document.title,
        "content": to_html(&document.body),
    });

    handlebars
        .render(STANDALONE_TEMPLATE_NAME, &data)
        .map_err(|e| AppError::TemplateRenderError {
            name: STANDALONE_TEMPLATE_NAME.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentBlock, ContentBody, PageMetadata, RichText};

    #[test]
    fn test_title_escaped_and_body_inserted_raw() {
        let document = PageDocument {
            id: "p1".to_string(),
            title: "Q&A <draft>".to_string(),
            metadata: PageMetadata::new(),
            body: ContentBody::new(vec![ContentBlock::Paragraph(vec![
                RichText::plain("hi").italic()
            ])]),
        };

        let html = render_standalone_html(&document).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Q&amp;A &lt;draft&gt;</title>"));
        assert!(html.contains("<h1>Q&amp;A &lt;draft&gt;</h1>"));
        assert!(html.contains("<p><em>hi</em></p>"));
    }
}
