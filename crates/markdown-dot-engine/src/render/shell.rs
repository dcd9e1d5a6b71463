use super::escape::escape_attribute;

/// Static document wrapper around a rendered body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shell {
    pub title: Option<String>,
    /// Stylesheet href linked from the head.
    pub stylesheet: Option<String>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Wraps `body` in a minimal HTML document.
    pub fn wrap(&self, body: &str) -> String {
        let mut html = String::with_capacity(body.len() + 256);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        if let Some(title) = &self.title {
            html.push_str(&format!(
                "<title>{}</title>\n",
                html_escape::encode_text(title)
            ));
        }
        if let Some(href) = &self.stylesheet {
            html.push_str(&format!(
                "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\" />\n",
                escape_attribute(href)
            ));
        }
        html.push_str("</head>\n<body>\n");
        html.push_str(body);
        if !body.is_empty() && !body.ends_with('\n') {
            html.push('\n');
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_shell() {
        assert_eq!(
            Shell::new().wrap("<p>x</p>\n"),
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n<p>x</p>\n</body>\n</html>\n"
        );
    }

    #[test]
    fn title_and_stylesheet_go_in_head() {
        let html = Shell::new()
            .with_title("Notes & <Ideas>")
            .with_stylesheet("style.css")
            .wrap("");

        assert!(html.contains("<title>Notes &amp; &lt;Ideas&gt;</title>\n"));
        assert!(html.contains(
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"style.css\" />\n"
        ));
        assert!(html.ends_with("<body>\n</body>\n</html>\n"));
    }

    #[test]
    fn body_without_trailing_newline_is_closed_cleanly() {
        let html = Shell::new().wrap("text");
        assert!(html.contains("<body>\ntext\n</body>"));
    }
}
