use crate::render::{HtmlRenderer, Shell};
use crate::tree::Dot;

/// Turns a processed tree into one output format.
pub trait Converter {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// File extension of the output, without the dot.
    fn extension(&self) -> &str;

    /// Renders `dot`; `full` asks for a complete document rather than a
    /// fragment.
    fn convert(&self, dot: &Dot, full: bool) -> String;
}

/// HTML output through [`HtmlRenderer`].
#[derive(Debug, Clone, Default)]
pub struct HtmlConverter {
    renderer: HtmlRenderer,
    shell: Shell,
}

impl HtmlConverter {
    pub fn new(shell: Shell) -> Self {
        Self {
            renderer: HtmlRenderer::new(),
            shell,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }
}

impl Converter for HtmlConverter {
    fn name(&self) -> &str {
        "html"
    }

    fn extension(&self) -> &str {
        "html"
    }

    fn convert(&self, dot: &Dot, full: bool) -> String {
        if full {
            self.renderer.render_document(dot, &self.shell)
        } else {
            self.renderer.render_fragment(dot)
        }
    }
}
