//! Handlebars rendering over a template pack.
//!
//! Output is Markdown, not HTML, so HTML escaping is disabled. Strict mode
//! stays off: a template referencing a missing key renders an empty string
//! rather than failing, which is the engine's degrade-to-placeholder
//! discipline at the template layer.
use handlebars::{no_escape, Handlebars};
use serde_json::Value;

use crate::templates::TemplatePack;

pub struct DocRenderer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> DocRenderer<'a> {
    /// Compile a renderer from a template pack.
    pub fn new(pack: &TemplatePack) -> Result<Self, String> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        for (name, template) in &pack.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| format!("template '{name}' failed to compile: {e}"))?;
        }

        Ok(DocRenderer { handlebars })
    }

    /// Render a named template with data.
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, String> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| format!("render error: {e}"))
    }
}
