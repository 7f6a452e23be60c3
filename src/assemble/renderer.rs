//! Pre-compiled CSS block renderer.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use crate::error::StyleError;

/// A renderer holding every block template of a rule table.
///
/// Templates are compiled once, when the table is loaded, and rendered on
/// every generation pass. Names carry no file extension, so no auto-escaping
/// is applied to CSS output.
pub struct Renderer {
    env: Environment<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        register_filters(&mut env);
        Self { env }
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; a syntax error is returned as
    /// [`StyleError::Template`].
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), StyleError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
            .map_err(|source| StyleError::Template {
                name: name.to_string(),
                source,
            })
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}
