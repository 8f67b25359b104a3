//! Template entities and the render context.
//!
//! A [`TemplateFile`] is a stateless unit of generated content: a root-relative
//! path plus a body that is a pure function of the [`ProjectConfig`]. Rendering
//! is textual substitution, not a template language:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `{{PROJECT_NAME}}` | variable substitution |
//! | `{{#shadcn}}…{{/shadcn}}` | section kept only when the section is enabled |
//!
//! The only sections ever enabled are the style library identifiers, so the
//! set of conditionals is fixed and small.
//!
//! ## Totality
//!
//! Rendering never fails. Unknown variables and unterminated sections are
//! copied through verbatim.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::domain::entities::{
    common::RelativePath, manifest::to_stable_string, project_config::ProjectConfig,
};

/// Context for template rendering.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `PROJECT_NAME` | "demo" |
/// | `STYLE_LIBRARY` | "mantine" |
/// | `STYLE_LIBRARY_NAME` | "Mantine" |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
    sections: BTreeSet<String>,
}

impl RenderContext {
    /// Build the context for one project configuration.
    pub fn new(config: &ProjectConfig) -> Self {
        let style = config.style();
        let mut variables = BTreeMap::new();
        variables.insert("PROJECT_NAME".to_string(), config.name().to_string());
        variables.insert("STYLE_LIBRARY".to_string(), style.as_str().to_string());
        variables.insert(
            "STYLE_LIBRARY_NAME".to_string(),
            style.display_name().to_string(),
        );

        let mut sections = BTreeSet::new();
        sections.insert(style.as_str().to_string());

        Self {
            variables,
            sections,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn section_enabled(&self, name: &str) -> bool {
        self.sections.contains(name)
    }

    /// Render a template string.
    ///
    /// Single left-to-right scan: substituted values are never rescanned, so a
    /// project name containing braces cannot inject further placeholders.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(close) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };
            let tag = &after_open[..close];
            let after_tag = &after_open[close + 2..];

            if let Some(section) = tag.strip_prefix('#') {
                let end_tag = format!("{{{{/{section}}}}}");
                match after_tag.find(&end_tag) {
                    Some(end) => {
                        if self.section_enabled(section) {
                            out.push_str(&self.render(&after_tag[..end]));
                        }
                        rest = &after_tag[end + end_tag.len()..];
                    }
                    None => {
                        // Unterminated section: emit the opening tag as text.
                        out.push_str(&rest[start..start + 2 + close + 2]);
                        rest = after_tag;
                    }
                }
                continue;
            }

            match self.variables.get(tag) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + close + 2]),
            }
            rest = after_tag;
        }

        out.push_str(rest);
        out
    }
}

/// How a template's content is produced.
#[derive(Debug, Clone, Copy)]
pub enum TemplateBody {
    /// Copied verbatim.
    Static(&'static str),
    /// Passed through [`RenderContext::render`].
    Parameterized(&'static str),
    /// A JSON document built from the configuration, written with the stable
    /// manifest serializer.
    Json(fn(&ProjectConfig) -> Value),
}

/// One generated file.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    path: RelativePath,
    body: TemplateBody,
}

impl TemplateFile {
    pub fn new(path: impl Into<RelativePath>, body: TemplateBody) -> Self {
        Self {
            path: path.into(),
            body,
        }
    }

    pub fn verbatim(path: impl Into<RelativePath>, text: &'static str) -> Self {
        Self::new(path, TemplateBody::Static(text))
    }

    pub fn parameterized(path: impl Into<RelativePath>, text: &'static str) -> Self {
        Self::new(path, TemplateBody::Parameterized(text))
    }

    pub fn json(path: impl Into<RelativePath>, build: fn(&ProjectConfig) -> Value) -> Self {
        Self::new(path, TemplateBody::Json(build))
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn body(&self) -> &TemplateBody {
        &self.body
    }

    /// Render the full file content in memory.
    pub fn render(&self, config: &ProjectConfig, ctx: &RenderContext) -> String {
        match self.body {
            TemplateBody::Static(text) => text.to_string(),
            TemplateBody::Parameterized(text) => ctx.render(text),
            TemplateBody::Json(build) => to_stable_string(&build(config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ProjectName, StyleLibrary};
    use serde_json::json;

    fn ctx(style: StyleLibrary) -> (ProjectConfig, RenderContext) {
        let config = ProjectConfig::new(ProjectName::new("demo").unwrap(), style);
        let ctx = RenderContext::new(&config);
        (config, ctx)
    }

    #[test]
    fn standard_variables() {
        let (_, ctx) = ctx(StyleLibrary::Mantine);
        assert_eq!(ctx.get("PROJECT_NAME"), Some("demo"));
        assert_eq!(ctx.get("STYLE_LIBRARY"), Some("mantine"));
        assert_eq!(ctx.get("STYLE_LIBRARY_NAME"), Some("Mantine"));
    }

    #[test]
    fn substitutes_variables() {
        let (_, ctx) = ctx(StyleLibrary::Shadcn);
        assert_eq!(
            ctx.render("# {{PROJECT_NAME}} uses {{STYLE_LIBRARY_NAME}}"),
            "# demo uses shadcn/ui"
        );
    }

    #[test]
    fn unknown_variable_is_left_verbatim() {
        let (_, ctx) = ctx(StyleLibrary::Shadcn);
        assert_eq!(ctx.render("a {{NOPE}} b"), "a {{NOPE}} b");
    }

    #[test]
    fn sections_follow_style_library() {
        let tpl = "start\n{{#shadcn}}shadcn block\n{{/shadcn}}{{#mantine}}mantine block\n{{/mantine}}end";
        let (_, shadcn) = ctx(StyleLibrary::Shadcn);
        let (_, mantine) = ctx(StyleLibrary::Mantine);
        assert_eq!(shadcn.render(tpl), "start\nshadcn block\nend");
        assert_eq!(mantine.render(tpl), "start\nmantine block\nend");
    }

    #[test]
    fn sections_render_variables_inside() {
        let (_, ctx) = ctx(StyleLibrary::Mantine);
        assert_eq!(ctx.render("{{#mantine}}{{PROJECT_NAME}}{{/mantine}}"), "demo");
    }

    #[test]
    fn unterminated_constructs_pass_through() {
        let (_, ctx) = ctx(StyleLibrary::Mantine);
        assert_eq!(ctx.render("x {{#mantine}} y"), "x {{#mantine}} y");
        assert_eq!(ctx.render("x {{PROJECT_NAME"), "x {{PROJECT_NAME");
    }

    #[test]
    fn template_literals_with_single_braces_survive() {
        let (_, ctx) = ctx(StyleLibrary::Mantine);
        let src = "fetch(`${this.baseURL}${endpoint}`, { ...options })";
        assert_eq!(ctx.render(src), src);
    }

    #[test]
    fn rendering_is_deterministic() {
        let (config, ctx) = ctx(StyleLibrary::Shadcn);
        let file = TemplateFile::json("package.json", |c| json!({ "name": c.name().as_str() }));
        assert_eq!(file.render(&config, &ctx), file.render(&config, &ctx));
        assert!(file.render(&config, &ctx).contains("\"name\": \"demo\""));
    }
}
