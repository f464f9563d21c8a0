//! Template renderer.

use super::{ReleaseNames, TemplateError};
use crate::config::ReleaseSettings;
use crate::repository::RepositoryRef;
use handlebars::{no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (branch names and markdown must come out verbatim)
/// - Strict mode (catches misspelled variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));
    hbs
}

/// Usage: `{{#if (eq name "woocommerce")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Renders the release text formats from [`ReleaseSettings`].
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders branch name, commit title and PR text for one run.
    ///
    /// # Errors
    ///
    /// Returns an error if a format fails to render or a single-line value
    /// (branch name, commit title, PR title) renders blank.
    pub fn render_names(
        &self,
        settings: &ReleaseSettings,
        repository: &RepositoryRef,
    ) -> Result<ReleaseNames, TemplateError> {
        let data = json!({
            "version": settings.next_version,
            "base": settings.base_branch,
            "owner": repository.owner(),
            "name": repository.name(),
        });

        Ok(ReleaseNames {
            branch: self.render_line("branch-name-format", &settings.branch_name_format, &data)?,
            base: settings.base_branch.clone(),
            commit_title: self.render_line(
                "commit-title-format",
                &settings.commit_title_format,
                &data,
            )?,
            pr_title: self.render_line("pr-title-format", &settings.pr_title_format, &data)?,
            pr_body: self.render("pr-body-format", &settings.pr_body_format, &data)?,
        })
    }

    fn render_line(
        &self,
        field: &'static str,
        template: &str,
        data: &Value,
    ) -> Result<String, TemplateError> {
        let rendered = self.render(field, template, data)?;
        let rendered = rendered.trim();
        if rendered.is_empty() {
            return Err(TemplateError::Empty { field });
        }
        Ok(rendered.to_string())
    }

    fn render(
        &self,
        field: &'static str,
        template: &str,
        data: &Value,
    ) -> Result<String, TemplateError> {
        self.handlebars
            .render_template(template, data)
            .map_err(|source| TemplateError::RenderError { field, source })
    }
}
