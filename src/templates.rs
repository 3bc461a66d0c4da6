// src/templates.rs
use axum::response::Html;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;

use crate::error::Result;

pub const INDEX: &str = "polls/index";
pub const DETAIL: &str = "polls/detail";
pub const RESULTS: &str = "polls/results";

const SOURCES: &[(&str, &str)] = &[
    (INDEX, include_str!("../templates/polls/index.hbs")),
    (DETAIL, include_str!("../templates/polls/detail.hbs")),
    (RESULTS, include_str!("../templates/polls/results.hbs")),
];

handlebars_helper!(pluralize: |count: i64| if count == 1 { "" } else { "s" });

/// The compiled page templates, built once at startup.
#[derive(Debug)]
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_helper("pluralize", Box::new(pluralize));
        for (name, source) in SOURCES {
            registry
                .register_template_string(name, source)
                .map_err(Box::new)?;
        }
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<Html<String>> {
        Ok(Html(self.registry.render(name, context)?))
    }
}
