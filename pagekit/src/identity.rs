//! Page identifiers derived from the current handler and action.

use log::debug;
use pagekit_data::SelectorFormat;

use crate::action::page_action;
use crate::context::RequestContext;
use crate::naming::{format_handler_name, underscore_handler_name};

/// Computes controller, action and page identifiers for one request.
///
/// Nothing is cached; every call re-reads the context.
#[derive(Debug)]
pub struct IdentityResolver<'a, C: RequestContext + ?Sized> {
    context: &'a C,
    format: SelectorFormat,
}

impl<'a, C: RequestContext + ?Sized> IdentityResolver<'a, C> {
    pub fn new(context: &'a C, format: SelectorFormat) -> Self {
        Self { context, format }
    }

    /// Handler name flattened in the configured selector format.
    pub fn controller_id(&self) -> String {
        let id = format_handler_name(self.context.handler_type_name(), self.format);
        debug!("controller id for '{}' is '{id}'", self.context.handler_type_name());
        id
    }

    /// Handler name flattened with underscores regardless of configuration.
    pub fn controller_id_underscored(&self) -> String {
        underscore_handler_name(self.context.handler_type_name())
    }

    /// Raw action name for the hook builder, before remapping.
    pub fn raw_action(&self) -> &'a str {
        self.context.raw_action_name()
    }

    pub fn action_id(&self) -> String {
        page_action(self.context.raw_action_name()).to_string()
    }

    /// Controller and action identifiers joined by a space.
    pub fn page_id(&self) -> String {
        format!("{} {}", self.controller_id(), self.action_id())
    }
}
