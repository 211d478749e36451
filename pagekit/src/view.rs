//! Per-render helper facade used by templates.
//!
//! A [`PageView`] lives for exactly one render. It owns the latched page title
//! and the named `content_for` slots, and borrows the request context and the
//! translation store from the host framework.

use std::collections::HashMap;

use crate::config::Configuration;
use crate::context::RequestContext;
use crate::flash::FlashMessages;
use crate::hooks::{build_hooks, javascript_tag};
use crate::html::SafeHtml;
use crate::i18n::TranslationSource;
use crate::identity::IdentityResolver;
use crate::notify::{NotificationOptions, render_notifications};
use crate::title::{TitleCache, TitleOptions, resolve_title};

/// `content_for` slot a template fills to request an extra init hook.
pub const JS_INIT_METHOD_SLOT: &str = "js_init_method";

pub struct PageView<'a, C: RequestContext + ?Sized, T: TranslationSource + ?Sized> {
    context: &'a C,
    translations: &'a T,
    config: Configuration,
    title: TitleCache,
    content: HashMap<String, String>,
}

impl<'a, C: RequestContext + ?Sized, T: TranslationSource + ?Sized> PageView<'a, C, T> {
    pub fn new(context: &'a C, translations: &'a T, config: Configuration) -> Self {
        Self {
            context,
            translations,
            config,
            title: TitleCache::new(),
            content: HashMap::new(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    fn identity(&self) -> IdentityResolver<'a, C> {
        IdentityResolver::new(self.context, self.config.selector_format)
    }

    /// e.g. `super_awesome_anime` or `super-awesome-anime`.
    pub fn page_controller_identifier(&self) -> String {
        self.identity().controller_id()
    }

    pub fn page_action_identifier(&self) -> String {
        self.identity().action_id()
    }

    /// Controller and action identifiers, space separated, for a `<body class>`.
    pub fn page_identifier(&self) -> String {
        self.identity().page_id()
    }

    /// The page title; the first call of the render decides it.
    pub fn page_title(&self, options: &TitleOptions) -> String {
        resolve_title(
            &self.title,
            &self.page_controller_identifier(),
            &self.page_action_identifier(),
            self.translations,
            options,
        )
    }

    pub fn page_title_default(&self) -> String {
        self.page_title(&TitleOptions::default())
    }

    /// Append `value` to a named content slot.
    pub fn content_for(&mut self, slot: &str, value: &str) {
        self.content.entry(slot.to_string()).or_default().push_str(value);
    }

    pub fn content(&self, slot: &str) -> Option<&str> {
        self.content.get(slot).map(String::as_str)
    }

    /// Init statements for the configured namespace.
    ///
    /// Without an explicit `override_token` the `js_init_method` slot is used.
    pub fn client_init_script(&self, override_token: Option<&str>) -> String {
        let identity = self.identity();
        let token = override_token.or_else(|| self.content(JS_INIT_METHOD_SLOT));
        build_hooks(
            &self.config.namespace,
            &identity.controller_id_underscored(),
            identity.raw_action(),
            token,
        )
    }

    /// [`Self::client_init_script`] wrapped in a `<script>` element.
    pub fn javascript_initialization(&self, override_token: Option<&str>) -> SafeHtml {
        javascript_tag(&self.client_init_script(override_token))
    }

    pub fn render_notifications(&self, messages: &FlashMessages, options: &NotificationOptions) -> SafeHtml {
        render_notifications(messages, options)
    }
}
