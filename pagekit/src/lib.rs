#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! View helpers for server-rendered pages: convention-based page identifiers,
//! memoized page titles, client init hooks and sanitized flash banners.

pub const PAGEKIT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod action;
pub mod config;
pub mod context;
pub mod data_paths;
pub mod flash;
pub mod hooks;
pub mod html;
pub mod i18n;
pub mod identity;
pub mod naming;
pub mod notify;
pub mod sanitize;
pub mod title;
pub mod view;

// Re-exports for convenience
pub use config::{Configuration, configure, current_configuration};
pub use context::{RequestContext, StaticRequest};
pub use flash::FlashMessages;
pub use html::SafeHtml;
pub use i18n::{Catalog, Interpolations, Lookup, TranslationError, TranslationSource};
pub use notify::NotificationOptions;
pub use pagekit_data::SelectorFormat;
pub use title::{TitleCache, TitleOptions};
pub use view::PageView;
