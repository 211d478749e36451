#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** pagekit **
//! Renders the page-level helper output for one handler/action pair, using the
//! same settings and locale files an application would load at startup.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::info;

use pagekit::config::{current_configuration, init_from_file};
use pagekit::data_paths::data_path;
use pagekit::i18n::load_locale_dir;
use pagekit::{FlashMessages, NotificationOptions, PageView, StaticRequest, TitleOptions};

#[derive(Parser, Debug)]
#[command(name = "pagekit", version, about = "Preview page identifiers, title, init hooks and flash banners")]
struct Cli {
    /// Handler type name, e.g. `Super::Awesome::AnimeController`.
    #[arg(long)]
    handler: String,
    /// Action name as routed, e.g. `update`.
    #[arg(long)]
    action: String,
    /// Settings file; defaults to `pagekit.toml` in the data directory.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Directory of TOML locale files; defaults to `locales/` in the data directory.
    #[arg(long)]
    locale_dir: Option<PathBuf>,
    /// Flash message as `category=text`; may be repeated.
    #[arg(long = "flash", value_name = "CATEGORY=TEXT")]
    flash: Vec<String>,
    /// Extra init hook segment, as a template would set with `content_for`.
    #[arg(long)]
    js_init_method: Option<String>,
    /// Title interpolation as `name=value`; may be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,
}

fn split_pair(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{raw}'"))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings_path = cli.settings.clone().unwrap_or_else(|| data_path("pagekit.toml"));
    init_from_file(&settings_path).context("while loading settings")?;
    let config = current_configuration();
    info!("selector format {:?}, namespace '{}'", config.selector_format, config.namespace);

    let locale_dir = cli.locale_dir.clone().unwrap_or_else(|| data_path("locales"));
    let catalog = load_locale_dir(&locale_dir, &config.locale).context("while loading translations")?;

    let mut flash = FlashMessages::new();
    for raw in &cli.flash {
        let (category, text) = split_pair(raw)?;
        flash.insert(category, text);
    }

    let mut title_options = TitleOptions::new();
    for raw in &cli.vars {
        let (name, value) = split_pair(raw)?;
        title_options = title_options.interpolate(name, value);
    }

    let request = StaticRequest::new(cli.handler, cli.action);
    let mut view = PageView::new(&request, &catalog, config);
    if let Some(token) = &cli.js_init_method {
        view.content_for(pagekit::view::JS_INIT_METHOD_SLOT, token);
    }

    println!("page:  {}", view.page_identifier());
    println!("title: {}", view.page_title(&title_options));
    println!("{}", view.javascript_initialization(None));
    let banners = view.render_notifications(&flash, &NotificationOptions::default());
    if !banners.is_empty() {
        println!("{banners}");
    }

    Ok(())
}
