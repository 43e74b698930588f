// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use application::{filter_cards, CardRepository, Route};
use infrastructure::{Config, ContentRenderer, JsonCardRepository};
use ports::{render_static_site, HtmlPresenter};
use tracing::{debug, info, warn};

use crate::cli::args::{Args, Command};
use crate::constants::LIST_SUMMARY_CHARS;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting cardgallery with arguments");

    let config = effective_config(&args)?;
    debug!(?config, "Effective configuration");

    match args.command {
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Command::List { search } => {
            let repository = JsonCardRepository::load(&config.data.cards)?;
            list_cards(&repository, search.as_deref().unwrap_or_default(), &config)
        }
        Command::View { card_id, json } => {
            let repository = JsonCardRepository::load(&config.data.cards)?;
            if json {
                let card = repository.get_card(&card_id)?;
                println!("{}", serde_json::to_string_pretty(card)?);
                return Ok(());
            }
            open_route(&repository, &config, "", Route::Detail(card_id))
        }
        Command::Gallery { query } => {
            let repository = JsonCardRepository::load(&config.data.cards)?;
            open_route(&repository, &config, query.as_deref().unwrap_or_default(), Route::Root)
        }
        Command::Export { dir } => {
            let repository = JsonCardRepository::load(&config.data.cards)?;
            export_site(&repository, &config, &dir)
        }
        Command::Serve { bind } => {
            let repository = JsonCardRepository::load(&config.data.cards)?;
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            serve_gallery(repository, &config, &bind)
        }
    }
}

/// Config file values with command line overrides applied.
pub fn effective_config(args: &Args) -> Result<Config> {
    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(cards) = &args.cards {
        config.data.cards = cards.clone();
    }
    if let Some(assets) = &args.assets {
        config.data.assets = assets.clone();
    }
    if args.no_decor {
        config.presentation.decor = false;
    }
    Ok(config)
}

fn list_cards<R: CardRepository + ?Sized>(repository: &R, search: &str, config: &Config) -> Result<()> {
    let cards = filter_cards(repository.all_cards(), search);
    info!(query = search, matches = cards.len(), "Listing cards");

    if cards.is_empty() {
        eprintln!("{}", config.site.no_results);
        return Ok(());
    }
    for card in cards {
        println!(
            "{}\t{}\t{}",
            card.id,
            card.name,
            util::text::summary(&card.meaning, LIST_SUMMARY_CHARS)
        );
    }
    Ok(())
}

fn static_presenter(config: &Config) -> HtmlPresenter {
    let assets = std::path::absolute(&config.data.assets).unwrap_or_else(|_| config.data.assets.clone());
    HtmlPresenter::with_site(config.site.clone())
        .with_decor(config.presentation.decor)
        .with_static_files(assets)
}

fn open_route(repository: &JsonCardRepository, config: &Config, query: &str, route: Route) -> Result<()> {
    let presenter = static_presenter(config);
    let pages = render_static_site(repository, &presenter, query);

    let mut renderer = ContentRenderer::new();
    let root = renderer.create_temp_site(&pages)?;

    let page = match &route {
        Route::Detail(id) if repository.get_card(id).is_err() => {
            warn!(card_id = %id, "Card not found, opening not-found page");
            PathBuf::from(application::router::NOT_FOUND_FILE)
        }
        _ => PathBuf::from(route.file_path()),
    };

    info!(%route, "Opening in browser");
    renderer.open_in_browser(&root.join(page))
}

fn export_site(repository: &JsonCardRepository, config: &Config, dir: &Path) -> Result<()> {
    let presenter = static_presenter(config);
    let pages = render_static_site(repository, &presenter, "");
    ContentRenderer::write_site(dir, &pages)?;
    println!("Exported {} pages to {}", pages.len(), dir.display());
    Ok(())
}

fn serve_gallery(repository: JsonCardRepository, config: &Config, bind: &str) -> Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address {bind}"))?;

    let presenter = HtmlPresenter::with_site(config.site.clone()).with_decor(config.presentation.decor);
    let assets = config.data.assets.is_dir().then(|| config.data.assets.clone());
    if assets.is_none() {
        warn!(dir = %config.data.assets.display(), "Assets directory not found, card images will not be served");
    }

    let state = infrastructure::AppState::new(repository, presenter);
    let router = infrastructure::build_router(state, assets);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(infrastructure::serve(addr, router))
}
