// src/ports/site.rs
use crate::application::{CardRepository, DetailPage, Navigator, Route};
use crate::application::router::NOT_FOUND_FILE;
use crate::ports::HtmlPresenter;
use std::path::PathBuf;
use tracing::debug;

/// One rendered file of a static site, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    pub path: PathBuf,
    pub html: String,
}

/// Render the gallery, every card and the not-found page.
///
/// The gallery page is filtered by `query`; card pages are always complete.
pub fn render_static_site<R: CardRepository + ?Sized>(
    repository: &R,
    presenter: &HtmlPresenter,
    query: &str,
) -> Vec<SitePage> {
    let mut navigator = Navigator::new(repository);
    navigator.set_query(query);

    let mut pages = vec![SitePage {
        path: PathBuf::from(Route::Root.file_path()),
        html: presenter.render_screen(&navigator.render()),
    }];

    for card in repository.all_cards() {
        let route = navigator.open_card(&card.id);
        pages.push(SitePage {
            path: PathBuf::from(route.file_path()),
            html: presenter.render_screen(&navigator.render()),
        });
    }

    pages.push(SitePage {
        path: PathBuf::from(NOT_FOUND_FILE),
        html: presenter.render_detail(&DetailPage::not_found("")),
    });

    debug!(pages = pages.len(), "Rendered static site");
    pages
}
