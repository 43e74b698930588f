// src/application/router.rs
use crate::application::catalog::CardRepository;
use crate::application::detail::{DetailPage, DetailView};
use crate::application::gallery::{GalleryPage, GalleryView};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;
use tracing::debug;

/// Location of the static page rendered for unknown card ids.
pub const NOT_FOUND_FILE: &str = "404.html";

const CARD_PREFIX: &str = "/card/";

/// Bytes escaped when an id becomes a path segment or a file name.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'\'')
    .add(b'*')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Escapes the `%` of already encoded file names inside links.
const FILE_HREF: &AsciiSet = &CONTROLS.add(b' ').add(b'%');

fn encode_id(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// The two logical locations of the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Detail(String),
}

impl Route {
    /// Parse a location path such as `/` or `/card/7`.
    ///
    /// Query strings and fragments are ignored, a single trailing slash is
    /// tolerated and the id segment is percent-decoded.
    pub fn parse(location: &str) -> Option<Route> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        if path.is_empty() || path == "/" {
            return Some(Route::Root);
        }

        let id = path.strip_prefix(CARD_PREFIX)?;
        let id = id.strip_suffix('/').unwrap_or(id);
        if id.is_empty() || id.contains('/') {
            return None;
        }
        let id = percent_decode_str(id).decode_utf8().ok()?;
        Some(Route::Detail(id.into_owned()))
    }

    /// Server location.
    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Detail(id) => format!("{CARD_PREFIX}{}", encode_id(id)),
        }
    }

    /// File written for this route inside an exported static site.
    pub fn file_path(&self) -> String {
        match self {
            Route::Root => "index.html".to_string(),
            Route::Detail(id) => format!("card/{}.html", encode_id(id)),
        }
    }

    /// [`Route::file_path`] as it must appear in a relative link.
    pub fn file_href(&self) -> String {
        utf8_percent_encode(&self.file_path(), FILE_HREF).to_string()
    }

    /// Directory depth of [`Route::file_path`] below the site root.
    pub fn file_depth(&self) -> usize {
        match self {
            Route::Root => 0,
            Route::Detail(_) => 1,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What the current route renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    Gallery(GalleryPage<'a>),
    Detail(DetailPage<'a>),
}

impl Screen<'_> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Screen::Detail(DetailPage::NotFound { .. }))
    }
}

/// Wires the current route to the gallery or detail view.
///
/// Returning to [`Route::Root`] from a detail page starts a fresh gallery
/// with an empty query.
pub struct Navigator<'a, R: CardRepository + ?Sized> {
    repository: &'a R,
    route: Route,
    gallery: GalleryView<'a>,
}

impl<'a, R: CardRepository + ?Sized> Navigator<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self {
            repository,
            route: Route::Root,
            gallery: GalleryView::new(repository.all_cards()),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn query(&self) -> &str {
        self.gallery.query()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.gallery.set_query(query);
    }

    pub fn navigate(&mut self, route: Route) {
        if route == Route::Root && self.route != Route::Root {
            self.gallery.clear_query();
        }
        debug!(from = %self.route, to = %route, "Navigating");
        self.route = route;
    }

    /// Follow a card link from the gallery.
    pub fn open_card(&mut self, id: &str) -> Route {
        let route = Route::Detail(id.to_string());
        self.navigate(route.clone());
        route
    }

    /// Activate the tile at `index` of the current gallery grid.
    pub fn activate_tile(&mut self, index: usize) -> Option<Route> {
        let id = self.gallery.filtered().get(index)?.id.clone();
        Some(self.open_card(&id))
    }

    pub fn back(&mut self) -> Route {
        self.navigate(Route::Root);
        Route::Root
    }

    pub fn render(&mut self) -> Screen<'a> {
        match &self.route {
            Route::Root => Screen::Gallery(self.gallery.page()),
            Route::Detail(id) => Screen::Detail(DetailView::new(self.repository).show(id)),
        }
    }
}
