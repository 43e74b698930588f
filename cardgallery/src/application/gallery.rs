// src/application/gallery.rs
use crate::application::catalog::filter_cards;
use crate::application::router::Route;
use crate::domain::Card;
use tracing::trace;

/// One clickable grid entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile<'a> {
    pub card: &'a Card,
    /// Upper-cased card name shown under the illustration.
    pub title: String,
    pub target: Route,
}

impl<'a> Tile<'a> {
    pub fn for_card(card: &'a Card) -> Self {
        Self {
            card,
            title: card.name.to_uppercase(),
            target: Route::Detail(card.id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryContent<'a> {
    Tiles(Vec<Tile<'a>>),
    NoResults,
}

/// Everything the catalog root screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPage<'a> {
    pub query: String,
    pub content: GalleryContent<'a>,
}

impl GalleryPage<'_> {
    pub fn tiles(&self) -> &[Tile<'_>] {
        match &self.content {
            GalleryContent::Tiles(tiles) => tiles.as_slice(),
            GalleryContent::NoResults => &[],
        }
    }
}

/// Catalog root state: the query and a memoized filter result.
#[derive(Debug)]
pub struct GalleryView<'a> {
    cards: &'a [Card],
    query: String,
    memo: Option<(String, Vec<&'a Card>)>,
}

impl<'a> GalleryView<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        Self::with_query(cards, String::new())
    }

    pub fn with_query(cards: &'a [Card], query: impl Into<String>) -> Self {
        Self {
            cards,
            query: query.into(),
            memo: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Cards matching the current query, recomputed only when the query changed.
    pub fn filtered(&mut self) -> &[&'a Card] {
        let fresh = matches!(&self.memo, Some((query, _)) if *query == self.query);
        if !fresh {
            trace!(query = %self.query, "Recomputing gallery filter");
            let cards = filter_cards(self.cards, &self.query);
            self.memo = Some((self.query.clone(), cards));
        }
        match &self.memo {
            Some((_, cards)) => cards.as_slice(),
            None => &[],
        }
    }

    pub fn page(&mut self) -> GalleryPage<'a> {
        let tiles: Vec<Tile<'a>> = self
            .filtered()
            .iter()
            .copied()
            .map(Tile::for_card)
            .collect();

        let content = if tiles.is_empty() {
            GalleryContent::NoResults
        } else {
            GalleryContent::Tiles(tiles)
        };

        GalleryPage {
            query: self.query.clone(),
            content,
        }
    }
}
