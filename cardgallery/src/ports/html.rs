// src/ports/html.rs
use crate::application::{CardDetail, DetailPage, GalleryContent, GalleryPage, Route, Screen};
use crate::ports::decor::{Decor, Head};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::instrument;

const BASE_STYLE: &str = r#"<style>
        *, *::before, *::after { box-sizing: border-box; }
        body {
            margin: 0;
            min-height: 100vh;
            padding: 1.5rem;
            color: #e5e7eb;
            background: linear-gradient(to bottom, #1a1124, #0b0915, #000);
            font-family: Georgia, serif;
        }
        a { color: inherit; text-decoration: none; }
        .site-header { text-align: center; margin-bottom: 2.5rem; }
        .site-header h1 {
            font-size: clamp(2.5rem, 8vw, 4.5rem);
            margin: 0 0 .5rem;
            background: linear-gradient(to right, #fbbf24, #a855f7, #6366f1);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }
        .subtitle { max-width: 42rem; margin: 0 auto; font-size: 1.25rem; opacity: .9; }
        .search { max-width: 28rem; margin: 0 auto 3.5rem; }
        .search input {
            width: 100%;
            padding: .75rem;
            border-radius: .75rem;
            border: 1px solid rgba(147, 51, 234, .4);
            background: rgba(0, 0, 0, .4);
            color: inherit;
            font: inherit;
        }
        .gallery {
            display: grid;
            gap: 2rem;
            grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
            max-width: 72rem;
            margin: 0 auto;
        }
        .tile {
            display: block;
            border-radius: .75rem;
            overflow: hidden;
            border: 1px solid rgba(126, 34, 206, .4);
            background: linear-gradient(to bottom right, rgba(35, 21, 47, .6), rgba(18, 10, 26, .8));
            box-shadow: 0 4px 20px rgba(0, 0, 0, .8);
        }
        .tile-art { position: relative; aspect-ratio: 3 / 4; background: #000; }
        .tile-art img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: contain; }
        .tile-title { margin: 0; padding: 1rem; text-align: center; color: #fde68a; letter-spacing: .05em; }
        .no-results { text-align: center; margin-top: 2.5rem; color: #9ca3af; }
        .detail {
            display: flex;
            flex-wrap: wrap;
            align-items: center;
            justify-content: center;
            gap: 2.5rem;
            min-height: calc(100vh - 3rem);
        }
        .card-art { width: 20rem; max-width: 100%; border-radius: 1.5rem; border: 1px solid rgba(147, 51, 234, .4); }
        .card-info { max-width: 32rem; }
        .card-name { font-size: 2.25rem; color: #fcd34d; }
        .meaning p { font-size: 1.125rem; line-height: 1.7; opacity: .9; }
        .photo h3 { color: #d8b4fe; }
        .photo img { width: 100%; border-radius: .75rem; border: 1px solid rgba(126, 34, 206, .4); }
        .back {
            display: inline-block;
            margin-top: 1.5rem;
            padding: .75rem 1.25rem;
            border-radius: .75rem;
            background: #7e22ce;
        }
        .back:hover { background: #6b21a8; }
        .not-found { min-height: calc(100vh - 3rem); display: grid; place-content: center; text-align: center; }
    </style>"#;

/// User-visible copy of the gallery.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SiteText {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
    #[serde(default = "default_no_results")]
    pub no_results: String,
    #[serde(default = "default_not_found")]
    pub not_found: String,
    #[serde(default = "default_back_label")]
    pub back_label: String,
    #[serde(default = "default_photo_heading")]
    pub photo_heading: String,
}

fn default_title() -> String { "inscryclassmates".to_string() }
fn default_subtitle() -> String {
    "La collezione vivente di carte che incarna il potere arcano di professori e alunni.".to_string()
}
fn default_search_placeholder() -> String { "Cerca una carta…".to_string() }
fn default_no_results() -> String { "Nessuna carta trovata.".to_string() }
fn default_not_found() -> String { "Carta non trovata".to_string() }
fn default_back_label() -> String { "Torna alla criptagalleria".to_string() }
fn default_photo_heading() -> String { "Foto originale".to_string() }

impl Default for SiteText {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            search_placeholder: default_search_placeholder(),
            no_results: default_no_results(),
            not_found: default_not_found(),
            back_label: default_back_label(),
            photo_heading: default_photo_heading(),
        }
    }
}

/// How navigation targets and asset locators are written into pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkMode {
    /// Served over HTTP: `/`, `/card/{id}`, locators untouched.
    Server,
    /// Files on disk: relative `.html` links, root-relative locators
    /// resolved under the assets directory as `file://` URIs.
    StaticFiles { assets_dir: PathBuf },
}

#[derive(Debug, Clone)]
pub struct HtmlPresenter {
    site: SiteText,
    decor: bool,
    links: LinkMode,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::with_site(SiteText::default())
    }

    pub fn with_site(site: SiteText) -> Self {
        Self {
            site,
            decor: true,
            links: LinkMode::Server,
        }
    }

    pub fn with_decor(mut self, enabled: bool) -> Self {
        self.decor = enabled;
        self
    }

    pub fn with_static_files(mut self, assets_dir: impl Into<PathBuf>) -> Self {
        self.links = LinkMode::StaticFiles {
            assets_dir: assets_dir.into(),
        };
        self
    }

    pub fn render_screen(&self, screen: &Screen<'_>) -> String {
        match screen {
            Screen::Gallery(page) => self.render_gallery(page),
            Screen::Detail(page) => self.render_detail(page),
        }
    }

    #[instrument(level = "debug", skip_all, fields(query = %page.query))]
    pub fn render_gallery(&self, page: &GalleryPage<'_>) -> String {
        let depth = Route::Root.file_depth();
        let mut body = String::new();

        body.push_str(&format!(
            "<header class=\"site-header\">\n<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n</header>\n",
            text(&self.site.title),
            text(&self.site.subtitle)
        ));

        if self.links == LinkMode::Server {
            body.push_str(&format!(
                "<form class=\"search\" method=\"get\" action=\"{action}\" role=\"search\">\n\
                 <input type=\"search\" name=\"q\" value=\"{value}\" placeholder=\"{placeholder}\" aria-label=\"{placeholder}\">\n\
                 </form>\n",
                action = attr(&self.href(&Route::Root, depth)),
                value = attr(&page.query),
                placeholder = attr(&self.site.search_placeholder),
            ));
        }

        match &page.content {
            GalleryContent::Tiles(tiles) => {
                body.push_str("<main class=\"gallery\">\n");
                for tile in tiles {
                    body.push_str(&format!(
                        "<a class=\"tile\" href=\"{href}\" data-card-id=\"{id}\">\n\
                         <div class=\"tile-art\"><img src=\"{src}\" alt=\"{alt}\"></div>\n\
                         <h2 class=\"tile-title\">{title}</h2>\n\
                         </a>\n",
                        href = attr(&self.href(&tile.target, depth)),
                        id = attr(&tile.card.id),
                        src = attr(&self.resolve_asset(&tile.card.img)),
                        alt = attr(&tile.card.name),
                        title = text(&tile.title),
                    ));
                }
                body.push_str("</main>");
            }
            GalleryContent::NoResults => {
                body.push_str(&format!(
                    "<p class=\"no-results\">{}</p>",
                    text(&self.site.no_results)
                ));
            }
        }

        self.document(&self.site.title, &body)
    }

    #[instrument(level = "debug", skip_all)]
    pub fn render_detail(&self, page: &DetailPage<'_>) -> String {
        match page {
            DetailPage::Found(detail) => self.render_card(detail),
            DetailPage::NotFound { back, .. } => {
                // Static sites keep the not-found page at the root.
                let body = format!(
                    "<main class=\"not-found\">\n<h2>{} 💔</h2>\n<a class=\"back\" href=\"{}\">{}</a>\n</main>",
                    text(&self.site.not_found),
                    attr(&self.href(back, 0)),
                    text(&self.site.back_label)
                );
                self.document(&format!("{} · {}", self.site.not_found, self.site.title), &body)
            }
        }
    }

    fn render_card(&self, detail: &CardDetail<'_>) -> String {
        let card = detail.card;
        let depth = Route::Detail(card.id.clone()).file_depth();
        let mut body = String::new();

        body.push_str(&format!(
            "<main class=\"detail\" data-card-id=\"{id}\">\n\
             <img class=\"card-art\" src=\"{src}\" alt=\"{alt}\">\n\
             <section class=\"card-info\">\n\
             <h2 class=\"card-name\">{name}</h2>\n\
             <div class=\"meaning\">\n",
            id = attr(&card.id),
            src = attr(&self.resolve_asset(&card.img)),
            alt = attr(&card.name),
            name = text(&card.name),
        ));
        for paragraph in &detail.paragraphs {
            if paragraph.is_empty() {
                body.push_str("<br>\n");
            } else {
                body.push_str(&format!("<p>{}</p>\n", text(paragraph)));
            }
        }
        body.push_str("</div>\n");

        if let Some(photo) = detail.photo {
            body.push_str(&format!(
                "<section class=\"photo\">\n<h3>{heading}</h3>\n<img src=\"{src}\" alt=\"{alt}\">\n</section>\n",
                heading = text(&self.site.photo_heading),
                src = attr(&self.resolve_asset(photo)),
                alt = attr(&format!("{} {}", card.name, self.site.photo_heading.to_lowercase())),
            ));
        }

        body.push_str(&format!(
            "<a class=\"back\" href=\"{}\">⬅︎ {}</a>\n</section>\n</main>",
            attr(&self.href(&detail.back, depth)),
            text(&self.site.back_label)
        ));

        self.document(&format!("{} · {}", card.name, self.site.title), &body)
    }

    fn href(&self, target: &Route, depth: usize) -> String {
        match &self.links {
            LinkMode::Server => target.path(),
            LinkMode::StaticFiles { .. } => format!("{}{}", "../".repeat(depth), target.file_href()),
        }
    }

    #[instrument(level = "trace", skip(self), ret)]
    fn resolve_asset(&self, locator: &str) -> String {
        let LinkMode::StaticFiles { assets_dir } = &self.links else {
            return locator.to_string();
        };
        let external = ["http://", "https://", "file://", "data:"]
            .iter()
            .any(|scheme| locator.starts_with(scheme));
        if external {
            return locator.to_string();
        }
        let path = assets_dir.join(locator.trim_start_matches('/'));
        format!("file://{}", path.display())
    }

    fn document(&self, title: &str, body: &str) -> String {
        let mut head = Head::new();
        head.push(r#"<meta charset="UTF-8">"#);
        head.push(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
        head.push(format!("<title>{}</title>", text(title)));
        head.push(BASE_STYLE);

        if self.decor {
            let decorated = Decor::acquire(&mut head);
            layout(&decorated, body, true)
        } else {
            layout(&head, body, false)
        }
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn layout(head: &Head, body: &str, glow: bool) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"it\">\n<head>\n    {head}\n</head>\n<body>\n{glow}{body}\n</body>\n</html>\n",
        head = head.render(),
        glow = if glow { "<div class=\"glow\"></div>\n" } else { "" },
    )
}
