mod helpers;

use anyhow::Result;
use cardgallery::application::{DetailView, GalleryView, CardRepository};
use cardgallery::ports::{HtmlPresenter, SiteText};
use helpers::{test_cards, TestDataset};

#[test]
fn given_full_gallery_when_rendering_then_tiles_follow_dataset_order() -> Result<()> {
    // Arrange
    let repo = TestDataset::new()?.open_repository()?;
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render_gallery(&GalleryView::new(repo.all_cards()).page());

    // Assert
    let positions: Vec<_> = ["/card/1\"", "/card/2\"", "/card/bidello\""]
        .iter()
        .map(|href| html.find(href).expect("tile link present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(html.contains("IL BIDELLO"));
    Ok(())
}

#[test]
fn given_strega_when_rendering_detail_with_assets_dir_then_converts_to_file_uri() -> Result<()> {
    // Arrange
    let dataset = TestDataset::new()?;
    let repo = dataset.open_repository()?;
    let presenter = HtmlPresenter::new().with_static_files(&dataset.assets_dir);

    // Act
    let html = presenter.render_detail(&DetailView::new(&repo).show(test_cards::STREGA));

    // Assert
    assert!(html.contains("file://"));
    assert!(html.contains("cards/2/photo.jpg"));
    assert!(html.contains(&dataset.assets_dir.to_string_lossy().to_string()));
    Ok(())
}

#[test]
fn given_external_image_when_rendering_static_detail_then_keeps_url() -> Result<()> {
    let dataset = TestDataset::new()?;
    let repo = dataset.open_repository()?;
    let presenter = HtmlPresenter::new().with_static_files(&dataset.assets_dir);

    let html = presenter.render_detail(&DetailView::new(&repo).show(test_cards::BIDELLO));

    assert!(html.contains(r#"src="https://cdn.example.org/cards/bidello.png""#));
    Ok(())
}

#[test]
fn given_custom_site_text_when_rendering_then_uses_it() -> Result<()> {
    // Arrange
    let repo = TestDataset::new()?.open_repository()?;
    let site = SiteText {
        title: "Bestiario".to_string(),
        not_found: "Card missing".to_string(),
        back_label: "Back to gallery".to_string(),
        ..SiteText::default()
    };
    let presenter = HtmlPresenter::with_site(site);

    // Act
    let gallery = presenter.render_gallery(&GalleryView::new(repo.all_cards()).page());
    let missing = presenter.render_detail(&DetailView::new(&repo).show(test_cards::NONEXISTENT));

    // Assert
    assert!(gallery.contains("<title>Bestiario</title>"));
    assert!(missing.contains("Card missing"));
    assert!(missing.contains("Back to gallery"));
    Ok(())
}

#[test]
fn given_each_card_when_rendering_detail_then_produces_valid_document() -> Result<()> {
    let repo = TestDataset::new()?.open_repository()?;
    let presenter = HtmlPresenter::new();
    let view = DetailView::new(&repo);

    for card in repo.all_cards() {
        let html = presenter.render_detail(&view.show(&card.id));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains(r#"<a class="back" href="/">"#));
    }
    Ok(())
}
