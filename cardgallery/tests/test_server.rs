mod helpers;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use cardgallery::application::{CardRepository, Route};
use cardgallery::infrastructure::{build_router, AppState};
use cardgallery::ports::HtmlPresenter;
use helpers::TestDataset;
use rstest::rstest;
use tower::ServiceExt;

const SPACED_ID_JSON: &str = r#"[
    {"id": "la strega", "name": "La Strega", "img": "s.png", "meaning": "Riga1"},
    {"id": "100%", "name": "Il Cento", "img": "c.png", "meaning": "Riga1"}
]"#;

fn router(dataset: &TestDataset, with_assets: bool) -> Result<Router> {
    let state = AppState::new(dataset.open_repository()?, HtmlPresenter::new());
    let assets = with_assets.then(|| dataset.assets_dir.clone());
    Ok(build_router(state, assets))
}

async fn get(router: Router, uri: &str) -> Result<(StatusCode, String)> {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

#[tokio::test]
async fn given_root_when_requesting_then_renders_all_tiles() -> Result<()> {
    // Arrange
    let dataset = TestDataset::new()?;

    // Act
    let (status, html) = get(router(&dataset, false)?, "/").await?;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("class=\"tile\"").count(), 3);
    assert!(html.contains(r#"href="/card/2""#));
    Ok(())
}

#[tokio::test]
async fn given_query_when_requesting_root_then_filters_and_echoes_query() -> Result<()> {
    let dataset = TestDataset::new()?;

    let (status, html) = get(router(&dataset, false)?, "/?q=PROF").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("class=\"tile\"").count(), 1);
    assert!(html.contains(r#"href="/card/1""#));
    assert!(html.contains(r#"value="PROF""#));
    Ok(())
}

#[tokio::test]
async fn given_unmatched_query_when_requesting_root_then_shows_no_results() -> Result<()> {
    let dataset = TestDataset::new()?;

    let (status, html) = get(router(&dataset, false)?, "/?q=xyz").await?;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<p class="no-results">"#));
    assert!(!html.contains("class=\"tile\""));
    Ok(())
}

#[tokio::test]
async fn given_known_card_when_requesting_detail_then_renders_it() -> Result<()> {
    let dataset = TestDataset::new()?;

    let (status, html) = get(router(&dataset, false)?, "/card/2").await?;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<h2 class="card-name">La Strega</h2>"#));
    assert!(html.contains(r#"<section class="photo">"#));
    assert!(html.contains(r#"<a class="back" href="/">"#));
    Ok(())
}

#[tokio::test]
async fn given_unknown_card_when_requesting_detail_then_returns_not_found_page() -> Result<()> {
    let dataset = TestDataset::new()?;

    let (status, html) = get(router(&dataset, false)?, "/card/999").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Carta non trovata"));
    assert!(html.contains(r#"<a class="back" href="/">"#));
    Ok(())
}

#[tokio::test]
async fn given_asset_path_when_requesting_then_serves_file() -> Result<()> {
    let dataset = TestDataset::new()?;

    let (status, body) = get(router(&dataset, true)?, "/cards/1/card.png").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "PNG-FIXTURE");
    Ok(())
}

#[tokio::test]
async fn given_missing_asset_when_requesting_then_returns_not_found_page() -> Result<()> {
    let dataset = TestDataset::new()?;

    let (status, html) = get(router(&dataset, true)?, "/cards/9/card.png").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Carta non trovata"));
    Ok(())
}

#[tokio::test]
async fn given_unknown_path_without_assets_when_requesting_then_returns_not_found_page() -> Result<()> {
    let dataset = TestDataset::new()?;

    let (status, html) = get(router(&dataset, false)?, "/about").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Torna alla criptagalleria"));
    Ok(())
}

#[tokio::test]
async fn given_id_with_space_when_following_tile_link_then_renders_detail() -> Result<()> {
    // Arrange
    let dataset = TestDataset::with_json(SPACED_ID_JSON)?;
    let (_, gallery) = get(router(&dataset, false)?, "/").await?;

    // Act
    let href = gallery
        .split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .find(|href| href.starts_with("/card/la"))
        .expect("tile link for spaced id");
    let (status, html) = get(router(&dataset, false)?, href).await?;

    // Assert
    assert_eq!(href, "/card/la%20strega");
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<h2 class="card-name">La Strega</h2>"#));
    Ok(())
}

#[tokio::test]
async fn given_id_with_percent_when_requesting_encoded_path_then_renders_detail() -> Result<()> {
    let dataset = TestDataset::with_json(SPACED_ID_JSON)?;

    let (status, html) = get(router(&dataset, false)?, "/card/100%25").await?;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<h2 class="card-name">Il Cento</h2>"#));
    Ok(())
}

#[rstest]
#[case("/")]
#[case("/?q=prof")]
#[case("/card/2")]
#[case("/card/2/")]
#[case("/card/bidello?from=gallery")]
#[case("/card/999")]
#[case("/card/")]
#[case("/card/1/extra")]
#[case("/cards/1")]
#[case("/about")]
#[tokio::test]
async fn given_location_when_requesting_then_status_follows_parsed_route(
    #[case] location: &str,
) -> Result<()> {
    // Arrange
    let dataset = TestDataset::new()?;
    let repo = dataset.open_repository()?;
    let expected = match Route::parse(location) {
        Some(Route::Root) => StatusCode::OK,
        Some(Route::Detail(id)) if repo.get_card(&id).is_ok() => StatusCode::OK,
        _ => StatusCode::NOT_FOUND,
    };

    // Act
    let (status, _) = get(router(&dataset, false)?, location).await?;

    // Assert
    assert_eq!(status, expected);
    Ok(())
}

#[tokio::test]
async fn given_trailing_slash_when_requesting_detail_then_renders_card() -> Result<()> {
    let dataset = TestDataset::new()?;

    let (status, html) = get(router(&dataset, false)?, "/card/2/").await?;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<h2 class="card-name">La Strega</h2>"#));
    Ok(())
}

#[tokio::test]
async fn given_post_when_requesting_root_then_method_not_allowed() -> Result<()> {
    let dataset = TestDataset::new()?;

    let response = router(&dataset, false)?
        .oneshot(Request::builder().method("POST").uri("/").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}
