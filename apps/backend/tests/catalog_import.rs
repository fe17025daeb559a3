mod common;

use common::reference_catalog;
use picker_backend::adapters::games_sea::GameCreate;
use picker_backend::errors::domain::DomainError;
use picker_backend::repos::CatalogRepo;
use picker_backend::test_support::memory_state;
use picker_backend::CatalogRepoSea;

async fn empty_repo() -> CatalogRepoSea {
    let state = memory_state(Some(1)).await.unwrap();
    CatalogRepoSea::new(state.db().expect("in-memory db").clone())
}

#[tokio::test]
async fn bad_entry_aborts_whole_import_and_is_named() {
    let repo = empty_repo().await;

    let err = repo
        .import(&[
            GameCreate::new("Ok", 2, 4, 30),
            GameCreate::new("Bad", 5, 2, 30),
        ])
        .await
        .unwrap_err();

    let DomainError::Validation(detail) = &err else {
        panic!("expected a validation error, got {err}");
    };
    assert_eq!(
        detail,
        "entry 1 (Bad): min_players (5) exceeds max_players (2)"
    );
    assert_eq!(repo.count_all().await.unwrap(), 0);

    let inserted = repo
        .import(&[GameCreate::new("Ok", 2, 4, 30)])
        .await
        .unwrap();
    assert_eq!(inserted, 1);
    assert_eq!(repo.count_all().await.unwrap(), 1);
}

#[tokio::test]
async fn blank_name_is_reported_by_index() {
    let repo = empty_repo().await;
    let mut games = reference_catalog();
    games.push(GameCreate::new("  ", 1, 2, 10));

    let err = repo.import(&games).await.unwrap_err();

    assert!(err.to_string().contains("entry 2 "), "{err}");
    assert!(err.to_string().contains("name must not be empty"), "{err}");
    assert_eq!(repo.count_all().await.unwrap(), 0);
}

#[tokio::test]
async fn valid_catalog_is_inserted() {
    let repo = empty_repo().await;

    let inserted = repo.import(&reference_catalog()).await.unwrap();

    assert_eq!(inserted, 2);
    assert_eq!(repo.count_all().await.unwrap(), 2);
}

#[tokio::test]
async fn empty_import_inserts_nothing() {
    let repo = empty_repo().await;
    assert_eq!(repo.import(&[]).await.unwrap(), 0);
    assert_eq!(repo.count_all().await.unwrap(), 0);
}
