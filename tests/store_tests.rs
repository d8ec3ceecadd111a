//! Store-level tests exercising the persistence operations directly.

use anishelf::db::Store;
use anishelf::models::anime::AnimeFields;

async fn spawn_store() -> Store {
    // One pooled connection so the in-memory database is shared.
    Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("failed to create store")
}

fn fields(name: &str, author: &str, episodes: i32) -> AnimeFields {
    AnimeFields {
        name: name.to_string(),
        author: author.to_string(),
        episodes,
    }
}

#[tokio::test]
async fn test_insert_round_trip() {
    let store = spawn_store().await;

    let id = store
        .add_anime(&fields("Bleach", "Kubo", 366))
        .await
        .unwrap();
    assert!(id > 0);

    let anime = store.get_anime(id).await.unwrap().expect("record missing");
    assert_eq!(anime.id, id);
    assert_eq!(anime.name, "Bleach");
    assert_eq!(anime.author, "Kubo");
    assert_eq!(anime.episodes, 366);
}

#[tokio::test]
async fn test_insert_assigns_fresh_ids() {
    let store = spawn_store().await;

    let first = store.add_anime(&fields("A", "a", 1)).await.unwrap();
    let second = store.add_anime(&fields("B", "b", 2)).await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_list_orders_by_creation() {
    let store = spawn_store().await;

    store.add_anime(&fields("First", "a", 1)).await.unwrap();
    store.add_anime(&fields("Second", "b", 2)).await.unwrap();
    store.add_anime(&fields("Third", "c", 3)).await.unwrap();

    let names: Vec<String> = store
        .list_anime()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();

    assert_eq!(names, ["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_list_empty_is_empty_vec() {
    let store = spawn_store().await;

    assert!(store.list_anime().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let store = spawn_store().await;

    let id = store.add_anime(&fields("Monster", "Urasawa", 70)).await.unwrap();

    let new_values = fields("Monster", "Urasawa", 74);
    store.update_anime(id, &new_values).await.unwrap();
    let after_first = store.get_anime(id).await.unwrap().unwrap();

    store.update_anime(id, &new_values).await.unwrap();
    let after_second = store.get_anime(id).await.unwrap().unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(after_second.episodes, 74);
}

#[tokio::test]
async fn test_update_missing_id_is_noop() {
    let store = spawn_store().await;

    let id = store.add_anime(&fields("Bleach", "Kubo", 366)).await.unwrap();

    store
        .update_anime(id + 1000, &fields("Ghost", "Nobody", 1))
        .await
        .unwrap();

    let all = store.list_anime().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Bleach");
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let store = spawn_store().await;

    store.add_anime(&fields("A", "a", 1)).await.unwrap();
    let target = store.add_anime(&fields("B", "b", 2)).await.unwrap();
    store.add_anime(&fields("C", "c", 3)).await.unwrap();

    assert!(store.remove_anime(target).await.unwrap());

    let remaining = store.list_anime().await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|a| a.id != target));

    // A second delete of the same id is a no-op.
    assert!(!store.remove_anime(target).await.unwrap());
    assert_eq!(store.list_anime().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_missing_id_is_none() {
    let store = spawn_store().await;

    assert!(store.get_anime(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_ping() {
    let store = spawn_store().await;

    store.ping().await.expect("ping failed");
}
