use card_render::*;
use std::sync::Arc;

#[tokio::test]
async fn test_save_list_fetch_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsIccStore::open(dir.path().join("icc_profiles")).await.unwrap();

    assert!(store.list().await.unwrap().is_empty());

    let stored = store.save("Coated FOGRA39.icc", b"fogra").await.unwrap();
    assert_eq!(stored, "Coated_FOGRA39.icc");
    store.save("adobeRGB.icc", b"adobe").await.unwrap();
    store.save("GRACoL.icc", b"gracol").await.unwrap();

    let names: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["adobeRGB", "Coated_FOGRA39", "GRACoL"]);

    assert_eq!(store.fetch("GRACoL").await.unwrap(), b"gracol");
    assert_eq!(store.fetch("gracol.icc").await.unwrap(), b"gracol");

    store.delete("adobergb").await.unwrap();
    assert!(matches!(
        store.fetch("adobeRGB").await,
        Err(RenderError::IccNotFound(_))
    ));
    assert!(matches!(
        store.delete("adobeRGB").await,
        Err(RenderError::IccNotFound(_))
    ));
}

#[tokio::test]
async fn test_save_rejects_non_icc() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsIccStore::open(dir.path()).await.unwrap();

    assert!(matches!(
        store.save("profile.txt", b"x").await,
        Err(RenderError::InvalidIccName(_))
    ));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_replaces_differently_cased_profile() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsIccStore::open(dir.path()).await.unwrap();

    store.save("Press.icc", b"old").await.unwrap();
    store.save("press.icc", b"new").await.unwrap();

    let profiles = store.list().await.unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].file_name, "press.icc");
    assert_eq!(store.fetch("PRESS").await.unwrap(), b"new");
}

#[tokio::test]
async fn test_fetch_cannot_escape_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("secret.icc"), b"secret").unwrap();
    let store = FsIccStore::open(dir.path().join("profiles")).await.unwrap();

    assert!(matches!(
        store.fetch("../secret.icc").await,
        Err(RenderError::IccNotFound(_))
    ));
}

#[tokio::test]
async fn test_resolve_icc_profile_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsIccStore::open(dir.path()).await.unwrap();
    store.save("press.icc", &[0, 1]).await.unwrap();

    assert_eq!(resolve_icc_profile(&store, "").await.unwrap(), None);
    assert_eq!(resolve_icc_profile(&store, "missing").await.unwrap(), None);
    assert_eq!(
        resolve_icc_profile(&store, "press").await.unwrap(),
        Some(vec![0, 1])
    );

    let dyn_store: &dyn IccProfileStore = &store;
    assert_eq!(
        resolve_icc_profile(dyn_store, "press.icc").await.unwrap(),
        Some(vec![0, 1])
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_never_expose_partial_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FsIccStore::open(dir.path()).await.unwrap());

    let first = vec![1u8; 64 * 1024];
    let second = vec![2u8; 64 * 1024];
    store.save("shared.icc", &first).await.unwrap();

    let mut tasks = Vec::new();
    for i in 0..8 {
        let store = Arc::clone(&store);
        let bytes = if i % 2 == 0 { first.clone() } else { second.clone() };
        tasks.push(tokio::spawn(async move {
            store.save("shared.icc", &bytes).await.unwrap();
            let read = store.fetch("shared").await.unwrap();
            assert_eq!(read.len(), 64 * 1024);
            assert!(read.iter().all(|b| *b == read[0]));
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(store.list().await.unwrap().len(), 1);
}
