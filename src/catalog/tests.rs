use super::*;
use tempfile::tempdir;

fn t(title: &str, id: &str) -> Track {
    Track {
        title: title.into(),
        artist: "Artist".into(),
        youtube_id: id.into(),
        thumbnail_url: None,
    }
}

#[test]
fn open_missing_file_yields_empty_catalog() {
    let dir = tempdir().unwrap();
    let catalog = Catalog::open(dir.path().join("songs.json")).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.iter().count(), 0);
}

#[test]
fn open_rejects_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songs.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Catalog::open(&path),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn missing_thumbnail_key_defaults_to_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songs.json");
    std::fs::write(
        &path,
        r#"[
            {"title": "One", "artist": "A", "youtube_id": "id1"},
            {"title": "Two", "artist": "B", "youtube_id": "id2", "thumbnail_url": "https://img.example/2.jpg"},
            {"title": "Three", "artist": "C", "youtube_id": "id3", "thumbnail_url": null}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::open(&path).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(0).unwrap().thumbnail_url, None);
    assert_eq!(
        catalog.get(1).unwrap().thumbnail_url.as_deref(),
        Some("https://img.example/2.jpg")
    );
    assert_eq!(catalog.get(2).unwrap().thumbnail_url, None);
}

#[test]
fn save_then_open_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songs.json");

    let mut catalog = Catalog::open(&path).unwrap();
    catalog.push(t("One", "id1"));
    catalog.push(Track {
        title: "Two".into(),
        artist: "B".into(),
        youtube_id: "id2".into(),
        thumbnail_url: Some("https://img.example/2.jpg".into()),
    });
    catalog.save().unwrap();

    let reloaded = Catalog::open(&path).unwrap();
    let before: Vec<&Track> = catalog.iter().collect();
    let after: Vec<&Track> = reloaded.iter().collect();
    assert_eq!(before, after);
}

#[test]
fn save_rewrites_the_whole_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songs.json");
    std::fs::write(&path, r#"[{"title":"Old","artist":"X","youtube_id":"old"}]"#).unwrap();

    let mut catalog = Catalog::open(&path).unwrap();
    catalog.push(t("New", "new"));
    catalog.save().unwrap();

    let reloaded = Catalog::open(&path).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.get(0).unwrap().title, "Old");
    assert_eq!(reloaded.get(1).unwrap().title, "New");
}

#[test]
fn next_index_wraps_around() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::open(dir.path().join("songs.json")).unwrap();
    assert_eq!(catalog.next_index(0), None);

    catalog.push(t("A", "a"));
    catalog.push(t("B", "b"));
    catalog.push(t("C", "c"));

    assert_eq!(catalog.next_index(0), Some(1));
    assert_eq!(catalog.next_index(1), Some(2));
    assert_eq!(catalog.next_index(2), Some(0));
}

#[test]
fn track_display_is_title_by_artist() {
    let track = Track {
        title: "Song".into(),
        artist: "Artist".into(),
        youtube_id: "id".into(),
        thumbnail_url: None,
    };
    assert_eq!(track.to_string(), "Song by Artist");
}
