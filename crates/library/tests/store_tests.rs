// Integration tests for the book store

use bookshelf_core::{Book, BookUpdate, SearchField};
use bookshelf_library::BookStore;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("my_books.json");
    (temp_dir, path)
}

fn dune() -> Book {
    Book::new("Dune", "Herbert", "1965", "SciFi", true)
}

fn sample_store(path: &PathBuf) -> BookStore {
    let mut store = BookStore::open(path);
    store.add(dune()).unwrap();
    store
        .add(Book::new("Emma", "Jane Austen", "1815", "Classic", false))
        .unwrap();
    store
        .add(Book::new("Neuromancer", "William Gibson", "1984", "Cyberpunk", false))
        .unwrap();
    store
}

fn read_only(read: bool) -> BookUpdate {
    BookUpdate {
        read,
        ..BookUpdate::default()
    }
}

fn modified_time(path: &PathBuf) -> std::time::SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

#[test]
fn test_save_load_roundtrip() {
    let (_temp, path) = setup();
    let store = sample_store(&path);
    let expected = store.all().to_vec();

    let reopened = BookStore::open(&path);
    assert_eq!(reopened.all(), expected.as_slice());
}

#[test]
fn test_add_places_book_last() {
    let (_temp, path) = setup();
    let mut store = sample_store(&path);
    let before = store.len();

    let book = Book::new("Solaris", "Lem", "1961", "SciFi", false);
    store.add(book.clone()).unwrap();

    assert_eq!(store.len(), before + 1);
    assert_eq!(store.all().last(), Some(&book));
}

#[test]
fn test_add_allows_duplicate_titles() {
    let (_temp, path) = setup();
    let mut store = BookStore::open(&path);
    store.add(dune()).unwrap();
    store.add(dune()).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_remove_first_match_only() {
    let (_temp, path) = setup();
    let mut store = BookStore::open(&path);
    store.add(Book::new("Dune", "Herbert", "1965", "SciFi", true)).unwrap();
    store.add(Book::new("Dune", "Anderson", "1999", "SciFi", false)).unwrap();

    let removed = store.remove("dune").unwrap();

    assert_eq!(removed.map(|b| b.author), Some("Herbert".to_string()));
    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].author, "Anderson");

    let reopened = BookStore::open(&path);
    assert_eq!(reopened.all(), store.all());
}

#[test]
fn test_remove_absent_title_does_not_save() {
    let (_temp, path) = setup();
    let mut store = sample_store(&path);
    let before = store.all().to_vec();
    let contents = fs::read_to_string(&path).unwrap();
    let mtime = modified_time(&path);

    let removed = store.remove("Foundation").unwrap();

    assert!(removed.is_none());
    assert_eq!(store.all(), before.as_slice());
    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    assert_eq!(modified_time(&path), mtime);
}

#[test]
fn test_remove_requires_whole_title() {
    let (_temp, path) = setup();
    let mut store = sample_store(&path);
    assert!(store.remove("Neuro").unwrap().is_none());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_edit_blank_update_only_overwrites_read() {
    let (_temp, path) = setup();
    let mut store = sample_store(&path);

    let found = store.edit("DUNE", BookUpdate::default()).unwrap();

    assert!(found);
    let book = &store.all()[0];
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Herbert");
    assert_eq!(book.year, "1965");
    assert_eq!(book.genre, "SciFi");
    assert!(!book.read);

    let reopened = BookStore::open(&path);
    assert!(!reopened.all()[0].read);
}

#[test]
fn test_edit_replaces_given_fields() {
    let (_temp, path) = setup();
    let mut store = sample_store(&path);

    let update = BookUpdate {
        title: Some("Emma (Annotated)".to_string()),
        year: Some("2012".to_string()),
        read: true,
        ..BookUpdate::default()
    };
    assert!(store.edit("emma", update).unwrap());

    let book = &store.all()[1];
    assert_eq!(book.title, "Emma (Annotated)");
    assert_eq!(book.author, "Jane Austen");
    assert_eq!(book.year, "2012");
    assert_eq!(book.genre, "Classic");
    assert!(book.read);
    assert!(store.find("emma").is_none());
}

#[test]
fn test_edit_absent_title() {
    let (_temp, path) = setup();
    let mut store = sample_store(&path);
    let before = store.all().to_vec();

    assert!(!store.edit("Foundation", read_only(true)).unwrap());
    assert_eq!(store.all(), before.as_slice());
}

#[test]
fn test_search_empty_keyword_returns_everything_in_order() {
    let (_temp, path) = setup();
    let store = sample_store(&path);

    let all: Vec<&Book> = store.all().iter().collect();
    assert_eq!(store.search(SearchField::Title, ""), all);
    assert_eq!(store.search(SearchField::Author, ""), all);
}

#[test]
fn test_search_author_case_insensitive_substring() {
    let (_temp, path) = setup();
    let mut store = BookStore::open(&path);
    store.add(dune()).unwrap();

    let results = store.search(SearchField::Author, "her");
    assert_eq!(results, vec![&dune()]);
}

#[test]
fn test_search_by_title_preserves_order() {
    let (_temp, path) = setup();
    let store = sample_store(&path);

    let titles: Vec<&str> = store
        .search(SearchField::Title, "N")
        .into_iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Dune", "Neuromancer"]);
    assert!(store.search(SearchField::Title, "zzz").is_empty());
}

#[test]
fn test_statistics() {
    let (_temp, path) = setup();
    let store = BookStore::open(&path);
    let stats = store.statistics();
    assert_eq!((stats.total, stats.read), (0, 0));
    assert_eq!(format!("{:.2}%", stats.completion_percentage()), "0.00%");

    let mut store = store;
    store.add(dune()).unwrap();
    let stats = store.statistics();
    assert_eq!((stats.total, stats.read), (1, 1));
    assert_eq!(format!("{:.2}%", stats.completion_percentage()), "100.00%");
}

#[test]
fn test_read_only_operations_do_not_create_file() {
    let (_temp, path) = setup();
    let store = BookStore::open(&path);

    let _ = store.search(SearchField::Title, "");
    let _ = store.all();
    let _ = store.statistics();
    let _ = store.find("Dune");

    assert!(!path.exists());
}

#[test]
fn test_load_invalid_json_starts_empty() {
    let (_temp, path) = setup();
    fs::write(&path, "[{\"title\": \"Dune\",").unwrap();

    let store = BookStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn test_load_empty_file_starts_empty() {
    let (_temp, path) = setup();
    fs::write(&path, "").unwrap();

    assert!(BookStore::open(&path).is_empty());
}

#[test]
fn test_load_record_missing_field_starts_empty() {
    let (_temp, path) = setup();
    fs::write(
        &path,
        r#"[{"title": "Dune", "author": "Herbert", "year": "1965", "genre": "SciFi"}]"#,
    )
    .unwrap();

    assert!(BookStore::open(&path).is_empty());
}

#[test]
fn test_load_accepts_existing_file_layout() {
    let (_temp, path) = setup();
    fs::write(
        &path,
        r#"[
    {
        "title": "Dune",
        "author": "Herbert",
        "year": "1965",
        "genre": "SciFi",
        "read": true
    }
]"#,
    )
    .unwrap();

    let store = BookStore::open(&path);
    assert_eq!(store.all(), &[dune()]);
}

#[test]
fn test_save_failure_propagates() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the parent directory should be makes every write fail.
    let blocker = temp_dir.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let mut store = BookStore::open(blocker.join("my_books.json"));
    assert!(store.is_empty());
    assert!(store.add(dune()).is_err());
}

#[test]
fn test_saved_file_overwrites_previous_contents() {
    let (_temp, path) = setup();
    let mut store = sample_store(&path);
    store.remove("Emma").unwrap();
    store.remove("Neuromancer").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Dune"));
    assert!(!contents.contains("Emma"));
    assert!(!contents.contains("Neuromancer"));
}
