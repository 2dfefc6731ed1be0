use indexer::{load_corpus, load_stopwords, load_url_map};
use std::fs;
use tempfile::tempdir;

#[test]
fn undecodable_page_is_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.html"), [0xff, 0xfe, b'a']).unwrap();
    fs::write(dir.path().join("ok.html"), "<html><body>cloud breach</body></html>").unwrap();

    let corpus = load_corpus(dir.path()).unwrap();
    let ids: Vec<&str> = corpus.documents.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["ok.html"]);
    assert_eq!(corpus.skipped, vec![dir.path().join("bad.html")]);
}

#[test]
fn only_top_level_html_pages_are_loaded() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("archive")).unwrap();
    fs::write(dir.path().join("archive").join("old.html"), "<p>old news</p>").unwrap();
    fs::write(dir.path().join("Page.HTM"), "<p>Ransomware report</p>").unwrap();
    fs::write(dir.path().join("index.html"), "<p>front page</p>").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a page").unwrap();

    let corpus = load_corpus(dir.path()).unwrap();
    let ids: Vec<&str> = corpus.documents.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["Page.HTM", "index.html"]);
    assert!(corpus.documents["Page.HTM"].contains("Ransomware report"));
    assert!(corpus.skipped.is_empty());
}

#[test]
fn missing_document_directory_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_corpus(dir.path().join("missing")).is_err());
}

#[test]
fn stopword_file_ignores_comments_and_blank_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stopwords.txt");
    fs::write(&path, "# security filler\nCyber\n\n   news  \n#attack\n").unwrap();

    let stopwords = load_stopwords(&path).unwrap();
    assert_eq!(stopwords.len(), 2);
    assert!(stopwords.contains("cyber"));
    assert!(stopwords.contains("news"));
    assert!(!stopwords.contains("attack"));
}

#[test]
fn missing_stopword_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_stopwords(dir.path().join("nope.txt")).is_err());
}

#[test]
fn url_map_file_is_read_and_missing_file_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "// pages\nok.html https://example.com/ok\n").unwrap();

    let urls = load_url_map(&path).unwrap();
    assert_eq!(urls.get("ok.html").map(String::as_str), Some("https://example.com/ok"));
    assert!(load_url_map(dir.path().join("absent.txt")).unwrap().is_empty());
}
