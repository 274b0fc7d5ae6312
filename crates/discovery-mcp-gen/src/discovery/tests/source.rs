use std::io::Write;

use crate::discovery::{DocumentSource, source::document_url};

#[tokio::test]
async fn test_document_source_reads_file() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file
    .write_all(include_bytes!("../../../fixtures/library_api.json"))
    .unwrap();

  let source = DocumentSource::open(file.path()).await.unwrap();
  let document = source.parse().unwrap();

  assert_eq!(document.name, "library");
  assert_eq!(document.all_methods().len(), 4);
}

#[tokio::test]
async fn test_document_source_missing_file() {
  let dir = tempfile::tempdir().unwrap();
  let missing = dir.path().join("missing.json");

  let result = DocumentSource::open(&missing).await;
  let Err(error) = result else {
    panic!("opening a missing file must fail");
  };
  assert!(error.to_string().contains("missing.json"));
}

#[tokio::test]
async fn test_document_source_invalid_json() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(br#"{"schemas": []}"#).unwrap();

  let source = DocumentSource::open(file.path()).await.unwrap();
  let error = source.parse().unwrap_err();
  assert!(error.to_string().contains("schemas"), "error should name the path: {error}");
}

#[test]
fn test_document_url() {
  assert_eq!(
    document_url("youtube", "v3"),
    "https://www.googleapis.com/discovery/v1/apis/youtube/v3/rest"
  );
}
