pub mod generate;
pub mod list;

use discovery_mcp_gen::{
  Document,
  discovery::{DocumentSource, source::fetch_document},
};

pub use generate::{GenerateConfig, generate_code};
pub use list::{list_apis, list_methods};

use crate::ui::DocumentInput;

async fn load_document(input: &DocumentInput) -> anyhow::Result<Document> {
  match input {
    DocumentInput::File(path) => DocumentSource::open(path).await?.parse(),
    DocumentInput::Remote { api, version } => fetch_document(api, version).await,
  }
}
