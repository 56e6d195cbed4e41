use notefile::errors::NoteStoreError;
use notefile::notestore::BoxedNoteStore;
use notefile::{InMemoryStore, JsonFileStore};
use std::path::PathBuf;

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStoreType {
    InMemory,
    JsonFile,
}

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub notestoretype: NoteStoreType,
    pub datafile: PathBuf,
    populateinmemorystore: bool,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub async fn get_note_store(&self) -> Result<BoxedNoteStore, NoteStoreError> {
        match self.notestoretype {
            NoteStoreType::InMemory => {
                let store: BoxedNoteStore = Box::new(InMemoryStore::new());
                if self.populateinmemorystore {
                    notefile::notestore::util::populate_test_data(&store).await?;
                }
                Ok(store)
            }
            NoteStoreType::JsonFile => {
                let store: BoxedNoteStore = Box::new(JsonFileStore::open(&self.datafile).await?);
                Ok(store)
            }
        }
    }
}

lazy_static! {
    pub static ref CONFIGURATION: Settings =
        get_configuration().expect("Failed to read configuration.yml.");
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config = config::Config::builder()
        .set_default("debug", false)?
        .set_default("host", "0.0.0.0")?
        .set_default("port", 3000)?
        .set_default("notestoretype", "JsonFile")?
        .set_default("datafile", "notes.json")?
        .set_default("populateinmemorystore", false)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::default()
                .prefix("notefile")
                .separator("_"),
        )
        .set_override_option("port", std::env::var("PORT").ok())?
        .build()?;
    config.try_deserialize()
}
