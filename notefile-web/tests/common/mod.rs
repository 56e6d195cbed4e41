use lazy_static::lazy_static;
use notefile::notestore::BoxedNoteStore;
use notefile::JsonFileStore;
use notefile_web::configuration::CONFIGURATION;
use notefile_web::startup::run;
use notefile_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;
use tracing_subscriber::layer::SubscriberExt;

lazy_static! {
    static ref TRACING: () = {
        let subscriber = get_subscriber(&CONFIGURATION)
            .with(tracing_subscriber::fmt::Layer::default().with_test_writer());
        init_tracing(subscriber);
    };
}

pub struct TestApp {
    pub address: String,
    pub data_file: PathBuf,
    _data_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn stored_bytes(&self) -> Vec<u8> {
        std::fs::read(&self.data_file).expect("Failed to read data file")
    }

    /// Put a directory where the data file is, so reading it fails.
    pub fn break_reads(&self) {
        std::fs::remove_file(&self.data_file).expect("Failed to remove data file");
        std::fs::create_dir(&self.data_file).expect("Failed to create directory");
    }

    /// Put a directory where the store writes its temporary file, so writing fails.
    pub fn break_writes(&self) {
        let mut temp = self.data_file.clone().into_os_string();
        temp.push(".tmp");
        std::fs::create_dir(temp).expect("Failed to create directory");
    }
}

pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // We retrieve the port assigned to us by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    lazy_static::initialize(&TRACING);

    let data_dir = tempfile::tempdir().expect("Failed to create data directory");
    let data_file = data_dir.path().join("notes.json");
    let store: BoxedNoteStore = Box::new(
        JsonFileStore::open(&data_file)
            .await
            .expect("Failed to open note store"),
    );
    let server = run(listener, store).expect("Failed to bind address");
    let _ = tokio::spawn(server);
    TestApp {
        address,
        data_file,
        _data_dir: data_dir,
    }
}
