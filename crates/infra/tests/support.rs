use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const HEADER: &str =
    "CLASS_ID,topic,host,alternative_host,startDate,startTime,location,duration\n";

/// Scratch directory holding an input export and report destinations.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("temp dir should be created") }
    }

    /// Write `rows` below the standard header and return the file path.
    pub fn input(&self, rows: &str) -> PathBuf {
        let path = self.dir.path().join("classes.csv");
        let mut file = std::fs::File::create(&path).expect("input file should be created");
        file.write_all(HEADER.as_bytes()).unwrap();
        file.write_all(rows.as_bytes()).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Mount `GET /v2/users/{user}` answering with the given tier code.
pub async fn mount_user(server: &MockServer, user: &str, tier: u8) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/users/{user}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": format!("id-{user}"),
            "email": user,
            "type": tier
        })))
        .mount(server)
        .await;
}

/// Mount `POST /v2/users/{host}/meetings` answering with meeting `id`.
pub async fn mount_create(server: &MockServer, host: &str, id: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/v2/users/{host}/meetings")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "uuid": format!("uuid-{id}"),
            "id": id,
            "start_url": format!("https://zoom.example/s/{id}"),
            "join_url": format!("https://zoom.example/j/{id}")
        })))
        .mount(server)
        .await;
}

/// Number of POST requests the server has seen.
pub async fn post_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method == wiremock::http::Method::POST)
        .count()
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("report should exist")
}
