//! Network-backed store implementations, speaking the same `{ data, error }`
//! envelope the `serve` command exposes. HTTP statuses map back onto the
//! store error taxonomy so callers cannot tell the backends apart.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, FileOp, Result};
use crate::store::{ConfigStore, FieldStore, ProjectStore};
use crate::types::{
    ConfigDocument, ConfigKey, ConfigUpdate, FieldOption, NewFieldOption, NewProject, Project,
    ProjectPatch,
};

#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| transport(FileOp::Read, base_url, e))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .map_err(|e| transport(FileOp::Read, path, e))?;
        decode(FileOp::Read, path, resp)
    }

    fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(|e| transport(FileOp::Write, path, e))?;
        decode(FileOp::Write, path, resp)
    }

    fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let resp = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .map_err(|e| transport(FileOp::Write, path, e))?;
        decode(FileOp::Write, path, resp)
    }

    fn patch<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let resp = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .map_err(|e| transport(FileOp::Write, path, e))?;
        decode(FileOp::Write, path, resp)
    }

    fn delete(&self, path: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .map_err(|e| transport(FileOp::Write, path, e))?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(status_error(FileOp::Write, path, resp))
        }
    }
}

fn transport(op: FileOp, path: &str, err: reqwest::Error) -> Error {
    Error::Permission {
        op,
        path: path.into(),
        reason: err.to_string(),
    }
}

fn decode<T: DeserializeOwned>(op: FileOp, path: &str, resp: reqwest::blocking::Response) -> Result<T> {
    if !resp.status().is_success() {
        return Err(status_error(op, path, resp));
    }
    let envelope: Envelope<T> = resp.json().map_err(|e| transport(op, path, e))?;
    envelope.data.ok_or_else(|| Error::Permission {
        op,
        path: path.into(),
        reason: "server returned an empty response".to_string(),
    })
}

fn status_error(op: FileOp, path: &str, resp: reqwest::blocking::Response) -> Error {
    let status = resp.status();
    let message = resp
        .json::<Envelope<()>>()
        .ok()
        .and_then(|e| e.error)
        .unwrap_or_else(|| format!("server returned {status}"));

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Error::Validation(message),
        StatusCode::NOT_FOUND => Error::NotFound,
        StatusCode::CONFLICT => Error::Conflict(message),
        _ => Error::Permission {
            op,
            path: path.into(),
            reason: message,
        },
    }
}

pub struct RemoteConfigStore {
    client: ApiClient,
}

impl RemoteConfigStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ConfigStore for RemoteConfigStore {
    fn get(&self) -> Result<ConfigDocument> {
        self.client.get("/config")
    }

    fn set(&self, key: ConfigKey, value: &str) -> Result<ConfigDocument> {
        self.client.put(
            "/config",
            &ConfigUpdate {
                key,
                value: value.to_string(),
            },
        )
    }
}

pub struct RemoteProjectStore {
    client: ApiClient,
}

impl RemoteProjectStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ProjectStore for RemoteProjectStore {
    fn list(&self) -> Result<Vec<Project>> {
        self.client.get("/projects")
    }

    fn get(&self, id: &str) -> Result<Option<Project>> {
        match self.client.get::<Project>(&format!("/projects/{id}")) {
            Ok(project) => Ok(Some(project)),
            Err(Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn create(&self, new: NewProject) -> Result<Project> {
        self.client.post("/projects", &new)
    }

    fn update(&self, id: &str, patch: ProjectPatch) -> Result<Project> {
        self.client.patch(&format!("/projects/{id}"), &patch)
    }

    fn remove(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/projects/{id}"))
    }
}

pub struct RemoteFieldStore {
    client: ApiClient,
}

impl RemoteFieldStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl FieldStore for RemoteFieldStore {
    fn global(&self) -> Result<Vec<FieldOption>> {
        self.client.get("/fields")
    }

    fn for_project(&self, project_id: &str) -> Result<Vec<FieldOption>> {
        self.client.get(&format!("/projects/{project_id}/fields"))
    }

    fn add(&self, new: NewFieldOption) -> Result<FieldOption> {
        self.client.post("/fields", &new)
    }

    fn remove(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/fields/{id}"))
    }
}
