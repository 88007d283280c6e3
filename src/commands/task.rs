//! Task Commands
//!
//! Fetch-based implementation of `TaskApi`.

use async_trait::async_trait;
use gloo::net::http::{Request, Response};

use super::{decode_delete, decode_task, decode_task_list, ErrorKind, TaskApi};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{NewTaskBody, SetDoneBody, Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTaskApi {
    base: String,
}

impl HttpTaskApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/{}", self.base, id)
    }
}

/// The request never produced a response
fn transport(kind: ErrorKind) -> impl Fn(gloo::net::Error) -> ApiError {
    move |err| kind(Some(err.to_string()))
}

/// Status flag plus body text; an unreadable body reads as empty
async fn read_body(response: Response) -> (bool, String) {
    let ok = response.ok();
    if !ok {
        tracing::debug!(status = response.status(), url = %response.url(), "non-success response");
    }
    let body = response.text().await.unwrap_or_default();
    (ok, body)
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn get_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = Request::get(&self.base)
            .send()
            .await
            .map_err(transport(ApiError::Load))?;
        let (ok, body) = read_body(response).await;
        decode_task_list(ok, &body)
    }

    async fn add_task(&self, title: &str) -> Result<Task, ApiError> {
        let response = Request::post(&self.base)
            .json(&NewTaskBody { title })
            .map_err(transport(ApiError::Add))?
            .send()
            .await
            .map_err(transport(ApiError::Add))?;
        let (ok, body) = read_body(response).await;
        decode_task(ok, &body, ApiError::Add)
    }

    async fn set_done(&self, id: TaskId, done: bool) -> Result<Task, ApiError> {
        let response = Request::patch(&self.task_url(id))
            .json(&SetDoneBody { done })
            .map_err(transport(ApiError::Update))?
            .send()
            .await
            .map_err(transport(ApiError::Update))?;
        let (ok, body) = read_body(response).await;
        decode_task(ok, &body, ApiError::Update)
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        let response = Request::delete(&self.task_url(id))
            .send()
            .await
            .map_err(transport(ApiError::Delete))?;
        let (ok, body) = read_body(response).await;
        decode_delete(ok, &body)
    }
}
