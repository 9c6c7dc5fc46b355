//! `reqwest` implementation of [`QuestionsApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{ConfigError, RemoteError, RemoteOperation};
use crate::models::{DraftQuestion, Question, QuestionId};

use super::QuestionsApi;

const QUESTIONS_PATH: [&str; 2] = ["api", "questions"];

#[derive(Debug, Clone)]
pub struct HttpQuestionsApi {
    http: Client,
    base: Url,
}

impl HttpQuestionsApi {
    /// Build a client for the resource served under `base`.
    ///
    /// Any path prefix on `base` is kept, so `http://host/quiz` targets
    /// `http://host/quiz/api/questions`.
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(base, builder.build()?)
    }

    pub fn with_client(base: Url, http: Client) -> Result<Self, ConfigError> {
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                url: base.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }
        Ok(Self { http, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, id: Option<&QuestionId>) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(QUESTIONS_PATH);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }

    pub(crate) fn questions_url(&self) -> Url {
        self.url(None)
    }

    pub(crate) fn question_url(&self, id: &QuestionId) -> Url {
        self.url(Some(id))
    }
}

fn check(operation: RemoteOperation, response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RemoteError::status(operation, status))
    }
}

async fn decode<T: DeserializeOwned>(
    operation: RemoteOperation,
    response: Response,
) -> Result<T, RemoteError> {
    let body = response
        .bytes()
        .await
        .map_err(|e| RemoteError::new(operation, e))?;
    serde_json::from_slice(&body).map_err(|e| RemoteError::new(operation, e))
}

#[async_trait]
impl QuestionsApi for HttpQuestionsApi {
    async fn list_questions(&self) -> Result<Vec<Question>, RemoteError> {
        let op = RemoteOperation::ListQuestions;
        let url = self.questions_url();
        debug!(%url, "GET questions");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RemoteError::new(op, e))?;
        let response = check(op, response)?;
        decode(op, response).await
    }

    async fn create_question(&self, draft: &DraftQuestion) -> Result<Question, RemoteError> {
        let op = RemoteOperation::CreateQuestion;
        let url = self.questions_url();
        debug!(%url, "POST question");
        let response = self
            .http
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(|e| RemoteError::new(op, e))?;
        let response = check(op, response)?;
        decode(op, response).await
    }

    async fn delete_question(&self, id: &QuestionId) -> Result<(), RemoteError> {
        let op = RemoteOperation::DeleteQuestion;
        let url = self.question_url(id);
        debug!(%url, "DELETE question");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| RemoteError::new(op, e))?;
        check(op, response)?;
        Ok(())
    }
}
