#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use faq_bot::handlers::AppState;
use faq_bot::observer::PersistenceObserver;
use faq_bot::store::{FaqStore, StoreError};
use faq_bot::upstream::client::interpret_response;
use faq_bot::upstream::{ChatCompletion, UpstreamError};
use reqwest::StatusCode;
use tempfile::TempDir;

/// A simulated upstream HTTP response
#[derive(Debug, Clone)]
pub enum Simulated {
    /// Status and raw body, fed through the real response interpreter
    Http(StatusCode, String),
    /// Transport failure
    Unreachable(String),
}

/// Upstream double that replays simulated responses
pub struct MockUpstream {
    pub responses: Mutex<Vec<Simulated>>,
    pub questions: Mutex<Vec<String>>,
}

impl MockUpstream {
    pub fn new(responses: Vec<Simulated>) -> Self {
        MockUpstream {
            responses: Mutex::new(responses),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `content`
    pub fn answering(content: &str) -> Self {
        Self::new(vec![completion(content)])
    }

    pub fn call_count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompletion for MockUpstream {
    async fn ask(&self, question: &str) -> Result<String, UpstreamError> {
        self.questions.lock().unwrap().push(question.to_string());

        let mut responses = self.responses.lock().unwrap();
        // The last response is sticky
        let next = if responses.len() > 1 {
            responses.remove(0)
        } else {
            responses
                .first()
                .cloned()
                .unwrap_or_else(|| completion("default answer"))
        };

        match next {
            Simulated::Http(status, body) => interpret_response(status, &body),
            Simulated::Unreachable(cause) => Err(UpstreamError::Gateway(cause)),
        }
    }
}

/// A successful chat-completion body with the given content
pub fn completion(content: &str) -> Simulated {
    let body = serde_json::json!({
        "id": "gen-test",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    });
    Simulated::Http(StatusCode::OK, body.to_string())
}

/// Observer that remembers what it was told
#[derive(Default)]
pub struct RecordingObserver {
    pub saved: Mutex<Vec<i64>>,
    pub dropped: Mutex<Vec<(String, String)>>,
}

impl PersistenceObserver for RecordingObserver {
    fn record_saved(&self, id: i64) {
        self.saved.lock().unwrap().push(id);
    }

    fn record_dropped(&self, question: &str, error: &StoreError) {
        self.dropped
            .lock()
            .unwrap()
            .push((question.to_string(), error.to_string()));
    }
}

pub struct TestApp {
    pub dir: TempDir,
    pub upstream: Arc<MockUpstream>,
    pub observer: Arc<RecordingObserver>,
    pub state: AppState,
}

/// App backed by a fresh temporary database
pub fn test_app(upstream: MockUpstream) -> TestApp {
    let dir = TempDir::new().unwrap();
    let store = FaqStore::new(dir.path().join("faq.db"));
    store.initialize().unwrap();
    build(dir, store, upstream)
}

/// App whose database file can never be opened
pub fn broken_store_app(upstream: MockUpstream) -> TestApp {
    let dir = TempDir::new().unwrap();
    let store = FaqStore::new(dir.path().join("no-such-dir").join("faq.db"));
    build(dir, store, upstream)
}

fn build(dir: TempDir, store: FaqStore, upstream: MockUpstream) -> TestApp {
    let upstream = Arc::new(upstream);
    let observer = Arc::new(RecordingObserver::default());
    let state = AppState::new(upstream.clone(), store).with_observer(observer.clone());
    TestApp {
        dir,
        upstream,
        observer,
        state,
    }
}
