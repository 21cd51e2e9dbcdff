use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use mindcare_classifier::SeverityClassifier;
use mindcare_core::models::analysis::AnalysisResult;
use mindcare_export::styles::ReportStyles;
use mindcare_mail::ReportMailer;

pub const DEFAULT_SESSION_CAPACITY: usize = 1024;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn SeverityClassifier>,
    pub sessions: Arc<Mutex<SessionStore>>,
    pub styles: Arc<ReportStyles>,
    /// `None` when SMTP credentials are not configured.
    pub mailer: Option<Arc<ReportMailer>>,
}

impl AppState {
    pub fn new(
        classifier: Arc<dyn SeverityClassifier>,
        styles: ReportStyles,
        mailer: Option<ReportMailer>,
        session_capacity: usize,
    ) -> Self {
        Self {
            classifier,
            sessions: Arc::new(Mutex::new(SessionStore::new(session_capacity))),
            styles: Arc::new(styles),
            mailer: mailer.map(Arc::new),
        }
    }
}

/// Most recent analysis results, keyed by session id.
///
/// Holds at most `capacity` results; inserting past that evicts the oldest.
#[derive(Debug)]
pub struct SessionStore {
    capacity: usize,
    order: VecDeque<Uuid>,
    results: HashMap<Uuid, AnalysisResult>,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            order: VecDeque::new(),
            results: HashMap::new(),
        }
    }

    /// Store a result under a fresh session id.
    pub fn insert(&mut self, result: AnalysisResult) -> Uuid {
        while self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.results.remove(&oldest);
                tracing::debug!(session_id = %oldest, "session evicted");
            }
        }

        let id = Uuid::new_v4();
        self.order.push_back(id);
        self.results.insert(id, result);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&AnalysisResult> {
        self.results.get(id)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
