use crate::error::GigPayError;
use crate::fetcher::{PaymentFetcher, SortKey, sort_records};
use crate::models::{PaymentRecord, ViewerRole};
use crate::presenter::{HistoryView, present};
use crate::report::ReportExporter;
use crate::roles::RoleResolver;
use crate::store::PaymentStore;
use futures::future::try_join;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// View lifecycle as a tagged variant, so `Loading` and `Exporting`
/// can never hold at the same time. `Exporting` keeps the displayed
/// records so a failed export leaves the history intact.
#[derive(Clone, Debug)]
pub enum ViewState {
    Idle,
    Loading,
    Ready {
        records: Vec<PaymentRecord>,
        role: ViewerRole,
    },
    Failed {
        reason: String,
    },
    Exporting {
        records: Vec<PaymentRecord>,
        role: ViewerRole,
    },
}

/// Orchestrates fetch → present → export for one viewer's history
/// view. Each view instance owns its own record set and state; the
/// payment store behind `S` is the only shared resource.
pub struct HistoryController<S, R, E>
where
    S: PaymentStore,
    R: RoleResolver,
    E: ReportExporter,
{
    fetcher: PaymentFetcher<S>,
    roles: Arc<R>,
    exporter: Arc<E>,
    viewer_id: String,
    state: Mutex<ViewState>,
}

impl<S, R, E> HistoryController<S, R, E>
where
    S: PaymentStore,
    R: RoleResolver,
    E: ReportExporter,
{
    pub fn new(store: Arc<S>, roles: Arc<R>, exporter: Arc<E>, viewer_id: String) -> Self {
        Self {
            fetcher: PaymentFetcher::new(store),
            roles,
            exporter,
            viewer_id,
            state: Mutex::new(ViewState::Idle),
        }
    }

    pub async fn state(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Fetches the viewer's history and role. Triggers issued while a
    /// fetch or an export is already in flight are coalesced into
    /// no-ops; from `Failed` this doubles as the retry action.
    pub async fn load(&self) -> Result<(), GigPayError> {
        {
            let mut state = self.state.lock().await;
            match *state {
                ViewState::Loading => {
                    debug!(viewer_id = %self.viewer_id, "load already in flight, coalescing");
                    return Ok(());
                }
                ViewState::Exporting { .. } => {
                    debug!(viewer_id = %self.viewer_id, "export in flight, ignoring load");
                    return Ok(());
                }
                _ => *state = ViewState::Loading,
            }
        }

        let history = self.fetcher.fetch_history(&self.viewer_id);
        let role = self.roles.resolve_role(&self.viewer_id);
        match try_join(history, role).await {
            Ok((records, role)) => {
                *self.state.lock().await = ViewState::Ready { records, role };
                Ok(())
            }
            Err(err) => {
                warn!(viewer_id = %self.viewer_id, error = %err, "payment history unavailable");
                *self.state.lock().await = ViewState::Failed {
                    reason: err.to_string(),
                };
                Err(err)
            }
        }
    }

    /// Role-aware rows for the current state; `None` until a fetch has
    /// succeeded.
    pub async fn rows(&self) -> Option<HistoryView> {
        match &*self.state.lock().await {
            ViewState::Ready { records, role } | ViewState::Exporting { records, role } => {
                Some(present(records, *role))
            }
            _ => None,
        }
    }

    /// Re-orders the displayed records. Only meaningful in `Ready`;
    /// a later export follows whatever order is applied here.
    pub async fn resort(&self, key: SortKey, descending: bool) {
        if let ViewState::Ready { records, .. } = &mut *self.state.lock().await {
            sort_records(records, key, descending);
        }
    }

    /// Renders the currently displayed records as a downloadable
    /// report. Returns `Ok(None)` when the trigger is ignored: an
    /// export is already running, or the view holds no history yet.
    /// Success and render failure both return the view to `Ready` with
    /// the displayed records untouched.
    pub async fn export(&self) -> Result<Option<Vec<u8>>, GigPayError> {
        let (records, role) = {
            let mut state = self.state.lock().await;
            match &*state {
                ViewState::Exporting { .. } => {
                    debug!(viewer_id = %self.viewer_id, "export already in flight, ignoring");
                    return Ok(None);
                }
                ViewState::Ready { records, .. } if records.is_empty() => {
                    return Err(GigPayError::EmptyDataset);
                }
                ViewState::Ready { records, role } => {
                    let snapshot = (records.clone(), *role);
                    *state = ViewState::Exporting {
                        records: snapshot.0.clone(),
                        role: snapshot.1,
                    };
                    snapshot
                }
                _ => return Ok(None),
            }
        };

        let result = self.exporter.export(&records, role).await;

        *self.state.lock().await = ViewState::Ready { records, role };

        match result {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) => {
                warn!(viewer_id = %self.viewer_id, error = %err, "report export failed");
                Err(err)
            }
        }
    }
}
