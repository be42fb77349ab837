//! Server-rendered presentation layer.
//!
//! Each view owns a [`ViewState`] holding its parameters and the outcome of
//! its latest fetch, talks to the proxy through a [`Feed`], and renders itself
//! to an HTML fragment.

pub mod apod;
pub mod epic;
pub mod html;
pub mod mars;
pub mod neo;

use crate::clients::UpstreamBody;
use crate::domain::{ApodQuery, EpicQuery, MarsPhotosQuery, NeoQuery};
use crate::errors::ApiResult;
use crate::services::ProxyService;
use tracing::debug;

pub use apod::ApodView;
pub use epic::EpicView;
pub use mars::MarsView;
pub use neo::NeoView;

/// The proxy routes as seen by the views: one call per view
#[allow(async_fn_in_trait)]
pub trait Feed {
    async fn apod(&self, query: &ApodQuery) -> ApiResult<UpstreamBody>;
    async fn mars_photos(&self, query: &MarsPhotosQuery) -> ApiResult<UpstreamBody>;
    async fn epic(&self, query: &EpicQuery) -> ApiResult<UpstreamBody>;
    async fn neos(&self, query: &NeoQuery) -> ApiResult<UpstreamBody>;
}

/// Views rendered by this process go through the same validation and
/// forwarding as the JSON routes
impl Feed for ProxyService {
    async fn apod(&self, query: &ApodQuery) -> ApiResult<UpstreamBody> {
        ProxyService::apod(self, query).await
    }

    async fn mars_photos(&self, query: &MarsPhotosQuery) -> ApiResult<UpstreamBody> {
        ProxyService::mars_photos(self, query).await
    }

    async fn epic(&self, query: &EpicQuery) -> ApiResult<UpstreamBody> {
        ProxyService::epic(self, query).await
    }

    async fn neos(&self, query: &NeoQuery) -> ApiResult<UpstreamBody> {
        ProxyService::neos(self, query).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Handle for one in-flight fetch, carrying the parameters it was issued with
#[derive(Debug, Clone)]
pub struct Ticket<P> {
    seq: u64,
    pub params: P,
}

/// Per-view state: current parameters plus the outcome of the latest fetch.
///
/// Every parameter change starts a new fetch with a higher sequence number.
/// A result is applied only if it belongs to the latest fetch, so a slow
/// response can never overwrite the outcome of a newer selection.
#[derive(Debug, Clone)]
pub struct ViewState<P, T> {
    params: P,
    status: Status<T>,
    seq: u64,
}

impl<P: Clone, T> ViewState<P, T> {
    pub fn new(params: P) -> Self {
        Self {
            params,
            status: Status::Loading,
            seq: 0,
        }
    }

    /// Switch to `params` and enter the loading state
    pub fn begin(&mut self, params: P) -> Ticket<P> {
        self.seq += 1;
        self.params = params.clone();
        self.status = Status::Loading;
        Ticket {
            seq: self.seq,
            params,
        }
    }

    /// Apply a fetch outcome; returns false if the ticket has been superseded
    pub fn settle(&mut self, ticket: &Ticket<P>, result: Result<T, String>) -> bool {
        if ticket.seq != self.seq {
            debug!("Discarding stale response {} (latest {})", ticket.seq, self.seq);
            return false;
        }
        self.status = match result {
            Ok(data) => Status::Ready(data),
            Err(message) => Status::Failed(message),
        };
        true
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn status(&self) -> &Status<T> {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.status {
            Status::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(message) => Some(message),
            _ => None,
        }
    }
}
