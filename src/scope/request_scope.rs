//! Request-scoped container for the correlation id and trace context.
//!
//! # Responsibilities
//! - Bind one correlation id + the adopted trace context per request
//! - Make both readable from arbitrarily deep call chains without
//!   explicit parameter threading
//! - Guarantee teardown on every exit path
//!
//! # Design Decisions
//! - Backed by `tokio::task_local!`: concurrently in-flight requests
//!   own disjoint scopes, and the binding is dropped when the scoped
//!   future completes, whether by normal return, error response, or
//!   cancellation
//! - The scope is never mutated after creation; a request gets exactly
//!   one correlation id for its whole lifetime

use std::future::Future;

use opentelemetry::trace::SpanContext;

use crate::scope::CorrelationId;

tokio::task_local! {
    static REQUEST_SCOPE: RequestScope;
}

/// Per-request scope: `{ CorrelationId, current TraceContext (nullable) }`.
#[derive(Debug, Clone)]
pub struct RequestScope {
    correlation_id: CorrelationId,
    supplied_by_caller: bool,
    trace_context: Option<SpanContext>,
}

impl RequestScope {
    pub fn new(
        correlation_id: CorrelationId,
        supplied_by_caller: bool,
        trace_context: Option<SpanContext>,
    ) -> Self {
        RequestScope {
            correlation_id,
            supplied_by_caller,
            trace_context,
        }
    }

    /// Run `fut` with this scope bound. The binding is released when the
    /// future completes or is dropped, whichever comes first.
    pub async fn enter<F>(self, fut: F) -> F::Output
    where
        F: Future,
    {
        REQUEST_SCOPE.scope(self, fut).await
    }

    /// Snapshot of the ambient scope, if one is bound on this task.
    pub fn current() -> Option<RequestScope> {
        REQUEST_SCOPE.try_with(Clone::clone).ok()
    }

    /// Correlation id of the ambient scope, if any.
    pub fn current_correlation_id() -> Option<CorrelationId> {
        REQUEST_SCOPE
            .try_with(|scope| scope.correlation_id.clone())
            .ok()
    }

    /// Log-record key of the ambient scope, if any.
    pub fn current_log_key() -> Option<String> {
        REQUEST_SCOPE.try_with(RequestScope::log_key).ok()
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    pub fn trace_context(&self) -> Option<&SpanContext> {
        self.trace_context.as_ref()
    }

    /// Identifier under which log records for this request are persisted.
    ///
    /// A caller-supplied correlation id always wins. Without one, an
    /// adopted trace id ties the record to the distributed trace;
    /// only when neither exists does the locally generated id apply.
    pub fn log_key(&self) -> String {
        if self.supplied_by_caller {
            return self.correlation_id.to_string();
        }
        match &self.trace_context {
            Some(ctx) => ctx.trace_id().to_string(),
            None => self.correlation_id.to_string(),
        }
    }
}
