//! Workflow execution seam: the cache sits in front of an executor.
//!
//! The executor is the expensive collaborator (an LLM-backed orchestration
//! backend). Its whole contract here is: given a `(department, backend,
//! params)` triple, produce a structured result. The cache is an
//! optimization in front of it, never a correctness dependency.

use serde_json::{Map, Value};
use tracing::debug;

use crate::cache::WorkflowCache;
use crate::error::Result;

/// Identity of one workflow run.
#[derive(Debug, Clone)]
pub struct WorkflowRequest {
    /// Department the workflow is scoped to.
    pub department: String,
    /// Orchestration backend to run against.
    pub backend: String,
    /// Free-form workflow parameters.
    pub params: Map<String, Value>,
}

impl WorkflowRequest {
    pub fn new(
        department: impl Into<String>,
        backend: impl Into<String>,
        params: Map<String, Value>,
    ) -> Self {
        Self {
            department: department.into(),
            backend: backend.into(),
            params,
        }
    }
}

/// Executes a workflow and produces a structured, JSON-serializable result.
pub trait WorkflowExecutor {
    fn execute(&self, request: &WorkflowRequest) -> Result<Value>;
}

/// Result of running a workflow through the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowOutcome {
    /// The structured workflow result.
    pub result: Value,
    /// Whether the result was served from the cache.
    pub from_cache: bool,
}

/// Cache-fronted executor.
///
/// A hit returns the stored result; a miss executes the workflow and
/// stores the result before returning it.
pub struct CachedExecutor<E> {
    cache: WorkflowCache,
    executor: E,
}

impl<E: WorkflowExecutor> CachedExecutor<E> {
    pub fn new(cache: WorkflowCache, executor: E) -> Self {
        Self { cache, executor }
    }

    /// Run one workflow, consulting the cache first.
    ///
    /// A failed cache write after execution is surfaced, not swallowed:
    /// the caller is entitled to assume a storage error means "not
    /// cached", never "silently cached".
    pub fn run(&self, request: &WorkflowRequest) -> Result<WorkflowOutcome> {
        if let Some(result) = self
            .cache
            .get(&request.department, &request.backend, &request.params)
        {
            debug!(department = %request.department, "Workflow served from cache");
            return Ok(WorkflowOutcome {
                result,
                from_cache: true,
            });
        }

        let result = self.executor.execute(request)?;
        self.cache.set(
            &request.department,
            &request.backend,
            &request.params,
            &result,
            None,
        )?;

        Ok(WorkflowOutcome {
            result,
            from_cache: false,
        })
    }

    /// The cache this executor fronts.
    pub fn cache(&self) -> &WorkflowCache {
        &self.cache
    }
}
