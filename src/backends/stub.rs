// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::JobDescriptor;
use crate::errors::TrackingError;
use crate::tracking::JobStatus;
use crate::traits::{ComputationEngine, EngineFactory, JobTracker, TrackerFactory};

/// What a stub engine does when asked to run a job
#[derive(Debug, Clone)]
pub enum StubBehavior {
    Succeed,
    FailConstruction(String),
    FailInvocation(String),
}

/// Engine factory that records every construction and run
#[derive(Clone)]
pub struct StubEngineFactory {
    behavior: StubBehavior,
    pub constructed_with: Arc<Mutex<Vec<Map<String, Value>>>>,
    pub ran: Arc<Mutex<Vec<JobDescriptor>>>,
}

impl StubEngineFactory {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            constructed_with: Arc::new(Mutex::new(Vec::new())),
            ran: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(StubBehavior::Succeed)
    }

    pub fn failing(message: &str) -> Self {
        Self::new(StubBehavior::FailInvocation(message.to_string()))
    }
}

impl EngineFactory for StubEngineFactory {
    fn create_engine(
        &self,
        config: &Map<String, Value>,
    ) -> anyhow::Result<Box<dyn ComputationEngine>> {
        self.constructed_with.lock().unwrap().push(config.clone());

        if let StubBehavior::FailConstruction(message) = &self.behavior {
            anyhow::bail!("{}", message);
        }

        Ok(Box::new(StubEngine {
            behavior: self.behavior.clone(),
            ran: Arc::clone(&self.ran),
        }))
    }
}

struct StubEngine {
    behavior: StubBehavior,
    ran: Arc<Mutex<Vec<JobDescriptor>>>,
}

#[async_trait]
impl ComputationEngine for StubEngine {
    async fn run_job(&self, job: &JobDescriptor) -> anyhow::Result<()> {
        self.ran.lock().unwrap().push(job.clone());
        match &self.behavior {
            StubBehavior::FailInvocation(message) => anyhow::bail!("{}", message),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// One `complete_job` call as seen by the stub tracker
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteJobCall {
    pub url: String,
    pub client_token: String,
    pub job_id: String,
    pub token: String,
    pub status: JobStatus,
    pub message: String,
    pub results: Value,
}

/// Tracker factory that records calls, optionally failing every one of them
#[derive(Clone, Default)]
pub struct StubTrackerFactory {
    reject_with: Option<String>,
    pub connections: Arc<Mutex<Vec<(String, String)>>>,
    pub calls: Arc<Mutex<Vec<CompleteJobCall>>>,
}

impl StubTrackerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `complete_job` call fails with a JSON-RPC error carrying `message`.
    pub fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<CompleteJobCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TrackerFactory for StubTrackerFactory {
    fn connect(&self, url: &str, token: &str) -> Result<Box<dyn JobTracker>, TrackingError> {
        self.connections
            .lock()
            .unwrap()
            .push((url.to_string(), token.to_string()));
        Ok(Box::new(StubTracker {
            url: url.to_string(),
            client_token: token.to_string(),
            reject_with: self.reject_with.clone(),
            calls: Arc::clone(&self.calls),
        }))
    }
}

struct StubTracker {
    url: String,
    client_token: String,
    reject_with: Option<String>,
    calls: Arc<Mutex<Vec<CompleteJobCall>>>,
}

#[async_trait]
impl JobTracker for StubTracker {
    async fn complete_job(
        &self,
        job_id: &str,
        token: &str,
        status: JobStatus,
        message: &str,
        results: &Value,
    ) -> Result<(), TrackingError> {
        self.calls.lock().unwrap().push(CompleteJobCall {
            url: self.url.clone(),
            client_token: self.client_token.clone(),
            job_id: job_id.to_string(),
            token: token.to_string(),
            status,
            message: message.to_string(),
            results: results.clone(),
        });

        match &self.reject_with {
            Some(message) => Err(TrackingError::Rpc {
                method: "complete_job".to_string(),
                name: "StubError".to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
