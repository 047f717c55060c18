//! Shared test helpers for `classbridge-core` integration tests.
//!
//! Lightweight in-memory implementations of every port so the workflow
//! tests can focus on behaviour instead of boilerplate. Each mock records
//! the calls it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use classbridge_core::{
    AccountDirectory, CredentialProvider, MeetingScheduler, ReportSink, ScheduleSource,
};
use classbridge_domain::{
    ClassBridgeError, CreatedMeeting, LicenseTier, MeetingDefaults, MeetingRequest,
    ProviderAccount, ProvisionResult, Result,
};

/// Build a request with fixed schedule fields.
pub fn request(class_id: &str, host: &str, alternate: Option<&str>) -> MeetingRequest {
    MeetingRequest {
        class_id: class_id.to_string(),
        topic: format!("Class {class_id}"),
        host: host.to_string(),
        alternate_host: alternate.map(str::to_string),
        start_time: NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        duration_minutes: 60,
        timezone: Some(chrono_tz::America::New_York),
    }
}

/// Directory seeded with account tiers; unknown users are `NotFound`.
#[derive(Default, Clone)]
pub struct MockDirectory {
    tiers: Arc<Mutex<HashMap<String, LicenseTier>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, user: &str, tier: LicenseTier) -> Self {
        self.tiers.lock().unwrap().insert(user.to_string(), tier);
        self
    }

    pub fn licensed(self, users: &[&str]) -> Self {
        users.iter().fold(self, |dir, user| dir.with_account(user, LicenseTier::Licensed))
    }

    /// Users looked up, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountDirectory for MockDirectory {
    async fn lookup_account(&self, user_id: &str, _credential: &str) -> Result<ProviderAccount> {
        self.lookups.lock().unwrap().push(user_id.to_string());
        let tier = self.tiers.lock().unwrap().get(user_id).copied();
        match tier {
            Some(tier) => Ok(ProviderAccount { id: user_id.to_string(), email: None, tier }),
            None => Err(ClassBridgeError::NotFound(format!("user {user_id}"))),
        }
    }
}

/// Scheduler that hands out sequential meeting ids.
#[derive(Default, Clone)]
pub struct MockScheduler {
    calls: Arc<Mutex<Vec<(String, String)>>>,
    failing: Arc<Mutex<Vec<String>>>,
    settings: Arc<Mutex<Vec<MeetingDefaults>>>,
}

impl MockScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the creation call for `class_id` fail.
    pub fn failing_for(self, class_id: &str) -> Self {
        self.failing.lock().unwrap().push(class_id.to_string());
        self
    }

    /// `(class_id, credential)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Settings bundle passed with each call, in call order.
    pub fn settings(&self) -> Vec<MeetingDefaults> {
        self.settings.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeetingScheduler for MockScheduler {
    async fn create_meeting(
        &self,
        request: &MeetingRequest,
        defaults: &MeetingDefaults,
        credential: &str,
    ) -> Result<CreatedMeeting> {
        self.settings.lock().unwrap().push(defaults.clone());
        let mut calls = self.calls.lock().unwrap();
        calls.push((request.class_id.clone(), credential.to_string()));

        if self.failing.lock().unwrap().contains(&request.class_id) {
            return Err(ClassBridgeError::Provision("response missing field `id`".into()));
        }

        let id = 90_000 + calls.len() as u64;
        Ok(CreatedMeeting {
            uuid: format!("uuid-{id}"),
            id,
            start_url: format!("https://zoom.example/s/{id}"),
            join_url: format!("https://zoom.example/j/{id}"),
        })
    }
}

/// Credential provider returning numbered tokens.
#[derive(Default)]
pub struct CountingCredentials {
    issued: Mutex<usize>,
    fail: bool,
}

impl CountingCredentials {
    pub fn failing() -> Self {
        Self { issued: Mutex::new(0), fail: true }
    }

    pub fn issued(&self) -> usize {
        *self.issued.lock().unwrap()
    }
}

#[async_trait]
impl CredentialProvider for CountingCredentials {
    async fn credential(&self) -> Result<String> {
        if self.fail {
            return Err(ClassBridgeError::Config("API_SEC is required".into()));
        }
        let mut issued = self.issued.lock().unwrap();
        *issued += 1;
        Ok(format!("token-{issued}"))
    }
}

/// In-memory schedule source.
pub struct StaticSource(pub Result<Vec<MeetingRequest>>);

impl ScheduleSource for StaticSource {
    fn load(&self) -> Result<Vec<MeetingRequest>> {
        self.0.clone()
    }
}

/// Sink that keeps written rows in memory, or fails on demand.
#[derive(Default, Clone)]
pub struct MemorySink {
    name: String,
    rows: Arc<Mutex<Option<Vec<ProvisionResult>>>>,
    fail: bool,
}

impl MemorySink {
    pub fn named(name: &str) -> Self {
        Self { name: name.to_string(), ..Self::default() }
    }

    pub fn failing(name: &str) -> Self {
        Self { name: name.to_string(), fail: true, ..Self::default() }
    }

    /// Rows from the last write, or `None` if never written.
    pub fn rows(&self) -> Option<Vec<ProvisionResult>> {
        self.rows.lock().unwrap().clone()
    }
}

impl ReportSink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn destination(&self) -> String {
        format!("memory://{}", self.name)
    }

    fn write(&self, results: &[ProvisionResult]) -> Result<()> {
        if self.fail {
            return Err(ClassBridgeError::Persistence("disk full".into()));
        }
        *self.rows.lock().unwrap() = Some(results.to_vec());
        Ok(())
    }
}
