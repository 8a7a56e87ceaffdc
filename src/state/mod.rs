//! Persistent process-wide state: the running clock session and the pay
//! anchor. A tiny JSON file beside the config; survives restarts.
//!
//! All mutation goes through the named operations below; nothing else
//! writes these fields.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FMT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateData {
    /// Start of the running session, local wall-clock. Absent when idle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active_session: Option<String>,
    /// The known Friday payday anchoring the pay-period lattice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pay_anchor: Option<String>,
}

#[derive(Debug)]
pub struct AppState {
    path: PathBuf,
    data: StateData,
}

impl AppState {
    /// Load state from disk. A missing or unreadable file means a fresh
    /// Idle state, never an error on startup.
    pub fn load(path: &Path) -> Self {
        let data = fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            data,
        }
    }

    fn save(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| AppError::State(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    // ---------------------------
    // Clock session
    // ---------------------------

    pub fn session_start(&self) -> Option<NaiveDateTime> {
        let raw = self.data.active_session.as_deref()?;
        NaiveDateTime::parse_from_str(raw, SESSION_FMT).ok()
    }

    pub fn start_session(&mut self, started: NaiveDateTime) -> AppResult<()> {
        self.data.active_session = Some(started.format(SESSION_FMT).to_string());
        self.save()
    }

    pub fn clear_session(&mut self) -> AppResult<()> {
        self.data.active_session = None;
        self.save()
    }

    // ---------------------------
    // Pay anchor
    // ---------------------------

    pub fn anchor(&self) -> Option<NaiveDate> {
        let raw = self.data.pay_anchor.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Store the anchor. Friday validation happens up front in
    /// `PayLattice::new`; this only persists an already-accepted date.
    pub fn set_anchor(&mut self, anchor: NaiveDate) -> AppResult<()> {
        self.data.pay_anchor = Some(anchor.format("%Y-%m-%d").to_string());
        self.save()
    }

    pub fn clear_anchor(&mut self) -> AppResult<()> {
        self.data.pay_anchor = None;
        self.save()
    }
}
