//! Session State Machine
//!
//! A session is one timed attempt by one participant:
//!
//! ```text
//! Idle --start--> Running --tick to 0--> Ended(TimeExpired)
//!                    |
//!                    +--last puzzle solved--> Ended(AllPuzzlesSolved)
//! any --reset--> Idle
//! ```
//!
//! This type holds no timers. The controller owns the tick task and feeds
//! ticks in, tagged with the run they belong to.

use crate::domain::catalog::{Catalog, PuzzleId};
use crate::domain::completion::CompletionSet;
use crate::error::{EscapeError, EscapeResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Identifies one started session; tick sources carry it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RunId(u64);

impl RunId {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    TimeExpired,
    AllPuzzlesSolved,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale run, idle or already ended
    Ignored,
    Running { remaining: u32 },
    /// This tick ran the clock out
    Expired,
}

/// What marking a puzzle solved did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved,
    AlreadySolved,
    /// This was the last unsolved puzzle; the session has ended
    AllSolved,
}

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    max_seconds: u32,
    participant: Option<String>,
    remaining_seconds: u32,
    running: bool,
    ended: Option<EndReason>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    frozen_elapsed: Option<u32>,
    run_id: RunId,
    completion: CompletionSet,
}

impl Session {
    pub fn new(catalog: Catalog, max_seconds: u32) -> Self {
        let completion = CompletionSet::new(&catalog);
        Self {
            catalog,
            max_seconds,
            participant: None,
            remaining_seconds: max_seconds,
            running: false,
            ended: None,
            started_at: None,
            ended_at: None,
            frozen_elapsed: None,
            run_id: RunId::default(),
            completion,
        }
    }

    /// Begin a fresh run, discarding whatever the previous one left behind
    pub fn start(&mut self, participant: &str, now: DateTime<Utc>) -> EscapeResult<RunId> {
        let name = participant.trim();
        if name.is_empty() {
            return Err(EscapeError::EmptyParticipantName);
        }

        self.participant = Some(name.to_string());
        self.completion = CompletionSet::new(&self.catalog);
        self.remaining_seconds = self.max_seconds;
        self.running = true;
        self.ended = None;
        self.started_at = Some(now);
        self.ended_at = None;
        self.frozen_elapsed = None;
        self.run_id = self.run_id.next();
        Ok(self.run_id)
    }

    pub fn tick(&mut self, run_id: RunId, now: DateTime<Utc>) -> TickOutcome {
        if run_id != self.run_id || !self.running || self.ended.is_some() {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.end(EndReason::TimeExpired, now);
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining: self.remaining_seconds,
            }
        }
    }

    pub fn mark_solved(&mut self, id: PuzzleId, now: DateTime<Utc>) -> EscapeResult<SolveOutcome> {
        self.ensure_active()?;

        if !self.completion.mark(id)? {
            return Ok(SolveOutcome::AlreadySolved);
        }
        if self.completion.all_solved() {
            self.end(EndReason::AllPuzzlesSolved, now);
            return Ok(SolveOutcome::AllSolved);
        }
        Ok(SolveOutcome::Solved)
    }

    /// Back to idle; ticks from the old run are ignored from now on
    pub fn reset(&mut self) {
        let run_id = self.run_id.next();
        *self = Self::new(self.catalog.clone(), self.max_seconds);
        self.run_id = run_id;
    }

    /// `Ok` while a participant is playing and time remains
    pub fn ensure_active(&self) -> EscapeResult<()> {
        if self.participant.is_none() {
            return Err(EscapeError::NoActiveSession);
        }
        if self.ended.is_some() {
            return Err(EscapeError::SessionEnded);
        }
        Ok(())
    }

    fn end(&mut self, reason: EndReason, now: DateTime<Utc>) {
        self.frozen_elapsed = Some(self.max_seconds - self.remaining_seconds);
        self.ended = Some(reason);
        self.ended_at = Some(now);
        self.running = false;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn participant(&self) -> Option<&str> {
        self.participant.as_deref()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn max_seconds(&self) -> u32 {
        self.max_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_ended(&self) -> bool {
        self.ended.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.ended
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn completion(&self) -> &CompletionSet {
        &self.completion
    }

    /// Frozen once the session ends
    pub fn elapsed_seconds(&self) -> u32 {
        self.frozen_elapsed
            .unwrap_or(self.max_seconds - self.remaining_seconds)
    }

    pub fn elapsed_formatted(&self) -> String {
        format_mm_ss(self.elapsed_seconds())
    }

    pub fn remaining_formatted(&self) -> String {
        format_mm_ss(self.remaining_seconds)
    }

    pub fn is_critical(&self, threshold_seconds: u32) -> bool {
        self.running && self.remaining_seconds <= threshold_seconds
    }

    pub fn snapshot(&self, critical_threshold_seconds: u32) -> SessionSnapshot {
        SessionSnapshot {
            participant: self.participant.clone(),
            remaining_seconds: self.remaining_seconds,
            remaining: self.remaining_formatted(),
            elapsed: self.elapsed_formatted(),
            running: self.running,
            ended: self.ended,
            critical: self.is_critical(critical_threshold_seconds),
            solved: self.completion.solved_count(),
            total: self.completion.len(),
            run_id: self.run_id,
        }
    }
}

/// Read-only copy of the session handed to views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub participant: Option<String>,
    pub remaining_seconds: u32,
    pub remaining: String,
    pub elapsed: String,
    pub running: bool,
    pub ended: Option<EndReason>,
    pub critical: bool,
    pub solved: usize,
    pub total: usize,
    pub run_id: RunId,
}

impl SessionSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.ended.is_some()
    }
}

/// `MM:SS`, minutes not capped at 59
pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
