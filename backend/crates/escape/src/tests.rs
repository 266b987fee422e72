//! Unit tests for escape crate

#[cfg(test)]
mod support {
    use crate::application::config::EscapeConfig;
    use crate::application::room::EscapeRoom;
    use crate::domain::catalog::PuzzleId;
    use crate::domain::repository::GateApi;
    use crate::domain::submission::ScoreSubmission;
    use crate::error::{EscapeError, EscapeResult};
    use crate::infra::progress_store::KvProgressRepository;
    use platform::clock::ManualClock;
    use platform::storage::MemoryStore;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Gate double: knows the standard code table and records submissions
    #[derive(Clone, Default)]
    pub struct FakeGate {
        pub submissions: Arc<Mutex<Vec<ScoreSubmission>>>,
        pub reject_next: Arc<AtomicBool>,
        pub hold: Option<(Arc<Notify>, Arc<Notify>)>,
    }

    impl FakeGate {
        /// Submissions wait until released; `entered` fires when one arrives
        pub fn holding() -> (Self, Arc<Notify>, Arc<Notify>) {
            let entered = Arc::new(Notify::new());
            let release = Arc::new(Notify::new());
            let gate = Self {
                hold: Some((entered.clone(), release.clone())),
                ..Self::default()
            };
            (gate, entered, release)
        }

        pub fn submitted(&self) -> Vec<ScoreSubmission> {
            self.submissions.lock().unwrap().clone()
        }
    }

    impl GateApi for FakeGate {
        async fn validate_code(&self, code: &str) -> EscapeResult<String> {
            let code = code.trim().to_uppercase();
            if code == "CALCFAIL" {
                return Ok("/broken-calc".to_string());
            }
            PuzzleId::ALL
                .windows(2)
                .find(|pair| pair[0].unlock_code() == Some(code.as_str()))
                .map(|pair| pair[1].route())
                .ok_or(EscapeError::InvalidAccessCode(code))
        }

        async fn submit_score(&self, submission: &ScoreSubmission) -> EscapeResult<String> {
            if let Some((entered, release)) = &self.hold {
                entered.notify_one();
                release.notified().await;
            }
            if self.reject_next.swap(false, Ordering::SeqCst) {
                return Err(EscapeError::Rejected("Missing submission data.".to_string()));
            }
            self.submissions.lock().unwrap().push(submission.clone());
            Ok("Completion recorded!".to_string())
        }
    }

    pub type TestRoom = EscapeRoom<KvProgressRepository<MemoryStore>, FakeGate>;

    /// Room whose background countdown never fires during a test; tests tick
    /// by hand
    pub fn room_with(gate: FakeGate, max_session: Duration) -> (TestRoom, MemoryStore) {
        let config = EscapeConfig::default()
            .with_max_session(max_session)
            .with_tick_interval(Duration::from_secs(3600));
        let store = MemoryStore::new();
        let progress = KvProgressRepository::new(store.clone(), &config);
        let room = EscapeRoom::with_clock(config, progress, gate, Arc::new(ManualClock::default()));
        (room, store)
    }

    pub fn room() -> (TestRoom, MemoryStore) {
        room_with(FakeGate::default(), Duration::from_secs(15 * 60))
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = EscapeConfig::default();

        assert_eq!(config.max_session, Duration::from_secs(900));
        assert_eq!(config.max_seconds(), 900);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.critical_seconds(), 60);
        assert_eq!(config.progress_key_prefix, "riddlescapeProgress_");
        assert_eq!(config.anonymous_id_key, "riddlescapeUserId");
        assert_eq!(config.anonymous_id_len, 7);
        assert_eq!(config.catalog.len(), 5);
    }

    #[test]
    fn test_development_config() {
        let config = EscapeConfig::development();
        assert_eq!(config.max_seconds(), 300);
        assert!(config.api_base_url.starts_with("http://127.0.0.1"));
    }

    #[test]
    fn test_base_url_trimmed() {
        let config = EscapeConfig::default().with_api_base_url("http://example.test/api/");
        assert_eq!(config.api_base_url, "http://example.test/api");
    }
}

#[cfg(test)]
mod session_controller_tests {
    use super::support::*;
    use crate::application::room::View;
    use crate::domain::catalog::PuzzleId;
    use crate::domain::progress::Score;
    use crate::domain::session::{EndReason, TickOutcome};
    use crate::error::EscapeError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_start_rejects_blank_name() {
        let (room, _) = room();
        assert!(matches!(
            room.start("  ").await,
            Err(EscapeError::EmptyParticipantName)
        ));
        assert!(room.snapshot().await.participant.is_none());
    }

    #[tokio::test]
    async fn test_start_clears_previous_completion() {
        let (room, _) = room();
        room.start("Alice").await.unwrap();
        room.enter_puzzle(PuzzleId::BrokenCalc).await.unwrap();
        room.complete_puzzle(PuzzleId::BrokenCalc, Score::FULL)
            .await
            .unwrap();
        assert_eq!(room.snapshot().await.solved, 1);

        room.start("Alice").await.unwrap();
        let snapshot = room.snapshot().await;
        assert_eq!(snapshot.solved, 0);
        assert_eq!(snapshot.remaining_seconds, 900);
        assert!(snapshot.running);
    }

    #[tokio::test]
    async fn test_last_tick_ends_session_and_goes_home() {
        let (room, _) = room_with(FakeGate::default(), Duration::from_secs(2));
        let run = room.start("Alice").await.unwrap();
        room.enter_puzzle(PuzzleId::PaintedCube).await.unwrap();
        assert_eq!(room.view(), View::Puzzle(PuzzleId::PaintedCube));

        assert_eq!(room.tick(run).await, TickOutcome::Running { remaining: 1 });
        assert_eq!(room.tick(run).await, TickOutcome::Expired);

        let snapshot = room.snapshot().await;
        assert_eq!(snapshot.ended, Some(EndReason::TimeExpired));
        assert!(!snapshot.running);
        assert_eq!(snapshot.remaining_seconds, 0);
        assert_eq!(room.view(), View::Home);

        assert_eq!(room.tick(run).await, TickOutcome::Ignored);
        assert_eq!(room.snapshot().await.remaining_seconds, 0);
    }

    #[tokio::test]
    async fn test_stale_run_cannot_tick_new_session() {
        let (room, _) = room();
        let first = room.start("Alice").await.unwrap();
        let second = room.start("Bob").await.unwrap();

        assert_eq!(room.tick(first).await, TickOutcome::Ignored);
        assert_eq!(room.snapshot().await.remaining_seconds, 900);
        assert_eq!(
            room.tick(second).await,
            TickOutcome::Running { remaining: 899 }
        );
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let (room, _) = room();
        let run = room.start("Alice").await.unwrap();
        room.reset().await;

        let snapshot = room.snapshot().await;
        assert!(snapshot.participant.is_none());
        assert!(!snapshot.running);
        assert_eq!(room.tick(run).await, TickOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_background_countdown_expires_session() {
        let config = crate::application::config::EscapeConfig::default()
            .with_max_session(Duration::from_secs(2))
            .with_tick_interval(Duration::from_millis(10));
        let progress = crate::infra::progress_store::KvProgressRepository::new(
            platform::storage::MemoryStore::new(),
            &config,
        );
        let room = crate::application::room::EscapeRoom::new(config, progress, FakeGate::default());
        room.start("Alice").await.unwrap();

        tokio::time::timeout(Duration::from_secs(5), async {
            while !room.snapshot().await.is_game_over() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();

        let snapshot = room.snapshot().await;
        assert_eq!(snapshot.ended, Some(EndReason::TimeExpired));
        assert_eq!(snapshot.elapsed, "00:02");
    }

    #[tokio::test]
    async fn test_critical_flag() {
        let (room, _) = room_with(FakeGate::default(), Duration::from_secs(61));
        let run = room.start("Alice").await.unwrap();
        assert!(!room.snapshot().await.critical);

        room.tick(run).await;
        let snapshot = room.snapshot().await;
        assert!(snapshot.critical);
        assert_eq!(snapshot.remaining, "01:00");
    }
}

#[cfg(test)]
mod coordinator_tests {
    use super::support::*;
    use crate::application::room::View;
    use crate::domain::catalog::PuzzleId;
    use crate::domain::progress::{ProgressRecord, Score};
    use crate::domain::session::{EndReason, SolveOutcome};
    use crate::error::EscapeError;
    use platform::storage::KeyValueStore;

    #[tokio::test]
    async fn test_complete_twice_counts_once() {
        let (room, _) = room();
        room.start("Alice").await.unwrap();

        room.complete_puzzle(PuzzleId::PaintedCube, Score::FULL)
            .await
            .unwrap();
        let once = room.progress_board().await.unwrap().total_score();

        assert_eq!(
            room.complete_puzzle(PuzzleId::PaintedCube, Score::FULL)
                .await
                .unwrap(),
            SolveOutcome::AlreadySolved
        );
        let twice = room.progress_board().await.unwrap().total_score();

        assert_eq!(once, 100);
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_enter_resets_stored_record() {
        let (room, store) = room();
        room.start("Alice").await.unwrap();
        room.complete_puzzle(PuzzleId::BrokenCalc, Score::FULL)
            .await
            .unwrap();

        room.enter_puzzle(PuzzleId::BrokenCalc).await.unwrap();

        let board = room.progress_board().await.unwrap();
        assert_eq!(
            board.get(PuzzleId::BrokenCalc),
            ProgressRecord::fresh(PuzzleId::BrokenCalc)
        );
        let raw = store.get("riddlescapeProgress_Alice").await.unwrap().unwrap();
        assert!(raw.contains(r#""broken-calc":{"title":"Broken Calculator","progress":0,"score":0}"#));
    }

    #[tokio::test]
    async fn test_enter_keeps_foreign_stored_entries() {
        let (room, store) = room();
        store
            .set(
                "riddlescapeProgress_Alice",
                r#"{"nine-dot":{"title":"Nine Dot","progress":100,"score":100}}"#,
            )
            .await
            .unwrap();
        room.start("Alice").await.unwrap();

        room.enter_puzzle(PuzzleId::BrokenCalc).await.unwrap();

        let raw = store.get("riddlescapeProgress_Alice").await.unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored["nine-dot"]["score"], 100);
        assert_eq!(stored["broken-calc"]["progress"], 0);
    }

    #[tokio::test]
    async fn test_enter_without_session_goes_home_untouched() {
        let (room, store) = room();

        let err = room.enter_puzzle(PuzzleId::MirrorTyping).await.err().unwrap();
        assert!(matches!(err, EscapeError::NoActiveSession));
        assert_eq!(room.view(), View::Home);
        assert!(store.get("riddlescapeProgress_").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_complete_without_session_is_rejected() {
        let (room, _) = room();
        assert!(matches!(
            room.complete_puzzle(PuzzleId::BrokenCalc, Score::FULL).await,
            Err(EscapeError::NoActiveSession)
        ));
    }

    #[tokio::test]
    async fn test_all_solved_in_any_order_ends_with_time_left() {
        let (room, _) = room();
        let run = room.start("Alice").await.unwrap();
        for _ in 0..75 {
            room.tick(run).await;
        }

        let order = [
            PuzzleId::SeatingArrangement,
            PuzzleId::BrokenCalc,
            PuzzleId::MirrorTyping,
            PuzzleId::InvisibleMaze,
            PuzzleId::PaintedCube,
        ];
        let mut last = None;
        for id in order {
            room.enter_puzzle(id).await.unwrap();
            last = Some(room.complete_puzzle(id, Score::FULL).await.unwrap());
        }

        assert_eq!(last, Some(SolveOutcome::AllSolved));
        let snapshot = room.snapshot().await;
        assert_eq!(snapshot.ended, Some(EndReason::AllPuzzlesSolved));
        assert_eq!(snapshot.remaining_seconds, 825);
        assert_eq!(snapshot.elapsed, "01:15");

        room.tick(run).await;
        assert_eq!(room.snapshot().await.elapsed, "01:15");
        assert!(matches!(
            room.enter_puzzle(PuzzleId::BrokenCalc).await,
            Err(EscapeError::SessionEnded)
        ));
        assert_eq!(room.progress_board().await.unwrap().total_score(), 500);
    }

    #[tokio::test]
    async fn test_context_reports_completion() {
        let (room, _) = room();
        room.start("Alice").await.unwrap();

        let ctx = room.enter_puzzle(PuzzleId::InvisibleMaze).await.unwrap();
        assert_eq!(ctx.puzzle(), PuzzleId::InvisibleMaze);
        assert_eq!(ctx.participant().await.as_deref(), Some("Alice"));
        assert!(!ctx.is_game_over().await);

        assert_eq!(ctx.complete(Score::FULL).await.unwrap(), SolveOutcome::Solved);
        let board = room.progress_board().await.unwrap();
        assert_eq!(board.get(PuzzleId::InvisibleMaze).score, Score::FULL);
    }

    #[tokio::test]
    async fn test_anonymous_identity_before_start() {
        let (room, store) = room();
        let identity = room.identity().await.unwrap();

        assert_eq!(identity.len(), 7);
        assert_eq!(
            store.get("riddlescapeUserId").await.unwrap(),
            Some(identity.clone())
        );
        assert_eq!(room.identity().await.unwrap(), identity);

        room.start("Alice").await.unwrap();
        assert_eq!(room.identity().await.unwrap(), "Alice");
    }
}

#[cfg(test)]
mod submission_tests {
    use super::support::*;
    use crate::application::room::View;
    use crate::domain::catalog::PuzzleId;
    use crate::domain::progress::Score;
    use crate::domain::session::TickOutcome;
    use crate::error::EscapeError;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unlock_enters_next_puzzle() {
        let (room, _) = room();
        room.start("Alice").await.unwrap();

        let ctx = room.unlock(" beta ").await.unwrap();
        assert_eq!(ctx.puzzle(), PuzzleId::PaintedCube);
        assert_eq!(room.view(), View::Puzzle(PuzzleId::PaintedCube));
    }

    #[tokio::test]
    async fn test_unlock_errors() {
        let (room, _) = room();
        assert!(matches!(
            room.unlock("   ").await,
            Err(EscapeError::EmptyAccessCode)
        ));
        assert!(matches!(
            room.unlock("BETA").await,
            Err(EscapeError::NoActiveSession)
        ));

        room.start("Alice").await.unwrap();
        assert!(matches!(
            room.unlock("OPEN-SESAME").await,
            Err(EscapeError::InvalidAccessCode(_))
        ));
        assert_eq!(room.view(), View::Home);
    }

    #[tokio::test]
    async fn test_submit_requires_ended_session() {
        let (room, _) = room();
        assert!(matches!(
            room.submit_score().await,
            Err(EscapeError::NoActiveSession)
        ));

        room.start("Alice").await.unwrap();
        assert!(matches!(
            room.submit_score().await,
            Err(EscapeError::SessionInProgress)
        ));
    }

    #[tokio::test]
    async fn test_submit_sends_total_and_resets() {
        let gate = FakeGate::default();
        let (room, _) = room_with(gate.clone(), Duration::from_secs(3));
        let run = room.start("Alice").await.unwrap();
        room.complete_puzzle(PuzzleId::BrokenCalc, Score::FULL)
            .await
            .unwrap();
        room.complete_puzzle(PuzzleId::PaintedCube, Score::FULL)
            .await
            .unwrap();
        while room.tick(run).await != TickOutcome::Expired {}

        let message = room.submit_score().await.unwrap();

        assert_eq!(message, "Completion recorded!");
        let submitted = gate.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].username, "Alice");
        assert_eq!(submitted[0].total_time, "00:03");
        assert_eq!(submitted[0].final_score, 200);
        assert!(room.snapshot().await.participant.is_none());
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_session() {
        let gate = FakeGate::default();
        gate.reject_next.store(true, Ordering::SeqCst);
        let (room, _) = room_with(gate.clone(), Duration::from_secs(1));
        let run = room.start("Alice").await.unwrap();
        room.tick(run).await;

        assert!(matches!(
            room.submit_score().await,
            Err(EscapeError::Rejected(_))
        ));
        assert!(room.snapshot().await.is_game_over());

        room.submit_score().await.unwrap();
        assert_eq!(gate.submitted().len(), 1);
    }

    #[tokio::test]
    async fn test_second_submission_while_in_flight() {
        let (gate, entered, release) = FakeGate::holding();
        let (room, _) = room_with(gate.clone(), Duration::from_secs(1));
        let run = room.start("Alice").await.unwrap();
        room.tick(run).await;

        let first = tokio::spawn({
            let room = room.clone();
            async move { room.submit_score().await }
        });
        entered.notified().await;

        assert!(matches!(
            room.submit_score().await,
            Err(EscapeError::SubmissionInFlight)
        ));

        release.notify_one();
        first.await.unwrap().unwrap();
        assert_eq!(gate.submitted().len(), 1);
    }

    #[tokio::test]
    async fn test_run_started_during_submission_survives() {
        let (gate, entered, release) = FakeGate::holding();
        let (room, _) = room_with(gate.clone(), Duration::from_secs(1));
        let run = room.start("Alice").await.unwrap();
        room.tick(run).await;

        let submission = tokio::spawn({
            let room = room.clone();
            async move { room.submit_score().await }
        });
        entered.notified().await;
        let next = room.start("Bob").await.unwrap();

        release.notify_one();
        submission.await.unwrap().unwrap();

        let snapshot = room.snapshot().await;
        assert_eq!(snapshot.participant.as_deref(), Some("Bob"));
        assert_eq!(snapshot.run_id, next);
        assert!(!room.reset_if(run).await);
        assert_eq!(room.snapshot().await.participant.as_deref(), Some("Bob"));
        assert!(room.reset_if(next).await);
        assert!(room.snapshot().await.participant.is_none());
    }
}
