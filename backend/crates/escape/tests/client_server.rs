//! End-to-end: the client core against a real gate server on a loopback port.

use axum::Router;
use escape::domain::repository::GateApi;
use escape::puzzles::{BrokenCalculator, Puzzle};
use escape::{
    EndReason, EscapeConfig, EscapeError, EscapeRoom, HttpGateClient, KvProgressRepository,
    PuzzleId, Score, SolveOutcome,
};
use gate::{GateConfig, InMemoryGateRepository, gate_router};
use platform::storage::FileStore;
use std::net::SocketAddr;
use std::time::Duration;

async fn spawn_gate() -> (String, InMemoryGateRepository) {
    let config = GateConfig::default();
    let repo = InMemoryGateRepository::new(config.code_entries()).unwrap();
    let app = Router::new().nest("/api", gate_router(repo.clone(), config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    (format!("http://{addr}/api"), repo)
}

fn config(base_url: &str) -> EscapeConfig {
    EscapeConfig::default()
        .with_api_base_url(base_url)
        .with_tick_interval(Duration::from_secs(3600))
}

#[tokio::test]
async fn full_run_is_recorded_on_the_ledger() {
    let (base_url, ledger) = spawn_gate().await;
    let dir = tempfile::tempdir().unwrap();
    let config = config(&base_url);
    let progress = KvProgressRepository::new(FileStore::new(dir.path().join("store.json")), &config);
    let room = EscapeRoom::new(config.clone(), progress, HttpGateClient::new(&config));

    let run = room.start("Alice").await.unwrap();
    for _ in 0..42 {
        room.tick(run).await;
    }

    // Solve the calculator for real, then follow the printed codes.
    let ctx = room.unlock("calcfail").await.unwrap();
    let mut calc = BrokenCalculator::new();
    for key in "5*5+12+5".chars() {
        calc.press(key).unwrap();
    }
    assert!(calc.calculate().unwrap().is_solved());
    assert_eq!(ctx.complete(Score::FULL).await.unwrap(), SolveOutcome::Solved);

    let mut code = calc.revealed_code().map(str::to_string);
    let mut last = None;
    while let Some(next) = code {
        let ctx = room.unlock(&next).await.unwrap();
        last = Some(ctx.complete(Score::FULL).await.unwrap());
        code = ctx.puzzle().unlock_code().map(str::to_string);
    }

    assert_eq!(last, Some(SolveOutcome::AllSolved));
    let snapshot = room.snapshot().await;
    assert_eq!(snapshot.ended, Some(EndReason::AllPuzzlesSolved));
    assert_eq!(snapshot.elapsed, "00:42");

    let message = room.submit_score().await.unwrap();
    assert_eq!(message, "Completion recorded!");
    assert!(room.snapshot().await.participant.is_none());

    assert_eq!(ledger.record_count().await, 1);
}

#[tokio::test]
async fn wrong_code_is_reported_and_nothing_changes() {
    let (base_url, _) = spawn_gate().await;
    let config = config(&base_url);
    let progress = KvProgressRepository::new(platform::storage::MemoryStore::new(), &config);
    let room = EscapeRoom::new(config.clone(), progress, HttpGateClient::new(&config));
    room.start("Bob").await.unwrap();

    let err = room.unlock("NOPE").await.err().unwrap();
    assert!(matches!(err, EscapeError::InvalidAccessCode(_)));
    assert_eq!(err.to_string(), "Invalid Access Code.");
    assert_eq!(room.view(), escape::View::Home);
}

#[tokio::test]
async fn unreachable_server_keeps_state_for_retry() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = config(&format!("http://{addr}/api"))
        .with_max_session(Duration::from_secs(1));
    let progress = KvProgressRepository::new(platform::storage::MemoryStore::new(), &config);
    let room = EscapeRoom::new(config.clone(), progress, HttpGateClient::new(&config));
    let run = room.start("Carol").await.unwrap();
    room.tick(run).await;

    let err = room.submit_score().await.unwrap_err();
    assert!(err.is_retryable());

    let snapshot = room.snapshot().await;
    assert_eq!(snapshot.participant.as_deref(), Some("Carol"));
    assert_eq!(snapshot.ended, Some(EndReason::TimeExpired));
}

#[tokio::test]
async fn puzzle_ids_match_server_routes() {
    let (base_url, _) = spawn_gate().await;
    let client = HttpGateClient::new(&config(&base_url));

    let route = client.validate_code("JET2MAZE").await.unwrap();
    assert_eq!(PuzzleId::from_route(&route), Some(PuzzleId::InvisibleMaze));
}
