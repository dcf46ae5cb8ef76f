//! Adapter session tests - scripted host commands against level files on disk

use tile_words::adapter::{encode_line, Flow, GameSession, Outbound, SessionConfig};
use tile_words::core::MatchEvent;
use tile_words::input::parse_script;
use tile_words::types::{GameMode, LevelType, Outcome};

const WORD_COUNT: &str = r#"{"wordCount":2,"gridSize":{"x":2,"y":2},"gridData":[
    {"tileType":0,"letter":"A"},{"tileType":0,"letter":"T"},
    {"tileType":1,"letter":"N"},{"tileType":0,"letter":"O"}]}"#;

const SCORE_IN_TIME: &str = r#"{"timeSec":3,"totalScore":100,"gridSize":{"x":1,"y":2},"gridData":[
    {"tileType":0,"letter":"A"},{"tileType":0,"letter":"T"}]}"#;

fn write_fixture(dir: &std::path::Path) -> SessionConfig {
    std::fs::write(dir.join("LevelData_WordCount.json"), WORD_COUNT).unwrap();
    std::fs::write(dir.join("LevelData_Score_in_Time.json"), SCORE_IN_TIME).unwrap();
    std::fs::write(dir.join("words.txt"), "at\nto\nno\non\n").unwrap();
    SessionConfig {
        level_dir: dir.to_path_buf(),
        dictionary_path: dir.join("words.txt"),
        ..SessionConfig::default()
    }
}

fn run(session: &mut GameSession, script: &str) -> Vec<Outbound> {
    for command in parse_script(script).unwrap() {
        if session.handle(command).unwrap() == Flow::Quit {
            break;
        }
    }
    session.take_outbound()
}

fn events(messages: &[Outbound]) -> Vec<&MatchEvent> {
    messages
        .iter()
        .filter_map(|m| match m {
            Outbound::Event { event } => Some(event),
            _ => None,
        })
        .collect()
}

#[test]
fn test_scripted_win() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = GameSession::from_config(&write_fixture(dir.path())).unwrap();
    session.take_outbound();

    // AT unblocks N, which makes NO reachable
    let out = run(
        &mut session,
        "# first word\ndown 0 0\nmove 0 1\nup\ndown 1 0\nmove 1 1\nup\nstate\n",
    );
    let events = events(&out);
    assert!(events.contains(&&MatchEvent::TileUnblocked {
        position: tile_words::types::Position::new(1, 0)
    }));
    assert_eq!(events.last(), Some(&&MatchEvent::LevelWon));

    let Some(Outbound::Snapshot { snapshot }) = out.last() else {
        panic!("expected a snapshot last");
    };
    assert_eq!(snapshot.outcome, Outcome::Won);
    assert_eq!(snapshot.formed_words, vec!["AT".to_string(), "NO".to_string()]);
}

#[test]
fn test_level_switch_and_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = GameSession::from_config(&write_fixture(dir.path())).unwrap();
    session.take_outbound();

    let out = run(&mut session, "level scoreWithinTime\ntick 1\ntick 1\ntick 1\ntick 1\n");
    let events = events(&out);
    assert!(matches!(
        events[0],
        MatchEvent::LevelInitialized {
            level_type: LevelType::ScoreWithinTime,
            time_seconds: 3,
            ..
        }
    ));
    assert_eq!(events.last(), Some(&&MatchEvent::LevelLost));
    assert_eq!(session.controller().state().time_remaining, 0.0);

    // Restart brings the clock back
    run(&mut session, "restart\n");
    assert_eq!(session.controller().outcome(), Outcome::InProgress);
    assert_eq!(session.controller().state().time_remaining, 3.0);
}

#[test]
fn test_missing_level_is_an_error_not_a_crash() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = GameSession::from_config(&write_fixture(dir.path())).unwrap();

    let commands = parse_script("level bonus").unwrap();
    let err = session.handle(commands[0]).unwrap_err();
    assert!(err.to_string().contains("LevelData_BugCount"));
    assert_eq!(session.controller().level_type(), Some(LevelType::WordCountGoal));
}

#[test]
fn test_endless_mode_then_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig {
        mode: GameMode::Endless,
        ..write_fixture(dir.path())
    };
    let mut session = GameSession::from_config(&config).unwrap();

    // Nothing is started in endless mode
    assert_eq!(session.controller().level_type(), None);
    let out = run(&mut session, "down 0 0\nmove 0 1\nup\nmode levels\n");
    assert!(matches!(out[0], Outbound::Notice { .. }));
    assert_eq!(session.controller().level_type(), Some(LevelType::WordCountGoal));
    assert_eq!(session.controller().state().words_formed, 0);
}

#[test]
fn test_outbound_lines_are_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = GameSession::from_config(&write_fixture(dir.path())).unwrap();
    let out = run(&mut session, "state\nquit\ndown 0 0\n");

    for message in &out {
        let line = encode_line(message).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value["kind"].is_string());
    }
    let kinds: Vec<String> = out
        .iter()
        .map(|m| serde_json::to_value(m).unwrap()["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["event", "framing", "snapshot"]);
}
