//! Level data tests - JSON parsing, validation, and the shipped levels

use std::path::PathBuf;

use tile_words::adapter::LevelLibrary;
use tile_words::core::{Board, ConfigError, Dictionary, LevelConfig};
use tile_words::types::{LevelType, Position, TileKind};

fn levels_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("levels")
}

#[test]
fn test_parse_column_major_grid() {
    let json = r#"{
        "timeSec": 45,
        "totalScore": 80,
        "gridSize": { "x": 2, "y": 3 },
        "gridData": [
            { "tileType": 0, "letter": "c" },
            { "tileType": 1, "letter": "A" },
            { "tileType": 2, "letter": "T" },
            { "tileType": 0, "letter": "D" },
            { "tileType": 0, "letter": "O" },
            { "tileType": 0, "letter": "G" }
        ]
    }"#;
    let config = LevelConfig::from_json(LevelType::ScoreWithinTime, json).unwrap();
    assert_eq!(config.time_seconds, 45);
    assert_eq!(config.score_target, 80);
    assert_eq!(config.word_count_target, 0);

    let board = Board::from_config(&config);
    assert_eq!(board.rows(), vec!["TG".to_string(), "AO".to_string(), "CD".to_string()]);
    // Lowercase letters are normalized
    assert_eq!(board.tile_at(0, 0).unwrap().letter(), 'C');
    assert_eq!(board.tile_at(0, 1).unwrap().kind(), TileKind::Blocked);
    assert_eq!(board.tile(Position::new(0, 2)).unwrap().kind(), TileKind::Bonus);
}

#[test]
fn test_negative_time_means_untimed() {
    let json = r#"{"timeSec":-5,"wordCount":2,"gridSize":{"x":1,"y":1},"gridData":[{"tileType":0,"letter":"A"}]}"#;
    let config = LevelConfig::from_json(LevelType::WordsWithinTime, json).unwrap();
    assert_eq!(config.time_seconds, 0);
    assert!(!config.is_timed());
}

#[test]
fn test_zero_sized_grid() {
    let json = r#"{"gridSize":{"x":0,"y":0},"gridData":[]}"#;
    let config = LevelConfig::from_json(LevelType::WordCountGoal, json).unwrap();
    assert!(Board::from_config(&config).tiles().is_empty());
}

#[test]
fn test_invalid_level_data() {
    let parse = |json: &str| LevelConfig::from_json(LevelType::WordCountGoal, json).unwrap_err();

    assert!(matches!(parse("{not json"), ConfigError::Json(_)));
    assert!(matches!(
        parse(r#"{"gridSize":{"x":-1,"y":2},"gridData":[]}"#),
        ConfigError::NegativeDimension { axis: 'x', value: -1 }
    ));
    assert!(matches!(
        parse(r#"{"gridSize":{"x":2,"y":2},"gridData":[{"tileType":0,"letter":"A"}]}"#),
        ConfigError::GridDataLength { expected: 4, actual: 1, .. }
    ));
    assert!(matches!(
        parse(r#"{"gridSize":{"x":1,"y":1},"gridData":[{"tileType":7,"letter":"A"}]}"#),
        ConfigError::UnknownTileType { index: 0, code: 7 }
    ));
    assert!(matches!(
        parse(r#"{"gridSize":{"x":1,"y":1},"gridData":[{"tileType":0,"letter":""}]}"#),
        ConfigError::EmptyLetter { index: 0 }
    ));
    assert!(matches!(
        parse(r#"{"gridSize":{"x":1,"y":1},"gridData":[{"tileType":0,"letter":"7"}]}"#),
        ConfigError::InvalidLetter { index: 0, letter: '7' }
    ));
    assert!(matches!(
        parse(r#"{"wordCount":-2,"gridSize":{"x":1,"y":1},"gridData":[{"tileType":0,"letter":"A"}]}"#),
        ConfigError::NegativeValue { field: "wordCount", value: -2 }
    ));
}

#[test]
fn test_shipped_levels_load() {
    let library = LevelLibrary::from_dir(levels_dir()).unwrap();
    for level_type in LevelType::ALL {
        let config = library.load(level_type).unwrap();
        assert_eq!(config.level_type, level_type);
        assert!(!config.grid_size.is_empty(), "{} has an empty grid", level_type.data_id());
        if level_type.is_timed() {
            assert!(config.is_timed(), "{} should count down", level_type.data_id());
        }
    }
}

#[test]
fn test_shipped_word_list_loads() {
    let dictionary = Dictionary::load(levels_dir().join("wordList.txt")).unwrap();
    assert!(dictionary.len() > 100);
    assert!(dictionary.contains("cat"));
    assert!(dictionary.contains("BUG"));
    assert!(!dictionary.contains("QX"));
}
