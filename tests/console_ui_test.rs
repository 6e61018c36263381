//! Terminal UI tests over in-memory buffers.

use std::collections::BTreeSet;
use std::io::Cursor;

use tempfile::TempDir;

use hangman::{
    ConsoleUi, FileStorage, GALLOWS_STAGES, GameConfig, GameService, HangmanError, LevelBudget,
    MenuChoice, Presentation,
};
use hangman_core::{GameEngine, MatchRecord, MatchResult, PlayerStatistics, WordEntry};

type TestUi = ConsoleUi<Cursor<Vec<u8>>, Vec<u8>>;

fn ui_with_input(input: &str) -> TestUi {
    ConsoleUi::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).without_clear_screen()
}

fn output(ui: TestUi) -> String {
    String::from_utf8(ui.into_output()).expect("UTF-8 output")
}

fn engine() -> GameEngine {
    let word = WordEntry::new("кот", "маленькое домашнее животное").expect("Valid word");
    GameEngine::new(word, 7).expect("Valid budget")
}

#[test]
fn test_render_fresh_game() {
    let mut ui = ui_with_input("");
    let session = engine().state();
    ui.render_state(&session, "животные", "лёгкий", &BTreeSet::new());

    let out = output(ui);
    assert!(out.contains("=== Виселица ==="));
    assert!(out.contains("Категория: животные, Уровень: лёгкий"));
    assert!(out.contains("Слово: ***"));
    assert!(out.contains("Осталось попыток: 7"));
    assert!(out.contains("Неверные буквы: (нет)"));
    assert!(out.contains("Подсказка: Ещё не использована"));
    assert!(out.contains(GALLOWS_STAGES[0]));
}

#[test]
fn test_render_after_wrong_guesses_and_hint() {
    let mut game = engine();
    game.guess("я").expect("Guess accepted");
    game.guess("а").expect("Guess accepted");
    game.guess("к").expect("Guess accepted");
    game.get_hint().expect("Hint available");

    let mut ui = ui_with_input("");
    let session = game.state();
    ui.render_state(&session, "животные", "лёгкий", &session.wrong_letters());

    let out = output(ui);
    assert!(out.contains("Слово: к**"));
    assert!(out.contains("Осталось попыток: 5"));
    assert!(out.contains("Неверные буквы: а, я"));
    assert!(out.contains("Подсказка: маленькое домашнее животное"));
    assert!(out.contains(GALLOWS_STAGES[2]));
}

#[test]
fn test_pending_messages_follow_next_board() {
    let mut ui = ui_with_input("");
    ui.show_message("Буква 'к' уже была угадана", true);
    let session = engine().state();
    ui.render_state(&session, "животные", "лёгкий", &BTreeSet::new());
    ui.render_state(&session, "животные", "лёгкий", &BTreeSet::new());

    let out = output(ui);
    assert_eq!(out.matches("Буква 'к' уже была угадана").count(), 2);
}

#[test]
fn test_prompt_input_normalises() {
    let mut ui = ui_with_input("  К \nHINT\n");
    assert_eq!(ui.prompt_input().expect("Letter"), "к");
    assert_eq!(ui.prompt_input().expect("Keyword"), "hint");
}

#[test]
fn test_prompt_input_rejects_malformed() {
    let mut ui = ui_with_input("ab\n1\n\n");
    for _ in 0..3 {
        assert!(matches!(ui.prompt_input(), Err(HangmanError::InvalidInput(_))));
    }
}

#[test]
fn test_prompt_input_eof_is_interrupt() {
    let mut ui = ui_with_input("");
    assert!(matches!(ui.prompt_input(), Err(HangmanError::Interrupted)));
}

#[test]
fn test_category_menu_retries() {
    let categories = vec!["животные".to_string(), "фрукты".to_string()];
    let mut ui = ui_with_input("9\n2\n");
    assert_eq!(
        ui.prompt_category_choice(&categories).expect("Choice"),
        "фрукты"
    );
    assert!(output(ui).contains("Неверный выбор категории"));
}

#[test]
fn test_category_menu_falls_back_to_random() {
    let categories = vec!["животные".to_string(), "фрукты".to_string()];
    let mut ui = ui_with_input("x\n0\n\n");
    let chosen = ui.prompt_category_choice(&categories).expect("Fallback");
    assert!(categories.contains(&chosen));
    assert!(output(ui).contains("выбирается случайная категория"));
}

#[test]
fn test_level_menu_shows_budgets() {
    let levels = vec![
        LevelBudget::new("лёгкий".to_string(), 7, None),
        LevelBudget::new("сложный".to_string(), 1, Some("длинные слова".to_string())),
    ];
    let mut ui = ui_with_input("2\n");
    assert_eq!(ui.prompt_level_choice(&levels).expect("Choice"), "сложный");

    let out = output(ui);
    assert!(out.contains("1. лёгкий (7 попыток)"));
    assert!(out.contains("2. сложный (1 попытка, длинные слова)"));
}

#[test]
fn test_empty_menus_fail() {
    let mut ui = ui_with_input("1\n");
    assert!(ui.prompt_category_choice(&[]).is_err());
    assert!(ui.prompt_level_choice(&[]).is_err());
}

#[test]
fn test_main_menu() {
    let mut ui = ui_with_input("5\n2\n3\n");
    assert_eq!(ui.main_menu().expect("Choice"), MenuChoice::Statistics);
    assert_eq!(ui.main_menu().expect("Choice"), MenuChoice::Exit);
    assert!(matches!(ui.main_menu(), Err(HangmanError::Interrupted)));
}

#[test]
fn test_statistics_view() {
    let mut stats = PlayerStatistics::default();
    stats.unlock("Новичок");
    stats.record_match(MatchRecord::new(
        "123456789".to_string(),
        80,
        false,
        0,
        MatchResult::Win,
    ));
    stats.record_match(MatchRecord::new(
        "987654321".to_string(),
        0,
        true,
        6,
        MatchResult::Loss,
    ));

    let mut ui = ui_with_input("");
    ui.show_statistics(&stats);

    let out = output(ui);
    assert!(out.contains("Игр сыграно: 2"));
    assert!(out.contains("Побед: 1"));
    assert!(out.contains("Процент побед: 50.00%"));
    assert!(out.contains("Общий счёт: 80"));
    assert!(out.contains("- Новичок"));
    assert!(out.contains("Матч ID: 987654321"));
    assert!(out.contains("Подсказка использована: Да"));
    assert!(out.contains("Результат: loss"));
}

#[test]
fn test_statistics_view_empty() {
    let mut ui = ui_with_input("");
    ui.show_statistics(&PlayerStatistics::default());

    let out = output(ui);
    assert!(out.contains("Процент побед: 0.00%"));
    assert!(out.contains("(нет достижений)"));
    assert!(out.contains("(нет матчей)"));
}

#[test]
fn test_pause_reports_closed_input() {
    let mut ui = ui_with_input("\n");
    assert!(ui.pause().is_ok());
    assert!(matches!(ui.pause(), Err(HangmanError::Interrupted)));
}

#[test]
fn test_finished_game_messages_stay_out_of_next_board() {
    const CATALOGUE: &str = r#"
[[levels]]
name = "лёгкий"
attempts = 7

[[categories]]
name = "животные"

[[categories.words]]
level = "лёгкий"
value = "кот"
hint = "маленькое домашнее животное"
"#;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::parse(CATALOGUE).expect("Catalogue should parse");
    let storage = FileStorage::new(config, dir.path().join("stats.json"));
    let ui = ui_with_input("1\n1\nк\nо\nт\n1\n1\nк\nо\nт\n");
    let mut service = GameService::new(storage, ui);

    service.run_session(None, None).expect("First game");
    service.run_session(None, None).expect("Second game");

    let (_, ui) = service.into_parts();
    let out = output(ui);

    let second_game = out
        .rfind("Игра началась")
        .expect("Second game announced");
    let first_result = out.find("Вы выиграли!").expect("First game won");
    assert!(first_result < second_game);
    // Each game's result is printed once, right after its final board.
    assert_eq!(out.matches("Вы выиграли!").count(), 2);
    assert_eq!(out.matches("Очки за игру: 80").count(), 2);
    assert_eq!(out.matches("- Новичок: Первая победа").count(), 1);
}
