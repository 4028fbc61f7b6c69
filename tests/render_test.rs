//! Rendering tests: session state printed the way the menu shows it.

use tetris_reserve::core::{ScriptedGenerator, Session};
use tetris_reserve::term::{state_lines, TextRenderer};
use tetris_reserve::types::{MenuChoice, PieceKind};

fn session() -> Session<ScriptedGenerator> {
    Session::new(ScriptedGenerator::new([PieceKind::T, PieceKind::O]))
}

#[test]
fn state_lines_list_queue_front_first_and_reserve_top_first() {
    let mut s = session();
    s.apply(MenuChoice::Reserve).unwrap();
    s.apply(MenuChoice::Reserve).unwrap();

    let [queue, reserve] = state_lines(&s.snapshot());
    assert_eq!(queue, "Queue: [T, 3] [O, 4] [T, 5] [O, 6] [T, 7]");
    assert_eq!(reserve, "Reserve: [O, 2] [T, 1]");
}

#[test]
fn renderer_matches_state_lines_without_color() {
    let mut s = session();
    s.apply(MenuChoice::Reserve).unwrap();
    let snap = s.snapshot();

    let mut r = TextRenderer::new(Vec::new(), false);
    r.draw_state(&snap).unwrap();
    r.flush().unwrap();
    let out = String::from_utf8(r.into_inner()).unwrap();

    let [queue, reserve] = state_lines(&snap);
    assert_eq!(out, format!("{}\n{}\n", queue, reserve));
}

#[test]
fn outcome_messages_name_the_piece() {
    let mut s = session();
    let outcome = s.apply(MenuChoice::Play).unwrap();

    let mut r = TextRenderer::new(Vec::new(), false);
    r.draw_outcome(&outcome).unwrap();
    r.flush().unwrap();

    assert_eq!(
        String::from_utf8(r.into_inner()).unwrap(),
        "Played piece: [T, 1]\n"
    );
}
