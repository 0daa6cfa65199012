//! End-to-end checks of the public API with small in-memory corpora

use wordle_assist::commands::{HintConfig, run_hint};
use wordle_assist::core::{Board, Feedback, LetterSet, WORD_LEN, Word};
use wordle_assist::solver::{CandidateStore, Knowledge, SolveError, Solver};

const ANSWERS: &[&str] = &[
    "crane", "crate", "craze", "grate", "irate", "slate", "plate", "blitz", "pious", "trace",
    "react", "caret", "shine", "spine", "swine", "whine",
];

fn answers() -> CandidateStore {
    CandidateStore::from_words(ANSWERS)
}

fn guesses() -> CandidateStore {
    CandidateStore::from_words(ANSWERS.iter().copied().chain(["stomp", "wight", "nymph"]))
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn crane_against_crate_leaves_crate_and_craze() {
    let answers = answers();
    let guesses = guesses();
    let solver = Solver::new(&answers, &guesses);

    let mut knowledge = Knowledge::new();
    let guess = word("crane");
    knowledge.record(guess, &Feedback::simulate(&guess, &word("crate")));

    let board = knowledge.board();
    assert_eq!(board.pattern().to_string(), "CRA.E");
    assert!(board.excluded().contains(b'N'));

    let suggestion = solver.suggest(&board, 3).unwrap();
    let left: Vec<&str> = suggestion.remaining().words().iter().map(Word::text).collect();
    assert_eq!(left, ["CRATE", "CRAZE"]);

    // two candidates left: guess them alphabetically at score 1/2
    assert!(suggestion.is_endgame());
    assert_eq!(suggestion.best().word.text(), "CRATE");
    assert!((suggestion.best().score - 0.5).abs() < 1e-12);
}

#[test]
fn every_answer_is_solved() {
    let answers = answers();
    let guesses = guesses();

    for hard_mode in [false, true] {
        let solver = Solver::new(&answers, &guesses).with_hard_mode(hard_mode);
        for target in answers.words() {
            let solution = solver.solve(target).unwrap();
            assert_eq!(solution.guesses().last(), Some(target));
            assert!(solution.marks().last().unwrap().is_solved());
        }
    }
}

#[test]
fn solving_never_prunes_away_the_target() {
    let answers = answers();
    let guesses = guesses();
    let solver = Solver::new(&answers, &guesses);
    let target = word("whine");

    let solution = solver.solve(&target).unwrap();
    let mut knowledge = Knowledge::new();
    for step in &solution.steps {
        assert!(knowledge.board().admits(&target));
        knowledge.record(step.guess, &step.feedback);
    }
}

#[test]
fn hint_reports_exhaustion() {
    let answers = answers();
    let guesses = guesses();
    let solver = Solver::new(&answers, &guesses);
    let config = HintConfig::parse(Some("Q...."), Some("Q"), &[], 1).unwrap();

    assert_eq!(
        run_hint(&solver, &config).err(),
        Some(SolveError::ExhaustedCandidates)
    );
}

#[test]
fn pruned_words_fit_every_constraint() {
    let store = answers();
    let board = Board::new(
        "S.INE".parse().unwrap(),
        LetterSet::parse("SINE").unwrap(),
        vec![word("shine")],
    );

    let pruned = store.prune(&board);
    let left: Vec<&str> = pruned.words().iter().map(Word::text).collect();
    assert_eq!(left, ["SPINE", "SWINE"]);

    for candidate in pruned.words() {
        assert!(board.confirmed_present().is_subset(candidate.letters()));
        for i in 0..WORD_LEN {
            assert!(board.position_candidates(i).contains(candidate.char_at(i)));
        }
    }
    assert_eq!(pruned.prune(&board).words(), pruned.words());
}
