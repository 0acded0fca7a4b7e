use std::collections::HashSet;

use puzzle_search::{
    breadth_first_solve, depth_first_solve, solve, PegSolitairePuzzle, Puzzle, PuzzleDefinition,
    SearchConfig, SearchStatus, SlidingTilePuzzle, Solution, Strategy, SudokuPuzzle,
    WordLadderPuzzle,
};

const WORDS: &[&str] = &[
    "same", "came", "case", "cast", "cost", "cove", "core", "cord", "cold", "come", "name",
    "lame", "lane", "line", "lint", "mint", "most", "mist", "must", "bust", "best", "cave",
];

fn assert_keys_unique<P: Puzzle>(solution: &Solution<P>) {
    let mut seen = HashSet::new();
    for node in solution.tree().nodes() {
        assert!(
            seen.insert(node.puzzle().canonical_key()),
            "a canonical key was created twice in one search"
        );
    }
}

fn assert_path_is_linked<P: Puzzle>(solution: &Solution<P>) {
    let tree = solution.tree();
    let path = solution.path();

    assert_eq!(path[0], tree.root());
    for pair in path.windows(2) {
        assert_eq!(tree.node(pair[1]).parent(), Some(pair[0]));
        assert!(tree.node(pair[0]).children().contains(&pair[1]));
    }
    assert!(solution.goal().is_solved());
}

/// Runs both strategies and checks the properties every solvable puzzle shares.
fn check_solvable<P: Puzzle + Clone + PartialEq>(puzzle: P) -> (Solution<P>, Solution<P>) {
    let shortest = breadth_first_solve(puzzle.clone()).expect("breadth-first should solve");
    let any = depth_first_solve(puzzle.clone()).expect("depth-first should solve");

    assert!(shortest.transitions() <= any.transitions());
    for solution in [&shortest, &any] {
        assert_keys_unique(solution);
        assert_path_is_linked(solution);
        assert!(*solution.start() == puzzle);
    }

    assert!(breadth_first_solve(puzzle.clone()).unwrap() == shortest);
    assert!(depth_first_solve(puzzle).unwrap() == any);

    (shortest, any)
}

#[test]
fn sliding_tile_one_move_from_goal() {
    let p = SlidingTilePuzzle::from_rows(&["123", "4*5"], &["123", "45*"]).unwrap();
    let (shortest, _) = check_solvable(p);
    assert_eq!(shortest.len(), 2);
}

#[test]
fn sliding_tile_eight_puzzle() {
    let p = SlidingTilePuzzle::from_rows(&["1*3", "425", "786"], &["123", "456", "78*"]).unwrap();
    let shortest = breadth_first_solve(p).unwrap();

    assert_eq!(shortest.transitions(), 3);
    assert_keys_unique(&shortest);
    assert_path_is_linked(&shortest);
}

#[test]
fn word_ladder_already_solved() {
    let p = WordLadderPuzzle::new("hot", "hot", ["hit", "hot", "hat"]).unwrap();
    let (shortest, any) = check_solvable(p);
    assert_eq!(shortest.len(), 1);
    assert_eq!(any.len(), 1);
}

#[test]
fn word_ladder_same_to_cost() {
    let p = WordLadderPuzzle::new("same", "cost", WORDS.iter().copied()).unwrap();
    let (shortest, _) = check_solvable(p);

    let words: Vec<&str> = shortest.puzzles().map(WordLadderPuzzle::word).collect();
    assert_eq!(words, vec!["same", "came", "case", "cast", "cost"]);
}

#[test]
fn peg_solitaire_separated_pegs() {
    let p = PegSolitairePuzzle::new(&["*.*"]).unwrap();
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        let report = solve(p.clone(), strategy, &SearchConfig::default());
        assert_eq!(report.status, SearchStatus::Exhausted);
        assert!(report.solution.is_none());
    }
}

#[test]
fn peg_solitaire_corner() {
    let p = PegSolitairePuzzle::new(&["**.", "..*", "..."]).unwrap();
    let (shortest, any) = check_solvable(p);

    assert_eq!(shortest.transitions(), 2);
    assert_eq!(any.goal().rows(), vec!["...", "...", "..*"]);
}

#[test]
fn sudoku_four_by_four() {
    let p = SudokuPuzzle::new(&["*BC*", "C*AB", "BADC", "DCB*"], "ABCD".chars()).unwrap();
    let (shortest, any) = check_solvable(p);
    assert_eq!(shortest.goal(), any.goal());
}

#[test]
fn budget_is_distinct_from_exhaustion() {
    let p = SlidingTilePuzzle::from_rows(&["213", "45*"], &["123", "45*"]).unwrap();

    let bounded = SearchConfig {
        max_nodes: Some(50),
        timeout: None,
    };
    let report = solve(p.clone(), Strategy::BreadthFirst, &bounded);
    assert_eq!(report.status, SearchStatus::BudgetExceeded);

    // Half of the 720 arrangements of a 2x3 grid are reachable
    let report = solve(p, Strategy::BreadthFirst, &SearchConfig::default());
    assert_eq!(report.status, SearchStatus::Exhausted);
    assert_eq!(report.nodes_created, 360);
}

#[test]
fn definitions_drive_the_engine() {
    let json = r#"{"kind": "peg_solitaire", "board": ["**.*"]}"#;
    let definition: PuzzleDefinition = serde_json::from_str(json).unwrap();

    let puzzle_search::AnyPuzzle::PegSolitaire(p) = definition.build().unwrap() else {
        panic!("expected peg solitaire");
    };
    let report = solve(p, Strategy::DepthFirst, &SearchConfig::default());
    assert!(report.is_solved());
    assert_eq!(report.solution.unwrap().into_puzzles().len(), 3);
}
