use crate::{
    game::GameMaster,
    search::{
        config::{SolverConfig, SolverConfigBuilder},
        dfs::DfsSolver,
        log::{Event, SearchLog},
        solver::Solver,
    },
};

use super::common::{GraphGame, NOWHERE};

////////////////////////////////////////////////////////////////////////////////

fn walk(solver: &mut DfsSolver<GraphGame>) -> Vec<usize> {
    let mut states = Vec::new();
    while !solver.advance() {
        assert_eq!(
            solver.game_master().game_state(),
            solver.current_state().state
        );
        assert_eq!(
            solver.game_master().net_moves(),
            solver.current_state().depth
        );
        states.push(solver.current_state().state);
    }
    states
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn visit_order() {
    let mut solver = DfsSolver::new(GraphGame::diamond(), NOWHERE);
    assert_eq!(walk(&mut solver), vec![1, 3, 2, 4]);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn exhausted_at_root() {
    let mut solver = DfsSolver::new(GraphGame::diamond(), NOWHERE);
    walk(&mut solver);

    assert_eq!(solver.game_master().game_state(), 0);
    assert!(solver.current_state().is_root());
    assert_eq!(solver.game_master().net_moves(), 0);
    assert_eq!(solver.search_log().visited_unique, 5);

    // stays exhausted
    assert!(solver.advance());
    assert_eq!(solver.game_master().game_state(), 0);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn stops_at_victory() {
    let mut solver = DfsSolver::new(GraphGame::diamond(), 2);
    assert!(!solver.advance());
    assert!(!solver.advance());
    assert!(!solver.advance());
    assert_eq!(solver.game_master().game_state(), 2);

    // victory is checked on the next step
    assert!(solver.advance());
    assert!(solver.advance());
    assert_eq!(solver.game_master().game_state(), 2);
    assert_eq!(solver.search_log().visited_unique, 4);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn initial_state_is_victory() {
    let mut solver = DfsSolver::new(GraphGame::diamond(), 0);
    assert!(solver.advance());
    assert_eq!(solver.tree().len(), 1);
    assert_eq!(solver.game_master().made, 0);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn stale_child_is_skipped() {
    let mut solver =
        DfsSolver::with_config(GraphGame::diamond(), NOWHERE, SolverConfig::verbose());
    walk(&mut solver);

    // vertex 2 was generated as child of 0 and of 3,
    // but visited only once
    let copies = solver.tree().nodes().filter(|n| n.state == 2).count();
    assert_eq!(copies, 2);
    let visited = solver
        .events()
        .events()
        .filter(|e| matches!(e, Event::Visited { state: 2, .. }))
        .count();
    assert_eq!(visited, 1);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn events() {
    let mut solver = DfsSolver::with_config(GraphGame::line(3), NOWHERE, SolverConfig::verbose());
    walk(&mut solver);

    let events = solver.events().events().cloned().collect::<Vec<_>>();
    assert_eq!(
        events,
        vec![
            Event::Generated {
                depth: 0,
                children: 1
            },
            Event::Visited { depth: 1, state: 1 },
            Event::Generated {
                depth: 1,
                children: 1
            },
            Event::Visited { depth: 2, state: 2 },
            Event::Generated {
                depth: 2,
                children: 0
            },
            Event::Backtracked { from_depth: 2 },
            Event::Backtracked { from_depth: 1 },
            Event::Exhausted,
        ]
    );

    let steps = solver
        .events()
        .entries()
        .iter()
        .map(|e| e.step)
        .collect::<Vec<_>>();
    assert_eq!(steps, vec![1, 1, 2, 2, 3, 3, 3, 3]);
    println!("{}", solver.events());
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn events_limit() {
    let cfg = SolverConfigBuilder::new()
        .record_events(true)
        .max_events(2)
        .build();
    let mut solver = DfsSolver::with_config(GraphGame::line(3), NOWHERE, cfg);
    walk(&mut solver);

    assert_eq!(solver.events().len(), 2);
    assert_eq!(solver.search_log().events_dropped, 6);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn events_limit_counts_every_dropped_event() {
    let mut full = DfsSolver::with_config(GraphGame::diamond(), NOWHERE, SolverConfig::verbose());
    walk(&mut full);
    let total = full.events().len();

    for limit in 0..=total {
        let cfg = SolverConfigBuilder::new()
            .record_events(true)
            .max_events(limit)
            .build();
        let mut solver = DfsSolver::with_config(GraphGame::diamond(), NOWHERE, cfg);
        walk(&mut solver);

        assert_eq!(solver.events().len(), limit);
        assert_eq!(solver.search_log().events_dropped, total - limit);
        assert_eq!(
            solver.events().entries(),
            &full.events().entries()[..limit]
        );
    }
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn no_events_by_default() {
    let mut solver = DfsSolver::new(GraphGame::diamond(), NOWHERE);
    walk(&mut solver);
    assert!(solver.events().is_empty());
    assert_eq!(solver.search_log().events_dropped, 0);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn counters() {
    let mut solver = DfsSolver::new(GraphGame::diamond(), NOWHERE);
    walk(&mut solver);

    let log = solver.search_log();
    assert_eq!(log.steps, 5);
    assert_eq!(log.visited_unique, 5);
    // 0 -> {1, 2}, 1 -> {0, 3}, 3 -> {1, 2, 4}, 2 -> {0, 3}, 4 -> {3}
    assert_eq!(log.probed, 10);
    assert_eq!(log.generated, 5);
    assert_eq!(log.backtracks, 4);
    assert_eq!(log.regenerations, 0);

    let json = serde_json::to_string(log).unwrap();
    let restored: SearchLog = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, log);

    let gm = solver.into_game_master();
    assert_eq!(gm.made, gm.reversed);
}
