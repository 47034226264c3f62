//! End-to-end: pin one view inside another and resolve the recorded equations.

use std::collections::HashMap;

use tether_constraint::{LayoutEngine, RecordingEngine};
use tether_core::{AnchorRef, ConstraintRequest};
use tether_layout::{constrain, EdgeInsets, LayoutParticipant, Relation, View};

/// Resolves chains of equalities by propagation, starting from known anchor values.
///
/// Stands in for the host solver: good enough for `a == b + c` systems where
/// every equation has at most one unknown once its neighbours are resolved.
struct PropagationSolver {
    values: HashMap<AnchorRef, f64>,
}

impl PropagationSolver {
    fn new(known: impl IntoIterator<Item = (AnchorRef, f64)>) -> Self {
        Self {
            values: known.into_iter().collect(),
        }
    }

    fn solve(&mut self, requests: &[ConstraintRequest]) {
        loop {
            let mut progressed = false;
            for request in requests {
                if request.relation() != Relation::Equal {
                    continue;
                }
                let Some(second) = request.second() else {
                    if !self.values.contains_key(&request.first()) {
                        self.values.insert(request.first(), request.constant());
                        progressed = true;
                    }
                    continue;
                };
                let first = self.values.get(&request.first()).copied();
                let other = self.values.get(&second).copied();
                match (first, other) {
                    (None, Some(value)) => {
                        self.values
                            .insert(request.first(), request.multiplier() * value + request.constant());
                        progressed = true;
                    }
                    (Some(value), None) if request.multiplier() != 0.0 => {
                        self.values
                            .insert(second, (value - request.constant()) / request.multiplier());
                        progressed = true;
                    }
                    _ => {}
                }
            }
            if !progressed {
                break;
            }
        }
    }

    fn value(&self, anchor: impl Into<AnchorRef>) -> Option<f64> {
        self.values.get(&anchor.into()).copied()
    }
}

fn active_requests(engine: &RecordingEngine) -> Vec<ConstraintRequest> {
    engine.constraints().map(|(_, request)| *request).collect()
}

fn container_frame(container: &View) -> Vec<(AnchorRef, f64)> {
    vec![
        (container.top_anchor().erase(), 0.0),
        (container.bottom_anchor().erase(), 100.0),
        (container.leading_anchor().erase(), 0.0),
        (container.trailing_anchor().erase(), 200.0),
    ]
}

#[test]
fn edges_with_padding_inset_every_side() {
    let mut engine = RecordingEngine::new();
    let container = View::new(1);
    let content = View::new(2);

    let ids = constrain(&mut engine, &content, |layout| layout.edges_padding(&container, 8.0));
    assert_eq!(engine.len(), 4);
    assert!(ids.iter().all(|&id| engine.is_active(id)));

    let mut solver = PropagationSolver::new(container_frame(&container));
    solver.solve(&active_requests(&engine));

    assert_eq!(solver.value(content.top_anchor()), Some(8.0));
    assert_eq!(solver.value(content.bottom_anchor()), Some(92.0));
    assert_eq!(solver.value(content.leading_anchor()), Some(8.0));
    assert_eq!(solver.value(content.trailing_anchor()), Some(192.0));

    for (_, request) in engine.constraints() {
        let satisfied = request.is_satisfied_by(|anchor| solver.value(anchor));
        assert_eq!(satisfied, Some(true), "unsatisfied: {request}");
    }
}

#[test]
fn edges_with_insets_map_left_and_right_to_leading_and_trailing() {
    let mut engine = RecordingEngine::new();
    let container = View::new(1);
    let content = View::new(2);

    constrain(&mut engine, &content, |layout| {
        layout.edges(&container, EdgeInsets::new(10.0, 20.0, 30.0, 40.0))
    });

    let mut solver = PropagationSolver::new(container_frame(&container));
    solver.solve(&active_requests(&engine));

    assert_eq!(solver.value(content.top_anchor()), Some(10.0));
    assert_eq!(solver.value(content.bottom_anchor()), Some(70.0));
    assert_eq!(solver.value(content.leading_anchor()), Some(20.0));
    assert_eq!(solver.value(content.trailing_anchor()), Some(160.0));
}

#[test]
fn positive_offsets_point_inward_for_single_edges() {
    let mut engine = RecordingEngine::new();
    let container = View::new(1);
    let content = View::new(2);

    constrain(&mut engine, &content, |layout| {
        layout.trailing(container.trailing_anchor(), 12.0, Relation::Equal);
        layout.bottom(container.bottom_anchor(), 12.0, Relation::Equal);
        layout.width(50.0, Relation::Equal);
    });

    let mut solver = PropagationSolver::new(container_frame(&container));
    solver.solve(&active_requests(&engine));

    assert_eq!(solver.value(content.trailing_anchor()), Some(188.0));
    assert_eq!(solver.value(content.bottom_anchor()), Some(88.0));
    assert_eq!(solver.value(content.width_anchor()), Some(50.0));
}

#[test]
fn repeated_sessions_do_not_add_constraints() {
    let mut engine = RecordingEngine::new();
    let view = View::new(1);
    let other = View::new(2);

    constrain(&mut engine, &view, |layout| layout.top(other.top_anchor(), 0.0, Relation::Equal));
    constrain(&mut engine, &view, |_| ());

    assert_eq!(engine.len(), 1);
    assert_eq!(engine.flag_writes(), 1);
    assert!(!engine.translates_frame(view.item()));
}

#[test]
fn deactivated_constraints_leave_the_table() {
    let mut engine = RecordingEngine::new();
    let container = View::new(1);
    let content = View::new(2);

    let [top, bottom, leading, trailing] =
        constrain(&mut engine, &content, |layout| layout.edges_padding(&container, 0.0));
    engine.deactivate(bottom).unwrap();

    let remaining: Vec<_> = engine.constraints().map(|(id, _)| id).collect();
    assert_eq!(remaining, vec![top, leading, trailing]);
    assert!(engine.deactivate(bottom).is_err());
}
