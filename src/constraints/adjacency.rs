//! Bend-angle constraints between edges that share a node: counts each
//! shared-node pair's quarter-turn via a not-equal gadget pairing the
//! edges' direction indicators, so the objective can penalize sharp
//! turns.
//!
//! Ported from the adjacency branch of `transit_map_generator/generate_lp.py`'s
//! `generate_lp` closure.

use crate::constraint::LinearConstraint;
use crate::error::Result;
use crate::graph::{Edge, Graph, GraphIndex};
use crate::settings::Settings;
use crate::variables::{self, Variables};

/// Discover every adjacent (node-sharing) edge pair in `graph`, register
/// their variables in `variables`, and emit the quarter-turn-counting
/// constraints for each.
pub fn generate(
    graph: &Graph,
    index: &GraphIndex,
    settings: &Settings,
    variables: &mut Variables,
) -> Result<Vec<LinearConstraint>> {
    let mut constraints = Vec::new();
    let edges = &graph.edges;
    let mut p = 0usize;

    for o in 0..edges.len() {
        for i in (o + 1)..edges.len() {
            let outer = &edges[o];
            let inner = &edges[i];
            if !outer.is_adjacent_to(inner) {
                continue;
            }

            let shares_line = outer.shares_line_with(inner);
            variables.add_pair(p, shares_line);
            constraints.extend(pair_constraints(index, outer, inner, p, shares_line, settings)?);
            p += 1;
        }
    }

    Ok(constraints)
}

fn pair_constraints(
    index: &GraphIndex,
    outer: &Edge,
    inner: &Edge,
    p: usize,
    shares_line: bool,
    settings: &Settings,
) -> Result<Vec<LinearConstraint>> {
    let e = index.edge_index(outer)?;
    let i = index.edge_index(inner)?;

    let q = variables::q(p);
    let h = variables::h(p);
    let oa = variables::oa(p);
    let ob = variables::ob(p);
    let oc = variables::oc(p);
    let od = variables::od(p);
    let ua = variables::ua(p);
    let ub = variables::ub(p);
    let uc = variables::uc(p);
    let ud = variables::ud(p);

    let mut out = Vec::new();

    if shares_line {
        out.push(LinearConstraint::le(vec![(1.0, q.clone())], 2.0));
    }

    out.push(LinearConstraint::eq(
        vec![
            (1.0, oa.clone()),
            (1.0, ob.clone()),
            (1.0, oc.clone()),
            (1.0, od.clone()),
            (-1.0, q.clone()),
        ],
        0.0,
    ));

    // The meeting node determines whether we compare outer's tail to
    // inner's head or tail to tail.
    let head_to_tail = outer.target == inner.source || outer.source == inner.target;

    out.extend(create_not_equal(e, i, &h, settings, head_to_tail));
    out.extend(xor_constraints(
        e,
        i,
        &oa,
        &ob,
        &oc,
        &od,
        &ua,
        &ub,
        &uc,
        &ud,
        head_to_tail,
    ));

    Ok(out)
}

/// The `3a - 3b + c - d` direction signature of edge `e`: an integer in
/// `{-4,..,4}` uniquely encoding which of the eight octolinear
/// directions it points, so two edges share a direction iff their
/// signatures are equal.
fn signature(e: usize) -> Vec<(f64, String)> {
    vec![
        (3.0, variables::a(e)),
        (-3.0, variables::b(e)),
        (1.0, variables::c(e)),
        (-1.0, variables::d(e)),
    ]
}

/// Defines `h_p` as the not-equal indicator between `outer`'s and
/// `inner`'s direction signatures via the standard big-M "lazy OR":
/// `L + R - U h <= -0.5` and `L + R - U h >= 0.5 - U`, where `U` is
/// [`Settings::big_m`]. `head_to_tail` flips `R`'s sign since the two
/// edges' direction signatures are measured from opposite ends when
/// one edge's tail continues into the other's head.
///
/// Ported from `transit_map_generator/generate_lp.py`'s
/// `create_not_equal`.
fn create_not_equal(e: usize, i: usize, h: &str, settings: &Settings, head_to_tail: bool) -> Vec<LinearConstraint> {
    let sign = if head_to_tail { -1.0 } else { 1.0 };
    let big_m = settings.big_m();

    let mut terms = signature(e);
    terms.extend(signature(i).into_iter().map(|(c, v)| (c * sign, v)));
    terms.push((-big_m, h.to_string()));

    vec![
        LinearConstraint::le(terms.clone(), -0.5),
        LinearConstraint::ge(terms, 0.5 - big_m),
    ]
}

/// The four per-axis XOR constraints: `x_o + x_i - 2u - o = 0`. With
/// `x_o`, `x_i`, `u`, `o` all binary, this forces `o = XOR(x_o, x_i)` —
/// the binary domain alone rules out every infeasible combination, no
/// extra bound on `u` is needed — so `q = oa+ob+oc+od` counts exactly
/// the direction components in which the two edges disagree.
///
/// `head_to_tail` selects whether `inner`'s own `a/b/c/d` (true) or
/// their `b/a/d/c` swap (false, i.e. tail-to-tail/head-to-head, since
/// `inner` then runs the opposite way) are paired against `outer`'s.
#[allow(clippy::too_many_arguments)]
fn xor_constraints(
    e: usize,
    i: usize,
    oa: &str,
    ob: &str,
    oc: &str,
    od: &str,
    ua: &str,
    ub: &str,
    uc: &str,
    ud: &str,
    head_to_tail: bool,
) -> Vec<LinearConstraint> {
    let (ea, eb, ec, ed) = (
        variables::a(e),
        variables::b(e),
        variables::c(e),
        variables::d(e),
    );
    let (ia, ib, ic, id) = if head_to_tail {
        (
            variables::a(i),
            variables::b(i),
            variables::c(i),
            variables::d(i),
        )
    } else {
        (
            variables::b(i),
            variables::a(i),
            variables::d(i),
            variables::c(i),
        )
    };

    vec![
        xor(oa, ua, &ea, &ia),
        xor(ob, ub, &eb, &ib),
        xor(oc, uc, &ec, &ic),
        xor(od, ud, &ed, &id),
    ]
}

/// `own + other - 2*u - o = 0`.
fn xor(o: &str, u: &str, own: &str, other: &str) -> LinearConstraint {
    LinearConstraint::eq(
        vec![
            (1.0, own.to_string()),
            (1.0, other.to_string()),
            (-2.0, u.to_string()),
            (-1.0, o.to_string()),
        ],
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeMetadata, Node, NodeId, NodeMetadata};
    use crate::variables::VariableAllocator;

    fn node(id: &str, x: f64, y: f64) -> Node {
        Node {
            id: NodeId::from(id),
            metadata: NodeMetadata { x, y, dummy: false },
        }
    }

    fn edge(source: &str, target: &str, lines: &[&str]) -> Edge {
        Edge {
            source: NodeId::from(source),
            target: NodeId::from(target),
            metadata: EdgeMetadata {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                source_directions: vec![4],
                target_directions: vec![0],
            },
        }
    }

    #[test]
    fn adjacent_pair_registers_variables_and_constraints() {
        let graph = Graph {
            nodes: vec![node("a", 0.0, 0.0), node("b", 10.0, 0.0), node("c", 20.0, 0.0)],
            edges: vec![edge("a", "b", &["L1"]), edge("b", "c", &["L1"])],
        };
        let index = GraphIndex::build(&graph).unwrap();
        let settings = Settings::default();
        let mut vars = VariableAllocator.allocate(&graph);
        let constraints = generate(&graph, &index, &settings, &mut vars).unwrap();

        assert_eq!(vars.q, vec!["q0"]);
        assert_eq!(vars.q_coefficients, vec![1.0]);
        assert!(constraints
            .iter()
            .any(|c| c.to_lp_line().starts_with("q0 <= 2")));
    }

    #[test]
    fn non_adjacent_pair_is_not_registered() {
        let graph = Graph {
            nodes: vec![node("a", 0.0, 0.0), node("b", 10.0, 0.0), node("c", 20.0, 0.0), node("d", 30.0, 0.0)],
            edges: vec![edge("a", "b", &[]), edge("c", "d", &[])],
        };
        let index = GraphIndex::build(&graph).unwrap();
        let settings = Settings::default();
        let mut vars = VariableAllocator.allocate(&graph);
        let constraints = generate(&graph, &index, &settings, &mut vars).unwrap();
        assert!(vars.q.is_empty());
        assert!(constraints.is_empty());
    }

    #[test]
    fn unshared_line_pair_uses_quarter_coefficient() {
        let graph = Graph {
            nodes: vec![node("a", 0.0, 0.0), node("b", 10.0, 0.0), node("c", 20.0, 0.0)],
            edges: vec![edge("a", "b", &["L1"]), edge("b", "c", &["L2"])],
        };
        let index = GraphIndex::build(&graph).unwrap();
        let settings = Settings::default();
        let mut vars = VariableAllocator.allocate(&graph);
        let _ = generate(&graph, &index, &settings, &mut vars).unwrap();
        assert_eq!(vars.q_coefficients, vec![0.25]);
    }

    #[test]
    fn not_equal_gadget_uses_big_m_and_direction_signature() {
        let graph = Graph {
            nodes: vec![node("a", 0.0, 0.0), node("b", 10.0, 0.0), node("c", 20.0, 0.0)],
            edges: vec![edge("a", "b", &["L1"]), edge("b", "c", &["L1"])],
        };
        let index = GraphIndex::build(&graph).unwrap();
        let settings = Settings::default();
        let mut vars = VariableAllocator.allocate(&graph);
        let constraints = generate(&graph, &index, &settings, &mut vars).unwrap();

        let big_m = settings.big_m();
        assert!(constraints
            .iter()
            .any(|c| c.terms.iter().any(|(coef, v)| v == "h0" && *coef == -big_m)
                && c.rhs == -0.5));
        assert!(constraints
            .iter()
            .any(|c| c.terms.iter().any(|(coef, v)| v == "h0" && *coef == -big_m)
                && c.rhs == 0.5 - big_m));
    }

    #[test]
    fn xor_constraint_ties_indicator_sum_to_helper_and_output() {
        let graph = Graph {
            nodes: vec![node("a", 0.0, 0.0), node("b", 10.0, 0.0), node("c", 20.0, 0.0)],
            edges: vec![edge("a", "b", &["L1"]), edge("b", "c", &["L1"])],
        };
        let index = GraphIndex::build(&graph).unwrap();
        let settings = Settings::default();
        let mut vars = VariableAllocator.allocate(&graph);
        let constraints = generate(&graph, &index, &settings, &mut vars).unwrap();
        assert!(constraints.contains(&LinearConstraint::eq(
            vec![
                (1.0, "a0".to_string()),
                (1.0, "a1".to_string()),
                (-2.0, "ua0".to_string()),
                (-1.0, "oa0".to_string()),
            ],
            0.0
        )));
    }
}
