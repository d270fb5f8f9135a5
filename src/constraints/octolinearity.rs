//! Per-edge octolinearity: product linearization, coordinate coupling,
//! direction pinning, and collinearity ties through degree-2 or dummy
//! interchange nodes.
//!
//! Ported from the authoritative (longer) version of
//! `transit_map_generator/octolinearity.py` referenced in spec.md's
//! Open Question — the one with real product linearization and the
//! collinearity-tie block.

use crate::constraint::LinearConstraint;
use crate::error::Result;
use crate::graph::{Edge, Graph, GraphIndex};
use crate::settings::Settings;
use crate::variables;

/// Generate the octolinearity constraints for every edge in `graph`.
pub fn generate(graph: &Graph, index: &GraphIndex, settings: &Settings) -> Result<Vec<LinearConstraint>> {
    let mut constraints = Vec::new();
    for edge in &graph.edges {
        let e = index.edge_index(edge)?;
        constraints.extend(product_linearization(e, settings));
        constraints.extend(coordinate_coupling(e, edge, index)?);
        constraints.extend(direction_pinning(e, edge)?);
        constraints.extend(collinearity_ties(graph, index, edge)?);
    }
    Ok(constraints)
}

/// Binds `product = continuous * binary` via the standard big-M
/// linearization.
fn set_product(product: &str, continuous: &str, binary: &str, big_m: f64) -> [LinearConstraint; 3] {
    [
        LinearConstraint::le(
            vec![(1.0, product.to_string()), (-big_m, binary.to_string())],
            0.0,
        ),
        LinearConstraint::le(
            vec![(1.0, product.to_string()), (-1.0, continuous.to_string())],
            0.0,
        ),
        LinearConstraint::ge(
            vec![
                (1.0, product.to_string()),
                (-1.0, continuous.to_string()),
                (-big_m, binary.to_string()),
            ],
            -big_m,
        ),
    ]
}

fn product_linearization(e: usize, settings: &Settings) -> Vec<LinearConstraint> {
    let big_m = settings.big_m();
    let l = variables::l(e);
    let mut out = Vec::with_capacity(12);
    out.extend(set_product(&variables::pa(e), &l, &variables::a(e), big_m));
    out.extend(set_product(&variables::pb(e), &l, &variables::b(e), big_m));
    out.extend(set_product(&variables::pc(e), &l, &variables::c(e), big_m));
    out.extend(set_product(&variables::pd(e), &l, &variables::d(e), big_m));
    out
}

fn coordinate_coupling(e: usize, edge: &Edge, index: &GraphIndex) -> Result<Vec<LinearConstraint>> {
    let source = index.node_index(&edge.source)?;
    let target = index.node_index(&edge.target)?;
    Ok(vec![
        LinearConstraint::eq(
            vec![
                (1.0, variables::vx(target)),
                (-1.0, variables::vx(source)),
                (-1.0, variables::pa(e)),
                (1.0, variables::pb(e)),
            ],
            0.0,
        ),
        LinearConstraint::eq(
            vec![
                (1.0, variables::vy(target)),
                (-1.0, variables::vy(source)),
                (-1.0, variables::pc(e)),
                (1.0, variables::pd(e)),
            ],
            0.0,
        ),
        LinearConstraint::le(
            vec![(1.0, variables::a(e)), (1.0, variables::b(e))],
            1.0,
        ),
        LinearConstraint::le(
            vec![(1.0, variables::c(e)), (1.0, variables::d(e))],
            1.0,
        ),
    ])
}

fn fix(var: String, value: f64) -> LinearConstraint {
    LinearConstraint::eq(vec![(1.0, var)], value)
}

/// The direction-pinning table of spec.md section 4.5: for the edge's
/// main direction, which of `{a,b,c,d}` are clamped, and which
/// additional indicator the secondary (fallback) direction unlocks.
fn direction_pinning(e: usize, edge: &Edge) -> Result<Vec<LinearConstraint>> {
    let source_dirs = &edge.metadata.source_directions;
    let main = *source_dirs.first().unwrap_or(&0);
    let secondary = source_dirs.get(1).copied().unwrap_or(0);

    let (a, b, c, d) = (
        variables::a(e),
        variables::b(e),
        variables::c(e),
        variables::d(e),
    );

    let mut out = match main {
        0 => {
            let mut out = vec![fix(a.clone(), 0.0), fix(b, 1.0)];
            if secondary == 7 {
                out.push(fix(d.clone(), 0.0));
            }
            if secondary == 1 {
                out.push(fix(c.clone(), 0.0));
            }
            out
        }
        1 => {
            let mut out = vec![fix(a.clone(), 0.0), fix(c.clone(), 0.0)];
            if secondary == 2 {
                out.push(fix(d.clone(), 1.0));
            }
            if secondary == 0 {
                out.push(fix(b.clone(), 1.0));
            }
            out
        }
        2 => {
            let mut out = vec![fix(c.clone(), 0.0), fix(d.clone(), 1.0)];
            if secondary == 3 {
                out.push(fix(b.clone(), 0.0));
            }
            if secondary == 1 {
                out.push(fix(a.clone(), 0.0));
            }
            out
        }
        3 => {
            let mut out = vec![fix(b.clone(), 0.0), fix(c.clone(), 0.0)];
            if secondary == 4 {
                out.push(fix(a.clone(), 1.0));
            }
            if secondary == 2 {
                out.push(fix(d.clone(), 1.0));
            }
            out
        }
        4 => {
            let mut out = vec![fix(a.clone(), 1.0), fix(b.clone(), 0.0)];
            if secondary == 5 {
                out.push(fix(d.clone(), 0.0));
            }
            if secondary == 3 {
                out.push(fix(c.clone(), 0.0));
            }
            out
        }
        5 => {
            let mut out = vec![fix(b.clone(), 0.0), fix(d.clone(), 0.0)];
            if secondary == 6 {
                out.push(fix(c.clone(), 1.0));
            }
            if secondary == 4 {
                out.push(fix(a.clone(), 1.0));
            }
            out
        }
        6 => {
            let mut out = vec![fix(c.clone(), 1.0), fix(d.clone(), 0.0)];
            if secondary == 7 {
                out.push(fix(a.clone(), 0.0));
            }
            if secondary == 5 {
                out.push(fix(b.clone(), 0.0));
            }
            out
        }
        7 => {
            let mut out = vec![fix(a.clone(), 0.0), fix(d.clone(), 0.0)];
            if secondary == 0 {
                out.push(fix(b.clone(), 1.0));
            }
            if secondary == 6 {
                out.push(fix(c.clone(), 1.0));
            }
            out
        }
        other => {
            return Err(crate::error::FormulationError::InvalidInput(format!(
                "main direction {other} out of range 0..=7"
            )))
        }
    };
    out.shrink_to_fit();
    Ok(out)
}

/// For every other edge that shares a line and exactly one endpoint with
/// `edge`, tie the two edges' direction indicators together when the
/// join is "straight enough to matter": both endpoints of both edges
/// have degree exactly 2, or the shared node is a synthetic interchange.
fn collinearity_ties(
    graph: &Graph,
    index: &GraphIndex,
    edge: &Edge,
) -> Result<Vec<LinearConstraint>> {
    let e = index.edge_index(edge)?;
    let mut out = Vec::new();

    for other in &graph.edges {
        if std::ptr::eq(other, edge) {
            continue;
        }
        if !edge.shares_line_with(other) {
            continue;
        }

        let shared: Vec<_> = [&edge.source, &edge.target]
            .into_iter()
            .filter(|id| *id == &other.source || *id == &other.target)
            .collect();
        if shared.len() != 1 {
            continue;
        }
        let middle_id = shared[0];

        // The tie is only meaningful through a pass-through interchange:
        // the shared node has degree exactly 2 (nothing else branches
        // off it), or it's a synthetic dummy interchange node.
        let middle_is_degree_two = graph.degree_of(middle_id) == 2;
        let middle_is_dummy = graph
            .nodes
            .iter()
            .find(|n| &n.id == middle_id)
            .map(|n| n.metadata.dummy)
            .unwrap_or(false);

        if !middle_is_degree_two && !middle_is_dummy {
            continue;
        }

        let other_e = index.edge_index(other)?;

        if edge.target == other.source || edge.source == other.target {
            if !edge.metadata.source_directions.is_empty()
                && edge.metadata.source_directions == other.metadata.source_directions
            {
                out.push(tie(e, other_e, variables::a, variables::a));
                out.push(tie(e, other_e, variables::b, variables::b));
                out.push(tie(e, other_e, variables::c, variables::c));
                out.push(tie(e, other_e, variables::d, variables::d));
            }
        } else if !edge.metadata.target_directions.is_empty()
            && edge.metadata.target_directions == other.metadata.source_directions
        {
            out.push(tie(e, other_e, variables::a, variables::b));
            out.push(tie(e, other_e, variables::b, variables::a));
            out.push(tie(e, other_e, variables::c, variables::d));
            out.push(tie(e, other_e, variables::d, variables::c));
        }
    }

    Ok(out)
}

fn tie(
    e: usize,
    other_e: usize,
    lhs_var: fn(usize) -> String,
    rhs_var: fn(usize) -> String,
) -> LinearConstraint {
    LinearConstraint::eq(
        vec![(1.0, lhs_var(e)), (-1.0, rhs_var(other_e))],
        0.0,
    )
}
