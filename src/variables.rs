//! Declares and catalogues every LP variable name and type, up front.
//!
//! This is a pure naming/classifying service — it never emits a
//! constraint — matching the teacher's separation of the `ILP` data
//! model (`models::optimization::ilp`) from solving behavior.

use crate::graph::Graph;

/// LP variable name for a node's x-coordinate.
pub fn vx(n: usize) -> String {
    format!("vx{n}")
}

/// LP variable name for a node's y-coordinate.
pub fn vy(n: usize) -> String {
    format!("vy{n}")
}

/// LP variable name for an edge's length.
pub fn l(e: usize) -> String {
    format!("l{e}")
}

/// LP variable name for an edge's x-positive direction indicator.
pub fn a(e: usize) -> String {
    format!("a{e}")
}

/// LP variable name for an edge's x-negative direction indicator.
pub fn b(e: usize) -> String {
    format!("b{e}")
}

/// LP variable name for an edge's y-positive direction indicator.
pub fn c(e: usize) -> String {
    format!("c{e}")
}

/// LP variable name for an edge's y-negative direction indicator.
pub fn d(e: usize) -> String {
    format!("d{e}")
}

/// LP variable name for the linearization of `l_e * a_e`.
pub fn pa(e: usize) -> String {
    format!("pa{e}")
}

/// LP variable name for the linearization of `l_e * b_e`.
pub fn pb(e: usize) -> String {
    format!("pb{e}")
}

/// LP variable name for the linearization of `l_e * c_e`.
pub fn pc(e: usize) -> String {
    format!("pc{e}")
}

/// LP variable name for the linearization of `l_e * d_e`.
pub fn pd(e: usize) -> String {
    format!("pd{e}")
}

/// LP variable name for the quarter-turn count of adjacent-pair `p`.
pub fn q(p: usize) -> String {
    format!("q{p}")
}

/// LP variable name for the not-equal gadget helper of pair `p`.
pub fn h(p: usize) -> String {
    format!("h{p}")
}

/// LP variable name for the `oa` opposed-indicator helper of pair `p`.
pub fn oa(p: usize) -> String {
    format!("oa{p}")
}

/// LP variable name for the `ob` opposed-indicator helper of pair `p`.
pub fn ob(p: usize) -> String {
    format!("ob{p}")
}

/// LP variable name for the `oc` opposed-indicator helper of pair `p`.
pub fn oc(p: usize) -> String {
    format!("oc{p}")
}

/// LP variable name for the `od` opposed-indicator helper of pair `p`.
pub fn od(p: usize) -> String {
    format!("od{p}")
}

/// LP variable name for the `ua` auxiliary helper of pair `p`.
pub fn ua(p: usize) -> String {
    format!("ua{p}")
}

/// LP variable name for the `ub` auxiliary helper of pair `p`.
pub fn ub(p: usize) -> String {
    format!("ub{p}")
}

/// LP variable name for the `uc` auxiliary helper of pair `p`.
pub fn uc(p: usize) -> String {
    format!("uc{p}")
}

/// LP variable name for the `ud` auxiliary helper of pair `p`.
pub fn ud(p: usize) -> String {
    format!("ud{p}")
}

/// Catalogue of every LP variable name declared for a formulation, by
/// family. [`crate::emit::LpEmitter`] reads this directly when writing
/// the `Bounds`/`General`/`Binary` sections — it never re-derives which
/// variables exist.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    /// Continuous node x-coordinates, one per node.
    pub vx: Vec<String>,
    /// Continuous node y-coordinates, one per node.
    pub vy: Vec<String>,
    /// Continuous edge lengths, one per edge.
    pub l: Vec<String>,
    /// Continuous product-linearization helpers, one per edge.
    pub pa: Vec<String>,
    /// Continuous product-linearization helpers, one per edge.
    pub pb: Vec<String>,
    /// Continuous product-linearization helpers, one per edge.
    pub pc: Vec<String>,
    /// Continuous product-linearization helpers, one per edge.
    pub pd: Vec<String>,
    /// Binary x-positive direction indicators, one per edge.
    pub a: Vec<String>,
    /// Binary x-negative direction indicators, one per edge.
    pub b: Vec<String>,
    /// Binary y-positive direction indicators, one per edge.
    pub c: Vec<String>,
    /// Binary y-negative direction indicators, one per edge.
    pub d: Vec<String>,
    /// Integer quarter-turn counts, one per adjacent edge pair.
    pub q: Vec<String>,
    /// Objective coefficient for each `q` variable (`1.0` if the pair
    /// shares a line, `0.25` otherwise), aligned by index with `q`.
    pub q_coefficients: Vec<f64>,
    /// Binary not-equal gadget helpers, one per adjacent edge pair.
    pub h: Vec<String>,
    /// Binary opposed-indicator helpers, one per adjacent edge pair.
    pub oa: Vec<String>,
    /// Binary opposed-indicator helpers, one per adjacent edge pair.
    pub ob: Vec<String>,
    /// Binary opposed-indicator helpers, one per adjacent edge pair.
    pub oc: Vec<String>,
    /// Binary opposed-indicator helpers, one per adjacent edge pair.
    pub od: Vec<String>,
    /// Binary auxiliary helpers, one per adjacent edge pair.
    pub ua: Vec<String>,
    /// Binary auxiliary helpers, one per adjacent edge pair.
    pub ub: Vec<String>,
    /// Binary auxiliary helpers, one per adjacent edge pair.
    pub uc: Vec<String>,
    /// Binary auxiliary helpers, one per adjacent edge pair.
    pub ud: Vec<String>,
}

/// Declares every LP variable name up front, for a prepared graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableAllocator;

impl VariableAllocator {
    /// Declare the per-node and per-edge variable families. Per-pair
    /// families start empty; call [`Variables::add_pair`] once for each
    /// adjacent edge pair as `crate::constraints::adjacency` discovers
    /// them.
    pub fn allocate(&self, graph: &Graph) -> Variables {
        let num_nodes = graph.nodes.len();
        let num_edges = graph.edges.len();

        Variables {
            vx: (0..num_nodes).map(vx).collect(),
            vy: (0..num_nodes).map(vy).collect(),
            l: (0..num_edges).map(l).collect(),
            pa: (0..num_edges).map(pa).collect(),
            pb: (0..num_edges).map(pb).collect(),
            pc: (0..num_edges).map(pc).collect(),
            pd: (0..num_edges).map(pd).collect(),
            a: (0..num_edges).map(a).collect(),
            b: (0..num_edges).map(b).collect(),
            c: (0..num_edges).map(c).collect(),
            d: (0..num_edges).map(d).collect(),
            ..Default::default()
        }
    }
}

impl Variables {
    /// Register a freshly-discovered adjacent edge pair `p`, with the
    /// objective coefficient for its `q` variable: `1.0` if the two
    /// edges share a line (angle capped at 90 degrees), `0.25`
    /// otherwise.
    pub fn add_pair(&mut self, p: usize, shares_line: bool) {
        self.q.push(q(p));
        self.q_coefficients.push(if shares_line { 1.0 } else { 0.25 });
        self.h.push(h(p));
        self.oa.push(oa(p));
        self.ob.push(ob(p));
        self.oc.push(oc(p));
        self.od.push(od(p));
        self.ua.push(ua(p));
        self.ub.push(ub(p));
        self.uc.push(uc(p));
        self.ud.push(ud(p));
    }

    /// Every binary variable, in declaration order: direction
    /// indicators first, then per-pair helpers.
    pub fn binary_names(&self) -> Vec<&str> {
        self.a
            .iter()
            .chain(self.b.iter())
            .chain(self.c.iter())
            .chain(self.d.iter())
            .chain(self.h.iter())
            .chain(self.oa.iter())
            .chain(self.ob.iter())
            .chain(self.oc.iter())
            .chain(self.od.iter())
            .chain(self.ua.iter())
            .chain(self.ub.iter())
            .chain(self.uc.iter())
            .chain(self.ud.iter())
            .map(String::as_str)
            .collect()
    }
}
