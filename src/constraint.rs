//! Structured linear constraints and LP-format term rendering.
//!
//! Adapted from the teacher's `models::optimization::ilp::LinearConstraint`,
//! generalized from flat `(var_index, coefficient)` terms to named-variable
//! terms, since this formulation spans several disjoint variable families
//! (`vx`, `a`, `q`, `pa`, ...) rather than one flat index space.

use std::fmt::Write as _;

/// Comparison operator for a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `=`
    Eq,
}

impl Comparison {
    fn as_lp_str(self) -> &'static str {
        match self {
            Comparison::Le => "<=",
            Comparison::Ge => ">=",
            Comparison::Eq => "=",
        }
    }
}

/// A linear constraint over named LP variables: `sum(coef * var) {cmp} rhs`.
///
/// Stored sparsely, in the order terms were added, since LP-format output
/// must be deterministic and readable.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// `(coefficient, variable name)` pairs, in emission order.
    pub terms: Vec<(f64, String)>,
    /// Comparison operator.
    pub cmp: Comparison,
    /// Right-hand side constant.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Construct a constraint from explicit terms.
    pub fn new(terms: Vec<(f64, String)>, cmp: Comparison, rhs: f64) -> Self {
        Self { terms, cmp, rhs }
    }

    /// `sum(terms) <= rhs`.
    pub fn le(terms: Vec<(f64, String)>, rhs: f64) -> Self {
        Self::new(terms, Comparison::Le, rhs)
    }

    /// `sum(terms) >= rhs`.
    pub fn ge(terms: Vec<(f64, String)>, rhs: f64) -> Self {
        Self::new(terms, Comparison::Ge, rhs)
    }

    /// `sum(terms) = rhs`.
    pub fn eq(terms: Vec<(f64, String)>, rhs: f64) -> Self {
        Self::new(terms, Comparison::Eq, rhs)
    }

    /// Render as a single LP `Subject To` line (without leading
    /// indentation; [`crate::emit::LpEmitter`] applies that).
    pub fn to_lp_line(&self) -> String {
        let mut out = String::new();
        for (i, (coef, var)) in self.terms.iter().enumerate() {
            write_term(&mut out, *coef, var, i == 0);
        }
        let _ = write!(out, " {} {}", self.cmp.as_lp_str(), fmt_num(self.rhs));
        out
    }
}

/// Render `coef * var` as an LP token, e.g. `a0`, `3 a0`, `- b0`,
/// `+ 0.25 q3`. `is_first` suppresses the leading `+` CPLEX LP format
/// doesn't require on a line's first term.
fn write_term(out: &mut String, coef: f64, var: &str, is_first: bool) {
    let negative = coef < 0.0;
    let magnitude = coef.abs();
    let mag_prefix = if (magnitude - 1.0).abs() > f64::EPSILON {
        format!("{} ", fmt_num(magnitude))
    } else {
        String::new()
    };

    if is_first {
        if negative {
            out.push_str("- ");
        }
    } else {
        out.push(' ');
        out.push(if negative { '-' } else { '+' });
        out.push(' ');
    }
    out.push_str(&mag_prefix);
    out.push_str(var);
}

/// Format a constraint coefficient/bound without a trailing `.0` for
/// whole numbers, matching the plain numeric tokens of the original LP
/// text (`9`, not `9.0`; `0.25` stays `0.25`).
pub fn fmt_num(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_constraint_renders_without_leading_sign() {
        let c = LinearConstraint::le(vec![(1.0, "a0".to_string()), (1.0, "b0".to_string())], 1.0);
        assert_eq!(c.to_lp_line(), "a0 + b0 <= 1");
    }

    #[test]
    fn negative_coefficient_renders_with_minus() {
        let c = LinearConstraint::eq(
            vec![(1.0, "vx1".to_string()), (-1.0, "vx0".to_string())],
            0.0,
        );
        assert_eq!(c.to_lp_line(), "vx1 - vx0 = 0");
    }

    #[test]
    fn non_unit_coefficient_is_printed() {
        let c = LinearConstraint::le(vec![(9.0, "a0".to_string())], 0.0);
        assert_eq!(c.to_lp_line(), "9 a0 <= 0");
    }

    #[test]
    fn fmt_num_drops_trailing_zero() {
        assert_eq!(fmt_num(9.0), "9");
        assert_eq!(fmt_num(0.25), "0.25");
        assert_eq!(fmt_num(-150.0), "-150");
    }
}
