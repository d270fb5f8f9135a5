//! Serializes a complete formulation to CPLEX LP format: `Minimize`,
//! `Subject To`, `Bounds`, `General`, `Binary`, `End`, in that exact
//! order.
//!
//! Ported from the tail of `transit_map_generator/generate_lp.py`'s
//! `generate_lp` closure, which writes these sections directly to a
//! stream rather than building a reusable `ILP` value like the teacher's
//! `models::optimization::ilp::ILP` does — the closure-factory pattern
//! itself is dropped per spec.md's own allowance, but the section
//! ordering and content are preserved exactly.

use std::fmt::Write as _;

use crate::constraint::{fmt_num, LinearConstraint};
use crate::settings::Settings;
use crate::variables::Variables;

/// Renders a formulation's variables and constraints as LP-format text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LpEmitter;

impl LpEmitter {
    /// Render the full LP document.
    pub fn emit(&self, variables: &Variables, constraints: &[LinearConstraint], settings: &Settings) -> String {
        let mut out = String::new();
        self.write_objective(&mut out, variables);
        self.write_constraints(&mut out, constraints, settings);
        self.write_bounds(&mut out, variables, settings);
        self.write_general(&mut out, variables);
        self.write_binary(&mut out, variables);
        out.push_str("End\n");
        out
    }

    fn write_objective(&self, out: &mut String, variables: &Variables) {
        out.push_str("Minimize\n obj: ");
        let mut first = true;
        for (q, coef) in variables.q.iter().zip(&variables.q_coefficients) {
            if !first {
                out.push_str(" + ");
            }
            let _ = write!(out, "{} {q}", fmt_num(4.0 * coef));
            first = false;
        }
        for l in &variables.l {
            if !first {
                out.push_str(" + ");
            }
            let _ = write!(out, "3 {l}");
            first = false;
        }
        out.push('\n');
    }

    fn write_constraints(&self, out: &mut String, constraints: &[LinearConstraint], settings: &Settings) {
        out.push_str("Subject To\n");
        let _ = writeln!(out, " anchor_x: {} = {}", crate::variables::vx(0), fmt_num(settings.offset));
        let _ = writeln!(out, " anchor_y: {} = {}", crate::variables::vy(0), fmt_num(settings.offset));
        for (i, c) in constraints.iter().enumerate() {
            let _ = writeln!(out, " c{i}: {}", c.to_lp_line());
        }
    }

    fn write_bounds(&self, out: &mut String, variables: &Variables, settings: &Settings) {
        out.push_str("Bounds\n");
        let x_lo = settings.offset - settings.max_width / 2.0;
        let x_hi = settings.offset + settings.max_width / 2.0;
        let y_lo = settings.offset - settings.max_height / 2.0;
        let y_hi = settings.offset + settings.max_height / 2.0;
        for vx in &variables.vx {
            let _ = writeln!(out, " {} <= {} <= {}", fmt_num(x_lo), vx, fmt_num(x_hi));
        }
        for vy in &variables.vy {
            let _ = writeln!(out, " {} <= {} <= {}", fmt_num(y_lo), vy, fmt_num(y_hi));
        }
        for l in &variables.l {
            let _ = writeln!(
                out,
                " {} <= {} <= {}",
                fmt_num(settings.min_edge_length),
                l,
                fmt_num(settings.max_edge_length)
            );
        }
        for p in variables
            .pa
            .iter()
            .chain(&variables.pb)
            .chain(&variables.pc)
            .chain(&variables.pd)
        {
            let _ = writeln!(out, " 0 <= {p}");
        }
        for q in &variables.q {
            let _ = writeln!(out, " 0 <= {q} <= 3");
        }
    }

    fn write_general(&self, out: &mut String, variables: &Variables) {
        out.push_str("General\n");
        for q in &variables.q {
            let _ = writeln!(out, " {q}");
        }
    }

    fn write_binary(&self, out: &mut String, variables: &Variables) {
        out.push_str("Binary\n");
        for name in variables.binary_names() {
            let _ = writeln!(out, " {name}");
        }
    }
}
