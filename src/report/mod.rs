//! Formatted terminal output for the non-interactive commands.
//!
//! We keep formatting code in one place so output changes are localized.

use crate::domain::Params;

/// Two-column `(x, y)` table with a parameter header.
pub fn format_eval_table(params: &Params, xs: &[f64], ys: &[f64]) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {params}\n"));
    out.push_str(&format!("{:>12} {:>16}\n", "x", "y"));
    for (x, y) in xs.iter().zip(ys) {
        out.push_str(&format!("{x:>12.4} {y:>16.9}\n"));
    }
    out
}
