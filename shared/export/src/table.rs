use std::fmt;

use congruent_core::{ParameterPreview, Sequence, SequenceRow};

const HEADERS: [&str; 5] = ["n", "X(n-1)", "formula", "X(n)", "r(n)"];

fn cells(row: &SequenceRow) -> [String; 5] {
    [
        row.n.to_string(),
        row.previous_value.to_string(),
        row.formula_trace.clone(),
        row.current_value.to_string(),
        row.normalized_value.clone(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Fixed-width table of the generated rows, followed by the verification row
/// under its own heading.
pub fn render_table(sequence: &Sequence) -> String {
    let headers = HEADERS.map(String::from);
    let rows = sequence.rows.iter().map(cells).collect::<Vec<_>>();
    let verification = cells(&sequence.verification);

    let mut widths = headers.clone().map(|h| h.len());
    for row in rows.iter().chain(std::iter::once(&verification)) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule_len = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out.push('\n');
    out.push_str("verification row (should repeat the first iteration):\n");
    push_line(&mut out, &verification, &widths);
    out
}

struct PreviewPanel<'a>(&'a ParameterPreview);

impl fmt::Display for PreviewPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = self.0;
        let k = preview.k.map_or("k".to_owned(), |k| k.to_string());
        let period = preview.period.map_or("P".to_owned(), |p| p.to_string());
        let (base, step) = preview.method.multiplier_form();
        let offset = if preview.method.is_linear() { "" } else { " + 2" };
        let raw = preview
            .raw_log2
            .map_or("?".to_owned(), |raw| format!("{raw:.4}"));

        writeln!(f, "method: {}", preview.method)?;
        match &preview.parameters {
            Ok(params) => {
                writeln!(f, "a = {base} + {step} × k = {base} + {step} × {k} = {}", params.a)?;
                writeln!(f, "g = log₂({period}){offset} = {raw}")?;
                writeln!(f, "  forced to an integer: g = {}", params.g)?;
                writeln!(f, "m = 2^g = 2^{} = {}", params.g, params.m)?;
            }
            Err(err) => {
                writeln!(f, "a = {base} + {step} × k = {base} + {step} × {k}")?;
                writeln!(f, "g = log₂({period}){offset} = {raw}")?;
                writeln!(f, "error: {err}")?;
            }
        }
        if let Some(c) = preview.suggested_increment {
            writeln!(f, "suggestion: use c = {c} to guarantee the maximum period")?;
        }
        if preview.increment_not_below_modulus {
            writeln!(f, "warning: c must be less than m")?;
        }
        Ok(())
    }
}

/// The parameter-calculation panel.
pub fn render_preview(preview: &ParameterPreview) -> String {
    PreviewPanel(preview).to_string()
}
