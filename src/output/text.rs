//! Terminal rendering for profiles, families and deltas.
//!
//! Plain fixed-width tables with color cues: red for regressions,
//! green for improvements.

use crate::aggregator::MetricField;
use crate::parser::{Call, NearestFamily, PairCall, PairCallMap, Profile};
use colored::*;

/// Shown for the empty caller name
const NO_CALLER_LABEL: &str = "(no caller)";

/// Render the first `top_n` calls of a (sorted) profile
pub fn render_profile(profile: &Profile, sort_field: MetricField, top_n: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{} ({} functions, sorted by {})\n",
        "Call Profile".bold(),
        profile.len(),
        sort_field
    ));
    out.push_str(&render_call_header());

    for call in profile.top(top_n) {
        out.push_str(&render_call_row(call));
    }

    if profile.len() > top_n {
        out.push_str(&format!("  ... {} more\n", profile.len() - top_n));
    }

    out
}

fn render_call_header() -> String {
    format!(
        "{:<40} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12}\n{}\n",
        "Function", "Calls", "Wall", "Excl. Wall", "CPU", "IO", "Memory",
        "-".repeat(114)
    )
}

fn render_call_row(call: &Call) -> String {
    format!(
        "{:<40} {:>8} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>12.0}\n",
        truncate_name(&call.name, 40),
        call.count,
        call.wall_time,
        call.exclusive_wall_time,
        call.cpu_time,
        call.io_time,
        call.memory
    )
}

/// Render the callers and callees of one function
pub fn render_family(name: &str, family: &NearestFamily) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{} {}\n", "Nearest family of".bold(), name.cyan()));

    out.push_str(&format!("\nParents ({} calls):\n", family.parents_count));
    out.push_str(&render_neighbors(&family.parents));

    out.push_str(&format!("\nChildren ({} calls):\n", family.children_count));
    out.push_str(&render_neighbors(&family.children));

    out
}

fn render_neighbors(neighbors: &PairCallMap) -> String {
    if neighbors.is_empty() {
        return "  (none)\n".to_string();
    }

    let mut rows: Vec<(&String, &PairCall)> = neighbors.iter().collect();
    rows.sort_by(|a, b| b.1.wall_time.total_cmp(&a.1.wall_time).then_with(|| a.0.cmp(b.0)));

    rows.iter()
        .map(|(name, call)| {
            // Root edges and "==>name" edges share the empty caller
            let label = if name.is_empty() { NO_CALLER_LABEL } else { name.as_str() };
            format!(
                "  {:<40} {:>8} calls {:>12.0} wall\n",
                truncate_name(label, 40),
                call.count,
                call.wall_time
            )
        })
        .collect()
}

/// Render the `top_n` largest wall-time changes of a delta map
pub fn render_delta(delta: &PairCallMap, top_n: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "Snapshot Delta (target - baseline)".bold()));
    out.push_str("---------------------------------------------------\n");

    let mut rows: Vec<(&String, &PairCall)> = delta
        .iter()
        .filter(|(_, call)| **call != PairCall::default())
        .collect();

    if rows.is_empty() {
        out.push_str("  No changes\n");
        return out;
    }

    rows.sort_by(|a, b| {
        b.1.wall_time
            .abs()
            .total_cmp(&a.1.wall_time.abs())
            .then_with(|| a.0.cmp(b.0))
    });

    for (key, call) in rows.iter().take(top_n) {
        let line = format!(
            "{} {:<50} {:>+8} calls {:>+12.0} wall {:>+12.0} cpu\n",
            delta_symbol(call.wall_time),
            truncate_name(key, 50),
            call.count,
            call.wall_time,
            call.cpu_time
        );
        let line = if call.wall_time > 0.0 {
            line.red().to_string()
        } else if call.wall_time < 0.0 {
            line.green().to_string()
        } else {
            line
        };
        out.push_str(&line);
    }

    if rows.len() > top_n {
        out.push_str(&format!("  ... {} more changed edges\n", rows.len() - top_n));
    }

    out
}

fn delta_symbol(change: f64) -> &'static str {
    if change > 0.0 {
        "📈"
    } else if change < 0.0 {
        "📉"
    } else {
        "➖"
    }
}

/// Shorten long names with a trailing ellipsis
fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let kept: String = name.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
