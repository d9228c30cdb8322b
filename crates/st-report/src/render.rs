//! Text table, CSV, and JSON rendering.

use crate::error::ReportResult;
use crate::types::SolveReport;

/// Human-readable summary: per-layer resistances, flux, interface temperatures.
pub fn render_table(report: &SolveReport) -> String {
    let mut out = String::new();

    out.push_str("Layer resistances (m²·K/W):\n");
    for (i, r) in report.layer_resistances_m2_k_per_w.iter().enumerate() {
        out.push_str(&format!("  R{} = {:.5}\n", i + 1, r));
    }
    out.push_str(&format!(
        "  R_total = {:.5}\n",
        report.r_total_m2_k_per_w
    ));
    out.push_str(&format!("Heat flux q = {:.3} W/m²\n", report.q_w_per_m2));

    out.push_str("Interface temperatures:\n");
    for (i, p) in report.profile.iter().enumerate() {
        out.push_str(&format!(
            "  T{} = {:>8.3} °C  at x = {:.4} m\n",
            i + 1,
            p.temperature_c,
            p.position_m
        ));
    }

    out
}

/// Profile as CSV with a header row.
pub fn to_csv(report: &SolveReport) -> String {
    let mut csv = String::from("position_m,temperature_c\n");
    for p in &report.profile {
        csv.push_str(&format!("{},{}\n", p.position_m, p.temperature_c));
    }
    csv
}

/// Full report as pretty-printed JSON.
pub fn to_json(report: &SolveReport) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
