//! Terminal line chart of temperature vs position.
//!
//! Character-cell rendering only; good enough to see the kinks at layer
//! interfaces without pulling in a plotting backend.

use crate::types::{ProfileRecord, SolveReport};

/// Chart geometry and title.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: usize,
    pub height: usize,
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 18,
            title: "Temperature Distribution".to_string(),
        }
    }
}

const Y_GUTTER: usize = 9;

/// Render the profile as an ASCII line chart with labeled axes.
pub fn render_chart(report: &SolveReport, cfg: &ChartConfig) -> String {
    let profile = &report.profile;
    if profile.len() < 2 {
        return format!("{}\n(profile too short to chart)\n", cfg.title);
    }

    let width = cfg.width.max(16);
    let height = cfg.height.max(4);

    let x_min = profile[0].position_m;
    let x_max = profile[profile.len() - 1].position_m;
    let span = x_max - x_min;

    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    for p in profile {
        t_min = t_min.min(p.temperature_c);
        t_max = t_max.max(p.temperature_c);
    }
    // Flat profile: widen the range so the line sits mid-chart
    if t_max - t_min <= 0.0 {
        t_min -= 0.5;
        t_max += 0.5;
    }

    let mut grid = vec![vec![' '; width]; height];
    for col in 0..width {
        let frac = col as f64 / (width - 1) as f64;
        let x = x_min + span * frac;
        let t = sample_temperature(profile, x);
        let row_f = (t_max - t) / (t_max - t_min) * (height - 1) as f64;
        let row = (row_f.round() as usize).min(height - 1);
        grid[row][col] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!("{:>gutter$}{}\n", "", cfg.title, gutter = Y_GUTTER));
    out.push_str("Temperature (C)\n");
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            format!("{:>8.1} ", t_max)
        } else if row == height - 1 {
            format!("{:>8.1} ", t_min)
        } else if row == height / 2 {
            format!("{:>8.1} ", t_max - (t_max - t_min) / 2.0)
        } else {
            " ".repeat(Y_GUTTER)
        };
        out.push_str(&label);
        out.push('|');
        out.push_str(&cells.iter().collect::<String>());
        out.push('\n');
    }
    out.push_str(&" ".repeat(Y_GUTTER));
    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str(&format!(
        "{:>gutter$} {:<w_left$}{:>w_right$}\n",
        "",
        format!("{:.3}", x_min),
        format!("{:.3}", x_max),
        gutter = Y_GUTTER,
        w_left = width / 2,
        w_right = width - width / 2,
    ));
    out.push_str(&format!(
        "{:>pad$}\n",
        "X-location",
        pad = Y_GUTTER + width / 2 + 5
    ));
    out
}

/// Piecewise-linear temperature at position x, clamped to the profile ends.
fn sample_temperature(profile: &[ProfileRecord], x: f64) -> f64 {
    if x <= profile[0].position_m {
        return profile[0].temperature_c;
    }
    for pair in profile.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if x <= b.position_m {
            let run = b.position_m - a.position_m;
            if run <= 0.0 {
                return b.temperature_c;
            }
            let f = (x - a.position_m) / run;
            return a.temperature_c + f * (b.temperature_c - a.temperature_c);
        }
    }
    profile[profile.len() - 1].temperature_c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick_report() -> SolveReport {
        SolveReport {
            q_w_per_m2: 140.0,
            r_total_m2_k_per_w: 1.0,
            layer_resistances_m2_k_per_w: vec![0.42857, 0.14286, 0.42857],
            profile: vec![
                ProfileRecord {
                    position_m: 0.0,
                    temperature_c: 150.0,
                },
                ProfileRecord {
                    position_m: 0.03,
                    temperature_c: 90.0,
                },
                ProfileRecord {
                    position_m: 0.13,
                    temperature_c: 70.0,
                },
                ProfileRecord {
                    position_m: 0.16,
                    temperature_c: 10.0,
                },
            ],
        }
    }

    #[test]
    fn sample_interpolates_within_layers() {
        let report = brick_report();
        // Midpoint of the middle layer: halfway between 90 and 70
        let t = sample_temperature(&report.profile, 0.08);
        assert!((t - 80.0).abs() < 1e-9);
        // Clamped outside the slab
        assert_eq!(sample_temperature(&report.profile, -1.0), 150.0);
        assert_eq!(sample_temperature(&report.profile, 1.0), 10.0);
    }

    #[test]
    fn chart_carries_title_and_axis_labels() {
        let cfg = ChartConfig {
            title: "Temperature Distribution Across Brick Wall".to_string(),
            ..ChartConfig::default()
        };
        let chart = render_chart(&brick_report(), &cfg);
        assert!(chart.contains("Temperature Distribution Across Brick Wall"));
        assert!(chart.contains("Temperature (C)"));
        assert!(chart.contains("X-location"));
        assert!(chart.contains('*'));
    }

    #[test]
    fn chart_has_expected_row_count() {
        let cfg = ChartConfig::default();
        let chart = render_chart(&brick_report(), &cfg);
        let plot_rows = chart.lines().filter(|l| l.contains('|')).count();
        assert_eq!(plot_rows, cfg.height);
    }

    #[test]
    fn short_profile_degrades_gracefully() {
        let report = SolveReport {
            q_w_per_m2: 0.0,
            r_total_m2_k_per_w: 1.0,
            layer_resistances_m2_k_per_w: vec![1.0],
            profile: vec![ProfileRecord {
                position_m: 0.0,
                temperature_c: 20.0,
            }],
        };
        let chart = render_chart(&report, &ChartConfig::default());
        assert!(chart.contains("too short"));
    }
}
