//! Three-panel text diagnostic of a grid update.
//!
//! Renders prior, likelihood, and posterior as horizontal bar panels with the
//! summary annotations a sanity check wants: the prior and posterior means,
//! the data counts, the evidence, and the highest-density region with its
//! bounds and waterline. Only consumes computed values; nothing here feeds
//! back into the math.
use itertools::Itertools;
use std::fmt::Write;

use crate::data::BernoulliSuffStat;
use crate::hdi::HdiInfo;
use crate::posterior::GridPosterior;
use crate::prior::GridPrior;
use crate::traits::Mean;

/// Rendering knobs for [`three_panel`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Cap on the number of rows per panel. Grids with more teeth are
    /// thinned, always keeping the last tooth. `None` plots every tooth.
    pub max_points: Option<usize>,
    /// Width of a full bar in characters
    pub bar_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            max_points: None,
            bar_width: 40,
        }
    }
}

/// Render prior, likelihood, and posterior panels as text.
///
/// # Example
///
/// ```
/// use berngrid::prelude::*;
/// use berngrid::report::{three_panel, ReportOptions};
///
/// let grid = ParameterGrid::comb(5).unwrap();
/// let prior = GridPrior::uniform(grid);
/// let stat = BernoulliSuffStat::from_parts_unchecked(4, 3);
///
/// let posterior = prior.posterior(&stat).unwrap();
/// let hdi = posterior.hdi(0.95).unwrap();
///
/// let text = three_panel(&prior, &stat, &posterior, &hdi, &ReportOptions::default());
/// assert!(text.contains("Prior"));
/// assert!(text.contains("z=3, N=4"));
/// ```
pub fn three_panel(
    prior: &GridPrior,
    stat: &BernoulliSuffStat,
    posterior: &GridPosterior,
    hdi: &HdiInfo,
    opts: &ReportOptions,
) -> String {
    let rows = thin_indices(prior.len(), opts.max_points);

    let prior_note = match prior.mean() {
        Some(mean) => format!("mean(θ)={:.3}", mean),
        None => String::new(),
    };
    let data_note = format!("data: z={}, N={}", stat.k(), stat.n());
    let posterior_note = match posterior.mean() {
        Some(mean) => format!(
            "mean(θ|D)={:.3}  p(D)={:.3e}",
            mean,
            posterior.evidence()
        ),
        None => String::new(),
    };

    let mut out = String::new();
    panel(
        &mut out,
        "Prior",
        &prior_note,
        prior.thetas(),
        prior.masses(),
        &rows,
        opts.bar_width,
        None,
    );
    out.push('\n');
    panel(
        &mut out,
        "Likelihood",
        &data_note,
        posterior.thetas(),
        posterior.likelihood(),
        &rows,
        opts.bar_width,
        None,
    );
    out.push('\n');
    panel(
        &mut out,
        "Posterior",
        &posterior_note,
        posterior.thetas(),
        posterior.masses(),
        &rows,
        opts.bar_width,
        Some(hdi),
    );

    let bounds = hdi
        .bounds(posterior.thetas())
        .iter()
        .map(|(lo, hi)| format!("[{:.3}, {:.3}]", lo, hi))
        .join(", ");
    let _ = writeln!(
        out,
        "{:.1}% HDI: {} (height {:.4})",
        100.0 * hdi.mass(),
        bounds,
        hdi.height()
    );

    out
}

// Row indices to display: every index, or a strided subset that always
// includes the last tooth.
fn thin_indices(n: usize, max_points: Option<usize>) -> Vec<usize> {
    match max_points {
        Some(m) if m > 0 && n > m => {
            let step = n / m;
            let mut ixs: Vec<usize> = (0..n).step_by(step).collect();
            if ixs.last() != Some(&(n - 1)) {
                ixs.push(n - 1);
            }
            ixs
        }
        _ => (0..n).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn panel(
    out: &mut String,
    title: &str,
    note: &str,
    thetas: &[f64],
    values: &[f64],
    rows: &[usize],
    bar_width: usize,
    hdi: Option<&HdiInfo>,
) {
    let scale = values.iter().cloned().fold(0.0, f64::max);

    let _ = writeln!(out, "{:<12} {}", title, note);
    for &ix in rows {
        let frac = if scale > 0.0 { values[ix] / scale } else { 0.0 };
        let len = (frac * bar_width as f64).round() as usize;
        let bar: String = "█".repeat(len);
        let mark = match hdi {
            Some(info) if info.indices().contains(&ix) => " ◂",
            _ => "",
        };
        let _ = writeln!(
            out,
            "θ={:.3} │{:<width$} {:.4}{}",
            thetas[ix],
            bar,
            values[ix],
            mark,
            width = bar_width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ParameterGrid;
    use crate::traits::SuffStat;

    fn scenario() -> (GridPrior, BernoulliSuffStat, GridPosterior, HdiInfo) {
        let grid = ParameterGrid::new(vec![0.1, 0.3, 0.5, 0.7, 0.9]).unwrap();
        let prior =
            GridPrior::new(grid, vec![0.1, 0.2, 0.4, 0.2, 0.1]).unwrap();
        let mut stat = BernoulliSuffStat::new();
        stat.observe_many(&[1_u8, 1, 1, 0]);
        let posterior = prior.posterior(&stat).unwrap();
        let hdi = posterior.hdi(0.95).unwrap();
        (prior, stat, posterior, hdi)
    }

    #[test]
    fn panels_carry_titles_and_annotations() {
        let (prior, stat, posterior, hdi) = scenario();
        let text = three_panel(
            &prior,
            &stat,
            &posterior,
            &hdi,
            &ReportOptions::default(),
        );

        assert!(text.contains("Prior"));
        assert!(text.contains("Likelihood"));
        assert!(text.contains("Posterior"));
        assert!(text.contains("mean(θ)=0.500"));
        assert!(text.contains("data: z=3, N=4"));
        assert!(text.contains("mean(θ|D)="));
        assert!(text.contains("p(D)="));
        assert!(text.contains("% HDI:"));
        assert!(text.contains("height"));
    }

    #[test]
    fn hdi_rows_are_marked() {
        let (prior, stat, posterior, hdi) = scenario();
        let text = three_panel(
            &prior,
            &stat,
            &posterior,
            &hdi,
            &ReportOptions::default(),
        );
        let marked = text.lines().filter(|l| l.ends_with('◂')).count();
        assert_eq!(marked, hdi.indices().len());
    }

    #[test]
    fn heaviest_row_gets_a_full_bar() {
        let (prior, stat, posterior, hdi) = scenario();
        let opts = ReportOptions {
            bar_width: 10,
            ..Default::default()
        };
        let text = three_panel(&prior, &stat, &posterior, &hdi, &opts);
        assert!(text.contains(&"█".repeat(10)));
    }

    #[test]
    fn thinning_keeps_the_last_tooth() {
        let ixs = thin_indices(1000, Some(10));
        assert!(ixs.len() <= 12);
        assert_eq!(*ixs.last().unwrap(), 999);

        // no thinning when the grid already fits
        assert_eq!(thin_indices(5, Some(10)), vec![0, 1, 2, 3, 4]);
        assert_eq!(thin_indices(3, None), vec![0, 1, 2]);
    }

    #[test]
    fn thinned_report_has_fewer_rows() {
        let grid = ParameterGrid::comb(500).unwrap();
        let prior = GridPrior::uniform(grid);
        let stat = BernoulliSuffStat::from_parts_unchecked(10, 7);
        let posterior = prior.posterior(&stat).unwrap();
        let hdi = posterior.hdi(0.95).unwrap();

        let full = three_panel(
            &prior,
            &stat,
            &posterior,
            &hdi,
            &ReportOptions::default(),
        );
        let thinned = three_panel(
            &prior,
            &stat,
            &posterior,
            &hdi,
            &ReportOptions {
                max_points: Some(20),
                ..Default::default()
            },
        );
        assert!(thinned.lines().count() < full.lines().count());
    }
}
