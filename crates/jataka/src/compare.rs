//! Compatibility comparison between two natal charts.
//!
//! The eight-koota Guna Milan score is computed from the two Moons.
//! Comparison is all-or-nothing: if either chart
//! fails to compute, the whole comparison fails and neither side is
//! returned.

use jataka_vedic::{GunaMilan, MatchGrade, guna_milan};

use crate::chart::NatalChart;
use crate::error::ChartError;
use crate::request::{BirthDetails, ChartOptions};

/// Two charts and their Guna Milan score.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartComparison {
    pub groom: NatalChart,
    pub bride: NatalChart,
    pub milan: GunaMilan,
    /// One-line verdict derived from the grade.
    pub conclusion: String,
}

fn conclusion_text(milan: &GunaMilan) -> String {
    let verdict = match milan.grade {
        MatchGrade::Excellent => "an excellent match",
        MatchGrade::Good => "a good match",
        MatchGrade::Average => "an average match",
        MatchGrade::Poor => "a poor match",
    };
    format!(
        "Obtained {} of 36 points: {}.",
        milan.total, verdict
    )
}

/// Compute both charts and score their compatibility.
///
/// Errors from either chart propagate unchanged, so a bad second input
/// never yields a half-built comparison.
pub fn compare_charts(
    groom: &BirthDetails,
    bride: &BirthDetails,
    options: &ChartOptions,
) -> Result<ChartComparison, ChartError> {
    let groom_chart = NatalChart::compute(groom, options)?;
    let bride_chart = NatalChart::compute(bride, options)?;

    let milan = guna_milan(
        groom_chart.moon().longitude,
        bride_chart.moon().longitude,
    );
    let conclusion = conclusion_text(&milan);

    Ok(ChartComparison {
        groom: groom_chart,
        bride: bride_chart,
        milan,
        conclusion,
    })
}
