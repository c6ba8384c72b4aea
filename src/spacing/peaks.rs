//! Dominant spacing values from a spacing histogram.
//!
//! Peaks are local maxima of the count sequence taken in ascending value
//! order. Values absent from the histogram count as zero, so the smallest or
//! largest value can be a peak. A flat run of equal counts over consecutive
//! values flanked by lower counts yields a single peak at its middle sample. Peaks closer than
//! `min_separation` (in spacing units) to a stronger peak are suppressed.
use super::histogram::{Bin, SpacingHistogram};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeakParams {
    /// Minimum distance between two reported peaks, in spacing units.
    pub min_separation: u32,
    /// Number of strongest peaks reported as dominant spacings.
    pub top_n: usize,
}

impl Default for PeakParams {
    fn default() -> Self {
        Self {
            min_separation: 25,
            top_n: 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Peak {
    pub value: u32,
    pub count: usize,
}

/// Histogram and peak detection outcome for one spacing list.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakAnalysis {
    pub histogram_by_count: Vec<Bin>,
    /// Surviving peaks, strongest first.
    pub peaks: Vec<Peak>,
    /// Values of the `top_n` strongest peaks.
    pub dominant: Vec<u32>,
}

/// Top-2 dominant spacing values with the default separation.
pub fn extract_dominant_peaks(spacings: &[f32]) -> Vec<u32> {
    extract_peaks(spacings, &PeakParams::default()).dominant
}

pub fn extract_peaks(spacings: &[f32], params: &PeakParams) -> PeakAnalysis {
    let hist = SpacingHistogram::from_values(spacings);
    if hist.is_empty() {
        return PeakAnalysis::default();
    }
    let bins = hist.by_value();
    let mut candidates: Vec<Peak> = local_maxima(&bins)
        .into_iter()
        .map(|idx| Peak {
            value: bins[idx].value,
            count: bins[idx].count,
        })
        .collect();
    candidates.sort_by(|a, b| b.count.cmp(&a.count).then(a.value.cmp(&b.value)));

    let mut peaks: Vec<Peak> = Vec::with_capacity(candidates.len());
    for cand in candidates {
        let isolated = peaks
            .iter()
            .all(|kept| kept.value.abs_diff(cand.value) >= params.min_separation);
        if isolated {
            peaks.push(cand);
        }
    }

    let dominant = peaks.iter().take(params.top_n).map(|p| p.value).collect();
    PeakAnalysis {
        histogram_by_count: hist.by_count(),
        peaks,
        dominant,
    }
}

/// Indices of local maxima in `bins` (ascending by value).
///
/// Counts are read on the dense value axis: a value missing from the
/// histogram counts as zero, so equal counts only form a plateau when their
/// values are consecutive.
pub(crate) fn local_maxima(bins: &[Bin]) -> Vec<usize> {
    let n = bins.len();
    let mut maxima = Vec::new();
    let mut start = 0;
    while start < n {
        let count = bins[start].count;
        let mut end = start;
        while end + 1 < n && bins[end + 1].count == count && adjacent(&bins[end], &bins[end + 1])
        {
            end += 1;
        }
        let left = match start.checked_sub(1).map(|i| &bins[i]) {
            Some(prev) if adjacent(prev, &bins[start]) => prev.count,
            _ => 0,
        };
        let right = match bins.get(end + 1) {
            Some(next) if adjacent(&bins[end], next) => next.count,
            _ => 0,
        };
        if count > left && count > right {
            maxima.push((start + end) / 2);
        }
        start = end + 1;
    }
    maxima
}

fn adjacent(a: &Bin, b: &Bin) -> bool {
    a.value.checked_add(1) == Some(b.value)
}
