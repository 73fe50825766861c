// src/processing/waveform.rs

/// A discrete (time, amplitude) sequence. `amplitude[i]` is the value at
/// `time[i]`; both vectors always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledWaveform {
    time: Vec<f64>,
    amplitude: Vec<f64>,
}

impl SampledWaveform {
    /// Evaluates `f` at every point of `time_axis`.
    pub fn from_fn<F>(time_axis: &[f64], f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            time: time_axis.to_vec(),
            amplitude: time_axis.iter().map(|&t| f(t)).collect(),
        }
    }

    /// A waveform that is zero at every point of `time_axis`.
    pub fn zeros(time_axis: &[f64]) -> Self {
        Self {
            time: time_axis.to_vec(),
            amplitude: vec![0.0; time_axis.len()],
        }
    }

    pub fn time_axis(&self) -> &[f64] {
        &self.time
    }

    pub fn amplitude_axis(&self) -> &[f64] {
        &self.amplitude
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Returns a new waveform whose amplitude is the pointwise sum of both.
    /// Both waveforms must share the same time axis.
    pub fn added(&self, other: &SampledWaveform) -> SampledWaveform {
        debug_assert_eq!(self.len(), other.len());
        SampledWaveform {
            time: self.time.clone(),
            amplitude: self
                .amplitude
                .iter()
                .zip(other.amplitude.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    /// (time, amplitude) pairs, the shape the plotter consumes.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(self.amplitude.iter())
            .map(|(&t, &a)| [t, a])
            .collect()
    }
}

/// `count` evenly spaced points over `[start, end]`, both endpoints included.
///
/// A count of 1 yields `[start]` and a count of 0 yields an empty grid; callers
/// that need a meaningful axis check `count >= 2` themselves.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut grid: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // pin the last point so the grid closes exactly on `end`
            grid[count - 1] = end;
            grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linspace_includes_both_endpoints() {
        let grid = linspace(0.0, 1.0, 5);
        assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_closes_exactly_on_end() {
        let period = 2.0 * std::f64::consts::PI;
        let grid = linspace(0.0, period, 1000);
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[999], period);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
    }

    #[test]
    fn added_sums_pointwise() {
        let t = linspace(0.0, 1.0, 4);
        let a = SampledWaveform::from_fn(&t, |x| x);
        let b = SampledWaveform::from_fn(&t, |x| 2.0 * x);
        let sum = a.added(&b);
        assert_eq!(sum.time_axis(), t.as_slice());
        for (i, &x) in t.iter().enumerate() {
            assert_abs_diff_eq!(sum.amplitude_axis()[i], 3.0 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn points_pair_time_with_amplitude() {
        let t = [0.0, 0.5];
        let w = SampledWaveform::from_fn(&t, |x| x + 1.0);
        assert_eq!(w.points(), vec![[0.0, 1.0], [0.5, 1.5]]);
    }
}
