// src/visualization/plotter.rs

use crate::processing::{SampledWaveform, SignalParameters, SynthesisResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Solid,
    Dashed,
    /// Solid black line used for the summed signal.
    Emphasis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub style: SeriesStyle,
    pub points: Vec<[f64; 2]>,
}

impl PlotSeries {
    fn new(label: impl Into<String>, style: SeriesStyle, waveform: &SampledWaveform) -> Self {
        Self {
            label: label.into(),
            style,
            points: waveform.points(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPanel {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: String,
    pub series: Vec<PlotSeries>,
}

/// A titled stack of panels that share a time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFigure {
    pub title: String,
    pub panels: Vec<PlotPanel>,
}

impl PlotFigure {
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let mut times = self
            .panels
            .iter()
            .flat_map(|panel| panel.series.iter())
            .flat_map(|series| series.points.iter().map(|p| p[0]));

        let first = times.next()?;
        Some(times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

/// One panel per signal (sine solid, cosine dashed) plus the synthesis panel.
pub fn synthesis_figure(signals: &[SignalParameters], result: &SynthesisResult) -> PlotFigure {
    let mut panels: Vec<PlotPanel> = signals
        .iter()
        .zip(result.sines.iter().zip(result.cosines.iter()))
        .enumerate()
        .map(|(i, (signal, (sine, cosine)))| {
            let index = i + 1;
            PlotPanel {
                title: format!(
                    "Signal {}: A={}, f={} Hz, θ={} rad",
                    index, signal.amplitude, signal.frequency_hz, signal.phase_rad
                ),
                x_label: None,
                y_label: "Amplitude".to_string(),
                series: vec![
                    PlotSeries::new(format!("S{} (sin)", index), SeriesStyle::Solid, sine),
                    PlotSeries::new(format!("C{} (cos)", index), SeriesStyle::Dashed, cosine),
                ],
            }
        })
        .collect();

    panels.push(PlotPanel {
        title: "Synthesis signal (sum)".to_string(),
        x_label: Some("t (s)".to_string()),
        y_label: "Amplitude".to_string(),
        series: vec![PlotSeries::new(
            "Synthesis",
            SeriesStyle::Emphasis,
            &result.sum,
        )],
    });

    PlotFigure {
        title: "Sine, cosine and synthesis signals".to_string(),
        panels,
    }
}

pub fn fourier_figure(waveform: &SampledWaveform) -> PlotFigure {
    PlotFigure {
        title: "Fourier series reconstruction".to_string(),
        panels: vec![PlotPanel {
            title: "Fourier series reconstruction".to_string(),
            x_label: Some("t (s)".to_string()),
            y_label: "x(t)".to_string(),
            series: vec![PlotSeries::new(
                "Fourier series",
                SeriesStyle::Solid,
                waveform,
            )],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{linspace, reconstruct, synthesize, FourierParameters};

    #[test]
    fn synthesis_figure_has_a_panel_per_signal_plus_sum() {
        let signals = [
            SignalParameters::new(1.0, 1.0, 0.0),
            SignalParameters::new(2.0, 3.0, 0.5),
            SignalParameters::new(1.0, 5.0, -1.0),
        ];
        let time_axis = linspace(0.0, 1.0, 100);
        let result = synthesize(&signals, &time_axis);
        let figure = synthesis_figure(&signals, &result);

        assert_eq!(figure.panels.len(), 4);
        assert_eq!(figure.panels[1].title, "Signal 2: A=2, f=3 Hz, θ=0.5 rad");
        assert_eq!(figure.panels[1].series[0].label, "S2 (sin)");
        assert_eq!(figure.panels[1].series[1].label, "C2 (cos)");
        assert_eq!(figure.panels[1].series[1].style, SeriesStyle::Dashed);
        assert!(figure.panels[..3].iter().all(|p| p.x_label.is_none()));

        let sum_panel = &figure.panels[3];
        assert_eq!(sum_panel.x_label.as_deref(), Some("t (s)"));
        assert_eq!(sum_panel.series[0].style, SeriesStyle::Emphasis);
        assert_eq!(sum_panel.series[0].points, result.sum.points());
        assert_eq!(figure.time_range(), Some((0.0, 1.0)));
    }

    #[test]
    fn fourier_figure_plots_one_labelled_line() {
        let params = FourierParameters {
            dc_term: 2.0,
            cosine_coeffs: vec![1.0],
            sine_coeffs: vec![0.0],
            fundamental_angular_freq: 1.0,
            period: 4.0,
        };
        let waveform = reconstruct(&params, 50).unwrap();
        let figure = fourier_figure(&waveform);

        assert_eq!(figure.panels.len(), 1);
        assert_eq!(figure.panels[0].y_label, "x(t)");
        assert_eq!(figure.panels[0].series[0].label, "Fourier series");
        assert_eq!(figure.panels[0].series[0].points.len(), 50);
        assert_eq!(figure.time_range(), Some((0.0, 4.0)));
    }

    #[test]
    fn empty_figure_has_no_time_range() {
        let figure = PlotFigure {
            title: String::new(),
            panels: Vec::new(),
        };
        assert_eq!(figure.time_range(), None);
    }
}
