// src/visualization/window.rs

use super::forms::{signal_forms, FourierForm, NumericField, SignalForm};
use super::plotter::{fourier_figure, synthesis_figure, PlotFigure, SeriesStyle};
use super::{Notice, VisualizationConfig};
use crate::config::AppConfig;
use crate::error::ConfigurationError;
use crate::processing::{linspace, reconstruct, synthesize, REFERENCE_TABLE};
use crate::utils::log::Logger;

const WINDOW_TITLE: &str = "Sine/Cosine and Fourier Series Plotter";

pub struct PlotterWindow {
    config: AppConfig,
    logger: Logger,
    signal_forms: Vec<SignalForm>,
    fourier_form: FourierForm,
    synthesis_figure: Option<PlotFigure>,
    fourier_figure: Option<PlotFigure>,
    notice: Option<Notice>,
}

impl PlotterWindow {
    pub fn new(config: AppConfig) -> Self {
        let logger = Logger::new(&config.processor);
        Self {
            signal_forms: signal_forms(&config.synthesis),
            fourier_form: FourierForm::new(&config.fourier),
            synthesis_figure: None,
            fourier_figure: None,
            notice: None,
            logger,
            config,
        }
    }

    /// Opens the window. `config` must pass `AppConfig::validate`; `load_config`
    /// already checks this.
    pub fn run(config: AppConfig) -> Result<(), eframe::Error> {
        config
            .validate()
            .map_err(|e: ConfigurationError| eframe::Error::AppCreation(Box::new(e)))?;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([
                    config.visualization.window_width as f32,
                    config.visualization.window_height as f32,
                ])
                .with_title(WINDOW_TITLE),
            ..Default::default()
        };

        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotterWindow::new(config)))),
        )
    }

    // ACTIONS -----------------------------------------------------------------

    /// Samples every signal form over the configured time grid.
    pub fn show_synthesis(&mut self) {
        let synthesis = &self.config.synthesis;
        let time_axis = linspace(0.0, synthesis.duration_s, synthesis.sample_count);
        let signals: Vec<_> = self.signal_forms.iter().map(SignalForm::parameters).collect();

        let result = synthesize(&signals, &time_axis);
        self.logger.debug(&format!("synthesis inputs: {:?}", signals));
        self.logger.info(&format!(
            "Plotted {} signals over {} samples",
            signals.len(),
            time_axis.len()
        ));
        self.synthesis_figure = Some(synthesis_figure(&signals, &result));
    }

    /// Reconstructs the series from the Fourier form, or raises a notice.
    pub fn show_fourier(&mut self) {
        let params = self.fourier_form.parameters();
        self.logger.debug(&format!("fourier inputs: {:?}", params));

        match reconstruct(&params, self.config.fourier.sample_count) {
            Ok(waveform) => {
                self.logger.info(&format!(
                    "Reconstructed Fourier series with {} harmonics over T={}",
                    params.cosine_coeffs.len(),
                    params.period
                ));
                self.fourier_figure = Some(fourier_figure(&waveform));
            }
            Err(e) => {
                self.logger.error(&format!("Fourier reconstruction failed: {}", e));
                self.notice = Some(Notice::new("Invalid Fourier parameters", e.to_string()));
            }
        }
    }

    /// Loads the reference coefficient table into the Fourier form.
    pub fn analyze_signal(&mut self) {
        self.fourier_form.apply_reference(&REFERENCE_TABLE);
        self.logger.info("Loaded reference coefficient table");
        self.notice = Some(Notice::new(
            "Analysis complete",
            "Analysis complete: the periodic signal's coefficients were set from the table.",
        ));
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn synthesis_figure(&self) -> Option<&PlotFigure> {
        self.synthesis_figure.as_ref()
    }

    pub fn fourier_figure(&self) -> Option<&PlotFigure> {
        self.fourier_figure.as_ref()
    }

    pub fn signal_forms_mut(&mut self) -> &mut [SignalForm] {
        &mut self.signal_forms
    }

    pub fn fourier_form_mut(&mut self) -> &mut FourierForm {
        &mut self.fourier_form
    }

    // DRAWING -----------------------------------------------------------------

    fn draw_inputs(&mut self, ui: &mut egui::Ui) {
        let mut synthesis_clicked = false;
        let mut fourier_clicked = false;
        let mut analyze_clicked = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for form in self.signal_forms.iter_mut() {
                ui.heading(form.title());
                egui::Grid::new(("signal_form", form.index))
                    .num_columns(2)
                    .show(ui, |ui| {
                        for field in form.fields_mut() {
                            numeric_row(ui, field);
                        }
                    });
                ui.add_space(4.0);
            }
            synthesis_clicked = ui.button("Show sin/cos plots").clicked();
            ui.separator();

            ui.heading("Fourier series");
            egui::Grid::new("fourier_form")
                .num_columns(2)
                .show(ui, |ui| {
                    for field in self.fourier_form.fields_mut() {
                        numeric_row(ui, field);
                    }
                });
            fourier_clicked = ui.button("Show Fourier series plot").clicked();
            ui.separator();

            analyze_clicked = ui.button("Analyze periodic signal").clicked();
        });

        if synthesis_clicked {
            self.show_synthesis();
        }
        if fourier_clicked {
            self.show_fourier();
        }
        if analyze_clicked {
            self.analyze_signal();
        }
    }

    fn draw_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.clone())
            .id(egui::Id::new("notice"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.message.as_str());
                ui.add_space(8.0);
                dismissed = ui.button("OK").clicked();
            });

        if dismissed {
            self.dismiss_notice();
        }
    }
}

impl eframe::App for PlotterWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // the notice blocks every other interaction until dismissed
        let blocked = self.notice.is_some();

        egui::SidePanel::left("inputs")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| self.draw_inputs(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(WINDOW_TITLE);
            ui.label("Set the parameters on the left and press a button to plot.");
        });

        let visualization = &self.config.visualization;
        if !show_figure_window(ctx, "synthesis_figure", &self.synthesis_figure, visualization, blocked) {
            self.synthesis_figure = None;
        }
        if !show_figure_window(ctx, "fourier_figure", &self.fourier_figure, visualization, blocked) {
            self.fourier_figure = None;
        }

        self.draw_notice(ctx);
    }
}

fn numeric_row(ui: &mut egui::Ui, field: &mut NumericField) {
    ui.label(field.label.as_str());
    let range = field.range;
    ui.add(
        egui::DragValue::new(field.value_mut())
            .range(range.min..=range.max)
            .speed(range.step)
            .max_decimals(4),
    );
    field.clamp();
    ui.end_row();
}

/// Returns false once the user has closed the window.
fn show_figure_window(
    ctx: &egui::Context,
    id: &str,
    figure: &Option<PlotFigure>,
    config: &VisualizationConfig,
    blocked: bool,
) -> bool {
    let Some(figure) = figure else {
        return true;
    };

    let mut open = true;
    egui::Window::new(figure.title.clone())
        .id(egui::Id::new(id))
        .open(&mut open)
        .enabled(!blocked)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| plot_figure(ui, id, figure, config));
        });
    open
}

fn plot_figure(ui: &mut egui::Ui, id: &str, figure: &PlotFigure, config: &VisualizationConfig) {
    // Import from egui_plot crate, not egui::plot
    use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

    let emphasis = ui.visuals().strong_text_color();

    for (i, panel) in figure.panels.iter().enumerate() {
        ui.label(egui::RichText::new(panel.title.as_str()).strong());

        let mut plot = Plot::new(format!("{}_{}", id, i))
            .height(config.plot_height_per_panel as f32)
            .width(config.figure_width as f32)
            .show_axes([true, true])
            .show_grid([config.show_grid, config.show_grid])
            .y_axis_label(panel.y_label.clone());
        if let Some(x_label) = &panel.x_label {
            plot = plot.x_axis_label(x_label.clone());
        }
        if config.show_legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for series in &panel.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                let line = Line::new(points).name(&series.label);
                let line = match series.style {
                    SeriesStyle::Solid => line.width(1.5),
                    SeriesStyle::Dashed => line.style(LineStyle::dashed_loose()).width(1.5),
                    SeriesStyle::Emphasis => line.color(emphasis).width(2.0),
                };
                plot_ui.line(line);
            }
        });
        ui.add_space(6.0);
    }
}
