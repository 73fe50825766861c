// src/visualization/mod.rs

pub mod forms;
pub mod plotter;
pub mod window;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VisualizationConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub figure_width: u32,
    pub plot_height_per_panel: u32,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            window_width: 420,
            window_height: 900,
            figure_width: 600,
            plot_height_per_panel: 180,
            show_legend: true,
            show_grid: true,
        }
    }
}

/// Blocking informational message shown on top of the main window.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
