// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interactive mousenorm demo.
//!
//! A small egui application that normalizes the hovered pointer position
//! against the canvas rectangle live, with controls for the origin spec,
//! clamping, and axis inversion.

use anyhow::Result;
use mousenorm::{normalize, NormalizeOptions, NormalizedPosition, Origin, Point};

/// Demo application state.
struct DemoApp {
    /// Origin spec as typed by the user, e.g. "50% 50%"
    origin_spec: String,

    /// Clamp results to [-1, 1]
    clamp: bool,

    /// Invert the x axis
    invert_x: bool,

    /// Invert the y axis
    invert_y: bool,

    /// Most recent normalization result
    last: Option<NormalizedPosition>,
}

impl Default for DemoApp {
    fn default() -> Self {
        Self {
            origin_spec: "50% 50%".to_owned(),
            clamp: true,
            invert_x: false,
            invert_y: false,
            last: None,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.show_controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_canvas(ui);

            // Readout strip at the bottom
            ui.separator();
            ui.horizontal(|ui| match self.last {
                Some(result) => {
                    ui.monospace(format!("x: {:+.3}  y: {:+.3}", result.x, result.y));
                    ui.separator();
                    ui.monospace(format!(
                        "origin: ({:.2}, {:.2})",
                        result.origin.x, result.origin.y
                    ));
                    ui.separator();
                    ui.monospace(format!(
                        "size: {:.0} x {:.0}",
                        result.size.width, result.size.height
                    ));
                }
                None => {
                    ui.label("Move the pointer over the canvas");
                }
            });
        });
    }
}

impl DemoApp {
    /// Display the control strip for origin, clamp and inversion settings.
    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            ui.label("Origin:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.origin_spec).desired_width(100.0),
            );
            if response.changed() {
                log::info!("Origin spec set to {:?}", self.origin_spec);
            }

            ui.separator();

            ui.checkbox(&mut self.clamp, "Clamp");
            ui.checkbox(&mut self.invert_x, "Invert X");
            ui.checkbox(&mut self.invert_y, "Invert Y");

            ui.separator();

            ui.label(
                egui::RichText::new("Two tokens, percentages or 0-100 numbers, e.g. \"0 100%\"")
                    .italics()
                    .weak(),
            );
        });
    }

    /// Display the canvas and normalize the hovered pointer against it.
    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

        // Leave room for the readout strip below
        let mut available = ui.available_size();
        available.y = (available.y - 32.0).max(50.0);

        egui::Frame::canvas(ui.style()).show(ui, |ui| {
            let (rect, response) = ui.allocate_exact_size(available, egui::Sense::hover());

            let options = NormalizeOptions {
                origin: Origin::parse(&self.origin_spec),
                clamp: self.clamp,
                invert_x: self.invert_x,
                invert_y: self.invert_y,
            };

            if let Some(pos) = response.hover_pos() {
                // Pointer position local to the canvas rect
                let local = Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
                self.last = Some(normalize(local, &rect, &options));
            }

            let painter = ui.painter();

            // Crosshair through the origin point
            let origin = options.origin;
            if origin.x.is_finite() && origin.y.is_finite() {
                let origin_pos = egui::pos2(
                    rect.min.x + rect.width() * (origin.x as f32),
                    rect.min.y + rect.height() * (origin.y as f32),
                );
                let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(100));
                painter.line_segment(
                    [
                        egui::pos2(rect.min.x, origin_pos.y),
                        egui::pos2(rect.max.x, origin_pos.y),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        egui::pos2(origin_pos.x, rect.min.y),
                        egui::pos2(origin_pos.x, rect.max.y),
                    ],
                    stroke,
                );
                painter.circle_stroke(origin_pos, 5.0, egui::Stroke::new(1.5, egui::Color32::YELLOW));
            }

            // Pointer marker
            if let Some(pos) = response.hover_pos() {
                painter.circle_filled(pos, 4.0, egui::Color32::LIGHT_BLUE);
                painter.circle_stroke(pos, 4.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
            }
        });
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("mousenorm demo"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "mousenorm demo",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::default()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
