// ui.rs - egui front end: controls, camera input and cluster drawing

use eframe::egui;
use egui::{Color32, PointerButton, Rect, Sense, Stroke, Vec2};
use std::time::Instant;

use crate::LifeApp;
use cluster_life::PATTERNS;

impl LifeApp {
    fn simulation_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Simulation");
        ui.horizontal(|ui| {
            if ui.toggle_value(&mut self.is_running, "Run").changed() && self.is_running {
                self.last_update = Instant::now();
            }
            if ui.add_enabled(!self.is_running, egui::Button::new("Step")).clicked() {
                self.step();
            }
        });
        ui.add(
            egui::DragValue::new(&mut self.target_rate)
                .clamp_range(0.5..=120.0)
                .speed(0.5)
                .suffix(" gen/s"),
        );
    }

    fn seeding_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Seeding");
        ui.horizontal(|ui| {
            ui.add(
                egui::DragValue::new(&mut self.scatter_count)
                    .clamp_range(0..=200_000)
                    .speed(100.0),
            );
            if ui.button("Scatter").clicked() {
                self.scatter_random();
            }
        });

        ui.label("Stamp at view centre:");
        ui.horizontal_wrapped(|ui| {
            for pattern in PATTERNS {
                if ui.small_button(pattern.name).clicked() {
                    self.stamp_pattern(pattern);
                }
            }
        });

        if ui.button("Clear world").clicked() {
            self.is_running = false;
            self.clear();
        }
    }

    fn stats_section(&self, ui: &mut egui::Ui) {
        let world = self.world();
        let paused = world.clusters().filter(|c| c.is_paused()).count();

        ui.heading("World");
        egui::Grid::new("world_stats").num_columns(2).striped(true).show(ui, |ui| {
            ui.label("Generation");
            ui.label(world.generation().to_string());
            ui.end_row();
            ui.label("Clusters");
            ui.label(world.cluster_count().to_string());
            ui.end_row();
            ui.label("Paused");
            ui.label(paused.to_string());
            ui.end_row();
            ui.label("Live cells");
            ui.label(world.population().to_string());
            ui.end_row();
        });
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // At most one generation per frame
        if self.is_running && self.last_update.elapsed() >= self.frame_interval() {
            self.step();
            self.last_update = Instant::now();
        }

        egui::SidePanel::left("controls").resizable(false).show(ctx, |ui| {
            self.simulation_section(ui);
            ui.separator();
            self.seeding_section(ui);
            ui.separator();
            self.stats_section(ui);
            ui.separator();
            ui.small("Drag: pan  Scroll: zoom\nClick (stopped): toggle  Right-drag: paint");
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let canvas = response.rect;
                let center = canvas.center();

                // Camera input
                if response.dragged_by(PointerButton::Primary) {
                    let delta = response.drag_delta();
                    self.camera.pan(delta.x, delta.y);
                }
                if response.hovered() {
                    let scroll = ui.input(|i| i.scroll_delta.y);
                    if scroll != 0.0 {
                        if let Some(pos) = response.hover_pos() {
                            let factor = (scroll / 200.0).exp();
                            self.camera.zoom_at(factor, (pos.x - center.x, pos.y - center.y));
                        }
                    }
                }

                // Cell editing
                if let Some(pos) = response.interact_pointer_pos() {
                    let (x, y) = self.camera.to_world(pos.x - center.x, pos.y - center.y);
                    if response.dragged_by(PointerButton::Secondary) {
                        self.set_cell(x, y, true);
                    } else if !self.is_running && response.clicked() {
                        self.toggle_cell(x, y);
                    }
                }

                let camera = self.camera;
                let cell_px = camera.cell_px;
                let to_rect = |x: i64, y: i64, w: f32, h: f32| {
                    let (sx, sy) = camera.to_screen(x, y);
                    Rect::from_min_size(egui::pos2(center.x + sx, center.y + sy), Vec2::new(w, h))
                };

                for cluster in self.world().clusters() {
                    let (origin_x, origin_y) = cluster.origin();
                    let bounds = to_rect(
                        origin_x,
                        origin_y,
                        cluster.width() as f32 * cell_px,
                        cluster.height() as f32 * cell_px,
                    );
                    if !bounds.intersects(canvas) {
                        continue;
                    }

                    let outline = if cluster.is_paused() { self.paused_color } else { self.cluster_color };
                    painter.rect_stroke(bounds, 0.0, Stroke::new(1.0, outline));

                    for (x, y) in cluster.live_cells() {
                        painter.rect_filled(to_rect(x, y, cell_px, cell_px), 0.0, self.live_color);
                    }
                }
            });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
