// main.rs - egui front end for the toroidal Life engine.
//
// Everything algorithmic lives in life_engine; this binary is the host
// side of its contracts: the frame scheduler (egui repaint requests), the
// renderer (painting straight from cells_view), and the input decoder
// (pointer coordinates to row/col, modifier keys to toggle vs. stamp).

use eframe::egui;
use egui::{Color32, Rect, Sense, Stroke, Vec2};
use std::time::{Duration, Instant};

use life_engine::{Cell, FrameScheduler, Grid, LifeError, PATTERNS, Session, names};

const GRID_WIDTH: u32 = 64;
const GRID_HEIGHT: u32 = 64;
const CELL_SIZE: f32 = 12.0;
const INITIAL_SEED: u32 = 0;
const PULSAR_ID: usize = 4;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([880.0, 1020.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Toroidal Game of Life",
        options,
        Box::new(|cc| Box::new(LifeApp::new(cc.egui_ctx.clone()))),
    )
}

/// Frame scheduler backed by egui repaint requests. There is no timer to
/// revoke; pausing simply stops the app from requesting further repaints,
/// so cancel has nothing to do.
struct Repaint {
    ctx: egui::Context,
}

impl FrameScheduler for Repaint {
    type Handle = ();

    fn schedule(&mut self) {
        self.ctx.request_repaint();
    }

    fn cancel(&mut self, _handle: ()) {}
}

struct LifeApp {
    session: Session<Repaint>,
    last_update: Instant,
    update_interval: Duration,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
    status: Option<String>,
    next_seed: u32,

    grid_history: [u64; 10],
    history_count: usize,
}

impl LifeApp {
    fn new(ctx: egui::Context) -> Self {
        let grid = Grid::seeded(GRID_WIDTH, GRID_HEIGHT, INITIAL_SEED)
            .expect("grid dimensions are non-zero constants");

        Self {
            session: Session::new(grid, Repaint { ctx }),
            last_update: Instant::now(),
            update_interval: Duration::from_millis(100),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(30, 30, 30),
            selected_pattern: 3,
            status: None,
            next_seed: INITIAL_SEED.wrapping_add(1),
            grid_history: [0; 10],
            history_count: 0,
        }
    }

    fn toggle_play_pause(&mut self) {
        if self.session.is_running() {
            self.session.pause();
        } else {
            self.session.play();
            self.last_update = Instant::now();
        }
    }

    fn reset_history(&mut self) {
        self.grid_history = [0; 10];
        self.history_count = 0;
    }

    /// Rolling-window repeat detection over recent board hashes.
    fn cycle_detected(&mut self) -> bool {
        let hash = self.session.grid().state_hash();
        if self.grid_history.contains(&hash) {
            return true;
        }
        self.grid_history[self.history_count % self.grid_history.len()] = hash;
        self.history_count += 1;
        false
    }

    fn report(&mut self, edit: Result<(), LifeError>) {
        match edit {
            Ok(()) => self.status = None,
            Err(err) => self.status = Some(err.to_string()),
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard shortcuts: 1-4 pick a glider rotation, P toggles play.
        let (pattern_key, play_key) = ctx.input(|i| {
            let pattern = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3, egui::Key::Num4]
                .iter()
                .position(|&key| i.key_pressed(key));
            (pattern, i.key_pressed(egui::Key::P))
        });
        if let Some(id) = pattern_key {
            self.selected_pattern = id;
        }
        if play_key {
            self.toggle_play_pause();
        }

        // Advance on the tick cadence while running.
        if self.session.is_running() && self.last_update.elapsed() >= self.update_interval {
            self.session.tick();
            self.last_update = Instant::now();
            if self.cycle_detected() {
                self.session.pause();
                self.status = Some("cycle detected, paused".to_owned());
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Toroidal Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.session.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_play_pause();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.session.pause();
                    self.session.clear();
                    self.reset_history();
                }

                if ui.button("🎲 Random").clicked() {
                    self.session.randomize(self.next_seed);
                    self.next_seed = self.next_seed.wrapping_add(1);
                    self.reset_history();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (id, name) in names().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, id, name);
                        }
                    });

                if ui.button("Stamp at center").clicked() {
                    let edit = self
                        .session
                        .stamp(self.selected_pattern, GRID_HEIGHT / 2, GRID_WIDTH / 2);
                    self.report(edit);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.session.generation()));
            });

            ui.separator();

            // Speed control and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click toggles a cell. Ctrl+click stamps the selected pattern, shift+click stamps a pulsar.");
            ui.label("Keys 1-4 pick a glider rotation, P toggles play/pause. The board wraps at every edge.");

            if let Some(status) = &self.status {
                ui.colored_label(Color32::RED, status);
            }

            ui.separator();

            // Board: cells on a 1px gridline lattice,
            // pixel = index * (CELL_SIZE + 1) + 1.
            let total_size = Vec2::new(
                GRID_WIDTH as f32 * (CELL_SIZE + 1.0) + 1.0,
                GRID_HEIGHT as f32 * (CELL_SIZE + 1.0) + 1.0,
            );
            let (response, painter) = ui.allocate_painter(total_size, Sense::click());
            let origin = response.rect.min;

            // The background shows through the gaps as the gridlines.
            painter.rect_filled(response.rect, 0.0, Color32::from_gray(70));
            painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(70)));

            let cells = self.session.grid().cells_view();
            for row in 0..GRID_HEIGHT {
                for col in 0..GRID_WIDTH {
                    let idx = (row * GRID_WIDTH + col) as usize;
                    let x = origin.x + col as f32 * (CELL_SIZE + 1.0) + 1.0;
                    let y = origin.y + row as f32 * (CELL_SIZE + 1.0) + 1.0;
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(CELL_SIZE));

                    let cell_color = if cells[idx] == Cell::Alive {
                        self.live_color
                    } else {
                        self.dead_color
                    };
                    painter.rect_filled(rect, 0.0, cell_color);
                }
            }

            let live_cells = cells.iter().filter(|&&c| c == Cell::Alive).count();

            // Clicks map back to a cell by division, clamped to the far
            // row/column so edge pixels stay addressable.
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let row = (((pos.y - origin.y) / (CELL_SIZE + 1.0)) as u32).min(GRID_HEIGHT - 1);
                    let col = (((pos.x - origin.x) / (CELL_SIZE + 1.0)) as u32).min(GRID_WIDTH - 1);
                    let modifiers = ui.input(|i| i.modifiers);

                    let edit = if modifiers.ctrl {
                        self.session.stamp(self.selected_pattern, row, col)
                    } else if modifiers.shift {
                        self.session.stamp(PULSAR_ID, row, col)
                    } else {
                        self.session.toggle_cell(row, col).map_err(LifeError::from)
                    };
                    self.report(edit);
                }
            }

            ui.separator();

            // Statistics
            let total = (GRID_WIDTH * GRID_HEIGHT) as usize;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total as f32) * 100.0
                ));
            });
        });

        // Keep frames coming while the simulation runs.
        if self.session.is_running() {
            ctx.request_repaint();
        }
    }
}
