use eframe::egui;
use snake_engine::game::{Cell, Direction, GameOverReason, GameSettings, GameSnapshot, Grid};
use tokio::sync::mpsc;

use crate::state::{AppState, ClientCommand, SharedState};

// Original palette: green body outlined by the dark field, red food.
const FIELD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x10, 0x18, 0x10);
const SNAKE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x66, 0xFF, 0x66);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x00, 0x00);

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    settings: GameSettings,
    grid: Grid,
    last_input_direction: Option<Direction>,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        settings: GameSettings,
        grid: Grid,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            settings,
            grid,
            last_input_direction: None,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            let mut new_direction = None;

            if i.key_pressed(egui::Key::ArrowUp) {
                new_direction = Some(Direction::Up);
            } else if i.key_pressed(egui::Key::ArrowDown) {
                new_direction = Some(Direction::Down);
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                new_direction = Some(Direction::Left);
            } else if i.key_pressed(egui::Key::ArrowRight) {
                new_direction = Some(Direction::Right);
            }

            if let Some(direction) = new_direction
                && Some(direction) != self.last_input_direction
            {
                let _ = self.command_tx.send(ClientCommand::Turn { direction });
                self.last_input_direction = Some(direction);
            }
        });
    }

    fn render_menu(&self, ui: &mut egui::Ui) {
        ui.heading("Snake");
        ui.separator();
        ui.label(format!(
            "{}x{} grid, one tick every {}ms",
            self.grid.width_cells(),
            self.grid.height_cells(),
            self.settings.tick_interval_ms
        ));
        ui.label("Steer with the arrow keys.");
        ui.separator();

        if ui.button("Start Game").clicked() {
            let _ = self.command_tx.send(ClientCommand::StartGame);
        }
    }

    fn render_game(&self, ui: &mut egui::Ui, snapshot: Option<&GameSnapshot>) {
        let Some(snapshot) = snapshot else {
            ui.heading("Waiting for the first tick...");
            ui.spinner();
            return;
        };

        ui.heading(format!("Score: {}", snapshot.score));
        ui.separator();
        self.render_field(ui, snapshot);
    }

    fn render_field(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let cell_size = self.settings.cell_size as f32;
        let canvas_width = self.grid.width_cells() as f32 * cell_size;
        let canvas_height = self.grid.height_cells() as f32 * cell_size;

        let (response, painter) = ui.allocate_painter(
            egui::Vec2::new(canvas_width, canvas_height),
            egui::Sense::hover(),
        );

        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0.0, FIELD_COLOR);

        if let Some(food) = snapshot.food {
            painter.rect_filled(self.cell_rect(origin, food), 0.0, FOOD_COLOR);
        }

        for cell in &snapshot.snake_cells {
            painter.rect_filled(self.cell_rect(origin, *cell), 0.0, SNAKE_COLOR);
        }
    }

    // Cells are drawn one point inset so adjacent segments read as segments.
    fn cell_rect(&self, origin: egui::Pos2, cell: Cell) -> egui::Rect {
        let size = self.settings.cell_size as f32;
        egui::Rect::from_min_size(
            egui::pos2(
                origin.x + cell.col as f32 * size,
                origin.y + cell.row as f32 * size,
            ),
            egui::vec2(size, size),
        )
        .shrink(1.0)
    }

    fn render_game_over(
        &mut self,
        ui: &mut egui::Ui,
        final_score: u32,
        reason: GameOverReason,
        last_snapshot: Option<&GameSnapshot>,
    ) {
        ui.heading("Game Over");
        ui.separator();

        let reason_text = match reason {
            GameOverReason::WallCollision => "You hit the wall.",
            GameOverReason::SelfCollision => "You ran into yourself.",
        };
        ui.label(reason_text);
        ui.label(format!("Final score: {}", final_score));
        ui.separator();

        if let Some(snapshot) = last_snapshot {
            self.render_field(ui, snapshot);
            ui.separator();
        }

        if ui.button("Play Again").clicked() {
            self.last_input_direction = None;
            let _ = self.command_tx.send(ClientCommand::Restart);
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            let _ = self.command_tx.send(ClientCommand::Quit);
        }

        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.shared_state.clear_error();
                    }
                });
        }

        let current_state = self.shared_state.get_state();

        if matches!(current_state, AppState::InGame { .. }) {
            self.handle_input(ctx);
            ctx.request_repaint();
        } else {
            // The game task flips the state asynchronously; poll for it.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| match current_state {
            AppState::Menu => self.render_menu(ui),
            AppState::InGame { snapshot } => self.render_game(ui, snapshot.as_ref()),
            AppState::GameOver {
                final_score,
                reason,
                last_snapshot,
            } => self.render_game_over(ui, final_score, reason, last_snapshot.as_ref()),
        });
    }
}
