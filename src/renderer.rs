use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::canvas::{BLACK, Canvas, WHITE};
use crate::entities::{Cheese, SpriteDraw};
use crate::motion::Point;

/// View struct that holds the state needed for one playing frame
pub struct PlayingView<'a> {
    pub cheese: &'a Cheese,
    pub score: u32,
    pub elapsed_secs: u64,
}

/// Final numbers for the game over panel
pub struct GameOverView {
    pub score: u32,
    pub elapsed_secs: u64,
}

/// Handles all drawing for the game
#[derive(Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Clear the canvas and draw the cheese and the HUD text
    pub fn begin_frame(&self, canvas: &mut Canvas, view: &PlayingView) {
        canvas.clear(BLACK);
        canvas.draw_sprite(&view.cheese.sprite, view.cheese.center(), 0.0, u8::MAX);
        canvas.draw_text(
            format!("Time: {}s", view.elapsed_secs),
            Point::new(10.0, 10.0),
            WHITE,
        );
        canvas.draw_text(format!("Score: {}", view.score), Point::new(10.0, 40.0), WHITE);
    }

    /// Draw the roaches on top of whatever is already on the canvas
    pub fn draw_roaches(&self, canvas: &mut Canvas, draws: &[SpriteDraw]) {
        for draw in draws {
            canvas.draw_sprite(&draw.sprite, draw.center, draw.rotation_deg, draw.alpha);
        }
    }

    /// The fixed game over panel
    pub fn render_game_over(&self, frame: &mut Frame, view: &GameOverView) {
        let area = frame.area();

        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        GAME OVER!         ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("Time Survived: {}s", view.elapsed_secs))
                .centered()
                .cyan()
                .bold(),
            Line::from(""),
            Line::from("Press R to Restart").centered().white(),
            Line::from("Press Q to Quit").centered().white(),
        ];

        let panel_height = (game_over_text.len() as u16 + 2).min(area.height);
        let panel_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(panel_height) / 2,
            width: area.width,
            height: panel_height,
        };

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .alignment(Alignment::Center),
            panel_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Sprite;
    use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn cheese() -> Cheese {
        Cheese::centered(Sprite::solid(100, 80, [255, 215, 0]), WORLD_WIDTH, WORLD_HEIGHT)
    }

    #[test]
    fn test_begin_frame_draws_cheese_and_hud() {
        let area = Rect::new(0, 0, 80, 30);
        let mut canvas = Canvas::new(area);
        let cheese = cheese();
        GameRenderer::new().begin_frame(
            &mut canvas,
            &PlayingView {
                cheese: &cheese,
                score: 7,
                elapsed_secs: 12,
            },
        );

        // 10x10 world units per pixel; the center pixel is cheese coloured
        assert_eq!(canvas.pixel(40, 30), Some([255, 215, 0]));
        assert_eq!(canvas.pixel(0, 59), Some(BLACK));

        let mut buf = Buffer::empty(area);
        canvas.render_to(&mut buf);
        let first_row: String = (0..12).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        let third_row: String = (0..12).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(first_row.starts_with("▀Time: 12s"));
        assert!(third_row.starts_with("▀Score: 7"));
    }

    #[test]
    fn test_game_over_panel() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                GameRenderer::new().render_game_over(
                    frame,
                    &GameOverView {
                        score: 42,
                        elapsed_secs: 95,
                    },
                )
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("GAME OVER!"));
        assert!(text.contains("Final Score: 42"));
        assert!(text.contains("Time Survived: 95s"));
        assert!(text.contains("Press R to Restart"));
        assert!(text.contains("Press Q to Quit"));
    }
}
