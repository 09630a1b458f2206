use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::time::Instant;

use crate::assets::SpriteBook;
use crate::audio::AudioManager;
use crate::canvas::Canvas;
use crate::constants::{FRAME_DELAY, WORLD_HEIGHT, WORLD_WIDTH};
use crate::entities::GameState;
use crate::error::GameResult;
use crate::input::{InputEvent, InputManager};
use crate::renderer::{GameOverView, GameRenderer, PlayingView};
use crate::session::Session;
use crate::spawner::Spawner;

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game_state: GameState,
    session: Session,
    /// Survival time, frozen when the round ends
    final_time_secs: Option<u64>,
    sprites: SpriteBook,
    /// internal components
    canvas: Canvas,
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(sprites: SpriteBook, audio_manager: AudioManager) -> Self {
        Self {
            running: true,
            game_state: GameState::Playing,
            session: Self::new_session(&sprites),
            final_time_secs: None,
            sprites,
            canvas: Canvas::new(Rect::default()),
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager,
        }
    }

    fn new_session(sprites: &SpriteBook) -> Session {
        let spawner = Spawner::new(WORLD_WIDTH, WORLD_HEIGHT, StdRng::from_rng(&mut rand::rng()));
        Session::new(sprites.clone(), spawner, Instant::now())
    }

    /// Run the application's main loop until the player quits.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> GameResult<()> {
        self.audio_manager.play_music_loop();

        while self.running {
            match self.game_state {
                GameState::Playing => {
                    self.play_frame(terminal)?;
                    // Small sleep to hold ~33 FPS
                    std::thread::sleep(FRAME_DELAY);
                }
                GameState::Ended => self.game_over_tick(terminal)?,
            }
        }

        log::info!("quit with score {}", self.session.score());
        Ok(())
    }

    fn play_frame<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> GameResult<()> {
        let size = terminal.size()?;
        self.canvas.resize(Rect::new(0, 0, size.width, size.height));
        let viewport = self.canvas.viewport();
        let events = self.input_manager.poll_events(&viewport)?.to_vec();
        self.step_frame(terminal, &events, Instant::now())
    }

    /// One frame of play: draw the backdrop, handle input, spawn, move,
    /// draw the roaches, present. The round can only end here, after the
    /// frame is on screen.
    fn step_frame<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &[InputEvent],
        now: Instant,
    ) -> GameResult<()> {
        self.renderer.begin_frame(
            &mut self.canvas,
            &PlayingView {
                cheese: self.session.cheese(),
                score: self.session.score(),
                elapsed_secs: self.session.elapsed_secs(now),
            },
        );

        for &event in events {
            self.handle_playing_event(event, now);
            if !self.running {
                return Ok(());
            }
        }

        self.session.spawn();

        let draws = self.session.advance(now);
        self.renderer.draw_roaches(&mut self.canvas, &draws);

        let canvas = &self.canvas;
        terminal.draw(|frame| canvas.render_to(frame.buffer_mut()))?;

        if self.session.is_over() {
            self.end_round(now);
        }
        Ok(())
    }

    fn handle_playing_event(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Quit => self.quit(),
            InputEvent::MouseDown(point) => {
                let kills = self.session.click(point, now);
                for _ in 0..kills {
                    self.audio_manager.play_squish();
                }
            }
            InputEvent::KeyDown(_) => {}
        }
    }

    fn end_round(&mut self, now: Instant) {
        let elapsed = self.session.elapsed_secs(now);
        log::info!(
            "game over: score {} after {}s",
            self.session.score(),
            elapsed
        );
        self.final_time_secs = Some(elapsed);
        self.game_state = GameState::Ended;
        self.audio_manager.stop_music();
    }

    /// Redraw the game over panel, then wait one frame for restart or quit.
    /// Redrawing every tick keeps the panel right after a resize.
    fn game_over_tick<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> GameResult<()> {
        self.draw_game_over(terminal)?;
        let viewport = self.canvas.viewport();
        if let Some(event) = self.input_manager.next_event(&viewport, FRAME_DELAY)? {
            self.handle_game_over_event(event);
        }
        Ok(())
    }

    fn draw_game_over<B: Backend>(&self, terminal: &mut Terminal<B>) -> GameResult<()> {
        let view = GameOverView {
            score: self.session.score(),
            elapsed_secs: self
                .final_time_secs
                .unwrap_or_else(|| self.session.elapsed_secs(Instant::now())),
        };
        let renderer = &self.renderer;
        terminal.draw(|frame| renderer.render_game_over(frame, &view))?;
        Ok(())
    }

    /// Only restart and quit mean anything on the game over screen
    fn handle_game_over_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyDown('q') => self.quit(),
            InputEvent::KeyDown('r') => self.restart(),
            _ => {}
        }
    }

    /// Throw the round away and start a fresh one
    fn restart(&mut self) {
        log::info!("restarting");
        self.session = Self::new_session(&self.sprites);
        self.final_time_secs = None;
        self.game_state = GameState::Playing;
        self.audio_manager.play_music_loop();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Roach, RoachKind, Swirl};
    use crate::motion::Point;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let mut app = App::new(SpriteBook::placeholder(), AudioManager::silent());
        app.canvas.resize(Rect::new(0, 0, 80, 30));
        app
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 30)).unwrap()
    }

    fn roach(x: f32, y: f32) -> Roach {
        Roach::new(
            RoachKind::Normal,
            1.0,
            Point::new(x, y),
            Point::new(400.0, 300.0),
            SpriteBook::placeholder().normal,
            Swirl::default(),
        )
    }

    /// Play one frame with a roach already sitting on the cheese
    fn lose_round(app: &mut App, terminal: &mut Terminal<TestBackend>) {
        app.session.add_roach(roach(400.0, 300.0));
        app.step_frame(terminal, &[], Instant::now()).unwrap();
        assert_eq!(app.game_state, GameState::Ended);
    }

    #[test]
    fn test_frame_without_input_keeps_playing() {
        let mut app = app();
        let mut terminal = terminal();
        app.step_frame(&mut terminal, &[], Instant::now()).unwrap();

        assert!(app.running);
        assert_eq!(app.game_state, GameState::Playing);
        assert_eq!(app.session.roaches().len(), 1);
        assert_eq!(app.final_time_secs, None);
    }

    #[test]
    fn test_round_ends_after_the_frame_is_drawn() {
        let mut app = app();
        let mut terminal = terminal();
        lose_round(&mut app, &mut terminal);

        assert!(app.session.is_over());
        assert_eq!(app.final_time_secs, Some(0));
        // The losing frame still made it to the screen
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Score: 0"));
    }

    #[test]
    fn test_click_in_the_same_frame_saves_the_cheese() {
        let mut app = app();
        let mut terminal = terminal();
        app.session.add_roach(roach(400.0, 300.0));

        let click = InputEvent::MouseDown(Point::new(400.0, 300.0));
        app.step_frame(&mut terminal, &[click], Instant::now()).unwrap();

        assert_eq!(app.session.score(), 1);
        assert!(!app.session.is_over());
        assert_eq!(app.game_state, GameState::Playing);
    }

    #[test]
    fn test_quit_while_playing_skips_game_over() {
        let mut app = app();
        let mut terminal = terminal();
        app.session.add_roach(roach(400.0, 300.0));

        app.step_frame(&mut terminal, &[InputEvent::Quit], Instant::now())
            .unwrap();

        assert!(!app.running);
        assert_eq!(app.game_state, GameState::Playing);
        // Nothing after the quit ran: no spawn, no move, no cheese check
        assert_eq!(app.session.roaches().len(), 1);
        assert!(!app.session.is_over());
    }

    #[test]
    fn test_game_over_ignores_clicks_and_other_keys() {
        let mut app = app();
        let mut terminal = terminal();
        lose_round(&mut app, &mut terminal);
        let score = app.session.score();

        for event in [
            InputEvent::MouseDown(Point::new(400.0, 300.0)),
            InputEvent::KeyDown('x'),
            InputEvent::KeyDown('c'),
        ] {
            app.handle_game_over_event(event);
        }

        assert!(app.running);
        assert_eq!(app.game_state, GameState::Ended);
        assert_eq!(app.session.score(), score);
        assert!(app.session.roaches()[0].is_alive());
    }

    #[test]
    fn test_game_over_quit_keys_stop_the_loop() {
        for event in [InputEvent::KeyDown('q'), InputEvent::Quit] {
            let mut app = app();
            let mut terminal = terminal();
            lose_round(&mut app, &mut terminal);

            app.handle_game_over_event(event);
            assert!(!app.running);
        }
    }

    #[test]
    fn test_restart_resets_the_round() {
        let mut app = app();
        let mut terminal = terminal();
        app.session.add_roach(roach(100.0, 100.0));
        app.handle_playing_event(InputEvent::MouseDown(Point::new(100.0, 100.0)), Instant::now());
        assert_eq!(app.session.score(), 1);
        lose_round(&mut app, &mut terminal);

        app.handle_game_over_event(InputEvent::KeyDown('r'));

        assert!(app.running);
        assert_eq!(app.game_state, GameState::Playing);
        assert_eq!(app.session.score(), 0);
        assert!(app.session.roaches().is_empty());
        assert!(!app.session.is_over());
        assert_eq!(app.final_time_secs, None);
    }

    #[test]
    fn test_game_over_panel_redraws_at_new_size() {
        let mut app = app();
        let mut terminal = terminal();
        lose_round(&mut app, &mut terminal);

        app.draw_game_over(&mut terminal).unwrap();
        terminal.backend_mut().resize(100, 40);
        app.draw_game_over(&mut terminal).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.area.width, 100);
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Final Score: 0"));
    }
}
