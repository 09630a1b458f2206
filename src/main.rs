use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::path::Path;

use cheese_defender::App;
use cheese_defender::assets::SpriteBook;
use cheese_defender::audio::{AudioManager, SoundBank};
use cheese_defender::config::{CONFIG_FILE, GameConfig};
use cheese_defender::logging::FileLogger;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = GameConfig::load(Path::new(CONFIG_FILE))?;
    FileLogger::new(&config.log_file, config.level_filter())?.install()?;
    log::info!("starting with {:?}", config);

    // Load everything before touching the terminal so failures print normally
    let sprites = SpriteBook::load(&config.assets_dir)?;
    let sounds = SoundBank::load(&config.assets_dir)?;
    let audio_manager = AudioManager::new(sounds, config.music_volume, config.squish_volume);

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Cheese Defender")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(sprites, audio_manager).run(&mut terminal);

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("{err}");
    }
    Ok(result?)
}
