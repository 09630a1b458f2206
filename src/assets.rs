//! Image loading. Every picture is decoded once at startup, scaled, and then
//! shared by reference between the roaches that use it.

use image::{ImageReader, Rgba, RgbaImage, imageops::FilterType};
use std::path::Path;
use std::rc::Rc;

use crate::constants::IMAGE_SCALE;
use crate::entities::RoachKind;
use crate::error::{GameError, GameResult};

/// A decoded, scaled RGBA image. Cloning shares the pixels.
#[derive(Debug, Clone)]
pub struct Sprite {
    pixels: Rc<RgbaImage>,
}

impl Sprite {
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            pixels: Rc::new(image),
        }
    }

    /// A single-colour rectangle, handy where no image file is wanted
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        Self::from_image(RgbaImage::from_pixel(
            width.max(1),
            height.max(1),
            Rgba([r, g, b, 255]),
        ))
    }

    pub fn width(&self) -> f32 {
        self.pixels.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.pixels.height() as f32
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// A resized copy; dimensions truncate like integer pixel sizes do
    pub fn scaled(&self, factor: f32) -> Self {
        let width = ((self.pixels.width() as f32 * factor) as u32).max(1);
        let height = ((self.pixels.height() as f32 * factor) as u32).max(1);
        Self::from_image(image::imageops::resize(
            self.pixels.as_ref(),
            width,
            height,
            FilterType::Triangle,
        ))
    }
}

/// Load an image from disk and scale it by `scale`
pub fn load_scaled_image(path: &Path, scale: f32) -> GameResult<Sprite> {
    let to_error = |source| GameError::Image {
        path: path.to_path_buf(),
        source,
    };
    let image = ImageReader::open(path)
        .map_err(|err| to_error(image::ImageError::IoError(err)))?
        .with_guessed_format()
        .map_err(|err| to_error(image::ImageError::IoError(err)))?
        .decode()
        .map_err(to_error)?;
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(Sprite::from_image(image.to_rgba8()).scaled(scale))
}

/// Live and dead pictures for one roach kind
#[derive(Debug, Clone)]
pub struct RoachSprites {
    pub alive: Sprite,
    pub dead: Sprite,
}

/// Every picture the game draws
#[derive(Debug, Clone)]
pub struct SpriteBook {
    pub normal: RoachSprites,
    pub bigboy: RoachSprites,
    pub tipsy: RoachSprites,
    pub fast: RoachSprites,
    pub cheese: Sprite,
}

impl SpriteBook {
    /// Load all pictures from `<assets_dir>/pics`
    pub fn load(assets_dir: &Path) -> GameResult<Self> {
        let pics = assets_dir.join("pics");
        let load = |name: &str| load_scaled_image(&pics.join(name), IMAGE_SCALE);
        let pair = |alive: &str, dead: &str| -> GameResult<RoachSprites> {
            Ok(RoachSprites {
                alive: load(alive)?,
                dead: load(dead)?,
            })
        };

        let book = Self {
            normal: pair("roach_normal.png", "dead_roach_normal.png")?,
            bigboy: pair("bigboy.png", "dead_bigboy.png")?,
            tipsy: pair("tipsy.png", "dead_tipsy.png")?,
            fast: pair("roach_fast.png", "dead_fast.png")?,
            cheese: load("cheese.png")?,
        };
        log::info!("loaded sprites from {}", pics.display());
        Ok(book)
    }

    /// Coloured rectangles standing in for every picture
    pub fn placeholder() -> Self {
        let pair = |width, height, alive, dead| RoachSprites {
            alive: Sprite::solid(width, height, alive),
            dead: Sprite::solid(width, height, dead),
        };
        Self {
            normal: pair(30, 20, [139, 69, 19], [90, 60, 40]),
            bigboy: pair(50, 34, [101, 51, 0], [80, 50, 30]),
            tipsy: pair(30, 20, [160, 82, 45], [100, 70, 50]),
            fast: pair(24, 16, [205, 133, 63], [110, 80, 60]),
            cheese: Sprite::solid(100, 80, [255, 215, 0]),
        }
    }

    pub fn for_kind(&self, kind: RoachKind) -> &RoachSprites {
        match kind {
            RoachKind::Normal => &self.normal,
            RoachKind::BigBoy => &self.bigboy,
            RoachKind::Tipsy => &self.tipsy,
            RoachKind::Fast => &self.fast,
        }
    }
}
