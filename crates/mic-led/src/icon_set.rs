//! Tray icon images for each mute state.
//!
//! Configured PNG files win; otherwise a filled dot is drawn, red for
//! muted and green for live.

use crate::{AppError, AppResult, MuteState, config::IconConfig};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use tracing::{debug, instrument};
use tray_icon::Icon;

/// Edge length of generated icons, in pixels.
const ICON_SIZE: u32 = 32;

const MUTED_COLOR: Rgba<u8> = Rgba([0xd3, 0x2f, 0x2f, 0xff]);
const UNMUTED_COLOR: Rgba<u8> = Rgba([0x38, 0x8e, 0x3c, 0xff]);

/// Decoded icons, ready to hand to the tray.
#[derive(Clone)]
pub struct IconSet {
    muted: Icon,
    unmuted: Icon,
}

impl IconSet {
    /// Load configured icons, drawing defaults for the ones left unset.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn load(config: &IconConfig) -> AppResult<Self> {
        let muted = match &config.muted {
            Some(path) => from_file(path)?,
            None => dot(MUTED_COLOR),
        };
        let unmuted = match &config.unmuted {
            Some(path) => from_file(path)?,
            None => dot(UNMUTED_COLOR),
        };

        Ok(Self {
            muted: to_icon(muted)?,
            unmuted: to_icon(unmuted)?,
        })
    }

    /// Icon for `state`.
    pub fn get(&self, state: MuteState) -> Icon {
        match state {
            MuteState::Muted => self.muted.clone(),
            MuteState::Unmuted => self.unmuted.clone(),
        }
    }
}

#[track_caller]
fn from_file(path: &Path) -> AppResult<RgbaImage> {
    let img = image::open(path).map_err(|e| AppError::IconError {
        reason: format!("Failed to load icon {}: {}", path.display(), e),
        location: ErrorLocation::from(Location::caller()),
    })?;
    debug!(path = %path.display(), "Icon loaded");
    Ok(img.into_rgba8())
}

/// A filled circle on a transparent square.
pub(crate) fn dot(color: Rgba<u8>) -> RgbaImage {
    let center = (ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = ICON_SIZE as f32 * 0.4;

    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        if dx * dx + dy * dy <= radius * radius {
            color
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

#[track_caller]
fn to_icon(rgba: RgbaImage) -> AppResult<Icon> {
    let (width, height) = (rgba.width(), rgba.height());

    Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::IconError {
        reason: format!("Failed to create icon from RGBA: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
