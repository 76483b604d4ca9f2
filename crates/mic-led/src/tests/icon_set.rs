use crate::{AppError, IconSet, config::IconConfig, icon_set::dot};

use std::path::PathBuf;

use image::Rgba;

/// WHAT: Default icons are generated when none are configured
/// WHY: micLED must run without any image files
#[test]
fn given_no_icon_paths_when_loading_then_generated_icons() {
    // Given: Empty icon config
    let config = IconConfig::default();

    // When: Loading
    let result = IconSet::load(&config);

    // Then: Succeeds
    assert!(result.is_ok());
}

/// WHAT: A missing icon file is an IconError
/// WHY: A typo in the path should be reported at startup
#[test]
fn given_missing_icon_file_when_loading_then_icon_error() {
    // Given: A path that does not exist
    let config = IconConfig {
        muted: Some(PathBuf::from("/nonexistent/mic-led/muted.png")),
        unmuted: None,
    };

    // When: Loading
    let result = IconSet::load(&config);

    // Then: IconError naming the file
    match result {
        Err(e @ AppError::IconError { .. }) => assert!(e.to_string().contains("muted.png")),
        Err(other) => unreachable!("expected IconError, got {other:?}"),
        Ok(_) => unreachable!("expected IconError, got an icon set"),
    }
}

/// WHAT: The generated dot is filled in the middle and clear at the corners
/// WHY: The tray background must show around the dot
#[test]
fn given_color_when_drawing_dot_then_center_filled_and_corners_clear() {
    // Given: Red
    let red = Rgba([255, 0, 0, 255]);

    // When: Drawing
    let img = dot(red);

    // Then: Center red, corner transparent
    assert_eq!(img.dimensions(), (32, 32));
    assert_eq!(*img.get_pixel(16, 16), red);
    assert_eq!(img.get_pixel(0, 0)[3], 0);
    assert_eq!(img.get_pixel(31, 31)[3], 0);
}
