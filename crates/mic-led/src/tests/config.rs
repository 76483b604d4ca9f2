use crate::{
    AppError, MenuAction,
    config::{
        Config, DEFAULT_MUTE_PROGRAM, DEFAULT_START_MUTED, DEFAULT_TOOLTIP, MenuEntryConfig,
    },
};

use mic_led_core::{CoreError, KeyToken};

/// WHAT: An empty file yields the defaults
/// WHY: Every section is optional
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_toml_when_parsing_then_defaults() {
    // Given: No content
    let contents = "";

    // When: Parsing
    let config = Config::from_toml_str(contents).unwrap();

    // Then: Built-in defaults
    assert_eq!(config.tray.tooltip, DEFAULT_TOOLTIP);
    assert_eq!(config.mute.program, DEFAULT_MUTE_PROGRAM);
    assert_eq!(config.mute.start_muted, DEFAULT_START_MUTED);
    assert_eq!(
        config.mute.mute_args,
        vec!["mutesysvolume", "1", "default_record"]
    );
    assert!(config.mute.notify_url.is_none());
    assert_eq!(config.hotkey.combinations.len(), 2);
    assert_eq!(config.menu.len(), 2);
}

/// WHAT: The default chords are super+z and super+Z
/// WHY: Either letter case must toggle mute
#[test]
#[allow(clippy::unwrap_used)]
fn given_default_hotkey_when_parsing_chords_then_both_cases() {
    // Given: Defaults
    let config = Config::default();

    // When: Parsing the combinations
    let chords = config.hotkey.chords().unwrap();

    // Then: Two chords differing only in case
    assert_eq!(chords.len(), 2);
    assert!(chords[0].contains(&KeyToken::Super));
    assert!(chords[0].contains(&KeyToken::Char('z')));
    assert!(chords[1].contains(&KeyToken::Char('Z')));
    assert_eq!(config.hotkey.describe(), "super+z | super+Z");
}

/// WHAT: Configured sections override defaults
/// WHY: Users point micLED at their own mute tool
#[test]
#[allow(clippy::unwrap_used)]
fn given_full_toml_when_parsing_then_values_applied() {
    // Given: A complete config
    let contents = r#"
        [tray]
        tooltip = "Mic"

        [hotkey]
        combinations = [["ctrl", "alt", "m"]]

        [mute]
        program = "amixer"
        mute_args = ["set", "Capture", "nocap"]
        unmute_args = ["set", "Capture", "cap"]
        notify_url = "http://127.0.0.1:8080/led/{state}"
        start_muted = false

        [icons]
        muted = "/tmp/red.png"

        [[menu]]
        label = "Mute"
        action = "mute"

        [[menu]]
        label = "More"
        items = [{ label = "Unmute", action = "unmute" }]
    "#;

    // When: Parsing
    let config = Config::from_toml_str(contents).unwrap();

    // Then: Everything taken from the file
    assert_eq!(config.tray.tooltip, "Mic");
    assert_eq!(config.mute.program, "amixer");
    assert!(!config.mute.start_muted);
    assert_eq!(
        config.mute.notify_url.as_deref(),
        Some("http://127.0.0.1:8080/led/{state}")
    );
    assert!(config.icons.muted.is_some());
    assert!(config.icons.unmuted.is_none());
    assert_eq!(
        config.menu,
        vec![
            MenuEntryConfig::action("Mute", MenuAction::Mute),
            MenuEntryConfig::submenu(
                "More",
                vec![MenuEntryConfig::action("Unmute", MenuAction::Unmute)]
            ),
        ]
    );
    assert_eq!(config.hotkey.chords().unwrap()[0].len(), 3);
}

/// WHAT: Unknown actions are rejected while parsing
/// WHY: A typo must not silently drop a menu entry
#[test]
fn given_unknown_action_when_parsing_then_config_error() {
    // Given: A misspelled action
    let contents = r#"
        [[menu]]
        label = "Mute"
        action = "mutee"
    "#;

    // When: Parsing
    let result = Config::from_toml_str(contents);

    // Then: ConfigError
    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: Unknown key names surface as InvalidKeyToken
/// WHY: The listener cannot watch a key it cannot name
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_key_when_parsing_chords_then_invalid_key_token() {
    // Given: A combination with a made-up key
    let contents = r#"
        [hotkey]
        combinations = [["super", "hyper"]]
    "#;
    let config = Config::from_toml_str(contents).unwrap();

    // When: Parsing the chords
    let result = config.hotkey.chords();

    // Then: The core error is wrapped
    match result {
        Err(AppError::Core {
            source: CoreError::InvalidKeyToken { token, .. },
            ..
        }) => assert_eq!(token, "hyper"),
        other => unreachable!("expected InvalidKeyToken, got {other:?}"),
    }
}
