use crate::{
    MenuAction, MuteState, MuteToggle, TrayCommand,
    app::{apply_command, menu_action},
    config::MuteConfig,
};

use mic_led_core::{
    ActionId, CoreResult, Flow, Insertion, MenuTreeBuilder, ShellEvent, TrayBackend,
    TrayNotification, TrayShell,
};

use std::{path::Path, sync::Arc};

use tokio::runtime::{Builder, Runtime};

/// Tray that only records the icons it was asked to show.
#[derive(Default)]
struct RecordingTray {
    shown: Vec<MuteState>,
}

impl TrayBackend for RecordingTray {
    type Icon = MuteState;
    type Menu = ();

    const INSERTION: Insertion = Insertion::Tail;

    fn create_root_menu(&mut self) -> CoreResult<()> {
        Ok(())
    }

    fn create_submenu(&mut self, _id: ActionId, _label: &str) -> CoreResult<()> {
        Ok(())
    }

    fn insert_item(&mut self, _parent: &(), _id: ActionId, _label: &str) -> CoreResult<()> {
        Ok(())
    }

    fn insert_submenu(&mut self, _parent: &(), _submenu: ()) -> CoreResult<()> {
        Ok(())
    }

    fn set_popup_menu(&mut self, _menu: ()) -> CoreResult<()> {
        Ok(())
    }

    fn install_icon(&mut self, icon: &MuteState, _tooltip: &str) -> CoreResult<()> {
        self.shown.push(*icon);
        Ok(())
    }

    fn modify_icon(&mut self, icon: &MuteState) -> CoreResult<()> {
        self.shown.push(*icon);
        Ok(())
    }

    fn remove_icon(&mut self) -> CoreResult<()> {
        Ok(())
    }

    fn show_popup_menu(&mut self) -> CoreResult<()> {
        Ok(())
    }
}

#[allow(clippy::unwrap_used)]
fn setup() -> (Runtime, Arc<MuteToggle>, TrayShell<RecordingTray>) {
    let rt = Builder::new_current_thread().build().unwrap();
    let config = MuteConfig {
        program: String::new(),
        ..MuteConfig::default()
    };
    let toggle =
        Arc::new(MuteToggle::new(config, MuteState::Unmuted, rt.handle().clone()).unwrap());

    let double_click = menu_action(MenuAction::ToggleMute, &toggle, Path::new("."));
    let menu = MenuTreeBuilder::build(Vec::new()).unwrap();
    let shell = TrayShell::initialize(
        RecordingTray::default(),
        toggle.current().unwrap(),
        "micLED",
        menu,
        Some(double_click),
    )
    .unwrap();

    (rt, toggle, shell)
}

const DOUBLE_CLICK: TrayCommand =
    TrayCommand::Platform(ShellEvent::Tray(TrayNotification::LeftDoubleClick));

/// WHAT: Chord and double-click toggles in any order leave the icon on the current state
/// WHY: A chord toggle queued behind a double-click must not show an older state
#[test]
#[allow(clippy::unwrap_used)]
fn given_chord_and_double_click_when_applied_in_either_order_then_icon_matches_state() {
    for order in [
        [TrayCommand::ToggleMute, DOUBLE_CLICK, TrayCommand::ToggleMute],
        [DOUBLE_CLICK, TrayCommand::ToggleMute, DOUBLE_CLICK],
    ] {
        // Given: A shell showing unmuted
        let (_rt, toggle, mut shell) = setup();

        for command in order {
            // When: Each queued command is applied on the owning thread
            let flow = apply_command(&mut shell, &toggle, command).unwrap();

            // Then: The icon just shown is the toggle's current state
            assert_eq!(flow, Flow::Continue);
            assert_eq!(
                shell.backend().shown.last().copied(),
                Some(toggle.current().unwrap())
            );
        }

        // Then: Three flips from unmuted end muted
        assert_eq!(toggle.current().unwrap(), MuteState::Muted);
        assert_eq!(shell.backend().shown.len(), 4);
    }
}

/// WHAT: A toggle flipped elsewhere is picked up by the next marshaled toggle
/// WHY: The command carries no state, so it cannot replay a stale one
#[test]
#[allow(clippy::unwrap_used)]
fn given_state_changed_before_command_applied_when_applying_then_latest_state_shown() {
    // Given: The chord fired, then a menu toggle already ran before the
    // chord's command reached the main thread
    let (_rt, toggle, mut shell) = setup();
    toggle.invoke().unwrap();

    // When: The chord's command is applied
    apply_command(&mut shell, &toggle, TrayCommand::ToggleMute).unwrap();

    // Then: Icon and state agree
    assert_eq!(toggle.current().unwrap(), MuteState::Unmuted);
    assert_eq!(shell.backend().shown.last().copied(), Some(MuteState::Unmuted));
}

/// WHAT: A chord press after shutdown runs no mute command
/// WHY: The icon is gone, so the state change would be invisible
#[test]
#[allow(clippy::unwrap_used)]
fn given_shut_down_shell_when_chord_applied_then_state_unchanged() {
    // Given: A shut down shell
    let (_rt, toggle, mut shell) = setup();
    shell.shutdown();

    // When: A chord command arrives
    let flow = apply_command(&mut shell, &toggle, TrayCommand::ToggleMute).unwrap();

    // Then: Exit, nothing toggled
    assert_eq!(flow, Flow::Exit);
    assert_eq!(toggle.current().unwrap(), MuteState::Unmuted);
}
