//! Event loop glue: wires the config, the mute toggle, the tray shell and
//! the chord listener together on the main thread.

use crate::{
    AppResult, HotkeyHandler, IconSet, MenuAction, MuteState, MuteToggle, TrayCommand,
    TrayManager,
    config::{Config, build_menu_entries},
    tray_command::notification_of,
};

use mic_led_core::{
    ActionFn, ActionId, CoreError, CoreResult, Flow, IconControl, MenuTreeBuilder, ShellEvent,
    TrayBackend, TrayNotification, TrayShell,
};

use std::{
    panic::Location,
    path::{Path, PathBuf},
    sync::Arc,
};

use error_location::ErrorLocation;
use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoopProxy, EventLoopWindowTarget},
    window::WindowId,
};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Main application state. Lives inside the event loop closure.
pub struct App {
    config: Config,
    proxy: EventLoopProxy<TrayCommand>,
    toggle: Arc<MuteToggle>,
    log_dir: PathBuf,
    shell: Option<TrayShell<TrayManager>>,
    window_id: Option<WindowId>,
    // Kept so the listener handle lives as long as the app.
    _listener: Option<HotkeyHandler>,
}

impl App {
    /// Create the app. Nothing touches the tray until the loop starts.
    pub fn new(
        config: Config,
        proxy: EventLoopProxy<TrayCommand>,
        toggle: Arc<MuteToggle>,
        log_dir: PathBuf,
    ) -> Self {
        Self {
            config,
            proxy,
            toggle,
            log_dir,
            shell: None,
            window_id: None,
            _listener: None,
        }
    }

    /// Handle one event loop event.
    pub fn handle(
        &mut self,
        event: Event<'_, TrayCommand>,
        target: &EventLoopWindowTarget<TrayCommand>,
        control_flow: &mut ControlFlow,
    ) {
        match event {
            Event::NewEvents(StartCause::Init) => {
                if let Err(e) = self.start(target) {
                    error!(error = ?e, "Failed to start micLED");
                    self.shut_down();
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }
            Event::UserEvent(command) => self.handle_command(command, control_flow),
            Event::WindowEvent {
                window_id,
                event: WindowEvent::Destroyed,
                ..
            } if Some(window_id) == self.window_id => {
                self.handle_command(TrayCommand::Platform(ShellEvent::Destroy), control_flow);
            }
            Event::LoopDestroyed => self.shut_down(),
            _ => {}
        }
    }

    #[instrument(skip_all)]
    fn start(&mut self, target: &EventLoopWindowTarget<TrayCommand>) -> AppResult<()> {
        info!(version = env!("CARGO_PKG_VERSION"), "micLED starting");

        if self.config.mute.start_muted
            && let Err(e) = self.toggle.set(MuteState::Muted)
        {
            warn!(error = ?e, "Failed to mute microphone at startup");
        }

        let icons = IconSet::load(&self.config.icons)?;
        let manager = TrayManager::new(target, icons)?;
        self.window_id = Some(manager.window_id());

        let entries = build_menu_entries(&self.config.menu, &mut |action| {
            menu_action(action, &self.toggle, &self.log_dir)
        })?;
        let menu = MenuTreeBuilder::build(entries)?;
        let double_click = menu_action(MenuAction::ToggleMute, &self.toggle, &self.log_dir);

        let shell = TrayShell::initialize(
            manager,
            self.toggle.current()?,
            &self.config.tray.tooltip,
            menu,
            Some(double_click),
        )?;
        self.shell = Some(shell);

        self.forward_tray_events();
        self._listener = self.spawn_listener();

        // Wake the macOS run loop so the tray icon appears without waiting
        // for the first user event.
        #[cfg(target_os = "macos")]
        unsafe {
            use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
            CFRunLoopWakeUp(CFRunLoopGetMain());
        }

        info!("micLED running");
        Ok(())
    }

    /// Route menu and tray icon events onto the event loop.
    fn forward_tray_events(&self) {
        let proxy = self.proxy.clone();
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
            match event.id.0.parse::<ActionId>() {
                Ok(id) => send(&proxy, TrayCommand::Platform(ShellEvent::Command(id))),
                Err(e) => warn!(menu_id = %event.id.0, error = %e, "Menu event with foreign id"),
            }
        }));

        let proxy = self.proxy.clone();
        TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
            let notification = notification_of(&event);
            if notification != TrayNotification::Other {
                send(&proxy, TrayCommand::Platform(ShellEvent::Tray(notification)));
            }
        }));
    }

    /// A listener failure leaves the tray usable through its menu.
    fn spawn_listener(&self) -> Option<HotkeyHandler> {
        let chords = match self.config.hotkey.chords() {
            Ok(chords) => chords,
            Err(e) => {
                error!(error = ?e, "Invalid hotkey configuration; mute hotkey disabled");
                return None;
            }
        };

        // The toggle itself runs on the main thread, off the keyboard hook.
        let proxy = self.proxy.clone();
        let on_fire = move || send(&proxy, TrayCommand::ToggleMute);

        match HotkeyHandler::spawn(chords, on_fire) {
            Ok(handler) => {
                info!(hotkey = %self.config.hotkey.describe(), "Mute hotkey listening");
                Some(handler)
            }
            Err(e) => {
                error!(error = ?e, "Failed to start hotkey listener; mute hotkey disabled");
                None
            }
        }
    }

    #[instrument(skip(self, control_flow))]
    fn handle_command(&mut self, command: TrayCommand, control_flow: &mut ControlFlow) {
        let Some(shell) = self.shell.as_mut() else {
            debug!("Tray shell not running, command dropped");
            return;
        };

        match apply_command(shell, &self.toggle, command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                info!("micLED exiting");
                *control_flow = ControlFlow::ExitWithCode(0);
            }
            Err(e) if e.is_fatal() => {
                error!(error = ?e, "Fatal tray error");
                shell.shutdown();
                *control_flow = ControlFlow::ExitWithCode(1);
            }
            Err(e) => error!(error = ?e, "Tray command failed"),
        }
    }

    fn shut_down(&mut self) {
        if let Some(shell) = self.shell.as_mut() {
            shell.shutdown();
        }
    }
}

/// Run one marshaled command against the shell.
pub(crate) fn apply_command<B>(
    shell: &mut TrayShell<B>,
    toggle: &MuteToggle,
    command: TrayCommand,
) -> CoreResult<Flow>
where
    B: TrayBackend<Icon = MuteState>,
{
    match command {
        TrayCommand::Platform(event) => shell.handle_event(event),
        TrayCommand::ToggleMute if shell.is_shut_down() => {
            debug!("Tray shell shut down, mute toggle dropped");
            Ok(Flow::Exit)
        }
        TrayCommand::ToggleMute => {
            toggle.invoke_and_show(shell)?;
            Ok(Flow::Continue)
        }
    }
}

fn send(proxy: &EventLoopProxy<TrayCommand>, command: TrayCommand) {
    if let Err(e) = proxy.send_event(command) {
        debug!(error = ?e, "Event loop closed, command dropped");
    }
}

/// Callback for one built-in menu action.
pub(crate) fn menu_action(
    action: MenuAction,
    toggle: &Arc<MuteToggle>,
    log_dir: &Path,
) -> ActionFn<MuteState> {
    match action {
        MenuAction::ToggleMute => {
            let toggle = Arc::clone(toggle);
            Box::new(move |icons: &mut dyn IconControl<MuteState>| toggle.invoke_and_show(icons))
        }
        MenuAction::Mute | MenuAction::Unmute => {
            let target = if action == MenuAction::Mute {
                MuteState::Muted
            } else {
                MuteState::Unmuted
            };
            let toggle = Arc::clone(toggle);
            Box::new(move |icons: &mut dyn IconControl<MuteState>| {
                let state = toggle.set(target)?;
                icons.update_icon(state)
            })
        }
        MenuAction::OpenLogFolder => {
            let dir = log_dir.to_path_buf();
            Box::new(move |_: &mut dyn IconControl<MuteState>| open_folder(&dir))
        }
        MenuAction::OpenConfigFolder => Box::new(|_: &mut dyn IconControl<MuteState>| {
            let dir = Config::config_dir()?;
            open_folder(&dir)
        }),
    }
}

#[track_caller]
fn open_folder(dir: &Path) -> CoreResult<()> {
    open::that(dir).map_err(|e| CoreError::ActionFailed {
        source: Box::new(e),
        location: ErrorLocation::from(Location::caller()),
    })?;
    info!(dir = %dir.display(), "Folder opened");
    Ok(())
}
