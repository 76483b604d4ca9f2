//! micLED: microphone mute toggle living in the system tray.
//!
//! A global key chord (WIN+Z by default), the tray menu or a double-click
//! on the icon mutes and unmutes the default recording device. The icon
//! shows the current state.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod error;
mod hotkey_handler;
mod icon_set;
mod key_translator;
mod logging;
mod menu_action;
mod mute_state;
mod mute_toggle;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    hotkey_handler::HotkeyHandler,
    icon_set::IconSet,
    key_translator::KeyTranslator,
    menu_action::MenuAction,
    mute_state::MuteState,
    mute_toggle::MuteToggle,
    tray_command::TrayCommand,
    tray_manager::TrayManager,
};

use crate::config::Config;

use std::sync::Arc;

use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tracing::error;

/// Worker threads for the notification runtime. Requests are rare.
const RUNTIME_WORKERS: usize = 1;

/// Application entry point.
fn main() {
    let logging = match logging::init() {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:?}");
            std::process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    // Runs the fire-and-forget state notifications. Never blocks the tray.
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(RUNTIME_WORKERS)
        .thread_name("mic-led-notify")
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let toggle = match MuteToggle::new(
        config.mute.clone(),
        MuteState::Unmuted,
        runtime.handle().clone(),
    ) {
        Ok(toggle) => Arc::new(toggle),
        Err(e) => {
            error!("Failed to create mute toggle: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let mut app = App::new(config, event_loop.create_proxy(), toggle, logging.dir.clone());

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;
        app.handle(event, target, control_flow);

        // Keep the runtime and the log writer alive for the app's lifetime.
        let _ = (&runtime, &logging);
    });
}
