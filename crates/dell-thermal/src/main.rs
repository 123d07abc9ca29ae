//! Dell thermal management: switch Dell thermal presets from the system tray.

mod app;
mod app_command;
mod busy_guard;
mod config;
mod dialogs;
mod error;
mod logging;
mod menu_host;
mod notifier;
mod settings_store;
mod tray_command;
mod tray_icon_state;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::{AppCommand, MenuIds},
    busy_guard::{BusyGuard, BusyTracker},
    dialogs::DesktopDialogs,
    error::{AppError, Result as AppResult},
    menu_host::TrayMenuHost,
    notifier::DesktopNotifier,
    settings_store::ConfigSettings,
    tray_command::{TrayCommand, TrayProxy},
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
};

use crate::config::Config;

use std::sync::Arc;

use dell_thermal_core::{ModeSelector, PrivilegedRunner, SecretArm, TokioLauncher};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{error, info};

/// Application entry point.
fn main() {
    let _log_guard = match logging::init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = TrayProxy::new(event_loop.create_proxy());
    let menu_ids = MenuIds::default();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(&menu_ids) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                let result = match cmd {
                    TrayCommand::SetState(state) => tray_manager.update_state(state),
                    TrayCommand::SetMarker { mode, selected } => {
                        tray_manager.set_marker(mode, selected)
                    }
                    TrayCommand::SetSecretArmed(armed) => {
                        tray_manager.set_secret_armed(armed);
                        Ok(())
                    }
                    TrayCommand::RemoveModeEntries => tray_manager.remove_mode_entries(),
                    TrayCommand::Shutdown => {
                        *control_flow = ControlFlow::ExitWithCode(0);
                        Ok(())
                    }
                };
                if let Err(e) = result {
                    error!(error = ?e, command = ?cmd, "Failed to update tray");
                }
            }
            Event::NewEvents(StartCause::Init) => {
                let config_path = match Config::config_path() {
                    Ok(path) => path,
                    Err(e) => {
                        error!("Failed to resolve config path: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let config = match Config::load_from(&config_path) {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let runner = PrivilegedRunner::new(
                    config.runner_config(),
                    TokioLauncher,
                    DesktopDialogs::default(),
                    DesktopDialogs::default(),
                );
                let behaviour = config.behaviour.clone();
                let selector = ModeSelector::new(
                    runner,
                    TrayMenuHost::new(tray_proxy.clone()),
                    ConfigSettings::new(config, config_path),
                    DesktopNotifier::new(behaviour.notifications),
                );

                let app = App {
                    selector: Arc::new(selector),
                    secret_arm: Arc::new(SecretArm::new()),
                    behaviour,
                    tray: tray_proxy.clone(),
                    menu_ids: menu_ids.clone(),
                    busy: Arc::new(BusyTracker::new(tray_proxy.clone())),
                };

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                            std::process::exit(1);
                        }
                    });

                    info!("Async runtime stopped");
                });
            }
            _ => {}
        }
    });
}
