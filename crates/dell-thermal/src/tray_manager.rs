//! System tray icon with the thermal mode menu.
//!
//! Owns the tray icon and every menu entry. Lives on the main thread because
//! `TrayIcon` and the menu items are `!Send`; the async side drives it through
//! [`TrayCommand`](crate::TrayCommand).

use crate::{AppError, AppResult, MenuIds, TrayIconState};

use std::panic::Location;

use dell_thermal_core::ThermalMode;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use tray_icon::menu::{
    CheckMenuItem, IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu,
};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const TITLE: &str = "Dell Thermal Management";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    menu: Menu,
    thermal_submenu: Submenu,
    mode_items: Vec<(ThermalMode, CheckMenuItem)>,
    secret_arm_item: CheckMenuItem,
    state: TrayIconState,
    current: Option<ThermalMode>,
    entries_removed: bool,
}

impl TrayManager {
    /// Build the tray icon and its menu using the identifiers in `ids`.
    #[track_caller]
    #[instrument(skip(ids))]
    pub fn new(ids: &MenuIds) -> AppResult<Self> {
        let menu = Menu::new();

        let title_item = MenuItem::with_id(ids.title.clone(), TITLE, false, None);
        let secret_arm_item = CheckMenuItem::with_id(
            ids.secret_arm.clone(),
            "Ask BIOS Setup Password (next change)",
            true,
            false,
            None,
        );
        let synchronize_item =
            MenuItem::with_id(ids.synchronize.clone(), "Read Mode From BIOS", true, None);
        let separator = PredefinedMenuItem::separator();
        let exit_item = MenuItem::with_id(ids.exit.clone(), "Exit", true, None);

        let items: [&dyn IsMenuItem; 5] = [
            &title_item,
            &secret_arm_item,
            &synchronize_item,
            &separator,
            &exit_item,
        ];
        for item in items {
            menu.append(item).map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu entry: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let thermal_submenu = Submenu::new("Thermal Management", true);
        let mut mode_items = Vec::with_capacity(ids.modes.len());
        for (id, mode) in &ids.modes {
            let item = CheckMenuItem::with_id(id.clone(), mode.display_name(), true, false, None);
            thermal_submenu
                .append(&item)
                .map_err(|e| AppError::TrayError {
                    reason: format!("Failed to add {} entry: {}", mode, e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            mode_items.push((*mode, item));
        }

        let position = Self::position_after(&menu, &ids.title)?;
        menu.insert(&thermal_submenu, position)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to insert thermal submenu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let icon = Self::load_icon(TrayIconState::Idle)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(Self::tooltip(TrayIconState::Idle, None))
            .with_menu(Box::new(menu.clone()))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            menu,
            thermal_submenu,
            mode_items,
            secret_arm_item,
            state: TrayIconState::Idle,
            current: None,
            entries_removed: false,
        })
    }

    /// Update the tray icon state with new icon and tooltip.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: TrayIconState) -> AppResult<()> {
        let icon = Self::load_icon(state)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.state = state;
        self.refresh_tooltip()
    }

    /// Check or uncheck the entry for `mode`.
    #[track_caller]
    pub fn set_marker(&mut self, mode: ThermalMode, selected: bool) -> AppResult<()> {
        if let Some((_, item)) = self.mode_items.iter().find(|(m, _)| *m == mode) {
            item.set_checked(selected);
        }

        if selected {
            self.current = Some(mode);
        } else if self.current == Some(mode) {
            self.current = None;
        }

        self.refresh_tooltip()
    }

    /// Mirror the BIOS setup password switch.
    pub fn set_secret_armed(&self, armed: bool) {
        self.secret_arm_item.set_checked(armed);
    }

    /// Remove the four mode entries and their submenu.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn remove_mode_entries(&mut self) -> AppResult<()> {
        if self.entries_removed {
            return Ok(());
        }

        for (mode, item) in self.mode_items.drain(..) {
            self.thermal_submenu
                .remove(&item)
                .map_err(|e| AppError::TrayError {
                    reason: format!("Failed to remove {} entry: {}", mode, e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        self.menu
            .remove(&self.thermal_submenu)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to remove thermal submenu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.entries_removed = true;
        self.current = None;
        debug!("Thermal mode entries removed");

        Ok(())
    }

    /// Index right after the entry with id `anchor`.
    #[track_caller]
    fn position_after(menu: &Menu, anchor: &MenuId) -> AppResult<usize> {
        menu.items()
            .iter()
            .position(|item| item.id() == anchor)
            .map(|index| index + 1)
            .ok_or_else(|| AppError::TrayError {
                reason: format!("Menu anchor {:?} not found", anchor),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn refresh_tooltip(&mut self) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(Self::tooltip(self.state, self.current)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn tooltip(state: TrayIconState, current: Option<ThermalMode>) -> String {
        match (state, current) {
            (TrayIconState::Busy, _) => format!("{} - Applying...", TITLE),
            (TrayIconState::Idle, Some(mode)) => format!("{} - {}", TITLE, mode),
            (TrayIconState::Idle, None) => TITLE.to_string(),
        }
    }

    /// Load icon from compile-time embedded PNG bytes.
    #[track_caller]
    fn load_icon(state: TrayIconState) -> AppResult<Icon> {
        let png_bytes: &[u8] = match state {
            TrayIconState::Idle => include_bytes!("../resources/icons/idle.png"),
            TrayIconState::Busy => include_bytes!("../resources/icons/busy.png"),
        };

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
