use dell_thermal_core::ThermalMode;
use tray_icon::menu::MenuId;

/// Commands derived from tray menu clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Switch to a thermal mode.
    Activate(ThermalMode),
    /// Flip the one-shot BIOS setup password switch.
    ToggleSecretArm,
    /// Read the active mode from the BIOS.
    Synchronize,
    /// Request application shutdown.
    Shutdown,
}

/// Stable identifiers for every interactive menu entry.
#[derive(Debug, Clone)]
pub struct MenuIds {
    /// Non-interactive title entry the thermal submenu is placed after.
    pub title: MenuId,
    /// One entry per thermal mode, in menu order.
    pub modes: Vec<(MenuId, ThermalMode)>,
    /// BIOS setup password switch.
    pub secret_arm: MenuId,
    /// "Read Mode From BIOS" entry.
    pub synchronize: MenuId,
    /// "Exit" entry.
    pub exit: MenuId,
}

impl Default for MenuIds {
    fn default() -> Self {
        Self {
            title: MenuId::new("title"),
            modes: ThermalMode::ALL
                .into_iter()
                .map(|mode| (MenuId::new(format!("thermal-mode-{}", mode.setting_key())), mode))
                .collect(),
            secret_arm: MenuId::new("ask-setup-password"),
            synchronize: MenuId::new("read-mode"),
            exit: MenuId::new("exit"),
        }
    }
}

impl MenuIds {
    /// Translate a clicked entry into a command.
    pub fn command_for(&self, id: &MenuId) -> Option<AppCommand> {
        if let Some((_, mode)) = self.modes.iter().find(|(mode_id, _)| mode_id == id) {
            return Some(AppCommand::Activate(*mode));
        }

        if *id == self.secret_arm {
            Some(AppCommand::ToggleSecretArm)
        } else if *id == self.synchronize {
            Some(AppCommand::Synchronize)
        } else if *id == self.exit {
            Some(AppCommand::Shutdown)
        } else {
            None
        }
    }
}
