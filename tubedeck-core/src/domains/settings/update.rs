//! Settings domain update handlers

use tracing::{info, warn};
use tubedeck_model::AppSettings;

use super::SettingsDomain;
use super::messages::{Selection, SettingsMessage};
use super::state::{AccountAction, SelectorKind, SettingsView};
use crate::error::{Result, SettingsError};

/// What an update changed, for the caller to react to
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    None,
    ViewChanged(SettingsView),
    /// The store accepted a patch; carries the resulting record
    SettingsUpdated(AppSettings),
    AccountActionCompleted(AccountAction),
}

/// Main message handler for the settings domain
pub fn handle_message(
    domain: &mut SettingsDomain,
    message: SettingsMessage,
) -> Result<SettingsEvent> {
    match message {
        SettingsMessage::OpenSelector(kind) => open_selector(domain, kind),
        SettingsMessage::BackToMain => back_to_main(domain),
        SettingsMessage::Select(selection) => select(domain, selection),
        SettingsMessage::Account(action) => run_account_action(domain, action),
    }
}

fn open_selector(
    domain: &mut SettingsDomain,
    kind: SelectorKind,
) -> Result<SettingsEvent> {
    domain.current_view = SettingsView::Selector(kind);
    Ok(SettingsEvent::ViewChanged(domain.current_view))
}

fn back_to_main(domain: &mut SettingsDomain) -> Result<SettingsEvent> {
    if domain.current_view == SettingsView::Main {
        return Ok(SettingsEvent::None);
    }
    domain.current_view = SettingsView::Main;
    Ok(SettingsEvent::ViewChanged(domain.current_view))
}

fn select(
    domain: &mut SettingsDomain,
    selection: Selection,
) -> Result<SettingsEvent> {
    let Some(patch) = selection.patch(&domain.languages) else {
        warn!(?selection, "ignoring selection that is not in the table");
        return Ok(SettingsEvent::None);
    };

    info!(kind = %selection.kind(), ?patch, "settings selection");
    let updated = domain.settings_store.update(patch)?;
    Ok(SettingsEvent::SettingsUpdated(updated))
}

fn run_account_action(
    domain: &mut SettingsDomain,
    action: AccountAction,
) -> Result<SettingsEvent> {
    let result = match action {
        AccountAction::ClearAllData => domain.account_service.clear_all_data(),
        AccountAction::Logout => domain.account_service.logout(),
    };
    result.map_err(SettingsError::Account)?;
    info!(?action, "account action completed");
    Ok(SettingsEvent::AccountActionCompleted(action))
}
