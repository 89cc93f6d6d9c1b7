use tracing::debug;
use tubedeck_model::{AppSettings, Language, LanguageTable, SettingsPatch};

use super::PreferenceOption;

/// Language currently selected by `settings`, falling back to the table's
/// default entry when the stored code is absent, blank or unknown
pub fn resolve_language<'t>(
    settings: &AppSettings,
    table: &'t LanguageTable,
) -> &'t Language {
    let stored = settings.language_selected.as_deref();
    let resolved = table.resolve(stored);
    if stored.map(str::trim) != Some(resolved.code.as_str()) {
        debug!(
            ?stored,
            fallback = %resolved.code,
            "language code not in table, using default"
        );
    }
    resolved
}

pub fn language_patch(language: &Language) -> SettingsPatch {
    SettingsPatch::new().with_language_selected(language.code.clone())
}

pub fn language_option(language: &Language) -> PreferenceOption<'_> {
    PreferenceOption {
        key: &language.code,
        label: &language.label,
    }
}
