//! Usage-metrics flattening
//!
//! Explodes one per-date [`UsageEntry`] tree into flat rows. Two disjoint
//! row families share the 19-column schema: one row per
//! (editor, model, language) under code completions, and one row per
//! (chat editor, model) under IDE chat. Both carry the entry's date-level
//! aggregates; the other family's columns stay zero/blank.

use ghreport_domain::types::metrics::UsageEntry;
use ghreport_domain::types::report::MetricsRow;

/// Flatten one metrics entry into output rows, completion rows first,
/// then chat rows, preserving source order within each family.
pub fn flatten_entry(enterprise: &str, team_name: &str, entry: &UsageEntry) -> Vec<MetricsRow> {
    let date = entry.date.clone().unwrap_or_default();
    let total_active_users = entry.total_active_users;
    let total_chat_engaged_users = entry.chat_engaged_users();
    let total_pr_engaged_users = entry.pr_engaged_users();

    let base = MetricsRow {
        enterprise: enterprise.to_string(),
        team: team_name.to_string(),
        date,
        total_active_users,
        total_chat_engaged_users,
        total_pr_engaged_users,
        ..Default::default()
    };

    let mut rows = Vec::new();

    if let Some(completions) = &entry.copilot_ide_code_completions {
        for editor in &completions.editors {
            let editor_name = editor.name.clone().unwrap_or_default();
            for model in &editor.models {
                let model_name = model.name.clone().unwrap_or_default();
                for language in &model.languages {
                    rows.push(MetricsRow {
                        editor: editor_name.clone(),
                        model: model_name.clone(),
                        language: language.name.clone().unwrap_or_default(),
                        total_engaged_users: language.total_engaged_users,
                        total_code_acceptances: language.total_code_acceptances,
                        total_code_suggestions: language.total_code_suggestions,
                        total_code_lines_accepted: language.total_code_lines_accepted,
                        total_code_lines_suggested: language.total_code_lines_suggested,
                        ..base.clone()
                    });
                }
            }
        }
    }

    if let Some(chat) = &entry.copilot_ide_chat {
        for editor in &chat.editors {
            let chat_editor = editor.name.clone().unwrap_or_default();
            for model in &editor.models {
                rows.push(MetricsRow {
                    chat_editor: chat_editor.clone(),
                    total_chats: model.total_chats,
                    is_custom_model: model.is_custom_model,
                    total_chat_copy_events: model.total_chat_copy_events,
                    total_chat_insertion_events: model.total_chat_insertion_events,
                    ..base.clone()
                });
            }
        }
    }

    rows
}
