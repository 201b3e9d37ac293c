//! Plain-text rendering of the application state for the terminal.

use std::fmt::Write;

use crate::model::ShoppingList;
use crate::services::profile::UserProfile;
use crate::services::settings::{Language, Settings, TextKey, translate};

/// Header, greeting (or onboarding prompt) and every list. Collapsed lists
/// show their name only; expanded lists also show items.
#[must_use]
pub fn render(lists: &[ShoppingList], profile: &UserProfile, settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", settings.text(TextKey::ShoppingLists));
    match profile.welcome_message() {
        Some(welcome) => {
            let _ = writeln!(out, "{welcome}");
        }
        None => {
            let _ = writeln!(out, "Enter your name with `set-name <name>`.");
        }
    }

    if lists.is_empty() {
        let _ = writeln!(out, "\n({}: `new-list <name>`)", settings.text(TextKey::AddList));
    }
    for list in lists {
        out.push('\n');
        out.push_str(&render_list(list));
    }
    out
}

#[must_use]
pub fn render_list(list: &ShoppingList) -> String {
    let mut out = String::new();
    let marker = if list.expanded { 'v' } else { '>' };
    let _ = writeln!(
        out,
        "{marker} [{}] {} ({}/{})",
        list.id,
        list.name,
        list.completed_count(),
        list.items.len()
    );
    if list.expanded {
        for item in &list.items {
            let check = if item.completed { 'x' } else { ' ' };
            let _ = writeln!(out, "    [{check}] {} ({})", item.text, item.id);
        }
    }
    out
}

/// Every language with its translated strings.
#[must_use]
pub fn render_languages(selected: Language) -> String {
    let mut out = String::new();
    for lang in Language::ALL {
        let marker = if lang == selected { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {lang}");
        for key in TextKey::ALL {
            let _ = writeln!(out, "    {}: {}", key.as_str(), translate(lang, key));
        }
    }
    out
}
