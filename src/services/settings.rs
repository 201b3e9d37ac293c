//! Settings service handles UI language selection and static translation tables.
//!
//! DESIGN
//! ======
//! Four languages, each with a fixed table keyed by [`TextKey`]. Lookup is
//! total: every language defines every key, so `translate` never fails.
//! The selected language comes from configuration and is not persisted.

use std::fmt;

// =============================================================================
// LANGUAGE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Fi,
    Sv,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Fi, Language::Sv, Language::De];

    /// Two-letter language code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fi => "fi",
            Self::Sv => "sv",
            Self::De => "de",
        }
    }

    /// Parse a two-letter code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// TRANSLATIONS
// =============================================================================

/// Translatable UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    ShoppingLists,
    NewListName,
    AddList,
    AddItem,
    RemoveAllItems,
    RemoveCompletedItems,
    RemoveList,
}

impl TextKey {
    pub const ALL: [TextKey; 7] = [
        TextKey::ShoppingLists,
        TextKey::NewListName,
        TextKey::AddList,
        TextKey::AddItem,
        TextKey::RemoveAllItems,
        TextKey::RemoveCompletedItems,
        TextKey::RemoveList,
    ];

    /// Table key as used by the translation tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShoppingLists => "shoppingLists",
            Self::NewListName => "newListName",
            Self::AddList => "addList",
            Self::AddItem => "addItem",
            Self::RemoveAllItems => "removeAllItems",
            Self::RemoveCompletedItems => "removeCompletedItems",
            Self::RemoveList => "removeList",
        }
    }
}

/// Look up `key` in the table for `language`.
#[must_use]
pub fn translate(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::En => match key {
            TextKey::ShoppingLists => "Shopping Lists",
            TextKey::NewListName => "New List Name",
            TextKey::AddList => "Add List",
            TextKey::AddItem => "Add Item",
            TextKey::RemoveAllItems => "Remove All Items",
            TextKey::RemoveCompletedItems => "Remove Completed Items",
            TextKey::RemoveList => "Remove List",
        },
        Language::Fi => match key {
            TextKey::ShoppingLists => "Ostoslistat",
            TextKey::NewListName => "Uusi luettelon nimi",
            TextKey::AddList => "Lisää lista",
            TextKey::AddItem => "Lisää tuote",
            TextKey::RemoveAllItems => "Poista kaikki kohteet",
            TextKey::RemoveCompletedItems => "Poista valmiit kohteet",
            TextKey::RemoveList => "Poista lista",
        },
        Language::Sv => match key {
            TextKey::ShoppingLists => "Inköpslistor",
            TextKey::NewListName => "Nytt listnamn",
            TextKey::AddList => "Lägg till lista",
            TextKey::AddItem => "Lägg till objekt",
            TextKey::RemoveAllItems => "Ta bort alla objekt",
            TextKey::RemoveCompletedItems => "Ta bort avslutade objekt",
            TextKey::RemoveList => "Ta bort lista",
        },
        Language::De => match key {
            TextKey::ShoppingLists => "Einkaufslisten",
            TextKey::NewListName => "Neuer Listenname",
            TextKey::AddList => "Liste hinzufügen",
            TextKey::AddItem => "Element hinzufügen",
            TextKey::RemoveAllItems => "Alle Elemente entfernen",
            TextKey::RemoveCompletedItems => "Abgeschlossene Elemente entfernen",
            TextKey::RemoveList => "Liste entfernen",
        },
    }
}

/// Lookup by raw language code and table key; `None` for unknown codes or keys.
#[must_use]
pub fn translate_code(code: &str, key: &str) -> Option<&'static str> {
    let language = Language::from_code(code)?;
    let key = TextKey::ALL.into_iter().find(|k| k.as_str() == key)?;
    Some(translate(language, key))
}

// =============================================================================
// SETTINGS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    language: Language,
}

impl Settings {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translate `key` into the selected language.
    #[must_use]
    pub fn text(&self, key: TextKey) -> &'static str {
        translate(self.language, key)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
