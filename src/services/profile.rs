//! Profile service holds the user's display name and onboarding state.
//!
//! A profile without a name (or with a blank stored name) has not finished
//! onboarding, so the presentation layer asks for a name instead of greeting.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    name: Option<String>,
}

impl UserProfile {
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }

    #[must_use]
    pub fn needs_onboarding(&self) -> bool {
        self.name().is_none()
    }

    /// Greeting shown once onboarding is complete.
    #[must_use]
    pub fn welcome_message(&self) -> Option<String> {
        self.name().map(|name| format!("Welcome, {name}!"))
    }

    /// Replace the name. Blank input is ignored and returns `false`.
    pub fn set_name(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.name = Some(name.to_owned());
        true
    }
}
