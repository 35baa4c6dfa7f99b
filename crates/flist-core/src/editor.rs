//! In-place editing state for the profile header.
//!
//! Each text field toggles between display and edit mode independently. An
//! open editor commits on Enter, on losing focus, or on a click outside its
//! own region; Escape cancels. Blank submissions never change the field.

use crate::types::profile::NICKNAME_PREFIX;

/// Per-field editing rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorRules {
    /// Maximum draft length in characters
    pub max_chars: usize,
    /// Display prefix stripped while editing and re-applied on commit
    pub prefix: Option<&'static str>,
}

pub const NICKNAME_RULES: EditorRules = EditorRules {
    max_chars: 20,
    prefix: Some(NICKNAME_PREFIX),
};

pub const DESCRIPTION_RULES: EditorRules = EditorRules {
    max_chars: 200,
    prefix: None,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEditor {
    rules: EditorRules,
    draft: Option<String>,
}

impl InlineEditor {
    pub fn new(rules: EditorRules) -> Self {
        Self { rules, draft: None }
    }

    pub fn nickname() -> Self {
        Self::new(NICKNAME_RULES)
    }

    pub fn description() -> Self {
        Self::new(DESCRIPTION_RULES)
    }

    pub fn rules(&self) -> EditorRules {
        self.rules
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Current draft, empty when closed
    pub fn draft(&self) -> &str {
        self.draft.as_deref().unwrap_or("")
    }

    /// Enter edit mode seeded with the displayed value.
    pub fn open(&mut self, current: &str) {
        let seed = match self.rules.prefix {
            Some(prefix) => current.strip_prefix(prefix).unwrap_or(current),
            None => current,
        };
        self.draft = Some(self.clamp(seed));
    }

    /// Replace the draft; ignored while closed.
    pub fn set_draft(&mut self, text: &str) {
        if self.draft.is_some() {
            self.draft = Some(self.clamp(text));
        }
    }

    /// Leave edit mode, returning the value to store.
    ///
    /// `None` when the editor was closed or the trimmed draft is empty.
    pub fn commit(&mut self) -> Option<String> {
        let draft = self.draft.take()?;
        let trimmed = draft.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match self.rules.prefix {
            Some(prefix) => format!("{prefix}{trimmed}"),
            None => trimmed.to_string(),
        })
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    fn clamp(&self, text: &str) -> String {
        text.chars().take(self.rules.max_chars).collect()
    }
}

/// Clickable regions of the profile header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditRegion {
    Avatar,
    Nickname,
    Description,
}

/// A committed text edit to hand to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileCommit {
    Nickname(String),
    Description(String),
}

/// Editing state of the whole profile header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditors {
    pub photo_menu_open: bool,
    pub nickname: InlineEditor,
    pub description: InlineEditor,
}

impl Default for ProfileEditors {
    fn default() -> Self {
        Self {
            photo_menu_open: false,
            nickname: InlineEditor::nickname(),
            description: InlineEditor::description(),
        }
    }
}

impl ProfileEditors {
    /// Avatar click; the menu only opens for a signed-in user
    pub fn toggle_photo_menu(&mut self, signed_in: bool) {
        self.photo_menu_open = signed_in && !self.photo_menu_open;
    }

    pub fn close_photo_menu(&mut self) {
        self.photo_menu_open = false;
    }

    pub fn begin_nickname(&mut self, current: &str, signed_in: bool) {
        if signed_in && !self.nickname.is_open() {
            self.nickname.open(current);
        }
    }

    pub fn begin_description(&mut self, current: &str, signed_in: bool) {
        if signed_in && !self.description.is_open() {
            self.description.open(current);
        }
    }

    /// Commit the nickname editor (Enter or blur)
    pub fn commit_nickname(&mut self) -> Option<ProfileCommit> {
        self.nickname.commit().map(ProfileCommit::Nickname)
    }

    /// Commit the description editor (Enter or blur)
    pub fn commit_description(&mut self) -> Option<ProfileCommit> {
        self.description.commit().map(ProfileCommit::Description)
    }

    /// Pointer press somewhere on the page.
    ///
    /// `inside` is the region that received the press, if any. Everything
    /// open outside that region is closed; open editors commit.
    pub fn route_click(&mut self, inside: Option<EditRegion>) -> Vec<ProfileCommit> {
        let mut commits = Vec::new();

        if self.photo_menu_open && inside != Some(EditRegion::Avatar) {
            self.photo_menu_open = false;
        }
        if self.nickname.is_open() && inside != Some(EditRegion::Nickname) {
            commits.extend(self.commit_nickname());
        }
        if self.description.is_open() && inside != Some(EditRegion::Description) {
            commits.extend(self.commit_description());
        }

        commits
    }
}
