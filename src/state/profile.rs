//! Profile page edit mode.
//!
//! DESIGN
//! ======
//! Two states, `Viewing` and `Editing`, with an explicit `saving` marker while
//! a commit is in flight. A failed save keeps the draft in `Editing` so the
//! user can retry; only a successful save returns to `Viewing`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{AuthUser, ProfileUpdate};
use crate::util::validate::{ValidationError, validate_profile_draft};

/// Editable copy of the user's name and email.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub email: String,
}

impl ProfileDraft {
    #[must_use]
    pub fn from_user(user: Option<&AuthUser>) -> Self {
        user.map_or_else(Self::default, |u| Self { full_name: u.full_name.clone(), email: u.email.clone() })
    }

    /// The update a commit submits: trimmed name and email.
    #[must_use]
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate::details(self.full_name.trim().to_owned(), self.email.trim().to_owned())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileMode {
    #[default]
    Viewing,
    Editing(ProfileDraft),
}

/// Why a commit did not produce a request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error("profile is not being edited")]
    NotEditing,
    #[error("profile save already in progress")]
    Saving,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileEditor {
    mode: ProfileMode,
    saving: bool,
}

impl ProfileEditor {
    #[must_use]
    pub fn mode(&self) -> &ProfileMode {
        &self.mode
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ProfileMode::Editing(_))
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    #[must_use]
    pub fn draft(&self) -> Option<&ProfileDraft> {
        match &self.mode {
            ProfileMode::Editing(draft) => Some(draft),
            ProfileMode::Viewing => None,
        }
    }

    /// `Viewing -> Editing`, seeding the draft from the current user.
    /// Ignored when already editing so an open draft is never clobbered.
    pub fn begin_edit(&mut self, user: Option<&AuthUser>) {
        if matches!(self.mode, ProfileMode::Viewing) {
            self.mode = ProfileMode::Editing(ProfileDraft::from_user(user));
        }
    }

    pub fn set_full_name(&mut self, value: String) {
        if let ProfileMode::Editing(draft) = &mut self.mode {
            draft.full_name = value;
        }
    }

    pub fn set_email(&mut self, value: String) {
        if let ProfileMode::Editing(draft) = &mut self.mode {
            draft.email = value;
        }
    }

    /// `Editing -> Viewing`, discarding the draft. Refused while saving.
    /// Returns whether the transition happened.
    pub fn cancel(&mut self) -> bool {
        if self.saving || !self.is_editing() {
            return false;
        }
        self.mode = ProfileMode::Viewing;
        true
    }

    /// Start a save: validate the draft and mark it in flight.
    ///
    /// # Errors
    ///
    /// Fails when not editing, when a save is already running, or when the
    /// draft breaks a validation rule. None of these change state.
    pub fn commit(&mut self) -> Result<ProfileUpdate, CommitError> {
        let ProfileMode::Editing(draft) = &self.mode else {
            return Err(CommitError::NotEditing);
        };
        if self.saving {
            return Err(CommitError::Saving);
        }
        validate_profile_draft(draft)?;
        let update = draft.to_update();
        self.saving = true;
        Ok(update)
    }

    /// Finish a save started by [`ProfileEditor::commit`].
    pub fn settle(&mut self, succeeded: bool) {
        self.saving = false;
        if succeeded {
            self.mode = ProfileMode::Viewing;
        }
    }
}
