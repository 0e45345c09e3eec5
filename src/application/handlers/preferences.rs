//! Preference handlers - get-or-default and partial update.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TravelerId};
use crate::domain::trip::{PreferencesPatch, TravelerPreferences};
use crate::ports::PreferencesRepository;

/// Returns a traveler's stored preferences, creating the default profile
/// on first contact.
pub struct GetOrCreatePreferencesHandler {
    preferences: Arc<dyn PreferencesRepository>,
}

impl GetOrCreatePreferencesHandler {
    pub fn new(preferences: Arc<dyn PreferencesRepository>) -> Self {
        Self { preferences }
    }

    pub async fn handle(&self, traveler_id: &TravelerId) -> Result<TravelerPreferences, DomainError> {
        if let Some(existing) = self.preferences.find_by_traveler(traveler_id).await? {
            return Ok(existing);
        }
        self.preferences
            .create(TravelerPreferences::defaults_for(traveler_id.clone()))
            .await
    }
}

/// Applies a partial preferences update, creating the profile first if the
/// traveler has none yet.
pub struct UpdatePreferencesHandler {
    preferences: Arc<dyn PreferencesRepository>,
}

impl UpdatePreferencesHandler {
    pub fn new(preferences: Arc<dyn PreferencesRepository>) -> Self {
        Self { preferences }
    }

    pub async fn handle(
        &self,
        traveler_id: &TravelerId,
        patch: PreferencesPatch,
    ) -> Result<TravelerPreferences, DomainError> {
        let existing = match self.preferences.find_by_traveler(traveler_id).await? {
            Some(existing) => existing,
            None => {
                self.preferences
                    .create(TravelerPreferences::defaults_for(traveler_id.clone()))
                    .await?
            }
        };
        self.preferences.update(existing.id, patch).await
    }
}
