//! Traveler preferences repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PreferencesId, TravelerId};
use crate::domain::trip::{PreferencesPatch, TravelerPreferences};

/// Repository port for stored traveler preference profiles.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Stores a new profile.
    async fn create(
        &self,
        preferences: TravelerPreferences,
    ) -> Result<TravelerPreferences, DomainError>;

    /// Finds the profile for a traveler. Returns `None` if absent.
    async fn find_by_traveler(
        &self,
        traveler_id: &TravelerId,
    ) -> Result<Option<TravelerPreferences>, DomainError>;

    /// Applies a partial update. Fails with `PreferencesNotFound` if
    /// absent.
    async fn update(
        &self,
        id: PreferencesId,
        patch: PreferencesPatch,
    ) -> Result<TravelerPreferences, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PreferencesRepository) {}
    }
}
