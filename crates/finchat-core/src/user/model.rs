//! User account and profile domain models.
//!
//! A `Profile` is the fixed-key record of onboarding answers describing a
//! user's business context. Field names are kept in Spanish because they are
//! also the serialized keys of the persisted store and the labels
//! interpolated into prompts.

use serde::{Deserialize, Serialize};

/// The fixed set of profile question keys, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKey {
    Industria,
    EstadoIndustria,
    TipoNegocio,
    Rol,
    ObjetivoPrincipal,
    DolorPrincipal,
}

impl ProfileKey {
    /// All keys in canonical (onboarding) order.
    pub const ALL: [ProfileKey; 6] = [
        ProfileKey::Industria,
        ProfileKey::EstadoIndustria,
        ProfileKey::TipoNegocio,
        ProfileKey::Rol,
        ProfileKey::ObjetivoPrincipal,
        ProfileKey::DolorPrincipal,
    ];

    /// The serialized/display name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKey::Industria => "industria",
            ProfileKey::EstadoIndustria => "estado_industria",
            ProfileKey::TipoNegocio => "tipo_negocio",
            ProfileKey::Rol => "rol",
            ProfileKey::ObjetivoPrincipal => "objetivo_principal",
            ProfileKey::DolorPrincipal => "dolor_principal",
        }
    }
}

/// User profile domain model.
///
/// One optional selected value per [`ProfileKey`]. Once onboarding completes
/// every key holds a value drawn from that key's option list; keys are only
/// ever overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado_industria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_negocio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objetivo_principal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dolor_principal: Option<String>,
}

impl Profile {
    /// Returns the value stored at `key`, if any.
    pub fn get(&self, key: ProfileKey) -> Option<&str> {
        match key {
            ProfileKey::Industria => self.industria.as_deref(),
            ProfileKey::EstadoIndustria => self.estado_industria.as_deref(),
            ProfileKey::TipoNegocio => self.tipo_negocio.as_deref(),
            ProfileKey::Rol => self.rol.as_deref(),
            ProfileKey::ObjetivoPrincipal => self.objetivo_principal.as_deref(),
            ProfileKey::DolorPrincipal => self.dolor_principal.as_deref(),
        }
    }

    /// Overwrites the value stored at `key`.
    pub fn set(&mut self, key: ProfileKey, value: impl Into<String>) {
        let value = Some(value.into());
        match key {
            ProfileKey::Industria => self.industria = value,
            ProfileKey::EstadoIndustria => self.estado_industria = value,
            ProfileKey::TipoNegocio => self.tipo_negocio = value,
            ProfileKey::Rol => self.rol = value,
            ProfileKey::ObjetivoPrincipal => self.objetivo_principal = value,
            ProfileKey::DolorPrincipal => self.dolor_principal = value,
        }
    }

    /// Iterates over the populated `(key, value)` pairs in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (ProfileKey, &str)> {
        ProfileKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
    }

    /// True when no key holds a value.
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// True when every key holds a value.
    pub fn is_complete(&self) -> bool {
        ProfileKey::ALL.into_iter().all(|key| self.get(key).is_some())
    }
}

/// A stored user account.
///
/// The email doubles as the unique key of the account store. The password
/// hash is a self-describing PHC string (algorithm, salt and parameters
/// included), never the plaintext secret. Records are never deleted; there
/// is no deregistration path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Account identity and store key.
    pub email: String,
    /// PHC-format password hash.
    pub password_hash: String,
    /// Onboarding profile (possibly empty).
    #[serde(default)]
    pub profile: Profile,
    /// Timestamp when the account was created (ISO 8601 format).
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        let profile = Profile::default();
        assert!(profile.is_empty());
        assert!(!profile.is_complete());
        assert_eq!(profile.entries().count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut profile = Profile::default();
        profile.set(ProfileKey::Industria, "Agricultura");

        assert_eq!(profile.get(ProfileKey::Industria), Some("Agricultura"));
        assert!(!profile.is_empty());
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_entries_follow_canonical_order() {
        let mut profile = Profile::default();
        // Set out of order on purpose.
        profile.set(ProfileKey::DolorPrincipal, "Flujo de caja");
        profile.set(ProfileKey::Industria, "Comercio");

        let keys: Vec<_> = profile.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![ProfileKey::Industria, ProfileKey::DolorPrincipal]);
    }

    #[test]
    fn test_complete_profile() {
        let mut profile = Profile::default();
        for key in ProfileKey::ALL {
            profile.set(key, "valor");
        }
        assert!(profile.is_complete());
        assert_eq!(profile.entries().count(), ProfileKey::ALL.len());
    }

    #[test]
    fn test_profile_serializes_with_spanish_keys() {
        let mut profile = Profile::default();
        profile.set(ProfileKey::EstadoIndustria, "Estable");

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"estado_industria\""));
        // Unset keys are omitted entirely.
        assert!(!json.contains("industria\":null"));
    }
}
