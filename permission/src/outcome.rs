use std::collections::HashMap;

use crate::{PermissionId, PermissionRequest};

/// `PackageManager.PERMISSION_GRANTED` in the legacy result callback.
pub const PERMISSION_GRANTED: i32 = 0;

/// Grant results delivered by the platform for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionOutcome {
    grants: HashMap<PermissionId, bool>,
}

impl PermissionOutcome {
    /// Build an outcome from `(id, granted)` pairs.
    pub fn from_grants<I, K>(grants: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<PermissionId>,
    {
        Self {
            grants: grants.into_iter().map(|(id, granted)| (id.into(), granted)).collect(),
        }
    }

    /// Outcome of a single-permission request.
    pub fn single(id: impl Into<PermissionId>, granted: bool) -> Self {
        Self::from_grants([(id.into(), granted)])
    }

    /// Outcome where every identifier of `request` is granted.
    #[must_use]
    pub fn all_granted_for(request: &PermissionRequest) -> Self {
        Self::from_grants(request.ids().iter().cloned().map(|id| (id, true)))
    }

    /// Build an outcome from the legacy callback shape: parallel arrays of
    /// identifiers and `PERMISSION_GRANTED` / `PERMISSION_DENIED` codes.
    ///
    /// Arrays of different length are zipped to the shorter one.
    pub fn from_grant_results<K>(ids: impl IntoIterator<Item = K>, results: &[i32]) -> Self
    where
        K: Into<PermissionId>,
    {
        Self::from_grants(
            ids.into_iter()
                .zip(results)
                .map(|(id, &result)| (id, result == PERMISSION_GRANTED)),
        )
    }

    /// The grant result for `id`, if the platform reported one.
    #[must_use]
    pub fn get(&self, id: &PermissionId) -> Option<bool> {
        self.grants.get(id).copied()
    }

    /// Whether `id` was granted. A missing entry counts as not granted.
    #[must_use]
    pub fn is_granted(&self, id: &PermissionId) -> bool {
        self.get(id).unwrap_or(false)
    }

    /// Whether every identifier of `request` was granted.
    #[must_use]
    pub fn all_granted(&self, request: &PermissionRequest) -> bool {
        request.ids().iter().all(|id| self.is_granted(id))
    }

    /// The first identifier of `request`, in request order, that was not
    /// granted.
    #[must_use]
    pub fn first_denied<'r>(&self, request: &'r PermissionRequest) -> Option<&'r PermissionId> {
        request.ids().iter().find(|id| !self.is_granted(id))
    }

    /// Identifiers of `request` that have no entry in this outcome.
    pub fn missing<'r>(
        &'r self,
        request: &'r PermissionRequest,
    ) -> impl Iterator<Item = &'r PermissionId> + 'r {
        request.ids().iter().filter(|id| !self.grants.contains_key(*id))
    }

    /// Number of reported entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether the platform reported nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> PermissionRequest {
        PermissionRequest::new([
            PermissionId::ACCESS_COARSE_LOCATION,
            PermissionId::ACCESS_FINE_LOCATION,
        ])
        .unwrap()
    }

    #[test]
    fn every_value_true_is_all_granted() {
        let outcome = PermissionOutcome::from_grants([
            (PermissionId::ACCESS_COARSE_LOCATION, true),
            (PermissionId::ACCESS_FINE_LOCATION, true),
        ]);
        assert!(outcome.all_granted(&location()));
        assert_eq!(outcome.first_denied(&location()), None);
    }

    #[test]
    fn missing_key_is_not_granted() {
        let outcome = PermissionOutcome::single(PermissionId::ACCESS_COARSE_LOCATION, true);
        let request = location();

        assert!(outcome.is_granted(&PermissionId::ACCESS_COARSE_LOCATION));
        assert!(!outcome.is_granted(&PermissionId::ACCESS_FINE_LOCATION));
        assert!(!outcome.all_granted(&request));
        assert_eq!(
            outcome.first_denied(&request),
            Some(&PermissionId::ACCESS_FINE_LOCATION)
        );
        assert_eq!(
            outcome.missing(&request).collect::<Vec<_>>(),
            vec![&PermissionId::ACCESS_FINE_LOCATION]
        );
    }

    #[test]
    fn empty_outcome_grants_nothing() {
        let outcome = PermissionOutcome::default();
        assert!(outcome.is_empty());
        assert!(!outcome.all_granted(&location()));
    }

    #[test]
    fn first_denied_follows_request_order() {
        let outcome = PermissionOutcome::from_grants([
            (PermissionId::ACCESS_FINE_LOCATION, false),
            (PermissionId::ACCESS_COARSE_LOCATION, false),
        ]);
        assert_eq!(
            outcome.first_denied(&location()),
            Some(&PermissionId::ACCESS_COARSE_LOCATION)
        );
    }

    #[test]
    fn legacy_grant_results() {
        let outcome = PermissionOutcome::from_grant_results(
            [
                PermissionId::ACCESS_COARSE_LOCATION,
                PermissionId::ACCESS_FINE_LOCATION,
            ],
            &[0, -1],
        );
        assert_eq!(outcome.get(&PermissionId::ACCESS_COARSE_LOCATION), Some(true));
        assert_eq!(outcome.get(&PermissionId::ACCESS_FINE_LOCATION), Some(false));

        // A cancelled prompt reports empty arrays.
        let cancelled = PermissionOutcome::from_grant_results(location().ids().to_vec(), &[]);
        assert!(cancelled.is_empty());
    }
}
