use std::sync::Arc;

use crate::{PermissionError, PermissionId};

/// An ordered set of permissions requested together as one UI action.
///
/// The identifiers are fixed at creation. Cloning is cheap and shares the
/// same identifier list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermissionRequest {
    ids: Arc<[PermissionId]>,
}

impl PermissionRequest {
    /// Create a request from a list of identifiers.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns [`PermissionError::EmptyRequest`] if no identifier is given.
    pub fn new<I>(ids: I) -> Result<Self, PermissionError>
    where
        I: IntoIterator,
        I::Item: Into<PermissionId>,
    {
        let mut unique: Vec<PermissionId> = Vec::new();
        for id in ids {
            let id = id.into();
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        if unique.is_empty() {
            return Err(PermissionError::EmptyRequest);
        }

        Ok(Self { ids: unique.into() })
    }

    /// Create a request for exactly one permission.
    pub fn single(id: impl Into<PermissionId>) -> Self {
        Self {
            ids: Arc::from([id.into()]),
        }
    }

    /// A new request with `id` appended, unless already present.
    #[must_use]
    pub fn with(self, id: impl Into<PermissionId>) -> Self {
        let id = id.into();
        if self.contains(&id) {
            return self;
        }
        let mut ids = self.ids.to_vec();
        ids.push(id);
        Self { ids: ids.into() }
    }

    /// The requested identifiers, in request order.
    #[must_use]
    pub fn ids(&self) -> &[PermissionId] {
        &self.ids
    }

    /// The first requested identifier.
    #[must_use]
    pub fn first(&self) -> &PermissionId {
        // Non-empty by construction.
        &self.ids[0]
    }

    /// Number of identifiers in the request.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always `false`; requests are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the request names exactly one permission.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.ids.len() == 1
    }

    /// Whether `id` is part of this request.
    #[must_use]
    pub fn contains(&self, id: &PermissionId) -> bool {
        self.ids.contains(id)
    }
}
