//! Result routing for the legacy request-code callback.
//!
//! Hosts on the older API receive every result through one
//! `onRequestPermissionsResult(code, permissions, results)` callback and have
//! to tell the flows apart by request code.

use std::collections::HashMap;

use permikit_permission::{PermissionId, PermissionOutcome};

use crate::features::{
    self, RQ_PERMISSIONS_FOR_FEATURES_1_CODE, RQ_PERMISSIONS_FOR_FEATURES_2_CODE,
};
use crate::{FlowContext, FlowState, PermissionFlowController, RequestMode};

/// Flows keyed by the request code they were issued with.
#[derive(Debug, Default, Clone)]
pub struct RequestCodeRouter {
    routes: HashMap<i32, PermissionFlowController>,
}

impl RequestCodeRouter {
    /// An empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The location and camera flows in legacy mode, under their request
    /// codes.
    #[must_use]
    pub fn with_features(context: &FlowContext) -> Self {
        let mut router = Self::new();
        router.register(
            RQ_PERMISSIONS_FOR_FEATURES_1_CODE,
            features::location(context.clone(), RequestMode::Legacy),
        );
        router.register(
            RQ_PERMISSIONS_FOR_FEATURES_2_CODE,
            features::camera(context.clone(), RequestMode::Legacy),
        );
        router
    }

    /// Route `code` to `controller`, returning the flow it replaces.
    pub fn register(
        &mut self,
        code: i32,
        controller: PermissionFlowController,
    ) -> Option<PermissionFlowController> {
        self.routes.insert(code, controller)
    }

    /// The flow registered under `code`.
    #[must_use]
    pub fn get(&self, code: i32) -> Option<&PermissionFlowController> {
        self.routes.get(&code)
    }

    /// Handle one `onRequestPermissionsResult` call.
    ///
    /// Returns `None` if no flow is registered under `code`.
    pub fn dispatch<K>(
        &self,
        code: i32,
        permissions: impl IntoIterator<Item = K>,
        grant_results: &[i32],
    ) -> Option<FlowState>
    where
        K: Into<PermissionId>,
    {
        let Some(controller) = self.routes.get(&code) else {
            log::warn!("no permission flow registered for request code {code}");
            return None;
        };

        let outcome = PermissionOutcome::from_grant_results(permissions, grant_results);
        Some(controller.on_outcome(&outcome))
    }
}
