//! The two stock features: location and camera.

use permikit_dialog::Notice;
use permikit_permission::{PermissionId, PermissionRequest};

use crate::{FlowContext, PermissionFlowController, RequestMode};

/// Request code of the location feature in the legacy callback API.
pub const RQ_PERMISSIONS_FOR_FEATURES_1_CODE: i32 = 1;
/// Request code of the camera feature in the legacy callback API.
pub const RQ_PERMISSIONS_FOR_FEATURES_2_CODE: i32 = 2;

/// Coarse and fine location, requested as one atomic action.
#[must_use]
pub fn location_request() -> PermissionRequest {
    PermissionRequest::single(PermissionId::ACCESS_COARSE_LOCATION)
        .with(PermissionId::ACCESS_FINE_LOCATION)
}

/// The camera.
#[must_use]
pub fn camera_request() -> PermissionRequest {
    PermissionRequest::single(PermissionId::CAMERA)
}

/// Location flow: acknowledges a grant with a notice.
#[must_use]
pub fn location(context: FlowContext, mode: RequestMode) -> PermissionFlowController {
    PermissionFlowController::builder(location_request())
        .mode(mode)
        .on_granted(|context| {
            context
                .presenter()
                .show_notice(Notice::new(&context.messages().location_granted));
        })
        .build(context)
}

/// Camera flow: acknowledges a grant with a notice.
#[must_use]
pub fn camera(context: FlowContext, mode: RequestMode) -> PermissionFlowController {
    PermissionFlowController::builder(camera_request())
        .mode(mode)
        .on_granted(|context| {
            context
                .presenter()
                .show_notice(Notice::new(&context.messages().camera_granted));
        })
        .build(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_bundles_coarse_then_fine() {
        assert_eq!(
            location_request().ids(),
            &[
                PermissionId::ACCESS_COARSE_LOCATION,
                PermissionId::ACCESS_FINE_LOCATION
            ]
        );
        assert!(camera_request().is_single());
    }
}
