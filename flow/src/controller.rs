//! The permission flow controller.

use std::fmt;
use std::sync::Arc;

use permikit_dialog::{Notice, SettingsAction, SettingsDialog};
use permikit_permission::{
    OutcomeReceiver, PermissionOutcome, PermissionRequest, PermissionStatus, outcome_channel,
};

use crate::{Denial, FlowContext, FlowError, FlowState, SettingsAvailability};

type GrantedHook = Arc<dyn Fn(&FlowContext) + Send + Sync>;
type DeniedHook = Arc<dyn Fn(&Denial) + Send + Sync>;

/// How a flow talks to the platform when triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RequestMode {
    /// Always hand the request to the platform prompt.
    #[default]
    Launcher,
    /// Check the current status first and skip the prompt when every
    /// permission is already granted.
    Legacy,
}

/// Builder for [`PermissionFlowController`].
#[must_use]
pub struct FlowBuilder {
    request: PermissionRequest,
    on_granted: Option<GrantedHook>,
    on_denied: Option<DeniedHook>,
    mode: RequestMode,
}

impl fmt::Debug for FlowBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowBuilder")
            .field("request", &self.request)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl FlowBuilder {
    /// Run `f` when every permission is granted.
    pub fn on_granted(mut self, f: impl Fn(&FlowContext) + Send + Sync + 'static) -> Self {
        self.on_granted = Some(Arc::new(f));
        self
    }

    /// Run `f` after a denial has been presented.
    pub fn on_denied(mut self, f: impl Fn(&Denial) + Send + Sync + 'static) -> Self {
        self.on_denied = Some(Arc::new(f));
        self
    }

    /// Select the request mode.
    pub fn mode(mut self, mode: RequestMode) -> Self {
        self.mode = mode;
        self
    }

    /// Bind the flow to its collaborators.
    #[must_use]
    pub fn build(self, context: FlowContext) -> PermissionFlowController {
        PermissionFlowController {
            request: self.request,
            context,
            on_granted: self.on_granted,
            on_denied: self.on_denied,
            mode: self.mode,
        }
    }
}

/// Drives one permission request per trigger and decides what the user
/// sees.
///
/// The controller is stateless between triggers: every call to
/// [`request_permissions`](Self::request_permissions) starts an independent
/// cycle, and a second trigger before the first outcome arrives issues a
/// second prompt.
#[derive(Clone)]
pub struct PermissionFlowController {
    request: PermissionRequest,
    context: FlowContext,
    on_granted: Option<GrantedHook>,
    on_denied: Option<DeniedHook>,
    mode: RequestMode,
}

impl fmt::Debug for PermissionFlowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionFlowController")
            .field("request", &self.request)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl PermissionFlowController {
    /// Start building a flow for `request`.
    pub fn builder(request: PermissionRequest) -> FlowBuilder {
        FlowBuilder {
            request,
            on_granted: None,
            on_denied: None,
            mode: RequestMode::default(),
        }
    }

    /// The permissions this flow asks for.
    #[must_use]
    pub const fn request(&self) -> &PermissionRequest {
        &self.request
    }

    /// The shared collaborators.
    #[must_use]
    pub const fn context(&self) -> &FlowContext {
        &self.context
    }

    /// The request mode.
    #[must_use]
    pub const fn mode(&self) -> RequestMode {
        self.mode
    }

    /// Whether the platform already reports every permission as granted.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        self.request
            .ids()
            .iter()
            .all(|id| self.context.platform().check(id) == PermissionStatus::Granted)
    }

    /// Issue the request and return without waiting for the user.
    ///
    /// The returned [`PendingFlow`] resolves once the platform delivers the
    /// outcome. Dropping it does not withdraw the prompt; the outcome is
    /// then discarded.
    pub fn request_permissions(&self) -> PendingFlow {
        let (responder, receiver) = outcome_channel(&self.request);

        if self.mode == RequestMode::Legacy && self.is_granted() {
            log::debug!("{:?} already granted, skipping prompt", self.request.ids());
            responder.respond(PermissionOutcome::all_granted_for(&self.request));
        } else {
            log::debug!("requesting {:?}", self.request.ids());
            self.context.platform().request(&self.request, responder);
        }

        PendingFlow {
            controller: self.clone(),
            receiver,
        }
    }

    /// Decide what the user sees for `outcome` and return the terminal
    /// state.
    pub fn on_outcome(&self, outcome: &PermissionOutcome) -> FlowState {
        for id in outcome.missing(&self.request) {
            log::warn!("outcome has no entry for {id}, treating it as denied");
        }

        let Some(denied) = outcome.first_denied(&self.request) else {
            log::info!("{:?} granted", self.request.ids());
            if let Some(on_granted) = &self.on_granted {
                on_granted(&self.context);
            }
            return FlowState::Granted;
        };

        let state = if self.context.platform().should_show_rationale(denied) {
            self.context
                .presenter()
                .show_notice(Notice::new(&self.context.messages().denied));
            FlowState::SoftDenied
        } else {
            // Either "don't ask again" or never asked; both end up here.
            FlowState::PermanentlyDenied(self.ask_user_for_opening_app_settings())
        };

        log::info!("{denied}: {state}");
        if let Some(on_denied) = &self.on_denied {
            on_denied(&Denial {
                state,
                id: denied.clone(),
            });
        }
        state
    }

    /// Offer the application settings screen, or tell the user the
    /// permissions are denied for good when it cannot be resolved.
    pub fn ask_user_for_opening_app_settings(&self) -> SettingsAvailability {
        let context = &self.context;
        let messages = context.messages();

        let Some(screen) = context.settings().resolve(context.app_id()) else {
            log::warn!("no settings screen for {}", context.app_id());
            context
                .presenter()
                .show_notice(Notice::new(&messages.denied_forever));
            return SettingsAvailability::Unavailable;
        };

        context.presenter().show_settings_dialog(SettingsDialog {
            title: messages.settings_title.clone(),
            message: messages.settings_message.clone(),
            open_label: messages.settings_open.clone(),
            action: SettingsAction::new(screen, Arc::clone(context.settings())),
        });
        SettingsAvailability::Offerable
    }
}

/// One issued request waiting for its outcome.
#[derive(Debug)]
#[must_use = "the outcome is only handled when the pending flow is resolved"]
pub struct PendingFlow {
    controller: PermissionFlowController,
    receiver: OutcomeReceiver,
}

impl PendingFlow {
    /// The request being answered.
    pub const fn request(&self) -> &PermissionRequest {
        &self.controller.request
    }

    /// Always [`FlowState::Requested`]; the cycle ends in [`resolve`](Self::resolve).
    pub const fn state(&self) -> FlowState {
        FlowState::Requested
    }

    /// Wait for the outcome and handle it.
    ///
    /// # Errors
    /// Returns [`FlowError::Permission`] if the platform dropped the request
    /// without delivering an outcome.
    pub async fn resolve(self) -> Result<FlowState, FlowError> {
        let ids = self.controller.request.ids();
        let outcome = self
            .receiver
            .await
            .inspect_err(|e| log::warn!("no outcome for {ids:?}: {e}"))?;
        log::debug!("outcome received for {ids:?}");
        Ok(self.controller.on_outcome(&outcome))
    }
}
