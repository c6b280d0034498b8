use std::fmt;
use std::sync::Arc;

use permikit_dialog::Presenter;
use permikit_permission::{PermissionPlatform, SettingsSurface};

use crate::FlowMessages;

/// Collaborators shared by every flow of one screen.
///
/// Cloning shares the collaborators. A context holds no flow state, so two
/// flows built from the same context never influence each other.
#[derive(Clone)]
pub struct FlowContext {
    app_id: Arc<str>,
    platform: Arc<dyn PermissionPlatform>,
    presenter: Arc<dyn Presenter>,
    settings: Arc<dyn SettingsSurface>,
    messages: Arc<FlowMessages>,
}

impl fmt::Debug for FlowContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowContext")
            .field("app_id", &self.app_id)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl FlowContext {
    /// Create a context for the application `app_id` with default messages.
    pub fn new(
        app_id: impl Into<Arc<str>>,
        platform: Arc<dyn PermissionPlatform>,
        presenter: Arc<dyn Presenter>,
        settings: Arc<dyn SettingsSurface>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            platform,
            presenter,
            settings,
            messages: Arc::new(FlowMessages::default()),
        }
    }

    /// Replace the user-visible strings.
    #[must_use]
    pub fn with_messages(mut self, messages: FlowMessages) -> Self {
        self.messages = Arc::new(messages);
        self
    }

    /// Application identifier used to resolve the settings screen.
    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The platform permission subsystem.
    #[must_use]
    pub fn platform(&self) -> &dyn PermissionPlatform {
        &*self.platform
    }

    /// The host presenter.
    #[must_use]
    pub fn presenter(&self) -> &dyn Presenter {
        &*self.presenter
    }

    /// The platform settings surface.
    #[must_use]
    pub fn settings(&self) -> &Arc<dyn SettingsSurface> {
        &self.settings
    }

    /// User-visible strings.
    #[must_use]
    pub fn messages(&self) -> &FlowMessages {
        &self.messages
    }
}
