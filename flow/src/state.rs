use std::fmt;

use permikit_permission::PermissionId;

/// Whether the application settings screen could be offered after a
/// permanent denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsAvailability {
    /// The screen resolved; a dialog with an "Open" action was shown.
    Offerable,
    /// The screen did not resolve; a terminal notice was shown instead.
    Unavailable,
}

/// State of one request/response cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlowState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The platform is prompting the user.
    Requested,
    /// Every requested permission was granted.
    Granted,
    /// Denied, but the platform would show a rationale; asking again later
    /// is possible.
    SoftDenied,
    /// Denied and the platform will not show a rationale.
    PermanentlyDenied(SettingsAvailability),
}

impl FlowState {
    /// Whether the cycle is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Granted | Self::SoftDenied | Self::PermanentlyDenied(_)
        )
    }

    /// Whether the cycle ended with every permission granted.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Requested => f.write_str("requested"),
            Self::Granted => f.write_str("granted"),
            Self::SoftDenied => f.write_str("denied"),
            Self::PermanentlyDenied(SettingsAvailability::Offerable) => {
                f.write_str("denied permanently, settings offered")
            }
            Self::PermanentlyDenied(SettingsAvailability::Unavailable) => {
                f.write_str("denied permanently, settings unavailable")
            }
        }
    }
}

/// Passed to a flow's denied hook once the denial has been presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    /// `SoftDenied` or `PermanentlyDenied`.
    pub state: FlowState,
    /// The denied identifier the rationale was queried for.
    pub id: PermissionId,
}
