//! Outcome delivery and the platform permission subsystem.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use crate::{PermissionError, PermissionId, PermissionOutcome, PermissionRequest, PermissionStatus};

/// Create the delivery pair for one issued request.
///
/// The platform keeps the [`Responder`]; the flow awaits the
/// [`OutcomeReceiver`].
#[must_use]
pub fn outcome_channel(request: &PermissionRequest) -> (Responder, OutcomeReceiver) {
    let (tx, rx) = oneshot::channel();
    (
        Responder {
            request: request.clone(),
            tx,
        },
        OutcomeReceiver { rx },
    )
}

/// Delivers exactly one [`PermissionOutcome`] for one issued request.
///
/// [`Responder::respond`] consumes the responder, so a second delivery is
/// impossible. Dropping it without responding fails the receiver with
/// [`PermissionError::OutcomeDropped`].
#[derive(Debug)]
pub struct Responder {
    request: PermissionRequest,
    tx: oneshot::Sender<PermissionOutcome>,
}

impl Responder {
    /// The request this responder answers.
    #[must_use]
    pub const fn request(&self) -> &PermissionRequest {
        &self.request
    }

    /// Deliver the outcome.
    pub fn respond(self, outcome: PermissionOutcome) {
        if self.tx.send(outcome).is_err() {
            log::debug!(
                "outcome for {:?} delivered after the flow was dropped",
                self.request.ids()
            );
        }
    }

    /// Deliver an outcome with the same grant result for every requested
    /// identifier.
    pub fn respond_all(self, granted: bool) {
        let outcome = PermissionOutcome::from_grants(
            self.request.ids().iter().cloned().map(|id| (id, granted)),
        );
        self.respond(outcome);
    }
}

/// Future resolving to the outcome of one issued request.
#[derive(Debug)]
pub struct OutcomeReceiver {
    rx: oneshot::Receiver<PermissionOutcome>,
}

impl Future for OutcomeReceiver {
    type Output = Result<PermissionOutcome, PermissionError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.map_err(|_| PermissionError::OutcomeDropped))
    }
}

/// The platform permission subsystem.
pub trait PermissionPlatform: Send + Sync {
    /// Current status of `id`, without prompting.
    fn check(&self, id: &PermissionId) -> PermissionStatus;

    /// Whether the platform would show a rationale before asking for `id`
    /// again.
    ///
    /// `false` means either that the user chose "don't ask again" or that
    /// the permission was never requested.
    fn should_show_rationale(&self, id: &PermissionId) -> bool;

    /// Prompt the user for every identifier of `request`.
    ///
    /// Must not block. The outcome is delivered later through `responder`.
    fn request(&self, request: &PermissionRequest, responder: Responder);
}
