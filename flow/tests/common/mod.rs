#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use permikit_flow::{
    FlowContext, Notice, PermissionError, PermissionId, PermissionOutcome, PermissionPlatform,
    PermissionRequest, PermissionStatus, Presenter, Responder, SettingsDialog, SettingsScreen,
    SettingsSurface,
};

pub const APP_ID: &str = "com.bignerdranch.android.permissions";

/// Answers requests from a script; unscripted requests stay pending.
#[derive(Default)]
pub struct FakePlatform {
    rationale: Mutex<HashMap<PermissionId, bool>>,
    statuses: Mutex<HashMap<PermissionId, PermissionStatus>>,
    script: Mutex<VecDeque<PermissionOutcome>>,
    pending: Mutex<Vec<Responder>>,
    requests: Mutex<Vec<PermissionRequest>>,
    rationale_queries: Mutex<Vec<PermissionId>>,
}

impl FakePlatform {
    pub fn set_rationale(&self, id: PermissionId, show: bool) {
        self.rationale.lock().unwrap().insert(id, show);
    }

    pub fn set_status(&self, id: PermissionId, status: PermissionStatus) {
        self.statuses.lock().unwrap().insert(id, status);
    }

    pub fn answer_with(&self, outcome: PermissionOutcome) {
        self.script.lock().unwrap().push_back(outcome);
    }

    pub fn requests(&self) -> Vec<PermissionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn rationale_queries(&self) -> Vec<PermissionId> {
        self.rationale_queries.lock().unwrap().clone()
    }

    pub fn take_pending(&self) -> Vec<Responder> {
        std::mem::take(&mut *self.pending.lock().unwrap())
    }
}

impl PermissionPlatform for FakePlatform {
    fn check(&self, id: &PermissionId) -> PermissionStatus {
        self.statuses
            .lock()
            .unwrap()
            .get(id)
            .copied()
            .unwrap_or(PermissionStatus::Denied)
    }

    fn should_show_rationale(&self, id: &PermissionId) -> bool {
        self.rationale_queries.lock().unwrap().push(id.clone());
        self.rationale.lock().unwrap().get(id).copied().unwrap_or(false)
    }

    fn request(&self, request: &PermissionRequest, responder: Responder) {
        self.requests.lock().unwrap().push(request.clone());
        let scripted = self.script.lock().unwrap().pop_front();
        match scripted {
            Some(outcome) => responder.respond(outcome),
            None => self.pending.lock().unwrap().push(responder),
        }
    }
}

#[derive(Default)]
pub struct RecordingPresenter {
    notices: Mutex<Vec<Notice>>,
    dialogs: Mutex<Vec<SettingsDialog>>,
}

impl RecordingPresenter {
    pub fn notices(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|notice| notice.text.clone())
            .collect()
    }

    pub fn dialog_count(&self) -> usize {
        self.dialogs.lock().unwrap().len()
    }

    pub fn take_dialogs(&self) -> Vec<SettingsDialog> {
        std::mem::take(&mut *self.dialogs.lock().unwrap())
    }
}

impl Presenter for RecordingPresenter {
    fn show_notice(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn show_settings_dialog(&self, dialog: SettingsDialog) {
        self.dialogs.lock().unwrap().push(dialog);
    }
}

pub struct FakeSettings {
    resolvable: bool,
    opened: Mutex<Vec<SettingsScreen>>,
}

impl FakeSettings {
    pub fn new(resolvable: bool) -> Self {
        Self {
            resolvable,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn opened(&self) -> Vec<SettingsScreen> {
        self.opened.lock().unwrap().clone()
    }
}

impl SettingsSurface for FakeSettings {
    fn resolve(&self, app_id: &str) -> Option<SettingsScreen> {
        self.resolvable.then(|| SettingsScreen::app_details(app_id))
    }

    fn open(&self, screen: &SettingsScreen) -> Result<(), PermissionError> {
        self.opened.lock().unwrap().push(screen.clone());
        Ok(())
    }
}

pub struct Harness {
    pub platform: Arc<FakePlatform>,
    pub presenter: Arc<RecordingPresenter>,
    pub settings: Arc<FakeSettings>,
    pub context: FlowContext,
}

impl Harness {
    pub fn new(settings_resolvable: bool) -> Self {
        let platform = Arc::new(FakePlatform::default());
        let presenter = Arc::new(RecordingPresenter::default());
        let settings = Arc::new(FakeSettings::new(settings_resolvable));
        let context = FlowContext::new(
            APP_ID,
            platform.clone(),
            presenter.clone(),
            settings.clone(),
        );

        Self {
            platform,
            presenter,
            settings,
            context,
        }
    }
}

pub fn location_outcome(coarse: bool, fine: bool) -> PermissionOutcome {
    PermissionOutcome::from_grants([
        (PermissionId::ACCESS_COARSE_LOCATION, coarse),
        (PermissionId::ACCESS_FINE_LOCATION, fine),
    ])
}
