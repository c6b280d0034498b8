use notify_rust::Notification;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::{Notice, Presenter, SettingsDialog};

fn confirm_blocking(title: &str, message: &str, open_label: &str) -> bool {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::OkCancelCustom(
            open_label.to_string(),
            "Cancel".to_string(),
        ))
        .show();

    match result {
        MessageDialogResult::Ok | MessageDialogResult::Yes => true,
        MessageDialogResult::Custom(label) => label == open_label,
        _ => false,
    }
}

/// Desktop presenter: notices become desktop notifications, the settings
/// dialog a native message box.
#[derive(Debug, Clone)]
pub struct NativePresenter {
    app_name: String,
}

impl NativePresenter {
    /// Create a presenter that labels notifications with `app_name`.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Presenter for NativePresenter {
    fn show_notice(&self, notice: Notice) {
        if let Err(e) = Notification::new()
            .summary(&self.app_name)
            .body(&notice.text)
            .show()
        {
            log::warn!("failed to show notice {:?}: {e}", notice.text);
        }
    }

    fn show_settings_dialog(&self, dialog: SettingsDialog) {
        std::thread::spawn(move || {
            if confirm_blocking(&dialog.title, &dialog.message, &dialog.open_label) {
                if let Err(e) = dialog.action.open() {
                    log::warn!("failed to open settings: {e}");
                }
            }
        });
    }
}
