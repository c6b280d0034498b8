//! Android permission implementation using JNI.
//!
//! The `*_with_activity` functions call straight into the activity on the
//! current thread. [`AndroidPlatform`] wraps them behind
//! [`PermissionPlatform`] and [`SettingsSurface`] for use by a flow; the host
//! activity forwards `onRequestPermissionsResult` to
//! [`AndroidPlatform::deliver_result`].

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

use jni::objects::{GlobalRef, JObject, JValue};
use jni::sys::jint;
use jni::{JNIEnv, JavaVM};

use super::exception::clear_pending_exception;
use crate::{
    PERMISSION_GRANTED, PermissionError, PermissionId, PermissionOutcome, PermissionPlatform,
    PermissionRequest, PermissionStatus, Responder, SettingsScreen, SettingsSurface,
};

/// `PackageManager.MATCH_DEFAULT_ONLY`.
const MATCH_DEFAULT_ONLY: jint = 0x0001_0000;

/// First request code handed out by [`AndroidPlatform`]. Codes stay within
/// the lower 16 bits that `FragmentActivity` accepts.
const REQUEST_CODE_BASE: jint = 0x0100;
const REQUEST_CODE_MASK: jint = 0xFFFF;

fn jni_error(call: &'static str) -> impl Fn(jni::errors::Error) -> PermissionError {
    move |e| PermissionError::Platform(format!("{call}: {e}"))
}

/// Check a permission using the Activity context.
///
/// # Errors
/// Returns [`PermissionError::Platform`] if a JNI call fails.
pub fn check_with_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    id: &PermissionId,
) -> Result<PermissionStatus, PermissionError> {
    let permission = env.new_string(id.as_str()).map_err(jni_error("new_string"))?;

    let result = env
        .call_method(
            activity,
            "checkSelfPermission",
            "(Ljava/lang/String;)I",
            &[JValue::Object(&permission)],
        )
        .map_err(jni_error("checkSelfPermission"))?
        .i()
        .map_err(jni_error("checkSelfPermission result"))?;

    Ok(PermissionStatus::from(result == PERMISSION_GRANTED))
}

/// Ask the activity whether a rationale should be shown for `id`.
///
/// # Errors
/// Returns [`PermissionError::Platform`] if a JNI call fails.
pub fn should_show_rationale_with_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    id: &PermissionId,
) -> Result<bool, PermissionError> {
    let permission = env.new_string(id.as_str()).map_err(jni_error("new_string"))?;

    env.call_method(
        activity,
        "shouldShowRequestPermissionRationale",
        "(Ljava/lang/String;)Z",
        &[JValue::Object(&permission)],
    )
    .map_err(jni_error("shouldShowRequestPermissionRationale"))?
    .z()
    .map_err(jni_error("shouldShowRequestPermissionRationale result"))
}

/// Show the system permission prompt for every identifier of `request`.
///
/// The result arrives later in the activity's `onRequestPermissionsResult`
/// with the same `request_code`.
///
/// # Errors
/// Returns [`PermissionError::Platform`] if a JNI call fails.
pub fn request_with_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    request: &PermissionRequest,
    request_code: jint,
) -> Result<(), PermissionError> {
    let len = jint::try_from(request.len())
        .map_err(|e| PermissionError::Platform(format!("request too large: {e}")))?;

    let string_class = env
        .find_class("java/lang/String")
        .map_err(jni_error("find String"))?;
    let permissions = env
        .new_object_array(len, string_class, JObject::null())
        .map_err(jni_error("new_object_array"))?;

    for (index, id) in (0..len).zip(request.ids()) {
        let permission = env.new_string(id.as_str()).map_err(jni_error("new_string"))?;
        env.set_object_array_element(&permissions, index, &permission)
            .map_err(jni_error("set_object_array_element"))?;
    }

    env.call_method(
        activity,
        "requestPermissions",
        "([Ljava/lang/String;I)V",
        &[JValue::Object(&permissions), JValue::Int(request_code)],
    )
    .map_err(jni_error("requestPermissions"))?;

    Ok(())
}

fn settings_intent<'local>(
    env: &mut JNIEnv<'local>,
    screen: &SettingsScreen,
) -> Result<JObject<'local>, PermissionError> {
    let action = env.new_string(&screen.action).map_err(jni_error("new_string"))?;
    let uri_string = env.new_string(&screen.uri).map_err(jni_error("new_string"))?;

    let uri = env
        .call_static_method(
            "android/net/Uri",
            "parse",
            "(Ljava/lang/String;)Landroid/net/Uri;",
            &[JValue::Object(&uri_string)],
        )
        .map_err(jni_error("Uri.parse"))?
        .l()
        .map_err(jni_error("Uri.parse result"))?;

    env.new_object(
        "android/content/Intent",
        "(Ljava/lang/String;Landroid/net/Uri;)V",
        &[JValue::Object(&action), JValue::Object(&uri)],
    )
    .map_err(jni_error("new Intent"))
}

/// Resolve the application details screen of `app_id`.
///
/// Returns `None` when no activity on this device handles the intent.
///
/// # Errors
/// Returns [`PermissionError::Platform`] if a JNI call fails.
pub fn resolve_settings_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    app_id: &str,
) -> Result<Option<SettingsScreen>, PermissionError> {
    let screen = SettingsScreen::app_details(app_id);
    let intent = settings_intent(env, &screen)?;

    let package_manager = env
        .call_method(
            context,
            "getPackageManager",
            "()Landroid/content/pm/PackageManager;",
            &[],
        )
        .map_err(jni_error("getPackageManager"))?
        .l()
        .map_err(jni_error("getPackageManager result"))?;

    let resolved = env
        .call_method(
            &package_manager,
            "resolveActivity",
            "(Landroid/content/Intent;I)Landroid/content/pm/ResolveInfo;",
            &[JValue::Object(&intent), JValue::Int(MATCH_DEFAULT_ONLY)],
        )
        .map_err(jni_error("resolveActivity"))?
        .l()
        .map_err(jni_error("resolveActivity result"))?;

    Ok((!resolved.is_null()).then_some(screen))
}

/// Start the activity behind a resolved settings screen.
///
/// # Errors
/// Returns [`PermissionError::Platform`] if a JNI call fails.
pub fn open_settings_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    screen: &SettingsScreen,
) -> Result<(), PermissionError> {
    let intent = settings_intent(env, screen)?;

    env.call_method(
        context,
        "startActivity",
        "(Landroid/content/Intent;)V",
        &[JValue::Object(&intent)],
    )
    .map_err(jni_error("startActivity"))?;

    Ok(())
}

/// Permission subsystem and settings surface bound to one activity.
pub struct AndroidPlatform {
    vm: JavaVM,
    activity: GlobalRef,
    next_code: AtomicI32,
    pending: Mutex<HashMap<jint, Responder>>,
}

impl std::fmt::Debug for AndroidPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndroidPlatform")
            .field("next_code", &self.next_code)
            .finish_non_exhaustive()
    }
}

impl AndroidPlatform {
    /// Bind to `activity`.
    ///
    /// # Errors
    /// Returns [`PermissionError::Platform`] if the VM or a global reference
    /// cannot be obtained.
    pub fn new(env: &mut JNIEnv, activity: &JObject) -> Result<Self, PermissionError> {
        let vm = env.get_java_vm().map_err(jni_error("get_java_vm"))?;
        let activity = env
            .new_global_ref(activity)
            .map_err(jni_error("new_global_ref"))?;

        Ok(Self {
            vm,
            activity,
            next_code: AtomicI32::new(REQUEST_CODE_BASE),
            pending: Mutex::new(HashMap::new()),
        })
    }

    /// Run `f` on an attached thread. When `f` fails, any Java exception
    /// it left pending is cleared before the thread makes another JNI call.
    fn with_env<T>(
        &self,
        f: impl FnOnce(&mut JNIEnv, &JObject) -> Result<T, PermissionError>,
    ) -> Result<T, PermissionError> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(jni_error("attach_current_thread"))?;
        let result = f(&mut *env, self.activity.as_obj());
        if result.is_err() && clear_pending_exception(&*env) {
            log::debug!("cleared pending Java exception");
        }
        result
    }

    fn allocate_code(&self) -> jint {
        self.next_code.fetch_add(1, Ordering::Relaxed) & REQUEST_CODE_MASK
    }

    fn pending(&self) -> std::sync::MutexGuard<'_, HashMap<jint, Responder>> {
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Forward the activity's `onRequestPermissionsResult`.
    ///
    /// Returns `false` if `request_code` was not issued by this platform, in
    /// which case the host should handle the result itself.
    pub fn deliver_result(
        &self,
        request_code: jint,
        permissions: &[String],
        grant_results: &[jint],
    ) -> bool {
        let Some(responder) = self.pending().remove(&request_code) else {
            return false;
        };

        log::debug!("permission result for request code {request_code}");
        let outcome =
            PermissionOutcome::from_grant_results(permissions.iter().cloned(), grant_results);
        responder.respond(outcome);
        true
    }
}

impl PermissionPlatform for AndroidPlatform {
    fn check(&self, id: &PermissionId) -> PermissionStatus {
        self.with_env(|env, activity| check_with_activity(env, activity, id))
            .unwrap_or_else(|e| {
                log::warn!("checkSelfPermission({id}) failed: {e}");
                PermissionStatus::Denied
            })
    }

    fn should_show_rationale(&self, id: &PermissionId) -> bool {
        self.with_env(|env, activity| should_show_rationale_with_activity(env, activity, id))
            .unwrap_or_else(|e| {
                log::warn!("shouldShowRequestPermissionRationale({id}) failed: {e}");
                false
            })
    }

    fn request(&self, request: &PermissionRequest, responder: Responder) {
        let code = self.allocate_code();
        self.pending().insert(code, responder);

        if let Err(e) =
            self.with_env(|env, activity| request_with_activity(env, activity, request, code))
        {
            log::error!("requestPermissions failed: {e}");
            // No prompt will ever answer this code; report a denial instead.
            if let Some(responder) = self.pending().remove(&code) {
                responder.respond_all(false);
            }
        }
    }
}

impl SettingsSurface for AndroidPlatform {
    fn resolve(&self, app_id: &str) -> Option<SettingsScreen> {
        self.with_env(|env, context| resolve_settings_with_context(env, context, app_id))
            .unwrap_or_else(|e| {
                log::warn!("resolving settings for {app_id} failed: {e}");
                None
            })
    }

    fn open(&self, screen: &SettingsScreen) -> Result<(), PermissionError> {
        self.with_env(|env, context| open_settings_with_context(env, context, screen))
    }
}
