//! Platform-specific permission implementations.

#[cfg(target_os = "android")]
pub mod android;

mod exception;

#[cfg(not(any(target_os = "android", target_os = "ios")))]
mod desktop;

#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub use desktop::{DesktopPlatform, DesktopSettings};

/// The permission subsystem of the current desktop platform.
#[cfg(not(any(target_os = "android", target_os = "ios")))]
#[must_use]
pub const fn native_platform() -> DesktopPlatform {
    DesktopPlatform
}

/// The settings surface of the current desktop platform.
#[cfg(not(any(target_os = "android", target_os = "ios")))]
#[must_use]
pub const fn native_settings() -> DesktopSettings {
    DesktopSettings
}
