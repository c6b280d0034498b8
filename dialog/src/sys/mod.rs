//! Native presenters. Mobile hosts render notices and the settings dialog
//! with their own UI toolkit through [`crate::Presenter`].

#[cfg(not(any(target_os = "android", target_os = "ios")))]
mod desktop;
#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub use desktop::NativePresenter;
