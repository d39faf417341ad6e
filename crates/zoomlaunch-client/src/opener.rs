//! Opening URIs with the host operating system.
//!
//! [`UriOpener`] is the seam between launching a meeting and the OS.
//! [`SystemOpener`] hands the URI to the platform's default handler through
//! the `open` crate (`xdg-open`/`wslview` on Linux, `open` on macOS, `start`
//! on Windows).

use std::io;

use tracing::info;

use crate::error::{ClientError, ClientResult};

/// Something that can hand a URI to the operating system.
pub trait UriOpener {
    /// Opens `uri`, returning once the opener command has finished.
    fn open(&self, uri: &str) -> ClientResult<()>;
}

/// Opens URIs with the system's default handler.
///
/// The handler's output is discarded. A missing handler or a non-zero exit
/// status is a [`ClientError::Launch`]. The platform is only checked when a
/// URI is actually opened.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UriOpener for SystemOpener {
    fn open(&self, uri: &str) -> ClientResult<()> {
        ensure_supported()?;
        info!(uri, "opening URI");
        open::that(uri).map_err(|e| launch_failure(uri, e))
    }
}

/// Fails unless this OS has a known URI handler.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
fn ensure_supported() -> ClientResult<()> {
    Ok(())
}

/// Fails unless this OS has a known URI handler.
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn ensure_supported() -> ClientResult<()> {
    Err(ClientError::UnsupportedPlatform {
        os: std::env::consts::OS.to_string(),
    })
}

fn launch_failure(uri: &str, err: io::Error) -> ClientError {
    ClientError::launch(uri, err.to_string())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records opened URIs instead of running anything.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingOpener {
        pub opened: RefCell<Vec<String>>,
        pub failure: Option<fn() -> ClientError>,
    }

    impl RecordingOpener {
        /// An opener whose handler exits with a failure.
        pub fn failing() -> Self {
            Self {
                failure: Some(|| ClientError::launch("zoommtg://zoom.us", "exit status: 1")),
                ..Default::default()
            }
        }

        /// An opener on an OS without a URI handler.
        pub fn unsupported() -> Self {
            Self {
                failure: Some(|| ClientError::UnsupportedPlatform {
                    os: "plan9".to_string(),
                }),
                ..Default::default()
            }
        }

        pub fn opened(&self) -> Vec<String> {
            self.opened.borrow().clone()
        }
    }

    impl UriOpener for RecordingOpener {
        fn open(&self, uri: &str) -> ClientResult<()> {
            if let Some(failure) = self.failure {
                return Err(failure());
            }
            self.opened.borrow_mut().push(uri.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn known_platforms_are_supported() {
        assert!(ensure_supported().is_ok());
    }

    #[test]
    fn handler_error_is_launch_failure() {
        let err = launch_failure(
            "zoommtg://zoom.us/join?confno=1234567890",
            io::Error::new(io::ErrorKind::NotFound, "xdg-open not found"),
        );
        assert!(matches!(err, ClientError::Launch { ref uri, .. }
            if uri == "zoommtg://zoom.us/join?confno=1234567890"));
        assert_eq!(
            err.to_string(),
            "Cannot open meeting URL \"zoommtg://zoom.us/join?confno=1234567890\": xdg-open not found"
        );
        assert_eq!(err.exit_code(), 2);
    }
}
