use crate::Error;
use image::RgbaImage;
use log::debug;
use xcap::Monitor;

/// Capture the entire primary monitor at its native resolution.
///
/// Falls back to the first monitor when none reports itself as primary.
///
/// # Errors
/// [Error::DeviceUnavailable] if no monitor can be enumerated or captured.
pub fn capture_desktop() -> Result<RgbaImage, Error> {
    let monitors = Monitor::all().map_err(|e| Error::DeviceUnavailable(e.to_string()))?;
    let index = monitors.iter().position(|m| m.is_primary()).unwrap_or(0);
    let monitor = monitors
        .get(index)
        .ok_or_else(|| Error::DeviceUnavailable(String::from("no monitor found")))?;
    debug!(
        "capture monitor {} ({}x{})",
        monitor.name(),
        monitor.width(),
        monitor.height()
    );
    monitor
        .capture_image()
        .map_err(|e| Error::DeviceUnavailable(e.to_string()))
}
