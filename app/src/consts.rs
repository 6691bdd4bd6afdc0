/// Element the application is mounted into, unless configured otherwise.
pub const MOUNT_SELECTOR: &str = "#app";

/// Global name of the date picker component, templates reference it by this name.
pub const DATE_PICKER: &str = "VueDatePicker";

/// `<meta name=...>` carrying the JSON configuration in the hosting document.
#[cfg(feature = "browser")]
pub const CONFIG_META: &str = "datebook-config";

pub const DEFAULT_LOG_LEVEL: &str = "info";
