mod date_picker;

pub use self::date_picker::date_picker;
