/// A stylesheet applied to the whole document.
///
/// Stylesheets are applied in the order they were added to the application,
/// later stylesheets override earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stylesheet {
    pub name: &'static str,
    pub source: &'static str,
}

pub const DATE_PICKER: Stylesheet = Stylesheet {
    name: "date-picker",
    source: include_str!("../assets/date-picker.css"),
};

pub const RESET: Stylesheet = Stylesheet {
    name: "reset",
    source: include_str!("../assets/reset.css"),
};

pub const THEME: Stylesheet = Stylesheet {
    name: "theme",
    source: include_str!("../assets/theme.css"),
};
