/// A two-valued switch used wherever a single hardware bit means
/// "on" or "off".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Toggle {
    Enabled,
    Disabled,
}

impl Toggle {
    pub const fn is_enabled(self) -> bool {
        matches!(self, Toggle::Enabled)
    }

    /// Invert the toggle.
    pub const fn flip(self) -> Self {
        match self {
            Toggle::Enabled => Toggle::Disabled,
            Toggle::Disabled => Toggle::Enabled,
        }
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        if value {
            Toggle::Enabled
        } else {
            Toggle::Disabled
        }
    }
}

impl From<Toggle> for bool {
    fn from(value: Toggle) -> Self {
        value.is_enabled()
    }
}
