use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayColor {
    Disable,
    Auto,
    Enable,
}

impl DisplayColor {
    pub fn should_enable(self) -> bool {
        match self {
            DisplayColor::Disable => false,
            DisplayColor::Auto => terminal_support_ansi(),
            DisplayColor::Enable => true,
        }
    }

    /// Parses the value of a color setting such as the `QUILL_TERMINAL_COLOR` environment
    /// variable. Unknown values select [`DisplayColor::Auto`].
    pub fn from_setting(value: &str) -> Self {
        match value {
            "disable" => DisplayColor::Disable,
            "enable" => DisplayColor::Enable,
            _ => DisplayColor::Auto,
        }
    }
}

/// Decides whether the current terminal supports ANSI escape codes based on the `TERM`
/// environment variable and whether stdout is a terminal at all.
fn terminal_support_ansi() -> bool {
    // If NO_COLOR is set, definitely do not enable color (https://no-color.org/)
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    let dumb_terminal = env::var("TERM").is_ok_and(|terminal| terminal == "dumb");
    !dumb_terminal && std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::DisplayColor;

    #[test]
    fn from_setting() {
        assert_eq!(DisplayColor::from_setting("disable"), DisplayColor::Disable);
        assert_eq!(DisplayColor::from_setting("enable"), DisplayColor::Enable);
        assert_eq!(DisplayColor::from_setting("auto"), DisplayColor::Auto);
        assert_eq!(DisplayColor::from_setting("sometimes"), DisplayColor::Auto);
    }

    #[test]
    fn explicit_settings() {
        assert!(!DisplayColor::Disable.should_enable());
        assert!(DisplayColor::Enable.should_enable());
    }
}
