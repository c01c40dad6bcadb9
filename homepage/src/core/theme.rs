//! Time-of-day light/dark theme

use chrono::{Local, Timelike};
use shared::HomeConfig;

/// Colors applied to the page root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    /// Value of `<meta name="theme-color">`
    pub theme_color: &'static str,
}

const DAY: Palette = Palette {
    bg: "#f5f6fb",
    card: "#ffffff",
    text: "#0f1222",
    muted: "#5a6275",
    theme_color: "#f5f6fb",
};

const NIGHT: Palette = Palette {
    bg: "#0b0e13",
    card: "#11151c",
    text: "#eaf0ff",
    muted: "#b1b8cc",
    theme_color: "#0b0e13",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    /// Day from `day_start` (inclusive) to `day_end` (exclusive)
    pub fn for_hour(hour: u32, day_start: u32, day_end: u32) -> Self {
        if (day_start..day_end).contains(&hour) {
            Theme::Day
        } else {
            Theme::Night
        }
    }

    /// Theme for the local wall clock
    pub fn current(config: &HomeConfig) -> Self {
        Self::for_hour(Local::now().hour(), config.day_start_hour, config.day_end_hour)
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Day => &DAY,
            Theme::Night => &NIGHT,
        }
    }

    /// `:root` custom properties for the palette
    pub fn css_variables(&self) -> String {
        let p = self.palette();
        format!(
            ":root{{--bg:{};--card:{};--text:{};--muted:{};}}",
            p.bg, p.card, p.text, p.muted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_day_bounds() {
        assert_eq!(Theme::for_hour(6, 7, 19), Theme::Night);
        assert_eq!(Theme::for_hour(7, 7, 19), Theme::Day);
        assert_eq!(Theme::for_hour(18, 7, 19), Theme::Day);
        assert_eq!(Theme::for_hour(19, 7, 19), Theme::Night);
        assert_eq!(Theme::for_hour(0, 7, 19), Theme::Night);
    }

    #[test]
    fn test_palettes() {
        assert_eq!(Theme::Day.palette().theme_color, "#f5f6fb");
        assert_eq!(Theme::Night.palette().theme_color, "#0b0e13");
        assert_eq!(
            Theme::Night.css_variables(),
            ":root{--bg:#0b0e13;--card:#11151c;--text:#eaf0ff;--muted:#b1b8cc;}"
        );
    }
}
