//! Colors and font weights consumed by the card renderer.
//!
//! A theme only feeds inline style strings; it never changes the structure a
//! renderer emits.

use shoegrid_catalog::Variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub white: String,
    pub gray_700: String,
    pub gray_900: String,
    pub weight_medium: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
            white: "hsl(0deg 0% 100%)".to_string(),
            gray_700: "hsl(220deg 5% 40%)".to_string(),
            gray_900: "hsl(220deg 3% 20%)".to_string(),
            weight_medium: 500,
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: "hsl(340deg 75% 60%)".to_string(),
            secondary: "hsl(240deg 70% 72%)".to_string(),
            white: "hsl(0deg 0% 100%)".to_string(),
            gray_700: "hsl(220deg 5% 70%)".to_string(),
            gray_900: "hsl(220deg 10% 92%)".to_string(),
            weight_medium: 500,
        }
    }

    /// Banner background for a variant; `None` when the variant has no banner.
    pub fn banner_color(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::OnSale => Some(self.primary.as_str()),
            Variant::NewRelease => Some(self.secondary.as_str()),
            Variant::Default => None,
        }
    }

    pub fn banner_style(&self, variant: Variant) -> Option<String> {
        self.banner_color(variant).map(|background| {
            format!(
                "position: absolute; top: 12px; right: -4px; background-color: {background}; \
                 padding: 9px; color: {}; font-weight: {}; border-radius: 2px",
                self.white, self.weight_medium
            )
        })
    }

    pub fn name_style(&self) -> String {
        format!("font-weight: {}; color: {}", self.weight_medium, self.gray_900)
    }

    pub fn price_style(&self, struck: bool) -> String {
        if struck {
            format!("font-weight: {}; text-decoration: line-through", self.weight_medium)
        } else {
            format!("font-weight: {}", self.weight_medium)
        }
    }

    pub fn sale_price_style(&self) -> String {
        format!(
            "font-weight: {}; color: {}; position: absolute; right: 0; top: 26px",
            self.weight_medium, self.primary
        )
    }

    pub fn color_info_style(&self) -> String {
        format!("color: {}", self.gray_700)
    }
}

/// Named themes selectable from configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Default,
    Dark,
}

impl ThemeName {
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Default => Theme::default(),
            ThemeName::Dark => Theme::dark(),
        }
    }
}

impl core::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "light" => Ok(ThemeName::Default),
            "dark" => Ok(ThemeName::Dark),
            other => Err(format!("unknown theme {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_has_no_banner_style() {
        let theme = Theme::default();
        assert!(theme.banner_style(Variant::Default).is_none());
        assert!(theme.banner_style(Variant::OnSale).unwrap().contains(&theme.primary));
        assert!(theme.banner_style(Variant::NewRelease).unwrap().contains(&theme.secondary));
    }

    #[test]
    fn theme_names_parse() {
        assert_eq!("dark".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert_eq!(" Default ".parse::<ThemeName>().unwrap(), ThemeName::Default);
        assert!("neon".parse::<ThemeName>().is_err());
    }
}
