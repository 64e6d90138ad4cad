//! Styles for the single-screen UI - light theme with a red accent

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// --- Palette ---

pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149); // Primary actions
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // Hover state
pub const RED_50: Color = Color::from_rgb(0.996, 0.949, 0.949); // Page background

pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // Primary text
pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // Secondary text
pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // Hints
pub const GRAY_400: Color = Color::from_rgb(0.616, 0.639, 0.667); // Placeholder
pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // Borders
pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // Row background

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

pub const ACCENT: Color = RED_600;
pub const DANGER: Color = RED_600;

// --- Container Styles ---

pub struct PageContainer;

impl container::StyleSheet for PageContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(RED_50)),
            ..Default::default()
        }
    }
}

pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(WHITE)),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 20.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.863, 0.149, 0.149, 0.12),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 20.0,
            },
        }
    }
}

pub struct SourceRowContainer;

impl container::StyleSheet for SourceRowContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(GRAY_100)),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(RED_600)),
            text_color: WHITE,
            border: Border {
                radius: 14.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.863, 0.149, 0.149, 0.3),
                offset: Vector::new(0.0, 3.0),
                blur_radius: 10.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(RED_500)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(GRAY_400)),
            shadow: Shadow::default(),
            ..self.active(style)
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(WHITE)),
            text_color: RED_600,
            border: Border {
                radius: 12.0.into(),
                color: RED_600,
                width: 1.0,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(RED_50)),
            ..self.active(style)
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: GRAY_600,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: GRAY_800,
            background: Some(Background::Color(GRAY_200)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

/// URL field. `has_error` switches the border to the danger color.
pub struct UrlInputStyle {
    pub has_error: bool,
}

impl text_input::StyleSheet for UrlInputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                radius: 14.0.into(),
                width: 2.0,
                color: if self.has_error { DANGER } else { GRAY_200 },
            },
            icon_color: GRAY_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        if self.has_error {
            return active;
        }
        text_input::Appearance {
            border: Border {
                color: RED_500,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_800
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.937, 0.267, 0.267, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(GRAY_100),
            ..self.active(style)
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.863, 0.149, 0.149, 0.3),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        _is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        self.active(style)
    }
}
