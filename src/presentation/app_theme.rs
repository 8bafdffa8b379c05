use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::user_settings::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.98, 0.98, 0.97),
                text: Color::from_rgb(0.13, 0.13, 0.13),
                primary: Color::from_rgb(0.16, 0.42, 0.75),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.886, 0.0, 0.0),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.09, 0.09, 0.1),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
    }
}

pub fn category_header_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.25))),
            text_color: palette.text,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.35))),
            text_color: palette.text,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.12))),
            text_color: palette.text,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

pub fn list_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.15))),
            text_color: palette.primary,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
        _ => button::Style {
            background: None,
            text_color: palette.text,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

pub fn popup_close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.3))),
            text_color: Color::from_rgb(0.15, 0.15, 0.15),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 9.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
        _ => button::Style {
            background: None,
            text_color: Color::from_rgb(0.4, 0.4, 0.4),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 9.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

pub fn popup_card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            color: Color::from_rgb(0.75, 0.75, 0.75),
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: iced::Vector::new(0.0, 3.0),
            blur_radius: 10.0,
        },
        text_color: Some(Color::from_rgb(0.13, 0.13, 0.13)),
        snap: false,
    }
}

pub fn sidebar_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 1.0,
            ..palette.background
        })),
        border: Border {
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.3),
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: Shadow::default(),
        text_color: None,
        snap: false,
    }
}

pub fn open_now_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().danger),
    }
}

pub fn placeholder_text_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color::from_rgb(0.55, 0.55, 0.55)),
    }
}

pub fn attribution_text_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color::from_rgb(0.35, 0.35, 0.35)),
    }
}

pub fn tile_placeholder_color(_theme: &Theme) -> Color {
    Color::from_rgb(0.85, 0.87, 0.85)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.98, 0.98, 0.97));
        assert_eq!(palette.danger, Color::from_rgb(0.886, 0.0, 0.0));
    }

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.09, 0.09, 0.1));
        assert_eq!(palette.text, Color::from_rgb(0.95, 0.95, 0.95));
    }

    #[test]
    fn test_open_now_badge_uses_the_danger_color() {
        let theme = get_theme(&ThemeMode::Light);

        let style = open_now_text_style(&theme);

        assert_eq!(style.color, Some(Color::from_rgb(0.886, 0.0, 0.0)));
    }

    #[test]
    fn test_list_item_style_highlights_on_hover() {
        let theme = get_theme(&ThemeMode::Light);

        let resting = list_item_style(&theme, button::Status::Active);
        let hovered = list_item_style(&theme, button::Status::Hovered);

        assert!(resting.background.is_none());
        assert!(hovered.background.is_some());
        assert_eq!(hovered.text_color, theme.palette().primary);
    }

    #[test]
    fn test_popup_card_has_rounded_border() {
        let theme = get_theme(&ThemeMode::Light);

        let style = popup_card_style(&theme);

        assert_eq!(style.border.radius, 8.0.into());
        assert!(style.background.is_some());
    }
}
