//! Themed widget styles

use crate::theme::AppTheme;
use iced::widget::{button, container, pick_list};
use iced::{Border, Color, Shadow, Vector};

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

/// One country in the list
pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

pub fn section_header_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.04,
                ..theme.fg_primary
            }
            .into(),
        ),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill behind the continent name, tinted with the continent color
pub fn badge_container(theme: &AppTheme, tint: Color) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.18, ..tint }.into()),
        text_color: Some(if theme.is_light() {
            theme.fg_primary
        } else {
            tint
        }),
        border: Border {
            color: Color { a: 0.5, ..tint },
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

/// Banner for load/save problems
pub fn status_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.12, ..theme.warning }.into()),
        text_color: Some(theme.fg_primary),
        border: Border {
            color: theme.warning,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

fn scale(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        ..color
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.accent.into()),
        text_color: theme.fg_on_accent,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.accent_hover.into()),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(scale(theme.accent, 0.95).into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Color { a: 0.5, ..theme.accent }.into()),
            text_color: Color {
                a: 0.5,
                ..theme.fg_on_accent
            },
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn themed_pick_list(theme: &AppTheme, status: pick_list::Status) -> pick_list::Style {
    let base = pick_list::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        handle_color: theme.fg_secondary,
        placeholder_color: theme.fg_muted,
        text_color: theme.fg_primary,
    };

    match status {
        pick_list::Status::Active => base,
        pick_list::Status::Hovered => pick_list::Style {
            background: theme.bg_hover.into(),
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            handle_color: theme.fg_primary,
            ..base
        },
        pick_list::Status::Opened { .. } => pick_list::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                radius: 4.0.into(),
            },
            handle_color: theme.accent,
            ..base
        },
    }
}

/// Pick list menu styling (the dropdown menu itself)
pub fn themed_pick_list_menu(theme: &AppTheme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border_strong,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        text_color: theme.fg_primary,
        selected_background: theme.bg_hover.into(),
        selected_text_color: theme.fg_primary,
    }
}
