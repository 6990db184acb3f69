//! Window layout: title, sort/filter pickers and the country cards

use crate::app::helpers::{compact_population, format_population};
use crate::app::ui_components::{
    badge_container, card_container, main_container, primary_button, section_header_container,
    status_container, themed_pick_list, themed_pick_list_menu,
};
use crate::app::{DataSource, Message, State};
use crate::core::country::Country;
use crate::core::modes::SortMode;
use crate::theme::ThemeChoice;
use iced::widget::{
    button, column, container, keyed_column, pick_list, row, scrollable, text,
};
use iced::{Alignment, Element, Font, Length, font};
use strum::IntoEnumIterator;

const TITLE: &str = "World's Largest Countries by Population";

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let header = row![
        text(TITLE).size(26).font(BOLD).color(theme.fg_primary),
        container(row![]).width(Length::Fill),
        pick_list(
            ThemeChoice::iter().collect::<Vec<_>>(),
            Some(state.config.theme_choice),
            Message::ThemeChanged
        )
        .padding(6)
        .style(move |_, status| themed_pick_list(theme, status))
        .menu_style(move |_| themed_pick_list_menu(theme)),
    ]
    .align_y(Alignment::Center);

    let content = column![header, view_controls(state), view_summary(state)]
        .push(view_country_list(state))
        .spacing(16)
        .padding(24);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme))
        .into()
}

fn labeled<'a>(
    state: &'a State,
    label: &'a str,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let theme = &state.theme;
    row![
        container(text(label).size(12).color(theme.fg_muted))
            .padding([2, 6])
            .style(move |_| section_header_container(theme)),
        control.into(),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn view_controls(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let sort_picker = pick_list(
        SortMode::OPTIONS,
        SortMode::OPTIONS
            .iter()
            .copied()
            .find(|mode| *mode == state.sort_mode),
        Message::SortChanged,
    )
    .width(Length::Fixed(180.0))
    .padding(8)
    .style(move |_, status| themed_pick_list(theme, status))
    .menu_style(move |_| themed_pick_list_menu(theme));

    let filter_picker = pick_list(
        state.filter_options.as_slice(),
        state.selected_filter_option(),
        Message::FilterChanged,
    )
    .placeholder("Custom filter")
    .width(Length::Fixed(300.0))
    .padding(8)
    .style(move |_, status| themed_pick_list(theme, status))
    .menu_style(move |_| themed_pick_list_menu(theme));

    let mut controls = row![
        labeled(state, "Sort by:", sort_picker),
        labeled(state, "Filters:", filter_picker),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    if state.sort_mode == SortMode::Shuffled {
        controls = controls.push(
            button(text("Shuffle again").size(13))
                .on_press(Message::Reshuffle)
                .padding([6, 14])
                .style(move |_, status| primary_button(theme, status)),
        );
    }

    controls.into()
}

fn view_summary(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let source = match &state.data_source {
        DataSource::Embedded => "built-in list".to_string(),
        DataSource::File(path) => path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
    };

    let summary = text(format!(
        "Showing {} of {} countries ({source})",
        state.visible.len(),
        state.countries.len()
    ))
    .size(13)
    .color(theme.fg_muted);

    match &state.status {
        Some(status) => column![
            summary,
            container(text(status).size(13))
                .padding([6, 10])
                .width(Length::Fill)
                .style(move |_| status_container(theme)),
        ]
        .spacing(8)
        .into(),
        None => summary.into(),
    }
}

fn view_country_list(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    if state.visible.is_empty() {
        return container(
            text("No countries match this filter")
                .size(16)
                .color(theme.fg_muted),
        )
        .center_x(Length::Fill)
        .padding(40)
        .into();
    }

    let cards = keyed_column(
        state
            .visible
            .iter()
            .enumerate()
            .map(|(index, country)| (country.id, view_country_card(state, index + 1, country))),
    )
    .spacing(8);

    scrollable(container(cards).padding([0, 12]))
        .height(Length::Fill)
        .into()
}

fn view_country_card<'a>(
    state: &'a State,
    rank: usize,
    country: &'a Country,
) -> Element<'a, Message> {
    let theme = &state.theme;
    let tint = theme.continent_color(&country.continent);

    let body = row![
        text(format!("{rank:>3}"))
            .size(14)
            .font(Font::MONOSPACE)
            .color(theme.fg_muted),
        column![
            text(&country.name).size(18).font(BOLD),
            container(text(&country.continent).size(11))
                .padding([2, 8])
                .style(move |_| badge_container(theme, tint)),
        ]
        .spacing(4),
        container(row![]).width(Length::Fill),
        column![
            text(compact_population(country.population))
                .size(18)
                .color(theme.fg_primary),
            text(format_population(country.population))
                .size(11)
                .font(Font::MONOSPACE)
                .color(theme.fg_secondary),
        ]
        .align_x(Alignment::End)
        .spacing(2),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(body)
        .padding([12, 16])
        .width(Length::Fill)
        .style(move |_| card_container(theme))
        .into()
}
