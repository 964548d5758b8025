//! Page bodies rendered inside the central panel.

pub mod dashboard;
pub mod orders;

use client_core::MetricCard;
use eframe::egui;

use crate::controller::navigation::Route;
use crate::ui::{theme, AdminConsoleApp};

/// Shared page header: title, subtitle, and the sidebar toggle. Mobile shows
/// a hamburger on the left; desktop shows a collapse chevron on the right.
pub(crate) fn page_header(
    app: &mut AdminConsoleApp,
    ui: &mut egui::Ui,
    title: &str,
    subtitle: &str,
    is_desktop: bool,
) {
    ui.horizontal(|ui| {
        if !is_desktop && ui.button(egui::RichText::new("☰").size(18.0)).clicked() {
            app.sidebar.toggle();
        }
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(title)
                    .strong()
                    .size(26.0)
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(egui::RichText::new(subtitle).color(theme::TEXT_MUTED));
        });
        if is_desktop {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let chevron = if app.sidebar.is_open { "⏴" } else { "⏵" };
                if ui.button(chevron).clicked() {
                    app.sidebar.toggle();
                }
            });
        }
    });
    ui.add_space(16.0);
}

pub(crate) fn stat_cards_row(ui: &mut egui::Ui, cards: &[MetricCard]) {
    ui.horizontal_wrapped(|ui| {
        for card in cards {
            theme::card_frame().show(ui, |ui| {
                ui.set_min_width(200.0);
                ui.label(
                    egui::RichText::new(&card.title)
                        .strong()
                        .color(theme::TEXT_MUTED),
                );
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&card.value)
                            .strong()
                            .size(28.0)
                            .color(theme::TEXT_PRIMARY),
                    );
                    if let Some(unit) = &card.unit {
                        ui.label(egui::RichText::new(unit).color(theme::TEXT_MUTED));
                    }
                });
                if let Some(change) = &card.change {
                    ui.label(
                        egui::RichText::new(change)
                            .small()
                            .color(theme::change_color(change)),
                    );
                }
            });
        }
    });
    ui.add_space(20.0);
}

/// Stand-in body for sections that only exist in the menu so far.
pub(crate) fn placeholder(
    app: &mut AdminConsoleApp,
    ui: &mut egui::Ui,
    route: Route,
    is_desktop: bool,
) {
    page_header(
        app,
        ui,
        route.title(),
        "This section is under construction.",
        is_desktop,
    );
    theme::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new(format!("{} is coming soon.", route.title()))
                .color(theme::TEXT_MUTED),
        );
    });
}
