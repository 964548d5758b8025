//! Dashboard page: headline cards, sales and production summaries, and the
//! recent-activity feed. All numbers come from the page's metrics provider.

use client_core::{ActivityKind, FixtureMetrics, MetricsProvider};
use eframe::egui;

use crate::ui::{pages, theme, AdminConsoleApp};

pub fn show(app: &mut AdminConsoleApp, ui: &mut egui::Ui, is_desktop: bool) {
    pages::page_header(
        app,
        ui,
        "Dashboard",
        "Welcome back, here an overview of your business.",
        is_desktop,
    );

    let metrics = FixtureMetrics;
    pages::stat_cards_row(ui, &metrics.cards());

    ui.horizontal_wrapped(|ui| {
        monthly_sales_card(ui, &metrics);
        stock_distribution_card(ui, &metrics);
    });
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        weekly_production_card(ui, &metrics);
        recent_activity_card(ui, &metrics);
    });
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .strong()
            .size(16.0)
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(8.0);
}

fn value_bar(ui: &mut egui::Ui, fraction: f32, color: egui::Color32) {
    let desired = egui::vec2(ui.available_width().min(220.0), 14.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(4), theme::ACCENT_SOFT);
    let mut fill = rect;
    fill.set_width(rect.width() * fraction.clamp(0.0, 1.0));
    ui.painter()
        .rect_filled(fill, egui::CornerRadius::same(4), color);
}

fn monthly_sales_card(ui: &mut egui::Ui, metrics: &FixtureMetrics) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_width(320.0);
        section_title(ui, "Monthly Sales Performance");

        let series = metrics.monthly_sales();
        let peak = series.iter().map(|p| p.value).max().unwrap_or(1).max(1);
        for point in &series {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&point.label)
                        .monospace()
                        .color(theme::TEXT_MUTED),
                );
                value_bar(ui, point.value as f32 / peak as f32, theme::ACCENT);
                ui.label(
                    egui::RichText::new(format!("₹{}k", point.value / 1000))
                        .small()
                        .color(theme::TEXT_MUTED),
                );
            });
        }
    });
}

fn stock_distribution_card(ui: &mut egui::Ui, metrics: &FixtureMetrics) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_width(260.0);
        section_title(ui, "Raw Material Distribution");

        let series = metrics.stock_distribution();
        let total: i64 = series.iter().map(|p| p.value).sum();
        for (index, point) in series.iter().enumerate() {
            let color = theme::SERIES[index % theme::SERIES.len()];
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("●").color(color));
                ui.label(egui::RichText::new(&point.label).color(theme::TEXT_PRIMARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let share = if total > 0 {
                        (point.value * 100) / total
                    } else {
                        0
                    };
                    ui.label(
                        egui::RichText::new(format!("{} ({share}%)", point.value))
                            .color(theme::TEXT_MUTED),
                    );
                });
            });
        }
    });
}

fn weekly_production_card(ui: &mut egui::Ui, metrics: &FixtureMetrics) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_width(320.0);
        section_title(ui, "Weekly Production vs Wastage");

        let series = metrics.weekly_production();
        let peak = series.iter().map(|p| p.produced).max().unwrap_or(1).max(1);
        for point in &series {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Week {}", point.week))
                        .monospace()
                        .color(theme::TEXT_MUTED),
                );
                ui.vertical(|ui| {
                    value_bar(ui, point.produced as f32 / peak as f32, theme::PRODUCED_LINE);
                    value_bar(ui, point.wastage as f32 / peak as f32, theme::WASTAGE_LINE);
                });
                ui.label(
                    egui::RichText::new(format!("{} / {}", point.produced, point.wastage))
                        .small()
                        .color(theme::TEXT_MUTED),
                );
            });
            ui.add_space(4.0);
        }
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("■").color(theme::PRODUCED_LINE));
            ui.label(egui::RichText::new("Units Produced").small().color(theme::TEXT_MUTED));
            ui.label(egui::RichText::new("■").color(theme::WASTAGE_LINE));
            ui.label(egui::RichText::new("Units Wasted").small().color(theme::TEXT_MUTED));
        });
    });
}

fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Sales => "🛒",
        ActivityKind::Alert => "⚠",
        ActivityKind::Production => "🏭",
        ActivityKind::Dispatch => "🚚",
        ActivityKind::RawMaterial => "📦",
    }
}

fn recent_activity_card(ui: &mut egui::Ui, metrics: &FixtureMetrics) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_width(320.0);
        section_title(ui, "Recent Activity");

        for activity in metrics.recent_activity() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(activity_icon(activity.kind)).size(18.0));
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&activity.description).color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(&activity.timestamp)
                            .small()
                            .color(theme::TEXT_MUTED),
                    );
                });
            });
            ui.add_space(6.0);
        }
    });
}
