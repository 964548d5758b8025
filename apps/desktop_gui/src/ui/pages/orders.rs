//! Order management page: live headline counts, search and status filter,
//! and the order table.

use client_core::{filter_orders, ComputedOrderMetrics, FetchState, MetricsProvider, StatusFilter};
use eframe::egui;
use shared::domain::{Order, OrderStatus};

use crate::ui::{pages, theme, AdminConsoleApp};

/// Statuses offered in the filter dropdown. Refunded orders can appear in the
/// table but are not a filter choice.
const FILTERABLE_STATUSES: [OrderStatus; 4] = [
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

pub fn show(app: &mut AdminConsoleApp, ui: &mut egui::Ui, is_desktop: bool) {
    pages::page_header(
        app,
        ui,
        "Order Management",
        "Search, filter, and manage all your orders.",
        is_desktop,
    );

    // Headline counts always reflect the full fetched collection, not the
    // filtered view.
    let all_orders: &[Order] = app.orders.data().map(Vec::as_slice).unwrap_or(&[]);
    pages::stat_cards_row(ui, &ComputedOrderMetrics::new(all_orders).cards());

    theme::card_frame().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut app.search_term)
                    .hint_text("Search by Order ID or Name...")
                    .desired_width(320.0),
            );
            egui::ComboBox::from_id_salt("order_status_filter")
                .selected_text(app.status_filter.label())
                .width(180.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut app.status_filter, StatusFilter::All, "All");
                    for status in FILTERABLE_STATUSES {
                        ui.selectable_value(
                            &mut app.status_filter,
                            StatusFilter::Only(status),
                            status.as_str(),
                        );
                    }
                });
        });
        ui.add_space(12.0);

        match &app.orders {
            FetchState::Idle | FetchState::Loading => {
                centered_note(ui, "Loading orders...", theme::TEXT_MUTED);
            }
            FetchState::Failure(message) => {
                centered_note(ui, &format!("Error: {message}"), theme::ERROR_TEXT);
            }
            FetchState::Success(orders) => {
                let visible = filter_orders(orders, &app.search_term, app.status_filter);
                if visible.is_empty() {
                    order_table_header(ui);
                    centered_note(ui, "No orders found.", theme::TEXT_MUTED);
                } else {
                    order_table(ui, &visible);
                }
            }
        }
    });
}

fn centered_note(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).color(color));
    });
    ui.add_space(24.0);
}

fn header_cell(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .strong()
            .color(theme::TEXT_MUTED),
    );
}

fn order_table_header(ui: &mut egui::Ui) {
    egui::Grid::new("orders_table_header")
        .num_columns(6)
        .spacing([24.0, 8.0])
        .show(ui, |ui| {
            for title in ["Order ID", "Customer", "Date", "Amount", "Source", "Status"] {
                header_cell(ui, title);
            }
            ui.end_row();
        });
    ui.separator();
}

fn order_table(ui: &mut egui::Ui, orders: &[Order]) {
    egui::Grid::new("orders_table")
        .num_columns(6)
        .striped(true)
        .spacing([24.0, 10.0])
        .show(ui, |ui| {
            for title in ["Order ID", "Customer", "Date", "Amount", "Source", "Status"] {
                header_cell(ui, title);
            }
            ui.end_row();

            for order in orders {
                ui.label(
                    egui::RichText::new(&order.marketplace_order_id)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(egui::RichText::new(&order.customer_name).color(theme::TEXT_MUTED));
                ui.label(
                    egui::RichText::new(order.order_date.format("%d/%m/%Y").to_string())
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format!("₹{}", order.total_amount.round_dp(2)))
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(egui::RichText::new(&order.marketplace).color(theme::TEXT_MUTED));
                status_badge(ui, order.status);
                ui.end_row();
            }
        });
}

fn status_badge(ui: &mut egui::Ui, status: OrderStatus) {
    let (fill, text) = theme::status_badge_colors(status);
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(status.as_str()).small().color(text));
        });
}
