use std::time::Duration;

use client_core::{FetchState, StatusFilter};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Order;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::layout::ResponsiveLayout;
use crate::controller::navigation::{MenuEntry, Route, SidebarState, MAIN_MENU};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{pages, theme};

pub struct AdminConsoleApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    pub(crate) route: Route,
    pub(crate) sidebar: SidebarState,
    layout: ResponsiveLayout,

    pub(crate) orders: FetchState<Vec<Order>>,
    pub(crate) search_term: String,
    pub(crate) status_filter: StatusFilter,
    fetch_generation: u64,

    status: String,
}

impl AdminConsoleApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            route: Route::Dashboard,
            sidebar: SidebarState::default(),
            layout: ResponsiveLayout::new(),
            orders: FetchState::Idle,
            search_term: String::new(),
            status_filter: StatusFilter::All,
            fetch_generation: 0,
            status: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::OrdersLoaded { generation, orders } => {
                    if generation == self.fetch_generation
                        && self.route == Route::OrderManagement
                    {
                        self.orders = FetchState::Success(orders);
                    } else {
                        tracing::debug!(generation, "discarding stale order fetch result");
                    }
                }
                UiEvent::OrdersFetchFailed {
                    generation,
                    message,
                } => {
                    if generation == self.fetch_generation
                        && self.route == Route::OrderManagement
                    {
                        self.orders = FetchState::Failure(message);
                    } else {
                        tracing::debug!(generation, "discarding stale order fetch failure");
                    }
                }
                UiEvent::BackendUnavailable(message) => {
                    self.status = message;
                }
            }
        }
    }

    pub(crate) fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        let leaving_orders = self.route == Route::OrderManagement;
        self.route = route;
        if route == Route::OrderManagement {
            self.activate_order_page();
        } else if leaving_orders {
            self.teardown_order_page();
        }
    }

    /// Entering the order page starts a fresh fetch with cleared filters;
    /// every activation gets its own generation.
    fn activate_order_page(&mut self) {
        self.fetch_generation += 1;
        self.orders = FetchState::Loading;
        self.search_term.clear();
        self.status_filter = StatusFilter::All;
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchOrders {
                generation: self.fetch_generation,
            },
            &mut self.status,
        );
    }

    /// Leaving the order page invalidates any in-flight fetch.
    fn teardown_order_page(&mut self) {
        self.fetch_generation += 1;
        self.orders = FetchState::Idle;
        self.search_term.clear();
        self.status_filter = StatusFilter::All;
    }

    fn show_sidebar(&mut self, ui: &mut egui::Ui, is_desktop: bool) {
        let expanded = !is_desktop || self.sidebar.is_open;
        let mut clicked_route: Option<Route> = None;
        let mut toggled_group: Option<&'static str> = None;

        egui::TopBottomPanel::bottom("sidebar_settings_strip")
            .frame(
                egui::Frame::NONE
                    .fill(theme::CARD_BG)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show_inside(ui, |ui| {
                let label = if expanded { "⚙  Settings" } else { "⚙" };
                if ui
                    .selectable_label(self.route == Route::Settings, label)
                    .clicked()
                {
                    clicked_route = Some(Route::Settings);
                }
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::CARD_BG)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show_inside(ui, |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("🛏").size(26.0).color(theme::ACCENT));
                    if expanded {
                        ui.label(
                            egui::RichText::new("Bedquest")
                                .strong()
                                .size(20.0)
                                .color(theme::TEXT_PRIMARY),
                        );
                    }
                });
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(6.0);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for entry in MAIN_MENU {
                            match entry {
                                MenuEntry::Page { name, icon, route } => {
                                    let selected = self.route == *route;
                                    let text = if expanded {
                                        format!("{icon}  {name}")
                                    } else {
                                        (*icon).to_string()
                                    };
                                    if ui.selectable_label(selected, text).clicked() {
                                        clicked_route = Some(*route);
                                    }
                                }
                                MenuEntry::Group { name, icon, items } => {
                                    let open = self.sidebar.open_submenu() == Some(*name);
                                    let text = if expanded {
                                        let chevron = if open { "⏶" } else { "⏷" };
                                        format!("{icon}  {name}  {chevron}")
                                    } else {
                                        (*icon).to_string()
                                    };
                                    if ui.selectable_label(false, text).clicked() {
                                        toggled_group = Some(*name);
                                    }
                                    if open && expanded {
                                        ui.indent(*name, |ui| {
                                            for item in *items {
                                                let selected = self.route == item.route;
                                                if ui
                                                    .selectable_label(selected, item.name)
                                                    .clicked()
                                                {
                                                    clicked_route = Some(item.route);
                                                }
                                            }
                                        });
                                    }
                                }
                            }
                            ui.add_space(2.0);
                        }
                    });
            });

        if let Some(name) = toggled_group {
            self.sidebar.toggle_submenu(name);
        }
        if let Some(route) = clicked_route {
            self.navigate(route);
            if !is_desktop {
                self.sidebar.is_open = false;
            }
        }
    }

    /// Mobile drawer: a dimmed click-to-close scrim with the sidebar drawn
    /// over it at full expanded width.
    fn show_sidebar_overlay(&mut self, ctx: &egui::Context) {
        let screen = ctx.available_rect();

        let scrim_clicked = egui::Area::new(egui::Id::new("sidebar_scrim"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(screen, egui::Sense::click());
                ui.painter().rect_filled(
                    screen,
                    egui::CornerRadius::ZERO,
                    egui::Color32::from_black_alpha(128),
                );
                response.clicked()
            })
            .inner;

        egui::Area::new(egui::Id::new("sidebar_drawer"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                egui::Frame::NONE.fill(theme::CARD_BG).show(ui, |ui| {
                    ui.set_width(280.0);
                    ui.set_min_height(screen.height());
                    self.show_sidebar(ui, false);
                });
            });

        if scrim_clicked {
            self.sidebar.is_open = false;
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        if self.status.is_empty() {
            return;
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).color(theme::ERROR_TEXT));
        });
    }
}

impl eframe::App for AdminConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let is_desktop = self
            .layout
            .observe(ctx.available_rect().width(), &mut self.sidebar);

        self.show_status_bar(ctx);

        if is_desktop {
            let width = if self.sidebar.is_open { 280.0 } else { 80.0 };
            egui::SidePanel::left("sidebar")
                .resizable(false)
                .exact_width(width)
                .frame(egui::Frame::NONE.fill(theme::CARD_BG))
                .show(ctx, |ui| self.show_sidebar(ui, true));
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::PAGE_BG)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.route {
                        Route::Dashboard => pages::dashboard::show(self, ui, is_desktop),
                        Route::OrderManagement => pages::orders::show(self, ui, is_desktop),
                        other => pages::placeholder(self, ui, other, is_desktop),
                    });
            });

        if !is_desktop && self.sidebar.is_open {
            self.show_sidebar_overlay(ctx);
        }

        // Keep polling the event queue even while the user is idle.
        if self.orders.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use crossbeam_channel::bounded;
    use rust_decimal::Decimal;
    use shared::domain::{OrderId, OrderStatus};

    use super::*;

    fn harness() -> (
        AdminConsoleApp,
        Receiver<BackendCommand>,
        Sender<UiEvent>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        (AdminConsoleApp::new(cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    fn order(id: i64) -> Order {
        Order {
            id: OrderId(id),
            marketplace_order_id: format!("SO-{id}"),
            customer_name: "Asha Verma".to_string(),
            order_date: Utc.with_ymd_and_hms(2024, 5, 14, 10, 30, 0).unwrap(),
            total_amount: Decimal::new(249_900, 2),
            marketplace: "Amazon".to_string(),
            status: OrderStatus::Processing,
        }
    }

    #[test]
    fn entering_the_order_page_starts_a_fetch() {
        let (mut app, cmd_rx, _ui_tx) = harness();

        app.navigate(Route::OrderManagement);

        assert!(app.orders.is_loading());
        assert_eq!(
            cmd_rx.try_recv().expect("fetch queued"),
            BackendCommand::FetchOrders { generation: 1 }
        );
    }

    #[test]
    fn current_generation_results_land() {
        let (mut app, _cmd_rx, ui_tx) = harness();
        app.navigate(Route::OrderManagement);

        ui_tx
            .send(UiEvent::OrdersLoaded {
                generation: 1,
                orders: vec![order(1)],
            })
            .expect("send");
        app.process_ui_events();

        assert_eq!(app.orders.data().map(Vec::len), Some(1));
    }

    #[test]
    fn results_from_an_abandoned_fetch_are_discarded() {
        let (mut app, _cmd_rx, ui_tx) = harness();
        app.navigate(Route::OrderManagement);
        app.navigate(Route::Dashboard);

        ui_tx
            .send(UiEvent::OrdersLoaded {
                generation: 1,
                orders: vec![order(1)],
            })
            .expect("send");
        app.process_ui_events();

        assert_eq!(app.orders, FetchState::Idle);
    }

    #[test]
    fn re_entering_resets_filters_and_refetches() {
        let (mut app, cmd_rx, _ui_tx) = harness();
        app.navigate(Route::OrderManagement);
        app.search_term = "asha".to_string();
        app.status_filter = StatusFilter::Only(OrderStatus::Shipped);

        app.navigate(Route::Dashboard);
        app.navigate(Route::OrderManagement);

        assert!(app.search_term.is_empty());
        assert_eq!(app.status_filter, StatusFilter::All);
        assert!(app.orders.is_loading());

        let generations: Vec<u64> = cmd_rx
            .try_iter()
            .map(|cmd| match cmd {
                BackendCommand::FetchOrders { generation } => generation,
            })
            .collect();
        assert_eq!(generations, vec![1, 3]);
    }

    #[test]
    fn fetch_failure_is_terminal_for_that_activation() {
        let (mut app, _cmd_rx, ui_tx) = harness();
        app.navigate(Route::OrderManagement);

        ui_tx
            .send(UiEvent::OrdersFetchFailed {
                generation: 1,
                message: "DB down".to_string(),
            })
            .expect("send");
        app.process_ui_events();

        assert_eq!(app.orders, FetchState::Failure("DB down".to_string()));
    }

    #[test]
    fn navigating_to_the_current_route_does_not_refetch() {
        let (mut app, cmd_rx, _ui_tx) = harness();
        app.navigate(Route::OrderManagement);
        let _ = cmd_rx.try_recv();

        app.navigate(Route::OrderManagement);

        assert!(cmd_rx.try_recv().is_err());
    }
}
