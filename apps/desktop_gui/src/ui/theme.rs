//! Light palette for the admin console: grey page background, white cards,
//! indigo accent.

use egui::Color32;
use shared::domain::OrderStatus;

pub const PAGE_BG: Color32 = Color32::from_rgb(249, 250, 251);
pub const CARD_BG: Color32 = Color32::WHITE;
pub const CARD_STROKE: Color32 = Color32::from_rgb(229, 231, 235);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(31, 41, 55);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(238, 242, 255);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(239, 68, 68);

/// Series colors for the distribution breakdown, in slice order.
pub const SERIES: [Color32; 4] = [
    Color32::from_rgb(0, 136, 254),
    Color32::from_rgb(0, 196, 159),
    Color32::from_rgb(255, 187, 40),
    Color32::from_rgb(255, 128, 66),
];

pub const PRODUCED_LINE: Color32 = Color32::from_rgb(136, 132, 216);
pub const WASTAGE_LINE: Color32 = Color32::from_rgb(255, 115, 0);

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_BG)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
}

/// Badge fill and text colors per order status, matching the table legend.
pub fn status_badge_colors(status: OrderStatus) -> (Color32, Color32) {
    match status {
        OrderStatus::Processing => (
            Color32::from_rgb(219, 234, 254),
            Color32::from_rgb(30, 64, 175),
        ),
        OrderStatus::Shipped => (
            Color32::from_rgb(254, 249, 195),
            Color32::from_rgb(133, 77, 14),
        ),
        OrderStatus::Delivered => (
            Color32::from_rgb(220, 252, 231),
            Color32::from_rgb(22, 101, 52),
        ),
        OrderStatus::Cancelled => (
            Color32::from_rgb(254, 226, 226),
            Color32::from_rgb(153, 27, 27),
        ),
        OrderStatus::Refunded => (
            Color32::from_rgb(243, 244, 246),
            Color32::from_rgb(31, 41, 55),
        ),
    }
}

/// Green for gains, red for losses, muted otherwise.
pub fn change_color(change: &str) -> Color32 {
    if change.starts_with('+') {
        Color32::from_rgb(22, 163, 74)
    } else if change.starts_with('-') {
        Color32::from_rgb(220, 38, 38)
    } else {
        TEXT_MUTED
    }
}
