//! Aggregation of the order collection into headline numbers, plus the
//! providers that feed the dashboard and order-page stat cards.

use shared::domain::{Order, OrderStatus};

/// Counts derived from the full (unfiltered) order collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
    /// Cancelled and refunded orders. Counted toward `total` but toward no
    /// headline card.
    pub untracked: usize,
}

impl OrderStats {
    pub fn compute(orders: &[Order]) -> Self {
        let mut stats = OrderStats {
            total: orders.len(),
            ..OrderStats::default()
        };
        for order in orders {
            match order.status {
                OrderStatus::Processing => stats.processing += 1,
                OrderStatus::Shipped => stats.shipped += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Cancelled | OrderStatus::Refunded => stats.untracked += 1,
            }
        }
        stats
    }

    pub fn tracked(&self) -> usize {
        self.processing + self.shipped + self.delivered
    }
}

/// One headline card: a title, a formatted value, and optional trimmings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub unit: Option<String>,
    pub change: Option<String>,
}

impl MetricCard {
    pub fn new(title: &str, value: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            unit: None,
            change: None,
        }
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn change(mut self, change: &str) -> Self {
        self.change = Some(change.to_string());
        self
    }
}

/// Source of headline cards for a page. Pages render whatever their provider
/// hands them and hold no numbers of their own.
pub trait MetricsProvider {
    fn cards(&self) -> Vec<MetricCard>;
}

/// A labelled value in a monthly or categorical series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: i64,
}

impl SeriesPoint {
    fn new(label: &str, value: i64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Weekly units produced against units wasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductionPoint {
    pub week: u8,
    pub produced: i64,
    pub wastage: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Sales,
    Alert,
    Production,
    Dispatch,
    RawMaterial,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: String,
}

impl ActivityEntry {
    fn new(kind: ActivityKind, description: &str, timestamp: &str) -> Self {
        Self {
            kind,
            description: description.to_string(),
            timestamp: timestamp.to_string(),
        }
    }
}

/// Placeholder dashboard numbers. These stand in until the reporting
/// endpoints exist; the page itself never hard-codes a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureMetrics;

impl MetricsProvider for FixtureMetrics {
    fn cards(&self) -> Vec<MetricCard> {
        vec![
            MetricCard::new("Raw Material Stock", "12,450")
                .unit("units")
                .change("+5.2%"),
            MetricCard::new("Finished Goods", "8,720")
                .unit("units")
                .change("-1.8%"),
            MetricCard::new("Monthly Sales", "₹4,50,000").change("+12.5%"),
            MetricCard::new("Active Production", "78")
                .unit("Orders")
                .change("+3"),
        ]
    }
}

impl FixtureMetrics {
    pub fn monthly_sales(&self) -> Vec<SeriesPoint> {
        vec![
            SeriesPoint::new("Jan", 40_000),
            SeriesPoint::new("Feb", 30_000),
            SeriesPoint::new("Mar", 55_000),
            SeriesPoint::new("Apr", 48_000),
            SeriesPoint::new("May", 62_000),
            SeriesPoint::new("Jun", 58_000),
        ]
    }

    pub fn stock_distribution(&self) -> Vec<SeriesPoint> {
        vec![
            SeriesPoint::new("Fabric Rolls", 400),
            SeriesPoint::new("Filling Material", 300),
            SeriesPoint::new("Accessories", 300),
            SeriesPoint::new("Packaging", 200),
        ]
    }

    pub fn weekly_production(&self) -> Vec<ProductionPoint> {
        vec![
            ProductionPoint {
                week: 1,
                produced: 400,
                wastage: 24,
            },
            ProductionPoint {
                week: 2,
                produced: 300,
                wastage: 13,
            },
            ProductionPoint {
                week: 3,
                produced: 450,
                wastage: 31,
            },
            ProductionPoint {
                week: 4,
                produced: 380,
                wastage: 20,
            },
        ]
    }

    pub fn recent_activity(&self) -> Vec<ActivityEntry> {
        vec![
            ActivityEntry::new(
                ActivityKind::Sales,
                "New Sales Order #SO-1024 created",
                "2 hours ago",
            ),
            ActivityEntry::new(
                ActivityKind::Alert,
                "Low stock alert for \"White Cotton Fabric\"",
                "5 hours ago",
            ),
            ActivityEntry::new(
                ActivityKind::Production,
                "Production Order #PO-512 completed",
                "1 day ago",
            ),
            ActivityEntry::new(
                ActivityKind::Dispatch,
                "Dispatched Order #DO-887",
                "2 days ago",
            ),
            ActivityEntry::new(
                ActivityKind::RawMaterial,
                "Received new batch of polyfill from Supplier XYZ",
                "3 days ago",
            ),
        ]
    }
}

/// Live headline cards for the order page, derived from the fetched
/// collection.
#[derive(Debug, Clone, Copy)]
pub struct ComputedOrderMetrics {
    stats: OrderStats,
}

impl ComputedOrderMetrics {
    pub fn new(orders: &[Order]) -> Self {
        Self {
            stats: OrderStats::compute(orders),
        }
    }

    pub fn stats(&self) -> OrderStats {
        self.stats
    }
}

impl MetricsProvider for ComputedOrderMetrics {
    fn cards(&self) -> Vec<MetricCard> {
        vec![
            MetricCard::new("Total Orders", self.stats.total.to_string()),
            MetricCard::new("Processing", self.stats.processing.to_string()),
            MetricCard::new("Shipped", self.stats.shipped.to_string()),
            MetricCard::new("Delivered", self.stats.delivered.to_string()),
        ]
    }
}
