//! Pure, synchronous filtering of the order collection. Recomputed on every
//! keystroke or selection change; no debouncing.

use shared::domain::{Order, OrderStatus};

/// Status predicate for the order table. `All` is the sentinel that matches
/// every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

/// Derives the visible subset of `orders`.
///
/// The search term is matched case-insensitively as a substring of either the
/// customer name or the marketplace order code; an empty term matches
/// everything. Both predicates are ANDed and the relative order of the input
/// is preserved.
pub fn filter_orders(orders: &[Order], search_term: &str, status: StatusFilter) -> Vec<Order> {
    let needle = search_term.to_lowercase();
    orders
        .iter()
        .filter(|order| {
            let matches_search = needle.is_empty()
                || order.customer_name.to_lowercase().contains(&needle)
                || order.marketplace_order_id.to_lowercase().contains(&needle);
            matches_search && status.matches(order.status)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use shared::domain::{Order, OrderId, OrderStatus};

    use super::{filter_orders, StatusFilter};

    fn order(id: i64, code: &str, name: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId(id),
            marketplace_order_id: code.to_string(),
            customer_name: name.to_string(),
            order_date: Utc.with_ymd_and_hms(2024, 5, 14, 10, 30, 0).unwrap(),
            total_amount: Decimal::new(249_900, 2),
            marketplace: "Amazon".to_string(),
            status,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order(1, "SO-1024", "Asha Verma", OrderStatus::Processing),
            order(2, "SO-2048", "Rohit Malhotra", OrderStatus::Shipped),
            order(3, "DO-887", "asha patel", OrderStatus::Delivered),
            order(4, "SO-3072", "Meera Iyer", OrderStatus::Cancelled),
        ]
    }

    #[test]
    fn empty_term_and_all_statuses_is_identity() {
        let orders = sample();
        assert_eq!(filter_orders(&orders, "", StatusFilter::All), orders);
    }

    #[test]
    fn term_matches_order_code_prefix_only_where_present() {
        let orders = sample();
        let visible = filter_orders(&orders, "SO-10", StatusFilter::All);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].marketplace_order_id, "SO-1024");
    }

    #[test]
    fn term_matches_customer_name_case_insensitively() {
        let orders = sample();
        let visible = filter_orders(&orders, "ASHA", StatusFilter::All);
        let codes: Vec<_> = visible
            .iter()
            .map(|o| o.marketplace_order_id.as_str())
            .collect();
        assert_eq!(codes, vec!["SO-1024", "DO-887"]);
    }

    #[test]
    fn predicates_are_anded() {
        let orders = sample();
        let visible = filter_orders(&orders, "asha", StatusFilter::Only(OrderStatus::Delivered));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, OrderId(3));
    }

    #[test]
    fn status_filter_alone_keeps_relative_order() {
        let mut orders = sample();
        orders.push(order(5, "SO-4096", "Kiran Rao", OrderStatus::Shipped));
        let visible = filter_orders(&orders, "", StatusFilter::Only(OrderStatus::Shipped));
        let ids: Vec<_> = visible.iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn every_match_satisfies_both_predicates() {
        let orders = sample();
        for term in ["so", "a", "887", "zzz"] {
            for status in [StatusFilter::All, StatusFilter::Only(OrderStatus::Shipped)] {
                for hit in filter_orders(&orders, term, status) {
                    let lower_term = term.to_lowercase();
                    assert!(
                        hit.customer_name.to_lowercase().contains(&lower_term)
                            || hit
                                .marketplace_order_id
                                .to_lowercase()
                                .contains(&lower_term)
                    );
                    assert!(status.matches(hit.status));
                }
            }
        }
    }
}
