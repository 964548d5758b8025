//! Sidebar menu tree and navigation state.
//!
//! The submenu accordion is a two-state machine: either no group is open, or
//! exactly one named group is. Opening a group closes whichever one was open
//! before, and collapsing the sidebar never loses which group was expanded.

/// Every page the sidebar can reach. Only the dashboard and order pages have
/// real content today; the rest render a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    OrderManagement,
    StockTracking,
    SupplierDetails,
    ProductionOrders,
    BillOfMaterials,
    Suppliers,
    Settings,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::OrderManagement => "/ordermanagement",
            Route::StockTracking => "/materials/stock",
            Route::SupplierDetails => "/materials/suppliers",
            Route::ProductionOrders => "/production/orders",
            Route::BillOfMaterials => "/production/bom",
            Route::Suppliers => "/suppliers",
            Route::Settings => "/settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::OrderManagement => "Order Management",
            Route::StockTracking => "Stock Tracking",
            Route::SupplierDetails => "Supplier Details",
            Route::ProductionOrders => "Production Orders",
            Route::BillOfMaterials => "Bill of Materials",
            Route::Suppliers => "Suppliers",
            Route::Settings => "Settings",
        }
    }
}

pub struct SubItem {
    pub name: &'static str,
    pub route: Route,
}

pub enum MenuEntry {
    Page {
        name: &'static str,
        icon: &'static str,
        route: Route,
    },
    Group {
        name: &'static str,
        icon: &'static str,
        items: &'static [SubItem],
    },
}

/// Main navigation, top to bottom. Settings lives in its own strip at the
/// bottom of the sidebar, outside this list.
pub const MAIN_MENU: &[MenuEntry] = &[
    MenuEntry::Page {
        name: "Dashboard",
        icon: "📊",
        route: Route::Dashboard,
    },
    MenuEntry::Page {
        name: "Order Management",
        icon: "🛒",
        route: Route::OrderManagement,
    },
    MenuEntry::Group {
        name: "Raw Materials",
        icon: "📦",
        items: &[
            SubItem {
                name: "Stock Tracking",
                route: Route::StockTracking,
            },
            SubItem {
                name: "Supplier Details",
                route: Route::SupplierDetails,
            },
        ],
    },
    MenuEntry::Group {
        name: "Production",
        icon: "🏭",
        items: &[
            SubItem {
                name: "Production Orders",
                route: Route::ProductionOrders,
            },
            SubItem {
                name: "Bill of Materials",
                route: Route::BillOfMaterials,
            },
        ],
    },
    MenuEntry::Page {
        name: "Suppliers",
        icon: "🏢",
        route: Route::Suppliers,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmenuState {
    #[default]
    Closed,
    Open(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    pub is_open: bool,
    pub submenu: SubmenuState,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            is_open: true,
            submenu: SubmenuState::Closed,
        }
    }
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Accordion toggle: clicking the open group closes it, clicking any
    /// other group switches to it.
    pub fn toggle_submenu(&mut self, name: &'static str) {
        self.submenu = match self.submenu {
            SubmenuState::Open(current) if current == name => SubmenuState::Closed,
            _ => SubmenuState::Open(name),
        };
    }

    pub fn open_submenu(&self) -> Option<&'static str> {
        match self.submenu {
            SubmenuState::Closed => None,
            SubmenuState::Open(name) => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_group_is_open() {
        let mut sidebar = SidebarState::default();
        assert_eq!(sidebar.open_submenu(), None);

        sidebar.toggle_submenu("Raw Materials");
        assert_eq!(sidebar.open_submenu(), Some("Raw Materials"));

        sidebar.toggle_submenu("Production");
        assert_eq!(sidebar.open_submenu(), Some("Production"));
    }

    #[test]
    fn toggling_the_open_group_closes_it() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle_submenu("Production");
        sidebar.toggle_submenu("Production");
        assert_eq!(sidebar.open_submenu(), None);
    }

    #[test]
    fn collapsing_the_sidebar_keeps_the_open_group() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle_submenu("Raw Materials");

        sidebar.toggle();
        assert!(!sidebar.is_open);
        assert_eq!(sidebar.open_submenu(), Some("Raw Materials"));

        sidebar.toggle();
        assert_eq!(sidebar.open_submenu(), Some("Raw Materials"));
    }

    #[test]
    fn menu_routes_have_stable_paths() {
        assert_eq!(Route::Dashboard.path(), "/");
        assert_eq!(Route::OrderManagement.path(), "/ordermanagement");
        assert_eq!(Route::Settings.path(), "/settings");
    }
}
