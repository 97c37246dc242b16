use bazaar_core::snapshot::Metric;
use bazaar_core::{AlertId, AlertKind, DashboardSnapshot, Order, OrderId, OrderStatus, RouteDescriptor, RouteRegistry};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::alerts::AlertPresenter;
use crate::domain::{AppState, DashboardState};
use crate::orders::OrderStore;
use crate::ports::SelectionRepo;

/// `₦1,234,567.89`. Negative amounts get a leading `-`.
pub fn format_naira(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{}{grouped}.{frac:02}", bazaar_config::CURRENCY_SYMBOL)
}

/// `Jan 5, 2024`. Input that is not a recognisable date comes back unchanged.
pub fn format_short_date(raw: &str) -> String {
    const OUT: &str = "%b %-d, %Y";
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.format(OUT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(OUT).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.format(OUT).to_string();
    }
    raw.to_string()
}

/// `+12.5%` / `-3.0%`.
pub fn format_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{pct:.1}%")
    } else {
        format!("{pct:.1}%")
    }
}

// --- Dashboard ---

#[derive(Debug, Clone, PartialEq)]
pub struct StatCardVm {
    pub label: &'static str,
    pub value: String,
    pub change: String,
    pub trending_up: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownVm {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRowVm {
    pub id: OrderId,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub total: String,
    pub items: u64,
    pub date: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRowVm {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub stock: u64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestSellerVm {
    pub name: String,
    pub total_sold: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardBodyVm {
    pub stats: Vec<StatCardVm>,
    pub product_breakdown: Vec<BreakdownVm>,
    pub order_breakdown: Vec<BreakdownVm>,
    pub recent_orders: Vec<OrderRowVm>,
    pub recent_products: Vec<ProductRowVm>,
    pub best_sellers: Vec<BestSellerVm>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardVm {
    Idle,
    Loading,
    Failed { message: String },
    Ready(Box<DashboardBodyVm>),
}

fn stat(label: &'static str, m: &Metric, money: bool) -> StatCardVm {
    StatCardVm {
        label,
        value: if money {
            format_naira(m.value)
        } else {
            format!("{}", m.value.round() as i64)
        },
        change: format_change(m.change),
        trending_up: m.change >= 0.0,
    }
}

fn order_row(o: &Order, selected: Option<OrderId>) -> OrderRowVm {
    OrderRowVm {
        id: o.id,
        status: o.status,
        status_label: o.status.label(),
        total: format_naira(o.total),
        items: o.item_count(),
        date: format_short_date(&o.created_at),
        selected: selected == Some(o.id),
    }
}

fn dashboard_body(s: &DashboardSnapshot) -> DashboardBodyVm {
    let breakdown = |v: &[bazaar_core::snapshot::StatusCount]| {
        v.iter()
            .map(|c| BreakdownVm {
                label: c.label.clone(),
                count: c.count,
            })
            .collect()
    };

    DashboardBodyVm {
        stats: vec![
            stat("Users", &s.totals.users, false),
            stat("Orders", &s.totals.orders, false),
            stat("Sales", &s.totals.sales, false),
            stat("Revenue", &s.totals.revenue, true),
        ],
        product_breakdown: breakdown(&s.analysis.products),
        order_breakdown: breakdown(&s.analysis.orders),
        recent_orders: s.recent.orders.iter().map(|o| order_row(o, None)).collect(),
        recent_products: s
            .recent
            .products
            .iter()
            .map(|p| ProductRowVm {
                id: p.id,
                name: p.name.clone(),
                price: format_naira(p.price),
                stock: p.stock,
                date: format_short_date(&p.created_at),
            })
            .collect(),
        best_sellers: s
            .best_selling_products
            .iter()
            .map(|b| BestSellerVm {
                name: b.product_name.clone(),
                total_sold: b.total_sold,
            })
            .collect(),
    }
}

pub fn dashboard_vm(state: &AppState) -> DashboardVm {
    match &state.dashboard {
        DashboardState::Idle => DashboardVm::Idle,
        DashboardState::Loading => DashboardVm::Loading,
        DashboardState::Failed { message } => DashboardVm::Failed {
            message: message.clone(),
        },
        DashboardState::Ready(s) => DashboardVm::Ready(Box::new(dashboard_body(s))),
    }
}

// --- Orders ---

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedOrderVm {
    pub id: OrderId,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub total: String,
    pub items: u64,
    pub date: String,
    /// Selection restored from disk that is not in the current working set.
    pub detached: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersVm {
    pub rows: Vec<OrderRowVm>,
    pub selected: Option<SelectedOrderVm>,
}

pub fn orders_vm<R: SelectionRepo>(store: &OrderStore<R>) -> OrdersVm {
    let selected_id = store.selected_order().map(|o| o.id);
    OrdersVm {
        rows: store
            .orders()
            .iter()
            .map(|o| order_row(o, selected_id))
            .collect(),
        selected: store.selected_order().map(|o| SelectedOrderVm {
            id: o.id,
            status: o.status,
            status_label: o.status.label(),
            total: format_naira(o.total),
            items: o.item_count(),
            date: format_short_date(&o.created_at),
            detached: store.order(o.id).is_none(),
        }),
    }
}

// --- Alerts ---

#[derive(Debug, Clone, PartialEq)]
pub struct AlertVm {
    pub id: AlertId,
    pub kind: AlertKind,
    pub icon: &'static str,
    pub class: &'static str,
    pub accent_rgb: [u8; 3],
    pub title: Option<String>,
    pub message: String,
    pub closable: bool,
    pub exiting: bool,
}

/// Visible alerts in push order.
pub fn alert_vms(presenter: &AlertPresenter) -> Vec<AlertVm> {
    presenter
        .queue()
        .iter()
        .map(|a| {
            let visual = a.kind.visual();
            AlertVm {
                id: a.id,
                kind: a.kind,
                icon: visual.icon,
                class: visual.class,
                accent_rgb: visual.accent_rgb,
                title: a.title.clone(),
                message: a.message.clone(),
                closable: a.dismissible && !a.exiting,
                exiting: a.exiting,
            }
        })
        .collect()
}

// --- Navigation ---

#[derive(Debug, Clone, PartialEq)]
pub struct NavItemVm {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub active: bool,
    pub children: Vec<NavItemVm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavVm {
    /// Tree of main items; shown while the search box is empty.
    pub items: Vec<NavItemVm>,
    /// Flat search hits; `None` while the search box is empty.
    pub results: Option<Vec<NavItemVm>>,
}

fn nav_item(r: &RouteDescriptor, current_path: &str) -> NavItemVm {
    NavItemVm {
        title: r.title,
        path: r.path,
        icon: r.icon,
        active: r.path == current_path,
        children: Vec::new(),
    }
}

pub fn nav_vm(registry: &RouteRegistry, query: &str, current_path: &str) -> NavVm {
    let items = registry
        .main_nav_items()
        .into_iter()
        .map(|r| {
            let mut item = nav_item(r, current_path);
            item.children = registry
                .sub_items(r.title)
                .into_iter()
                .map(|c| nav_item(c, current_path))
                .collect();
            item.active |= item.children.iter().any(|c| c.active);
            item
        })
        .collect();

    let results = if query.trim().is_empty() {
        None
    } else {
        Some(
            registry
                .search(query)
                .into_iter()
                .map(|r| nav_item(r, current_path))
                .collect(),
        )
    };

    NavVm { items, results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::AlertRequest;
    use std::time::Instant;

    #[test]
    fn naira_groups_thousands_and_keeps_two_decimals() {
        assert_eq!(format_naira(1_234_567.891), "\u{20A6}1,234,567.89");
        assert_eq!(format_naira(0.0), "\u{20A6}0.00");
        assert_eq!(format_naira(999.5), "\u{20A6}999.50");
        assert_eq!(format_naira(1000.0), "\u{20A6}1,000.00");
        assert_eq!(format_naira(-42.1), "-\u{20A6}42.10");
        assert_eq!(format_naira(f64::NAN), "\u{20A6}0.00");
    }

    #[test]
    fn short_date_accepts_common_backend_shapes() {
        assert_eq!(format_short_date("2024-01-05T10:00:00Z"), "Jan 5, 2024");
        assert_eq!(
            format_short_date("2024-01-05T10:00:00.123456+01:00"),
            "Jan 5, 2024"
        );
        assert_eq!(format_short_date("2024-12-25T08:30:00.5"), "Dec 25, 2024");
        assert_eq!(format_short_date("2024-03-09"), "Mar 9, 2024");
    }

    #[test]
    fn short_date_returns_garbage_unchanged() {
        assert_eq!(format_short_date("yesterday"), "yesterday");
        assert_eq!(format_short_date(""), "");
    }

    #[test]
    fn change_is_signed_with_one_decimal() {
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(0.0), "+0.0%");
        assert_eq!(format_change(-3.0), "-3.0%");
    }

    #[test]
    fn dashboard_vm_follows_fetch_state() {
        let mut state = AppState::default();
        assert_eq!(dashboard_vm(&state), DashboardVm::Idle);

        state.dashboard = DashboardState::Loading;
        assert_eq!(dashboard_vm(&state), DashboardVm::Loading);

        state.dashboard = DashboardState::Failed {
            message: "boom".into(),
        };
        assert_eq!(
            dashboard_vm(&state),
            DashboardVm::Failed {
                message: "boom".into()
            }
        );

        let snapshot: DashboardSnapshot = serde_json::from_value(serde_json::json!({
            "totals": {"revenue": {"value": 1500.0, "change": -2.5}, "users": {"count": 7}},
            "recent": {"orders": [{"id": "9", "status": "pending", "total": "20", "created_at": "2024-01-05"}]},
            "best_selling_products": [{"product__id": 1, "product__name": "Kettle", "total_sold": 4}]
        }))
        .unwrap();
        state.dashboard = DashboardState::Ready(Box::new(snapshot));

        let DashboardVm::Ready(body) = dashboard_vm(&state) else {
            panic!("expected ready");
        };
        let revenue = body.stats.iter().find(|s| s.label == "Revenue").unwrap();
        assert_eq!(revenue.value, "\u{20A6}1,500.00");
        assert_eq!(revenue.change, "-2.5%");
        assert!(!revenue.trending_up);
        let users = body.stats.iter().find(|s| s.label == "Users").unwrap();
        assert_eq!(users.value, "7");
        assert_eq!(body.recent_orders[0].id, OrderId(9));
        assert_eq!(body.recent_orders[0].date, "Jan 5, 2024");
        assert_eq!(body.best_sellers[0].name, "Kettle");
    }

    #[test]
    fn alert_vm_hides_close_while_exiting_or_not_dismissible() {
        let mut p = AlertPresenter::new();
        let now = Instant::now();
        let a = p.notify(AlertRequest::info("a"), now);
        p.notify(AlertRequest::loading("b").non_dismissible(), now);
        p.dismiss(a, now);

        let vms = alert_vms(&p);
        assert_eq!(vms.len(), 2);
        assert!(vms[0].exiting);
        assert!(!vms[0].closable);
        assert!(!vms[1].closable);
        assert_eq!(vms[1].message, "b");
        assert_eq!(vms[1].kind, AlertKind::Loading);
        assert_eq!(vms[1].class, "alert-loading");
    }

    #[test]
    fn nav_vm_marks_parent_of_active_child() {
        let reg = RouteRegistry::default();
        let vm = nav_vm(&reg, "", "/products/add");
        let products = vm.items.iter().find(|i| i.title == "Products").unwrap();
        assert!(products.active);
        assert_eq!(products.children.len(), 3);
        assert!(vm.results.is_none());

        let vm = nav_vm(&reg, "banner", "/dashboard");
        let titles: Vec<_> = vm.results.unwrap().iter().map(|r| r.title).collect();
        assert!(titles.contains(&"Add Banner"));
    }
}
