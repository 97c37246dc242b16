use std::fmt::Write as _;

use anyhow::{Context, Result};
use bazaar_app_core::ports::SelectionRepo;
use bazaar_app_core::viewmodel::{format_change, format_naira, format_short_date};
use bazaar_core::{DashboardSnapshot, Order, RouteRegistry};
use bazaar_infra::net::{default_http_client, DashboardClient};

/// Main navigation entries, each followed by its indented children.
pub fn render_route_list(registry: &RouteRegistry) -> String {
    let mut out = String::new();
    for item in registry.main_nav_items() {
        let _ = writeln!(out, "{:<16} {}", item.title, item.path);
        for child in registry.sub_items(item.title) {
            let _ = writeln!(out, "  {:<14} {}", child.title, child.path);
        }
    }
    out
}

pub fn render_search(registry: &RouteRegistry, query: &str) -> String {
    let hits = registry.search(query);
    if hits.is_empty() {
        return format!(":: No pages match '{query}'\n");
    }
    let mut out = String::new();
    for r in hits {
        let _ = writeln!(out, "{:<16} {:<22} {}", r.title, r.path, r.description);
    }
    out
}

pub fn render_order(order: &Order) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Order #{}", order.id);
    let _ = writeln!(out, "  status:  {}", order.status.label());
    let _ = writeln!(out, "  total:   {}", format_naira(order.total));
    let _ = writeln!(out, "  items:   {}", order.item_count());
    if !order.created_at.is_empty() {
        let _ = writeln!(out, "  created: {}", format_short_date(&order.created_at));
    }
    out
}

pub fn cmd_selection_show(repo: &impl SelectionRepo) -> Result<String> {
    Ok(match repo.load()? {
        Some(order) => render_order(&order),
        None => ":: No order selected\n".to_owned(),
    })
}

pub fn cmd_selection_clear(repo: &impl SelectionRepo) -> Result<String> {
    // An unreadable entry still occupies the slot, so clearing it counts.
    let had = match repo.load() {
        Ok(order) => order.is_some(),
        Err(e) => {
            tracing::debug!("stored selection unreadable: {e:#}");
            true
        }
    };
    repo.clear()?;
    Ok(if had {
        ":: Selection cleared\n".to_owned()
    } else {
        ":: Nothing to clear\n".to_owned()
    })
}

pub fn render_snapshot(s: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let totals = [
        ("Users", &s.totals.users, false),
        ("Orders", &s.totals.orders, false),
        ("Sales", &s.totals.sales, false),
        ("Revenue", &s.totals.revenue, true),
    ];
    for (label, m, money) in totals {
        let value = if money {
            format_naira(m.value)
        } else {
            format!("{}", m.value.round() as i64)
        };
        let _ = writeln!(out, "{label:<8} {value:>16}  {}", format_change(m.change));
    }
    if !s.recent.orders.is_empty() {
        let _ = writeln!(out, "\nRecent orders:");
        for o in &s.recent.orders {
            let _ = writeln!(
                out,
                "  #{:<6} {:<11} {:>14}  {}",
                o.id,
                o.status.label(),
                format_naira(o.total),
                format_short_date(&o.created_at)
            );
        }
    }
    if !s.best_selling_products.is_empty() {
        let _ = writeln!(out, "\nBest sellers:");
        for b in &s.best_selling_products {
            let _ = writeln!(out, "  {:<24} {} sold", b.product_name, b.total_sold);
        }
    }
    out
}

pub async fn cmd_snapshot(api_url: String, token: Option<String>) -> Result<DashboardSnapshot> {
    let http = default_http_client().context("Failed to build HTTP client")?;
    let client = DashboardClient::new(http, api_url).with_token(token);
    tracing::debug!("snapshot url: {}", client.snapshot_url());
    client
        .fetch_snapshot()
        .await
        .with_context(|| format!("Failed to fetch {}", client.snapshot_url()))
}
