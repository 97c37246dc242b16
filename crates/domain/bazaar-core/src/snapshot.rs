use serde::{Deserialize, Serialize};

use crate::{lenient, Order};

/// Everything the admin dashboard renders, in one response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub totals: Totals,
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub recent: Recent,
    #[serde(default)]
    pub best_selling_products: Vec<BestSeller>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default)]
    pub users: Metric,
    #[serde(default)]
    pub orders: Metric,
    #[serde(default)]
    pub sales: Metric,
    #[serde(default)]
    pub revenue: Metric,
}

/// A headline number and its percentage change over the previous period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(
        default,
        alias = "count",
        alias = "total",
        deserialize_with = "lenient::amount"
    )]
    pub value: f64,
    #[serde(
        default,
        alias = "percentage_change",
        deserialize_with = "lenient::amount"
    )]
    pub change: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub products: Vec<StatusCount>,
    #[serde(default)]
    pub orders: Vec<StatusCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    #[serde(default, alias = "status")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recent {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(default, deserialize_with = "lenient::count")]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub stock: u64,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSeller {
    #[serde(rename = "product__id", default, deserialize_with = "lenient::count")]
    pub product_id: u64,
    #[serde(rename = "product__name", default)]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_sold: u64,
}
