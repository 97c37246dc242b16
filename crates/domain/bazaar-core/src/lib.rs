use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

pub mod alert;
pub mod lenient;
pub mod routes;
pub mod snapshot;

pub use alert::{AlertId, AlertKind, AlertRecord, AlertRequest, AlertVisual};
pub use routes::{RouteDescriptor, RouteRegistry, ROUTES};
pub use snapshot::DashboardSnapshot;

/// Canonical order identifier.
///
/// The backend is not consistent about id typing, so both `1` and `"1"`
/// decode to the same value. Anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => n
                .as_u64()
                .map(OrderId)
                .ok_or_else(|| de::Error::custom(format!("invalid order id `{n}`"))),
            serde_json::Value::String(s) => s
                .trim()
                .parse::<u64>()
                .map(OrderId)
                .map_err(|_| de::Error::custom(format!("invalid order id `{s}`"))),
            other => Err(de::Error::custom(format!("invalid order id `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient::count")]
    pub quantity: u64,
    /// Backend fields the client does not interpret (product, price, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An order as delivered by the backend. Unknown fields are carried along so
/// a persisted selection round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Order {
    pub fn new(id: impl Into<OrderId>, status: OrderStatus) -> Self {
        Self {
            id: id.into(),
            status,
            total: 0.0,
            items: Vec::new(),
            created_at: String::new(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// The signed-in administrator, as far as the UI cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub name: String,
}
