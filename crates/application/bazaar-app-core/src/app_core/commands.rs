use bazaar_core::{AlertId, AlertRequest, OrderId, OrderStatus};

use crate::session::AuthStep;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Navigation
    Navigate(String),

    // Dashboard
    RefreshDashboard,
    RetryDashboard,

    // Orders
    SelectOrder(OrderId),
    ClearSelection,
    UpdateOrderStatus { id: OrderId, status: OrderStatus },
    RemoveOrder(OrderId),

    // Alerts
    Notify(AlertRequest),
    DismissAlert(AlertId),

    // Auth overlay
    OpenAuth(AuthStep),
    SetAuthStep(AuthStep),
    CloseAuth,
}
