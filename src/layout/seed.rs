//! Built-in demo layout used when no layout file is given.

use super::widget::{Widget, WidgetKind};
use serde_json::json;

/// Returns the four-widget demo dashboard on a 12-column grid.
pub fn demo_layout() -> Vec<Widget> {
    let mut flow = Widget::new("w1", WidgetKind::Chart, "Network Flow", 0, 0, 8, 4);
    flow.payload = json!([
        { "name": "Jan", "val": 45 },
        { "name": "Feb", "val": 78 },
        { "name": "Mar", "val": 56 },
        { "name": "Apr", "val": 90 },
        { "name": "May", "val": 65 },
    ]);

    let mut nodes = Widget::new("w2", WidgetKind::Image, "Security Nodes", 8, 0, 4, 4);
    nodes.payload = json!({ "url": "https://images.unsplash.com/photo-1558494949-ef010cbdcc51" });

    let mut events = Widget::new("w3", WidgetKind::List, "Critical Events", 0, 4, 4, 5);
    events.payload = json!([
        { "task": "Node Overflow", "time": "5m", "urgent": true },
        { "task": "System Sync", "time": "1h", "urgent": false },
        { "task": "Global Patch", "time": "2h", "urgent": false },
    ]);

    let mut stats = Widget::new("w4", WidgetKind::Table, "Live Statistics", 4, 4, 8, 5);
    stats.payload = json!([
        { "id": "COMPUTE-A", "value": "85% CPU" },
        { "id": "S3-BUCKET", "value": "1.2 TB" },
        { "id": "DB-MASTER", "value": "99% UP" },
    ]);

    vec![flow, nodes, events, stats]
}
