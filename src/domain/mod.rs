// Domain layer: request/response shapes the client builds itself and the ports it depends on.
// Backend entities stay opaque `serde_json::Value`.

pub mod model;
pub mod ports;
