// Adapters layer: concrete implementations for external systems (http backend, host hardware).

#[cfg(feature = "hardware")]
pub mod hardware;
pub mod http;
