// QR Baghdad state managers
// Managers handle stateful operations backed by the durable key-value store.

pub mod history_manager;
