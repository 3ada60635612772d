// QR Baghdad services
// Services provide core functionality: settings, QR rendering, notifications.

pub mod notifier;
pub mod qr_renderer;
pub mod settings_engine;
