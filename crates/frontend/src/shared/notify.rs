//! Blocking user notifications (`window.alert`).

pub fn notify(message: &str) {
    log::info!("notify: {}", message);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Полная перезагрузка страницы по адресу (сервер заново отдаёт данные)
pub fn navigate_to(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("Failed to navigate to {}: {:?}", path, e);
    }
}
