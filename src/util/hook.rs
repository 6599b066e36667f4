use crate::ui::tui;

/// Leaves the alternate screen before the default hook prints, and records
/// the panic in the log file.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::Tui::restore();
        tracing::error!(panic = %panic_info, "panicked");
        hook(panic_info);
    }));
}
