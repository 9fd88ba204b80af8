#[derive(Debug, Clone)]
pub enum AppEvent {
    Tick,
    ConfigReload,
}
