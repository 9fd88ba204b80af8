use kreis::gui::app::AppModel;
use kreis::gui::wheel::WheelState;
use kreis::sys::runtime;
use kreis_core::config;
use kreis_core::task::TaskList;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let config = config::load_or_default();
    let state = WheelState::new(config, TaskList::new());

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.kreis.kreis");

    app.run::<AppModel>((state, rx));
}
