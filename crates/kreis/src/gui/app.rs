use crate::events::AppEvent;
use crate::gui::form::TaskForm;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::wheel::{self, WHEEL_SIZE, WheelState};
use gtk::prelude::*;
use gtk4 as gtk;
use kreis_core::config;
use kreis_core::geometry::Point;
use kreis_core::time::TimeOfDay;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

pub struct AppModel {
    pub state: Rc<RefCell<WheelState>>,
    pub form: TaskForm,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Tick,
    ConfigReload,
    WheelClicked(Point),
    SaveTask,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Tick => AppMsg::Tick,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (WheelState, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Kreis"),
            set_default_size: (420, 820),
            add_css_class: "kreis-window",

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 32,
                set_margin_all: 24,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_content_width: WHEEL_SIZE,
                    set_content_height: WHEEL_SIZE,
                    set_hexpand: true,
                    set_vexpand: true,

                    add_controller = gtk::GestureClick {
                        connect_released[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::WheelClicked(Point::new(x, y)));
                        }
                    }
                },

                #[name = "form_slot"]
                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, rx) = init;

        theme::load_css();

        let form = TaskForm::new(state.now);
        let model = AppModel {
            state: Rc::new(RefCell::new(state)),
            form,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        widgets.form_slot.append(&model.form.root);

        {
            let sender = sender.clone();
            model
                .form
                .connect_save(move || sender.input(AppMsg::SaveTask));
        }

        let state_draw = model.state.clone();
        let colors = ThemeColors::default();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                let at = Instant::now();
                let mut state = state_draw.borrow_mut();
                state.relayout(width as f64, height as f64, at);
                if let Err(e) = wheel::draw(cr, &state, &colors, at) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // keep repainting while the indicator glides between positions
        let state_anim = model.state.clone();
        widgets.drawing_area.add_tick_callback(move |area, _| {
            if state_anim.borrow().is_animating(Instant::now()) {
                area.queue_draw();
            }
            glib::ControlFlow::Continue
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tick => {
                let changed = self
                    .state
                    .borrow_mut()
                    .tick(TimeOfDay::now(), Instant::now());
                if changed {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::WheelClicked(point) => {
                let hit = self.state.borrow_mut().click(point, Instant::now());
                log::debug!("Wheel click at ({:.0}, {:.0}): {:?}", point.x, point.y, hit);
                self.drawing_area.queue_draw();
            }
            AppMsg::SaveTask => match self.form.draft().into_task() {
                Ok(task) => {
                    self.state.borrow_mut().add_task(task);
                    self.form.reset(TimeOfDay::now());
                    self.drawing_area.queue_draw();
                }
                Err(e) => {
                    log::warn!("Task not added: {}", e);
                    self.form.show_error(&e);
                }
            },
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.state.borrow_mut().set_config(new_config);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
