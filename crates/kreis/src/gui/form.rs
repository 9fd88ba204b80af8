use crate::gui::theme::category_class;
use gtk::prelude::*;
use gtk4 as gtk;
use kreis_core::task::{Category, TaskDraft, TaskError};
use kreis_core::time::TimeOfDay;
use strum::IntoEnumIterator;

const FORM_SPACING: i32 = 16;
const ERROR_CLASS: &str = "error";

/// Hour and minute wheels side by side.
struct TimePicker {
    root: gtk::Box,
    hour: gtk::SpinButton,
    minute: gtk::SpinButton,
}

impl TimePicker {
    fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Horizontal, 4);
        let hour = Self::spin(23.0);
        let minute = Self::spin(59.0);
        root.append(&hour);
        root.append(&gtk::Label::new(Some(":")));
        root.append(&minute);
        Self { root, hour, minute }
    }

    fn spin(max: f64) -> gtk::SpinButton {
        let spin = gtk::SpinButton::with_range(0.0, max, 1.0);
        spin.set_orientation(gtk::Orientation::Vertical);
        spin.set_wrap(true);
        spin.set_numeric(true);
        spin.connect_output(|spin| {
            spin.set_text(&format!("{:02}", spin.value_as_int()));
            glib::Propagation::Stop
        });
        spin
    }

    fn time(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hour.value_as_int() as u8,
            minute: self.minute.value_as_int() as u8,
        }
    }

    fn set_time(&self, time: TimeOfDay) {
        self.hour.set_value(time.hour as f64);
        self.minute.set_value(time.minute as f64);
    }
}

/// One round toggle per category; exactly one is active.
struct CategoryPicker {
    root: gtk::Box,
    buttons: Vec<(Category, gtk::ToggleButton)>,
}

impl CategoryPicker {
    fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Horizontal, FORM_SPACING);
        let mut buttons: Vec<(Category, gtk::ToggleButton)> = Vec::new();

        for category in Category::iter() {
            let btn = gtk::ToggleButton::new();
            btn.add_css_class("kreis-category");
            btn.add_css_class(&category_class(category));
            btn.set_tooltip_text(Some(category.as_ref()));
            if let Some((_, first)) = buttons.first() {
                btn.set_group(Some(first));
            }
            root.append(&btn);
            buttons.push((category, btn));
        }

        let picker = Self { root, buttons };
        picker.select(Category::default());
        picker
    }

    fn selected(&self) -> Category {
        self.buttons
            .iter()
            .find(|(_, b)| b.is_active())
            .map(|(c, _)| *c)
            .unwrap_or_default()
    }

    fn select(&self, category: Category) {
        if let Some((_, btn)) = self.buttons.iter().find(|(c, _)| *c == category) {
            btn.set_active(true);
        }
    }
}

/// The "new block" form below the wheel.
pub struct TaskForm {
    pub root: gtk::Box,
    title: gtk::Entry,
    category: CategoryPicker,
    start: TimePicker,
    end: TimePicker,
    save: gtk::Button,
}

impl TaskForm {
    pub fn new(now: TimeOfDay) -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, FORM_SPACING);

        let heading = caption("NEW TASK", "kreis-heading");
        let title = gtk::Entry::new();
        title.set_placeholder_text(Some("Wyd?"));
        title.add_css_class("kreis-title-entry");
        title.connect_changed(|entry| {
            entry.remove_css_class(ERROR_CLASS);
            entry.set_tooltip_text(None);
        });

        let category = CategoryPicker::new();

        let (start, end) = (TimePicker::new(), TimePicker::new());
        let times = gtk::Box::new(gtk::Orientation::Horizontal, FORM_SPACING * 2);
        times.set_halign(gtk::Align::Center);
        times.append(&start.root);
        times.append(&gtk::Label::new(Some("\u{2192}")));
        times.append(&end.root);

        let save = gtk::Button::with_label("CREATE BLOCK");
        save.add_css_class("kreis-save");

        root.append(&heading);
        root.append(&title);
        root.append(&caption("CATEGORY", "kreis-caption"));
        root.append(&category.root);
        root.append(&caption("TIME BLOCK", "kreis-caption"));
        root.append(&times);
        root.append(&save);

        let form = Self {
            root,
            title,
            category,
            start,
            end,
            save,
        };
        form.reset(now);
        form
    }

    /// Fires `f` on the save button and on Enter in the title field.
    pub fn connect_save<F: Fn() + Clone + 'static>(&self, f: F) {
        let on_enter = f.clone();
        self.title.connect_activate(move |_| on_enter());
        self.save.connect_clicked(move |_| f());
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.text().to_string(),
            category: self.category.selected(),
            start: self.start.time(),
            end: self.end.time(),
        }
    }

    pub fn reset(&self, now: TimeOfDay) {
        let draft = TaskDraft::starting_at(now);
        self.title.set_text(&draft.title);
        self.title.remove_css_class(ERROR_CLASS);
        self.category.select(draft.category);
        self.start.set_time(draft.start);
        self.end.set_time(draft.end);
    }

    pub fn show_error(&self, err: &TaskError) {
        self.title.add_css_class(ERROR_CLASS);
        self.title.set_tooltip_text(Some(&err.to_string()));
        self.title.grab_focus();
    }
}

fn caption(text: &str, class: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.set_xalign(0.0);
    label.add_css_class(class);
    label
}
