use eframe::egui::{self, CentralPanel, Color32, RichText};
use eframe::NativeOptions;
use egui_multiselect::{Container, MultiSelect, MultiSelectItem};

#[derive(Clone)]
struct Fruit {
    id: u32,
    name: String,
    color: Color32,
}

impl Fruit {
    fn new(id: u32, name: &str, color: Color32) -> Self {
        Self {
            id,
            name: name.to_string(),
            color,
        }
    }
}

impl MultiSelectItem for Fruit {
    fn id(&self) -> egui::Id {
        egui::Id::new(self.id)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

struct DemoApp {
    picker: MultiSelect<Fruit>,
}

impl Default for DemoApp {
    fn default() -> Self {
        let available = vec![
            Fruit::new(1, "Apple", Color32::from_rgb(0xd1, 0x3f, 0x3f)),
            Fruit::new(2, "Pear", Color32::from_rgb(0x9a, 0xc2, 0x4c)),
            Fruit::new(3, "Plum", Color32::from_rgb(0x8e, 0x4f, 0xa8)),
            Fruit::new(4, "Cherry", Color32::from_rgb(0xc2, 0x1f, 0x4e)),
        ];
        let chosen = vec![Fruit::new(5, "Orange", Color32::from_rgb(0xe8, 0x8f, 0x2e))];

        Self {
            picker: MultiSelect::new(available, chosen)
                .left_heading("Available")
                .right_heading("Chosen")
                .empty_left_text("Nothing left")
                .empty_right_text("Drop fruit here")
                .move_on_arrow_click(true)
                .auto_scroll(true)
                .on_change(|event| {
                    println!(
                        "moved {} {:?} -> {:?} ({} left, {} right)",
                        event.moved.name,
                        event.from,
                        event.to,
                        event.left.len(),
                        event.right.len()
                    );
                }),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Fruit picker");
            ui.separator();
            self.picker
                .show_with(ui, |ui, fruit, _index, container, _focused| {
                    let text = RichText::new(&fruit.name).color(fruit.color);
                    if container == Container::Right {
                        ui.label(text.strong());
                    } else {
                        ui.label(text);
                    }
                });
        });
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    eframe::run_native(
        "egui_multiselect demo",
        NativeOptions::default(),
        Box::new(|_| Box::new(DemoApp::default())),
    );
}
