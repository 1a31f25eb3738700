use crate::device_screen::interface::{DeviceScreen, ScreenEvent, ViewModel};
use crate::video_file::SelectedFile;
use eframe::egui;
use rfd::FileDialog;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const VIDEO_EXTENSIONS: [&str; 8] = ["mp4", "m4v", "mov", "webm", "avi", "mkv", "mpg", "mpeg"];

#[derive(Clone)]
struct ScreenWindow {
    view_model: Arc<Mutex<ViewModel>>,
    event_sender: Sender<ScreenEvent>,
}

impl ScreenWindow {
    fn send(&self, event: ScreenEvent) {
        let _ = self.event_sender.send(event);
    }
}

impl eframe::App for ScreenWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The view model is updated from the recognizer thread, so keep
        // polling instead of waiting for input.
        ctx.request_repaint_after(Duration::from_millis(100));

        let dropped = ctx.input(|input| input.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                self.send(ScreenEvent::FileSelected(SelectedFile::from_path(path)));
            }
        }

        let view_model = self.view_model.lock().unwrap().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("Action Recognition");
                ui.label("Upload a video to identify the action being performed");
                ui.add_space(12.0);

                if ui.button("Drop a video here or click to browse").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Video", &VIDEO_EXTENSIONS)
                        .pick_file()
                    {
                        self.send(ScreenEvent::FileSelected(SelectedFile::from_path(path)));
                    }
                }

                if let Some(file_name) = &view_model.file_name {
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        ui.label(format!("Selected: {}", file_name));
                        if ui.small_button("✕").clicked() {
                            self.send(ScreenEvent::ClearClicked);
                        }
                    });
                }

                if view_model.show_predict_button {
                    ui.add_space(8.0);
                    if ui.button("Predict Action").clicked() {
                        self.send(ScreenEvent::PredictClicked);
                    }
                }

                if view_model.loading {
                    ui.add_space(8.0);
                    ui.spinner();
                    ui.label("Analyzing video...");
                }

                if let Some(result) = &view_model.result {
                    ui.add_space(8.0);
                    ui.label("Detected Action");
                    ui.heading(&result.action);
                    if let Some(confidence) = &result.confidence {
                        ui.label(confidence);
                    }
                }

                if let Some(error) = &view_model.error {
                    ui.add_space(8.0);
                    ui.colored_label(egui::Color32::from_rgb(200, 60, 60), error);
                }
            });
        });
    }
}

pub struct DeviceScreenEgui {
    view_model: Arc<Mutex<ViewModel>>,
    event_receiver: Mutex<Option<Receiver<ScreenEvent>>>,
}

impl DeviceScreenEgui {
    pub fn new() -> Self {
        let (event_sender, event_receiver) = channel();
        let view_model = Arc::new(Mutex::new(ViewModel::default()));

        let window = ScreenWindow {
            view_model: view_model.clone(),
            event_sender,
        };

        // eframe blocks the thread it runs on, so the window gets its own
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([480.0, 420.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let _ = eframe::run_native(
                "Action Recognition",
                options,
                Box::new(|_cc| Box::new(window)),
            );
        });

        Self {
            view_model,
            event_receiver: Mutex::new(Some(event_receiver)),
        }
    }
}

impl DeviceScreen for DeviceScreenEgui {
    fn events(&self) -> Receiver<ScreenEvent> {
        match self.event_receiver.lock().unwrap().take() {
            Some(receiver) => receiver,
            // Subscribing twice yields a channel that never fires
            None => channel().1,
        }
    }

    fn render(&self, view_model: &ViewModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.view_model.lock().unwrap() = view_model.clone();
        Ok(())
    }
}
