use crate::device_screen::interface::{DeviceScreen, ScreenEvent, ViewModel};
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Scriptable screen for tests: events are pushed by the test and every
/// rendered frame is recorded.
pub struct DeviceScreenFake {
    event_sender: Sender<ScreenEvent>,
    event_receiver: Mutex<Option<Receiver<ScreenEvent>>>,
    rendered: Mutex<Vec<ViewModel>>,
}

impl DeviceScreenFake {
    pub fn new() -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            event_sender,
            event_receiver: Mutex::new(Some(event_receiver)),
            rendered: Mutex::new(vec![]),
        }
    }

    pub fn push_event(&self, event: ScreenEvent) {
        let _ = self.event_sender.send(event);
    }

    pub fn rendered(&self) -> Vec<ViewModel> {
        self.rendered.lock().unwrap().clone()
    }
}

impl DeviceScreen for DeviceScreenFake {
    fn events(&self) -> Receiver<ScreenEvent> {
        match self.event_receiver.lock().unwrap().take() {
            Some(receiver) => receiver,
            None => channel().1,
        }
    }

    fn render(&self, view_model: &ViewModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.rendered.lock().unwrap().push(view_model.clone());
        Ok(())
    }
}
