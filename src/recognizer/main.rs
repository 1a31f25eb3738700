use crate::device_screen::interface::DeviceScreen;
use crate::library::logger::interface::Logger;
use crate::prediction_api::interface::PredictionApi;
use crate::recognizer::core::Msg;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Recognizer {
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_screen: Arc<dyn DeviceScreen + Send + Sync>,
    pub prediction_api: Arc<dyn PredictionApi + Send + Sync>,
    pub event_sender: Sender<Msg>,
    pub event_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl Recognizer {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        device_screen: Arc<dyn DeviceScreen + Send + Sync>,
        prediction_api: Arc<dyn PredictionApi + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            logger: logger.with_namespace("recognizer"),
            device_screen,
            prediction_api,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }
}
