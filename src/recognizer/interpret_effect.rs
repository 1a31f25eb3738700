use crate::recognizer::core::{Effect, Msg};
use crate::recognizer::main::Recognizer;

impl Recognizer {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("running effect: {:?}", effect));

        match effect {
            Effect::SubscribeToScreenEvents => {
                let events = self.device_screen.events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            if self.event_sender.send(Msg::Screen(event)).is_err() {
                                return;
                            }
                        }
                        Err(_) => return,
                    }
                }
            }
            Effect::Predict { file, request_id } => {
                let result = self.prediction_api.predict_action(&file);

                if let Err(error) = &result {
                    let _ = self.logger.error(&format!("predict failed: {}", error));
                }

                let _ = self
                    .event_sender
                    .send(Msg::PredictDone { request_id, result });
            }
        }
    }
}
