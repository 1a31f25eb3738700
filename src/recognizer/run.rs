use crate::recognizer::core::{init, transition, Effect};
use crate::recognizer::main::Recognizer;

impl Recognizer {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_model, effects) = init();

        self.render(&current_model)?;
        self.spawn_effects(effects);

        loop {
            let msg = match self.event_receiver.lock().unwrap().recv() {
                Ok(msg) => msg,
                Err(error) => return Err(Box::new(error)),
            };

            let _ = self.logger.info(&format!("msg: {:?}", msg));

            let (new_model, effects) = transition(current_model, msg);

            let _ = self.logger.info(&format!("model: {:?}", new_model));

            current_model = new_model;

            self.render(&current_model)?;
            self.spawn_effects(effects);
        }
    }

    pub fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }
}
