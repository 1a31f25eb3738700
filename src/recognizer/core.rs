use crate::device_screen::interface::ScreenEvent;
use crate::prediction_api::interface::{ApiError, Prediction};
use crate::video_file::SelectedFile;

pub const INVALID_FILE_MESSAGE: &str = "Please select a valid video file";

/// At most one of loading, result and error is active at any time; the
/// tagged union makes the other combinations unrepresentable.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Phase {
    #[default]
    Empty,
    Selected {
        file: SelectedFile,
    },
    Predicting {
        file: SelectedFile,
        request_id: u64,
    },
    Done {
        file: SelectedFile,
        prediction: Prediction,
    },
    Failed {
        file: Option<SelectedFile>,
        message: String,
    },
}

impl Phase {
    pub fn file(&self) -> Option<&SelectedFile> {
        match self {
            Phase::Empty => None,
            Phase::Selected { file }
            | Phase::Predicting { file, .. }
            | Phase::Done { file, .. } => Some(file),
            Phase::Failed { file, .. } => file.as_ref(),
        }
    }
}

/// `request_seq` is the generation counter for predict requests: a
/// response is applied only while the model is still waiting for that
/// exact generation, so a late response can never overwrite newer state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Model {
    pub phase: Phase,
    pub request_seq: u64,
}

#[derive(Debug)]
pub enum Msg {
    Screen(ScreenEvent),
    PredictDone {
        request_id: u64,
        result: Result<Prediction, ApiError>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeToScreenEvents,
    Predict {
        file: SelectedFile,
        request_id: u64,
    },
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![Effect::SubscribeToScreenEvents])
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        // File selection: a valid video replaces the stored file and
        // clears any prior result or error. An invalid pick surfaces the
        // validation message and leaves the stored file untouched.
        Msg::Screen(ScreenEvent::FileSelected(file)) => {
            if file.is_video() {
                (
                    Model {
                        phase: Phase::Selected { file },
                        ..model
                    },
                    vec![],
                )
            } else {
                let stored = model.phase.file().cloned();
                (
                    Model {
                        phase: Phase::Failed {
                            file: stored,
                            message: INVALID_FILE_MESSAGE.to_string(),
                        },
                        ..model
                    },
                    vec![],
                )
            }
        }

        Msg::Screen(ScreenEvent::ClearClicked) => (
            Model {
                phase: Phase::Empty,
                ..model
            },
            vec![],
        ),

        // Predict is guarded: a no-op unless a file is stored and no
        // request is already in flight.
        Msg::Screen(ScreenEvent::PredictClicked) => match model.phase.clone() {
            Phase::Selected { file }
            | Phase::Done { file, .. }
            | Phase::Failed {
                file: Some(file), ..
            } => {
                let request_id = model.request_seq + 1;
                (
                    Model {
                        phase: Phase::Predicting {
                            file: file.clone(),
                            request_id,
                        },
                        request_seq: request_id,
                    },
                    vec![Effect::Predict { file, request_id }],
                )
            }
            _ => (model, vec![]),
        },

        // A response only counts while we still wait for that exact
        // request; anything else is stale and dropped.
        Msg::PredictDone { request_id, result } => match model.phase.clone() {
            Phase::Predicting {
                file,
                request_id: current,
            } if current == request_id => match result {
                Ok(prediction) => (
                    Model {
                        phase: Phase::Done { file, prediction },
                        ..model
                    },
                    vec![],
                ),
                Err(error) => (
                    Model {
                        phase: Phase::Failed {
                            file: Some(file),
                            message: error.user_message(),
                        },
                        ..model
                    },
                    vec![],
                ),
            },
            _ => (model, vec![]),
        },
    }
}
