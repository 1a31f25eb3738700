use crate::device_screen::interface::{ResultView, ViewModel};
use crate::recognizer::core::{Model, Phase};
use crate::recognizer::main::Recognizer;

impl Recognizer {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_screen.render(&view(model))
    }
}

/// Projects the model onto the screen contract.
pub fn view(model: &Model) -> ViewModel {
    let file_name = model.phase.file().map(|file| file.name.clone());

    match &model.phase {
        Phase::Empty => ViewModel::default(),
        Phase::Selected { .. } => ViewModel {
            file_name,
            show_predict_button: true,
            ..ViewModel::default()
        },
        Phase::Predicting { .. } => ViewModel {
            file_name,
            loading: true,
            ..ViewModel::default()
        },
        Phase::Done { prediction, .. } => ViewModel {
            file_name,
            show_predict_button: true,
            result: Some(ResultView {
                action: prediction.action.clone(),
                confidence: prediction
                    .confidence
                    .map(|confidence| format!("Confidence: {:.1}%", confidence * 100.0)),
            }),
            ..ViewModel::default()
        },
        Phase::Failed { file, message } => ViewModel {
            file_name,
            show_predict_button: file.is_some(),
            error: Some(message.clone()),
            ..ViewModel::default()
        },
    }
}

#[cfg(test)]
mod render_test {
    use super::*;
    use crate::prediction_api::interface::Prediction;
    use crate::video_file::SelectedFile;

    fn model_with_phase(phase: Phase) -> Model {
        Model {
            phase,
            request_seq: 0,
        }
    }

    #[test]
    fn test_empty_model_renders_bare_upload_zone() {
        assert_eq!(view(&Model::default()), ViewModel::default());
    }

    #[test]
    fn test_confidence_is_formatted_as_percentage() {
        let model = model_with_phase(Phase::Done {
            file: SelectedFile::from_path("/tmp/clip.mp4"),
            prediction: Prediction {
                action: "Running".to_string(),
                confidence: Some(0.87),
            },
        });

        let view_model = view(&model);
        let result = view_model.result.unwrap();
        assert_eq!(result.action, "Running");
        assert_eq!(result.confidence, Some("Confidence: 87.0%".to_string()));
    }

    #[test]
    fn test_confidence_line_is_omitted_when_absent() {
        let model = model_with_phase(Phase::Done {
            file: SelectedFile::from_path("/tmp/clip.mp4"),
            prediction: Prediction {
                action: "Running".to_string(),
                confidence: None,
            },
        });

        assert_eq!(view(&model).result.unwrap().confidence, None);
    }

    #[test]
    fn test_predicting_shows_only_the_loading_view() {
        let model = model_with_phase(Phase::Predicting {
            file: SelectedFile::from_path("/tmp/clip.mp4"),
            request_id: 1,
        });

        let view_model = view(&model);
        assert!(view_model.loading);
        assert!(!view_model.show_predict_button);
        assert_eq!(view_model.result, None);
        assert_eq!(view_model.error, None);
        assert_eq!(view_model.file_name, Some("clip.mp4".to_string()));
    }

    #[test]
    fn test_failure_without_file_hides_predict_button() {
        let model = model_with_phase(Phase::Failed {
            file: None,
            message: "Please select a valid video file".to_string(),
        });

        let view_model = view(&model);
        assert!(!view_model.show_predict_button);
        assert_eq!(
            view_model.error,
            Some("Please select a valid video file".to_string())
        );
    }
}
