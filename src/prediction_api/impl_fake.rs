use crate::prediction_api::interface::{ApiError, Prediction, PredictionApi};
use crate::video_file::SelectedFile;
use rand::distr::{Distribution, Uniform};

/// Stand-in for the remote model. Answers with the fixed prediction when
/// one was provided, otherwise with a random action label.
pub struct PredictionApiFake {
    fixed: Option<Prediction>,
}

impl PredictionApiFake {
    pub fn new() -> Self {
        Self { fixed: None }
    }

    pub fn returning(prediction: Prediction) -> Self {
        Self {
            fixed: Some(prediction),
        }
    }
}

impl PredictionApi for PredictionApiFake {
    fn predict_action(&self, _file: &SelectedFile) -> Result<Prediction, ApiError> {
        if let Some(prediction) = &self.fixed {
            return Ok(prediction.clone());
        }

        let actions = [
            "Basketball",
            "Biking",
            "Bowling",
            "Drumming",
            "GolfSwing",
            "HorseRiding",
            "JumpRope",
            "Kayaking",
            "PlayingGuitar",
            "PushUps",
            "Skiing",
            "Surfing",
            "TaiChi",
            "TennisSwing",
            "Typing",
            "WalkingWithDog",
        ];

        let mut rng = rand::rng();

        let index_dist =
            Uniform::new(0, actions.len()).map_err(|error| ApiError::Network(error.to_string()))?;
        let confidence_dist =
            Uniform::new(0.0f32, 1.0).map_err(|error| ApiError::Network(error.to_string()))?;

        Ok(Prediction {
            action: actions[index_dist.sample(&mut rng)].to_string(),
            confidence: Some(confidence_dist.sample(&mut rng)),
        })
    }
}

#[cfg(test)]
mod impl_fake_test {
    use super::*;
    use crate::video_file::SelectedFile;

    #[test]
    fn test_fixed_prediction_is_returned_as_is() {
        let fake = PredictionApiFake::returning(Prediction {
            action: "Running".to_string(),
            confidence: Some(0.87),
        });

        let prediction = fake
            .predict_action(&SelectedFile::from_path("/tmp/clip.mp4"))
            .unwrap();
        assert_eq!(prediction.action, "Running");
        assert_eq!(prediction.confidence, Some(0.87));
    }

    #[test]
    fn test_random_prediction_has_confidence_in_range() {
        let fake = PredictionApiFake::new();

        let prediction = fake
            .predict_action(&SelectedFile::from_path("/tmp/clip.mp4"))
            .unwrap();
        assert!(!prediction.action.is_empty());
        let confidence = prediction.confidence.unwrap();
        assert!((0.0..=1.0).contains(&confidence));
    }
}
