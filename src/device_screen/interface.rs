use crate::video_file::SelectedFile;
use std::sync::mpsc::Receiver;

/// User interactions coming out of the screen.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenEvent {
    FileSelected(SelectedFile),
    PredictClicked,
    ClearClicked,
}

/// What the screen should draw. At most one of loading, result and error
/// is ever set.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ViewModel {
    pub file_name: Option<String>,
    pub show_predict_button: bool,
    pub loading: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub action: String,
    pub confidence: Option<String>,
}

pub trait DeviceScreen: Send + Sync {
    fn events(&self) -> Receiver<ScreenEvent>;
    fn render(
        &self,
        view_model: &ViewModel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
