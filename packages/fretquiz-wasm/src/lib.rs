use fretquiz::{BoardLayout, Naming, QuizConfig, QuizError, QuizSession, QuizView, ViewState};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize, Debug, PartialEq)]
struct QuizErrorPayload {
    message: String,
    kind: &'static str,
}

fn error_to_payload(e: &QuizError) -> QuizErrorPayload {
    let kind = match e {
        QuizError::InvalidString(_) => "invalid-string",
        QuizError::InvalidFret(_) => "invalid-fret",
        QuizError::UnknownNote(_) => "unknown-note",
        QuizError::ConfigError(_) => "config",
        QuizError::InvalidCommand(_) => "command",
    };
    QuizErrorPayload {
        message: e.to_string(),
        kind,
    }
}

fn error_to_json(e: &QuizError) -> String {
    serde_json::to_string(&error_to_payload(e))
        .unwrap_or_else(|_| format!("{{\"message\":{:?}}}", e.to_string()))
}

fn to_js_error(e: QuizError) -> JsValue {
    JsValue::from_str(&error_to_json(&e))
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

/// Quiz session owned by the page
#[wasm_bindgen]
pub struct FretQuiz {
    session: QuizSession,
    view: ViewState,
    naming: Naming,
    layout: BoardLayout,
}

impl FretQuiz {
    fn from_config_yaml(config_yaml: Option<&str>) -> Result<FretQuiz, QuizError> {
        let config = match config_yaml {
            Some(yaml) => QuizConfig::from_yaml(yaml)?,
            None => QuizConfig::default(),
        };
        Ok(FretQuiz {
            session: QuizSession::from_config(&config),
            view: ViewState::new(config.debug),
            naming: config.naming,
            layout: config.layout,
        })
    }

    fn snapshot(&self) -> QuizView {
        QuizView::capture(&self.session, &self.view, self.naming)
    }
}

#[wasm_bindgen]
impl FretQuiz {
    /// Start a session from optional YAML configuration
    #[wasm_bindgen(constructor)]
    pub fn new(config_yaml: Option<String>) -> Result<FretQuiz, JsValue> {
        FretQuiz::from_config_yaml(config_yaml.as_deref()).map_err(to_js_error)
    }

    /// Handle a click; `fret` is -1 for the open-string zone.
    /// Returns whether the guess scored.
    pub fn submit_guess(&mut self, string: u8, fret: i32) -> Result<bool, JsValue> {
        self.session
            .submit_guess(string, fret)
            .map(|outcome| outcome.is_correct())
            .map_err(to_js_error)
    }

    pub fn toggle_mode(&mut self) {
        self.session.toggle_mode();
    }

    pub fn toggle_debug(&mut self) {
        self.view.toggle_debug();
    }

    pub fn hover(&mut self, string: u8, fret: i32) -> Result<(), JsValue> {
        self.view.hover(string, fret).map_err(to_js_error)
    }

    pub fn clear_hover(&mut self) {
        self.view.clear_hover();
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    /// Current display state as a JS object
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.snapshot())
    }

    /// Current display state as a JSON string
    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Board coordinates as a JS object
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.layout.snapshot())
    }
}

/// Note name at a cell of the standard board
#[wasm_bindgen]
pub fn note_at(string: u8, fret: u8) -> Result<String, JsValue> {
    fretquiz::note_at(string, fret)
        .map(|note| note.name().to_string())
        .map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload() {
        let payload = error_to_payload(&QuizError::InvalidFret(13));
        assert_eq!(payload.kind, "invalid-fret");
        assert_eq!(
            error_to_json(&QuizError::InvalidString(9)),
            r#"{"message":"Invalid string 9: expected 1-4","kind":"invalid-string"}"#
        );
    }

    #[test]
    fn test_quiz_from_config() {
        let quiz = FretQuiz::from_config_yaml(Some("mode: all-strings\nseed: 3\ndebug: true\n")).unwrap();
        let json = quiz.view_json();
        assert!(json.contains(r#""mode":"all-strings""#));
        assert!(json.contains(r#""noteGrid""#));
        assert!(!json.contains("requiredString"));
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            FretQuiz::from_config_yaml(Some("mode: sideways")),
            Err(QuizError::ConfigError(_))
        ));
    }

    #[test]
    fn test_hover_and_toggles() {
        let mut quiz = FretQuiz::from_config_yaml(None).unwrap();
        quiz.view.hover(4, -1).unwrap();
        quiz.toggle_debug();
        quiz.toggle_mode();
        let snapshot = quiz.snapshot();
        assert!(snapshot.debug);
        assert_eq!(snapshot.hovered.map(|p| p.fret.number()), Some(0));
        assert!(snapshot.required_string.is_none());
        quiz.clear_hover();
        assert!(quiz.snapshot().hovered.is_none());
    }
}
