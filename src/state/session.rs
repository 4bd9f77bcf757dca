//! Per-session form record

use super::forms::PatientForm;
use crate::model::{Predictor, RiskAssessment};
use anyhow::Result;
use tracing::debug;
use uuid::Uuid;

/// One user's form and its last result, owned by the UI layer
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub form: PatientForm,
    pub result: Option<RiskAssessment>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            form: PatientForm::new(),
            result: None,
        }
    }

    /// Run the predictor on the current form; without one this is a no-op
    pub fn calculate(
        &mut self,
        predictor: Option<&Predictor>,
    ) -> Result<Option<&RiskAssessment>> {
        let Some(predictor) = predictor else {
            debug!(session = %self.id, "Calculate ignored, no model loaded");
            return Ok(None);
        };

        self.form.commit_active();
        let assessment = predictor.assess(&self.form.record())?;
        debug!(
            session = %self.id,
            score = assessment.score,
            level = assessment.level.label(),
            "Calculated risk"
        );
        self.result = Some(assessment);
        Ok(self.result.as_ref())
    }

    /// Restore every field to its default and clear the result
    pub fn reset(&mut self) {
        self.form = PatientForm::new();
        self.result = None;
        debug!(session = %self.id, "Session reset");
    }

    pub fn result_message(&self) -> Option<String> {
        self.result.as_ref().map(|r| r.level.message())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MockFeatureScaler, MockRiskModel, RiskLevel};
    use crate::state::{Form, PatientRecord};
    use pretty_assertions::assert_eq;

    fn predictor(score: f64) -> Predictor {
        let mut scaler = MockFeatureScaler::new();
        scaler.expect_transform().returning(|f| *f);
        let mut model = MockRiskModel::new();
        model.expect_predict().returning(move |_| Ok(score));
        Predictor::new(scaler, model)
    }

    #[test]
    fn test_new_session_has_no_result() {
        let session = Session::new();
        assert!(session.result.is_none());
        assert!(session.result_message().is_none());
        assert_eq!(session.form.record(), PatientRecord::default());
    }

    #[test]
    fn test_calculate_sets_result() {
        let mut session = Session::new();
        let level = session.calculate(Some(&predictor(0.5))).unwrap().map(|r| r.level);
        assert_eq!(level, Some(RiskLevel::High));
        assert_eq!(
            session.result_message().as_deref(),
            Some("The patient is at high risk of cardiac arrest.")
        );
    }

    #[test]
    fn test_calculate_without_predictor_keeps_result() {
        let mut session = Session::new();
        session.calculate(Some(&predictor(0.001))).unwrap();
        let before = session.result.clone();

        assert!(session.calculate(None).unwrap().is_none());
        assert_eq!(session.result, before);
        assert_eq!(session.result.map(|r| r.level), Some(RiskLevel::Low));
    }

    #[test]
    fn test_calculate_without_predictor_on_fresh_session() {
        let mut session = Session::new();
        session.calculate(None).unwrap();
        assert!(session.result.is_none());
    }

    #[test]
    fn test_calculate_commits_pending_input() {
        let mut session = Session::new();
        session.form.set_active_field(1);
        if let Some(field) = session.form.get_active_field_mut() {
            field.push_char('5');
            field.push_char('5');
        }
        session.calculate(Some(&predictor(0.5))).unwrap();
        assert_eq!(session.form.record().age, 55);
    }

    #[test]
    fn test_failed_calculate_keeps_previous_result() {
        let mut session = Session::new();
        session.calculate(Some(&predictor(0.5))).unwrap();
        let before = session.result.clone();

        let mut scaler = MockFeatureScaler::new();
        scaler.expect_transform().returning(|f| *f);
        let mut model = MockRiskModel::new();
        model
            .expect_predict()
            .returning(|_| Err(anyhow::anyhow!("session crashed")));
        let failing = Predictor::new(scaler, model);

        assert!(session.calculate(Some(&failing)).is_err());
        assert_eq!(session.result, before);
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_result() {
        let mut session = Session::new();
        let id = session.id;
        session.form.age.increment();
        session.form.st_slope.increment();
        session.form.name.push_char('Z');
        session.form.set_active_field(7);
        session.calculate(Some(&predictor(0.5))).unwrap();

        session.reset();

        assert_eq!(session.form, PatientForm::new());
        assert!(session.result.is_none());
        assert_eq!(session.id, id);
    }

    mod logging {
        use super::*;
        use pretty_assertions::assert_eq;
        use std::io;
        use std::sync::{Arc, Mutex};
        use tracing::Level;

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl Captured {
            fn text(&self) -> String {
                String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
            }
        }

        fn run_session_at(level: Level) -> String {
            let captured = Captured::default();
            let writer = captured.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(move || writer.clone())
                .finish();

            tracing::subscriber::with_default(subscriber, || {
                let mut session = Session::new();
                session.calculate(Some(&predictor(0.5))).unwrap();
                session.reset();
            });
            captured.text()
        }

        #[test]
        fn test_calculate_and_reset_are_quiet_at_info() {
            assert_eq!(run_session_at(Level::INFO), "");
        }

        #[test]
        fn test_calculate_and_reset_log_at_debug() {
            let output = run_session_at(Level::DEBUG);
            assert!(output.contains("Calculated risk"));
            assert!(output.contains("Session reset"));
        }
    }
}
