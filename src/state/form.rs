use inference::{
    AGE_RANGE, BMI_RANGE, CHILDREN_RANGE, InferenceAdapter, InferenceErr, RawInput, SmokerChoice,
};
use log::debug;

/// The focusable rows of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    Bmi,
    Smoker,
    Children,
    Predict,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Age,
        Field::Bmi,
        Field::Smoker,
        Field::Children,
        Field::Predict,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Bmi => "BMI",
            Field::Smoker => "Smoker",
            Field::Children => "Number of Children",
            Field::Predict => "Predict Premium",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Field::Age | Field::Bmi | Field::Children)
    }

    fn index(self) -> usize {
        Field::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// What the last press of "Predict Premium" produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Premium(f64),
    Failed(String),
}

/// Values entered in the form plus the last prediction outcome.
///
/// BMI is kept in tenths so stepping never accumulates float error.
#[derive(Debug, Clone)]
pub struct FormState {
    age: i32,
    bmi_tenths: i32,
    smoker: SmokerChoice,
    children: i32,
    focus: Field,
    edit: Option<String>,
    outcome: Option<Outcome>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            age: 30,
            bmi_tenths: 250,
            smoker: SmokerChoice::No,
            children: 0,
            focus: Field::Age,
            edit: None,
            outcome: None,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The raw input as it would be sent right now, pending edits included.
    pub fn input(&self) -> RawInput {
        let mut state = self.clone();
        state.commit();

        RawInput {
            age: state.age,
            bmi: f64::from(state.bmi_tenths) / 10.0,
            smoker: state.smoker,
            children: state.children,
        }
    }

    /// Text shown for a field, the edit buffer if that field is being typed into.
    pub fn display(&self, field: Field) -> String {
        if field == self.focus {
            if let Some(buf) = &self.edit {
                return buf.clone();
            }
        }

        match field {
            Field::Age => self.age.to_string(),
            Field::Bmi => format!("{:.1}", f64::from(self.bmi_tenths) / 10.0),
            Field::Smoker => self.smoker.to_string(),
            Field::Children => self.children.to_string(),
            Field::Predict => String::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn focus_next(&mut self) {
        self.commit();
        let i = (self.focus.index() + 1).min(Field::ALL.len() - 1);
        self.focus = Field::ALL[i];
    }

    pub fn focus_prev(&mut self) {
        self.commit();
        let i = self.focus.index().saturating_sub(1);
        self.focus = Field::ALL[i];
    }

    /// Steps the focused value up by one unit (0.1 for BMI).
    pub fn increment(&mut self) {
        self.step(1);
    }

    /// Steps the focused value down by one unit (0.1 for BMI).
    pub fn decrement(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: i32) {
        self.commit();
        match self.focus {
            Field::Age => self.age = clamp_i32(self.age + delta, &AGE_RANGE),
            Field::Bmi => self.bmi_tenths = clamp_tenths(self.bmi_tenths + delta),
            Field::Smoker => self.smoker = self.smoker.toggled(),
            Field::Children => self.children = clamp_i32(self.children + delta, &CHILDREN_RANGE),
            Field::Predict => {}
        }
    }

    /// Types a character into the focused numeric field.
    pub fn push_char(&mut self, c: char) {
        if !self.focus.is_numeric() {
            return;
        }

        let accepts = c.is_ascii_digit() || (c == '.' && self.focus == Field::Bmi);
        if !accepts {
            return;
        }

        let buf = self.edit.get_or_insert_with(String::new);
        if c == '.' && buf.contains('.') {
            return;
        }
        buf.push(c);
    }

    pub fn backspace(&mut self) {
        if !self.focus.is_numeric() {
            return;
        }

        let current = self.display(self.focus);
        let buf = self.edit.get_or_insert(current);
        buf.pop();
    }

    /// Applies the edit buffer to the focused field, clamped to its bounds.
    ///
    /// Unparseable or empty buffers leave the previous value untouched.
    pub fn commit(&mut self) {
        let Some(buf) = self.edit.take() else {
            return;
        };

        match self.focus {
            Field::Age => {
                if let Ok(v) = buf.parse::<i64>() {
                    self.age = clamp_i32(saturate(v), &AGE_RANGE);
                }
            }
            Field::Children => {
                if let Ok(v) = buf.parse::<i64>() {
                    self.children = clamp_i32(saturate(v), &CHILDREN_RANGE);
                }
            }
            Field::Bmi => {
                if let Ok(v) = buf.parse::<f64>() {
                    let v = v.clamp(*BMI_RANGE.start(), *BMI_RANGE.end());
                    self.bmi_tenths = clamp_tenths((v * 10.0).round() as i32);
                }
            }
            Field::Smoker | Field::Predict => {}
        }
    }

    /// Requests a premium for the current values and records the outcome.
    ///
    /// # Returns
    /// `Err` only when the model is unavailable, in which case the form shouldn't be offered
    /// anymore. Other failures are recorded as the outcome.
    pub fn predict(&mut self, adapter: &InferenceAdapter) -> Result<(), InferenceErr> {
        let input = self.input();
        self.commit();
        debug!("form submitted: {input:?}");

        self.outcome = match adapter.predict(&input) {
            Ok(premium) => Some(Outcome::Premium(premium)),
            Err(e) if e.is_blocking() => return Err(e),
            Err(InferenceErr::PredictionFailed { cause }) => Some(Outcome::Failed(cause)),
            Err(e) => Some(Outcome::Failed(e.to_string())),
        };

        Ok(())
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn clamp_i32(v: i32, range: &std::ops::RangeInclusive<i32>) -> i32 {
    v.clamp(*range.start(), *range.end())
}

fn clamp_tenths(v: i32) -> i32 {
    let lo = (*BMI_RANGE.start() * 10.0).round() as i32;
    let hi = (*BMI_RANGE.end() * 10.0).round() as i32;
    v.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::Arc};

    use inference::{ArtifactSource, ModelStore};

    use super::*;

    const SHIPPED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/model/insurancemodel.json");

    fn adapter_at(path: impl Into<std::path::PathBuf>) -> InferenceAdapter {
        InferenceAdapter::new(Arc::new(ModelStore::new(ArtifactSource::new(path))))
    }

    fn type_str(form: &mut FormState, s: &str) {
        s.chars().for_each(|c| form.push_char(c));
    }

    #[test]
    fn steps_are_clamped_to_bounds() {
        let mut form = FormState::new();

        for _ in 0..200 {
            form.increment();
        }
        assert_eq!(form.input().age, 100);

        form.focus_next();
        for _ in 0..2000 {
            form.decrement();
        }
        assert_eq!(form.input().bmi, 0.0);

        form.increment();
        assert_eq!(form.display(Field::Bmi), "0.1");
    }

    #[test]
    fn smoker_toggles_between_the_two_choices() {
        let mut form = FormState::new();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), Field::Smoker);

        form.increment();
        assert_eq!(form.input().smoker, SmokerChoice::Yes);
        form.decrement();
        assert_eq!(form.input().smoker, SmokerChoice::No);
    }

    #[test]
    fn typed_values_are_committed_and_clamped() {
        let mut form = FormState::new();

        type_str(&mut form, "250");
        assert!(form.is_editing());
        assert_eq!(form.display(Field::Age), "250");
        form.focus_next();
        assert_eq!(form.input().age, 100);

        type_str(&mut form, "31.56");
        form.focus_next();
        assert_eq!(form.display(Field::Bmi), "31.6");

        form.focus_next();
        form.focus_next();
        type_str(&mut form, "3");
        assert_eq!(form.input().children, 3);
    }

    #[test]
    fn garbage_edit_keeps_previous_value() {
        let mut form = FormState::new();
        form.focus_next();
        type_str(&mut form, ".");
        form.commit();
        assert_eq!(form.input().bmi, 25.0);

        form.backspace();
        form.backspace();
        form.backspace();
        form.backspace();
        form.commit();
        assert_eq!(form.input().bmi, 25.0);
    }

    #[test]
    fn focus_does_not_wrap() {
        let mut form = FormState::new();
        form.focus_prev();
        assert_eq!(form.focus(), Field::Age);

        for _ in 0..10 {
            form.focus_next();
        }
        assert_eq!(form.focus(), Field::Predict);
    }

    #[test]
    fn predict_records_the_premium() {
        let adapter = adapter_at(SHIPPED);
        let mut form = FormState::new();
        form.focus_next();
        form.focus_next();
        form.focus_next();
        type_str(&mut form, "2");

        form.predict(&adapter).unwrap();

        match form.outcome() {
            Some(Outcome::Premium(p)) => assert!((p - 4625.98).abs() < 0.01),
            other => panic!("expected a premium, got {other:?}"),
        }
    }

    #[test]
    fn prediction_failure_is_recorded_not_raised() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("insurancemodel.json");
        fs::write(
            &path,
            r#"{"format":1,"estimator":{"kind":"linear","coefficients":[1,1,1],"intercept":0}}"#,
        )
        .unwrap();

        let mut form = FormState::new();
        form.predict(&adapter_at(&path)).unwrap();

        assert!(matches!(form.outcome(), Some(Outcome::Failed(_))));
    }

    #[test]
    fn unavailable_model_is_raised() {
        let tmp = tempfile::tempdir().unwrap();
        let mut form = FormState::new();

        let err = form
            .predict(&adapter_at(tmp.path().join("missing.json")))
            .unwrap_err();

        assert!(err.is_blocking());
        assert!(form.outcome().is_none());
    }
}
