/// What an element holds: nothing, rendered text, child elements, or a
/// form-control value.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    Input(InputValue),
}

/// Current value of a form control. `files` is only populated for file
/// inputs; everything else carries its text in `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputValue {
    pub value: String,
    pub files: Vec<String>,
}

impl InputValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            files: Vec::new(),
        }
    }
}
