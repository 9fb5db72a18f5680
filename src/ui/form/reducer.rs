use crate::mvi::Reducer;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, FormMode, FormState, FormValues};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenCreate => FormState::Visible {
                mode: FormMode::Create,
                values: FormValues::default(),
                focused: FormField::Title,
                error: None,
            },
            FormIntent::OpenEdit { product } => FormState::Visible {
                mode: FormMode::Edit { id: product.id },
                values: FormValues::from_product(&product),
                focused: FormField::Title,
                error: None,
            },
            FormIntent::Close => FormState::Hidden,
            FormIntent::FocusNext => match state {
                FormState::Visible {
                    mode,
                    values,
                    focused,
                    error,
                } => FormState::Visible {
                    mode,
                    values,
                    focused: focused.next(),
                    error,
                },
                other => other,
            },
            FormIntent::FocusPrev => match state {
                FormState::Visible {
                    mode,
                    values,
                    focused,
                    error,
                } => FormState::Visible {
                    mode,
                    values,
                    focused: focused.prev(),
                    error,
                },
                other => other,
            },
            FormIntent::Input { ch } => match state {
                FormState::Visible {
                    mode,
                    mut values,
                    focused,
                    ..
                } => {
                    values.get_mut(focused).push(ch);
                    FormState::Visible {
                        mode,
                        values,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                FormState::Visible {
                    mode,
                    mut values,
                    focused,
                    error,
                } => {
                    values.get_mut(focused).pop();
                    FormState::Visible {
                        mode,
                        values,
                        focused,
                        error,
                    }
                }
                other => other,
            },
            FormIntent::Rejected { message } => match state {
                FormState::Visible {
                    mode,
                    values,
                    focused,
                    ..
                } => FormState::Visible {
                    mode,
                    values,
                    focused,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}
