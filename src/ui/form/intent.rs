use crate::catalog::Product;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    OpenCreate,
    /// Open pre-filled with `product`; submitting edits it.
    OpenEdit { product: Product },
    Close,
    FocusNext,
    FocusPrev,
    Input { ch: char },
    Backspace,
    /// Submit failed validation; show `message` and keep the input.
    Rejected { message: String },
}

impl Intent for FormIntent {}
