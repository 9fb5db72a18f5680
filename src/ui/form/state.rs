//! State for the create/edit product form.

use crate::catalog::{Product, ProductId};
use crate::mvi::MviState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Price,
    Images,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Price,
        FormField::Images,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Price => "Price",
            Self::Images => "Images (comma separated)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Price,
            Self::Price => Self::Images,
            Self::Images => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Images,
            Self::Description => Self::Title,
            Self::Price => Self::Description,
            Self::Images => Self::Price,
        }
    }
}

/// Whether submitting creates a new product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: ProductId },
}

/// Raw text of every field, exactly as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValues {
    pub title: String,
    pub description: String,
    pub price: String,
    pub images: String,
}

impl FormValues {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: format_price(product.price),
            images: product.images.join(", "),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
            FormField::Images => &self.images,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Price => &mut self.price,
            FormField::Images => &mut self.images,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Visible {
        mode: FormMode,
        values: FormValues,
        focused: FormField,
        /// Validation message from the last rejected submit.
        error: Option<String>,
    },
}

impl MviState for FormState {}

impl FormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Visible { error, .. } => error.as_deref(),
            Self::Hidden => None,
        }
    }
}

/// Prices print without a trailing `.0` for whole numbers.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        format!("{price}")
    }
}
