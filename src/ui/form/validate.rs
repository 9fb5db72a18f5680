//! Presentation-boundary validation of the product form.
//!
//! The store accepts any draft; these rules keep obviously broken input out
//! of it. Limits mirror the web form the catalog UI grew out of.

use thiserror::Error;

use crate::catalog::ProductDraft;
use crate::ui::form::state::{FormField, FormValues};

pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MIN_PRICE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("All fields are required: {} is empty", .field.label())]
    Missing { field: FormField },

    #[error("Title must be at least {min} characters")]
    TitleTooShort { min: usize },

    #[error("Description must be at least {min} characters")]
    DescriptionTooShort { min: usize },

    #[error("Price '{input}' is not a number")]
    InvalidPrice { input: String },

    #[error("Price must be at least {min}")]
    PriceTooLow { min: f64 },

    #[error("Add at least one image reference")]
    NoImages,
}

/// Turn raw form text into a draft, or say what's wrong with it.
pub fn validate(values: &FormValues) -> Result<ProductDraft, FormError> {
    for field in FormField::ALL {
        if values.get(field).trim().is_empty() {
            return Err(FormError::Missing { field });
        }
    }

    let title = values.title.trim();
    if title.chars().count() < MIN_TITLE_CHARS {
        return Err(FormError::TitleTooShort {
            min: MIN_TITLE_CHARS,
        });
    }

    let description = values.description.trim();
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(FormError::DescriptionTooShort {
            min: MIN_DESCRIPTION_CHARS,
        });
    }

    let price_input = values.price.trim();
    let price: f64 = price_input
        .parse()
        .ok()
        .filter(|price: &f64| price.is_finite())
        .ok_or_else(|| FormError::InvalidPrice {
            input: price_input.to_string(),
        })?;
    if price < MIN_PRICE {
        return Err(FormError::PriceTooLow { min: MIN_PRICE });
    }

    let images = parse_images(&values.images);
    if images.is_empty() {
        return Err(FormError::NoImages);
    }

    Ok(ProductDraft {
        title: title.to_string(),
        description: description.to_string(),
        price,
        images,
    })
}

/// Split on commas, trim, drop blanks and repeats. Order is kept.
pub fn parse_images(input: &str) -> Vec<String> {
    let mut images: Vec<String> = Vec::new();
    for image in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !images.iter().any(|seen| seen == image) {
            images.push(image.to_string());
        }
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormValues {
        FormValues {
            title: "Desk lamp".to_string(),
            description: "Adjustable arm, warm LED".to_string(),
            price: "24.5".to_string(),
            images: "https://img.example/lamp.png".to_string(),
        }
    }

    #[test]
    fn accepts_valid_input() {
        let draft = validate(&valid()).unwrap();
        assert_eq!(draft.title, "Desk lamp");
        assert_eq!(draft.price, 24.5);
        assert_eq!(draft.images, vec!["https://img.example/lamp.png"]);
    }

    #[test]
    fn reports_first_missing_field() {
        let values = FormValues {
            description: "   ".to_string(),
            ..valid()
        };
        assert_eq!(
            validate(&values),
            Err(FormError::Missing {
                field: FormField::Description
            })
        );
    }

    #[test]
    fn enforces_minimum_lengths() {
        let short_title = FormValues {
            title: "ab".to_string(),
            ..valid()
        };
        assert_eq!(
            validate(&short_title),
            Err(FormError::TitleTooShort { min: 3 })
        );

        let short_description = FormValues {
            description: "too short".to_string(),
            ..valid()
        };
        assert_eq!(
            validate(&short_description),
            Err(FormError::DescriptionTooShort { min: 10 })
        );
    }

    #[test]
    fn rejects_bad_prices() {
        let not_a_number = FormValues {
            price: "cheap".to_string(),
            ..valid()
        };
        assert!(matches!(
            validate(&not_a_number),
            Err(FormError::InvalidPrice { .. })
        ));

        let zero = FormValues {
            price: "0".to_string(),
            ..valid()
        };
        assert_eq!(validate(&zero), Err(FormError::PriceTooLow { min: 1.0 }));

        let nan = FormValues {
            price: "NaN".to_string(),
            ..valid()
        };
        assert!(matches!(validate(&nan), Err(FormError::InvalidPrice { .. })));
    }

    #[test]
    fn image_list_is_deduplicated() {
        assert_eq!(
            parse_images(" a.png, b.png ,a.png,, "),
            vec!["a.png".to_string(), "b.png".to_string()]
        );
    }

    #[test]
    fn only_separators_means_no_images() {
        let values = FormValues {
            images: " , ,".to_string(),
            ..valid()
        };
        assert_eq!(validate(&values), Err(FormError::NoImages));
    }

    #[test]
    fn missing_message_names_the_field() {
        let err = FormError::Missing {
            field: FormField::Price,
        };
        assert_eq!(err.to_string(), "All fields are required: Price is empty");
    }
}
