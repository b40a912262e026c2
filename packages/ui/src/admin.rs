//! Admin form for creating and editing sweets.

use dioxus::prelude::*;
use store::models::{parse_price, parse_quantity};
use store::{Sweet, SweetDraft, ValidationError};

/// Raw text of the sweet form's inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweetFields {
    pub name: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
    pub quantity: String,
    pub description: String,
}

impl SweetFields {
    pub fn from_sweet(sweet: &Sweet) -> Self {
        Self {
            name: sweet.name.clone(),
            category: sweet.category.clone(),
            price: sweet.price.to_string(),
            image_url: sweet.image_url.clone(),
            quantity: sweet.quantity.to_string(),
            description: sweet.description.clone(),
        }
    }

    /// Parse and validate into a draft. A blank quantity means zero.
    pub fn to_draft(&self) -> Result<SweetDraft, ValidationError> {
        let price = parse_price(&self.price).ok_or(ValidationError::InvalidPrice)?;
        let quantity = if self.quantity.trim().is_empty() {
            0
        } else {
            parse_quantity(&self.quantity).ok_or(ValidationError::InvalidQuantity)?
        };
        let draft = SweetDraft {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price,
            image_url: self.image_url.trim().to_string(),
            quantity,
            description: self.description.trim().to_string(),
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Create form when `editing` is `None`, edit form otherwise.
#[component]
pub fn SweetForm(
    editing: Option<Sweet>,
    #[props(default)] saving: bool,
    on_save: EventHandler<SweetDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let initial = editing.as_ref().map(SweetFields::from_sweet).unwrap_or_default();
    let mut fields = use_signal(move || initial);
    let mut error = use_signal(|| Option::<String>::None);
    let title = if editing.is_some() { "Edit sweet" } else { "Add sweet" };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match fields.read().to_draft() {
            Ok(draft) => {
                error.set(None);
                on_save.call(draft);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        form {
            class: "sweet-form",
            onsubmit: submit,
            h3 { "{title}" }
            if let Some(err) = error() {
                p { class: "form-error", "{err}" }
            }
            label {
                "Name"
                input {
                    value: fields().name,
                    oninput: move |evt: FormEvent| fields.write().name = evt.value(),
                }
            }
            label {
                "Category"
                input {
                    value: fields().category,
                    oninput: move |evt: FormEvent| fields.write().category = evt.value(),
                }
            }
            label {
                "Price"
                input {
                    r#type: "number",
                    step: "0.01",
                    min: "0",
                    value: fields().price,
                    oninput: move |evt: FormEvent| fields.write().price = evt.value(),
                }
            }
            label {
                "Quantity"
                input {
                    r#type: "number",
                    min: "0",
                    value: fields().quantity,
                    oninput: move |evt: FormEvent| fields.write().quantity = evt.value(),
                }
            }
            label {
                "Image URL"
                input {
                    value: fields().image_url,
                    oninput: move |evt: FormEvent| fields.write().image_url = evt.value(),
                }
            }
            label {
                "Description"
                textarea {
                    value: fields().description,
                    oninput: move |evt: FormEvent| fields.write().description = evt.value(),
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving,
                    if saving { "Saving..." } else { "Save" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> SweetFields {
        SweetFields {
            name: " Peda ".into(),
            category: "Milk".into(),
            price: "4.5".into(),
            image_url: String::new(),
            quantity: "7".into(),
            description: "Soft".into(),
        }
    }

    #[test]
    fn test_fields_to_draft() {
        let draft = fields().to_draft().unwrap();
        assert_eq!(draft.name, "Peda");
        assert_eq!(draft.price, 4.5);
        assert_eq!(draft.quantity, 7);
    }

    #[test]
    fn test_bad_fields_are_rejected() {
        let mut f = fields();
        f.price = "cheap".into();
        assert_eq!(f.to_draft(), Err(ValidationError::InvalidPrice));

        let mut f = fields();
        f.quantity = "1.5".into();
        assert_eq!(f.to_draft(), Err(ValidationError::InvalidQuantity));

        let mut f = fields();
        f.category = " ".into();
        assert_eq!(f.to_draft(), Err(ValidationError::Required("category")));
    }

    #[test]
    fn test_blank_quantity_is_zero() {
        let mut f = fields();
        f.quantity.clear();
        assert_eq!(f.to_draft().unwrap().quantity, 0);
    }
}
