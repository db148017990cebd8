//! Dish entity model and its validation rules

use crate::core::error::ValidationError;
use crate::core::resource::Resource;
use crate::core::validation::validators::{required_positive_number, required_text};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

/// Validated dish fields, used for both create and update
#[derive(Debug, Clone, PartialEq)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl DishDraft {
    /// Checks run in a fixed order; the first failure is reported
    pub fn validate(data: &Value) -> Result<Self, ValidationError> {
        let name = required_text(data, Dish::LABEL, "name")?;
        let description = required_text(data, Dish::LABEL, "description")?;
        let price = required_positive_number(data, Dish::LABEL, "price")?;
        let image_url = required_text(data, Dish::LABEL, "image_url")?;

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            image_url: image_url.to_string(),
        })
    }
}

impl Resource for Dish {
    type Draft = DishDraft;
    type Changes = DishDraft;

    const LABEL: &'static str = "Dish";
    const PLURAL: &'static str = "dishes";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate_create(data: &Value) -> Result<DishDraft, ValidationError> {
        DishDraft::validate(data)
    }

    fn from_draft(id: String, draft: DishDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
        }
    }

    fn validate_update(data: &Value) -> Result<DishDraft, ValidationError> {
        DishDraft::validate(data)
    }

    fn apply(&mut self, changes: DishDraft) {
        self.name = changes.name;
        self.description = changes.description;
        self.price = changes.price;
        self.image_url = changes.image_url;
    }
}
