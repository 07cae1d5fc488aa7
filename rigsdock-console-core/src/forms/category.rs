//! Category editor

use std::sync::Arc;

use crate::controller::{FormSchema, ResourceController};
use crate::error::{CoreError, CoreResult};
use crate::traits::{CollectionFetcher, Mutator, ResourceFetcher};
use crate::types::{Category, CategoryFields, FieldValue, ImagePreview, MainCategory, Violation};

/// Edits an existing category; main categories populate the parent select.
pub struct CategoryEditor;

impl CategoryEditor {
    /// Controller wired to the given collaborators.
    pub fn controller(
        categories: Arc<dyn ResourceFetcher<Category>>,
        main_categories: Arc<dyn CollectionFetcher<MainCategory>>,
        updates: Arc<dyn Mutator<CategoryFields>>,
    ) -> ResourceController<Self> {
        ResourceController::new()
            .with_resource_fetcher(categories)
            .with_collection_fetcher(main_categories, None)
            .with_mutator(updates)
    }
}

impl FormSchema for CategoryEditor {
    type Resource = Category;
    type Item = MainCategory;
    type Fields = CategoryFields;

    const NAME: &'static str = "category-editor";

    fn fields_from(resource: Category) -> CategoryFields {
        resource.into()
    }

    fn validate(fields: &CategoryFields) -> Vec<Violation> {
        let mut violations = Vec::new();
        if fields.name.trim().is_empty() {
            violations.push(Violation::required("name", "Category name"));
        }
        if fields.description.trim().is_empty() {
            violations.push(Violation::required("description", "Description"));
        }
        if fields.selected_main_category.is_none() {
            violations.push(Violation::required("selectedMainCategory", "Main category"));
        }
        violations
    }

    fn apply_field(fields: &mut CategoryFields, name: &str, value: FieldValue) -> CoreResult<()> {
        match name {
            "name" => fields.name = value.into_text(name)?,
            "description" => fields.description = value.into_text(name)?,
            "selectedMainCategory" => fields.selected_main_category = value.into_choice(name)?,
            "isActive" => fields.is_active = value.into_flag(name)?,
            _ => return Err(CoreError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn image_mut(fields: &mut CategoryFields) -> Option<&mut ImagePreview> {
        Some(&mut fields.image)
    }

    fn success_message(_is_update: bool) -> String {
        "Category updated successfully!".to_string()
    }
}

impl CategoryFields {
    /// Text parts of the multipart update, in wire naming.
    #[must_use]
    pub fn form_parts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            (
                "maincategory",
                self.selected_main_category.clone().unwrap_or_default(),
            ),
            (
                "status",
                crate::types::CategoryStatus::from_active(self.is_active)
                    .as_str()
                    .to_string(),
            ),
        ]
    }
}
