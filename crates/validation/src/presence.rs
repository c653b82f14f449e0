//! Presence and well-formedness of `cloud`, `product` and `region`.

use crate::draft::{DestinationDraft, keys};
use crate::error::DestinationValidationError;
use crate::path::FieldPath;
use crate::value::{is_truthy, render};
use destination_guard_domain::is_supported;
use serde_json::Value;

/// Check the top-level fields in order, stopping at the first failure.
pub fn check_basic_fields(draft: &DestinationDraft<'_>) -> Result<(), DestinationValidationError> {
    check_cloud(draft)?;
    check_product(draft)?;
    check_region(draft)
}

fn required<'d>(
    draft: &'d DestinationDraft<'_>,
    key: &'static str,
    message: &str,
) -> Result<&'d Value, DestinationValidationError> {
    draft
        .value(key)
        .filter(|value| is_truthy(value))
        .ok_or_else(|| DestinationValidationError::missing_field(FieldPath::root(key), message))
}

fn check_cloud(draft: &DestinationDraft<'_>) -> Result<(), DestinationValidationError> {
    if !draft.is_checked(keys::CLOUD) {
        return Ok(());
    }

    let value = required(draft, keys::CLOUD, "Cloud is required.")?;
    if draft.cloud().is_none() {
        let rendered = render(value);
        return Err(DestinationValidationError::invalid_enum(
            FieldPath::root(keys::CLOUD),
            rendered.clone(),
            format!("Invalid cloud: {rendered}."),
        ));
    }

    Ok(())
}

fn check_product(draft: &DestinationDraft<'_>) -> Result<(), DestinationValidationError> {
    if !draft.is_checked(keys::PRODUCT) {
        return Ok(());
    }

    let value = required(draft, keys::PRODUCT, "Product is required.")?;
    let supported = draft
        .cloud()
        .zip(draft.product())
        .is_some_and(|(cloud, product)| is_supported(cloud, product));

    if !supported {
        let rendered = render(value);
        let cloud = draft.value(keys::CLOUD).map_or_else(|| "null".to_owned(), render);
        return Err(DestinationValidationError::invalid_enum(
            FieldPath::root(keys::PRODUCT),
            rendered.clone(),
            format!("Product '{rendered}' is not valid for cloud '{cloud}'."),
        ));
    }

    Ok(())
}

fn check_region(draft: &DestinationDraft<'_>) -> Result<(), DestinationValidationError> {
    if draft.is_checked(keys::REGION) {
        required(draft, keys::REGION, "Region is required.")?;
    }
    Ok(())
}
