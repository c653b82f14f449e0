//! Static cloud to product compatibility table.

use crate::cloud::{Cloud, Product};
use crate::vocabulary::ClosedSet;

const AWS_PRODUCTS: &[Product] = &[
    Product::S3,
    Product::Snowflake,
    Product::Databricks,
    Product::Redshift,
    Product::Sftp,
];

const GCP_PRODUCTS: &[Product] = &[
    Product::Gcs,
    Product::BigQuery,
    Product::Snowflake,
    Product::Databricks,
];

const AZURE_PRODUCTS: &[Product] = &[Product::BlobStorage, Product::Snowflake, Product::Databricks];

/// Products a cloud can host.
#[must_use]
pub const fn products_for(cloud: Cloud) -> &'static [Product] {
    match cloud {
        Cloud::Aws => AWS_PRODUCTS,
        Cloud::Gcp => GCP_PRODUCTS,
        Cloud::Azure => AZURE_PRODUCTS,
    }
}

/// Products for a raw cloud tag; unknown tags host nothing.
#[must_use]
pub fn products_for_name(cloud: &str) -> &'static [Product] {
    Cloud::parse(cloud).map(products_for).unwrap_or_default()
}

/// Returns true when `product` may be deployed on `cloud`.
#[must_use]
pub fn is_supported(cloud: Cloud, product: Product) -> bool {
    products_for(cloud).contains(&product)
}

/// Clouds that host `product`, in declaration order.
pub fn clouds_for(product: Product) -> impl Iterator<Item = Cloud> {
    Cloud::ALL
        .iter()
        .copied()
        .filter(move |cloud| is_supported(*cloud, product))
}
