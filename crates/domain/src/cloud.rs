//! Cloud providers and the products they host.

use crate::primitives::PrimitiveError;
use crate::vocabulary::ClosedSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cloud provider a destination can live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cloud {
    /// Amazon Web Services.
    Aws,
    /// Google Cloud.
    Gcp,
    /// Microsoft Azure.
    Azure,
}

impl ClosedSet for Cloud {
    const ALL: &'static [Self] = &[Self::Aws, Self::Gcp, Self::Azure];

    fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Azure => "azure",
        }
    }
}

impl FromStr for Cloud {
    type Err = PrimitiveError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        <Self as ClosedSet>::parse(input).ok_or_else(|| PrimitiveError::UnknownCloud {
            input: input.to_owned(),
        })
    }
}

impl fmt::Display for Cloud {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A storage or warehouse product a destination targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Product {
    /// Amazon S3 buckets.
    S3,
    /// Google Cloud Storage buckets.
    Gcs,
    /// Azure Blob Storage containers.
    BlobStorage,
    /// SFTP drop servers.
    Sftp,
    /// Google `BigQuery` datasets.
    #[serde(rename = "bigquery")]
    BigQuery,
    /// Snowflake data shares.
    Snowflake,
    /// Databricks Delta shares.
    Databricks,
    /// Amazon Redshift datashares.
    Redshift,
}

impl ClosedSet for Product {
    const ALL: &'static [Self] = &[
        Self::S3,
        Self::Gcs,
        Self::BlobStorage,
        Self::Sftp,
        Self::BigQuery,
        Self::Snowflake,
        Self::Databricks,
        Self::Redshift,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Gcs => "gcs",
            Self::BlobStorage => "blobStorage",
            Self::Sftp => "sftp",
            Self::BigQuery => "bigquery",
            Self::Snowflake => "snowflake",
            Self::Databricks => "databricks",
            Self::Redshift => "redshift",
        }
    }
}

impl FromStr for Product {
    type Err = PrimitiveError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        <Self as ClosedSet>::parse(input).ok_or_else(|| PrimitiveError::UnknownProduct {
            input: input.to_owned(),
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn serde_tags_match_wire_tags() -> Result<(), serde_json::Error> {
        for cloud in Cloud::ALL {
            assert_eq!(serde_json::to_value(cloud)?, cloud.as_str());
        }
        for product in Product::ALL {
            assert_eq!(serde_json::to_value(product)?, product.as_str());
        }
        Ok(())
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!("gcp".parse::<Cloud>(), Ok(Cloud::Gcp));
        assert!("GCP".parse::<Cloud>().is_err());
        assert_eq!("blobStorage".parse::<Product>(), Ok(Product::BlobStorage));
        assert!("blobstorage".parse::<Product>().is_err());
        assert!("BigQuery".parse::<Product>().is_err());
    }

    #[test]
    fn unknown_cloud_reports_input() {
        let error = "oracle".parse::<Cloud>().err();
        assert!(matches!(
            error,
            Some(PrimitiveError::UnknownCloud { ref input }) if input == "oracle"
        ));
    }

    proptest! {
        #[test]
        fn parse_roundtrips_every_product(product in prop::sample::select(Product::ALL)) {
            prop_assert_eq!(product.as_str().parse::<Product>(), Ok(product));
        }
    }
}
