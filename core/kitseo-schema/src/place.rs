//! Place / LocalBusiness schema with postal address and coordinates.

use kitseo_types::{non_empty, SchemaNode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{number, require, SchemaResult, Validate};

/// Country assumed when an address carries none.
pub const DEFAULT_COUNTRY: &str = "US";

/// The schema.org type emitted for a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceKind {
    #[default]
    LocalBusiness,
    Place,
}

impl PlaceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LocalBusiness => "LocalBusiness",
            Self::Place => "Place",
        }
    }
}

/// Input for [`place`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceProps {
    pub name: String,
    pub kind: PlaceKind,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Validate for PlaceProps {
    fn validate(&self) -> SchemaResult<()> {
        require("name", &self.name)
    }
}

pub fn place(props: &PlaceProps) -> SchemaNode {
    let address = SchemaNode::nested("PostalAddress")
        .with_text("streetAddress", props.street_address.as_deref())
        .with_text("addressLocality", props.city.as_deref())
        .with_text("addressRegion", props.region.as_deref())
        .with_text("postalCode", props.postal_code.as_deref())
        .with(
            "addressCountry",
            non_empty(props.country.as_deref()).unwrap_or(DEFAULT_COUNTRY),
        );

    // Zero is a real coordinate (equator, prime meridian); only a missing or
    // non-finite value drops the geo block.
    let geo = match (
        props.latitude.and_then(number),
        props.longitude.and_then(number),
    ) {
        (Some(latitude), Some(longitude)) => Some(
            SchemaNode::nested("GeoCoordinates")
                .with("latitude", latitude)
                .with("longitude", longitude),
        ),
        _ => {
            debug!("Place {:?} lacks a full coordinate pair, omitting geo", props.name);
            None
        }
    };

    SchemaNode::new(props.kind.as_str())
        .with("name", props.name.as_str())
        .with("address", address)
        .with_node("geo", geo)
}
