//! Time Zone API.

use crate::domains::tools::api::{ApiService, EndpointDescriptor, HeaderPolicy, ParamKind, ParamSpec};

/// Time zone and UTC/DST offsets for a location at a given instant.
pub static GET_TIME_ZONE: EndpointDescriptor = EndpointDescriptor {
    name: "get_time_zone",
    description: "Get the time zone for a location on Earth, with the UTC and daylight \
         saving offsets in effect at the given timestamp.",
    service: ApiService::Maps,
    path: "/maps/api/timezone/json",
    headers: HeaderPolicy::AcceptJson,
    params: &[
        ParamSpec::required("location", ParamKind::String, "Location as 'lat,lng'"),
        ParamSpec::required(
            "timestamp",
            ParamKind::Integer,
            "Instant to evaluate, in seconds since 1970-01-01 UTC",
        ),
        ParamSpec::optional(
            "language",
            ParamKind::String,
            "Language of the returned time zone name",
        ),
    ],
};
