//! Roads API.

use crate::domains::tools::api::{
    ApiService, EndpointDescriptor, HeaderPolicy, ParamDefault, ParamKind, ParamSpec,
};

/// Closest road segment for each of up to 100 points.
pub static NEAREST_ROADS: EndpointDescriptor = EndpointDescriptor {
    name: "nearest_roads",
    description: "Find the closest road segment for each given point. Points need not be \
         along a continuous path.",
    service: ApiService::Roads,
    path: "/v1/nearestRoads",
    headers: HeaderPolicy::AcceptJson,
    params: &[ParamSpec::required(
        "points",
        ParamKind::String,
        "Up to 100 'lat,lng' pairs separated by '|'",
    )],
};

/// Snap a GPS trace onto the road geometry.
pub static SNAP_TO_ROADS: EndpointDescriptor = EndpointDescriptor {
    name: "snap_to_roads",
    description: "Snap a sequence of GPS points to the roads most likely travelled, \
         optionally interpolating extra points that follow the road geometry.",
    service: ApiService::Roads,
    path: "/v1/snapToRoads",
    headers: HeaderPolicy::AcceptJson,
    params: &[
        ParamSpec::required(
            "path",
            ParamKind::String,
            "Up to 100 'lat,lng' pairs separated by '|', in travel order",
        ),
        ParamSpec::defaulted(
            "interpolate",
            ParamKind::Boolean,
            ParamDefault::Flag(false),
            "Interpolate the path to include all points forming the road geometry",
        ),
    ],
};
