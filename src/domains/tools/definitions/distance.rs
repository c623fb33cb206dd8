//! Distance Matrix API.

use crate::domains::tools::api::{
    ApiService, EndpointDescriptor, HeaderPolicy, ParamDefault, ParamKind, ParamSpec,
};

/// Travel distance and time between sets of origins and destinations.
pub static DISTANCE_MATRIX: EndpointDescriptor = EndpointDescriptor {
    name: "distance_matrix",
    description: "Calculate travel distance and time between multiple origins and destinations \
         using the Google Maps Distance Matrix API. Supports driving, walking, bicycling and \
         transit, with optional traffic modelling for departure times.",
    service: ApiService::Maps,
    path: "/maps/api/distancematrix/json",
    headers: HeaderPolicy::AcceptJson,
    params: &[
        ParamSpec::required(
            "origins",
            ParamKind::String,
            "Starting points separated by '|': addresses, 'lat,lng' pairs or 'place_id:...'",
        ),
        ParamSpec::required(
            "destinations",
            ParamKind::String,
            "End points separated by '|', same formats as origins",
        ),
        ParamSpec::defaulted(
            "mode",
            ParamKind::String,
            ParamDefault::Text("driving"),
            "Travel mode",
        )
        .one_of(&["driving", "walking", "bicycling", "transit"]),
        ParamSpec::defaulted(
            "units",
            ParamKind::String,
            ParamDefault::Text("metric"),
            "Unit system for distance text",
        )
        .one_of(&["metric", "imperial"]),
        ParamSpec::defaulted(
            "language",
            ParamKind::String,
            ParamDefault::Text("en"),
            "Language of the returned results",
        ),
        ParamSpec::defaulted(
            "traffic_model",
            ParamKind::String,
            ParamDefault::Text("best_guess"),
            "Traffic assumptions used with departure_time",
        )
        .one_of(&["best_guess", "pessimistic", "optimistic"]),
        ParamSpec::optional(
            "avoid",
            ParamKind::String,
            "Features to avoid, separated by '|' (tolls, highways, ferries, indoor)",
        ),
        ParamSpec::optional(
            "departure_time",
            ParamKind::String,
            "Departure time: 'now' or seconds since epoch",
        ),
        ParamSpec::optional(
            "arrival_time",
            ParamKind::Integer,
            "Arrival time for transit, in seconds since epoch",
        ),
        ParamSpec::optional(
            "transit_mode",
            ParamKind::String,
            "Preferred transit modes separated by '|' (bus, subway, train, tram, rail)",
        ),
        ParamSpec::optional(
            "region",
            ParamKind::String,
            "Region bias as a ccTLD code",
        ),
    ],
};
