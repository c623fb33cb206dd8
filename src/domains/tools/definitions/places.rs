//! Places API: autocomplete, details and search.

use crate::domains::tools::api::{
    ApiService, EndpointDescriptor, HeaderPolicy, ParamDefault, ParamKind, ParamSpec,
};

const LANGUAGE: ParamSpec = ParamSpec::defaulted(
    "language",
    ParamKind::String,
    ParamDefault::Text("en"),
    "Language of the returned results",
);

const REGION: ParamSpec = ParamSpec::defaulted(
    "region",
    ParamKind::String,
    ParamDefault::Text("en"),
    "Region bias as a ccTLD code",
);

const LOCATION_BIAS: ParamSpec = ParamSpec::optional(
    "location",
    ParamKind::String,
    "Point to bias results around, as 'lat,lng'",
);

const RADIUS: ParamSpec = ParamSpec::optional(
    "radius",
    ParamKind::Number,
    "Bias/search radius in meters",
);

const OPEN_NOW: ParamSpec = ParamSpec::optional(
    "opennow",
    ParamKind::Boolean,
    "Only return places open at query time",
);

const MIN_PRICE: ParamSpec = ParamSpec::optional(
    "minprice",
    ParamKind::Integer,
    "Minimum price level, 0 (cheapest) to 4",
);

const MAX_PRICE: ParamSpec = ParamSpec::optional(
    "maxprice",
    ParamKind::Integer,
    "Maximum price level, 0 (cheapest) to 4",
);

const PAGE_TOKEN: ParamSpec = ParamSpec::optional(
    "pagetoken",
    ParamKind::String,
    "Token from a previous response's next_page_token",
);

const SESSION_TOKEN: ParamSpec = ParamSpec::optional(
    "sessiontoken",
    ParamKind::String,
    "Session token grouping autocomplete and details calls for billing",
);

/// Place predictions for a partial text input.
pub static AUTOCOMPLETE_PLACE: EndpointDescriptor = EndpointDescriptor {
    name: "autocomplete_place",
    description: "Return place predictions for a partial search string, as the user types. \
         Use the returned place_id values with get_place_details.",
    service: ApiService::Maps,
    path: "/maps/api/place/autocomplete/json",
    headers: HeaderPolicy::AcceptJson,
    params: &[
        ParamSpec::required("input", ParamKind::String, "Text to complete"),
        LANGUAGE,
        REGION,
        LOCATION_BIAS,
        RADIUS,
        ParamSpec::optional(
            "types",
            ParamKind::String,
            "Restrict results to a place type collection, e.g. 'geocode' or 'establishment'",
        ),
        ParamSpec::optional(
            "components",
            ParamKind::String,
            "Component restriction, e.g. 'country:fr'",
        ),
        SESSION_TOKEN,
    ],
};

/// Query predictions (places and search terms) for a partial text input.
pub static QUERY_AUTOCOMPLETE: EndpointDescriptor = EndpointDescriptor {
    name: "query_autocomplete",
    description: "Return query predictions for text-based geographic searches, such as \
         'pizza near Paris'. Predictions may be places or search terms.",
    service: ApiService::Maps,
    path: "/maps/api/place/queryautocomplete/json",
    headers: HeaderPolicy::AcceptJson,
    params: &[
        ParamSpec::required("input", ParamKind::String, "Text to complete"),
        LANGUAGE,
        LOCATION_BIAS,
        RADIUS,
        ParamSpec::optional(
            "offset",
            ParamKind::Integer,
            "Character position in input after which to stop matching",
        ),
    ],
};

/// Full details for a place ID.
pub static GET_PLACE_DETAILS: EndpointDescriptor = EndpointDescriptor {
    name: "get_place_details",
    description: "Get detailed information about a place (address, phone number, opening \
         hours, rating, reviews...) from its place_id.",
    service: ApiService::Maps,
    path: "/maps/api/place/details/json",
    headers: HeaderPolicy::AcceptJson,
    params: &[
        ParamSpec::required("place_id", ParamKind::String, "Place identifier"),
        LANGUAGE,
        REGION,
        ParamSpec::optional(
            "fields",
            ParamKind::String,
            "Comma-separated list of fields to return, e.g. 'name,rating,formatted_address'",
        ),
        SESSION_TOKEN,
    ],
};

/// Places within an area around a location.
pub static NEARBY_SEARCH: EndpointDescriptor = EndpointDescriptor {
    name: "nearby_search",
    description: "Search for places within a specified area around a location, optionally \
         filtered by keyword, type, price level or opening status.",
    service: ApiService::Maps,
    path: "/maps/api/place/nearbysearch/json",
    headers: HeaderPolicy::AcceptJson,
    params: &[
        ParamSpec::required(
            "location",
            ParamKind::String,
            "Center of the search as 'lat,lng'",
        ),
        LANGUAGE,
        RADIUS,
        ParamSpec::optional(
            "keyword",
            ParamKind::String,
            "Term matched against all indexed content",
        ),
        ParamSpec::optional("type", ParamKind::String, "Restrict results to a place type"),
        ParamSpec::optional(
            "rankby",
            ParamKind::String,
            "Result ordering; 'distance' requires keyword or type and no radius",
        )
        .one_of(&["prominence", "distance"]),
        OPEN_NOW,
        MIN_PRICE,
        MAX_PRICE,
        PAGE_TOKEN,
    ],
};

/// Places matching a free-text query.
pub static TEXT_SEARCH: EndpointDescriptor = EndpointDescriptor {
    name: "text_search",
    description: "Search for places from a free-text query such as 'restaurants in Lyon' \
         or '123 Main Street'.",
    service: ApiService::Maps,
    path: "/maps/api/place/textsearch/json",
    headers: HeaderPolicy::AcceptJson,
    params: &[
        ParamSpec::required("query", ParamKind::String, "Text to search for"),
        LANGUAGE,
        REGION,
        LOCATION_BIAS,
        RADIUS,
        ParamSpec::optional("type", ParamKind::String, "Restrict results to a place type"),
        OPEN_NOW,
        MIN_PRICE,
        MAX_PRICE,
        PAGE_TOKEN,
    ],
};

/// A single place from a name, address or phone number.
pub static FIND_PLACE_FROM_TEXT: EndpointDescriptor = EndpointDescriptor {
    name: "find_place_from_text",
    description: "Find a place from a name, address or phone number. Returns the best \
         matching candidates.",
    service: ApiService::Maps,
    path: "/maps/api/place/findplacefromtext/json",
    headers: HeaderPolicy::AcceptJson,
    params: &[
        ParamSpec::required(
            "input",
            ParamKind::String,
            "Name, address or phone number (E.164 format) to look up",
        ),
        ParamSpec::required("inputtype", ParamKind::String, "Kind of input")
            .one_of(&["textquery", "phonenumber"]),
        LANGUAGE,
        ParamSpec::optional(
            "fields",
            ParamKind::String,
            "Comma-separated list of fields to return, e.g. 'place_id,name,geometry'",
        ),
        ParamSpec::optional(
            "locationbias",
            ParamKind::String,
            "Bias results: 'ipbias', 'point:lat,lng', 'circle:radius@lat,lng' or 'rectangle:south,west|north,east'",
        ),
    ],
};
