//! Weather API: daily and hourly forecasts, hourly history, current conditions.
//!
//! The Weather API expects the coordinates as `location.latitude` and
//! `location.longitude`.

use crate::domains::tools::api::{
    ApiService, EndpointDescriptor, HeaderPolicy, ParamDefault, ParamKind, ParamSpec,
};

const LATITUDE: ParamSpec =
    ParamSpec::required("latitude", ParamKind::Number, "Latitude in degrees")
        .sent_as("location.latitude");

const LONGITUDE: ParamSpec =
    ParamSpec::required("longitude", ParamKind::Number, "Longitude in degrees")
        .sent_as("location.longitude");

const UNITS_SYSTEM: ParamSpec = ParamSpec::defaulted(
    "unitsSystem",
    ParamKind::String,
    ParamDefault::Text("METRIC"),
    "Unit system of the returned values",
)
.one_of(&["METRIC", "IMPERIAL"]);

const LANGUAGE_CODE: ParamSpec = ParamSpec::defaulted(
    "languageCode",
    ParamKind::String,
    ParamDefault::Text("en"),
    "Language of textual descriptions",
);

const PAGE_TOKEN: ParamSpec = ParamSpec::optional(
    "pageToken",
    ParamKind::String,
    "Token from a previous response's nextPageToken",
);

/// Daily forecast.
pub static FORECAST_DAYS: EndpointDescriptor = EndpointDescriptor {
    name: "forecast_days",
    description: "Get the daily weather forecast (up to 10 days) for a location: \
         temperatures, precipitation, wind and daytime/nighttime conditions.",
    service: ApiService::Weather,
    path: "/v1/forecast/days:lookup",
    headers: HeaderPolicy::ContentTypeJson,
    params: &[
        LATITUDE,
        LONGITUDE,
        ParamSpec::defaulted(
            "pageSize",
            ParamKind::Integer,
            ParamDefault::Integer(5),
            "Number of days per page",
        ),
        ParamSpec::defaulted(
            "days",
            ParamKind::Integer,
            ParamDefault::Integer(10),
            "Total number of forecast days, at most 10",
        ),
        LANGUAGE_CODE,
        ParamSpec::optional(
            "unitsSystem",
            ParamKind::String,
            "Unit system of the returned values",
        )
        .one_of(&["METRIC", "IMPERIAL"]),
        PAGE_TOKEN,
    ],
};

/// Hourly forecast.
pub static FORECAST_HOURS: EndpointDescriptor = EndpointDescriptor {
    name: "forecast_hours",
    description: "Get the hourly weather forecast (up to 240 hours) for a location.",
    service: ApiService::Weather,
    path: "/v1/forecast/hours:lookup",
    headers: HeaderPolicy::ContentTypeJson,
    params: &[
        LATITUDE,
        LONGITUDE,
        UNITS_SYSTEM,
        ParamSpec::defaulted(
            "pageSize",
            ParamKind::Integer,
            ParamDefault::Integer(24),
            "Number of hours per page",
        ),
        ParamSpec::defaulted(
            "hours",
            ParamKind::Integer,
            ParamDefault::Integer(240),
            "Total number of forecast hours, at most 240",
        ),
        LANGUAGE_CODE,
        PAGE_TOKEN,
    ],
};

/// Hourly history.
pub static GET_HOURLY_WEATHER: EndpointDescriptor = EndpointDescriptor {
    name: "get_hourly_weather",
    description: "Get the observed hourly weather history (up to the last 24 hours) for a \
         location.",
    service: ApiService::Weather,
    path: "/v1/history/hours:lookup",
    headers: HeaderPolicy::ContentTypeJson,
    params: &[
        LATITUDE,
        LONGITUDE,
        UNITS_SYSTEM,
        ParamSpec::defaulted(
            "pageSize",
            ParamKind::Integer,
            ParamDefault::Integer(24),
            "Number of hours per page",
        ),
        ParamSpec::defaulted(
            "hours",
            ParamKind::Integer,
            ParamDefault::Integer(24),
            "Number of past hours, at most 24",
        ),
        LANGUAGE_CODE,
        PAGE_TOKEN,
    ],
};

/// Current conditions.
pub static CURRENT_CONDITIONS: EndpointDescriptor = EndpointDescriptor {
    name: "current_conditions",
    description: "Get the current weather conditions for a location: temperature, feels-like, \
         humidity, wind, precipitation and UV index.",
    service: ApiService::Weather,
    path: "/v1/currentConditions:lookup",
    headers: HeaderPolicy::ContentTypeJson,
    params: &[LATITUDE, LONGITUDE, UNITS_SYSTEM, LANGUAGE_CODE],
};
